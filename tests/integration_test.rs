use std::sync::Arc;

use camp_platform::model::{
    ApplicationComponent, ApplicationComponentTemplate, Assembly, AssemblyTemplate,
    PlatformComponent, PlatformComponentTemplate, PlatformRootSummary,
};
use camp_platform::platform::camp_routes;
use camp_platform::rest::CAMP_URI_PATH;
use camp_platform::{CampError, CampPlatform, CampRestApi, PlatformConfig};
use resource_framework::mock::SequentialIdentifiers;
use resource_framework::{BuildResource, FrameworkError, Link, Resource, RouteTable};

const ROOT_FIELDS: [&str; 7] = [
    "platformComponentTemplates",
    "applicationComponentTemplates",
    "assemblyTemplates",
    "platformComponents",
    "applicationComponents",
    "assemblies",
    "apidoc",
];

fn empty_platform() -> Arc<CampPlatform> {
    Arc::new(CampPlatform::from_config(&PlatformConfig::default()).expect("Failed to create platform"))
}

/// An empty platform yields a root document with six empty sequences and the apidoc link.
#[test]
fn test_empty_platform_document() {
    let root = PlatformRootSummary::builder_with(Arc::new(SequentialIdentifiers::new("root")))
        .name("Test platform")
        .unwrap()
        .build()
        .unwrap();
    let api = CampRestApi::new(Arc::new(CampPlatform::new(root)), CAMP_URI_PATH);
    let dto = api.platform().expect("Failed to assemble platform");

    assert_eq!(dto.id(), "root0001");
    assert_eq!(dto.resource().name.as_deref(), Some("Test platform"));
    assert_eq!(dto.resource().uri, "/camp/v11");
    assert_eq!(dto.resource().resource_type, "Platform");
    assert_eq!(dto.field_names().collect::<Vec<_>>(), ROOT_FIELDS);
    for field in &ROOT_FIELDS[..6] {
        assert_eq!(dto.links(field), Some(&[][..]), "{field} should be empty");
    }

    let apidoc = dto.link("apidoc").expect("apidoc link missing");
    assert_eq!(apidoc.href, "/camp/v11/apidoc");
    assert_eq!(apidoc.target_name.as_deref(), Some("API documentation"));
}

/// Serialized field order follows the declared order, every time.
#[test]
fn test_json_field_order_is_stable() {
    let api = CampRestApi::new(empty_platform(), CAMP_URI_PATH);
    let first = CampRestApi::to_json(&api.platform().unwrap()).unwrap();
    let second = CampRestApi::to_json(&api.platform().unwrap()).unwrap();
    assert_eq!(first, second);

    let positions: Vec<_> = ROOT_FIELDS
        .iter()
        .map(|field| first.find(&format!("\"{field}\"")).expect("field missing from JSON"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "fields out of order: {first}");
}

/// Registered resources appear in registration order with their names.
#[test]
fn test_registered_templates_are_linked() {
    let platform = empty_platform();
    let ids = Arc::new(SequentialIdentifiers::new("pct"));
    for name in ["MySQL", "Redis"] {
        let template = PlatformComponentTemplate::builder_with(ids.clone())
            .name(name)
            .unwrap()
            .build()
            .unwrap();
        platform.register(template);
    }

    let api = CampRestApi::new(platform, CAMP_URI_PATH);
    let dto = api.platform().unwrap();
    let links = dto.links("platformComponentTemplates").unwrap();

    assert_eq!(links.len(), 2);
    assert_eq!(links[0].href, "/camp/v11/platform-component-templates/pct0001");
    assert_eq!(links[0].target_name.as_deref(), Some("MySQL"));
    assert_eq!(links[1].href, "/camp/v11/platform-component-templates/pct0002");

    let template = api.platform_component_template("pct0002").unwrap();
    assert_eq!(template.resource().name.as_deref(), Some("Redis"));
    assert_eq!(template.field_names().count(), 0);
}

/// With five relationship kinds populated and only four routed, the whole root document fails.
#[test]
fn test_missing_route_fails_whole_document() {
    let platform = empty_platform();
    platform.register(PlatformComponentTemplate::builder().id("pct").unwrap().build().unwrap());
    platform.register(ApplicationComponentTemplate::builder().id("act").unwrap().build().unwrap());
    platform.register(AssemblyTemplate::builder().id("at").unwrap().build().unwrap());
    platform.register(PlatformComponent::builder().id("pc").unwrap().build().unwrap());
    platform.register(ApplicationComponent::builder().id("ac").unwrap().build().unwrap());

    let routes = RouteTable::new(CAMP_URI_PATH)
        .singleton(PlatformRootSummary::CAMP_TYPE, "")
        .collection(PlatformComponentTemplate::CAMP_TYPE, "platform-component-templates")
        .collection(ApplicationComponentTemplate::CAMP_TYPE, "application-component-templates")
        .collection(AssemblyTemplate::CAMP_TYPE, "assembly-templates")
        .collection(ApplicationComponent::CAMP_TYPE, "application-components")
        .endpoint("apidoc", "/apidoc");
    let api = CampRestApi::with_resolver(platform, Arc::new(routes));

    assert_eq!(
        api.platform().unwrap_err(),
        CampError::Framework(FrameworkError::UnresolvableLink {
            target: "PlatformComponent".into()
        })
    );

    // the routed kinds still render on their own
    assert_eq!(
        api.assembly_template("at").unwrap().resource().uri,
        "/camp/v11/assembly-templates/at"
    );
}

/// Without the apidoc endpoint, even an empty platform cannot be rendered.
#[test]
fn test_missing_apidoc_endpoint_fails() {
    let routes = RouteTable::new(CAMP_URI_PATH).singleton(PlatformRootSummary::CAMP_TYPE, "");
    let api = CampRestApi::with_resolver(empty_platform(), Arc::new(routes));

    assert!(matches!(
        api.platform(),
        Err(CampError::Framework(FrameworkError::UnresolvableLink { .. }))
    ));
}

/// Kinds stamp their CAMP type unless the caller overrides it; routing still follows the kind.
#[test]
fn test_type_stamping_and_override() {
    let stamped = PlatformComponentTemplate::builder().build().unwrap();
    assert_eq!(stamped.resource_type(), "PlatformComponentTemplate");

    let platform = empty_platform();
    let overridden = PlatformComponentTemplate::builder()
        .id("custom")
        .unwrap()
        .resource_type("Other")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(overridden.resource_type(), "Other");
    platform.register(overridden);

    let api = CampRestApi::new(platform, CAMP_URI_PATH);
    let dto = api.platform_component_template("custom").unwrap();
    assert_eq!(dto.resource().resource_type, "Other");
    assert_eq!(dto.resource().uri, "/camp/v11/platform-component-templates/custom");
}

/// Unknown ids map to NotFound naming the kind.
#[test]
fn test_unknown_ids_are_not_found() {
    let api = CampRestApi::new(empty_platform(), CAMP_URI_PATH);

    let err = api.application_component_template("nope").unwrap_err();
    assert_eq!(
        err,
        CampError::NotFound {
            kind: "ApplicationComponentTemplate",
            id: "nope".into()
        }
    );
    assert_eq!(err.to_string(), "ApplicationComponentTemplate not found: nope");
    assert!(api.platform_component("nope").is_err());
    assert!(api.application_component("nope").is_err());
}

/// An assembly template document links its component templates; the assembly links back.
#[test]
fn test_template_and_assembly_documents() {
    let platform = empty_platform();
    let war = ApplicationComponentTemplate::builder()
        .id("war")
        .unwrap()
        .name("MockWarComponent")
        .unwrap()
        .description("Mock WAR")
        .unwrap()
        .build()
        .unwrap();
    let template = AssemblyTemplate::builder()
        .id("webapp")
        .unwrap()
        .add_application_component_template(Link::of(war.as_ref()))
        .unwrap()
        .build()
        .unwrap();
    let assembly = Assembly::builder()
        .id("webapp-1")
        .unwrap()
        .assembly_template(Link::of(template.as_ref()))
        .unwrap()
        .build()
        .unwrap();
    platform.register(war);
    platform.register(template);
    platform.register(assembly);

    let api = CampRestApi::new(platform, "/camp/v11/");
    let template = api.assembly_template("webapp").unwrap();
    let components = template.links("applicationComponentTemplates").unwrap();
    assert_eq!(components[0].href, "/camp/v11/application-component-templates/war");
    assert_eq!(components[0].target_name.as_deref(), Some("MockWarComponent"));
    assert_eq!(template.links("platformComponentTemplates"), Some(&[][..]));

    let assembly = api.assembly("webapp-1").unwrap();
    assert_eq!(
        assembly.links("assemblyTemplate").unwrap()[0].href,
        "/camp/v11/assembly-templates/webapp"
    );

    let json: serde_json::Value =
        serde_json::from_str(&CampRestApi::to_json(&assembly).unwrap()).unwrap();
    assert_eq!(json["type"], "Assembly");
    assert_eq!(json["applicationComponents"], serde_json::json!([]));
}

/// The base path comes from configuration.
#[test]
fn test_configured_base_path() {
    let config = PlatformConfig {
        base_path: "/camp/v12".into(),
        ..PlatformConfig::default()
    };
    let platform = Arc::new(CampPlatform::from_config(&config).unwrap());
    let api = CampRestApi::new(platform, &config.base_path);

    let dto = api.platform().unwrap();
    assert_eq!(dto.resource().uri, "/camp/v12");
    assert_eq!(dto.link("apidoc").unwrap().href, "/camp/v12/apidoc");
    assert_eq!(camp_routes(&config.base_path).base_path(), "/camp/v12");
}
