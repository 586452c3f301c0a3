//! Demo server: builds a small platform and serves a burst of concurrent requests.

use std::sync::Arc;

use camp_platform::model::{
    ApplicationComponentTemplate, Assembly, AssemblyTemplate, PlatformComponentTemplate,
};
use camp_platform::{CampError, CampPlatform, CampRestApi, PlatformConfig};
use resource_framework::tracing::setup_tracing;
use resource_framework::{BuildResource, Link, Resource};
use tracing::{error, info, Instrument};

fn seed(platform: &CampPlatform) -> Result<(String, String), CampError> {
    let war = ApplicationComponentTemplate::builder()
        .name("MockWarComponent")?
        .description("Mock WAR")?
        .build()?;
    let db = PlatformComponentTemplate::builder()
        .name("MySQL")?
        .tags(["database", "sql"])?
        .build()?;

    let template = AssemblyTemplate::builder()
        .name("Web app with database")?
        .add_application_component_template(Link::of(war.as_ref()))?
        .add_platform_component_template(Link::of(db.as_ref()))?
        .build()?;
    let assembly = Assembly::builder()
        .name("webapp-prod")?
        .assembly_template(Link::of(template.as_ref()))?
        .build()?;

    let ids = (template.id().to_string(), assembly.id().to_string());
    platform.register(war);
    platform.register(db);
    platform.register(template);
    platform.register(assembly);
    Ok(ids)
}

#[tokio::main]
async fn main() -> Result<(), CampError> {
    setup_tracing();

    let config = PlatformConfig::from_env()?;
    info!(base_path = %config.base_path, "Starting CAMP platform");

    let platform = Arc::new(CampPlatform::from_config(&config)?);
    let (template_id, assembly_id) = seed(&platform)?;
    let api = CampRestApi::new(platform, &config.base_path);

    let mut handles = Vec::new();
    for request in 0..4 {
        let api = api.clone();
        let (template_id, assembly_id) = (template_id.clone(), assembly_id.clone());
        let span = tracing::info_span!("request", request);
        handles.push(tokio::spawn(
            async move {
                let dto = match request % 3 {
                    0 => api.platform(),
                    1 => api.assembly_template(&template_id),
                    _ => api.assembly(&assembly_id),
                }?;
                CampRestApi::to_json(&dto)
            }
            .instrument(span),
        ));
    }

    for handle in handles {
        match handle.await {
            Ok(Ok(json)) => println!("{json}"),
            Ok(Err(e)) => error!(error = %e, "Request failed"),
            Err(e) => error!(error = %e, "Request task panicked"),
        }
    }

    match api.assembly("no-such-assembly") {
        Err(CampError::NotFound { kind, id }) => info!(kind, id = %id, "Unknown id rejected"),
        other => error!(result = ?other.map(|dto| dto.id().to_string()), "Expected NotFound"),
    }

    info!("Demo completed");
    Ok(())
}
