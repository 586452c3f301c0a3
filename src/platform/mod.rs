//! # The Platform
//!
//! [`CampPlatform`] is the registry the REST layer reads from: the root summary plus one
//! ordered [`ResourceLookup`] per kind. [`camp_routes`] is the matching URI layout.
//!
//! Registration and document assembly may happen on different threads; each lookup takes
//! its own lock, so an assembly sees every collection as of some instant but not
//! necessarily the same instant across collections.

use std::sync::Arc;

use resource_framework::{BuildResource, Resource, ResourceLookup, RouteTable};
use tracing::info;

use crate::config::PlatformConfig;
use crate::error::CampError;
use crate::model::{
    ApplicationComponent, ApplicationComponentTemplate, Assembly, AssemblyTemplate,
    PlatformComponent, PlatformComponentTemplate, PlatformRootSummary,
};

/// Endpoint name of the API documentation.
pub const APIDOC_ENDPOINT: &str = "apidoc";

/// The URI layout of a CAMP platform mounted at `base_path`.
pub fn camp_routes(base_path: &str) -> RouteTable {
    RouteTable::new(base_path)
        .singleton(PlatformRootSummary::CAMP_TYPE, "")
        .collection(PlatformComponentTemplate::CAMP_TYPE, "platform-component-templates")
        .collection(ApplicationComponentTemplate::CAMP_TYPE, "application-component-templates")
        .collection(AssemblyTemplate::CAMP_TYPE, "assembly-templates")
        .collection(PlatformComponent::CAMP_TYPE, "platform-components")
        .collection(ApplicationComponent::CAMP_TYPE, "application-components")
        .collection(Assembly::CAMP_TYPE, "assemblies")
        .endpoint(APIDOC_ENDPOINT, "/apidoc")
}

pub struct CampPlatform {
    root: Arc<PlatformRootSummary>,
    platform_component_templates: ResourceLookup<PlatformComponentTemplate>,
    application_component_templates: ResourceLookup<ApplicationComponentTemplate>,
    assembly_templates: ResourceLookup<AssemblyTemplate>,
    platform_components: ResourceLookup<PlatformComponent>,
    application_components: ResourceLookup<ApplicationComponent>,
    assemblies: ResourceLookup<Assembly>,
}

impl CampPlatform {
    pub fn new(root: Arc<PlatformRootSummary>) -> Self {
        Self {
            root,
            platform_component_templates: ResourceLookup::new(),
            application_component_templates: ResourceLookup::new(),
            assembly_templates: ResourceLookup::new(),
            platform_components: ResourceLookup::new(),
            application_components: ResourceLookup::new(),
            assemblies: ResourceLookup::new(),
        }
    }

    /// An empty platform whose root is named and described per `config`.
    pub fn from_config(config: &PlatformConfig) -> Result<Self, CampError> {
        let builder = PlatformRootSummary::builder();
        builder.name(config.root_name.as_str())?;
        if let Some(description) = &config.root_description {
            builder.description(description.as_str())?;
        }
        let root = builder.build()?;
        info!(id = root.id(), name = ?root.name(), "Platform created");
        Ok(Self::new(root))
    }

    pub fn root(&self) -> &Arc<PlatformRootSummary> {
        &self.root
    }

    pub fn platform_component_templates(&self) -> &ResourceLookup<PlatformComponentTemplate> {
        &self.platform_component_templates
    }

    pub fn application_component_templates(&self) -> &ResourceLookup<ApplicationComponentTemplate> {
        &self.application_component_templates
    }

    pub fn assembly_templates(&self) -> &ResourceLookup<AssemblyTemplate> {
        &self.assembly_templates
    }

    pub fn platform_components(&self) -> &ResourceLookup<PlatformComponent> {
        &self.platform_components
    }

    pub fn application_components(&self) -> &ResourceLookup<ApplicationComponent> {
        &self.application_components
    }

    pub fn assemblies(&self) -> &ResourceLookup<Assembly> {
        &self.assemblies
    }

    /// Registers `resource` in its kind's lookup, replacing any entry with the same id.
    pub fn register<T: Registered>(&self, resource: Arc<T>) -> Option<Arc<T>> {
        T::lookup(self).add(resource)
    }
}

/// A kind the platform keeps a lookup for.
pub trait Registered: Resource {
    fn lookup(platform: &CampPlatform) -> &ResourceLookup<Self>;
}

macro_rules! registered {
    ($($Kind:ident => $lookup:ident),* $(,)?) => {
        $(
            impl Registered for $Kind {
                fn lookup(platform: &CampPlatform) -> &ResourceLookup<Self> {
                    &platform.$lookup
                }
            }
        )*
    };
}

registered! {
    PlatformComponentTemplate => platform_component_templates,
    ApplicationComponentTemplate => application_component_templates,
    AssemblyTemplate => assembly_templates,
    PlatformComponent => platform_components,
    ApplicationComponent => application_components,
    Assembly => assemblies,
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_framework::UriResolver;

    #[test]
    fn test_routes() {
        let routes = camp_routes("/camp/v11");
        assert_eq!(routes.resolve("Platform", "ignored").unwrap(), "/camp/v11");
        assert_eq!(
            routes.resolve("AssemblyTemplate", "t1").unwrap(),
            "/camp/v11/assembly-templates/t1"
        );
        assert_eq!(routes.resolve_endpoint(APIDOC_ENDPOINT).unwrap(), "/camp/v11/apidoc");
        assert!(routes.resolve("Resource", "r1").is_err());
    }

    #[test]
    fn test_register_routes_to_kind_lookup() {
        let platform = CampPlatform::from_config(&PlatformConfig::default()).unwrap();
        let war = ApplicationComponentTemplate::builder()
            .id("war")
            .unwrap()
            .build()
            .unwrap();

        assert!(platform.register(war).is_none());
        assert_eq!(platform.application_component_templates().len(), 1);
        assert!(platform.platform_component_templates().is_empty());
        assert_eq!(platform.root().name(), Some("Brooklyn CAMP server"));
    }
}
