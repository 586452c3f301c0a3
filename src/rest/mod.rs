//! # REST Facade
//!
//! Read-only entry points mirroring the platform's URI layout: the root at
//! [`CAMP_URI_PATH`] and one getter per kind below it. Each call fetches a resource and
//! returns its assembled [`Dto`]; rendering to JSON is a separate step so callers can pick
//! the representation.

use std::sync::Arc;

use resource_framework::{Dto, UriResolver};
use tracing::instrument;

use crate::dto::{Adaptable, DtoFactory};
use crate::error::CampError;
use crate::model::{
    ApplicationComponent, ApplicationComponentTemplate, Assembly, AssemblyTemplate,
    PlatformComponent, PlatformComponentTemplate,
};
use crate::platform::{camp_routes, CampPlatform, Registered};

/// Versioned mount point of the CAMP API.
pub const CAMP_URI_PATH: &str = "/camp/v11";

#[derive(Clone)]
pub struct CampRestApi {
    dtos: DtoFactory,
}

impl CampRestApi {
    /// Serves `platform` with the routes mounted at `base_path`.
    pub fn new(platform: Arc<CampPlatform>, base_path: &str) -> Self {
        Self::with_resolver(platform, Arc::new(camp_routes(base_path)))
    }

    pub fn with_resolver(platform: Arc<CampPlatform>, uris: Arc<dyn UriResolver>) -> Self {
        Self {
            dtos: DtoFactory::new(platform, uris),
        }
    }

    pub fn platform(&self) -> Result<Dto, CampError> {
        let root = self.dtos.platform().root();
        self.dtos.adapt(root.as_ref())
    }

    pub fn platform_component_template(&self, id: &str) -> Result<Dto, CampError> {
        self.get::<PlatformComponentTemplate>(id)
    }

    pub fn application_component_template(&self, id: &str) -> Result<Dto, CampError> {
        self.get::<ApplicationComponentTemplate>(id)
    }

    pub fn assembly_template(&self, id: &str) -> Result<Dto, CampError> {
        self.get::<AssemblyTemplate>(id)
    }

    pub fn platform_component(&self, id: &str) -> Result<Dto, CampError> {
        self.get::<PlatformComponent>(id)
    }

    pub fn application_component(&self, id: &str) -> Result<Dto, CampError> {
        self.get::<ApplicationComponent>(id)
    }

    pub fn assembly(&self, id: &str) -> Result<Dto, CampError> {
        self.get::<Assembly>(id)
    }

    #[instrument(skip(self), fields(resource_type = T::CAMP_TYPE), err(level = "debug"))]
    pub fn get<T: Registered + Adaptable>(&self, id: &str) -> Result<Dto, CampError> {
        let resource = T::lookup(self.dtos.platform())
            .get(id)
            .ok_or_else(|| CampError::NotFound {
                kind: T::CAMP_TYPE,
                id: id.to_string(),
            })?;
        self.dtos.adapt(resource.as_ref())
    }

    pub fn to_json(dto: &Dto) -> Result<String, CampError> {
        Ok(serde_json::to_string_pretty(dto)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlatformConfig;

    #[test]
    fn test_unknown_id_is_not_found() {
        let platform = CampPlatform::from_config(&PlatformConfig::default()).unwrap();
        let api = CampRestApi::new(Arc::new(platform), CAMP_URI_PATH);

        assert_eq!(
            api.assembly("missing").unwrap_err(),
            CampError::NotFound {
                kind: "Assembly",
                id: "missing".into()
            }
        );
    }

    #[test]
    fn test_platform_uri_is_mount_point() {
        let platform = CampPlatform::from_config(&PlatformConfig::default()).unwrap();
        let api = CampRestApi::new(Arc::new(platform), CAMP_URI_PATH);

        let dto = api.platform().unwrap();
        assert_eq!(dto.resource().uri, CAMP_URI_PATH);
        assert_eq!(dto.resource().resource_type, "Platform");
    }
}
