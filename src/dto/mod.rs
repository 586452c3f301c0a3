//! # Platform Documents
//!
//! Every kind declares its relationship map once, as a static [`DtoAssembler`] reading
//! from the [`CampPlatform`]. [`DtoFactory`] pairs those maps with the platform's URI
//! context and turns resources into [`Dto`]s.
//!
//! The platform root's document, for example, always carries these link fields in this
//! order:
//!
//! | field | target |
//! |---|---|
//! | `platformComponentTemplates` | every registered platform component template |
//! | `applicationComponentTemplates` | every registered application component template |
//! | `assemblyTemplates` | every registered assembly template |
//! | `platformComponents` | every registered platform component |
//! | `applicationComponents` | every registered application component |
//! | `assemblies` | every registered assembly |
//! | `apidoc` | the API documentation (a single link, not a sequence) |

use std::sync::{Arc, OnceLock};

use resource_framework::{Dto, DtoAssembler, Resource, UriResolver};

use crate::error::CampError;
use crate::model::{
    ApplicationComponent, ApplicationComponentTemplate, Assembly, AssemblyTemplate,
    PlatformComponent, PlatformComponentTemplate, PlatformRootSummary,
};
use crate::platform::{CampPlatform, APIDOC_ENDPOINT};

/// A kind with a declared relationship map.
pub trait Adaptable: Resource {
    fn assembler() -> &'static DtoAssembler<Self, CampPlatform>;
}

/// Implements [`Adaptable`] with the assembler built on first use and shared afterwards.
macro_rules! adaptable {
    ($Kind:ty, $assembler:ident => $fields:expr) => {
        impl Adaptable for $Kind {
            fn assembler() -> &'static DtoAssembler<Self, CampPlatform> {
                static ASSEMBLER: OnceLock<DtoAssembler<$Kind, CampPlatform>> = OnceLock::new();
                ASSEMBLER.get_or_init(|| {
                    let $assembler = DtoAssembler::<$Kind, CampPlatform>::new();
                    $fields
                })
            }
        }
    };
}

adaptable!(PlatformRootSummary, assembler => {
    assembler
        .many("platformComponentTemplates", |_, p: &CampPlatform| {
            p.platform_component_templates().links()
        })
        .many("applicationComponentTemplates", |_, p: &CampPlatform| {
            p.application_component_templates().links()
        })
        .many("assemblyTemplates", |_, p: &CampPlatform| p.assembly_templates().links())
        .many("platformComponents", |_, p: &CampPlatform| p.platform_components().links())
        .many("applicationComponents", |_, p: &CampPlatform| {
            p.application_components().links()
        })
        .many("assemblies", |_, p: &CampPlatform| p.assemblies().links())
        .endpoint("apidoc", APIDOC_ENDPOINT, "API documentation")
});

adaptable!(PlatformComponentTemplate, assembler => assembler);

adaptable!(ApplicationComponentTemplate, assembler => assembler);

adaptable!(AssemblyTemplate, assembler => {
    assembler
        .many("applicationComponentTemplates", |t: &AssemblyTemplate, _| {
            t.application_component_templates().to_vec()
        })
        .many("platformComponentTemplates", |t: &AssemblyTemplate, _| {
            t.platform_component_templates().to_vec()
        })
});

adaptable!(PlatformComponent, assembler => {
    assembler
        .external("externalManagementResource", |c: &PlatformComponent| {
            c.external_management_uri().map(str::to_string)
        })
        .many("applicationComponents", |c: &PlatformComponent, _| {
            c.application_components().to_vec()
        })
        .many("platformComponents", |c: &PlatformComponent, _| {
            c.platform_components().to_vec()
        })
});

adaptable!(ApplicationComponent, assembler => {
    assembler
        .many("applicationComponents", |c: &ApplicationComponent, _| {
            c.application_components().to_vec()
        })
        .many("platformComponents", |c: &ApplicationComponent, _| {
            c.platform_components().to_vec()
        })
});

adaptable!(Assembly, assembler => {
    assembler
        .single("assemblyTemplate", |a: &Assembly, _| a.assembly_template().cloned())
        .many("applicationComponents", |a: &Assembly, _| {
            a.application_components().to_vec()
        })
        .many("platformComponents", |a: &Assembly, _| a.platform_components().to_vec())
});

/// Adapts resources of any kind against one platform and one URI context.
#[derive(Clone)]
pub struct DtoFactory {
    platform: Arc<CampPlatform>,
    uris: Arc<dyn UriResolver>,
}

impl DtoFactory {
    pub fn new(platform: Arc<CampPlatform>, uris: Arc<dyn UriResolver>) -> Self {
        Self { platform, uris }
    }

    pub fn platform(&self) -> &CampPlatform {
        &self.platform
    }

    pub fn adapt<T: Adaptable>(&self, resource: &T) -> Result<Dto, CampError> {
        Ok(T::assembler().assemble(resource, &self.platform, self.uris.as_ref())?)
    }
}
