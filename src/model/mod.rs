//! The CAMP resource kinds.
//!
//! Each kind is an immutable [`Resource`](resource_framework::Resource) with a fixed CAMP
//! type and a one-shot builder. Relationships to other kinds are stored as typed
//! [`Link`](resource_framework::Link)s, so a field declared as
//! `Link<AssemblyTemplate>` can only ever point at an assembly template.

/// Declares a resource kind: the struct, its `Resource` impl, and a `{Kind}Builder`
/// wrapping [`ResourceBuilder`](resource_framework::ResourceBuilder).
///
/// Extra fields start from `Default::default()` and are set through kind-specific builder
/// methods written next to the invocation.
macro_rules! camp_resource {
    (
        $(#[$meta:meta])*
        $Kind:ident = $camp_type:literal {
            $( $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        paste::paste! {
            $(#[$meta])*
            #[derive(Debug)]
            pub struct $Kind {
                core: ::resource_framework::ResourceCore,
                $( $field: $ty, )*
            }

            impl ::resource_framework::Resource for $Kind {
                const CAMP_TYPE: &'static str = $camp_type;

                fn from_core(core: ::resource_framework::ResourceCore) -> Self {
                    Self {
                        core,
                        $( $field: Default::default(), )*
                    }
                }

                fn core(&self) -> &::resource_framework::ResourceCore {
                    &self.core
                }

                fn core_mut(
                    &mut self,
                    _: ::resource_framework::BuilderKey,
                ) -> &mut ::resource_framework::ResourceCore {
                    &mut self.core
                }
            }

            impl $Kind {
                pub fn builder() -> [<$Kind Builder>] {
                    [<$Kind Builder>]::default()
                }

                /// Builder drawing its default id from `ids`.
                pub fn builder_with(
                    ids: ::std::sync::Arc<dyn ::resource_framework::IdentifierSource>,
                ) -> [<$Kind Builder>] {
                    [<$Kind Builder>] {
                        inner: ::resource_framework::ResourceBuilder::with_identifiers(ids),
                    }
                }
            }

            #[doc = "One-shot builder for [`" $Kind "`]."]
            #[derive(Debug, Default)]
            pub struct [<$Kind Builder>] {
                inner: ::resource_framework::ResourceBuilder<$Kind>,
            }

            impl ::resource_framework::BuildResource for [<$Kind Builder>] {
                type Resource = $Kind;

                fn inner(&self) -> &::resource_framework::ResourceBuilder<$Kind> {
                    &self.inner
                }
            }
        }
    };
}

pub mod assembly;
pub mod component;
pub mod platform_root;
pub mod template;

pub use assembly::{Assembly, AssemblyBuilder};
pub use component::{
    ApplicationComponent, ApplicationComponentBuilder, PlatformComponent, PlatformComponentBuilder,
};
pub use platform_root::{PlatformRootSummary, PlatformRootSummaryBuilder};
pub use template::{
    ApplicationComponentTemplate, ApplicationComponentTemplateBuilder, AssemblyTemplate,
    AssemblyTemplateBuilder, PlatformComponentTemplate, PlatformComponentTemplateBuilder,
};
