//! Deployed applications.

use resource_framework::{FrameworkError, Link};

use super::component::{ApplicationComponent, PlatformComponent};
use super::template::AssemblyTemplate;

camp_resource! {
    /// A deployed application, instantiated from at most one assembly template.
    Assembly = "Assembly" {
        assembly_template: Option<Link<AssemblyTemplate>>,
        application_components: Vec<Link<ApplicationComponent>>,
        platform_components: Vec<Link<PlatformComponent>>,
    }
}

impl Assembly {
    pub fn assembly_template(&self) -> Option<&Link<AssemblyTemplate>> {
        self.assembly_template.as_ref()
    }

    pub fn application_components(&self) -> &[Link<ApplicationComponent>] {
        &self.application_components
    }

    pub fn platform_components(&self) -> &[Link<PlatformComponent>] {
        &self.platform_components
    }
}

impl AssemblyBuilder {
    /// Replaces any template set earlier.
    pub fn assembly_template(&self, link: Link<AssemblyTemplate>) -> Result<&Self, FrameworkError> {
        self.inner.with_instance(|a| a.assembly_template = Some(link))?;
        Ok(self)
    }

    pub fn add_application_component(
        &self,
        link: Link<ApplicationComponent>,
    ) -> Result<&Self, FrameworkError> {
        self.inner.with_instance(|a| a.application_components.push(link))?;
        Ok(self)
    }

    pub fn add_platform_component(&self, link: Link<PlatformComponent>) -> Result<&Self, FrameworkError> {
        self.inner.with_instance(|a| a.platform_components.push(link))?;
        Ok(self)
    }
}
