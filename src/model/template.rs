//! Templates: the deployable descriptions a platform offers.

use resource_framework::{FrameworkError, Link};

camp_resource! {
    /// A platform-provided service that application components can bind to.
    PlatformComponentTemplate = "PlatformComponentTemplate" {}
}

camp_resource! {
    /// A deployable artifact type, such as a WAR.
    ApplicationComponentTemplate = "ApplicationComponentTemplate" {}
}

camp_resource! {
    /// A blueprint grouping component templates into one deployable unit.
    AssemblyTemplate = "AssemblyTemplate" {
        application_component_templates: Vec<Link<ApplicationComponentTemplate>>,
        platform_component_templates: Vec<Link<PlatformComponentTemplate>>,
    }
}

impl AssemblyTemplate {
    pub fn application_component_templates(&self) -> &[Link<ApplicationComponentTemplate>] {
        &self.application_component_templates
    }

    pub fn platform_component_templates(&self) -> &[Link<PlatformComponentTemplate>] {
        &self.platform_component_templates
    }
}

impl AssemblyTemplateBuilder {
    pub fn add_application_component_template(
        &self,
        link: Link<ApplicationComponentTemplate>,
    ) -> Result<&Self, FrameworkError> {
        self.inner
            .with_instance(|t| t.application_component_templates.push(link))?;
        Ok(self)
    }

    pub fn add_platform_component_template(
        &self,
        link: Link<PlatformComponentTemplate>,
    ) -> Result<&Self, FrameworkError> {
        self.inner
            .with_instance(|t| t.platform_component_templates.push(link))?;
        Ok(self)
    }
}
