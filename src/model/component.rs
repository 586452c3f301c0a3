//! Running components.

use resource_framework::{FrameworkError, Link};

camp_resource! {
    /// A running platform service, optionally managed through an external console.
    PlatformComponent = "PlatformComponent" {
        external_management_uri: Option<String>,
        application_components: Vec<Link<ApplicationComponent>>,
        platform_components: Vec<Link<PlatformComponent>>,
    }
}

camp_resource! {
    /// A deployed instance of an application component template.
    ApplicationComponent = "ApplicationComponent" {
        application_components: Vec<Link<ApplicationComponent>>,
        platform_components: Vec<Link<PlatformComponent>>,
    }
}

impl PlatformComponent {
    pub fn external_management_uri(&self) -> Option<&str> {
        self.external_management_uri.as_deref()
    }

    pub fn application_components(&self) -> &[Link<ApplicationComponent>] {
        &self.application_components
    }

    pub fn platform_components(&self) -> &[Link<PlatformComponent>] {
        &self.platform_components
    }
}

impl PlatformComponentBuilder {
    pub fn external_management_uri(&self, uri: impl Into<String>) -> Result<&Self, FrameworkError> {
        let uri = uri.into();
        self.inner.try_with_instance(|c| {
            if uri.trim().is_empty() {
                return Err(FrameworkError::Validation {
                    field: "external management uri",
                    reason: "must not be blank".into(),
                });
            }
            c.external_management_uri = Some(uri);
            Ok(())
        })?;
        Ok(self)
    }

    pub fn add_application_component(
        &self,
        link: Link<ApplicationComponent>,
    ) -> Result<&Self, FrameworkError> {
        self.inner.with_instance(|c| c.application_components.push(link))?;
        Ok(self)
    }

    pub fn add_platform_component(&self, link: Link<PlatformComponent>) -> Result<&Self, FrameworkError> {
        self.inner.with_instance(|c| c.platform_components.push(link))?;
        Ok(self)
    }
}

impl ApplicationComponent {
    pub fn application_components(&self) -> &[Link<ApplicationComponent>] {
        &self.application_components
    }

    pub fn platform_components(&self) -> &[Link<PlatformComponent>] {
        &self.platform_components
    }
}

impl ApplicationComponentBuilder {
    pub fn add_application_component(
        &self,
        link: Link<ApplicationComponent>,
    ) -> Result<&Self, FrameworkError> {
        self.inner.with_instance(|c| c.application_components.push(link))?;
        Ok(self)
    }

    pub fn add_platform_component(&self, link: Link<PlatformComponent>) -> Result<&Self, FrameworkError> {
        self.inner.with_instance(|c| c.platform_components.push(link))?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_framework::BuildResource;

    #[test]
    fn test_blank_management_uri_rejected() {
        let builder = PlatformComponent::builder();
        assert!(matches!(
            builder.external_management_uri("  "),
            Err(FrameworkError::Validation { .. })
        ));

        let component = builder
            .external_management_uri("https://console.example.com/db")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            component.external_management_uri(),
            Some("https://console.example.com/db")
        );
    }

    #[test]
    fn test_sealed_builder_rejects_even_invalid_uri() {
        let builder = PlatformComponent::builder();
        builder.build().unwrap();
        assert_eq!(
            builder.external_management_uri(" ").unwrap_err(),
            FrameworkError::IllegalUse {
                builder: "PlatformComponent"
            }
        );
    }

    #[test]
    fn test_component_links() {
        let db = PlatformComponent::builder().id("db").unwrap().build().unwrap();
        let app = ApplicationComponent::builder()
            .add_platform_component(Link::of(&db))
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(app.platform_components()[0].id(), "db");
        assert!(app.application_components().is_empty());
    }
}
