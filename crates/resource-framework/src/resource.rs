//! # Resource Trait
//!
//! The [`Resource`] trait is the contract every platform resource (templates, components,
//! assemblies, the platform root, ...) implements so the generic
//! [`ResourceBuilder`](crate::ResourceBuilder) can construct it and the
//! [`DtoAssembler`](crate::DtoAssembler) can read it.
//!
//! # Architecture Note
//! The shared state of every resource lives in a [`ResourceCore`]. Its mutators are private
//! to this crate, and [`Resource::core_mut`] demands a [`BuilderKey`] that only the builder
//! can mint. Code outside the builder therefore only ever sees readers, which is what makes
//! a built resource effectively immutable.

use std::sync::Arc;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FrameworkError;

/// CAMP type of a resource that has no more specific kind.
pub const RESOURCE_TYPE: &str = "Resource";

/// Divergence between the in-memory resource and its external representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RepresentationSkew {
    Creating,
    None,
    Destroying,
    Unknown,
}

/// Capability token required by [`Resource::core_mut`].
///
/// It cannot be constructed outside this crate, so only the builder can reach the core.
#[derive(Debug)]
pub struct BuilderKey(());

impl BuilderKey {
    pub(crate) fn new() -> Self {
        Self(())
    }
}

/// State shared by every resource kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceCore {
    id: String,
    name: Option<String>,
    resource_type: String,
    description: Option<String>,
    created: DateTime<Utc>,
    tags: Arc<[String]>,
    representation_skew: Option<RepresentationSkew>,
}

impl ResourceCore {
    pub(crate) fn new(id: String) -> Self {
        Self {
            id,
            name: None,
            resource_type: RESOURCE_TYPE.to_string(),
            description: None,
            created: truncate_to_seconds(Utc::now()),
            tags: Arc::from(Vec::new()),
            representation_skew: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn representation_skew(&self) -> Option<RepresentationSkew> {
        self.representation_skew
    }

    // --- mutators, reachable only through the builder ---

    pub(crate) fn set_id(&mut self, id: String) {
        self.id = id;
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = Some(name);
    }

    pub(crate) fn set_type(&mut self, resource_type: String) {
        self.resource_type = resource_type;
    }

    pub(crate) fn set_description(&mut self, description: String) {
        self.description = Some(description);
    }

    pub(crate) fn set_created(&mut self, created: DateTime<Utc>) {
        // sub-second precision breaks equality after a round trip through second-granular storage
        self.created = truncate_to_seconds(created);
    }

    pub(crate) fn set_tags(&mut self, tags: Arc<[String]>) {
        self.tags = tags;
    }

    pub(crate) fn set_representation_skew(&mut self, skew: RepresentationSkew) {
        self.representation_skew = Some(skew);
    }
}

/// Trait that any platform resource must implement to be built and assembled.
///
/// # Type Taxonomy
/// Each kind declares its fixed CAMP type as an associated constant. The builder stamps it
/// during initialization, and the link factory uses it to pick a URI route.
///
/// # Provided Methods
/// The readers (`id`, `name`, ...) delegate to [`Resource::core`]; implementors only
/// supply the four required items.
pub trait Resource: Send + Sync + Sized + 'static {
    /// The fixed CAMP type of this kind, e.g. `"PlatformComponentTemplate"`.
    const CAMP_TYPE: &'static str;

    /// Wrap a freshly created core into the concrete kind.
    fn from_core(core: ResourceCore) -> Self;

    fn core(&self) -> &ResourceCore;

    fn core_mut(&mut self, key: BuilderKey) -> &mut ResourceCore;

    /// Subtype hook run once, right after the builder stamps the type.
    fn initialize(&mut self) {}

    fn id(&self) -> &str {
        self.core().id()
    }

    fn name(&self) -> Option<&str> {
        self.core().name()
    }

    fn resource_type(&self) -> &str {
        self.core().resource_type()
    }

    fn description(&self) -> Option<&str> {
        self.core().description()
    }

    fn created(&self) -> DateTime<Utc> {
        self.core().created()
    }

    fn tags(&self) -> &[String] {
        self.core().tags()
    }

    fn representation_skew(&self) -> Option<RepresentationSkew> {
        self.core().representation_skew()
    }
}

/// A resource with no kind-specific state. Useful for tests and generic tooling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicResource {
    core: ResourceCore,
}

impl Resource for BasicResource {
    const CAMP_TYPE: &'static str = RESOURCE_TYPE;

    fn from_core(core: ResourceCore) -> Self {
        Self { core }
    }

    fn core(&self) -> &ResourceCore {
        &self.core
    }

    fn core_mut(&mut self, _: BuilderKey) -> &mut ResourceCore {
        &mut self.core
    }
}

/// Drops the sub-second component of a timestamp.
pub fn truncate_to_seconds(t: DateTime<Utc>) -> DateTime<Utc> {
    t.trunc_subsecs(0)
}

/// Ids end up as URI path segments.
pub(crate) fn validate_id(id: String) -> Result<String, FrameworkError> {
    if id.is_empty() {
        return Err(FrameworkError::validation("id", "must not be empty"));
    }
    if let Some(c) = id
        .chars()
        .find(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#'))
    {
        return Err(FrameworkError::validation(
            "id",
            format!("{id:?} contains reserved character {c:?}"),
        ));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_truncate_drops_subseconds() {
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 15).unwrap()
            + chrono::Duration::milliseconds(789);
        let truncated = truncate_to_seconds(t);
        assert_eq!(truncated.nanosecond(), 0);
        assert_eq!(truncated.second(), 15);
        assert_eq!(truncate_to_seconds(truncated), truncated);
    }

    #[test]
    fn test_validate_id() {
        assert!(validate_id("abc123".into()).is_ok());
        assert!(matches!(
            validate_id(String::new()),
            Err(FrameworkError::Validation { field: "id", .. })
        ));
        assert!(validate_id("a/b".into()).is_err());
        assert!(validate_id("a b".into()).is_err());
        assert!(validate_id("a#b".into()).is_err());
    }

    #[test]
    fn test_skew_serializes_screaming_case() {
        let json = serde_json::to_string(&RepresentationSkew::Destroying).unwrap();
        assert_eq!(json, "\"DESTROYING\"");
    }
}
