//! # One-Shot Resource Builder
//!
//! [`ResourceBuilder<T>`] creates its resource up front and lets setters edit that same
//! object, so no field is declared twice. The working instance is created lazily, under a
//! mutex, on the first call that needs it; `build()` hands it out as an `Arc<T>` and seals
//! the builder. From then on every setter, and a second `build()`, fails with
//! [`FrameworkError::IllegalUse`].
//!
//! Concrete kinds wrap a `ResourceBuilder<T>` in their own builder type and implement
//! [`BuildResource`], which supplies the common chainable setters typed as the concrete
//! builder:
//!
//! ```rust
//! use resource_framework::{BasicResource, BuildResource, FrameworkError, Resource};
//!
//! # fn main() -> Result<(), FrameworkError> {
//! let builder = BasicResource::builder();
//! let resource = builder.name("web")?.tags(["a", "b"])?.build()?;
//! assert_eq!(resource.name(), Some("web"));
//! assert!(builder.name("again").is_err());
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use tracing::{debug, trace, warn};

use crate::error::FrameworkError;
use crate::identifier::{IdentifierSource, RandomIdentifiers, DEFAULT_ID_LENGTH};
use crate::resource::{
    validate_id, BasicResource, BuilderKey, RepresentationSkew, Resource, ResourceCore,
};

enum BuildState<T> {
    Pending,
    Building(T),
    Built,
}

/// Generic builder owning the lazily-created working instance of `T`.
///
/// Every access goes through one mutex, so lazy creation and the seal transition are atomic
/// with respect to concurrent setters and `build()` calls on the same builder.
pub struct ResourceBuilder<T: Resource> {
    ids: Arc<dyn IdentifierSource>,
    state: Mutex<BuildState<T>>,
}

impl<T: Resource> ResourceBuilder<T> {
    pub fn new() -> Self {
        Self::with_identifiers(Arc::new(RandomIdentifiers))
    }

    /// Use `ids` for the default identifier of the resource under construction.
    pub fn with_identifiers(ids: Arc<dyn IdentifierSource>) -> Self {
        Self {
            ids,
            state: Mutex::new(BuildState::Pending),
        }
    }

    /// Run `apply` against the working instance, creating it first if needed.
    pub fn with_instance<R>(&self, apply: impl FnOnce(&mut T) -> R) -> Result<R, FrameworkError> {
        let mut state = self.lock();
        let instance = self.instance(&mut state)?;
        Ok(apply(instance))
    }

    /// Like [`with_instance`](Self::with_instance), for edits that validate their input.
    pub fn try_with_instance<R>(
        &self,
        apply: impl FnOnce(&mut T) -> Result<R, FrameworkError>,
    ) -> Result<R, FrameworkError> {
        self.with_instance(apply)?
    }

    pub(crate) fn try_with_core(
        &self,
        apply: impl FnOnce(&mut ResourceCore) -> Result<(), FrameworkError>,
    ) -> Result<(), FrameworkError> {
        self.try_with_instance(|instance| apply(instance.core_mut(BuilderKey::new())))
    }

    /// Seal the builder and hand out the finished resource.
    pub fn build(&self) -> Result<Arc<T>, FrameworkError> {
        let mut state = self.lock();
        self.instance(&mut state)?;
        match std::mem::replace(&mut *state, BuildState::Built) {
            BuildState::Building(instance) => {
                debug!(resource_type = T::CAMP_TYPE, id = instance.id(), "Built");
                Ok(Arc::new(instance))
            }
            _ => Err(self.illegal_use()),
        }
    }

    pub fn is_built(&self) -> bool {
        matches!(*self.lock(), BuildState::Built)
    }

    fn instance<'s>(&self, state: &'s mut BuildState<T>) -> Result<&'s mut T, FrameworkError> {
        if matches!(state, BuildState::Built) {
            warn!(resource_type = T::CAMP_TYPE, "Builder used after build");
            return Err(self.illegal_use());
        }
        if matches!(state, BuildState::Pending) {
            *state = BuildState::Building(self.create());
        }
        match state {
            BuildState::Building(instance) => Ok(instance),
            _ => Err(self.illegal_use()),
        }
    }

    fn create(&self) -> T {
        let mut instance = T::from_core(ResourceCore::new(self.ids.new_id(DEFAULT_ID_LENGTH)));
        // fixed type first, so caller overrides land on top of it
        instance
            .core_mut(BuilderKey::new())
            .set_type(T::CAMP_TYPE.to_string());
        instance.initialize();
        trace!(resource_type = T::CAMP_TYPE, id = instance.id(), "Instance created");
        instance
    }

    fn illegal_use(&self) -> FrameworkError {
        FrameworkError::IllegalUse {
            builder: T::CAMP_TYPE,
        }
    }

    fn lock(&self) -> MutexGuard<'_, BuildState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Resource> Default for ResourceBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Resource> fmt::Debug for ResourceBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match *self.lock() {
            BuildState::Pending => "pending",
            BuildState::Building(_) => "building",
            BuildState::Built => "built",
        };
        f.debug_struct("ResourceBuilder")
            .field("resource_type", &T::CAMP_TYPE)
            .field("state", &state)
            .finish()
    }
}

/// Trait for kind-specific builders to inherit the common chainable setters.
///
/// Implementors only provide [`inner`](BuildResource::inner); every setter returns the
/// concrete builder so calls chain with `?`.
pub trait BuildResource {
    type Resource: Resource;

    /// Access the wrapped generic builder.
    fn inner(&self) -> &ResourceBuilder<Self::Resource>;

    fn id(&self, id: impl Into<String>) -> Result<&Self, FrameworkError> {
        let id = id.into();
        self.inner().try_with_core(|core| {
            core.set_id(validate_id(id)?);
            Ok(())
        })?;
        Ok(self)
    }

    fn name(&self, name: impl Into<String>) -> Result<&Self, FrameworkError> {
        let name = name.into();
        self.inner().try_with_core(|core| {
            core.set_name(name);
            Ok(())
        })?;
        Ok(self)
    }

    fn description(&self, description: impl Into<String>) -> Result<&Self, FrameworkError> {
        let description = description.into();
        self.inner().try_with_core(|core| {
            core.set_description(description);
            Ok(())
        })?;
        Ok(self)
    }

    /// Override the CAMP type stamped by the kind.
    fn resource_type(&self, resource_type: impl Into<String>) -> Result<&Self, FrameworkError> {
        let resource_type = resource_type.into();
        self.inner().try_with_core(|core| {
            if resource_type.trim().is_empty() {
                return Err(FrameworkError::validation("type", "must not be blank"));
            }
            core.set_type(resource_type);
            Ok(())
        })?;
        Ok(self)
    }

    /// Sub-second precision is discarded.
    fn created(&self, created: DateTime<Utc>) -> Result<&Self, FrameworkError> {
        self.inner().try_with_core(|core| {
            core.set_created(created);
            Ok(())
        })?;
        Ok(self)
    }

    /// Parse an RFC 3339 timestamp, then behave like [`created`](BuildResource::created).
    fn created_rfc3339(&self, created: &str) -> Result<&Self, FrameworkError> {
        self.inner().try_with_core(|core| {
            let parsed = DateTime::parse_from_rfc3339(created)
                .map_err(|e| FrameworkError::validation("created", format!("{created:?}: {e}")))?;
            core.set_created(parsed.with_timezone(&Utc));
            Ok(())
        })?;
        Ok(self)
    }

    /// The tags are copied; later changes to the caller's collection are not seen.
    fn tags<I, S>(&self, tags: I) -> Result<&Self, FrameworkError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: Arc<[String]> = tags.into_iter().map(Into::into).collect();
        self.inner().try_with_core(|core| {
            core.set_tags(tags);
            Ok(())
        })?;
        Ok(self)
    }

    fn representation_skew(&self, skew: RepresentationSkew) -> Result<&Self, FrameworkError> {
        self.inner().try_with_core(|core| {
            core.set_representation_skew(skew);
            Ok(())
        })?;
        Ok(self)
    }

    fn build(&self) -> Result<Arc<Self::Resource>, FrameworkError> {
        self.inner().build()
    }

    fn is_built(&self) -> bool {
        self.inner().is_built()
    }
}

/// Builder for [`BasicResource`].
#[derive(Debug, Default)]
pub struct BasicResourceBuilder {
    inner: ResourceBuilder<BasicResource>,
}

impl BasicResourceBuilder {
    pub fn with_identifiers(ids: Arc<dyn IdentifierSource>) -> Self {
        Self {
            inner: ResourceBuilder::with_identifiers(ids),
        }
    }
}

impl BuildResource for BasicResourceBuilder {
    type Resource = BasicResource;

    fn inner(&self) -> &ResourceBuilder<BasicResource> {
        &self.inner
    }
}

impl BasicResource {
    pub fn builder() -> BasicResourceBuilder {
        BasicResourceBuilder::default()
    }
}
