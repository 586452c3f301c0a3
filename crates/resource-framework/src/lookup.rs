//! Ordered registry of built resources of one kind.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;
use tracing::debug;

use crate::link::Link;
use crate::resource::Resource;

/// Holds built resources in registration order, keyed by id.
///
/// Readers (DTO assembly) and writers (registration) may run on different threads; every
/// read observes a consistent snapshot of the registry.
pub struct ResourceLookup<T: Resource> {
    items: RwLock<IndexMap<String, Arc<T>>>,
}

impl<T: Resource> ResourceLookup<T> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(IndexMap::new()),
        }
    }

    /// Register a resource. An existing resource with the same id is replaced in place and
    /// returned.
    pub fn add(&self, resource: Arc<T>) -> Option<Arc<T>> {
        let id = resource.id().to_string();
        let mut items = self.write();
        let previous = items.insert(id.clone(), resource);
        debug!(
            resource_type = T::CAMP_TYPE,
            %id,
            replaced = previous.is_some(),
            size = items.len(),
            "Registered"
        );
        previous
    }

    pub fn get(&self, id: &str) -> Option<Arc<T>> {
        self.read().get(id).cloned()
    }

    /// Links to every registered resource, in registration order.
    pub fn links(&self) -> Vec<Link<T>> {
        self.read().values().map(|r| Link::of(&**r)).collect()
    }


    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, IndexMap<String, Arc<T>>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, IndexMap<String, Arc<T>>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Resource> Default for ResourceLookup<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Resource> fmt::Debug for ResourceLookup<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceLookup")
            .field("resource_type", &T::CAMP_TYPE)
            .field("ids", &self.read().keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BasicResource, BuildResource};

    fn resource(id: &str, name: &str) -> Arc<BasicResource> {
        BasicResource::builder()
            .id(id)
            .unwrap()
            .name(name)
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn test_links_follow_registration_order() {
        let lookup = ResourceLookup::new();
        assert!(lookup.is_empty());
        lookup.add(resource("zeta", "Z"));
        lookup.add(resource("alpha", "A"));
        lookup.add(resource("mid", "M"));

        let ids: Vec<_> = lookup.links().iter().map(|l| l.id().to_string()).collect();
        assert_eq!(ids, ["zeta", "alpha", "mid"]);
        assert_eq!(lookup.get("alpha").unwrap().name(), Some("A"));
        assert!(lookup.get("missing").is_none());
    }

    #[test]
    fn test_same_id_replaces_in_place() {
        let lookup = ResourceLookup::new();
        lookup.add(resource("one", "first"));
        lookup.add(resource("two", "second"));
        let previous = lookup.add(resource("one", "first again"));

        assert_eq!(previous.unwrap().name(), Some("first"));
        assert_eq!(lookup.len(), 2);
        let names: Vec<_> = lookup
            .links()
            .iter()
            .map(|l| l.name().unwrap_or_default().to_string())
            .collect();
        assert_eq!(names, ["first again", "second"]);
    }
}
