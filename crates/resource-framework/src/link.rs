//! Typed references between resources, and their resolved wire form.

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::resource::Resource;

/// A named reference to a resource of kind `T`.
///
/// `T` only exists at compile time: it decides which URI route the link resolves through,
/// and keeps a `Link<Assembly>` from being stored where a `Link<AssemblyTemplate>` belongs.
pub struct Link<T> {
    id: String,
    name: Option<String>,
    _kind: PhantomData<fn() -> T>,
}

impl<T: Resource> Link<T> {
    pub fn new(id: impl Into<String>, name: Option<String>) -> Self {
        Self {
            id: id.into(),
            name,
            _kind: PhantomData,
        }
    }

    /// Link to an already built resource, named after it.
    pub fn of(resource: &T) -> Self {
        Self::new(resource.id(), resource.name().map(str::to_string))
    }
}

impl<T> Link<T> {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

// Manual impls: derives would demand the same traits from `T`.

impl<T> Clone for Link<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            _kind: PhantomData,
        }
    }
}

impl<T> PartialEq for Link<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name
    }
}

impl<T> Eq for Link<T> {}

impl<T> fmt::Debug for Link<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Link")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

/// A resolved link as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkDto {
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
}

impl LinkDto {
    pub fn new(href: impl Into<String>, target_name: Option<String>) -> Self {
        Self {
            href: href.into(),
            target_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BasicResource, BuildResource};

    #[test]
    fn test_link_of_resource() {
        let resource = BasicResource::builder()
            .id("abc")
            .unwrap()
            .name("Thing")
            .unwrap()
            .build()
            .unwrap();
        let link = Link::of(&*resource);
        assert_eq!(link.id(), "abc");
        assert_eq!(link.name(), Some("Thing"));
        assert_eq!(link.clone(), link);
    }

    #[test]
    fn test_link_dto_json_shape() {
        let named = LinkDto::new("/camp/v11/assemblies/a1", Some("Demo".into()));
        assert_eq!(
            serde_json::to_string(&named).unwrap(),
            r#"{"href":"/camp/v11/assemblies/a1","targetName":"Demo"}"#
        );
        let bare = LinkDto::new("/camp/v11/apidoc", None);
        assert_eq!(serde_json::to_string(&bare).unwrap(), r#"{"href":"/camp/v11/apidoc"}"#);
    }
}
