//! URI resolution context.
//!
//! The assembler never knows the platform's base path or version segment. It asks a
//! [`UriResolver`] injected per assembly; [`RouteTable`] is the default implementation.

use std::collections::HashMap;

use crate::error::FrameworkError;

/// Resolves resource ids and named endpoints to URIs.
pub trait UriResolver: Send + Sync {
    /// URI of the resource `id` of kind `resource_type`.
    fn resolve(&self, resource_type: &str, id: &str) -> Result<String, FrameworkError>;

    /// URI of a fixed endpoint such as the API documentation.
    fn resolve_endpoint(&self, endpoint: &str) -> Result<String, FrameworkError>;
}

/// How a resource type maps onto a path below the base.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Route {
    /// `{base}/{segment}/{id}`
    Collection(String),
    /// `{base}{path}`, for kinds with exactly one instance such as the platform root.
    Singleton(String),
}

/// Static routes below a common base path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    base_path: String,
    routes: HashMap<String, Route>,
    endpoints: HashMap<String, String>,
}

impl RouteTable {
    /// A trailing `/` on `base_path` is ignored.
    pub fn new(base_path: impl Into<String>) -> Self {
        let base_path: String = base_path.into();
        Self {
            base_path: base_path.trim_end_matches('/').to_string(),
            routes: HashMap::new(),
            endpoints: HashMap::new(),
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn collection(mut self, resource_type: impl Into<String>, segment: impl Into<String>) -> Self {
        self.routes
            .insert(resource_type.into(), Route::Collection(segment.into()));
        self
    }

    pub fn singleton(mut self, resource_type: impl Into<String>, path: impl Into<String>) -> Self {
        self.routes
            .insert(resource_type.into(), Route::Singleton(path.into()));
        self
    }

    pub fn endpoint(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.endpoints.insert(name.into(), path.into());
        self
    }
}

impl UriResolver for RouteTable {
    fn resolve(&self, resource_type: &str, id: &str) -> Result<String, FrameworkError> {
        match self.routes.get(resource_type) {
            Some(Route::Collection(segment)) => Ok(format!("{}/{}/{}", self.base_path, segment, id)),
            Some(Route::Singleton(path)) => Ok(format!("{}{}", self.base_path, path)),
            None => Err(FrameworkError::unresolvable(resource_type)),
        }
    }

    fn resolve_endpoint(&self, endpoint: &str) -> Result<String, FrameworkError> {
        self.endpoints
            .get(endpoint)
            .map(|path| format!("{}{}", self.base_path, path))
            .ok_or_else(|| FrameworkError::unresolvable(endpoint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::new("/camp/v11/")
            .singleton("Platform", "")
            .collection("Assembly", "assemblies")
            .endpoint("apidoc", "/apidoc")
    }

    #[test]
    fn test_resolve_routes() {
        let routes = table();
        assert_eq!(routes.base_path(), "/camp/v11");
        assert_eq!(routes.resolve("Assembly", "a1").unwrap(), "/camp/v11/assemblies/a1");
        assert_eq!(routes.resolve("Platform", "whatever").unwrap(), "/camp/v11");
        assert_eq!(routes.resolve_endpoint("apidoc").unwrap(), "/camp/v11/apidoc");
    }

    #[test]
    fn test_missing_route_is_unresolvable() {
        let routes = table();
        assert_eq!(
            routes.resolve("AssemblyTemplate", "t1"),
            Err(FrameworkError::UnresolvableLink {
                target: "AssemblyTemplate".into()
            })
        );
        assert!(matches!(
            routes.resolve_endpoint("swagger"),
            Err(FrameworkError::UnresolvableLink { .. })
        ));
    }
}
