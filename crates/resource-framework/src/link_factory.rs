//! Turns typed [`Link`]s into resolved [`LinkDto`]s.

use tracing::warn;

use crate::error::FrameworkError;
use crate::link::{Link, LinkDto};
use crate::resource::Resource;
use crate::uri::UriResolver;

/// Resolves links through one URI context.
///
/// The route is chosen by the *declared* kind `T`, not by the target's (overridable)
/// `type` field, so the same `(T, id)` pair always yields the same URI.
#[derive(Clone, Copy)]
pub struct LinkFactory<'a> {
    uris: &'a dyn UriResolver,
}

impl<'a> LinkFactory<'a> {
    pub fn new(uris: &'a dyn UriResolver) -> Self {
        Self { uris }
    }

    pub fn link_for<T: Resource>(&self, link: &Link<T>) -> Result<LinkDto, FrameworkError> {
        let href = self.uris.resolve(T::CAMP_TYPE, link.id()).inspect_err(|e| {
            warn!(resource_type = T::CAMP_TYPE, id = link.id(), error = %e, "Link unresolvable");
        })?;
        Ok(LinkDto::new(href, link.name().map(str::to_string)))
    }

    /// Resolve a collection, preserving its order. Fails on the first unresolvable member.
    pub fn links_for<T: Resource>(&self, links: &[Link<T>]) -> Result<Vec<LinkDto>, FrameworkError> {
        links.iter().map(|link| self.link_for(link)).collect()
    }

    pub fn link_to<T: Resource>(&self, resource: &T) -> Result<LinkDto, FrameworkError> {
        self.link_for(&Link::of(resource))
    }

    pub fn endpoint(&self, endpoint: &str, name: &str) -> Result<LinkDto, FrameworkError> {
        let href = self.uris.resolve_endpoint(endpoint).inspect_err(|e| {
            warn!(endpoint, error = %e, "Endpoint unresolvable");
        })?;
        Ok(LinkDto::new(href, Some(name.to_string())))
    }
}
