//! # DTO Assembly
//!
//! A [`DtoAssembler`] is the fixed, ordered map of relationship accessors for one root kind.
//! [`assemble`](DtoAssembler::assemble) copies the root's scalars, runs each accessor in
//! registration order, resolves every target through a [`LinkFactory`], and returns a
//! [`Dto`].
//!
//! Assembly is all-or-nothing: the first accessor that fails aborts the whole document, so
//! a half-resolved hypermedia document is never observable.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, debug_span, warn};

use crate::error::FrameworkError;
use crate::link::{Link, LinkDto};
use crate::link_factory::LinkFactory;
use crate::resource::{RepresentationSkew, Resource};
use crate::uri::UriResolver;

/// Scalar fields copied verbatim from a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDto {
    pub id: String,
    pub uri: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created: DateTime<Utc>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub representation_skew: Option<RepresentationSkew>,
}

impl ResourceDto {
    pub fn from_resource<R: Resource>(resource: &R, uri: impl Into<String>) -> Self {
        Self {
            id: resource.id().to_string(),
            uri: uri.into(),
            resource_type: resource.resource_type().to_string(),
            name: resource.name().map(str::to_string),
            description: resource.description().map(str::to_string),
            created: resource.created(),
            tags: resource.tags().to_vec(),
            representation_skew: resource.representation_skew(),
        }
    }
}

/// Wire names taken by [`ResourceDto`]; link fields may not reuse them.
pub const RESERVED_FIELDS: [&str; 8] = [
    "id",
    "uri",
    "type",
    "name",
    "description",
    "created",
    "tags",
    "representationSkew",
];

/// One link-valued field of a [`Dto`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LinkField {
    /// A relationship, always rendered as a sequence (possibly of one).
    Many(Vec<LinkDto>),
    /// A designated singular pointer, such as the API documentation.
    One(LinkDto),
}

impl LinkField {
    pub fn as_many(&self) -> Option<&[LinkDto]> {
        match self {
            LinkField::Many(links) => Some(links),
            LinkField::One(_) => None,
        }
    }

    pub fn as_one(&self) -> Option<&LinkDto> {
        match self {
            LinkField::One(link) => Some(link),
            LinkField::Many(_) => None,
        }
    }
}

/// The wire document for one resource: scalars followed by link fields in declared order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dto {
    #[serde(flatten)]
    resource: ResourceDto,
    #[serde(flatten)]
    links: IndexMap<&'static str, LinkField>,
}

impl Dto {
    pub fn resource(&self) -> &ResourceDto {
        &self.resource
    }

    pub fn id(&self) -> &str {
        &self.resource.id
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.links.keys().copied()
    }

    pub fn field(&self, name: &str) -> Option<&LinkField> {
        self.links.get(name)
    }

    pub fn links(&self, name: &str) -> Option<&[LinkDto]> {
        self.field(name).and_then(LinkField::as_many)
    }

    pub fn link(&self, name: &str) -> Option<&LinkDto> {
        self.field(name).and_then(LinkField::as_one)
    }
}

type Accessor<R, C> =
    Box<dyn Fn(&R, &C, &LinkFactory<'_>) -> Result<LinkField, FrameworkError> + Send + Sync>;

/// Ordered relationship accessors for root kind `R`, reading from context `C`.
///
/// # Panics
///
/// Registering a field under one of the [`RESERVED_FIELDS`] panics: the map is a static
/// schema, and such a field would shadow a scalar in the flattened document.
pub struct DtoAssembler<R, C> {
    fields: IndexMap<&'static str, Accessor<R, C>>,
}

impl<R: Resource, C: 'static> DtoAssembler<R, C> {
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// A collection relationship.
    pub fn many<T, F>(self, field: &'static str, accessor: F) -> Self
    where
        T: Resource,
        F: Fn(&R, &C) -> Vec<Link<T>> + Send + Sync + 'static,
    {
        self.insert(
            field,
            Box::new(move |root: &R, ctx: &C, links: &LinkFactory| {
                Ok(LinkField::Many(links.links_for(&accessor(root, ctx))?))
            }),
        )
    }

    /// A singular relationship, normalized to a sequence of zero or one links.
    pub fn single<T, F>(self, field: &'static str, accessor: F) -> Self
    where
        T: Resource,
        F: Fn(&R, &C) -> Option<Link<T>> + Send + Sync + 'static,
    {
        self.insert(
            field,
            Box::new(move |root: &R, ctx: &C, links: &LinkFactory| {
                let resolved = accessor(root, ctx)
                    .map(|link| links.link_for(&link))
                    .transpose()?;
                Ok(LinkField::Many(resolved.into_iter().collect()))
            }),
        )
    }

    /// A designated singular field pointing at a fixed endpoint.
    pub fn endpoint(self, field: &'static str, endpoint: &'static str, name: &'static str) -> Self {
        self.insert(
            field,
            Box::new(move |_: &R, _: &C, links: &LinkFactory| {
                Ok(LinkField::One(links.endpoint(endpoint, name)?))
            }),
        )
    }

    /// A URI held by the root itself, outside the platform's routes. Rendered like a
    /// singular relationship without a target name.
    pub fn external<F>(self, field: &'static str, accessor: F) -> Self
    where
        F: Fn(&R) -> Option<String> + Send + Sync + 'static,
    {
        self.insert(
            field,
            Box::new(move |root: &R, _: &C, _: &LinkFactory| {
                let href = accessor(root).map(|href| LinkDto::new(href, None));
                Ok(LinkField::Many(href.into_iter().collect()))
            }),
        )
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().copied()
    }

    pub fn assemble(&self, root: &R, ctx: &C, uris: &dyn UriResolver) -> Result<Dto, FrameworkError> {
        let _span = debug_span!("assemble", resource_type = R::CAMP_TYPE, id = root.id()).entered();
        let factory = LinkFactory::new(uris);

        let resource = ResourceDto::from_resource(root, factory.link_to(root)?.href);
        let mut links = IndexMap::with_capacity(self.fields.len());
        for (&field, accessor) in &self.fields {
            let value = accessor(root, ctx, &factory).inspect_err(|e| {
                warn!(field, error = %e, "Assembly aborted");
            })?;
            links.insert(field, value);
        }

        debug!(fields = links.len(), "Assembled");
        Ok(Dto { resource, links })
    }

    // Re-registering a field keeps its original position.
    fn insert(mut self, field: &'static str, accessor: Accessor<R, C>) -> Self {
        assert!(
            !RESERVED_FIELDS.contains(&field),
            "link field `{field}` of {} collides with a scalar field",
            R::CAMP_TYPE
        );
        self.fields.insert(field, accessor);
        self
    }
}

impl<R: Resource, C: 'static> Default for DtoAssembler<R, C> {
    fn default() -> Self {
        Self::new()
    }
}
