//! # Resource Framework
//!
//! This crate provides the building blocks for modelling platform resources as immutable
//! objects and exposing them as hypermedia documents. It has two halves:
//!
//! 1. **Construction** ([`ResourceBuilder`], [`BuildResource`]) - a one-shot builder that
//!    creates the resource up front, lets chainable setters validate and edit it, and seals
//!    itself on `build()`.
//! 2. **Assembly** ([`DtoAssembler`], [`LinkFactory`], [`UriResolver`]) - walks a resource's
//!    declared relationships and materializes them as typed, URI-bearing links in a flat
//!    [`Dto`].
//!
//! ## Defining a Resource Kind
//!
//! A kind is a struct holding a [`ResourceCore`] plus its own fields, a [`Resource`] impl
//! naming its fixed CAMP type, and a builder wrapping [`ResourceBuilder`]:
//!
//! ```rust
//! use std::sync::Arc;
//! use resource_framework::{
//!     BuildResource, BuilderKey, DtoAssembler, FrameworkError, Resource, ResourceBuilder,
//!     ResourceCore, ResourceLookup, RouteTable,
//! };
//!
//! // 1. The kind
//! struct Service {
//!     core: ResourceCore,
//!     port: u16,
//! }
//!
//! impl Resource for Service {
//!     const CAMP_TYPE: &'static str = "Service";
//!     fn from_core(core: ResourceCore) -> Self { Self { core, port: 80 } }
//!     fn core(&self) -> &ResourceCore { &self.core }
//!     fn core_mut(&mut self, _: BuilderKey) -> &mut ResourceCore { &mut self.core }
//! }
//!
//! // 2. Its builder, with one kind-specific setter
//! #[derive(Default)]
//! struct ServiceBuilder { inner: ResourceBuilder<Service> }
//!
//! impl BuildResource for ServiceBuilder {
//!     type Resource = Service;
//!     fn inner(&self) -> &ResourceBuilder<Service> { &self.inner }
//! }
//!
//! impl ServiceBuilder {
//!     fn port(&self, port: u16) -> Result<&Self, FrameworkError> {
//!         self.inner.with_instance(|s| s.port = port)?;
//!         Ok(self)
//!     }
//! }
//!
//! # fn main() -> Result<(), FrameworkError> {
//! // 3. Build once, share read-only
//! let web = ServiceBuilder::default().id("web")?.name("Web")?.port(8080)?.build()?;
//! assert_eq!(web.resource_type(), "Service");
//! assert_eq!(web.port, 8080);
//!
//! // 4. Assemble a document linking a root to its peers
//! let peers = ResourceLookup::new();
//! peers.add(Arc::clone(&web));
//! let routes = RouteTable::new("/api").collection("Service", "services");
//! let assembler = DtoAssembler::<Service, ResourceLookup<Service>>::new()
//!     .many("peers", |_, peers: &ResourceLookup<Service>| peers.links());
//!
//! let dto = assembler.assemble(&web, &peers, &routes)?;
//! assert_eq!(dto.resource().uri, "/api/services/web");
//! assert_eq!(dto.links("peers").unwrap()[0].href, "/api/services/web");
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency Model
//!
//! - All operations are synchronous and run on the caller's thread.
//! - A builder may be shared between threads: lazy creation and sealing happen under one
//!   mutex, so initialization runs once and every call after `build()` fails.
//! - Built resources are `Arc`s with no mutators, free to read from any thread.
//! - [`ResourceLookup`] is guarded by a reader-writer lock.
//!
//! ## Testing
//!
//! The [`mock`] module provides [`SequentialIdentifiers`](mock::SequentialIdentifiers) for
//! stable ids and [`CountingResolver`](mock::CountingResolver) to observe link resolution.

pub mod builder;
pub mod dto;
pub mod error;
pub mod identifier;
pub mod link;
pub mod link_factory;
pub mod lookup;
pub mod mock;
pub mod resource;
pub mod tracing;
pub mod uri;

// Re-export core types for convenience
pub use builder::{BasicResourceBuilder, BuildResource, ResourceBuilder};
pub use dto::{Dto, DtoAssembler, LinkField, ResourceDto};
pub use error::FrameworkError;
pub use identifier::{IdentifierSource, RandomIdentifiers, DEFAULT_ID_LENGTH};
pub use link::{Link, LinkDto};
pub use link_factory::LinkFactory;
pub use lookup::ResourceLookup;
pub use resource::{
    truncate_to_seconds, BasicResource, BuilderKey, RepresentationSkew, Resource, ResourceCore,
    RESOURCE_TYPE,
};
pub use uri::{RouteTable, UriResolver};
