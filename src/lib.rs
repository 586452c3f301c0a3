//! # CAMP Platform
//!
//! > **The CAMP resource model as read-only hypermedia documents.**
//!
//! This crate wires the generic [`resource_framework`] into a CAMP platform: seven
//! resource kinds, a registry holding them, the URI layout they are served under, and a
//! REST-shaped facade returning their documents.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Kinds ([`model`])
//! Immutable resources and their one-shot builders.
//! - **Key items**: [`PlatformRootSummary`](model::PlatformRootSummary),
//!   [`AssemblyTemplate`](model::AssemblyTemplate), [`Assembly`](model::Assembly).
//!
//! ### 2. The Registry ([`platform`])
//! Holds the root and one ordered lookup per kind, and defines the URI routes.
//! - **Key items**: [`CampPlatform`](platform::CampPlatform),
//!   [`camp_routes`](platform::camp_routes).
//!
//! ### 3. The Documents ([`dto`])
//! Each kind's relationship map, and the factory that assembles documents from it.
//! - **Key items**: [`Adaptable`](dto::Adaptable), [`DtoFactory`](dto::DtoFactory).
//!
//! ### 4. The Interface ([`rest`])
//! One getter per kind, with typed errors for unknown ids.
//! - **Key items**: [`CampRestApi`](rest::CampRestApi).
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use camp_platform::model::ApplicationComponentTemplate;
//! use camp_platform::{CampPlatform, CampRestApi, PlatformConfig};
//! use resource_framework::BuildResource;
//!
//! # fn main() -> Result<(), camp_platform::CampError> {
//! let config = PlatformConfig::default();
//! let platform = Arc::new(CampPlatform::from_config(&config)?);
//!
//! let war = ApplicationComponentTemplate::builder()
//!     .name("MockWarComponent")?
//!     .description("Mock WAR")?
//!     .build()?;
//! platform.register(war);
//!
//! let api = CampRestApi::new(platform, &config.base_path);
//! let root = api.platform()?;
//! assert_eq!(root.links("applicationComponentTemplates").unwrap().len(), 1);
//! println!("{}", CampRestApi::to_json(&root)?);
//! # Ok(())
//! # }
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! CAMP_BASE_PATH=/camp/v12 RUST_LOG=debug cargo run
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod model;
pub mod platform;
pub mod rest;

pub use config::PlatformConfig;
pub use error::CampError;
pub use platform::CampPlatform;
pub use rest::CampRestApi;
