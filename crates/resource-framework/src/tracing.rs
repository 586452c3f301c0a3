//! # Observability & Tracing
//!
//! The framework logs through `tracing` with structured fields (`resource_type`, `id`,
//! `field`) instead of formatted strings:
//!
//! - **Builder**: instance creation (`trace`), `Built` (`debug`), use after build (`warn`)
//! - **Lookup**: `Registered` with the new size (`debug`)
//! - **Assembly**: one `assemble` span per document, `Assembled` (`debug`), aborted fields
//!   and unresolvable links (`warn`)
//!
//! ```bash
//! # Only problems
//! RUST_LOG=warn cargo run
//!
//! # Every assembly and registration
//! RUST_LOG=debug cargo run
//!
//! # Framework internals only
//! RUST_LOG=resource_framework=trace cargo run
//! ```

/// Installs a compact fmt subscriber filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // resource_type fields already say where a line comes from
        .compact()
        .init();
}
