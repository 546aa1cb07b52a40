//! Shared utilities for the Pulse workspace.
//!
//! Currently this only hosts the [`observability`] module. It is intentionally
//! lightweight so that every crate can depend on it without pulling in heavy
//! transitive costs.
pub mod observability;
