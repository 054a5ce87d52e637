//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! the concrete HTTP transport used in production.
//!
//! # Modules
//!
//! - [`http`] - Reqwest-backed transport implementation

pub mod http;
