//! Utility functions for request URL handling.
//!
//! - [`origin`] - Resolution of service-relative paths to absolute URLs

pub mod origin;

pub use origin::OriginResolver;
