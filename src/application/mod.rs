//! Application layer: response adapters and reactive facades.
//!
//! This layer orchestrates the client's operations by coordinating transport
//! calls, response validation, and state transitions. Adapters consume the
//! transport trait and produce validated domain values; facades consume
//! adapters and expose tri-state (loading/error/data) views to callers.
//!
//! # Modules
//!
//! - [`adapters`] - Strict DTO validation and conversion to domain values
//! - [`facades`] - Per-feature state stores, pagination guard, error
//!   classification

pub mod adapters;
pub mod facades;
