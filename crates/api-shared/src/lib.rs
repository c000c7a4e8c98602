//! # API Shared
//!
//! Shared definitions for the taskboard API.
//!
//! Contains:
//! - JSON wire types (`wire` module), used by the REST server and by the client
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and `taskboard-client` so both sides agree on the JSON shape.

pub mod health;
pub mod wire;

pub use health::HealthService;
pub use wire::*;
