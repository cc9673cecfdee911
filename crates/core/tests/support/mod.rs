//! Shared test helpers for `authz-core` integration tests.
//!
//! Scripted ports let the service clients run end to end without a
//! transport: every remote reply is queued up front and every request is
//! recorded for inspection.

pub mod ports;

pub use ports::{harness, harness_with_refresher, CountingRefresher, Harness, ScriptedResourceClient};
