//! Infrastructure error conversions

pub mod conversions;

pub use conversions::{invalid_url, InfraError};
