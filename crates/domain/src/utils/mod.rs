//! Serialization helpers shared by the domain types

pub mod date_format;
pub mod json;

pub use json::JsonEntity;
