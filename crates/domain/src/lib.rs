//! # Authz Domain
//!
//! Domain types for the authorization service clients.
//!
//! This crate contains:
//! - Entities (Action, Permission, Role, TenantRole, ...) and `Page<T>`
//! - JSON factory functions through [`JsonEntity`]
//! - Error types and the `Result` alias
//! - Configuration structures and constants
//!
//! ## Architecture
//! - No dependencies on other authz crates
//! - No I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::JsonEntity;
