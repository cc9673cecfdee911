//! # Authz Infrastructure
//!
//! Infrastructure implementations of the `authz-core` ports.
//!
//! This crate contains:
//! - HTTP resource clients and their factory (reqwest)
//! - Bearer token storage and refresh against the user management service
//! - Configuration loading from environment and files
//! - Tracing subscriber setup
//!
//! ## Architecture
//! - Implements traits defined in `authz-core`
//! - Contains all I/O; `authz-core` stays transport neutral

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod observability;

pub use api::{
    parse_base_url, AuthzClients, HttpResourceClient, HttpResourceClientFactory, TokenHolder,
    UserTokenRefresher,
};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use observability::init_tracing;
