//! HTTP bindings of the authorization service clients
//!
//! - [`client`]: resource client and factory over [`crate::http::HttpClient`]
//! - [`auth`]: shared bearer tokens and refresh via the user management service
//! - [`clients`]: one-stop construction of every service client

pub mod auth;
pub mod client;
pub mod clients;

pub use auth::{TokenHolder, UserTokenRefresher};
pub use client::{parse_base_url, HttpResourceClient, HttpResourceClientFactory};
pub use clients::AuthzClients;
