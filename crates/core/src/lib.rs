//! # Authz Core
//!
//! Service clients for the authorization services, independent of transport.
//!
//! This crate contains:
//! - Port interfaces (resource client, client factory, token refresher)
//! - Declarative endpoint contracts per entity family
//! - The token-expiry retry protocol and result-shape classification
//! - One service client per entity family
//!
//! ## Architecture Principles
//! - Only depends on `authz-domain`
//! - No HTTP code; transports plug in through [`client::ports`]

pub mod client;
pub(crate) mod endpoints;
pub mod services;

pub use client::{
    execute_with_retry, AccessTokenProvider, HttpMethod, RemoteRequest, RemoteResponse,
    ResourceClient, ResourceClientFactory, ServiceGateway, TokenRefresher,
};
pub use services::{
    ActionServiceClient, LinkedAuthorizationServiceClient, PermissionServiceClient,
    ResourceServiceClient, RoleServiceClient, TenantRolePermissionServiceClient,
    TenantRoleServiceClient, TenantRoleUserServiceClient,
};
