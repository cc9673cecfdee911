//! Remote call plumbing shared by the service clients

pub mod gateway;
pub mod outcome;
pub mod ports;
pub mod request;
pub mod retry;

pub use gateway::ServiceGateway;
pub use ports::{AccessTokenProvider, ResourceClient, ResourceClientFactory, TokenRefresher};
pub use request::{HttpMethod, RemoteRequest, RemoteResponse};
pub use retry::{execute_with_retry, RetryPhase};
