use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use authz_core::{
    RemoteRequest, RemoteResponse, ResourceClient, ResourceClientFactory, ServiceGateway,
    TokenRefresher,
};
use authz_domain::{RemoteError, Result, SystemError};

/// Resource client replaying queued replies in order.
///
/// Replies go through the same status mapping a real client applies, so a
/// queued 401 surfaces as an expired token.
#[derive(Default)]
pub struct ScriptedResourceClient {
    replies: Mutex<VecDeque<std::result::Result<RemoteResponse, RemoteError>>>,
    requests: Mutex<Vec<RemoteRequest>>,
}

impl ScriptedResourceClient {
    pub fn reply(self, status: u16, body: &str) -> Self {
        self.replies.lock().unwrap().push_back(RemoteResponse::classify(status, body));
        self
    }

    pub fn fail(self, error: RemoteError) -> Self {
        self.replies.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<RemoteRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResourceClient for ScriptedResourceClient {
    async fn execute(
        &self,
        request: RemoteRequest,
    ) -> std::result::Result<RemoteResponse, RemoteError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(RemoteError::Transport("no scripted reply left".into())))
    }
}

/// Factory handing out one shared scripted client.
///
/// Base URLs not starting with `http` are rejected as malformed.
pub struct ScriptedFactory {
    client: Arc<ScriptedResourceClient>,
    builds: AtomicUsize,
    seen_urls: Mutex<Vec<String>>,
}

impl ScriptedFactory {
    pub fn builds(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }

    pub fn seen_urls(&self) -> Vec<String> {
        self.seen_urls.lock().unwrap().clone()
    }
}

impl ResourceClientFactory for ScriptedFactory {
    fn resource_client(&self, base_url: &str) -> Result<Arc<dyn ResourceClient>> {
        self.builds.fetch_add(1, Ordering::SeqCst);
        self.seen_urls.lock().unwrap().push(base_url.to_string());
        if !base_url.starts_with("http") {
            return Err(SystemError::config(format!("invalid base url: {base_url}")));
        }
        Ok(self.client.clone())
    }
}

#[derive(Default)]
pub struct CountingRefresher {
    calls: AtomicUsize,
    fail: bool,
}

impl CountingRefresher {
    pub fn failing() -> Self {
        Self { calls: AtomicUsize::new(0), fail: true }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenRefresher for CountingRefresher {
    async fn refresh_token(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(SystemError::token_refresh("refresh token revoked"));
        }
        Ok(())
    }
}

pub struct Harness {
    pub gateway: ServiceGateway,
    pub client: Arc<ScriptedResourceClient>,
    pub factory: Arc<ScriptedFactory>,
    pub refresher: Arc<CountingRefresher>,
}

impl Harness {
    pub fn requests(&self) -> Vec<RemoteRequest> {
        self.client.requests()
    }
}

pub fn harness(base_url: &str, client: ScriptedResourceClient) -> Harness {
    harness_with_refresher(base_url, client, CountingRefresher::default())
}

pub fn harness_with_refresher(
    base_url: &str,
    client: ScriptedResourceClient,
    refresher: CountingRefresher,
) -> Harness {
    let client = Arc::new(client);
    let factory = Arc::new(ScriptedFactory {
        client: client.clone(),
        builds: AtomicUsize::new(0),
        seen_urls: Mutex::new(Vec::new()),
    });
    let refresher = Arc::new(refresher);
    let gateway = ServiceGateway::new(base_url, factory.clone(), refresher.clone());

    Harness { gateway, client, factory, refresher }
}
