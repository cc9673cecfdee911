//! Token-expiry recovery for remote operations
//!
//! An operation runs once. If the remote rejects the access token, the token
//! is refreshed and the operation runs exactly one more time. Any other
//! failure is escalated without retrying.

use std::future::Future;

use authz_domain::{impl_domain_status_conversions, RemoteError, Result, SystemError};
use tracing::{debug, error, info, warn};

use super::ports::TokenRefresher;

/// Stage of a logical call, recorded on every log line it emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryPhase {
    /// First execution under the current token
    Attempt,
    /// Token refresh after the first attempt reported expiry
    Refresh,
    /// The single re-execution after a successful refresh
    Retry,
}

impl_domain_status_conversions!(RetryPhase {
    Attempt => "attempt",
    Refresh => "refresh",
    Retry => "retry",
});

/// Runs `operation`, recovering at most once from an expired token
///
/// # Errors
/// - `SystemError::TokenUnrecoverable` when the retry is rejected again
/// - `SystemError::TokenRefresh` when the refresher fails; no retry follows
/// - `SystemError::Remote` for every other remote failure, on either attempt
pub async fn execute_with_retry<T, F, Fut>(
    refresher: &dyn TokenRefresher,
    mut operation: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::result::Result<T, RemoteError>>,
{
    debug!(phase = %RetryPhase::Attempt, "executing remote operation");
    match operation().await {
        Ok(value) => return Ok(value),
        Err(RemoteError::TokenExpired(reason)) => {
            info!(phase = %RetryPhase::Refresh, %reason, "access token expired, refreshing");
        }
        Err(err) => {
            warn!(phase = %RetryPhase::Attempt, kind = %err.kind(), error = %err, "remote operation failed");
            return Err(err.into());
        }
    }

    if let Err(err) = refresher.refresh_token().await {
        warn!(phase = %RetryPhase::Refresh, error = %err, "token refresh failed");
        return Err(match err {
            refresh @ SystemError::TokenRefresh { .. } => refresh,
            other => SystemError::token_refresh(other.to_string()),
        });
    }

    debug!(phase = %RetryPhase::Retry, "retrying remote operation with refreshed token");
    match operation().await {
        Ok(value) => Ok(value),
        Err(err) if err.is_token_expired() => {
            error!(phase = %RetryPhase::Retry, "access token rejected after refresh");
            Err(SystemError::TokenUnrecoverable)
        }
        Err(err) => {
            warn!(phase = %RetryPhase::Retry, kind = %err.kind(), error = %err, "remote operation failed");
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use authz_domain::RemoteErrorKind;

    use super::*;

    struct CountingRefresher {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingRefresher {
        fn ok() -> Self {
            Self { calls: AtomicUsize::new(0), fail: false }
        }

        fn failing() -> Self {
            Self { calls: AtomicUsize::new(0), fail: true }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TokenRefresher for CountingRefresher {
        async fn refresh_token(&self) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(SystemError::config("user management unreachable"))
            } else {
                Ok(())
            }
        }
    }

    /// Replays canned outcomes, one per invocation
    struct Script {
        outcomes: Mutex<VecDeque<std::result::Result<u32, RemoteError>>>,
        invocations: AtomicUsize,
    }

    impl Script {
        fn new(outcomes: Vec<std::result::Result<u32, RemoteError>>) -> Self {
            Self { outcomes: Mutex::new(outcomes.into()), invocations: AtomicUsize::new(0) }
        }

        async fn next(&self) -> std::result::Result<u32, RemoteError> {
            self.invocations.fetch_add(1, Ordering::SeqCst);
            self.outcomes.lock().unwrap().pop_front().expect("script exhausted")
        }

        fn invocations(&self) -> usize {
            self.invocations.load(Ordering::SeqCst)
        }
    }

    fn expired() -> RemoteError {
        RemoteError::TokenExpired("jwt expired".into())
    }

    #[tokio::test]
    async fn success_runs_once_without_refresh() {
        let refresher = CountingRefresher::ok();
        let script = Script::new(vec![Ok(7)]);

        let value = execute_with_retry(&refresher, || script.next()).await.unwrap();

        assert_eq!(value, 7);
        assert_eq!(script.invocations(), 1);
        assert_eq!(refresher.calls(), 0);
    }

    #[tokio::test]
    async fn expired_token_refreshes_and_retries_once() {
        let refresher = CountingRefresher::ok();
        let script = Script::new(vec![Err(expired()), Ok(9)]);

        let value = execute_with_retry(&refresher, || script.next()).await.unwrap();

        assert_eq!(value, 9);
        assert_eq!(script.invocations(), 2);
        assert_eq!(refresher.calls(), 1);
    }

    #[tokio::test]
    async fn double_expiry_is_unrecoverable() {
        let refresher = CountingRefresher::ok();
        let script = Script::new(vec![Err(expired()), Err(expired())]);

        let err = execute_with_retry(&refresher, || script.next()).await.unwrap_err();

        assert!(err.is_token_unrecoverable());
        assert_eq!(err.to_string(), "Unable to recover expiredToken.");
        assert_eq!(script.invocations(), 2);
        assert_eq!(refresher.calls(), 1);
    }

    #[tokio::test]
    async fn other_failures_escalate_without_retry() {
        for failure in [
            RemoteError::BadRequest("missing name".into()),
            RemoteError::NotFound("no such action".into()),
            RemoteError::InternalServerError("boom".into()),
            RemoteError::Processing("bad json".into()),
        ] {
            let refresher = CountingRefresher::ok();
            let kind = failure.kind();
            let script = Script::new(vec![Err(failure)]);

            let err = execute_with_retry(&refresher, || script.next()).await.unwrap_err();

            assert_eq!(err.remote_kind(), Some(kind));
            assert_eq!(script.invocations(), 1);
            assert_eq!(refresher.calls(), 0);
        }
    }

    #[tokio::test]
    async fn failure_on_retry_keeps_its_classification() {
        let refresher = CountingRefresher::ok();
        let script =
            Script::new(vec![Err(expired()), Err(RemoteError::Transport("connection reset".into()))]);

        let err = execute_with_retry(&refresher, || script.next()).await.unwrap_err();

        assert_eq!(err.remote_kind(), Some(RemoteErrorKind::Transport));
    }

    #[tokio::test]
    async fn refresh_failure_stops_before_retry() {
        let refresher = CountingRefresher::failing();
        let script = Script::new(vec![Err(expired()), Ok(1)]);

        let err = execute_with_retry(&refresher, || script.next()).await.unwrap_err();

        assert!(matches!(err, SystemError::TokenRefresh { .. }));
        assert_eq!(script.invocations(), 1);
        assert_eq!(refresher.calls(), 1);
    }

    #[test]
    fn phase_names_are_lowercase() {
        assert_eq!(RetryPhase::Refresh.to_string(), "refresh");
    }
}
