//! Conversions from external infrastructure errors into domain errors.

use authz_domain::{RemoteError, SystemError};
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub RemoteError);

impl From<InfraError> for RemoteError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<InfraError> for SystemError {
    fn from(value: InfraError) -> Self {
        value.0.into()
    }
}

trait IntoRemoteError {
    fn into_remote(self) -> RemoteError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → RemoteError */
/* -------------------------------------------------------------------------- */

impl IntoRemoteError for HttpError {
    fn into_remote(self) -> RemoteError {
        if self.is_timeout() {
            return RemoteError::Transport("HTTP request timed out".into());
        }

        if self.is_connect() {
            return RemoteError::Transport(format!("HTTP connection failure: {self}"));
        }

        if self.is_decode() || self.is_body() || self.is_builder() {
            return RemoteError::Processing(self.to_string());
        }

        RemoteError::Transport(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_remote())
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → SystemError */
/* -------------------------------------------------------------------------- */

/// Malformed endpoint configuration
pub fn invalid_url(raw: &str, err: url::ParseError) -> SystemError {
    SystemError::config(format!("invalid service URL '{raw}': {err}"))
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use authz_domain::RemoteErrorKind;
    use reqwest::Client;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn timeout_maps_to_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let client =
            Client::builder().no_proxy().timeout(Duration::from_millis(50)).build().unwrap();
        let error = client.get(server.uri()).send().await.unwrap_err();

        let mapped: RemoteError = InfraError::from(error).into();
        assert_eq!(mapped, RemoteError::Transport("HTTP request timed out".into()));
    }

    #[tokio::test]
    async fn undecodable_body_maps_to_processing_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client
            .get(server.uri())
            .send()
            .await
            .unwrap()
            .json::<serde_json::Value>()
            .await
            .unwrap_err();

        let mapped: RemoteError = InfraError::from(error).into();
        assert_eq!(mapped.kind(), RemoteErrorKind::Processing);
    }

    #[test]
    fn invalid_url_is_a_config_error() {
        let err = url::Url::parse("not a url").unwrap_err();
        let mapped = invalid_url("not a url", err);
        assert!(matches!(mapped, SystemError::Config { .. }));
        assert!(mapped.to_string().contains("not a url"));
    }
}
