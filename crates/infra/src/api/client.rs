//! HTTP implementation of the resource client ports
//!
//! One [`HttpResourceClient`] is bound to one service base URL. It attaches
//! the current bearer token, sends the request once and classifies the
//! response status.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use authz_core::{
    AccessTokenProvider, HttpMethod, RemoteRequest, RemoteResponse, ResourceClient,
    ResourceClientFactory,
};
use authz_domain::{RemoteError, Result, SystemError};
use reqwest::header::ACCEPT;
use reqwest::Method;
use tracing::{debug, instrument};
use url::Url;

use crate::errors::{invalid_url, InfraError};
use crate::http::HttpClient;

/// Parse a service base URL, normalising it to end in `/` so that relative
/// resource paths join below it.
///
/// # Errors
/// Returns `SystemError::Config` unless the URL is an absolute `http` or
/// `https` URL.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let mut normalized = raw.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }

    let url = Url::parse(&normalized).map_err(|err| invalid_url(raw, err))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(SystemError::config(format!(
            "invalid service URL '{raw}': unsupported scheme '{other}'"
        ))),
    }
}

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

pub struct HttpResourceClient {
    http: HttpClient,
    base_url: Url,
    auth: Arc<dyn AccessTokenProvider>,
}

impl HttpResourceClient {
    pub fn new(http: HttpClient, base_url: Url, auth: Arc<dyn AccessTokenProvider>) -> Self {
        Self { http, base_url, auth }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> std::result::Result<Url, RemoteError> {
        self.base_url.join(path.trim_start_matches('/')).map_err(|err| {
            RemoteError::Processing(format!("invalid resource path '{path}': {err}"))
        })
    }
}

impl fmt::Debug for HttpResourceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResourceClient").field("base_url", &self.base_url.as_str()).finish()
    }
}

#[async_trait]
impl ResourceClient for HttpResourceClient {
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    async fn execute(
        &self,
        request: RemoteRequest,
    ) -> std::result::Result<RemoteResponse, RemoteError> {
        let url = self.url_for(&request.path)?;

        let mut builder =
            self.http.request(to_method(request.method), url).header(ACCEPT, "application/json");

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(token) = self.auth.access_token().await {
            builder = builder.bearer_auth(token);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = self.http.send(builder).await?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(InfraError::from)?;

        debug!(status, body_len = body.len(), "resource call completed");
        RemoteResponse::classify(status, body)
    }
}

/// Builds [`HttpResourceClient`]s sharing one HTTP client and token source
#[derive(Clone)]
pub struct HttpResourceClientFactory {
    http: HttpClient,
    auth: Arc<dyn AccessTokenProvider>,
}

impl HttpResourceClientFactory {
    pub fn new(http: HttpClient, auth: Arc<dyn AccessTokenProvider>) -> Self {
        Self { http, auth }
    }
}

impl fmt::Debug for HttpResourceClientFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResourceClientFactory").finish_non_exhaustive()
    }
}

impl ResourceClientFactory for HttpResourceClientFactory {
    fn resource_client(&self, base_url: &str) -> Result<Arc<dyn ResourceClient>> {
        let url = parse_base_url(base_url)?;
        Ok(Arc::new(HttpResourceClient::new(self.http.clone(), url, Arc::clone(&self.auth))))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    use super::*;
    use crate::api::auth::TokenHolder;

    fn client_for(server: &MockServer, token: Option<&str>) -> HttpResourceClient {
        let tokens = Arc::new(TokenHolder::new(token.map(str::to_string), None));
        let base = parse_base_url(&format!("{}/permissionmanagement", server.uri())).unwrap();
        HttpResourceClient::new(HttpClient::new().unwrap(), base, tokens)
    }

    #[test]
    fn base_url_gets_a_trailing_slash() {
        let url = parse_base_url("http://localhost:8081/permissionmanagement").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8081/permissionmanagement/");
        assert_eq!(url.join("action/1").unwrap().path(), "/permissionmanagement/action/1");
    }

    #[test]
    fn malformed_and_non_http_urls_are_config_errors() {
        assert!(matches!(parse_base_url("::not a url::"), Err(SystemError::Config { .. })));
        assert!(matches!(parse_base_url("ftp://host/x"), Err(SystemError::Config { .. })));
    }

    #[tokio::test]
    async fn sends_bearer_token_query_pairs_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/permissionmanagement/action"))
            .and(header("authorization", "Bearer access-1"))
            .and(query_param("isExact", "true"))
            .and(body_json(json!({"name": "read"})))
            .respond_with(ResponseTemplate::new(201).set_body_string("{\"id\":7}"))
            .expect(1)
            .mount(&server)
            .await;

        let request = RemoteRequest::post("action")
            .query("isExact", "true")
            .json(json!({"name": "read"}));
        let response = client_for(&server, Some("access-1")).execute(request).await.unwrap();

        assert_eq!(response.status, 201);
        assert_eq!(response.body, "{\"id\":7}");
    }

    #[tokio::test]
    async fn repeated_query_keys_are_all_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/permissionmanagement/action/search"))
            .respond_with(|request: &Request| {
                let ids: Vec<String> = request
                    .url
                    .query_pairs()
                    .filter(|(key, _)| key == "ids")
                    .map(|(_, value)| value.into_owned())
                    .collect();
                ResponseTemplate::new(200).set_body_string(ids.join(","))
            })
            .mount(&server)
            .await;

        let request = RemoteRequest::get("action/search").query_all("ids", [1, 2, 3]);
        let response = client_for(&server, None).execute(request).await.unwrap();

        assert_eq!(response.body, "1,2,3");
    }

    #[tokio::test]
    async fn anonymous_calls_carry_no_authorization_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(|request: &Request| {
                let status = if request.headers.contains_key("authorization") { 500 } else { 200 };
                ResponseTemplate::new(status)
            })
            .mount(&server)
            .await;

        let response =
            client_for(&server, None).execute(RemoteRequest::get("action")).await.unwrap();
        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn mapped_statuses_become_remote_errors() {
        let server = MockServer::start().await;
        for (status, route) in [(400, "/bad"), (401, "/expired"), (404, "/missing"), (500, "/boom")] {
            Mock::given(path(format!("/permissionmanagement{route}")))
                .respond_with(ResponseTemplate::new(status).set_body_string("detail"))
                .mount(&server)
                .await;
        }
        Mock::given(path("/permissionmanagement/conflict"))
            .respond_with(ResponseTemplate::new(409))
            .mount(&server)
            .await;

        let client = client_for(&server, Some("t"));
        let call = |route: &'static str| client.execute(RemoteRequest::get(route));

        assert_eq!(call("bad").await.unwrap_err(), RemoteError::BadRequest("detail".into()));
        assert_eq!(call("expired").await.unwrap_err(), RemoteError::TokenExpired("detail".into()));
        assert_eq!(call("missing").await.unwrap_err(), RemoteError::NotFound("detail".into()));
        assert_eq!(
            call("boom").await.unwrap_err(),
            RemoteError::InternalServerError("detail".into())
        );
        assert_eq!(call("conflict").await.unwrap().status, 409);
    }

    #[tokio::test]
    async fn factory_rejects_malformed_base_urls() {
        let factory = HttpResourceClientFactory::new(
            HttpClient::new().unwrap(),
            Arc::new(TokenHolder::default()),
        );
        assert!(matches!(factory.resource_client("not a url"), Err(SystemError::Config { .. })));
        assert!(factory.resource_client("http://localhost:8081/rolemanagement").is_ok());
    }
}
