//! Transport-neutral request and response values

use std::fmt;

use authz_domain::RemoteError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Verbs used by the remote services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Reads
    Get,
    /// Creates and (un)assignments
    Post,
    /// Updates by id
    Put,
    /// Deletes by id or by query
    Delete,
}

impl HttpMethod {
    /// Upper-case wire name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A call relative to the resource client's base URL
///
/// Query pairs keep insertion order; a key may repeat for multi-valued
/// parameters such as `ids` or `sortBy`.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteRequest {
    /// Verb of the call
    pub method: HttpMethod,
    /// Path below the base URL, without a leading slash
    pub path: String,
    /// Query pairs in insertion order
    pub query: Vec<(String, String)>,
    /// JSON body, sent only when present
    pub body: Option<Value>,
}

impl RemoteRequest {
    /// Request with no query and no body
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: None }
    }

    /// `GET` request for `path`
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// `POST` request for `path`
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    /// `PUT` request for `path`
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    /// `DELETE` request for `path`
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Appends one query pair
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Adds the pair only when a value is present
    pub fn query_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Appends one pair per value, all under `key`
    pub fn query_all<I, V>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        self.query.extend(values.into_iter().map(|v| (key.to_string(), v.to_string())));
        self
    }

    /// Sets the JSON body
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// First value recorded for `key`
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Every value recorded for `key`, in order
    pub fn query_values(&self, key: &str) -> Vec<&str> {
        self.query.iter().filter(|(k, _)| k == key).map(|(_, v)| v.as_str()).collect()
    }
}

/// Status and raw body of a completed call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw body, empty when the remote sent none
    pub body: String,
}

impl RemoteResponse {
    /// Response as received, without classification
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// Applies the fixed status mapping shared by every resource client
    ///
    /// # Errors
    /// 400, 401, 404 and 500 become the matching [`RemoteError`]; everything
    /// else is a response.
    pub fn classify(status: u16, body: impl Into<String>) -> Result<Self, RemoteError> {
        let body = body.into();
        if !matches!(status, 400 | 401 | 404 | 500) {
            return Ok(Self { status, body });
        }

        let message =
            if body.trim().is_empty() { format!("remote returned status {status}") } else { body };
        Err(match status {
            400 => RemoteError::BadRequest(message),
            401 => RemoteError::TokenExpired(message),
            404 => RemoteError::NotFound(message),
            _ => RemoteError::InternalServerError(message),
        })
    }

    /// Status in `200..300`
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decodes a successful JSON body
    ///
    /// # Errors
    /// `UnexpectedStatus` for a non-2xx response, `Processing` when the body
    /// does not decode as `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, RemoteError> {
        if !self.is_success() {
            return Err(RemoteError::UnexpectedStatus {
                status: self.status,
                message: self.body.clone(),
            });
        }
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Boolean body of an existence check, `None` when the body is empty
    ///
    /// # Errors
    /// `Processing` when the body is neither empty nor a JSON boolean.
    pub fn bool_body(&self) -> Result<Option<bool>, RemoteError> {
        let trimmed = self.body.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(trimmed)?))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn builder_keeps_repeated_query_keys_in_order() {
        let request = RemoteRequest::get("action/find")
            .query_opt("name", Some("add"))
            .query_opt::<i64>("tenantId", None)
            .query_all("ids", [3_i64, 1, 2])
            .query("isExact", true);

        assert_eq!(request.query_value("name"), Some("add"));
        assert_eq!(request.query_value("tenantId"), None);
        assert_eq!(request.query_values("ids"), ["3", "1", "2"]);
        assert_eq!(request.query_value("isExact"), Some("true"));
    }

    #[test]
    fn classify_maps_only_the_fixed_statuses() {
        assert_eq!(
            RemoteResponse::classify(401, ""),
            Err(RemoteError::TokenExpired("remote returned status 401".into()))
        );
        assert!(matches!(RemoteResponse::classify(400, "bad"), Err(RemoteError::BadRequest(m)) if m == "bad"));
        assert!(matches!(RemoteResponse::classify(404, ""), Err(RemoteError::NotFound(_))));
        assert!(matches!(RemoteResponse::classify(500, ""), Err(RemoteError::InternalServerError(_))));

        for status in [200, 201, 204, 302, 403, 409, 503] {
            assert_eq!(RemoteResponse::classify(status, "x").unwrap().status, status);
        }
    }

    #[test]
    fn json_rejects_non_success_status() {
        let response = RemoteResponse::new(409, r#"{"name":"add"}"#);
        assert!(matches!(
            response.json::<serde_json::Value>(),
            Err(RemoteError::UnexpectedStatus { status: 409, .. })
        ));
    }

    #[test]
    fn json_decodes_success_body() {
        let value: serde_json::Value = RemoteResponse::new(200, r#"{"id":1}"#).json().unwrap();
        assert_eq!(value, json!({"id": 1}));
    }

    #[test]
    fn bool_body_handles_empty_and_literal_bodies() {
        assert_eq!(RemoteResponse::new(200, "").bool_body().unwrap(), None);
        assert_eq!(RemoteResponse::new(200, "true").bool_body().unwrap(), Some(true));
        assert_eq!(RemoteResponse::new(200, " false\n").bool_body().unwrap(), Some(false));
        assert!(RemoteResponse::new(200, "yes").bool_body().is_err());
    }
}
