//! Result-shape classification applied to each remote attempt
//!
//! These run inside the retry loop, so an expired token always passes
//! through untouched and the documented `None`/`false` mappings never hide
//! it.

use authz_domain::RemoteError;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::request::RemoteResponse;

pub type Attempt = Result<RemoteResponse, RemoteError>;

/// Decoded 2xx body
pub fn decode<T: DeserializeOwned>(attempt: Attempt) -> Result<T, RemoteError> {
    attempt?.json()
}

/// `Some` only when the list holds exactly one element
pub fn exactly_one<T>(items: Vec<T>) -> Option<T> {
    if items.len() == 1 {
        items.into_iter().next()
    } else {
        None
    }
}

/// Lookup through a list endpoint: zero or several matches are both absent
pub fn single_or_absent<T: DeserializeOwned>(attempt: Attempt) -> Result<Option<T>, RemoteError> {
    let items: Vec<T> = decode(attempt)?;
    if items.len() > 1 {
        debug!(matches = items.len(), "lookup is ambiguous, treating as absent");
    }
    Ok(exactly_one(items))
}

/// Lookup where a not-found signal is the absent case
pub fn absent_on_not_found<T: DeserializeOwned>(
    attempt: Attempt,
) -> Result<Option<T>, RemoteError> {
    match attempt {
        Err(RemoteError::NotFound(_)) => Ok(None),
        other => decode(other).map(Some),
    }
}

/// Create, update, delete and (un)assign: 2xx is success, any other
/// unmapped status is a plain `false`
pub fn mutation(attempt: Attempt) -> Result<bool, RemoteError> {
    let response = attempt?;
    if !response.is_success() {
        debug!(status = response.status, "mutation rejected by remote");
    }
    Ok(response.is_success())
}

/// Existence check: not found is `false`; a 2xx answers with its boolean
/// body, or `true` when the body is empty
pub fn existence(attempt: Attempt) -> Result<bool, RemoteError> {
    match attempt {
        Err(RemoteError::NotFound(_)) => Ok(false),
        Err(err) => Err(err),
        Ok(response) if !response.is_success() => Ok(false),
        Ok(response) => Ok(response.bool_body()?.unwrap_or(true)),
    }
}
