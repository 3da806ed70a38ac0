//! HTTP client for the Bandcamp mobile/web API.
//!
//! All endpoints live under `https://bandcamp.com/api` and signal failure
//! inside the JSON body rather than via HTTP status:
//!
//! ```json
//! { "error": true, "error_message": "No such album" }
//! ```
//!
//! Error bodies are mapped to [`BandcampError::NotFound`] when the message
//! indicates a missing resource and [`BandcampError::Api`] otherwise.
//! Authenticated endpoints take the identity token as a
//! `Cookie: identity=<token>` header.

use crate::error::{BandcampError, Result};
use reqwest::blocking::Client;
use serde_json::Value;

pub(crate) const BASE_URL: &str = "https://bandcamp.com/api";
const DEFAULT_USER_AGENT: &str = "bandcamp-api/1.0";

/// Blocking HTTP client for the Bandcamp API.
///
/// Holds a [`reqwest::blocking::Client`] and an optional identity token.
/// API methods are implemented in separate modules (`search`, `tralbum`,
/// `band`, `collection`) as `impl BandcampClient` blocks. The client is
/// `Sync`; independent calls may be issued concurrently over one instance
/// and each call is a fresh round trip with no retries or caching.
pub struct BandcampClient {
    http: Client,
    identity: Option<String>,
}

/// Builder for [`BandcampClient`].
///
/// Obtained from [`BandcampClient::builder`]. All parameters are optional:
/// without an identity token the collection endpoints fail with
/// [`BandcampError::AuthRequired`]; without a supplied transport a fresh
/// [`reqwest::blocking::Client`] is built and owned (and therefore torn
/// down) by the client. A caller-supplied transport is used as-is and its
/// lifecycle stays with the caller.
#[derive(Default)]
pub struct BandcampClientBuilder {
    identity: Option<String>,
    user_agent: Option<String>,
    http: Option<Client>,
}

impl BandcampClientBuilder {
    /// Set the identity cookie value for the collection endpoints.
    pub fn identity_token(mut self, token: impl Into<String>) -> Self {
        self.identity = Some(token.into());
        self
    }

    /// Override the default `User-Agent` (`bandcamp-api/1.0`).
    ///
    /// Ignored when a pre-built transport is supplied via
    /// [`http`](Self::http), which carries its own default headers.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a caller-supplied transport instead of building one.
    pub fn http(mut self, http: Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the client, constructing the transport if none was supplied.
    pub fn build(self) -> Result<BandcampClient> {
        let http = match self.http {
            Some(http) => http,
            None => Client::builder()
                .user_agent(
                    self.user_agent
                        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned()),
                )
                .build()?,
        };
        Ok(BandcampClient {
            http,
            identity: self.identity,
        })
    }
}

impl BandcampClient {
    /// Create an unauthenticated client with the default user agent.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a client with an identity token for the collection endpoints.
    pub fn with_identity(token: impl Into<String>) -> Result<Self> {
        Self::builder().identity_token(token).build()
    }

    /// Start building a client with explicit parameters.
    pub fn builder() -> BandcampClientBuilder {
        BandcampClientBuilder::default()
    }

    /// Whether an identity token is configured (does not validate it).
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Fail with [`BandcampError::AuthRequired`] when no token is set.
    ///
    /// Called by the collection methods before any request is made.
    pub(crate) fn require_identity(&self) -> Result<()> {
        if self.identity.is_some() {
            Ok(())
        } else {
            Err(BandcampError::AuthRequired)
        }
    }

    fn cookie_header(&self) -> Option<String> {
        self.identity.as_deref().map(|t| format!("identity={t}"))
    }

    /// Send a GET request and return the checked JSON body.
    pub(crate) fn get(&self, url: &str, query: &[(&str, String)]) -> Result<Value> {
        let mut req = self.http.get(url).query(query);
        if let Some(cookie) = self.cookie_header() {
            req = req.header("Cookie", cookie);
        }
        let json: Value = req.send()?.json()?;
        check_error(json)
    }

    /// Send a POST request with a JSON body and return the checked JSON body.
    pub(crate) fn post(&self, url: &str, body: &Value) -> Result<Value> {
        let mut req = self.http.post(url).json(body);
        if let Some(cookie) = self.cookie_header() {
            req = req.header("Cookie", cookie);
        }
        let json: Value = req.send()?.json()?;
        check_error(json)
    }
}

/// Inspect a response body for Bandcamp's in-band error marker.
///
/// Returns the body unchanged unless `error` is `true`, in which case the
/// `error_message` decides between [`BandcampError::NotFound`] ("not
/// found" / "no such" phrasing) and [`BandcampError::Api`].
pub(crate) fn check_error(json: Value) -> Result<Value> {
    if json["error"].as_bool() == Some(true) {
        let message = json["error_message"]
            .as_str()
            .unwrap_or("unknown error")
            .to_owned();
        let lower = message.to_lowercase();
        if lower.contains("not found") || lower.contains("no such") {
            return Err(BandcampError::NotFound { message });
        }
        return Err(BandcampError::Api { message });
    }
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_check_error_passthrough() {
        let body = json!({"results": [], "error": false});
        assert_eq!(check_error(body.clone()).unwrap(), body);
        let no_marker = json!({"id": 1});
        assert_eq!(check_error(no_marker.clone()).unwrap(), no_marker);
    }

    #[test]
    fn test_check_error_not_found() {
        let body = json!({"error": true, "error_message": "No such album"});
        match check_error(body) {
            Err(BandcampError::NotFound { message }) => assert_eq!(message, "No such album"),
            other => panic!("expected NotFound, got {other:?}"),
        }
        let body = json!({"error": true, "error_message": "Band not found"});
        assert!(matches!(
            check_error(body),
            Err(BandcampError::NotFound { .. })
        ));
    }

    #[test]
    fn test_check_error_generic() {
        let body = json!({"error": true, "error_message": "Other failure"});
        match check_error(body) {
            Err(BandcampError::Api { message }) => assert_eq!(message, "Other failure"),
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[test]
    fn test_check_error_missing_message() {
        let body = json!({"error": true});
        match check_error(body) {
            Err(BandcampError::Api { message }) => assert_eq!(message, "unknown error"),
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[test]
    fn test_builder_identity() {
        let client = BandcampClient::builder()
            .identity_token("test_token")
            .user_agent("test-agent/1.0")
            .build()
            .unwrap();
        assert!(client.is_authenticated());
        assert!(client.require_identity().is_ok());

        let anon = BandcampClient::new().unwrap();
        assert!(!anon.is_authenticated());
        assert!(matches!(
            anon.require_identity(),
            Err(BandcampError::AuthRequired)
        ));
    }
}
