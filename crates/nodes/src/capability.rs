use {
    async_trait::async_trait,
    secrecy::{ExposeSecret, Secret},
    serde::Deserialize,
};

use crate::error::Result;

// ── Credentials ─────────────────────────────────────────────────────────────

/// Credential material the host resolved for one credential type.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    /// Opaque access token, e.g. a bot token from @BotFather.
    #[serde(rename = "accessToken")]
    pub access_token: Secret<String>,
}

impl Credentials {
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: Secret::new(access_token.into()),
        }
    }

    /// True when the stored token is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.access_token.expose_secret().is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

/// Host capability: look up credentials by credential-type name.
///
/// `Ok(None)` means no credentials of that type are configured; storage
/// failures surface as `Error::Operation`. The node only reads the result,
/// once per item, and never caches it.
#[async_trait]
pub trait CredentialsProvider: Send + Sync {
    async fn resolve(&self, credential_type: &str) -> Result<Option<Credentials>>;
}

// ── HTTP ────────────────────────────────────────────────────────────────────

/// HTTP method subset used by integration nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// One outbound HTTP request with an optional JSON body.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            body: None,
        }
    }

    #[must_use]
    pub fn post(url: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            body: Some(body),
        }
    }
}

/// Host capability: issue one HTTP request, JSON-encoding the body and
/// decoding the response body as JSON.
///
/// Implementations return the node error taxonomy directly, so failures
/// that are already typed propagate unchanged; anything foreign (transport,
/// decode) is wrapped into `Error::Operation` with the cause preserved.
/// Timeouts are whatever the implementation defaults to — nodes set none.
#[async_trait]
pub trait HttpRequester: Send + Sync {
    async fn request_json(&self, request: HttpRequest) -> Result<serde_json::Value>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_deserialize_from_host_json() {
        let credentials: Credentials =
            serde_json::from_str(r#"{"accessToken": "123:ABC"}"#).expect("deserialize");
        assert_eq!(credentials.access_token.expose_secret(), "123:ABC");
        assert!(!credentials.is_empty());
    }

    #[test]
    fn debug_never_exposes_the_token() {
        let credentials = Credentials::new("super-secret");
        let rendered = format!("{credentials:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("REDACTED"));
    }

    #[test]
    fn empty_token_is_detected() {
        assert!(Credentials::new("").is_empty());
    }

    #[test]
    fn post_request_carries_body() {
        let request = HttpRequest::post("https://example.org", serde_json::json!({"a": 1}));
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.method.as_str(), "POST");
        assert!(request.body.is_some());
    }
}
