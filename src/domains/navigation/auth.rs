//! Auth-status checks.
//!
//! The endpoint answers `{ "isLoggedIn": bool }`. Its implementation lives
//! outside this crate; only the client side is defined here.

use async_trait::async_trait;
use reqwest::header::COOKIE;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors from an auth-status check.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The request could not be sent or did not complete.
    #[error("Auth request failed: {0}")]
    Request(String),

    /// The endpoint answered with a non-success status.
    #[error("Auth endpoint returned HTTP {0}")]
    Status(u16),

    /// The body was not `{ "isLoggedIn": bool }`.
    #[error("Invalid auth response: {0}")]
    Decode(String),
}

/// Body of the auth-status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatus {
    pub is_logged_in: bool,
}

/// Something that can tell whether the current visitor is signed in.
#[async_trait]
pub trait AuthChecker: Send + Sync {
    async fn check(&self) -> Result<bool, AuthError>;
}

/// Checks a remote auth-status endpoint over HTTP.
#[derive(Debug, Clone)]
pub struct HttpAuthChecker {
    client: reqwest::Client,
    endpoint: String,
    cookie: Option<String>,
}

impl HttpAuthChecker {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            cookie: None,
        }
    }

    /// Forward the visitor's `Cookie` header with the check.
    pub fn with_cookie(mut self, cookie: Option<String>) -> Self {
        self.cookie = cookie;
        self
    }
}

#[async_trait]
impl AuthChecker for HttpAuthChecker {
    async fn check(&self) -> Result<bool, AuthError> {
        let mut request = self.client.get(&self.endpoint);
        if let Some(cookie) = &self.cookie {
            request = request.header(COOKIE, cookie);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::Status(status.as_u16()));
        }

        let body: AuthStatus = response
            .json()
            .await
            .map_err(|e| AuthError::Decode(e.to_string()))?;

        debug!("Auth status: logged_in={}", body.is_logged_in);
        Ok(body.is_logged_in)
    }
}

/// Always answers the same value. Used when no endpoint is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticAuthChecker(pub bool);

#[async_trait]
impl AuthChecker for StaticAuthChecker {
    async fn check(&self) -> Result<bool, AuthError> {
        Ok(self.0)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{serve, session_endpoint};
    use super::*;
    use axum::{Router, http::StatusCode, routing::get};

    #[test]
    fn test_status_body_shape() {
        let status: AuthStatus = serde_json::from_str(r#"{"isLoggedIn": true}"#).unwrap();
        assert!(status.is_logged_in);
        assert!(serde_json::from_str::<AuthStatus>(r#"{"logged_in": true}"#).is_err());
    }

    #[test]
    fn test_static_checker() {
        let result = tokio_test::block_on(StaticAuthChecker(true).check());
        assert!(result.unwrap());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_request_error() {
        // port 9 (discard) on localhost is expected to refuse connections
        let checker =
            HttpAuthChecker::new(reqwest::Client::new(), "http://127.0.0.1:9/api/check-auth");
        let err = checker.check().await.unwrap_err();
        assert!(matches!(err, AuthError::Request(_)));
    }

    #[tokio::test]
    async fn test_logged_in_response() {
        let app = Router::new().route(
            "/api/check-auth",
            get(|| async { axum::Json(serde_json::json!({"isLoggedIn": true})) }),
        );
        let base = serve(app).await;

        let checker = HttpAuthChecker::new(reqwest::Client::new(), format!("{base}/api/check-auth"));
        assert!(checker.check().await.unwrap());
    }

    #[tokio::test]
    async fn test_cookie_is_forwarded() {
        let base = serve(session_endpoint()).await;
        let endpoint = format!("{base}/api/check-auth");

        let with_cookie = HttpAuthChecker::new(reqwest::Client::new(), endpoint.clone())
            .with_cookie(Some("session=abc".to_string()));
        assert!(with_cookie.check().await.unwrap());

        let without = HttpAuthChecker::new(reqwest::Client::new(), endpoint);
        assert!(!without.check().await.unwrap());
    }

    #[tokio::test]
    async fn test_error_status_maps_to_status_error() {
        let app = Router::new().route(
            "/api/check-auth",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let base = serve(app).await;

        let checker = HttpAuthChecker::new(reqwest::Client::new(), format!("{base}/api/check-auth"));
        let err = checker.check().await.unwrap_err();
        assert!(matches!(err, AuthError::Status(500)));
    }

    #[tokio::test]
    async fn test_unexpected_body_is_decode_error() {
        let app = Router::new().route("/api/check-auth", get(|| async { "not json" }));
        let base = serve(app).await;

        let checker = HttpAuthChecker::new(reqwest::Client::new(), format!("{base}/api/check-auth"));
        let err = checker.check().await.unwrap_err();
        assert!(matches!(err, AuthError::Decode(_)));
    }
}
