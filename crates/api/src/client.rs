//! HTTP client
//!
//! Thin wrapper over the browser fetch API. Two flavours exist: a public
//! client that attaches the session default token when one is present, and
//! a private client bound to an explicit bearer token. Both speak JSON and
//! normalize non-2xx responses into [`AppError`] values the UI can render.

use std::sync::RwLock;

use esp_core::{AppError, AppResult};
use serde_json::Value;

use crate::config::api_url;

/// Token attached to public-client requests once the app has obtained one
/// (either the anonymous bootstrap token or a login token).
static DEFAULT_TOKEN: RwLock<Option<String>> = RwLock::new(None);

/// Install the token every subsequent [`ApiClient::public`] request carries.
pub fn set_default_token(token: impl Into<String>) {
    if let Ok(mut slot) = DEFAULT_TOKEN.write() {
        *slot = Some(token.into());
    }
}

/// Drop the default token (logout).
pub fn clear_default_token() {
    if let Ok(mut slot) = DEFAULT_TOKEN.write() {
        *slot = None;
    }
}

fn default_token() -> Option<String> {
    DEFAULT_TOKEN.read().ok().and_then(|slot| slot.clone())
}

// ============================================================================
// Error normalization
// ============================================================================

/// Map a non-2xx response into an [`AppError`].
///
/// The backend reports failures as `{"message": "..."}`; when the body is
/// not that shape the status line stands in for the message.
pub fn normalize_error(status: u16, body: Value) -> AppError {
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_else(|| format!("Request failed with status {status}"));
    AppError::server(message, status, Some(body))
}

// ============================================================================
// Client
// ============================================================================

/// JSON REST client for the EasySportsPass backend.
#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    token: Option<String>,
}

impl ApiClient {
    /// Client that authenticates with the current default token, if any.
    pub fn public() -> Self {
        Self {
            token: default_token(),
        }
    }

    /// Client bound to an explicit bearer token.
    pub fn private(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub async fn get(&self, path: &str) -> AppResult<Value> {
        self.request("GET", path, None).await
    }

    pub async fn post(&self, path: &str, body: Value) -> AppResult<Value> {
        self.request("POST", path, Some(body)).await
    }

    pub async fn put(&self, path: &str, body: Value) -> AppResult<Value> {
        self.request("PUT", path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> AppResult<Value> {
        self.request("DELETE", path, None).await
    }

    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> AppResult<Value> {
        let url = api_url(path);
        tracing::debug!(%method, %url, "api request");
        let outcome = self.send(method, &url, body).await;
        if let Err(err) = &outcome {
            tracing::warn!(%method, %url, error = %err, "api request failed");
        }
        outcome
    }

    #[cfg(target_arch = "wasm32")]
    async fn send(&self, method: &str, url: &str, body: Option<Value>) -> AppResult<Value> {
        use gloo_net::http::{Method, RequestBuilder};

        let method = match method {
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            _ => Method::GET,
        };
        let mut builder = RequestBuilder::new(url).method(method);
        if let Some(token) = &self.token {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder.json(&json).map_err(|_| AppError::Network)?,
            None => builder.build().map_err(|_| AppError::Network)?,
        };

        let response = request.send().await.map_err(|_| AppError::Network)?;
        let status = response.status();
        let parsed = response.json::<Value>().await.unwrap_or(Value::Null);

        if (200..300).contains(&status) {
            Ok(parsed)
        } else {
            Err(normalize_error(status, parsed))
        }
    }

    // Fetch is only available in the browser; host builds (unit tests) get
    // a network failure instead of a transport.
    #[cfg(not(target_arch = "wasm32"))]
    async fn send(&self, _method: &str, _url: &str, _body: Option<Value>) -> AppResult<Value> {
        Err(AppError::Network)
    }

    /// POST multipart form data (profile and supplier image uploads).
    #[cfg(target_arch = "wasm32")]
    pub async fn post_form(&self, path: &str, form: web_sys::FormData) -> AppResult<Value> {
        use gloo_net::http::RequestBuilder;

        let url = api_url(path);
        let mut builder = RequestBuilder::new(&url).method(gloo_net::http::Method::POST);
        if let Some(token) = &self.token {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
        let request = builder.body(form).map_err(|_| AppError::Network)?;
        let response = request.send().await.map_err(|_| AppError::Network)?;
        let status = response.status();
        let parsed = response.json::<Value>().await.unwrap_or(Value::Null);
        if (200..300).contains(&status) {
            Ok(parsed)
        } else {
            Err(normalize_error(status, parsed))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_normalize_error_reads_backend_message() {
        let err = normalize_error(409, json!({ "message": "Email already registered" }));
        assert_eq!(err.user_message("fallback"), "Email already registered");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn test_normalize_error_without_message_field() {
        let err = normalize_error(500, json!({ "detail": "boom" }));
        assert_eq!(err.user_message("x"), "Request failed with status 500");
    }

    #[test]
    fn test_default_token_round_trip() {
        clear_default_token();
        assert!(ApiClient::public().token.is_none());

        set_default_token("abc");
        assert_eq!(ApiClient::public().token.as_deref(), Some("abc"));

        clear_default_token();
        assert!(ApiClient::public().token.is_none());
    }

    #[test]
    fn test_private_client_keeps_its_token() {
        let client = ApiClient::private("tkn");
        assert_eq!(client.token.as_deref(), Some("tkn"));
    }
}
