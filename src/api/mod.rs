//! HTTP client boundary. Every network call the dashboard makes goes
//! through [`ApiClient`], which attaches the session credential on the way
//! out and handles session expiry on the way in, so individual call sites
//! never repeat that logic.

use std::rc::Rc;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

mod analytics;
mod dashboard;
mod documents;
mod error;
mod health;
mod models;
mod session;

pub use documents::ExportFormat;
pub use error::{ApiError, Result};
pub use models::*;
pub use session::{BrowserSession, MemorySession, SessionStore, TOKEN_KEY};

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Fixed timeout applied to every request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Route the whole app is sent to when the backend reports an expired or
/// invalid session.
const LOGIN_PATH: &str = "/login";

/// Backend base address: build-time override with a hard-coded fallback.
pub fn base_url() -> &'static str {
    option_env!("DOCINTEL_API_BASE").unwrap_or(DEFAULT_BASE_URL)
}

pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Rc<dyn SessionStore>,
    on_unauthorized: Rc<dyn Fn()>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_session(Rc::new(BrowserSession), Rc::new(redirect_to_login))
    }

    /// Injectable constructor. Tests swap in a [`MemorySession`] and a
    /// recording callback instead of browser storage and a navigation.
    pub fn with_session(session: Rc<dyn SessionStore>, on_unauthorized: Rc<dyn Fn()>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url().to_string(),
            session,
            on_unauthorized,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Outbound interception: start a request with the fixed timeout and,
    /// when the store currently holds a credential, a bearer Authorization
    /// header. The store is re-read on every call; an absent credential
    /// sends the request unauthenticated rather than blocking.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self
            .http
            .request(method, self.url(path))
            .timeout(REQUEST_TIMEOUT);
        if let Some(token) = self.session.get() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Send and run the response through the inbound interception layer.
    async fn dispatch(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await?;
        self.intercept(response).await
    }

    /// Inbound interception, applied uniformly to every response:
    /// 401 tears down the session and navigates to the login route before
    /// any caller-level error handling runs; other non-2xx statuses become
    /// [`ApiError::Server`] carrying the body's message field when present.
    async fn intercept(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            self.expire_session();
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let message = response
                .text()
                .await
                .ok()
                .and_then(|body| server_message(&body));
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    /// Erase the stored credential and fire the redirect strategy. Both
    /// actions are idempotent, so overlapping 401 responses only repeat
    /// work that has no further effect.
    fn expire_session(&self) {
        self.session.clear();
        (self.on_unauthorized)();
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.dispatch(self.request(Method::GET, path)).await?;
        decode(response).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let builder = self.request(Method::POST, path).json(body);
        let response = self.dispatch(builder).await?;
        decode(response).await
    }

    /// POST without a body, for trigger-style endpoints.
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.dispatch(self.request(Method::POST, path)).await?;
        decode(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.dispatch(self.request(Method::DELETE, path)).await?;
        Ok(())
    }

    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Vec<u8>> {
        let response = self.dispatch(self.request(Method::GET, path)).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(format!("unexpected response: {e}")))
}

/// Pull a human-readable message out of an error body. The backend answers
/// with either `{"message": ...}` or `{"error": ...}`.
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("error"))?
        .as_str()
        .map(str::to_string)
}

fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(LOGIN_PATH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn test_client(session: Rc<MemorySession>, fired: Rc<Cell<u32>>) -> ApiClient {
        let callback = move || fired.set(fired.get() + 1);
        ApiClient::with_session(session, Rc::new(callback))
    }

    #[test]
    fn bearer_header_reflects_current_store_value() {
        let session = Rc::new(MemorySession::default());
        let client = test_client(session.clone(), Rc::new(Cell::new(0)));

        // No credential: the request goes out unauthenticated.
        let request = client
            .request(Method::GET, "/api/documents")
            .build()
            .unwrap();
        assert!(request.headers().get("authorization").is_none());

        // Token written after client construction is still picked up,
        // because the store is re-read per request.
        session.set("tok-42");
        let request = client
            .request(Method::GET, "/api/documents")
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get("authorization").unwrap(),
            "Bearer tok-42"
        );

        session.clear();
        let request = client
            .request(Method::GET, "/api/documents")
            .build()
            .unwrap();
        assert!(request.headers().get("authorization").is_none());
    }

    #[test]
    fn requests_carry_the_fixed_timeout_and_base_url() {
        let client = test_client(Rc::new(MemorySession::default()), Rc::new(Cell::new(0)));
        let request = client
            .request(Method::GET, "/actuator/health")
            .build()
            .unwrap();
        assert_eq!(request.timeout(), Some(&REQUEST_TIMEOUT));
        assert_eq!(
            request.url().as_str(),
            format!("{}/actuator/health", base_url())
        );
    }

    #[test]
    fn unauthorized_clears_session_and_fires_redirect_once() {
        let session = Rc::new(MemorySession::default());
        let fired = Rc::new(Cell::new(0u32));
        let client = test_client(session.clone(), fired.clone());
        session.set("stale-token");

        let response = reqwest::Response::from(
            http::Response::builder()
                .status(401)
                .body("unauthorized")
                .unwrap(),
        );
        let result = futures::executor::block_on(client.intercept(response));

        assert_eq!(result.unwrap_err(), ApiError::Unauthorized);
        assert_eq!(session.get(), None);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn server_errors_surface_the_body_message() {
        let client = test_client(Rc::new(MemorySession::default()), Rc::new(Cell::new(0)));
        let response = reqwest::Response::from(
            http::Response::builder()
                .status(500)
                .body(r#"{"message": "tika is down"}"#)
                .unwrap(),
        );
        let err = futures::executor::block_on(client.intercept(response)).unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 500,
                message: Some("tika is down".to_string())
            }
        );
    }

    #[test]
    fn server_message_reads_message_then_error_field() {
        assert_eq!(
            server_message(r#"{"message": "bad input"}"#),
            Some("bad input".to_string())
        );
        assert_eq!(
            server_message(r#"{"error": "Search failed: boom"}"#),
            Some("Search failed: boom".to_string())
        );
        assert_eq!(server_message("not json"), None);
        assert_eq!(server_message(r#"{"detail": 5}"#), None);
    }
}
