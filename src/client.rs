use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, Response, StatusCode};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::config::AuthConfig;
use crate::error::Error;
use crate::store::{MemoryStore, SessionStore, TOKEN_KEY, USER_KEY};
use crate::types::{AuthResult, UserRecord};

/// Session client for a Xano authentication backend.
///
/// Performs login/registration calls, mirrors the resulting token and user
/// record into the session store, and builds the `Authorization` header for
/// subsequent authenticated requests. Authentication state is always
/// re-derived from the store; there is no in-memory flag.
pub struct AuthClient {
    config: AuthConfig,
    http: reqwest::Client,
    store: Option<Arc<dyn SessionStore>>,
}

/// Request options for [`AuthClient::authenticated_fetch`].
///
/// Method defaults to GET; headers and body pass through unchanged.
#[derive(Debug, Default)]
pub struct FetchOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl FetchOptions {
    /// Set the HTTP method.
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Add a request header. Caller headers take precedence over the auth
    /// header and the default content type.
    #[must_use]
    pub fn with_header(mut self, name: reqwest::header::HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Set a JSON request body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Which credential operation produced a rejection, for error wrapping.
#[derive(Clone, Copy)]
enum AuthOperation {
    Login,
    Registration,
}

impl AuthOperation {
    const fn failure_prefix(self) -> &'static str {
        match self {
            Self::Login => "Login failed",
            Self::Registration => "Registration failed",
        }
    }

    fn into_error(self, message: String) -> Error {
        match self {
            Self::Login => Error::LoginFailed(message),
            Self::Registration => Error::RegistrationFailed(message),
        }
    }
}

/// Error body shape the backend uses for rejections.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl AuthClient {
    /// Create a new client with a default HTTP client and an in-memory
    /// session store.
    #[must_use]
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            store: Some(Arc::new(MemoryStore::new())),
        }
    }

    /// Use a custom HTTP client (for connection pool reuse or testing).
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http = client;
        self
    }

    /// Use a custom session store.
    #[must_use]
    pub fn with_session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Run without any session store, for execution contexts with no
    /// session-capable storage. Every storage touch becomes a silent no-op:
    /// login/register still return their result, `token()`/`user()` read as
    /// absent, and `logout()` does nothing.
    #[must_use]
    pub fn without_session_store(mut self) -> Self {
        self.store = None;
        self
    }

    /// Log in with an email and password.
    ///
    /// On success the token and user record are mirrored into the session
    /// store (each independently, only if the backend supplied it) and the
    /// full response is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LoginFailed`] on a non-success response, carrying
    /// the backend's `message` if its error body has one and otherwise
    /// `"Login failed: <status text>"`, or [`Error::Http`] on transport
    /// failure.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResult, Error> {
        let url = self.config.endpoint_url(self.config.login_endpoint());
        let body = serde_json::json!({ "email": email, "password": password });

        let response = self.http.post(&url).json(&body).send().await?;
        self.complete_auth(response, AuthOperation::Login).await
    }

    /// Register a new account.
    ///
    /// Same contract as [`login`](Self::login) against the signup endpoint.
    /// `extra` fields are merged into the request body over `email` and
    /// `password`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegistrationFailed`] on a non-success response, or
    /// [`Error::Http`] on transport failure.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        extra: Map<String, Value>,
    ) -> Result<AuthResult, Error> {
        let url = self.config.endpoint_url(self.config.signup_endpoint());

        let mut body = Map::new();
        body.insert("email".into(), Value::String(email.to_owned()));
        body.insert("password".into(), Value::String(password.to_owned()));
        body.extend(extra);

        let response = self.http.post(&url).json(&body).send().await?;
        self.complete_auth(response, AuthOperation::Registration).await
    }

    /// Clear the stored session. No-op without a session store.
    pub fn logout(&self) {
        if let Some(store) = &self.store {
            store.remove(TOKEN_KEY);
            store.remove(USER_KEY);
        }
    }

    /// The stored auth token, if any.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store.as_ref()?.get(TOKEN_KEY)
    }

    /// The stored user record, if any.
    ///
    /// Corrupt stored data reads as absent: a deserialization failure is
    /// logged and swallowed, never propagated.
    #[must_use]
    pub fn user(&self) -> Option<UserRecord> {
        let raw = self.store.as_ref()?.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::warn!(error = %err, "stored user data is not valid JSON");
                None
            }
        }
    }

    /// Whether a non-empty token is currently stored.
    ///
    /// Token presence is the sole signal; no shape or expiry validation.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some_and(|token| !token.is_empty())
    }

    /// The `Authorization: Bearer <token>` header for the stored session,
    /// or an empty map when unauthenticated.
    #[must_use]
    pub fn auth_header(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(token) = self.token() {
            if !token.is_empty() {
                if let Ok(value) = HeaderValue::from_str(&format!("Bearer {token}")) {
                    headers.insert(AUTHORIZATION, value);
                }
            }
        }
        headers
    }

    /// Issue one HTTP request with the session's auth header attached.
    ///
    /// Headers merge lowest-to-highest precedence: the default
    /// `Content-Type: application/json`, then the auth header (if a token is
    /// stored), then the caller's headers. Method and body pass through
    /// unchanged; the response is returned uninspected, with no retry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on transport failure.
    pub async fn authenticated_fetch(
        &self,
        url: &str,
        options: FetchOptions,
    ) -> Result<Response, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(self.auth_header());
        headers.extend(options.headers);

        let mut request = self.http.request(options.method, url).headers(headers);
        if let Some(body) = options.body {
            request = request.body(body.to_string());
        }

        request.send().await.map_err(Into::into)
    }

    /// Shared success/rejection handling for login and register.
    async fn complete_auth(
        &self,
        response: Response,
        operation: AuthOperation,
    ) -> Result<AuthResult, Error> {
        let status = response.status();
        if !status.is_success() {
            // Error-body parse failure must not mask the rejection itself:
            // it degrades to the generic status-text message.
            let message = response
                .text()
                .await
                .ok()
                .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
                .and_then(|body| body.message)
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| {
                    format!("{}: {}", operation.failure_prefix(), status_text(status))
                });
            return Err(operation.into_error(message));
        }

        let result = response.json::<AuthResult>().await?;
        self.store_auth_result(&result);
        Ok(result)
    }

    /// Mirror the token and user record into the session store, each
    /// independently and only when present. No-op without a store.
    fn store_auth_result(&self, result: &AuthResult) {
        let Some(store) = &self.store else {
            return;
        };
        if let Some(token) = &result.auth_token {
            store.set(TOKEN_KEY, token);
            tracing::debug!("session token stored");
        }
        if let Some(user) = &result.user {
            if let Ok(json) = serde_json::to_string(user) {
                store.set(USER_KEY, &json);
            }
        }
    }
}

fn status_text(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("unknown status")
}
