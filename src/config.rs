use url::Url;

/// Xano authentication endpoint configuration.
///
/// Required fields are constructor parameters — no runtime "missing field" errors.
///
/// ```rust,ignore
/// use xano_auth::AuthConfig;
///
/// let config = AuthConfig::new("https://x8ki-letl-twmt.n7.xano.io/api:v1".parse()?);
/// // Optional overrides via chaining:
/// let config = config.with_login_endpoint("/custom/login");
/// ```
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct AuthConfig {
    pub(crate) base_url: Url,
    pub(crate) login_endpoint: String,
    pub(crate) signup_endpoint: String,
}

impl AuthConfig {
    /// Create a new configuration for the given API base URL.
    ///
    /// Endpoint paths default to `/auth/login` and `/auth/signup`.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            login_endpoint: "/auth/login".into(),
            signup_endpoint: "/auth/signup".into(),
        }
    }

    /// Override the login endpoint path.
    #[must_use]
    pub fn with_login_endpoint(mut self, path: impl Into<String>) -> Self {
        self.login_endpoint = path.into();
        self
    }

    /// Override the signup endpoint path.
    #[must_use]
    pub fn with_signup_endpoint(mut self, path: impl Into<String>) -> Self {
        self.signup_endpoint = path.into();
        self
    }

    /// API base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Login endpoint path.
    #[must_use]
    pub fn login_endpoint(&self) -> &str {
        &self.login_endpoint
    }

    /// Signup endpoint path.
    #[must_use]
    pub fn signup_endpoint(&self) -> &str {
        &self.signup_endpoint
    }

    /// Join the base URL with an endpoint path.
    ///
    /// `Url` normalizes host-only URLs to a trailing slash; trim it so
    /// `/auth/login` never produces a doubled slash.
    pub(crate) fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }
}
