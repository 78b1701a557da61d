#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Login rejected by the backend. Carries the backend's `message`
    /// field verbatim, or `"Login failed: <status text>"` when the error
    /// body has no usable message.
    #[error("{0}")]
    LoginFailed(String),
    /// Registration rejected by the backend, same message contract as
    /// [`Error::LoginFailed`] with a `"Registration failed: ..."` fallback.
    #[error("{0}")]
    RegistrationFailed(String),
    /// Transport-level failure, propagated unmodified.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
