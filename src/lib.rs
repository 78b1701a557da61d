#![doc = include_str!("../README.md")]

pub mod client;
pub mod config;
pub mod error;
pub mod store;
pub mod types;

// Re-exports for convenient access
pub use client::{AuthClient, FetchOptions};
pub use config::AuthConfig;
pub use error::Error;
pub use store::{MemoryStore, SessionStore, TOKEN_KEY, USER_KEY};
pub use types::{AuthResult, UserRecord};
