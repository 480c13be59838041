//! # Hydra Client
//!
//! Client library for the hydra control-plane API. A node authenticates with
//! username/password credentials, keeps a short-lived access token fresh via a
//! refresh token, reports traffic counters for its subscribers and pulls the
//! subscription list assigned to it.
//!
//! All operations go through [`client::RequestClient`], which wraps every
//! endpoint in a single JSON request/response exchange.
//!
//! # Example
//! ```ignore
//! use hydra_client::prelude::*;
//!
//! let config = Config::new();
//! let client = RequestClient::new(config)?;
//!
//! client.login().await?;
//! let subscriptions = client.pull_subscriptions().await?;
//! ```

/// Client for the control-plane endpoints
pub mod client;
/// Configuration loading and structures
pub mod config;
/// Global constants
pub mod constants;
/// Error types for the library
pub mod error;
/// Request and response models
pub mod model;
/// Commonly used types and traits
pub mod prelude;
/// Environment and logging utilities
pub mod utils;

/// Current version of the crate, taken from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the current version of the crate
pub fn version() -> &'static str {
    VERSION
}
