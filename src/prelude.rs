//! # Hydra Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types from the library.
//!
//! ## Usage
//!
//! ```rust
//! use hydra_client::prelude::*;
//!
//! let config = Config::with_credentials("http://127.0.0.1:8080", "n1", "user", "pass");
//! let client = RequestClient::new(config);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the hydra client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT
// ============================================================================

/// Control-plane API client
pub use crate::client::RequestClient;

// ============================================================================
// MODELS
// ============================================================================

/// Request payloads sent to the control plane
pub use crate::model::requests::{LoginRequest, RefreshRequest, TrafficReport};

/// Response types returned by the control plane
pub use crate::model::responses::{ResponseMap, TokenPair};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Environment variable helpers
pub use crate::utils::config::{get_env_or_default, get_env_or_none};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export reqwest for HTTP operations (if needed for custom implementations)
pub use reqwest::Method;
