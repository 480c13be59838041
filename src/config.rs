use crate::constants::{DEFAULT_BASE_URL, DEFAULT_REST_TIMEOUT};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Authentication credentials for the control-plane account
pub struct Credentials {
    /// Username of the node account
    pub username: String,
    /// Password of the node account
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the control-plane REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Main configuration for the hydra client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Opaque identifier of this node, used to scope the subscriptions query
    pub node_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration instance from environment variables
    ///
    /// Reads `HYDRA_BASE_URL`, `HYDRA_NODE_ID`, `HYDRA_USERNAME`,
    /// `HYDRA_PASSWORD` and `HYDRA_REST_TIMEOUT`, loading a `.env` file first
    /// if one is present.
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        // Explicitly load the .env file
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let username = get_env_or_default("HYDRA_USERNAME", String::from("default_username"));
        let password = get_env_or_default("HYDRA_PASSWORD", String::from("default_password"));
        let node_id = get_env_or_default("HYDRA_NODE_ID", String::from("default_node_id"));

        // Check if we are using default values
        if username == "default_username" {
            error!("HYDRA_USERNAME not found in environment variables or .env file");
        }
        if password == "default_password" {
            error!("HYDRA_PASSWORD not found in environment variables or .env file");
        }
        if node_id == "default_node_id" {
            error!("HYDRA_NODE_ID not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { username, password },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("HYDRA_BASE_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("HYDRA_REST_TIMEOUT", DEFAULT_REST_TIMEOUT),
            },
            node_id,
        }
    }

    /// Creates a configuration with explicit values, bypassing the environment
    ///
    /// This is the constructor used by tests and by applications that manage
    /// their own configuration source.
    pub fn with_credentials(base_url: &str, node_id: &str, username: &str, password: &str) -> Self {
        Config {
            credentials: Credentials {
                username: username.to_string(),
                password: password.to_string(),
            },
            rest_api: RestApiConfig {
                base_url: base_url.to_string(),
                timeout: DEFAULT_REST_TIMEOUT,
            },
            node_id: node_id.to_string(),
        }
    }
}
