//! Client for the hydra control-plane API
//!
//! This module provides [`RequestClient`], which handles:
//! - Login with username/password credentials
//! - Refreshing the access token with the stored refresh token
//! - Reporting traffic counters for a subscriber
//! - Pulling the subscription list assigned to this node
//!
//! Each operation is one JSON request/response exchange. Token state is kept
//! behind a read/write lock so the client can be shared across tasks.
//!
//! # Example
//! ```ignore
//! use hydra_client::client::RequestClient;
//! use hydra_client::config::Config;
//!
//! let client = RequestClient::new(Config::new())?;
//! client.login().await?;
//! client.update_traffic("abc", 100, 200).await?;
//! ```

use crate::config::Config;
use crate::constants::{JSON_CONTENT_TYPE, TOKEN_HEADER, USER_AGENT};
use crate::error::AppError;
use crate::model::requests::{LoginRequest, RefreshRequest, TrafficReport};
use crate::model::responses::{ResponseMap, TokenPair};
use reqwest::{Client as HttpClient, Method};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

/// Client for the hydra control-plane API
///
/// Owns the connection configuration and the current access/refresh token
/// pair. Tokens start empty and are only overwritten as a unit after a
/// response carried both fields; any failed call leaves them untouched.
pub struct RequestClient {
    config: Arc<Config>,
    http: HttpClient,
    tokens: RwLock<TokenPair>,
}

impl RequestClient {
    /// Creates a new client with empty tokens
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials, base URL and node id
    ///
    /// # Returns
    /// * `Ok(RequestClient)` - Ready-to-use client; no request is made yet
    /// * `Err(AppError)` - If the underlying HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http = HttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            config: Arc::new(config),
            http,
            tokens: RwLock::new(TokenPair::default()),
        })
    }

    /// Returns a reference to the client configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns a copy of the currently stored token pair
    pub async fn tokens(&self) -> TokenPair {
        self.tokens.read().await.clone()
    }

    /// Joins the base URL and an endpoint path, normalizing slashes
    fn rest_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn store_tokens(&self, pair: TokenPair) {
        let mut tokens = self.tokens.write().await;
        *tokens = pair;
    }

    /// Sends one request to the control plane and parses the response body
    ///
    /// Non-GET requests carry a `content-type: application/json;charset=utf-8`
    /// header. When `with_token` is set, the access token stored at send time
    /// is attached as `x-token`. The response body is parsed as a JSON object
    /// regardless of HTTP status; the status is only logged.
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Endpoint path relative to the base URL
    /// * `body` - Optional request body, serialized as JSON
    /// * `with_token` - Whether to attach the access token header
    ///
    /// # Returns
    /// * `Ok(ResponseMap)` - Parsed response object
    /// * `Err(AppError)` - Encoding, transport or decoding failure
    pub async fn request<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        with_token: bool,
    ) -> Result<ResponseMap, AppError> {
        let url = self.rest_url(path);
        debug!("{} {}", method, url);

        let is_get = method == Method::GET;
        let mut request = self.http.request(method, &url);

        if !is_get {
            request = request.header("content-type", JSON_CONTENT_TYPE);
        }

        if with_token {
            let tokens = self.tokens.read().await;
            request = request.header(TOKEN_HEADER, tokens.access_token.as_str());
        }

        if let Some(body) = body {
            let payload = serde_json::to_vec(body).map_err(AppError::Encoding)?;
            request = request.body(payload);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                error!("HTTP call to {} failed: {}", url, e);
                return Err(AppError::Transport(e));
            }
        };

        let status = response.status();
        let raw = response.text().await?;
        debug!("response {} from {}: {}", status, url, raw);

        match serde_json::from_str::<ResponseMap>(&raw) {
            Ok(map) => Ok(map),
            Err(source) => Err(AppError::Decoding { source, raw }),
        }
    }

    /// Authenticates with the configured credentials
    ///
    /// On success both stored tokens are replaced with the pair from the
    /// response.
    ///
    /// # Returns
    /// * `Ok(TokenPair)` - The newly stored token pair
    /// * `Err(AppError)` - If the exchange fails or the response lacks a token field
    pub async fn login(&self) -> Result<TokenPair, AppError> {
        let body = LoginRequest {
            username: &self.config.credentials.username,
            password: &self.config.credentials.password,
        };

        let result = self
            .request(Method::POST, "/auth/login", Some(&body), false)
            .await?;

        let pair = TokenPair::from_response(&result)?;
        self.store_tokens(pair.clone()).await;
        info!("✓ Authenticated successfully");
        Ok(pair)
    }

    /// Exchanges the stored refresh token for a new token pair
    ///
    /// The current access token is attached as the auth header; the update
    /// logic is identical to [`RequestClient::login`].
    ///
    /// # Returns
    /// * `Ok(TokenPair)` - The newly stored token pair
    /// * `Err(AppError)` - If the exchange fails or the response lacks a token field
    pub async fn refresh_token(&self) -> Result<TokenPair, AppError> {
        let refresh = self.tokens.read().await.refresh_token.clone();
        let body = RefreshRequest {
            refresh_token: &refresh,
        };

        let result = self
            .request(Method::POST, "/auth/refreshToken", Some(&body), true)
            .await?;

        let pair = TokenPair::from_response(&result)?;
        self.store_tokens(pair.clone()).await;
        info!("✓ Token refreshed successfully");
        Ok(pair)
    }

    /// Reports traffic counters for a subscriber hash
    ///
    /// # Arguments
    /// * `hash` - Opaque subscriber identifier
    /// * `sent` - Bytes sent since the last report
    /// * `recv` - Bytes received since the last report
    ///
    /// # Returns
    /// * `Ok(ResponseMap)` - The raw response object, uninterpreted
    /// * `Err(AppError)` - If any layer of the exchange fails
    pub async fn update_traffic(
        &self,
        hash: &str,
        sent: u64,
        recv: u64,
    ) -> Result<ResponseMap, AppError> {
        let body = TrafficReport { hash, sent, recv };
        self.request(
            Method::POST,
            "/api/subscriptions/updateTraffic",
            Some(&body),
            true,
        )
        .await
    }

    /// Pulls the subscriptions assigned to this node
    ///
    /// # Returns
    /// * `Ok(ResponseMap)` - The raw response object, uninterpreted
    /// * `Err(AppError)` - If any layer of the exchange fails
    pub async fn pull_subscriptions(&self) -> Result<ResponseMap, AppError> {
        let path = format!("/api/nodes/{}/subscriptions", self.config.node_id);
        self.request::<()>(Method::GET, &path, None, true).await
    }
}
