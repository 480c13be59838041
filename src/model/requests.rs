use serde::Serialize;

/// Credentials payload for the login endpoint
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    /// Username of the node account
    pub username: &'a str,
    /// Password of the node account
    pub password: &'a str,
}

/// Payload for exchanging a refresh token for a new token pair
#[derive(Debug, Clone, Serialize)]
pub struct RefreshRequest<'a> {
    /// The refresh token currently held by the client
    #[serde(rename = "refreshToken")]
    pub refresh_token: &'a str,
}

/// Traffic counters reported for a single subscriber hash
#[derive(Debug, Clone, Serialize)]
pub struct TrafficReport<'a> {
    /// Opaque identifier of the subscriber the counters belong to
    pub hash: &'a str,
    /// Bytes sent since the last report
    pub sent: u64,
    /// Bytes received since the last report
    pub recv: u64,
}
