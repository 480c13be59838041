use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Generic JSON object returned by the control plane
///
/// The traffic and subscription endpoints return server-defined records whose
/// shape this client does not interpret; they are handed to the caller as-is.
pub type ResponseMap = Map<String, Value>;

/// Access/refresh token pair held by the client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived credential attached to authenticated requests
    #[serde(rename = "accessToken")]
    pub access_token: String,
    /// Longer-lived credential exchanged for a new pair
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
}

impl TokenPair {
    /// Extracts a token pair from a response mapping, validating both fields
    ///
    /// # Returns
    /// * `Ok(TokenPair)` - Both fields present and strings
    /// * `Err(AppError)` - A field is missing or not a string, naming the field
    pub fn from_response(map: &ResponseMap) -> Result<Self, AppError> {
        Ok(Self {
            access_token: string_field(map, "accessToken")?,
            refresh_token: string_field(map, "refreshToken")?,
        })
    }
}

fn string_field(map: &ResponseMap, field: &'static str) -> Result<String, AppError> {
    match map.get(field) {
        None => Err(AppError::MissingField(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(AppError::InvalidFieldType(field)),
    }
}
