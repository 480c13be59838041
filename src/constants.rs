/// User agent string used in HTTP requests to identify this client to the control plane
pub const USER_AGENT: &str = "hydra-client/0.1.0";
/// Header carrying the access token on authenticated requests
pub const TOKEN_HEADER: &str = "x-token";
/// Content type set on every non-GET request
pub const JSON_CONTENT_TYPE: &str = "application/json;charset=utf-8";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_REST_TIMEOUT: u64 = 30;
/// Default base URL used when HYDRA_BASE_URL is not configured
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
