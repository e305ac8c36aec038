//! Console configuration

/// Service configuration read from the environment, with local-dev
/// defaults. Numeric values parse permissively: a bad value falls back to
/// the default instead of refusing to boot.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub http_bind: String,
    pub bc_api_base_url: String,
    pub bc_access_token: Option<String>,
    pub request_timeout_secs: u64,
}

impl ConsoleConfig {
    pub fn from_env() -> Self {
        Self {
            http_bind: std::env::var("HTTP_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            bc_api_base_url: std::env::var("BC_API_BASE_URL")
                .unwrap_or_else(|_| "https://businesscommunications.googleapis.com".to_string()),
            bc_access_token: std::env::var("BC_ACCESS_TOKEN").ok(),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
        }
    }
}
