//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_api_timeout_secs() -> u64 {
    30
}

#[derive(Clone, Debug, Deserialize)]
/// Settings shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    pub secret: String,
    /// Base URL of the auth9-core REST API.
    pub api_base_url: String,
    /// Externally visible URL of this dashboard, used for OAuth redirects.
    pub public_url: String,
    /// OAuth client id the dashboard is registered under.
    pub client_id: String,
    #[serde(default = "default_login_path")]
    pub login_path: String,
    #[serde(default = "default_api_timeout_secs")]
    pub api_timeout_secs: u64,
    #[serde(default)]
    pub cookie_secure: bool,
}

impl ServerConfig {
    pub fn callback_url(&self) -> String {
        format!("{}/auth/callback", self.public_url.trim_end_matches('/'))
    }
}
