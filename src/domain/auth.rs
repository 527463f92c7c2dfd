use serde::{Deserialize, Serialize};

/// Authorization-code exchange request for `/api/v1/auth/token`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CodeExchange {
    pub grant_type: &'static str,
    pub client_id: String,
    pub code: String,
    pub redirect_uri: String,
}

impl CodeExchange {
    pub fn new(client_id: &str, code: &str, redirect_uri: &str) -> Self {
        Self {
            grant_type: "authorization_code",
            client_id: client_id.to_string(),
            code: code.to_string(),
            redirect_uri: redirect_uri.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub id_token: Option<String>,
}
