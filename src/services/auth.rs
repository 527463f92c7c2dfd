//! OAuth authorization-code login against the auth9 backend.

use reqwest::Url;
use uuid::Uuid;

use crate::api::TokenExchanger;
use crate::domain::auth::CodeExchange;
use crate::domain::types::AccessToken;
use crate::models::config::ServerConfig;
use crate::services::{ServiceError, ServiceResult, action_error};

pub const OAUTH_STATE_KEY: &str = "oauth_state";
pub const OAUTH_SCOPE: &str = "openid profile email";

/// Random value tying the callback to the login that started it.
pub fn new_state() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Builds the backend authorize URL the browser is sent to.
pub fn authorize_redirect(
    authorize_url: &str,
    config: &ServerConfig,
    state: &str,
) -> ServiceResult<String> {
    let callback = config.callback_url();
    let url = Url::parse_with_params(
        authorize_url,
        &[
            ("response_type", "code"),
            ("client_id", config.client_id.as_str()),
            ("redirect_uri", callback.as_str()),
            ("scope", OAUTH_SCOPE),
            ("state", state),
        ],
    )
    .map_err(|err| {
        log::error!("Invalid authorize URL {authorize_url}: {err}");
        ServiceError::Unexpected
    })?;
    Ok(url.into())
}

/// Validates the callback and trades the code for an access token.
pub async fn complete_login<A>(
    api: &A,
    config: &ServerConfig,
    code: Option<&str>,
    state: Option<&str>,
    expected_state: Option<&str>,
) -> ServiceResult<AccessToken>
where
    A: TokenExchanger + ?Sized,
{
    let code = code
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .ok_or_else(|| ServiceError::Form("Missing authorization code".to_string()))?;

    match (state, expected_state) {
        (Some(state), Some(expected)) if state == expected => {}
        _ => {
            log::warn!("OAuth state mismatch on callback");
            return Err(ServiceError::Form("Invalid login state".to_string()));
        }
    }

    let request = CodeExchange::new(&config.client_id, code, &config.callback_url());
    let response = api
        .exchange_code(&request)
        .await
        .map_err(|err| action_error("Failed to exchange authorization code", err))?;

    Ok(AccessToken::new(response.access_token)?)
}

#[cfg(test)]
pub(crate) fn test_config() -> ServerConfig {
    ServerConfig {
        domain: "localhost".to_string(),
        address: "127.0.0.1".to_string(),
        port: 3000,
        secret: "x".repeat(64),
        api_base_url: "http://localhost:8080".to_string(),
        public_url: "http://localhost:3000/".to_string(),
        client_id: "auth9-portal".to_string(),
        login_path: "/login".to_string(),
        api_timeout_secs: 5,
        cookie_secure: false,
    }
}

#[cfg(test)]
mod url_tests {
    use super::*;

    #[test]
    fn authorize_url_carries_oauth_params() {
        let url = authorize_redirect(
            "http://localhost:8080/api/v1/auth/authorize",
            &test_config(),
            "abc",
        )
        .unwrap();
        let parsed = Url::parse(&url).unwrap();
        let pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();

        assert!(pairs.contains(&("response_type".to_string(), "code".to_string())));
        assert!(pairs.contains(&(
            "redirect_uri".to_string(),
            "http://localhost:3000/auth/callback".to_string()
        )));
        assert!(pairs.contains(&("scope".to_string(), OAUTH_SCOPE.to_string())));
        assert!(pairs.contains(&("state".to_string(), "abc".to_string())));
    }

    #[test]
    fn states_are_unique() {
        assert_ne!(new_state(), new_state());
    }
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::api::errors::ApiError;
    use crate::api::mock::MockApi;
    use crate::domain::auth::TokenResponse;

    #[actix_web::test]
    async fn mismatched_state_skips_exchange() {
        let mut api = MockApi::new();
        api.expect_exchange_code().times(0);

        let result =
            complete_login(&api, &test_config(), Some("code"), Some("evil"), Some("good")).await;

        assert_eq!(
            result.unwrap_err(),
            ServiceError::Form("Invalid login state".to_string())
        );
    }

    #[actix_web::test]
    async fn code_is_exchanged_for_token() {
        let mut api = MockApi::new();
        api.expect_exchange_code()
            .withf(|req| {
                req.code == "abc"
                    && req.grant_type == "authorization_code"
                    && req.redirect_uri == "http://localhost:3000/auth/callback"
            })
            .times(1)
            .returning(|_| {
                Ok(TokenResponse {
                    access_token: "jwt".to_string(),
                    token_type: Some("Bearer".to_string()),
                    expires_in: Some(3600),
                    refresh_token: None,
                    id_token: None,
                })
            });

        let token = complete_login(&api, &test_config(), Some("abc"), Some("s"), Some("s"))
            .await
            .unwrap();

        assert_eq!(token.as_str(), "jwt");
    }

    #[actix_web::test]
    async fn rejected_code_reports_backend_message() {
        let mut api = MockApi::new();
        api.expect_exchange_code().returning(|_| {
            Err(ApiError::Status {
                status: 400,
                message: "Invalid authorization code".to_string(),
            })
        });

        let result = complete_login(&api, &test_config(), Some("abc"), Some("s"), Some("s")).await;

        assert_eq!(
            result,
            Err(ServiceError::Upstream("Invalid authorization code".to_string()))
        );
    }
}
