//! Loaders and actions behind every dashboard page.
//!
//! Loaders turn query parameters into a page document and never fail on an
//! upstream error: the error is logged and reported inside the page. Actions
//! parse the submitted form into an intent, run exactly one backend mutation
//! and answer with an [`ActionReply`] or a [`ServiceError`].

use std::str::FromStr;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::forms::{FormError, parse_form};

pub mod abac;
pub mod actions;
pub mod analytics;
pub mod audit_logs;
pub mod auth;
pub mod branding;
pub mod email_templates;
pub mod identity_providers;
pub mod linked_identities;
pub mod security_alerts;
pub mod services;
pub mod sessions;
pub mod tenant_services;
pub mod tenants;
pub mod webhooks;

#[cfg(all(test, feature = "test-mocks"))]
pub(crate) mod fixtures;

/// Errors surfaced by loaders and actions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// No valid access token; answered with a login redirect.
    #[error("Unauthorized")]
    Unauthorized,

    /// Missing or unknown `intent`; never forwarded upstream.
    #[error("Invalid action")]
    InvalidIntent,

    /// Submitted data or route parameter failed validation.
    #[error("{0}")]
    Form(String),

    /// The backend refused the operation with its own message.
    #[error("{0}")]
    Upstream(String),

    /// The backend could not be reached or answered garbage.
    #[error("Operation failed")]
    Unexpected,
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Successful outcome of an action.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionReply {
    /// Stay on the page and show `message`, along with extra fields.
    Success {
        message: Option<String>,
        data: Map<String, Value>,
    },
    /// Navigate to `location`, carrying `message` as a flash.
    Redirect {
        location: String,
        message: Option<String>,
    },
}

impl ActionReply {
    pub fn success(message: impl Into<String>) -> Self {
        ActionReply::Success {
            message: Some(message.into()),
            data: Map::new(),
        }
    }

    pub fn silent() -> Self {
        ActionReply::Success {
            message: None,
            data: Map::new(),
        }
    }

    pub fn redirect(location: impl Into<String>, message: impl Into<String>) -> Self {
        ActionReply::Redirect {
            location: location.into(),
            message: Some(message.into()),
        }
    }

    /// Attaches an extra field to a `Success` reply.
    pub fn with<T: Serialize>(mut self, key: &str, value: &T) -> Self {
        if let ActionReply::Success { data, .. } = &mut self {
            match serde_json::to_value(value) {
                Ok(value) => {
                    data.insert(key.to_string(), value);
                }
                Err(err) => log::error!("Failed to serialize action field {key}: {err}"),
            }
        }
        self
    }
}

/// Logs an upstream failure and converts it for an action reply.
pub(crate) fn action_error(context: &str, err: ApiError) -> ServiceError {
    match &err {
        ApiError::Unauthorized => {}
        _ => log::error!("{context}: {err}"),
    }
    ServiceError::from(err)
}

/// Decides whether a loader failure must abort the page (auth) or be
/// reported inside it.
pub(crate) fn loader_error(context: &str, err: ApiError) -> ServiceResult<()> {
    match err {
        ApiError::Unauthorized => Err(ServiceError::Unauthorized),
        err => {
            log::error!("{context}: {err}");
            Ok(())
        }
    }
}

/// Parses an identifier taken from the route path.
pub(crate) fn route_id<T: FromStr>(raw: &str, label: &str) -> ServiceResult<T> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| ServiceError::Form(format!("Invalid {label}")))
}

/// Decodes an urlencoded action body into its typed intent.
pub(crate) fn parse_intent<F, I>(body: &[u8]) -> ServiceResult<I>
where
    F: DeserializeOwned + Validate,
    I: TryFrom<F, Error = FormError>,
{
    let form: F = parse_form(body)?;
    form.validate().map_err(FormError::from)?;
    Ok(I::try_from(form)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::TenantId;

    #[test]
    fn success_reply_carries_extra_fields() {
        let reply = ActionReply::success("Saved").with("count", &3);
        match reply {
            ActionReply::Success { message, data } => {
                assert_eq!(message.as_deref(), Some("Saved"));
                assert_eq!(data.get("count"), Some(&Value::from(3)));
            }
            other => panic!("unexpected reply {other:?}"),
        }
    }

    #[test]
    fn extra_fields_are_ignored_on_redirects() {
        let reply = ActionReply::redirect("/dashboard", "Done").with("count", &3);
        assert_eq!(reply, ActionReply::redirect("/dashboard", "Done"));
    }

    #[test]
    fn route_ids_report_the_parameter() {
        assert_eq!(
            route_id::<TenantId>("nope", "tenant ID"),
            Err(ServiceError::Form("Invalid tenant ID".to_string()))
        );
        assert!(route_id::<TenantId>(" 3f2504e0-4f89-41d3-9a0c-0305e82c3301 ", "tenant ID").is_ok());
    }

    #[test]
    fn loader_errors_only_abort_on_auth() {
        assert_eq!(
            loader_error("load", ApiError::Unauthorized),
            Err(ServiceError::Unauthorized)
        );
        assert_eq!(
            loader_error("load", ApiError::Transport("refused".to_string())),
            Ok(())
        );
    }
}
