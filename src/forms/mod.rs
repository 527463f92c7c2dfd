//! Form definitions backing the dashboard actions.
//!
//! Every action posts a flat `application/x-www-form-urlencoded` body with an
//! `intent` field. Each module parses that body into its form struct and
//! converts it into a typed intent enum, one variant per mutation.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use thiserror::Error;
use validator::ValidationErrors;

pub mod abac;
pub mod actions;
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

#[derive(Debug, Error, PartialEq, Eq)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("Invalid action")]
    InvalidIntent,

    #[error("Invalid form data")]
    Malformed,

    #[error("{0} is required")]
    Missing(&'static str),

    #[error("Invalid {0}")]
    Invalid(&'static str),

    #[error("{0} must be valid JSON")]
    InvalidJson(&'static str),

    #[error("{0} is too long")]
    TooLong(String),
}

impl From<ValidationErrors> for FormError {
    fn from(errors: ValidationErrors) -> Self {
        // Only length limits are declared on the forms; report the first field by name.
        let field = errors
            .field_errors()
            .into_keys()
            .min()
            .map(|field| field.replace('_', " "))
            .unwrap_or_else(|| "field".to_string());
        let mut chars = field.chars();
        let field = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => field,
        };
        FormError::TooLong(field)
    }
}

/// Parses an urlencoded body into `T`.
pub fn parse_form<T: DeserializeOwned>(body: &[u8]) -> Result<T, FormError> {
    serde_html_form::from_bytes(body).map_err(|err| {
        log::warn!("Rejected form body: {err}");
        FormError::Malformed
    })
}

/// Trimmed value or `None` when absent or blank.
pub(crate) fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Trimmed, non-blank value.
pub(crate) fn required(value: Option<&str>, field: &'static str) -> Result<String, FormError> {
    optional(value).ok_or(FormError::Missing(field))
}

/// Parses checkbox and select style booleans.
pub(crate) fn parse_bool(value: Option<&str>) -> Option<bool> {
    match value?.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "1" | "yes" => Some(true),
        "false" | "off" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Required boolean field; unparseable values are rejected.
pub(crate) fn required_bool(value: Option<&str>, field: &'static str) -> Result<bool, FormError> {
    match optional(value) {
        None => Err(FormError::Missing(field)),
        Some(raw) => parse_bool(Some(&raw)).ok_or(FormError::Invalid(field)),
    }
}

/// Splits a textarea on newlines and commas, dropping blank entries.
pub(crate) fn parse_list(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split(['\n', ','])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses `key=value` lines into a map.
pub(crate) fn parse_key_values(
    value: Option<&str>,
    field: &'static str,
) -> Result<BTreeMap<String, String>, FormError> {
    let mut map = BTreeMap::new();
    for line in value.unwrap_or_default().lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (key, val) = line.split_once('=').ok_or(FormError::Invalid(field))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(FormError::Invalid(field));
        }
        map.insert(key.to_string(), val.trim().to_string());
    }
    Ok(map)
}

/// Parses an optional integer field.
pub(crate) fn parse_int(value: Option<&str>, field: &'static str) -> Result<Option<i32>, FormError> {
    optional(value)
        .map(|raw| raw.parse::<i32>().map_err(|_| FormError::Invalid(field)))
        .transpose()
}
