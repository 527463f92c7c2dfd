//! Strongly-typed value objects used by the portal.
//!
//! These wrappers enforce basic invariants (well-formed identifiers,
//! normalized/validated email, non-empty names) so that once a value reaches a
//! service call or the REST client it can be treated as trusted.
use std::fmt::{Debug, Display, Formatter};
use std::{ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;
use validator::{ValidateEmail, ValidateUrl};

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Provided uuid failed format validation.
    #[error("invalid uuid value")]
    InvalidUuid,
    /// Provided url failed format validation.
    #[error("invalid url address")]
    InvalidUrl,
    /// Provided colour is not a `#RGB` or `#RRGGBB` hex value.
    #[error("invalid hex color")]
    InvalidColor,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Normalizes and validates an email string.
fn normalize_email<S: Into<String>>(email: S) -> Result<String, TypeConstraintError> {
    let normalized = email.into().trim().to_lowercase();
    if normalized.validate_email() {
        Ok(normalized)
    } else {
        Err(TypeConstraintError::InvalidEmail)
    }
}

/// Macro to generate newtypes for the UUID identifiers issued by the backend.
macro_rules! uuid_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Parses the identifier from its textual form.
            pub fn new(value: &str) -> Result<Self, TypeConstraintError> {
                Uuid::parse_str(value.trim())
                    .map(Self)
                    .map_err(|_| TypeConstraintError::InvalidUuid)
            }

            /// Returns the raw `Uuid` backing this identifier.
            pub const fn get(self) -> Uuid {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = TypeConstraintError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }
    };
}

uuid_newtype!(TenantId, "Unique identifier for a tenant.");
uuid_newtype!(ServiceId, "Unique identifier for a registered service.");
uuid_newtype!(ActionId, "Unique identifier for a service action script.");
uuid_newtype!(WebhookId, "Unique identifier for a tenant webhook.");
uuid_newtype!(PolicyVersionId, "Unique identifier for an ABAC policy version.");
uuid_newtype!(SessionId, "Unique identifier for a user session.");
uuid_newtype!(SecurityAlertId, "Unique identifier for a security alert.");
uuid_newtype!(LinkedIdentityId, "Unique identifier for a linked external identity.");
uuid_newtype!(UserId, "Unique identifier for a platform user.");

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let inner = NonEmptyString::new(value)?;
                Ok(Self(inner.into_inner()))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

non_empty_string_newtype!(DisplayName, "Human readable name of an entity.");
non_empty_string_newtype!(ProviderAlias, "Alias that identifies an identity provider.");
non_empty_string_newtype!(TriggerName, "Identifier of an action trigger such as `post-login`.");

/// URL-safe tenant slug: lowercase ASCII letters, digits and inner hyphens.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct TenantSlug(String);

impl TenantSlug {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = NonEmptyString::new(value)?.into_inner();
        let valid_chars = value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if value.len() > 63 || !valid_chars || value.starts_with('-') || value.ends_with('-') {
            return Err(TypeConstraintError::InvalidValue(
                "slug must be lowercase letters, digits and hyphens".to_string(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Bearer token resolved from the caller's session.
///
/// `Debug` never prints the token itself.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let inner = NonEmptyString::new(value)?;
        Ok(Self(inner.into_inner()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Debug for AccessToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Lower-cased and validated email address.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validates and normalizes an email string.
    pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
        let normalized = normalize_email(email)?;
        Ok(Self(normalized))
    }

    /// Borrow the email as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for EmailAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// CSS hex colour in `#RGB` or `#RRGGBB` form.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into().trim().to_string();
        let digits = value
            .strip_prefix('#')
            .ok_or(TypeConstraintError::InvalidColor)?;
        if !matches!(digits.len(), 3 | 6) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(TypeConstraintError::InvalidColor);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Generic absolute URL checked with the `validator` rules.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct AbsoluteUrl(String);

impl AbsoluteUrl {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into().trim().to_string();
        if value.validate_url() {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::InvalidUrl)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Webhook delivery URL.
///
/// HTTPS is always accepted; plain HTTP only for loopback hosts and the
/// private IPv4 ranges.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct WebhookUrl(String);

impl WebhookUrl {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let url = AbsoluteUrl::new(value)?.into_inner();
        let (scheme, rest) = url
            .split_once("://")
            .ok_or(TypeConstraintError::InvalidUrl)?;

        match scheme.to_ascii_lowercase().as_str() {
            "https" => Ok(Self(url)),
            "http" if is_local_host(extract_host(rest)) => Ok(Self(url)),
            "http" => Err(TypeConstraintError::InvalidValue(
                "HTTP URLs are only allowed for localhost or private networks".to_string(),
            )),
            _ => Err(TypeConstraintError::InvalidUrl),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Extracts the host part from the remainder of a URL after `scheme://`.
fn extract_host(rest: &str) -> &str {
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host_port = authority.rsplit('@').next().unwrap_or_default();
    if let Some(bracketed) = host_port.strip_prefix('[') {
        return bracketed.split(']').next().unwrap_or_default();
    }
    host_port.split(':').next().unwrap_or_default()
}

fn is_local_host(host: &str) -> bool {
    let host = host.to_ascii_lowercase();
    if matches!(host.as_str(), "localhost" | "127.0.0.1" | "::1") {
        return true;
    }
    if host.starts_with("10.") || host.starts_with("192.168.") {
        return true;
    }
    host.strip_prefix("172.")
        .and_then(|rest| rest.split('.').next())
        .and_then(|octet| octet.parse::<u8>().ok())
        .is_some_and(|octet| (16..=31).contains(&octet))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_ids_parse_and_display() {
        let raw = "7b4e8f3c-2a0d-4c1e-9f6a-0d3b5e7c9a11";
        let id = TenantId::new(raw).unwrap();
        assert_eq!(id.to_string(), raw);
        assert_eq!(
            TenantId::new("not-a-uuid"),
            Err(TypeConstraintError::InvalidUuid)
        );
    }

    #[test]
    fn access_token_debug_is_redacted() {
        let token = AccessToken::new("secret-token").unwrap();
        assert_eq!(format!("{token:?}"), "AccessToken(***)");
        assert!(AccessToken::new("   ").is_err());
    }

    #[test]
    fn email_is_normalized() {
        let email = EmailAddress::new("  Admin@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "admin@example.com");
        assert!(EmailAddress::new("nope").is_err());
    }

    #[test]
    fn hex_color_accepts_short_and_long_forms() {
        assert!(HexColor::new("#fff").is_ok());
        assert!(HexColor::new("#007AFF").is_ok());
        assert!(HexColor::new("007AFF").is_err());
        assert!(HexColor::new("#12345").is_err());
        assert!(HexColor::new("#zzzzzz").is_err());
    }

    #[test]
    fn tenant_slug_rules() {
        assert!(TenantSlug::new("acme-corp").is_ok());
        assert!(TenantSlug::new("Acme").is_err());
        assert!(TenantSlug::new("-acme").is_err());
        assert!(TenantSlug::new("acme corp").is_err());
    }

    #[test]
    fn webhook_url_rules() {
        assert!(WebhookUrl::new("https://hooks.example.com/a").is_ok());
        assert!(WebhookUrl::new("http://localhost:9000/hook").is_ok());
        assert!(WebhookUrl::new("http://192.168.1.10/hook").is_ok());
        assert!(WebhookUrl::new("http://172.20.0.5/hook").is_ok());
        assert!(WebhookUrl::new("http://172.40.0.5/hook").is_err());
        assert!(WebhookUrl::new("http://example.com/hook").is_err());
        assert!(WebhookUrl::new("ftp://example.com/hook").is_err());
    }
}
