//! Login page branding stored as a system setting.

use serde::{Deserialize, Serialize};

use crate::domain::types::{AbsoluteUrl, HexColor};

pub const DEFAULT_PRIMARY_COLOR: &str = "#007AFF";
pub const DEFAULT_SECONDARY_COLOR: &str = "#5856D6";
pub const DEFAULT_BACKGROUND_COLOR: &str = "#F5F5F7";
pub const DEFAULT_TEXT_COLOR: &str = "#1D1D1F";

/// Branding document as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrandingConfig {
    #[serde(default)]
    pub logo_url: Option<String>,
    pub primary_color: String,
    pub secondary_color: String,
    pub background_color: String,
    pub text_color: String,
    #[serde(default)]
    pub custom_css: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub favicon_url: Option<String>,
    #[serde(default)]
    pub allow_registration: bool,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            logo_url: None,
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            secondary_color: DEFAULT_SECONDARY_COLOR.to_string(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            custom_css: None,
            company_name: None,
            favicon_url: None,
            allow_registration: false,
        }
    }
}

/// Validated branding submitted from the settings form.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBranding {
    pub logo_url: Option<AbsoluteUrl>,
    pub primary_color: HexColor,
    pub secondary_color: HexColor,
    pub background_color: HexColor,
    pub text_color: HexColor,
    pub custom_css: Option<String>,
    pub company_name: Option<String>,
    pub favicon_url: Option<AbsoluteUrl>,
    pub allow_registration: bool,
}

impl From<NewBranding> for BrandingConfig {
    fn from(value: NewBranding) -> Self {
        Self {
            logo_url: value.logo_url.map(AbsoluteUrl::into_inner),
            primary_color: value.primary_color.into_inner(),
            secondary_color: value.secondary_color.into_inner(),
            background_color: value.background_color.into_inner(),
            text_color: value.text_color.into_inner(),
            custom_css: value.custom_css,
            company_name: value.company_name,
            favicon_url: value.favicon_url.map(AbsoluteUrl::into_inner),
            allow_registration: value.allow_registration,
        }
    }
}
