use serde::Deserialize;
use validator::Validate;

use crate::domain::branding::NewBranding;
use crate::domain::types::{AbsoluteUrl, HexColor};
use crate::forms::{FormError, optional, parse_bool, required};

#[derive(Debug, Default, Deserialize, Validate)]
/// Form posted from the branding settings page.
pub struct BrandingForm {
    pub intent: Option<String>,
    pub logo_url: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    #[validate(length(max = 51200))]
    pub custom_css: Option<String>,
    #[validate(length(max = 100))]
    pub company_name: Option<String>,
    pub favicon_url: Option<String>,
    pub allow_registration: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BrandingIntent {
    Save(NewBranding),
    Reset,
}

fn parse_color(value: Option<&str>, field: &'static str) -> Result<HexColor, FormError> {
    HexColor::new(required(value, field)?).map_err(|_| FormError::Invalid(field))
}

fn parse_url(value: Option<&str>, field: &'static str) -> Result<Option<AbsoluteUrl>, FormError> {
    optional(value)
        .map(|raw| AbsoluteUrl::new(raw).map_err(|_| FormError::Invalid(field)))
        .transpose()
}

impl TryFrom<BrandingForm> for BrandingIntent {
    type Error = FormError;

    fn try_from(form: BrandingForm) -> Result<Self, Self::Error> {
        match form.intent.as_deref().map(str::trim) {
            Some("save") => Ok(BrandingIntent::Save(NewBranding {
                logo_url: parse_url(form.logo_url.as_deref(), "logo URL")?,
                primary_color: parse_color(form.primary_color.as_deref(), "primary color")?,
                secondary_color: parse_color(form.secondary_color.as_deref(), "secondary color")?,
                background_color: parse_color(
                    form.background_color.as_deref(),
                    "background color",
                )?,
                text_color: parse_color(form.text_color.as_deref(), "text color")?,
                custom_css: optional(form.custom_css.as_deref()),
                company_name: optional(form.company_name.as_deref()),
                favicon_url: parse_url(form.favicon_url.as_deref(), "favicon URL")?,
                allow_registration: parse_bool(form.allow_registration.as_deref())
                    .unwrap_or(false),
            })),
            Some("reset") => Ok(BrandingIntent::Reset),
            _ => Err(FormError::InvalidIntent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::parse_form;

    const COLORS: &str = "primary_color=%23007AFF&secondary_color=%235856D6&background_color=%23F5F5F7&text_color=%231D1D1F";

    #[test]
    fn save_validates_colors() {
        let body = format!("intent=save&{COLORS}&company_name=Acme&allow_registration=on");
        let form: BrandingForm = parse_form(body.as_bytes()).unwrap();
        match BrandingIntent::try_from(form).unwrap() {
            BrandingIntent::Save(branding) => {
                assert_eq!(branding.primary_color.as_str(), "#007AFF");
                assert_eq!(branding.company_name.as_deref(), Some("Acme"));
                assert!(branding.allow_registration);
                assert!(branding.logo_url.is_none());
            }
            other => panic!("unexpected intent {other:?}"),
        }

        let body = "intent=save&primary_color=blue&secondary_color=%235856D6&background_color=%23F5F5F7&text_color=%231D1D1F";
        let form: BrandingForm = parse_form(body.as_bytes()).unwrap();
        assert_eq!(
            BrandingIntent::try_from(form),
            Err(FormError::Invalid("primary color"))
        );
    }

    #[test]
    fn save_rejects_relative_logo_url() {
        let body = format!("intent=save&{COLORS}&logo_url=%2Flogo.png");
        let form: BrandingForm = parse_form(body.as_bytes()).unwrap();
        assert_eq!(
            BrandingIntent::try_from(form),
            Err(FormError::Invalid("logo URL"))
        );
    }
}
