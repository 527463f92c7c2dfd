use serde::Deserialize;
use validator::Validate;

use crate::domain::identity_provider::{NewIdentityProvider, UpdateIdentityProvider};
use crate::domain::types::ProviderAlias;
use crate::forms::{
    FormError, optional, parse_bool, parse_key_values, required, required_bool,
};

#[derive(Debug, Default, Deserialize, Validate)]
/// Form posted from the identity provider settings page.
pub struct IdentityProviderForm {
    pub intent: Option<String>,
    #[validate(length(max = 255))]
    pub alias: Option<String>,
    #[validate(length(max = 255))]
    pub display_name: Option<String>,
    pub provider_id: Option<String>,
    pub enabled: Option<String>,
    pub trust_email: Option<String>,
    pub store_token: Option<String>,
    pub link_only: Option<String>,
    /// Provider specific settings as `key=value` lines.
    pub config: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum IdentityProviderIntent {
    Create(NewIdentityProvider),
    Update {
        alias: ProviderAlias,
        updates: UpdateIdentityProvider,
    },
    Toggle {
        alias: ProviderAlias,
        enabled: bool,
    },
    Delete(ProviderAlias),
}

fn parse_alias(value: Option<&str>) -> Result<ProviderAlias, FormError> {
    ProviderAlias::new(required(value, "Alias")?).map_err(|_| FormError::Missing("Alias"))
}

impl TryFrom<IdentityProviderForm> for IdentityProviderIntent {
    type Error = FormError;

    fn try_from(form: IdentityProviderForm) -> Result<Self, Self::Error> {
        match form.intent.as_deref().map(str::trim) {
            Some("create") => Ok(IdentityProviderIntent::Create(NewIdentityProvider {
                alias: parse_alias(form.alias.as_deref())?,
                display_name: optional(form.display_name.as_deref()),
                provider_id: required(form.provider_id.as_deref(), "Provider type")?,
                enabled: parse_bool(form.enabled.as_deref()).unwrap_or(true),
                trust_email: parse_bool(form.trust_email.as_deref()).unwrap_or(false),
                store_token: parse_bool(form.store_token.as_deref()).unwrap_or(false),
                link_only: parse_bool(form.link_only.as_deref()).unwrap_or(false),
                config: parse_key_values(form.config.as_deref(), "config")?,
            })),
            Some("update") => {
                let alias = parse_alias(form.alias.as_deref())?;
                let config = match optional(form.config.as_deref()) {
                    Some(raw) => Some(parse_key_values(Some(&raw), "config")?),
                    None => None,
                };
                Ok(IdentityProviderIntent::Update {
                    alias,
                    updates: UpdateIdentityProvider {
                        display_name: optional(form.display_name.as_deref()),
                        enabled: parse_bool(form.enabled.as_deref()),
                        trust_email: parse_bool(form.trust_email.as_deref()),
                        store_token: parse_bool(form.store_token.as_deref()),
                        link_only: parse_bool(form.link_only.as_deref()),
                        config,
                    },
                })
            }
            Some("toggle") => Ok(IdentityProviderIntent::Toggle {
                alias: parse_alias(form.alias.as_deref())?,
                enabled: required_bool(form.enabled.as_deref(), "enabled")?,
            }),
            Some("delete") => Ok(IdentityProviderIntent::Delete(parse_alias(
                form.alias.as_deref(),
            )?)),
            _ => Err(FormError::InvalidIntent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::parse_form;

    #[test]
    fn create_reads_config_lines() {
        let form: IdentityProviderForm = parse_form(
            b"intent=create&alias=google&provider_id=google&trust_email=on&config=clientId%3Dabc%0AclientSecret%3Dxyz",
        )
        .unwrap();
        match IdentityProviderIntent::try_from(form).unwrap() {
            IdentityProviderIntent::Create(provider) => {
                assert_eq!(provider.alias.as_str(), "google");
                assert!(provider.enabled);
                assert!(provider.trust_email);
                assert!(!provider.link_only);
                assert_eq!(
                    provider.config.get("clientSecret").map(String::as_str),
                    Some("xyz")
                );
            }
            other => panic!("unexpected intent {other:?}"),
        }
    }

    #[test]
    fn create_requires_provider_type() {
        let form: IdentityProviderForm = parse_form(b"intent=create&alias=google").unwrap();
        assert_eq!(
            IdentityProviderIntent::try_from(form),
            Err(FormError::Missing("Provider type"))
        );
    }

    #[test]
    fn update_leaves_blank_config_untouched() {
        let form: IdentityProviderForm =
            parse_form(b"intent=update&alias=github&display_name=GitHub&config=").unwrap();
        assert_eq!(
            IdentityProviderIntent::try_from(form),
            Ok(IdentityProviderIntent::Update {
                alias: ProviderAlias::new("github").unwrap(),
                updates: UpdateIdentityProvider {
                    display_name: Some("GitHub".to_string()),
                    ..Default::default()
                },
            })
        );
    }
}
