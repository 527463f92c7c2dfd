use serde::Deserialize;
use validator::Validate;

use crate::domain::types::{DisplayName, WebhookId, WebhookUrl};
use crate::domain::webhook::{NewWebhook, UpdateWebhook, WEBHOOK_EVENTS};
use crate::forms::{FormError, optional, parse_bool, required, required_bool};

#[derive(Debug, Default, Deserialize, Validate)]
/// Form posted from a tenant's webhooks page.
pub struct WebhookForm {
    pub intent: Option<String>,
    pub id: Option<String>,
    #[validate(length(max = 255))]
    pub name: Option<String>,
    pub url: Option<String>,
    pub secret: Option<String>,
    /// Either repeated checkbox values or a single comma separated value.
    #[serde(default)]
    pub events: Vec<String>,
    pub enabled: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WebhookIntent {
    Create(NewWebhook),
    Update { id: WebhookId, updates: UpdateWebhook },
    Delete(WebhookId),
    Toggle { id: WebhookId, enabled: bool },
    Test(WebhookId),
    Regenerate(WebhookId),
}

fn parse_webhook_id(value: Option<&str>) -> Result<WebhookId, FormError> {
    let raw = required(value, "Webhook ID")?;
    WebhookId::new(&raw).map_err(|_| FormError::Invalid("webhook ID"))
}

fn parse_url(value: Option<&str>) -> Result<WebhookUrl, FormError> {
    WebhookUrl::new(required(value, "URL")?).map_err(|_| FormError::Invalid("webhook URL"))
}

/// Deduplicated list of known event names; at least one is required.
fn parse_events(values: &[String]) -> Result<Vec<String>, FormError> {
    let mut events: Vec<String> = Vec::new();
    for event in values
        .iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|event| !event.is_empty())
    {
        if !WEBHOOK_EVENTS.contains(&event) {
            return Err(FormError::Invalid("event"));
        }
        if !events.iter().any(|known| known == event) {
            events.push(event.to_string());
        }
    }
    if events.is_empty() {
        return Err(FormError::Missing("At least one event"));
    }
    Ok(events)
}

impl TryFrom<WebhookForm> for WebhookIntent {
    type Error = FormError;

    fn try_from(form: WebhookForm) -> Result<Self, Self::Error> {
        match form.intent.as_deref().map(str::trim) {
            Some("create") => {
                let name = DisplayName::new(required(form.name.as_deref(), "Name")?)
                    .map_err(|_| FormError::Missing("Name"))?;
                Ok(WebhookIntent::Create(NewWebhook {
                    name,
                    url: parse_url(form.url.as_deref())?,
                    secret: optional(form.secret.as_deref()),
                    events: parse_events(&form.events)?,
                    enabled: parse_bool(form.enabled.as_deref()).unwrap_or(true),
                }))
            }
            Some("update") => {
                let id = parse_webhook_id(form.id.as_deref())?;
                let name = DisplayName::new(required(form.name.as_deref(), "Name")?)
                    .map_err(|_| FormError::Missing("Name"))?;
                Ok(WebhookIntent::Update {
                    id,
                    updates: UpdateWebhook {
                        name: Some(name),
                        url: Some(parse_url(form.url.as_deref())?),
                        secret: optional(form.secret.as_deref()),
                        events: Some(parse_events(&form.events)?),
                        enabled: parse_bool(form.enabled.as_deref()),
                    },
                })
            }
            Some("delete") => Ok(WebhookIntent::Delete(parse_webhook_id(form.id.as_deref())?)),
            Some("toggle") => Ok(WebhookIntent::Toggle {
                id: parse_webhook_id(form.id.as_deref())?,
                enabled: required_bool(form.enabled.as_deref(), "enabled")?,
            }),
            Some("test") => Ok(WebhookIntent::Test(parse_webhook_id(form.id.as_deref())?)),
            Some("regenerate") => Ok(WebhookIntent::Regenerate(parse_webhook_id(
                form.id.as_deref(),
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
    fn create_collects_repeated_events() {
        let form: WebhookForm = parse_form(
            b"intent=create&name=Audit&url=https%3A%2F%2Fhooks.example.com&events=login.success&events=user.created&events=login.success",
        )
        .unwrap();
        match WebhookIntent::try_from(form).unwrap() {
            WebhookIntent::Create(webhook) => {
                assert_eq!(webhook.events, vec!["login.success", "user.created"]);
                assert!(webhook.enabled);
            }
            other => panic!("unexpected intent {other:?}"),
        }
    }

    #[test]
    fn create_accepts_comma_separated_events() {
        let form: WebhookForm = parse_form(
            b"intent=create&name=Audit&url=https%3A%2F%2Fhooks.example.com&events=mfa.enabled%2Cmfa.disabled&enabled=false",
        )
        .unwrap();
        match WebhookIntent::try_from(form).unwrap() {
            WebhookIntent::Create(webhook) => {
                assert_eq!(webhook.events, vec!["mfa.enabled", "mfa.disabled"]);
                assert!(!webhook.enabled);
            }
            other => panic!("unexpected intent {other:?}"),
        }
    }

    #[test]
    fn create_requires_events_and_known_names() {
        let form: WebhookForm =
            parse_form(b"intent=create&name=Audit&url=https%3A%2F%2Fhooks.example.com").unwrap();
        assert_eq!(
            WebhookIntent::try_from(form),
            Err(FormError::Missing("At least one event"))
        );

        let form: WebhookForm = parse_form(
            b"intent=create&name=Audit&url=https%3A%2F%2Fhooks.example.com&events=bogus.event",
        )
        .unwrap();
        assert_eq!(WebhookIntent::try_from(form), Err(FormError::Invalid("event")));
    }

    #[test]
    fn plain_http_is_rejected_for_public_hosts() {
        let form: WebhookForm = parse_form(
            b"intent=create&name=Audit&url=http%3A%2F%2Fhooks.example.com&events=login.success",
        )
        .unwrap();
        assert_eq!(
            WebhookIntent::try_from(form),
            Err(FormError::Invalid("webhook URL"))
        );
    }
}
