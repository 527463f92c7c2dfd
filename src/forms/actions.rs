use serde::Deserialize;
use validator::Validate;

use crate::domain::action::{DEFAULT_ACTION_TIMEOUT_MS, NewAction, UpdateAction};
use crate::domain::types::{ActionId, DisplayName, EmailAddress, TriggerName};
use crate::forms::{FormError, optional, parse_bool, parse_int, required, required_bool};

#[derive(Debug, Default, Deserialize, Validate)]
/// Form posted from a service's actions page.
pub struct ActionForm {
    pub intent: Option<String>,
    pub id: Option<String>,
    #[validate(length(max = 255))]
    pub name: Option<String>,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    #[validate(length(max = 50))]
    pub trigger_id: Option<String>,
    pub script: Option<String>,
    pub enabled: Option<String>,
    pub strict_mode: Option<String>,
    pub execution_order: Option<String>,
    pub timeout_ms: Option<String>,
    /// Email used for the synthetic user when test-running a script.
    pub user_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActionIntent {
    Create(NewAction),
    Update { id: ActionId, updates: UpdateAction },
    Toggle { id: ActionId, enabled: bool },
    Delete(ActionId),
    Test { id: ActionId, user_email: Option<EmailAddress> },
}

fn parse_action_id(value: Option<&str>) -> Result<ActionId, FormError> {
    let raw = required(value, "Action ID")?;
    ActionId::new(&raw).map_err(|_| FormError::Invalid("action ID"))
}

fn parse_timeout(value: Option<&str>) -> Result<Option<i32>, FormError> {
    match parse_int(value, "timeout")? {
        Some(timeout) if timeout <= 0 => Err(FormError::Invalid("timeout")),
        other => Ok(other),
    }
}

/// Scripts keep their indentation; only fully blank scripts are rejected.
fn parse_script(value: Option<&str>) -> Option<String> {
    value
        .filter(|script| !script.trim().is_empty())
        .map(str::to_string)
}

impl TryFrom<ActionForm> for ActionIntent {
    type Error = FormError;

    fn try_from(form: ActionForm) -> Result<Self, Self::Error> {
        match form.intent.as_deref().map(str::trim) {
            Some("create") => {
                let name = DisplayName::new(required(form.name.as_deref(), "Name")?)
                    .map_err(|_| FormError::Missing("Name"))?;
                let trigger_id = TriggerName::new(required(form.trigger_id.as_deref(), "Trigger")?)
                    .map_err(|_| FormError::Missing("Trigger"))?;
                let script = parse_script(form.script.as_deref()).ok_or(FormError::Missing("Script"))?;
                Ok(ActionIntent::Create(NewAction {
                    name,
                    description: optional(form.description.as_deref()),
                    trigger_id,
                    script,
                    enabled: parse_bool(form.enabled.as_deref()).unwrap_or(true),
                    strict_mode: parse_bool(form.strict_mode.as_deref()).unwrap_or(false),
                    execution_order: parse_int(form.execution_order.as_deref(), "execution order")?
                        .unwrap_or(0),
                    timeout_ms: parse_timeout(form.timeout_ms.as_deref())?
                        .unwrap_or(DEFAULT_ACTION_TIMEOUT_MS),
                }))
            }
            Some("update") => {
                let id = parse_action_id(form.id.as_deref())?;
                let name = optional(form.name.as_deref())
                    .map(DisplayName::new)
                    .transpose()
                    .map_err(|_| FormError::Invalid("name"))?;
                Ok(ActionIntent::Update {
                    id,
                    updates: UpdateAction {
                        name,
                        description: optional(form.description.as_deref()),
                        script: parse_script(form.script.as_deref()),
                        enabled: parse_bool(form.enabled.as_deref()),
                        strict_mode: parse_bool(form.strict_mode.as_deref()),
                        execution_order: parse_int(
                            form.execution_order.as_deref(),
                            "execution order",
                        )?,
                        timeout_ms: parse_timeout(form.timeout_ms.as_deref())?,
                    },
                })
            }
            Some("toggle") => Ok(ActionIntent::Toggle {
                id: parse_action_id(form.id.as_deref())?,
                enabled: required_bool(form.enabled.as_deref(), "enabled")?,
            }),
            Some("delete") => Ok(ActionIntent::Delete(parse_action_id(form.id.as_deref())?)),
            Some("test") => {
                let id = parse_action_id(form.id.as_deref())?;
                let user_email = optional(form.user_email.as_deref())
                    .map(EmailAddress::new)
                    .transpose()
                    .map_err(|_| FormError::Invalid("email address"))?;
                Ok(ActionIntent::Test { id, user_email })
            }
            _ => Err(FormError::InvalidIntent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::parse_form;

    const ACTION_ID: &str = "0d9f1c2b-6e4a-4b7f-8c3d-2a1b0c9d8e7f";

    #[test]
    fn create_applies_defaults() {
        let form: ActionForm = parse_form(
            b"intent=create&name=Add+claims&trigger_id=post-login&script=context.claims.a%3D1%3B",
        )
        .unwrap();
        match ActionIntent::try_from(form).unwrap() {
            ActionIntent::Create(action) => {
                assert!(action.enabled);
                assert!(!action.strict_mode);
                assert_eq!(action.timeout_ms, DEFAULT_ACTION_TIMEOUT_MS);
                assert_eq!(action.trigger_id.as_str(), "post-login");
            }
            other => panic!("unexpected intent {other:?}"),
        }
    }

    #[test]
    fn create_requires_script() {
        let form: ActionForm =
            parse_form(b"intent=create&name=A&trigger_id=post-login&script=+++").unwrap();
        assert_eq!(
            ActionIntent::try_from(form),
            Err(FormError::Missing("Script"))
        );
    }

    #[test]
    fn test_intent_validates_email() {
        let body = format!("intent=test&id={ACTION_ID}&user_email=nope");
        let form: ActionForm = parse_form(body.as_bytes()).unwrap();
        assert_eq!(
            ActionIntent::try_from(form),
            Err(FormError::Invalid("email address"))
        );
    }

    #[test]
    fn toggle_requires_enabled_flag() {
        let body = format!("intent=toggle&id={ACTION_ID}");
        let form: ActionForm = parse_form(body.as_bytes()).unwrap();
        assert_eq!(
            ActionIntent::try_from(form),
            Err(FormError::Missing("enabled"))
        );
    }
}
