use serde::Deserialize;
use validator::Validate;

use crate::domain::types::SecurityAlertId;
use crate::forms::{FormError, required};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct SecurityAlertForm {
    pub intent: Option<String>,
    pub alert_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SecurityAlertIntent {
    Resolve(SecurityAlertId),
}

impl TryFrom<SecurityAlertForm> for SecurityAlertIntent {
    type Error = FormError;

    fn try_from(form: SecurityAlertForm) -> Result<Self, Self::Error> {
        match form.intent.as_deref().map(str::trim) {
            Some("resolve") => {
                let raw = required(form.alert_id.as_deref(), "Alert ID")?;
                let id = SecurityAlertId::new(&raw).map_err(|_| FormError::Invalid("alert ID"))?;
                Ok(SecurityAlertIntent::Resolve(id))
            }
            _ => Err(FormError::InvalidIntent),
        }
    }
}
