use serde::Deserialize;
use validator::Validate;

use crate::domain::types::LinkedIdentityId;
use crate::forms::{FormError, required};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct LinkedIdentityForm {
    pub intent: Option<String>,
    pub identity_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LinkedIdentityIntent {
    Unlink(LinkedIdentityId),
}

impl TryFrom<LinkedIdentityForm> for LinkedIdentityIntent {
    type Error = FormError;

    fn try_from(form: LinkedIdentityForm) -> Result<Self, Self::Error> {
        match form.intent.as_deref().map(str::trim) {
            Some("unlink") => {
                let raw = required(form.identity_id.as_deref(), "Identity ID")?;
                let id =
                    LinkedIdentityId::new(&raw).map_err(|_| FormError::Invalid("identity ID"))?;
                Ok(LinkedIdentityIntent::Unlink(id))
            }
            _ => Err(FormError::InvalidIntent),
        }
    }
}
