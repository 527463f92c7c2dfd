use serde::Deserialize;
use validator::Validate;

use crate::domain::types::{SessionId, UserId};
use crate::forms::{FormError, required};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct SessionForm {
    pub intent: Option<String>,
    pub session_id: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionIntent {
    Revoke(SessionId),
    RevokeAll,
    ForceLogout(UserId),
}

impl TryFrom<SessionForm> for SessionIntent {
    type Error = FormError;

    fn try_from(form: SessionForm) -> Result<Self, Self::Error> {
        match form.intent.as_deref().map(str::trim) {
            Some("revoke") => {
                let raw = required(form.session_id.as_deref(), "Session ID")?;
                let id = SessionId::new(&raw).map_err(|_| FormError::Invalid("session ID"))?;
                Ok(SessionIntent::Revoke(id))
            }
            Some("revoke_all") => Ok(SessionIntent::RevokeAll),
            Some("force_logout") => {
                let raw = required(form.user_id.as_deref(), "User ID")?;
                let id = UserId::new(&raw).map_err(|_| FormError::Invalid("user ID"))?;
                Ok(SessionIntent::ForceLogout(id))
            }
            _ => Err(FormError::InvalidIntent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::parse_form;

    #[test]
    fn revoke_all_needs_no_fields() {
        let form: SessionForm = parse_form(b"intent=revoke_all").unwrap();
        assert_eq!(SessionIntent::try_from(form), Ok(SessionIntent::RevokeAll));
    }

    #[test]
    fn revoke_validates_session_id() {
        let form: SessionForm = parse_form(b"intent=revoke&session_id=abc").unwrap();
        assert_eq!(
            SessionIntent::try_from(form),
            Err(FormError::Invalid("session ID"))
        );
    }
}
