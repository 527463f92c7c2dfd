use serde::Deserialize;
use validator::Validate;

use crate::domain::email_template::EmailTemplateContent;
use crate::domain::types::EmailAddress;
use crate::forms::{FormError, optional, required};

#[derive(Debug, Default, Deserialize, Validate)]
/// Form posted from an email template editor.
pub struct EmailTemplateForm {
    pub intent: Option<String>,
    #[validate(length(max = 255))]
    pub subject: Option<String>,
    pub html_body: Option<String>,
    pub text_body: Option<String>,
    pub to_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EmailTemplateIntent {
    Save(EmailTemplateContent),
    Reset,
    Preview(EmailTemplateContent),
    SendTest {
        to: EmailAddress,
        content: EmailTemplateContent,
    },
}

/// Bodies keep their whitespace; only the subject is trimmed.
fn parse_content(form: &EmailTemplateForm) -> Result<EmailTemplateContent, FormError> {
    let html_body = form
        .html_body
        .as_deref()
        .filter(|body| !body.trim().is_empty())
        .ok_or(FormError::Missing("HTML body"))?;
    Ok(EmailTemplateContent {
        subject: required(form.subject.as_deref(), "Subject")?,
        html_body: html_body.to_string(),
        text_body: form.text_body.clone().unwrap_or_default(),
    })
}

impl TryFrom<EmailTemplateForm> for EmailTemplateIntent {
    type Error = FormError;

    fn try_from(form: EmailTemplateForm) -> Result<Self, Self::Error> {
        match form.intent.as_deref().map(str::trim) {
            Some("save") => Ok(EmailTemplateIntent::Save(parse_content(&form)?)),
            Some("reset") => Ok(EmailTemplateIntent::Reset),
            Some("preview") => Ok(EmailTemplateIntent::Preview(parse_content(&form)?)),
            Some("send_test") => {
                let to = optional(form.to_email.as_deref())
                    .ok_or(FormError::Missing("Recipient email"))
                    .and_then(|raw| {
                        EmailAddress::new(raw).map_err(|_| FormError::Invalid("email address"))
                    })?;
                Ok(EmailTemplateIntent::SendTest {
                    to,
                    content: parse_content(&form)?,
                })
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
    fn save_keeps_body_whitespace() {
        let form: EmailTemplateForm = parse_form(
            b"intent=save&subject=+Welcome+&html_body=%3Cp%3EHi%3C%2Fp%3E%0A&text_body=Hi%0A",
        )
        .unwrap();
        assert_eq!(
            EmailTemplateIntent::try_from(form),
            Ok(EmailTemplateIntent::Save(EmailTemplateContent {
                subject: "Welcome".to_string(),
                html_body: "<p>Hi</p>\n".to_string(),
                text_body: "Hi\n".to_string(),
            }))
        );
    }

    #[test]
    fn send_test_requires_valid_recipient() {
        let form: EmailTemplateForm =
            parse_form(b"intent=send_test&subject=S&html_body=B&to_email=not-an-email").unwrap();
        assert_eq!(
            EmailTemplateIntent::try_from(form),
            Err(FormError::Invalid("email address"))
        );

        let form: EmailTemplateForm =
            parse_form(b"intent=send_test&subject=S&html_body=B").unwrap();
        assert_eq!(
            EmailTemplateIntent::try_from(form),
            Err(FormError::Missing("Recipient email"))
        );
    }

    #[test]
    fn reset_ignores_content() {
        let form: EmailTemplateForm = parse_form(b"intent=reset").unwrap();
        assert_eq!(EmailTemplateIntent::try_from(form), Ok(EmailTemplateIntent::Reset));
    }
}
