use crate::api::{EmailTemplateReader, EmailTemplateWriter};
use crate::domain::email_template::{EmailTemplateType, SendTestEmail};
use crate::domain::types::AccessToken;
use crate::dto::PageData;
use crate::dto::settings::{EmailTemplatePageData, EmailTemplatesPageData};
use crate::forms::email_templates::{EmailTemplateForm, EmailTemplateIntent};
use crate::services::{
    ActionReply, ServiceError, ServiceResult, action_error, loader_error, parse_intent, route_id,
};

pub async fn load_email_templates_page<A>(
    api: &A,
    token: &AccessToken,
) -> ServiceResult<EmailTemplatesPageData>
where
    A: EmailTemplateReader + ?Sized,
{
    match api.list_email_templates(token).await {
        Ok(templates) => Ok(EmailTemplatesPageData {
            templates,
            error: None,
        }),
        Err(err) => {
            loader_error("Failed to list email templates", err)?;
            Ok(EmailTemplatesPageData::failed("Failed to load email templates"))
        }
    }
}

pub async fn load_email_template_page<A>(
    api: &A,
    token: &AccessToken,
    template_type: &str,
) -> ServiceResult<EmailTemplatePageData>
where
    A: EmailTemplateReader + ?Sized,
{
    let template_type: EmailTemplateType = route_id(template_type, "template type")?;

    match api.get_email_template(token, template_type).await {
        Ok(template) => Ok(EmailTemplatePageData {
            template: Some(template),
            error: None,
        }),
        Err(err) => {
            loader_error("Failed to load email template", err)?;
            Ok(EmailTemplatePageData::failed("Failed to load email template"))
        }
    }
}

pub async fn email_template_action<A>(
    api: &A,
    token: &AccessToken,
    template_type: &str,
    body: &[u8],
) -> ServiceResult<ActionReply>
where
    A: EmailTemplateWriter + ?Sized,
{
    let template_type: EmailTemplateType = route_id(template_type, "template type")?;

    match parse_intent::<EmailTemplateForm, EmailTemplateIntent>(body)? {
        EmailTemplateIntent::Save(content) => {
            let template = api
                .update_email_template(token, template_type, &content)
                .await
                .map_err(|err| action_error("Failed to save email template", err))?;
            Ok(ActionReply::success("Template saved").with("template", &template))
        }
        EmailTemplateIntent::Reset => {
            let template = api
                .reset_email_template(token, template_type)
                .await
                .map_err(|err| action_error("Failed to reset email template", err))?;
            Ok(ActionReply::success("Template reset to default").with("template", &template))
        }
        EmailTemplateIntent::Preview(content) => {
            let preview = api
                .preview_email_template(token, template_type, &content)
                .await
                .map_err(|err| action_error("Failed to preview email template", err))?;
            Ok(ActionReply::silent().with("preview", &preview))
        }
        EmailTemplateIntent::SendTest { to, content } => {
            let request = SendTestEmail {
                to_email: to.as_str().to_string(),
                subject: content.subject,
                html_body: content.html_body,
                text_body: content.text_body,
            };
            let result = api
                .send_test_email(token, template_type, &request)
                .await
                .map_err(|err| action_error("Failed to send test email", err))?;
            if !result.success {
                log::warn!("Test email to {to} was not sent: {}", result.message);
                return Err(ServiceError::Upstream(result.message));
            }
            let message = if result.message.trim().is_empty() {
                "Test email sent".to_string()
            } else {
                result.message
            };
            Ok(ActionReply::success(message))
        }
    }
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::api::mock::MockApi;
    use crate::domain::email_template::SendTestEmailResult;
    use crate::services::fixtures::token;

    #[actix_web::test]
    async fn unknown_template_type_is_rejected() {
        let mut api = MockApi::new();
        api.expect_get_email_template().times(0);

        let result = load_email_template_page(&api, &token(), "newsletter").await;

        assert_eq!(
            result.unwrap_err(),
            ServiceError::Form("Invalid template type".to_string())
        );
    }

    #[actix_web::test]
    async fn unsent_test_email_is_an_error() {
        let mut api = MockApi::new();
        api.expect_send_test_email()
            .withf(|_, kind, req| {
                *kind == EmailTemplateType::PasswordReset && req.to_email == "qa@example.com"
            })
            .times(1)
            .returning(|_, _, _| {
                Ok(SendTestEmailResult {
                    success: false,
                    message: "Email provider not configured".to_string(),
                    message_id: None,
                })
            });

        let result = email_template_action(
            &api,
            &token(),
            "password-reset",
            b"intent=send_test&to_email=qa%40example.com&subject=Reset&html_body=%3Cp%3Ex%3C%2Fp%3E",
        )
        .await;

        assert_eq!(
            result,
            Err(ServiceError::Upstream(
                "Email provider not configured".to_string()
            ))
        );
    }

    #[actix_web::test]
    async fn sent_test_email_uses_fallback_message() {
        let mut api = MockApi::new();
        api.expect_send_test_email().returning(|_, _, _| {
            Ok(SendTestEmailResult {
                success: true,
                message: String::new(),
                message_id: Some("abc".to_string()),
            })
        });

        let reply = email_template_action(
            &api,
            &token(),
            "welcome",
            b"intent=send_test&to_email=qa%40example.com&subject=Hi&html_body=Hi",
        )
        .await
        .unwrap();

        assert_eq!(reply, ActionReply::success("Test email sent"));
    }
}
