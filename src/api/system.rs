//! System settings: login branding and transactional email templates.

use async_trait::async_trait;
use reqwest::Method;
use serde_json::json;

use crate::api::client::HttpApi;
use crate::api::errors::ApiResult;
use crate::api::{BrandingReader, BrandingWriter, EmailTemplateReader, EmailTemplateWriter};
use crate::domain::branding::BrandingConfig;
use crate::domain::email_template::{
    EmailTemplateContent, EmailTemplateType, EmailTemplateWithContent, RenderedEmailPreview,
    SendTestEmail, SendTestEmailResult,
};
use crate::domain::types::AccessToken;

fn template_path(template_type: EmailTemplateType) -> String {
    format!("/api/v1/system/email-templates/{template_type}")
}

#[async_trait]
impl BrandingReader for HttpApi {
    async fn get_branding(&self, token: &AccessToken) -> ApiResult<BrandingConfig> {
        self.get_data(token, "/api/v1/system/branding", &[]).await
    }
}

#[async_trait]
impl BrandingWriter for HttpApi {
    async fn update_branding(
        &self,
        token: &AccessToken,
        config: &BrandingConfig,
    ) -> ApiResult<BrandingConfig> {
        self.send_data(
            Method::PUT,
            token,
            "/api/v1/system/branding",
            &json!({ "config": config }),
        )
        .await
    }
}

#[async_trait]
impl EmailTemplateReader for HttpApi {
    async fn list_email_templates(
        &self,
        token: &AccessToken,
    ) -> ApiResult<Vec<EmailTemplateWithContent>> {
        self.get_data(token, "/api/v1/system/email-templates", &[])
            .await
    }

    async fn get_email_template(
        &self,
        token: &AccessToken,
        template_type: EmailTemplateType,
    ) -> ApiResult<EmailTemplateWithContent> {
        self.get_data(token, &template_path(template_type), &[])
            .await
    }
}

#[async_trait]
impl EmailTemplateWriter for HttpApi {
    async fn update_email_template(
        &self,
        token: &AccessToken,
        template_type: EmailTemplateType,
        content: &EmailTemplateContent,
    ) -> ApiResult<EmailTemplateWithContent> {
        self.send_data(Method::PUT, token, &template_path(template_type), content)
            .await
    }

    async fn reset_email_template(
        &self,
        token: &AccessToken,
        template_type: EmailTemplateType,
    ) -> ApiResult<EmailTemplateWithContent> {
        self.call_data(Method::DELETE, token, &template_path(template_type))
            .await
    }

    async fn preview_email_template(
        &self,
        token: &AccessToken,
        template_type: EmailTemplateType,
        content: &EmailTemplateContent,
    ) -> ApiResult<RenderedEmailPreview> {
        let path = format!("{}/preview", template_path(template_type));
        self.send_data(Method::POST, token, &path, content).await
    }

    async fn send_test_email(
        &self,
        token: &AccessToken,
        template_type: EmailTemplateType,
        request: &SendTestEmail,
    ) -> ApiResult<SendTestEmailResult> {
        let path = format!("{}/send-test", template_path(template_type));
        self.post_raw(token, &path, request).await
    }
}
