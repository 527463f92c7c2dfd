use serde::Serialize;

use crate::domain::branding::BrandingConfig;
use crate::domain::email_template::EmailTemplateWithContent;
use crate::domain::identity_provider::IdentityProvider;
use crate::dto::page_data;

#[derive(Debug, Default, Serialize)]
pub struct IdentityProvidersPageData {
    pub providers: Vec<IdentityProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct BrandingPageData {
    pub branding: Option<BrandingConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct EmailTemplatesPageData {
    pub templates: Vec<EmailTemplateWithContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct EmailTemplatePageData {
    pub template: Option<EmailTemplateWithContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

page_data!(
    IdentityProvidersPageData,
    BrandingPageData,
    EmailTemplatesPageData,
    EmailTemplatePageData,
);
