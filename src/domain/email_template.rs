use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kinds of transactional email the platform sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailTemplateType {
    Invitation,
    PasswordReset,
    EmailMfa,
    Welcome,
    EmailVerification,
    PasswordChanged,
    SecurityAlert,
}

impl EmailTemplateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmailTemplateType::Invitation => "invitation",
            EmailTemplateType::PasswordReset => "password_reset",
            EmailTemplateType::EmailMfa => "email_mfa",
            EmailTemplateType::Welcome => "welcome",
            EmailTemplateType::EmailVerification => "email_verification",
            EmailTemplateType::PasswordChanged => "password_changed",
            EmailTemplateType::SecurityAlert => "security_alert",
        }
    }
}

impl std::str::FromStr for EmailTemplateType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "invitation" => Ok(EmailTemplateType::Invitation),
            "password_reset" => Ok(EmailTemplateType::PasswordReset),
            "email_mfa" => Ok(EmailTemplateType::EmailMfa),
            "welcome" => Ok(EmailTemplateType::Welcome),
            "email_verification" => Ok(EmailTemplateType::EmailVerification),
            "password_changed" => Ok(EmailTemplateType::PasswordChanged),
            "security_alert" => Ok(EmailTemplateType::SecurityAlert),
            other => Err(format!("Unknown template type: {other}")),
        }
    }
}

impl std::fmt::Display for EmailTemplateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemplateVariable {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub example: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmailTemplateMetadata {
    pub template_type: EmailTemplateType,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub variables: Vec<TemplateVariable>,
}

/// Subject and bodies of a template; also the save and preview payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmailTemplateContent {
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmailTemplateWithContent {
    pub metadata: EmailTemplateMetadata,
    pub content: EmailTemplateContent,
    #[serde(default)]
    pub is_customized: bool,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Rendered preview returned by the backend.
pub type RenderedEmailPreview = EmailTemplateContent;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SendTestEmail {
    pub to_email: String,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SendTestEmailResult {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub message_id: Option<String>,
}
