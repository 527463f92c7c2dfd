//! Typed surface of the auth9-core REST API.
//!
//! Each resource exposes a reader/writer trait pair so that services can be
//! generic over the transport and unit tested against [`mock::MockApi`].

use async_trait::async_trait;

use crate::api::errors::ApiResult;
use crate::domain::abac::{
    AbacDraft, AbacDraftInput, AbacMode, AbacPolicies, AbacSimulationRequest, AbacSimulationResult,
};
use crate::domain::action::{
    Action, ActionTestContext, ActionTestResult, ActionTrigger, NewAction, UpdateAction,
};
use crate::domain::analytics::{AnalyticsRange, DailyTrendPoint, LoginEvent, LoginStats};
use crate::domain::audit::AuditLog;
use crate::domain::auth::{CodeExchange, TokenResponse};
use crate::domain::branding::BrandingConfig;
use crate::domain::email_template::{
    EmailTemplateContent, EmailTemplateType, EmailTemplateWithContent, RenderedEmailPreview,
    SendTestEmail, SendTestEmailResult,
};
use crate::domain::identity_provider::{
    IdentityProvider, LinkedIdentity, NewIdentityProvider, UpdateIdentityProvider,
};
use crate::domain::security_alert::SecurityAlert;
use crate::domain::service::{CreatedService, NewService, Service, UpdateService};
use crate::domain::session::SessionInfo;
use crate::domain::tenant::{NewTenant, Tenant, TenantServiceStatus, UpdateTenant};
use crate::domain::types::{
    AccessToken, ActionId, LinkedIdentityId, PolicyVersionId, ProviderAlias, SecurityAlertId,
    ServiceId, SessionId, TenantId, UserId, WebhookId,
};
use crate::domain::webhook::{NewWebhook, UpdateWebhook, Webhook, WebhookTestResult};
use crate::pagination::{Pagination, PaginationMeta};

pub mod abac;
pub mod actions;
pub mod analytics;
pub mod auth;
pub mod client;
pub mod errors;
pub mod identity_providers;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod security;
pub mod services;
pub mod sessions;
pub mod system;
pub mod tenants;
pub mod webhooks;

pub use client::HttpApi;

/// One page of a listing together with the backend's pagination block.
#[derive(Debug, Clone, PartialEq)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TenantListQuery {
    pub search: Option<String>,
    pub pagination: Pagination,
}

impl TenantListQuery {
    pub fn new(pagination: Pagination) -> Self {
        Self {
            search: None,
            pagination,
        }
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuditLogQuery {
    pub action: Option<String>,
    pub resource_type: Option<String>,
    pub pagination: Pagination,
}

impl AuditLogQuery {
    pub fn new(pagination: Pagination) -> Self {
        Self {
            action: None,
            resource_type: None,
            pagination,
        }
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn resource_type(mut self, resource_type: impl Into<String>) -> Self {
        self.resource_type = Some(resource_type.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SecurityAlertQuery {
    pub unresolved_only: bool,
    pub pagination: Pagination,
}

impl SecurityAlertQuery {
    pub fn new(pagination: Pagination) -> Self {
        Self {
            unresolved_only: false,
            pagination,
        }
    }

    pub fn unresolved_only(mut self, unresolved_only: bool) -> Self {
        self.unresolved_only = unresolved_only;
        self
    }
}

#[async_trait]
pub trait TenantReader: Send + Sync {
    async fn list_tenants(
        &self,
        token: &AccessToken,
        query: TenantListQuery,
    ) -> ApiResult<Paged<Tenant>>;
    async fn list_tenant_services(
        &self,
        token: &AccessToken,
        tenant_id: TenantId,
    ) -> ApiResult<Vec<TenantServiceStatus>>;
}

#[async_trait]
pub trait TenantWriter: Send + Sync {
    async fn create_tenant(&self, token: &AccessToken, tenant: &NewTenant) -> ApiResult<Tenant>;
    async fn update_tenant(
        &self,
        token: &AccessToken,
        tenant_id: TenantId,
        updates: &UpdateTenant,
    ) -> ApiResult<Tenant>;
    async fn delete_tenant(&self, token: &AccessToken, tenant_id: TenantId) -> ApiResult<()>;
    async fn toggle_tenant_service(
        &self,
        token: &AccessToken,
        tenant_id: TenantId,
        service_id: ServiceId,
        enabled: bool,
    ) -> ApiResult<Vec<TenantServiceStatus>>;
}

#[async_trait]
pub trait ServiceReader: Send + Sync {
    async fn list_services(
        &self,
        token: &AccessToken,
        pagination: Pagination,
    ) -> ApiResult<Paged<Service>>;
}

#[async_trait]
pub trait ServiceWriter: Send + Sync {
    async fn create_service(
        &self,
        token: &AccessToken,
        service: &NewService,
    ) -> ApiResult<CreatedService>;
    async fn update_service(
        &self,
        token: &AccessToken,
        service_id: ServiceId,
        updates: &UpdateService,
    ) -> ApiResult<Service>;
    async fn delete_service(&self, token: &AccessToken, service_id: ServiceId) -> ApiResult<()>;
}

#[async_trait]
pub trait ActionReader: Send + Sync {
    async fn list_actions(
        &self,
        token: &AccessToken,
        service_id: ServiceId,
    ) -> ApiResult<Vec<Action>>;
    async fn list_action_triggers(&self, token: &AccessToken) -> ApiResult<Vec<ActionTrigger>>;
}

#[async_trait]
pub trait ActionWriter: Send + Sync {
    async fn create_action(
        &self,
        token: &AccessToken,
        service_id: ServiceId,
        action: &NewAction,
    ) -> ApiResult<Action>;
    async fn update_action(
        &self,
        token: &AccessToken,
        service_id: ServiceId,
        action_id: ActionId,
        updates: &UpdateAction,
    ) -> ApiResult<Action>;
    async fn delete_action(
        &self,
        token: &AccessToken,
        service_id: ServiceId,
        action_id: ActionId,
    ) -> ApiResult<()>;
    async fn test_action(
        &self,
        token: &AccessToken,
        service_id: ServiceId,
        action_id: ActionId,
        context: &ActionTestContext,
    ) -> ApiResult<ActionTestResult>;
}

#[async_trait]
pub trait WebhookReader: Send + Sync {
    async fn list_webhooks(
        &self,
        token: &AccessToken,
        tenant_id: TenantId,
    ) -> ApiResult<Vec<Webhook>>;
}

#[async_trait]
pub trait WebhookWriter: Send + Sync {
    async fn create_webhook(
        &self,
        token: &AccessToken,
        tenant_id: TenantId,
        webhook: &NewWebhook,
    ) -> ApiResult<Webhook>;
    async fn update_webhook(
        &self,
        token: &AccessToken,
        tenant_id: TenantId,
        webhook_id: WebhookId,
        updates: &UpdateWebhook,
    ) -> ApiResult<Webhook>;
    async fn delete_webhook(
        &self,
        token: &AccessToken,
        tenant_id: TenantId,
        webhook_id: WebhookId,
    ) -> ApiResult<()>;
    async fn test_webhook(
        &self,
        token: &AccessToken,
        tenant_id: TenantId,
        webhook_id: WebhookId,
    ) -> ApiResult<WebhookTestResult>;
    async fn regenerate_webhook_secret(
        &self,
        token: &AccessToken,
        tenant_id: TenantId,
        webhook_id: WebhookId,
    ) -> ApiResult<Webhook>;
}

#[async_trait]
pub trait AbacReader: Send + Sync {
    async fn list_abac_policies(
        &self,
        token: &AccessToken,
        tenant_id: TenantId,
    ) -> ApiResult<AbacPolicies>;
}

#[async_trait]
pub trait AbacWriter: Send + Sync {
    async fn create_abac_draft(
        &self,
        token: &AccessToken,
        tenant_id: TenantId,
        input: &AbacDraftInput,
    ) -> ApiResult<AbacDraft>;
    async fn update_abac_draft(
        &self,
        token: &AccessToken,
        tenant_id: TenantId,
        version_id: PolicyVersionId,
        input: &AbacDraftInput,
    ) -> ApiResult<()>;
    async fn publish_abac_policy(
        &self,
        token: &AccessToken,
        tenant_id: TenantId,
        version_id: PolicyVersionId,
        mode: Option<AbacMode>,
    ) -> ApiResult<()>;
    async fn rollback_abac_policy(
        &self,
        token: &AccessToken,
        tenant_id: TenantId,
        version_id: PolicyVersionId,
        mode: Option<AbacMode>,
    ) -> ApiResult<()>;
    async fn simulate_abac(
        &self,
        token: &AccessToken,
        tenant_id: TenantId,
        request: &AbacSimulationRequest,
    ) -> ApiResult<AbacSimulationResult>;
}

#[async_trait]
pub trait IdentityProviderReader: Send + Sync {
    async fn list_identity_providers(
        &self,
        token: &AccessToken,
    ) -> ApiResult<Vec<IdentityProvider>>;
    async fn list_linked_identities(&self, token: &AccessToken)
    -> ApiResult<Vec<LinkedIdentity>>;
}

#[async_trait]
pub trait IdentityProviderWriter: Send + Sync {
    async fn create_identity_provider(
        &self,
        token: &AccessToken,
        provider: &NewIdentityProvider,
    ) -> ApiResult<IdentityProvider>;
    async fn update_identity_provider(
        &self,
        token: &AccessToken,
        alias: &ProviderAlias,
        updates: &UpdateIdentityProvider,
    ) -> ApiResult<IdentityProvider>;
    async fn delete_identity_provider(
        &self,
        token: &AccessToken,
        alias: &ProviderAlias,
    ) -> ApiResult<()>;
    async fn unlink_identity(
        &self,
        token: &AccessToken,
        identity_id: LinkedIdentityId,
    ) -> ApiResult<()>;
}

#[async_trait]
pub trait SessionReader: Send + Sync {
    async fn list_sessions(&self, token: &AccessToken) -> ApiResult<Vec<SessionInfo>>;
}

#[async_trait]
pub trait SessionWriter: Send + Sync {
    async fn revoke_session(&self, token: &AccessToken, session_id: SessionId) -> ApiResult<()>;
    async fn revoke_other_sessions(&self, token: &AccessToken) -> ApiResult<()>;
    async fn force_logout_user(&self, token: &AccessToken, user_id: UserId) -> ApiResult<()>;
}

#[async_trait]
pub trait AnalyticsReader: Send + Sync {
    async fn get_login_stats(
        &self,
        token: &AccessToken,
        range: &AnalyticsRange,
    ) -> ApiResult<LoginStats>;
    async fn get_daily_trend(
        &self,
        token: &AccessToken,
        range: &AnalyticsRange,
    ) -> ApiResult<Vec<DailyTrendPoint>>;
    async fn list_login_events(
        &self,
        token: &AccessToken,
        pagination: Pagination,
    ) -> ApiResult<Paged<LoginEvent>>;
}

#[async_trait]
pub trait AuditLogReader: Send + Sync {
    async fn list_audit_logs(
        &self,
        token: &AccessToken,
        query: AuditLogQuery,
    ) -> ApiResult<Paged<AuditLog>>;
}

#[async_trait]
pub trait SecurityAlertReader: Send + Sync {
    async fn list_security_alerts(
        &self,
        token: &AccessToken,
        query: SecurityAlertQuery,
    ) -> ApiResult<Paged<SecurityAlert>>;
}

#[async_trait]
pub trait SecurityAlertWriter: Send + Sync {
    async fn resolve_security_alert(
        &self,
        token: &AccessToken,
        alert_id: SecurityAlertId,
    ) -> ApiResult<SecurityAlert>;
}

#[async_trait]
pub trait BrandingReader: Send + Sync {
    async fn get_branding(&self, token: &AccessToken) -> ApiResult<BrandingConfig>;
}

#[async_trait]
pub trait BrandingWriter: Send + Sync {
    async fn update_branding(
        &self,
        token: &AccessToken,
        config: &BrandingConfig,
    ) -> ApiResult<BrandingConfig>;
}

#[async_trait]
pub trait EmailTemplateReader: Send + Sync {
    async fn list_email_templates(
        &self,
        token: &AccessToken,
    ) -> ApiResult<Vec<EmailTemplateWithContent>>;
    async fn get_email_template(
        &self,
        token: &AccessToken,
        template_type: EmailTemplateType,
    ) -> ApiResult<EmailTemplateWithContent>;
}

#[async_trait]
pub trait EmailTemplateWriter: Send + Sync {
    async fn update_email_template(
        &self,
        token: &AccessToken,
        template_type: EmailTemplateType,
        content: &EmailTemplateContent,
    ) -> ApiResult<EmailTemplateWithContent>;
    async fn reset_email_template(
        &self,
        token: &AccessToken,
        template_type: EmailTemplateType,
    ) -> ApiResult<EmailTemplateWithContent>;
    async fn preview_email_template(
        &self,
        token: &AccessToken,
        template_type: EmailTemplateType,
        content: &EmailTemplateContent,
    ) -> ApiResult<RenderedEmailPreview>;
    async fn send_test_email(
        &self,
        token: &AccessToken,
        template_type: EmailTemplateType,
        request: &SendTestEmail,
    ) -> ApiResult<SendTestEmailResult>;
}

/// OAuth endpoints used by the login flow; these calls carry no bearer token.
#[async_trait]
pub trait TokenExchanger: Send + Sync {
    async fn exchange_code(&self, request: &CodeExchange) -> ApiResult<TokenResponse>;
}
