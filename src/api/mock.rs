//! Mock API client for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::api::errors::ApiResult;
use crate::api::{
    AbacReader, AbacWriter, ActionReader, ActionWriter, AnalyticsReader, AuditLogQuery,
    AuditLogReader, BrandingReader, BrandingWriter, EmailTemplateReader, EmailTemplateWriter,
    IdentityProviderReader, IdentityProviderWriter, Paged, SecurityAlertQuery,
    SecurityAlertReader, SecurityAlertWriter, ServiceReader, ServiceWriter, SessionReader,
    SessionWriter, TenantListQuery, TenantReader, TenantWriter, TokenExchanger, WebhookReader,
    WebhookWriter,
};
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
use crate::pagination::Pagination;

mock! {
    pub Api {}

    #[async_trait]
    impl TenantReader for Api {
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
    impl TenantWriter for Api {
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
    impl ServiceReader for Api {
        async fn list_services(
            &self,
            token: &AccessToken,
            pagination: Pagination,
        ) -> ApiResult<Paged<Service>>;
    }

    #[async_trait]
    impl ServiceWriter for Api {
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
    impl ActionReader for Api {
        async fn list_actions(
            &self,
            token: &AccessToken,
            service_id: ServiceId,
        ) -> ApiResult<Vec<Action>>;
        async fn list_action_triggers(&self, token: &AccessToken) -> ApiResult<Vec<ActionTrigger>>;
    }

    #[async_trait]
    impl ActionWriter for Api {
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
    impl WebhookReader for Api {
        async fn list_webhooks(
            &self,
            token: &AccessToken,
            tenant_id: TenantId,
        ) -> ApiResult<Vec<Webhook>>;
    }

    #[async_trait]
    impl WebhookWriter for Api {
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
    impl AbacReader for Api {
        async fn list_abac_policies(
            &self,
            token: &AccessToken,
            tenant_id: TenantId,
        ) -> ApiResult<AbacPolicies>;
    }

    #[async_trait]
    impl AbacWriter for Api {
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
    impl IdentityProviderReader for Api {
        async fn list_identity_providers(
            &self,
            token: &AccessToken,
        ) -> ApiResult<Vec<IdentityProvider>>;
        async fn list_linked_identities(&self, token: &AccessToken)
        -> ApiResult<Vec<LinkedIdentity>>;
    }

    #[async_trait]
    impl IdentityProviderWriter for Api {
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
    impl SessionReader for Api {
        async fn list_sessions(&self, token: &AccessToken) -> ApiResult<Vec<SessionInfo>>;
    }

    #[async_trait]
    impl SessionWriter for Api {
        async fn revoke_session(&self, token: &AccessToken, session_id: SessionId) -> ApiResult<()>;
        async fn revoke_other_sessions(&self, token: &AccessToken) -> ApiResult<()>;
        async fn force_logout_user(&self, token: &AccessToken, user_id: UserId) -> ApiResult<()>;
    }

    #[async_trait]
    impl AnalyticsReader for Api {
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
    impl AuditLogReader for Api {
        async fn list_audit_logs(
            &self,
            token: &AccessToken,
            query: AuditLogQuery,
        ) -> ApiResult<Paged<AuditLog>>;
    }

    #[async_trait]
    impl SecurityAlertReader for Api {
        async fn list_security_alerts(
            &self,
            token: &AccessToken,
            query: SecurityAlertQuery,
        ) -> ApiResult<Paged<SecurityAlert>>;
    }

    #[async_trait]
    impl SecurityAlertWriter for Api {
        async fn resolve_security_alert(
            &self,
            token: &AccessToken,
            alert_id: SecurityAlertId,
        ) -> ApiResult<SecurityAlert>;
    }

    #[async_trait]
    impl BrandingReader for Api {
        async fn get_branding(&self, token: &AccessToken) -> ApiResult<BrandingConfig>;
    }

    #[async_trait]
    impl BrandingWriter for Api {
        async fn update_branding(
            &self,
            token: &AccessToken,
            config: &BrandingConfig,
        ) -> ApiResult<BrandingConfig>;
    }

    #[async_trait]
    impl EmailTemplateReader for Api {
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
    impl EmailTemplateWriter for Api {
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

    #[async_trait]
    impl TokenExchanger for Api {
        async fn exchange_code(&self, request: &CodeExchange) -> ApiResult<TokenResponse>;
    }
}
