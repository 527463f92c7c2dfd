use crate::api::{TenantReader, TenantWriter};
use crate::domain::types::{AccessToken, TenantId};
use crate::dto::PageData;
use crate::dto::tenants::TenantServicesPageData;
use crate::forms::tenant_services::{TenantServiceForm, TenantServiceIntent};
use crate::services::{
    ActionReply, ServiceResult, action_error, loader_error, parse_intent, route_id,
};

/// Lists every service with its enablement flag for the tenant.
pub async fn load_tenant_services_page<A>(
    api: &A,
    token: &AccessToken,
    tenant_id: &str,
) -> ServiceResult<TenantServicesPageData>
where
    A: TenantReader + ?Sized,
{
    let tenant_id: TenantId = route_id(tenant_id, "tenant ID")?;

    match api.list_tenant_services(token, tenant_id).await {
        Ok(services) => Ok(TenantServicesPageData {
            tenant_id: Some(tenant_id),
            services,
            error: None,
        }),
        Err(err) => {
            loader_error("Failed to list tenant services", err)?;
            Ok(TenantServicesPageData {
                tenant_id: Some(tenant_id),
                ..TenantServicesPageData::failed("Failed to load services")
            })
        }
    }
}

pub async fn tenant_services_action<A>(
    api: &A,
    token: &AccessToken,
    tenant_id: &str,
    body: &[u8],
) -> ServiceResult<ActionReply>
where
    A: TenantWriter + ?Sized,
{
    let tenant_id: TenantId = route_id(tenant_id, "tenant ID")?;

    match parse_intent::<TenantServiceForm, TenantServiceIntent>(body)? {
        TenantServiceIntent::Toggle {
            service_id,
            enabled,
        } => {
            api.toggle_tenant_service(token, tenant_id, service_id, enabled)
                .await
                .map_err(|err| action_error("Failed to toggle tenant service", err))?;
            let message = if enabled {
                "Service enabled"
            } else {
                "Service disabled"
            };
            Ok(ActionReply::success(message))
        }
    }
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::api::mock::MockApi;
    use crate::services::ServiceError;
    use crate::services::fixtures::{SERVICE_ID, TENANT_ID, service_id, tenant_id, token};

    #[actix_web::test]
    async fn invalid_tenant_id_is_rejected_before_loading() {
        let mut api = MockApi::new();
        api.expect_list_tenant_services().times(0);

        let result = load_tenant_services_page(&api, &token(), "not-a-uuid").await;

        assert_eq!(
            result.unwrap_err(),
            ServiceError::Form("Invalid tenant ID".to_string())
        );
    }

    #[actix_web::test]
    async fn toggle_forwards_flag() {
        let mut api = MockApi::new();
        api.expect_toggle_tenant_service()
            .withf(|_, tid, sid, enabled| *tid == tenant_id() && *sid == service_id() && !*enabled)
            .times(1)
            .returning(|_, _, _, _| Ok(Vec::new()));

        let body = format!("intent=toggle&service_id={SERVICE_ID}&enabled=false");
        let reply = tenant_services_action(&api, &token(), TENANT_ID, body.as_bytes())
            .await
            .unwrap();

        assert_eq!(reply, ActionReply::success("Service disabled"));
    }
}
