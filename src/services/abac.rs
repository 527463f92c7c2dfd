use crate::api::{AbacReader, AbacWriter};
use crate::domain::types::{AccessToken, TenantId};
use crate::dto::PageData;
use crate::dto::tenants::AbacPageData;
use crate::forms::abac::{AbacForm, AbacIntent};
use crate::services::{
    ActionReply, ServiceResult, action_error, loader_error, parse_intent, route_id,
};

/// Loads the tenant's policy set and its version history.
pub async fn load_abac_page<A>(
    api: &A,
    token: &AccessToken,
    tenant_id: &str,
) -> ServiceResult<AbacPageData>
where
    A: AbacReader + ?Sized,
{
    let tenant_id: TenantId = route_id(tenant_id, "tenant ID")?;

    match api.list_abac_policies(token, tenant_id).await {
        Ok(policies) => Ok(AbacPageData {
            tenant_id: Some(tenant_id),
            policy_set: policies.policy_set,
            versions: policies.versions,
            error: None,
        }),
        Err(err) => {
            loader_error("Failed to list ABAC policies", err)?;
            Ok(AbacPageData {
                tenant_id: Some(tenant_id),
                ..AbacPageData::failed("Failed to load policies")
            })
        }
    }
}

pub async fn abac_action<A>(
    api: &A,
    token: &AccessToken,
    tenant_id: &str,
    body: &[u8],
) -> ServiceResult<ActionReply>
where
    A: AbacWriter + ?Sized,
{
    let tenant_id: TenantId = route_id(tenant_id, "tenant ID")?;

    match parse_intent::<AbacForm, AbacIntent>(body)? {
        AbacIntent::Create(input) => {
            let draft = api
                .create_abac_draft(token, tenant_id, &input)
                .await
                .map_err(|err| action_error("Failed to create ABAC draft", err))?;
            Ok(ActionReply::success("Draft created").with("draft", &draft))
        }
        AbacIntent::Update { version_id, input } => {
            api.update_abac_draft(token, tenant_id, version_id, &input)
                .await
                .map_err(|err| action_error("Failed to update ABAC draft", err))?;
            Ok(ActionReply::success("Draft updated"))
        }
        AbacIntent::Publish { version_id, mode } => {
            api.publish_abac_policy(token, tenant_id, version_id, mode)
                .await
                .map_err(|err| action_error("Failed to publish ABAC policy", err))?;
            Ok(ActionReply::success("Policy published"))
        }
        AbacIntent::Rollback { version_id, mode } => {
            api.rollback_abac_policy(token, tenant_id, version_id, mode)
                .await
                .map_err(|err| action_error("Failed to roll back ABAC policy", err))?;
            Ok(ActionReply::success("Policy rolled back"))
        }
        AbacIntent::Simulate(request) => {
            let simulation = api
                .simulate_abac(token, tenant_id, &request)
                .await
                .map_err(|err| action_error("Failed to simulate ABAC policy", err))?;
            Ok(ActionReply::silent().with("simulation", &simulation))
        }
    }
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::api::mock::MockApi;
    use crate::domain::abac::{AbacMode, AbacPolicies, AbacSimulationResult};
    use crate::services::ServiceError;
    use crate::services::fixtures::{TENANT_ID, token};

    const VERSION_ID: &str = "5b0c7a3e-8a44-4f61-9d8e-0f1e2d3c4b5a";

    #[actix_web::test]
    async fn empty_policy_set_loads() {
        let mut api = MockApi::new();
        api.expect_list_abac_policies()
            .returning(|_, _| Ok(AbacPolicies::default()));

        let page = load_abac_page(&api, &token(), TENANT_ID).await.unwrap();

        assert!(page.policy_set.is_none());
        assert!(page.error.is_none());
    }

    #[actix_web::test]
    async fn publish_forwards_mode() {
        let mut api = MockApi::new();
        api.expect_publish_abac_policy()
            .withf(|_, _, _, mode| *mode == Some(AbacMode::Enforce))
            .times(1)
            .returning(|_, _, _, _| Ok(()));

        let body = format!("intent=publish&version_id={VERSION_ID}&mode=enforce");
        let reply = abac_action(&api, &token(), TENANT_ID, body.as_bytes())
            .await
            .unwrap();

        assert_eq!(reply, ActionReply::success("Policy published"));
    }

    #[actix_web::test]
    async fn simulate_returns_decision() {
        let mut api = MockApi::new();
        api.expect_simulate_abac()
            .withf(|_, _, req| req.simulation.action == "read" && req.policy.is_none())
            .times(1)
            .returning(|_, _, _| {
                Ok(AbacSimulationResult {
                    decision: "allow".to_string(),
                    matched_allow_rule_ids: vec!["r1".to_string()],
                    matched_deny_rule_ids: Vec::new(),
                })
            });

        let reply = abac_action(
            &api,
            &token(),
            TENANT_ID,
            b"intent=simulate&sim_action=read&sim_resource_type=doc",
        )
        .await
        .unwrap();

        match reply {
            ActionReply::Success { message, data } => {
                assert!(message.is_none());
                assert_eq!(data["simulation"]["decision"], "allow");
            }
            other => panic!("unexpected reply {other:?}"),
        }
    }

    #[actix_web::test]
    async fn malformed_policy_is_a_form_error() {
        let mut api = MockApi::new();
        api.expect_create_abac_draft().times(0);

        let result = abac_action(&api, &token(), TENANT_ID, b"intent=create&policy=%7Bx").await;

        assert_eq!(
            result,
            Err(ServiceError::Form("Policy must be valid JSON".to_string()))
        );
    }
}
