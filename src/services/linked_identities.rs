use crate::api::{IdentityProviderReader, IdentityProviderWriter};
use crate::domain::types::AccessToken;
use crate::dto::PageData;
use crate::dto::account::LinkedIdentitiesPageData;
use crate::forms::linked_identities::{LinkedIdentityForm, LinkedIdentityIntent};
use crate::services::{
    ActionReply, ServiceResult, action_error, loader_error, parse_intent,
};

/// Loads the external accounts linked to the signed-in user.
pub async fn load_linked_identities_page<A>(
    api: &A,
    token: &AccessToken,
) -> ServiceResult<LinkedIdentitiesPageData>
where
    A: IdentityProviderReader + ?Sized,
{
    match api.list_linked_identities(token).await {
        Ok(identities) => Ok(LinkedIdentitiesPageData {
            identities,
            error: None,
        }),
        Err(err) => {
            loader_error("Failed to list linked identities", err)?;
            Ok(LinkedIdentitiesPageData::failed(
                "Failed to load linked identities",
            ))
        }
    }
}

pub async fn linked_identities_action<A>(
    api: &A,
    token: &AccessToken,
    body: &[u8],
) -> ServiceResult<ActionReply>
where
    A: IdentityProviderWriter + ?Sized,
{
    match parse_intent::<LinkedIdentityForm, LinkedIdentityIntent>(body)? {
        LinkedIdentityIntent::Unlink(identity_id) => {
            api.unlink_identity(token, identity_id)
                .await
                .map_err(|err| action_error("Failed to unlink identity", err))?;
            Ok(ActionReply::success("Identity unlinked successfully"))
        }
    }
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::api::errors::ApiError;
    use crate::api::mock::MockApi;
    use crate::domain::types::LinkedIdentityId;
    use crate::services::ServiceError;
    use crate::services::fixtures::token;

    const IDENTITY_ID: &str = "c56a4180-65aa-42ec-a945-5fd21dec0538";

    #[actix_web::test]
    async fn unlink_calls_backend_once() {
        let mut api = MockApi::new();
        api.expect_unlink_identity()
            .withf(|t, id| *t == token() && *id == LinkedIdentityId::new(IDENTITY_ID).unwrap())
            .times(1)
            .returning(|_, _| Ok(()));

        let body = format!("intent=unlink&identity_id={IDENTITY_ID}");
        let reply = linked_identities_action(&api, &token(), body.as_bytes())
            .await
            .unwrap();

        assert_eq!(reply, ActionReply::success("Identity unlinked successfully"));
    }

    #[actix_web::test]
    async fn unknown_intent_is_not_forwarded() {
        let mut api = MockApi::new();
        api.expect_unlink_identity().times(0);

        let body = format!("intent=relink&identity_id={IDENTITY_ID}");
        let result = linked_identities_action(&api, &token(), body.as_bytes()).await;

        assert_eq!(result, Err(ServiceError::InvalidIntent));
    }

    #[actix_web::test]
    async fn connection_error_falls_back_to_generic_message() {
        let mut api = MockApi::new();
        api.expect_unlink_identity()
            .returning(|_, _| Err(ApiError::Transport("connection reset".to_string())));

        let body = format!("intent=unlink&identity_id={IDENTITY_ID}");
        let result = linked_identities_action(&api, &token(), body.as_bytes()).await;

        assert_eq!(result.unwrap_err().to_string(), "Operation failed");
    }
}
