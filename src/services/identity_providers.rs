use crate::api::{IdentityProviderReader, IdentityProviderWriter};
use crate::domain::identity_provider::UpdateIdentityProvider;
use crate::domain::types::AccessToken;
use crate::dto::PageData;
use crate::dto::settings::IdentityProvidersPageData;
use crate::forms::identity_providers::{IdentityProviderForm, IdentityProviderIntent};
use crate::services::{
    ActionReply, ServiceResult, action_error, loader_error, parse_intent,
};

pub async fn load_identity_providers_page<A>(
    api: &A,
    token: &AccessToken,
) -> ServiceResult<IdentityProvidersPageData>
where
    A: IdentityProviderReader + ?Sized,
{
    match api.list_identity_providers(token).await {
        Ok(providers) => Ok(IdentityProvidersPageData {
            providers,
            error: None,
        }),
        Err(err) => {
            loader_error("Failed to list identity providers", err)?;
            Ok(IdentityProvidersPageData::failed(
                "Failed to load identity providers",
            ))
        }
    }
}

pub async fn identity_providers_action<A>(
    api: &A,
    token: &AccessToken,
    body: &[u8],
) -> ServiceResult<ActionReply>
where
    A: IdentityProviderWriter + ?Sized,
{
    match parse_intent::<IdentityProviderForm, IdentityProviderIntent>(body)? {
        IdentityProviderIntent::Create(provider) => {
            api.create_identity_provider(token, &provider)
                .await
                .map_err(|err| action_error("Failed to create identity provider", err))?;
            Ok(ActionReply::success(
                "Identity provider created successfully",
            ))
        }
        IdentityProviderIntent::Update { alias, updates } => {
            api.update_identity_provider(token, &alias, &updates)
                .await
                .map_err(|err| action_error("Failed to update identity provider", err))?;
            Ok(ActionReply::success(
                "Identity provider updated successfully",
            ))
        }
        IdentityProviderIntent::Toggle { alias, enabled } => {
            let updates = UpdateIdentityProvider {
                enabled: Some(enabled),
                ..Default::default()
            };
            api.update_identity_provider(token, &alias, &updates)
                .await
                .map_err(|err| action_error("Failed to toggle identity provider", err))?;
            let message = if enabled {
                "Identity provider enabled"
            } else {
                "Identity provider disabled"
            };
            Ok(ActionReply::success(message))
        }
        IdentityProviderIntent::Delete(alias) => {
            api.delete_identity_provider(token, &alias)
                .await
                .map_err(|err| action_error("Failed to delete identity provider", err))?;
            Ok(ActionReply::success(
                "Identity provider deleted successfully",
            ))
        }
    }
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::api::errors::ApiError;
    use crate::api::mock::MockApi;
    use crate::services::fixtures::token;

    #[actix_web::test]
    async fn failure_keeps_providers_empty() {
        let mut api = MockApi::new();
        api.expect_list_identity_providers()
            .returning(|_| Err(ApiError::Decode("expected array".to_string())));

        let page = load_identity_providers_page(&api, &token()).await.unwrap();

        assert_eq!(page.error.as_deref(), Some("Failed to load identity providers"));
        assert!(page.providers.is_empty());
    }

    #[actix_web::test]
    async fn delete_reports_backend_message() {
        let mut api = MockApi::new();
        api.expect_delete_identity_provider()
            .withf(|_, alias| alias.as_str() == "google")
            .times(1)
            .returning(|_, _| Err(ApiError::NotFound("Identity provider not found".to_string())));

        let result = identity_providers_action(&api, &token(), b"intent=delete&alias=google").await;

        assert_eq!(
            result.unwrap_err().to_string(),
            "Identity provider not found".to_string()
        );
    }
}
