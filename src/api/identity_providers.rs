use async_trait::async_trait;
use reqwest::Method;

use crate::api::client::HttpApi;
use crate::api::errors::ApiResult;
use crate::api::{IdentityProviderReader, IdentityProviderWriter};
use crate::domain::identity_provider::{
    IdentityProvider, LinkedIdentity, NewIdentityProvider, UpdateIdentityProvider,
};
use crate::domain::types::{AccessToken, LinkedIdentityId, ProviderAlias};

#[async_trait]
impl IdentityProviderReader for HttpApi {
    async fn list_identity_providers(
        &self,
        token: &AccessToken,
    ) -> ApiResult<Vec<IdentityProvider>> {
        self.get_data(token, "/api/v1/identity-providers", &[]).await
    }

    async fn list_linked_identities(
        &self,
        token: &AccessToken,
    ) -> ApiResult<Vec<LinkedIdentity>> {
        self.get_data(token, "/api/v1/users/me/linked-identities", &[])
            .await
    }
}

#[async_trait]
impl IdentityProviderWriter for HttpApi {
    async fn create_identity_provider(
        &self,
        token: &AccessToken,
        provider: &NewIdentityProvider,
    ) -> ApiResult<IdentityProvider> {
        self.send_data(Method::POST, token, "/api/v1/identity-providers", provider)
            .await
    }

    async fn update_identity_provider(
        &self,
        token: &AccessToken,
        alias: &ProviderAlias,
        updates: &UpdateIdentityProvider,
    ) -> ApiResult<IdentityProvider> {
        let path = format!("/api/v1/identity-providers/{alias}");
        self.send_data(Method::PUT, token, &path, updates).await
    }

    async fn delete_identity_provider(
        &self,
        token: &AccessToken,
        alias: &ProviderAlias,
    ) -> ApiResult<()> {
        let path = format!("/api/v1/identity-providers/{alias}");
        self.send_empty(Method::DELETE, token, &path).await
    }

    async fn unlink_identity(
        &self,
        token: &AccessToken,
        identity_id: LinkedIdentityId,
    ) -> ApiResult<()> {
        let path = format!("/api/v1/users/me/linked-identities/{identity_id}");
        self.send_empty(Method::DELETE, token, &path).await
    }
}
