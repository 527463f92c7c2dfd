use async_trait::async_trait;
use reqwest::Method;

use crate::api::client::{HttpApi, page_pairs};
use crate::api::errors::ApiResult;
use crate::api::{Paged, ServiceReader, ServiceWriter};
use crate::domain::service::{CreatedService, NewService, Service, UpdateService};
use crate::domain::types::{AccessToken, ServiceId};
use crate::pagination::Pagination;

#[async_trait]
impl ServiceReader for HttpApi {
    async fn list_services(
        &self,
        token: &AccessToken,
        pagination: Pagination,
    ) -> ApiResult<Paged<Service>> {
        self.get_page(token, "/api/v1/services", &page_pairs(pagination))
            .await
    }
}

#[async_trait]
impl ServiceWriter for HttpApi {
    async fn create_service(
        &self,
        token: &AccessToken,
        service: &NewService,
    ) -> ApiResult<CreatedService> {
        self.send_data(Method::POST, token, "/api/v1/services", service)
            .await
    }

    async fn update_service(
        &self,
        token: &AccessToken,
        service_id: ServiceId,
        updates: &UpdateService,
    ) -> ApiResult<Service> {
        self.send_data(
            Method::PUT,
            token,
            &format!("/api/v1/services/{service_id}"),
            updates,
        )
        .await
    }

    async fn delete_service(&self, token: &AccessToken, service_id: ServiceId) -> ApiResult<()> {
        self.send_empty(
            Method::DELETE,
            token,
            &format!("/api/v1/services/{service_id}"),
        )
        .await
    }
}
