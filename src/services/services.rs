use crate::api::{Paged, ServiceReader, ServiceWriter};
use crate::domain::types::AccessToken;
use crate::dto::PageData;
use crate::dto::services::ServicesPageData;
use crate::forms::services::{ServiceForm, ServiceIntent};
use crate::pagination::{PageQuery, PaginationMeta};
use crate::services::{
    ActionReply, ServiceResult, action_error, loader_error, parse_intent,
};

pub async fn load_services_page<A>(
    api: &A,
    token: &AccessToken,
    query: PageQuery,
) -> ServiceResult<ServicesPageData>
where
    A: ServiceReader + ?Sized,
{
    let pagination = query.pagination();

    match api.list_services(token, pagination).await {
        Ok(Paged { items, pagination }) => Ok(ServicesPageData {
            services: items,
            pagination,
            error: None,
        }),
        Err(err) => {
            loader_error("Failed to list services", err)?;
            Ok(ServicesPageData {
                pagination: PaginationMeta::zeroed(pagination),
                ..ServicesPageData::failed("Failed to load services")
            })
        }
    }
}

/// Creating a service answers in place: the client secret is only shown once.
pub async fn services_action<A>(
    api: &A,
    token: &AccessToken,
    body: &[u8],
) -> ServiceResult<ActionReply>
where
    A: ServiceWriter + ?Sized,
{
    match parse_intent::<ServiceForm, ServiceIntent>(body)? {
        ServiceIntent::Create(service) => {
            let created = api
                .create_service(token, &service)
                .await
                .map_err(|err| action_error("Failed to create service", err))?;
            Ok(ActionReply::success("Service created successfully")
                .with("service", &created.service)
                .with("client_secret", &created.client_secret))
        }
        ServiceIntent::Update { id, updates } => {
            api.update_service(token, id, &updates)
                .await
                .map_err(|err| action_error("Failed to update service", err))?;
            Ok(ActionReply::success("Service updated successfully"))
        }
        ServiceIntent::Delete(id) => {
            api.delete_service(token, id)
                .await
                .map_err(|err| action_error("Failed to delete service", err))?;
            Ok(ActionReply::success("Service deleted successfully"))
        }
    }
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::api::errors::ApiError;
    use crate::api::mock::MockApi;
    use crate::domain::service::CreatedService;
    use crate::pagination::Pagination;
    use crate::services::fixtures::{service, token};

    #[actix_web::test]
    async fn page_size_is_capped() {
        let mut api = MockApi::new();
        api.expect_list_services()
            .withf(|_, p| *p == Pagination { page: 1, per_page: 100 })
            .times(1)
            .returning(|_, p| {
                Ok(Paged {
                    items: vec![service("Portal")],
                    pagination: PaginationMeta::from_total(p, 1),
                })
            });

        let query = PageQuery {
            per_page_camel: Some("500".to_string()),
            ..Default::default()
        };
        let page = load_services_page(&api, &token(), query).await.unwrap();

        assert_eq!(page.services.len(), 1);
        assert_eq!(page.pagination.per_page, 100);
    }

    #[actix_web::test]
    async fn failure_reports_services_noun() {
        let mut api = MockApi::new();
        api.expect_list_services().returning(|_, _| {
            Err(ApiError::Status {
                status: 500,
                message: "boom".to_string(),
            })
        });

        let page = load_services_page(&api, &token(), PageQuery::default())
            .await
            .unwrap();

        assert_eq!(page.error.as_deref(), Some("Failed to load services"));
        assert!(page.services.is_empty());
    }

    #[actix_web::test]
    async fn create_returns_one_time_secret() {
        let mut api = MockApi::new();
        api.expect_create_service()
            .withf(|_, s| s.redirect_uris == vec!["https://app.example.com/callback".to_string()])
            .times(1)
            .returning(|_, _| {
                Ok(CreatedService {
                    service: service("Portal"),
                    client_secret: Some("s3cret".to_string()),
                })
            });

        let reply = services_action(
            &api,
            &token(),
            b"intent=create&name=Portal&redirect_uris=https%3A%2F%2Fapp.example.com%2Fcallback",
        )
        .await
        .unwrap();

        match reply {
            ActionReply::Success { message, data } => {
                assert_eq!(message.as_deref(), Some("Service created successfully"));
                assert_eq!(data.get("client_secret"), Some(&Value::from("s3cret")));
                assert_eq!(data["service"]["name"], "Portal");
            }
            other => panic!("unexpected reply {other:?}"),
        }
    }
}
