use crate::api::{Paged, SecurityAlertQuery, SecurityAlertReader, SecurityAlertWriter};
use crate::domain::types::AccessToken;
use crate::dto::PageData;
use crate::dto::reports::{SecurityAlertsPageData, SecurityAlertsQuery};
use crate::forms::parse_bool;
use crate::forms::security_alerts::{SecurityAlertForm, SecurityAlertIntent};
use crate::pagination::PaginationMeta;
use crate::services::{
    ActionReply, ServiceResult, action_error, loader_error, parse_intent,
};

pub async fn load_security_alerts_page<A>(
    api: &A,
    token: &AccessToken,
    query: SecurityAlertsQuery,
) -> ServiceResult<SecurityAlertsPageData>
where
    A: SecurityAlertReader + ?Sized,
{
    let pagination = query.paging.pagination();
    let unresolved_only = parse_bool(query.unresolved.as_deref()).unwrap_or(false);

    let list_query = SecurityAlertQuery::new(pagination).unresolved_only(unresolved_only);

    match api.list_security_alerts(token, list_query).await {
        Ok(Paged { items, pagination }) => Ok(SecurityAlertsPageData {
            alerts: items,
            pagination,
            unresolved_only,
            error: None,
        }),
        Err(err) => {
            loader_error("Failed to list security alerts", err)?;
            Ok(SecurityAlertsPageData {
                pagination: PaginationMeta::zeroed(pagination),
                unresolved_only,
                ..SecurityAlertsPageData::failed("Failed to load security alerts")
            })
        }
    }
}

pub async fn security_alerts_action<A>(
    api: &A,
    token: &AccessToken,
    body: &[u8],
) -> ServiceResult<ActionReply>
where
    A: SecurityAlertWriter + ?Sized,
{
    match parse_intent::<SecurityAlertForm, SecurityAlertIntent>(body)? {
        SecurityAlertIntent::Resolve(alert_id) => {
            let alert = api
                .resolve_security_alert(token, alert_id)
                .await
                .map_err(|err| action_error("Failed to resolve security alert", err))?;
            Ok(ActionReply::success("Alert resolved").with("alert", &alert))
        }
    }
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::api::errors::ApiError;
    use crate::api::mock::MockApi;
    use crate::pagination::Pagination;
    use crate::services::fixtures::token;

    #[actix_web::test]
    async fn unresolved_filter_is_forwarded() {
        let mut api = MockApi::new();
        api.expect_list_security_alerts()
            .withf(|_, q| *q == SecurityAlertQuery::new(Pagination::default()).unresolved_only(true))
            .times(1)
            .returning(|_, q| {
                Ok(Paged {
                    items: Vec::new(),
                    pagination: PaginationMeta::from_total(q.pagination, 0),
                })
            });

        let query: SecurityAlertsQuery =
            serde_html_form::from_str("unresolved=true&severity=high").unwrap();
        let page = load_security_alerts_page(&api, &token(), query).await.unwrap();

        assert!(page.unresolved_only);
        assert!(page.error.is_none());
    }

    #[actix_web::test]
    async fn failure_keeps_filter_echo() {
        let mut api = MockApi::new();
        api.expect_list_security_alerts()
            .returning(|_, _| Err(ApiError::Transport("refused".to_string())));

        let query = SecurityAlertsQuery {
            unresolved: Some("1".to_string()),
            ..Default::default()
        };
        let page = load_security_alerts_page(&api, &token(), query).await.unwrap();

        assert_eq!(page.error.as_deref(), Some("Failed to load security alerts"));
        assert!(page.unresolved_only);
        assert!(page.alerts.is_empty());
    }
}
