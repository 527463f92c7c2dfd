use async_trait::async_trait;

use crate::api::client::{HttpApi, page_pairs};
use crate::api::errors::ApiResult;
use crate::api::{AnalyticsReader, Paged};
use crate::domain::analytics::{AnalyticsRange, DailyTrendPoint, LoginEvent, LoginStats};
use crate::domain::types::AccessToken;
use crate::pagination::Pagination;

#[async_trait]
impl AnalyticsReader for HttpApi {
    async fn get_login_stats(
        &self,
        token: &AccessToken,
        range: &AnalyticsRange,
    ) -> ApiResult<LoginStats> {
        self.get_data(token, "/api/v1/analytics/login-stats", &range.query_pairs())
            .await
    }

    async fn get_daily_trend(
        &self,
        token: &AccessToken,
        range: &AnalyticsRange,
    ) -> ApiResult<Vec<DailyTrendPoint>> {
        self.get_data(token, "/api/v1/analytics/daily-trend", &range.query_pairs())
            .await
    }

    async fn list_login_events(
        &self,
        token: &AccessToken,
        pagination: Pagination,
    ) -> ApiResult<Paged<LoginEvent>> {
        self.get_page(token, "/api/v1/analytics/login-events", &page_pairs(pagination))
            .await
    }
}
