//! Login analytics dashboard.

use chrono::{DateTime, NaiveDate, Utc};

use crate::api::errors::ApiError;
use crate::api::{AnalyticsReader, Paged};
use crate::domain::analytics::AnalyticsRange;
use crate::domain::types::AccessToken;
use crate::dto::PageData;
use crate::dto::reports::{AnalyticsPageData, AnalyticsQuery};
use crate::pagination::PaginationMeta;
use crate::services::{ServiceResult, loader_error};

pub const DEFAULT_ANALYTICS_DAYS: u32 = 7;
pub const MAX_ANALYTICS_DAYS: u32 = 365;

fn parse_days(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .map(|days| days.clamp(1, i64::from(MAX_ANALYTICS_DAYS)) as u32)
        .unwrap_or(DEFAULT_ANALYTICS_DAYS)
}

/// Accepts RFC 3339 timestamps or plain dates; a plain end date covers the
/// whole day.
fn parse_bound(raw: Option<&str>, end_of_day: bool) -> Option<DateTime<Utc>> {
    let raw = raw.map(str::trim).filter(|value| !value.is_empty())?;
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let time = if end_of_day {
        date.and_hms_opt(23, 59, 59)
    } else {
        date.and_hms_opt(0, 0, 0)
    };
    time.map(|naive| naive.and_utc())
}

/// Explicit `start`/`end` win over `days` when both parse and are ordered.
pub fn analytics_range(query: &AnalyticsQuery) -> AnalyticsRange {
    let start = parse_bound(query.start.as_deref(), false);
    let end = parse_bound(query.end.as_deref(), true);
    match (start, end) {
        (Some(start), Some(end)) if start <= end => AnalyticsRange::Between { start, end },
        _ => AnalyticsRange::Days(parse_days(query.days.as_deref())),
    }
}

pub async fn load_analytics_page<A>(
    api: &A,
    token: &AccessToken,
    query: AnalyticsQuery,
) -> ServiceResult<AnalyticsPageData>
where
    A: AnalyticsReader + ?Sized,
{
    let pagination = query.paging.pagination();
    let range = analytics_range(&query);
    let days = match range {
        AnalyticsRange::Days(days) => days,
        AnalyticsRange::Between { start, end } => {
            u32::try_from((end - start).num_days() + 1).unwrap_or(DEFAULT_ANALYTICS_DAYS)
        }
    };
    let (start, end) = match &range {
        AnalyticsRange::Between { start, end } => {
            (Some(start.to_rfc3339()), Some(end.to_rfc3339()))
        }
        AnalyticsRange::Days(_) => (None, None),
    };

    let loaded = async {
        let stats = api.get_login_stats(token, &range).await?;
        let daily_trend = api.get_daily_trend(token, &range).await?;
        let events = api.list_login_events(token, pagination).await?;
        Ok::<_, ApiError>((stats, daily_trend, events))
    }
    .await;

    match loaded {
        Ok((stats, daily_trend, Paged { items, pagination })) => Ok(AnalyticsPageData {
            stats: Some(stats),
            daily_trend,
            events: items,
            pagination,
            days,
            start,
            end,
            error: None,
        }),
        Err(err) => {
            loader_error("Failed to load analytics", err)?;
            Ok(AnalyticsPageData {
                pagination: PaginationMeta::zeroed(pagination),
                days,
                start,
                end,
                ..AnalyticsPageData::failed("Failed to load analytics")
            })
        }
    }
}

#[cfg(test)]
mod range_tests {
    use super::*;

    fn query(days: Option<&str>, start: Option<&str>, end: Option<&str>) -> AnalyticsQuery {
        AnalyticsQuery {
            days: days.map(str::to_string),
            start: start.map(str::to_string),
            end: end.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn days_default_and_clamp() {
        assert_eq!(analytics_range(&query(None, None, None)), AnalyticsRange::Days(7));
        assert_eq!(analytics_range(&query(Some("0"), None, None)), AnalyticsRange::Days(1));
        assert_eq!(
            analytics_range(&query(Some("9000"), None, None)),
            AnalyticsRange::Days(365)
        );
        assert_eq!(analytics_range(&query(Some("abc"), None, None)), AnalyticsRange::Days(7));
    }

    #[test]
    fn explicit_dates_take_precedence() {
        let range = analytics_range(&query(Some("30"), Some("2024-03-01"), Some("2024-03-07")));
        match range {
            AnalyticsRange::Between { start, end } => {
                assert_eq!(start.to_rfc3339(), "2024-03-01T00:00:00+00:00");
                assert_eq!(end.to_rfc3339(), "2024-03-07T23:59:59+00:00");
            }
            other => panic!("unexpected range {other:?}"),
        }
    }

    #[test]
    fn half_open_or_inverted_ranges_fall_back_to_days() {
        assert_eq!(
            analytics_range(&query(Some("14"), Some("2024-03-01"), None)),
            AnalyticsRange::Days(14)
        );
        assert_eq!(
            analytics_range(&query(None, Some("2024-03-07"), Some("2024-03-01"))),
            AnalyticsRange::Days(7)
        );
    }
}
