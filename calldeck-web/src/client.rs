//! Remote metrics fetcher
//!
//! Issues the two read requests against the external aggregation
//! endpoint: the summary aggregate and the paginated call log. Query
//! parameters come from caller-supplied overrides with computed
//! current-month defaults.

use anyhow::Result;
use chrono::{DateTime, Datelike, Local, TimeZone};
use serde::Deserialize;

use calldeck_data::remote::{CallLogRecord, CallLogsResponse, SummaryResponse};

use crate::config::CalldeckConfig;

/// Optional overrides accepted verbatim from the dashboard query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchOverrides {
    pub location_id: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub time_period: Option<String>,
    pub direction: Option<String>,
    pub timezone: Option<String>,
}

/// Fully resolved request parameters for one refresh cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchParams {
    pub location_id: String,
    pub start_time: String,
    pub end_time: String,
    pub start_date: String,
    pub end_date: String,
    pub time_period: String,
    pub direction: String,
    pub timezone: String,
}

impl FetchParams {
    /// Apply defaults for any absent override: configured location,
    /// timezone and direction, THIS_MONTH period, and a time window
    /// spanning the first through last millisecond of the current
    /// calendar month on the local clock.
    pub fn resolve(
        overrides: &FetchOverrides,
        config: &CalldeckConfig,
        now: DateTime<Local>,
    ) -> Self {
        let (month_start, month_end) = month_window_millis(now);
        let start_default = month_start.to_string();
        let end_default = month_end.to_string();

        FetchParams {
            location_id: overrides
                .location_id
                .clone()
                .unwrap_or_else(|| config.default_location_id().to_string()),
            start_time: overrides
                .start_time
                .clone()
                .unwrap_or_else(|| start_default.clone()),
            end_time: overrides
                .end_time
                .clone()
                .unwrap_or_else(|| end_default.clone()),
            start_date: overrides.start_date.clone().unwrap_or(start_default),
            end_date: overrides.end_date.clone().unwrap_or(end_default),
            time_period: overrides
                .time_period
                .clone()
                .unwrap_or_else(|| "THIS_MONTH".to_string()),
            direction: overrides
                .direction
                .clone()
                .unwrap_or_else(|| config.default_direction().to_string()),
            timezone: overrides
                .timezone
                .clone()
                .unwrap_or_else(|| config.default_timezone().to_string()),
        }
    }
}

/// Epoch-millisecond bounds of the calendar month containing `now`.
fn month_window_millis(now: DateTime<Local>) -> (i64, i64) {
    let (year, month) = (now.year(), now.month());
    let start = Local
        .with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .earliest()
        .map(|t| t.timestamp_millis())
        .unwrap_or_else(|| now.timestamp_millis());

    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let end = Local
        .with_ymd_and_hms(next_year, next_month, 1, 0, 0, 0)
        .earliest()
        .map(|t| t.timestamp_millis() - 1)
        .unwrap_or_else(|| now.timestamp_millis());

    (start, end)
}

/// HTTP client for the external aggregation endpoint.
pub struct MetricsClient {
    http: reqwest::Client,
    base_url: String,
}

impl MetricsClient {
    pub fn new(base_url: &str) -> Self {
        MetricsClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the summary aggregate for the window.
    pub async fn fetch_summary(&self, params: &FetchParams) -> Result<SummaryResponse> {
        let url = format!(
            "{}/{}/voice-ai/dashboard/agents",
            self.base_url, params.location_id
        );
        let response = self
            .http
            .get(&url)
            .query(&[
                ("locationId", params.location_id.as_str()),
                ("startTime", params.start_time.as_str()),
                ("endTime", params.end_time.as_str()),
                ("timePeriod", params.time_period.as_str()),
                ("direction", params.direction.as_str()),
                ("timezone", params.timezone.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Fetch the first page of inbound live call logs for the window.
    pub async fn fetch_call_logs(&self, params: &FetchParams) -> Result<Vec<CallLogRecord>> {
        let url = format!(
            "{}/{}/voice-ai/dashboard/call-logs",
            self.base_url, params.location_id
        );
        let response = self
            .http
            .get(&url)
            .query(&[
                ("locationId", params.location_id.as_str()),
                ("pageSize", "10"),
                ("page", "1"),
                ("timezone", params.timezone.as_str()),
                ("startDate", params.start_date.as_str()),
                ("endDate", params.end_date.as_str()),
                ("sortBy", "createdAt"),
                ("sort", "descend"),
                ("callType", "LIVE"),
                ("direction", "INBOUND"),
            ])
            .send()
            .await?
            .error_for_status()?;
        let body: CallLogsResponse = response.json().await?;
        Ok(body.into_records())
    }
}
