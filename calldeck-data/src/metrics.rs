//! Metrics reconciler
//!
//! Merges the live summary with the baseline fixture field by field:
//! prefer the live value when present, else the fixture value. The live
//! endpoint only supplies call counts and sentiment counts; every other
//! metric comes exclusively from the fixture, and that asymmetry is
//! deliberate.

use serde::Serialize;

use crate::fixtures;
use crate::remote::SummaryResponse;
use crate::types::{DashboardMetrics, SentimentSlice};

/// Fallback sentiment percentages used when the live total is zero or
/// absent.
pub const POSITIVE_SENTIMENT_FALLBACK: u32 = 62;
pub const NEGATIVE_SENTIMENT_FALLBACK: u32 = 38;

const POSITIVE_COLOR: &str = "#10b981";
const NEGATIVE_COLOR: &str = "#ef4444";

/// Display-ready metrics record fed to the dashboard cards and charts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayMetrics {
    pub total_calls: u64,
    pub calls_growth: f64,
    pub actions_triggered: u64,
    pub conversion_rate: f64,
    pub average_response_time: f64,
    pub response_time_improvement: f64,
    pub cost_savings: f64,
    pub cost_reduction: f64,
    pub first_call_resolution: f64,
    pub fcr_growth: f64,
    pub active_action_items: u32,
    pub action_items_pending: u32,
    pub action_items_in_progress: u32,
    pub action_items_resolved: u32,
    pub positive_sentiment_percentage: u32,
    pub negative_sentiment_percentage: u32,
    pub sentiment_series: Vec<SentimentSlice>,
    /// Whether live totals were available for this window.
    pub live: bool,
}

/// Integer percentage in [0, 100]; counts above the total clamp at 100.
fn percentage(count: u64, total: u64) -> u32 {
    ((count.min(total) as f64 / total as f64) * 100.0).round() as u32
}

/// Merge the live summary (if any) with the baseline fixture.
pub fn reconcile(summary: Option<&SummaryResponse>, fixture: &DashboardMetrics) -> DisplayMetrics {
    let current = summary.and_then(|s| s.current());
    let live_total = current.and_then(|c| c.total_calls);

    let total_calls = live_total.unwrap_or(fixture.total_calls_handled);
    let actions_triggered = current
        .and_then(|c| c.actions_triggered)
        .unwrap_or(fixture.appointments_booked);

    // A live total of zero behaves exactly like an absent one: the
    // percentages fall back and nothing divides by zero.
    let has_live_total = live_total.is_some_and(|t| t > 0);

    let (positive_pct, negative_pct) = if has_live_total {
        let positive = current
            .and_then(|c| c.positive_sentiment_call_count)
            .unwrap_or(0);
        let negative = current
            .and_then(|c| c.negative_sentiment_call_count)
            .unwrap_or(0);
        (
            percentage(positive, total_calls),
            percentage(negative, total_calls),
        )
    } else {
        (POSITIVE_SENTIMENT_FALLBACK, NEGATIVE_SENTIMENT_FALLBACK)
    };

    let sentiment_series = if has_live_total {
        vec![
            SentimentSlice {
                name: "Positive".into(),
                value: positive_pct,
                color: POSITIVE_COLOR.into(),
            },
            SentimentSlice {
                name: "Negative".into(),
                value: negative_pct,
                color: NEGATIVE_COLOR.into(),
            },
        ]
    } else {
        fixtures::sentiment_series()
    };

    DisplayMetrics {
        total_calls,
        calls_growth: fixture.calls_growth,
        actions_triggered,
        conversion_rate: fixture.conversion_rate,
        average_response_time: fixture.average_response_time,
        response_time_improvement: fixture.response_time_improvement,
        cost_savings: fixture.cost_savings,
        cost_reduction: fixture.cost_reduction,
        first_call_resolution: fixture.first_call_resolution,
        fcr_growth: fixture.fcr_growth,
        active_action_items: fixture.active_action_items,
        action_items_pending: fixture.action_items_pending,
        action_items_in_progress: fixture.action_items_in_progress,
        action_items_resolved: fixture.action_items_resolved,
        positive_sentiment_percentage: positive_pct,
        negative_sentiment_percentage: negative_pct,
        sentiment_series,
        live: live_total.is_some(),
    }
}
