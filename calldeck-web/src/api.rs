use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use calldeck_data::filter::{self, ActionItemStats};
use calldeck_data::fixtures;
use calldeck_data::metrics::{self, DisplayMetrics};
use calldeck_data::remote::CallLogRow;
use calldeck_data::types::{ActionItem, CallInteraction, Capability, HourlyVolume};

use crate::client::FetchOverrides;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

// --- Dashboard ---

/// Everything the main dashboard view renders in one payload.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub metrics: DisplayMetrics,
    pub summary_loading: bool,
    pub call_logs_loading: bool,
    pub call_logs: Vec<CallLogRow>,
    pub call_volume: Vec<HourlyVolume>,
}

/// Build the display payload from the current state snapshots. Absent or
/// still-loading remote data reconciles against the fixture baseline.
pub(crate) async fn dashboard_snapshot(state: &AppState) -> DashboardResponse {
    let (summary_loading, summary) = state.summary_snapshot().await;
    let (call_logs_loading, records) = state.call_logs_snapshot().await;

    DashboardResponse {
        metrics: metrics::reconcile(summary.as_ref(), &fixtures::baseline_metrics()),
        summary_loading,
        call_logs_loading,
        call_logs: records.iter().map(CallLogRow::from_record).collect(),
        call_volume: fixtures::call_volume_by_hour(),
    }
}

pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    Query(overrides): Query<FetchOverrides>,
) -> Json<DashboardResponse> {
    state.ensure_fresh(&overrides).await;
    Json(dashboard_snapshot(&state).await)
}

// --- Interactions ---

#[derive(Deserialize)]
pub struct InteractionQuery {
    #[serde(default)]
    pub search: String,
    pub outcome: Option<String>,
}

/// Filtered collection plus an explicit count; `count: 0` is the
/// observable empty-result condition the UI renders a dedicated message
/// for.
#[derive(Serialize)]
pub struct CollectionResponse<T> {
    pub items: Vec<T>,
    pub count: usize,
}

impl<T> CollectionResponse<T> {
    fn new(items: Vec<T>) -> Self {
        CollectionResponse {
            count: items.len(),
            items,
        }
    }
}

pub async fn list_interactions(
    Query(query): Query<InteractionQuery>,
) -> Json<CollectionResponse<CallInteraction>> {
    let items = filter::filter_interactions(
        &fixtures::call_interactions(),
        &query.search,
        query.outcome.as_deref(),
    );
    Json(CollectionResponse::new(items))
}

// --- Action items ---

#[derive(Deserialize)]
pub struct ActionItemQuery {
    #[serde(default)]
    pub search: String,
    pub status: Option<String>,
}

#[derive(Serialize)]
pub struct ActionItemRow {
    #[serde(flatten)]
    pub item: ActionItem,
    pub overdue: bool,
}

#[derive(Serialize)]
pub struct ActionItemsResponse {
    pub items: Vec<ActionItemRow>,
    pub count: usize,
    /// Computed over the full collection, independent of the filter.
    pub stats: ActionItemStats,
}

pub async fn list_action_items(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ActionItemQuery>,
) -> Json<ActionItemsResponse> {
    let all = state.action_items().await;
    let stats = ActionItemStats::from_items(&all);
    let now = chrono::Local::now().naive_local();

    let items: Vec<ActionItemRow> =
        filter::filter_action_items(&all, &query.search, query.status.as_deref())
            .into_iter()
            .map(|item| ActionItemRow {
                overdue: item.is_overdue(now),
                item,
            })
            .collect();

    Json(ActionItemsResponse {
        count: items.len(),
        items,
        stats,
    })
}

pub async fn toggle_action_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ActionItem>, StatusCode> {
    state
        .toggle_action_item(&id)
        .await
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

// --- Capabilities ---

#[derive(Deserialize)]
pub struct CapabilityQuery {
    pub category: Option<String>,
}

#[derive(Serialize)]
pub struct CapabilitiesResponse {
    pub items: Vec<Capability>,
    pub count: usize,
    /// Distinct categories with "all" prepended, for the filter control.
    pub categories: Vec<String>,
}

pub async fn list_capabilities(
    Query(query): Query<CapabilityQuery>,
) -> Json<CapabilitiesResponse> {
    let all = fixtures::capabilities();
    let categories = filter::capability_categories(&all);
    let items = filter::filter_capabilities(&all, query.category.as_deref());
    Json(CapabilitiesResponse {
        count: items.len(),
        items,
        categories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use calldeck_data::types::ActionStatus;

    use crate::config::CalldeckConfig;

    fn test_state() -> Arc<AppState> {
        AppState::new(CalldeckConfig::default())
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let response = health().await;
        assert_eq!(response.status, "ok");
    }

    #[tokio::test]
    async fn test_list_interactions_unfiltered_returns_all() {
        let response = list_interactions(Query(InteractionQuery {
            search: String::new(),
            outcome: None,
        }))
        .await;
        assert_eq!(response.count, 8);
        assert_eq!(response.items.len(), 8);
    }

    #[tokio::test]
    async fn test_list_interactions_search_john() {
        let response = list_interactions(Query(InteractionQuery {
            search: "john".into(),
            outcome: None,
        }))
        .await;
        assert!(response
            .items
            .iter()
            .any(|i| i.caller_name == "John Smith"));
        assert!(!response.items.iter().any(|i| i.caller_name == "Emily Davis"));
    }

    #[tokio::test]
    async fn test_list_interactions_empty_result_has_zero_count() {
        let response = list_interactions(Query(InteractionQuery {
            search: "zzzz-no-such-caller".into(),
            outcome: None,
        }))
        .await;
        assert_eq!(response.count, 0);
        assert!(response.items.is_empty());
    }

    #[tokio::test]
    async fn test_action_item_stats_ignore_active_filter() {
        let state = test_state();
        let response = list_action_items(
            State(state),
            Query(ActionItemQuery {
                search: String::new(),
                status: Some("completed".into()),
            }),
        )
        .await;
        assert_eq!(response.count, 1);
        assert_eq!(response.stats.total, 8);
        assert_eq!(response.stats.completed, 1);
        assert_eq!(response.stats.pending, 4);
        assert_eq!(response.stats.in_progress, 3);
    }

    #[tokio::test]
    async fn test_toggle_roundtrip_through_handler() {
        let state = test_state();
        let toggled = toggle_action_item(State(state.clone()), Path("1".to_string()))
            .await
            .unwrap();
        assert_eq!(toggled.status, ActionStatus::Completed);

        let back = toggle_action_item(State(state), Path("1".to_string()))
            .await
            .unwrap();
        assert_eq!(back.status, ActionStatus::Pending);
    }

    #[tokio::test]
    async fn test_toggle_unknown_id_returns_404() {
        let state = test_state();
        let result = toggle_action_item(State(state), Path("nonexistent".to_string())).await;
        assert_eq!(result.unwrap_err(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_capabilities_include_category_list() {
        let response = list_capabilities(Query(CapabilityQuery { category: None })).await;
        assert_eq!(response.count, 6);
        assert_eq!(response.categories[0], "all");
        assert!(response.categories.contains(&"Analytics".to_string()));
    }

    #[tokio::test]
    async fn test_capabilities_category_filter() {
        let response = list_capabilities(Query(CapabilityQuery {
            category: Some("Enterprise".into()),
        }))
        .await;
        assert_eq!(response.count, 1);
        assert_eq!(response.items[0].name, "Enterprise Integration");
    }

    #[tokio::test]
    async fn test_dashboard_snapshot_falls_back_to_fixture_metrics() {
        let state = test_state();
        let snapshot = dashboard_snapshot(&state).await;
        assert_eq!(snapshot.metrics.total_calls, 2847);
        assert!(snapshot.summary_loading);
        assert!(snapshot.call_logs.is_empty());
        assert_eq!(snapshot.call_volume.len(), 24);
    }
}
