//! Shared application state accessible by all handlers
//!
//! Owns the mutable action-item collection (initialized from the fixture
//! at startup) and the snapshots of the two independent remote fetches.
//! Shared state is replaced wholesale on settle, never partially mutated.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::{broadcast, RwLock};

use calldeck_data::fixtures;
use calldeck_data::remote::{CallLogRecord, SummaryResponse};
use calldeck_data::types::{ActionItem, ActionStatus};

use crate::client::{FetchOverrides, FetchParams, MetricsClient};
use crate::config::CalldeckConfig;

/// Result slot for one remote fetch. `loading` starts true and flips
/// false when the fetch settles, success or failure.
#[derive(Debug, Clone)]
pub struct FetchSlot<T> {
    pub loading: bool,
    pub value: Option<T>,
}

impl<T> Default for FetchSlot<T> {
    fn default() -> Self {
        FetchSlot {
            loading: true,
            value: None,
        }
    }
}

pub struct AppState {
    config: CalldeckConfig,
    client: MetricsClient,
    /// Mutable copy of the action-item fixture; the status toggle is the
    /// only mutation in the data model.
    action_items: RwLock<Vec<ActionItem>>,
    summary: RwLock<FetchSlot<SummaryResponse>>,
    call_logs: RwLock<FetchSlot<Vec<CallLogRecord>>>,
    /// Parameter set of the most recent refresh; a differing set triggers
    /// a new one.
    last_params: RwLock<Option<FetchParams>>,
    /// Bumped on every refresh so a settling fetch can discard itself if
    /// it has been superseded.
    generation: AtomicU64,
    /// Broadcast channel for notifying WebSocket clients of updates
    update_tx: broadcast::Sender<()>,
}

impl AppState {
    pub fn new(config: CalldeckConfig) -> Arc<Self> {
        let (update_tx, _) = broadcast::channel(16);
        let client = MetricsClient::new(config.base_url());
        Arc::new(Self {
            config,
            client,
            action_items: RwLock::new(fixtures::action_items()),
            summary: RwLock::new(FetchSlot::default()),
            call_logs: RwLock::new(FetchSlot::default()),
            last_params: RwLock::new(None),
            generation: AtomicU64::new(0),
            update_tx,
        })
    }

    pub fn config(&self) -> &CalldeckConfig {
        &self.config
    }

    /// Resolve the override set and re-issue both fetches when it differs
    /// from the last one seen. Returns the resolved parameters.
    pub async fn ensure_fresh(self: &Arc<Self>, overrides: &FetchOverrides) -> FetchParams {
        let params = FetchParams::resolve(overrides, &self.config, chrono::Local::now());
        let changed = {
            let mut last = self.last_params.write().await;
            if last.as_ref() != Some(&params) {
                *last = Some(params.clone());
                true
            } else {
                false
            }
        };
        if changed {
            self.refresh(params.clone()).await;
        }
        params
    }

    /// Kick off the two independent fetches. Each settles on its own,
    /// stores its result only if no newer refresh has started, and never
    /// surfaces a failure beyond a log line and an empty slot.
    pub async fn refresh(self: &Arc<Self>, params: FetchParams) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::info!(location_id = %params.location_id, "refreshing dashboard data");

        self.summary.write().await.loading = true;
        self.call_logs.write().await.loading = true;

        let state = self.clone();
        let summary_params = params.clone();
        tokio::spawn(async move {
            let result = state.client.fetch_summary(&summary_params).await;
            let mut slot = state.summary.write().await;
            if state.generation.load(Ordering::SeqCst) != generation {
                tracing::debug!("discarding stale summary response");
                return;
            }
            slot.loading = false;
            slot.value = match result {
                Ok(summary) => Some(summary),
                Err(e) => {
                    tracing::warn!("summary fetch failed: {e:#}");
                    None
                }
            };
            drop(slot);
            let _ = state.update_tx.send(());
        });

        let state = self.clone();
        tokio::spawn(async move {
            let result = state.client.fetch_call_logs(&params).await;
            let mut slot = state.call_logs.write().await;
            if state.generation.load(Ordering::SeqCst) != generation {
                tracing::debug!("discarding stale call-log response");
                return;
            }
            slot.loading = false;
            slot.value = match result {
                Ok(records) => Some(records),
                Err(e) => {
                    tracing::warn!("call-log fetch failed: {e:#}");
                    None
                }
            };
            drop(slot);
            let _ = state.update_tx.send(());
        });
    }

    /// Snapshot of the summary fetch: (loading, value).
    pub async fn summary_snapshot(&self) -> (bool, Option<SummaryResponse>) {
        let slot = self.summary.read().await;
        (slot.loading, slot.value.clone())
    }

    /// Snapshot of the call-log fetch: (loading, records). A failed or
    /// unsettled fetch reads as an empty list.
    pub async fn call_logs_snapshot(&self) -> (bool, Vec<CallLogRecord>) {
        let slot = self.call_logs.read().await;
        (slot.loading, slot.value.clone().unwrap_or_default())
    }

    /// Snapshot of the full action-item collection.
    pub async fn action_items(&self) -> Vec<ActionItem> {
        self.action_items.read().await.clone()
    }

    /// Flip one item's status: completed becomes pending, anything else
    /// becomes completed. All other records are untouched. Returns the
    /// updated item, or None for an unknown id.
    pub async fn toggle_action_item(&self, id: &str) -> Option<ActionItem> {
        let updated = {
            let mut items = self.action_items.write().await;
            let item = items.iter_mut().find(|i| i.id == id)?;
            item.status = match item.status {
                ActionStatus::Completed => ActionStatus::Pending,
                _ => ActionStatus::Completed,
            };
            item.clone()
        };
        let _ = self.update_tx.send(());
        Some(updated)
    }

    /// Subscribe to update notifications
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.update_tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> Arc<AppState> {
        AppState::new(CalldeckConfig::default())
    }

    #[tokio::test]
    async fn test_new_state_seeds_action_items_from_fixture() {
        let state = test_state();
        let items = state.action_items().await;
        assert_eq!(items.len(), 8);
    }

    #[tokio::test]
    async fn test_fetch_slots_start_loading_and_empty() {
        let state = test_state();
        let (loading, summary) = state.summary_snapshot().await;
        assert!(loading);
        assert!(summary.is_none());
        let (loading, records) = state.call_logs_snapshot().await;
        assert!(loading);
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_toggle_pending_item_completes_it() {
        let state = test_state();
        let updated = state.toggle_action_item("1").await.unwrap();
        assert_eq!(updated.status, ActionStatus::Completed);

        let again = state.toggle_action_item("1").await.unwrap();
        assert_eq!(again.status, ActionStatus::Pending);
    }

    #[tokio::test]
    async fn test_toggle_in_progress_item_completes_it() {
        let state = test_state();
        // Item 2 is in-progress in the fixture
        let updated = state.toggle_action_item("2").await.unwrap();
        assert_eq!(updated.status, ActionStatus::Completed);
    }

    #[tokio::test]
    async fn test_toggle_leaves_other_items_unchanged() {
        let state = test_state();
        let before = state.action_items().await;
        state.toggle_action_item("1").await.unwrap();
        let after = state.action_items().await;
        for (b, a) in before.iter().zip(after.iter()).filter(|(b, _)| b.id != "1") {
            assert_eq!(b.status, a.status);
            assert_eq!(b.title, a.title);
        }
    }

    #[tokio::test]
    async fn test_toggle_unknown_id_returns_none() {
        let state = test_state();
        assert!(state.toggle_action_item("nonexistent").await.is_none());
    }

    #[tokio::test]
    async fn test_toggle_notifies_subscribers() {
        let state = test_state();
        let mut rx = state.subscribe();
        state.toggle_action_item("1").await.unwrap();
        assert!(rx.try_recv().is_ok());
    }

    #[tokio::test]
    async fn test_ensure_fresh_is_idempotent_for_same_overrides() {
        let state = test_state();
        let overrides = FetchOverrides {
            location_id: Some("loc-1".into()),
            start_time: Some("100".into()),
            end_time: Some("200".into()),
            ..Default::default()
        };
        state.ensure_fresh(&overrides).await;
        let generation_after_first = state.generation.load(Ordering::SeqCst);
        state.ensure_fresh(&overrides).await;
        assert_eq!(state.generation.load(Ordering::SeqCst), generation_after_first);
    }

    #[tokio::test]
    async fn test_changed_overrides_trigger_new_generation() {
        let state = test_state();
        let first = FetchOverrides {
            location_id: Some("loc-1".into()),
            start_time: Some("100".into()),
            end_time: Some("200".into()),
            ..Default::default()
        };
        state.ensure_fresh(&first).await;
        let generation_after_first = state.generation.load(Ordering::SeqCst);

        let second = FetchOverrides {
            location_id: Some("loc-2".into()),
            ..first
        };
        state.ensure_fresh(&second).await;
        assert!(state.generation.load(Ordering::SeqCst) > generation_after_first);
    }
}
