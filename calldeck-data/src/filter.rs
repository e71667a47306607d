//! Collection filter engine
//!
//! Free-text search plus a categorical selector over the in-memory
//! collections. Every call recomputes from the full source collection, so
//! the output always reflects the current filter state. A selector of
//! `None` or `"all"` disables the categorical predicate.

use serde::Serialize;

use crate::types::{ActionItem, ActionStatus, CallInteraction, Capability};

fn selector_allows(selector: Option<&str>, value: &str) -> bool {
    match selector {
        None | Some("all") => true,
        Some(wanted) => wanted == value,
    }
}

/// Filter interactions by free text and outcome.
///
/// The search matches case-insensitively against caller name and notes,
/// and as a plain case-sensitive substring against the caller identifier
/// (phone numbers have no case).
pub fn filter_interactions(
    items: &[CallInteraction],
    search: &str,
    outcome: Option<&str>,
) -> Vec<CallInteraction> {
    let needle = search.to_lowercase();
    items
        .iter()
        .filter(|i| {
            let text_match = search.is_empty()
                || i.caller_name.to_lowercase().contains(&needle)
                || i.notes.to_lowercase().contains(&needle)
                || i.caller_id.contains(search);
            text_match && selector_allows(outcome, i.outcome.as_str())
        })
        .cloned()
        .collect()
}

/// Filter action items by free text (title, description, assignee) and
/// status.
pub fn filter_action_items(
    items: &[ActionItem],
    search: &str,
    status: Option<&str>,
) -> Vec<ActionItem> {
    let needle = search.to_lowercase();
    items
        .iter()
        .filter(|i| {
            let text_match = search.is_empty()
                || i.title.to_lowercase().contains(&needle)
                || i.description.to_lowercase().contains(&needle)
                || i.assigned_to.to_lowercase().contains(&needle);
            text_match && selector_allows(status, i.status.as_str())
        })
        .cloned()
        .collect()
}

/// Filter capabilities by category only; the catalog has no text search.
pub fn filter_capabilities(items: &[Capability], category: Option<&str>) -> Vec<Capability> {
    items
        .iter()
        .filter(|c| selector_allows(category, &c.category))
        .cloned()
        .collect()
}

/// Distinct category values in first-observed order, with "all" prepended.
pub fn capability_categories(items: &[Capability]) -> Vec<String> {
    let mut categories = vec!["all".to_string()];
    for capability in items {
        if !categories.iter().any(|c| c == &capability.category) {
            categories.push(capability.category.clone());
        }
    }
    categories
}

/// Per-status counts over the full, unfiltered action-item collection.
/// Stats reflect everything, independent of the active filter.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItemStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl ActionItemStats {
    pub fn from_items(items: &[ActionItem]) -> Self {
        let mut stats = ActionItemStats {
            total: items.len(),
            pending: 0,
            in_progress: 0,
            completed: 0,
        };

        for item in items {
            match item.status {
                ActionStatus::Pending => stats.pending += 1,
                ActionStatus::InProgress => stats.in_progress += 1,
                ActionStatus::Completed => stats.completed += 1,
            }
        }

        stats
    }
}
