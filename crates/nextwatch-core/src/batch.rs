use std::collections::HashSet;

use tracing::debug;

use nextwatch_models::{Priority, WatchStatus, WatchlistItem};

use crate::transition::{apply_priority, apply_status};

/// One mutation applied across every selected item as a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOperation {
    SetStatus(WatchStatus),
    SetPriority(Priority),
    Remove,
}

/// Apply `operation` to every item whose id is in `selected`; items not
/// selected pass through unchanged. An empty selection is a no-op, not
/// an error.
///
/// Status and priority changes go through the single-item transition
/// rules, so a batch status change never touches `progress` — only the
/// single-item progress path carries the watched-at-100 coupling.
pub fn apply_batch(
    items: Vec<WatchlistItem>,
    selected: &HashSet<String>,
    operation: BatchOperation,
) -> Vec<WatchlistItem> {
    if selected.is_empty() {
        return items;
    }

    let input_count = items.len();
    let result: Vec<WatchlistItem> = match operation {
        BatchOperation::SetStatus(status) => items
            .into_iter()
            .map(|item| {
                if selected.contains(&item.id) {
                    apply_status(item, status)
                } else {
                    item
                }
            })
            .collect(),
        BatchOperation::SetPriority(priority) => items
            .into_iter()
            .map(|item| {
                if selected.contains(&item.id) {
                    apply_priority(item, priority)
                } else {
                    item
                }
            })
            .collect(),
        BatchOperation::Remove => items
            .into_iter()
            .filter(|item| !selected.contains(&item.id))
            .collect(),
    };

    debug!(
        "apply_batch: operation={:?}, selected_count={}, input_count={}, result_count={}",
        operation,
        selected.len(),
        input_count,
        result.len()
    );

    result
}
