// Single-item transition rules for status, priority, and progress.
// All three are pure: item in, item out, no other field touched.

use nextwatch_models::{Priority, WatchStatus, WatchlistItem};

use crate::error::EngineError;

/// Set viewing progress on a single item.
///
/// Reaching 100% forces `status` to watched regardless of the prior
/// status; no other status change is coupled to progress. Values above
/// 100 are rejected before anything is written.
pub fn apply_progress(
    mut item: WatchlistItem,
    new_progress: u8,
) -> Result<WatchlistItem, EngineError> {
    if new_progress > 100 {
        return Err(EngineError::InvalidProgress {
            value: new_progress,
        });
    }

    item.progress = Some(new_progress);
    if new_progress == 100 {
        item.status = WatchStatus::Watched;
    }
    Ok(item)
}

/// Direct status assignment.
///
/// Progress is left untouched, so partial progress survives a round
/// trip away from watching and back.
pub fn apply_status(mut item: WatchlistItem, new_status: WatchStatus) -> WatchlistItem {
    item.status = new_status;
    item
}

/// Direct priority assignment. Priority and status are orthogonal.
pub fn apply_priority(mut item: WatchlistItem, new_priority: Priority) -> WatchlistItem {
    item.priority = new_priority;
    item
}
