// Orchestrates the canonical collection, selection, pipeline parameters,
// and batch mode behind a synchronous command surface. One command is
// fully applied (mutation, then derived-view recompute) before the next
// is accepted; hosts that can race commands must serialize them.

use std::collections::{BTreeSet, HashSet};

use chrono::Utc;
use tracing::debug;

use nextwatch_models::{Priority, WatchStatus, WatchlistItem};

use crate::batch::{apply_batch, BatchOperation};
use crate::error::EngineError;
use crate::pipeline::{view, GroupKey, GroupOption, SortOption, StatusFilter};
use crate::selection::SelectionTracker;
use crate::stats::{summarize, WatchlistStats};
use crate::transition::{apply_priority, apply_progress, apply_status};

/// Read-only derived snapshot handed to rendering hosts. Recomputed
/// after every command; never a reference into mutable internals.
#[derive(Debug, Clone, Default)]
pub struct WatchlistView {
    pub groups: Vec<(GroupKey, Vec<WatchlistItem>)>,
    pub stats: WatchlistStats,
    pub selection: BTreeSet<String>,
    pub batch_mode: bool,
}

/// Sole owner and mutator of the canonical item collection.
#[derive(Debug, Default)]
pub struct WatchlistController {
    items: Vec<WatchlistItem>,
    selection: SelectionTracker,
    batch_mode: bool,
    filter: StatusFilter,
    sort: SortOption,
    group: GroupOption,
    current: WatchlistView,
}

impl WatchlistController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from configured pipeline parameters instead of the defaults.
    pub fn with_options(filter: StatusFilter, sort: SortOption, group: GroupOption) -> Self {
        let mut controller = Self {
            filter,
            sort,
            group,
            ..Self::default()
        };
        controller.refresh_all();
        controller
    }

    /// Replace the canonical collection wholesale (startup/import).
    /// Rejects a snapshot containing duplicate ids; on rejection the
    /// previous collection is untouched.
    pub fn load(&mut self, items: Vec<WatchlistItem>) -> Result<(), EngineError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for item in &items {
            if !seen.insert(&item.id) {
                return Err(EngineError::DuplicateId {
                    id: item.id.clone(),
                });
            }
        }

        debug!("load: replacing collection, item_count={}", items.len());
        self.items = items;
        self.selection.clear();
        self.refresh_all();
        Ok(())
    }

    /// Hand one externally created item to the controller.
    pub fn add(&mut self, item: WatchlistItem) -> Result<(), EngineError> {
        if self.items.iter().any(|existing| existing.id == item.id) {
            return Err(EngineError::DuplicateId { id: item.id });
        }
        self.items.push(item);
        self.refresh_all();
        Ok(())
    }

    pub fn update_status(&mut self, id: &str, status: WatchStatus) {
        let Some(index) = self.find(id) else {
            return;
        };
        let item = self.items[index].clone();
        self.items[index] = apply_status(item, status);
        self.refresh_all();
    }

    pub fn update_priority(&mut self, id: &str, priority: Priority) {
        let Some(index) = self.find(id) else {
            return;
        };
        let item = self.items[index].clone();
        self.items[index] = apply_priority(item, priority);
        self.refresh_all();
    }

    /// Validates before mutating: an out-of-range value leaves the
    /// collection unchanged.
    pub fn update_progress(&mut self, id: &str, progress: u8) -> Result<(), EngineError> {
        let Some(index) = self.find(id) else {
            return Ok(());
        };
        let updated = apply_progress(self.items[index].clone(), progress)?;
        self.items[index] = updated;
        self.refresh_all();
        Ok(())
    }

    /// Removing a nonexistent id is a no-op, like every single-item
    /// command. The selection entry goes away in the same step.
    pub fn remove(&mut self, id: &str) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            debug!("remove: id not found, ignoring id={}", id);
            return;
        }
        self.selection.remove(id);
        self.refresh_all();
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
        // Statistics are filter-independent; only the groups change
        self.refresh_view();
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.sort = sort;
        self.refresh_view();
    }

    pub fn set_group(&mut self, group: GroupOption) {
        self.group = group;
        self.refresh_view();
    }

    /// Toggling an id that is not in the collection is ignored, keeping
    /// the selection a subset of present ids.
    pub fn toggle_selection(&mut self, id: &str) {
        if self.find(id).is_none() {
            debug!("toggle_selection: id not found, ignoring id={}", id);
            return;
        }
        self.selection.toggle(id);
        self.refresh_view();
    }

    /// Select every visible (post-filter) item, or clear if they are
    /// all selected already.
    pub fn select_all(&mut self) {
        let visible = self.visible_ids();
        self.selection.select_all(&visible);
        self.refresh_view();
    }

    /// Batch mode always starts with an empty selection.
    pub fn enter_batch_mode(&mut self) {
        self.batch_mode = true;
        self.selection.clear();
        self.refresh_view();
    }

    /// Leaving batch mode clears the selection unconditionally.
    pub fn exit_batch_mode(&mut self) {
        self.batch_mode = false;
        self.selection.clear();
        self.refresh_view();
    }

    pub fn apply_batch_status(&mut self, status: WatchStatus) {
        self.apply_batch_operation(BatchOperation::SetStatus(status));
    }

    pub fn apply_batch_priority(&mut self, priority: Priority) {
        self.apply_batch_operation(BatchOperation::SetPriority(priority));
    }

    pub fn apply_batch_remove(&mut self) {
        self.apply_batch_operation(BatchOperation::Remove);
    }

    /// Current derived view: ordered groups, statistics, selection, and
    /// the batch-mode flag.
    pub fn view(&self) -> &WatchlistView {
        &self.current
    }

    /// Canonical collection, read-only. Hosts use this to persist a
    /// snapshot; mutation goes through commands only.
    pub fn items(&self) -> &[WatchlistItem] {
        &self.items
    }

    fn apply_batch_operation(&mut self, operation: BatchOperation) {
        let selected = self.selection.ids().clone();
        self.items = apply_batch(std::mem::take(&mut self.items), &selected, operation);

        // Postcondition of any batch operation: selection cleared,
        // batch mode exited, all in the same logical step.
        self.selection.clear();
        self.batch_mode = false;
        self.refresh_all();
    }

    fn find(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn visible_ids(&self) -> Vec<String> {
        self.current
            .groups
            .iter()
            .flat_map(|(_, items)| items.iter().map(|item| item.id.clone()))
            .collect()
    }

    fn refresh_view(&mut self) {
        self.current.groups = view(&self.items, self.filter, self.sort, self.group);
        self.current.selection = self.selection.ids().iter().cloned().collect();
        self.current.batch_mode = self.batch_mode;
    }

    fn refresh_all(&mut self) {
        self.refresh_view();
        self.current.stats = summarize(&self.items, Utc::now());
    }
}
