use std::collections::HashSet;

use tracing::debug;

/// Ids currently marked for batch action.
///
/// The owner is responsible for calling [`SelectionTracker::retain`]
/// (or [`SelectionTracker::remove`]) in the same logical step as any
/// collection removal, so the tracker never references an item that no
/// longer exists.
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    selected: HashSet<String>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the id if absent, remove it if present.
    pub fn toggle(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    /// Select every visible id — unless the selection already equals the
    /// full visible set, in which case clear instead. Mirrors a single
    /// select-all / deselect-all control.
    pub fn select_all(&mut self, visible_ids: &[String]) {
        let visible: HashSet<String> = visible_ids.iter().cloned().collect();
        if self.selected == visible {
            debug!("select_all: selection already complete, clearing {} ids", visible.len());
            self.selected.clear();
        } else {
            self.selected = visible;
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn remove(&mut self, id: &str) {
        self.selected.remove(id);
    }

    /// Drop ids no longer present in the canonical collection.
    pub fn retain(&mut self, existing_ids: &HashSet<String>) {
        self.selected.retain(|id| existing_ids.contains(id));
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn ids(&self) -> &HashSet<String> {
        &self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip_returns_to_empty() {
        let mut tracker = SelectionTracker::new();
        tracker.toggle("1");
        assert!(tracker.is_selected("1"));
        tracker.toggle("1");
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_select_all_then_select_all_clears() {
        let visible = vec!["1".to_string(), "2".to_string()];
        let mut tracker = SelectionTracker::new();

        tracker.select_all(&visible);
        assert_eq!(tracker.len(), 2);

        tracker.select_all(&visible);
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_select_all_with_partial_selection_selects_everything() {
        let visible = vec!["1".to_string(), "2".to_string(), "3".to_string()];
        let mut tracker = SelectionTracker::new();
        tracker.toggle("2");

        tracker.select_all(&visible);
        assert_eq!(tracker.len(), 3);
    }

    #[test]
    fn test_retain_drops_missing_ids() {
        let mut tracker = SelectionTracker::new();
        tracker.toggle("1");
        tracker.toggle("2");

        let existing: HashSet<String> = ["2".to_string()].into_iter().collect();
        tracker.retain(&existing);

        assert!(!tracker.is_selected("1"));
        assert!(tracker.is_selected("2"));
    }
}
