use chrono::{DateTime, Utc};
use serde::Serialize;

use nextwatch_models::{Priority, WatchStatus, WatchlistItem};

/// Summary counts over the full canonical collection.
/// Always computed unfiltered; the filter stage never feeds this.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WatchlistStats {
    pub total: usize,
    pub watched: usize,
    pub watching: usize,
    pub want_to_watch: usize,
    pub high_priority: usize,
    pub medium_priority: usize,
    pub low_priority: usize,
    /// Items whose release date is strictly after `now`
    pub upcoming_releases: usize,
}

/// Single pass over the collection. Pure: the clock is an explicit
/// argument so callers control what "upcoming" means.
pub fn summarize(items: &[WatchlistItem], now: DateTime<Utc>) -> WatchlistStats {
    let mut stats = WatchlistStats {
        total: items.len(),
        ..Default::default()
    };

    for item in items {
        match item.status {
            WatchStatus::Watched => stats.watched += 1,
            WatchStatus::Watching => stats.watching += 1,
            WatchStatus::WantToWatch => stats.want_to_watch += 1,
        }
        match item.priority {
            Priority::High => stats.high_priority += 1,
            Priority::Medium => stats.medium_priority += 1,
            Priority::Low => stats.low_priority += 1,
        }
        if item.release_date > now {
            stats.upcoming_releases += 1;
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn create_item(id: &str, status: WatchStatus, priority: Priority) -> WatchlistItem {
        WatchlistItem {
            id: id.to_string(),
            title: format!("Title {}", id),
            poster_url: "https://images.example/poster.jpg".to_string(),
            backdrop_url: None,
            date_added: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
            release_date: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
            status,
            priority,
            progress: None,
            rating: None,
            genres: vec![],
            runtime: None,
            director: None,
            streaming_services: None,
        }
    }

    #[test]
    fn test_summarize_counts_by_status_and_priority() {
        let items = vec![
            create_item("1", WatchStatus::Watched, Priority::High),
            create_item("2", WatchStatus::Watching, Priority::Medium),
            create_item("3", WatchStatus::WantToWatch, Priority::Low),
            create_item("4", WatchStatus::Watched, Priority::High),
        ];
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let stats = summarize(&items, now);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.watched, 2);
        assert_eq!(stats.watching, 1);
        assert_eq!(stats.want_to_watch, 1);
        assert_eq!(stats.watched + stats.watching + stats.want_to_watch, stats.total);
        assert_eq!(stats.high_priority, 2);
        assert_eq!(stats.medium_priority, 1);
        assert_eq!(stats.low_priority, 1);
    }

    #[test]
    fn test_summarize_upcoming_is_strictly_after_now() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

        let mut past = create_item("1", WatchStatus::WantToWatch, Priority::Medium);
        past.release_date = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let mut exact = create_item("2", WatchStatus::WantToWatch, Priority::Medium);
        exact.release_date = now;
        let mut future = create_item("3", WatchStatus::WantToWatch, Priority::Medium);
        future.release_date = Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap();

        let stats = summarize(&[past, exact, future], now);
        assert_eq!(stats.upcoming_releases, 1);
    }

    #[test]
    fn test_summarize_empty_collection() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(summarize(&[], now), WatchlistStats::default());
    }
}
