// Filter -> sort -> group transformation producing the ordered view
// consumed by rendering hosts.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use nextwatch_models::{InvalidValue, Priority, WatchStatus, WatchlistItem};
use tracing::debug;

/// Group label for items with an empty genre list
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Status predicate for the filter stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Sentinel: retain every item
    #[default]
    All,
    /// Retain only items with this status
    Only(WatchStatus),
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(status) => f.write_str(status.as_str()),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(StatusFilter::All);
        }
        s.parse::<WatchStatus>()
            .map(StatusFilter::Only)
            .map_err(|_| InvalidValue::new("filter", s))
    }
}

/// Sort key for the sort stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOption {
    /// Newest first
    #[default]
    DateAdded,
    /// Ascending, case-insensitive
    Title,
    /// Newest first
    ReleaseDate,
    /// Highest first, unrated last
    Rating,
    /// High before medium before low
    Priority,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::DateAdded => "date-added",
            SortOption::Title => "title",
            SortOption::ReleaseDate => "release-date",
            SortOption::Rating => "rating",
            SortOption::Priority => "priority",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date-added" => Ok(SortOption::DateAdded),
            "title" => Ok(SortOption::Title),
            "release-date" => Ok(SortOption::ReleaseDate),
            "rating" => Ok(SortOption::Rating),
            "priority" => Ok(SortOption::Priority),
            _ => Err(InvalidValue::new("sort", s)),
        }
    }
}

/// Group key selector for the group stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GroupOption {
    /// Single unlabeled group
    #[default]
    None,
    Status,
    Priority,
    /// First element of the item's genre list
    Genre,
    /// Four-digit release year
    Year,
}

impl GroupOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupOption::None => "none",
            GroupOption::Status => "status",
            GroupOption::Priority => "priority",
            GroupOption::Genre => "genre",
            GroupOption::Year => "year",
        }
    }
}

impl fmt::Display for GroupOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupOption {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(GroupOption::None),
            "status" => Ok(GroupOption::Status),
            "priority" => Ok(GroupOption::Priority),
            "genre" => Ok(GroupOption::Genre),
            "year" => Ok(GroupOption::Year),
            _ => Err(InvalidValue::new("group", s)),
        }
    }
}

/// Key of one output group. Within a single pipeline run only one
/// variant appears, so the derived ordering reduces to the inner
/// ordering: statuses in lifecycle order, priorities in rank order,
/// genres lexicographic, years numeric.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum GroupKey {
    Ungrouped,
    Status(WatchStatus),
    Priority(Priority),
    Genre(String),
    Year(i32),
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Ungrouped => f.write_str("all"),
            GroupKey::Status(status) => f.write_str(status.as_str()),
            GroupKey::Priority(priority) => f.write_str(priority.as_str()),
            GroupKey::Genre(genre) => f.write_str(genre),
            GroupKey::Year(year) => write!(f, "{}", year),
        }
    }
}

/// Filter, sort, and group a collection into ordered groups.
///
/// Pure and deterministic: identical inputs always yield identical
/// output, and running it twice with no intervening mutation is
/// idempotent.
pub fn view(
    items: &[WatchlistItem],
    filter: StatusFilter,
    sort: SortOption,
    group: GroupOption,
) -> Vec<(GroupKey, Vec<WatchlistItem>)> {
    let filtered = filter_by_status(items, filter);
    let sorted = sort_items(filtered, sort);
    let groups = group_items(sorted, group);

    debug!(
        "view: input_count={}, group_count={}, filter={}, sort={}, group={}",
        items.len(),
        groups.len(),
        filter,
        sort,
        group
    );

    groups
}

fn filter_by_status(items: &[WatchlistItem], filter: StatusFilter) -> Vec<WatchlistItem> {
    match filter {
        StatusFilter::All => items.to_vec(),
        StatusFilter::Only(status) => items
            .iter()
            .filter(|item| item.status == status)
            .cloned()
            .collect(),
    }
}

// All arms use the std stable sort, so items comparing equal retain
// their relative input order.
fn sort_items(mut items: Vec<WatchlistItem>, sort: SortOption) -> Vec<WatchlistItem> {
    match sort {
        SortOption::DateAdded => items.sort_by(|a, b| b.date_added.cmp(&a.date_added)),
        SortOption::Title => {
            items.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
        SortOption::ReleaseDate => items.sort_by(|a, b| b.release_date.cmp(&a.release_date)),
        SortOption::Rating => items.sort_by(|a, b| {
            // Unrated items sort last
            b.rating
                .unwrap_or(f32::NEG_INFINITY)
                .total_cmp(&a.rating.unwrap_or(f32::NEG_INFINITY))
        }),
        SortOption::Priority => items.sort_by(|a, b| a.priority.rank().cmp(&b.priority.rank())),
    }
    items
}

fn group_items(
    items: Vec<WatchlistItem>,
    group: GroupOption,
) -> Vec<(GroupKey, Vec<WatchlistItem>)> {
    if items.is_empty() {
        return Vec::new();
    }
    if group == GroupOption::None {
        return vec![(GroupKey::Ungrouped, items)];
    }

    // BTreeMap gives ascending key order; pushing in sorted input order
    // preserves the sort stage's order within each group.
    let mut groups: BTreeMap<GroupKey, Vec<WatchlistItem>> = BTreeMap::new();
    for item in items {
        let key = group_key(&item, group);
        groups.entry(key).or_default().push(item);
    }
    groups.into_iter().collect()
}

fn group_key(item: &WatchlistItem, group: GroupOption) -> GroupKey {
    match group {
        GroupOption::None => GroupKey::Ungrouped,
        GroupOption::Status => GroupKey::Status(item.status),
        GroupOption::Priority => GroupKey::Priority(item.priority),
        GroupOption::Genre => match item.genres.first() {
            Some(genre) => GroupKey::Genre(genre.clone()),
            None => GroupKey::Genre(UNCATEGORIZED.to_string()),
        },
        GroupOption::Year => GroupKey::Year(item.release_year()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn create_item(id: &str, title: &str, status: WatchStatus) -> WatchlistItem {
        WatchlistItem {
            id: id.to_string(),
            title: title.to_string(),
            poster_url: "https://images.example/poster.jpg".to_string(),
            backdrop_url: None,
            date_added: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
            release_date: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
            status,
            priority: Priority::Medium,
            progress: None,
            rating: None,
            genres: vec![],
            runtime: None,
            director: None,
            streaming_services: None,
        }
    }

    fn ids(groups: &[(GroupKey, Vec<WatchlistItem>)]) -> Vec<String> {
        groups
            .iter()
            .flat_map(|(_, items)| items.iter().map(|i| i.id.clone()))
            .collect()
    }

    #[test]
    fn test_filter_all_retains_everything() {
        let items = vec![
            create_item("1", "A", WatchStatus::Watched),
            create_item("2", "B", WatchStatus::Watching),
        ];
        let groups = view(&items, StatusFilter::All, SortOption::Title, GroupOption::None);
        assert_eq!(ids(&groups), vec!["1", "2"]);
    }

    #[test]
    fn test_filter_by_concrete_status() {
        let items = vec![
            create_item("1", "A", WatchStatus::Watched),
            create_item("2", "B", WatchStatus::Watching),
            create_item("3", "C", WatchStatus::Watched),
        ];
        let groups = view(
            &items,
            StatusFilter::Only(WatchStatus::Watched),
            SortOption::Title,
            GroupOption::None,
        );
        assert_eq!(ids(&groups), vec!["1", "3"]);
    }

    #[test]
    fn test_filter_with_no_matches_yields_empty_group_set() {
        let items = vec![create_item("1", "A", WatchStatus::Watched)];
        let groups = view(
            &items,
            StatusFilter::Only(WatchStatus::Watching),
            SortOption::Title,
            GroupOption::None,
        );
        assert!(groups.is_empty());
    }

    #[test]
    fn test_sort_date_added_newest_first() {
        let mut a = create_item("1", "A", WatchStatus::Watching);
        a.date_added = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let mut b = create_item("2", "B", WatchStatus::Watching);
        b.date_added = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();

        let groups = view(&[a, b], StatusFilter::All, SortOption::DateAdded, GroupOption::None);
        assert_eq!(ids(&groups), vec!["2", "1"]);
    }

    #[test]
    fn test_sort_title_is_case_insensitive() {
        let items = vec![
            create_item("1", "zulu", WatchStatus::Watching),
            create_item("2", "Alpha", WatchStatus::Watching),
            create_item("3", "bravo", WatchStatus::Watching),
        ];
        let groups = view(&items, StatusFilter::All, SortOption::Title, GroupOption::None);
        assert_eq!(ids(&groups), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_sort_rating_descending_with_unrated_last() {
        let mut a = create_item("1", "A", WatchStatus::Watching);
        a.rating = Some(6.5);
        let b = create_item("2", "B", WatchStatus::Watching);
        let mut c = create_item("3", "C", WatchStatus::Watching);
        c.rating = Some(8.9);

        let groups = view(&[a, b, c], StatusFilter::All, SortOption::Rating, GroupOption::None);
        assert_eq!(ids(&groups), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_sort_priority_high_first() {
        let mut a = create_item("1", "A", WatchStatus::Watching);
        a.priority = Priority::Low;
        let mut b = create_item("2", "B", WatchStatus::Watching);
        b.priority = Priority::High;
        let mut c = create_item("3", "C", WatchStatus::Watching);
        c.priority = Priority::Medium;

        let groups = view(&[a, b, c], StatusFilter::All, SortOption::Priority, GroupOption::None);
        assert_eq!(ids(&groups), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        // All four share one priority, so priority sort must keep input order
        let items = vec![
            create_item("1", "D", WatchStatus::Watching),
            create_item("2", "C", WatchStatus::Watching),
            create_item("3", "B", WatchStatus::Watching),
            create_item("4", "A", WatchStatus::Watching),
        ];
        let groups = view(&items, StatusFilter::All, SortOption::Priority, GroupOption::None);
        assert_eq!(ids(&groups), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_group_none_yields_single_unlabeled_group() {
        let items = vec![
            create_item("1", "A", WatchStatus::Watching),
            create_item("2", "B", WatchStatus::Watched),
        ];
        let groups = view(&items, StatusFilter::All, SortOption::Title, GroupOption::None);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, GroupKey::Ungrouped);
        assert_eq!(groups[0].1.len(), 2);
    }

    #[test]
    fn test_group_by_status_in_lifecycle_order() {
        let items = vec![
            create_item("1", "A", WatchStatus::Watched),
            create_item("2", "B", WatchStatus::WantToWatch),
            create_item("3", "C", WatchStatus::Watching),
        ];
        let groups = view(&items, StatusFilter::All, SortOption::Title, GroupOption::Status);
        let keys: Vec<GroupKey> = groups.iter().map(|(k, _)| k.clone()).collect();
        assert_eq!(
            keys,
            vec![
                GroupKey::Status(WatchStatus::WantToWatch),
                GroupKey::Status(WatchStatus::Watching),
                GroupKey::Status(WatchStatus::Watched),
            ]
        );
    }

    #[test]
    fn test_group_by_genre_uses_first_genre() {
        let mut a = create_item("1", "A", WatchStatus::Watching);
        a.genres = vec!["Drama".to_string(), "Crime".to_string()];
        let mut b = create_item("2", "B", WatchStatus::Watching);
        b.genres = vec!["Comedy".to_string()];

        let groups = view(&[a, b], StatusFilter::All, SortOption::Title, GroupOption::Genre);
        let keys: Vec<GroupKey> = groups.iter().map(|(k, _)| k.clone()).collect();
        assert_eq!(
            keys,
            vec![
                GroupKey::Genre("Comedy".to_string()),
                GroupKey::Genre("Drama".to_string()),
            ]
        );
    }

    #[test]
    fn test_group_by_genre_empty_list_falls_into_uncategorized() {
        let item = create_item("1", "A", WatchStatus::Watching);
        let groups = view(&[item], StatusFilter::All, SortOption::Title, GroupOption::Genre);
        assert_eq!(groups[0].0, GroupKey::Genre(UNCATEGORIZED.to_string()));
    }

    #[test]
    fn test_group_by_year_ascending() {
        let mut a = create_item("1", "A", WatchStatus::Watching);
        a.release_date = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
        let mut b = create_item("2", "B", WatchStatus::Watching);
        b.release_date = Utc.with_ymd_and_hms(1999, 3, 31, 0, 0, 0).unwrap();

        let groups = view(&[a, b], StatusFilter::All, SortOption::Title, GroupOption::Year);
        let keys: Vec<GroupKey> = groups.iter().map(|(k, _)| k.clone()).collect();
        assert_eq!(keys, vec![GroupKey::Year(1999), GroupKey::Year(2024)]);
    }

    #[test]
    fn test_group_preserves_sort_order_within_groups() {
        let mut a = create_item("1", "Zulu", WatchStatus::Watching);
        a.genres = vec!["Drama".to_string()];
        let mut b = create_item("2", "Alpha", WatchStatus::Watching);
        b.genres = vec!["Drama".to_string()];

        let groups = view(&[a, b], StatusFilter::All, SortOption::Title, GroupOption::Genre);
        assert_eq!(ids(&groups), vec!["2", "1"]);
    }

    #[test]
    fn test_view_is_idempotent() {
        let items = vec![
            create_item("1", "B", WatchStatus::Watching),
            create_item("2", "A", WatchStatus::Watched),
        ];
        let first = view(&items, StatusFilter::All, SortOption::Title, GroupOption::Status);
        let second = view(&items, StatusFilter::All, SortOption::Title, GroupOption::Status);
        assert_eq!(first, second);
    }

    #[test]
    fn test_option_parsing_rejects_unknown_values() {
        assert!("alphabetical".parse::<SortOption>().is_err());
        assert!("director".parse::<GroupOption>().is_err());
        assert!("dropped".parse::<StatusFilter>().is_err());
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "watching".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(WatchStatus::Watching)
        );
    }
}
