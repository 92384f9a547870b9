use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::priority::Priority;
use crate::status::WatchStatus;

/// One tracked title. Identity is `id`, immutable once created;
/// `status`, `priority`, and `progress` are mutated only through the
/// engine's transition rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchlistItem {
    pub id: String,
    pub title: String,
    pub poster_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backdrop_url: Option<String>,
    pub date_added: DateTime<Utc>,
    pub release_date: DateTime<Utc>,
    pub status: WatchStatus,
    pub priority: Priority,
    /// Percent 0-100, meaningful while `status` is watching
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default)]
    pub genres: Vec<String>,
    /// Runtime in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streaming_services: Option<Vec<String>>,
}

impl WatchlistItem {
    /// Four-digit release year, used for year grouping
    pub fn release_year(&self) -> i32 {
        self.release_date.year()
    }
}
