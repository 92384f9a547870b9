use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidValue;

/// Viewing lifecycle stage of a tracked title
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum WatchStatus {
    /// On the list, not started
    WantToWatch,
    /// Currently in progress
    Watching,
    /// Finished
    Watched,
}

impl WatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WatchStatus::WantToWatch => "want-to-watch",
            WatchStatus::Watching => "watching",
            WatchStatus::Watched => "watched",
        }
    }
}

impl fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WatchStatus {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "want-to-watch" => Ok(WatchStatus::WantToWatch),
            "watching" => Ok(WatchStatus::Watching),
            "watched" => Ok(WatchStatus::Watched),
            _ => Err(InvalidValue::new("status", s)),
        }
    }
}
