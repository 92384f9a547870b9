pub mod batch;
pub mod controller;
pub mod error;
pub mod pipeline;
pub mod selection;
pub mod stats;
pub mod transition;

pub use batch::{apply_batch, BatchOperation};
pub use controller::{WatchlistController, WatchlistView};
pub use error::EngineError;
pub use pipeline::{view, GroupKey, GroupOption, SortOption, StatusFilter};
pub use selection::SelectionTracker;
pub use stats::{summarize, WatchlistStats};
pub use transition::{apply_priority, apply_progress, apply_status};
