use nextwatch_models::InvalidValue;
use thiserror::Error;

/// Command rejection. The canonical collection is left untouched
/// whenever one of these is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Progress percent outside 0-100
    #[error("progress must be between 0 and 100, got {value}")]
    InvalidProgress { value: u8 },

    /// An item with this id is already in the collection
    #[error("duplicate watchlist item id: {id}")]
    DuplicateId { id: String },

    #[error(transparent)]
    InvalidValue(#[from] InvalidValue),
}
