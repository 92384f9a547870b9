use thiserror::Error;

/// Unknown spelling for one of the closed option vocabularies
/// (status, priority, filter, sort, group).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {field} value: {value:?}")]
pub struct InvalidValue {
    pub field: &'static str,
    pub value: String,
}

impl InvalidValue {
    pub fn new(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}
