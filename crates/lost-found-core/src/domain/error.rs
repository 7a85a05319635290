//! Domain Errors
//!
//! Every fallible board operation reports a [`BoardError`].

use thiserror::Error;

use super::item::ItemId;

/// Common result type for board operations
pub type BoardResult<T> = Result<T, BoardError>;

/// Board-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("item not found: {0}")]
    NotFound(ItemId),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("invalid {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },

    #[error("duplicate item id: {0}")]
    DuplicateId(ItemId),

    #[error("image could not be read: {0}")]
    ImageRead(String),

    #[error("seed data is malformed: {0}")]
    Seed(String),
}

impl BoardError {
    pub(crate) fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        BoardError::InvalidField {
            field,
            value: value.into(),
        }
    }
}
