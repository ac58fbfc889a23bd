//! Error type for wrapper access operations.

use thiserror::Error;

/// Contract violations raised by wrapper accessors.
///
/// Malformed JSON text is not represented here: the serialization adapters
/// in [`crate::codec`] return [`serde_json::Error`] untranslated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// Object property read or delete on an absent key.
    #[error("no such key: {0:?}")]
    NoSuchKey(String),
    /// Array search (`index_of`, `remove`) found no matching element.
    #[error("no such element")]
    NoSuchElement,
    /// Array position outside the current bounds.
    #[error("index {index} out of range (len {len})")]
    OutOfRange { index: usize, len: usize },
}
