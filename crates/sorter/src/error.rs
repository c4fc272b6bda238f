//! Error handling for sorter operations

use thiserror::Error;

/// Failures surfaced by selector parsing and the checked primitives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    #[error("Sorting algorithm {name} is not implemented")]
    UnsupportedAlgorithm { name: String },

    #[error("Index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Cannot partition an empty sequence")]
    EmptyPartition,
}

impl SortError {
    /// Create an unsupported algorithm error
    pub fn unsupported_algorithm(name: &str) -> Self {
        SortError::UnsupportedAlgorithm {
            name: name.to_string(),
        }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        SortError::IndexOutOfRange { index, len }
    }
}

/// Result type for sorter operations
pub type SortResult<T> = Result<T, SortError>;
