//! Errors reported by the pipeline API.
//!
//! Most of the API is typed so that invalid arguments cannot be expressed.
//! The remaining error paths are the conversions from raw integer
//! enumerants and the slice-taking setters.

use thiserror::Error;

/// Result type of fallible pipeline operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// A raw enumerant did not name any variant of the target type.
    #[error("invalid {kind} enumerant: {value}")]
    InvalidEnum { kind: &'static str, value: u32 },

    /// A value slice was shorter than the attribute requires.
    #[error("{attrib} takes {expected} values, got {actual}")]
    ValueCount {
        attrib: &'static str,
        expected: usize,
        actual: usize,
    },
}
