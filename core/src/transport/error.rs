//! Error types for decoding and byte formats.

use thiserror::Error;

/// A transport record whose array lengths break the layout invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A flat array cannot be split into whole groups.
    #[error("{attribute} length {len} is not a multiple of {group_size}")]
    LengthNotMultiple {
        /// Record field name (`positions`, `normals`, `uvs` or `indices`).
        attribute: &'static str,
        /// Number of values in the field.
        len: usize,
        /// Values per vertex (or per triangle for indices).
        group_size: usize,
    },
    /// Normals are present but do not cover every position.
    #[error("normals length {normals} does not match positions length {positions}")]
    NormalsLengthMismatch {
        /// Number of position values.
        positions: usize,
        /// Number of normal values.
        normals: usize,
    },
}

/// Errors from encoding a record to bytes or decoding it back.
#[cfg(feature = "serde")]
#[derive(Error, Debug)]
pub enum FormatError {
    /// The record could not be written in the requested format.
    #[error("serialize error: {0}")]
    Serialize(String),
    /// The bytes could not be parsed as a record.
    #[error("deserialize error: {0}")]
    Deserialize(String),
    /// A text format received bytes that are not UTF-8.
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}
