//! Decoder configuration.

/// How the decoder treats records that break the length invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Validation {
    /// Reject the record with a [`ValidationError`](super::ValidationError).
    #[default]
    Strict,
    /// Truncate trailing partial groups and drop mismatched normals, logging
    /// a warning for each repair.
    Lenient,
}

/// Options for [`decode_with`](super::decode_with).
///
/// The defaults reproduce [`decode`](super::decode): strict validation,
/// bounding volumes computed, missing normals derived.
///
/// # Example
///
/// ```ignore
/// let options = DecodeOptions::new()
///     .with_validation(Validation::Lenient)
///     .with_vertex_normals(false);
/// let geometry = decode_with(&record, &options)?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodeOptions {
    /// Handling of malformed lengths.
    pub validation: Validation,
    /// Compute the bounding box and bounding sphere.
    pub compute_bounds: bool,
    /// Derive vertex normals when the record carries none.
    pub derive_normals: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            validation: Validation::Strict,
            compute_bounds: true,
            derive_normals: true,
        }
    }
}

impl DecodeOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the validation mode.
    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// Enable or disable bounding volume computation.
    pub fn with_bounds(mut self, enabled: bool) -> Self {
        self.compute_bounds = enabled;
        self
    }

    /// Enable or disable normal derivation for records without normals.
    pub fn with_vertex_normals(mut self, enabled: bool) -> Self {
        self.derive_normals = enabled;
        self
    }
}
