//! The flat transport record.

use super::error::ValidationError;

/// Plain, serialization-friendly form of a mesh.
///
/// Tuples are flattened: a position triple becomes three consecutive
/// numbers, a UV pair two. `None` marks an attribute that is not set;
/// `Some(vec![])` is a set but empty attribute.
///
/// With the `serde` feature, absent fields are omitted when serializing and
/// read back as absent; a missing `positions` field reads as empty.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SerializableMesh {
    /// Flattened vertex positions (3 values per vertex).
    #[cfg_attr(feature = "serde", serde(default))]
    pub positions: Vec<f32>,
    /// Flattened vertex normals (3 values per vertex).
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub normals: Option<Vec<f32>>,
    /// Flattened texture coordinates (2 values per vertex).
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub uvs: Option<Vec<f32>>,
    /// Triangle list indices (3 per triangle).
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub indices: Option<Vec<u32>>,
}

impl SerializableMesh {
    /// Create a record holding only positions.
    pub fn from_positions(positions: Vec<f32>) -> Self {
        Self {
            positions,
            ..Self::default()
        }
    }

    /// Number of whole vertices described by `positions`.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Whether the record carries no geometry at all.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Check the length invariants.
    ///
    /// Every array must split into whole groups (positions, normals and
    /// indices by 3, UVs by 2), and non-empty normals must match the
    /// positions length. Index values are not range-checked.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_multiple("positions", self.positions.len(), 3)?;
        if let Some(normals) = &self.normals {
            check_multiple("normals", normals.len(), 3)?;
            if !normals.is_empty() && normals.len() != self.positions.len() {
                return Err(ValidationError::NormalsLengthMismatch {
                    positions: self.positions.len(),
                    normals: normals.len(),
                });
            }
        }
        if let Some(uvs) = &self.uvs {
            check_multiple("uvs", uvs.len(), 2)?;
        }
        if let Some(indices) = &self.indices {
            check_multiple("indices", indices.len(), 3)?;
        }
        Ok(())
    }
}

fn check_multiple(
    attribute: &'static str,
    len: usize,
    group_size: usize,
) -> Result<(), ValidationError> {
    if len % group_size == 0 {
        Ok(())
    } else {
        Err(ValidationError::LengthNotMultiple {
            attribute,
            len,
            group_size,
        })
    }
}
