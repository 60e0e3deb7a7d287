//! Format-specific encoding and decoding (feature-gated).
//!
//! Provides [`to_bytes`] and [`from_bytes`] for moving a [`SerializableMesh`]
//! to and from JSON, RON or bincode. The field layout of the record is the
//! same in every format.

use super::error::FormatError;
use super::record::SerializableMesh;

/// Supported serialization formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// JSON text, absent fields omitted.
    #[cfg(feature = "serialize-json")]
    Json,
    /// RON (Rusty Object Notation) — human-readable text format.
    #[cfg(feature = "serialize-ron")]
    Ron,
    /// Bincode — compact binary format.
    #[cfg(feature = "serialize-bincode")]
    Bincode,
}

/// Encode a record to bytes in the given format.
#[allow(unused_variables)]
pub fn to_bytes(record: &SerializableMesh, format: Format) -> Result<Vec<u8>, FormatError> {
    match format {
        #[cfg(feature = "serialize-json")]
        Format::Json => {
            serde_json::to_vec(record).map_err(|e| FormatError::Serialize(e.to_string()))
        }
        #[cfg(feature = "serialize-ron")]
        Format::Ron => ron::ser::to_string_pretty(record, ron::ser::PrettyConfig::default())
            .map(|s| s.into_bytes())
            .map_err(|e| FormatError::Serialize(e.to_string())),
        #[cfg(feature = "serialize-bincode")]
        Format::Bincode => bincode::serialize(&BinaryRecordRef::from(record))
            .map_err(|e| FormatError::Serialize(e.to_string())),
    }
}

/// Decode a record from bytes in the given format.
#[allow(unused_variables)]
pub fn from_bytes(bytes: &[u8], format: Format) -> Result<SerializableMesh, FormatError> {
    match format {
        #[cfg(feature = "serialize-json")]
        Format::Json => {
            serde_json::from_slice(bytes).map_err(|e| FormatError::Deserialize(e.to_string()))
        }
        #[cfg(feature = "serialize-ron")]
        Format::Ron => {
            let s = std::str::from_utf8(bytes)?;
            ron::from_str(s).map_err(|e| FormatError::Deserialize(e.to_string()))
        }
        #[cfg(feature = "serialize-bincode")]
        Format::Bincode => bincode::deserialize::<BinaryRecord>(bytes)
            .map(SerializableMesh::from)
            .map_err(|e| FormatError::Deserialize(e.to_string())),
    }
}

// Bincode is not self-describing, so skipped fields cannot be detected on
// read. These mirrors always write every field.

#[cfg(feature = "serialize-bincode")]
#[derive(serde::Serialize)]
struct BinaryRecordRef<'a> {
    positions: &'a [f32],
    normals: Option<&'a [f32]>,
    uvs: Option<&'a [f32]>,
    indices: Option<&'a [u32]>,
}

#[cfg(feature = "serialize-bincode")]
impl<'a> From<&'a SerializableMesh> for BinaryRecordRef<'a> {
    fn from(record: &'a SerializableMesh) -> Self {
        Self {
            positions: &record.positions,
            normals: record.normals.as_deref(),
            uvs: record.uvs.as_deref(),
            indices: record.indices.as_deref(),
        }
    }
}

#[cfg(feature = "serialize-bincode")]
#[derive(serde::Deserialize)]
struct BinaryRecord {
    positions: Vec<f32>,
    normals: Option<Vec<f32>>,
    uvs: Option<Vec<f32>>,
    indices: Option<Vec<u32>>,
}

#[cfg(feature = "serialize-bincode")]
impl From<BinaryRecord> for SerializableMesh {
    fn from(record: BinaryRecord) -> Self {
        Self {
            positions: record.positions,
            normals: record.normals,
            uvs: record.uvs,
            indices: record.indices,
        }
    }
}
