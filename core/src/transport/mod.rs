//! Transport form of a mesh and the conversions to and from [`Geometry`].
//!
//! This module provides:
//!
//! - [`SerializableMesh`] - Flat, serialization-friendly record of a mesh
//! - [`encode`] - [`Geometry`] to [`SerializableMesh`]
//! - [`decode`] / [`decode_with`] - [`SerializableMesh`] to [`Geometry`],
//!   deriving bounds and missing normals
//! - [`DecodeOptions`] / [`Validation`] - How strictly malformed records
//!   are handled
//! - [`format`] - Byte encodings of the record (feature-gated)
//!
//! # Wire contract
//!
//! The record's field names (`positions`, `normals`, `uvs`, `indices`) and the
//! flattened-array convention are what other parties must agree on. An
//! absent optional field means "attribute not set", which is not the same as
//! an empty array.
//!
//! [`Geometry`]: crate::mesh::Geometry

mod decode;
mod encode;
mod error;
#[cfg(feature = "serde")]
pub mod format;
mod options;
mod record;

pub use decode::{decode, decode_with};
pub use encode::encode;
pub use error::ValidationError;
#[cfg(feature = "serde")]
pub use error::FormatError;
pub use options::{DecodeOptions, Validation};
pub use record::SerializableMesh;
