//! # meshport core
//!
//! Converts between GPU-style mesh buffers ([`mesh::Geometry`]) and a flat,
//! serialization-friendly record ([`transport::SerializableMesh`]).
//!
//! ```ignore
//! use meshport_core::mesh::Geometry;
//! use meshport_core::transport::{decode, encode};
//!
//! let geometry = Geometry::new()
//!     .with_positions(vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]])
//!     .with_indices_u16(&[0, 1, 2]);
//!
//! let record = encode(&geometry);
//! let restored = decode(&record)?;
//! assert!(restored.normals().is_some());
//! ```

pub mod math;
pub mod mesh;
pub mod profiling;
pub mod transport;

pub use mesh::{Geometry, IndexFormat, Indices};
pub use transport::{DecodeOptions, SerializableMesh, ValidationError, decode, encode};

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
