//! CPU-side mesh types and generators.
//!
//! This module provides GPU-agnostic mesh data structures:
//!
//! - [`Geometry`] - Typed position/normal/UV buffers plus an optional index buffer
//! - [`Indices`] / [`IndexFormat`] - Index data in 16-bit or 32-bit form
//! - [`Aabb`] / [`BoundingSphere`] - Derived bounding volumes
//! - [`compute_vertex_normals`] - Area-weighted normal derivation
//! - Generators for common shapes (sphere, quad)

mod bounds;
mod data;
pub mod generators;
mod indices;
mod normals;

pub use bounds::{Aabb, BoundingSphere};
pub use data::{AttributeSemantic, Geometry};
pub use indices::{IndexFormat, Indices};
pub use normals::compute_vertex_normals;
