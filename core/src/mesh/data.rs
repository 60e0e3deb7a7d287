//! CPU-side mesh data structures.
//!
//! This module provides:
//! - [`AttributeSemantic`] - The fixed set of per-vertex channels
//! - [`Geometry`] - Typed attribute buffers, optional index buffer and
//!   cached bounding volumes

use super::bounds::{Aabb, BoundingSphere};
use super::indices::{IndexFormat, Indices};
use super::normals::compute_vertex_normals;

/// Semantic meaning of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeSemantic {
    /// Vertex position (float3).
    Position,
    /// Vertex normal (float3).
    Normal,
    /// Texture coordinates set 0 (float2).
    TexCoord0,
}

impl AttributeSemantic {
    /// Number of floats per vertex for this attribute.
    pub fn components(&self) -> usize {
        match self {
            Self::Position | Self::Normal => 3,
            Self::TexCoord0 => 2,
        }
    }

    /// Attribute name as used by common rendering libraries.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Normal => "normal",
            Self::TexCoord0 => "uv",
        }
    }
}

impl std::fmt::Display for AttributeSemantic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A CPU-side triangle mesh with typed vertex attributes.
///
/// Every attribute is optional. An absent attribute (`None`) is distinct
/// from a present but empty one (`Some` of an empty buffer), and that
/// distinction survives encoding.
///
/// Bounding volumes are cached values: they are only updated by
/// [`compute_bounding_box`](Self::compute_bounding_box) and
/// [`compute_bounding_sphere`](Self::compute_bounding_sphere), not by the
/// `with_*` setters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    positions: Option<Vec<[f32; 3]>>,
    normals: Option<Vec<[f32; 3]>>,
    uvs: Option<Vec<[f32; 2]>>,
    indices: Option<Indices>,
    bounding_box: Option<Aabb>,
    bounding_sphere: Option<BoundingSphere>,
    label: Option<String>,
}

impl Geometry {
    /// Create an empty geometry with no attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the position attribute.
    pub fn with_positions(mut self, positions: Vec<[f32; 3]>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Set the normal attribute.
    pub fn with_normals(mut self, normals: Vec<[f32; 3]>) -> Self {
        self.normals = Some(normals);
        self
    }

    /// Set the UV attribute.
    pub fn with_uvs(mut self, uvs: Vec<[f32; 2]>) -> Self {
        self.uvs = Some(uvs);
        self
    }

    /// Set the index buffer.
    pub fn with_indices(mut self, indices: Indices) -> Self {
        self.indices = Some(indices);
        self
    }

    /// Set index data as u16 indices.
    pub fn with_indices_u16(self, indices: &[u16]) -> Self {
        self.with_indices(Indices::U16(indices.to_vec()))
    }

    /// Set index data as u32 indices.
    pub fn with_indices_u32(self, indices: &[u32]) -> Self {
        self.with_indices(Indices::U32(indices.to_vec()))
    }

    /// Set a debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the positions, if set.
    pub fn positions(&self) -> Option<&[[f32; 3]]> {
        self.positions.as_deref()
    }

    /// Get the normals, if set.
    pub fn normals(&self) -> Option<&[[f32; 3]]> {
        self.normals.as_deref()
    }

    /// Get the UVs, if set.
    pub fn uvs(&self) -> Option<&[[f32; 2]]> {
        self.uvs.as_deref()
    }

    /// Get the index buffer, if set.
    pub fn indices(&self) -> Option<&Indices> {
        self.indices.as_ref()
    }

    /// Get the index format, if indexed.
    pub fn index_format(&self) -> Option<IndexFormat> {
        self.indices.as_ref().map(Indices::format)
    }

    /// Check if this mesh uses indexed drawing.
    pub fn is_indexed(&self) -> bool {
        self.indices.is_some()
    }

    /// Check whether an attribute is set (possibly empty).
    pub fn has_attribute(&self, semantic: AttributeSemantic) -> bool {
        match semantic {
            AttributeSemantic::Position => self.positions.is_some(),
            AttributeSemantic::Normal => self.normals.is_some(),
            AttributeSemantic::TexCoord0 => self.uvs.is_some(),
        }
    }

    /// Get the number of vertices (length of the position attribute).
    pub fn vertex_count(&self) -> usize {
        self.positions.as_ref().map_or(0, Vec::len)
    }

    /// Get the number of indices.
    pub fn index_count(&self) -> usize {
        self.indices.as_ref().map_or(0, Indices::len)
    }

    /// Get the number of complete triangles drawn by this mesh.
    pub fn triangle_count(&self) -> usize {
        match &self.indices {
            Some(indices) => indices.len() / 3,
            None => self.vertex_count() / 3,
        }
    }

    /// Get the cached bounding box.
    pub fn bounding_box(&self) -> Option<&Aabb> {
        self.bounding_box.as_ref()
    }

    /// Get the cached bounding sphere.
    pub fn bounding_sphere(&self) -> Option<&BoundingSphere> {
        self.bounding_sphere.as_ref()
    }

    /// Get the debug label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Recompute the cached bounding box from the positions.
    ///
    /// Without positions the box is cleared.
    pub fn compute_bounding_box(&mut self) {
        self.bounding_box = self.positions.as_deref().and_then(Aabb::from_points);
    }

    /// Recompute the cached bounding sphere from the positions.
    ///
    /// Without positions the sphere is cleared.
    pub fn compute_bounding_sphere(&mut self) {
        self.bounding_sphere = self
            .positions
            .as_deref()
            .and_then(BoundingSphere::from_points);
    }

    /// Replace the normal attribute with normals derived from the triangles.
    ///
    /// Does nothing when there are no positions.
    pub fn compute_vertex_normals(&mut self) {
        let Some(positions) = self.positions.as_deref() else {
            return;
        };
        self.normals = Some(compute_vertex_normals(positions, self.indices.as_ref()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;

    fn triangle() -> Geometry {
        Geometry::new().with_positions(vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
        ])
    }

    #[test]
    fn test_semantic_components() {
        assert_eq!(AttributeSemantic::Position.components(), 3);
        assert_eq!(AttributeSemantic::Normal.components(), 3);
        assert_eq!(AttributeSemantic::TexCoord0.components(), 2);
        assert_eq!(AttributeSemantic::TexCoord0.to_string(), "uv");
    }

    #[test]
    fn test_empty_geometry() {
        let geometry = Geometry::new();
        assert_eq!(geometry.vertex_count(), 0);
        assert_eq!(geometry.index_count(), 0);
        assert_eq!(geometry.triangle_count(), 0);
        assert!(!geometry.is_indexed());
        assert!(geometry.positions().is_none());
        assert!(geometry.index_format().is_none());
    }

    #[test]
    fn test_geometry_indexed() {
        let geometry = triangle()
            .with_indices_u32(&[0, 1, 2, 2, 1, 0])
            .with_label("test");

        assert_eq!(geometry.vertex_count(), 3);
        assert!(geometry.is_indexed());
        assert_eq!(geometry.index_count(), 6);
        assert_eq!(geometry.triangle_count(), 2);
        assert_eq!(geometry.index_format(), Some(IndexFormat::Uint32));
        assert_eq!(geometry.label(), Some("test"));
    }

    #[test]
    fn test_absent_and_empty_attributes_differ() {
        let absent = triangle();
        let empty = triangle().with_uvs(Vec::new());
        assert!(!absent.has_attribute(AttributeSemantic::TexCoord0));
        assert!(empty.has_attribute(AttributeSemantic::TexCoord0));
        assert_ne!(absent, empty);
    }

    #[test]
    fn test_compute_bounds() {
        let mut geometry = triangle();
        assert!(geometry.bounding_box().is_none());

        geometry.compute_bounding_box();
        geometry.compute_bounding_sphere();

        let aabb = geometry.bounding_box().unwrap();
        assert_eq!(aabb.min, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 1.0, 0.0));
        let sphere = geometry.bounding_sphere().unwrap();
        assert_eq!(sphere.center, Vec3::new(0.5, 0.5, 0.0));
    }

    #[test]
    fn test_compute_bounds_without_positions() {
        let mut geometry = Geometry::new();
        geometry.compute_bounding_box();
        geometry.compute_bounding_sphere();
        assert!(geometry.bounding_box().is_none());
        assert!(geometry.bounding_sphere().is_none());
    }

    #[test]
    fn test_compute_vertex_normals() {
        let mut geometry = triangle();
        geometry.compute_vertex_normals();
        assert_eq!(geometry.normals(), Some(&[[0.0, 0.0, 1.0]; 3][..]));

        let mut empty = Geometry::new();
        empty.compute_vertex_normals();
        assert!(empty.normals().is_none());
    }
}
