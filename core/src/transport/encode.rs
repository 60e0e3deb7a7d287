//! Geometry to transport record.

use super::record::SerializableMesh;
use crate::mesh::{Geometry, Indices};
use crate::profile_function;

/// Flatten a [`Geometry`] into a [`SerializableMesh`].
///
/// Absent positions become an empty array. Absent normals, UVs and indices
/// stay absent; attributes that are set but empty become empty arrays.
/// Indices are widened to `u32` whatever their stored width. The geometry is
/// not modified.
pub fn encode(geometry: &Geometry) -> SerializableMesh {
    profile_function!();

    let record = SerializableMesh {
        positions: geometry.positions().map(flatten::<3>).unwrap_or_default(),
        normals: geometry.normals().map(flatten::<3>),
        uvs: geometry.uvs().map(flatten::<2>),
        indices: geometry.indices().map(Indices::to_vec_u32),
    };

    log::debug!(
        "Encoded mesh {:?}: {} vertices, normals={}, uvs={}, indices={}",
        geometry.label().unwrap_or("<unnamed>"),
        geometry.vertex_count(),
        record.normals.is_some(),
        record.uvs.is_some(),
        record.indices.as_ref().map_or(0, Vec::len),
    );

    record
}

fn flatten<const N: usize>(items: &[[f32; N]]) -> Vec<f32>
where
    [f32; N]: bytemuck::Pod,
{
    bytemuck::cast_slice(items).to_vec()
}

impl From<&Geometry> for SerializableMesh {
    fn from(geometry: &Geometry) -> Self {
        encode(geometry)
    }
}
