//! Transport record to geometry.

use super::error::ValidationError;
use super::options::{DecodeOptions, Validation};
use super::record::SerializableMesh;
use crate::mesh::{Geometry, Indices};
use crate::{profile_function, profile_plot, profile_scope};

/// Rebuild a [`Geometry`] from a record with default [`DecodeOptions`].
///
/// Sets every non-empty attribute, picks 16-bit or 32-bit indices from the
/// largest index value, computes the bounding box and sphere, and derives
/// vertex normals when the record has none. Empty arrays are treated as
/// absent. The returned geometry owns fresh buffers.
pub fn decode(record: &SerializableMesh) -> Result<Geometry, ValidationError> {
    decode_with(record, &DecodeOptions::default())
}

/// Rebuild a [`Geometry`] from a record with explicit options.
pub fn decode_with(
    record: &SerializableMesh,
    options: &DecodeOptions,
) -> Result<Geometry, ValidationError> {
    profile_function!();

    if options.validation == Validation::Strict {
        record.validate()?;
    }

    let mut geometry = Geometry::new();

    let positions = group::<3>("positions", &record.positions);
    let vertex_count = positions.len();
    if !positions.is_empty() {
        geometry = geometry.with_positions(positions);
    }

    if let Some(normals) = non_empty(record.normals.as_deref()) {
        let normals = group::<3>("normals", normals);
        if normals.len() == vertex_count {
            geometry = geometry.with_normals(normals);
        } else {
            // Only reachable in lenient mode; strict validation rejected it.
            log::warn!(
                "Dropping {} normals for {} vertices, normals will be derived",
                normals.len(),
                vertex_count
            );
        }
    }

    if let Some(uvs) = non_empty(record.uvs.as_deref()) {
        geometry = geometry.with_uvs(group::<2>("uvs", uvs));
    }

    if let Some(indices) = non_empty(record.indices.as_deref()) {
        let whole = indices.len() - indices.len() % 3;
        if whole != indices.len() {
            log::warn!(
                "Truncating indices from {} to {} values",
                indices.len(),
                whole
            );
        }
        if whole > 0 {
            geometry = geometry.with_indices(Indices::from_values(&indices[..whole]));
        }
    }

    if options.compute_bounds {
        profile_scope!("compute_bounds");
        geometry.compute_bounding_box();
        geometry.compute_bounding_sphere();
    }

    if options.derive_normals && geometry.normals().is_none() {
        profile_scope!("compute_vertex_normals");
        geometry.compute_vertex_normals();
        log::trace!("Derived {} vertex normals", geometry.vertex_count());
    }

    profile_plot!("decoded_vertices", geometry.vertex_count());
    log::debug!(
        "Decoded mesh: {} vertices, {} indices ({:?}), {} triangles",
        geometry.vertex_count(),
        geometry.index_count(),
        geometry.index_format(),
        geometry.triangle_count(),
    );

    Ok(geometry)
}

fn non_empty<T>(values: Option<&[T]>) -> Option<&[T]> {
    values.filter(|v| !v.is_empty())
}

/// Split a flat array into `N`-tuples, dropping a trailing partial group.
fn group<const N: usize>(attribute: &str, flat: &[f32]) -> Vec<[f32; N]>
where
    [f32; N]: bytemuck::Pod,
{
    let whole = flat.len() - flat.len() % N;
    if whole != flat.len() {
        log::warn!(
            "Truncating {} from {} to {} values",
            attribute,
            flat.len(),
            whole
        );
    }
    bytemuck::cast_slice(&flat[..whole]).to_vec()
}

impl TryFrom<&SerializableMesh> for Geometry {
    type Error = ValidationError;

    fn try_from(record: &SerializableMesh) -> Result<Self, Self::Error> {
        decode(record)
    }
}
