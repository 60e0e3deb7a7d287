//! Vertex normal computation from triangle mesh data.
//!
//! Computes area-weighted vertex normals by accumulating the unnormalized
//! face normal of every adjacent triangle.

use super::indices::Indices;
use crate::math::{Vec3, normalize_or_zero, vec3_from_array, vec3_to_array};

/// Derive per-vertex normals from triangle geometry.
///
/// With `indices`, every complete index triple is a triangle and its face
/// normal `(C - B) x (A - B)` (magnitude = 2 x area) is added to all three
/// vertices. Triangles that reference a vertex outside `positions` are
/// skipped.
///
/// Without `indices`, each consecutive position triple is a triangle and its
/// three vertices receive that triangle's face normal. Positions that do not
/// complete a triangle keep a zero normal.
///
/// The result has one normal per position. Zero-length normals stay zero.
pub fn compute_vertex_normals(positions: &[[f32; 3]], indices: Option<&Indices>) -> Vec<[f32; 3]> {
    let mut normals = vec![Vec3::zeros(); positions.len()];

    match indices {
        Some(indices) => {
            let mut skipped = 0usize;
            for [a, b, c] in indices.triangles() {
                let (a, b, c) = (a as usize, b as usize, c as usize);
                let (Some(pa), Some(pb), Some(pc)) =
                    (positions.get(a), positions.get(b), positions.get(c))
                else {
                    skipped += 1;
                    continue;
                };
                let n = face_normal(*pa, *pb, *pc);
                normals[a] += n;
                normals[b] += n;
                normals[c] += n;
            }
            if skipped > 0 {
                log::warn!(
                    "Skipped {} triangle(s) referencing vertices beyond {} positions",
                    skipped,
                    positions.len()
                );
            }
        }
        None => {
            for (tri, chunk) in positions.chunks_exact(3).enumerate() {
                let n = face_normal(chunk[0], chunk[1], chunk[2]);
                let base = tri * 3;
                normals[base] = n;
                normals[base + 1] = n;
                normals[base + 2] = n;
            }
        }
    }

    normals
        .into_iter()
        .map(|n| vec3_to_array(normalize_or_zero(n)))
        .collect()
}

/// Unnormalized face normal of triangle `(a, b, c)` with counter-clockwise winding.
fn face_normal(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> Vec3 {
    let a = vec3_from_array(a);
    let b = vec3_from_array(b);
    let c = vec3_from_array(c);
    (c - b).cross(&(a - b))
}
