//! Math type aliases and helper functions.
//!
//! Geometry buffers store plain `[f32; N]` arrays so they can be cast to flat
//! slices with `bytemuck`. These helpers move between those arrays and the
//! nalgebra types used for the actual vector math.

pub use nalgebra;

/// 2D vector (f32).
pub type Vec2 = nalgebra::Vector2<f32>;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;

/// Build a [`Vec3`] from a `[x, y, z]` array.
pub fn vec3_from_array(a: [f32; 3]) -> Vec3 {
    Vec3::new(a[0], a[1], a[2])
}

/// Convert a [`Vec3`] to a `[x, y, z]` array.
pub fn vec3_to_array(v: Vec3) -> [f32; 3] {
    [v.x, v.y, v.z]
}

/// Build a [`Vec2`] from a `[u, v]` array.
pub fn vec2_from_array(a: [f32; 2]) -> Vec2 {
    Vec2::new(a[0], a[1])
}

/// Normalize a vector, leaving zero-length vectors untouched.
pub fn normalize_or_zero(v: Vec3) -> Vec3 {
    let len = v.norm();
    if len > 0.0 { v / len } else { v }
}
