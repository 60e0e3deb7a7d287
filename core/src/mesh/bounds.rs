//! Bounding volumes derived from vertex positions.

use crate::math::{Vec3, vec3_from_array};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Component-wise minimum corner.
    pub min: Vec3,
    /// Component-wise maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Create a box from its corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Smallest box enclosing all `points`, or `None` if there are none.
    pub fn from_points(points: &[[f32; 3]]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let start = vec3_from_array(*first);
        let (min, max) = rest.iter().fold((start, start), |(min, max), p| {
            let p = vec3_from_array(*p);
            (min.inf(&p), max.sup(&p))
        });
        Some(Self { min, max })
    }

    /// Center point of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Extent of the box along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Whether `point` lies inside or on the box.
    pub fn contains_point(&self, point: Vec3) -> bool {
        (0..3).all(|i| point[i] >= self.min[i] && point[i] <= self.max[i])
    }

    /// Smallest box enclosing both boxes.
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }
}

/// Bounding sphere, centred on the bounding box center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// Sphere center.
    pub center: Vec3,
    /// Sphere radius.
    pub radius: f32,
}

impl BoundingSphere {
    /// Sphere around the box center reaching the farthest of `points`.
    ///
    /// Returns `None` if there are no points.
    pub fn from_points(points: &[[f32; 3]]) -> Option<Self> {
        let center = Aabb::from_points(points)?.center();
        let max_sq = points
            .iter()
            .map(|p| (vec3_from_array(*p) - center).norm_squared())
            .fold(0.0f32, f32::max);
        Some(Self {
            center,
            radius: max_sq.sqrt(),
        })
    }

    /// Whether `point` lies inside or on the sphere.
    pub fn contains_point(&self, point: Vec3) -> bool {
        (point - self.center).norm_squared() <= self.radius * self.radius
    }
}
