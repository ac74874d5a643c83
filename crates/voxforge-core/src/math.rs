//! Math utilities and helpers.

use glam::Vec3;

/// Axis-Aligned Bounding Box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Create a new AABB from min and max corners
    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// AABB of a box given its center and full extents
    #[inline]
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Get the center of the AABB
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the size of the AABB
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Center of the top face
    #[inline]
    pub fn top_center(&self) -> Vec3 {
        let c = self.center();
        Vec3::new(c.x, self.max.y, c.z)
    }

    /// Center of the bottom face
    #[inline]
    pub fn bottom_center(&self) -> Vec3 {
        let c = self.center();
        Vec3::new(c.x, self.min.y, c.z)
    }

    /// Point of the AABB closest to `point`
    #[inline]
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }

    /// Merge two AABBs
    #[inline]
    pub fn merge(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Merge an iterator of AABBs, `None` when empty
    pub fn merge_all(mut boxes: impl Iterator<Item = Aabb>) -> Option<Aabb> {
        let first = boxes.next()?;
        Some(boxes.fold(first, |acc, b| acc.merge(&b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_center_size() {
        let aabb = Aabb::from_center_size(Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(aabb.min, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(aabb.max, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(aabb.top_center(), Vec3::new(1.0, 4.0, 3.0));
        assert_eq!(aabb.bottom_center(), Vec3::new(1.0, 0.0, 3.0));
    }

    #[test]
    fn merge_all_spans_inputs() {
        let merged = Aabb::merge_all(
            [
                Aabb::new(Vec3::ZERO, Vec3::ONE),
                Aabb::new(Vec3::splat(-1.0), Vec3::splat(0.5)),
            ]
            .into_iter(),
        )
        .unwrap();
        assert_eq!(merged, Aabb::new(Vec3::splat(-1.0), Vec3::ONE));
        assert!(Aabb::merge_all(std::iter::empty()).is_none());
    }

    #[test]
    fn closest_point_clamps() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::ONE);
        assert_eq!(
            aabb.closest_point(Vec3::new(2.0, 0.5, -1.0)),
            Vec3::new(1.0, 0.5, 0.0)
        );
    }
}
