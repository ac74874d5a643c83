//! Shared building blocks for the archetype generators.
//!
//! Generators author their shapes in unit space; the [`Sculptor`] applies the
//! caller's scale to every box as it is pushed. A zero, negative or
//! non-finite scale produces degenerate boxes, which the underlying
//! [`ModelBuilder`] drops, so such calls return an empty model.

use std::f32::consts::TAU;

use glam::Vec3;
use voxforge_core::{part_group, BodyPart, BoxId, ModelBuilder, Side, VoxelBox, VoxelModel};

/// Scales boxes into a [`ModelBuilder`].
pub struct Sculptor {
    builder: ModelBuilder,
    scale: f32,
}

impl Sculptor {
    /// Start a model at the given scale.
    pub fn new(scale: f32) -> Self {
        Self {
            builder: ModelBuilder::with_capacity(64),
            scale,
        }
    }

    /// Scale and add a box.
    pub fn push(&mut self, mut voxel: VoxelBox) -> Option<BoxId> {
        voxel.position *= self.scale;
        voxel.scale *= self.scale;
        self.builder.push(voxel)
    }

    /// Finish the model.
    pub fn finish(self) -> VoxelModel {
        self.builder.build()
    }
}

/// Group name of a centered, unindexed part (`head`, `body`).
pub fn group(part: BodyPart) -> String {
    part_group(part, Side::Center, None)
}

/// Group name of a sided part (`arm_left`).
pub fn sided(part: BodyPart, side: Side) -> String {
    part_group(part, side, None)
}

/// Group name of an indexed part (`leg_left_2`, `tail_3`).
pub fn segment(part: BodyPart, side: Side, index: u32) -> String {
    part_group(part, side, Some(index))
}

/// Point `i` of `count` evenly spaced around a horizontal circle.
#[inline]
pub fn ring_point(i: usize, count: usize, radius: f32, y: f32, phase: f32) -> Vec3 {
    let theta = phase + i as f32 / count.max(1) as f32 * TAU;
    Vec3::new(theta.cos() * radius, y, theta.sin() * radius)
}

/// Linear taper `base - rate * t`, never negative.
#[inline]
pub fn taper(base: f32, rate: f32, t: f32) -> f32 {
    (base - rate * t).max(0.0)
}

/// Mirror a right-side offset onto `side` along X.
#[inline]
pub fn mirror(side: Side, v: Vec3) -> Vec3 {
    Vec3::new(v.x * side.sign(), v.y, v.z)
}

/// A glowing eye: glow color, bright multiplier, emissive.
pub fn eye(
    name: impl Into<String>,
    group: impl Into<String>,
    position: Vec3,
    size: f32,
) -> VoxelBox {
    VoxelBox::cube(name, group, position, size)
        .glow()
        .tint(2.5)
        .emissive(1.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sculptor_scales_geometry() {
        let mut s = Sculptor::new(2.0);
        s.push(VoxelBox::cube("a", "body", Vec3::new(1.0, 2.0, 3.0), 0.5));
        let model = s.finish();
        assert_eq!(model.boxes[0].position, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(model.boxes[0].scale, Vec3::ONE);
    }

    #[test]
    fn sculptor_drops_everything_at_zero_scale() {
        for scale in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let mut s = Sculptor::new(scale);
            s.push(VoxelBox::cube("a", "body", Vec3::ONE, 1.0));
            assert!(s.finish().is_empty(), "scale {scale}");
        }
    }

    #[test]
    fn ring_points_lie_on_circle() {
        for i in 0..8 {
            let p = ring_point(i, 8, 2.0, 1.0, 0.3);
            assert_relative_eq!(Vec3::new(p.x, 0.0, p.z).length(), 2.0, epsilon = 1e-5);
            assert_relative_eq!(p.y, 1.0);
        }
    }

    #[test]
    fn taper_and_mirror() {
        assert_relative_eq!(taper(1.0, 0.5, 1.0), 0.5);
        assert_eq!(taper(1.0, 2.0, 1.0), 0.0);
        assert_eq!(
            mirror(Side::Left, Vec3::new(1.0, 2.0, 3.0)),
            Vec3::new(-1.0, 2.0, 3.0)
        );
        assert_eq!(group(BodyPart::Head), "head");
        assert_eq!(segment(BodyPart::Leg, Side::Left, 2), "leg_left_2");
    }
}
