//! The light rig evaluated by the baker.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Label of [`LightingRig::standard`], recorded in baking info.
pub const STANDARD_RIG_LABEL: &str = "standard-4-light";

/// Outward normals of the six box faces.
pub const AXIS_NORMALS: [Vec3; 6] = [
    Vec3::X,
    Vec3::NEG_X,
    Vec3::Y,
    Vec3::NEG_Y,
    Vec3::Z,
    Vec3::NEG_Z,
];

/// Average of `max(0, n · dir)` over the six face normals.
///
/// `dir` is expected to be unit length; a zero vector yields zero.
#[inline]
pub fn face_factor(dir: Vec3) -> f32 {
    AXIS_NORMALS.iter().map(|n| n.dot(dir).max(0.0)).sum::<f32>() / AXIS_NORMALS.len() as f32
}

/// Uniform light reaching every face.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AmbientLight {
    pub color: Vec3,
    pub intensity: f32,
}

impl AmbientLight {
    pub fn radiance(&self) -> Vec3 {
        self.color * self.intensity
    }
}

/// Light arriving from a fixed direction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    /// Unit vector pointing from the scene toward the light.
    pub direction: Vec3,
    pub color: Vec3,
    pub intensity: f32,
}

impl DirectionalLight {
    /// Light pointing along `direction`, normalized.
    pub fn new(direction: Vec3, color: Vec3, intensity: f32) -> Self {
        Self {
            direction: direction.normalize_or_zero(),
            color,
            intensity,
        }
    }

    /// Radiance added to every box, independent of position.
    pub fn radiance(&self) -> Vec3 {
        self.color * self.intensity * face_factor(self.direction)
    }
}

/// Light radiating from a position with a finite range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
    /// Exponent of the range falloff.
    pub decay: f32,
    /// Distance beyond which the light contributes nothing.
    pub range: f32,
}

impl PointLight {
    /// Falloff `(1 - d / range)^decay`, zero beyond `range`.
    pub fn attenuation(&self, distance: f32) -> f32 {
        if distance > self.range || self.range <= 0.0 {
            return 0.0;
        }
        (1.0 - distance / self.range).max(0.0).powf(self.decay)
    }

    /// Radiance reaching a box centered at `position`.
    pub fn radiance_at(&self, position: Vec3) -> Vec3 {
        let to_light = self.position - position;
        let distance = to_light.length();
        let attenuation = self.attenuation(distance);
        if attenuation == 0.0 {
            return Vec3::ZERO;
        }
        self.color * self.intensity * attenuation * face_factor(to_light.normalize_or_zero())
    }
}

/// A full light setup: one ambient term plus any number of directional and
/// point lights.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingRig {
    pub label: String,
    pub ambient: AmbientLight,
    pub directional: Vec<DirectionalLight>,
    pub points: Vec<PointLight>,
}

impl LightingRig {
    /// The fixed four-light studio setup: white ambient, a key light from
    /// above, a dim fill from the opposite side and a cyan accent point.
    pub fn standard() -> Self {
        Self {
            label: STANDARD_RIG_LABEL.to_string(),
            ambient: AmbientLight {
                color: Vec3::ONE,
                intensity: 0.4,
            },
            directional: vec![
                DirectionalLight::new(Vec3::new(5.0, 10.0, 5.0), Vec3::ONE, 0.8),
                DirectionalLight::new(Vec3::new(-5.0, 5.0, -5.0), Vec3::ONE, 0.3),
            ],
            points: vec![PointLight {
                position: Vec3::new(0.0, 3.0, 0.0),
                color: Vec3::new(0.0, 1.0, 1.0),
                intensity: 0.3,
                decay: 2.0,
                range: 10.0,
            }],
        }
    }

    /// Summed radiance of the directional lights.
    pub fn directional_radiance(&self) -> Vec3 {
        self.directional.iter().map(DirectionalLight::radiance).sum()
    }

    /// Summed radiance of the point lights at `position`.
    pub fn point_radiance(&self, position: Vec3) -> Vec3 {
        self.points.iter().map(|p| p.radiance_at(position)).sum()
    }
}

impl Default for LightingRig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn face_factor_of_axis_direction() {
        assert_relative_eq!(face_factor(Vec3::Y), 1.0 / 6.0);
        assert_eq!(face_factor(Vec3::ZERO), 0.0);
        let diagonal = Vec3::ONE.normalize();
        assert_relative_eq!(face_factor(diagonal), 3.0_f32.sqrt() / 6.0, epsilon = 1e-6);
    }

    #[test]
    fn standard_rig_constants() {
        let rig = LightingRig::standard();
        assert_eq!(rig.label, "standard-4-light");
        assert_relative_eq!(rig.directional[0].direction.length(), 1.0, epsilon = 1e-6);
        let key = Vec3::new(5.0, 10.0, 5.0).normalize();
        assert_relative_eq!(rig.directional[0].direction.y, key.y);
        // key: (x + y + z) / 6 of the normalized direction
        let expected = 0.8 * (key.x + key.y + key.z) / 6.0;
        assert_relative_eq!(rig.directional[0].radiance().x, expected, epsilon = 1e-6);
    }

    #[test]
    fn point_light_range() {
        let light = LightingRig::standard().points[0];
        assert_eq!(light.attenuation(10.5), 0.0);
        assert_relative_eq!(light.attenuation(5.0), 0.25);
        assert_eq!(light.radiance_at(Vec3::new(0.0, 3.0, 20.0)), Vec3::ZERO);
        assert_eq!(light.radiance_at(light.position), Vec3::ZERO);
        let below = light.radiance_at(Vec3::ZERO);
        assert_eq!(below.x, 0.0);
        assert!(below.y > 0.0 && below.z > 0.0);
    }
}
