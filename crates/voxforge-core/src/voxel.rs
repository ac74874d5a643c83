//! Voxel box types.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::color::DEFAULT_CUSTOM_COLOR;

/// Identifier of a box, unique within one model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoxId(pub u32);

impl fmt::Display for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "voxel_{}", self.0)
    }
}

/// Indirect color reference, resolved against an asset's theme colors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorRef {
    /// The asset's primary theme color.
    #[default]
    Primary,
    /// The asset's secondary theme color.
    Secondary,
    /// The asset's glow theme color.
    Glow,
    /// A literal color string in any syntax [`crate::Color::parse`] accepts.
    Custom(String),
}

impl ColorRef {
    /// Wire tag (`primary`, `secondary`, `glow` or `custom`).
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Glow => "glow",
            Self::Custom(_) => "custom",
        }
    }

    /// The literal color string of a custom reference.
    pub fn custom_color(&self) -> Option<&str> {
        match self {
            Self::Custom(value) => Some(value),
            _ => None,
        }
    }

    /// Rebuild a reference from its wire tag and optional custom color.
    ///
    /// A `custom` tag without a color falls back to neutral gray. Returns
    /// `None` for unknown tags.
    pub fn from_wire(tag: &str, custom: Option<&str>) -> Option<Self> {
        match tag {
            "primary" => Some(Self::Primary),
            "secondary" => Some(Self::Secondary),
            "glow" => Some(Self::Glow),
            "custom" => Some(Self::Custom(
                custom.unwrap_or(DEFAULT_CUSTOM_COLOR).to_string(),
            )),
            _ => None,
        }
    }
}

/// One axis-aligned box of a model.
#[derive(Clone, Debug, PartialEq)]
pub struct VoxelBox {
    /// Unique id within the owning model.
    pub id: BoxId,
    /// Human-readable label.
    pub name: String,
    /// Box center in model-local units.
    pub position: Vec3,
    /// Full width, height and depth.
    pub scale: Vec3,
    /// Color reference.
    pub color: ColorRef,
    /// Multiplier applied to the resolved color.
    pub color_multiplier: f32,
    /// Whether the box glows.
    pub emissive: bool,
    /// Glow strength, meaningful only when `emissive` is set.
    pub emissive_intensity: f32,
    /// Anatomical or structural group.
    pub group: String,
}

impl VoxelBox {
    /// Create a primary-colored, non-emissive box. The id is assigned when
    /// the box is pushed into a [`crate::ModelBuilder`].
    pub fn new(
        name: impl Into<String>,
        group: impl Into<String>,
        position: Vec3,
        scale: Vec3,
    ) -> Self {
        Self {
            id: BoxId::default(),
            name: name.into(),
            position,
            scale,
            color: ColorRef::Primary,
            color_multiplier: 1.0,
            emissive: false,
            emissive_intensity: 0.0,
            group: group.into(),
        }
    }

    /// Create a cube with equal extents.
    pub fn cube(
        name: impl Into<String>,
        group: impl Into<String>,
        position: Vec3,
        size: f32,
    ) -> Self {
        Self::new(name, group, position, Vec3::splat(size))
    }

    /// Use the secondary theme color.
    #[must_use]
    pub fn secondary(mut self) -> Self {
        self.color = ColorRef::Secondary;
        self
    }

    /// Use the glow theme color.
    #[must_use]
    pub fn glow(mut self) -> Self {
        self.color = ColorRef::Glow;
        self
    }

    /// Use a literal color string.
    #[must_use]
    pub fn custom(mut self, color: impl Into<String>) -> Self {
        self.color = ColorRef::Custom(color.into());
        self
    }

    /// Set the color multiplier.
    #[must_use]
    pub fn tint(mut self, multiplier: f32) -> Self {
        self.color_multiplier = multiplier;
        self
    }

    /// Mark the box emissive with the given intensity.
    #[must_use]
    pub fn emissive(mut self, intensity: f32) -> Self {
        self.emissive = true;
        self.emissive_intensity = intensity;
        self
    }

    /// Whether the box has a non-finite position or a non-positive or
    /// non-finite extent.
    pub fn is_degenerate(&self) -> bool {
        self.degeneracy().is_some()
    }

    /// Describe why the box is degenerate, if it is.
    pub fn degeneracy(&self) -> Option<String> {
        if !self.position.is_finite() {
            return Some(format!("non-finite position {:?}", self.position));
        }
        if !self.scale.is_finite() || self.scale.min_element() <= 0.0 {
            return Some(format!("non-positive scale {:?}", self.scale));
        }
        None
    }

    /// Whether the box contributes glow.
    #[inline]
    pub fn glows(&self) -> bool {
        self.emissive && self.emissive_intensity > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_tags_roundtrip() {
        for color in [
            ColorRef::Primary,
            ColorRef::Secondary,
            ColorRef::Glow,
            ColorRef::Custom("hsl(10, 50%, 50%)".into()),
        ] {
            let rebuilt = ColorRef::from_wire(color.tag(), color.custom_color()).unwrap();
            assert_eq!(rebuilt, color);
        }
        assert!(ColorRef::from_wire("shiny", None).is_none());
    }

    #[test]
    fn custom_without_color_defaults_to_gray() {
        assert_eq!(
            ColorRef::from_wire("custom", None),
            Some(ColorRef::Custom(DEFAULT_CUSTOM_COLOR.into()))
        );
    }

    #[test]
    fn builder_methods_set_fields() {
        let b = VoxelBox::cube("eye", "head", Vec3::ZERO, 0.1)
            .custom("#ff0000")
            .tint(2.5)
            .emissive(1.5);
        assert_eq!(b.color, ColorRef::Custom("#ff0000".into()));
        assert!(b.glows());
        assert_eq!(b.color_multiplier, 2.5);
    }

    #[test]
    fn degenerate_boxes_detected() {
        assert!(!VoxelBox::cube("a", "body", Vec3::ZERO, 1.0).is_degenerate());
        assert!(VoxelBox::cube("a", "body", Vec3::ZERO, 0.0).is_degenerate());
        assert!(VoxelBox::new("a", "body", Vec3::ZERO, Vec3::new(1.0, -1.0, 1.0)).is_degenerate());
        assert!(VoxelBox::cube("a", "body", Vec3::new(f32::NAN, 0.0, 0.0), 1.0).is_degenerate());
        assert!(VoxelBox::cube("a", "body", Vec3::ZERO, f32::INFINITY).is_degenerate());
    }
}
