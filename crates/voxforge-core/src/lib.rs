//! Core types, colors and group classification for Voxforge.
//!
//! This crate provides the foundational types shared by the generators,
//! the light baker and the exporters:
//! - Voxel boxes, models and the call-scoped model builder
//! - Color parsing and theme-color resolution
//! - Group-name classification and joint pivot inference
//! - Error types

pub mod body_part;
pub mod color;
pub mod error;
pub mod math;
pub mod model;
pub mod skeleton;
pub mod voxel;

pub use body_part::{classify_group, part_group, BodyPart, PartClass, Side};
pub use color::{Color, Palette, DEFAULT_CUSTOM_COLOR};
pub use error::{Error, Result};
pub use math::Aabb;
pub use model::{ModelBuilder, VoxelModel};
pub use skeleton::{infer_pivot, Joint, Skeleton};
pub use voxel::{BoxId, ColorRef, VoxelBox};

/// Default theme colors used when an asset does not specify its own.
pub mod defaults {
    /// Primary theme color.
    pub const PRIMARY_COLOR: &str = "#4a4a5a";
    /// Secondary theme color.
    pub const SECONDARY_COLOR: &str = "#3a3a4a";
    /// Glow theme color.
    pub const GLOW_COLOR: &str = "#00ffff";
}
