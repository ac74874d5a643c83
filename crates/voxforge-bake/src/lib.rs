//! Static light baking for Voxforge models.
//!
//! The baker evaluates a fixed analytic light rig (ambient, directional and
//! point lights) per box, applies an approximate ambient-occlusion term and
//! gamma correction, and folds the result into a literal color so that
//! runtimes can draw the model unlit.
//!
//! ```
//! use voxforge_bake::{bake_voxel_model, BakeOptions};
//! use voxforge_core::ModelBuilder;
//!
//! let mut builder = ModelBuilder::new();
//! builder.add("torso", "body", glam::Vec3::ZERO, glam::Vec3::ONE);
//! let options = BakeOptions::default();
//! let baked = bake_voxel_model(&builder.build(), "#4a4a5a", "#3a3a4a", "#00ffff", &options)
//!     .unwrap();
//! assert_eq!(baked.boxes.len(), 1);
//! ```

pub mod bake;
pub mod baked;
pub mod occlusion;
pub mod options;
pub mod rig;

pub use bake::{bake_voxel_model, base_color, Baker, VoxelLighting, EMISSIVE_GAIN};
pub use baked::{BakedVoxel, BakedVoxelModel, BakingInfo};
pub use occlusion::{count_occluders_brute, OcclusionIndex};
pub use options::{BakeOptions, OutputFormat};
pub use rig::{AmbientLight, DirectionalLight, LightingRig, PointLight, STANDARD_RIG_LABEL};
