//! Procedural voxel model generators for Voxforge.
//!
//! Each archetype is a pure function of its scale (plus dimensions for the
//! sized props) that builds a [`VoxelModel`](voxforge_core::VoxelModel) from
//! closed-form geometry. Group names follow the body-part naming convention
//! in [`voxforge_core::body_part`], so animation and pivot inference work on
//! every generated model.

pub mod bosses;
pub mod creatures;
pub mod humanoids;
pub mod machines;
pub mod nature;
pub mod props;
pub mod registry;
pub mod sculpt;

pub use registry::{Archetype, Category, UnknownArchetype};
