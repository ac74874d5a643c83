//! Exporters for Voxforge models.
//!
//! - [`generate_game_code`]: three.js module lit at runtime from a theme
//! - [`generate_baked_game_code`]: three.js module with pre-lit colors
//! - [`export_baked_model_json`] and [`export_vertex_color_format`]: JSON
//!   documents for baked models
//! - [`VoxelAsset`]: the editable asset file, with import validation

pub mod asset;
pub mod baked_code;
pub mod error;
pub mod game_code;
pub mod json;
mod script;

pub use asset::{export_asset_json, export_assets_json, import_assets_json, AssetVoxel, VoxelAsset};
pub use baked_code::{generate_baked_game_code, DEFAULT_ENTITY_NAME};
pub use error::{ExportError, Result};
pub use game_code::generate_game_code;
pub use json::{
    export_baked_model_json, export_vertex_color_format, vertex_buffer, vertex_bytes, VertexVoxel,
    FORMAT_VERSION, VERTEX_LAYOUT,
};
