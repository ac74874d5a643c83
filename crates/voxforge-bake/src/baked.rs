//! Baked output types.

use std::time::{SystemTime, UNIX_EPOCH};

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use voxforge_core::{Color, VoxelBox};

use crate::options::{BakeOptions, OutputFormat};

/// A box with its lighting folded into a literal color.
#[derive(Clone, Debug, PartialEq)]
pub struct BakedVoxel {
    /// The source box, recolored to `Custom(baked_color)` with a unit
    /// multiplier. Emissive flags are kept for exporters.
    pub voxel: VoxelBox,
    /// `#rrggbb`, lower-case.
    pub baked_color: String,
    pub baked_color_rgb: [u8; 3],
    /// Hex of the resolved base color before lighting.
    pub original_color: String,
}

impl BakedVoxel {
    pub(crate) fn new(mut voxel: VoxelBox, baked: Color, base: Color) -> Self {
        let baked_color = baked.to_hex();
        voxel = voxel.custom(baked_color.clone()).tint(1.0);
        Self {
            voxel,
            baked_color,
            baked_color_rgb: baked.to_rgb8(),
            original_color: base.to_hex(),
        }
    }

    /// Channels normalized to `[0, 1]`.
    pub fn normalized(&self) -> [f32; 3] {
        self.baked_color_rgb.map(|c| f32::from(c) / 255.0)
    }

    /// The baked color written in `format`.
    pub fn formatted(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Hex => self.baked_color.clone(),
            OutputFormat::Rgb => {
                let [r, g, b] = self.baked_color_rgb;
                format!("rgb({r}, {g}, {b})")
            }
            OutputFormat::Normalized => {
                let [r, g, b] = self.normalized();
                format!("{r:.4}, {g:.4}, {b:.4}")
            }
        }
    }
}

/// Provenance recorded with every bake.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BakingInfo {
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
    pub lighting_setup: String,
    pub options: BakeOptions,
}

impl BakingInfo {
    pub fn now(lighting_setup: impl Into<String>, options: BakeOptions) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX));
        Self {
            timestamp,
            lighting_setup: lighting_setup.into(),
            options,
        }
    }
}

/// A model whose boxes carry pre-lit colors.
#[derive(Clone, Debug, PartialEq)]
pub struct BakedVoxelModel {
    pub boxes: Vec<BakedVoxel>,
    pub groups: Vec<String>,
    pub baking_info: BakingInfo,
}

impl BakedVoxelModel {
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Baked boxes in `group`, in model order.
    pub fn boxes_in_group<'a>(
        &'a self,
        group: &'a str,
    ) -> impl Iterator<Item = &'a BakedVoxel> + 'a {
        self.boxes.iter().filter(move |b| b.voxel.group == group)
    }

    /// Listed groups, then groups only the boxes name, each once.
    pub fn group_names(&self) -> Vec<&str> {
        let mut seen = HashSet::with_capacity(self.groups.len());
        self.groups
            .iter()
            .chain(self.boxes.iter().map(|b| &b.voxel.group))
            .map(String::as_str)
            .filter(|g| seen.insert(*g))
            .collect()
    }

    /// The plain model, with baked colors as custom colors.
    pub fn to_model(&self) -> voxforge_core::VoxelModel {
        voxforge_core::VoxelModel {
            boxes: self.boxes.iter().map(|b| b.voxel.clone()).collect(),
            groups: self.group_names().into_iter().map(str::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use voxforge_core::ColorRef;

    #[test]
    fn baked_voxel_is_recolored() {
        let source = VoxelBox::cube("eye", "head", Vec3::ZERO, 0.1)
            .glow()
            .tint(2.5)
            .emissive(1.0);
        let baked = BakedVoxel::new(source, Color::new(1.0, 0.5, 0.0), Color::new(0.0, 2.5, 2.5));
        assert_eq!(baked.baked_color, "#ff8000");
        assert_eq!(baked.baked_color_rgb, [255, 128, 0]);
        assert_eq!(baked.original_color, "#00ffff");
        assert_eq!(baked.voxel.color, ColorRef::Custom("#ff8000".into()));
        assert_eq!(baked.voxel.color_multiplier, 1.0);
        assert!(baked.voxel.emissive);
    }

    #[test]
    fn formats() {
        let baked = BakedVoxel::new(
            VoxelBox::cube("a", "body", Vec3::ZERO, 1.0),
            Color::new(1.0, 0.0, 0.0),
            Color::WHITE,
        );
        assert_eq!(baked.formatted(OutputFormat::Hex), "#ff0000");
        assert_eq!(baked.formatted(OutputFormat::Rgb), "rgb(255, 0, 0)");
        assert_eq!(
            baked.formatted(OutputFormat::Normalized),
            "1.0000, 0.0000, 0.0000"
        );
    }
}
