//! JSON documents for baked models.

use bytemuck::{Pod, Zeroable};
use serde::Serialize;
use tracing::{debug, instrument};
use voxforge_bake::{BakedVoxel, BakedVoxelModel, BakingInfo};
use voxforge_core::BoxId;

use crate::error::Result;

/// Version written into every exported document.
pub const FORMAT_VERSION: &str = "1.0";

/// Column names of a vertex-color voxel row.
pub const VERTEX_LAYOUT: [&str; 10] = ["x", "y", "z", "sx", "sy", "sz", "r", "g", "b", "emissive"];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BakedBoxRecord<'a> {
    id: BoxId,
    name: &'a str,
    position: [f32; 3],
    scale: [f32; 3],
    group: &'a str,
    baked_color: &'a str,
    baked_color_rgb: [u8; 3],
    original_color: &'a str,
    emissive: bool,
    emissive_intensity: f32,
}

impl<'a> From<&'a BakedVoxel> for BakedBoxRecord<'a> {
    fn from(b: &'a BakedVoxel) -> Self {
        Self {
            id: b.voxel.id,
            name: &b.voxel.name,
            position: b.voxel.position.to_array(),
            scale: b.voxel.scale.to_array(),
            group: &b.voxel.group,
            baked_color: &b.baked_color,
            baked_color_rgb: b.baked_color_rgb,
            original_color: &b.original_color,
            emissive: b.voxel.emissive,
            emissive_intensity: b.voxel.emissive_intensity,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BakedModelDocument<'a> {
    version: &'static str,
    #[serde(rename = "type")]
    kind: &'static str,
    baking_info: &'a BakingInfo,
    groups: Vec<&'a str>,
    boxes: Vec<BakedBoxRecord<'a>>,
}

/// `{version, type: "baked-voxel-model", bakingInfo, groups, boxes}`.
#[instrument(level = "debug", skip_all, fields(boxes = baked.len()))]
pub fn export_baked_model_json(baked: &BakedVoxelModel) -> Result<String> {
    let doc = BakedModelDocument {
        version: FORMAT_VERSION,
        kind: "baked-voxel-model",
        baking_info: &baked.baking_info,
        groups: baked.group_names(),
        boxes: baked.boxes.iter().map(BakedBoxRecord::from).collect(),
    };
    let json = serde_json::to_string_pretty(&doc)?;
    debug!(bytes = json.len(), "exported baked model");
    Ok(json)
}

/// One voxel as ten packed floats, ready for a GPU instance buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct VertexVoxel {
    pub position: [f32; 3],
    pub scale: [f32; 3],
    /// Baked color, normalized.
    pub color: [f32; 3],
    /// Emissive intensity, or 0.
    pub emissive: f32,
}

impl VertexVoxel {
    pub fn from_baked(b: &BakedVoxel) -> Self {
        Self {
            position: b.voxel.position.to_array(),
            scale: b.voxel.scale.to_array(),
            color: b.normalized(),
            emissive: if b.voxel.glows() { b.voxel.emissive_intensity } else { 0.0 },
        }
    }

    /// The row as written in JSON, in [`VERTEX_LAYOUT`] order.
    pub fn to_row(self) -> [f32; 10] {
        bytemuck::cast(self)
    }
}

/// Instance rows of every baked box, in model order.
pub fn vertex_buffer(baked: &BakedVoxelModel) -> Vec<VertexVoxel> {
    baked.boxes.iter().map(VertexVoxel::from_baked).collect()
}

/// [`vertex_buffer`] as raw native-endian bytes.
pub fn vertex_bytes(baked: &BakedVoxelModel) -> Vec<u8> {
    bytemuck::cast_slice(&vertex_buffer(baked)).to_vec()
}

#[derive(Serialize)]
struct VertexGroup<'a> {
    name: &'a str,
    /// Row indices of the group's voxels.
    voxels: Vec<usize>,
}

#[derive(Serialize)]
struct VertexColorDocument<'a> {
    version: &'static str,
    #[serde(rename = "type")]
    kind: &'static str,
    layout: [&'static str; 10],
    groups: Vec<VertexGroup<'a>>,
    voxels: Vec<[f32; 10]>,
}

/// `{version, type: "vertex-color-voxels", layout, groups, voxels}` with one
/// ten-float row per voxel.
#[instrument(level = "debug", skip_all, fields(boxes = baked.len()))]
pub fn export_vertex_color_format(baked: &BakedVoxelModel) -> Result<String> {
    let groups = baked
        .group_names()
        .into_iter()
        .map(|name| VertexGroup {
            name,
            voxels: baked
                .boxes
                .iter()
                .enumerate()
                .filter(|(_, b)| b.voxel.group == *name)
                .map(|(i, _)| i)
                .collect(),
        })
        .collect();
    let doc = VertexColorDocument {
        version: FORMAT_VERSION,
        kind: "vertex-color-voxels",
        layout: VERTEX_LAYOUT,
        groups,
        voxels: vertex_buffer(baked)
            .into_iter()
            .map(VertexVoxel::to_row)
            .collect(),
    };
    let json = serde_json::to_string(&doc)?;
    debug!(bytes = json.len(), "exported vertex colors");
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use serde_json::Value;
    use voxforge_bake::{bake_voxel_model, BakeOptions};
    use voxforge_core::{ModelBuilder, VoxelBox};

    fn baked() -> BakedVoxelModel {
        let mut b = ModelBuilder::new();
        b.push(VoxelBox::new(
            "torso",
            "body",
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 0.5, 0.5),
        ));
        b.push(
            VoxelBox::cube("eye", "head", Vec3::new(0.1, 1.6, 0.3), 0.1)
                .glow()
                .emissive(1.5),
        );
        bake_voxel_model(
            &b.build(),
            "#4a4a5a",
            "#3a3a4a",
            "#00ffff",
            &BakeOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn baked_document_shape() {
        let model = baked();
        let doc: Value = serde_json::from_str(&export_baked_model_json(&model).unwrap()).unwrap();
        assert_eq!(doc["type"], "baked-voxel-model");
        assert_eq!(doc["version"], FORMAT_VERSION);
        assert_eq!(doc["bakingInfo"]["lightingSetup"], "standard-4-light");
        assert_eq!(
            doc["bakingInfo"]["options"]["gamma"]
                .as_f64()
                .map(|g| (g * 10.0).round()),
            Some(22.0)
        );
        assert_eq!(doc["groups"], serde_json::json!(["body", "head"]));
        let first = &doc["boxes"][0];
        assert_eq!(first["id"], 1);
        assert_eq!(first["bakedColor"], model.boxes[0].baked_color.as_str());
        assert_eq!(first["position"], serde_json::json!([0.0, 1.0, 0.0]));
        assert_eq!(doc["boxes"][1]["emissive"], true);
    }

    #[test]
    fn vertex_rows_are_normalized() {
        let model = baked();
        let doc: Value = serde_json::from_str(&export_vertex_color_format(&model).unwrap())
            .unwrap();
        assert_eq!(doc["type"], "vertex-color-voxels");
        assert_eq!(doc["layout"].as_array().map(Vec::len), Some(10));
        let rows = doc["voxels"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        for row in rows {
            let row = row.as_array().unwrap();
            assert_eq!(row.len(), 10);
            for c in &row[6..9] {
                let c = c.as_f64().unwrap();
                assert!((0.0..=1.0).contains(&c));
            }
        }
        assert_eq!(rows[0][9], 0.0);
        assert_eq!(rows[1][9], 1.5);
        assert_eq!(doc["groups"][1]["voxels"], serde_json::json!([1]));
    }

    #[test]
    fn unlisted_groups_keep_their_rows() {
        let mut model = baked();
        model.groups.truncate(1);
        let doc: Value = serde_json::from_str(&export_vertex_color_format(&model).unwrap())
            .unwrap();
        assert_eq!(doc["groups"][1]["name"], "head");
        assert_eq!(doc["groups"][1]["voxels"], serde_json::json!([1]));
        let doc: Value = serde_json::from_str(&export_baked_model_json(&model).unwrap()).unwrap();
        assert_eq!(doc["groups"], serde_json::json!(["body", "head"]));
    }

    #[test]
    fn vertex_bytes_pack_ten_floats() {
        let model = baked();
        let bytes = vertex_bytes(&model);
        assert_eq!(bytes.len(), model.len() * 10 * 4);
        let second: VertexVoxel = bytemuck::pod_read_unaligned(&bytes[40..80]);
        assert_eq!(second.position, [0.1, 1.6, 0.3]);
        assert_eq!(second.emissive, 1.5);
    }
}
