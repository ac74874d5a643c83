//! The editable asset file format.
//!
//! Assets store theme colors as strings and box colors as a `colorType` tag
//! plus an optional `customColor`. Box ids are not stored; importing assigns
//! fresh ids in file order.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument, warn};
use voxforge_core::{defaults, BoxId, Color, ColorRef, Palette, VoxelBox, VoxelModel};

use crate::error::{ExportError, Result};

const fn one() -> f32 {
    1.0
}

/// One box as stored in an asset file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetVoxel {
    pub name: String,
    pub position: [f32; 3],
    pub scale: [f32; 3],
    pub color_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_color: Option<String>,
    #[serde(default = "one")]
    pub color_multiplier: f32,
    #[serde(default)]
    pub emissive: bool,
    #[serde(default)]
    pub emissive_intensity: f32,
    pub group: String,
}

impl AssetVoxel {
    pub fn from_box(b: &VoxelBox) -> Self {
        Self {
            name: b.name.clone(),
            position: b.position.to_array(),
            scale: b.scale.to_array(),
            color_type: b.color.tag().to_string(),
            custom_color: b.color.custom_color().map(str::to_string),
            color_multiplier: b.color_multiplier,
            emissive: b.emissive,
            emissive_intensity: b.emissive_intensity,
            group: b.group.clone(),
        }
    }

    /// The color reference, or `None` for an unknown `colorType`.
    pub fn color_ref(&self) -> Option<ColorRef> {
        ColorRef::from_wire(&self.color_type, self.custom_color.as_deref())
    }

    fn check(&self) -> std::result::Result<ColorRef, String> {
        let position = Vec3::from_array(self.position);
        let scale = Vec3::from_array(self.scale);
        if !position.is_finite() {
            return Err(format!("voxel {:?} has a non-finite position", self.name));
        }
        if !scale.is_finite() || scale.min_element() <= 0.0 {
            return Err(format!("voxel {:?} has a non-positive scale", self.name));
        }
        if !self.color_multiplier.is_finite() || self.color_multiplier <= 0.0 {
            return Err(format!("voxel {:?} has a non-positive colorMultiplier", self.name));
        }
        if !self.emissive_intensity.is_finite() || self.emissive_intensity < 0.0 {
            return Err(format!("voxel {:?} has a negative emissiveIntensity", self.name));
        }
        let color = self
            .color_ref()
            .ok_or_else(|| {
                format!(
                    "voxel {:?} has unknown colorType {:?}",
                    self.name, self.color_type
                )
            })?;
        if let Some(custom) = color.custom_color() {
            Color::parse(custom).map_err(|e| format!("voxel {:?}: {e}", self.name))?;
        }
        Ok(color)
    }
}

/// A named, themed model as saved by the editor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoxelAsset {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    #[serde(default = "default_primary")]
    pub primary_color: String,
    #[serde(default = "default_secondary")]
    pub secondary_color: String,
    #[serde(default = "default_glow")]
    pub glow_color: String,
    pub voxels: Vec<AssetVoxel>,
    #[serde(default)]
    pub groups: Vec<String>,
}

fn default_primary() -> String {
    defaults::PRIMARY_COLOR.to_string()
}

fn default_secondary() -> String {
    defaults::SECONDARY_COLOR.to_string()
}

fn default_glow() -> String {
    defaults::GLOW_COLOR.to_string()
}

impl VoxelAsset {
    /// Wrap `model` with its theme colors.
    pub fn from_model(
        id: impl Into<String>,
        name: impl Into<String>,
        asset_type: impl Into<String>,
        palette: [&str; 3],
        model: &VoxelModel,
    ) -> Self {
        let [primary, secondary, glow] = palette;
        Self {
            id: id.into(),
            name: name.into(),
            asset_type: asset_type.into(),
            primary_color: primary.to_string(),
            secondary_color: secondary.to_string(),
            glow_color: glow.to_string(),
            voxels: model.boxes.iter().map(AssetVoxel::from_box).collect(),
            groups: model.groups.clone(),
        }
    }

    fn label(&self) -> &str {
        if self.id.is_empty() {
            &self.name
        } else {
            &self.id
        }
    }

    /// Parsed theme colors.
    pub fn palette(&self) -> Result<Palette> {
        Ok(Palette::parse(&self.primary_color, &self.secondary_color, &self.glow_color)?)
    }

    /// Check every field and list any box group missing from `groups`.
    pub fn validate(&mut self) -> Result<()> {
        self.palette()
            .map_err(|e| ExportError::invalid(self.label(), e.to_string()))?;
        for voxel in &self.voxels {
            voxel
                .check()
                .map_err(|reason| ExportError::invalid(self.label(), reason))?;
        }
        let mut seen = Vec::with_capacity(self.groups.len());
        for group in &self.groups {
            if seen.contains(group) {
                return Err(ExportError::invalid(
                    self.label(),
                    format!("duplicate group {group:?}"),
                ));
            }
            seen.push(group.clone());
        }
        for voxel in &self.voxels {
            if !self.groups.contains(&voxel.group) {
                warn!(asset = %self.label(), group = %voxel.group, "appending unlisted group");
                self.groups.push(voxel.group.clone());
            }
        }
        Ok(())
    }

    /// Build the model, numbering boxes from 1 in file order.
    pub fn to_model(&self) -> Result<VoxelModel> {
        let mut boxes = Vec::with_capacity(self.voxels.len());
        let mut groups = self.groups.clone();
        for (i, v) in self.voxels.iter().enumerate() {
            let color = v
                .check()
                .map_err(|reason| ExportError::invalid(self.label(), reason))?;
            if !groups.contains(&v.group) {
                groups.push(v.group.clone());
            }
            let mut voxel = VoxelBox::new(
                v.name.clone(),
                v.group.clone(),
                Vec3::from_array(v.position),
                Vec3::from_array(v.scale),
            );
            voxel.id = BoxId(i as u32 + 1);
            voxel.color = color;
            voxel.color_multiplier = v.color_multiplier;
            voxel.emissive = v.emissive;
            voxel.emissive_intensity = v.emissive_intensity;
            boxes.push(voxel);
        }
        let model = VoxelModel { boxes, groups };
        model.validate()?;
        Ok(model)
    }
}

/// Pretty JSON array of `assets`.
pub fn export_assets_json(assets: &[VoxelAsset]) -> Result<String> {
    Ok(serde_json::to_string_pretty(assets)?)
}

/// Pretty JSON object for one asset.
pub fn export_asset_json(asset: &VoxelAsset) -> Result<String> {
    Ok(serde_json::to_string_pretty(asset)?)
}

/// Parse a single asset object or an array of them, validating each.
///
/// Missing asset ids become `asset-<n>`; groups used by boxes but not
/// listed are appended.
#[instrument(level = "debug", skip_all, fields(bytes = json.len()))]
pub fn import_assets_json(json: &str) -> Result<Vec<VoxelAsset>> {
    let value: Value = serde_json::from_str(json)?;
    let mut assets: Vec<VoxelAsset> = match value {
        Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<std::result::Result<_, _>>()?,
        other => vec![serde_json::from_value(other)?],
    };
    for (i, asset) in assets.iter_mut().enumerate() {
        if asset.id.is_empty() {
            asset.id = format!("asset-{}", i + 1);
        }
        asset.validate()?;
    }
    debug!(assets = assets.len(), "imported assets");
    Ok(assets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxforge_core::ModelBuilder;

    fn model() -> VoxelModel {
        let mut b = ModelBuilder::new();
        b.push(
            VoxelBox::new(
                "torso",
                "body",
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(1.0, 0.5, 0.5),
            )
            .secondary(),
        );
        b.push(
            VoxelBox::cube("eye", "head", Vec3::new(0.1, 1.6, 0.3), 0.1)
                .glow()
                .tint(2.5)
                .emissive(1.5),
        );
        b.push(
            VoxelBox::cube("gem", "head", Vec3::new(0.0, 1.8, 0.0), 0.1)
                .custom("hsl(200, 80%, 50%)"),
        );
        b.build()
    }

    fn asset() -> VoxelAsset {
        VoxelAsset::from_model("a1", "Thing", "enemy", ["#4a4a5a", "#3a3a4a", "#00ffff"], &model())
    }

    #[test]
    fn wire_names() {
        let json: Value = serde_json::from_str(&export_asset_json(&asset()).unwrap()).unwrap();
        assert_eq!(json["type"], "enemy");
        assert_eq!(json["primaryColor"], "#4a4a5a");
        assert_eq!(json["voxels"][0]["colorType"], "secondary");
        assert!(json["voxels"][0].get("customColor").is_none());
        assert_eq!(json["voxels"][2]["customColor"], "hsl(200, 80%, 50%)");
        assert_eq!(json["voxels"][1]["emissiveIntensity"], 1.5);
    }

    #[test]
    fn accepts_object_or_array() {
        let one = import_assets_json(&export_asset_json(&asset()).unwrap()).unwrap();
        let many = import_assets_json(&export_assets_json(&[asset(), asset()]).unwrap()).unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(many.len(), 2);
    }

    #[test]
    fn custom_without_color_defaults_to_gray() {
        let json = r#"{"name":"x","type":"prop","voxels":[
            {"name":"b","position":[0,0,0],"scale":[1,1,1],"colorType":"custom","group":"body"}
        ]}"#;
        let assets = import_assets_json(json).unwrap();
        assert_eq!(assets[0].id, "asset-1");
        assert_eq!(assets[0].groups, vec!["body".to_string()]);
        let model = assets[0].to_model().unwrap();
        assert_eq!(model.boxes[0].color, ColorRef::Custom("#888888".into()));
        assert_eq!(model.boxes[0].color_multiplier, 1.0);
    }

    #[test]
    fn rejects_bad_voxels() {
        let bad = [
            r#"{"name":"b","position":[0,0,0],"scale":[0,1,1],"colorType":"primary","group":"body"}"#,
            r#"{"name":"b","position":[0,0,0],"scale":[1,1,1],"colorType":"chartreuse","group":"body"}"#,
            r##"{"name":"b","position":[0,0,0],"scale":[1,1,1],"colorType":"custom","customColor":"#12","group":"body"}"##,
            r#"{"name":"b","position":[0,0,0],"scale":[1,1,1],"colorType":"primary","colorMultiplier":-1,"group":"body"}"#,
            r#"{"name":"b","position":[0,0,0],"scale":[1,1,1],"colorType":"primary","emissiveIntensity":-2,"group":"body"}"#,
        ];
        for voxel in bad {
            let json = format!(r#"{{"name":"x","type":"prop","voxels":[{voxel}]}}"#);
            assert!(
                matches!(
                    import_assets_json(&json),
                    Err(ExportError::InvalidAsset { .. })
                ),
                "{voxel}"
            );
        }
        assert!(matches!(import_assets_json("{not json"), Err(ExportError::Json(_))));
        assert!(matches!(
            import_assets_json(r#"{"name":"x"}"#),
            Err(ExportError::Json(_))
        ));
    }

    #[test]
    fn rejects_bad_theme_color() {
        let mut a = asset();
        a.glow_color = "glowing".into();
        let json = export_asset_json(&a).unwrap();
        assert!(matches!(
            import_assets_json(&json),
            Err(ExportError::InvalidAsset { .. })
        ));
    }
}
