//! Per-voxel light evaluation.

use glam::Vec3;
use rayon::prelude::*;
use tracing::{debug, instrument, warn};
use voxforge_core::{Color, Error, Palette, Result, VoxelBox, VoxelModel};

use crate::baked::{BakedVoxel, BakedVoxelModel, BakingInfo};
use crate::occlusion::OcclusionIndex;
use crate::options::BakeOptions;
use crate::rig::LightingRig;

/// Fraction of an emissive box's base color added on top of its lighting.
pub const EMISSIVE_GAIN: f32 = 0.5;

/// Every term of one voxel's lighting, for inspection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoxelLighting {
    /// Resolved color times multiplier; may exceed 1.
    pub base: Color,
    pub ambient: Vec3,
    pub directional: Vec3,
    pub point: Vec3,
    /// Higher boxes within the AO radius.
    pub occluders: usize,
    /// Multiplier applied to ambient, directional and point terms.
    pub occlusion: f32,
    pub emissive: Vec3,
    /// Lit color clamped to `[0, 1]`, before gamma.
    pub pre_gamma: Vec3,
    pub color: Color,
}

/// Evaluates a [`LightingRig`] over models.
#[derive(Clone, Debug)]
pub struct Baker {
    rig: LightingRig,
    options: BakeOptions,
}

impl Baker {
    pub fn new(rig: LightingRig, options: BakeOptions) -> Self {
        Self { rig, options }
    }

    pub fn rig(&self) -> &LightingRig {
        &self.rig
    }

    pub fn options(&self) -> &BakeOptions {
        &self.options
    }

    /// Light one voxel whose base color and occluder count are known.
    ///
    /// Options are assumed valid; [`Baker::bake`] checks them first.
    pub fn light(&self, voxel: &VoxelBox, base: Color, occluders: usize) -> VoxelLighting {
        let b = base.rgb();
        let ambient = b * self.rig.ambient.radiance();
        let directional = b * self.rig.directional_radiance();
        let point = b * self.rig.point_radiance(voxel.position);
        let occlusion = self.options.occlusion_factor(occluders);

        let emissive = if self.options.bake_emissive && voxel.glows() {
            b * voxel.emissive_intensity * EMISSIVE_GAIN
        } else {
            Vec3::ZERO
        };

        let lit = (ambient + directional + point) * occlusion + emissive;
        let pre_gamma = lit.clamp(Vec3::ZERO, Vec3::ONE);
        let color = pre_gamma
            .powf(self.options.gamma.recip())
            .clamp(Vec3::ZERO, Vec3::ONE);

        VoxelLighting {
            base,
            ambient,
            directional,
            point,
            occluders,
            occlusion,
            emissive,
            pre_gamma,
            color: Color(color),
        }
    }

    /// Light every non-degenerate box of `model`, in model order.
    pub fn lighting<'m>(
        &self,
        model: &'m VoxelModel,
        palette: &Palette,
    ) -> Result<Vec<(&'m VoxelBox, VoxelLighting)>> {
        self.options.validate()?;

        let boxes: Vec<&VoxelBox> = model
            .boxes
            .iter()
            .filter(|b| match b.degeneracy() {
                Some(reason) => {
                    warn!(box_id = %b.id, name = %b.name, %reason, "skipping degenerate box");
                    false
                }
                None => true,
            })
            .collect();

        let bases = boxes
            .iter()
            .map(|b| base_color(b, palette))
            .collect::<Result<Vec<_>>>()?;

        let index = self
            .options
            .include_ao
            .then(|| OcclusionIndex::new(boxes.iter().map(|b| b.position), self.options.ao_radius));

        let lit = boxes
            .par_iter()
            .zip(bases.par_iter())
            .enumerate()
            .map(|(i, (&voxel, &base))| {
                let occluders = index.as_ref().map_or(0, |idx| idx.count_occluders(i));
                (voxel, self.light(voxel, base, occluders))
            })
            .collect();
        Ok(lit)
    }

    /// Bake `model` into literal colors.
    #[instrument(level = "debug", skip_all, fields(boxes = model.len(), rig = %self.rig.label))]
    pub fn bake(&self, model: &VoxelModel, palette: &Palette) -> Result<BakedVoxelModel> {
        let lit = self.lighting(model, palette)?;
        let emissive = lit.iter().filter(|(_, l)| l.emissive != Vec3::ZERO).count();
        let boxes: Vec<BakedVoxel> = lit
            .into_iter()
            .map(|(voxel, l)| BakedVoxel::new(voxel.clone(), l.color, l.base))
            .collect();
        debug!(baked = boxes.len(), emissive, "baked model");

        Ok(BakedVoxelModel {
            boxes,
            groups: model.group_names().into_iter().map(str::to_string).collect(),
            baking_info: BakingInfo::now(self.rig.label.clone(), self.options.clone()),
        })
    }
}

impl Default for Baker {
    fn default() -> Self {
        Self::new(LightingRig::standard(), BakeOptions::default())
    }
}

/// Resolved color of `voxel` times its multiplier.
pub fn base_color(voxel: &VoxelBox, palette: &Palette) -> Result<Color> {
    let color = palette.resolve(&voxel.color).map_err(|e| Error::BoxColor {
        box_id: voxel.id,
        field: "customColor",
        source: Box::new(e),
    })?;
    Ok(Color(color.rgb() * voxel.color_multiplier))
}

/// Bake `model` under the standard rig with theme colors given as strings.
pub fn bake_voxel_model(
    model: &VoxelModel,
    primary: &str,
    secondary: &str,
    glow: &str,
    options: &BakeOptions,
) -> Result<BakedVoxelModel> {
    let palette = Palette::parse(primary, secondary, glow)?;
    Baker::new(LightingRig::standard(), options.clone()).bake(model, &palette)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use voxforge_core::ModelBuilder;

    fn palette() -> Palette {
        Palette::parse("#4a4a5a", "#3a3a4a", "#00ffff").unwrap()
    }

    #[test]
    fn lone_box_is_unoccluded() {
        let mut b = ModelBuilder::new();
        b.add("a", "body", Vec3::ZERO, Vec3::ONE);
        let model = b.build();
        let lit = Baker::default().lighting(&model, &palette()).unwrap();
        assert_eq!(lit[0].1.occluders, 0);
        assert_eq!(lit[0].1.occlusion, 1.0);
    }

    #[test]
    fn stacked_boxes_darken_the_lower_one() {
        let mut b = ModelBuilder::new();
        b.add("low", "body", Vec3::ZERO, Vec3::splat(0.2));
        b.add("high", "body", Vec3::new(0.0, 0.2, 0.0), Vec3::splat(0.2));
        let model = b.build();
        let lit = Baker::default().lighting(&model, &palette()).unwrap();
        assert_eq!(lit[0].1.occluders, 1);
        assert_relative_eq!(lit[0].1.occlusion, 0.9);
        assert_eq!(lit[1].1.occluders, 0);
    }

    #[test]
    fn distant_voxel_gets_no_point_light() {
        let baker = Baker::default();
        let near = VoxelBox::cube("near", "body", Vec3::ZERO, 1.0);
        let far = VoxelBox::cube("far", "body", Vec3::new(0.0, 3.0, 20.0), 1.0);
        let base = Color::new(0.5, 0.5, 0.5);
        let a = baker.light(&near, base, 0);
        let b = baker.light(&far, base, 0);
        assert_eq!(b.point, Vec3::ZERO);
        assert!(a.point.length() > 0.0);
        assert_eq!(a.ambient, b.ambient);
        assert_eq!(a.directional, b.directional);
    }

    #[test]
    fn unit_gamma_is_identity() {
        let baker = Baker::new(
            LightingRig::standard(),
            BakeOptions {
                gamma: 1.0,
                ..Default::default()
            },
        );
        let voxel = VoxelBox::cube("a", "body", Vec3::new(1.0, 0.5, -2.0), 1.0);
        let l = baker.light(&voxel, Color::new(0.3, 0.6, 0.9), 0);
        assert_relative_eq!(l.color.rgb().x, l.pre_gamma.x, epsilon = 1e-6);
        assert_relative_eq!(l.color.rgb().y, l.pre_gamma.y, epsilon = 1e-6);
        assert_relative_eq!(l.color.rgb().z, l.pre_gamma.z, epsilon = 1e-6);
    }

    #[test]
    fn emissive_term_uses_gain() {
        let baker = Baker::default();
        let voxel = VoxelBox::cube("eye", "head", Vec3::ZERO, 0.1)
            .glow()
            .emissive(2.0);
        let l = baker.light(&voxel, Color::new(0.0, 0.2, 0.2), 0);
        assert_relative_eq!(l.emissive.y, 0.2);
        assert_eq!(l.emissive.x, 0.0);
    }

    #[test]
    fn bad_custom_color_names_the_box() {
        let mut b = ModelBuilder::new();
        b.add("ok", "body", Vec3::ZERO, Vec3::ONE);
        b.push(VoxelBox::cube("bad", "body", Vec3::ONE, 1.0).custom("#zzzzzz"));
        let model = b.build();
        let err = Baker::default().bake(&model, &palette()).unwrap_err();
        assert!(
            matches!(err, Error::BoxColor { box_id, .. } if box_id.0 == 2),
            "{err:?}"
        );
    }

    #[test]
    fn degenerate_boxes_are_skipped() {
        let mut model = VoxelModel::new();
        model.groups.push("body".into());
        model.boxes.push(VoxelBox::cube("flat", "body", Vec3::ZERO, 0.0));
        model.boxes.push(VoxelBox::cube("ok", "body", Vec3::ZERO, 1.0));
        let baked = Baker::default().bake(&model, &palette()).unwrap();
        assert_eq!(baked.len(), 1);
        assert_eq!(baked.boxes[0].voxel.name, "ok");
    }

    #[test]
    fn far_boxes_and_tiny_radii_bake() {
        let mut b = ModelBuilder::new();
        b.add("far", "body", Vec3::new(0.0, 1e9, 0.0), Vec3::ONE);
        b.add("above", "body", Vec3::new(0.0, 1e9 + 128.0, 0.0), Vec3::ONE);
        let model = b.build();
        let baked = Baker::default().bake(&model, &palette()).unwrap();
        assert_eq!(baked.len(), 2);

        let tiny = Baker::new(
            LightingRig::standard(),
            BakeOptions {
                ao_radius: 1e-9,
                ..Default::default()
            },
        );
        let lit = tiny.lighting(&model, &palette()).unwrap();
        assert!(lit.iter().all(|(_, l)| l.occluders == 0));
    }

    #[test]
    fn invalid_gamma_is_rejected() {
        let options = BakeOptions {
            gamma: 0.0,
            ..Default::default()
        };
        let err = bake_voxel_model(&VoxelModel::new(), "#000", "#000", "#000", &options)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidOptions(_)));
    }
}
