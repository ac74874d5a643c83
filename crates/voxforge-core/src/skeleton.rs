//! Joint pivots inferred from group names and box placement.

use glam::Vec3;
use serde::Serialize;

use crate::body_part::{classify_group, BodyPart, PartClass};
use crate::model::VoxelModel;

/// One animatable group and the point it rotates around.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Joint {
    pub group: String,
    pub class: PartClass,
    pub pivot: [f32; 3],
}

/// Joints of every group in a model, in group order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Skeleton {
    pub joints: Vec<Joint>,
}

impl Skeleton {
    /// Infer one joint per group that has at least one box.
    pub fn from_model(model: &VoxelModel) -> Self {
        let joints = model
            .group_names()
            .into_iter()
            .filter_map(|group| {
                let pivot = infer_pivot(model, group)?;
                Some(Joint {
                    group: group.to_string(),
                    class: classify_group(group),
                    pivot: pivot.to_array(),
                })
            })
            .collect();
        Self { joints }
    }

    /// Look up a joint by group name.
    pub fn joint(&self, group: &str) -> Option<&Joint> {
        self.joints.iter().find(|j| j.group == group)
    }
}

/// Pivot of `group`:
/// - limbs hang from the top-center of their bounds,
/// - heads and necks sit on the bottom-center,
/// - tails and wings attach at the bound point nearest the model center,
/// - anything else rotates about its center.
pub fn infer_pivot(model: &VoxelModel, group: &str) -> Option<Vec3> {
    let bounds = model.group_bounds(group)?;
    let class = classify_group(group);
    let pivot = match class.part {
        part if part.is_limb() => bounds.top_center(),
        BodyPart::Head | BodyPart::Neck => bounds.bottom_center(),
        BodyPart::Tail | BodyPart::Wing => {
            let anchor = model.bounds().map_or(Vec3::ZERO, |b| b.center());
            bounds.closest_point(anchor)
        }
        _ => bounds.center(),
    };
    Some(pivot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelBuilder;
    use approx::assert_relative_eq;

    fn creature() -> VoxelModel {
        let mut b = ModelBuilder::new();
        b.add(
            "torso",
            "body",
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 0.6, 2.0),
        );
        b.add("head", "head", Vec3::new(0.0, 1.6, 1.2), Vec3::splat(0.5));
        b.add(
            "leg",
            "leg_left_0",
            Vec3::new(-0.4, 0.4, 0.6),
            Vec3::new(0.2, 0.8, 0.2),
        );
        b.add(
            "tail",
            "tail_0",
            Vec3::new(0.0, 1.0, -1.5),
            Vec3::new(0.2, 0.2, 1.0),
        );
        b.build()
    }

    #[test]
    fn limb_pivot_is_top_center() {
        let model = creature();
        let pivot = infer_pivot(&model, "leg_left_0").unwrap();
        assert_relative_eq!(pivot.x, -0.4);
        assert_relative_eq!(pivot.y, 0.8);
        assert_relative_eq!(pivot.z, 0.6);
    }

    #[test]
    fn head_pivot_is_bottom_center() {
        let model = creature();
        let pivot = infer_pivot(&model, "head").unwrap();
        assert_relative_eq!(pivot.y, 1.35);
    }

    #[test]
    fn tail_pivot_faces_body() {
        let model = creature();
        let pivot = infer_pivot(&model, "tail_0").unwrap();
        // tail spans z in [-2.0, -1.0]; model center is in front of it
        assert_relative_eq!(pivot.z, -1.0);
    }

    #[test]
    fn skeleton_lists_every_group() {
        let model = creature();
        let skeleton = Skeleton::from_model(&model);
        assert_eq!(skeleton.joints.len(), model.groups.len());
        assert_eq!(skeleton.joint("head").unwrap().class.part, BodyPart::Head);
        assert!(infer_pivot(&model, "wing_left").is_none());
    }
}
