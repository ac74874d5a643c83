//! Voxel models and the call-scoped model builder.

use glam::Vec3;
use hashbrown::HashSet;
use tracing::trace;

use crate::error::{Error, Result};
use crate::math::Aabb;
use crate::voxel::{BoxId, VoxelBox};

/// A collection of boxes plus the list of groups they belong to.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VoxelModel {
    /// Boxes in creation order.
    pub boxes: Vec<VoxelBox>,
    /// Distinct group names in order of first use.
    pub groups: Vec<String>,
}

impl VoxelModel {
    /// An empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of boxes.
    #[inline]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Whether the model has no boxes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Listed groups followed by any group a box uses without it being
    /// listed, each once, in order of first appearance.
    pub fn group_names(&self) -> Vec<&str> {
        let mut seen = HashSet::with_capacity(self.groups.len());
        self.groups
            .iter()
            .chain(self.boxes.iter().map(|b| &b.group))
            .map(String::as_str)
            .filter(|g| seen.insert(*g))
            .collect()
    }

    /// Boxes belonging to `group`.
    pub fn boxes_in_group<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a VoxelBox> + 'a {
        self.boxes.iter().filter(move |b| b.group == group)
    }

    /// Bounds of every box in `group`.
    pub fn group_bounds(&self, group: &str) -> Option<Aabb> {
        Aabb::merge_all(
            self.boxes_in_group(group)
                .map(|b| Aabb::from_center_size(b.position, b.scale)),
        )
    }

    /// Bounds of the whole model.
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::merge_all(
            self.boxes
                .iter()
                .map(|b| Aabb::from_center_size(b.position, b.scale)),
        )
    }

    /// Check the model invariants: finite, positive geometry, unique ids,
    /// no duplicate groups and every box group listed.
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::with_capacity(self.boxes.len());
        for b in &self.boxes {
            if let Some(reason) = b.degeneracy() {
                return Err(Error::DegenerateBox {
                    box_id: b.id,
                    reason,
                });
            }
            if !ids.insert(b.id) {
                return Err(Error::InvalidModel(format!("duplicate box id {}", b.id)));
            }
            if !self.groups.iter().any(|g| *g == b.group) {
                return Err(Error::InvalidModel(format!(
                    "box {} uses unlisted group {:?}",
                    b.id, b.group
                )));
            }
        }
        let mut groups = HashSet::with_capacity(self.groups.len());
        for group in &self.groups {
            if !groups.insert(group.as_str()) {
                return Err(Error::InvalidModel(format!("duplicate group {group:?}")));
            }
        }
        Ok(())
    }
}

/// Builds one model, numbering boxes from 1 with a counter owned by the
/// builder.
///
/// Degenerate boxes are dropped, so a generator called with a zero,
/// negative or non-finite scale yields an empty model.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    boxes: Vec<VoxelBox>,
    groups: Vec<String>,
    next_id: u32,
}

impl ModelBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with room for `capacity` boxes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            boxes: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Add a box, returning its id, or `None` if it was degenerate.
    pub fn push(&mut self, mut voxel: VoxelBox) -> Option<BoxId> {
        if let Some(reason) = voxel.degeneracy() {
            trace!(name = %voxel.name, %reason, "skipping degenerate box");
            return None;
        }
        self.next_id += 1;
        voxel.id = BoxId(self.next_id);
        if !self.groups.iter().any(|g| *g == voxel.group) {
            self.groups.push(voxel.group.clone());
        }
        let id = voxel.id;
        self.boxes.push(voxel);
        Some(id)
    }

    /// Shorthand for a primary-colored box.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        group: &str,
        position: Vec3,
        scale: Vec3,
    ) -> Option<BoxId> {
        self.push(VoxelBox::new(name, group, position, scale))
    }

    /// Number of boxes accepted so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Whether no box has been accepted yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Finish the model.
    pub fn build(self) -> VoxelModel {
        VoxelModel {
            boxes: self.boxes,
            groups: self.groups,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxel::ColorRef;

    #[test]
    fn builder_assigns_sequential_ids() {
        let mut b = ModelBuilder::new();
        let a = b.add("a", "body", Vec3::ZERO, Vec3::ONE).unwrap();
        let c = b.add("b", "head", Vec3::Y, Vec3::ONE).unwrap();
        assert_eq!(a, BoxId(1));
        assert_eq!(c, BoxId(2));
        let model = b.build();
        assert_eq!(model.groups, vec!["body".to_string(), "head".to_string()]);
        model.validate().unwrap();
    }

    #[test]
    fn builders_do_not_share_counters() {
        let mut first = ModelBuilder::new();
        first.add("a", "body", Vec3::ZERO, Vec3::ONE);
        let mut second = ModelBuilder::new();
        assert_eq!(
            second.add("a", "body", Vec3::ZERO, Vec3::ONE),
            Some(BoxId(1))
        );
    }

    #[test]
    fn builder_skips_degenerate_boxes() {
        let mut b = ModelBuilder::new();
        assert!(
            b.add("flat", "body", Vec3::ZERO, Vec3::new(1.0, 0.0, 1.0))
                .is_none()
        );
        assert!(b.is_empty());
        let model = b.build();
        assert!(model.groups.is_empty());
    }

    #[test]
    fn groups_are_not_duplicated() {
        let mut b = ModelBuilder::new();
        for i in 0..5 {
            b.add(format!("seg{i}"), "tail", Vec3::X * i as f32, Vec3::ONE);
        }
        let model = b.build();
        assert_eq!(model.groups, vec!["tail".to_string()]);
        assert_eq!(model.boxes_in_group("tail").count(), 5);
    }

    #[test]
    fn validate_catches_violations() {
        let mut model = VoxelModel::new();
        model.boxes.push(VoxelBox::cube("a", "body", Vec3::ZERO, 1.0));
        assert!(matches!(model.validate(), Err(Error::InvalidModel(_))));

        model.groups.push("body".into());
        model.validate().unwrap();

        model.boxes.push(VoxelBox::cube("b", "body", Vec3::ONE, 1.0));
        assert!(matches!(model.validate(), Err(Error::InvalidModel(_))));

        model.boxes[1].id = BoxId(7);
        model.boxes[1].scale = Vec3::ZERO;
        assert!(matches!(model.validate(), Err(Error::DegenerateBox { .. })));

        model.boxes[1].scale = Vec3::ONE;
        model.groups.push("body".into());
        assert!(matches!(model.validate(), Err(Error::InvalidModel(_))));
    }

    #[test]
    fn group_names_include_unlisted_groups() {
        let mut model = VoxelModel::new();
        model.boxes.push(VoxelBox::cube("a", "body", Vec3::ZERO, 1.0));
        model.boxes.push(VoxelBox::cube("b", "head", Vec3::ONE, 1.0));
        model.boxes.push(VoxelBox::cube("c", "body", Vec3::ONE, 1.0));
        assert_eq!(model.group_names(), vec!["body", "head"]);

        model.groups = vec!["tail".into(), "head".into()];
        assert_eq!(model.group_names(), vec!["tail", "head", "body"]);
    }

    #[test]
    fn validate_scales_to_large_models() {
        let mut b = ModelBuilder::with_capacity(20_000);
        for i in 0..20_000 {
            b.push(VoxelBox::cube(
                format!("c{i}"),
                &format!("g{}", i % 500),
                Vec3::splat(i as f32),
                0.5,
            ));
        }
        let mut model = b.build();
        assert_eq!(model.groups.len(), 500);
        model.validate().unwrap();

        model.boxes[19_999].id = model.boxes[3].id;
        let err = model.validate().unwrap_err().to_string();
        assert!(err.contains("duplicate box id"), "{err}");
    }

    #[test]
    fn bounds_cover_all_boxes() {
        let mut b = ModelBuilder::new();
        b.push(VoxelBox::cube("a", "body", Vec3::ZERO, 2.0).custom("#fff"));
        b.push(VoxelBox::cube("b", "head", Vec3::new(0.0, 3.0, 0.0), 1.0));
        let model = b.build();
        let bounds = model.bounds().unwrap();
        assert_eq!(bounds.min, Vec3::splat(-1.0));
        assert_eq!(bounds.max, Vec3::new(1.0, 3.5, 1.0));
        assert_eq!(model.boxes[0].color, ColorRef::Custom("#fff".into()));
        assert!(model.group_bounds("missing").is_none());
    }
}
