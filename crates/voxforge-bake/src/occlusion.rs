//! Neighbor counting for the ambient-occlusion approximation.
//!
//! A box is occluded by every other box whose center lies strictly above it
//! and closer than the AO radius. [`OcclusionIndex`] buckets centers into a
//! grid whose cells are one radius wide, so only the box's own column of
//! cells and the layer above need scanning.

use glam::{IVec3, Vec3};
use hashbrown::HashMap;

#[inline]
fn occludes(center: Vec3, other: Vec3, radius: f32) -> bool {
    other.y > center.y && center.distance(other) < radius
}

/// Count occluders of `centers[index]` by scanning every center.
pub fn count_occluders_brute(centers: &[Vec3], index: usize, radius: f32) -> usize {
    let center = centers[index];
    centers
        .iter()
        .enumerate()
        .filter(|&(j, &other)| j != index && occludes(center, other, radius))
        .count()
}

/// Cell coordinates at or beyond this magnitude are not bucketed.
const MAX_CELL: f32 = (1u32 << 30) as f32;

/// Grid of box centers for occluder queries.
///
/// Falls back to a full scan when the radius is not a positive finite number
/// or a center lies too far out for its cell to be addressed.
pub struct OcclusionIndex {
    centers: Vec<Vec3>,
    radius: f32,
    cells: Option<HashMap<IVec3, Vec<u32>>>,
}

impl OcclusionIndex {
    /// Bucket `centers` into cells of size `radius`.
    pub fn new(centers: impl IntoIterator<Item = Vec3>, radius: f32) -> Self {
        let centers: Vec<Vec3> = centers.into_iter().collect();
        let cells = Self::bucket(&centers, radius);
        Self {
            centers,
            radius,
            cells,
        }
    }

    fn bucket(centers: &[Vec3], radius: f32) -> Option<HashMap<IVec3, Vec<u32>>> {
        if !radius.is_finite() || radius <= 0.0 {
            return None;
        }
        let mut cells: HashMap<IVec3, Vec<u32>> = HashMap::new();
        for (i, &c) in centers.iter().enumerate() {
            cells
                .entry(Self::cell_of(c, radius)?)
                .or_default()
                .push(i as u32);
        }
        Some(cells)
    }

    fn cell_of(p: Vec3, radius: f32) -> Option<IVec3> {
        let cell = (p / radius).floor();
        (cell.is_finite() && cell.abs().max_element() < MAX_CELL).then(|| cell.as_ivec3())
    }

    /// Number of indexed centers.
    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// Whether queries use the grid rather than a full scan.
    pub const fn is_gridded(&self) -> bool {
        self.cells.is_some()
    }

    /// Count occluders of the center at `index`.
    pub fn count_occluders(&self, index: usize) -> usize {
        let Some(cells) = &self.cells else {
            return count_occluders_brute(&self.centers, index, self.radius);
        };
        let center = self.centers[index];
        let Some(home) = Self::cell_of(center, self.radius) else {
            return count_occluders_brute(&self.centers, index, self.radius);
        };
        let mut count = 0;
        // Occluders are higher, so their cell is never below ours.
        for dy in 0..=1 {
            for dz in -1..=1 {
                for dx in -1..=1 {
                    let Some(bucket) = cells.get(&(home + IVec3::new(dx, dy, dz))) else {
                        continue;
                    };
                    count += bucket
                        .iter()
                        .filter(|&&j| {
                            j as usize != index
                                && occludes(center, self.centers[j as usize], self.radius)
                        })
                        .count();
                }
            }
        }
        count
    }
}
