//! Trees, plants, rocks and crystals.
//!
//! Organic silhouettes are roughened with a fixed-seed Perlin field, so the
//! deterministic archetypes stay reproducible. Ash mounds, lava rocks and
//! ice crystals draw from the caller's RNG and vary on every call.

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use noise::{NoiseFn, Perlin};
use rand::Rng;
use voxforge_core::{BodyPart, Side, VoxelBox, VoxelModel};

use crate::sculpt::{group, ring_point, segment, taper, Sculptor};

/// Seed of the shape-roughening field.
const SHAPE_SEED: u32 = 0x5eed;

/// Fixed Perlin field sampled in unit space.
struct Roughness {
    perlin: Perlin,
    frequency: f64,
}

impl Roughness {
    fn new(frequency: f64) -> Self {
        Self {
            perlin: Perlin::new(SHAPE_SEED),
            frequency,
        }
    }

    /// Noise at `p`, in roughly `[-1, 1]`.
    fn sample(&self, p: Vec3) -> f32 {
        let f = self.frequency;
        let at = |v: f32| f64::from(v) * f + 0.5;
        self.perlin.get([at(p.x), at(p.y), at(p.z)]) as f32
    }
}

/// Fill a rough sphere of cubes into `group`.
fn canopy(
    m: &mut Sculptor,
    group: &str,
    center: Vec3,
    radius: f32,
    cube: f32,
    rough: &Roughness,
    color: &str,
) {
    let steps = (radius * 2.0 / cube).ceil() as i32;
    for iy in 0..=steps {
        for ix in 0..=steps {
            for iz in 0..=steps {
                let offset = Vec3::new(ix as f32, iy as f32, iz as f32) * cube
                    - Vec3::splat(radius);
                let p = center + offset;
                let r = radius * (1.0 + rough.sample(p) * 0.3);
                let d = offset.length();
                // Hollow shell: interior cubes are never visible.
                if d <= r && d > r - cube * 1.5 {
                    let shade = 0.85 + (iy as f32 / steps.max(1) as f32) * 0.3;
                    m.push(
                        VoxelBox::cube(format!("leaf_{ix}_{iy}_{iz}"), group, p, cube)
                            .custom(color)
                            .tint(shade),
                    );
                }
            }
        }
    }
}

fn trunk(m: &mut Sculptor, height: f32, width: f32, color: &str) {
    let body = group(BodyPart::Torso);
    let slices = (height / 0.3).ceil().max(1.0) as usize;
    for k in 0..slices {
        let t = k as f32 / slices as f32;
        let w = taper(width, width * 0.35, t);
        m.push(
            VoxelBox::new(
                format!("trunk_{k}"),
                &body,
                Vec3::new(0.0, (k as f32 + 0.5) * height / slices as f32, 0.0),
                Vec3::new(w, height / slices as f32, w),
            )
            .custom(color),
        );
    }
}

/// Broad oak: thick trunk, spreading roots, three rough canopy lobes.
pub fn create_oak_tree_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let rough = Roughness::new(1.7);
    trunk(&mut m, 1.8, 0.5, "#6b4423");

    let roots = group(BodyPart::Foot);
    for i in 0..5 {
        let p = ring_point(i, 5, 0.35, 0.06, 0.3);
        m.push(
            VoxelBox::new(format!("root_{i}"), &roots, p, Vec3::new(0.25, 0.12, 0.25))
                .custom("#5a3a1a"),
        );
    }
    for (i, side) in Side::PAIR.into_iter().enumerate() {
        let branch = segment(BodyPart::Arm, side, 0);
        for k in 0..3 {
            m.push(
                VoxelBox::cube(
                    format!("branch_{k}"),
                    &branch,
                    Vec3::new(
                        side.sign() * (0.3 + k as f32 * 0.2),
                        1.4 + k as f32 * 0.15,
                        0.0,
                    ),
                    0.18,
                )
                .custom("#6b4423"),
            );
        }
        canopy(
            &mut m,
            &segment(BodyPart::Foliage, Side::Center, i as u32),
            Vec3::new(side.sign() * 0.9, 2.1, 0.0),
            0.6,
            0.25,
            &rough,
            "#3f7f2f",
        );
    }
    canopy(
        &mut m,
        &segment(BodyPart::Foliage, Side::Center, 2),
        Vec3::new(0.0, 2.6, 0.0),
        0.85,
        0.25,
        &rough,
        "#4a8f36",
    );

    m.finish()
}

/// Pine: straight trunk with stacked, narrowing needle tiers and a snowy tip.
pub fn create_pine_tree_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    trunk(&mut m, 1.2, 0.3, "#5a3a1a");

    let tiers = 5;
    for tier in 0..tiers {
        let t = tier as f32 / (tiers - 1) as f32;
        let foliage = segment(BodyPart::Foliage, Side::Center, tier as u32);
        let radius = taper(1.0, 0.75, t);
        let y = 1.0 + t * 2.0;
        let count = 6 + (radius * 8.0) as usize;
        for i in 0..count {
            let p = ring_point(i, count, radius * 0.7, y, t);
            m.push(
                VoxelBox::new(
                    format!("needles_{i}"),
                    &foliage,
                    p,
                    Vec3::new(0.3, 0.25, 0.3),
                )
                .custom("#1f5f3a")
                .tint(0.9 + t * 0.2),
            );
        }
        m.push(
            VoxelBox::new(
                "core",
                &foliage,
                Vec3::new(0.0, y, 0.0),
                Vec3::new(radius, 0.3, radius),
            )
            .custom("#1a4f30"),
        );
    }
    m.push(
        VoxelBox::cube(
            "snowcap",
            segment(BodyPart::Foliage, Side::Center, tiers - 1),
            Vec3::new(0.0, 3.2, 0.0),
            0.22,
        )
        .custom("#f0f4ff")
        .tint(1.1),
    );

    m.finish()
}

/// Dead tree: bare gnarled trunk with crooked leafless branches.
pub fn create_dead_tree_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let rough = Roughness::new(2.3);
    trunk(&mut m, 2.0, 0.4, "#4a3a2e");

    let branches = 5u32;
    for b in 0..branches {
        let branch = segment(BodyPart::Arm, Side::Center, b);
        let theta = b as f32 / branches as f32 * TAU + 0.4;
        let start_y = 1.0 + b as f32 * 0.22;
        let mut p = Vec3::new(0.0, start_y, 0.0);
        for k in 0..5 {
            let t = k as f32 / 4.0;
            let kink = rough.sample(p) * 0.25;
            p += Vec3::new(
                (theta + kink).cos() * 0.18,
                0.1 + t * 0.05,
                (theta + kink).sin() * 0.18,
            );
            m.push(
                VoxelBox::cube(format!("twig_{k}"), &branch, p, taper(0.14, 0.09, t))
                    .custom("#3e3026")
                    .tint(0.9 + kink),
            );
        }
    }
    let hollow = group(BodyPart::Torso);
    m.push(
        VoxelBox::new(
            "hollow",
            &hollow,
            Vec3::new(0.0, 0.9, 0.2),
            Vec3::new(0.16, 0.22, 0.02),
        )
        .custom("#120c08"),
    );
    m.push(
        VoxelBox::cube("wisp", &hollow, Vec3::new(0.0, 0.9, 0.23), 0.05)
            .glow()
            .tint(1.5)
            .emissive(1.0),
    );

    m.finish()
}

/// Round leafy bush with a few berries.
pub fn create_bush_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let rough = Roughness::new(2.9);
    let foliage = group(BodyPart::Foliage);
    canopy(
        &mut m,
        &foliage,
        Vec3::new(0.0, 0.45, 0.0),
        0.5,
        0.2,
        &rough,
        "#3f7f2f",
    );
    for i in 0..6 {
        let p = ring_point(i, 6, 0.48, 0.4 + (i % 2) as f32 * 0.2, 0.5);
        m.push(
            VoxelBox::cube(format!("berry_{i}"), &foliage, p, 0.07)
                .custom("#c0203a")
                .tint(1.2),
        );
    }

    m.finish()
}

/// Mushroom: pale stem, domed spotted cap, glowing gills.
pub fn create_mushroom_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let stem = group(BodyPart::Torso);
    for k in 0..4 {
        m.push(
            VoxelBox::cube(
                format!("stem_{k}"),
                &stem,
                Vec3::new(0.0, 0.15 + k as f32 * 0.25, 0.0),
                0.3 - k as f32 * 0.02,
            )
            .custom("#e8e0cc"),
        );
    }
    let cap = group(BodyPart::Head);
    for layer in 0..3 {
        let t = layer as f32 / 2.0;
        let radius = 0.7 * (1.0 - t * t * 0.6);
        m.push(
            VoxelBox::new(
                format!("cap_{layer}"),
                &cap,
                Vec3::new(0.0, 1.1 + t * 0.3, 0.0),
                Vec3::new(radius * 2.0, 0.15, radius * 2.0),
            )
            .custom("#b8322a"),
        );
    }
    for i in 0..6 {
        let p = ring_point(i, 6, 0.45, 1.28, 0.0);
        m.push(VoxelBox::cube(format!("spot_{i}"), &cap, p, 0.12).custom("#f4f0e8"));
    }
    m.push(
        VoxelBox::new(
            "gills",
            &cap,
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.1, 0.04, 1.1),
        )
        .glow()
        .tint(1.2)
        .emissive(0.6),
    );

    m.finish()
}

/// Crystal spire: a tall central shard ringed by smaller tilted shards.
pub fn create_crystal_spire_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let base = group(BodyPart::Foot);
    for i in 0..8 {
        m.push(
            VoxelBox::cube(
                format!("rock_{i}"),
                &base,
                ring_point(i, 8, 0.5, 0.1, 0.2),
                0.3,
            )
            .secondary()
            .tint(0.7),
        );
    }
    let spire = group(BodyPart::Torso);
    let slices = 10;
    for k in 0..slices {
        let t = k as f32 / (slices - 1) as f32;
        m.push(
            VoxelBox::new(
                format!("spire_{k}"),
                &spire,
                Vec3::new(0.0, 0.2 + t * 2.6, 0.0),
                Vec3::new(taper(0.5, 0.4, t), 0.3, taper(0.5, 0.4, t)),
            )
            .glow()
            .tint(1.0 + t * 1.5)
            .emissive(0.5 + t),
        );
    }
    for shard in 0..5u32 {
        let g = segment(BodyPart::Crystal, Side::Center, shard);
        let theta = shard as f32 / 5.0 * TAU;
        for k in 0..4 {
            let t = k as f32 / 3.0;
            let lean = 0.45 + t * 0.25;
            let p = Vec3::new(theta.cos() * lean, 0.2 + t * 0.8, theta.sin() * lean);
            m.push(
                VoxelBox::cube(format!("shard_{k}"), &g, p, taper(0.22, 0.14, t))
                    .glow()
                    .tint(1.5)
                    .emissive(0.8),
            );
        }
    }

    m.finish()
}

/// Boulder: a Perlin-roughened lump of stone with moss on top.
pub fn create_boulder_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let rough = Roughness::new(1.3);
    let body = group(BodyPart::Torso);
    let cube: f32 = 0.25;
    let radius: f32 = 0.7;
    let steps = (radius * 2.0 / cube) as i32;
    for iy in 0..=steps {
        for ix in 0..=steps {
            for iz in 0..=steps {
                let offset = Vec3::new(ix as f32, iy as f32, iz as f32) * cube
                    - Vec3::splat(radius);
                // Flattened vertically.
                let squashed = offset * Vec3::new(1.0, 1.4, 1.0);
                let r = radius * (1.0 + rough.sample(offset) * 0.25);
                if squashed.length() <= r {
                    let p = offset + Vec3::Y * radius * 0.7;
                    let mossy = iy as f32 / steps as f32 > 0.7;
                    let b = VoxelBox::cube(format!("stone_{ix}_{iy}_{iz}"), &body, p, cube)
                        .tint(0.8 + rough.sample(p * 3.0) * 0.15);
                    m.push(if mossy { b.custom("#556b2f") } else { b.secondary() });
                }
            }
        }
    }

    m.finish()
}

/// Ash mound: a heap of gray ash with scattered smoldering embers.
/// Varies per call.
pub fn create_ash_mound_model(scale: f32, rng: &mut impl Rng) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let body = group(BodyPart::Torso);
    let layers = 4;
    for layer in 0..layers {
        let t = layer as f32 / layers as f32;
        let radius = taper(1.0, 0.9, t);
        let count = 4 + (radius * 10.0) as usize;
        for i in 0..count {
            let jitter = Vec3::new(rng.gen_range(-0.08..0.08), 0.0, rng.gen_range(-0.08..0.08));
            let p = ring_point(
                i,
                count,
                radius * 0.8,
                0.1 + t * 0.6,
                rng.gen_range(0.0..TAU),
            )
                + jitter;
            let lightness: f32 = rng.gen_range(18.0..38.0);
            m.push(
                VoxelBox::cube(
                    format!("ash_{layer}_{i}"),
                    &body,
                    p,
                    rng.gen_range(0.2..0.32),
                )
                .custom(format!("hsl(30, 5%, {lightness:.0}%)")),
            );
        }
    }
    let embers = rng.gen_range(3..7u32);
    for k in 0..embers {
        let p = ring_point(
            k as usize,
            embers as usize,
            rng.gen_range(0.1..0.6),
            rng.gen_range(0.1..0.5),
            rng.gen_range(0.0..TAU),
        );
        let hue: f32 = rng.gen_range(5.0..35.0);
        m.push(
            VoxelBox::cube(
                format!("ember_{k}"),
                segment(BodyPart::Effect, Side::Center, k),
                p,
                rng.gen_range(0.05..0.1),
            )
            .custom(format!("hsl({hue:.0}, 100%, 50%)"))
            .tint(1.5)
            .emissive(rng.gen_range(0.8..2.0)),
        );
    }

    m.finish()
}

/// Lava rock: a dark craggy rock veined with glowing molten cracks.
/// Varies per call.
pub fn create_lava_rock_model(scale: f32, rng: &mut impl Rng) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let body = group(BodyPart::Torso);
    let cracks = group(BodyPart::Effect);
    let cube: f32 = 0.22;
    let radius: f32 = rng.gen_range(0.5..0.75);
    let steps = (radius * 2.0 / cube) as i32;
    for iy in 0..=steps {
        for ix in 0..=steps {
            for iz in 0..=steps {
                let offset = Vec3::new(ix as f32, iy as f32, iz as f32) * cube
                    - Vec3::splat(radius);
                let r = radius * rng.gen_range(0.85..1.1_f32);
                if offset.length() > r {
                    continue;
                }
                let p = offset + Vec3::Y * radius;
                if rng.gen_bool(0.12) {
                    let hue: f32 = rng.gen_range(0.0..30.0);
                    m.push(
                        VoxelBox::cube(format!("crack_{ix}_{iy}_{iz}"), &cracks, p, cube)
                            .custom(format!("hsl({hue:.0}, 100%, 45%)"))
                            .tint(rng.gen_range(1.5..2.5))
                            .emissive(rng.gen_range(1.0..2.5)),
                    );
                } else {
                    let lightness: f32 = rng.gen_range(8.0..18.0);
                    m.push(
                        VoxelBox::cube(format!("basalt_{ix}_{iy}_{iz}"), &body, p, cube)
                            .custom(format!("hsl(15, 10%, {lightness:.0}%)")),
                    );
                }
            }
        }
    }

    m.finish()
}

/// Ice crystal: a cluster of pale blue shards of random height and lean.
/// Varies per call.
pub fn create_ice_crystal_model(scale: f32, rng: &mut impl Rng) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let base = group(BodyPart::Foot);
    for i in 0..6 {
        m.push(
            VoxelBox::cube(
                format!("frost_{i}"),
                &base,
                ring_point(i, 6, 0.35, 0.06, rng.gen_range(0.0..PI)),
                rng.gen_range(0.15..0.3),
            )
            .custom("#dcefff"),
        );
    }
    let shards = rng.gen_range(4..8u32);
    for s in 0..shards {
        let shard = segment(BodyPart::Crystal, Side::Center, s);
        let theta = rng.gen_range(0.0..TAU);
        let lean: f32 = if s == 0 { 0.0 } else { rng.gen_range(0.1..0.4) };
        let height: f32 = if s == 0 { rng.gen_range(1.6..2.2) } else { rng.gen_range(0.6..1.4) };
        let slices = (height / 0.25).ceil() as usize;
        let hue: f32 = rng.gen_range(185.0..210.0);
        for k in 0..slices {
            let t = k as f32 / slices as f32;
            let p = Vec3::new(
                theta.cos() * lean * t * 2.0,
                0.15 + t * height,
                theta.sin() * lean * t * 2.0,
            );
            m.push(
                VoxelBox::cube(format!("ice_{k}"), &shard, p, taper(0.3, 0.22, t))
                    .custom(format!("hsl({hue:.0}, 80%, {:.0}%)", 60.0 + t * 25.0))
                    .emissive(0.3 + t * 0.5),
            );
        }
    }

    m.finish()
}
