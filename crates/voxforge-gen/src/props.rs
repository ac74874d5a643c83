//! Static props: containers, light sources and set dressing.
//!
//! Crate, chest and pillar take explicit dimensions in unit space; the
//! registry uses [`DEFAULT_DIMENSIONS`].

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use voxforge_core::{BodyPart, Side, VoxelBox, VoxelModel};

use crate::sculpt::{group, mirror, ring_point, segment, taper, Sculptor};

/// Width, height and depth used when a sized prop is generated by name.
pub const DEFAULT_DIMENSIONS: (f32, f32, f32) = (1.0, 1.0, 1.0);

const WOOD: &str = "#8b5a2b";
const DARK_WOOD: &str = "#5a3a1a";
const IRON: &str = "#55585e";
const GOLD: &str = "#d4a017";

/// Treasure chest: planked box, banded lid, gold lock and spilling coins.
pub fn create_treasure_chest_model(scale: f32, width: f32, height: f32, depth: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let body = group(BodyPart::Torso);
    let lid = group(BodyPart::Head);
    let base_h = height * 0.65;

    m.push(
        VoxelBox::new(
            "base",
            &body,
            Vec3::new(0.0, base_h / 2.0, 0.0),
            Vec3::new(width, base_h, depth),
        )
        .custom(WOOD),
    );
    m.push(
        VoxelBox::new(
            "lid",
            &lid,
            Vec3::new(0.0, base_h + height * 0.175, 0.0),
            Vec3::new(width * 1.02, height * 0.35, depth * 1.02),
        )
        .custom(DARK_WOOD),
    );
    for side in Side::PAIR {
        let x = width * 0.35;
        m.push(
            VoxelBox::new(
                "band",
                &body,
                mirror(side, Vec3::new(x, base_h / 2.0, 0.0)),
                Vec3::new(width * 0.06, base_h * 1.01, depth * 1.03),
            )
            .custom(IRON),
        );
        m.push(
            VoxelBox::new(
                "lid_band",
                &lid,
                mirror(side, Vec3::new(x, base_h + height * 0.175, 0.0)),
                Vec3::new(width * 0.06, height * 0.36, depth * 1.05),
            )
            .custom(IRON),
        );
    }
    m.push(
        VoxelBox::new(
            "lock",
            &body,
            Vec3::new(0.0, base_h * 0.95, depth / 2.0 + 0.02),
            Vec3::new(width * 0.12, height * 0.15, 0.04),
        )
        .custom(GOLD)
        .tint(1.3),
    );
    m.push(
        VoxelBox::new(
            "gleam",
            &lid,
            Vec3::new(0.0, base_h + 0.02, 0.0),
            Vec3::new(width * 0.8, 0.03, depth * 0.8),
        )
        .custom(GOLD)
        .tint(2.0)
        .emissive(1.0),
    );
    for i in 0..5 {
        let p = Vec3::new(
            (i as f32 - 2.0) * width * 0.12,
            0.03,
            depth / 2.0 + 0.1 + (i % 2) as f32 * 0.08,
        );
        m.push(
            VoxelBox::new(
                format!("coin_{i}"),
                group(BodyPart::Loot),
                p,
                Vec3::new(0.08, 0.02, 0.08),
            )
            .custom(GOLD)
            .tint(1.5),
        );
    }

    m.finish()
}

/// Barrel: stacked staves bulging at the middle, with iron hoops.
pub fn create_barrel_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let body = group(BodyPart::Torso);
    let rings = 6;
    let staves = 12;
    for r in 0..rings {
        let t = (r as f32 + 0.5) / rings as f32;
        let bulge = 0.4 + (t * PI).sin() * 0.08;
        for s in 0..staves {
            let p = ring_point(s, staves, bulge, t * 1.2, 0.0);
            m.push(
                VoxelBox::new(
                    format!("stave_{r}_{s}"),
                    &body,
                    p,
                    Vec3::new(0.22, 1.2 / rings as f32, 0.22),
                )
                .custom(WOOD)
                .tint(0.9 + (s % 2) as f32 * 0.1),
            );
        }
    }
    for (k, y) in [0.15f32, 1.05].into_iter().enumerate() {
        m.push(
            VoxelBox::new(
                format!("hoop_{k}"),
                &body,
                Vec3::new(0.0, y, 0.0),
                Vec3::new(0.98, 0.05, 0.98),
            )
            .custom(IRON),
        );
    }
    m.push(
        VoxelBox::new(
            "lid",
            group(BodyPart::Head),
            Vec3::new(0.0, 1.2, 0.0),
            Vec3::new(0.7, 0.04, 0.7),
        )
        .custom(DARK_WOOD),
    );

    m.finish()
}

/// Wooden crate: a box framed with edge planks and a diagonal brace.
pub fn create_crate_model(scale: f32, width: f32, height: f32, depth: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let body = group(BodyPart::Torso);
    let frame = group(BodyPart::Frame);
    let plank = width.min(height).min(depth) * 0.1;

    m.push(
        VoxelBox::new(
            "core",
            &body,
            Vec3::new(0.0, height / 2.0, 0.0),
            Vec3::new(width, height, depth),
        )
        .custom(WOOD),
    );
    for sx in [-1.0f32, 1.0] {
        for sz in [-1.0f32, 1.0] {
            let corner = Vec3::new(sx * width / 2.0, height / 2.0, sz * depth / 2.0);
            m.push(
                VoxelBox::new("post", &frame, corner, Vec3::new(plank, height, plank))
                    .custom(DARK_WOOD),
            );
        }
        for y in [plank / 2.0, height - plank / 2.0] {
            m.push(
                VoxelBox::new(
                    "rail_z",
                    &frame,
                    Vec3::new(sx * width / 2.0, y, 0.0),
                    Vec3::new(plank, plank, depth),
                )
                .custom(DARK_WOOD),
            );
            m.push(
                VoxelBox::new(
                    "rail_x",
                    &frame,
                    Vec3::new(0.0, y, sx * depth / 2.0),
                    Vec3::new(width, plank, plank),
                )
                .custom(DARK_WOOD),
            );
        }
    }
    let steps = 5;
    for k in 0..steps {
        let t = (k as f32 + 0.5) / steps as f32;
        let p = Vec3::new(
            (t - 0.5) * width * 0.9,
            t * height,
            depth / 2.0 + plank / 2.0,
        );
        m.push(
            VoxelBox::new(
                format!("brace_{k}"),
                &frame,
                p,
                Vec3::new(width / steps as f32, plank, plank * 0.5),
            )
            .custom(DARK_WOOD)
            .tint(0.9),
        );
    }

    m.finish()
}

fn flame(m: &mut Sculptor, base: Vec3, size: f32, glow_scale: f32) {
    let fire = group(BodyPart::Effect);
    let tongues = 3;
    for k in 0..tongues {
        let t = k as f32 / (tongues - 1) as f32;
        let hue = 45.0 - t * 35.0;
        m.push(
            VoxelBox::cube(
                format!("flame_{k}"),
                &fire,
                base + Vec3::Y * t * size * 1.2,
                taper(size, size * 0.6, t),
            )
            .custom(format!("hsl({hue:.0}, 100%, 55%)"))
            .tint(2.0 * glow_scale)
            .emissive(2.0 * glow_scale),
        );
    }
}

/// Wall torch: handle, iron cup and a layered flame.
pub fn create_torch_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let body = group(BodyPart::Torso);
    for k in 0..4 {
        m.push(
            VoxelBox::new(
                format!("handle_{k}"),
                &body,
                Vec3::new(0.0, 0.12 + k as f32 * 0.2, 0.0),
                Vec3::new(0.1, 0.2, 0.1),
            )
            .custom(DARK_WOOD),
        );
    }
    m.push(
        VoxelBox::new(
            "cup",
            &body,
            Vec3::new(0.0, 0.92, 0.0),
            Vec3::new(0.2, 0.12, 0.2),
        )
        .custom(IRON),
    );
    m.push(
        VoxelBox::new(
            "bracket",
            &body,
            Vec3::new(0.0, 0.55, -0.1),
            Vec3::new(0.14, 0.06, 0.14),
        )
        .custom(IRON),
    );
    flame(&mut m, Vec3::new(0.0, 1.05, 0.0), 0.18, 1.0);

    m.finish()
}

/// Hanging lantern: frame, glass panes and a glowing core.
pub fn create_lantern_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let body = group(BodyPart::Torso);
    m.push(
        VoxelBox::new(
            "base",
            &body,
            Vec3::new(0.0, 0.05, 0.0),
            Vec3::new(0.4, 0.1, 0.4),
        )
        .custom(IRON),
    );
    m.push(
        VoxelBox::new(
            "roof",
            &body,
            Vec3::new(0.0, 0.65, 0.0),
            Vec3::new(0.44, 0.1, 0.44),
        )
        .custom(IRON),
    );
    m.push(
        VoxelBox::new(
            "cap",
            &body,
            Vec3::new(0.0, 0.75, 0.0),
            Vec3::new(0.2, 0.1, 0.2),
        )
        .custom(IRON),
    );
    m.push(
        VoxelBox::new(
            "ring",
            &body,
            Vec3::new(0.0, 0.86, 0.0),
            Vec3::new(0.12, 0.12, 0.03),
        )
        .custom(IRON),
    );
    for sx in [-1.0f32, 1.0] {
        for sz in [-1.0f32, 1.0] {
            m.push(
                VoxelBox::new(
                    "post",
                    &body,
                    Vec3::new(sx * 0.18, 0.35, sz * 0.18),
                    Vec3::new(0.04, 0.5, 0.04),
                )
                .custom(IRON),
            );
        }
    }
    let glass = group(BodyPart::Glass);
    for i in 0..4 {
        let p = ring_point(i, 4, 0.18, 0.35, 0.0);
        let size = if i % 2
            == 0 { Vec3::new(0.02, 0.46, 0.32) } else { Vec3::new(0.32, 0.46, 0.02) };
        m.push(
            VoxelBox::new(format!("pane_{i}"), &glass, p, size)
                .custom("#fff2b0")
                .tint(1.2)
                .emissive(0.6),
        );
    }
    m.push(
        VoxelBox::cube(
            "wick",
            group(BodyPart::Effect),
            Vec3::new(0.0, 0.3, 0.0),
            0.12,
        )
        .custom("#ffb347")
        .tint(2.5)
        .emissive(2.5),
    );

    m.finish()
}

/// Portal: a stone arch framing a swirling glowing field.
pub fn create_portal_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let frame = group(BodyPart::Torso);
    let radius = 1.2;
    let stones = 16;
    for i in 0..=stones {
        let theta = i as f32 / stones as f32 * PI;
        let p = Vec3::new(theta.cos() * radius, 1.0 + theta.sin() * radius, 0.0);
        m.push(
            VoxelBox::cube(format!("arch_{i}"), &frame, p, 0.3)
                .secondary()
                .tint(0.9 + (i % 3) as f32 * 0.05),
        );
        if i % 4 == 0 {
            m.push(
                VoxelBox::cube(format!("rune_{i}"), &frame, p + Vec3::Z * 0.16, 0.1)
                    .glow()
                    .tint(3.0)
                    .emissive(2.0),
            );
        }
    }
    for side in Side::PAIR {
        for k in 0..4 {
            m.push(
                VoxelBox::cube(
                    format!("column_{k}"),
                    &frame,
                    mirror(side, Vec3::new(radius, 0.15 + k as f32 * 0.28, 0.0)),
                    0.32,
                )
                .secondary(),
            );
        }
    }
    m.push(
        VoxelBox::new(
            "step",
            group(BodyPart::Foot),
            Vec3::new(0.0, 0.05, 0.0),
            Vec3::new(3.0, 0.1, 0.8),
        )
        .secondary()
        .tint(0.7),
    );

    let field = group(BodyPart::Effect);
    let rings = 5;
    for r in 0..rings {
        let rr = (r as f32 + 0.5) / rings as f32 * (radius - 0.2);
        let count = 6 + r * 4;
        for i in 0..count {
            let theta = i as f32 / count as f32 * TAU + r as f32 * 0.4;
            let p = Vec3::new(theta.cos() * rr, 1.0 + theta.sin() * rr, 0.0);
            if p.y < 0.2 {
                continue;
            }
            m.push(
                VoxelBox::new(
                    format!("swirl_{r}_{i}"),
                    &field,
                    p,
                    Vec3::new(0.16, 0.16, 0.04),
                )
                .glow()
                .tint(1.5 + r as f32 * 0.3)
                .emissive(1.0 + r as f32 * 0.3),
            );
        }
    }

    m.finish()
}

/// Pillar: plinth, fluted shaft and capital.
pub fn create_pillar_model(scale: f32, width: f32, height: f32, depth: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let body = group(BodyPart::Torso);
    let base_h = height * 0.1;
    m.push(
        VoxelBox::new(
            "plinth",
            group(BodyPart::Foot),
            Vec3::new(0.0, base_h / 2.0, 0.0),
            Vec3::new(width * 1.3, base_h, depth * 1.3),
        )
        .secondary(),
    );
    let shaft_h = height * 0.8;
    let drums = 6;
    for k in 0..drums {
        let y = base_h + (k as f32 + 0.5) * shaft_h / drums as f32;
        m.push(VoxelBox::new(
            format!("drum_{k}"),
            &body,
            Vec3::new(0.0, y, 0.0),
            Vec3::new(width, shaft_h / drums as f32, depth),
        ));
        for f in 0..4 {
            let p = ring_point(f, 4, 0.5, y, PI / 4.0) * Vec3::new(width, 1.0, depth);
            m.push(
                VoxelBox::new(
                    format!("flute_{k}_{f}"),
                    &body,
                    p,
                    Vec3::new(width * 0.12, shaft_h / drums as f32, depth * 0.12),
                )
                .tint(0.85),
            );
        }
    }
    m.push(
        VoxelBox::new(
            "capital",
            group(BodyPart::Head),
            Vec3::new(0.0, base_h + shaft_h + height * 0.05, 0.0),
            Vec3::new(width * 1.3, height * 0.1, depth * 1.3),
        )
        .secondary(),
    );

    m.finish()
}

/// Campfire: ring of stones, crossed logs and a flame with rising embers.
pub fn create_campfire_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let stones = group(BodyPart::Foot);
    for i in 0..10 {
        m.push(
            VoxelBox::cube(
                format!("stone_{i}"),
                &stones,
                ring_point(i, 10, 0.55, 0.08, 0.0),
                0.18 + (i % 3) as f32 * 0.03,
            )
            .secondary()
            .tint(0.8),
        );
    }
    let logs = group(BodyPart::Torso);
    for k in 0..4 {
        let theta = k as f32 / 4.0 * PI;
        let dir = Vec3::new(theta.cos(), 0.0, theta.sin());
        let size = if k % 2 == 0 { Vec3::new(0.8, 0.12, 0.12) } else { Vec3::new(0.12, 0.12, 0.8) };
        m.push(
            VoxelBox::new(
                format!("log_{k}"),
                &logs,
                dir * 0.05 + Vec3::Y * (0.08 + k as f32 * 0.06),
                size,
            )
            .custom(DARK_WOOD),
        );
    }
    m.push(
        VoxelBox::new(
            "coals",
            &logs,
            Vec3::new(0.0, 0.04, 0.0),
            Vec3::new(0.5, 0.04, 0.5),
        )
        .custom("#ff4500")
        .tint(1.2)
        .emissive(1.0),
    );
    flame(&mut m, Vec3::new(0.0, 0.35, 0.0), 0.3, 1.2);
    for k in 0..5u32 {
        let p = ring_point(k as usize, 5, 0.15, 0.9 + k as f32 * 0.15, 0.7);
        m.push(
            VoxelBox::cube(
                format!("ember_{k}"),
                segment(BodyPart::Effect, Side::Center, k),
                p,
                0.04,
            )
            .custom("#ffa500")
            .tint(2.0)
            .emissive(1.5),
        );
    }

    m.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxforge_core::classify_group;

    #[test]
    fn sized_props_follow_dimensions() {
        let small = create_crate_model(1.0, 1.0, 1.0, 1.0);
        let tall = create_crate_model(1.0, 1.0, 3.0, 1.0);
        let hs = small.bounds().unwrap().size().y;
        let ht = tall.bounds().unwrap().size().y;
        assert!(ht > hs * 2.5, "{hs} vs {ht}");

        let wide = create_pillar_model(1.0, 2.0, 3.0, 1.0);
        let size = wide.bounds().unwrap().size();
        assert!(size.x > size.z);
    }

    #[test]
    fn zero_dimension_drops_boxes() {
        assert!(create_treasure_chest_model(1.0, 0.0, 1.0, 1.0)
            .boxes
            .iter()
            .all(|b| b.scale.x > 0.0));
    }

    #[test]
    fn structural_groups_are_named_for_their_part() {
        let has = |model: &VoxelModel, part: BodyPart| {
            model.groups.iter().any(|g| classify_group(g).part == part)
        };
        assert!(has(&create_crate_model(1.0, 1.0, 1.0, 1.0), BodyPart::Frame));
        assert!(has(
            &create_treasure_chest_model(1.0, 1.0, 1.0, 1.0),
            BodyPart::Loot,
        ));
        assert!(has(&create_lantern_model(1.0), BodyPart::Glass));
        for model in [create_crate_model(1.0, 1.0, 1.0, 1.0), create_lantern_model(1.0)] {
            assert!(!has(&model, BodyPart::Other));
        }
    }
}
