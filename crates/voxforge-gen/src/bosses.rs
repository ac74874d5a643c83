//! Boss archetypes.

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use voxforge_core::{BodyPart, Side, VoxelBox, VoxelModel};

use crate::sculpt::{eye, group, mirror, ring_point, segment, sided, taper, Sculptor};

/// Number of heads on the hydra.
const HYDRA_HEADS: u32 = 5;
/// Number of arms on the kraken.
const KRAKEN_ARMS: u32 = 8;

/// Hydra: a squat body sprouting a fan of serpentine necks, each ending in
/// a horned head.
pub fn create_hydra_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let body = group(BodyPart::Torso);

    for i in 0..3 {
        let t = i as f32 / 2.0;
        m.push(VoxelBox::new(
            format!("body_{i}"),
            &body,
            Vec3::new(0.0, 0.8 + t * 0.3, -0.3 + t * 0.4),
            Vec3::new(1.6 - t * 0.3, 0.6, 1.4 - t * 0.2),
        ));
    }
    m.push(
        VoxelBox::new(
            "belly",
            &body,
            Vec3::new(0.0, 0.55, 0.0),
            Vec3::new(1.2, 0.2, 1.2),
        )
        .secondary(),
    );
    for side in Side::PAIR {
        for (i, z) in [0.45f32, -0.45].into_iter().enumerate() {
            let leg = segment(BodyPart::Leg, side, i as u32);
            m.push(VoxelBox::new(
                "thigh",
                &leg,
                mirror(side, Vec3::new(0.75, 0.45, z)),
                Vec3::new(0.35, 0.5, 0.4),
            ));
            m.push(
                VoxelBox::new(
                    "claw",
                    &leg,
                    mirror(side, Vec3::new(0.8, 0.1, z + 0.1)),
                    Vec3::new(0.4, 0.2, 0.5),
                )
                .secondary(),
            );
        }
    }
    for k in 0..6u32 {
        let t = k as f32 / 5.0;
        m.push(VoxelBox::cube(
            format!("tail_{k}"),
            segment(BodyPart::Tail, Side::Center, k),
            Vec3::new(0.0, 0.8 - t * 0.5, -1.1 - t * 1.4),
            taper(0.45, 0.35, t),
        ));
    }

    for h in 0..HYDRA_HEADS {
        let spread = (h as f32 / (HYDRA_HEADS - 1) as f32 - 0.5) * PI * 0.7;
        let dir = Vec3::new(spread.sin(), 0.0, spread.cos());
        let neck = segment(BodyPart::Neck, Side::Center, h);
        let links = 7;
        let mut tip = Vec3::ZERO;
        for k in 0..links {
            let t = k as f32 / (links - 1) as f32;
            let reach = 0.6 + t * 1.1;
            let sway = (t * PI + h as f32).sin() * 0.15;
            tip = Vec3::new(dir.x * reach + sway, 1.2 + t * 1.6, dir.z * reach);
            m.push(
                VoxelBox::cube(format!("link_{k}"), &neck, tip, taper(0.36, 0.14, t))
                    .tint(1.0 - t * 0.1),
            );
        }
        let head = segment(BodyPart::Head, Side::Center, h);
        let snout = tip + dir * 0.3 + Vec3::Y * 0.1;
        m.push(VoxelBox::new("skull", &head, snout, Vec3::new(0.36, 0.3, 0.44)));
        m.push(
            VoxelBox::new(
                "jaw",
                &head,
                snout + dir * 0.22 - Vec3::Y * 0.1,
                Vec3::new(0.28, 0.1, 0.3),
            )
            .secondary(),
        );
        for side in Side::PAIR {
            let across = Vec3::new(dir.z, 0.0, -dir.x) * side.sign();
            m.push(eye(
                format!("eye_{}", side.as_str()),
                &head,
                snout + across * 0.13 + dir * 0.2 + Vec3::Y * 0.08,
                0.06,
            ));
            m.push(
                VoxelBox::new(
                    format!("horn_{}", side.as_str()),
                    &head,
                    snout + across * 0.12 - dir * 0.15 + Vec3::Y * 0.25,
                    Vec3::new(0.06, 0.25, 0.06),
                )
                .custom("#d8d0b0"),
            );
        }
    }

    m.finish()
}

/// Kraken: a domed mantle over a ring of long curling tentacles.
pub fn create_kraken_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let head = group(BodyPart::Head);

    let layers = 6;
    for layer in 0..layers {
        let t = layer as f32 / (layers - 1) as f32;
        let radius = 0.9 * (1.0 - t * t).sqrt().max(0.2);
        let count = 10;
        for i in 0..count {
            let p = ring_point(i, count, radius, 1.6 + t * 1.4, t * 0.3);
            m.push(
                VoxelBox::cube(format!("mantle_{layer}_{i}"), &head, p, 0.36).tint(1.0 - t * 0.15),
            );
        }
    }
    m.push(VoxelBox::cube("mantle_top", &head, Vec3::new(0.0, 3.05, 0.0), 0.4));
    for side in Side::PAIR {
        m.push(
            VoxelBox::cube(
                format!("eye_{}", side.as_str()),
                &head,
                mirror(side, Vec3::new(0.45, 1.9, 0.75)),
                0.22,
            )
            .custom("#ffd000")
            .tint(1.5)
            .emissive(1.0),
        );
        m.push(
            VoxelBox::cube(
                format!("pupil_{}", side.as_str()),
                &head,
                mirror(side, Vec3::new(0.45, 1.9, 0.87)),
                0.08,
            )
            .custom("#000000"),
        );
    }
    m.push(
        VoxelBox::new(
            "beak",
            &head,
            Vec3::new(0.0, 1.3, 0.3),
            Vec3::new(0.25, 0.2, 0.25),
        )
        .secondary()
        .tint(0.6),
    );

    for arm in 0..KRAKEN_ARMS {
        let tentacle = segment(BodyPart::Tentacle, Side::Center, arm);
        let theta = arm as f32 / KRAKEN_ARMS as f32 * TAU;
        let links = 10;
        for k in 0..links {
            let t = k as f32 / (links - 1) as f32;
            let reach = 0.8 + t * 2.2;
            let curl = theta + t * 0.8;
            let y = 1.2 - t * 1.0 + (t * PI * 1.5).sin() * 0.3;
            let p = Vec3::new(curl.cos() * reach, y.max(0.1), curl.sin() * reach);
            m.push(
                VoxelBox::cube(format!("segment_{k}"), &tentacle, p, taper(0.34, 0.26, t))
                    .secondary()
                    .tint(1.0 + t * 0.2),
            );
            if k % 3 == 1 {
                m.push(
                    VoxelBox::cube(format!("sucker_{k}"), &tentacle, p - Vec3::Y * 0.14, 0.07)
                        .glow()
                        .tint(2.0)
                        .emissive(0.8),
                );
            }
        }
    }

    m.finish()
}

/// Lich king: a skeletal sorcerer in a tattered robe, crowned and
/// wreathed in orbiting soul fragments.
pub fn create_lich_king_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let body = group(BodyPart::Torso);

    for i in 0..8 {
        let t = i as f32 / 7.0;
        let w = taper(1.3, 0.7, t);
        m.push(
            VoxelBox::new(
                format!("robe_{i}"),
                &body,
                Vec3::new(0.0, 0.15 + t * 1.6, 0.0),
                Vec3::new(w, 0.24, w * 0.75),
            )
            .secondary(),
        );
    }
    for i in 0..10 {
        let p = ring_point(i, 10, 0.62, 0.05, 0.0);
        m.push(
            VoxelBox::new(
                format!("hem_{i}"),
                &body,
                p,
                Vec3::new(0.14, 0.2 - (i % 2) as f32 * 0.08, 0.14),
            )
            .secondary()
            .tint(0.7),
        );
    }
    m.push(
        VoxelBox::new(
            "mantle",
            &body,
            Vec3::new(0.0, 1.85, -0.05),
            Vec3::new(1.1, 0.2, 0.6),
        )
        .custom("#2a1a3a"),
    );
    m.push(
        VoxelBox::cube("phylactery", &body, Vec3::new(0.0, 1.4, 0.36), 0.16)
            .glow()
            .tint(3.5)
            .emissive(2.5),
    );

    let head = group(BodyPart::Head);
    let skull = Vec3::new(0.0, 2.25, 0.0);
    m.push(VoxelBox::cube("skull", &head, skull, 0.46).custom("#e8e4d4"));
    m.push(
        VoxelBox::new(
            "jaw",
            &head,
            skull - Vec3::Y * 0.27,
            Vec3::new(0.32, 0.1, 0.32),
        )
        .custom("#d8d4c4"),
    );
    for side in Side::PAIR {
        m.push(eye(
            format!("socket_{}", side.as_str()),
            &head,
            skull + mirror(side, Vec3::new(0.11, 0.03, 0.22)),
            0.09,
        ));
    }
    for i in 0..7 {
        let p = ring_point(i, 7, 0.26, skull.y + 0.3, PI / 2.0);
        let height = if i % 2 == 0 { 0.3 } else { 0.18 };
        m.push(
            VoxelBox::new(
                format!("crown_{i}"),
                &head,
                p,
                Vec3::new(0.08, height, 0.08),
            )
            .custom("#c0a040")
            .tint(1.3),
        );
    }
    m.push(
        VoxelBox::cube("crown_gem", &head, skull + Vec3::new(0.0, 0.3, 0.28), 0.08)
            .glow()
            .tint(3.0)
            .emissive(2.0),
    );

    for side in Side::PAIR {
        let arm = sided(BodyPart::Arm, side);
        for k in 0..3 {
            m.push(
                VoxelBox::new(
                    format!("sleeve_{k}"),
                    &arm,
                    mirror(
                        side,
                        Vec3::new(
                            0.6 + k as f32 * 0.08,
                            1.65 - k as f32 * 0.28,
                            0.05 * k as f32,
                        ),
                    ),
                    Vec3::new(0.26, 0.3, 0.26),
                )
                .secondary(),
            );
        }
        let hand = sided(BodyPart::Hand, side);
        for f in 0..3 {
            m.push(
                VoxelBox::new(
                    format!("finger_{f}"),
                    &hand,
                    mirror(side, Vec3::new(0.72 + (f as f32 - 1.0) * 0.05, 0.82, 0.15)),
                    Vec3::new(0.03, 0.14, 0.03),
                )
                .custom("#e8e4d4"),
            );
        }
    }

    let staff = group(BodyPart::Weapon);
    for k in 0..10 {
        m.push(
            VoxelBox::new(
                format!("staff_{k}"),
                &staff,
                Vec3::new(0.8, 0.1 + k as f32 * 0.25, 0.35),
                Vec3::new(0.07, 0.25, 0.07),
            )
            .custom("#3a2a2a"),
        );
    }
    m.push(
        VoxelBox::cube("staff_skull", &staff, Vec3::new(0.8, 2.7, 0.35), 0.22).custom("#e8e4d4"),
    );
    m.push(
        VoxelBox::cube("staff_flame", &staff, Vec3::new(0.8, 2.92, 0.35), 0.16)
            .glow()
            .tint(3.5)
            .emissive(3.0),
    );

    for k in 0..6u32 {
        let p = ring_point(k as usize, 6, 1.4, 1.2 + (k % 3) as f32 * 0.5, 0.2);
        m.push(
            VoxelBox::cube(
                format!("soul_{k}"),
                segment(BodyPart::Effect, Side::Center, k),
                p,
                0.12,
            )
            .glow()
            .tint(2.5)
            .emissive(2.0),
        );
    }

    m.finish()
}
