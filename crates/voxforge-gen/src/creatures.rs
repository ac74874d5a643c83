//! Animal and monster archetypes.

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use voxforge_core::{BodyPart, Side, VoxelBox, VoxelModel};

use crate::sculpt::{eye, group, mirror, ring_point, segment, sided, taper, Sculptor};

/// Four-legged beast with a tapering torso, snout and curling tail.
pub fn create_beast_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let body = group(BodyPart::Torso);
    let head = group(BodyPart::Head);

    for i in 0..6 {
        let t = i as f32 / 5.0;
        let w = taper(0.9, 0.3, t);
        m.push(VoxelBox::new(
            format!("torso_{i}"),
            &body,
            Vec3::new(0.0, 1.1, 0.6 - t * 1.2),
            Vec3::new(w, w * 0.8, 0.26),
        ));
    }
    m.push(
        VoxelBox::new(
            "belly",
            &body,
            Vec3::new(0.0, 0.8, 0.0),
            Vec3::new(0.7, 0.2, 1.0),
        )
        .secondary(),
    );
    for i in 0..4 {
        m.push(
            VoxelBox::new(
                format!("mane_{i}"),
                &body,
                Vec3::new(0.0, 1.55, 0.5 - i as f32 * 0.2),
                Vec3::new(0.2, 0.15, 0.18),
            )
            .secondary()
            .tint(0.8),
        );
    }

    m.push(VoxelBox::new(
        "skull",
        &head,
        Vec3::new(0.0, 1.45, 1.0),
        Vec3::new(0.6, 0.55, 0.6),
    ));
    m.push(
        VoxelBox::new(
            "snout",
            &head,
            Vec3::new(0.0, 1.3, 1.4),
            Vec3::new(0.35, 0.3, 0.35),
        )
        .secondary(),
    );
    m.push(
        VoxelBox::new(
            "nose",
            &head,
            Vec3::new(0.0, 1.38, 1.6),
            Vec3::new(0.15, 0.1, 0.08),
        )
        .custom("#1a1a1a"),
    );
    for side in Side::PAIR {
        let s = side.as_str();
        m.push(VoxelBox::new(
            format!("ear_{s}"),
            &head,
            mirror(side, Vec3::new(0.22, 1.8, 0.9)),
            Vec3::new(0.12, 0.22, 0.08),
        ));
        m.push(eye(
            format!("eye_{s}"),
            &head,
            mirror(side, Vec3::new(0.18, 1.55, 1.31)),
            0.09,
        ));
        m.push(
            VoxelBox::new(
                format!("fang_{s}"),
                &head,
                mirror(side, Vec3::new(0.1, 1.12, 1.52)),
                Vec3::new(0.05, 0.12, 0.05),
            )
            .custom("#f0ead6"),
        );
    }

    for (li, z) in [0.45f32, -0.45].into_iter().enumerate() {
        for side in Side::PAIR {
            let leg = segment(BodyPart::Leg, side, li as u32);
            for seg in 0..3 {
                let w = taper(0.28, 0.05, seg as f32);
                m.push(VoxelBox::new(
                    format!("leg_{li}_{seg}"),
                    &leg,
                    mirror(side, Vec3::new(0.35, 0.72 - seg as f32 * 0.25, z)),
                    Vec3::new(w, 0.26, w),
                ));
            }
            m.push(
                VoxelBox::new(
                    "paw",
                    &leg,
                    mirror(side, Vec3::new(0.35, 0.06, z + 0.05)),
                    Vec3::new(0.24, 0.12, 0.3),
                )
                .secondary(),
            );
        }
    }

    for i in 0..6u32 {
        let t = i as f32 / 5.0;
        let w = taper(0.2, 0.12, t);
        m.push(VoxelBox::cube(
            format!("tail_{i}"),
            segment(BodyPart::Tail, Side::Center, i),
            Vec3::new(0.0, 1.2 + (t * PI).sin() * 0.35, -0.75 - i as f32 * 0.16),
            w.max(0.06),
        ));
    }

    m.finish()
}

/// Lean wolf: narrow chest, long muzzle, bushy tail.
pub fn create_wolf_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let body = group(BodyPart::Torso);
    let head = group(BodyPart::Head);

    for i in 0..5 {
        let t = i as f32 / 4.0;
        let h = taper(0.6, 0.2, t);
        m.push(VoxelBox::new(
            format!("ribs_{i}"),
            &body,
            Vec3::new(0.0, 0.95 + t * 0.05, 0.5 - t),
            Vec3::new(0.5, h, 0.24),
        ));
    }
    m.push(
        VoxelBox::new(
            "ruff",
            &body,
            Vec3::new(0.0, 1.15, 0.55),
            Vec3::new(0.62, 0.5, 0.3),
        )
        .secondary(),
    );

    m.push(VoxelBox::new(
        "skull",
        &head,
        Vec3::new(0.0, 1.35, 0.85),
        Vec3::new(0.42, 0.4, 0.42),
    ));
    m.push(
        VoxelBox::new(
            "muzzle",
            &head,
            Vec3::new(0.0, 1.25, 1.2),
            Vec3::new(0.22, 0.2, 0.4),
        )
        .secondary(),
    );
    for side in Side::PAIR {
        let s = side.as_str();
        m.push(VoxelBox::new(
            format!("ear_{s}"),
            &head,
            mirror(side, Vec3::new(0.13, 1.65, 0.8)),
            Vec3::new(0.1, 0.22, 0.06),
        ));
        m.push(eye(
            format!("eye_{s}"),
            &head,
            mirror(side, Vec3::new(0.12, 1.42, 1.06)),
            0.07,
        ));
    }

    for (li, z) in [0.4f32, -0.4].into_iter().enumerate() {
        for side in Side::PAIR {
            let leg = segment(BodyPart::Leg, side, li as u32);
            m.push(VoxelBox::new(
                "thigh",
                &leg,
                mirror(side, Vec3::new(0.2, 0.6, z)),
                Vec3::new(0.16, 0.35, 0.2),
            ));
            m.push(VoxelBox::new(
                "shin",
                &leg,
                mirror(side, Vec3::new(0.2, 0.28, z + 0.03)),
                Vec3::new(0.12, 0.3, 0.12),
            ));
            m.push(
                VoxelBox::new(
                    "paw",
                    &leg,
                    mirror(side, Vec3::new(0.2, 0.06, z + 0.07)),
                    Vec3::new(0.15, 0.1, 0.2),
                )
                .secondary(),
            );
        }
    }

    for i in 0..5u32 {
        let t = i as f32 / 4.0;
        m.push(
            VoxelBox::cube(
                format!("tail_{i}"),
                segment(BodyPart::Tail, Side::Center, i),
                Vec3::new(0.0, 1.05 - t * 0.25, -0.6 - i as f32 * 0.15),
                0.18 + (t * PI).sin() * 0.06,
            )
            .secondary(),
        );
    }

    m.finish()
}

/// Eight-legged spider with jointed legs and a cluster of glowing eyes.
pub fn create_spider_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let body = group(BodyPart::Torso);
    let head = group(BodyPart::Head);

    for i in 0..4 {
        let t = i as f32 / 3.0;
        let w = 0.5 + (t * PI).sin() * 0.35;
        m.push(VoxelBox::new(
            format!("abdomen_{i}"),
            &body,
            Vec3::new(0.0, 0.6 + (t * PI).sin() * 0.15, -0.35 - t * 0.6),
            Vec3::new(w, w * 0.8, 0.22),
        ));
    }
    for i in 0..3 {
        m.push(
            VoxelBox::new(
                format!("stripe_{i}"),
                &body,
                Vec3::new(0.0, 0.98, -0.45 - i as f32 * 0.2),
                Vec3::new(0.12, 0.04, 0.12),
            )
            .glow()
            .tint(2.0)
            .emissive(0.8),
        );
    }
    m.push(
        VoxelBox::new(
            "thorax",
            &body,
            Vec3::new(0.0, 0.55, 0.1),
            Vec3::new(0.5, 0.35, 0.45),
        )
        .secondary(),
    );
    m.push(VoxelBox::new(
        "head",
        &head,
        Vec3::new(0.0, 0.55, 0.45),
        Vec3::new(0.34, 0.28, 0.26),
    ));
    for row in 0..2 {
        for side in Side::PAIR {
            for k in 0..2 {
                m.push(eye(
                    format!("eye_{row}_{k}"),
                    &head,
                    mirror(side, Vec3::new(0.05 + k as f32 * 0.08, 0.62 + row as f32 * 0.07, 0.59)),
                    0.05,
                ));
            }
        }
    }
    for side in Side::PAIR {
        m.push(
            VoxelBox::new(
                "fang",
                &head,
                mirror(side, Vec3::new(0.06, 0.42, 0.6)),
                Vec3::new(0.05, 0.14, 0.05),
            )
            .custom("#2b2b2b"),
        );
    }

    for li in 0..4u32 {
        let z = 0.3 - li as f32 * 0.18;
        let splay = (li as f32 - 1.5) * 0.35;
        for side in Side::PAIR {
            let leg = segment(BodyPart::Leg, side, li);
            for seg in 0..3 {
                let reach = 0.35 + seg as f32 * 0.28;
                let y = if seg == 0 { 0.75 } else if seg == 1 { 0.55 } else { 0.2 };
                m.push(VoxelBox::new(
                    format!("leg_{li}_{seg}"),
                    &leg,
                    mirror(side, Vec3::new(reach * splay.cos(), y, z + reach * splay.sin() * 0.5)),
                    Vec3::new(0.3, 0.07, 0.07),
                ));
            }
        }
    }

    m.finish()
}

/// Serpent: a sinuous chain of tapering segments with a hooded head.
pub fn create_serpent_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let head = group(BodyPart::Head);
    let segments = 16u32;

    for i in 0..segments {
        let t = i as f32 / (segments - 1) as f32;
        let w = taper(0.42, 0.32, t);
        let pos = Vec3::new((t * TAU * 1.5).sin() * 0.45, 0.22 + w * 0.3, 1.2 - t * 3.2);
        let g = if i < segments / 2 {
            group(BodyPart::Torso)
        } else {
            segment(BodyPart::Tail, Side::Center, i - segments / 2)
        };
        m.push(VoxelBox::new(
            format!("segment_{i}"),
            &g,
            pos,
            Vec3::new(w, w * 0.75, 0.24),
        ));
        if i % 2 == 0 {
            m.push(
                VoxelBox::new(
                    format!("belly_{i}"),
                    &g,
                    pos - Vec3::Y * w * 0.35,
                    Vec3::new(w * 0.7, 0.05, 0.2),
                )
                .secondary(),
            );
        }
    }
    m.push(
        VoxelBox::new(
            "rattle",
            segment(BodyPart::Tail, Side::Center, segments / 2 - 1),
            Vec3::new(0.0, 0.2, -2.1),
            Vec3::splat(0.1),
        )
        .glow()
        .emissive(0.6),
    );

    m.push(VoxelBox::new(
        "skull",
        &head,
        Vec3::new(0.0, 0.55, 1.45),
        Vec3::new(0.42, 0.26, 0.45),
    ));
    m.push(
        VoxelBox::new(
            "hood",
            &head,
            Vec3::new(0.0, 0.62, 1.25),
            Vec3::new(0.8, 0.5, 0.08),
        )
        .secondary(),
    );
    m.push(
        VoxelBox::new(
            "tongue",
            &head,
            Vec3::new(0.0, 0.48, 1.78),
            Vec3::new(0.04, 0.02, 0.22),
        )
        .custom("#cc2244"),
    );
    for side in Side::PAIR {
        m.push(eye(
            format!("eye_{}", side.as_str()),
            &head,
            mirror(side, Vec3::new(0.16, 0.64, 1.6)),
            0.07,
        ));
    }

    m.finish()
}

/// Dragon: long neck, horned head, membrane wings, spiked tail and four legs.
pub fn create_dragon_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let body = group(BodyPart::Torso);
    let head = group(BodyPart::Head);
    let neck = group(BodyPart::Neck);

    for i in 0..7 {
        let t = i as f32 / 6.0;
        let w = 0.9 + (t * PI).sin() * 0.4;
        m.push(VoxelBox::new(
            format!("torso_{i}"),
            &body,
            Vec3::new(0.0, 1.5, 0.9 - t * 1.8),
            Vec3::new(w, w * 0.8, 0.3),
        ));
        m.push(
            VoxelBox::new(
                format!("spine_{i}"),
                &body,
                Vec3::new(0.0, 1.5 + w * 0.45, 0.9 - t * 1.8),
                Vec3::new(0.08, 0.2, 0.12),
            )
            .secondary(),
        );
    }
    m.push(
        VoxelBox::new(
            "belly",
            &body,
            Vec3::new(0.0, 1.05, 0.0),
            Vec3::new(0.8, 0.12, 1.6),
        )
        .secondary()
        .tint(1.2),
    );

    for i in 0..5 {
        let t = i as f32 / 4.0;
        m.push(VoxelBox::cube(
            format!("neck_{i}"),
            &neck,
            Vec3::new(0.0, 1.8 + t * 0.8, 1.1 + t * 0.5),
            taper(0.45, 0.15, t),
        ));
    }

    m.push(VoxelBox::new(
        "skull",
        &head,
        Vec3::new(0.0, 2.75, 1.85),
        Vec3::new(0.55, 0.45, 0.6),
    ));
    m.push(
        VoxelBox::new(
            "jaw",
            &head,
            Vec3::new(0.0, 2.55, 2.2),
            Vec3::new(0.4, 0.18, 0.55),
        )
        .secondary(),
    );
    for side in Side::PAIR {
        let s = side.as_str();
        m.push(eye(
            format!("eye_{s}"),
            &head,
            mirror(side, Vec3::new(0.2, 2.85, 2.08)),
            0.09,
        ));
        for k in 0..3 {
            m.push(
                VoxelBox::cube(
                    format!("horn_{s}_{k}"),
                    &head,
                    mirror(
                        side,
                        Vec3::new(
                            0.2 + k as f32 * 0.05,
                            3.05 + k as f32 * 0.14,
                            1.65 - k as f32 * 0.12,
                        ),
                    ),
                    0.12 - k as f32 * 0.025,
                )
                .custom("#d8d0b8"),
            );
        }
    }
    m.push(
        VoxelBox::new(
            "breath",
            &head,
            Vec3::new(0.0, 2.55, 2.55),
            Vec3::new(0.2, 0.12, 0.15),
        )
        .glow()
        .tint(3.0)
        .emissive(2.0),
    );

    for side in Side::PAIR {
        let wing = sided(BodyPart::Wing, side);
        for bone in 0..4 {
            let reach = 0.7 + bone as f32 * 0.45;
            m.push(
                VoxelBox::new(
                    format!("bone_{bone}"),
                    &wing,
                    mirror(side, Vec3::new(reach, 2.1 + bone as f32 * 0.1, 0.2)),
                    Vec3::new(0.45, 0.08, 0.08),
                )
                .secondary(),
            );
            for k in 0..3 {
                m.push(
                    VoxelBox::new(
                        format!("membrane_{bone}_{k}"),
                        &wing,
                        mirror(
                            side,
                            Vec3::new(reach, 2.0 - k as f32 * 0.05, -0.15 - k as f32 * 0.3),
                        ),
                        Vec3::new(0.44, 0.03, 0.3),
                    )
                    .tint(0.7),
                );
            }
        }
    }

    for (li, z) in [0.6f32, -0.6].into_iter().enumerate() {
        for side in Side::PAIR {
            let leg = segment(BodyPart::Leg, side, li as u32);
            m.push(VoxelBox::new(
                "thigh",
                &leg,
                mirror(side, Vec3::new(0.55, 1.0, z)),
                Vec3::new(0.32, 0.5, 0.35),
            ));
            m.push(VoxelBox::new(
                "shin",
                &leg,
                mirror(side, Vec3::new(0.55, 0.45, z + 0.08)),
                Vec3::new(0.24, 0.5, 0.24),
            ));
            for claw in 0..3 {
                m.push(
                    VoxelBox::new(
                        format!("claw_{claw}"),
                        &leg,
                        mirror(side, Vec3::new(0.45 + claw as f32 * 0.1, 0.06, z + 0.25)),
                        Vec3::new(0.06, 0.08, 0.16),
                    )
                    .custom("#e8e0c8"),
                );
            }
        }
    }

    for i in 0..9u32 {
        let t = i as f32 / 8.0;
        let tail = segment(BodyPart::Tail, Side::Center, i);
        let pos = Vec3::new((t * PI).sin() * 0.3, 1.4 - t * 0.6, -1.1 - i as f32 * 0.28);
        m.push(VoxelBox::cube(format!("tail_{i}"), &tail, pos, taper(0.5, 0.38, t)));
        m.push(
            VoxelBox::new(
                format!("spike_{i}"),
                &tail,
                pos + Vec3::Y * 0.25,
                Vec3::new(0.06, 0.18, 0.1),
            )
            .secondary(),
        );
    }

    m.finish()
}

/// Bat: small furry body with wide, fingered wings.
pub fn create_bat_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let body = group(BodyPart::Torso);
    let head = group(BodyPart::Head);

    m.push(VoxelBox::new(
        "torso",
        &body,
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.3, 0.42, 0.26),
    ));
    m.push(
        VoxelBox::new(
            "chest",
            &body,
            Vec3::new(0.0, 1.02, 0.12),
            Vec3::new(0.22, 0.3, 0.05),
        )
        .secondary(),
    );
    m.push(VoxelBox::cube("head", &head, Vec3::new(0.0, 1.33, 0.02), 0.26));
    for side in Side::PAIR {
        let s = side.as_str();
        m.push(VoxelBox::new(
            format!("ear_{s}"),
            &head,
            mirror(side, Vec3::new(0.09, 1.55, 0.0)),
            Vec3::new(0.07, 0.2, 0.04),
        ));
        m.push(eye(
            format!("eye_{s}"),
            &head,
            mirror(side, Vec3::new(0.07, 1.36, 0.16)),
            0.05,
        ));

        let wing = sided(BodyPart::Wing, side);
        for finger in 0..4 {
            let angle = 0.5 - finger as f32 * 0.35;
            for k in 0..3 {
                let r = 0.25 + k as f32 * 0.22;
                m.push(
                    VoxelBox::new(
                        format!("membrane_{finger}_{k}"),
                        &wing,
                        mirror(
                            side,
                            Vec3::new(0.15 + r * angle.cos(), 1.05 + r * angle.sin(), -0.02),
                        ),
                        Vec3::new(0.22, 0.2, 0.02),
                    )
                    .secondary()
                    .tint(0.8),
                );
            }
        }
        let foot = sided(BodyPart::Foot, side);
        m.push(VoxelBox::new(
            "talon",
            &foot,
            mirror(side, Vec3::new(0.08, 0.72, 0.0)),
            Vec3::new(0.05, 0.14, 0.05),
        ));
    }

    m.finish()
}

/// Slime: a squat stack of translucent rings with a glowing core.
pub fn create_slime_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let body = group(BodyPart::Torso);
    let layers = 5;

    for layer in 0..layers {
        let t = layer as f32 / (layers - 1) as f32;
        let radius = 0.55 * (1.0 - t * t).sqrt().max(0.25);
        let count = 6 + (radius * 12.0) as usize;
        for i in 0..count {
            m.push(
                VoxelBox::cube(
                    format!("gel_{layer}_{i}"),
                    &body,
                    ring_point(i, count, radius, 0.12 + t * 0.7, t),
                    0.22,
                )
                .tint(1.0 + t * 0.2),
            );
        }
    }
    m.push(
        VoxelBox::cube("core", &body, Vec3::new(0.0, 0.4, 0.0), 0.35)
            .glow()
            .tint(2.2)
            .emissive(1.2),
    );
    let head = group(BodyPart::Head);
    for side in Side::PAIR {
        m.push(
            VoxelBox::cube(
                format!("eye_{}", side.as_str()),
                &head,
                mirror(side, Vec3::new(0.16, 0.6, 0.5)),
                0.1,
            )
            .custom("#101010"),
        );
    }

    m.finish()
}

/// Scorpion: segmented body, pincers and a raised stinger arc.
pub fn create_scorpion_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let body = group(BodyPart::Torso);
    let head = group(BodyPart::Head);

    for i in 0..5 {
        let t = i as f32 / 4.0;
        m.push(VoxelBox::new(
            format!("plate_{i}"),
            &body,
            Vec3::new(0.0, 0.35, 0.4 - t * 0.8),
            Vec3::new(taper(0.7, 0.2, t), 0.22, 0.2),
        ));
    }
    m.push(
        VoxelBox::new(
            "head",
            &head,
            Vec3::new(0.0, 0.35, 0.62),
            Vec3::new(0.4, 0.2, 0.25),
        )
        .secondary(),
    );
    for side in Side::PAIR {
        m.push(eye(
            format!("eye_{}", side.as_str()),
            &head,
            mirror(side, Vec3::new(0.08, 0.48, 0.7)),
            0.05,
        ));

        let arm = sided(BodyPart::Arm, side);
        m.push(VoxelBox::new(
            "upper",
            &arm,
            mirror(side, Vec3::new(0.35, 0.35, 0.8)),
            Vec3::new(0.1, 0.1, 0.35),
        ));
        let claw = sided(BodyPart::Hand, side);
        m.push(
            VoxelBox::new(
                "pincer",
                &claw,
                mirror(side, Vec3::new(0.42, 0.35, 1.1)),
                Vec3::new(0.25, 0.15, 0.25),
            )
            .secondary(),
        );
        m.push(
            VoxelBox::new(
                "finger",
                &claw,
                mirror(side, Vec3::new(0.36, 0.35, 1.3)),
                Vec3::new(0.06, 0.08, 0.2),
            )
            .secondary(),
        );

        for li in 0..4u32 {
            let leg = segment(BodyPart::Leg, side, li);
            let z = 0.3 - li as f32 * 0.22;
            m.push(VoxelBox::new(
                "upper",
                &leg,
                mirror(side, Vec3::new(0.45, 0.32, z)),
                Vec3::new(0.25, 0.05, 0.05),
            ));
            m.push(VoxelBox::new(
                "lower",
                &leg,
                mirror(side, Vec3::new(0.6, 0.14, z)),
                Vec3::new(0.05, 0.3, 0.05),
            ));
        }
    }

    for i in 0..7u32 {
        let t = i as f32 / 6.0;
        let angle = t * PI * 0.9;
        let tail = segment(BodyPart::Tail, Side::Center, i);
        m.push(VoxelBox::cube(
            format!("tail_{i}"),
            &tail,
            Vec3::new(0.0, 0.4 + angle.sin() * 0.9, -0.45 - (1.0 - angle.cos()) * 0.45),
            taper(0.2, 0.08, t),
        ));
    }
    m.push(
        VoxelBox::new(
            "stinger",
            segment(BodyPart::Tail, Side::Center, 6),
            Vec3::new(0.0, 1.2, 0.05),
            Vec3::new(0.06, 0.06, 0.2),
        )
        .glow()
        .tint(3.0)
        .emissive(1.5),
    );

    m.finish()
}

/// Crab: wide shell on six legs with two oversized claws.
pub fn create_crab_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let body = group(BodyPart::Torso);

    for i in 0..3 {
        let w = 0.9 - i as f32 * 0.2;
        m.push(VoxelBox::new(
            format!("shell_{i}"),
            &body,
            Vec3::new(0.0, 0.35 + i as f32 * 0.1, 0.0),
            Vec3::new(w, 0.12, w * 0.7),
        ));
    }
    m.push(
        VoxelBox::new(
            "underside",
            &body,
            Vec3::new(0.0, 0.26, 0.0),
            Vec3::new(0.8, 0.06, 0.55),
        )
        .secondary(),
    );
    let head = group(BodyPart::Head);
    for side in Side::PAIR {
        let s = side.as_str();
        m.push(VoxelBox::new(
            format!("stalk_{s}"),
            &head,
            mirror(side, Vec3::new(0.12, 0.6, 0.3)),
            Vec3::new(0.04, 0.15, 0.04),
        ));
        m.push(eye(
            format!("eye_{s}"),
            &head,
            mirror(side, Vec3::new(0.12, 0.7, 0.3)),
            0.07,
        ));

        let arm = sided(BodyPart::Arm, side);
        m.push(VoxelBox::new(
            "arm",
            &arm,
            mirror(side, Vec3::new(0.5, 0.4, 0.35)),
            Vec3::new(0.28, 0.08, 0.08),
        ));
        let claw = sided(BodyPart::Hand, side);
        m.push(
            VoxelBox::new(
                "claw",
                &claw,
                mirror(side, Vec3::new(0.7, 0.45, 0.55)),
                Vec3::new(0.28, 0.2, 0.3),
            )
            .secondary(),
        );
        m.push(
            VoxelBox::new(
                "pincer",
                &claw,
                mirror(side, Vec3::new(0.65, 0.52, 0.74)),
                Vec3::new(0.08, 0.08, 0.16),
            )
            .secondary(),
        );

        for li in 0..3u32 {
            let leg = segment(BodyPart::Leg, side, li);
            let z = 0.12 - li as f32 * 0.17;
            m.push(VoxelBox::new(
                "upper",
                &leg,
                mirror(side, Vec3::new(0.55, 0.3, z)),
                Vec3::new(0.25, 0.05, 0.05),
            ));
            m.push(VoxelBox::new(
                "lower",
                &leg,
                mirror(side, Vec3::new(0.7, 0.14, z)),
                Vec3::new(0.05, 0.28, 0.05),
            ));
        }
    }

    m.finish()
}

/// Beetle: domed carapace split into wing cases, horn and six legs.
pub fn create_beetle_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let body = group(BodyPart::Torso);
    let head = group(BodyPart::Head);

    for side in Side::PAIR {
        let wing = sided(BodyPart::Wing, side);
        for i in 0..4 {
            let t = i as f32 / 3.0;
            let h = 0.3 + (t * PI).sin() * 0.15;
            m.push(VoxelBox::new(
                format!("elytron_{i}"),
                &wing,
                mirror(side, Vec3::new(0.17, 0.4 + h * 0.5, 0.25 - t * 0.7)),
                Vec3::new(0.32, h, 0.22),
            ));
        }
        m.push(
            VoxelBox::new(
                "sheen",
                &wing,
                mirror(side, Vec3::new(0.17, 0.78, -0.1)),
                Vec3::new(0.08, 0.02, 0.4),
            )
            .glow()
            .tint(1.5)
            .emissive(0.4),
        );
        for li in 0..3u32 {
            let leg = segment(BodyPart::Leg, side, li);
            let z = 0.2 - li as f32 * 0.25;
            m.push(
                VoxelBox::new(
                    "femur",
                    &leg,
                    mirror(side, Vec3::new(0.42, 0.3, z)),
                    Vec3::new(0.22, 0.05, 0.05),
                )
                .secondary(),
            );
            m.push(
                VoxelBox::new(
                    "tibia",
                    &leg,
                    mirror(side, Vec3::new(0.54, 0.14, z)),
                    Vec3::new(0.05, 0.26, 0.05),
                )
                .secondary(),
            );
        }
    }
    m.push(
        VoxelBox::new(
            "thorax",
            &body,
            Vec3::new(0.0, 0.45, 0.42),
            Vec3::new(0.5, 0.3, 0.22),
        )
        .secondary(),
    );
    m.push(VoxelBox::new(
        "head",
        &head,
        Vec3::new(0.0, 0.4, 0.62),
        Vec3::new(0.3, 0.22, 0.2),
    ));
    for k in 0..3 {
        m.push(
            VoxelBox::cube(
                format!("horn_{k}"),
                &head,
                Vec3::new(0.0, 0.5 + k as f32 * 0.09, 0.75 + k as f32 * 0.07),
                0.1 - k as f32 * 0.02,
            )
            .secondary(),
        );
    }
    for side in Side::PAIR {
        m.push(eye(
            format!("eye_{}", side.as_str()),
            &head,
            mirror(side, Vec3::new(0.12, 0.45, 0.72)),
            0.05,
        ));
    }

    m.finish()
}

/// Jellyfish: a domed bell of rings trailing glowing tendrils.
pub fn create_jellyfish_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let body = group(BodyPart::Torso);

    for layer in 0..4 {
        let t = layer as f32 / 3.0;
        let radius = 0.6 * (1.0 - t * t * 0.8).sqrt();
        let count = 8 + layer * 2;
        for i in 0..count {
            m.push(
                VoxelBox::new(
                    format!("bell_{layer}_{i}"),
                    &body,
                    ring_point(i, count, radius, 1.6 + t * 0.4, 0.0),
                    Vec3::new(0.22, 0.14, 0.22),
                )
                .tint(1.1),
            );
        }
    }
    m.push(VoxelBox::cube("cap", &body, Vec3::new(0.0, 2.05, 0.0), 0.3));
    m.push(
        VoxelBox::cube("organ", &body, Vec3::new(0.0, 1.75, 0.0), 0.3)
            .glow()
            .tint(2.0)
            .emissive(1.0),
    );

    let tendrils = 8;
    for k in 0..tendrils {
        let tendril = segment(BodyPart::Tentacle, Side::Center, k as u32);
        let base = ring_point(k, tendrils, 0.4, 1.5, 0.2);
        for seg in 0..6 {
            let t = seg as f32 / 5.0;
            let sway = (t * PI * 2.0 + k as f32).sin() * 0.08;
            m.push(
                VoxelBox::cube(
                    format!("tendril_{k}_{seg}"),
                    &tendril,
                    base + Vec3::new(sway, -0.2 - seg as f32 * 0.2, sway),
                    0.06,
                )
                .glow()
                .tint(2.0 - t)
                .emissive(1.0 - t * 0.5),
            );
        }
    }

    m.finish()
}

/// Phoenix: a bright bird with spread flame wings and a streaming tail.
pub fn create_phoenix_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let body = group(BodyPart::Torso);
    let head = group(BodyPart::Head);

    for i in 0..4 {
        let t = i as f32 / 3.0;
        m.push(VoxelBox::new(
            format!("breast_{i}"),
            &body,
            Vec3::new(0.0, 1.2 - t * 0.1, 0.3 - t * 0.3),
            Vec3::splat(taper(0.45, 0.15, t)),
        ));
    }
    m.push(VoxelBox::cube("head", &head, Vec3::new(0.0, 1.55, 0.45), 0.26));
    m.push(
        VoxelBox::new(
            "beak",
            &head,
            Vec3::new(0.0, 1.5, 0.65),
            Vec3::new(0.08, 0.08, 0.16),
        )
        .custom("#ffcc33"),
    );
    for k in 0..3 {
        m.push(
            VoxelBox::new(
                format!("crest_{k}"),
                &head,
                Vec3::new(0.0, 1.75 + k as f32 * 0.08, 0.38 - k as f32 * 0.08),
                Vec3::new(0.04, 0.14, 0.04),
            )
            .glow()
            .tint(2.5)
            .emissive(1.5),
        );
    }
    for side in Side::PAIR {
        m.push(eye(
            format!("eye_{}", side.as_str()),
            &head,
            mirror(side, Vec3::new(0.1, 1.6, 0.55)),
            0.05,
        ));
        let wing = sided(BodyPart::Wing, side);
        for f in 0..6 {
            let t = f as f32 / 5.0;
            m.push(
                VoxelBox::new(
                    format!("feather_{f}"),
                    &wing,
                    mirror(
                        side,
                        Vec3::new(0.3 + t * 1.2, 1.3 + (t * PI).sin() * 0.35, 0.1 - t * 0.2),
                    ),
                    Vec3::new(0.22, 0.05, 0.35 - t * 0.15),
                )
                .secondary()
                .tint(1.2 + t),
            );
            m.push(
                VoxelBox::new(
                    format!("flame_{f}"),
                    &wing,
                    mirror(
                        side,
                        Vec3::new(0.3 + t * 1.2, 1.25 + (t * PI).sin() * 0.35, -0.15 - t * 0.2),
                    ),
                    Vec3::new(0.16, 0.04, 0.16),
                )
                .glow()
                .tint(3.0)
                .emissive(2.0),
            );
        }
        let leg = sided(BodyPart::Leg, side);
        m.push(
            VoxelBox::new(
                "shank",
                &leg,
                mirror(side, Vec3::new(0.1, 0.8, 0.1)),
                Vec3::new(0.04, 0.3, 0.04),
            )
            .custom("#ffcc33"),
        );
    }
    for i in 0..5u32 {
        let t = i as f32 / 4.0;
        m.push(
            VoxelBox::new(
                format!("plume_{i}"),
                segment(BodyPart::Tail, Side::Center, i),
                Vec3::new(0.0, 1.0 - t * 0.4, -0.2 - t * 0.9),
                Vec3::new(0.3 - t * 0.1, 0.04, 0.25),
            )
            .glow()
            .tint(2.0 + t)
            .emissive(1.0 + t),
        );
    }

    m.finish()
}
