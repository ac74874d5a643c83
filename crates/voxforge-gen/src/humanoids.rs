//! Two-legged characters and enemies.
//!
//! All humanoids share one skeleton layout: hips at `leg_len`, a torso stack
//! above, arms hanging from the shoulders and a head on top. Archetypes add
//! gear and effects on top of [`Frame::build`].

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use voxforge_core::{BodyPart, Side, VoxelBox, VoxelModel};

use crate::sculpt::{eye, group, mirror, ring_point, segment, sided, taper, Sculptor};

/// Body proportions in unit space.
#[derive(Debug, Clone, Copy)]
struct Frame {
    leg_len: f32,
    torso_height: f32,
    shoulder_width: f32,
    limb_width: f32,
    head_size: f32,
}

/// Where gear attaches after the frame is built.
struct Anchors {
    shoulder_y: f32,
    head_y: f32,
}

impl Frame {
    const HUMAN: Self = Self {
        leg_len: 0.9,
        torso_height: 0.8,
        shoulder_width: 0.7,
        limb_width: 0.2,
        head_size: 0.42,
    };

    fn build(&self, m: &mut Sculptor, limb_tint: f32) -> Anchors {
        let body = group(BodyPart::Torso);
        let head = group(BodyPart::Head);

        for side in Side::PAIR {
            let leg = sided(BodyPart::Leg, side);
            let x = self.shoulder_width * 0.25;
            m.push(
                VoxelBox::new(
                    "thigh",
                    &leg,
                    mirror(side, Vec3::new(x, self.leg_len * 0.72, 0.0)),
                    Vec3::new(self.limb_width, self.leg_len * 0.5, self.limb_width),
                )
                .secondary(),
            );
            m.push(
                VoxelBox::new(
                    "shin",
                    &leg,
                    mirror(side, Vec3::new(x, self.leg_len * 0.3, 0.0)),
                    Vec3::new(
                        self.limb_width * 0.9,
                        self.leg_len * 0.45,
                        self.limb_width * 0.9,
                    ),
                )
                .secondary()
                .tint(limb_tint),
            );
            m.push(
                VoxelBox::new(
                    "boot",
                    &leg,
                    mirror(side, Vec3::new(x, 0.05, 0.04)),
                    Vec3::new(self.limb_width, 0.1, self.limb_width * 1.4),
                )
                .secondary()
                .tint(0.6),
            );
        }

        let layers = 4;
        for i in 0..layers {
            let t = i as f32 / (layers - 1) as f32;
            let w = self.shoulder_width * (0.75 + t * 0.25);
            m.push(VoxelBox::new(
                format!("torso_{i}"),
                &body,
                Vec3::new(
                    0.0,
                    self.leg_len + self.torso_height * (t + 0.5 / layers as f32) * 0.9,
                    0.0,
                ),
                Vec3::new(w, self.torso_height / layers as f32, self.limb_width * 1.6),
            ));
        }
        let shoulder_y = self.leg_len + self.torso_height * 0.95;

        for side in Side::PAIR {
            let arm = sided(BodyPart::Arm, side);
            let x = self.shoulder_width * 0.5 + self.limb_width * 0.55;
            m.push(VoxelBox::new(
                "upper",
                &arm,
                mirror(side, Vec3::new(x, shoulder_y - 0.2, 0.0)),
                Vec3::new(self.limb_width, 0.38, self.limb_width),
            ));
            m.push(
                VoxelBox::new(
                    "forearm",
                    &arm,
                    mirror(side, Vec3::new(x, shoulder_y - 0.55, 0.02)),
                    Vec3::new(self.limb_width * 0.9, 0.34, self.limb_width * 0.9),
                )
                .tint(limb_tint),
            );
            let hand = sided(BodyPart::Hand, side);
            m.push(
                VoxelBox::cube(
                    "hand",
                    &hand,
                    mirror(side, Vec3::new(x, shoulder_y - 0.78, 0.03)),
                    self.limb_width * 0.85,
                )
                .secondary(),
            );
        }

        let head_y = shoulder_y + 0.08 + self.head_size * 0.5;
        m.push(VoxelBox::cube("skull", &head, Vec3::new(0.0, head_y, 0.0), self.head_size));
        Anchors { shoulder_y, head_y }
    }
}

/// Armored knight with helmet visor, shield and sword.
pub fn create_knight_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let frame = Frame {
        shoulder_width: 0.8,
        ..Frame::HUMAN
    };
    let a = frame.build(&mut m, 1.0);
    let head = group(BodyPart::Head);
    let body = group(BodyPart::Torso);

    m.push(
        VoxelBox::new(
            "helmet",
            &head,
            Vec3::new(0.0, a.head_y + 0.05, 0.0),
            Vec3::new(0.48, 0.4, 0.48),
        )
        .custom("#9aa0a8"),
    );
    m.push(
        VoxelBox::new(
            "visor",
            &head,
            Vec3::new(0.0, a.head_y, 0.25),
            Vec3::new(0.34, 0.06, 0.02),
        )
        .glow()
        .tint(2.0)
        .emissive(1.0),
    );
    m.push(
        VoxelBox::new(
            "plume",
            &head,
            Vec3::new(0.0, a.head_y + 0.35, -0.05),
            Vec3::new(0.06, 0.25, 0.35),
        )
        .custom("#b22222"),
    );
    for side in Side::PAIR {
        m.push(
            VoxelBox::new(
                "pauldron",
                sided(BodyPart::Arm, side),
                mirror(side, Vec3::new(0.55, a.shoulder_y, 0.0)),
                Vec3::new(0.3, 0.16, 0.36),
            )
            .custom("#9aa0a8"),
        );
    }
    m.push(
        VoxelBox::new(
            "belt",
            &body,
            Vec3::new(0.0, frame.leg_len + 0.05, 0.0),
            Vec3::new(0.66, 0.08, 0.36),
        )
        .custom("#5a3a1a"),
    );
    m.push(
        VoxelBox::new(
            "crest",
            &body,
            Vec3::new(0.0, frame.leg_len + 0.5, 0.18),
            Vec3::new(0.2, 0.2, 0.02),
        )
        .glow()
        .tint(1.5)
        .emissive(0.5),
    );

    let sword = group(BodyPart::Weapon);
    let hand_x = 0.5 + 0.11;
    m.push(
        VoxelBox::new(
            "grip",
            &sword,
            Vec3::new(hand_x, a.shoulder_y - 0.78, 0.15),
            Vec3::new(0.05, 0.05, 0.2),
        )
        .custom("#5a3a1a"),
    );
    m.push(
        VoxelBox::new(
            "guard",
            &sword,
            Vec3::new(hand_x, a.shoulder_y - 0.78, 0.28),
            Vec3::new(0.25, 0.05, 0.05),
        )
        .custom("#c0a060"),
    );
    for k in 0..4 {
        m.push(
            VoxelBox::new(
                format!("blade_{k}"),
                &sword,
                Vec3::new(hand_x, a.shoulder_y - 0.78, 0.42 + k as f32 * 0.2),
                Vec3::new(0.08, 0.03, 0.2),
            )
            .custom("#d8dce0")
            .tint(1.1),
        );
    }
    let shield = sided(BodyPart::Hand, Side::Left);
    m.push(
        VoxelBox::new(
            "shield",
            &shield,
            Vec3::new(-0.68, a.shoulder_y - 0.6, 0.1),
            Vec3::new(0.06, 0.6, 0.45),
        )
        .secondary(),
    );
    m.push(
        VoxelBox::new(
            "emblem",
            &shield,
            Vec3::new(-0.72, a.shoulder_y - 0.55, 0.1),
            Vec3::new(0.02, 0.2, 0.15),
        )
        .glow()
        .tint(2.0)
        .emissive(0.8),
    );

    m.finish()
}

/// Robed mage holding a staff topped by a floating orb.
pub fn create_mage_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let frame = Frame {
        shoulder_width: 0.6,
        limb_width: 0.17,
        ..Frame::HUMAN
    };
    let a = frame.build(&mut m, 1.0);
    let body = group(BodyPart::Torso);
    let head = group(BodyPart::Head);

    for i in 0..5 {
        let t = i as f32 / 4.0;
        let w = taper(0.85, 0.3, t);
        m.push(
            VoxelBox::new(
                format!("robe_{i}"),
                &body,
                Vec3::new(0.0, 0.1 + t * 0.8, 0.0),
                Vec3::new(w, 0.2, w * 0.7),
            )
            .secondary(),
        );
    }
    for k in 0..4 {
        let t = k as f32 / 3.0;
        m.push(
            VoxelBox::new(
                format!("hat_{k}"),
                &head,
                Vec3::new(0.0, a.head_y + 0.25 + t * 0.4, -t * 0.1),
                Vec3::new(taper(0.7, 0.6, t), 0.12, taper(0.7, 0.6, t)),
            )
            .secondary(),
        );
    }
    for side in Side::PAIR {
        m.push(eye(
            format!("eye_{}", side.as_str()),
            &head,
            mirror(side, Vec3::new(0.1, a.head_y + 0.02, 0.21)),
            0.06,
        ));
    }
    for k in 0..3 {
        m.push(
            VoxelBox::new(
                format!("rune_{k}"),
                &body,
                Vec3::new(0.0, frame.leg_len + 0.2 + k as f32 * 0.2, 0.16),
                Vec3::new(0.1, 0.08, 0.02),
            )
            .glow()
            .tint(2.5)
            .emissive(1.2),
        );
    }

    let staff = group(BodyPart::Weapon);
    let x = 0.5;
    for k in 0..8 {
        m.push(
            VoxelBox::new(
                format!("shaft_{k}"),
                &staff,
                Vec3::new(x, 0.2 + k as f32 * 0.22, 0.2),
                Vec3::new(0.06, 0.22, 0.06),
            )
            .custom("#6b4423"),
        );
    }
    m.push(
        VoxelBox::cube("orb", &staff, Vec3::new(x, 2.0, 0.2), 0.2)
            .glow()
            .tint(3.5)
            .emissive(2.5),
    );
    for i in 0..4 {
        m.push(
            VoxelBox::cube(
                format!("prong_{i}"),
                &staff,
                Vec3::new(x, 1.9, 0.2) + ring_point(i, 4, 0.14, 0.0, 0.0),
                0.05,
            )
            .custom("#c0a060"),
        );
    }

    m.finish()
}

/// Goblin: short, big-eared, hunched, with a crude club.
pub fn create_goblin_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let frame = Frame {
        leg_len: 0.5,
        torso_height: 0.55,
        shoulder_width: 0.5,
        limb_width: 0.15,
        head_size: 0.45,
    };
    let a = frame.build(&mut m, 0.9);
    let head = group(BodyPart::Head);

    for side in Side::PAIR {
        let s = side.as_str();
        for k in 0..3 {
            m.push(VoxelBox::new(
                format!("ear_{s}_{k}"),
                &head,
                mirror(
                    side,
                    Vec3::new(
                        0.28 + k as f32 * 0.1,
                        a.head_y + 0.05 + k as f32 * 0.04,
                        -0.02,
                    ),
                ),
                Vec3::new(0.1, 0.12 - k as f32 * 0.03, 0.05),
            ));
        }
        m.push(eye(
            format!("eye_{s}"),
            &head,
            mirror(side, Vec3::new(0.11, a.head_y + 0.04, 0.23)),
            0.07,
        ));
    }
    m.push(
        VoxelBox::new(
            "nose",
            &head,
            Vec3::new(0.0, a.head_y - 0.04, 0.28),
            Vec3::new(0.08, 0.12, 0.1),
        )
        .tint(0.9),
    );
    m.push(
        VoxelBox::new(
            "loincloth",
            group(BodyPart::Torso),
            Vec3::new(0.0, frame.leg_len, 0.12),
            Vec3::new(0.3, 0.2, 0.03),
        )
        .custom("#6b4f2a"),
    );

    let club = group(BodyPart::Weapon);
    for k in 0..4 {
        m.push(
            VoxelBox::cube(
                format!("club_{k}"),
                &club,
                Vec3::new(
                    0.42,
                    a.shoulder_y - 0.55 + k as f32 * 0.14,
                    0.2 + k as f32 * 0.06,
                ),
                0.08 + k as f32 * 0.03,
            )
            .custom("#7a5230"),
        );
    }

    m.finish()
}

/// Skeleton warrior: bone limbs, rib cage, glowing sockets and a rusted blade.
pub fn create_skeleton_warrior_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let frame = Frame {
        limb_width: 0.1,
        shoulder_width: 0.6,
        ..Frame::HUMAN
    };
    let a = frame.build(&mut m, 1.0);
    let body = group(BodyPart::Torso);
    let head = group(BodyPart::Head);

    for r in 0..4 {
        let y = frame.leg_len + 0.25 + r as f32 * 0.15;
        for side in Side::PAIR {
            m.push(
                VoxelBox::new(
                    format!("rib_{r}"),
                    &body,
                    mirror(side, Vec3::new(0.18, y, 0.08)),
                    Vec3::new(0.2, 0.04, 0.2),
                )
                .custom("#e8e4d4"),
            );
        }
    }
    m.push(
        VoxelBox::new(
            "spine",
            &body,
            Vec3::new(0.0, frame.leg_len + 0.4, -0.08),
            Vec3::new(0.06, 0.8, 0.06),
        )
        .custom("#d8d4c4"),
    );
    m.push(
        VoxelBox::new(
            "jaw",
            &head,
            Vec3::new(0.0, a.head_y - 0.22, 0.05),
            Vec3::new(0.3, 0.08, 0.3),
        )
        .custom("#e8e4d4"),
    );
    for side in Side::PAIR {
        m.push(eye(
            format!("socket_{}", side.as_str()),
            &head,
            mirror(side, Vec3::new(0.1, a.head_y + 0.02, 0.2)),
            0.08,
        ));
    }

    let blade = group(BodyPart::Weapon);
    for k in 0..5 {
        m.push(
            VoxelBox::new(
                format!("blade_{k}"),
                &blade,
                Vec3::new(0.45, a.shoulder_y - 0.72, 0.25 + k as f32 * 0.18),
                Vec3::new(0.05, 0.1, 0.18),
            )
            .custom("#8a6a4a")
            .tint(1.0 - k as f32 * 0.05),
        );
    }

    m.finish()
}

/// Stone golem: massive blocky limbs with glowing rune seams.
pub fn create_golem_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let frame = Frame {
        leg_len: 1.0,
        torso_height: 1.2,
        shoulder_width: 1.3,
        limb_width: 0.45,
        head_size: 0.5,
    };
    let a = frame.build(&mut m, 0.9);
    let body = group(BodyPart::Torso);

    for side in Side::PAIR {
        let arm = sided(BodyPart::Arm, side);
        for k in 0..3 {
            m.push(
                VoxelBox::cube(
                    format!("boulder_{k}"),
                    &arm,
                    mirror(
                        side,
                        Vec3::new(0.95, a.shoulder_y - 0.1 - k as f32 * 0.35, 0.0),
                    ),
                    0.5 - k as f32 * 0.05,
                )
                .secondary()
                .tint(0.85),
            );
        }
        m.push(
            VoxelBox::cube(
                "knuckle_rune",
                sided(BodyPart::Hand, side),
                mirror(side, Vec3::new(0.95, a.shoulder_y - 1.2, 0.25)),
                0.1,
            )
            .glow()
            .tint(2.5)
            .emissive(1.5),
        );
    }
    for k in 0..5 {
        let p = ring_point(k, 5, 0.35, frame.leg_len + 0.6, PI / 2.0);
        m.push(
            VoxelBox::new(
                format!("rune_{k}"),
                &body,
                Vec3::new(p.x, p.y + (k as f32 * 0.13).sin() * 0.2, 0.3),
                Vec3::new(0.08, 0.2, 0.02),
            )
            .glow()
            .tint(3.0)
            .emissive(1.8),
        );
    }
    m.push(
        VoxelBox::new(
            "core",
            &body,
            Vec3::new(0.0, frame.leg_len + 0.6, 0.32),
            Vec3::new(0.25, 0.25, 0.04),
        )
        .glow()
        .tint(3.5)
        .emissive(2.5),
    );
    m.push(eye(
        "visor",
        group(BodyPart::Head),
        Vec3::new(0.0, a.head_y + 0.05, 0.26),
        0.1,
    ));
    m.push(
        VoxelBox::new(
            "moss",
            group(BodyPart::Head),
            Vec3::new(0.0, a.head_y + 0.28, 0.0),
            Vec3::new(0.4, 0.06, 0.4),
        )
        .custom("#4f7f3a"),
    );

    m.finish()
}

/// Ghost: a floating, fraying shroud with hollow glowing eyes.
pub fn create_ghost_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let body = group(BodyPart::Torso);
    let head = group(BodyPart::Head);

    let layers = 6;
    for layer in 0..layers {
        let t = layer as f32 / (layers - 1) as f32;
        let radius = 0.25 + (t * PI * 0.8).sin() * 0.2;
        let count = 8;
        for i in 0..count {
            let p = ring_point(i, count, radius, 0.4 + t * 1.2, t * 0.5);
            m.push(
                VoxelBox::cube(format!("shroud_{layer}_{i}"), &body, p, 0.2).tint(1.0 + t * 0.3),
            );
        }
    }
    for i in 0..8 {
        let p = ring_point(i, 8, 0.38, 0.2 - (i % 3) as f32 * 0.08, 0.0);
        m.push(VoxelBox::new(format!("tatter_{i}"), &body, p, Vec3::new(0.1, 0.3, 0.1)).tint(0.8));
    }
    m.push(VoxelBox::cube("hood", &head, Vec3::new(0.0, 1.8, 0.0), 0.42).secondary());
    for side in Side::PAIR {
        m.push(eye(
            format!("eye_{}", side.as_str()),
            &head,
            mirror(side, Vec3::new(0.1, 1.8, 0.22)),
            0.08,
        ));
        let arm = sided(BodyPart::Arm, side);
        for k in 0..3 {
            m.push(
                VoxelBox::cube(
                    format!("wisp_{k}"),
                    &arm,
                    mirror(
                        side,
                        Vec3::new(0.4 + k as f32 * 0.15, 1.4 - k as f32 * 0.12, 0.1),
                    ),
                    0.14 - k as f32 * 0.03,
                )
                .tint(1.1),
            );
        }
    }

    m.finish()
}

/// Fire elemental: a swirling column of flame cubes around an ember core.
pub fn create_fire_elemental_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let body = group(BodyPart::Torso);
    let flames = group(BodyPart::Effect);

    m.push(
        VoxelBox::cube("core", &body, Vec3::new(0.0, 1.1, 0.0), 0.45)
            .glow()
            .tint(3.5)
            .emissive(3.0),
    );
    let layers = 8;
    for layer in 0..layers {
        let t = layer as f32 / (layers - 1) as f32;
        let radius = 0.5 * (1.0 - (t - 0.4).abs());
        let count = 6;
        for i in 0..count {
            let p = ring_point(i, count, radius, 0.3 + t * 1.6, t * TAU * 0.5);
            let hue = 10.0 + t * 40.0;
            m.push(
                VoxelBox::cube(format!("flame_{layer}_{i}"), &flames, p, taper(0.24, 0.16, t))
                    .custom(format!("hsl({hue:.0}, 100%, 50%)"))
                    .tint(2.0 + t)
                    .emissive(1.5 + t),
            );
        }
    }
    let head = group(BodyPart::Head);
    m.push(
        VoxelBox::cube("crown", &head, Vec3::new(0.0, 2.0, 0.0), 0.3)
            .glow()
            .tint(3.0)
            .emissive(2.0),
    );
    for side in Side::PAIR {
        m.push(
            VoxelBox::cube(
                format!("eye_{}", side.as_str()),
                &head,
                mirror(side, Vec3::new(0.08, 2.02, 0.16)),
                0.06,
            )
            .custom("#ffffff")
            .tint(3.0)
            .emissive(3.0),
        );
        let arm = sided(BodyPart::Arm, side);
        for k in 0..4u32 {
            let t = k as f32 / 3.0;
            m.push(
                VoxelBox::cube(
                    format!("lick_{k}"),
                    &arm,
                    mirror(
                        side,
                        Vec3::new(0.45 + t * 0.45, 1.35 + (t * PI).sin() * 0.2, 0.0),
                    ),
                    taper(0.22, 0.12, t),
                )
                .custom("#ff6a00")
                .tint(2.5)
                .emissive(2.0),
            );
        }
    }
    for k in 0..4u32 {
        m.push(
            VoxelBox::cube(
                format!("ember_{k}"),
                segment(BodyPart::Effect, Side::Center, k),
                ring_point(k as usize, 4, 0.7, 0.15, 0.4),
                0.06,
            )
            .glow()
            .emissive(1.0),
        );
    }

    m.finish()
}
