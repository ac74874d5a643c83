//! Mechanical enemies and bosses.
//!
//! Machines mark their sensors, thrusters and weapon ports with emissive
//! boxes. Drone emitters stay at multiplier 1 so their baked glow is not
//! already saturated by the ambient term.

use std::f32::consts::{FRAC_PI_4, PI};

use glam::Vec3;
use voxforge_core::{BodyPart, Side, VoxelBox, VoxelModel};

use crate::sculpt::{eye, group, mirror, ring_point, segment, sided, taper, Sculptor};

/// Hovering quad-rotor drone with a sensor eye and underslung blaster.
pub fn create_drone_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let body = group(BodyPart::Torso);

    m.push(VoxelBox::new(
        "hull",
        &body,
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.8, 0.3, 0.8),
    ));
    m.push(
        VoxelBox::new(
            "canopy",
            &body,
            Vec3::new(0.0, 1.22, 0.0),
            Vec3::new(0.5, 0.14, 0.5),
        )
        .secondary(),
    );
    m.push(
        VoxelBox::new(
            "keel",
            &body,
            Vec3::new(0.0, 0.8, 0.0),
            Vec3::new(0.4, 0.1, 0.4),
        )
        .secondary(),
    );

    for i in 0..4usize {
        let arm = segment(BodyPart::Arm, Side::Center, i as u32);
        let dir = ring_point(i, 4, 1.0, 0.0, FRAC_PI_4);
        for k in 0..3 {
            let r = 0.45 + k as f32 * 0.18;
            m.push(
                VoxelBox::cube(
                    format!("strut_{k}"),
                    &arm,
                    Vec3::new(dir.x * r, 1.0, dir.z * r),
                    0.1,
                )
                .secondary(),
            );
        }
        let hub = Vec3::new(dir.x * 1.0, 1.08, dir.z * 1.0);
        m.push(VoxelBox::new("motor", &arm, hub, Vec3::new(0.16, 0.14, 0.16)));
        m.push(
            VoxelBox::new(
                "blade_x",
                &arm,
                hub + Vec3::Y * 0.09,
                Vec3::new(0.55, 0.02, 0.07),
            )
            .secondary()
            .tint(1.2),
        );
        m.push(
            VoxelBox::new(
                "blade_z",
                &arm,
                hub + Vec3::Y * 0.09,
                Vec3::new(0.07, 0.02, 0.55),
            )
            .secondary()
            .tint(1.2),
        );
        m.push(
            VoxelBox::cube("thruster", &arm, hub - Vec3::Y * 0.12, 0.08)
                .glow()
                .emissive(1.5),
        );
    }

    let head = group(BodyPart::Head);
    m.push(
        VoxelBox::new(
            "sensor_mount",
            &head,
            Vec3::new(0.0, 1.0, 0.43),
            Vec3::new(0.3, 0.2, 0.08),
        )
        .secondary(),
    );
    m.push(
        VoxelBox::cube("sensor", &head, Vec3::new(0.0, 1.0, 0.48), 0.12)
            .glow()
            .emissive(2.0),
    );
    for side in Side::PAIR {
        m.push(
            VoxelBox::cube(
                format!("status_{}", side.as_str()),
                &head,
                mirror(side, Vec3::new(0.25, 1.1, 0.41)),
                0.04,
            )
            .custom("#ff3300")
            .emissive(1.0),
        );
    }

    let gun = group(BodyPart::Weapon);
    m.push(VoxelBox::new(
        "gun_body",
        &gun,
        Vec3::new(0.0, 0.68, 0.15),
        Vec3::new(0.16, 0.14, 0.4),
    ));
    m.push(
        VoxelBox::new(
            "barrel",
            &gun,
            Vec3::new(0.0, 0.68, 0.45),
            Vec3::new(0.06, 0.06, 0.3),
        )
        .secondary(),
    );
    m.push(
        VoxelBox::cube("muzzle", &gun, Vec3::new(0.0, 0.68, 0.62), 0.05)
            .glow()
            .emissive(1.0),
    );

    m.finish()
}

/// Stationary turret: stepped base, rotating head, twin barrels.
pub fn create_turret_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let base = group(BodyPart::Foot);
    let body = group(BodyPart::Torso);

    for k in 0..3 {
        let w = taper(1.4, 0.3, k as f32);
        m.push(
            VoxelBox::new(
                format!("base_{k}"),
                &base,
                Vec3::new(0.0, 0.1 + k as f32 * 0.2, 0.0),
                Vec3::new(w, 0.2, w),
            )
            .secondary(),
        );
    }
    for i in 0..8 {
        m.push(
            VoxelBox::cube(
                format!("bolt_{i}"),
                &base,
                ring_point(i, 8, 0.6, 0.22, 0.0),
                0.06,
            )
            .custom("#777777"),
        );
    }
    m.push(VoxelBox::new(
        "column",
        &body,
        Vec3::new(0.0, 0.85, 0.0),
        Vec3::new(0.4, 0.5, 0.4),
    ));
    m.push(
        VoxelBox::new(
            "bearing",
            &body,
            Vec3::new(0.0, 1.12, 0.0),
            Vec3::new(0.6, 0.06, 0.6),
        )
        .glow()
        .tint(1.5)
        .emissive(0.6),
    );

    let head = group(BodyPart::Head);
    m.push(VoxelBox::new(
        "housing",
        &head,
        Vec3::new(0.0, 1.35, 0.0),
        Vec3::new(0.8, 0.4, 0.7),
    ));
    m.push(
        VoxelBox::new(
            "armor_top",
            &head,
            Vec3::new(0.0, 1.58, -0.05),
            Vec3::new(0.7, 0.06, 0.6),
        )
        .secondary(),
    );
    m.push(eye("scope", &head, Vec3::new(0.0, 1.5, 0.37), 0.1));

    for side in Side::PAIR {
        let weapon = sided(BodyPart::Weapon, side);
        let x = 0.22;
        for k in 0..4 {
            m.push(
                VoxelBox::new(
                    format!("barrel_{k}"),
                    &weapon,
                    mirror(side, Vec3::new(x, 1.3, 0.45 + k as f32 * 0.2)),
                    Vec3::splat(0.1).with_z(0.2),
                )
                .secondary(),
            );
        }
        m.push(
            VoxelBox::cube("port", &weapon, mirror(side, Vec3::new(x, 1.3, 1.27)), 0.08)
                .glow()
                .tint(3.0)
                .emissive(2.0),
        );
        m.push(
            VoxelBox::new(
                "ammo",
                &weapon,
                mirror(side, Vec3::new(0.5, 1.3, -0.1)),
                Vec3::new(0.15, 0.25, 0.3),
            )
            .custom("#5a5a3a"),
        );
    }

    m.finish()
}

/// Mech boss: a walking war machine with armored legs, a plated torso,
/// a missile pod and an arm cannon. Large enough to stress the baker.
pub fn create_mech_boss_model(scale: f32) -> VoxelModel {
    let mut m = Sculptor::new(scale);
    let body = group(BodyPart::Torso);

    for side in Side::PAIR {
        for joint in 0..2u32 {
            let leg = segment(BodyPart::Leg, side, joint);
            let z = if joint == 0 { 0.5 } else { -0.5 };
            let x = 1.0;
            for k in 0..6 {
                let y = 0.2 + k as f32 * 0.3;
                let bend = (k as f32 / 5.0 * PI).sin() * 0.25;
                m.push(
                    VoxelBox::new(
                        format!("strut_{k}"),
                        &leg,
                        mirror(side, Vec3::new(x + bend, y, z)),
                        Vec3::new(0.35, 0.3, 0.35),
                    )
                    .secondary(),
                );
                m.push(
                    VoxelBox::new(
                        format!("plate_{k}"),
                        &leg,
                        mirror(side, Vec3::new(x + bend, y, z + 0.2)),
                        Vec3::new(0.4, 0.26, 0.05),
                    )
                    .tint(1.1),
                );
            }
            m.push(
                VoxelBox::cube(
                    "knee_light",
                    &leg,
                    mirror(side, Vec3::new(x + 0.25, 1.1, z + 0.25)),
                    0.08,
                )
                .glow()
                .tint(2.5)
                .emissive(1.5),
            );
            m.push(
                VoxelBox::new(
                    "foot",
                    segment(BodyPart::Foot, side, joint),
                    mirror(side, Vec3::new(x, 0.05, z + 0.1)),
                    Vec3::new(0.55, 0.1, 0.7),
                )
                .secondary()
                .tint(0.8),
            );
        }
    }

    let (w, h, d) = (1.8f32, 1.4f32, 1.4f32);
    let y0 = 2.0;
    let cell = 0.2;
    let nx = (w / cell).round() as usize;
    let ny = (h / cell).round() as usize;
    let nz = (d / cell).round() as usize;
    for iy in 0..ny {
        let y = y0 + (iy as f32 + 0.5) * cell;
        for ix in 0..nx {
            let x = -w / 2.0 + (ix as f32 + 0.5) * cell;
            let stripe = (ix + iy) % 4 == 0;
            m.push(
                VoxelBox::cube(
                    format!("front_{iy}_{ix}"),
                    &body,
                    Vec3::new(x, y, d / 2.0),
                    cell,
                )
                .tint(if stripe { 0.85 } else { 1.0 }),
            );
            m.push(
                VoxelBox::cube(
                    format!("back_{iy}_{ix}"),
                    &body,
                    Vec3::new(x, y, -d / 2.0),
                    cell,
                )
                .secondary(),
            );
        }
        for iz in 1..nz.saturating_sub(1) {
            let z = -d / 2.0 + (iz as f32 + 0.5) * cell;
            for side in Side::PAIR {
                m.push(
                    VoxelBox::cube(
                        format!("flank_{}_{iy}_{iz}", side.as_str()),
                        &body,
                        mirror(side, Vec3::new(w / 2.0, y, z)),
                        cell,
                    )
                    .secondary()
                    .tint(1.1),
                );
            }
        }
    }
    for ix in 0..nx {
        for iz in 0..nz {
            let x = -w / 2.0 + (ix as f32 + 0.5) * cell;
            let z = -d / 2.0 + (iz as f32 + 0.5) * cell;
            m.push(
                VoxelBox::cube(
                    format!("deck_{ix}_{iz}"),
                    &body,
                    Vec3::new(x, y0 + h + cell / 2.0, z),
                    cell,
                )
                .tint(0.95),
            );
        }
    }
    m.push(
        VoxelBox::new(
            "reactor",
            &body,
            Vec3::new(0.0, y0 + h / 2.0, d / 2.0 + 0.12),
            Vec3::new(0.5, 0.5, 0.1),
        )
        .glow()
        .tint(3.5)
        .emissive(3.0),
    );
    for i in 0..6 {
        m.push(
            VoxelBox::cube(
                format!("vent_{i}"),
                &body,
                Vec3::new(-0.5 + i as f32 * 0.2, y0 + 0.15, -d / 2.0 - 0.1),
                0.12,
            )
            .custom("#ff5500")
            .tint(2.0)
            .emissive(1.0),
        );
    }

    let head = group(BodyPart::Head);
    let head_y = y0 + h + 0.45;
    m.push(VoxelBox::new(
        "cockpit",
        &head,
        Vec3::new(0.0, head_y, 0.3),
        Vec3::new(0.8, 0.5, 0.7),
    ));
    m.push(
        VoxelBox::new(
            "viewport",
            &head,
            Vec3::new(0.0, head_y + 0.05, 0.66),
            Vec3::new(0.6, 0.14, 0.03),
        )
        .glow()
        .tint(2.5)
        .emissive(2.0),
    );
    for side in Side::PAIR {
        m.push(
            VoxelBox::new(
                format!("antenna_{}", side.as_str()),
                &head,
                mirror(side, Vec3::new(0.35, head_y + 0.5, 0.1)),
                Vec3::new(0.03, 0.5, 0.03),
            )
            .secondary(),
        );
    }

    for side in Side::PAIR {
        let arm = sided(BodyPart::Arm, side);
        let sx = w / 2.0 + 0.35;
        m.push(
            VoxelBox::new(
                "shoulder",
                &arm,
                mirror(side, Vec3::new(sx, y0 + h - 0.1, 0.0)),
                Vec3::new(0.6, 0.5, 0.7),
            )
            .secondary(),
        );
        for k in 0..4 {
            m.push(
                VoxelBox::new(
                    format!("arm_{k}"),
                    &arm,
                    mirror(
                        side,
                        Vec3::new(sx + 0.1, y0 + h - 0.5 - k as f32 * 0.3, 0.1),
                    ),
                    Vec3::new(0.4, 0.3, 0.4),
                )
                .tint(1.0 - k as f32 * 0.05),
            );
        }
    }

    let cannon = sided(BodyPart::Weapon, Side::Right);
    for k in 0..6 {
        for i in 0..6 {
            let p = ring_point(i, 6, 0.15, 0.0, 0.0);
            m.push(
                VoxelBox::cube(
                    format!("cannon_{k}_{i}"),
                    &cannon,
                    Vec3::new(w / 2.0 + 0.45 + p.x, y0 + 0.1 + p.z, 0.5 + k as f32 * 0.18),
                    0.1,
                )
                .secondary()
                .tint(0.9),
            );
        }
    }
    m.push(
        VoxelBox::cube(
            "cannon_core",
            &cannon,
            Vec3::new(w / 2.0 + 0.45, y0 + 0.1, 1.6),
            0.16,
        )
        .glow()
        .tint(3.5)
        .emissive(3.0),
    );

    let pod = sided(BodyPart::Weapon, Side::Left);
    m.push(VoxelBox::new(
        "pod",
        &pod,
        Vec3::new(-w / 2.0 - 0.35, y0 + h + 0.35, 0.0),
        Vec3::new(0.7, 0.45, 0.8),
    ));
    for r in 0..3 {
        for c in 0..3 {
            m.push(
                VoxelBox::cube(
                    format!("missile_{r}_{c}"),
                    &pod,
                    Vec3::new(
                        -w / 2.0 - 0.55 + c as f32 * 0.2,
                        y0 + h + 0.22 + r as f32 * 0.13,
                        0.42,
                    ),
                    0.09,
                )
                .custom("#cc2200")
                .tint(1.5)
                .emissive(0.8),
            );
        }
    }

    m.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drone_emitters_are_not_saturated() {
        let model = create_drone_model(1.0);
        for b in model.boxes.iter().filter(|b| b.emissive) {
            assert!(b.color_multiplier <= 1.2, "{} is overdriven", b.name);
        }
    }

    #[test]
    fn mech_boss_is_large() {
        let model = create_mech_boss_model(1.0);
        assert!(model.len() > 300, "{}", model.len());
        assert!(model.groups.iter().any(|g| g == "leg_left_1"));
        assert!(model.groups.iter().any(|g| g == "weapon_right"));
    }
}
