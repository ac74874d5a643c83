use hashbrown::HashSet;
use rand::rngs::StdRng;
use rand::SeedableRng;
use voxforge_core::{classify_group, BodyPart, Side};
use voxforge_gen::Archetype;

fn seeded(archetype: Archetype, scale: f32) -> voxforge_core::VoxelModel {
    archetype.generate_with_rng(scale, &mut StdRng::seed_from_u64(0xfeed))
}

#[test]
fn every_archetype_builds_a_valid_model() {
    for &archetype in Archetype::ALL {
        let model = seeded(archetype, 1.0);
        assert!(!model.is_empty(), "{archetype} is empty");
        model
            .validate()
            .unwrap_or_else(|e| panic!("{archetype}: {e}"));

        let ids: HashSet<_> = model.boxes.iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), model.len(), "{archetype} repeats ids");

        let groups: HashSet<_> = model.groups.iter().collect();
        assert_eq!(
            groups.len(),
            model.groups.len(),
            "{archetype} repeats groups"
        );
        for b in &model.boxes {
            assert!(
                groups.contains(&b.group),
                "{archetype}: {} not listed",
                b.group
            );
            assert!(b.position.is_finite() && b.scale.min_element() > 0.0);
        }
    }
}

#[test]
fn deterministic_archetypes_repeat_exactly() {
    for &archetype in Archetype::ALL.iter().filter(|a| !a.is_randomized()) {
        assert_eq!(
            archetype.generate(1.0),
            archetype.generate(1.0),
            "{archetype}"
        );
    }
}

#[test]
fn randomized_archetypes_vary() {
    for &archetype in Archetype::ALL.iter().filter(|a| a.is_randomized()) {
        let a = archetype.generate_with_rng(1.0, &mut StdRng::seed_from_u64(1));
        let b = archetype.generate_with_rng(1.0, &mut StdRng::seed_from_u64(2));
        assert_ne!(a, b, "{archetype}");
    }
}

#[test]
fn non_positive_scale_yields_empty_models() {
    for &archetype in Archetype::ALL {
        for scale in [0.0, -2.0, f32::NAN] {
            assert!(
                seeded(archetype, scale).is_empty(),
                "{archetype} at {scale}"
            );
        }
    }
}

#[test]
fn scale_multiplies_geometry() {
    let one = Archetype::Knight.generate(1.0);
    let two = Archetype::Knight.generate(2.0);
    assert_eq!(one.len(), two.len());
    for (a, b) in one.boxes.iter().zip(&two.boxes) {
        approx::assert_relative_eq!(a.position.y * 2.0, b.position.y, epsilon = 1e-4);
        approx::assert_relative_eq!(a.scale.x * 2.0, b.scale.x, epsilon = 1e-4);
    }
}

#[test]
fn limbs_come_in_pairs() {
    for archetype in [Archetype::Knight, Archetype::Beast, Archetype::Spider, Archetype::MechBoss] {
        let model = archetype.generate(1.0);
        for side in Side::PAIR {
            assert!(
                model
                    .groups
                    .iter()
                    .map(|g| classify_group(g))
                    .any(|c| c.part.is_limb() && c.side == side),
                "{archetype} has no {side:?} limb"
            );
        }
    }
}

#[test]
fn creatures_have_heads_and_glowing_eyes() {
    for archetype in [Archetype::Wolf, Archetype::Dragon, Archetype::Goblin, Archetype::LichKing] {
        let model = archetype.generate(1.0);
        assert!(
            model
                .groups
                .iter()
                .any(|g| classify_group(g).part == BodyPart::Head),
            "{archetype}"
        );
        assert!(model.boxes.iter().any(|b| b.glows()), "{archetype}");
    }
}

#[test]
fn hydra_has_one_head_per_neck() {
    let model = Archetype::Hydra.generate(1.0);
    let count = |part| {
        model
            .groups
            .iter()
            .filter(|g| classify_group(g).part == part)
            .count()
    };
    assert_eq!(count(BodyPart::Head), count(BodyPart::Neck));
    assert!(count(BodyPart::Head) > 1);
}
