use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use voxforge_bake::{
    bake_voxel_model, count_occluders_brute, BakeOptions, Baker, OcclusionIndex, STANDARD_RIG_LABEL,
};
use voxforge_core::{Color, ColorRef, Palette, VoxelModel};
use voxforge_gen::Archetype;

const PRIMARY: &str = "#4a4a5a";
const SECONDARY: &str = "#3a3a4a";
const GLOW: &str = "#00ffff";

fn is_hex(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[test]
fn drone_bake_emits_hex_and_brighter_emitters() {
    let model = Archetype::Drone.generate(1.0);
    let lit = bake_voxel_model(&model, PRIMARY, SECONDARY, GLOW, &BakeOptions::default()).unwrap();
    let unlit = bake_voxel_model(
        &model,
        PRIMARY,
        SECONDARY,
        GLOW,
        &BakeOptions {
            bake_emissive: false,
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(lit.len(), model.len());
    let mut emitters = 0;
    for (on, off) in lit.boxes.iter().zip(&unlit.boxes) {
        assert!(is_hex(&on.baked_color), "{}", on.baked_color);
        assert_eq!(on.voxel.id, off.voxel.id);
        if on.voxel.glows() {
            emitters += 1;
            let bright = Color::from_rgb8(on.baked_color_rgb).luminance();
            let dim = Color::from_rgb8(off.baked_color_rgb).luminance();
            assert!(bright > dim, "{}: {bright} <= {dim}", on.voxel.name);
        } else {
            assert_eq!(on.baked_color, off.baked_color);
        }
    }
    assert!(emitters > 0);
}

#[test]
fn baked_colors_resolve_to_themselves() {
    let palette = Palette::parse(PRIMARY, SECONDARY, GLOW).unwrap();
    for archetype in [Archetype::Knight, Archetype::LavaRock, Archetype::Portal] {
        let model = archetype.generate_with_rng(1.0, &mut StdRng::seed_from_u64(9));
        let baked = Baker::default().bake(&model, &palette).unwrap();
        for b in &baked.boxes {
            assert_eq!(b.voxel.color, ColorRef::Custom(b.baked_color.clone()));
            let again = palette.resolve(&b.voxel.color).unwrap();
            assert_eq!(again.to_hex(), b.baked_color);
            assert_eq!(again.to_rgb8(), b.baked_color_rgb);
        }
    }
}

#[test]
fn every_archetype_bakes() {
    for &archetype in Archetype::ALL {
        let model = archetype.generate_with_rng(1.0, &mut StdRng::seed_from_u64(5));
        let baked = bake_voxel_model(&model, PRIMARY, SECONDARY, GLOW, &BakeOptions::default())
            .unwrap_or_else(|e| panic!("{archetype}: {e}"));
        assert_eq!(baked.len(), model.len(), "{archetype}");
        assert_eq!(baked.groups, model.groups);
        for b in &baked.boxes {
            assert!(is_hex(&b.original_color));
        }
    }
}

#[test]
fn empty_model_bakes_to_empty_output() {
    let baked = bake_voxel_model(
        &VoxelModel::new(),
        PRIMARY,
        SECONDARY,
        GLOW,
        &BakeOptions::default(),
    )
    .unwrap();
    assert!(baked.is_empty());
    assert!(baked.groups.is_empty());
    assert_eq!(baked.baking_info.lighting_setup, STANDARD_RIG_LABEL);
    assert_eq!(baked.baking_info.options, BakeOptions::default());
    assert!(baked.baking_info.timestamp > 0);
}

#[test]
fn occlusion_index_agrees_on_generated_models() {
    for archetype in [
        Archetype::MechBoss,
        Archetype::Boulder,
        Archetype::OakTree,
        Archetype::Kraken,
    ] {
        let centers: Vec<Vec3> = archetype
            .generate(1.0)
            .boxes
            .iter()
            .map(|b| b.position)
            .collect();
        let index = OcclusionIndex::new(centers.iter().copied(), 0.3);
        for i in 0..centers.len() {
            assert_eq!(
                index.count_occluders(i),
                count_occluders_brute(&centers, i, 0.3),
                "{archetype} box {i}"
            );
        }
    }
}

#[test]
fn ao_only_darkens() {
    let palette = Palette::parse(PRIMARY, SECONDARY, GLOW).unwrap();
    let model = Archetype::Boulder.generate(1.0);
    let with_ao = Baker::default().lighting(&model, &palette).unwrap();
    let without = Baker::new(
        voxforge_bake::LightingRig::standard(),
        BakeOptions {
            include_ao: false,
            ..Default::default()
        },
    )
    .lighting(&model, &palette)
    .unwrap();
    assert!(with_ao.iter().any(|(_, l)| l.occluders > 0));
    for ((_, a), (_, b)) in with_ao.iter().zip(&without) {
        assert!(a.pre_gamma.cmple(b.pre_gamma + Vec3::splat(1e-6)).all());
    }
}
