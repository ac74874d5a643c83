use serde_json::Value;
use voxforge_bake::{bake_voxel_model, BakeOptions, OutputFormat};
use voxforge_core::defaults::{GLOW_COLOR, PRIMARY_COLOR, SECONDARY_COLOR};
use voxforge_export::{
    export_assets_json, export_baked_model_json, export_vertex_color_format,
    generate_baked_game_code, generate_game_code, import_assets_json, vertex_bytes, VoxelAsset,
};
use voxforge_gen::Archetype;

const PALETTE: [&str; 3] = [PRIMARY_COLOR, SECONDARY_COLOR, GLOW_COLOR];

fn asset_for(archetype: Archetype) -> VoxelAsset {
    let model = archetype.generate(1.0);
    VoxelAsset::from_model(
        archetype.slug(),
        archetype.name(),
        archetype.category().as_str(),
        PALETTE,
        &model,
    )
}

#[test]
fn assets_survive_a_round_trip() {
    let assets: Vec<_> = [Archetype::Knight, Archetype::Kraken, Archetype::Torch]
        .into_iter()
        .map(asset_for)
        .collect();
    let json = export_assets_json(&assets).unwrap();
    let imported = import_assets_json(&json).unwrap();
    assert_eq!(imported, assets);

    for (asset, archetype) in imported
        .iter()
        .zip([Archetype::Knight, Archetype::Kraken, Archetype::Torch])
    {
        assert_eq!(asset.to_model().unwrap(), archetype.generate(1.0));
    }
}

#[test]
fn asset_type_is_the_category() {
    let json = export_assets_json(&[asset_for(Archetype::MechBoss)]).unwrap();
    let doc: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(doc[0]["type"], "boss");
    assert_eq!(doc[0]["name"], "Mech Boss");
}

#[test]
fn drone_exports_in_every_format() {
    let model = Archetype::Drone.generate(1.0);

    let code = generate_game_code(&model, PRIMARY_COLOR, SECONDARY_COLOR, GLOW_COLOR);
    assert!(code.contains("export function createModel("));
    assert!(code.contains("theme.glow"));

    for format in [OutputFormat::Hex, OutputFormat::Rgb, OutputFormat::Normalized] {
        let options = BakeOptions {
            output_format: format,
            ..BakeOptions::default()
        };
        let baked = bake_voxel_model(&model, PRIMARY_COLOR, SECONDARY_COLOR, GLOW_COLOR, &options)
            .unwrap();
        let code = generate_baked_game_code(&baked, Some("Drone"));
        assert!(code.contains("export function createDrone(): THREE.Group {"));
        assert_eq!(code.matches("voxel(g, ").count(), model.len());

        let doc: Value = serde_json::from_str(&export_baked_model_json(&baked).unwrap()).unwrap();
        assert_eq!(doc["boxes"].as_array().map(Vec::len), Some(model.len()));

        let vertex: Value = serde_json::from_str(&export_vertex_color_format(&baked).unwrap())
            .unwrap();
        assert_eq!(vertex["voxels"].as_array().map(Vec::len), Some(model.len()));
        let listed: usize = vertex["groups"]
            .as_array()
            .unwrap()
            .iter()
            .map(|g| g["voxels"].as_array().map_or(0, Vec::len))
            .sum();
        assert_eq!(listed, model.len());
        assert_eq!(vertex_bytes(&baked).len(), model.len() * 40);
    }
}

#[test]
fn empty_models_export_cleanly() {
    let model = Archetype::Wolf.generate(0.0);
    assert!(model.is_empty());
    let baked = bake_voxel_model(
        &model,
        PRIMARY_COLOR,
        SECONDARY_COLOR,
        GLOW_COLOR,
        &BakeOptions::default(),
    )
    .unwrap();
    let doc: Value = serde_json::from_str(&export_baked_model_json(&baked).unwrap()).unwrap();
    assert_eq!(doc["boxes"], serde_json::json!([]));
    assert!(
        generate_game_code(&model, PRIMARY_COLOR, SECONDARY_COLOR, GLOW_COLOR)
            .contains("return root;")
    );
}
