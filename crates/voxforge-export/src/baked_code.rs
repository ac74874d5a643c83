//! Pre-lit TypeScript export: literal colors on unlit materials.

use tracing::{debug, instrument};
use voxforge_bake::{BakedVoxel, BakedVoxelModel, OutputFormat};

use crate::script::{identifier, joints, number, string_literal, tuple, Script};

/// Entity name used when the caller gives none.
pub const DEFAULT_ENTITY_NAME: &str = "BakedModel";

fn color_literal(voxel: &BakedVoxel, format: OutputFormat) -> String {
    match format {
        OutputFormat::Hex | OutputFormat::Rgb => string_literal(&voxel.formatted(format)),
        OutputFormat::Normalized => {
            let [r, g, b] = voxel.normalized();
            format!("new THREE.Color({}, {}, {})", number(r), number(g), number(b))
        }
    }
}

/// TypeScript/three.js module drawing `baked` with `MeshBasicMaterial`s.
///
/// The module exports `create<Entity>()`; `entity_name` is turned into a
/// PascalCase identifier.
#[instrument(level = "debug", skip_all, fields(boxes = baked.len()))]
pub fn generate_baked_game_code(baked: &BakedVoxelModel, entity_name: Option<&str>) -> String {
    let entity = identifier(entity_name.unwrap_or(DEFAULT_ENTITY_NAME), "Model");
    let info = &baked.baking_info;
    let format = info.options.output_format;
    let model = baked.to_model();

    let mut s = Script::new();
    s.line(
        0,
        format!(
            "// {entity}: baked with {} (gamma {}).",
            info.lighting_setup, number(info.options.gamma)
        ),
    );
    s.line(
        0,
        "// Lighting is stored in the colors; materials are unlit.",
    );
    s.line(0, "import * as THREE from 'three';");
    s.blank();
    s.line(0, "const unitBox = new THREE.BoxGeometry(1, 1, 1);");
    s.line(
        0,
        "const materials = new Map<string, THREE.MeshBasicMaterial>();",
    );
    s.blank();
    s.line(
        0,
        "function material(key: string, color: THREE.ColorRepresentation): THREE.MeshBasicMaterial {",
    );
    s.line(1, "let m = materials.get(key);");
    s.line(1, "if (!m) {");
    s.line(2, "m = new THREE.MeshBasicMaterial({ color });");
    s.line(2, "materials.set(key, m);");
    s.line(1, "}");
    s.line(1, "return m;");
    s.line(0, "}");
    s.blank();
    s.line(0, "function voxel(");
    s.line(1, "parent: THREE.Object3D,");
    s.line(1, "name: string,");
    s.line(1, "position: [number, number, number],");
    s.line(1, "scale: [number, number, number],");
    s.line(1, "key: string,");
    s.line(1, "color: THREE.ColorRepresentation,");
    s.line(1, "emissive: number,");
    s.line(0, "): THREE.Mesh {");
    s.line(
        1,
        "const mesh = new THREE.Mesh(unitBox, material(key, color));",
    );
    s.line(1, "mesh.name = name;");
    s.line(1, "mesh.position.set(...position);");
    s.line(1, "mesh.scale.set(...scale);");
    s.line(1, "if (emissive > 0) mesh.userData.emissive = emissive;");
    s.line(1, "parent.add(mesh);");
    s.line(1, "return mesh;");
    s.line(0, "}");
    s.blank();
    s.line(
        0,
        format!("export function create{entity}(): THREE.Group {{"),
    );
    s.line(1, "const root = new THREE.Group();");
    s.line(1, format!("root.name = {};", string_literal(&entity)));
    s.line(1, "const joints: Record<string, THREE.Group> = {};");

    for (group, pivot) in joints(&model) {
        s.blank();
        s.line(1, "{");
        s.line(2, "const g = new THREE.Group();");
        s.line(2, format!("g.name = {};", string_literal(&group)));
        s.line(
            2,
            format!(
                "g.position.set(...({} as [number, number, number]));",
                tuple(pivot)
            ),
        );
        s.line(2, "root.add(g);");
        s.line(2, format!("joints[{}] = g;", string_literal(&group)));
        for b in baked.boxes_in_group(&group) {
            let emissive = if b.voxel.glows() { b.voxel.emissive_intensity } else { 0.0 };
            s.line(
                2,
                format!(
                    "voxel(g, {}, {}, {}, {}, {}, {});",
                    string_literal(&b.voxel.name),
                    tuple(b.voxel.position - pivot),
                    tuple(b.voxel.scale),
                    string_literal(&b.baked_color),
                    color_literal(b, format),
                    number(emissive),
                ),
            );
        }
        s.line(1, "}");
    }

    s.blank();
    s.line(1, "root.userData.joints = joints;");
    s.line(1, "return root;");
    s.line(0, "}");

    let code = s.finish();
    debug!(entity = %entity, bytes = code.len(), "generated baked game code");
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use voxforge_bake::{bake_voxel_model, BakeOptions};
    use voxforge_core::{ModelBuilder, VoxelBox};

    fn baked(format: OutputFormat) -> BakedVoxelModel {
        let mut b = ModelBuilder::new();
        b.push(VoxelBox::new("torso", "body", Vec3::new(0.0, 1.0, 0.0), Vec3::ONE));
        b.push(
            VoxelBox::cube("eye", "head", Vec3::new(0.0, 2.0, 0.3), 0.1)
                .glow()
                .emissive(2.0),
        );
        let options = BakeOptions {
            output_format: format,
            ..Default::default()
        };
        bake_voxel_model(&b.build(), "#4a4a5a", "#3a3a4a", "#00ffff", &options).unwrap()
    }

    #[test]
    fn names_the_entity() {
        let code = generate_baked_game_code(&baked(OutputFormat::Hex), Some("mech boss"));
        assert!(code.contains("export function createMechBoss(): THREE.Group {"));
        let code = generate_baked_game_code(&baked(OutputFormat::Hex), None);
        assert!(code.contains("export function createBakedModel(): THREE.Group {"));
    }

    #[test]
    fn uses_literal_unlit_colors() {
        let model = baked(OutputFormat::Hex);
        let code = generate_baked_game_code(&model, None);
        assert!(code.contains("MeshBasicMaterial"));
        assert!(!code.contains("MeshStandardMaterial"));
        assert!(!code.contains("theme"));
        for b in &model.boxes {
            assert!(code.contains(&b.baked_color));
        }
        assert!(code.contains("standard-4-light"));
    }

    #[test]
    fn honors_output_format() {
        let code = generate_baked_game_code(&baked(OutputFormat::Rgb), None);
        assert!(code.contains("\"rgb("));
        let code = generate_baked_game_code(&baked(OutputFormat::Normalized), None);
        assert!(code.contains("new THREE.Color("));
    }

    #[test]
    fn boxes_in_unlisted_groups_are_emitted() {
        let model = voxforge_core::VoxelModel {
            boxes: vec![VoxelBox::cube("a", "body", Vec3::ZERO, 1.0)],
            groups: Vec::new(),
        };
        let baked = bake_voxel_model(
            &model,
            "#4a4a5a",
            "#3a3a4a",
            "#00ffff",
            &BakeOptions::default(),
        )
        .unwrap();
        assert_eq!(baked.groups, vec!["body".to_string()]);
        let code = generate_baked_game_code(&baked, None);
        assert_eq!(code.matches("voxel(g, ").count(), 1);

        let mut relisted = baked.clone();
        relisted.groups.clear();
        let code = generate_baked_game_code(&relisted, None);
        assert_eq!(code.matches("voxel(g, ").count(), 1);
    }
}
