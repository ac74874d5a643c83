//! Live-lit TypeScript export.
//!
//! The emitted module builds a `THREE.Group` per joint and resolves every
//! box color against a theme object at runtime, so the same model can be
//! re-skinned without regenerating code.

use tracing::{debug, instrument};
use voxforge_core::{ColorRef, VoxelBox, VoxelModel};

use crate::script::{joints, number, string_literal, tuple, Script};

fn color_expression(voxel: &VoxelBox) -> String {
    let source = match &voxel.color {
        ColorRef::Primary => "theme.primary".to_string(),
        ColorRef::Secondary => "theme.secondary".to_string(),
        ColorRef::Glow => "theme.glow".to_string(),
        ColorRef::Custom(value) => string_literal(value),
    };
    format!("tint({source}, {})", number(voxel.color_multiplier))
}

fn emissive_intensity(voxel: &VoxelBox) -> f32 {
    if voxel.glows() {
        voxel.emissive_intensity
    } else {
        0.0
    }
}

/// TypeScript/three.js module for `model` with `primary`, `secondary` and
/// `glow` as the default theme.
#[instrument(level = "debug", skip_all, fields(boxes = model.len()))]
pub fn generate_game_code(
    model: &VoxelModel,
    primary: &str,
    secondary: &str,
    glow: &str,
) -> String {
    let mut s = Script::new();
    s.line(
        0,
        "// Generated by voxforge. Boxes are grouped by animation joint.",
    );
    s.line(0, "import * as THREE from 'three';");
    s.blank();
    s.line(0, "export interface ThemeColors {");
    s.line(1, "primary: string;");
    s.line(1, "secondary: string;");
    s.line(1, "glow: string;");
    s.line(0, "}");
    s.blank();
    s.line(0, "export const defaultTheme: ThemeColors = {");
    s.line(1, format!("primary: {},", string_literal(primary)));
    s.line(1, format!("secondary: {},", string_literal(secondary)));
    s.line(1, format!("glow: {},", string_literal(glow)));
    s.line(0, "};");
    s.blank();
    s.line(0, "const unitBox = new THREE.BoxGeometry(1, 1, 1);");
    s.blank();
    s.line(
        0,
        "function tint(color: string, multiplier: number): THREE.Color {",
    );
    s.line(
        1,
        "return new THREE.Color(color).multiplyScalar(multiplier);",
    );
    s.line(0, "}");
    s.blank();
    s.line(0, "function voxel(");
    s.line(1, "parent: THREE.Object3D,");
    s.line(1, "name: string,");
    s.line(1, "position: [number, number, number],");
    s.line(1, "scale: [number, number, number],");
    s.line(1, "color: THREE.Color,");
    s.line(1, "emissiveIntensity: number,");
    s.line(0, "): THREE.Mesh {");
    s.line(1, "const material = new THREE.MeshStandardMaterial({");
    s.line(2, "color,");
    s.line(
        2,
        "emissive: emissiveIntensity > 0 ? color : new THREE.Color(0x000000),",
    );
    s.line(2, "emissiveIntensity,");
    s.line(1, "});");
    s.line(1, "const mesh = new THREE.Mesh(unitBox, material);");
    s.line(1, "mesh.name = name;");
    s.line(1, "mesh.position.set(...position);");
    s.line(1, "mesh.scale.set(...scale);");
    s.line(1, "parent.add(mesh);");
    s.line(1, "return mesh;");
    s.line(0, "}");
    s.blank();
    s.line(
        0,
        "export function createModel(theme: ThemeColors = defaultTheme): THREE.Group {",
    );
    s.line(1, "const root = new THREE.Group();");
    s.line(1, "const joints: Record<string, THREE.Group> = {};");
    s.line(
        1,
        "const joint = (name: string, pivot: [number, number, number]): THREE.Group => {",
    );
    s.line(2, "const group = new THREE.Group();");
    s.line(2, "group.name = name;");
    s.line(2, "group.position.set(...pivot);");
    s.line(2, "root.add(group);");
    s.line(2, "joints[name] = group;");
    s.line(2, "return group;");
    s.line(1, "};");

    for (group, pivot) in joints(model) {
        s.blank();
        s.line(1, "{");
        s.line(
            2,
            format!(
                "const g = joint({}, {});",
                string_literal(&group), tuple(pivot)
            ),
        );
        for voxel in model.boxes_in_group(&group) {
            s.line(
                2,
                format!(
                    "voxel(g, {}, {}, {}, {}, {});",
                    string_literal(&voxel.name),
                    tuple(voxel.position - pivot),
                    tuple(voxel.scale),
                    color_expression(voxel),
                    number(emissive_intensity(voxel)),
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
    debug!(bytes = code.len(), "generated game code");
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use voxforge_core::ModelBuilder;

    fn model() -> VoxelModel {
        let mut b = ModelBuilder::new();
        b.push(VoxelBox::new(
            "torso",
            "body",
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 0.5, 0.5),
        ));
        b.push(
            VoxelBox::cube("eye", "head", Vec3::new(0.1, 1.6, 0.3), 0.1)
                .glow()
                .tint(2.5)
                .emissive(1.5),
        );
        b.push(
            VoxelBox::cube("gem", "head", Vec3::new(0.0, 1.8, 0.0), 0.1)
                .custom("hsl(200, 80%, 50%)"),
        );
        b.build()
    }

    #[test]
    fn references_live_theme() {
        let code = generate_game_code(&model(), "#4a4a5a", "#3a3a4a", "#00ffff");
        assert!(code.contains("primary: \"#4a4a5a\","));
        assert!(code.contains("tint(theme.primary, 1)"));
        assert!(code.contains("tint(theme.glow, 2.5), 1.5);"));
        assert!(code.contains("tint(\"hsl(200, 80%, 50%)\", 1)"));
    }

    #[test]
    fn boxes_are_placed_relative_to_their_joint() {
        let code = generate_game_code(&model(), "#000", "#000", "#000");
        // body pivots at its center, so the torso sits at the origin
        assert!(code.contains("joint(\"body\", [0, 1, 0]);"));
        assert!(code.contains("voxel(g, \"torso\", [0, 0, 0], [1, 0.5, 0.5]"));
        assert_eq!(code.matches("joint(\"").count(), 2);
    }

    #[test]
    fn boxes_in_unlisted_groups_are_emitted() {
        let model = VoxelModel {
            boxes: vec![VoxelBox::cube("a", "body", Vec3::ZERO, 1.0)],
            groups: Vec::new(),
        };
        let code = generate_game_code(&model, "#000", "#000", "#000");
        assert_eq!(code.matches("voxel(g, ").count(), 1);
        assert!(code.contains("joint(\"body\", [0, 0, 0]);"));
    }
}
