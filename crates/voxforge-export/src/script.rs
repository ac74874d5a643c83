//! Small helpers for emitting TypeScript source.

use glam::Vec3;
use voxforge_core::{infer_pivot, VoxelModel};

/// Line-oriented source buffer with two-space indentation.
#[derive(Default)]
pub struct Script {
    out: String,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` at nesting `depth`.
    pub fn line(&mut self, depth: usize, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..depth {
                self.out.push_str("  ");
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
    }

    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    pub fn finish(self) -> String {
        self.out
    }
}

/// A quoted, escaped string literal.
pub fn string_literal(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Shortest decimal form of `v`; `-0` prints as `0`.
pub fn number(v: f32) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}

/// `[x, y, z]`.
pub fn tuple(v: Vec3) -> String {
    format!("[{}, {}, {}]", number(v.x), number(v.y), number(v.z))
}

/// PascalCase identifier built from `name`, or `fallback` if none remains.
pub fn identifier(name: &str, fallback: &str) -> String {
    let mut ident = String::new();
    for word in name.split(|c: char| !c.is_ascii_alphanumeric()).filter(|w| !w.is_empty()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            ident.push(first.to_ascii_uppercase());
            ident.extend(chars);
        }
    }
    if ident.is_empty() {
        return fallback.to_string();
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert_str(0, fallback);
    }
    ident
}

/// Each group with the pivot its joint rotates around, in model order.
/// Groups used by boxes but missing from the group list come last.
pub fn joints(model: &VoxelModel) -> Vec<(String, Vec3)> {
    model
        .group_names()
        .into_iter()
        .filter_map(|g| infer_pivot(model, g).map(|p| (g.to_string(), p)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers() {
        assert_eq!(identifier("Mech Boss", "Model"), "MechBoss");
        assert_eq!(identifier("lich_king", "Model"), "LichKing");
        assert_eq!(identifier("  ", "Model"), "Model");
        assert_eq!(identifier("3d orc", "Model"), "Model3dOrc");
    }

    #[test]
    fn numbers_and_strings() {
        assert_eq!(number(1.0), "1");
        assert_eq!(number(-0.0), "0");
        assert_eq!(number(0.35), "0.35");
        assert_eq!(tuple(Vec3::new(1.5, 0.0, -2.0)), "[1.5, 0, -2]");
        assert_eq!(string_literal("a\"b"), r#""a\"b""#);
    }

    #[test]
    fn script_indents() {
        let mut s = Script::new();
        s.line(0, "{");
        s.line(1, "x;");
        s.blank();
        s.line(0, "}");
        assert_eq!(s.finish(), "{\n  x;\n\n}\n");
    }
}
