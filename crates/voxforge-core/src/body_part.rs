//! Group-name classification.
//!
//! Group names are a wire format shared with exported assets and the
//! animation runtime: `leg_left_2`, `arm_r`, `head`, `tail_3`. The role of a
//! group is derived from its name here and nowhere else, and generators
//! build names with [`part_group`] so every name they emit classifies back
//! to the part it was built from.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Anatomical or structural role of a group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyPart {
    Head,
    Neck,
    Torso,
    Arm,
    Hand,
    Leg,
    Foot,
    Tail,
    Wing,
    Tentacle,
    Weapon,
    /// Leaves, needles and canopy lobes.
    Foliage,
    /// Structural frames, braces and rails.
    Frame,
    /// Crystal shards and gems.
    Crystal,
    /// Coins and treasure.
    Loot,
    /// Glass panes.
    Glass,
    Effect,
    Other,
}

impl BodyPart {
    /// Canonical group-name stem.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Neck => "neck",
            Self::Torso => "body",
            Self::Arm => "arm",
            Self::Hand => "hand",
            Self::Leg => "leg",
            Self::Foot => "foot",
            Self::Tail => "tail",
            Self::Wing => "wing",
            Self::Tentacle => "tentacle",
            Self::Weapon => "weapon",
            Self::Foliage => "foliage",
            Self::Frame => "frame",
            Self::Crystal => "crystal",
            Self::Loot => "loot",
            Self::Glass => "glass",
            Self::Effect => "effects",
            Self::Other => "misc",
        }
    }

    /// Whether the part hangs from a joint at its top (arms, legs, ...).
    pub const fn is_limb(self) -> bool {
        matches!(
            self,
            Self::Arm | Self::Hand | Self::Leg | Self::Foot | Self::Tentacle
        )
    }

    fn from_token(token: &str) -> Option<Self> {
        let part = match token {
            "head" | "skull" | "jaw" | "face" | "helmet" | "crown" | "heads" => Self::Head,
            "neck" | "necks" => Self::Neck,
            "body" | "torso" | "chest" | "spine" | "pelvis" | "hips" | "abdomen" | "thorax"
            | "core" | "armor" | "shell" | "cape" | "robe" => Self::Torso,
            "arm" | "arms" | "shoulder" | "forearm" => Self::Arm,
            "hand" | "hands" | "claw" | "claws" | "pincer" | "fist" => Self::Hand,
            "leg" | "legs" | "thigh" | "shin" => Self::Leg,
            "foot" | "feet" | "paw" | "hoof" => Self::Foot,
            "tail" | "stinger" => Self::Tail,
            "wing" | "wings" => Self::Wing,
            "tentacle" | "tentacles" | "tendril" | "tendrils" => Self::Tentacle,
            "weapon" | "staff" | "sword" | "shield" | "blade" | "cannon" | "gun" | "axe" => {
                Self::Weapon
            }
            "foliage" | "canopy" | "leaf" | "leaves" | "needles" => Self::Foliage,
            "frame" | "brace" | "rails" | "cage" => Self::Frame,
            "crystal" | "crystals" | "shard" | "shards" | "gem" | "gems" => Self::Crystal,
            "loot" | "coin" | "coins" | "treasure" => Self::Loot,
            "glass" | "pane" | "panes" | "window" => Self::Glass,
            "glow" | "flame" | "flames" | "fire" | "aura" | "rune" | "runes" | "particles"
            | "effects" | "effect" | "sparks" | "embers" => Self::Effect,
            _ => return None,
        };
        Some(part)
    }

    fn from_substring(name: &str) -> Option<Self> {
        // First match wins.
        const PATTERNS: [(&str, BodyPart); 8] = [
            ("tentacle", BodyPart::Tentacle),
            ("tendril", BodyPart::Tentacle),
            ("wing", BodyPart::Wing),
            ("tail", BodyPart::Tail),
            ("head", BodyPart::Head),
            ("leg", BodyPart::Leg),
            ("arm", BodyPart::Arm),
            ("neck", BodyPart::Neck),
        ];
        PATTERNS
            .iter()
            .find(|(pattern, _)| name.contains(pattern))
            .map(|&(_, part)| part)
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of the model a group sits on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
    #[default]
    Center,
}

impl Side {
    /// Both sides, left first, for mirrored parts.
    pub const PAIR: [Side; 2] = [Side::Left, Side::Right];

    /// Multiplier applied to the mirrored coordinate: -1 for left, +1 for
    /// right, 0 for center.
    #[inline]
    pub const fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
            Self::Center => 0.0,
        }
    }

    /// Group-name token, empty for center.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "",
        }
    }
}

/// Result of classifying a group name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartClass {
    pub part: BodyPart,
    pub side: Side,
    /// Trailing `_N` segment index, if any.
    pub index: Option<u32>,
}

/// Classify a group name.
pub fn classify_group(name: &str) -> PartClass {
    let lower = name.to_ascii_lowercase();
    let tokens: Vec<&str> = lower
        .split(|c: char| c == '_' || c == '-' || c == ' ' || c == '.')
        .filter(|t| !t.is_empty())
        .collect();

    let part = tokens
        .iter()
        .find_map(|t| BodyPart::from_token(t))
        .or_else(|| BodyPart::from_substring(&lower))
        .unwrap_or(BodyPart::Other);

    let side = tokens
        .iter()
        .find_map(|t| match *t {
            "left" | "l" => Some(Side::Left),
            "right" | "r" => Some(Side::Right),
            _ => None,
        })
        .or_else(|| {
            if lower.contains("left") {
                Some(Side::Left)
            } else if lower.contains("right") {
                Some(Side::Right)
            } else {
                None
            }
        })
        .unwrap_or(Side::Center);

    let index = tokens
        .last()
        .filter(|_| tokens.len() > 1)
        .and_then(|t| t.parse().ok());

    PartClass { part, side, index }
}

/// Format a group name: `leg_left_2`, `head`, `tail_3`.
pub fn part_group(part: BodyPart, side: Side, index: Option<u32>) -> String {
    let mut name = String::from(part.as_str());
    if side != Side::Center {
        name.push('_');
        name.push_str(side.as_str());
    }
    if let Some(i) = index {
        name.push('_');
        name.push_str(&i.to_string());
    }
    name
}
