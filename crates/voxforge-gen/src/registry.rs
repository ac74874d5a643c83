//! Name-based lookup over every archetype generator.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use tracing::{debug, instrument};
use voxforge_core::VoxelModel;

use crate::bosses::{create_hydra_model, create_kraken_model, create_lich_king_model};
use crate::creatures::{
    create_bat_model, create_beast_model, create_beetle_model, create_crab_model,
    create_dragon_model, create_jellyfish_model, create_phoenix_model, create_scorpion_model,
    create_serpent_model, create_slime_model, create_spider_model, create_wolf_model,
};
use crate::humanoids::{
    create_fire_elemental_model, create_ghost_model, create_goblin_model, create_golem_model,
    create_knight_model, create_mage_model, create_skeleton_warrior_model,
};
use crate::machines::{create_drone_model, create_mech_boss_model, create_turret_model};
use crate::nature::{
    create_ash_mound_model, create_boulder_model, create_bush_model, create_crystal_spire_model,
    create_dead_tree_model, create_ice_crystal_model, create_lava_rock_model, create_mushroom_model,
    create_oak_tree_model, create_pine_tree_model,
};
use crate::props::{
    create_barrel_model, create_campfire_model, create_crate_model, create_lantern_model,
    create_pillar_model, create_portal_model, create_torch_model, create_treasure_chest_model,
    DEFAULT_DIMENSIONS,
};

/// Broad role of an archetype in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Character,
    Enemy,
    Boss,
    Nature,
    Prop,
}

impl Category {
    /// Lowercase tag, as written in asset files.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Enemy => "enemy",
            Self::Boss => "boss",
            Self::Nature => "nature",
            Self::Prop => "prop",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! archetypes {
    ($($variant:ident => $name:literal, $slug:literal, $category:ident;)*) => {
        /// Every model the generators can produce.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum Archetype {
            $($variant,)*
        }

        impl Archetype {
            /// The full roster, in display order.
            pub const ALL: &'static [Archetype] = &[$(Archetype::$variant,)*];

            /// Display name, e.g. "Mech Boss".
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// Snake-case identifier, e.g. `mech_boss`.
            pub const fn slug(self) -> &'static str {
                match self {
                    $(Self::$variant => $slug,)*
                }
            }

            pub const fn category(self) -> Category {
                match self {
                    $(Self::$variant => Category::$category,)*
                }
            }
        }
    };
}

archetypes! {
    Beast => "Beast", "beast", Enemy;
    Wolf => "Wolf", "wolf", Enemy;
    Spider => "Spider", "spider", Enemy;
    Serpent => "Serpent", "serpent", Enemy;
    Dragon => "Dragon", "dragon", Boss;
    Bat => "Bat", "bat", Enemy;
    Slime => "Slime", "slime", Enemy;
    Scorpion => "Scorpion", "scorpion", Enemy;
    Crab => "Crab", "crab", Enemy;
    Beetle => "Beetle", "beetle", Enemy;
    Jellyfish => "Jellyfish", "jellyfish", Enemy;
    Phoenix => "Phoenix", "phoenix", Enemy;
    Knight => "Knight", "knight", Character;
    Mage => "Mage", "mage", Character;
    Goblin => "Goblin", "goblin", Enemy;
    SkeletonWarrior => "Skeleton Warrior", "skeleton_warrior", Enemy;
    Golem => "Golem", "golem", Enemy;
    Ghost => "Ghost", "ghost", Enemy;
    FireElemental => "Fire Elemental", "fire_elemental", Enemy;
    Drone => "Drone", "drone", Enemy;
    Turret => "Turret", "turret", Enemy;
    MechBoss => "Mech Boss", "mech_boss", Boss;
    Hydra => "Hydra", "hydra", Boss;
    Kraken => "Kraken", "kraken", Boss;
    LichKing => "Lich King", "lich_king", Boss;
    OakTree => "Oak Tree", "oak_tree", Nature;
    PineTree => "Pine Tree", "pine_tree", Nature;
    DeadTree => "Dead Tree", "dead_tree", Nature;
    Bush => "Bush", "bush", Nature;
    Mushroom => "Mushroom", "mushroom", Nature;
    CrystalSpire => "Crystal Spire", "crystal_spire", Nature;
    Boulder => "Boulder", "boulder", Nature;
    AshMound => "Ash Mound", "ash_mound", Nature;
    LavaRock => "Lava Rock", "lava_rock", Nature;
    IceCrystal => "Ice Crystal", "ice_crystal", Nature;
    TreasureChest => "Treasure Chest", "treasure_chest", Prop;
    Barrel => "Barrel", "barrel", Prop;
    Crate => "Crate", "crate", Prop;
    Torch => "Torch", "torch", Prop;
    Lantern => "Lantern", "lantern", Prop;
    Portal => "Portal", "portal", Prop;
    Pillar => "Pillar", "pillar", Prop;
    Campfire => "Campfire", "campfire", Prop;
}

impl Archetype {
    /// Whether repeated generation yields different models.
    pub const fn is_randomized(self) -> bool {
        matches!(self, Self::AshMound | Self::LavaRock | Self::IceCrystal)
    }

    /// Generate at `scale`. Randomized archetypes draw from the thread RNG.
    pub fn generate(self, scale: f32) -> VoxelModel {
        self.generate_with_rng(scale, &mut rand::thread_rng())
    }

    /// Generate at `scale`, drawing any randomness from `rng`.
    #[instrument(level = "debug", skip(rng), fields(archetype = self.name()))]
    pub fn generate_with_rng(self, scale: f32, rng: &mut impl Rng) -> VoxelModel {
        let (w, h, d) = DEFAULT_DIMENSIONS;
        let model = match self {
            Self::Beast => create_beast_model(scale),
            Self::Wolf => create_wolf_model(scale),
            Self::Spider => create_spider_model(scale),
            Self::Serpent => create_serpent_model(scale),
            Self::Dragon => create_dragon_model(scale),
            Self::Bat => create_bat_model(scale),
            Self::Slime => create_slime_model(scale),
            Self::Scorpion => create_scorpion_model(scale),
            Self::Crab => create_crab_model(scale),
            Self::Beetle => create_beetle_model(scale),
            Self::Jellyfish => create_jellyfish_model(scale),
            Self::Phoenix => create_phoenix_model(scale),
            Self::Knight => create_knight_model(scale),
            Self::Mage => create_mage_model(scale),
            Self::Goblin => create_goblin_model(scale),
            Self::SkeletonWarrior => create_skeleton_warrior_model(scale),
            Self::Golem => create_golem_model(scale),
            Self::Ghost => create_ghost_model(scale),
            Self::FireElemental => create_fire_elemental_model(scale),
            Self::Drone => create_drone_model(scale),
            Self::Turret => create_turret_model(scale),
            Self::MechBoss => create_mech_boss_model(scale),
            Self::Hydra => create_hydra_model(scale),
            Self::Kraken => create_kraken_model(scale),
            Self::LichKing => create_lich_king_model(scale),
            Self::OakTree => create_oak_tree_model(scale),
            Self::PineTree => create_pine_tree_model(scale),
            Self::DeadTree => create_dead_tree_model(scale),
            Self::Bush => create_bush_model(scale),
            Self::Mushroom => create_mushroom_model(scale),
            Self::CrystalSpire => create_crystal_spire_model(scale),
            Self::Boulder => create_boulder_model(scale),
            Self::AshMound => create_ash_mound_model(scale, rng),
            Self::LavaRock => create_lava_rock_model(scale, rng),
            Self::IceCrystal => create_ice_crystal_model(scale, rng),
            Self::TreasureChest => create_treasure_chest_model(scale, w, h, d),
            Self::Barrel => create_barrel_model(scale),
            Self::Crate => create_crate_model(scale, w, h, d),
            Self::Torch => create_torch_model(scale),
            Self::Lantern => create_lantern_model(scale),
            Self::Portal => create_portal_model(scale),
            Self::Pillar => create_pillar_model(scale, w, h * 3.0, d),
            Self::Campfire => create_campfire_model(scale),
        };
        debug!(boxes = model.len(), groups = model.groups.len(), "generated model");
        model
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown archetype name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown archetype: {0}")]
pub struct UnknownArchetype(pub String);

impl FromStr for Archetype {
    type Err = UnknownArchetype;

    /// Accepts display names or slugs, ignoring case; spaces, dashes and
    /// underscores are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .map(|c| if c == ' ' || c == '-' { '_' } else { c.to_ascii_lowercase() })
            .collect();
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.slug() == wanted)
            .ok_or_else(|| UnknownArchetype(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn roster_is_complete() {
        assert_eq!(Archetype::ALL.len(), 43);
        let randomized: Vec<_> = Archetype::ALL
            .iter()
            .filter(|a| a.is_randomized())
            .collect();
        assert_eq!(randomized.len(), 3);
    }

    #[test]
    fn parses_names_and_slugs() {
        assert_eq!("Mech Boss".parse(), Ok(Archetype::MechBoss));
        assert_eq!("mech_boss".parse(), Ok(Archetype::MechBoss));
        assert_eq!("MECH-BOSS".parse(), Ok(Archetype::MechBoss));
        assert_eq!(" oak tree ".parse(), Ok(Archetype::OakTree));
        assert!("unicorn".parse::<Archetype>().is_err());
        for a in Archetype::ALL {
            assert_eq!(a.name().parse(), Ok(*a));
            assert_eq!(a.slug().parse(), Ok(*a));
        }
    }

    #[test]
    fn categories() {
        assert_eq!(Archetype::Knight.category(), Category::Character);
        assert_eq!(Archetype::LichKing.category(), Category::Boss);
        assert_eq!(Archetype::Campfire.category().as_str(), "prop");
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = Archetype::AshMound.generate_with_rng(1.0, &mut StdRng::seed_from_u64(3));
        let b = Archetype::AshMound.generate_with_rng(1.0, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }
}
