//! Material name registry with fuzzy matching.
//!
//! Material lookups never fail with an error: an unknown name is simply no
//! match, and the caller decides whether that matters.

use std::collections::HashMap;
use std::sync::LazyLock;

use argcast_foundation::Material;

/// Source of material kinds for name matching.
pub trait MaterialRegistry {
    /// Matches user input against the known materials.
    ///
    /// Returns `None` when nothing matches.
    fn match_material(&self, name: &str) -> Option<Material>;
}

/// Normalizes a material name the way users are allowed to type it.
///
/// Upper-cases, drops a `minecraft:` namespace prefix, turns whitespace
/// runs into `_` and removes every other non-word character.
#[must_use]
pub fn normalize(name: &str) -> String {
    let upper = name.to_uppercase();
    let upper = upper.strip_prefix("MINECRAFT:").unwrap_or(&upper);

    let mut out = String::with_capacity(upper.len());
    let mut in_space = false;
    for c in upper.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('_');
                in_space = true;
            }
            continue;
        }
        in_space = false;
        if c.is_ascii_alphanumeric() || c == '_' {
            out.push(c);
        }
    }
    out
}

/// A table of materials keyed by canonical name and legacy numeric id.
#[derive(Clone, Debug, Default)]
pub struct MaterialTable {
    by_name: HashMap<String, Material>,
    by_id: HashMap<u32, Material>,
}

impl MaterialTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared built-in table.
    #[must_use]
    pub fn standard() -> &'static MaterialTable {
        &STANDARD
    }

    /// Registers a material under its canonical name and optional legacy id.
    pub fn insert(&mut self, name: &str, legacy_id: Option<u32>) -> Material {
        let material = Material::new(normalize(name));
        if let Some(id) = legacy_id {
            self.by_id.insert(id, material.clone());
        }
        self.by_name
            .insert(material.name().to_string(), material.clone());
        material
    }

    /// Builder form of [`MaterialTable::insert`].
    #[must_use]
    pub fn with(mut self, name: &str, legacy_id: Option<u32>) -> Self {
        self.insert(name, legacy_id);
        self
    }

    /// Number of registered materials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl MaterialRegistry for MaterialTable {
    fn match_material(&self, name: &str) -> Option<Material> {
        if let Ok(id) = name.parse::<u32>() {
            return self.by_id.get(&id).cloned();
        }
        self.by_name.get(&normalize(name)).cloned()
    }
}

static STANDARD: LazyLock<MaterialTable> = LazyLock::new(|| {
    let mut table = MaterialTable::new();
    for (name, id) in STANDARD_MATERIALS {
        table.insert(name, Some(*id));
    }
    table
});

const STANDARD_MATERIALS: &[(&str, u32)] = &[
    ("AIR", 0),
    ("STONE", 1),
    ("GRASS", 2),
    ("DIRT", 3),
    ("COBBLESTONE", 4),
    ("WOOD", 5),
    ("SAPLING", 6),
    ("BEDROCK", 7),
    ("WATER", 8),
    ("STATIONARY_WATER", 9),
    ("LAVA", 10),
    ("SAND", 12),
    ("GRAVEL", 13),
    ("GOLD_ORE", 14),
    ("IRON_ORE", 15),
    ("COAL_ORE", 16),
    ("LOG", 17),
    ("LEAVES", 18),
    ("GLASS", 20),
    ("WOOL", 35),
    ("GOLD_BLOCK", 41),
    ("IRON_BLOCK", 42),
    ("TNT", 46),
    ("BOOKSHELF", 47),
    ("OBSIDIAN", 49),
    ("TORCH", 50),
    ("CHEST", 54),
    ("DIAMOND_ORE", 56),
    ("DIAMOND_BLOCK", 57),
    ("WORKBENCH", 58),
    ("FURNACE", 61),
    ("LADDER", 65),
    ("ICE", 79),
    ("SNOW_BLOCK", 80),
    ("CACTUS", 81),
    ("PUMPKIN", 86),
    ("NETHERRACK", 87),
    ("GLOWSTONE", 89),
    ("EMERALD_BLOCK", 133),
    ("BEACON", 138),
    ("IRON_SPADE", 256),
    ("IRON_PICKAXE", 257),
    ("IRON_AXE", 258),
    ("FLINT_AND_STEEL", 259),
    ("APPLE", 260),
    ("BOW", 261),
    ("ARROW", 262),
    ("COAL", 263),
    ("DIAMOND", 264),
    ("IRON_INGOT", 265),
    ("GOLD_INGOT", 266),
    ("IRON_SWORD", 267),
    ("WOOD_SWORD", 268),
    ("WOOD_SPADE", 269),
    ("WOOD_PICKAXE", 270),
    ("WOOD_AXE", 271),
    ("STONE_SWORD", 272),
    ("STONE_SPADE", 273),
    ("STONE_PICKAXE", 274),
    ("STONE_AXE", 275),
    ("DIAMOND_SWORD", 276),
    ("DIAMOND_SPADE", 277),
    ("DIAMOND_PICKAXE", 278),
    ("DIAMOND_AXE", 279),
    ("STICK", 280),
    ("BOWL", 281),
    ("STRING", 287),
    ("FEATHER", 288),
    ("BREAD", 297),
    ("FLINT", 318),
    ("BUCKET", 325),
    ("WATER_BUCKET", 326),
    ("LAVA_BUCKET", 327),
    ("SADDLE", 329),
    ("REDSTONE", 331),
    ("SNOW_BALL", 332),
    ("BOAT", 333),
    ("LEATHER", 334),
    ("BOOK", 340),
    ("EGG", 344),
    ("COMPASS", 345),
    ("FISHING_ROD", 346),
    ("WATCH", 347),
    ("GLOWSTONE_DUST", 348),
    ("BONE", 352),
    ("SUGAR", 353),
    ("CAKE", 354),
    ("BED", 355),
    ("ENDER_PEARL", 368),
    ("BLAZE_ROD", 369),
    ("GHAST_TEAR", 370),
    ("GOLD_NUGGET", 371),
    ("EMERALD", 388),
    ("NETHER_STAR", 399),
    ("TOTEM", 449),
];
