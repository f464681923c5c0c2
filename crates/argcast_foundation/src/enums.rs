//! Enumeration definitions and the built-in enumerations.
//!
//! Rust enums carry no runtime member list, so enumerations that can be
//! named in input are described by an [`EnumDef`]: a type name plus the
//! canonical (upper-snake) member names. [`GameMode`] and [`Difficulty`] are
//! real Rust enums as well, because they also accept legacy numeric codes.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Runtime description of an enumeration.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct EnumDef {
    /// Type name, used in diagnostics.
    pub name: &'static str,
    /// Canonical member names, in declaration order.
    pub members: &'static [&'static str],
}

impl EnumDef {
    /// Looks up a member by exact canonical name.
    #[must_use]
    pub fn member(&'static self, name: &str) -> Option<EnumValue> {
        self.members
            .iter()
            .position(|m| *m == name)
            .map(|ordinal| EnumValue { def: self, ordinal })
    }
}

/// A member of an [`EnumDef`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumValue {
    /// The enumeration this member belongs to.
    pub def: &'static EnumDef,
    /// Position in [`EnumDef::members`].
    pub ordinal: usize,
}

impl EnumValue {
    /// Returns the canonical member name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.def.members[self.ordinal]
    }
}

impl fmt::Debug for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.def.name, self.name())
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Weather a player can experience.
pub static WEATHER_TYPE: EnumDef = EnumDef {
    name: "WeatherType",
    members: &["DOWNFALL", "CLEAR"],
};

/// Equipment slots of a living entity.
pub static EQUIPMENT_SLOT: EnumDef = EnumDef {
    name: "EquipmentSlot",
    members: &["HAND", "OFF_HAND", "FEET", "LEGS", "CHEST", "HEAD"],
};

/// A player's dominant hand.
pub static MAIN_HAND: EnumDef = EnumDef {
    name: "MainHand",
    members: &["LEFT", "RIGHT"],
};

/// Default grant of a permission.
pub static PERMISSION_DEFAULT: EnumDef = EnumDef {
    name: "PermissionDefault",
    members: &["TRUE", "FALSE", "OP", "NOT_OP"],
};

/// Member list of [`GameMode`].
pub static GAME_MODE: EnumDef = EnumDef {
    name: "GameMode",
    members: &["SURVIVAL", "CREATIVE", "ADVENTURE", "SPECTATOR"],
};

/// Member list of [`Difficulty`].
pub static DIFFICULTY: EnumDef = EnumDef {
    name: "Difficulty",
    members: &["PEACEFUL", "EASY", "NORMAL", "HARD"],
};

/// Player game mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameMode {
    /// Legacy code 0.
    Survival,
    /// Legacy code 1.
    Creative,
    /// Legacy code 2.
    Adventure,
    /// Legacy code 3.
    Spectator,
}

impl GameMode {
    /// All modes, indexed by ordinal in [`GAME_MODE`].
    pub const ALL: [GameMode; 4] = [
        Self::Survival,
        Self::Creative,
        Self::Adventure,
        Self::Spectator,
    ];

    /// Maps a legacy numeric code.
    #[must_use]
    pub const fn from_legacy_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Survival),
            1 => Some(Self::Creative),
            2 => Some(Self::Adventure),
            3 => Some(Self::Spectator),
            _ => None,
        }
    }

    /// Returns the legacy numeric code.
    #[must_use]
    pub const fn legacy_code(self) -> i32 {
        match self {
            Self::Survival => 0,
            Self::Creative => 1,
            Self::Adventure => 2,
            Self::Spectator => 3,
        }
    }

    /// Converts a member of [`GAME_MODE`].
    #[must_use]
    pub fn from_member(member: EnumValue) -> Option<Self> {
        if !std::ptr::eq(member.def, &GAME_MODE) {
            return None;
        }
        Self::ALL.get(member.ordinal).copied()
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(GAME_MODE.members[*self as usize])
    }
}

/// World difficulty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Difficulty {
    /// Legacy code 0.
    Peaceful,
    /// Legacy code 1.
    Easy,
    /// Legacy code 2.
    Normal,
    /// Legacy code 3.
    Hard,
}

impl Difficulty {
    /// All difficulties, indexed by ordinal in [`DIFFICULTY`].
    pub const ALL: [Difficulty; 4] = [Self::Peaceful, Self::Easy, Self::Normal, Self::Hard];

    /// Maps a legacy numeric code.
    #[must_use]
    pub const fn from_legacy_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Peaceful),
            1 => Some(Self::Easy),
            2 => Some(Self::Normal),
            3 => Some(Self::Hard),
            _ => None,
        }
    }

    /// Returns the legacy numeric code.
    #[must_use]
    pub const fn legacy_code(self) -> i32 {
        self as i32
    }

    /// Converts a member of [`DIFFICULTY`].
    #[must_use]
    pub fn from_member(member: EnumValue) -> Option<Self> {
        if !std::ptr::eq(member.def, &DIFFICULTY) {
            return None;
        }
        Self::ALL.get(member.ordinal).copied()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(DIFFICULTY.members[*self as usize])
    }
}
