//! Enumerations, including the numeric-or-named game mode and difficulty.

use argcast_foundation::enums::{DIFFICULTY, GAME_MODE};
use argcast_foundation::{
    Difficulty, EnumDef, EnumValue, Error, GameMode, ParseFailure, Result, TypeDescriptor,
};
use tracing::trace;

/// Matches the upper-cased token against the member names of `def`.
pub(crate) fn member(def: &'static EnumDef, token: &str) -> Result<EnumValue> {
    let normalized = token.to_uppercase();
    def.member(&normalized).ok_or_else(|| {
        Error::parse(
            token,
            TypeDescriptor::Enum(def),
            ParseFailure::UnknownMember {
                enumeration: def.name,
                member: normalized,
            },
        )
    })
}

/// Legacy numeric code first, then the member name.
pub(crate) fn game_mode(token: &str) -> Result<GameMode> {
    if let Some(mode) = token.parse().ok().and_then(GameMode::from_legacy_code) {
        trace!(token, %mode, "game mode from legacy code");
        return Ok(mode);
    }
    named(&GAME_MODE, &GameMode::ALL, token, TypeDescriptor::GameMode)
}

/// Legacy numeric code first, then the member name.
pub(crate) fn difficulty(token: &str) -> Result<Difficulty> {
    if let Some(difficulty) = token.parse().ok().and_then(Difficulty::from_legacy_code) {
        trace!(token, %difficulty, "difficulty from legacy code");
        return Ok(difficulty);
    }
    named(&DIFFICULTY, &Difficulty::ALL, token, TypeDescriptor::Difficulty)
}

fn named<T: Copy>(
    def: &'static EnumDef,
    values: &[T],
    token: &str,
    target: TypeDescriptor,
) -> Result<T> {
    let normalized = token.to_uppercase();
    def.member(&normalized)
        .and_then(|member| values.get(member.ordinal).copied())
        .ok_or_else(|| {
            Error::parse(
                token,
                target,
                ParseFailure::UnknownMember {
                    enumeration: def.name,
                    member: normalized,
                },
            )
        })
}
