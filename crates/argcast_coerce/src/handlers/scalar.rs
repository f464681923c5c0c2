//! Primitive scalars.

use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;

use argcast_foundation::{Error, ParseFailure, Result, TypeDescriptor};

/// Parses a signed integer of the width `T`.
pub(crate) fn integer<T>(descriptor: &TypeDescriptor, token: &str) -> Result<T>
where
    T: FromStr<Err = ParseIntError>,
{
    token
        .parse()
        .map_err(|err: ParseIntError| Error::parse(token, descriptor.clone(), err.into()))
}

/// Parses a float of the width `T`. Surrounding whitespace is ignored.
pub(crate) fn float<T>(descriptor: &TypeDescriptor, token: &str) -> Result<T>
where
    T: FromStr<Err = ParseFloatError>,
{
    token
        .trim()
        .parse()
        .map_err(|err: ParseFloatError| Error::parse(token, descriptor.clone(), err.into()))
}

/// Anything other than a case-insensitive `true` is `false`.
// TODO: decide whether garbage such as "yes" or "1" should become an error
// instead of silently reading as false.
pub(crate) fn boolean(token: &str) -> bool {
    token.eq_ignore_ascii_case("true")
}

/// First character of the token.
pub(crate) fn character(token: &str) -> Result<char> {
    token
        .chars()
        .next()
        .ok_or_else(|| Error::parse(token, TypeDescriptor::Char, ParseFailure::Empty))
}
