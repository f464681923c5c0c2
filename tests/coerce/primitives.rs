//! Integration tests for scalars, text and enumerations

use argcast_coerce::{Detached, coerce_all};
use argcast_foundation::enums::{EQUIPMENT_SLOT, MAIN_HAND, PERMISSION_DEFAULT, WEATHER_TYPE};
use argcast_foundation::{CoercedValue, ErrorKind, ParseFailure, TypeDescriptor};
use proptest::prelude::*;

// =============================================================================
// Scalars
// =============================================================================

#[test]
fn primitives() {
    let types = [
        TypeDescriptor::Byte,
        TypeDescriptor::Short,
        TypeDescriptor::Int,
        TypeDescriptor::Long,
        TypeDescriptor::Float,
        TypeDescriptor::Double,
        TypeDescriptor::Bool,
        TypeDescriptor::Char,
    ];
    let input = ["127", "15", "11612", "5512512", ".0451", "2.254", "true", "§"];

    let output = coerce_all(&Detached, &types, &input, None).unwrap();
    assert_eq!(output.len(), types.len());

    for (value, descriptor) in output.iter().zip(&types) {
        assert_eq!(&value.descriptor(), descriptor);
    }

    assert_eq!(output[0], CoercedValue::Byte(127));
    assert_eq!(output[1], CoercedValue::Short(15));
    assert_eq!(output[2], CoercedValue::Int(11612));
    assert_eq!(output[3], CoercedValue::Long(5_512_512));
    assert_eq!(output[4], CoercedValue::Float(0.0451));
    assert_eq!(output[5], CoercedValue::Double(2.254));
    assert_eq!(output[6], CoercedValue::Bool(true));
    assert_eq!(output[7], CoercedValue::Char('§'));
}

#[test]
fn text_is_returned_verbatim() {
    let output = coerce_all(&Detached, &[TypeDescriptor::Text], &["  spaced out  "], None).unwrap();
    assert_eq!(output[0].as_str(), Some("  spaced out  "));
}

#[test]
fn integers_do_not_trim() {
    let err = coerce_all(&Detached, &[TypeDescriptor::Int], &[" 5"], None).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::Parse {
            cause: ParseFailure::Int(_),
            ..
        }
    ));
}

#[test]
fn byte_overflow() {
    let err = coerce_all(&Detached, &[TypeDescriptor::Byte], &["300"], None).unwrap_err();
    assert_eq!(err.index(), Some(0));
    assert!(err.to_string().contains("byte"));
}

// =============================================================================
// Enumerations
// =============================================================================

#[test]
fn value_from_enum() {
    let types = [
        TypeDescriptor::Enum(&WEATHER_TYPE),
        TypeDescriptor::Enum(&EQUIPMENT_SLOT),
        TypeDescriptor::Enum(&MAIN_HAND),
        TypeDescriptor::Enum(&PERMISSION_DEFAULT),
    ];
    let input = ["downfall", "HeAd", "lEfT", "NOT_OP"];

    let output = coerce_all(&Detached, &types, &input, None).unwrap();
    assert_eq!(output.len(), types.len());

    let names: Vec<_> = output
        .iter()
        .map(|v| v.as_enum().map(|m| (m.def.name, m.name())))
        .collect();
    assert_eq!(
        names,
        [
            Some(("WeatherType", "DOWNFALL")),
            Some(("EquipmentSlot", "HEAD")),
            Some(("MainHand", "LEFT")),
            Some(("PermissionDefault", "NOT_OP")),
        ]
    );
}

#[test]
fn unknown_enum_member() {
    let err = coerce_all(&Detached, &[TypeDescriptor::Enum(&MAIN_HAND)], &["middle"], None)
        .unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::Parse {
            cause: ParseFailure::UnknownMember { .. },
            ..
        }
    ));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn bool_true_only_for_true(token in "[a-zA-Z]{0,6}") {
        let out = coerce_all(&Detached, &[TypeDescriptor::Bool], &[token.as_str()], None).unwrap();
        prop_assert_eq!(out[0].as_bool(), Some(token.eq_ignore_ascii_case("true")));
    }

    #[test]
    fn ints_parse_exactly(n in any::<i32>()) {
        let token = n.to_string();
        let out = coerce_all(&Detached, &[TypeDescriptor::Int], &[token], None).unwrap();
        prop_assert_eq!(&out[0], &CoercedValue::Int(n));
    }

    #[test]
    fn weather_is_case_insensitive(upper in prop::bool::ANY, which in 0usize..2) {
        let name = WEATHER_TYPE.members[which];
        let token = if upper { name.to_string() } else { name.to_lowercase() };
        let out = coerce_all(&Detached, &[TypeDescriptor::Enum(&WEATHER_TYPE)], &[token], None).unwrap();
        prop_assert_eq!(out[0].as_enum().map(|m| m.ordinal), Some(which));
    }
}
