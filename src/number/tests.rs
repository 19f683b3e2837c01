//! Number narrowing tests

use super::*;
use crate::schema::Type;
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test_case(NumType::Uint8, Type::Uint8)]
#[test_case(NumType::Int8, Type::Int8)]
#[test_case(NumType::Uint16, Type::Uint16)]
#[test_case(NumType::Int16, Type::Int16)]
#[test_case(NumType::Uint32, Type::Uint32)]
#[test_case(NumType::Int32, Type::Int32)]
#[test_case(NumType::Float32, Type::Float32)]
#[test_case(NumType::Float64, Type::Float64)]
fn test_empty_envelope_honors_default(default: NumType, expected: Type) {
    assert_eq!(InferredNumber::new().into_type(default), expected);
}

#[test_case(NumType::Uint8, Type::Uint8)]
#[test_case(NumType::Int8, Type::Uint8)]
#[test_case(NumType::Uint16, Type::Uint16)]
#[test_case(NumType::Int16, Type::Int16)]
#[test_case(NumType::Uint32, Type::Uint32)]
#[test_case(NumType::Int32, Type::Int32)]
#[test_case(NumType::Float32, Type::Float32)]
#[test_case(NumType::Float64, Type::Float64)]
fn test_uint8_limits(default: NumType, expected: Type) {
    let number = InferredNumber::new().observe(0.0).observe(f64::from(u8::MAX));
    assert_eq!(number.into_type(default), expected);
}

#[test_case(NumType::Uint8, Type::Int8)]
#[test_case(NumType::Int8, Type::Int8)]
#[test_case(NumType::Uint16, Type::Int8)]
#[test_case(NumType::Int16, Type::Int16)]
#[test_case(NumType::Uint32, Type::Int8)]
#[test_case(NumType::Int32, Type::Int32)]
#[test_case(NumType::Float32, Type::Float32)]
#[test_case(NumType::Float64, Type::Float64)]
fn test_int8_limits(default: NumType, expected: Type) {
    let number = InferredNumber::new()
        .observe(f64::from(i8::MIN))
        .observe(f64::from(i8::MAX));
    assert_eq!(number.into_type(default), expected);
}

#[test_case(NumType::Uint8)]
#[test_case(NumType::Int8)]
#[test_case(NumType::Uint16)]
#[test_case(NumType::Int16)]
#[test_case(NumType::Uint32)]
#[test_case(NumType::Int32)]
fn test_fractional_rejects_integer_defaults(default: NumType) {
    let number = InferredNumber::new().observe(0.5);
    assert_eq!(number.into_type(default), Type::Float64);
}

#[test]
fn test_fractional_keeps_float_defaults() {
    let number = InferredNumber::new().observe(0.5);
    assert_eq!(number.into_type(NumType::Float32), Type::Float32);
    assert_eq!(number.into_type(NumType::Float64), Type::Float64);
}

#[test]
fn test_envelope_includes_zero_seed() {
    let number = InferredNumber::new().observe(52.0);
    assert_eq!(number.min(), 0.0);
    assert_eq!(number.max(), 52.0);

    let number = InferredNumber::new().observe(-1.0);
    assert_eq!(number.min(), -1.0);
    assert_eq!(number.max(), 0.0);
    assert_eq!(number.into_type(NumType::Uint8), Type::Int8);
}

#[test]
fn test_envelope_is_monotonic() {
    let wide = InferredNumber::new().observe(-600.0).observe(9.0);
    let widened_again = wide.observe(5.0);

    assert_eq!(wide.min(), widened_again.min());
    assert_eq!(wide.max(), widened_again.max());
    assert_eq!(widened_again.into_type(NumType::Uint8), Type::Int16);
}

#[test]
fn test_integral_float_is_an_integer_sample() {
    let number = InferredNumber::new().observe(1.0);
    assert!(number.is_integer());
    assert_eq!(number.into_type(NumType::Uint8), Type::Uint8);
}

#[test]
fn test_int32_minimum() {
    let number = InferredNumber::new().observe(f64::from(i32::MIN));
    assert_eq!(number.into_type(NumType::Uint8), Type::Int32);
}

#[test]
fn test_contained_by_floats_accept_any_envelope() {
    let number = InferredNumber::new().observe(-1.0e300).observe(1.0e300);
    assert!(number.contained_by(NumType::Float32));
    assert!(number.contained_by(NumType::Float64));
    assert!(!number.contained_by(NumType::Int32));
}

#[test]
fn test_num_type_parsing() {
    assert_eq!("uint8".parse::<NumType>().unwrap(), NumType::Uint8);
    assert_eq!("float64".parse::<NumType>().unwrap(), NumType::Float64);
    assert!("uint64".parse::<NumType>().is_err());
}
