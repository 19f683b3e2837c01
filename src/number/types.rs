//! JTD number types

use crate::error::Error;
use crate::schema::Type;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The JTD type a number position should be represented as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumType {
    #[default]
    Uint8,
    Int8,
    Uint16,
    Int16,
    Uint32,
    Int32,
    Float32,
    Float64,
}

/// Integer types in narrowing order: each unsigned type before the signed
/// type of the same width, narrower widths first.
pub(crate) const NARROWING_ORDER: [NumType; 6] = [
    NumType::Uint8,
    NumType::Int8,
    NumType::Uint16,
    NumType::Int16,
    NumType::Uint32,
    NumType::Int32,
];

impl NumType {
    /// Check if this is a floating point type
    pub fn is_float(self) -> bool {
        matches!(self, NumType::Float32 | NumType::Float64)
    }

    /// The minimum and maximum value representable by this type.
    ///
    /// Floating types accept any numeric envelope.
    pub fn as_range(self) -> (f64, f64) {
        match self {
            NumType::Uint8 => (0.0, f64::from(u8::MAX)),
            NumType::Int8 => (f64::from(i8::MIN), f64::from(i8::MAX)),
            NumType::Uint16 => (0.0, f64::from(u16::MAX)),
            NumType::Int16 => (f64::from(i16::MIN), f64::from(i16::MAX)),
            NumType::Uint32 => (0.0, f64::from(u32::MAX)),
            NumType::Int32 => (f64::from(i32::MIN), f64::from(i32::MAX)),
            NumType::Float32 | NumType::Float64 => (f64::MIN, f64::MAX),
        }
    }

    /// Convert to the corresponding schema type
    pub fn into_type(self) -> Type {
        match self {
            NumType::Uint8 => Type::Uint8,
            NumType::Int8 => Type::Int8,
            NumType::Uint16 => Type::Uint16,
            NumType::Int16 => Type::Int16,
            NumType::Uint32 => Type::Uint32,
            NumType::Int32 => Type::Int32,
            NumType::Float32 => Type::Float32,
            NumType::Float64 => Type::Float64,
        }
    }

    /// The wire name of this type
    pub fn as_str(self) -> &'static str {
        match self {
            NumType::Uint8 => "uint8",
            NumType::Int8 => "int8",
            NumType::Uint16 => "uint16",
            NumType::Int16 => "int16",
            NumType::Uint32 => "uint32",
            NumType::Int32 => "int32",
            NumType::Float32 => "float32",
            NumType::Float64 => "float64",
        }
    }
}

impl fmt::Display for NumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uint8" => Ok(NumType::Uint8),
            "int8" => Ok(NumType::Int8),
            "uint16" => Ok(NumType::Uint16),
            "int16" => Ok(NumType::Int16),
            "uint32" => Ok(NumType::Uint32),
            "int32" => Ok(NumType::Int32),
            "float32" => Ok(NumType::Float32),
            "float64" => Ok(NumType::Float64),
            other => Err(Error::unknown_num_type(other)),
        }
    }
}
