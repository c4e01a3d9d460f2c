//! Element datatypes
//!
//! [`DType`] is the runtime tag of a tensor's element type; [`Element`] ties
//! each supported Rust scalar to its tag.
//!
//! | Rust  | DType     | notes                          |
//! |-------|-----------|--------------------------------|
//! | `u8`  | `uint8`   |                                |
//! | `i32` | `int32`   |                                |
//! | `i64` | `int64`   | inferred for integer literals  |
//! | `f32` | `float32` | inferred for float literals    |
//! | `f64` | `float64` |                                |

use crate::error::TensorError;
use scirs2_core::numeric::{Float, Num, NumCast};
use scirs2_core::random::Rng;
use std::fmt;
use std::str::FromStr;

/// Runtime element datatype tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DType {
    UInt8,
    Int32,
    Int64,
    Float32,
    Float64,
}

impl DType {
    /// Dtype used for floating tensors when none is requested
    pub const DEFAULT_FLOAT: DType = DType::Float32;

    /// Dtype used for integer tensors when none is requested
    pub const DEFAULT_INT: DType = DType::Int64;

    /// Canonical name
    pub fn name(&self) -> &'static str {
        match self {
            DType::UInt8 => "uint8",
            DType::Int32 => "int32",
            DType::Int64 => "int64",
            DType::Float32 => "float32",
            DType::Float64 => "float64",
        }
    }

    /// Bytes per element
    pub fn size_in_bytes(&self) -> usize {
        match self {
            DType::UInt8 => 1,
            DType::Int32 | DType::Float32 => 4,
            DType::Int64 | DType::Float64 => 8,
        }
    }

    pub fn is_floating_point(&self) -> bool {
        matches!(self, DType::Float32 | DType::Float64)
    }

    /// Whether printing a tensor of this dtype omits the `dtype=` suffix
    pub fn is_print_default(&self) -> bool {
        *self == Self::DEFAULT_FLOAT || *self == Self::DEFAULT_INT
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DType {
    type Err = TensorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uint8" | "u8" => Ok(DType::UInt8),
            "int32" | "i32" => Ok(DType::Int32),
            "int64" | "i64" | "int" | "long" => Ok(DType::Int64),
            "float32" | "f32" | "float" => Ok(DType::Float32),
            "float64" | "f64" | "double" => Ok(DType::Float64),
            other => Err(TensorError::InvalidLiteral(format!(
                "unknown dtype '{}'",
                other
            ))),
        }
    }
}

/// Scalar types that can be stored in a [`Tensor`](crate::Tensor)
pub trait Element:
    Copy + Num + NumCast + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Runtime tag of this type
    const DTYPE: DType;

    /// Numeric cast from `f64` (saturating for integers)
    fn cast_from_f64(value: f64) -> Self;

    /// Numeric cast to `f64`
    fn as_f64(self) -> f64;
}

/// Floating element types; random constructors require these
pub trait FloatElement: Element + Float {
    /// Sample from the uniform distribution on `[0, 1)`
    fn sample_unit<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

macro_rules! impl_element {
    ($($ty:ty => $dtype:expr),* $(,)?) => {
        $(
            impl Element for $ty {
                const DTYPE: DType = $dtype;

                fn cast_from_f64(value: f64) -> Self {
                    value as $ty
                }

                fn as_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_element! {
    u8 => DType::UInt8,
    i32 => DType::Int32,
    i64 => DType::Int64,
    f32 => DType::Float32,
    f64 => DType::Float64,
}

impl FloatElement for f32 {
    fn sample_unit<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.random::<f32>()
    }
}

impl FloatElement for f64 {
    fn sample_unit<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.random::<f64>()
    }
}
