//! Tensors whose dtype is decided at runtime
//!
//! [`Tensor<T>`] fixes its dtype at compile time. Input such as literal text
//! only reveals the dtype once parsed, so [`DynTensor`] wraps one tensor of
//! each supported dtype behind a single type.
//!
//! # Examples
//!
//! ```
//! use tenbasics_core::{DType, DynTensor, Literal};
//!
//! let literal = Literal::parse("[[1, 2], [3, 4]]").unwrap();
//! let x = DynTensor::from_literal(&literal).unwrap();
//! assert_eq!(x.dtype(), DType::Int64);
//! assert_eq!(x.shape(), &[2, 2]);
//!
//! let r = x.rand_like(DType::Float32).unwrap();
//! assert_eq!(r.dtype(), DType::Float32);
//! assert_eq!(r.shape(), x.shape());
//! ```

use crate::dtype::{DType, Element};
use crate::error::{TensorError, TensorResult};
use crate::literal::Literal;
use crate::random::{self, Generator};
use crate::tensor::{PrintOptions, Tensor};
use std::fmt;
use tenbasics_device::{Device, DeviceManager};

/// A tensor of any supported dtype
#[derive(Clone, PartialEq)]
pub enum DynTensor {
    UInt8(Tensor<u8>),
    Int32(Tensor<i32>),
    Int64(Tensor<i64>),
    Float32(Tensor<f32>),
    Float64(Tensor<f64>),
}

/// Evaluate `$body` with `$tensor` bound to the inner tensor
macro_rules! dispatch {
    ($value:expr, $tensor:ident => $body:expr) => {
        match $value {
            DynTensor::UInt8($tensor) => $body,
            DynTensor::Int32($tensor) => $body,
            DynTensor::Int64($tensor) => $body,
            DynTensor::Float32($tensor) => $body,
            DynTensor::Float64($tensor) => $body,
        }
    };
}

/// Like `dispatch!`, rewrapping the result in the same variant
macro_rules! map_same {
    ($value:expr, $tensor:ident => $body:expr) => {
        match $value {
            DynTensor::UInt8($tensor) => DynTensor::UInt8($body),
            DynTensor::Int32($tensor) => DynTensor::Int32($body),
            DynTensor::Int64($tensor) => DynTensor::Int64($body),
            DynTensor::Float32($tensor) => DynTensor::Float32($body),
            DynTensor::Float64($tensor) => DynTensor::Float64($body),
        }
    };
}

impl DynTensor {
    /// Build from a literal, inferring `int64` or `float32`
    pub fn from_literal(literal: &Literal) -> TensorResult<Self> {
        Self::from_literal_as(literal, literal.infer_dtype())
    }

    /// Build from a literal with an explicit dtype.
    ///
    /// Floating values converted to an integer dtype are truncated toward
    /// zero and saturate at the dtype's range.
    pub fn from_literal_as(literal: &Literal, dtype: DType) -> TensorResult<Self> {
        Ok(match dtype {
            DType::UInt8 => DynTensor::UInt8(Tensor::from_literal(literal)?),
            DType::Int32 => DynTensor::Int32(Tensor::from_literal(literal)?),
            DType::Int64 => DynTensor::Int64(Tensor::from_literal(literal)?),
            DType::Float32 => DynTensor::Float32(Tensor::from_literal(literal)?),
            DType::Float64 => DynTensor::Float64(Tensor::from_literal(literal)?),
        })
    }

    /// Tensor of zeros with a runtime dtype
    pub fn zeros(shape: &[usize], dtype: DType) -> Self {
        match dtype {
            DType::UInt8 => DynTensor::UInt8(Tensor::zeros(shape)),
            DType::Int32 => DynTensor::Int32(Tensor::zeros(shape)),
            DType::Int64 => DynTensor::Int64(Tensor::zeros(shape)),
            DType::Float32 => DynTensor::Float32(Tensor::zeros(shape)),
            DType::Float64 => DynTensor::Float64(Tensor::zeros(shape)),
        }
    }

    pub fn shape(&self) -> &[usize] {
        dispatch!(self, t => t.shape())
    }

    pub fn dim(&self) -> usize {
        dispatch!(self, t => t.dim())
    }

    pub fn numel(&self) -> usize {
        dispatch!(self, t => t.numel())
    }

    pub fn dtype(&self) -> DType {
        dispatch!(self, t => t.dtype())
    }

    pub fn device(&self) -> Device {
        dispatch!(self, t => t.device())
    }

    /// Copy to `device` using the process-wide registry
    pub fn to(&self, device: Device) -> TensorResult<Self> {
        self.to_with(device, DeviceManager::global())
    }

    /// Copy to `device` registered in `manager`
    pub fn to_with(&self, device: Device, manager: &DeviceManager) -> TensorResult<Self> {
        Ok(map_same!(self, t => t.to_with(device, manager)?))
    }

    /// Ones with the same shape, dtype and device
    pub fn ones_like(&self) -> Self {
        map_same!(self, t => t.ones_like())
    }

    /// Zeros with the same shape, dtype and device
    pub fn zeros_like(&self) -> Self {
        map_same!(self, t => t.zeros_like())
    }

    /// Uniform `[0, 1)` samples with this shape and device, as `dtype`.
    ///
    /// # Errors
    ///
    /// [`TensorError::UnsupportedDType`] unless `dtype` is floating point.
    pub fn rand_like(&self, dtype: DType) -> TensorResult<Self> {
        random::with_global(|generator| self.rand_like_with(dtype, generator))
    }

    /// Like [`rand_like`](Self::rand_like), drawing from `generator`
    pub fn rand_like_with(&self, dtype: DType, generator: &mut Generator) -> TensorResult<Self> {
        match dtype {
            DType::Float32 => Ok(DynTensor::Float32(dispatch!(self, t => {
                Tensor::<f32>::rand_like_with(t, generator)
            }))),
            DType::Float64 => Ok(DynTensor::Float64(dispatch!(self, t => {
                Tensor::<f64>::rand_like_with(t, generator)
            }))),
            other => Err(TensorError::unsupported(other, "rand_like")),
        }
    }

    /// Render with explicit [`PrintOptions`]
    pub fn to_string_with(&self, options: &PrintOptions) -> String {
        dispatch!(self, t => t.to_string_with(options))
    }
}

impl fmt::Display for DynTensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, t => fmt::Display::fmt(t, f))
    }
}

impl fmt::Debug for DynTensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, t => fmt::Debug::fmt(t, f))
    }
}

macro_rules! impl_dyn_conversions {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<Tensor<$ty>> for DynTensor {
                fn from(tensor: Tensor<$ty>) -> Self {
                    DynTensor::$variant(tensor)
                }
            }

            impl TryFrom<DynTensor> for Tensor<$ty> {
                type Error = TensorError;

                fn try_from(value: DynTensor) -> Result<Self, Self::Error> {
                    match value {
                        DynTensor::$variant(tensor) => Ok(tensor),
                        other => Err(TensorError::unsupported(
                            other.dtype(),
                            &format!("conversion to Tensor<{}>", <$ty as Element>::DTYPE),
                        )),
                    }
                }
            }
        )*
    };
}

impl_dyn_conversions! {
    u8 => UInt8,
    i32 => Int32,
    i64 => Int64,
    f32 => Float32,
    f64 => Float64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenbasics_device::DeviceConfig;

    fn literal(text: &str) -> Literal {
        Literal::parse(text).unwrap()
    }

    #[test]
    fn test_inferred_dtypes() {
        let ints = DynTensor::from_literal(&literal("[[1, 2], [3, 4]]")).unwrap();
        assert_eq!(ints.dtype(), DType::Int64);
        assert_eq!(ints.to_string(), "tensor([[1, 2],\n        [3, 4]])");

        let floats = DynTensor::from_literal(&literal("[1, 2.5]")).unwrap();
        assert_eq!(floats.dtype(), DType::Float32);
        assert_eq!(floats.to_string(), "tensor([1.0000, 2.5000])");
    }

    #[test]
    fn test_explicit_dtype() {
        let x = DynTensor::from_literal_as(&literal("[1.9, -2.7]"), DType::Int32).unwrap();
        let inner = Tensor::<i32>::try_from(x).unwrap();
        assert_eq!(inner.to_vec(), vec![1, -2]);
    }

    #[test]
    fn test_ones_like_keeps_variant() {
        let x = DynTensor::from(Tensor::<u8>::zeros(&[2, 3]));
        let ones = x.ones_like();
        assert_eq!(ones.dtype(), DType::UInt8);
        assert_eq!(ones.shape(), &[2, 3]);
        assert_eq!(x.zeros_like(), x);
    }

    #[test]
    fn test_rand_like_requires_float() {
        let x = DynTensor::zeros(&[2, 2], DType::Int64);
        let mut generator = Generator::seeded(3);

        let r = x.rand_like_with(DType::Float64, &mut generator).unwrap();
        assert_eq!(r.dtype(), DType::Float64);
        assert_eq!(r.shape(), &[2, 2]);

        let err = x.rand_like_with(DType::Int32, &mut generator).unwrap_err();
        assert!(matches!(
            err,
            TensorError::UnsupportedDType {
                dtype: DType::Int32,
                ..
            }
        ));
    }

    #[test]
    fn test_transfer() {
        let manager = DeviceManager::with_config(DeviceConfig::with_virtual_accelerators(1));
        let x = DynTensor::zeros(&[3], DType::Float32);
        let moved = x.to_with(Device::cuda(0), &manager).unwrap();
        assert_eq!(moved.device(), Device::cuda(0));
        assert_eq!(moved.dtype(), DType::Float32);
        assert_eq!(
            moved.to_string(),
            "tensor([0., 0., 0.], device='cuda:0')"
        );
    }

    #[test]
    fn test_downcast_mismatch() {
        let x = DynTensor::zeros(&[1], DType::Float64);
        assert!(Tensor::<f32>::try_from(x.clone()).is_err());
        assert!(Tensor::<f64>::try_from(x).is_ok());
    }
}
