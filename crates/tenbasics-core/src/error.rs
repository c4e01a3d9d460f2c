//! Error types for tensor construction and transfer
//!
//! # Examples
//!
//! ```
//! use tenbasics_core::{Tensor, TensorError};
//!
//! let err = Tensor::from_vec(vec![1i64, 2, 3], &[2, 2]).unwrap_err();
//! assert!(matches!(err, TensorError::ShapeMismatch { .. }));
//! ```

use crate::dtype::DType;
use scirs2_core::ndarray_ext::ShapeError;
use tenbasics_device::DeviceError;
use thiserror::Error;

/// Top-level error type for tensor operations
#[derive(Error, Debug)]
pub enum TensorError {
    /// Data length does not fit the requested shape
    #[error("Shape {shape:?} requires {expected} elements, but got {got}")]
    ShapeMismatch {
        shape: Vec<usize>,
        expected: usize,
        got: usize,
    },

    /// Nested literal whose sibling entries disagree in length or nesting
    #[error("Ragged literal at depth {depth}: expected {expected}, got {got}")]
    RaggedLiteral {
        depth: usize,
        expected: String,
        got: String,
    },

    /// Literal text or value that cannot become a tensor
    #[error("Invalid literal: {0}")]
    InvalidLiteral(String),

    /// Operation not defined for this dtype
    #[error("Operation '{operation}' does not support dtype {dtype}")]
    UnsupportedDType { dtype: DType, operation: String },

    /// Device lookup or transfer failure
    #[error("Device error: {0}")]
    Device(#[from] DeviceError),

    /// Error reported by the array backend
    #[error("Array error: {0}")]
    Array(#[from] ShapeError),
}

/// Result type alias for tensor operations
pub type TensorResult<T> = Result<T, TensorError>;

impl TensorError {
    pub(crate) fn ragged(depth: usize, expected: impl ToString, got: impl ToString) -> Self {
        TensorError::RaggedLiteral {
            depth,
            expected: expected.to_string(),
            got: got.to_string(),
        }
    }

    pub(crate) fn unsupported(dtype: DType, operation: &str) -> Self {
        TensorError::UnsupportedDType {
            dtype,
            operation: operation.to_string(),
        }
    }
}
