//! # tenbasics-core
//!
//! Dense tensors with runtime-visible dtypes, device placement, literal
//! construction and torch-style printing.
//!
//! - **Dense tensor** ([`Tensor`]) over `scirs2_core`'s ndarray
//! - **Datatypes** ([`DType`], [`Element`], [`FloatElement`])
//! - **Nested literals** ([`NestedLiteral`], [`Literal`]) with shape inference
//! - **Devices** via `tenbasics-device`; tensors move with [`Tensor::to`]
//! - **Runtime dtype** ([`DynTensor`]) for input parsed from text
//!
//! ## Core Principles
//!
//! ### SciRS2 Integration
//!
//! Arrays, numeric traits and random numbers all come from `scirs2-core`.
//! Direct use of `ndarray`, `rand` or `num-traits` is avoided.
//!
//! ### Memory Layout
//!
//! Tensors built here are C-contiguous (row-major). Arrays handed over with
//! [`Tensor::from_array`] keep whatever layout they had.
//!
//! ## Quick Start
//!
//! ```
//! use tenbasics_core::{DType, Tensor};
//!
//! // From a nested literal
//! let x_data = Tensor::<i64>::from_literal(&[[1i64, 2], [3, 4]]).unwrap();
//! assert_eq!(x_data.shape(), &[2, 2]);
//! assert_eq!(x_data.dtype(), DType::Int64);
//!
//! // Same shape, filled with ones
//! let x_ones = x_data.ones_like();
//! println!("Ones Tensor: \n {} \n", x_ones);
//!
//! // Same shape, random floats
//! let x_rand = Tensor::<f32>::rand_like(&x_data);
//! assert_eq!(x_rand.dtype(), DType::Float32);
//! ```
//!
//! ## Interop with ndarray
//!
//! ```
//! use scirs2_core::ndarray_ext::array;
//! use tenbasics_core::Tensor;
//!
//! let np_array = array![[1i64, 2], [3, 4]];
//! let x_np = Tensor::from_array(np_array);
//! assert_eq!(x_np.to_string(), "tensor([[1, 2],\n        [3, 4]])");
//! ```
//!
//! ## Device Placement
//!
//! ```
//! use tenbasics_core::Tensor;
//! use tenbasics_device::{DeviceConfig, DeviceManager, Device};
//!
//! let manager = DeviceManager::with_config(DeviceConfig::with_virtual_accelerators(1));
//! let tensor = Tensor::<f32>::rand(&[3, 4]);
//! assert_eq!(tensor.device().to_string(), "cpu");
//!
//! if manager.cuda_is_available() {
//!     let tensor = tensor.to_with(Device::cuda(0), &manager).unwrap();
//!     assert_eq!(tensor.device().to_string(), "cuda:0");
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`TensorResult`]:
//!
//! ```
//! use tenbasics_core::Tensor;
//!
//! let ragged = vec![vec![1i64, 2], vec![3]];
//! assert!(Tensor::<i64>::from_literal(&ragged).is_err());
//! ```
//!
//! ## Features
//!
//! - `serde`: Serialize/deserialize [`DType`]

pub mod dtype;
pub mod dyn_tensor;
pub mod error;
pub mod literal;
pub mod random;
pub mod tensor;
pub mod types;

#[cfg(test)]
mod property_tests;

pub use dtype::{DType, Element, FloatElement};
pub use dyn_tensor::DynTensor;
pub use error::{TensorError, TensorResult};
pub use literal::{Literal, NestedLiteral};
pub use random::{manual_seed, Generator};
pub use tensor::{PrintOptions, Tensor};
pub use types::{Rank, Shape};

pub use tenbasics_device::{Device, DeviceType};
