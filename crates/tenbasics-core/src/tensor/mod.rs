//! Dense tensor implementation
//!
//! The type lives in [`types`]; the other sub-modules add construction,
//! conversion, device transfer and printing.

pub mod types;

mod convert;
mod creation;
mod device;
pub mod display;

pub mod tensor_traits;

pub use display::PrintOptions;
pub use types::Tensor;
