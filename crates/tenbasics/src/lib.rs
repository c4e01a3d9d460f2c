//! # tenbasics
//!
//! Walkthrough of tensor basics on top of the tenbasics crates.
//!
//! The [`demo`] module builds tensors from a literal, from an ndarray array
//! and from template tensors, then inspects attributes and moves a tensor to
//! an accelerator when one is registered. The `tenbasics` binary runs it
//! against stdout.
//!
//! ## Crates
//!
//! - [`core`]: `Tensor`, dtypes, literals, printing
//! - [`device`]: devices, the device registry, device buffers
//!
//! # Example
//!
//! ```
//! use tenbasics::prelude::*;
//!
//! let manager = DeviceManager::with_config(DeviceConfig::host_only());
//! let config = DemoConfig::default();
//! let mut out = Vec::new();
//! let report = tenbasics::demo::run(&config, &manager, &mut out).unwrap();
//! assert!(!report.transferred);
//! ```

pub mod config;
pub mod demo;
pub mod tracing_support;

// Re-export all components
pub use tenbasics_core as core;
pub use tenbasics_device as device;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use tenbasics::prelude::*;
    //!
    //! let tensor = Tensor::<f32>::zeros(&[3, 4]);
    //! assert_eq!(tensor.device(), Device::cpu());
    //! ```

    // Core types
    pub use crate::core::{DType, DynTensor, Element, FloatElement, Literal, Tensor};

    // Randomness
    pub use crate::core::random::{manual_seed, Generator};

    // Devices
    pub use crate::device::{Device, DeviceConfig, DeviceManager, DeviceType};

    // Demo
    pub use crate::config::DemoConfig;
    pub use crate::demo::DemoReport;
}
