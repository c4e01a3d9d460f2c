//! # tenbasics-device
//!
//! Device locations, the device registry, and device buffers for tenbasics.
//!
//! - **Locations** ([`Device`]): `cpu`, `cuda:0`, ... parsed from and displayed as strings
//! - **Registry** ([`DeviceManager`]): which devices exist, availability queries
//! - **Buffers** ([`DeviceBuffer`]): storage on a device with transfer statistics
//!
//! ## Host-backed devices
//!
//! Every registered device keeps its buffers in host memory. Accelerators are
//! either detected from the OS or registered as virtual devices, so tensor
//! transfers follow the same code path whether or not a GPU is present.
//!
//! ```
//! use tenbasics_device::{Device, DeviceConfig, DeviceManager};
//!
//! let manager = DeviceManager::with_config(DeviceConfig::with_virtual_accelerators(1));
//! assert!(manager.cuda_is_available());
//!
//! let cuda = manager.get(Device::cuda(0)).unwrap();
//! let buffer = cuda.upload(&[1.0f32, 2.0, 3.0]).unwrap();
//! assert_eq!(buffer.copy_to_host(), vec![1.0, 2.0, 3.0]);
//! assert_eq!(buffer.stats().h2d_transfers, 1);
//! ```

pub mod buffer;
pub mod device;
pub mod error;
pub mod manager;

pub use buffer::{DeviceBuffer, TransferStats};
pub use device::{Device, DeviceType};
pub use error::{DeviceError, DeviceResult};
pub use manager::{DeviceConfig, DeviceHandle, DeviceInfo, DeviceManager, DeviceStatsSnapshot};
