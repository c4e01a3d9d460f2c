//! Device kinds and device locations
//!
//! A [`Device`] is a small `Copy` value naming where a tensor's storage lives,
//! e.g. `cpu` or `cuda:0`. Whether that location actually exists is decided by
//! the [`DeviceManager`](crate::DeviceManager).

use crate::error::DeviceError;
use std::fmt;
use std::str::FromStr;

/// Device type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DeviceType {
    /// CPU device (always available)
    Cpu,
    /// CUDA GPU (NVIDIA)
    Cuda,
    /// ROCm GPU (AMD)
    Rocm,
    /// Vulkan Compute
    Vulkan,
    /// Metal (Apple Silicon)
    Metal,
}

impl DeviceType {
    /// All known device kinds, CPU first
    pub const ALL: [DeviceType; 5] = [
        DeviceType::Cpu,
        DeviceType::Cuda,
        DeviceType::Rocm,
        DeviceType::Vulkan,
        DeviceType::Metal,
    ];

    /// Lowercase name used in device strings
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Cpu => "cpu",
            DeviceType::Cuda => "cuda",
            DeviceType::Rocm => "rocm",
            DeviceType::Vulkan => "vulkan",
            DeviceType::Metal => "metal",
        }
    }

    /// Whether this kind is an accelerator (anything but the CPU)
    pub fn is_accelerator(&self) -> bool {
        !matches!(self, DeviceType::Cpu)
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceType {
    type Err = DeviceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        DeviceType::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == lower)
            .ok_or_else(|| DeviceError::invalid_spec(s, "unknown device type"))
    }
}

/// Location of tensor storage: a device kind plus an ordinal.
///
/// # Examples
///
/// ```
/// use tenbasics_device::{Device, DeviceType};
///
/// let cuda: Device = "cuda".parse().unwrap();
/// assert_eq!(cuda, Device::cuda(0));
/// assert_eq!(cuda.to_string(), "cuda:0");
///
/// let cpu = Device::cpu();
/// assert_eq!(cpu.device_type(), DeviceType::Cpu);
/// assert_eq!(cpu.to_string(), "cpu");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Device {
    device_type: DeviceType,
    index: usize,
}

impl Device {
    /// Create a device location
    pub const fn new(device_type: DeviceType, index: usize) -> Self {
        Self { device_type, index }
    }

    /// The host CPU
    pub const fn cpu() -> Self {
        Self::new(DeviceType::Cpu, 0)
    }

    /// CUDA device with the given ordinal
    pub const fn cuda(index: usize) -> Self {
        Self::new(DeviceType::Cuda, index)
    }

    /// Device kind
    pub fn device_type(&self) -> DeviceType {
        self.device_type
    }

    /// Device ordinal within its kind
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether this is the host CPU
    pub fn is_cpu(&self) -> bool {
        self.device_type == DeviceType::Cpu
    }
}

impl Default for Device {
    fn default() -> Self {
        Self::cpu()
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.device_type {
            DeviceType::Cpu => f.write_str("cpu"),
            kind => write!(f, "{}:{}", kind, self.index),
        }
    }
}

impl FromStr for Device {
    type Err = DeviceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DeviceError::invalid_spec(s, "empty device string"));
        }

        let (kind, index) = match trimmed.split_once(':') {
            Some((kind, index)) => {
                let index = index
                    .parse::<usize>()
                    .map_err(|_| DeviceError::invalid_spec(s, "device index must be a number"))?;
                (kind, index)
            }
            None => (trimmed, 0),
        };

        let device_type = kind
            .parse::<DeviceType>()
            .map_err(|_| DeviceError::invalid_spec(s, format!("unknown device type '{}'", kind)))?;

        if device_type == DeviceType::Cpu && index != 0 {
            return Err(DeviceError::invalid_spec(s, "cpu only has index 0"));
        }

        Ok(Device::new(device_type, index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Device::cpu().to_string(), "cpu");
        assert_eq!(Device::cuda(0).to_string(), "cuda:0");
        assert_eq!(Device::new(DeviceType::Metal, 2).to_string(), "metal:2");
    }

    #[test]
    fn test_parse_kind_only() {
        assert_eq!("cpu".parse::<Device>().unwrap(), Device::cpu());
        assert_eq!("cuda".parse::<Device>().unwrap(), Device::cuda(0));
        assert_eq!("  ROCm ".parse::<Device>().unwrap().device_type(), DeviceType::Rocm);
    }

    #[test]
    fn test_parse_with_index() {
        assert_eq!("cuda:3".parse::<Device>().unwrap(), Device::cuda(3));
        assert_eq!("cpu:0".parse::<Device>().unwrap(), Device::cpu());
    }

    #[test]
    fn test_parse_errors() {
        assert!("".parse::<Device>().is_err());
        assert!("tpu".parse::<Device>().is_err());
        assert!("cuda:x".parse::<Device>().is_err());
        assert!("cpu:1".parse::<Device>().is_err());
    }

    #[test]
    fn test_accelerator_kinds() {
        assert!(!DeviceType::Cpu.is_accelerator());
        for kind in &DeviceType::ALL[1..] {
            assert!(kind.is_accelerator());
        }
    }

    #[test]
    fn test_display_roundtrip() {
        for device in [Device::cpu(), Device::cuda(1), Device::new(DeviceType::Vulkan, 0)] {
            assert_eq!(device.to_string().parse::<Device>().unwrap(), device);
        }
    }
}
