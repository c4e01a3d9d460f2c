//! Error types for device lookup, parsing and buffer transfers

use crate::device::{Device, DeviceType};
use thiserror::Error;

/// Errors raised by the device layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// A device string could not be parsed
    #[error("Invalid device string '{spec}': {reason}")]
    InvalidSpec { spec: String, reason: String },

    /// The requested device is not registered
    #[error("Device {device} is not available ({available} {kind} device(s) registered)")]
    Unavailable {
        device: Device,
        kind: DeviceType,
        available: usize,
    },

    /// Registry index out of range
    #[error("Device index out of range: {index} (registered: {count})")]
    IndexOutOfRange { index: usize, count: usize },

    /// Host data does not match the buffer it is copied into
    #[error("Data size mismatch: expected {expected} elements, got {got}")]
    SizeMismatch { expected: usize, got: usize },
}

/// Result type alias for device operations
pub type DeviceResult<T> = Result<T, DeviceError>;

impl DeviceError {
    /// Create an invalid spec error
    pub fn invalid_spec(spec: &str, reason: impl Into<String>) -> Self {
        DeviceError::InvalidSpec {
            spec: spec.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_message() {
        let err = DeviceError::Unavailable {
            device: Device::cuda(0),
            kind: DeviceType::Cuda,
            available: 0,
        };
        assert_eq!(
            err.to_string(),
            "Device cuda:0 is not available (0 cuda device(s) registered)"
        );
    }

    #[test]
    fn test_size_mismatch_message() {
        let err = DeviceError::SizeMismatch {
            expected: 100,
            got: 50,
        };
        assert_eq!(
            err.to_string(),
            "Data size mismatch: expected 100 elements, got 50"
        );
    }
}
