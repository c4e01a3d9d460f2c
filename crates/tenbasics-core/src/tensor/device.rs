//! Moving tensors between devices

use super::types::Tensor;
use crate::dtype::Element;
use crate::error::TensorResult;
use scirs2_core::ndarray_ext::Array;
use tenbasics_device::{Device, DeviceManager};

impl<T: Element> Tensor<T> {
    /// Copy this tensor to `device` using the process-wide registry.
    ///
    /// A tensor already on `device` is returned as a clone.
    ///
    /// # Errors
    ///
    /// [`TensorError::Device`](crate::TensorError::Device) when `device` is
    /// not registered.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenbasics_core::Tensor;
    /// use tenbasics_device::Device;
    ///
    /// let tensor = Tensor::<f32>::ones(&[3, 4]);
    /// let same = tensor.to(Device::cpu()).unwrap();
    /// assert_eq!(same.device(), Device::cpu());
    ///
    /// // index far past anything a host can register
    /// assert!(tensor.to(Device::cuda(4096)).is_err());
    /// ```
    pub fn to(&self, device: Device) -> TensorResult<Self> {
        self.to_with(device, DeviceManager::global())
    }

    /// Copy this tensor to `device` registered in `manager`
    pub fn to_with(&self, device: Device, manager: &DeviceManager) -> TensorResult<Self> {
        if device == self.device {
            return Ok(self.clone());
        }

        let target = manager.get(device)?;
        let buffer = target.upload(&self.to_vec())?;
        tracing::debug!(
            from = %self.device,
            to = %device,
            bytes = buffer.size_bytes(),
            "tensor transfer"
        );

        let data = Array::from_shape_vec(self.data.raw_dim(), buffer.into_host())?;
        Ok(Self::from_parts(data, device))
    }

    /// Copy this tensor back to host memory
    pub fn cpu(&self) -> TensorResult<Self> {
        self.to(Device::cpu())
    }
}
