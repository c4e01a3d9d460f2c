//! Tensor type definition and attribute accessors
//!
//! This module defines the core `Tensor<T>` type. Construction, conversion,
//! device transfer and printing live in sibling modules.

use crate::dtype::{DType, Element};
use crate::error::{TensorError, TensorResult};
use crate::types::Shape;
use scirs2_core::ndarray_ext::{Array, ArrayView, ArrayViewMut, IxDyn};
use tenbasics_device::{Device, DeviceType};

/// Dense N-dimensional tensor backed by scirs2_core's ndarray
///
/// Storage is a dynamic-dimensionality array in row-major order, tagged with
/// the [`Device`] it resides on.
///
/// # Type Parameters
///
/// * `T` - The element type, one of `u8`, `i32`, `i64`, `f32`, `f64`
///
/// # Examples
///
/// ```
/// use tenbasics_core::{DType, Tensor};
/// use tenbasics_device::Device;
///
/// let tensor = Tensor::<f32>::zeros(&[2, 3, 4]);
/// assert_eq!(tensor.shape(), &[2, 3, 4]);
/// assert_eq!(tensor.dtype(), DType::Float32);
/// assert_eq!(tensor.device(), Device::cpu());
/// ```
#[derive(Clone, PartialEq)]
pub struct Tensor<T> {
    /// Underlying ndarray storage (via scirs2_core)
    pub(crate) data: Array<T, IxDyn>,
    /// Where the storage resides
    pub(crate) device: Device,
}

impl<T: Element> Tensor<T> {
    pub(crate) fn from_parts(data: Array<T, IxDyn>, device: Device) -> Self {
        Self { data, device }
    }

    /// Create a tensor from a vector with given shape
    ///
    /// # Arguments
    ///
    /// * `vec` - Flattened data in row-major order
    /// * `shape` - Target shape
    ///
    /// # Examples
    ///
    /// ```
    /// use tenbasics_core::Tensor;
    ///
    /// let tensor = Tensor::from_vec(vec![1i64, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
    /// assert_eq!(tensor.shape(), &[2, 3]);
    /// assert_eq!(tensor[&[1, 0]], 4);
    /// ```
    pub fn from_vec(vec: Vec<T>, shape: &[usize]) -> TensorResult<Self> {
        let expected: usize = shape.iter().product();
        if vec.len() != expected {
            return Err(TensorError::ShapeMismatch {
                shape: shape.to_vec(),
                expected,
                got: vec.len(),
            });
        }
        let array = Array::from_shape_vec(IxDyn(shape), vec)?;
        Ok(Self::from_parts(array, Device::cpu()))
    }

    /// Rank-0 tensor holding one value
    pub fn scalar(value: T) -> Self {
        Self::from_parts(Array::from_elem(IxDyn(&[]), value), Device::cpu())
    }

    /// Get the shape of this tensor
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Get the shape as an owned [`Shape`]
    ///
    /// ```
    /// use tenbasics_core::Tensor;
    ///
    /// let tensor = Tensor::<f32>::ones(&[3, 4]);
    /// assert_eq!(tensor.size().as_slice(), &[3, 4]);
    /// ```
    pub fn size(&self) -> Shape {
        Shape::from_slice(self.data.shape())
    }

    /// Number of dimensions
    pub fn dim(&self) -> usize {
        self.data.ndim()
    }

    /// Alias of [`dim`](Self::dim)
    pub fn rank(&self) -> usize {
        self.dim()
    }

    /// Total number of elements
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Alias of [`numel`](Self::numel)
    pub fn len(&self) -> usize {
        self.numel()
    }

    /// Check if the tensor is empty (has zero elements)
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element datatype
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// Device holding the storage
    pub fn device(&self) -> Device {
        self.device
    }

    /// Whether the tensor resides on a CUDA device
    pub fn is_cuda(&self) -> bool {
        self.device.device_type() == DeviceType::Cuda
    }

    pub fn is_floating_point(&self) -> bool {
        T::DTYPE.is_floating_point()
    }

    /// Bytes per element
    pub fn element_size(&self) -> usize {
        T::DTYPE.size_in_bytes()
    }

    /// Bytes of element storage
    pub fn nbytes(&self) -> usize {
        self.numel() * self.element_size()
    }

    /// Check if the tensor is contiguous (row-major) in memory.
    pub fn is_contiguous(&self) -> bool {
        self.data.is_standard_layout()
    }

    /// Element at `index`, or `None` when out of bounds
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        if index.len() != self.dim() {
            return None;
        }
        self.data.get(IxDyn(index))
    }

    /// Elements in row-major order
    pub fn to_vec(&self) -> Vec<T> {
        self.data.iter().copied().collect()
    }

    /// Get an immutable reference to the underlying ndarray
    pub fn as_array(&self) -> &Array<T, IxDyn> {
        &self.data
    }

    /// Get a mutable reference to the underlying ndarray
    pub fn as_array_mut(&mut self) -> &mut Array<T, IxDyn> {
        &mut self.data
    }

    /// Get an immutable view of the tensor
    pub fn view(&self) -> ArrayView<'_, T, IxDyn> {
        self.data.view()
    }

    /// Get a mutable view of the tensor
    pub fn view_mut(&mut self) -> ArrayViewMut<'_, T, IxDyn> {
        self.data.view_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_shape_mismatch() {
        let err = Tensor::from_vec(vec![1.0f32, 2.0, 3.0], &[2, 2]).unwrap_err();
        assert!(matches!(
            err,
            TensorError::ShapeMismatch {
                expected: 4,
                got: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_attributes() {
        let tensor = Tensor::from_vec((0..12).collect::<Vec<i64>>(), &[3, 4]).unwrap();
        assert_eq!(tensor.dim(), 2);
        assert_eq!(tensor.numel(), 12);
        assert_eq!(tensor.dtype(), DType::Int64);
        assert_eq!(tensor.element_size(), 8);
        assert_eq!(tensor.nbytes(), 96);
        assert_eq!(tensor.device(), Device::cpu());
        assert!(tensor.is_contiguous());
        assert!(!tensor.is_floating_point());
        assert!(!tensor.is_cuda());
    }

    #[test]
    fn test_scalar() {
        let tensor = Tensor::scalar(5i32);
        assert_eq!(tensor.dim(), 0);
        assert_eq!(tensor.numel(), 1);
        assert!(tensor.shape().is_empty());
        assert_eq!(tensor.get(&[]), Some(&5));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let tensor = Tensor::<u8>::zeros(&[2, 2]);
        assert_eq!(tensor.get(&[1, 1]), Some(&0));
        assert_eq!(tensor.get(&[2, 0]), None);
        assert_eq!(tensor.get(&[0]), None);
    }

    #[test]
    fn test_to_vec_row_major() {
        let tensor = Tensor::from_vec(vec![1.0f64, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
        assert_eq!(tensor.to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
    }
}
