//! Conversions into and out of `Tensor`
//!
//! - nested literals ([`Tensor::from_literal`])
//! - ndarray arrays, the crate's numeric-array interchange type
//!   ([`Tensor::from_array`], [`Tensor::into_array`])

use super::types::Tensor;
use crate::dtype::Element;
use crate::error::TensorResult;
use crate::literal::{self, NestedLiteral};
use scirs2_core::ndarray_ext::{Array, ArrayView, Dimension, IxDyn};
use tenbasics_device::Device;

impl<T: Element> Tensor<T> {
    /// Create a tensor from a nested literal, inferring the shape.
    ///
    /// # Errors
    ///
    /// [`TensorError::RaggedLiteral`](crate::TensorError::RaggedLiteral) when
    /// sibling lists disagree in length or nesting depth.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenbasics_core::{DType, Tensor};
    ///
    /// let x = Tensor::<i64>::from_literal(&[[1i64, 2], [3, 4]]).unwrap();
    /// assert_eq!(x.shape(), &[2, 2]);
    /// assert_eq!(x.dtype(), DType::Int64);
    /// assert_eq!(x.to_string(), "tensor([[1, 2],\n        [3, 4]])");
    /// ```
    pub fn from_literal<L>(literal: &L) -> TensorResult<Self>
    where
        L: NestedLiteral<T> + ?Sized,
    {
        let (data, shape) = literal::flatten(literal)?;
        tracing::debug!(?shape, dtype = %T::DTYPE, "tensor from literal");
        Self::from_vec(data, &shape)
    }

    /// Wrap an ndarray array without copying its elements.
    ///
    /// The array's memory layout is kept as is; the result lives on the CPU.
    ///
    /// # Examples
    ///
    /// ```
    /// use scirs2_core::ndarray_ext::array;
    /// use tenbasics_core::Tensor;
    ///
    /// let np_array = array![[1i64, 2], [3, 4]];
    /// let x_np = Tensor::from_array(np_array);
    /// assert_eq!(x_np.shape(), &[2, 2]);
    /// assert_eq!(x_np[&[1, 1]], 4);
    /// ```
    pub fn from_array<D: Dimension>(array: Array<T, D>) -> Self {
        Self::from_parts(array.into_dyn(), Device::cpu())
    }

    /// Copy a borrowed array view into a new tensor
    pub fn from_array_view<D: Dimension>(view: ArrayView<'_, T, D>) -> Self {
        Self::from_parts(view.to_owned().into_dyn(), Device::cpu())
    }

    /// Unwrap into the underlying array without copying
    pub fn into_array(self) -> Array<T, IxDyn> {
        self.data
    }

    /// Unwrap into an array of fixed dimensionality
    ///
    /// ```
    /// use scirs2_core::ndarray_ext::Ix2;
    /// use tenbasics_core::Tensor;
    ///
    /// let tensor = Tensor::<f32>::ones(&[2, 3]);
    /// let matrix = tensor.into_array_dim::<Ix2>().unwrap();
    /// assert_eq!(matrix.dim(), (2, 3));
    /// ```
    pub fn into_array_dim<D: Dimension>(self) -> TensorResult<Array<T, D>> {
        Ok(self.data.into_dimensionality::<D>()?)
    }
}
