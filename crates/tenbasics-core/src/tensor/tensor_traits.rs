//! Trait implementations for `Tensor`: indexing, `Debug`, ndarray conversions

use super::types::Tensor;
use crate::dtype::Element;
use scirs2_core::ndarray_ext::{Array, Dimension, IxDyn};
use std::fmt;

impl<T> std::ops::Index<&[usize]> for Tensor<T> {
    type Output = T;
    fn index(&self, index: &[usize]) -> &Self::Output {
        &self.data[IxDyn(index)]
    }
}

impl<T> std::ops::IndexMut<&[usize]> for Tensor<T> {
    fn index_mut(&mut self, index: &[usize]) -> &mut Self::Output {
        &mut self.data[IxDyn(index)]
    }
}

impl<T: Element> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape())
            .field("dtype", &self.dtype())
            .field("device", &self.device())
            .field("data", &self.data)
            .finish()
    }
}

impl<T: Element, D: Dimension> From<Array<T, D>> for Tensor<T> {
    fn from(array: Array<T, D>) -> Self {
        Tensor::from_array(array)
    }
}

impl<T: Element> From<Tensor<T>> for Array<T, IxDyn> {
    fn from(tensor: Tensor<T>) -> Self {
        tensor.into_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scirs2_core::ndarray_ext::array;

    #[test]
    fn test_index_mut() {
        let mut tensor = Tensor::<f64>::zeros(&[2, 3]);
        tensor[&[1, 2]] = 42.0;
        assert_eq!(tensor[&[1, 2]], 42.0);
        assert_eq!(tensor[&[0, 0]], 0.0);
    }

    #[test]
    fn test_debug_mentions_attributes() {
        let tensor = Tensor::<i32>::ones(&[2]);
        let debug = format!("{:?}", tensor);
        assert!(debug.starts_with("Tensor {"));
        assert!(debug.contains("shape: [2]"));
        assert!(debug.contains("dtype: Int32"));
        assert!(debug.contains("device: Device"));
    }

    #[test]
    fn test_from_array_conversions() {
        let tensor: Tensor<i64> = array![[1i64, 2], [3, 4]].into();
        assert_eq!(tensor.shape(), &[2, 2]);

        let back: Array<i64, IxDyn> = tensor.into();
        assert_eq!(back.shape(), &[2, 2]);
        assert_eq!(back[[1, 0].as_slice()], 3);
    }
}
