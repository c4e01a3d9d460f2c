//! Tensor creation and initialization methods
//!
//! Filled tensors (`zeros`, `ones`, `full`), their `*_like` counterparts that
//! copy shape and device from a template, and random initialization.

use super::types::Tensor;
use crate::dtype::{Element, FloatElement};
use crate::random::{self, Generator};
use scirs2_core::ndarray_ext::{Array, IxDyn};
use tenbasics_device::Device;

impl<T: Element> Tensor<T> {
    /// Create a tensor filled with a specific value
    ///
    /// # Examples
    ///
    /// ```
    /// use tenbasics_core::Tensor;
    ///
    /// let tensor = Tensor::full(&[2, 3], 5i32);
    /// assert_eq!(tensor[&[0, 0]], 5);
    /// assert_eq!(tensor[&[1, 2]], 5);
    /// ```
    pub fn full(shape: &[usize], value: T) -> Self {
        Self::from_parts(Array::from_elem(IxDyn(shape), value), Device::cpu())
    }

    /// Alias of [`full`](Self::full)
    pub fn from_elem(shape: &[usize], value: T) -> Self {
        Self::full(shape, value)
    }

    /// Create a tensor of zeros
    pub fn zeros(shape: &[usize]) -> Self {
        Self::full(shape, T::zero())
    }

    /// Create a tensor of ones
    ///
    /// ```
    /// use tenbasics_core::Tensor;
    ///
    /// let tensor = Tensor::<f64>::ones(&[2, 3]);
    /// assert!(tensor.to_vec().iter().all(|&x| x == 1.0));
    /// ```
    pub fn ones(shape: &[usize]) -> Self {
        Self::full(shape, T::one())
    }

    /// Tensor of `value` with the shape and device of `self`
    pub fn full_like(&self, value: T) -> Self {
        Self::from_parts(Array::from_elem(self.data.raw_dim(), value), self.device)
    }

    /// Tensor of zeros with the shape, dtype and device of `self`
    pub fn zeros_like(&self) -> Self {
        self.full_like(T::zero())
    }

    /// Tensor of ones with the shape, dtype and device of `self`
    ///
    /// # Examples
    ///
    /// ```
    /// use tenbasics_core::Tensor;
    ///
    /// let x = Tensor::<i64>::from_literal(&[[1i64, 2], [3, 4]]).unwrap();
    /// let ones = x.ones_like();
    /// assert_eq!(ones.shape(), x.shape());
    /// assert_eq!(ones.dtype(), x.dtype());
    /// assert_eq!(ones.to_vec(), vec![1, 1, 1, 1]);
    /// ```
    pub fn ones_like(&self) -> Self {
        self.full_like(T::one())
    }
}

impl<T: FloatElement> Tensor<T> {
    /// Uniform samples on `[0, 1)` from the process-wide generator
    ///
    /// # Examples
    ///
    /// ```
    /// use tenbasics_core::Tensor;
    ///
    /// let tensor = Tensor::<f32>::rand(&[3, 4]);
    /// assert_eq!(tensor.shape(), &[3, 4]);
    /// assert!(tensor.to_vec().iter().all(|&x| (0.0..1.0).contains(&x)));
    /// ```
    pub fn rand(shape: &[usize]) -> Self {
        random::with_global(|generator| Self::rand_with(shape, generator))
    }

    /// Uniform samples on `[0, 1)` from `generator`
    pub fn rand_with(shape: &[usize], generator: &mut Generator) -> Self {
        let total: usize = shape.iter().product();
        Self::from_sampled(shape, generator.uniform(total), Device::cpu())
    }

    /// Standard normal samples from the process-wide generator
    pub fn randn(shape: &[usize]) -> Self {
        random::with_global(|generator| Self::randn_with(shape, generator))
    }

    /// Standard normal samples from `generator`
    pub fn randn_with(shape: &[usize], generator: &mut Generator) -> Self {
        let total: usize = shape.iter().product();
        Self::from_sampled(shape, generator.normal(total), Device::cpu())
    }

    /// Uniform samples with the shape and device of `template`.
    ///
    /// The template may have any dtype; the result has dtype `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenbasics_core::{DType, Tensor};
    ///
    /// let x = Tensor::<i64>::from_literal(&[[1i64, 2], [3, 4]]).unwrap();
    /// let r = Tensor::<f32>::rand_like(&x);
    /// assert_eq!(r.shape(), &[2, 2]);
    /// assert_eq!(r.dtype(), DType::Float32);
    /// ```
    pub fn rand_like<U: Element>(template: &Tensor<U>) -> Self {
        random::with_global(|generator| Self::rand_like_with(template, generator))
    }

    /// Uniform samples with the shape and device of `template`, from `generator`
    pub fn rand_like_with<U: Element>(template: &Tensor<U>, generator: &mut Generator) -> Self {
        Self::from_sampled(
            template.shape(),
            generator.uniform(template.numel()),
            template.device(),
        )
    }

    /// Standard normal samples with the shape and device of `template`
    pub fn randn_like<U: Element>(template: &Tensor<U>) -> Self {
        random::with_global(|generator| {
            Self::from_sampled(
                template.shape(),
                generator.normal(template.numel()),
                template.device(),
            )
        })
    }

    fn from_sampled(shape: &[usize], samples: Vec<T>, device: Device) -> Self {
        tracing::trace!(?shape, dtype = %T::DTYPE, "sampled random tensor");
        let data = Array::from_shape_vec(IxDyn(shape), samples)
            .expect("sample count equals the shape's element count");
        Self::from_parts(data, device)
    }
}
