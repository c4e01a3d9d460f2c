//! The tensor basics walkthrough
//!
//! Five steps, each writing human-readable output:
//!
//! 1. a tensor from a nested literal
//! 2. the same data through an ndarray array
//! 3. ones with the shape of the first tensor
//! 4. random `float32` values with that shape
//! 5. shape, dtype and device of a random tensor, before and after moving it
//!    to an accelerator when one is registered

use crate::config::DemoConfig;
use anyhow::{Context, Result};
use scirs2_core::ndarray_ext::{Array, IxDyn};
use std::io::Write;
use tenbasics_core::literal::flatten;
use tenbasics_core::{DType, DynTensor, Element, Generator, Literal, Tensor};
use tenbasics_device::DeviceManager;

/// Tensors built by [`run`], one field per step
#[derive(Debug, Clone)]
pub struct DemoReport {
    /// Step 1: from the literal
    pub x_data: DynTensor,
    /// Step 2: from an ndarray holding the same data
    pub x_np: DynTensor,
    /// Step 3: ones like `x_data`
    pub x_ones: DynTensor,
    /// Step 4: `float32` random values like `x_data`
    pub x_rand: DynTensor,
    /// Step 5: the inspected tensor, after any transfer
    pub tensor: Tensor<f32>,
    /// Whether step 5 moved the tensor off the CPU
    pub transferred: bool,
}

/// Run every step, writing to `out`
///
/// # Errors
///
/// Malformed literal data, a failed transfer, or a failed write.
pub fn run<W: Write>(config: &DemoConfig, manager: &DeviceManager, out: &mut W) -> Result<DemoReport> {
    let mut generator = match config.seed {
        Some(seed) => Generator::seeded(seed),
        None => Generator::from_entropy(),
    };
    tracing::info!(
        data = %config.data,
        device = %config.target_device,
        seed = ?config.seed,
        "starting walkthrough"
    );

    // Directly from data
    let literal = Literal::parse(&config.data).context("parsing literal data")?;
    let x_data = DynTensor::from_literal(&literal)?;
    writeln!(out, "{}", x_data)?;

    // From an ndarray array
    let x_np = from_ndarray(&literal, ndarray_dtype(x_data.dtype()))?;
    writeln!(out, "{}", x_np)?;

    // From another tensor
    let x_ones = x_data.ones_like();
    writeln!(out, "Ones Tensor: \n {} \n", x_ones)?;

    let x_rand = x_data.rand_like_with(DType::Float32, &mut generator)?;
    writeln!(out, "Random Tensor: \n {} \n", x_rand)?;

    // Attributes
    let mut tensor = Tensor::<f32>::rand_with(&config.rand_shape, &mut generator);
    writeln!(out, "Shape of tensor: {:?}", tensor.size().as_slice())?;
    writeln!(out, "Datatype of tensor: {}", tensor.dtype())?;
    writeln!(out, "Device tensor is stored on: {}", tensor.device())?;

    let mut transferred = false;
    if manager.is_available(config.target_device.device_type()) {
        tensor = tensor
            .to_with(config.target_device, manager)
            .with_context(|| format!("moving tensor to {}", config.target_device))?;
        transferred = !tensor.device().is_cpu();
    } else {
        tracing::info!(device = %config.target_device, "target device kind not available");
    }
    writeln!(out, "Device tensor is stored on: {}", tensor.device())?;

    Ok(DemoReport {
        x_data,
        x_np,
        x_ones,
        x_rand,
        tensor,
        transferred,
    })
}

/// Element type an ndarray built from literal data defaults to: `int64` for
/// integers and `float64` for floats
fn ndarray_dtype(dtype: DType) -> DType {
    if dtype.is_floating_point() {
        DType::Float64
    } else {
        DType::Int64
    }
}

/// Flatten `literal` into an ndarray array and hand it to a tensor
fn from_ndarray(literal: &Literal, dtype: DType) -> Result<DynTensor> {
    Ok(match dtype {
        DType::UInt8 => array_tensor::<u8>(literal)?.into(),
        DType::Int32 => array_tensor::<i32>(literal)?.into(),
        DType::Int64 => array_tensor::<i64>(literal)?.into(),
        DType::Float32 => array_tensor::<f32>(literal)?.into(),
        DType::Float64 => array_tensor::<f64>(literal)?.into(),
    })
}

fn array_tensor<T: Element>(literal: &Literal) -> Result<Tensor<T>> {
    let (data, shape) = flatten::<T, _>(literal)?;
    let np_array = Array::from_shape_vec(IxDyn(&shape), data)?;
    Ok(Tensor::from_array(np_array))
}
