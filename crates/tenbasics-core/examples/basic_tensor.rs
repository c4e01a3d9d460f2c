//! Basic tensor creation and inspection.
//!
//! Demonstrates:
//! - Creating tensors from literals, arrays and templates
//! - Reading shape, dtype and device
//! - Printing options and runtime dtypes
//!
//! Run with:
//! ```bash
//! cargo run --example basic_tensor
//! ```

use scirs2_core::ndarray_ext::array;
use tenbasics_core::random::Generator;
use tenbasics_core::{DType, DynTensor, Literal, PrintOptions, Tensor, TensorResult};
use tenbasics_device::{Device, DeviceConfig, DeviceManager};

fn main() -> TensorResult<()> {
    println!("=== tenbasics-core: Basic Tensor Examples ===\n");

    example_creation()?;
    example_properties()?;
    example_printing()?;
    example_dynamic()?;

    println!("\n=== All examples completed successfully! ===");
    Ok(())
}

fn example_creation() -> TensorResult<()> {
    println!("--- Example 1: Tensor Creation ---");

    let from_literal = Tensor::<i64>::from_literal(&[[1i64, 2], [3, 4]])?;
    println!("From literal:\n{}", from_literal);

    let from_array = Tensor::from_array(array![[1.0f64, 2.0], [3.0, 4.0]]);
    println!("From ndarray:\n{}", from_array);

    let zeros = Tensor::<f32>::zeros(&[2, 3]);
    println!("Zeros [2, 3]:\n{}", zeros);

    let sevens = from_literal.full_like(7);
    println!("full_like(7):\n{}", sevens);

    let mut generator = Generator::seeded(42);
    let normal = Tensor::<f32>::randn_with(&[2, 3], &mut generator);
    println!("Seeded normal samples:\n{}\n", normal);
    Ok(())
}

fn example_properties() -> TensorResult<()> {
    println!("--- Example 2: Properties and Placement ---");

    let tensor = Tensor::<f32>::rand(&[3, 4]);
    println!("  Shape: {:?}", tensor.size().as_slice());
    println!("  Rank: {}", tensor.rank());
    println!("  Elements: {}", tensor.numel());
    println!("  Bytes: {}", tensor.nbytes());
    println!("  Dtype: {}", tensor.dtype());
    println!("  Device: {}", tensor.device());

    // A registry with one host-backed CUDA device
    let manager = DeviceManager::with_config(DeviceConfig::with_virtual_accelerators(1));
    let moved = tensor.to_with(Device::cuda(0), &manager)?;
    println!("  After transfer: {}", moved.device());
    println!("  Back on host: {}\n", moved.to_with(Device::cpu(), &manager)?.device());
    Ok(())
}

fn example_printing() -> TensorResult<()> {
    println!("--- Example 3: Printing ---");

    let big = Tensor::from_vec((0..2000).collect::<Vec<i64>>(), &[40, 50])?;
    println!("Summarized:\n{}", big);

    let small = Tensor::from_vec(vec![0.123456f64, 1.5, 1.0e-6], &[3])?;
    println!("Scientific notation:\n{}", small);

    let options = PrintOptions {
        precision: 2,
        ..PrintOptions::default()
    };
    let rounded = Tensor::from_vec(vec![0.123456f32, 1.5], &[2])?;
    println!("Two decimals:\n{}\n", rounded.to_string_with(&options));
    Ok(())
}

fn example_dynamic() -> TensorResult<()> {
    println!("--- Example 4: Runtime dtypes ---");

    for text in ["[[1, 2], [3, 4]]", "[0.5, 1.5]", "3"] {
        let literal = Literal::parse(text)?;
        let tensor = DynTensor::from_literal(&literal)?;
        println!("{} -> {} ({})", text, tensor, tensor.dtype());
    }

    let literal = Literal::parse("[[1, 2], [3, 4]]")?;
    let doubles = DynTensor::from_literal_as(&literal, DType::Float64)?;
    println!("As float64:\n{}", doubles);
    Ok(())
}
