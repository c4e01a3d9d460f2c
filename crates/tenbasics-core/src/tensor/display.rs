//! Torch-style printing
//!
//! ```text
//! tensor([[0.4963, 0.7682, 0.0885, 0.1320],
//!         [0.3074, 0.6341, 0.4901, 0.8964],
//!         [0.4556, 0.6323, 0.3489, 0.4017]])
//! ```
//!
//! Elements share one notation and are right-aligned to a common width.
//! Rows continue under the first bracket. Large tensors are summarized with
//! `...`, keeping a few edge items per dimension.

use super::types::Tensor;
use crate::dtype::{DType, Element};
use scirs2_core::ndarray_ext::{ArrayView, Axis, IxDyn};
use std::fmt;

const PREFIX: &str = "tensor(";

/// Knobs for tensor printing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    /// Digits after the decimal point for floating-point elements
    pub precision: usize,
    /// Element count above which output is summarized
    pub threshold: usize,
    /// Leading and trailing items kept per dimension when summarizing
    pub edge_items: usize,
    /// Characters per line before wrapping
    pub linewidth: usize,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            precision: 4,
            threshold: 1000,
            edge_items: 3,
            linewidth: 80,
        }
    }
}

impl PrintOptions {
    /// Never summarize
    pub fn full() -> Self {
        Self {
            threshold: usize::MAX,
            ..Self::default()
        }
    }
}

impl<T: Element> Tensor<T> {
    /// Render with explicit [`PrintOptions`]
    ///
    /// ```
    /// use tenbasics_core::{PrintOptions, Tensor};
    ///
    /// let x = Tensor::from_vec(vec![0.5f32, 0.25], &[2]).unwrap();
    /// let options = PrintOptions { precision: 2, ..PrintOptions::default() };
    /// assert_eq!(x.to_string_with(&options), "tensor([0.50, 0.25])");
    /// ```
    pub fn to_string_with(&self, options: &PrintOptions) -> String {
        let indent = PREFIX.len();
        let mut suffixes = Vec::new();

        if !self.device.is_cpu() {
            suffixes.push(format!("device='{}'", self.device));
        }

        let body = if self.is_empty() {
            if self.dim() != 1 {
                suffixes.push(format!("size={}", shape_tuple(self.shape())));
            }
            // nothing to infer the dtype from
            if T::DTYPE != DType::DEFAULT_FLOAT {
                suffixes.push(format!("dtype={}", T::DTYPE));
            }
            "[]".to_string()
        } else {
            if !T::DTYPE.is_print_default() {
                suffixes.push(format!("dtype={}", T::DTYPE));
            }
            let summarize = self.numel() > options.threshold;
            let mut visible = Vec::new();
            collect_visible(self.view(), summarize, options.edge_items, &mut visible);

            let printer = Printer {
                formatter: ElementFormatter::new(&visible, options.precision),
                options,
                summarize,
            };
            printer.tensor_str(self.view(), indent)
        };

        add_suffixes(format!("{PREFIX}{body}"), &suffixes, indent, options.linewidth)
    }
}

impl<T: Element> fmt::Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&PrintOptions::default()))
    }
}

enum Row {
    Index(usize),
    Ellipsis,
}

fn rows(len: usize, summarize: bool, edge_items: usize) -> Vec<Row> {
    if summarize && len > 2 * edge_items {
        (0..edge_items)
            .map(Row::Index)
            .chain(std::iter::once(Row::Ellipsis))
            .chain((len - edge_items..len).map(Row::Index))
            .collect()
    } else {
        (0..len).map(Row::Index).collect()
    }
}

/// Elements that end up printed, in order
fn collect_visible<T: Copy>(
    view: ArrayView<'_, T, IxDyn>,
    summarize: bool,
    edge_items: usize,
    out: &mut Vec<T>,
) {
    if view.ndim() == 0 {
        out.extend(view.iter().copied());
        return;
    }
    for row in rows(view.len_of(Axis(0)), summarize, edge_items) {
        if let Row::Index(i) = row {
            collect_visible(view.index_axis(Axis(0), i), summarize, edge_items, out);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Notation {
    Integer,
    /// floats with no fractional part: `1.`
    IntegralFloat,
    Fixed,
    Scientific,
}

struct ElementFormatter {
    notation: Notation,
    width: usize,
    precision: usize,
}

impl ElementFormatter {
    fn new<T: Element>(values: &[T], precision: usize) -> Self {
        if !T::DTYPE.is_floating_point() {
            let width = values
                .iter()
                .map(|v| v.to_string().len())
                .fold(1, usize::max);
            return Self {
                notation: Notation::Integer,
                width,
                precision,
            };
        }

        let nonzero: Vec<f64> = values
            .iter()
            .map(|v| v.as_f64())
            .filter(|v| v.is_finite() && *v != 0.0)
            .collect();

        let mut formatter = Self {
            notation: Notation::IntegralFloat,
            width: 1,
            precision,
        };
        if nonzero.is_empty() {
            return formatter;
        }

        let (min, max) = nonzero
            .iter()
            .fold((f64::INFINITY, 0.0f64), |(lo, hi), v| {
                (lo.min(v.abs()), hi.max(v.abs()))
            });
        let integral = nonzero.iter().all(|v| v.ceil() == *v);
        let wide = max / min > 1000.0 || max > 1.0e8;

        formatter.notation = match (integral, wide) {
            (true, false) => Notation::IntegralFloat,
            (true, true) => Notation::Scientific,
            (false, _) if wide || min < 1.0e-4 => Notation::Scientific,
            (false, _) => Notation::Fixed,
        };
        formatter.width = nonzero
            .iter()
            .map(|&v| formatter.float_str(v).len())
            .fold(1, usize::max);
        formatter
    }

    fn float_str(&self, value: f64) -> String {
        if value.is_nan() {
            return "nan".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "inf" } else { "-inf" }.to_string();
        }
        match self.notation {
            Notation::Scientific => scientific(value, self.precision),
            Notation::IntegralFloat => format!("{value:.0}."),
            Notation::Fixed | Notation::Integer => format!("{:.*}", self.precision, value),
        }
    }

    fn format<T: Element>(&self, value: T) -> String {
        let text = match self.notation {
            Notation::Integer => value.to_string(),
            _ => self.float_str(value.as_f64()),
        };
        format!("{text:>width$}", width = self.width)
    }
}

/// `1.0000e+08` rather than Rust's `1.0000e8`
fn scientific(value: f64, precision: usize) -> String {
    let raw = format!("{:.*e}", precision, value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.abs())
        }
        None => raw,
    }
}

struct Printer<'a> {
    formatter: ElementFormatter,
    options: &'a PrintOptions,
    summarize: bool,
}

impl Printer<'_> {
    fn scalar_str<T: Element>(&self, view: ArrayView<'_, T, IxDyn>) -> String {
        view.iter()
            .next()
            .map(|&v| self.formatter.format(v))
            .unwrap_or_default()
    }

    fn tensor_str<T: Element>(&self, view: ArrayView<'_, T, IxDyn>, indent: usize) -> String {
        match view.ndim() {
            0 => self.scalar_str(view),
            1 => self.vector_str(view, indent),
            dim => {
                let slices: Vec<String> = rows(view.len_of(Axis(0)), self.summarize, self.options.edge_items)
                    .into_iter()
                    .map(|row| match row {
                        Row::Index(i) => self.tensor_str(view.index_axis(Axis(0), i), indent + 1),
                        Row::Ellipsis => "...".to_string(),
                    })
                    .collect();
                let separator = format!(",{}{}", "\n".repeat(dim - 1), " ".repeat(indent + 1));
                format!("[{}]", slices.join(&separator))
            }
        }
    }

    fn vector_str<T: Element>(&self, view: ArrayView<'_, T, IxDyn>, indent: usize) -> String {
        // element plus ", "
        let element_len = self.formatter.width + 2;
        let per_line = (self.options.linewidth.saturating_sub(indent) / element_len).max(1);

        let data: Vec<String> = rows(view.len_of(Axis(0)), self.summarize, self.options.edge_items)
            .into_iter()
            .map(|row| match row {
                Row::Index(i) => self.scalar_str(view.index_axis(Axis(0), i)),
                Row::Ellipsis => " ...".to_string(),
            })
            .collect();

        let lines: Vec<String> = data.chunks(per_line).map(|line| line.join(", ")).collect();
        let separator = format!(",\n{}", " ".repeat(indent + 1));
        format!("[{}]", lines.join(&separator))
    }
}

fn shape_tuple(shape: &[usize]) -> String {
    match shape {
        [single] => format!("({single},)"),
        _ => {
            let dims: Vec<String> = shape.iter().map(|d| d.to_string()).collect();
            format!("({})", dims.join(", "))
        }
    }
}

fn add_suffixes(mut out: String, suffixes: &[String], indent: usize, linewidth: usize) -> String {
    let mut last_line_len = match out.rfind('\n') {
        Some(pos) => out.len() - pos + 1,
        None => out.len() + 2,
    };
    for suffix in suffixes {
        if last_line_len + suffix.len() + 2 > linewidth {
            out.push_str(",\n");
            out.push_str(&" ".repeat(indent));
            out.push_str(suffix);
            last_line_len = indent + suffix.len();
        } else {
            out.push_str(", ");
            out.push_str(suffix);
            last_line_len += suffix.len() + 2;
        }
    }
    out.push(')');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenbasics_device::{Device, DeviceConfig, DeviceManager};

    #[test]
    fn test_integer_matrix() {
        let x = Tensor::<i64>::from_literal(&[[1i64, 2], [3, 4]]).unwrap();
        assert_eq!(x.to_string(), "tensor([[1, 2],\n        [3, 4]])");
        assert_eq!(x.ones_like().to_string(), "tensor([[1, 1],\n        [1, 1]])");
    }

    #[test]
    fn test_right_alignment() {
        let x = Tensor::from_vec(vec![1i64, -20, 300], &[3]).unwrap();
        assert_eq!(x.to_string(), "tensor([  1, -20, 300])");
    }

    #[test]
    fn test_float_notations() {
        let fixed = Tensor::from_vec(vec![0.5f32, 0.25], &[2]).unwrap();
        assert_eq!(fixed.to_string(), "tensor([0.5000, 0.2500])");

        let integral = Tensor::<f32>::ones(&[2]);
        assert_eq!(integral.to_string(), "tensor([1., 1.])");

        let zeros = Tensor::<f32>::zeros(&[3]);
        assert_eq!(zeros.to_string(), "tensor([0., 0., 0.])");

        let tiny = Tensor::from_vec(vec![1.0e-5f64, 1.0], &[2]).unwrap();
        assert_eq!(
            tiny.to_string(),
            "tensor([1.0000e-05, 1.0000e+00], dtype=float64)"
        );

        let huge = Tensor::from_vec(vec![1.0e9f32, 2.0], &[2]).unwrap();
        assert_eq!(huge.to_string(), "tensor([1.0000e+09, 2.0000e+00])");
    }

    #[test]
    fn test_non_finite() {
        let x = Tensor::from_vec(vec![f32::NAN, 1.0, f32::INFINITY], &[3]).unwrap();
        assert_eq!(x.to_string(), "tensor([nan, 1., inf])");
    }

    #[test]
    fn test_dtype_suffix() {
        let x = Tensor::from_vec(vec![1.0f64, 2.0], &[2]).unwrap();
        assert_eq!(x.to_string(), "tensor([1., 2.], dtype=float64)");

        let y = Tensor::from_vec(vec![1u8, 2], &[2]).unwrap();
        assert_eq!(y.to_string(), "tensor([1, 2], dtype=uint8)");

        let z = Tensor::from_vec(vec![7i32], &[1]).unwrap();
        assert_eq!(z.to_string(), "tensor([7], dtype=int32)");
    }

    #[test]
    fn test_scalar_and_empty() {
        assert_eq!(Tensor::scalar(5i64).to_string(), "tensor(5)");
        assert_eq!(Tensor::scalar(2.5f32).to_string(), "tensor(2.5000)");

        assert_eq!(Tensor::<f32>::zeros(&[0]).to_string(), "tensor([])");
        assert_eq!(
            Tensor::<f32>::zeros(&[0, 3]).to_string(),
            "tensor([], size=(0, 3))"
        );
        assert_eq!(
            Tensor::<i64>::zeros(&[0]).to_string(),
            "tensor([], dtype=int64)"
        );
    }

    #[test]
    fn test_three_dimensional() {
        let x = Tensor::from_vec((0..8).collect::<Vec<i64>>(), &[2, 2, 2]).unwrap();
        assert_eq!(
            x.to_string(),
            "tensor([[[0, 1],\n         [2, 3]],\n\n        [[4, 5],\n         [6, 7]]])"
        );
    }

    #[test]
    fn test_line_wrapping() {
        let x = Tensor::from_vec((0..30).collect::<Vec<i64>>(), &[30]).unwrap();
        // width 2, so (80 - 7) / 4 = 18 per line
        let first: Vec<String> = (0..18).map(|v| format!("{v:>2}")).collect();
        let second: Vec<String> = (18..30).map(|v| format!("{v:>2}")).collect();
        let expected = format!(
            "tensor([{},\n        {}])",
            first.join(", "),
            second.join(", ")
        );
        assert_eq!(x.to_string(), expected);
    }

    #[test]
    fn test_summarized_vector() {
        let x = Tensor::from_vec((0..2000).collect::<Vec<i64>>(), &[2000]).unwrap();
        assert_eq!(
            x.to_string(),
            "tensor([   0,    1,    2,  ..., 1997, 1998, 1999])"
        );

        let full = x.to_string_with(&PrintOptions::full());
        assert!(!full.contains("..."));
    }

    #[test]
    fn test_summarized_matrix() {
        let x = Tensor::<i64>::zeros(&[50, 50]);
        let row = "[0, 0, 0,  ..., 0, 0, 0]";
        let expected = format!(
            "tensor([{row},\n        {row},\n        {row},\n        ...,\n        {row},\n        {row},\n        {row}])"
        );
        assert_eq!(x.to_string(), expected);
    }

    #[test]
    fn test_device_suffix() {
        let manager = DeviceManager::with_config(DeviceConfig::with_virtual_accelerators(1));
        let x = Tensor::from_vec(vec![1i64, 2], &[2])
            .unwrap()
            .to_with(Device::cuda(0), &manager)
            .unwrap();
        assert_eq!(x.to_string(), "tensor([1, 2], device='cuda:0')");

        let y = Tensor::from_vec(vec![0.5f64], &[1])
            .unwrap()
            .to_with(Device::cuda(0), &manager)
            .unwrap();
        assert_eq!(
            y.to_string(),
            "tensor([0.5000], device='cuda:0', dtype=float64)"
        );
    }

    #[test]
    fn test_suffix_wraps_on_long_line() {
        let x = Tensor::<f64>::ones(&[18]);
        let text = x.to_string();
        // the element line is full, so the suffix moves to its own line
        assert!(text.ends_with(",\n       dtype=float64)"), "{text}");
    }

    #[test]
    fn test_scientific_exponent() {
        assert_eq!(scientific(1.0e8, 4), "1.0000e+08");
        assert_eq!(scientific(-2.5e-12, 4), "-2.5000e-12");
        assert_eq!(scientific(0.0, 2), "0.00e+00");
        assert_eq!(scientific(1.0e100, 1), "1.0e+100");
    }

    #[test]
    fn test_shape_tuple() {
        assert_eq!(shape_tuple(&[0, 3]), "(0, 3)");
        assert_eq!(shape_tuple(&[2, 0, 1]), "(2, 0, 1)");
        assert_eq!(shape_tuple(&[0]), "(0,)");
    }
}
