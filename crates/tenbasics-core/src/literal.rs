//! Nested literals
//!
//! Tensors can be built from nested sequences, either typed Rust values
//! (`[[1i64, 2], [3, 4]]`, `vec![vec![0.5f32]]`) through [`NestedLiteral`], or
//! from text parsed at runtime into a [`Literal`].
//!
//! Shape is inferred from the nesting: every list at the same depth must have
//! the same length, and scalars may only appear at the deepest level.
//!
//! # Examples
//!
//! ```
//! use tenbasics_core::literal::{flatten, Literal};
//! use tenbasics_core::DType;
//!
//! let (data, shape) = flatten::<i64, _>(&[[1i64, 2], [3, 4]]).unwrap();
//! assert_eq!(shape, vec![2, 2]);
//! assert_eq!(data, vec![1, 2, 3, 4]);
//!
//! let literal = Literal::parse("[[1, 2], [3, 4.5]]").unwrap();
//! assert_eq!(literal.infer_dtype(), DType::Float32);
//! assert!(Literal::parse("[[1, 2], [3]]").unwrap().shape().is_err());
//! ```

use crate::dtype::{DType, Element};
use crate::error::{TensorError, TensorResult};
use scirs2_core::numeric::NumCast;
use std::fmt;

/// Accumulator used while walking a nested literal
#[derive(Debug)]
pub struct FlattenState<T> {
    shape: Vec<usize>,
    leaf_depth: Option<usize>,
    data: Vec<T>,
}

impl<T> FlattenState<T> {
    fn new() -> Self {
        Self {
            shape: Vec::new(),
            leaf_depth: None,
            data: Vec::new(),
        }
    }

    /// Record a list of `len` entries at `depth`
    pub fn enter_list(&mut self, depth: usize, len: usize) -> TensorResult<()> {
        if let Some(leaf) = self.leaf_depth {
            if leaf <= depth {
                return Err(TensorError::ragged(depth, "a scalar", "a list"));
            }
        }
        match self.shape.get(depth) {
            Some(&expected) if expected != len => Err(TensorError::ragged(
                depth,
                format!("length {}", expected),
                format!("length {}", len),
            )),
            Some(_) => Ok(()),
            None => {
                self.shape.push(len);
                Ok(())
            }
        }
    }

    /// Record a scalar at `depth`
    pub fn push_scalar(&mut self, depth: usize, value: T) -> TensorResult<()> {
        if self.shape.len() > depth {
            return Err(TensorError::ragged(depth, "a list", "a scalar"));
        }
        match self.leaf_depth {
            Some(leaf) if leaf != depth => {
                return Err(TensorError::ragged(depth, "a list", "a scalar"));
            }
            _ => self.leaf_depth = Some(depth),
        }
        self.data.push(value);
        Ok(())
    }
}

/// Values that flatten into tensor data of element type `T`
pub trait NestedLiteral<T: Element> {
    /// Walk this value at nesting `depth`, feeding `state`
    fn flatten_into(&self, depth: usize, state: &mut FlattenState<T>) -> TensorResult<()>;
}

/// Flatten a nested literal into row-major data and its shape
pub fn flatten<T, L>(literal: &L) -> TensorResult<(Vec<T>, Vec<usize>)>
where
    T: Element,
    L: NestedLiteral<T> + ?Sized,
{
    let mut state = FlattenState::new();
    literal.flatten_into(0, &mut state)?;
    Ok((state.data, state.shape))
}

macro_rules! impl_scalar_literal {
    ($($ty:ty),*) => {
        $(
            impl NestedLiteral<$ty> for $ty {
                fn flatten_into(&self, depth: usize, state: &mut FlattenState<$ty>) -> TensorResult<()> {
                    state.push_scalar(depth, *self)
                }
            }
        )*
    };
}

impl_scalar_literal!(u8, i32, i64, f32, f64);

impl<T: Element, U: NestedLiteral<T>> NestedLiteral<T> for [U] {
    fn flatten_into(&self, depth: usize, state: &mut FlattenState<T>) -> TensorResult<()> {
        state.enter_list(depth, self.len())?;
        for item in self {
            item.flatten_into(depth + 1, state)?;
        }
        Ok(())
    }
}

impl<T: Element, U: NestedLiteral<T>, const N: usize> NestedLiteral<T> for [U; N] {
    fn flatten_into(&self, depth: usize, state: &mut FlattenState<T>) -> TensorResult<()> {
        self.as_slice().flatten_into(depth, state)
    }
}

impl<T: Element, U: NestedLiteral<T>> NestedLiteral<T> for Vec<U> {
    fn flatten_into(&self, depth: usize, state: &mut FlattenState<T>) -> TensorResult<()> {
        self.as_slice().flatten_into(depth, state)
    }
}

impl<T: Element, L: NestedLiteral<T> + ?Sized> NestedLiteral<T> for &L {
    fn flatten_into(&self, depth: usize, state: &mut FlattenState<T>) -> TensorResult<()> {
        (**self).flatten_into(depth, state)
    }
}

/// Dynamically nested numeric literal
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    List(Vec<Literal>),
}

impl Literal {
    /// Parse JSON-style text such as `[[1, 2], [3, 4]]`
    pub fn parse(text: &str) -> TensorResult<Self> {
        let value: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| TensorError::InvalidLiteral(format!("{}: {}", text.trim(), e)))?;
        Self::from_json(&value)
    }

    /// Convert a parsed JSON value
    pub fn from_json(value: &serde_json::Value) -> TensorResult<Self> {
        use serde_json::Value;

        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Literal::Int(i))
                } else if n.is_u64() {
                    Err(TensorError::InvalidLiteral(format!(
                        "integer {} does not fit in int64",
                        n
                    )))
                } else {
                    n.as_f64().map(Literal::Float).ok_or_else(|| {
                        TensorError::InvalidLiteral(format!("unrepresentable number {}", n))
                    })
                }
            }
            Value::Array(items) => items
                .iter()
                .map(Self::from_json)
                .collect::<TensorResult<Vec<_>>>()
                .map(Literal::List),
            other => Err(TensorError::InvalidLiteral(format!(
                "expected a number or a list, got {}",
                other
            ))),
        }
    }

    /// Dtype a tensor built from this literal gets by default.
    ///
    /// `int64` when there is at least one leaf and all leaves are integers,
    /// otherwise `float32` (an empty list included).
    pub fn infer_dtype(&self) -> DType {
        let mut leaves = 0usize;
        let mut any_float = false;
        self.visit_leaves(&mut |leaf| {
            leaves += 1;
            any_float |= matches!(leaf, Literal::Float(_));
        });

        if leaves == 0 || any_float {
            DType::DEFAULT_FLOAT
        } else {
            DType::DEFAULT_INT
        }
    }

    /// Shape this literal describes, validating that it is not ragged
    pub fn shape(&self) -> TensorResult<Vec<usize>> {
        flatten::<f64, _>(self).map(|(_, shape)| shape)
    }

    fn visit_leaves<F: FnMut(&Literal)>(&self, f: &mut F) {
        match self {
            Literal::List(items) => {
                for item in items {
                    item.visit_leaves(f);
                }
            }
            leaf => f(leaf),
        }
    }
}

impl<T: Element> NestedLiteral<T> for Literal {
    fn flatten_into(&self, depth: usize, state: &mut FlattenState<T>) -> TensorResult<()> {
        match self {
            Literal::Int(v) => {
                let value = <T as NumCast>::from(*v).ok_or_else(|| {
                    TensorError::InvalidLiteral(format!("{} does not fit in {}", v, T::DTYPE))
                })?;
                state.push_scalar(depth, value)
            }
            // Float to integer truncates toward zero
            Literal::Float(v) => state.push_scalar(depth, T::cast_from_f64(*v)),
            Literal::List(items) => items.as_slice().flatten_into(depth, state),
        }
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Int(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Float(value)
    }
}

impl<L: Into<Literal>> From<Vec<L>> for Literal {
    fn from(items: Vec<L>) -> Self {
        Literal::List(items.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(v) => write!(f, "{}", v),
            Literal::Float(v) => write!(f, "{:?}", v),
            Literal::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_arrays() {
        let (data, shape) = flatten::<i64, _>(&[[1i64, 2], [3, 4]]).unwrap();
        assert_eq!(shape, vec![2, 2]);
        assert_eq!(data, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_flatten_vecs_3d() {
        let nested = vec![vec![vec![1.0f32, 2.0]], vec![vec![3.0, 4.0]]];
        let (data, shape) = flatten::<f32, _>(&nested).unwrap();
        assert_eq!(shape, vec![2, 1, 2]);
        assert_eq!(data, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_flatten_scalar() {
        let (data, shape) = flatten::<f64, _>(&2.5f64).unwrap();
        assert!(shape.is_empty());
        assert_eq!(data, vec![2.5]);
    }

    #[test]
    fn test_flatten_empty() {
        let empty: Vec<i64> = Vec::new();
        let (data, shape) = flatten::<i64, _>(&empty).unwrap();
        assert_eq!(shape, vec![0]);
        assert!(data.is_empty());

        let rows: Vec<Vec<i64>> = vec![vec![], vec![]];
        assert_eq!(flatten::<i64, _>(&rows).unwrap().1, vec![2, 0]);
    }

    #[test]
    fn test_ragged_lengths() {
        let ragged = vec![vec![1i64, 2], vec![3]];
        let err = flatten::<i64, _>(&ragged).unwrap_err();
        assert!(matches!(err, TensorError::RaggedLiteral { depth: 1, .. }));
    }

    #[test]
    fn test_ragged_mixed_depth() {
        assert!(Literal::parse("[1, [2]]").unwrap().shape().is_err());
        assert!(Literal::parse("[[2], 1]").unwrap().shape().is_err());
        assert!(Literal::parse("[[], 1]").unwrap().shape().is_err());
    }

    #[test]
    fn test_parse_and_infer() {
        let ints = Literal::parse("[[1, 2], [3, 4]]").unwrap();
        assert_eq!(ints.infer_dtype(), DType::Int64);
        assert_eq!(ints.shape().unwrap(), vec![2, 2]);

        let floats = Literal::parse("[1, 2.0]").unwrap();
        assert_eq!(floats.infer_dtype(), DType::Float32);

        let empty = Literal::parse("[]").unwrap();
        assert_eq!(empty.infer_dtype(), DType::Float32);
        assert_eq!(empty.shape().unwrap(), vec![0]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Literal::parse("[[1, 2], [3, 4]"),
            Err(TensorError::InvalidLiteral(_))
        ));
        assert!(Literal::parse("[\"a\"]").is_err());
        assert!(Literal::parse("[true]").is_err());
        assert!(Literal::parse("18446744073709551615").is_err());
    }

    #[test]
    fn test_literal_into_typed() {
        let literal = Literal::parse("[[1, 2.7], [-3, 4]]").unwrap();
        let (ints, _) = flatten::<i32, _>(&literal).unwrap();
        assert_eq!(ints, vec![1, 2, -3, 4]);

        let (floats, _) = flatten::<f64, _>(&literal).unwrap();
        assert_eq!(floats, vec![1.0, 2.7, -3.0, 4.0]);

        assert!(flatten::<u8, _>(&literal).is_err());
    }

    #[test]
    fn test_from_and_display() {
        let literal = Literal::from(vec![vec![1i64, 2], vec![3, 4]]);
        assert_eq!(literal.to_string(), "[[1, 2], [3, 4]]");
        assert_eq!(Literal::from(0.5).to_string(), "0.5");
    }
}
