//! Property-based tests for tensor construction and printing

#[cfg(test)]
mod tests {
    use crate::random::Generator;
    use crate::{DType, Literal, Tensor};
    use proptest::prelude::*;

    // 1-4D shapes, small enough to print unsummarized
    fn shape_strategy() -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(1usize..6, 1..=4)
    }

    fn matrix_strategy() -> impl Strategy<Value = Vec<Vec<i64>>> {
        (1usize..5, 1usize..5).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(prop::collection::vec(-1000i64..1000, cols), rows)
        })
    }

    proptest! {
        #[test]
        fn prop_literal_matches_nested_values(rows in matrix_strategy()) {
            let tensor = Tensor::<i64>::from_literal(&rows).unwrap();
            prop_assert_eq!(tensor.shape(), &[rows.len(), rows[0].len()]);
            prop_assert_eq!(tensor.dtype(), DType::Int64);

            let flat: Vec<i64> = rows.iter().flatten().copied().collect();
            prop_assert_eq!(tensor.to_vec(), flat);
        }

        #[test]
        fn prop_parsed_literal_agrees_with_static(rows in matrix_strategy()) {
            let text = format!("{:?}", rows);
            let parsed = Literal::parse(&text).unwrap();
            prop_assert_eq!(parsed.infer_dtype(), DType::Int64);

            let from_text = Tensor::<i64>::from_literal(&parsed).unwrap();
            let from_vec = Tensor::<i64>::from_literal(&rows).unwrap();
            prop_assert_eq!(from_text, from_vec);
        }

        #[test]
        fn prop_ones_like_preserves_attributes(shape in shape_strategy()) {
            let template = Tensor::<i32>::zeros(&shape);
            let ones = template.ones_like();
            prop_assert_eq!(ones.shape(), template.shape());
            prop_assert_eq!(ones.dtype(), template.dtype());
            prop_assert_eq!(ones.device(), template.device());
            prop_assert!(ones.to_vec().iter().all(|&v| v == 1));
        }

        #[test]
        fn prop_rand_like_in_unit_interval(shape in shape_strategy(), seed in any::<u64>()) {
            let template = Tensor::<i64>::zeros(&shape);
            let r = Tensor::<f32>::rand_like_with(&template, &mut Generator::seeded(seed));
            prop_assert_eq!(r.shape(), template.shape());
            prop_assert_eq!(r.dtype(), DType::Float32);
            prop_assert!(r.to_vec().iter().all(|&v| (0.0..1.0).contains(&v)));
        }

        #[test]
        fn prop_seeded_rand_is_reproducible(shape in shape_strategy(), seed in any::<u64>()) {
            let a = Tensor::<f64>::rand_with(&shape, &mut Generator::seeded(seed));
            let b = Tensor::<f64>::rand_with(&shape, &mut Generator::seeded(seed));
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_display_brackets_balance(shape in shape_strategy()) {
            let tensor = Tensor::<i64>::ones(&shape);
            let text = tensor.to_string();
            prop_assert!(text.starts_with("tensor("));
            prop_assert!(text.ends_with(')'));

            let opens = text.matches('[').count();
            let closes = text.matches(']').count();
            prop_assert_eq!(opens, closes);
            // one opening bracket per row at every depth
            let rows: usize = (0..shape.len())
                .map(|d| shape[..d].iter().product::<usize>())
                .sum();
            prop_assert_eq!(opens, rows);
        }

        #[test]
        fn prop_display_lines_fit(values in prop::collection::vec(-99_999i64..99_999, 1..200)) {
            let tensor = Tensor::from_vec(values.clone(), &[values.len()]).unwrap();
            for line in tensor.to_string().lines() {
                prop_assert!(line.len() <= 80, "{:?}", line);
            }
        }
    }
}
