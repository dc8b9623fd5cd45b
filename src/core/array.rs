use crate::domain::model::Nested;
use crate::utils::error::{DemoError, Result};
use serde_json::Value;
use std::collections::HashSet;
use std::hash::Hash;
use std::iter::Sum;

/// Distinct elements in order of first occurrence.
pub fn unique<T: Eq + Hash + Clone>(seq: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(seq.len());
    seq.iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// `unique` for JSON sequences, where values are not hashable.
pub fn unique_values(seq: &[Value]) -> Vec<Value> {
    let mut result: Vec<Value> = Vec::with_capacity(seq.len());
    for item in seq {
        if !result.contains(item) {
            result.push(item.clone());
        }
    }
    result
}

pub fn flatten<T: Clone>(seq: &[Nested<T>]) -> Vec<T> {
    let mut flat = Vec::new();
    for item in seq {
        flatten_into(item, &mut flat);
    }
    flat
}

fn flatten_into<T: Clone>(item: &Nested<T>, out: &mut Vec<T>) {
    match item {
        Nested::Item(value) => out.push(value.clone()),
        Nested::List(items) => {
            for inner in items {
                flatten_into(inner, out);
            }
        }
    }
}

/// A non-array value comes back as a single-element vector.
pub fn flatten_value(value: &Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items.iter().flat_map(flatten_value).collect(),
        other => vec![other.clone()],
    }
}

pub fn chunk<T: Clone>(seq: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    if size == 0 {
        return Err(DemoError::InvalidArgument {
            name: "size".to_string(),
            reason: "chunk size must be greater than 0".to_string(),
        });
    }
    Ok(seq.chunks(size).map(<[T]>::to_vec).collect())
}

pub fn sum<T>(seq: &[T]) -> T
where
    T: Copy + Sum<T>,
{
    seq.iter().copied().sum()
}

pub fn average<T>(seq: &[T]) -> f64
where
    T: Copy + Into<f64>,
{
    if seq.is_empty() {
        return 0.0;
    }
    let total: f64 = seq.iter().map(|&n| n.into()).sum();
    total / seq.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_unique_removes_duplicates() {
        assert_eq!(unique(&[1, 2, 2, 3, 3, 3]), vec![1, 2, 3]);
        assert_eq!(unique::<i32>(&[]), Vec::<i32>::new());
        assert_eq!(unique(&["a", "b", "a", "c"]), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unique_values_mixed_types() {
        let seq = vec![json!(1), json!("1"), json!(1), json!(null), json!("1")];
        assert_eq!(unique_values(&seq), vec![json!(1), json!("1"), json!(null)]);
    }

    #[test]
    fn test_flatten_nested() {
        let seq = vec![
            Nested::Item(1),
            Nested::List(vec![
                Nested::Item(2),
                Nested::List(vec![Nested::Item(3), Nested::Item(4)]),
            ]),
            Nested::Item(5),
        ];
        assert_eq!(flatten(&seq), vec![1, 2, 3, 4, 5]);

        let flat: Vec<Nested<i32>> = vec![1.into(), 2.into(), 3.into()];
        assert_eq!(flatten(&flat), vec![1, 2, 3]);
    }

    #[test]
    fn test_flatten_value() {
        assert_eq!(
            flatten_value(&json!([1, [2, [3, 4]], 5])),
            vec![json!(1), json!(2), json!(3), json!(4), json!(5)]
        );
        assert_eq!(flatten_value(&json!("x")), vec![json!("x")]);
    }

    #[test]
    fn test_chunk() {
        assert_eq!(
            chunk(&[1, 2, 3, 4, 5], 2).unwrap(),
            vec![vec![1, 2], vec![3, 4], vec![5]]
        );
        assert_eq!(chunk(&[1, 2, 3, 4], 2).unwrap(), vec![vec![1, 2], vec![3, 4]]);
        assert!(chunk::<i32>(&[], 3).unwrap().is_empty());
        assert!(matches!(
            chunk(&[1, 2], 0),
            Err(DemoError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_sum_and_average() {
        assert_eq!(sum(&[1, 2, 3, 4, 5]), 15);
        assert_eq!(sum::<i32>(&[]), 0);
        assert_eq!(average(&[10, 20, 30]), 20.0);
        assert_eq!(average::<f64>(&[]), 0.0);
    }

    proptest! {
        #[test]
        fn prop_unique_is_idempotent(seq in proptest::collection::vec(-20i32..20, 0..50)) {
            let once = unique(&seq);
            prop_assert_eq!(unique(&once), once);
        }

        #[test]
        fn prop_chunk_then_flatten_preserves_sum(
            seq in proptest::collection::vec(-1000i64..1000, 0..60),
            size in 1usize..10,
        ) {
            let nested: Vec<Nested<i64>> = chunk(&seq, size)
                .unwrap()
                .into_iter()
                .map(|c| Nested::List(c.into_iter().map(Nested::Item).collect()))
                .collect();
            prop_assert_eq!(sum(&flatten(&nested)), sum(&seq));
        }
    }
}
