//! Order-preserving sequence combinators: map, filter, some.
//!
//! Thin wrappers with the standard map/filter/any contract, included so
//! that element-wise transforms compose uniformly with the aggregation
//! and windowing combinators through [`pipe!`](crate::pipe).

/// Maps a projection over a sequence.
pub fn map<T, U, F>(f: F) -> impl Fn(&[T]) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    move |seq: &[T]| seq.iter().map(&f).collect()
}

/// Keeps elements matching the predicate, preserving order.
pub fn filter<T, P>(predicate: P) -> impl Fn(&[T]) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    move |seq: &[T]| {
        seq.iter()
            .filter(|elem| predicate(*elem))
            .cloned()
            .collect()
    }
}

/// True iff at least one element matches the predicate.
pub fn some<T, P>(predicate: P) -> impl Fn(&[T]) -> bool
where
    P: Fn(&T) -> bool,
{
    move |seq: &[T]| seq.iter().any(|elem| predicate(elem))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_preserves_order() {
        let doubled = map(|x: &i32| x * 2);
        assert_eq!(doubled(&[1, 2, 3]), vec![2, 4, 6]);
    }

    #[test]
    fn test_map_changes_element_type() {
        let shown = map(|x: &i32| x.to_string());
        assert_eq!(shown(&[1, 22]), vec!["1".to_string(), "22".to_string()]);
    }

    #[test]
    fn test_filter_keeps_matching_in_order() {
        let evens = filter(|x: &i32| x % 2 == 0);
        assert_eq!(evens(&[1, 2, 3, 4, 5, 6]), vec![2, 4, 6]);
    }

    #[test]
    fn test_filter_empty_result() {
        let none = filter(|_: &i32| false);
        assert_eq!(none(&[1, 2, 3]), Vec::<i32>::new());
    }

    #[test]
    fn test_some_short_circuit_semantics() {
        let has_negative = some(|x: &i32| *x < 0);
        assert!(has_negative(&[1, -2, 3]));
        assert!(!has_negative(&[1, 2, 3]));
        assert!(!has_negative(&[]));
    }
}
