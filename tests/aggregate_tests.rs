//! Aggregation tests: count, sum, average, min/max, all/any, contains.

use seqops::prelude::*;

#[test]
fn test_count_variants() {
    let s = vec![1, 2, 3, 4, 5];
    assert_eq!(s.clone().into_seq().count(), 5);
    assert_eq!(s.clone().into_seq().count_where(|x| *x > 2), 3);
    assert_eq!(s.into_seq().long_count(), 5u64);
    assert_eq!(Vec::<i32>::new().into_seq().count(), 0);
}

#[test]
fn test_sum_empty_is_zero_not_error() {
    assert_eq!(Vec::<i32>::new().into_seq().sum(), 0);
    assert_eq!(Vec::<f64>::new().into_seq().sum(), 0.0);
    assert_eq!(Vec::<u64>::new().into_seq().sum_by(|x| x * 2), 0);
}

#[test]
fn test_sum() {
    assert_eq!(vec![1, 2, 3, 4].into_seq().sum(), 10);
    assert_eq!(vec![0.5f32, 1.5].into_seq().sum(), 2.0);

    let words = vec!["ab", "cde", ""];
    assert_eq!(words.into_seq().sum_by(|w| w.len()), 5usize);
}

#[test]
fn test_average() {
    assert_eq!(vec![1, 2, 3, 4].into_seq().average(), 2.5);
    assert_eq!(Vec::<i64>::new().into_seq().average(), 0.0);

    let items = vec![("a", 10u32), ("b", 20), ("c", 60)];
    assert_eq!(items.into_seq().average_by(|p| p.1), 30.0);
}

#[test]
fn test_min_max() {
    let s = vec![4, -2, 9, 0];
    assert_eq!(s.clone().into_seq().min().unwrap(), -2);
    assert_eq!(s.into_seq().max().unwrap(), 9);
}

#[test]
fn test_min_max_empty_fail() {
    assert_eq!(
        Vec::<i32>::new().into_seq().min().unwrap_err(),
        Error::EmptySequence { op: "min" }
    );
    assert_eq!(
        Vec::<i32>::new().into_seq().max().unwrap_err(),
        Error::EmptySequence { op: "max" }
    );
}

#[test]
fn test_min_where_seeds_with_unfiltered_first() {
    // 1 fails the predicate but still seeds the comparison, and nothing
    // smaller satisfies it, so it wins.
    let s = vec![1, 4, 6, 3];
    assert_eq!(s.clone().into_seq().min_where(|x| x % 2 == 0).unwrap(), 1);

    // A qualifying element smaller than the seed replaces it.
    let s = vec![5, 7, 2, 3];
    assert_eq!(s.into_seq().min_where(|x| x % 2 == 0).unwrap(), 2);
}

#[test]
fn test_max_where_seeds_with_unfiltered_first() {
    let s = vec![100, 4, 6];
    assert_eq!(s.into_seq().max_where(|x| x % 2 == 1).unwrap(), 100);

    let s = vec![1, 8, 3, 6];
    assert_eq!(s.into_seq().max_where(|x| x % 2 == 0).unwrap(), 8);
}

#[test]
fn test_min_max_with_comparer() {
    let words = vec!["kiwi", "fig", "banana", "pear"];
    assert_eq!(
        words
            .clone()
            .into_seq()
            .min_with(ByKey::new(|w: &&str| w.len()))
            .unwrap(),
        "fig"
    );
    assert_eq!(
        words
            .into_seq()
            .max_with(|a: &&str, b: &&str| a.len().cmp(&b.len()))
            .unwrap(),
        "banana"
    );

    // The earliest of equal minima wins.
    let ties = vec![("x", 1), ("y", 1)];
    assert_eq!(
        ties.into_seq().min_with(ByKey::new(|p: &(&str, i32)| p.1)).unwrap(),
        ("x", 1)
    );
}

#[test]
fn test_all_any() {
    assert!(Vec::<i32>::new().into_seq().all(|_| false));
    assert!(!Vec::<i32>::new().into_seq().any(|_| true));
    assert!(!Vec::<i32>::new().into_seq().any_element());

    assert!(vec![2, 4].into_seq().all(|x| x % 2 == 0));
    assert!(!vec![2, 3].into_seq().all(|x| x % 2 == 0));
    assert!(vec![1, 3, 4].into_seq().any(|x| x % 2 == 0));
    assert!(vec![1].into_seq().any_element());
}

#[test]
fn test_all_any_short_circuit() {
    // Both terminate on unbounded input.
    assert!(!(0..).into_seq().all(|x| x < 10));
    assert!((0..).into_seq().any(|x| x == 10));
}

#[test]
fn test_contains() {
    assert!(vec![1, 2, 3].into_seq().contains(&2));
    assert!(!vec![1, 2, 3].into_seq().contains(&5));
    assert!(vec!["Apple", "pear"]
        .into_seq()
        .contains_with(&"apple", |a: &&str, b: &&str| {
            a.to_lowercase().cmp(&b.to_lowercase())
        }));
    assert!(vec![3, 1].into_seq().contains_with(&1, Natural));
}
