//! Core lazy/eager operator tests: filter, select, slicing, concat, reverse,
//! distinct, cast.

use std::cell::Cell;

use seqops::prelude::*;

#[test]
fn test_filter_and_negation_partition_the_source() {
    let source = vec![4, 9, 1, 16, 25, 2, 8];
    let is_even = |x: &i32| x % 2 == 0;

    let evens: Vec<i32> = source.clone().into_seq().filter(is_even).collect();
    let odds: Vec<i32> = source.clone().into_seq().filter(|x| !is_even(x)).collect();

    assert_eq!(evens, vec![4, 16, 2, 8]);
    assert_eq!(odds, vec![9, 1, 25]);
    assert_eq!(evens.len() + odds.len(), source.len());
}

#[test]
fn test_filter_is_lazy() {
    let calls = Cell::new(0);
    let pipeline = vec![1, 2, 3].into_seq().filter(|_| {
        calls.set(calls.get() + 1);
        true
    });
    assert_eq!(calls.get(), 0);

    let out: Vec<i32> = pipeline.collect();
    assert_eq!(out, vec![1, 2, 3]);
    assert_eq!(calls.get(), 3);
}

#[test]
fn test_retraversal_reruns_pipeline() {
    let calls = Cell::new(0);
    let pipeline = (1..=4).into_seq().select(|x| {
        calls.set(calls.get() + 1);
        x * 10
    });

    let first: Vec<i32> = pipeline.clone().collect();
    let second: Vec<i32> = pipeline.collect();
    assert_eq!(first, second);
    assert_eq!(calls.get(), 8);
}

#[test]
fn test_select_and_select_many() {
    let lengths: Vec<usize> = vec!["a", "bb", "ccc"]
        .into_seq()
        .select(str::len)
        .collect();
    assert_eq!(lengths, vec![1, 2, 3]);

    let flat: Vec<i32> = vec![vec![1, 2], vec![], vec![3]]
        .into_seq()
        .select_many(|v| v)
        .collect();
    assert_eq!(flat, vec![1, 2, 3]);
}

#[test]
fn test_empty_inputs_are_not_errors() {
    let empty: Vec<i32> = Vec::new();
    assert_eq!(empty.clone().into_seq().filter(|_| true).count(), 0);
    assert_eq!(empty.clone().into_seq().select(|x| x + 1).count(), 0);
    assert_eq!(empty.into_seq().skip(5).count(), 0);
}

#[test]
fn test_skip_past_end_is_empty() {
    let out: Vec<i32> = vec![1, 2, 3].into_seq().skip(10).collect();
    assert!(out.is_empty());

    let out: Vec<i32> = vec![1, 2, 3].into_seq().skip(1).collect();
    assert_eq!(out, vec![2, 3]);
}

#[test]
fn test_take_and_take_while() {
    let out: Vec<u32> = (1..).into_seq().take(3).collect();
    assert_eq!(out, vec![1, 2, 3]);

    let out: Vec<u32> = (1..).into_seq().take_while(|x| *x < 4).collect();
    assert_eq!(out, vec![1, 2, 3]);
}

#[test]
fn test_skip_while_keeps_first_failing_element() {
    let out: Vec<i32> = vec![1, 2, 5, 1, 7]
        .into_seq()
        .skip_while(|x| *x < 3)
        .collect();
    assert_eq!(out, vec![5, 1, 7]);
}

#[test]
fn test_skip_last() {
    let out: Vec<i32> = vec![1, 2, 3, 4].into_seq().skip_last(2).collect();
    assert_eq!(out, vec![1, 2]);

    let out: Vec<i32> = vec![1, 2].into_seq().skip_last(5).collect();
    assert!(out.is_empty());
}

#[test]
fn test_concat_append_prepend() {
    let out: Vec<i32> = vec![2, 3]
        .into_seq()
        .concat(vec![4, 5])
        .append(6)
        .prepend(1)
        .collect();
    assert_eq!(out, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_reverse_twice_restores_order() {
    let source = vec!['q', 'u', 'e', 'r', 'y'];
    let reversed: Vec<char> = source.clone().into_seq().reverse().unwrap().collect();
    assert_eq!(reversed, vec!['y', 'r', 'e', 'u', 'q']);

    let restored: Vec<char> = source
        .clone()
        .into_seq()
        .reverse()
        .unwrap()
        .reverse()
        .unwrap()
        .collect();
    assert_eq!(restored, source);
}

#[test]
fn test_distinct_keeps_first_occurrence_and_is_idempotent() {
    let source = vec![3, 1, 3, 2, 1, 4];
    let once: Vec<i32> = source.clone().into_seq().distinct().unwrap().collect();
    assert_eq!(once, vec![3, 1, 2, 4]);

    let twice: Vec<i32> = source
        .into_seq()
        .distinct()
        .unwrap()
        .distinct()
        .unwrap()
        .collect();
    assert_eq!(twice, once);
}

#[test]
fn test_cast_values() {
    let values = vec![Value::Int(1), Value::Int(2), Value::Int(3)];
    let ints: Result<Vec<i64>> = values.into_seq().cast::<i64>().collect();
    assert_eq!(ints.unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_cast_failure_reports_conversion() {
    let values = vec![Value::Int(1), Value::from("two"), Value::Int(3)];
    let ints: Result<Vec<i64>> = values.into_seq().cast::<i64>().collect();
    assert_eq!(
        ints.unwrap_err(),
        Error::ConversionFailure {
            from: "str",
            to: "int"
        }
    );
}

#[test]
fn test_cast_is_lazy_per_element() {
    let values = vec![Value::Int(7), Value::Bool(true)];
    let mut cast = values.into_seq().cast::<i64>();
    assert_eq!(cast.next(), Some(Ok(7)));
    assert!(matches!(
        cast.next(),
        Some(Err(Error::ConversionFailure { .. }))
    ));
    assert_eq!(cast.next(), None);
}

#[test]
fn test_cast_primitive_narrowing() {
    let bytes: Result<Vec<u8>> = vec![1i64, 255].into_seq().cast::<u8>().collect();
    assert_eq!(bytes.unwrap(), vec![1u8, 255]);

    let overflow: Result<Vec<u8>> = vec![1i64, 256].into_seq().cast::<u8>().collect();
    assert!(matches!(
        overflow,
        Err(Error::ConversionFailure { .. })
    ));
}

#[test]
fn test_of_type_skips_mismatches() {
    let values = vec![
        Value::Int(1),
        Value::from("x"),
        Value::Null,
        Value::Int(2),
        Value::Float(2.5),
    ];
    let ints: Vec<i64> = values.clone().into_seq().of_type::<i64>().collect();
    assert_eq!(ints, vec![1, 2]);

    // Ints widen into floats.
    let floats: Vec<f64> = values.into_seq().of_type::<f64>().collect();
    assert_eq!(floats, vec![1.0, 2.0, 2.5]);
}

#[test]
fn test_to_vec_budget() {
    let cfg = QueryConfig::default().with_max_buffer_len(2);
    assert_eq!((0..2).into_seq_with(cfg).to_vec().unwrap(), vec![0, 1]);
    assert!(matches!(
        (0..).into_seq_with(cfg).to_vec(),
        Err(Error::BufferLimit { limit: 2, .. })
    ));
}

#[test]
fn test_config_flows_through_lazy_stages() {
    let cfg = QueryConfig::default().with_max_buffer_len(3);
    let err = (0..10)
        .into_seq_with(cfg)
        .filter(|x| x % 2 == 0)
        .select(|x| x * 2)
        .reverse()
        .unwrap_err();
    assert_eq!(err, Error::BufferLimit { op: "reverse", limit: 3 });
}
