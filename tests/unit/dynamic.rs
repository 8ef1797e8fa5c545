//! Loosely typed inputs: conversion and comparability errors.

use osa_distance::{
    distance, distance_batch, normalized_distance, SymbolKind, TypeConversionError, Value,
    ValueKind,
};

fn json(s: &str) -> Value {
    serde_json::from_str(s).unwrap()
}

#[test]
fn test_json_lists_and_strings() {
    assert_eq!(distance(&json("[1, 2, 3]"), &json("[1, 3, 2]")).unwrap(), 1);
    assert_eq!(distance(&json("[]"), &json("[]")).unwrap(), 0);
    assert_eq!(distance(&json("\"smtih\""), &json("\"smith\"")).unwrap(), 1);
    assert_eq!(
        distance(&json("[1, 2, 3, 4, 5, 6]"), &json("[7, 8, 9, 7, 10, 11, 4]")).unwrap(),
        7
    );
}

#[test]
fn test_string_against_list_of_chars() {
    assert_eq!(
        distance(&json("\"abc\""), &json("[\"a\", \"c\", \"b\"]")).unwrap(),
        1
    );
}

#[test]
fn test_bool_sequences() {
    assert_eq!(distance(&json("[true, false]"), &json("[false, true]")).unwrap(), 1);
}

#[test]
fn test_scalar_inputs_fail() {
    for bad in ["42", "4.5", "true", "null"] {
        let err = distance(&json(bad), &json("[1]")).unwrap_err();
        assert!(
            matches!(err, TypeConversionError::NotASequence { .. }),
            "{} gave {:?}",
            bad,
            err
        );
    }
}

#[test]
fn test_element_errors_report_index() {
    let err = distance(&json("[1, 2, null]"), &json("[1]")).unwrap_err();
    assert_eq!(
        err,
        TypeConversionError::NotASymbol {
            index: 2,
            found: ValueKind::Null
        }
    );
}

#[test]
fn test_ints_and_floats_compare_by_value() {
    assert_eq!(distance(&json("[1, 2.5, 3]"), &json("[1, 3, 2.5]")).unwrap(), 1);
    assert_eq!(normalized_distance(&json("[1, 2]"), &json("[1.0, 2.0]")).unwrap(), 0.0);
}

#[test]
fn test_integers_past_i64_range() {
    // serde reads 2^64 - 1 as a float; the list is still one kind.
    let big = json("[1, 18446744073709551615]");
    assert_eq!(distance(&big, &big.clone()).unwrap(), 0);
    assert_eq!(distance(&big, &json("[1, 2]")).unwrap(), 1);
}

#[test]
fn test_numbers_and_text_do_not_compare() {
    let err = normalized_distance(&json("[1, 2]"), &json("\"12\"")).unwrap_err();
    assert_eq!(
        err,
        TypeConversionError::Incomparable {
            left: SymbolKind::Number,
            right: SymbolKind::Char
        }
    );
}

#[test]
fn test_error_detected_before_batch_work() {
    let candidates = vec![json("\"abc\""), json("\"abd\""), json("[[1]]"), json("7")];
    let err = distance_batch(&json("\"abc\""), &candidates).unwrap_err();
    match err {
        TypeConversionError::Candidate { index, source } => {
            assert_eq!(index, 2);
            assert_eq!(
                *source,
                TypeConversionError::NotASymbol {
                    index: 0,
                    found: ValueKind::List
                }
            );
        }
        other => panic!("unexpected error {:?}", other),
    }
}
