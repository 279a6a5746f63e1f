#![cfg(feature = "format")]
//! Integration tests for string rendering.

use lambars_iter::IterError;
use lambars_iter::format::{
    Format, string_def, string_def2, string_fmt, string_fmt2, string_seq, string_slice,
};
use lambars_iter::{var, var2};
use rstest::{fixture, rstest};

#[fixture]
fn quoted() -> Format {
    Format::default()
        .with_rims("'", "'")
        .with_edges("{", "}")
        .with_element_separator(", ")
        .with_value_separator(" => ")
}

// =============================================================================
// Default Format
// =============================================================================

#[rstest]
fn test_default_format_fields() {
    let format = Format::default();
    assert_eq!(format.left_rim, "");
    assert_eq!(format.right_rim, "");
    assert_eq!(format.element_separator, " ");
    assert_eq!(format.left_edge, "[");
    assert_eq!(format.right_edge, "]");
    assert_eq!(format.value_separator, ":");
}

#[rstest]
#[case(vec![], "[]")]
#[case(vec![1], "[1]")]
#[case(vec![1, 2, 3], "[1 2 3]")]
fn test_string_def(#[case] values: Vec<i32>, #[case] expected: &str) {
    assert_eq!(string_def(Some(values)), expected);
}

#[rstest]
fn test_string_def_nil_sequence() {
    assert_eq!(string_def(None::<Vec<i32>>), "");
    assert_eq!(string_def2(None::<Vec<(i32, i32)>>), "");
}

#[rstest]
fn test_string_def2() {
    assert_eq!(string_def2(Some(var2!["a" => 1, "b" => 2])), "[a:1 b:2]");
    assert_eq!(string_def2(Some(Vec::<(i32, i32)>::new())), "[]");
}

// =============================================================================
// Custom Format
// =============================================================================

#[rstest]
fn test_string_fmt_custom(quoted: Format) {
    assert_eq!(string_fmt(Some(var!["x", "y"]), &quoted), "{'x', 'y'}");
    assert_eq!(string_fmt(Some(Vec::<&str>::new()), &quoted), "{}");
}

#[rstest]
fn test_string_fmt2_custom(quoted: Format) {
    assert_eq!(
        string_fmt2(Some(var2![1 => true, 2 => false]), &quoted),
        "{'1 => true', '2 => false'}"
    );
}

#[rstest]
fn test_string_fmt_without_edges() {
    let format = Format::default().with_edges("", "").with_element_separator(",");
    assert_eq!(string_fmt(Some(1..=5), &format), "1,2,3,4,5");
}

// =============================================================================
// String Sequences
// =============================================================================

#[rstest]
fn test_string_seq_is_lazy() {
    let mut strings = string_seq(Some(0..)).unwrap();
    assert_eq!(strings.next().as_deref(), Some("0"));
    assert_eq!(strings.next().as_deref(), Some("1"));
}

#[rstest]
fn test_string_slice() {
    assert_eq!(
        string_slice(Some(var![1.5, 2.0, -3.25])).unwrap(),
        vec!["1.5", "2", "-3.25"]
    );
    assert!(string_slice(Some(Vec::<char>::new())).unwrap().is_empty());
}

#[rstest]
fn test_string_seq_nil_sequence() {
    assert_eq!(string_seq(None::<Vec<i32>>).err(), Some(IterError::NilSequence));
    assert_eq!(string_slice(None::<Vec<i32>>), Err(IterError::NilSequence));
}
