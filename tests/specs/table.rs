//! Table command specs.

use crate::prelude::*;

fn header() -> String {
    format!("ABCD  {:<16}  result", "stage")
}

fn row(inputs: &str, stage: &str, result: &str) -> String {
    format!("{}  {:<16}  {}", inputs, stage, result)
}

/// > The table has a header and one row per input combination
#[test]
fn table_has_sixteen_rows() {
    let result = table().passes();
    let lines = result.lines();
    assert_eq!(lines.len(), 17);
    assert_eq!(lines[0], header());
}

/// > Rows run from 0000 to 1111 with A as the most significant bit
#[test]
fn rows_are_ordered_by_inputs() {
    let result = table().reveal("000000").passes();
    let lines = result.lines();
    assert_eq!(lines[1], row("0000", "singles", "0000"));
    assert_eq!(lines[2], row("0001", "singles", "0001"));
    assert_eq!(lines[9], row("1000", "singles", "1000"));
    assert_eq!(lines[16], row("1111", "singles", "1111"));
}

/// > Rows report the terminating stage and its returned bits
#[test]
fn rows_report_returned_stage() {
    let result = table().reveal("100000").passes();
    let lines = result.lines();
    assert_eq!(lines[1], row("0000", "inverted-singles", "1111"));
    assert_eq!(lines[11], row("1010", "inverted-singles", "0101"));
}

/// > A fully revealed sweep reports no stage and an empty result
#[test]
fn fully_revealed_rows_are_empty() {
    let result = table().passes();
    let lines = result.lines();
    assert_eq!(lines[1].trim_end(), "0000  -");
}

/// > The table prints no per-stage evaluator lines
#[test]
fn table_omits_evaluator_lines() {
    table()
        .passes()
        .stdout_lacks(INTRO)
        .stdout_lacks("Vars:");
}

/// > Table mode follows --mode
#[test]
fn table_respects_mode() {
    let fixture = table().reveal("111000").passes();
    let corrected = table().reveal("111000").mode("corrected").passes();
    // 1110: fifth inverted pair is not(B and C) vs not(B and D)
    assert_eq!(fixture.lines()[15], row("1110", "inverted-pairs", "001001"));
    assert_eq!(corrected.lines()[15], row("1110", "inverted-pairs", "001011"));
}

/// > -o json emits mode, gates and rows with bitstring inputs
#[test]
fn table_json_structure() {
    let result = table().reveal("110000").json().passes();
    let json = result.json();

    assert_eq!(json["mode"], "fixture");
    assert_eq!(json["reveal"]["pairs"], false);

    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 16);
    assert_eq!(rows[0]["inputs"], "0000");
    assert_eq!(rows[0]["terminated_at"], "pairs");
    assert_eq!(rows[15]["inputs"], "1111");
    assert_eq!(
        rows[15]["result"],
        serde_json::json!([true, true, true, true, true, true])
    );
}
