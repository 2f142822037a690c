use crate::Phase;

use crate::tests::date;

use googletest::prelude::*;

#[test]
fn given_blank_row_when_created_then_defaults_apply() {
    let phase = Phase::blank("New phase");

    assert_that!(phase.start, none());
    assert_that!(phase.end, none());
    assert_that!(phase.weight, eq(10.0));
    assert_that!(phase.progress, eq(0.0));
}

#[test]
fn given_empty_date_strings_when_deserialized_then_dates_are_unset() {
    let json = r#"{"title": "Foundation", "start": "", "end": "", "weight": 10, "progress": 0}"#;

    let phase: Phase = serde_json::from_str(json).unwrap();

    assert_that!(phase.start, none());
    assert_that!(phase.end, none());
}

#[test]
fn given_numeric_strings_when_deserialized_then_parsed_as_numbers() {
    let json = r#"{"title": "Roof", "start": "2024-05-01", "end": "2024-06-01", "weight": "12.5", "progress": "40"}"#;

    let phase: Phase = serde_json::from_str(json).unwrap();

    assert_that!(phase.start, some(eq(date(2024, 5, 1))));
    assert_that!(phase.weight, eq(12.5));
    assert_that!(phase.progress, eq(40.0));
}

#[test]
fn given_missing_weight_when_deserialized_then_weight_is_zero() {
    let json = r#"{"title": "Fence", "start": "2024-05-01", "end": "2024-06-01", "progress": "abc"}"#;

    let phase: Phase = serde_json::from_str(json).unwrap();

    assert_that!(phase.weight, eq(0.0));
    assert_that!(phase.progress, eq(0.0));
}

#[test]
fn given_out_of_range_values_when_normalized_then_clamped() {
    let mut phase = Phase::new("Slab", date(2024, 1, 1), date(2024, 2, 1), -5.0);
    phase.progress = 250.0;

    assert_that!(phase.effective_weight(), eq(0.0));
    assert_that!(phase.progress_fraction(), eq(1.0));
    assert!(phase.is_complete());
}

#[test]
fn given_unfinished_phase_past_end_when_checked_then_overdue() {
    let phase = Phase::new("Walls", date(2024, 1, 1), date(2024, 2, 1), 10.0).with_progress(60.0);

    assert!(phase.is_overdue(date(2024, 2, 2)));
    assert!(!phase.is_overdue(date(2024, 2, 1)));
    assert!(!phase.clone().with_progress(100.0).is_overdue(date(2024, 3, 1)));
}

#[test]
fn given_phase_when_serialized_then_dates_use_iso_format() {
    let phase = Phase::new("Walls", date(2024, 1, 1), date(2024, 2, 1), 10.0);

    let json = serde_json::to_value(&phase).unwrap();

    assert_that!(json["start"].as_str(), some(eq("2024-01-01")));
    assert_that!(json["end"].as_str(), some(eq("2024-02-01")));
}
