use crate::Phase;
use crate::scurve::project;

use crate::tests::{date, phase, two_phase_timeline};

use chrono::NaiveDate;
use googletest::prelude::*;
use proptest::prelude::*;

fn sample_at(points: &[crate::SCurvePoint], at: NaiveDate) -> crate::SCurvePoint {
    *points
        .iter()
        .find(|p| p.date == at)
        .unwrap_or_else(|| panic!("no sample for {at}"))
}

// =========================================================================
// Property-Based Tests
// =========================================================================

proptest! {
    #[test]
    fn given_any_window_when_projected_then_at_least_two_samples(
        start_offset in 0i64..3_650,
        end_offset in -3_650i64..3_650,
    ) {
        let start = date(2015, 1, 1) + chrono::Duration::days(start_offset);
        let end = start + chrono::Duration::days(end_offset);

        let points = project(&two_phase_timeline(), start, Some(end));

        prop_assert!(points.len() >= 2);
    }

    #[test]
    fn given_any_timeline_when_projected_then_percentages_bounded_and_planned_monotonic(
        weights in prop::collection::vec(0.0f64..100.0, 1..8),
        progress in 0.0f64..=100.0,
    ) {
        let phases: Vec<Phase> = weights
            .iter()
            .enumerate()
            .map(|(i, w)| {
                let start = date(2024, 1, 1) + chrono::Duration::days(30 * i as i64);
                phase(start, start + chrono::Duration::days(45), *w, progress)
            })
            .collect();

        let points = project(&phases, date(2024, 1, 1), None);

        for window in points.windows(2) {
            prop_assert!(window[0].planned <= window[1].planned);
        }
        for point in &points {
            prop_assert!(point.planned <= 100);
            prop_assert!(point.actual <= 100);
            prop_assert!(point.actual <= point.planned);
        }
    }
}

// =========================================================================
// Unit Tests
// =========================================================================

#[test]
fn given_two_sequential_phases_when_projected_then_samples_follow_interpolation() {
    let points = project(&two_phase_timeline(), date(2024, 1, 1), None);

    let jan = sample_at(&points, date(2024, 1, 1));
    assert_that!(jan.planned, eq(0));
    assert_that!(jan.actual, eq(0));

    // First phase fully elapsed, second exactly at its start
    let feb = sample_at(&points, date(2024, 2, 1));
    assert_that!(feb.planned, eq(50));
    assert_that!(feb.actual, eq(50));

    let mar = sample_at(&points, date(2024, 3, 1));
    assert_that!(mar.planned, eq(100));
    assert_that!(mar.actual, eq(50));
}

#[test]
fn given_no_end_when_projected_then_window_is_twelve_months() {
    let points = project(&two_phase_timeline(), date(2024, 1, 1), None);

    assert_that!(points.len(), eq(13));
    assert_that!(points.first().unwrap().date, eq(date(2024, 1, 1)));
    assert_that!(points.last().unwrap().date, eq(date(2025, 1, 1)));
}

#[test]
fn given_mid_month_start_when_projected_then_cursor_truncated_to_first() {
    let points = project(&two_phase_timeline(), date(2024, 1, 20), Some(date(2024, 3, 5)));

    let dates: Vec<NaiveDate> = points.iter().map(|p| p.date).collect();
    assert_eq!(dates, vec![date(2024, 1, 1), date(2024, 2, 1), date(2024, 3, 1)]);
}

#[test]
fn given_collapsed_window_when_projected_then_two_samples() {
    let points = project(&two_phase_timeline(), date(2024, 5, 10), Some(date(2024, 5, 10)));

    assert_that!(points.len(), eq(2));
    assert_that!(points[1].date, eq(date(2024, 6, 1)));
}

#[test]
fn given_end_before_start_when_projected_then_two_samples() {
    let points = project(&two_phase_timeline(), date(2024, 5, 1), Some(date(1990, 1, 1)));

    assert_that!(points.len(), eq(2));
}

#[test]
fn given_phase_before_window_when_projected_then_counted_fully_from_first_sample() {
    let phases = vec![
        phase(date(2020, 1, 1), date(2020, 6, 1), 40.0, 100.0),
        phase(date(2024, 3, 1), date(2024, 5, 1), 60.0, 0.0),
    ];

    let points = project(&phases, date(2024, 1, 1), Some(date(2024, 12, 31)));

    assert_that!(points[0].planned, eq(40));
    assert_that!(points[0].actual, eq(40));
}

#[test]
fn given_phase_after_window_when_projected_then_contributes_nothing() {
    let phases = vec![phase(date(2030, 1, 1), date(2030, 6, 1), 100.0, 100.0)];

    let points = project(&phases, date(2024, 1, 1), Some(date(2024, 12, 31)));

    assert!(points.iter().all(|p| p.planned == 0 && p.actual == 0));
}

#[test]
fn given_mid_phase_sample_when_projected_then_linearly_interpolated() {
    // 2024-01-01 .. 2024-03-01 is 60 days; 2024-02-01 is 31 days in
    let phases = vec![phase(date(2024, 1, 1), date(2024, 3, 1), 100.0, 50.0)];

    let points = project(&phases, date(2024, 1, 1), Some(date(2024, 3, 1)));
    let feb = sample_at(&points, date(2024, 2, 1));

    assert_that!(feb.planned, eq(52));
    assert_that!(feb.actual, eq(26));
}

#[test]
fn given_phase_without_dates_when_projected_then_contributes_nothing() {
    let phases = vec![
        Phase::blank("Unscheduled").with_progress(100.0),
        phase(date(2023, 1, 1), date(2023, 2, 1), 10.0, 100.0),
    ];

    let points = project(&phases, date(2024, 1, 1), Some(date(2024, 2, 1)));

    // Unscheduled weight still counts in the denominator
    assert_that!(points[0].planned, eq(50));
    assert_that!(points[0].actual, eq(50));
}

#[test]
fn given_empty_timeline_when_projected_then_flat_zero_curve() {
    let points = project(&[], date(2024, 1, 1), Some(date(2024, 4, 1)));

    assert_that!(points.len(), eq(4));
    assert!(points.iter().all(|p| p.planned == 0 && p.actual == 0));
}
