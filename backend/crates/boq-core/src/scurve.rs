//! Planned-vs-actual cumulative progress, sampled month by month.

use crate::Phase;
use crate::progress::total_weight;

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

/// Months covered when no window end is given
pub const DEFAULT_WINDOW_MONTHS: u32 = 12;

/// Longest window a caller may request
pub const MAX_WINDOW_MONTHS: u32 = 120;

/// The projection stops this many years past the window end no matter what
const MAX_YEARS_PAST_END: i32 = 5;

const MIN_SAMPLES: usize = 2;

/// One monthly sample of the S-curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SCurvePoint {
    pub date: NaiveDate,
    /// Cumulative planned percent
    pub planned: u8,
    /// Cumulative earned percent
    pub actual: u8,
}

/// Share of `value` a phase has delivered by day `at`, interpolated linearly
/// between its start and end dates.
fn interpolate(phase: &Phase, at: NaiveDate, value: f64) -> f64 {
    let (Some(start), Some(end)) = (phase.start, phase.end) else {
        return 0.0;
    };

    if at >= end {
        value
    } else if at > start {
        let elapsed = (at - start).num_days() as f64;
        let duration = (end - start).num_days() as f64;
        if duration > 0.0 {
            value * elapsed / duration
        } else {
            0.0
        }
    } else {
        0.0
    }
}

fn to_percent(value: f64, total: f64) -> u8 {
    (100.0 * value / total).round().clamp(0.0, 100.0) as u8
}

/// Sample planned and actual cumulative progress once per calendar month,
/// starting on the first of `start`'s month and running through `end`
/// (default: twelve months after `start`).
///
/// At least two samples are always produced.
pub fn project(phases: &[Phase], start: NaiveDate, end: Option<NaiveDate>) -> Vec<SCurvePoint> {
    let end = end.unwrap_or_else(|| {
        start
            .checked_add_months(Months::new(DEFAULT_WINDOW_MONTHS))
            .unwrap_or(NaiveDate::MAX)
    });
    let hard_stop = NaiveDate::from_ymd_opt(end.year().saturating_add(MAX_YEARS_PAST_END), 2, 1)
        .unwrap_or(NaiveDate::MAX);

    let total = match total_weight(phases) {
        w if w > 0.0 => w,
        _ => 100.0,
    };

    let mut points = Vec::new();
    let mut cursor = start.with_day(1).unwrap_or(start);

    while cursor <= end || points.len() < MIN_SAMPLES {
        let (planned, actual) = phases.iter().fold((0.0, 0.0), |(planned, actual), phase| {
            let weight = phase.effective_weight();
            let earned = phase.progress_fraction() * weight;
            (
                planned + interpolate(phase, cursor, weight),
                actual + interpolate(phase, cursor, earned),
            )
        });

        points.push(SCurvePoint {
            date: cursor,
            planned: to_percent(planned, total),
            actual: to_percent(actual, total),
        });

        cursor = match cursor.checked_add_months(Months::new(1)) {
            Some(next) => next,
            None => break,
        };
        if cursor > hard_stop && points.len() >= MIN_SAMPLES {
            break;
        }
    }

    points
}
