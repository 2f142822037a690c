mod models;
mod scurve;

use crate::Phase;

use chrono::NaiveDate;

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub(crate) fn phase(start: NaiveDate, end: NaiveDate, weight: f64, progress: f64) -> Phase {
    Phase::new("Phase", start, end, weight).with_progress(progress)
}

/// Two equal halves: the first finished, the second not started
pub(crate) fn two_phase_timeline() -> Vec<Phase> {
    vec![
        phase(date(2024, 1, 1), date(2024, 2, 1), 50.0, 100.0),
        phase(date(2024, 2, 1), date(2024, 3, 1), 50.0, 0.0),
    ]
}
