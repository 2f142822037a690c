//! Earned-value aggregation over a BOQ timeline.

use crate::Phase;

/// Sum of effective phase weights
pub fn total_weight(phases: &[Phase]) -> f64 {
    phases.iter().map(Phase::effective_weight).sum()
}

/// Sum of `progress/100 * weight` over all phases
pub fn earned_value(phases: &[Phase]) -> f64 {
    phases
        .iter()
        .map(|p| p.progress_fraction() * p.effective_weight())
        .sum()
}

/// Percent complete of the whole project, weighted by phase.
///
/// An empty timeline (or one whose weights are all zero) is 0% complete.
pub fn weighted_progress(phases: &[Phase]) -> u8 {
    let total = total_weight(phases);
    let total = if total > 0.0 { total } else { 1.0 };

    let percent = (100.0 * earned_value(phases) / total).round();
    percent.clamp(0.0, 100.0) as u8
}

pub fn completed_phase_count(phases: &[Phase]) -> usize {
    phases.iter().filter(|p| p.is_complete()).count()
}

/// Every phase at 100%; a project with no phases yet has nothing outstanding
pub fn is_complete(phases: &[Phase]) -> bool {
    phases.iter().all(Phase::is_complete)
}
