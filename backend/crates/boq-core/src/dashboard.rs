//! Read models for the overview screen.

use crate::progress::{is_complete, weighted_progress};
use crate::{ActivityEntry, Project};

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

/// Activities listed on the overview
pub const RECENT_ACTIVITY_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total: usize,
    /// Projects whose timeline is not entirely complete
    pub active: usize,
    /// Projects with at least one unfinished phase past its end date
    pub delayed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: Uuid,
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub progress: u8,
    pub task_count: usize,
}

pub fn stats(projects: &[Project], today: NaiveDate) -> DashboardStats {
    DashboardStats {
        total: projects.len(),
        active: projects.iter().filter(|p| !is_complete(&p.timeline)).count(),
        delayed: projects
            .iter()
            .filter(|p| p.timeline.iter().any(|phase| phase.is_overdue(today)))
            .count(),
    }
}

pub fn project_summaries(projects: &[Project]) -> Vec<ProjectSummary> {
    projects
        .iter()
        .map(|p| ProjectSummary {
            id: p.id,
            name: p.name.clone(),
            start_date: p.start_date,
            progress: weighted_progress(&p.timeline),
            task_count: p.tasks.len(),
        })
        .collect()
}

/// The newest `count` entries; the log is already newest-first
pub fn recent_activities(log: &[ActivityEntry], count: usize) -> &[ActivityEntry] {
    &log[..count.min(log.len())]
}
