use crate::AppState;

use boq_core::ActivityEntry;
use boq_core::dashboard::{
    DashboardStats, ProjectSummary, RECENT_ACTIVITY_COUNT, project_summaries, recent_activities,
    stats,
};
use boq_core::time_ago::format_time_ago;

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// Date overdue phases are measured against (default: today, UTC)
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    #[serde(flatten)]
    pub entry: ActivityEntry,
    pub time_ago: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub projects: Vec<ProjectSummary>,
    pub recent_activities: Vec<RecentActivity>,
}

/// GET /api/v1/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Json<DashboardResponse> {
    let document = state.hub.snapshot().await;
    let now = Utc::now();
    let today = query.today.unwrap_or_else(|| now.date_naive());

    let recent_activities = recent_activities(&document.activities, RECENT_ACTIVITY_COUNT)
        .iter()
        .map(|entry| RecentActivity {
            entry: entry.clone(),
            time_ago: format_time_ago(entry.timestamp, now),
        })
        .collect();

    Json(DashboardResponse {
        stats: stats(&document.projects, today),
        projects: project_summaries(&document.projects),
        recent_activities,
    })
}
