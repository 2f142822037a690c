//! Computed per-project views: aggregate progress, S-curve and board.

use crate::{ApiError, ApiResult, AppState};

use boq_core::board::{column_counts, column_tasks};
use boq_core::progress::{completed_phase_count, weighted_progress};
use boq_core::scurve::{self, DEFAULT_WINDOW_MONTHS, MAX_WINDOW_MONTHS};
use boq_core::{BoardColumn, Project, SCurvePoint, Task};

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressResponse {
    pub project_id: Uuid,
    pub progress: u8,
    pub phase_count: usize,
    pub completed_phase_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct SCurveQuery {
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SCurveResponse {
    pub project_id: Uuid,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub points: Vec<SCurvePoint>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardColumnView {
    #[serde(flatten)]
    pub column: BoardColumn,
    pub task_count: usize,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardResponse {
    pub project_id: Uuid,
    pub columns: Vec<BoardColumnView>,
}

async fn find_project(state: &AppState, id: &str) -> ApiResult<Project> {
    let project_id = Uuid::parse_str(id)?;

    state
        .hub
        .snapshot()
        .await
        .projects
        .into_iter()
        .find(|p| p.id == project_id)
        .ok_or_else(|| ApiError::not_found(format!("Project {} not found", id)))
}

/// GET /api/v1/projects/{id}/progress
pub async fn get_progress(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProgressResponse>> {
    let project = find_project(&state, &id).await?;

    Ok(Json(ProgressResponse {
        project_id: project.id,
        progress: weighted_progress(&project.timeline),
        phase_count: project.timeline.len(),
        completed_phase_count: completed_phase_count(&project.timeline),
    }))
}

/// GET /api/v1/projects/{id}/s-curve?end=YYYY-MM-DD
///
/// Projects without a start date are charted from their creation day. The
/// window may span at most `MAX_WINDOW_MONTHS`.
pub async fn get_s_curve(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<SCurveQuery>,
) -> ApiResult<Json<SCurveResponse>> {
    let project = find_project(&state, &id).await?;

    let start = project
        .start_date
        .unwrap_or_else(|| project.created_at.date_naive());
    let end = query.end.unwrap_or_else(|| {
        start
            .checked_add_months(Months::new(DEFAULT_WINDOW_MONTHS))
            .unwrap_or(start)
    });

    let horizon = start
        .checked_add_months(Months::new(MAX_WINDOW_MONTHS))
        .unwrap_or(NaiveDate::MAX);
    if end > horizon {
        return Err(ApiError::validation(
            format!("Window end {end} is more than {MAX_WINDOW_MONTHS} months after {start}"),
            "end",
        ));
    }

    Ok(Json(SCurveResponse {
        project_id: project.id,
        start,
        end,
        points: scurve::project(&project.timeline, start, Some(end)),
    }))
}

/// GET /api/v1/projects/{id}/board
pub async fn get_board(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<BoardResponse>> {
    let project = find_project(&state, &id).await?;

    let columns = column_counts(&project)
        .into_iter()
        .filter_map(|(column_id, task_count)| {
            let column = project.column(&column_id)?;
            Some(BoardColumnView {
                column: column.clone(),
                task_count,
                tasks: column_tasks(&project, &column_id)
                    .into_iter()
                    .cloned()
                    .collect(),
            })
        })
        .collect();

    Ok(Json(BoardResponse {
        project_id: project.id,
        columns,
    }))
}
