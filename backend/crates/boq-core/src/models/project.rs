//! Project entity - a construction project with its board and BOQ timeline.

use crate::{BoardColumn, CreateProject, Phase, Task};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A project owns its Kanban columns, its tasks and its timeline phases.
/// Nested lists are only ever replaced wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, with = "crate::models::phase::optional_date")]
    pub start_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    #[serde(default = "BoardColumn::default_board")]
    pub columns: Vec<BoardColumn>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub timeline: Vec<Phase>,
}

impl Project {
    /// Create a project with the fixed four-stage board and no tasks or phases
    pub fn new(request: CreateProject) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: request.name,
            description: request.description,
            start_date: request.start_date,
            created_at: Utc::now(),
            columns: BoardColumn::default_board(),
            tasks: Vec::new(),
            timeline: Vec::new(),
        }
    }

    /// Column new tasks land in
    pub fn first_column(&self) -> Option<&BoardColumn> {
        self.columns.first()
    }

    pub fn column(&self, column_id: &str) -> Option<&BoardColumn> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    pub fn task(&self, task_id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }
}
