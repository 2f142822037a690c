//! Typed requests for every write the dashboard can make.
//!
//! Each request validates its own required fields; the session applies it to
//! the current snapshot and pushes the replaced fields.

use crate::{CoreError, Member, Phase, Project, Result as CoreErrorResult};

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

#[track_caller]
fn require_text(field: &str, value: &str) -> CoreErrorResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(field, format!("{field} is required")));
    }
    Ok(())
}

#[track_caller]
fn require_email(value: &str) -> CoreErrorResult<()> {
    if !value.is_empty() && !value.contains('@') {
        return Err(CoreError::validation(
            "email",
            format!("Invalid email address: {value}"),
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    /// Project name (required)
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

impl CreateProject {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        require_text("name", &self.name)
    }
}

/// Partial project update; `None` fields keep their current value
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub tasks: Option<Vec<crate::Task>>,
    #[serde(default)]
    pub timeline: Option<Vec<Phase>>,
}

impl UpdateProject {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if let Some(name) = &self.name {
            require_text("name", name)?;
        }
        Ok(())
    }

    /// Merge the present fields over `project`, producing the replacement record
    pub fn apply(self, project: &Project) -> Project {
        Project {
            name: self.name.unwrap_or_else(|| project.name.clone()),
            description: self
                .description
                .unwrap_or_else(|| project.description.clone()),
            start_date: self.start_date.or(project.start_date),
            tasks: self.tasks.unwrap_or_else(|| project.tasks.clone()),
            timeline: self.timeline.unwrap_or_else(|| project.timeline.clone()),
            ..project.clone()
        }
    }
}

/// Replace the whole BOQ timeline of a project
#[derive(Debug, Clone, Deserialize)]
pub struct SaveTimeline {
    pub phases: Vec<Phase>,
}

impl SaveTimeline {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        for phase in &self.phases {
            require_text("title", &phase.title)?;
            if let (Some(start), Some(end)) = (phase.start, phase.end)
                && end < start
            {
                return Err(CoreError::validation(
                    "end",
                    format!("Phase '{}' ends before it starts", phase.title),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateMember {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub email: String,
}

impl CreateMember {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        require_text("name", &self.name)?;
        require_email(&self.email)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMember {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UpdateMember {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if let Some(name) = &self.name {
            require_text("name", name)?;
        }
        if let Some(email) = &self.email {
            require_email(email)?;
        }
        Ok(())
    }

    pub fn apply(self, member: &Member) -> Member {
        Member {
            id: member.id,
            name: self.name.unwrap_or_else(|| member.name.clone()),
            role: self.role.unwrap_or_else(|| member.role.clone()),
            email: self.email.unwrap_or_else(|| member.email.clone()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub title: String,
    #[serde(default, deserialize_with = "crate::models::task::optional_member_id::deserialize")]
    pub assignee: Option<Uuid>,
}

impl CreateTask {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        require_text("title", &self.title)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveTask {
    pub task_id: Uuid,
    pub column_id: String,
}

impl MoveTask {
    /// The target column must exist on the project's board
    #[track_caller]
    pub fn validate(&self, project: &Project) -> CoreErrorResult<()> {
        if project.column(&self.column_id).is_none() {
            return Err(CoreError::not_found("Column", &self.column_id));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignTask {
    pub task_id: Uuid,
    #[serde(default, deserialize_with = "crate::models::task::optional_member_id::deserialize")]
    pub assignee: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskNote {
    pub task_id: Uuid,
    pub note: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTask {
    pub task_id: Uuid,
}
