use crate::{CoreError, ErrorLocation, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Workflow stage of a Kanban column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColumnStage {
    #[default]
    Pending,
    InProgress,
    Review,
    Done,
}

impl ColumnStage {
    pub const ALL: [ColumnStage; 4] = [
        ColumnStage::Pending,
        ColumnStage::InProgress,
        ColumnStage::Review,
        ColumnStage::Done,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Review => "review",
            Self::Done => "done",
        }
    }

    /// Stable column id used by the fixed board
    pub fn column_id(&self) -> &'static str {
        match self {
            Self::Pending => "c1",
            Self::InProgress => "c2",
            Self::Review => "c3",
            Self::Done => "c4",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Done => "Done",
        }
    }

    /// Background colour token understood by the dashboard front end
    pub fn color(&self) -> &'static str {
        match self {
            Self::Pending => "bg-slate-100",
            Self::InProgress => "bg-blue-50",
            Self::Review => "bg-amber-50",
            Self::Done => "bg-emerald-50",
        }
    }
}

impl FromStr for ColumnStage {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "review" => Ok(Self::Review),
            "done" => Ok(Self::Done),
            _ => Err(CoreError::InvalidColumnStage {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ColumnStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One column of a project's Kanban board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardColumn {
    pub id: String,
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub stage: ColumnStage,
}

impl BoardColumn {
    pub fn for_stage(stage: ColumnStage) -> Self {
        Self {
            id: stage.column_id().to_string(),
            name: stage.display_name().to_string(),
            color: stage.color().to_string(),
            stage,
        }
    }

    /// The fixed pending / in-progress / review / done board every project starts with
    pub fn default_board() -> Vec<BoardColumn> {
        ColumnStage::ALL.into_iter().map(Self::for_stage).collect()
    }
}
