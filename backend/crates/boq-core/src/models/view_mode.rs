use crate::{CoreError, ErrorLocation, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Who is operating the dashboard; decides the actor label on activity entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Admin,
    Contractor,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Contractor => "contractor",
        }
    }

    pub fn actor_label(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Contractor => "Site User",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Admin => Self::Contractor,
            Self::Contractor => Self::Admin,
        }
    }

    /// Only admins may edit the BOQ timeline
    pub fn can_edit_timeline(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl FromStr for ViewMode {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "admin" => Ok(Self::Admin),
            "contractor" => Ok(Self::Contractor),
            _ => Err(CoreError::InvalidViewMode {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
