use crate::CreateTask;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A card on the project's Kanban board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    /// Member id, or none when unassigned
    #[serde(default, with = "optional_member_id")]
    pub assignee: Option<Uuid>,
    pub column_id: String,
    /// Free-text progress/issue note
    #[serde(default)]
    pub note: String,
}

impl Task {
    pub fn new(request: CreateTask, column_id: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: request.title,
            assignee: request.assignee,
            column_id,
            note: String::new(),
        }
    }
}

/// Browser clients write an empty string for "unassigned".
pub(crate) mod optional_member_id {
    use serde::{Deserialize, Deserializer, Serializer};
    use uuid::Uuid;

    pub fn serialize<S>(id: &Option<Uuid>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match id {
            Some(id) => serializer.collect_str(id),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Uuid>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => Uuid::parse_str(s).map(Some).map_err(serde::de::Error::custom),
        }
    }
}
