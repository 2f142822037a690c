//! The shared document and the partial snapshots merged into it.

use crate::{ActivityEntry, Member, Project};

use serde::{Deserialize, Serialize};

/// Everything one deployment stores: projects, members and the recent-activity log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub activities: Vec<ActivityEntry>,
}

/// Partial snapshot pushed by a writer.
///
/// Present fields replace the stored field wholesale, absent fields are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<Member>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<ActivityEntry>>,
}

impl Document {
    pub fn project(&self, id: uuid::Uuid) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn member(&self, id: uuid::Uuid) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Field-level last-write-wins merge
    pub fn merge(&mut self, patch: DocumentPatch) {
        if let Some(projects) = patch.projects {
            self.projects = projects;
        }
        if let Some(members) = patch.members {
            self.members = members;
        }
        if let Some(activities) = patch.activities {
            self.activities = activities;
        }
    }
}

impl DocumentPatch {
    pub fn is_empty(&self) -> bool {
        self.projects.is_none() && self.members.is_none() && self.activities.is_none()
    }

    pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
        self.projects = Some(projects);
        self
    }

    pub fn with_members(mut self, members: Vec<Member>) -> Self {
        self.members = Some(members);
        self
    }

    pub fn with_activities(mut self, activities: Vec<ActivityEntry>) -> Self {
        self.activities = Some(activities);
        self
    }
}
