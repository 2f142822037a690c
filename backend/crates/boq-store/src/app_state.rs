//! Client-side state and the pure reducer that drives it.

use boq_core::{ActivityEntry, Document, Member, Project, ViewMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    /// Waiting for the first snapshot
    #[default]
    Connecting,
    /// At least one snapshot received and the subscription is healthy
    Live,
    /// The subscription failed; writes are dropped
    Offline,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub projects: Vec<Project>,
    pub members: Vec<Member>,
    pub activities: Vec<ActivityEntry>,
    pub view_mode: ViewMode,
    pub connection: ConnectionStatus,
}

impl AppState {
    pub fn loading(&self) -> bool {
        self.connection == ConnectionStatus::Connecting
    }

    pub fn online(&self) -> bool {
        self.connection == ConnectionStatus::Live
    }

    pub fn project(&self, id: uuid::Uuid) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn member(&self, id: uuid::Uuid) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SyncData(Document),
    SetViewMode(ViewMode),
    SetOffline,
}

/// Next state for `action`. A snapshot replaces all three collections and
/// marks the session live.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        Action::SyncData(document) => AppState {
            projects: document.projects,
            members: document.members,
            activities: document.activities,
            connection: ConnectionStatus::Live,
            ..state
        },
        Action::SetViewMode(view_mode) => AppState { view_mode, ..state },
        Action::SetOffline => AppState {
            connection: ConnectionStatus::Offline,
            ..state
        },
    }
}
