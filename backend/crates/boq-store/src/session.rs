//! A client session: local state fed by a subscription, plus the write
//! operations that turn user intent into document patches.

use crate::{Action, AppState, Result, StoreError, Subscription, SyncBackend, SyncEvent, reduce};

use boq_core::{
    ACTIVITY_LOG_CAPACITY, ActivityEntry, AssignTask, CoreError, CreateMember, CreateProject,
    CreateTask, DeleteTask, DocumentPatch, Member, MoveTask, Phase, Project, SaveTimeline, Task,
    UpdateMember, UpdateProject, UpdateTaskNote, push_activity,
};

use uuid::Uuid;

/// What happened to a write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    Sent,
    /// The session was not live; nothing was written
    Dropped,
    /// The request matched the current state; nothing was written
    Unchanged,
}

/// Writes never touch `state` directly. It only changes when the snapshot
/// produced by the write comes back through the subscription.
pub struct Session<B> {
    backend: B,
    state: AppState,
    subscription: Option<Subscription>,
    activity_capacity: usize,
}

impl<B: SyncBackend> Session<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: AppState::default(),
            subscription: None,
            activity_capacity: ACTIVITY_LOG_CAPACITY,
        }
    }

    pub fn with_activity_capacity(mut self, capacity: usize) -> Self {
        self.activity_capacity = capacity.max(1);
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
    }

    /// Subscribe to the backend. On failure the session goes offline.
    pub async fn connect(&mut self) -> Result<()> {
        match self.backend.subscribe().await {
            Ok(subscription) => {
                self.subscription = Some(subscription);
                Ok(())
            }
            Err(e) => {
                log::error!("Sync subscription failed: {}", e);
                self.dispatch(Action::SetOffline);
                Err(e)
            }
        }
    }

    /// Wait for the next sync event and fold it into the state.
    ///
    /// Returns `false` once there is no subscription left to read from.
    pub async fn pump(&mut self) -> bool {
        let Some(subscription) = self.subscription.as_mut() else {
            return false;
        };

        match subscription.next().await {
            SyncEvent::Snapshot(document) => self.dispatch(Action::SyncData(document)),
            SyncEvent::Failed(reason) => {
                log::error!("Sync subscription ended: {}", reason);
                self.subscription = None;
                self.dispatch(Action::SetOffline);
            }
        }

        true
    }

    pub fn toggle_view_mode(&mut self) {
        let next = self.state.view_mode.toggled();
        self.dispatch(Action::SetViewMode(next));
    }

    pub async fn create_project(&self, request: CreateProject) -> Result<PushOutcome> {
        request.validate()?;
        if self.dropping("create_project") {
            return Ok(PushOutcome::Dropped);
        }

        let message = format!("Created project: {}", request.name);
        let mut projects = self.state.projects.clone();
        projects.push(Project::new(request));

        let patch = DocumentPatch::default()
            .with_projects(projects)
            .with_activities(self.log_activity(message));
        self.push(patch).await
    }

    /// Merge the present fields into the project. Logs `log_message` when
    /// given, otherwise a generic entry if the task list was replaced.
    pub async fn update_project(
        &self,
        project_id: Uuid,
        request: UpdateProject,
        log_message: Option<&str>,
    ) -> Result<PushOutcome> {
        request.validate()?;
        if self.dropping("update_project") {
            return Ok(PushOutcome::Dropped);
        }

        let project = self.project(project_id)?;
        let message = match log_message {
            Some(message) => Some(message.to_string()),
            None if request.tasks.is_some() => Some(String::from("Updated project tasks")),
            None => None,
        };

        self.commit_project(request.apply(project), message).await
    }

    /// Replace the BOQ timeline. Site users may only change phase progress.
    pub async fn save_timeline(&self, project_id: Uuid, request: SaveTimeline) -> Result<PushOutcome> {
        request.validate()?;
        if self.dropping("save_timeline") {
            return Ok(PushOutcome::Dropped);
        }

        let project = self.project(project_id)?;
        if !self.state.view_mode.can_edit_timeline()
            && !same_structure(&project.timeline, &request.phases)
        {
            return Err(CoreError::validation(
                "timeline",
                "Site users may only update phase progress",
            )
            .into());
        }

        let updated = Project {
            timeline: request.phases,
            ..project.clone()
        };
        self.commit_project(updated, Some(String::from("Updated construction timeline")))
            .await
    }

    /// New tasks always land in the board's first column.
    pub async fn create_task(&self, project_id: Uuid, request: CreateTask) -> Result<PushOutcome> {
        request.validate()?;
        if self.dropping("create_task") {
            return Ok(PushOutcome::Dropped);
        }

        let project = self.project(project_id)?;
        let column = project
            .first_column()
            .ok_or_else(|| CoreError::not_found("Column", "first"))?;

        let message = format!("Added task: {}", request.title);
        let mut tasks = project.tasks.clone();
        tasks.push(Task::new(request, column.id.clone()));

        self.commit_tasks(project, tasks, message).await
    }

    pub async fn update_task_note(
        &self,
        project_id: Uuid,
        request: UpdateTaskNote,
    ) -> Result<PushOutcome> {
        if self.dropping("update_task_note") {
            return Ok(PushOutcome::Dropped);
        }

        let project = self.project(project_id)?;
        let task = find_task(project, request.task_id)?;
        if task.note == request.note {
            log::debug!("Note for task {} unchanged, skipping write", task.id);
            return Ok(PushOutcome::Unchanged);
        }
        let message = format!("Updated task: {}", task.title);

        let tasks = replace_task(
            project,
            Task {
                note: request.note,
                ..task.clone()
            },
        );
        self.commit_tasks(project, tasks, message).await
    }

    pub async fn assign_task(&self, project_id: Uuid, request: AssignTask) -> Result<PushOutcome> {
        if self.dropping("assign_task") {
            return Ok(PushOutcome::Dropped);
        }

        let project = self.project(project_id)?;
        let task = find_task(project, request.task_id)?;
        if let Some(member_id) = request.assignee
            && self.state.member(member_id).is_none()
        {
            return Err(CoreError::not_found("Member", member_id).into());
        }

        let message = format!("Reassigned task: {}", task.title);
        let tasks = replace_task(
            project,
            Task {
                assignee: request.assignee,
                ..task.clone()
            },
        );
        self.commit_tasks(project, tasks, message).await
    }

    pub async fn move_task(&self, project_id: Uuid, request: MoveTask) -> Result<PushOutcome> {
        if self.dropping("move_task") {
            return Ok(PushOutcome::Dropped);
        }

        let project = self.project(project_id)?;
        request.validate(project)?;
        let task = find_task(project, request.task_id)?;
        let column_name = project
            .column(&request.column_id)
            .map(|c| c.name.clone())
            .unwrap_or_default();

        let message = format!("Moved task: {} to {}", task.title, column_name);
        let tasks = replace_task(
            project,
            Task {
                column_id: request.column_id,
                ..task.clone()
            },
        );
        self.commit_tasks(project, tasks, message).await
    }

    /// Removes exactly the task with the given id.
    pub async fn delete_task(&self, project_id: Uuid, request: DeleteTask) -> Result<PushOutcome> {
        if self.dropping("delete_task") {
            return Ok(PushOutcome::Dropped);
        }

        let project = self.project(project_id)?;
        let task = find_task(project, request.task_id)?;
        let message = format!("Deleted task: {}", task.title);

        let tasks = project
            .tasks
            .iter()
            .filter(|t| t.id != request.task_id)
            .cloned()
            .collect();
        self.commit_tasks(project, tasks, message).await
    }

    pub async fn add_member(&self, request: CreateMember) -> Result<PushOutcome> {
        request.validate()?;
        if self.dropping("add_member") {
            return Ok(PushOutcome::Dropped);
        }

        let message = format!("Added team member: {}", request.name);
        let mut members = self.state.members.clone();
        members.push(Member::new(request));

        let patch = DocumentPatch::default()
            .with_members(members)
            .with_activities(self.log_activity(message));
        self.push(patch).await
    }

    pub async fn update_member(&self, member_id: Uuid, request: UpdateMember) -> Result<PushOutcome> {
        request.validate()?;
        if self.dropping("update_member") {
            return Ok(PushOutcome::Dropped);
        }

        let member = self
            .state
            .member(member_id)
            .ok_or_else(|| CoreError::not_found("Member", member_id))?;
        let updated = request.apply(member);

        let members = self
            .state
            .members
            .iter()
            .map(|m| if m.id == member_id { updated.clone() } else { m.clone() })
            .collect();
        self.push(DocumentPatch::default().with_members(members))
            .await
    }

    /// Tasks assigned to the member keep the dangling id.
    pub async fn delete_member(&self, member_id: Uuid) -> Result<PushOutcome> {
        if self.dropping("delete_member") {
            return Ok(PushOutcome::Dropped);
        }

        self.state
            .member(member_id)
            .ok_or_else(|| CoreError::not_found("Member", member_id))?;

        let members = self
            .state
            .members
            .iter()
            .filter(|m| m.id != member_id)
            .cloned()
            .collect();
        self.push(DocumentPatch::default().with_members(members))
            .await
    }

    fn dropping(&self, operation: &str) -> bool {
        if self.state.online() {
            return false;
        }
        log::warn!(
            "Dropping {}: session is {:?}",
            operation,
            self.state.connection
        );
        true
    }

    fn project(&self, project_id: Uuid) -> Result<&Project> {
        self.state
            .project(project_id)
            .ok_or_else(|| StoreError::from(CoreError::not_found("Project", project_id)))
    }

    fn log_activity(&self, text: String) -> Vec<ActivityEntry> {
        push_activity(
            &self.state.activities,
            ActivityEntry::new(text, self.state.view_mode),
            self.activity_capacity,
        )
    }

    async fn commit_tasks(
        &self,
        project: &Project,
        tasks: Vec<Task>,
        message: String,
    ) -> Result<PushOutcome> {
        let updated = Project {
            tasks,
            ..project.clone()
        };
        self.commit_project(updated, Some(message)).await
    }

    async fn commit_project(&self, updated: Project, message: Option<String>) -> Result<PushOutcome> {
        let projects = self
            .state
            .projects
            .iter()
            .map(|p| if p.id == updated.id { updated.clone() } else { p.clone() })
            .collect();

        let mut patch = DocumentPatch::default().with_projects(projects);
        if let Some(message) = message {
            patch = patch.with_activities(self.log_activity(message));
        }
        self.push(patch).await
    }

    async fn push(&self, patch: DocumentPatch) -> Result<PushOutcome> {
        self.backend.push(patch).await?;
        Ok(PushOutcome::Sent)
    }
}

fn find_task(project: &Project, task_id: Uuid) -> Result<&Task> {
    project
        .task(task_id)
        .ok_or_else(|| StoreError::from(CoreError::not_found("Task", task_id)))
}

fn replace_task(project: &Project, updated: Task) -> Vec<Task> {
    project
        .tasks
        .iter()
        .map(|t| if t.id == updated.id { updated.clone() } else { t.clone() })
        .collect()
}

/// True when only progress differs between the two timelines
fn same_structure(current: &[Phase], proposed: &[Phase]) -> bool {
    current.len() == proposed.len()
        && current.iter().zip(proposed).all(|(a, b)| {
            a.title == b.title && a.start == b.start && a.end == b.end && a.weight == b.weight
        })
}
