use crate::{Project, Task};

/// Tasks shown in one Kanban column, in board order
pub fn column_tasks<'a>(project: &'a Project, column_id: &str) -> Vec<&'a Task> {
    project
        .tasks
        .iter()
        .filter(|t| t.column_id == column_id)
        .collect()
}

/// `(column id, task count)` for every column, in column order
pub fn column_counts(project: &Project) -> Vec<(String, usize)> {
    project
        .columns
        .iter()
        .map(|c| (c.id.clone(), column_tasks(project, &c.id).len()))
        .collect()
}
