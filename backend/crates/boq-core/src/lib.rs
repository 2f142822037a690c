pub mod board;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod progress;
pub mod requests;
pub mod scurve;
pub mod time_ago;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::activity_entry::{ACTIVITY_LOG_CAPACITY, ActivityEntry, push_activity};
pub use models::board_column::{BoardColumn, ColumnStage};
pub use models::document::{Document, DocumentPatch};
pub use models::member::Member;
pub use models::phase::Phase;
pub use models::project::Project;
pub use models::task::Task;
pub use models::view_mode::ViewMode;
pub use requests::{
    AssignTask, CreateMember, CreateProject, CreateTask, DeleteTask, MoveTask, SaveTimeline,
    UpdateMember, UpdateProject, UpdateTaskNote,
};
pub use scurve::SCurvePoint;
