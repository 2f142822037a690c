pub mod activity_entry;
pub mod board_column;
pub mod document;
pub mod member;
pub mod phase;
pub mod project;
pub mod task;
pub mod view_mode;
