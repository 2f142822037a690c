pub mod dashboard;
pub mod document;
pub mod error;
pub mod projects;
