mod board_column;
mod document;
mod phase;
mod project;
