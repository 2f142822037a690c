pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod ws;


pub use api::error::{ApiError, Result as ApiResult};
pub use app_state::AppState;
pub use routes::build_router;
