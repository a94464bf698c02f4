pub mod dto;
pub mod handlers;
mod repo;
pub mod repo_types;
pub(crate) mod extractors;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::user_routes())
}
