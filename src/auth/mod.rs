use crate::state::AppState;
use axum::Router;

pub(crate) mod dto;
mod error;
pub mod handlers;
mod password;
pub mod repo;
pub(crate) mod repo_types;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::auth_routes())
}
