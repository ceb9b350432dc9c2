pub mod health;
pub mod sections;

use axum::{
    routing::{get, post},
    Router,
};

use crate::contact::handlers as contact;
use crate::content::handlers as content;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Content
        .route("/api/profile", get(content::handle_get_profile))
        .route("/api/profile/todos", get(content::handle_get_todos))
        // Navigation
        .route("/api/sections", get(sections::handle_get_sections))
        // Contact
        .route("/api/contact", post(contact::handle_contact))
        .with_state(state)
}
