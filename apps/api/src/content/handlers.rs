use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::profile::Profile;
use crate::state::AppState;

#[derive(Serialize)]
pub struct TodoReport {
    pub count: usize,
    pub todos: Vec<String>,
    pub loaded_at: DateTime<Utc>,
}

/// GET /api/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Result<Json<Profile>, AppError> {
    let loaded = state.profiles.get().await?;
    Ok(Json(loaded.profile.clone()))
}

/// GET /api/profile/todos
pub async fn handle_get_todos(State(state): State<AppState>) -> Result<Json<TodoReport>, AppError> {
    let loaded = state.profiles.get().await?;
    Ok(Json(TodoReport {
        count: loaded.todos.len(),
        todos: loaded.todos.clone(),
        loaded_at: loaded.loaded_at,
    }))
}
