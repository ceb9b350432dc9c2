use axum::{extract::State, Json};
use tracing::info;

use crate::contact::models::{ContactRequest, ContactResponse};
use crate::contact::validation::validate_submission;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/contact
pub async fn handle_contact(
    State(state): State<AppState>,
    Json(req): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    // Bots get the same answer as people so the trap stays invisible.
    if req.is_bot() {
        info!("Dropping contact submission caught by honeypot");
        return Ok(Json(ContactResponse::sent()));
    }

    let submission =
        validate_submission(&req).map_err(|e| AppError::Validation(e.to_string()))?;

    let relay = state.relay.as_ref().ok_or_else(|| {
        AppError::Configuration("WEB3FORMS_ACCESS_KEY is not configured".to_string())
    })?;

    relay.submit(&submission).await?;
    info!("Contact submission from {} relayed", submission.email);

    Ok(Json(ContactResponse::sent()))
}
