use axum::{
    extract::{Query, State},
    Json,
};
use section_tracker::{NavLink, SectionDescriptor};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SectionsQuery {
    /// Page the navbar is rendered on. Defaults to the section page.
    pub path: Option<String>,
    pub active: Option<String>,
}

#[derive(Serialize)]
pub struct SectionManifest {
    pub section_page: String,
    pub landing: String,
    pub descriptors: Vec<SectionDescriptor>,
    pub links: Vec<NavLink>,
}

/// GET /api/sections
pub async fn handle_get_sections(
    State(state): State<AppState>,
    Query(params): Query<SectionsQuery>,
) -> Result<Json<SectionManifest>, AppError> {
    let registry = &state.sections;
    let path = params
        .path
        .unwrap_or_else(|| registry.section_page().to_string());
    if !path.starts_with('/') {
        return Err(AppError::Validation(format!(
            "path '{path}' must be absolute"
        )));
    }

    if let Some(active) = params.active.as_deref() {
        if !registry.is_section(active) {
            return Err(AppError::NotFound(format!("Unknown section '{active}'")));
        }
    }

    Ok(Json(SectionManifest {
        section_page: registry.section_page().to_string(),
        landing: registry.landing().id.clone(),
        descriptors: registry.descriptors().to_vec(),
        links: registry.nav_links(&path, params.active.as_deref()),
    }))
}
