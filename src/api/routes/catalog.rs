//! Catalog Routes
//!
//! - GET /api/v1/catalog - Services, stylists and time slots

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::CatalogResponse;
use crate::api::state::AppState;

/// GET /api/v1/catalog
pub async fn get_catalog(State(state): State<Arc<AppState>>) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        services: state.catalog.services.clone(),
        stylists: state.catalog.stylists.clone(),
        time_slots: state.catalog.time_slots.clone(),
    })
}
