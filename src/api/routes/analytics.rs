//! Analytics Routes
//!
//! - GET /api/v1/analytics - Display-ready analytics rows

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::analytics::{
    render_stylist_load, render_totals, shape_hourly, shape_timeline, AnalyticsView, ViewState,
};
use crate::api::dto::AnalyticsResponse;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// GET /api/v1/analytics
///
/// Fetch the upstream snapshot once and return it shaped for charts.
pub async fn get_analytics(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<AnalyticsResponse>> {
    let mut view = AnalyticsView::new();

    match view.load(state.analytics.as_ref()).await {
        ViewState::Loaded(snapshot) => Ok(Json(AnalyticsResponse {
            timeline: shape_timeline(snapshot, state.locale),
            hourly: shape_hourly(snapshot),
            totals: render_totals(snapshot).into(),
            stylists: render_stylist_load(snapshot),
        })),
        ViewState::Failed(_) => Err(ApiError::Upstream),
        ViewState::Idle | ViewState::Loading => Err(ApiError::Internal(
            "analytics view did not finish loading".to_string(),
        )),
    }
}
