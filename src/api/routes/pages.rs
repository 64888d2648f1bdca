//! Page Routes
//!
//! Server-rendered HTML pages.
//!
//! - GET / - Landing page (optionally with the booking dialog open)
//! - POST /booking - Booking dialog form submission
//! - GET /analytics - Analytics dashboard

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Form,
};
use std::sync::Arc;

use crate::analytics::AnalyticsView;
use crate::api::dto::{BookingRequest, LandingQuery};
use crate::api::routes::bookings::process_submission;
use crate::api::state::AppState;
use crate::booking::{BookingDialog, BookingSelection};
use crate::web::{analytics_page, landing::LandingPage};

/// GET /
///
/// Landing page. `book`, `service` or `stylist` in the query string open
/// the booking dialog; known names are preselected, unknown ones ignored.
pub async fn landing(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LandingQuery>,
) -> Html<String> {
    let wants_dialog = query.book.is_some() || query.service.is_some() || query.stylist.is_some();

    let dialog = if wants_dialog {
        let service = query
            .service
            .filter(|name| state.catalog.service(name).is_some());
        let stylist = query
            .stylist
            .filter(|name| state.catalog.stylist(name).is_some());
        BookingDialog::open_with(BookingSelection {
            service,
            stylist,
            ..Default::default()
        })
    } else {
        BookingDialog::Closed
    };

    Html(
        LandingPage {
            catalog: &state.catalog,
            dialog: &dialog,
            notification: None,
            today: state.today(),
        }
        .render(),
    )
}

/// POST /booking
///
/// Submit the booking dialog. The page comes back with a toast; the
/// dialog is closed on success and stays open with the entered values
/// otherwise.
pub async fn submit_booking(
    State(state): State<Arc<AppState>>,
    Form(req): Form<BookingRequest>,
) -> Html<String> {
    let submission = process_submission(&state, req);

    Html(
        LandingPage {
            catalog: &state.catalog,
            dialog: &submission.dialog,
            notification: Some(&submission.notification),
            today: state.today(),
        }
        .render(),
    )
}

/// GET /analytics
///
/// Fetches the snapshot once for this visit and renders the dashboard,
/// or the static error page when the fetch fails.
pub async fn analytics(State(state): State<Arc<AppState>>) -> (StatusCode, Html<String>) {
    let mut view = AnalyticsView::new();
    view.load(state.analytics.as_ref()).await;

    let status = if view.state().is_failed() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    };

    (status, Html(analytics_page::render(view.state(), state.locale)))
}
