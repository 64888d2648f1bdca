//! Booking Routes
//!
//! Simulated booking submission. Nothing is stored: an accepted booking is
//! logged and confirmed back to the caller.
//!
//! - POST /api/v1/bookings - Submit the booking dialog as JSON

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{BookingRequest, BookingResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::booking::{
    parse_date, Booking, BookingDialog, BookingError, BookingSelection, Notification,
    SubmitOutcome,
};

/// What a submission did to the dialog
#[derive(Debug)]
pub struct Submission {
    /// Dialog after the attempt: `Closed` on success, still open otherwise
    pub dialog: BookingDialog,
    /// Toast for the user
    pub notification: Notification,
    /// The accepted booking, if any
    pub booking: Option<Booking>,
    /// Why the input was rejected, when a booking rule failed
    pub rejection: Option<BookingError>,
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}

/// Run a dialog submission through the booking rules.
///
/// The selection is rebuilt from the request, the date goes through the
/// date policy, names are checked against the catalog, and only then is
/// the dialog submitted.
pub fn process_submission(state: &AppState, req: BookingRequest) -> Submission {
    let dialog = BookingDialog::open_with(BookingSelection {
        service: non_empty(req.service),
        stylist: non_empty(req.stylist),
        date: None,
        time: non_empty(req.time),
    });

    let dialog = match non_empty(req.date) {
        None => dialog,
        Some(raw) => {
            let picked = parse_date(&raw)
                .and_then(|date| dialog.clone().select_date(date, state.today()));
            match picked {
                Ok(picked) => picked,
                Err(e) => {
                    tracing::debug!(error = %e, "Booking date rejected");
                    return Submission {
                        notification: e.notification(),
                        dialog,
                        booking: None,
                        rejection: Some(e),
                    };
                }
            }
        }
    };

    if let Some(Err(e)) = dialog.selection().map(|s| s.check_catalog(&state.catalog)) {
        tracing::debug!(error = %e, "Booking selection rejected");
        return Submission {
            notification: e.notification(),
            dialog,
            booking: None,
            rejection: Some(e),
        };
    }

    let (dialog, outcome) = dialog.submit();
    let notification = outcome.notification();

    let booking = match outcome {
        SubmitOutcome::Accepted(booking) => {
            tracing::info!(
                service = %booking.service,
                stylist = %booking.stylist,
                date = %booking.date,
                time = %booking.time,
                "Booking accepted (simulated, not persisted)"
            );
            Some(booking)
        }
        SubmitOutcome::Incomplete { missing } => {
            tracing::debug!(?missing, "Incomplete booking submission");
            None
        }
    };

    Submission {
        dialog,
        notification,
        booking,
        rejection: None,
    }
}

/// POST /api/v1/bookings
///
/// Validate and accept a booking. Returns 400 `BOOKING_ERROR` when a
/// booking rule rejects the input, and 400 `VALIDATION_ERROR` with the
/// missing fields when the selection is incomplete.
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BookingRequest>,
) -> ApiResult<Json<BookingResponse>> {
    let submission = process_submission(&state, req);

    if let Some(e) = submission.rejection {
        return Err(ApiError::Booking(e));
    }

    match submission.booking {
        Some(booking) => Ok(Json(BookingResponse {
            status: "accepted".to_string(),
            message: submission.notification.message,
            booking,
        })),
        None => {
            let missing = submission
                .dialog
                .selection()
                .map(BookingSelection::missing_fields)
                .unwrap_or_default();
            let message = if missing.is_empty() {
                submission.notification.message
            } else {
                let fields: Vec<String> = missing.iter().map(|f| f.to_string()).collect();
                format!(
                    "{} (missing: {})",
                    submission.notification.message,
                    fields.join(", ")
                )
            };
            Err(ApiError::Validation(message))
        }
    }
}
