//! Data Transfer Objects
//!
//! Request and response types for the HTTP endpoints.
//! These types are serialized/deserialized to/from JSON or form bodies.

use serde::{Deserialize, Serialize};

use crate::analytics::{HourlyRow, StylistLoadRow, TimelineRow, TotalsSummary};
use crate::booking::Booking;
use crate::catalog::{Service, Stylist};

// ============================================
// BOOKING DTOs
// ============================================

/// Booking dialog submission, from the HTML form or JSON.
///
/// Every field is optional so that incomplete submissions reach the
/// booking validation instead of failing deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct BookingRequest {
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub stylist: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
}

/// Accepted booking response
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    /// Always "accepted"
    pub status: String,
    pub message: String,
    pub booking: Booking,
}

/// Landing page query string
#[derive(Debug, Default, Deserialize)]
pub struct LandingQuery {
    /// Any value opens the booking dialog
    #[serde(default)]
    pub book: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub stylist: Option<String>,
}

// ============================================
// CATALOG DTOs
// ============================================

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub services: Vec<Service>,
    pub stylists: Vec<Stylist>,
    pub time_slots: Vec<String>,
}

// ============================================
// ANALYTICS DTOs
// ============================================

/// Display-ready analytics
#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub timeline: Vec<TimelineRow>,
    pub hourly: Vec<HourlyRow>,
    pub totals: TotalsDto,
    pub stylists: Vec<StylistLoadRow>,
}

/// Summary cards with their caption labels
#[derive(Debug, Serialize)]
pub struct TotalsDto {
    #[serde(flatten)]
    pub summary: TotalsSummary,
    pub completed_label: String,
    pub cancelled_label: String,
}

impl From<TotalsSummary> for TotalsDto {
    fn from(summary: TotalsSummary) -> Self {
        Self {
            completed_label: summary.completed_label(),
            cancelled_label: summary.cancelled_label(),
            summary,
        }
    }
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub services: usize,
    pub stylists: usize,
    pub uptime_seconds: u64,
    pub version: String,
}
