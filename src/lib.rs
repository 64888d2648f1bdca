//! # Barbershop
//!
//! Website for a barbershop: a landing page with an online-booking dialog
//! and an analytics dashboard fed by a remote JSON endpoint.
//!
//! ## Features
//!
//! - **Booking dialog**: pure reducer over `Closed | Open{selection}` with
//!   all-fields-required submission and a no-past-dates policy
//! - **Analytics**: one fetch per visit, explicit `Idle → Loading →
//!   Loaded | Failed` view state, chart-ready shaping
//! - **Server-rendered pages**: Leptos components rendered to HTML, with
//!   inline SVG charts, served by Axum
//! - **JSON API**: catalog, simulated bookings and shaped analytics
//!
//! ## Modules
//!
//! - [`catalog`]: Services, stylists and time slots
//! - [`booking`]: Booking dialog state and date policy
//! - [`analytics`]: Snapshot model, fetching, view state and shaping
//! - [`web`]: Leptos components rendered on the server
//! - [`api`]: HTTP server with Axum
//!
//! ## Quick Start
//!
//! ```rust
//! use barbershop::booking::{BookingDialog, SubmitOutcome};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
//!
//! let dialog = BookingDialog::Closed
//!     .select_service("Классическая стрижка")
//!     .select_stylist("Александр Иванов")
//!     .select_time("10:00")
//!     .select_date(today, today)
//!     .unwrap();
//!
//! let (dialog, outcome) = dialog.submit();
//! assert!(matches!(outcome, SubmitOutcome::Accepted(_)));
//! assert!(!dialog.is_open());
//! ```

pub mod analytics;
pub mod api;
pub mod booking;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod web;

// Re-export top-level types for convenience
pub use analytics::{
    AnalyticsError, AnalyticsSnapshot, AnalyticsSource, AnalyticsView, DateLocale,
    HttpAnalyticsSource, ViewState,
};

pub use api::{build_router, serve, ApiError, AppState};

pub use booking::{
    Booking, BookingDialog, BookingError, BookingSelection, Notification, SubmitOutcome,
};

pub use catalog::{Catalog, Service, Stylist};

pub use config::{AnalyticsConfig, Config, ConfigError, LoadReport, LoggingConfig, ServerConfig};
