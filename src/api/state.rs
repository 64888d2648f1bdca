//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Instant;

use crate::analytics::{AnalyticsSource, DateLocale};
use crate::booking;
use crate::catalog::Catalog;
use crate::config::ServerConfig;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Services, stylists and time slots
    pub catalog: Arc<Catalog>,
    /// Where the analytics page gets its snapshot
    pub analytics: Arc<dyn AnalyticsSource>,
    /// Locale for chart date labels
    pub locale: DateLocale,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// Source of "today" for the date picker
    today: fn() -> NaiveDate,
}

impl AppState {
    pub fn new(
        catalog: Catalog,
        analytics: Arc<dyn AnalyticsSource>,
        locale: DateLocale,
        config: ServerConfig,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            analytics,
            locale,
            config: Arc::new(config),
            start_time: Instant::now(),
            today: booking::today,
        }
    }

    /// Replace the calendar used for date validation
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Current calendar day
    pub fn today(&self) -> NaiveDate {
        (self.today)()
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
