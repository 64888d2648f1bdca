//! Booking Analytics
//!
//! Pre-aggregated booking statistics fetched from the analytics function
//! endpoint and reshaped for display.
//!
//! ## Flow
//!
//! 1. [`AnalyticsView`] starts `Idle` and moves to `Loading` on first display
//! 2. An [`AnalyticsSource`] performs the single fetch
//! 3. The view ends in `Loaded(snapshot)` or `Failed(reason)`
//! 4. The `shaping` functions turn a loaded snapshot into chart rows,
//!    percentage cards and the stylist-load list
//!
//! No aggregation happens here. The upstream payload is authoritative,
//! including its ordering.

mod shaping;
mod snapshot;
mod source;
mod view;

pub use shaping::{
    format_date_label, percent_of, render_stylist_load, render_totals, shape_hourly,
    shape_timeline, DateLocale, HourlyRow, Percent, StylistLoadRow, TimelineRow, TotalsSummary,
    SERIES_ACTIVE, SERIES_BOOKINGS, SERIES_CANCELLED, SERIES_COMPLETED,
};
pub use snapshot::{AnalyticsSnapshot, HourlyBucket, StylistLoad, TimelinePoint, Totals};
pub use source::{AnalyticsError, AnalyticsSource, HttpAnalyticsSource};
pub use view::{AnalyticsView, LoadTicket, ViewState};
