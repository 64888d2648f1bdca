//! Snapshot Shaping
//!
//! Turns an [`AnalyticsSnapshot`] into display rows. Every function keeps
//! the upstream order; nothing is sorted or re-ranked here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::snapshot::AnalyticsSnapshot;

/// Legend label of the completed series
pub const SERIES_COMPLETED: &str = "Завершено";
/// Legend label of the cancelled series
pub const SERIES_CANCELLED: &str = "Отменено";
/// Legend label of the active series
pub const SERIES_ACTIVE: &str = "Активно";
/// Legend label of the hourly series
pub const SERIES_BOOKINGS: &str = "Записи";

/// Locale used for short date labels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateLocale {
    /// `dd.mm`
    #[default]
    #[serde(rename = "ru-RU")]
    Ru,
    /// `mm/dd`
    #[serde(rename = "en-US")]
    EnUs,
}

impl FromStr for DateLocale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ru" | "ru-ru" => Ok(DateLocale::Ru),
            "en" | "en-us" => Ok(DateLocale::EnUs),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}

/// Zero-padded day and month in the locale's order
pub fn format_date_label(date: NaiveDate, locale: DateLocale) -> String {
    match locale {
        DateLocale::Ru => date.format("%d.%m").to_string(),
        DateLocale::EnUs => date.format("%m/%d").to_string(),
    }
}

/// One point of the booking-dynamics line chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineRow {
    pub date: String,
    #[serde(rename = "Завершено")]
    pub completed: u64,
    #[serde(rename = "Отменено")]
    pub cancelled: u64,
    #[serde(rename = "Активно")]
    pub active: u64,
}

/// One bar of the load-by-hour chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyRow {
    pub time: String,
    #[serde(rename = "Записи")]
    pub count: u64,
}

/// A whole-number percentage, undefined when the base is zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Percent(pub Option<u64>);

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{}%", value),
            None => f.write_str("—"),
        }
    }
}

/// `part / total` as a percentage, rounded half up
pub fn percent_of(part: u64, total: u64) -> Percent {
    if total == 0 {
        return Percent(None);
    }
    let (part, total) = (part as u128, total as u128);
    let rounded = (part * 200 + total) / (2 * total);
    Percent(Some(u64::try_from(rounded).unwrap_or(u64::MAX)))
}

/// Figures for the four summary cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalsSummary {
    pub total: u64,
    pub completed: u64,
    pub cancelled: u64,
    pub active: u64,
    pub completed_percent: Percent,
    pub cancelled_percent: Percent,
}

impl TotalsSummary {
    /// "60% от общего числа"
    pub fn completed_label(&self) -> String {
        share_label(self.completed_percent)
    }

    pub fn cancelled_label(&self) -> String {
        share_label(self.cancelled_percent)
    }
}

fn share_label(percent: Percent) -> String {
    match percent.0 {
        Some(_) => format!("{} от общего числа", percent),
        None => percent.to_string(),
    }
}

/// One row of the stylist-load list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StylistLoadRow {
    pub name: String,
    pub total_bookings: u64,
    pub completed: u64,
    /// "Завершено: 9 из 12"
    pub completed_label: String,
}

/// Timeline rows for the line chart, one per upstream entry
pub fn shape_timeline(snapshot: &AnalyticsSnapshot, locale: DateLocale) -> Vec<TimelineRow> {
    snapshot
        .timeline
        .iter()
        .map(|point| TimelineRow {
            date: format_date_label(point.date, locale),
            completed: point.completed,
            cancelled: point.cancelled,
            active: point.active,
        })
        .collect()
}

/// Hourly rows for the bar chart, labelled `"<hour>:00"`
pub fn shape_hourly(snapshot: &AnalyticsSnapshot) -> Vec<HourlyRow> {
    snapshot
        .hourly_distribution
        .iter()
        .map(|bucket| HourlyRow {
            time: format!("{}:00", bucket.hour),
            count: bucket.count,
        })
        .collect()
}

pub fn render_totals(snapshot: &AnalyticsSnapshot) -> TotalsSummary {
    let totals = snapshot.totals;
    TotalsSummary {
        total: totals.total,
        completed: totals.completed,
        cancelled: totals.cancelled,
        active: totals.active,
        completed_percent: percent_of(totals.completed, totals.total),
        cancelled_percent: percent_of(totals.cancelled, totals.total),
    }
}

/// Stylist rows in the order the endpoint returned them
pub fn render_stylist_load(snapshot: &AnalyticsSnapshot) -> Vec<StylistLoadRow> {
    snapshot
        .stylist_load
        .iter()
        .map(|stylist| StylistLoadRow {
            name: stylist.name.clone(),
            total_bookings: stylist.total_bookings,
            completed: stylist.completed,
            completed_label: format!(
                "Завершено: {} из {}",
                stylist.completed, stylist.total_bookings
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::snapshot::{HourlyBucket, StylistLoad, TimelinePoint, Totals};

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn snapshot_with_totals(total: u64, completed: u64, cancelled: u64) -> AnalyticsSnapshot {
        AnalyticsSnapshot {
            timeline: vec![],
            stylist_load: vec![],
            hourly_distribution: vec![],
            totals: Totals {
                total,
                completed,
                cancelled,
                active: total.saturating_sub(completed + cancelled),
            },
        }
    }

    #[test]
    fn test_percent_rounding() {
        assert_eq!(percent_of(3, 10), Percent(Some(30)));
        assert_eq!(percent_of(1, 3), Percent(Some(33)));
        assert_eq!(percent_of(2, 3), Percent(Some(67)));
        // Exact half rounds up
        assert_eq!(percent_of(1, 8), Percent(Some(13)));
        assert_eq!(percent_of(1, 200), Percent(Some(1)));
        assert_eq!(percent_of(0, 7), Percent(Some(0)));
        assert_eq!(percent_of(7, 7), Percent(Some(100)));
    }

    #[test]
    fn test_percent_of_huge_ratio_saturates() {
        // 200x the base is far past 100% and still fits
        assert_eq!(percent_of(u64::MAX, u64::MAX / 200), Percent(Some(20_000)));
        // Past u64 range the value clamps instead of wrapping
        assert_eq!(percent_of(u64::MAX, 1), Percent(Some(u64::MAX)));
    }

    #[test]
    fn test_zero_total_renders_dash() {
        let summary = render_totals(&snapshot_with_totals(0, 0, 0));

        assert_eq!(summary.completed_percent, Percent(None));
        assert_eq!(summary.completed_label(), "—");
        assert_eq!(summary.cancelled_label(), "—");
    }

    #[test]
    fn test_totals_cards() {
        let summary = render_totals(&snapshot_with_totals(100, 60, 15));

        assert_eq!(summary.completed, 60);
        assert_eq!(summary.active, 25);
        assert_eq!(summary.completed_label(), "60% от общего числа");
        assert_eq!(summary.cancelled_label(), "15% от общего числа");
    }

    #[test]
    fn test_timeline_preserves_order_and_length() {
        let mut snapshot = snapshot_with_totals(1, 1, 0);
        // Deliberately out of chronological order: shaping must not sort
        snapshot.timeline = vec![
            TimelinePoint {
                date: day(5, 3),
                completed: 1,
                cancelled: 2,
                active: 3,
            },
            TimelinePoint {
                date: day(5, 1),
                completed: 4,
                cancelled: 5,
                active: 6,
            },
            TimelinePoint {
                date: day(12, 9),
                completed: 7,
                cancelled: 8,
                active: 9,
            },
        ];

        let rows = shape_timeline(&snapshot, DateLocale::Ru);

        assert_eq!(rows.len(), snapshot.timeline.len());
        for (row, point) in rows.iter().zip(&snapshot.timeline) {
            assert_eq!(row.date, format_date_label(point.date, DateLocale::Ru));
            assert_eq!(row.completed, point.completed);
            assert_eq!(row.cancelled, point.cancelled);
            assert_eq!(row.active, point.active);
        }
        assert_eq!(rows[0].date, "03.05");
        assert_eq!(rows[2].date, "09.12");
    }

    #[test]
    fn test_date_label_locales() {
        assert_eq!(format_date_label(day(1, 5), DateLocale::Ru), "05.01");
        assert_eq!(format_date_label(day(1, 5), DateLocale::EnUs), "01/05");
        assert_eq!("en-US".parse::<DateLocale>(), Ok(DateLocale::EnUs));
        assert!("fr-FR".parse::<DateLocale>().is_err());
    }

    #[test]
    fn test_timeline_row_uses_legend_keys() {
        let row = TimelineRow {
            date: "01.05".to_string(),
            completed: 1,
            cancelled: 2,
            active: 3,
        };
        let json = serde_json::to_value(&row).unwrap();

        assert_eq!(json["date"], "01.05");
        assert_eq!(json[SERIES_COMPLETED], 1);
        assert_eq!(json[SERIES_CANCELLED], 2);
        assert_eq!(json[SERIES_ACTIVE], 3);
    }

    #[test]
    fn test_hourly_labels() {
        let mut snapshot = snapshot_with_totals(1, 1, 0);
        snapshot.hourly_distribution = vec![
            HourlyBucket { hour: 9, count: 2 },
            HourlyBucket { hour: 14, count: 5 },
        ];

        let rows = shape_hourly(&snapshot);

        assert_eq!(rows[0].time, "9:00");
        assert_eq!(rows[1].time, "14:00");
        assert_eq!(rows[1].count, 5);
        assert_eq!(serde_json::to_value(&rows[1]).unwrap()[SERIES_BOOKINGS], 5);
    }

    #[test]
    fn test_stylist_load_keeps_upstream_order() {
        let mut snapshot = snapshot_with_totals(1, 1, 0);
        snapshot.stylist_load = vec![
            StylistLoad {
                name: "Б".to_string(),
                total_bookings: 3,
                completed: 1,
            },
            StylistLoad {
                name: "А".to_string(),
                total_bookings: 10,
                completed: 9,
            },
        ];

        let rows = render_stylist_load(&snapshot);

        assert_eq!(rows[0].name, "Б");
        assert_eq!(rows[1].name, "А");
        assert_eq!(rows[1].completed_label, "Завершено: 9 из 10");
    }
}
