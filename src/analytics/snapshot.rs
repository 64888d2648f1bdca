//! Analytics Snapshot
//!
//! Wire model of the analytics endpoint response. Field names follow the
//! upstream JSON; Rust names follow the shop vocabulary.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{de, Deserialize, Deserializer, Serialize};

/// Point-in-time aggregate of booking statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    /// Per-day status counts, chronological
    pub timeline: Vec<TimelinePoint>,

    /// Bookings per stylist, in the order the endpoint chose
    #[serde(rename = "masters")]
    pub stylist_load: Vec<StylistLoad>,

    /// Completed bookings per hour of day, ascending by hour
    #[serde(rename = "timeDistribution")]
    pub hourly_distribution: Vec<HourlyBucket>,

    pub totals: Totals,
}

/// One day of the booking timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelinePoint {
    #[serde(deserialize_with = "deserialize_day")]
    pub date: NaiveDate,
    pub completed: u64,
    pub cancelled: u64,
    pub active: u64,
}

/// Booking counts for one stylist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylistLoad {
    pub name: String,
    pub total_bookings: u64,
    pub completed: u64,
}

/// Bookings in one hour-of-day bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyBucket {
    #[serde(deserialize_with = "deserialize_hour")]
    pub hour: u8,
    pub count: u64,
}

/// All-time status totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub total: u64,
    pub completed: u64,
    pub cancelled: u64,
    pub active: u64,
}

impl AnalyticsSnapshot {
    /// Parse an endpoint response body
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

/// Parse the calendar day of an ISO date or date-time string
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}

fn deserialize_day<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_day(&raw).ok_or_else(|| de::Error::custom(format!("invalid timeline date: {raw}")))
}

fn deserialize_hour<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let hour = u8::deserialize(deserializer)?;
    if hour > 23 {
        return Err(de::Error::custom(format!("hour out of range: {hour}")));
    }
    Ok(hour)
}
