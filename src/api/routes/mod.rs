//! Routes
//!
//! Route handlers organized by functionality.

pub mod analytics;
pub mod bookings;
pub mod catalog;
pub mod health;
pub mod pages;
