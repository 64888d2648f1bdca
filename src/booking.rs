//! Booking Dialog
//!
//! The online-booking flow as a value type with pure transitions.
//!
//! The dialog is either `Closed` or `Open` with an in-progress
//! [`BookingSelection`]. Setters never validate; only [`BookingDialog::submit`]
//! checks that every field is filled. Submission is simulated: an accepted
//! booking is reported back to the caller and nothing is persisted.
//!
//! ```rust
//! use barbershop::booking::{BookingDialog, SubmitOutcome};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
//! let dialog = BookingDialog::Closed
//!     .open()
//!     .select_service("Классическая стрижка")
//!     .select_stylist("Дмитрий Петров")
//!     .select_date(today, today)
//!     .unwrap()
//!     .select_time("10:00");
//!
//! let (dialog, outcome) = dialog.submit();
//! assert!(matches!(outcome, SubmitOutcome::Accepted(_)));
//! assert_eq!(dialog, BookingDialog::Closed);
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::catalog::Catalog;

/// Shown when a submission is missing any field
pub const INCOMPLETE_MESSAGE: &str = "Заполните все поля записи";

/// Shown after a successful (simulated) submission
pub const SUCCESS_MESSAGE: &str = "Запись успешно создана! Мы свяжемся с вами для подтверждения.";

/// Shown when a date before today is picked
pub const PAST_DATE_MESSAGE: &str = "Нельзя выбрать прошедшую дату";

/// Fields of the booking form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingField {
    Service,
    Stylist,
    Date,
    Time,
}

impl fmt::Display for BookingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BookingField::Service => "service",
            BookingField::Stylist => "stylist",
            BookingField::Date => "date",
            BookingField::Time => "time",
        };
        f.write_str(name)
    }
}

/// In-progress choices of the booking dialog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSelection {
    pub service: Option<String>,
    pub stylist: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
}

impl BookingSelection {
    /// Fields that are still empty, in form order
    pub fn missing_fields(&self) -> Vec<BookingField> {
        let mut missing = Vec::new();
        if is_blank(&self.service) {
            missing.push(BookingField::Service);
        }
        if is_blank(&self.stylist) {
            missing.push(BookingField::Stylist);
        }
        if self.date.is_none() {
            missing.push(BookingField::Date);
        }
        if is_blank(&self.time) {
            missing.push(BookingField::Time);
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.missing_fields().len() == 4
    }

    /// The booking this selection describes, if every field is filled
    pub fn to_booking(&self) -> Option<Booking> {
        if !self.is_complete() {
            return None;
        }
        Some(Booking {
            service: self.service.clone()?,
            stylist: self.stylist.clone()?,
            date: self.date?,
            time: self.time.clone()?,
        })
    }

    /// Check the filled-in fields against the shop catalog.
    ///
    /// Empty fields are not an error here; that is `submit`'s job.
    pub fn check_catalog(&self, catalog: &Catalog) -> Result<(), BookingError> {
        if let Some(name) = self.service.as_deref().filter(|s| !s.is_empty()) {
            if catalog.service(name).is_none() {
                return Err(BookingError::UnknownService(name.to_string()));
            }
        }
        if let Some(name) = self.stylist.as_deref().filter(|s| !s.is_empty()) {
            if catalog.stylist(name).is_none() {
                return Err(BookingError::UnknownStylist(name.to_string()));
            }
        }
        if let Some(slot) = self.time.as_deref().filter(|s| !s.is_empty()) {
            if !catalog.has_slot(slot) {
                return Err(BookingError::UnknownSlot(slot.to_string()));
            }
        }
        Ok(())
    }
}

fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().map(str::is_empty).unwrap_or(true)
}

/// A complete booking accepted by `submit`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Booking {
    pub service: String,
    pub stylist: String,
    pub date: NaiveDate,
    pub time: String,
}

/// Result of a submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All four fields were filled; the dialog closed and the selection was cleared
    Accepted(Booking),
    /// At least one field is empty; the selection is untouched
    Incomplete { missing: Vec<BookingField> },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }

    /// User-facing message for this outcome
    pub fn notification(&self) -> Notification {
        match self {
            SubmitOutcome::Accepted(_) => Notification::success(SUCCESS_MESSAGE),
            SubmitOutcome::Incomplete { .. } => Notification::error(INCOMPLETE_MESSAGE),
        }
    }
}

/// Booking dialog state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BookingDialog {
    #[default]
    Closed,
    Open { selection: BookingSelection },
}

impl BookingDialog {
    /// Open the dialog. An already open dialog keeps its selection.
    pub fn open(self) -> Self {
        match self {
            BookingDialog::Closed => BookingDialog::Open {
                selection: BookingSelection::default(),
            },
            open => open,
        }
    }

    /// Open the dialog with a preselection
    pub fn open_with(selection: BookingSelection) -> Self {
        BookingDialog::Open { selection }
    }

    /// Close without submitting. The in-progress selection is discarded.
    pub fn dismiss(self) -> Self {
        BookingDialog::Closed
    }

    pub fn is_open(&self) -> bool {
        matches!(self, BookingDialog::Open { .. })
    }

    /// Current selection; a closed dialog has none
    pub fn selection(&self) -> Option<&BookingSelection> {
        match self {
            BookingDialog::Closed => None,
            BookingDialog::Open { selection } => Some(selection),
        }
    }

    // Setters on a closed dialog open it with just that field chosen,
    // the way the "book this service" buttons behave.
    fn update(self, f: impl FnOnce(&mut BookingSelection)) -> Self {
        let mut selection = match self {
            BookingDialog::Closed => BookingSelection::default(),
            BookingDialog::Open { selection } => selection,
        };
        f(&mut selection);
        BookingDialog::Open { selection }
    }

    pub fn select_service(self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.update(|s| s.service = Some(name))
    }

    pub fn select_stylist(self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.update(|s| s.stylist = Some(name))
    }

    pub fn select_time(self, slot: impl Into<String>) -> Self {
        let slot = slot.into();
        self.update(|s| s.time = Some(slot))
    }

    /// Pick a date. Dates before `today` are rejected and the state is unchanged.
    pub fn select_date(self, date: NaiveDate, today: NaiveDate) -> Result<Self, BookingError> {
        if !is_selectable_date(date, today) {
            return Err(BookingError::DateInPast { date, today });
        }
        Ok(self.update(|s| s.date = Some(date)))
    }

    /// Try to submit the current selection.
    ///
    /// Complete: the dialog closes, the selection is cleared and the booking
    /// is returned. Incomplete: the dialog is returned unchanged.
    pub fn submit(self) -> (Self, SubmitOutcome) {
        match self.selection().and_then(BookingSelection::to_booking) {
            Some(booking) => (BookingDialog::Closed, SubmitOutcome::Accepted(booking)),
            None => {
                let missing = self
                    .selection()
                    .map(BookingSelection::missing_fields)
                    .unwrap_or_else(|| BookingSelection::default().missing_fields());
                (self, SubmitOutcome::Incomplete { missing })
            }
        }
    }
}

/// The date picker accepts today and any later day
pub fn is_selectable_date(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today
}

/// Today's calendar date in the server's local time zone
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Booking input errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("date {date} is before today ({today})")]
    DateInPast { date: NaiveDate, today: NaiveDate },

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("unknown service: {0}")]
    UnknownService(String),

    #[error("unknown stylist: {0}")]
    UnknownStylist(String),

    #[error("unknown time slot: {0}")]
    UnknownSlot(String),
}

impl BookingError {
    /// Toast shown for this error
    pub fn notification(&self) -> Notification {
        match self {
            BookingError::DateInPast { .. } => Notification::error(PAST_DATE_MESSAGE),
            other => Notification::error(other.to_string()),
        }
    }
}

/// Parse a `YYYY-MM-DD` date from a form field
pub fn parse_date(raw: &str) -> Result<NaiveDate, BookingError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| BookingError::InvalidDate(raw.to_string()))
}

/// Toast kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A user-visible toast message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}
