//! Day model for the reconciliation calendar.
//!
//! A [`Day`] is one cell of the month grid. Real days carry a date and the
//! flags that classify them; padding cells only align the first week of a
//! month to a Monday-start grid and take no part in any aggregate.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Label written on a day that falls inside a vacation window.
pub const VACATION_LABEL: &str = "Vacation";

/// Label written on a day the worker marked as sick leave by hand.
pub const MANUAL_SICK_LEAVE_LABEL: &str = "Sick leave";

/// Label written on a day consumed by the automatic sick-leave allocation.
pub const AUTOMATIC_SICK_LEAVE_LABEL: &str = "Sick leave (automatic)";

/// Label written on a day the worker marked as an agreement day by hand.
pub const MANUAL_AGREEMENT_DAY_LABEL: &str = "Agreement day";

/// The administrative level that declares a public holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    /// Declared for the whole country.
    National,
    /// Declared by the autonomous community.
    Regional,
    /// Declared by the municipality.
    Local,
}

impl std::fmt::Display for HolidayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HolidayKind::National => write!(f, "National"),
            HolidayKind::Regional => write!(f, "Regional"),
            HolidayKind::Local => write!(f, "Local"),
        }
    }
}

/// The public holiday a day coincides with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayInfo {
    /// Human-readable holiday name.
    pub name: String,
    /// Who declares the holiday.
    pub kind: HolidayKind,
}

/// How a day came to be sick leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SickLeaveSource {
    /// Toggled on a specific day by the worker. Never touched by the allocator.
    Manual,
    /// Assigned by the automatic allocation of the sick-leave day count.
    Automatic,
}

/// One cell of the calendar grid.
///
/// The boolean flags are independent: a holiday inside a vacation window has
/// both `holiday` and `is_vacation` set, so consumers must check every
/// exclusion flag rather than a single one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    /// The calendar date, `None` for padding cells.
    pub date: Option<NaiveDate>,
    /// Day of month, 0 for padding cells.
    pub day_of_month: u32,
    /// Zero-based month index (0 = January).
    pub month: u32,
    /// The public holiday this day coincides with, if any.
    pub holiday: Option<HolidayInfo>,
    /// Whether the agreement treats this day as non-working.
    pub is_agreement_day: bool,
    /// Name of the agreement day, if the agreement declares one on this date.
    pub agreement_name: Option<String>,
    /// True only for the weekly rest day (Sunday).
    pub is_weekend_rest: bool,
    /// Whether the day falls inside one of the vacation windows.
    pub is_vacation: bool,
    /// Set when the day is sick leave, recording who put it there.
    pub sick_leave: Option<SickLeaveSource>,
    /// Whether the worker is expected to work this day.
    pub is_workable: bool,
    /// Set when the worker turned this into an agreement day by hand.
    pub manual_agreement_day: bool,
    /// Hours currently counted for this day.
    pub hours_worked: Decimal,
    /// Hours recorded before vacation or sick leave zeroed them.
    pub hours_original: Decimal,
    /// Display label; the most recent classification wins.
    pub description: Option<String>,
}

impl Day {
    /// Creates a padding cell for the given month.
    pub fn padding(month: u32) -> Self {
        Self {
            date: None,
            day_of_month: 0,
            month,
            holiday: None,
            is_agreement_day: false,
            agreement_name: None,
            is_weekend_rest: false,
            is_vacation: false,
            sick_leave: None,
            is_workable: false,
            manual_agreement_day: false,
            hours_worked: Decimal::ZERO,
            hours_original: Decimal::ZERO,
            description: None,
        }
    }

    /// Returns true for padding cells.
    pub fn is_padding(&self) -> bool {
        self.day_of_month == 0
    }

    /// Returns true if the day is a public holiday.
    pub fn is_holiday(&self) -> bool {
        self.holiday.is_some()
    }

    /// Returns true if the day is sick leave, whatever its source.
    pub fn is_sick_leave(&self) -> bool {
        self.sick_leave.is_some()
    }

    /// Returns true if the day was marked as sick leave by hand.
    pub fn is_manual_sick_leave(&self) -> bool {
        self.sick_leave == Some(SickLeaveSource::Manual)
    }

    /// Whether the worker would be expected to work this day if no leave applied.
    ///
    /// Holidays, agreement days and the weekly rest day are never scheduled.
    pub fn is_scheduled(&self) -> bool {
        !self.is_padding() && !self.is_holiday() && !self.is_agreement_day && !self.is_weekend_rest
    }

    /// Derives the workable flag from the classification flags.
    ///
    /// # Example
    ///
    /// ```
    /// use workhours_engine::models::Day;
    ///
    /// let padding = Day::padding(0);
    /// assert!(!padding.derive_workable());
    /// ```
    pub fn derive_workable(&self) -> bool {
        self.is_scheduled() && !self.is_vacation && !self.is_sick_leave()
    }

    /// The label a day carries when no leave overlay is active.
    pub fn base_description(&self) -> Option<String> {
        if let Some(holiday) = &self.holiday {
            return Some(holiday.name.clone());
        }
        if self.manual_agreement_day {
            return Some(MANUAL_AGREEMENT_DAY_LABEL.to_string());
        }
        if self.is_agreement_day {
            return self.agreement_name.clone();
        }
        None
    }
}
