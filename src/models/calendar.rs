//! Month and year calendar models.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{Day, LeaveInputs};
use crate::error::{EngineError, EngineResult};

/// English month names, indexed by zero-based month.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// One month of the calendar grid.
///
/// `days` starts with the padding cells needed to place day 1 under its
/// weekday in a Monday-start, seven-column grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Month {
    /// Month name.
    pub name: String,
    /// Zero-based month index (0 = January).
    pub index: u32,
    /// Padding cells followed by the real days in order.
    pub days: Vec<Day>,
}

impl Month {
    /// Iterates over the real days, skipping padding.
    pub fn real_days(&self) -> impl Iterator<Item = &Day> {
        self.days.iter().filter(|d| !d.is_padding())
    }

    /// Number of leading padding cells.
    pub fn padding_count(&self) -> usize {
        self.days.iter().take_while(|d| d.is_padding()).count()
    }
}

/// The full calendar for the year being reconciled.
///
/// Owned and mutated exclusively by the calendar builder functions; the
/// exceedance calculation only ever sees the totals derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCalendar {
    /// The calendar year.
    pub year: i32,
    /// The twelve months, January first.
    pub months: Vec<Month>,
    /// Vacation windows and sick-leave count currently applied.
    pub leave: LeaveInputs,
}

impl YearCalendar {
    /// Iterates over every real day of the year in chronological order.
    pub fn days(&self) -> impl Iterator<Item = &Day> {
        self.months.iter().flat_map(|m| m.real_days())
    }

    /// Iterates mutably over every real day of the year in chronological order.
    pub fn days_mut(&mut self) -> impl Iterator<Item = &mut Day> {
        self.months
            .iter_mut()
            .flat_map(|m| m.days.iter_mut())
            .filter(|d| !d.is_padding())
    }

    /// Number of real days in the calendar.
    pub fn real_day_count(&self) -> usize {
        self.days().count()
    }

    /// Looks up the day for a date.
    pub fn day(&self, date: NaiveDate) -> Option<&Day> {
        if date.year() != self.year {
            return None;
        }
        self.months
            .get(date.month0() as usize)?
            .real_days()
            .find(|d| d.date == Some(date))
    }

    /// Looks up the day for a date, mutably.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DateOutsideCalendar`] if the date belongs to
    /// another year.
    pub fn day_mut(&mut self, date: NaiveDate) -> EngineResult<&mut Day> {
        let year = self.year;
        let outside = || EngineError::DateOutsideCalendar { date, year };
        if date.year() != year {
            return Err(outside());
        }
        self.months
            .get_mut(date.month0() as usize)
            .and_then(|m| m.days.iter_mut().find(|d| d.date == Some(date)))
            .ok_or_else(outside)
    }
}
