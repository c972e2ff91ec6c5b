//! Aggregated calendar totals.
//!
//! [`CalendarTotals`] is the record the calendar builder hands to the
//! exceedance calculation after every recompute.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregates computed over the real days of a year calendar.
///
/// # Example
///
/// ```
/// use workhours_engine::models::CalendarTotals;
/// use rust_decimal::Decimal;
///
/// let totals = CalendarTotals {
///     year: 2025,
///     total_hours_worked: Decimal::from(1850),
///     vacation_hours_discounted: Decimal::ZERO,
///     sick_leave_hours_discounted: Decimal::ZERO,
///     official_holidays: 12,
///     agreement_days: 2,
///     workable_days: 287,
///     holiday_dates: vec![],
/// };
/// assert_eq!(totals.non_working_days(), 14);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarTotals {
    /// The calendar year these totals describe.
    pub year: i32,
    /// Sum of hours worked, rounded to 2 decimals.
    pub total_hours_worked: Decimal,
    /// Hours that vacation days removed from the schedule.
    pub vacation_hours_discounted: Decimal,
    /// Hours that sick-leave days removed from the schedule.
    pub sick_leave_hours_discounted: Decimal,
    /// Number of official public holidays.
    pub official_holidays: u32,
    /// Number of agreement days.
    pub agreement_days: u32,
    /// Days that are not Sunday, holiday, agreement day, sick leave or vacation.
    pub workable_days: u32,
    /// Dates of holidays and agreement days, in calendar order. A date that is
    /// both appears once.
    pub holiday_dates: Vec<NaiveDate>,
}

impl CalendarTotals {
    /// Holidays plus agreement days.
    pub fn non_working_days(&self) -> u32 {
        self.official_holidays + self.agreement_days
    }
}
