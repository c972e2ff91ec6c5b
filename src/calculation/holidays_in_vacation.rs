//! Holidays that fall inside a vacation window.
//!
//! A public holiday taken during vacation is recoverable: it does not consume
//! vacation entitlement. The count is informational. It is never added to the
//! excess hours, which come straight from the calendar totals.

use chrono::Datelike;
use tracing::debug;

use crate::models::{HolidaySet, LeaveInputs};

use super::calendar_builder::WEEKLY_REST_DAY;

/// Counts the official holidays inside either vacation window, ignoring those
/// on the weekly rest day.
///
/// Agreement days are not official holidays and are never counted. A holiday
/// covered by both windows counts once.
///
/// # Example
///
/// ```
/// use workhours_engine::calculation::{count_holidays_in_vacation, holidays_for_year};
/// use workhours_engine::config::ConfigLoader;
/// use workhours_engine::models::{LeaveInputs, VacationPeriod};
///
/// let loader = ConfigLoader::bundled().unwrap();
/// let holidays = holidays_for_year(loader.config(), 2025);
/// let leave = LeaveInputs {
///     summer: VacationPeriod::from_input("2025-08-01", "2025-08-15").unwrap(),
///     ..LeaveInputs::default()
/// };
///
/// // Assumption of Mary, Friday 15 August.
/// assert_eq!(count_holidays_in_vacation(&holidays, &leave), 1);
/// ```
pub fn count_holidays_in_vacation(holidays: &HolidaySet, leave: &LeaveInputs) -> u32 {
    let count = holidays
        .holidays
        .iter()
        .filter(|h| h.date.weekday() != WEEKLY_REST_DAY)
        .filter(|h| leave.is_vacation(h.date))
        .count() as u32;

    debug!(year = holidays.year, count, "Counted holidays inside vacation");
    count
}
