//! Year calendar construction.
//!
//! This module builds the twelve month grids of a year and classifies every
//! day as holiday, agreement day, weekly rest, vacation or workable. Grids
//! start on Monday, so each month opens with the padding cells needed to put
//! day 1 under its weekday.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{
    Day, HolidayInfo, HolidaySet, LeaveInputs, MONTH_NAMES, Month, VACATION_LABEL, YearCalendar,
};

use super::leave_overlay::apply_leave_overlay;

/// The weekly rest day under the agreement. Saturday is an ordinary working day.
pub const WEEKLY_REST_DAY: Weekday = Weekday::Sun;

/// Builds the full calendar for a year and applies the leave overlay.
///
/// All real days start with zero hours; use
/// [`set_uniform_schedule`](super::set_uniform_schedule) or
/// [`set_day_hours`](super::set_day_hours) to record work.
///
/// # Arguments
///
/// * `year` - The calendar year
/// * `holidays` - Public holidays and agreement days for that year
/// * `leave` - Vacation windows and automatic sick-leave count
///
/// # Example
///
/// ```
/// use workhours_engine::calculation::{build_year_calendar, holidays_for_year};
/// use workhours_engine::config::ConfigLoader;
/// use workhours_engine::models::LeaveInputs;
///
/// let loader = ConfigLoader::bundled().unwrap();
/// let holidays = holidays_for_year(loader.config(), 2025);
/// let calendar = build_year_calendar(2025, &holidays, LeaveInputs::default());
///
/// assert_eq!(calendar.months.len(), 12);
/// assert_eq!(calendar.real_day_count(), 365);
/// // 1 January 2025 is a Wednesday: two padding cells (Mon, Tue).
/// assert_eq!(calendar.months[0].padding_count(), 2);
/// ```
pub fn build_year_calendar(year: i32, holidays: &HolidaySet, leave: LeaveInputs) -> YearCalendar {
    let months = (0..12)
        .map(|month| build_month(year, month, holidays, &leave))
        .collect();

    let mut calendar = YearCalendar {
        year,
        months,
        leave,
    };

    debug!(
        year,
        days = calendar.real_day_count(),
        sick_leave_days = leave.sick_leave_days,
        "Built year calendar"
    );

    apply_leave_overlay(&mut calendar);
    calendar
}

/// Builds one month grid. `month` is zero-based (0 = January).
fn build_month(year: i32, month: u32, holidays: &HolidaySet, leave: &LeaveInputs) -> Month {
    let first = first_day_of_month(year, month);
    let padding = first.weekday().num_days_from_monday() as usize;
    let last_day = days_in_month(year, month);

    let mut days = Vec::with_capacity(padding + last_day as usize);
    days.extend((0..padding).map(|_| Day::padding(month)));

    for day_of_month in 1..=last_day {
        let date = first + chrono::Duration::days(i64::from(day_of_month - 1));
        days.push(classify_day(date, month, holidays, leave));
    }

    Month {
        name: MONTH_NAMES[month as usize].to_string(),
        index: month,
        days,
    }
}

/// Classifies a single real day.
fn classify_day(date: NaiveDate, month: u32, holidays: &HolidaySet, leave: &LeaveInputs) -> Day {
    let holiday = holidays.holiday_on(date).map(|h| HolidayInfo {
        name: h.name.clone(),
        kind: h.kind,
    });
    let agreement_day = holidays.agreement_day_on(date);
    let is_vacation = leave.is_vacation(date);

    let mut day = Day {
        date: Some(date),
        day_of_month: date.day(),
        month,
        holiday,
        is_agreement_day: agreement_day.is_some(),
        agreement_name: agreement_day.map(|d| d.name.clone()),
        is_weekend_rest: date.weekday() == WEEKLY_REST_DAY,
        is_vacation,
        sick_leave: None,
        is_workable: false,
        manual_agreement_day: false,
        hours_worked: Decimal::ZERO,
        hours_original: Decimal::ZERO,
        description: None,
    };
    day.is_workable = day.derive_workable();
    day.description = if is_vacation {
        Some(VACATION_LABEL.to_string())
    } else {
        day.base_description()
    };
    day
}

fn first_day_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month + 1, 1).expect("month index is always 0..12")
}

/// Number of days in a month (zero-based), following the Gregorian leap-year rule.
///
/// # Panics
///
/// Panics if `month` is not in `0..12`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = first_day_of_month(year, month);
    let next = if month == 11 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 2, 1)
    };
    next.map(|n| (n - first).num_days() as u32).unwrap_or(31)
}
