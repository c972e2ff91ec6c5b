//! Edits to the hours and leave state of calendar days.
//!
//! Hour edits reapply the leave overlay before recomputing totals, so a day
//! inside a vacation window keeps zero hours whatever is entered. The manual
//! toggles only recompute totals: the overlay runs on the next hour or leave
//! edit.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{CalendarTotals, Day, MANUAL_SICK_LEAVE_LABEL, SickLeaveSource, YearCalendar};

use super::leave_overlay::apply_leave_overlay;
use super::totals::recompute_totals;

/// Standard day length used to fill a schedule: 40 h over 6 days.
pub const DEFAULT_STANDARD_DAY_HOURS: Decimal = Decimal::from_parts(667, 0, 0, false, 2);

/// Upper bound for the hours of a single day.
pub const MAX_DAY_HOURS: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// The result of a single-day edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEditResult {
    /// The edited date.
    pub date: NaiveDate,
    /// Whether the edit changed the day. False when the day was not eligible
    /// or the input was incomplete.
    pub applied: bool,
    /// Calendar totals after the edit.
    pub totals: CalendarTotals,
}

/// A parsed hour entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoursInput {
    /// A full number, clamped to `[0, 24]`.
    Complete(Decimal),
    /// Input still being typed: empty, a lone `.` or a trailing `.`.
    Partial,
}

/// Parses an hour value typed by the worker.
///
/// The longest numeric prefix is used and anything unparseable counts as 0.
///
/// # Example
///
/// ```
/// use workhours_engine::calculation::{HoursInput, parse_hours_input};
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_hours_input("7.5"), HoursInput::Complete(Decimal::new(75, 1)));
/// assert_eq!(parse_hours_input("30"), HoursInput::Complete(Decimal::from(24)));
/// assert_eq!(parse_hours_input("abc"), HoursInput::Complete(Decimal::ZERO));
/// assert_eq!(parse_hours_input("7."), HoursInput::Partial);
/// ```
pub fn parse_hours_input(raw: &str) -> HoursInput {
    let raw = raw.trim();
    if raw.is_empty() || raw.ends_with('.') {
        return HoursInput::Partial;
    }

    let prefix = numeric_prefix(raw);
    let value = prefix.parse::<Decimal>().unwrap_or(Decimal::ZERO);
    HoursInput::Complete(clamp_day_hours(value))
}

/// Clamps a day's hours to `[0, 24]`.
pub fn clamp_day_hours(hours: Decimal) -> Decimal {
    hours.clamp(Decimal::ZERO, MAX_DAY_HOURS)
}

fn numeric_prefix(raw: &str) -> &str {
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_point = false;
    for (i, c) in raw.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_point => seen_point = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }
    if seen_digit { &raw[..end] } else { "" }
}

/// Gives every workable day the same hours, then reapplies the leave overlay.
///
/// Automatic sick days are filled too, since the overlay reallocates them on
/// every pass. Vacation days, manual sick days and agreement days keep
/// whatever hours were entered on them by hand.
///
/// # Example
///
/// ```
/// use workhours_engine::calculation::{
///     DEFAULT_STANDARD_DAY_HOURS, build_year_calendar, holidays_for_year, set_uniform_schedule,
/// };
/// use workhours_engine::config::ConfigLoader;
/// use workhours_engine::models::LeaveInputs;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::bundled().unwrap();
/// let holidays = holidays_for_year(loader.config(), 2025);
/// let mut calendar = build_year_calendar(2025, &holidays, LeaveInputs::default());
///
/// let totals = set_uniform_schedule(&mut calendar, Decimal::from(8));
/// assert_eq!(totals.total_hours_worked, Decimal::from(8 * 300));
/// ```
pub fn set_uniform_schedule(calendar: &mut YearCalendar, hours_per_day: Decimal) -> CalendarTotals {
    let hours = clamp_day_hours(hours_per_day);

    let fillable = calendar
        .days_mut()
        .filter(|d| d.is_workable || d.sick_leave == Some(SickLeaveSource::Automatic));
    for day in fillable {
        day.hours_original = hours;
        day.hours_worked = hours;
    }

    debug!(year = calendar.year, hours_per_day = %hours, "Applied uniform schedule");

    apply_leave_overlay(calendar);
    recompute_totals(calendar)
}

/// Zeroes the hours of every day, then reapplies the leave overlay.
pub fn clear_hours(calendar: &mut YearCalendar) -> CalendarTotals {
    for day in calendar.days_mut() {
        day.hours_worked = Decimal::ZERO;
        day.hours_original = Decimal::ZERO;
    }

    debug!(year = calendar.year, "Cleared all hours");

    apply_leave_overlay(calendar);
    recompute_totals(calendar)
}

/// Sets the hours of one day from a raw entry.
///
/// A partial entry leaves the calendar untouched. Otherwise both worked and
/// original hours are set, the leave overlay is reapplied and totals are
/// recomputed. A manual sick-leave day only records the original hours.
///
/// # Errors
///
/// Returns [`EngineError::DateOutsideCalendar`](crate::error::EngineError::DateOutsideCalendar)
/// if the date is not in the calendar.
pub fn set_day_hours(
    calendar: &mut YearCalendar,
    date: NaiveDate,
    raw: &str,
) -> EngineResult<DayEditResult> {
    let day = calendar.day_mut(date)?;

    let hours = match parse_hours_input(raw) {
        HoursInput::Complete(hours) => hours,
        HoursInput::Partial => {
            return Ok(DayEditResult {
                date,
                applied: false,
                totals: recompute_totals(calendar),
            });
        }
    };

    day.hours_original = hours;
    if !day.is_manual_sick_leave() {
        day.hours_worked = hours;
    }

    apply_leave_overlay(calendar);
    Ok(DayEditResult {
        date,
        applied: true,
        totals: recompute_totals(calendar),
    })
}

/// Toggles manual sick leave on one day.
///
/// Sick leave can be switched on for any day that is not a holiday, the
/// weekly rest day or inside a vacation window. Switching it on keeps the
/// current hours as original hours and zeroes the worked hours; switching it
/// off restores them. Any sick day, automatic or manual, can be switched off.
///
/// # Errors
///
/// Returns [`EngineError::DateOutsideCalendar`](crate::error::EngineError::DateOutsideCalendar)
/// if the date is not in the calendar.
pub fn toggle_sick_leave(calendar: &mut YearCalendar, date: NaiveDate) -> EngineResult<DayEditResult> {
    let day = calendar.day_mut(date)?;

    let applied = if day.is_sick_leave() {
        day.sick_leave = None;
        day.hours_worked = day.hours_original;
        day.description = day.base_description();
        day.is_workable = day.derive_workable();
        true
    } else if accepts_manual_override(day) {
        if day.hours_original.is_zero() {
            day.hours_original = day.hours_worked;
        }
        day.sick_leave = Some(SickLeaveSource::Manual);
        day.hours_worked = Decimal::ZERO;
        day.description = Some(MANUAL_SICK_LEAVE_LABEL.to_string());
        day.is_workable = false;
        true
    } else {
        false
    };

    debug!(%date, applied, "Toggled sick leave");

    Ok(DayEditResult {
        date,
        applied,
        totals: recompute_totals(calendar),
    })
}

/// Toggles a day as an agreement day.
///
/// Holidays, the weekly rest day, vacation days and sick days cannot be
/// toggled. Switching on zeroes the worked hours; switching off restores
/// them. Agreement days declared by the agreement can be switched off too.
///
/// # Errors
///
/// Returns [`EngineError::DateOutsideCalendar`](crate::error::EngineError::DateOutsideCalendar)
/// if the date is not in the calendar.
pub fn toggle_agreement_day(
    calendar: &mut YearCalendar,
    date: NaiveDate,
) -> EngineResult<DayEditResult> {
    let day = calendar.day_mut(date)?;

    let applied = if !accepts_manual_override(day) || day.is_sick_leave() {
        false
    } else if day.is_agreement_day {
        day.is_agreement_day = false;
        day.manual_agreement_day = false;
        day.hours_worked = day.hours_original;
        day.description = day.base_description();
        day.is_workable = day.derive_workable();
        true
    } else {
        if day.hours_original.is_zero() {
            day.hours_original = day.hours_worked;
        }
        day.is_agreement_day = true;
        day.manual_agreement_day = true;
        day.hours_worked = Decimal::ZERO;
        day.description = day.base_description();
        day.is_workable = false;
        true
    };

    debug!(%date, applied, "Toggled agreement day");

    Ok(DayEditResult {
        date,
        applied,
        totals: recompute_totals(calendar),
    })
}

fn accepts_manual_override(day: &Day) -> bool {
    !day.is_holiday() && !day.is_weekend_rest && !day.is_vacation
}
