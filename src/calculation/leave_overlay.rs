//! Vacation and sick-leave overlay.
//!
//! The overlay runs in three passes over the real days of a calendar:
//!
//! 1. **Restore** - every day except manual sick leave gets its recorded
//!    hours back, its vacation flag recomputed from the current windows and
//!    any automatic sick leave cleared.
//! 2. **Vacation** - days inside a vacation window have their hours
//!    snapshotted and zeroed.
//! 3. **Automatic sick leave** - the sick-leave day count is consumed by the
//!    earliest eligible workable days of the year.
//!
//! Because pass 1 clears what passes 2 and 3 wrote, running the overlay twice
//! with unchanged inputs leaves the calendar unchanged, and automatic sick
//! days are never tied to specific dates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::{
    AUTOMATIC_SICK_LEAVE_LABEL, Day, SickLeaveSource, VACATION_LABEL, YearCalendar,
};

/// What the overlay applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveOverlaySummary {
    /// Real days inside a vacation window.
    pub vacation_days: u32,
    /// Days that became automatic sick leave.
    pub automatic_sick_days: u32,
    /// Requested sick-leave days for which no eligible day was left.
    pub unallocated_sick_days: u32,
}

/// Applies the vacation windows and automatic sick-leave count of the calendar.
///
/// # Example
///
/// ```
/// use workhours_engine::calculation::{apply_leave_overlay, build_year_calendar, holidays_for_year};
/// use workhours_engine::config::ConfigLoader;
/// use workhours_engine::models::LeaveInputs;
///
/// let loader = ConfigLoader::bundled().unwrap();
/// let holidays = holidays_for_year(loader.config(), 2025);
/// let mut calendar = build_year_calendar(2025, &holidays, LeaveInputs::default());
///
/// calendar.leave.sick_leave_days = 3;
/// let summary = apply_leave_overlay(&mut calendar);
///
/// assert_eq!(summary.automatic_sick_days, 3);
/// assert_eq!(calendar.days().filter(|d| d.is_sick_leave()).count(), 3);
/// ```
pub fn apply_leave_overlay(calendar: &mut YearCalendar) -> LeaveOverlaySummary {
    let leave = calendar.leave;

    for day in calendar.days_mut() {
        if day.is_manual_sick_leave() {
            continue;
        }
        day.sick_leave = None;
        day.is_vacation = day.date.is_some_and(|date| leave.is_vacation(date));
        day.hours_worked = if day.manual_agreement_day {
            Decimal::ZERO
        } else {
            day.hours_original
        };
        day.description = day.base_description();
        day.is_workable = day.derive_workable();
    }

    let mut vacation_days = 0;
    for day in calendar.days_mut().filter(|d| d.is_vacation) {
        snapshot_hours(day);
        day.hours_worked = Decimal::ZERO;
        day.description = Some(VACATION_LABEL.to_string());
        vacation_days += 1;
    }

    let mut remaining = leave.sick_leave_days;
    let mut automatic_sick_days = 0;
    if remaining > 0 {
        for day in calendar.days_mut() {
            if remaining == 0 {
                break;
            }
            if !is_eligible_for_automatic_sick_leave(day) {
                continue;
            }
            snapshot_hours(day);
            day.sick_leave = Some(SickLeaveSource::Automatic);
            day.hours_worked = Decimal::ZERO;
            day.description = Some(AUTOMATIC_SICK_LEAVE_LABEL.to_string());
            day.is_workable = false;
            remaining -= 1;
            automatic_sick_days += 1;
        }
    }

    if remaining > 0 {
        warn!(
            year = calendar.year,
            requested = leave.sick_leave_days,
            unallocated = remaining,
            "Not enough workable days to allocate all sick-leave days"
        );
    }

    debug!(
        year = calendar.year,
        vacation_days, automatic_sick_days, "Applied leave overlay"
    );

    LeaveOverlaySummary {
        vacation_days,
        automatic_sick_days,
        unallocated_sick_days: remaining,
    }
}

/// Records the current hours as the original hours unless already recorded.
fn snapshot_hours(day: &mut Day) {
    if day.hours_original.is_zero() {
        day.hours_original = day.hours_worked;
    }
}

fn is_eligible_for_automatic_sick_leave(day: &Day) -> bool {
    !day.is_padding()
        && day.is_workable
        && !day.is_vacation
        && !day.is_holiday()
        && !day.is_agreement_day
        && !day.is_sick_leave()
}
