//! Calendar aggregation.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::models::{CalendarTotals, YearCalendar};

/// Number of decimals kept on aggregated hours.
pub const HOURS_DECIMALS: u32 = 2;

/// Recomputes the aggregates of a calendar.
///
/// Only real days are counted. A holiday inside a vacation window still
/// counts as a holiday; it is excluded from the workable days by its
/// vacation flag as well.
///
/// # Example
///
/// ```
/// use workhours_engine::calculation::{build_year_calendar, holidays_for_year, recompute_totals};
/// use workhours_engine::config::ConfigLoader;
/// use workhours_engine::models::LeaveInputs;
///
/// let loader = ConfigLoader::bundled().unwrap();
/// let holidays = holidays_for_year(loader.config(), 2025);
/// let calendar = build_year_calendar(2025, &holidays, LeaveInputs::default());
///
/// let totals = recompute_totals(&calendar);
/// assert_eq!(totals.official_holidays, 12);
/// assert_eq!(totals.agreement_days, 2);
/// assert!(totals.total_hours_worked.is_zero());
/// ```
pub fn recompute_totals(calendar: &YearCalendar) -> CalendarTotals {
    let mut total_hours_worked = Decimal::ZERO;
    let mut vacation_hours_discounted = Decimal::ZERO;
    let mut sick_leave_hours_discounted = Decimal::ZERO;
    let mut official_holidays = 0;
    let mut agreement_days = 0;
    let mut workable_days = 0;
    let mut holiday_dates: Vec<NaiveDate> = Vec::new();

    for day in calendar.days() {
        if day.is_holiday() {
            official_holidays += 1;
        }
        if day.is_agreement_day {
            agreement_days += 1;
        }
        if day.is_holiday() || day.is_agreement_day {
            holiday_dates.extend(day.date);
        }
        if day.derive_workable() {
            workable_days += 1;
        }

        total_hours_worked += day.hours_worked;
        if day.hours_original > Decimal::ZERO {
            if day.is_vacation {
                vacation_hours_discounted += day.hours_original;
            }
            if day.is_sick_leave() {
                sick_leave_hours_discounted += day.hours_original;
            }
        }
    }

    let totals = CalendarTotals {
        year: calendar.year,
        total_hours_worked: round_hours(total_hours_worked),
        vacation_hours_discounted: round_hours(vacation_hours_discounted),
        sick_leave_hours_discounted: round_hours(sick_leave_hours_discounted),
        official_holidays,
        agreement_days,
        workable_days,
        holiday_dates,
    };

    debug!(
        year = totals.year,
        total_hours_worked = %totals.total_hours_worked,
        workable_days = totals.workable_days,
        "Recomputed calendar totals"
    );

    totals
}

fn round_hours(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(HOURS_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}
