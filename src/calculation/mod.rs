//! Calculation logic for the working-time reconciliation engine.
//!
//! This module contains the holiday calendar provider, the year calendar
//! builder with its leave overlay and per-day edits, the aggregation of
//! calendar totals, the annual hour exceedance calculation, the count of
//! holidays inside vacation and the payslip reconciliation.

mod calendar_builder;
mod day_edits;
mod exceedance;
mod holidays;
mod holidays_in_vacation;
mod leave_overlay;
mod payslip_reconciliation;
mod totals;

pub use calendar_builder::{WEEKLY_REST_DAY, build_year_calendar, days_in_month};
pub use day_edits::{
    DEFAULT_STANDARD_DAY_HOURS, DayEditResult, HoursInput, MAX_DAY_HOURS, clamp_day_hours,
    clear_hours, parse_hours_input, set_day_hours, set_uniform_schedule, toggle_agreement_day,
    toggle_sick_leave,
};
pub use exceedance::{
    COMPENSATION_DAYS_DECIMALS, MONEY_DECIMALS, RATE_DECIMALS, calculate_exceedance,
};
pub use holidays::holidays_for_year;
pub use holidays_in_vacation::count_holidays_in_vacation;
pub use leave_overlay::{LeaveOverlaySummary, apply_leave_overlay};
pub use payslip_reconciliation::{
    OCTOBER_EXTRA_THRESHOLD, SENIORITY_BLOCK_YEARS, SENIORITY_PERCENT_PER_BLOCK, classify_payslip,
    payslip_multiplier, reconcile_payslip, reconcile_payslips, seniority_percent,
};
pub use totals::{HOURS_DECIMALS, recompute_totals};
