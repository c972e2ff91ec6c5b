//! Core data models for the working-time reconciliation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calendar;
mod contract;
mod day;
mod exceedance;
mod holiday;
mod leave;
mod payslip;
mod totals;

pub use calendar::{MONTH_NAMES, Month, YearCalendar};
pub use contract::{ContractParameters, FULL_TIME_WEEKLY_HOURS, SalaryGroup};
pub use day::{
    AUTOMATIC_SICK_LEAVE_LABEL, Day, HolidayInfo, HolidayKind, MANUAL_AGREEMENT_DAY_LABEL,
    MANUAL_SICK_LEAVE_LABEL, SickLeaveSource, VACATION_LABEL,
};
pub use exceedance::{AuditStep, CeilingBreakdown, ExceedanceReport, OvertimeValuation};
pub use holiday::{AgreementDay, Holiday, HolidaySet, HolidaySource};
pub use leave::{LeaveInputs, VacationPeriod};
pub use payslip::{PayslipExtract, PayslipKind, PayslipLine, PayslipReconciliation};
pub use totals::CalendarTotals;
