//! Per-user calculation session.
//!
//! A [`CalculationSession`] holds everything one worker's reconciliation
//! needs between edits: the contract, the leave inputs, the year calendar
//! and its latest totals, and the payslips queued for reconciliation. The
//! agreement tables are shared between sessions.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::calculation::{
    self, DayEditResult, apply_leave_overlay, build_year_calendar, calculate_exceedance,
    count_holidays_in_vacation, holidays_for_year, reconcile_payslips, recompute_totals,
};
use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::{
    CalendarTotals, ContractParameters, ExceedanceReport, HolidaySet, LeaveInputs, PayslipExtract,
    PayslipReconciliation, VacationPeriod, YearCalendar,
};

/// Income-tax withholding assumed until the worker enters their own, in percent.
pub const DEFAULT_WITHHOLDING_PERCENT: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// The state of one worker's reconciliation.
///
/// The calendar is created on the first day edit or by
/// [`open_calendar`](Self::open_calendar). Until then there are no totals and
/// [`exceedance`](Self::exceedance) returns `None`.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use workhours_engine::config::ConfigLoader;
/// use workhours_engine::session::CalculationSession;
/// use rust_decimal::Decimal;
///
/// let config = Arc::new(ConfigLoader::bundled()?);
/// let mut session = CalculationSession::new(config, 2025);
/// assert!(session.exceedance().is_none());
///
/// session.set_uniform_schedule(Decimal::from(8));
/// let report = session.exceedance().unwrap();
/// // 300 workable days × 8 h = 2400 h against a 1780 h ceiling.
/// assert_eq!(report.excess_hours, Decimal::from(620));
/// # Ok::<(), workhours_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CalculationSession {
    id: Uuid,
    config: Arc<ConfigLoader>,
    year: i32,
    contract: ContractParameters,
    leave: LeaveInputs,
    holidays: Option<HolidaySet>,
    calendar: Option<YearCalendar>,
    totals: Option<CalendarTotals>,
    payslips: Vec<PayslipExtract>,
    withholding_percent: Decimal,
}

impl CalculationSession {
    /// Creates an empty session reconciling the given year.
    pub fn new(config: Arc<ConfigLoader>, year: i32) -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            config,
            year,
            contract: ContractParameters::default(),
            leave: LeaveInputs::default(),
            holidays: None,
            calendar: None,
            totals: None,
            payslips: Vec::new(),
            withholding_percent: DEFAULT_WITHHOLDING_PERCENT,
        };
        info!(session_id = %session.id, year, "Opened calculation session");
        session
    }

    /// Creates a session for the last completed calendar year before `today`.
    pub fn for_previous_year(config: Arc<ConfigLoader>, today: NaiveDate) -> Self {
        Self::new(config, today.year() - 1)
    }

    /// Session identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The year being reconciled.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Current contract parameters.
    pub fn contract(&self) -> &ContractParameters {
        &self.contract
    }

    /// Current vacation windows and sick-leave count.
    pub fn leave(&self) -> &LeaveInputs {
        &self.leave
    }

    /// The year calendar, once opened.
    pub fn calendar(&self) -> Option<&YearCalendar> {
        self.calendar.as_ref()
    }

    /// The latest totals, once the calendar is opened.
    pub fn totals(&self) -> Option<&CalendarTotals> {
        self.totals.as_ref()
    }

    /// Payslips queued for reconciliation.
    pub fn payslips(&self) -> &[PayslipExtract] {
        &self.payslips
    }

    /// Builds a fresh calendar for the session year with the current leave
    /// inputs. Any hours entered before are discarded.
    pub fn open_calendar(&mut self) -> &CalendarTotals {
        let holidays = holidays_for_year(self.config.config(), self.year);
        let calendar = build_year_calendar(self.year, &holidays, self.leave);
        let totals = recompute_totals(&calendar);

        info!(
            session_id = %self.id,
            year = self.year,
            workable_days = totals.workable_days,
            "Opened year calendar"
        );

        self.holidays = Some(holidays);
        self.calendar = Some(calendar);
        self.totals.insert(totals)
    }

    /// Replaces both vacation windows.
    ///
    /// Returns the new totals if the calendar is open.
    pub fn set_vacation_periods(
        &mut self,
        winter: Option<VacationPeriod>,
        summer: Option<VacationPeriod>,
    ) -> Option<&CalendarTotals> {
        self.leave.winter = winter;
        self.leave.summer = summer;
        self.refresh_leave()
    }

    /// Replaces both vacation windows from `YYYY-MM-DD` text. A window with a
    /// blank side is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDate`](crate::error::EngineError::InvalidDate)
    /// if a non-blank date cannot be parsed. The session is left unchanged.
    pub fn set_vacation_input(
        &mut self,
        winter: (&str, &str),
        summer: (&str, &str),
    ) -> EngineResult<Option<&CalendarTotals>> {
        let winter = VacationPeriod::from_input(winter.0, winter.1)?;
        let summer = VacationPeriod::from_input(summer.0, summer.1)?;
        Ok(self.set_vacation_periods(winter, summer))
    }

    /// Sets how many days the automatic sick-leave allocation consumes.
    ///
    /// Returns the new totals if the calendar is open.
    pub fn set_sick_leave_days(&mut self, days: u32) -> Option<&CalendarTotals> {
        self.leave.sick_leave_days = days;
        self.refresh_leave()
    }

    /// Replaces the contract parameters. The calendar is not affected.
    pub fn set_contract(&mut self, contract: ContractParameters) {
        self.contract = contract;
    }

    /// Sets the income-tax withholding used for net payslip differences.
    pub fn set_withholding_percent(&mut self, percent: Decimal) {
        self.withholding_percent = percent;
    }

    /// Fills every workable day with the same hours.
    pub fn set_uniform_schedule(&mut self, hours_per_day: Decimal) -> &CalendarTotals {
        let totals = calculation::set_uniform_schedule(self.ensure_calendar(), hours_per_day);
        self.totals.insert(totals)
    }

    /// Zeroes the hours of every day.
    pub fn clear_hours(&mut self) -> &CalendarTotals {
        let totals = calculation::clear_hours(self.ensure_calendar());
        self.totals.insert(totals)
    }

    /// Sets the hours of one day from a raw entry.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DateOutsideCalendar`](crate::error::EngineError::DateOutsideCalendar)
    /// if the date is not in the session year.
    pub fn set_day_hours(&mut self, date: NaiveDate, raw: &str) -> EngineResult<DayEditResult> {
        let result = calculation::set_day_hours(self.ensure_calendar(), date, raw)?;
        self.totals = Some(result.totals.clone());
        Ok(result)
    }

    /// Toggles manual sick leave on one day.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DateOutsideCalendar`](crate::error::EngineError::DateOutsideCalendar)
    /// if the date is not in the session year.
    pub fn toggle_sick_leave(&mut self, date: NaiveDate) -> EngineResult<DayEditResult> {
        let result = calculation::toggle_sick_leave(self.ensure_calendar(), date)?;
        self.totals = Some(result.totals.clone());
        Ok(result)
    }

    /// Toggles one day as an agreement day.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DateOutsideCalendar`](crate::error::EngineError::DateOutsideCalendar)
    /// if the date is not in the session year.
    pub fn toggle_agreement_day(&mut self, date: NaiveDate) -> EngineResult<DayEditResult> {
        let result = calculation::toggle_agreement_day(self.ensure_calendar(), date)?;
        self.totals = Some(result.totals.clone());
        Ok(result)
    }

    /// Total days covered by the vacation windows.
    pub fn vacation_day_count(&self) -> u32 {
        self.leave.vacation_day_count()
    }

    /// Non-Sunday holidays inside the vacation windows.
    pub fn holidays_in_vacation(&self) -> u32 {
        match &self.holidays {
            Some(holidays) => count_holidays_in_vacation(holidays, &self.leave),
            None => count_holidays_in_vacation(
                &holidays_for_year(self.config.config(), self.year),
                &self.leave,
            ),
        }
    }

    /// Calculates the exceedance report from the latest totals.
    ///
    /// Returns `None` until the calendar has produced totals.
    pub fn exceedance(&self) -> Option<ExceedanceReport> {
        let totals = self.totals.as_ref()?;
        Some(calculate_exceedance(
            totals,
            &self.contract,
            &self.config,
            self.holidays_in_vacation(),
        ))
    }

    /// Queues a payslip extract for reconciliation.
    pub fn add_payslip(&mut self, extract: PayslipExtract) {
        self.payslips.push(extract);
    }

    /// Drops a queued payslip. Returns it if the index was valid.
    pub fn remove_payslip(&mut self, index: usize) -> Option<PayslipExtract> {
        (index < self.payslips.len()).then(|| self.payslips.remove(index))
    }

    /// Reconciles every queued payslip against the salary tables.
    pub fn reconcile_payslips(&self) -> PayslipReconciliation {
        reconcile_payslips(
            &self.payslips,
            &self.contract,
            &self.config,
            self.withholding_percent,
        )
    }

    /// Clears the session back to its initial state. The id, year and
    /// agreement tables are kept.
    pub fn reset(&mut self) {
        self.contract = ContractParameters::default();
        self.leave = LeaveInputs::default();
        self.holidays = None;
        self.calendar = None;
        self.totals = None;
        self.payslips.clear();
        self.withholding_percent = DEFAULT_WITHHOLDING_PERCENT;

        info!(session_id = %self.id, "Reset calculation session");
    }

    /// Reapplies the leave overlay after a leave input change.
    fn refresh_leave(&mut self) -> Option<&CalendarTotals> {
        let calendar = self.calendar.as_mut()?;
        calendar.leave = self.leave;
        apply_leave_overlay(calendar);
        let totals = recompute_totals(calendar);
        Some(self.totals.insert(totals))
    }

    /// Returns the calendar, building it on first use.
    fn ensure_calendar(&mut self) -> &mut YearCalendar {
        let config = &self.config;
        let (year, leave) = (self.year, self.leave);
        let holidays = self
            .holidays
            .get_or_insert_with(|| holidays_for_year(config.config(), year));
        self.calendar
            .get_or_insert_with(|| build_year_calendar(year, holidays, leave))
    }
}
