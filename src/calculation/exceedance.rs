//! Annual hour exceedance calculation.
//!
//! This module compares the hours a worker actually logged in a year against
//! the agreement's annual ceiling and values the difference.
//!
//! ## Steps
//!
//! 1. Look up the full-time annual ceiling for the year.
//! 2. Scale it to the contracted weekly hours and apply the seniority reduction.
//! 3. Excess hours are the worked hours above that ceiling, never negative.
//! 4. Compensation days are the excess over the contracted daily hours
//!    (weekly hours spread over a six-day week).
//! 5. The excess is valued at the overtime rate: base salary over the
//!    full-time ceiling, plus the overtime surcharge.
//!
//! The count of holidays inside vacation is carried on the report for
//! display. The worked hours already come from the calendar, so adding that
//! count to the excess would count those days twice.

use chrono::Utc;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::info;
use uuid::Uuid;

use super::totals::HOURS_DECIMALS;
use crate::config::ConfigLoader;
use crate::models::{
    AuditStep, CalendarTotals, CeilingBreakdown, ContractParameters, ExceedanceReport,
    OvertimeValuation,
};

/// Decimals kept on compensation days.
pub const COMPENSATION_DAYS_DECIMALS: u32 = 1;

/// Decimals kept on monetary amounts.
pub const MONEY_DECIMALS: u32 = 2;

/// Decimals kept on hourly rates.
pub const RATE_DECIMALS: u32 = 4;

fn round(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Calculates how far the worked hours of a year exceed the annual ceiling.
///
/// # Arguments
///
/// * `totals` - Calendar totals for the year being reconciled
/// * `contract` - Contracted weekly hours and hire date. Negative weekly hours count as zero.
/// * `loader` - Agreement tables (ceilings, salaries, seniority rule)
/// * `holidays_in_vacation` - Holidays inside vacation, reported but not added to the excess
///
/// # Example
///
/// ```
/// use workhours_engine::calculation::calculate_exceedance;
/// use workhours_engine::config::ConfigLoader;
/// use workhours_engine::models::{CalendarTotals, ContractParameters};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::bundled()?;
/// let totals = CalendarTotals {
///     year: 2025,
///     total_hours_worked: Decimal::from(1850),
///     vacation_hours_discounted: Decimal::ZERO,
///     sick_leave_hours_discounted: Decimal::ZERO,
///     official_holidays: 12,
///     agreement_days: 2,
///     workable_days: 300,
///     holiday_dates: vec![],
/// };
///
/// let report = calculate_exceedance(&totals, &ContractParameters::default(), &loader, 0);
///
/// assert_eq!(report.excess_hours, Decimal::from(70));
/// assert_eq!(report.compensation_days, Decimal::from_str("10.5").unwrap());
/// assert_eq!(report.valuation.amount, Decimal::from_str("977.80").unwrap());
/// # Ok::<(), workhours_engine::error::EngineError>(())
/// ```
pub fn calculate_exceedance(
    totals: &CalendarTotals,
    contract: &ContractParameters,
    loader: &ConfigLoader,
    holidays_in_vacation: u32,
) -> ExceedanceReport {
    let year = totals.year;
    let mut audit_steps = Vec::with_capacity(5);
    let contract = &ContractParameters {
        weekly_hours: contract.weekly_hours.max(Decimal::ZERO),
        ..contract.clone()
    };

    let ceiling = resolve_ceiling(year, contract, loader, &mut audit_steps);
    let excess_hours = detect_excess(totals.total_hours_worked, &ceiling, &mut audit_steps);
    let (daily_hours, compensation_days) =
        compensation_days(excess_hours, contract, loader, &mut audit_steps);
    let valuation = value_excess(year, excess_hours, &ceiling, loader, &mut audit_steps);

    let report = ExceedanceReport {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        year,
        weekly_hours: contract.weekly_hours,
        total_hours_worked: totals.total_hours_worked,
        ceiling,
        excess_hours,
        daily_hours,
        compensation_days,
        valuation,
        holidays_in_vacation,
        audit_steps,
    };

    info!(
        calculation_id = %report.calculation_id,
        year,
        total_hours_worked = %report.total_hours_worked,
        applicable_ceiling = %report.ceiling.applicable_ceiling,
        excess_hours = %report.excess_hours,
        compensation_days = %report.compensation_days,
        amount = %report.valuation.amount,
        "Completed exceedance calculation"
    );

    report
}

/// Steps 1 and 2: full-time ceiling, proportional ceiling and seniority reduction.
fn resolve_ceiling(
    year: i32,
    contract: &ContractParameters,
    loader: &ConfigLoader,
    audit_steps: &mut Vec<AuditStep>,
) -> CeilingBreakdown {
    let agreement = loader.agreement();
    let full_time = loader.annual_ceiling(year);

    audit_steps.push(AuditStep {
        step_number: next_step(audit_steps),
        rule_id: "annual_ceiling_lookup".to_string(),
        rule_name: "Annual Ceiling Lookup".to_string(),
        input: serde_json::json!({ "year": year }),
        output: serde_json::json!({
            "full_time_ceiling": full_time.value.normalize().to_string(),
            "used_default": full_time.is_default
        }),
        reasoning: if full_time.is_default {
            format!(
                "No ceiling configured for {}, using the default of {} hours",
                year,
                full_time.value.normalize()
            )
        } else {
            format!(
                "Full-time ceiling for {} is {} hours",
                year,
                full_time.value.normalize()
            )
        },
    });

    let proportional = if agreement.reference_weekly_hours.is_zero() {
        Decimal::ZERO
    } else {
        round(
            full_time.value * contract.weekly_hours / agreement.reference_weekly_hours,
            HOURS_DECIMALS,
        )
    };

    let rule = &agreement.seniority_reduction;
    let seniority_reduction = match contract.hire_date {
        Some(hired) if hired < rule.hired_before => rule.hours,
        _ => Decimal::ZERO,
    };
    let applicable = (proportional - seniority_reduction).max(Decimal::ZERO);

    let seniority_note = if seniority_reduction.is_zero() {
        String::new()
    } else {
        format!(
            ", less {} hours for hiring before {}",
            seniority_reduction.normalize(),
            rule.hired_before
        )
    };
    audit_steps.push(AuditStep {
        step_number: next_step(audit_steps),
        rule_id: "proportional_ceiling".to_string(),
        rule_name: "Proportional Ceiling".to_string(),
        input: serde_json::json!({
            "full_time_ceiling": full_time.value.normalize().to_string(),
            "weekly_hours": contract.weekly_hours.normalize().to_string(),
            "reference_weekly_hours": agreement.reference_weekly_hours.normalize().to_string(),
            "hire_date": contract.hire_date.map(|d| d.to_string())
        }),
        output: serde_json::json!({
            "proportional_ceiling": proportional.normalize().to_string(),
            "seniority_reduction": seniority_reduction.normalize().to_string(),
            "applicable_ceiling": applicable.normalize().to_string()
        }),
        reasoning: format!(
            "{} × {} / {} = {} hours{}: applicable ceiling {} hours",
            full_time.value.normalize(),
            contract.weekly_hours.normalize(),
            agreement.reference_weekly_hours.normalize(),
            proportional.normalize(),
            seniority_note,
            applicable.normalize()
        ),
    });

    CeilingBreakdown {
        full_time_ceiling: full_time.value,
        used_default_ceiling: full_time.is_default,
        proportional_ceiling: proportional,
        seniority_reduction,
        applicable_ceiling: applicable,
    }
}

/// Step 3: hours worked above the applicable ceiling.
fn detect_excess(
    total_hours_worked: Decimal,
    ceiling: &CeilingBreakdown,
    audit_steps: &mut Vec<AuditStep>,
) -> Decimal {
    let excess = (total_hours_worked - ceiling.applicable_ceiling).max(Decimal::ZERO);

    audit_steps.push(AuditStep {
        step_number: next_step(audit_steps),
        rule_id: "excess_detection".to_string(),
        rule_name: "Excess Hours Detection".to_string(),
        input: serde_json::json!({
            "total_hours_worked": total_hours_worked.normalize().to_string(),
            "applicable_ceiling": ceiling.applicable_ceiling.normalize().to_string()
        }),
        output: serde_json::json!({
            "excess_hours": excess.normalize().to_string(),
            "has_excess": excess > Decimal::ZERO
        }),
        reasoning: if excess > Decimal::ZERO {
            format!(
                "{} hours worked exceeds the {} hour ceiling by {} hours",
                total_hours_worked.normalize(),
                ceiling.applicable_ceiling.normalize(),
                excess.normalize()
            )
        } else {
            format!(
                "{} hours worked is within the {} hour ceiling",
                total_hours_worked.normalize(),
                ceiling.applicable_ceiling.normalize()
            )
        },
    });

    excess
}

/// Step 4: contracted daily hours and the rest days owed for the excess.
fn compensation_days(
    excess_hours: Decimal,
    contract: &ContractParameters,
    loader: &ConfigLoader,
    audit_steps: &mut Vec<AuditStep>,
) -> (Decimal, Decimal) {
    let working_days = loader.agreement().working_days_per_week;

    let daily_hours = if working_days.is_zero() {
        Decimal::ZERO
    } else {
        round(contract.weekly_hours / working_days, RATE_DECIMALS)
    };

    // excess / (weekly / days) without the intermediate rounding of daily hours
    let days = if excess_hours.is_zero() || contract.weekly_hours.is_zero() {
        Decimal::ZERO
    } else {
        round(
            excess_hours * working_days / contract.weekly_hours,
            COMPENSATION_DAYS_DECIMALS,
        )
    };

    audit_steps.push(AuditStep {
        step_number: next_step(audit_steps),
        rule_id: "compensation_days".to_string(),
        rule_name: "Compensation Days".to_string(),
        input: serde_json::json!({
            "excess_hours": excess_hours.normalize().to_string(),
            "weekly_hours": contract.weekly_hours.normalize().to_string(),
            "working_days_per_week": working_days.normalize().to_string()
        }),
        output: serde_json::json!({
            "daily_hours": daily_hours.normalize().to_string(),
            "compensation_days": days.normalize().to_string()
        }),
        reasoning: if days.is_zero() {
            "No excess hours to compensate".to_string()
        } else {
            format!(
                "{} excess hours at {} hours per day = {} rest days",
                excess_hours.normalize(),
                daily_hours.normalize(),
                days.normalize()
            )
        },
    });

    (daily_hours, days)
}

/// Step 5: monetary value of the excess at the overtime rate.
fn value_excess(
    year: i32,
    excess_hours: Decimal,
    ceiling: &CeilingBreakdown,
    loader: &ConfigLoader,
    audit_steps: &mut Vec<AuditStep>,
) -> OvertimeValuation {
    let salary = loader.base_salary(year);
    let surcharge = loader.agreement().overtime_surcharge;

    let ordinary_rate = if ceiling.full_time_ceiling.is_zero() {
        Decimal::ZERO
    } else {
        round(salary.value / ceiling.full_time_ceiling, RATE_DECIMALS)
    };
    let overtime_rate = round(ordinary_rate * (Decimal::ONE + surcharge), RATE_DECIMALS);
    let amount = round(excess_hours * overtime_rate, MONEY_DECIMALS);

    audit_steps.push(AuditStep {
        step_number: next_step(audit_steps),
        rule_id: "overtime_valuation".to_string(),
        rule_name: "Overtime Valuation".to_string(),
        input: serde_json::json!({
            "base_salary": salary.value.normalize().to_string(),
            "used_default_salary": salary.is_default,
            "full_time_ceiling": ceiling.full_time_ceiling.normalize().to_string(),
            "overtime_surcharge": surcharge.normalize().to_string(),
            "excess_hours": excess_hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "ordinary_hourly_rate": ordinary_rate.normalize().to_string(),
            "overtime_hourly_rate": overtime_rate.normalize().to_string(),
            "amount": amount.to_string()
        }),
        reasoning: format!(
            "{} / {} = €{} per hour, +{}% overtime = €{}; {} hours × €{} = €{}",
            salary.value.normalize(),
            ceiling.full_time_ceiling.normalize(),
            ordinary_rate.normalize(),
            (surcharge * Decimal::from(100)).normalize(),
            overtime_rate.normalize(),
            excess_hours.normalize(),
            overtime_rate.normalize(),
            amount
        ),
    });

    OvertimeValuation {
        base_salary: salary.value,
        used_default_salary: salary.is_default,
        ordinary_hourly_rate: ordinary_rate,
        overtime_hourly_rate: overtime_rate,
        amount,
    }
}

fn next_step(audit_steps: &[AuditStep]) -> u32 {
    audit_steps.len() as u32 + 1
}
