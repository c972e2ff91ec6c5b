//! Exceedance report models.
//!
//! This module contains the [`ExceedanceReport`] type and its audit trail,
//! capturing everything the exceedance calculation derived from a set of
//! calendar totals and contract parameters.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single step in the audit trail recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The hour ceiling that applies to one worker in one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CeilingBreakdown {
    /// Ceiling for a full-time contract in the target year.
    pub full_time_ceiling: Decimal,
    /// Whether the ceiling came from the default because the year is unknown.
    pub used_default_ceiling: bool,
    /// Full-time ceiling scaled to the contracted weekly hours.
    pub proportional_ceiling: Decimal,
    /// Hours subtracted for seniority (zero when the rule does not apply).
    pub seniority_reduction: Decimal,
    /// The ceiling the worked hours are compared against.
    pub applicable_ceiling: Decimal,
}

/// How the excess hours are valued in money.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeValuation {
    /// Annual base salary for the target year.
    pub base_salary: Decimal,
    /// Whether the salary came from the default because the year is unknown.
    pub used_default_salary: bool,
    /// Base salary divided by the full-time ceiling, rounded to 4 decimals.
    pub ordinary_hourly_rate: Decimal,
    /// Ordinary rate with the overtime surcharge, rounded to 4 decimals.
    pub overtime_hourly_rate: Decimal,
    /// Excess hours at the overtime rate, rounded to 2 decimals.
    pub amount: Decimal,
}

/// The complete result of an exceedance calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceedanceReport {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The year being reconciled.
    pub year: i32,
    /// Contracted weekly hours used.
    pub weekly_hours: Decimal,
    /// Hours worked according to the calendar totals.
    pub total_hours_worked: Decimal,
    /// Ceiling derivation.
    pub ceiling: CeilingBreakdown,
    /// Hours worked above the applicable ceiling, never negative.
    pub excess_hours: Decimal,
    /// Contracted weekly hours spread over the working days of a week.
    pub daily_hours: Decimal,
    /// Rest days owed, rounded to 1 decimal.
    pub compensation_days: Decimal,
    /// Monetary value of the excess hours.
    pub valuation: OvertimeValuation,
    /// Non-Sunday holidays inside a vacation window. Informational only.
    pub holidays_in_vacation: u32,
    /// Complete audit trail of calculation decisions.
    pub audit_steps: Vec<AuditStep>,
}

impl ExceedanceReport {
    /// Returns true if the worker went over the applicable ceiling.
    pub fn has_excess(&self) -> bool {
        self.excess_hours > Decimal::ZERO
    }
}
