//! Configuration types for the agreement's static tables.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML files of an agreement directory.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{Holiday, HolidayKind, SalaryGroup};

/// A non-working day the agreement grants every year on the same date.
#[derive(Debug, Clone, Deserialize)]
pub struct AgreementDayRule {
    /// Month (1-12).
    pub month: u32,
    /// Day of month.
    pub day: u32,
    /// Human-readable name.
    pub name: String,
}

/// Ceiling reduction for workers hired before a cutoff date.
#[derive(Debug, Clone, Deserialize)]
pub struct SeniorityReduction {
    /// Workers hired strictly before this date get the reduction.
    pub hired_before: NaiveDate,
    /// Hours subtracted from the proportional ceiling.
    pub hours: Decimal,
}

/// Agreement configuration from agreement.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct AgreementConfig {
    /// Short identifier of the agreement.
    pub code: String,
    /// Human-readable name of the agreement.
    pub name: String,
    /// Region the agreement applies to.
    pub region: String,
    /// Weekly hours the ceilings are expressed for.
    pub reference_weekly_hours: Decimal,
    /// Working days in an ordinary week (Monday to Saturday).
    pub working_days_per_week: Decimal,
    /// Full-time annual hour ceiling by year.
    pub ceilings: BTreeMap<i32, Decimal>,
    /// Ceiling used for years missing from `ceilings`.
    pub default_ceiling: Decimal,
    /// Annual base salary by year.
    pub base_salaries: BTreeMap<i32, Decimal>,
    /// Salary used for years missing from `base_salaries`.
    pub default_base_salary: Decimal,
    /// Overtime surcharge as a fraction (0.50 = 50 %).
    pub overtime_surcharge: Decimal,
    /// Seniority-based ceiling reduction.
    pub seniority_reduction: SeniorityReduction,
    /// Agreement days granted every year.
    pub agreement_days: Vec<AgreementDayRule>,
}

/// A public holiday that falls on the same date every year.
#[derive(Debug, Clone, Deserialize)]
pub struct FixedHoliday {
    /// Month (1-12).
    pub month: u32,
    /// Day of month.
    pub day: u32,
    /// Human-readable name.
    pub name: String,
    /// Who declares the holiday.
    pub kind: HolidayKind,
}

/// Holiday configuration from holidays.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayConfig {
    /// Region the holidays apply to.
    pub region: String,
    /// Fixed-date holidays used to synthesize unknown years.
    pub fixed: Vec<FixedHoliday>,
    /// Exact holiday lists by year.
    #[serde(default)]
    pub years: BTreeMap<i32, Vec<Holiday>>,
}

/// One trade within a salary group.
#[derive(Debug, Clone, Deserialize)]
pub struct SalarySubgroup {
    /// Description of the trade.
    pub trade: String,
    /// Monthly base salary in the reference year.
    pub monthly_base: Decimal,
}

/// Range of payslip years the salary tables can value.
#[derive(Debug, Clone, Deserialize)]
pub struct PayslipYearWindow {
    /// First supported year.
    pub first: i32,
    /// Last supported year.
    pub last: i32,
    /// Year used for payslips outside the window.
    pub fallback: i32,
}

/// Salary tables from salary_tables.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct SalaryTables {
    /// The year the monthly bases are expressed in.
    pub reference_year: i32,
    /// Payslip years the tables can value.
    pub payslip_years: PayslipYearWindow,
    /// Factor applied to the reference-year base for each year.
    pub revision_factors: BTreeMap<i32, Decimal>,
    /// Employee social-security contribution as a fraction.
    pub social_security_rate: Decimal,
    /// Trades per salary group, most representative first.
    pub groups: BTreeMap<SalaryGroup, Vec<SalarySubgroup>>,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    agreement: AgreementConfig,
    holidays: HolidayConfig,
    salaries: SalaryTables,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(agreement: AgreementConfig, holidays: HolidayConfig, salaries: SalaryTables) -> Self {
        let mut holidays = holidays;
        for list in holidays.years.values_mut() {
            list.sort_by_key(|h| h.date);
        }
        Self {
            agreement,
            holidays,
            salaries,
        }
    }

    /// Returns the agreement configuration.
    pub fn agreement(&self) -> &AgreementConfig {
        &self.agreement
    }

    /// Returns the holiday configuration.
    pub fn holidays(&self) -> &HolidayConfig {
        &self.holidays
    }

    /// Returns the salary tables.
    pub fn salaries(&self) -> &SalaryTables {
        &self.salaries
    }
}

/// A value looked up in a year-keyed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearValue {
    /// The value found, or the table default.
    pub value: Decimal,
    /// True when the year was missing and the default was used.
    pub is_default: bool,
}
