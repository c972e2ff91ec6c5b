//! Contract parameters supplied per worker.
//!
//! This module defines the [`ContractParameters`] struct and the
//! [`SalaryGroup`] enum. Required and optional fields are declared up front;
//! missing optional values take the agreement defaults on deserialization.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Weekly hours of a full-time contract.
pub const FULL_TIME_WEEKLY_HOURS: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Professional group under the agreement's salary tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SalaryGroup {
    /// Graduates and management.
    G1,
    /// Section heads.
    G2,
    /// Qualified staff.
    G3,
    /// Shop assistants, cashiers and support staff.
    #[default]
    G4,
}

impl std::fmt::Display for SalaryGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SalaryGroup::G1 => write!(f, "G1"),
            SalaryGroup::G2 => write!(f, "G2"),
            SalaryGroup::G3 => write!(f, "G3"),
            SalaryGroup::G4 => write!(f, "G4"),
        }
    }
}

fn default_weekly_hours() -> Decimal {
    FULL_TIME_WEEKLY_HOURS
}

/// A worker's contract terms relevant to the annual reconciliation.
///
/// # Example
///
/// ```
/// use workhours_engine::models::{ContractParameters, SalaryGroup};
/// use rust_decimal::Decimal;
///
/// let contract: ContractParameters = serde_json::from_str("{}").unwrap();
/// assert_eq!(contract.weekly_hours, Decimal::from(40));
/// assert_eq!(contract.hire_date, None);
/// assert_eq!(contract.salary_group, SalaryGroup::G4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractParameters {
    /// Contracted hours per week.
    #[serde(default = "default_weekly_hours")]
    pub weekly_hours: Decimal,
    /// The date the worker was hired, if known.
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    /// Professional group used for salary-table lookups.
    #[serde(default)]
    pub salary_group: SalaryGroup,
}

impl Default for ContractParameters {
    fn default() -> Self {
        Self {
            weekly_hours: FULL_TIME_WEEKLY_HOURS,
            hire_date: None,
            salary_group: SalaryGroup::default(),
        }
    }
}

impl ContractParameters {
    /// Creates full-time parameters with the given hire date.
    pub fn full_time(hire_date: Option<NaiveDate>) -> Self {
        Self {
            hire_date,
            ..Self::default()
        }
    }

    /// Returns a copy with different weekly hours, clamped at zero.
    pub fn with_weekly_hours(mut self, weekly_hours: Decimal) -> Self {
        self.weekly_hours = weekly_hours.max(Decimal::ZERO);
        self
    }

    /// Returns true if the contract is below full time.
    pub fn is_part_time(&self) -> bool {
        self.weekly_hours < FULL_TIME_WEEKLY_HOURS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_weekly_hours_clamped_to_zero() {
        let contract = ContractParameters::default().with_weekly_hours(Decimal::from(-10));
        assert_eq!(contract.weekly_hours, Decimal::ZERO);
        assert!(contract.is_part_time());
    }

    #[test]
    fn test_default_contract_is_full_time_g4() {
        let contract = ContractParameters::default();
        assert_eq!(contract.weekly_hours, Decimal::from(40));
        assert_eq!(contract.salary_group, SalaryGroup::G4);
        assert!(!contract.is_part_time());
    }

    #[test]
    fn test_part_time_contract() {
        let contract = ContractParameters::default().with_weekly_hours(Decimal::from(20));
        assert!(contract.is_part_time());
    }

    #[test]
    fn test_deserialize_full_contract() {
        let json = r#"{
            "weekly_hours": "30",
            "hire_date": "1992-04-01",
            "salary_group": "G2"
        }"#;
        let contract: ContractParameters = serde_json::from_str(json).unwrap();
        assert_eq!(contract.weekly_hours, Decimal::from(30));
        assert_eq!(
            contract.hire_date,
            Some(NaiveDate::from_ymd_opt(1992, 4, 1).unwrap())
        );
        assert_eq!(contract.salary_group, SalaryGroup::G2);
    }

    #[test]
    fn test_salary_group_display() {
        assert_eq!(SalaryGroup::G1.to_string(), "G1");
        assert_eq!(serde_json::to_string(&SalaryGroup::G3).unwrap(), "\"G3\"");
    }
}
