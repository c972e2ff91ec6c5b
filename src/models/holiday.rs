//! Public holiday and agreement-day models.
//!
//! This module contains the [`Holiday`], [`AgreementDay`] and [`HolidaySet`]
//! types produced by the holiday calendar provider.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::HolidayKind;

/// A public holiday on a specific date.
///
/// # Example
///
/// ```
/// use workhours_engine::models::{Holiday, HolidayKind};
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2025, 7, 25).unwrap(),
///     name: "Saint James the Apostle".to_string(),
///     kind: HolidayKind::Regional,
/// };
/// assert_eq!(holiday.kind.to_string(), "Regional");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
    /// Who declares the holiday.
    pub kind: HolidayKind,
}

/// A date the agreement treats as non-working although it is not a public holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgreementDay {
    /// The date of the agreement day.
    pub date: NaiveDate,
    /// The name of the agreement day.
    pub name: String,
}

/// Where a year's holiday list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidaySource {
    /// Taken verbatim from the per-year table.
    Exact,
    /// Built from the fixed-date holidays only; movable holidays are missing.
    Synthesized,
}

/// All non-working dates for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaySet {
    /// The year covered.
    pub year: i32,
    /// Public holidays in date order.
    pub holidays: Vec<Holiday>,
    /// Agreement days in date order.
    pub agreement_days: Vec<AgreementDay>,
    /// Whether the holidays are exact or synthesized.
    pub source: HolidaySource,
}

impl HolidaySet {
    /// Finds the public holiday on a date.
    pub fn holiday_on(&self, date: NaiveDate) -> Option<&Holiday> {
        self.holidays.iter().find(|h| h.date == date)
    }

    /// Finds the agreement day on a date.
    pub fn agreement_day_on(&self, date: NaiveDate) -> Option<&AgreementDay> {
        self.agreement_days.iter().find(|d| d.date == date)
    }
}
