//! Vacation windows and sick-leave inputs.
//!
//! This module contains the [`VacationPeriod`] and [`LeaveInputs`] types the
//! worker supplies before the calendar overlay runs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An inclusive range of vacation days.
///
/// A reversed range (end before start) is kept as entered but covers no days.
///
/// # Example
///
/// ```
/// use workhours_engine::models::VacationPeriod;
/// use chrono::NaiveDate;
///
/// let summer = VacationPeriod {
///     start: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
///     end: NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
/// };
///
/// assert_eq!(summer.day_count(), 15);
/// assert!(summer.contains(NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationPeriod {
    /// First vacation day (inclusive).
    pub start: NaiveDate,
    /// Last vacation day (inclusive).
    pub end: NaiveDate,
}

impl VacationPeriod {
    /// Creates a period from two dates.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parses a period from date-input text (`YYYY-MM-DD`).
    ///
    /// Either side left blank means no period was entered and yields `None`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDate`] if a non-blank side is not a date.
    ///
    /// # Example
    ///
    /// ```
    /// use workhours_engine::models::VacationPeriod;
    ///
    /// let period = VacationPeriod::from_input("2025-02-10", "2025-02-14")?;
    /// assert_eq!(period.map(|p| p.day_count()), Some(5));
    ///
    /// assert_eq!(VacationPeriod::from_input("", "2025-02-14")?, None);
    /// # Ok::<(), workhours_engine::error::EngineError>(())
    /// ```
    pub fn from_input(start: &str, end: &str) -> EngineResult<Option<Self>> {
        let (start, end) = (start.trim(), end.trim());
        if start.is_empty() || end.is_empty() {
            return Ok(None);
        }
        Ok(Some(Self {
            start: parse_input_date(start)?,
            end: parse_input_date(end)?,
        }))
    }

    /// Number of calendar days covered, 0 when the range is reversed.
    pub fn day_count(&self) -> u32 {
        if self.end < self.start {
            return 0;
        }
        (self.end - self.start).num_days() as u32 + 1
    }

    /// Checks if a date falls inside the period (inclusive on both ends).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

fn parse_input_date(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| EngineError::InvalidDate {
        value: value.to_string(),
        message: e.to_string(),
    })
}

/// Vacation and sick-leave inputs that drive the leave overlay.
///
/// Up to two vacation windows are supported (winter and summer) along with a
/// count of sick-leave days to allocate automatically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveInputs {
    /// Winter vacation window.
    #[serde(default)]
    pub winter: Option<VacationPeriod>,
    /// Summer vacation window.
    #[serde(default)]
    pub summer: Option<VacationPeriod>,
    /// Calendar days to consume as automatic sick leave.
    #[serde(default)]
    pub sick_leave_days: u32,
}

impl LeaveInputs {
    /// Iterates over the vacation windows that were entered.
    pub fn vacation_periods(&self) -> impl Iterator<Item = &VacationPeriod> {
        self.winter.iter().chain(self.summer.iter())
    }

    /// Checks if a date falls inside either vacation window.
    pub fn is_vacation(&self, date: NaiveDate) -> bool {
        self.vacation_periods().any(|p| p.contains(date))
    }

    /// Total vacation days across both windows.
    ///
    /// Overlapping windows are counted twice, as entered.
    pub fn vacation_day_count(&self) -> u32 {
        self.vacation_periods().map(VacationPeriod::day_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_reversed_period_has_no_days() {
        let period = VacationPeriod::new(date(2025, 8, 15), date(2025, 8, 1));
        assert_eq!(period.day_count(), 0);
        assert!(!period.contains(date(2025, 8, 10)));
    }

    #[test]
    fn test_single_day_period() {
        let period = VacationPeriod::new(date(2025, 3, 3), date(2025, 3, 3));
        assert_eq!(period.day_count(), 1);
        assert!(period.contains(date(2025, 3, 3)));
    }

    #[test]
    fn test_summer_period_counts_fifteen_days() {
        let period = VacationPeriod::new(date(2025, 8, 1), date(2025, 8, 15));
        assert_eq!(period.day_count(), 15);
    }

    #[test]
    fn test_period_spanning_year_end() {
        let period = VacationPeriod::new(date(2024, 12, 30), date(2025, 1, 2));
        assert_eq!(period.day_count(), 4);
        assert!(period.contains(date(2025, 1, 1)));
    }

    #[test]
    fn test_from_input_blank_side_is_none() {
        assert_eq!(VacationPeriod::from_input("2025-01-01", " ").unwrap(), None);
        assert_eq!(VacationPeriod::from_input("", "").unwrap(), None);
    }

    #[test]
    fn test_from_input_rejects_garbage() {
        let result = VacationPeriod::from_input("2025-01-01", "next friday");
        match result {
            Err(EngineError::InvalidDate { value, .. }) => assert_eq!(value, "next friday"),
            other => panic!("Expected InvalidDate error, got {:?}", other),
        }
    }

    #[test]
    fn test_leave_inputs_checks_both_windows() {
        let leave = LeaveInputs {
            winter: Some(VacationPeriod::new(date(2025, 2, 10), date(2025, 2, 14))),
            summer: Some(VacationPeriod::new(date(2025, 8, 1), date(2025, 8, 15))),
            sick_leave_days: 0,
        };
        assert!(leave.is_vacation(date(2025, 2, 12)));
        assert!(leave.is_vacation(date(2025, 8, 1)));
        assert!(!leave.is_vacation(date(2025, 5, 5)));
        assert_eq!(leave.vacation_day_count(), 20);
    }

    #[test]
    fn test_default_leave_inputs_are_empty() {
        let leave = LeaveInputs::default();
        assert_eq!(leave.vacation_periods().count(), 0);
        assert_eq!(leave.vacation_day_count(), 0);
        assert!(!leave.is_vacation(date(2025, 8, 1)));
    }

    #[test]
    fn test_deserialize_leave_inputs() {
        let json = r#"{
            "summer": { "start": "2025-08-01", "end": "2025-08-15" },
            "sick_leave_days": 3
        }"#;
        let leave: LeaveInputs = serde_json::from_str(json).unwrap();
        assert_eq!(leave.winter, None);
        assert_eq!(leave.summer.map(|p| p.day_count()), Some(15));
        assert_eq!(leave.sick_leave_days, 3);
    }
}
