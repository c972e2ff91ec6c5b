//! Holiday calendar provider.
//!
//! Supplies the public holidays and agreement days for a year. Years with an
//! exact table are returned verbatim; any other year is synthesized from the
//! fixed-date holidays alone, so Good Friday and Easter Monday are missing
//! from synthesized years.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::models::{AgreementDay, Holiday, HolidaySet, HolidaySource};

/// Returns the public holidays and agreement days for a year.
///
/// This never fails: a year without exact data degrades to the fixed-date
/// holidays, and a warning is logged.
///
/// # Example
///
/// ```
/// use workhours_engine::calculation::holidays_for_year;
/// use workhours_engine::config::ConfigLoader;
/// use workhours_engine::models::HolidaySource;
///
/// let loader = ConfigLoader::bundled().unwrap();
///
/// let exact = holidays_for_year(loader.config(), 2025);
/// assert_eq!(exact.source, HolidaySource::Exact);
/// assert_eq!(exact.holidays.len(), 12);
///
/// let synthesized = holidays_for_year(loader.config(), 2031);
/// assert_eq!(synthesized.source, HolidaySource::Synthesized);
/// assert_eq!(synthesized.holidays.len(), 10);
/// assert_eq!(synthesized.agreement_days.len(), 2);
/// ```
pub fn holidays_for_year(config: &EngineConfig, year: i32) -> HolidaySet {
    let holiday_config = config.holidays();

    let (holidays, source) = match holiday_config.years.get(&year) {
        Some(list) => (list.clone(), HolidaySource::Exact),
        None => {
            warn!(
                year,
                region = %holiday_config.region,
                "No holiday table for year, synthesizing fixed-date holidays"
            );
            (synthesize_fixed_holidays(config, year), HolidaySource::Synthesized)
        }
    };

    let mut agreement_days: Vec<AgreementDay> = config
        .agreement()
        .agreement_days
        .iter()
        .filter_map(|rule| {
            NaiveDate::from_ymd_opt(year, rule.month, rule.day).map(|date| AgreementDay {
                date,
                name: rule.name.clone(),
            })
        })
        .collect();
    agreement_days.sort_by_key(|d| d.date);

    debug!(
        year,
        holidays = holidays.len(),
        agreement_days = agreement_days.len(),
        ?source,
        "Resolved holiday calendar"
    );

    HolidaySet {
        year,
        holidays,
        agreement_days,
        source,
    }
}

/// Builds the fixed-date holidays for a year.
fn synthesize_fixed_holidays(config: &EngineConfig, year: i32) -> Vec<Holiday> {
    let mut holidays: Vec<Holiday> = config
        .holidays()
        .fixed
        .iter()
        .filter_map(|fixed| {
            NaiveDate::from_ymd_opt(year, fixed.month, fixed.day).map(|date| Holiday {
                date,
                name: fixed.name.clone(),
                kind: fixed.kind,
            })
        })
        .collect();
    holidays.sort_by_key(|h| h.date);
    holidays
}
