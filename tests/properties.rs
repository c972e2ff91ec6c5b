//! Property tests for calendar construction and the exceedance calculation.

use chrono::{Datelike, NaiveDate, Weekday};
use proptest::prelude::*;
use rust_decimal::Decimal;

use workhours_engine::calculation::{
    apply_leave_overlay, build_year_calendar, calculate_exceedance, holidays_for_year,
    set_uniform_schedule,
};
use workhours_engine::config::ConfigLoader;
use workhours_engine::models::{CalendarTotals, ContractParameters, LeaveInputs, VacationPeriod};

fn load_config() -> ConfigLoader {
    ConfigLoader::bundled().expect("bundled config is valid")
}

fn is_leap(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn totals(year: i32, hours: Decimal) -> CalendarTotals {
    CalendarTotals {
        year,
        total_hours_worked: hours,
        vacation_hours_discounted: Decimal::ZERO,
        sick_leave_hours_discounted: Decimal::ZERO,
        official_holidays: 0,
        agreement_days: 0,
        workable_days: 0,
        holiday_dates: vec![],
    }
}

/// A vacation window somewhere in 2025, possibly reversed.
fn vacation_window() -> impl Strategy<Value = Option<VacationPeriod>> {
    prop::option::of((0i64..365, -5i64..30).prop_map(|(start, len)| {
        let base = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let start = base + chrono::Duration::days(start);
        VacationPeriod::new(start, start + chrono::Duration::days(len))
    }))
}

fn leave_inputs() -> impl Strategy<Value = LeaveInputs> {
    (vacation_window(), vacation_window(), 0u32..40).prop_map(|(winter, summer, sick)| {
        LeaveInputs {
            winter,
            summer,
            sick_leave_days: sick,
        }
    })
}

/// Hours with two decimals, 0.00 to 3000.00.
fn hours() -> impl Strategy<Value = Decimal> {
    (0i64..300_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Weekly hours with one decimal, -20.0 to 40.0.
fn weekly_hours() -> impl Strategy<Value = Decimal> {
    (-200i64..=400).prop_map(|tenths| Decimal::new(tenths, 1))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn calendar_day_count_follows_leap_rule(year in 1900i32..2200) {
        let config = load_config();
        let holidays = holidays_for_year(config.config(), year);
        let calendar = build_year_calendar(year, &holidays, LeaveInputs::default());

        prop_assert_eq!(calendar.months.len(), 12);
        let expected = if is_leap(year) { 366 } else { 365 };
        prop_assert_eq!(calendar.real_day_count(), expected);
    }

    #[test]
    fn workable_flag_matches_exclusions(leave in leave_inputs()) {
        let config = load_config();
        let holidays = holidays_for_year(config.config(), 2025);
        let calendar = build_year_calendar(2025, &holidays, leave);

        for day in calendar.days() {
            let excluded = day.is_holiday()
                || day.is_agreement_day
                || day.is_vacation
                || day.is_sick_leave()
                || day.is_weekend_rest;
            prop_assert_eq!(day.is_workable, !excluded, "day {:?}", day.date);
            if let Some(date) = day.date {
                prop_assert_eq!(day.is_weekend_rest, date.weekday() == Weekday::Sun);
            }
        }
    }

    #[test]
    fn overlay_is_idempotent(leave in leave_inputs(), hours in 0i64..1000) {
        let config = load_config();
        let holidays = holidays_for_year(config.config(), 2025);
        let mut calendar = build_year_calendar(2025, &holidays, leave);
        set_uniform_schedule(&mut calendar, Decimal::new(hours, 2));

        let first = calendar.clone();
        apply_leave_overlay(&mut calendar);

        prop_assert_eq!(calendar, first);
    }

    #[test]
    fn excess_and_compensation_never_negative(
        worked in hours(),
        weekly in weekly_hours(),
        year in 2020i32..2030,
    ) {
        let config = load_config();
        let contract = ContractParameters {
            weekly_hours: weekly,
            ..ContractParameters::default()
        };
        let report = calculate_exceedance(&totals(year, worked), &contract, &config, 0);

        prop_assert!(report.excess_hours >= Decimal::ZERO);
        prop_assert!(report.daily_hours >= Decimal::ZERO);
        prop_assert!(report.compensation_days >= Decimal::ZERO);
        prop_assert!(report.valuation.amount >= Decimal::ZERO);
        if report.excess_hours.is_zero() {
            prop_assert!(report.compensation_days.is_zero());
            prop_assert!(report.valuation.amount.is_zero());
        }
    }

    #[test]
    fn amount_scales_linearly_with_excess(excess in 1i64..1000, factor in 2i64..5) {
        let config = load_config();
        let contract = ContractParameters::default();
        let ceiling = config.annual_ceiling(2025).value;

        let single = calculate_exceedance(
            &totals(2025, ceiling + Decimal::from(excess)),
            &contract,
            &config,
            0,
        );
        let scaled = calculate_exceedance(
            &totals(2025, ceiling + Decimal::from(excess * factor)),
            &contract,
            &config,
            0,
        );

        let expected = single.valuation.amount * Decimal::from(factor);
        let tolerance = Decimal::new(1, 2) * Decimal::from(factor);
        prop_assert!((scaled.valuation.amount - expected).abs() <= tolerance);
    }

    #[test]
    fn holidays_in_vacation_never_changes_excess(worked in hours(), count in 0u32..20) {
        let config = load_config();
        let contract = ContractParameters::default();
        let base = calculate_exceedance(&totals(2025, worked), &contract, &config, 0);
        let with = calculate_exceedance(&totals(2025, worked), &contract, &config, count);

        prop_assert_eq!(base.excess_hours, with.excess_hours);
        prop_assert_eq!(base.compensation_days, with.compensation_days);
        prop_assert_eq!(base.valuation.amount, with.valuation.amount);
    }
}
