//! Performance benchmarks for the working-time reconciliation engine.
//!
//! This benchmark suite covers the synchronous recompute path:
//! - Building a year calendar: < 200μs mean
//! - One leave overlay pass: < 50μs mean
//! - A full hour edit (overlay and totals): < 100μs mean
//! - The exceedance calculation: < 20μs mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use workhours_engine::calculation::{
    apply_leave_overlay, build_year_calendar, calculate_exceedance, holidays_for_year,
    recompute_totals, set_day_hours, set_uniform_schedule,
};
use workhours_engine::config::ConfigLoader;
use workhours_engine::models::{ContractParameters, LeaveInputs, VacationPeriod, YearCalendar};

fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config/bizkaia_retail").expect("Failed to load config")
}

fn leave_with_sick_days(sick_leave_days: u32) -> LeaveInputs {
    LeaveInputs {
        winter: VacationPeriod::from_input("2025-02-10", "2025-02-14").expect("valid dates"),
        summer: VacationPeriod::from_input("2025-08-01", "2025-08-15").expect("valid dates"),
        sick_leave_days,
    }
}

fn filled_calendar(config: &ConfigLoader, leave: LeaveInputs) -> YearCalendar {
    let holidays = holidays_for_year(config.config(), 2025);
    let mut calendar = build_year_calendar(2025, &holidays, leave);
    set_uniform_schedule(&mut calendar, Decimal::new(667, 2));
    calendar
}

/// Benchmark: Building a full year calendar.
///
/// Target: < 200μs mean
fn bench_build_calendar(c: &mut Criterion) {
    let config = load_config();
    let holidays = holidays_for_year(config.config(), 2025);
    let leave = leave_with_sick_days(10);

    c.bench_function("build_calendar", |b| {
        b.iter(|| black_box(build_year_calendar(2025, black_box(&holidays), leave)))
    });
}

/// Benchmark: Leave overlay with an increasing number of sick days.
///
/// Target: < 50μs mean
fn bench_leave_overlay(c: &mut Criterion) {
    let config = load_config();

    let mut group = c.benchmark_group("leave_overlay");

    for sick_days in [0u32, 10, 50, 200].iter() {
        let calendar = filled_calendar(&config, leave_with_sick_days(*sick_days));

        group.throughput(Throughput::Elements(*sick_days as u64));
        group.bench_with_input(BenchmarkId::new("sick_days", sick_days), sick_days, |b, _| {
            let mut calendar = calendar.clone();
            b.iter(|| black_box(apply_leave_overlay(&mut calendar)))
        });
    }

    group.finish();
}

/// Benchmark: One hour entry followed by overlay and totals.
///
/// Target: < 100μs mean
fn bench_day_edit(c: &mut Criterion) {
    let config = load_config();
    let mut calendar = filled_calendar(&config, leave_with_sick_days(10));
    let date = chrono::NaiveDate::from_ymd_opt(2025, 5, 5).expect("valid date");

    c.bench_function("set_day_hours", |b| {
        b.iter(|| black_box(set_day_hours(&mut calendar, date, black_box("7.5"))))
    });
}

/// Benchmark: Totals and exceedance from a filled calendar.
///
/// Target: < 20μs mean for the exceedance alone
fn bench_exceedance(c: &mut Criterion) {
    let config = load_config();
    let calendar = filled_calendar(&config, leave_with_sick_days(10));
    let totals = recompute_totals(&calendar);
    let contract = ContractParameters::default();

    c.bench_function("recompute_totals", |b| {
        b.iter(|| black_box(recompute_totals(black_box(&calendar))))
    });

    c.bench_function("exceedance", |b| {
        b.iter(|| black_box(calculate_exceedance(black_box(&totals), &contract, &config, 1)))
    });
}

criterion_group!(
    benches,
    bench_build_calendar,
    bench_leave_overlay,
    bench_day_edit,
    bench_exceedance,
);
criterion_main!(benches);
