//! Payslip reconciliation against the provincial salary tables.
//!
//! Each payslip extract is compared with what the agreement says the worker
//! should have been paid that month: the group's base salary revised for the
//! year, plus seniority. Extra payments (March, July, December and the half
//! October payment) are detected from the payslip's label and month text.

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{info, warn};

use crate::config::ConfigLoader;
use crate::models::{
    ContractParameters, PayslipExtract, PayslipKind, PayslipLine, PayslipReconciliation,
};

/// Percentage of base salary earned per completed seniority block.
pub const SENIORITY_PERCENT_PER_BLOCK: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Years in one seniority block.
pub const SENIORITY_BLOCK_YEARS: i32 = 4;

/// Paid base below which an October payslip is taken to be the half extra.
pub const OCTOBER_EXTRA_THRESHOLD: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

const EXTRA_KEYWORDS: [&str; 2] = ["EXTRA", "PAGA"];

fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Classifies a payslip from its label, month text and paid base.
///
/// Matching is case-insensitive on the Spanish payslip vocabulary. Any
/// payslip mentioning March, July or December is an extra; October is an
/// extra only when labelled as one or when the paid base is below 1000.
///
/// # Example
///
/// ```
/// use workhours_engine::calculation::classify_payslip;
/// use workhours_engine::models::PayslipKind;
/// use rust_decimal::Decimal;
///
/// assert_eq!(classify_payslip("Nómina", "Mayo", Decimal::from(1400)), PayslipKind::Monthly);
/// assert_eq!(classify_payslip("Paga extra", "Julio", Decimal::from(1400)), PayslipKind::ExtraJuly);
/// assert_eq!(classify_payslip("Nómina", "Octubre", Decimal::from(700)), PayslipKind::ExtraOctober);
/// assert_eq!(classify_payslip("Nómina", "Octubre", Decimal::from(1400)), PayslipKind::Monthly);
/// ```
pub fn classify_payslip(label: &str, month: &str, paid_base: Decimal) -> PayslipKind {
    let text = format!("{} {}", label, month).to_uppercase();

    let october = text.contains("OCTUBRE");
    let march = text.contains("MARZO");
    let july = text.contains("JULIO");
    let december = text.contains("DICIEMBRE");

    let is_extra = EXTRA_KEYWORDS.iter().any(|k| text.contains(k))
        || march
        || july
        || december
        || (october && paid_base < OCTOBER_EXTRA_THRESHOLD);

    if !is_extra {
        PayslipKind::Monthly
    } else if october {
        PayslipKind::ExtraOctober
    } else if march {
        PayslipKind::ExtraMarch
    } else if july {
        PayslipKind::ExtraJuly
    } else if december {
        PayslipKind::ExtraDecember
    } else {
        PayslipKind::ExtraOther
    }
}

/// Share of a full monthly salary a payslip of this kind pays.
pub fn payslip_multiplier(kind: PayslipKind) -> Decimal {
    match kind {
        PayslipKind::ExtraOctober => Decimal::new(5, 1),
        _ => Decimal::ONE,
    }
}

/// Seniority percentage earned by a given year: 5% per completed four-year
/// block since the hire year. Never negative.
///
/// # Example
///
/// ```
/// use workhours_engine::calculation::seniority_percent;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let hired = NaiveDate::from_ymd_opt(2010, 6, 1);
/// assert_eq!(seniority_percent(hired, 2025), Decimal::from(15));
/// assert_eq!(seniority_percent(hired, 2009), Decimal::ZERO);
/// assert_eq!(seniority_percent(None, 2025), Decimal::ZERO);
/// ```
pub fn seniority_percent(hire_date: Option<NaiveDate>, year: i32) -> Decimal {
    let Some(hired) = hire_date else {
        return Decimal::ZERO;
    };
    let blocks = (year - hired.year()).div_euclid(SENIORITY_BLOCK_YEARS).max(0);
    Decimal::from(blocks) * SENIORITY_PERCENT_PER_BLOCK
}

/// Resolves the year a payslip is valued with.
fn valuation_year(year: i32, loader: &ConfigLoader) -> i32 {
    let window = &loader.config().salaries().payslip_years;
    if (window.first..=window.last).contains(&year) {
        year
    } else {
        warn!(
            year,
            fallback = window.fallback,
            "Payslip year outside the salary tables, using fallback year"
        );
        window.fallback
    }
}

/// Reconciles a single payslip.
///
/// `withholding_percent` is the income-tax withholding as a percentage
/// (2 means 2%). The social-security rate comes from the salary tables.
pub fn reconcile_payslip(
    extract: &PayslipExtract,
    contract: &ContractParameters,
    loader: &ConfigLoader,
    withholding_percent: Decimal,
) -> PayslipLine {
    let year = valuation_year(extract.year, loader);

    let monthly_base = match loader.group_monthly_base(contract.salary_group) {
        Some(base) => round_money(base * loader.revision_factor(year)),
        None => {
            warn!(group = %contract.salary_group, "No salary table for group");
            Decimal::ZERO
        }
    };

    let kind = classify_payslip(&extract.label, &extract.month, extract.base_salary);
    let multiplier = payslip_multiplier(kind);
    let seniority = seniority_percent(contract.hire_date, year);

    let expected_base = round_money(monthly_base * multiplier);
    let expected_seniority =
        round_money(monthly_base * seniority / Decimal::from(100) * multiplier);

    let paid = extract.base_salary + extract.seniority_paid;
    let gross_difference = expected_base + expected_seniority - paid;

    let deduction_rate =
        withholding_percent / Decimal::from(100) + loader.config().salaries().social_security_rate;
    let net_difference = round_money(gross_difference * (Decimal::ONE - deduction_rate));

    PayslipLine {
        year,
        month: extract.month.clone(),
        kind,
        multiplier,
        expected_base,
        seniority_percent: seniority,
        expected_seniority,
        paid_base: extract.base_salary,
        paid_seniority: extract.seniority_paid,
        gross_difference,
        net_difference,
    }
}

/// Reconciles a batch of payslips and totals the differences.
///
/// # Example
///
/// ```
/// use workhours_engine::calculation::reconcile_payslips;
/// use workhours_engine::config::ConfigLoader;
/// use workhours_engine::models::{ContractParameters, PayslipExtract};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::bundled()?;
/// let payslip = PayslipExtract {
///     year: 2025,
///     month: "Mayo".to_string(),
///     label: "Nómina mensual".to_string(),
///     base_salary: Decimal::from(1400),
///     seniority_paid: Decimal::ZERO,
/// };
///
/// let result = reconcile_payslips(&[payslip], &ContractParameters::default(), &loader, Decimal::from(2));
///
/// // G4 base 1350.50 × 1.0927 = 1475.69
/// assert_eq!(result.total_gross_difference, Decimal::from_str("75.69").unwrap());
/// # Ok::<(), workhours_engine::error::EngineError>(())
/// ```
pub fn reconcile_payslips(
    extracts: &[PayslipExtract],
    contract: &ContractParameters,
    loader: &ConfigLoader,
    withholding_percent: Decimal,
) -> PayslipReconciliation {
    let lines: Vec<PayslipLine> = extracts
        .iter()
        .map(|extract| reconcile_payslip(extract, contract, loader, withholding_percent))
        .collect();

    let total_gross_difference: Decimal = lines.iter().map(|l| l.gross_difference).sum();
    let total_net_difference: Decimal = lines.iter().map(|l| l.net_difference).sum();

    info!(
        payslips = lines.len(),
        total_gross_difference = %total_gross_difference,
        total_net_difference = %total_net_difference,
        "Reconciled payslips"
    );

    PayslipReconciliation {
        lines,
        total_gross_difference,
        total_net_difference,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SalaryGroup;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn loader() -> ConfigLoader {
        ConfigLoader::load("config/bizkaia_retail").unwrap()
    }

    fn payslip(year: i32, label: &str, month: &str, base: &str, seniority: &str) -> PayslipExtract {
        PayslipExtract {
            year,
            month: month.to_string(),
            label: label.to_string(),
            base_salary: dec(base),
            seniority_paid: dec(seniority),
        }
    }

    fn hired_2010() -> ContractParameters {
        ContractParameters::full_time(NaiveDate::from_ymd_opt(2010, 6, 1))
    }

    #[test]
    fn test_classify_extra_keywords() {
        assert_eq!(classify_payslip("PAGA EXTRA", "", dec("1400")), PayslipKind::ExtraOther);
        assert_eq!(classify_payslip("extra", "marzo", dec("1400")), PayslipKind::ExtraMarch);
        assert_eq!(classify_payslip("", "Diciembre", dec("1400")), PayslipKind::ExtraDecember);
        assert_eq!(classify_payslip("Paga extra", "Octubre", dec("1400")), PayslipKind::ExtraOctober);
    }

    #[test]
    fn test_multiplier_halves_october_only() {
        assert_eq!(payslip_multiplier(PayslipKind::ExtraOctober), dec("0.5"));
        assert_eq!(payslip_multiplier(PayslipKind::ExtraJuly), Decimal::ONE);
        assert_eq!(payslip_multiplier(PayslipKind::Monthly), Decimal::ONE);
    }

    #[test]
    fn test_seniority_blocks() {
        let hired = NaiveDate::from_ymd_opt(2010, 6, 1);
        assert_eq!(seniority_percent(hired, 2013), Decimal::ZERO);
        assert_eq!(seniority_percent(hired, 2014), dec("5"));
        assert_eq!(seniority_percent(hired, 2022), dec("15"));
        assert_eq!(seniority_percent(hired, 2026), dec("20"));
    }

    #[test]
    fn test_monthly_payslip_with_seniority() {
        let line = reconcile_payslip(
            &payslip(2025, "Nómina", "Mayo", "1400", "200"),
            &hired_2010(),
            &loader(),
            dec("2"),
        );

        assert_eq!(line.kind, PayslipKind::Monthly);
        assert_eq!(line.expected_base, dec("1475.69"));
        assert_eq!(line.seniority_percent, dec("15"));
        // 1475.69 × 15% = 221.3535
        assert_eq!(line.expected_seniority, dec("221.35"));
        assert_eq!(line.expected_total(), dec("1697.04"));
        assert_eq!(line.gross_difference, dec("97.04"));
        // 97.04 × (1 - 0.02 - 0.0645)
        assert_eq!(line.net_difference, dec("88.84"));
    }

    #[test]
    fn test_october_extra_pays_half() {
        let line = reconcile_payslip(
            &payslip(2025, "Nómina", "Octubre", "700", "100"),
            &hired_2010(),
            &loader(),
            dec("2"),
        );

        assert_eq!(line.kind, PayslipKind::ExtraOctober);
        assert_eq!(line.multiplier, dec("0.5"));
        assert_eq!(line.expected_base, dec("737.85"));
        assert_eq!(line.expected_seniority, dec("110.68"));
        assert_eq!(line.gross_difference, dec("48.53"));
    }

    #[test]
    fn test_year_outside_window_uses_fallback() {
        let line = reconcile_payslip(
            &payslip(2019, "Nómina", "Mayo", "1350.50", "0"),
            &ContractParameters::default(),
            &loader(),
            Decimal::ZERO,
        );

        assert_eq!(line.year, 2022);
        assert_eq!(line.expected_base, dec("1350.50"));
        assert_eq!(line.gross_difference, Decimal::ZERO);
    }

    #[test]
    fn test_group_base_follows_salary_group() {
        let contract = ContractParameters {
            salary_group: SalaryGroup::G1,
            ..ContractParameters::default()
        };
        let line = reconcile_payslip(
            &payslip(2022, "Nómina", "Mayo", "2370.84", "0"),
            &contract,
            &loader(),
            Decimal::ZERO,
        );

        assert_eq!(line.expected_base, dec("2370.84"));
        assert_eq!(line.gross_difference, Decimal::ZERO);
    }

    #[test]
    fn test_overpayment_gives_negative_difference() {
        let line = reconcile_payslip(
            &payslip(2022, "Nómina", "Mayo", "1400", "0"),
            &ContractParameters::default(),
            &loader(),
            Decimal::ZERO,
        );

        assert_eq!(line.gross_difference, dec("-49.50"));
        assert!(line.net_difference < Decimal::ZERO);
    }

    #[test]
    fn test_batch_totals_sum_lines() {
        let extracts = vec![
            payslip(2025, "Nómina", "Mayo", "1400", "200"),
            payslip(2025, "Nómina", "Octubre", "700", "100"),
        ];

        let result = reconcile_payslips(&extracts, &hired_2010(), &loader(), dec("2"));

        assert_eq!(result.lines.len(), 2);
        assert_eq!(result.total_gross_difference, dec("145.57"));
        let net_sum: Decimal = result.lines.iter().map(|l| l.net_difference).sum();
        assert_eq!(result.total_net_difference, net_sum);
    }

    #[test]
    fn test_empty_batch() {
        let result = reconcile_payslips(&[], &ContractParameters::default(), &loader(), dec("2"));

        assert!(result.lines.is_empty());
        assert_eq!(result.total_gross_difference, Decimal::ZERO);
    }
}
