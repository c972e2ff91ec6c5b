//! Payslip models for the salary reconciliation.
//!
//! A [`PayslipExtract`] is what the external extraction service returns for
//! one scanned payslip; a [`PayslipLine`] is the same payslip compared with
//! what the salary tables say should have been paid.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Salary fields read from a payslip image.
///
/// # Example
///
/// ```
/// use workhours_engine::models::PayslipExtract;
///
/// let json = r#"{"year": 2024, "month": "MAYO", "base_salary": "1290.10", "seniority_paid": "64.50"}"#;
/// let extract: PayslipExtract = serde_json::from_str(json).unwrap();
/// assert_eq!(extract.label, "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipExtract {
    /// Year printed on the payslip.
    pub year: i32,
    /// Month text printed on the payslip.
    #[serde(default)]
    pub month: String,
    /// Payslip type text (e.g. "PAGA EXTRA").
    #[serde(default)]
    pub label: String,
    /// Base salary paid.
    #[serde(default)]
    pub base_salary: Decimal,
    /// Seniority supplement paid.
    #[serde(default)]
    pub seniority_paid: Decimal,
}

/// Whether a payslip is a monthly payment or one of the extra payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayslipKind {
    /// Ordinary monthly payslip.
    Monthly,
    /// March extra payment.
    ExtraMarch,
    /// July extra payment.
    ExtraJuly,
    /// October extra payment, paid at half a month.
    ExtraOctober,
    /// December extra payment.
    ExtraDecember,
    /// Extra payment whose month could not be identified.
    ExtraOther,
}

impl PayslipKind {
    /// Returns true for every extra payment.
    pub fn is_extra(&self) -> bool {
        !matches!(self, PayslipKind::Monthly)
    }

    /// Display name of the payslip kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            PayslipKind::Monthly => "Monthly",
            PayslipKind::ExtraMarch => "EXTRA March (100%)",
            PayslipKind::ExtraJuly => "EXTRA July (100%)",
            PayslipKind::ExtraOctober => "EXTRA October (50%)",
            PayslipKind::ExtraDecember => "EXTRA December (100%)",
            PayslipKind::ExtraOther => "EXTRA payment",
        }
    }
}

/// One payslip compared against the agreement tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipLine {
    /// The year the expected amounts were taken from.
    pub year: i32,
    /// Month text as extracted.
    pub month: String,
    /// Detected payslip kind.
    pub kind: PayslipKind,
    /// Share of a monthly salary this payslip should carry.
    pub multiplier: Decimal,
    /// Base salary the agreement requires.
    pub expected_base: Decimal,
    /// Seniority percentage earned in this year.
    pub seniority_percent: Decimal,
    /// Seniority supplement the agreement requires.
    pub expected_seniority: Decimal,
    /// Base salary actually paid.
    pub paid_base: Decimal,
    /// Seniority supplement actually paid.
    pub paid_seniority: Decimal,
    /// Expected minus paid, before withholding.
    pub gross_difference: Decimal,
    /// Gross difference after income-tax withholding and social security.
    pub net_difference: Decimal,
}

impl PayslipLine {
    /// Expected base plus expected seniority.
    pub fn expected_total(&self) -> Decimal {
        self.expected_base + self.expected_seniority
    }
}

/// All payslips of a worker compared against the agreement tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipReconciliation {
    /// One line per payslip, in the order supplied.
    pub lines: Vec<PayslipLine>,
    /// Sum of gross differences.
    pub total_gross_difference: Decimal,
    /// Sum of net differences.
    pub total_net_difference: Decimal,
}
