//! Dual-currency conversion and display
//!
//! VES figures are always derived at read time from a USD amount and the
//! current rate; nothing here is persisted.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::errors::{Result, TallerError};
use crate::schemas::{BudgetItem, FinancialConfig, VehicleBudget};

use super::budget::compute_total;

/// Convert a USD amount to VES at `rate`; None when the product overflows
pub fn to_ves(usd: Decimal, rate: Decimal) -> Option<Decimal> {
    usd.checked_mul(rate)
}

/// VES figure of a USD total, rounded for display.
///
/// # Errors
/// * `InvalidRate` - the converted amount does not fit in a `Decimal`
pub fn convert_total(usd: Decimal, rate: Decimal) -> Result<Decimal> {
    to_ves(usd, rate).map(round_money).ok_or_else(|| {
        TallerError::InvalidRate(format!("{} converts {} USD out of range", rate, usd))
    })
}

fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Render a rounded amount behind `symbol`; a minus sign goes before the symbol
fn format_money(amount: Decimal, symbol: &str, group_sep: char, decimal_sep: char) -> String {
    let rounded = round_money(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(group_sep);
        }
        grouped.push(ch);
    }

    format!(
        "{}{}{}{}{}",
        if negative { "-" } else { "" },
        symbol,
        grouped,
        decimal_sep,
        frac_part
    )
}

/// `$1,234.50`
pub fn format_usd(amount: Decimal) -> String {
    format_money(amount, "$", ',', '.')
}

/// `Bs. 5.475,00`
pub fn format_ves(amount: Decimal) -> String {
    format_money(amount, "Bs. ", '.', ',')
}

/// Read model of a budget at the current rate
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub items: Vec<BudgetItem>,
    pub total_usd: Decimal,
    pub total_ves: Decimal,
    pub exchange_rate: Decimal,
    pub is_approved: bool,
}

impl BudgetSummary {
    /// Summarize a saved budget; the USD total is recomputed from its items
    pub fn of(budget: &VehicleBudget, config: &FinancialConfig) -> Result<Self> {
        let total_usd = compute_total(&budget.items)?;
        Ok(BudgetSummary {
            items: budget.items.clone(),
            total_usd,
            total_ves: convert_total(total_usd, config.exchange_rate)?,
            exchange_rate: config.exchange_rate,
            is_approved: budget.is_approved,
        })
    }

    pub fn formatted_usd(&self) -> String {
        format_usd(self.total_usd)
    }

    pub fn formatted_ves(&self) -> String {
        format_ves(self.total_ves)
    }
}
