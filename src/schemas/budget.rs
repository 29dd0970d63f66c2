//! Budget schema - Itemized repair estimate attached to a vehicle

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Budget line category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetCategory {
    /// Spare parts
    #[default]
    Parts,
    /// Labor
    Labor,
}

impl std::fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BudgetCategory::Parts => write!(f, "parts"),
            BudgetCategory::Labor => write!(f, "labor"),
        }
    }
}

impl std::str::FromStr for BudgetCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "parts" => Ok(BudgetCategory::Parts),
            "labor" => Ok(BudgetCategory::Labor),
            _ => Err(format!("Unknown budget category: {}", s)),
        }
    }
}

/// A single cost line, denominated in USD
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    pub id: String,
    pub description: String,
    pub category: BudgetCategory,
    /// Non-negative USD amount
    pub cost: Decimal,
}

/// Snapshot of a budget as saved on a vehicle.
///
/// `total` equals the sum of `items` at the moment of saving. Readers that
/// need the live figure recompute it with `domain::compute_total`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleBudget {
    pub items: Vec<BudgetItem>,

    /// USD total at save time
    pub total: Decimal,

    /// Client approval; gates diagnosis -> execution
    pub is_approved: bool,

    pub created_at: DateTime<Utc>,
}
