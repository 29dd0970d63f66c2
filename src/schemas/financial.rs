//! Financial config schema - Active exchange rate

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Rate used when nothing has ever been persisted (VES per USD)
pub const DEFAULT_EXCHANGE_RATE: Decimal = Decimal::from_parts(3650, 0, 0, false, 2);

/// Process-wide exchange rate record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialConfig {
    /// VES per USD, always > 0
    pub exchange_rate: Decimal,

    pub last_updated: DateTime<Utc>,
}

impl FinancialConfig {
    pub fn new(exchange_rate: Decimal, last_updated: DateTime<Utc>) -> Self {
        FinancialConfig {
            exchange_rate,
            last_updated,
        }
    }

    /// A record is usable only with a strictly positive rate
    pub fn is_valid(&self) -> bool {
        self.exchange_rate > Decimal::ZERO
    }
}
