//! Settings schema - Optional per-data-directory configuration

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::financial::DEFAULT_EXCHANGE_RATE;
use super::vehicle::Priority;

/// Settings read from `settings.json` in the data directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Rate seeded into an empty store on first read
    #[serde(default = "default_exchange_rate")]
    pub default_exchange_rate: Decimal,

    /// Priority used by intake when none is given
    #[serde(default)]
    pub default_priority: Priority,
}

fn default_schema_version() -> u32 {
    1
}

fn default_exchange_rate() -> Decimal {
    DEFAULT_EXCHANGE_RATE
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            schema_version: 1,
            default_exchange_rate: DEFAULT_EXCHANGE_RATE,
            default_priority: Priority::Medium,
        }
    }
}
