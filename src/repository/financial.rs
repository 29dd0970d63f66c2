//! Financial config singleton

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::schemas::{FinancialConfig, DEFAULT_EXCHANGE_RATE};
use crate::store::{Collection, Store};

/// Read the persisted config, seeding it on first use.
///
/// An absent, corrupt or non-positive record is replaced by
/// `seed_rate` stamped with `now`, and the seed is written back at once.
/// A non-positive `seed_rate` falls back to `DEFAULT_EXCHANGE_RATE`.
pub fn load_or_seed<S: Store>(store: &mut S, seed_rate: Decimal, now: DateTime<Utc>) -> FinancialConfig {
    match store.try_get::<FinancialConfig>(Collection::Financial) {
        Some(config) if config.is_valid() => config,
        found => {
            if found.is_some() {
                tracing::warn!(collection = %Collection::Financial, "stored exchange rate is not positive, reseeding");
            }
            let rate = if seed_rate > Decimal::ZERO {
                seed_rate
            } else {
                tracing::warn!(%seed_rate, fallback = %DEFAULT_EXCHANGE_RATE, "seed exchange rate is not positive");
                DEFAULT_EXCHANGE_RATE
            };
            let seeded = FinancialConfig::new(rate, now);
            store.set(Collection::Financial, &seeded);
            tracing::debug!(rate = %seeded.exchange_rate, "seeded financial config");
            seeded
        }
    }
}

pub fn persist<S: Store>(store: &mut S, config: &FinancialConfig) {
    store.set(Collection::Financial, config);
}
