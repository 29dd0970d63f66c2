//! CLI command implementations

pub mod budget;
pub mod history;
pub mod method;
pub mod rate;
pub mod stats;
pub mod vehicle;

use std::path::Path;

use serde::Serialize;

use crate::config::load_settings;
use crate::domain::parse_cost;
use crate::engine::Workshop;
use crate::errors::{Result, TallerError};
use crate::store::JsonFileStore;

/// Open the workshop stored in `data_dir`
pub fn open_workshop(data_dir: &Path) -> Result<Workshop<JsonFileStore>> {
    let settings = load_settings(data_dir)?;
    Ok(Workshop::open(JsonFileStore::new(data_dir), settings))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| TallerError::InvalidJson(e.to_string()))?;
    println!("{}", text);
    Ok(())
}

fn parse_price(input: Option<&str>) -> Result<Option<rust_decimal::Decimal>> {
    input.map(parse_cost).transpose()
}
