//! Rate commands - USD to VES exchange rate

use std::path::Path;

use super::{open_workshop, print_json};
use crate::cli::RateCommand;
use crate::errors::Result;

pub fn run(data_dir: &Path, action: RateCommand) -> Result<()> {
    let mut shop = open_workshop(data_dir)?;

    match action {
        RateCommand::Show { json } => {
            let config = shop.config();
            if json {
                return print_json(config);
            }
            println!(
                "{} Bs/USD (updated {})",
                config.exchange_rate,
                config.last_updated.format("%Y-%m-%d %H:%M UTC")
            );
        }

        RateCommand::Set { rate } => {
            let config = shop.update_rate_str(&rate)?;
            println!("Exchange rate set to {} Bs/USD", config.exchange_rate);
        }
    }

    Ok(())
}
