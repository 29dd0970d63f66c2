//! Stats command - Workshop dashboard counters

use std::path::Path;

use super::{open_workshop, print_json};
use crate::domain::STAGES;
use crate::errors::Result;

pub fn run(data_dir: &Path, json: bool) -> Result<()> {
    let shop = open_workshop(data_dir)?;
    let stats = shop.stats();
    if json {
        return print_json(&stats);
    }

    println!("Vehicles:          {}", stats.total);
    for stage in STAGES {
        println!("  {:<16} {}", stage.label(), stats.count(*stage));
    }
    println!("In progress:       {}", stats.in_progress);
    println!("Ready:             {}", stats.ready);
    println!("Awaiting approval: {}", stats.awaiting_approval);
    Ok(())
}
