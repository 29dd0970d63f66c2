//! Vehicle commands - Intake, listing, editing and stage moves

use std::path::Path;

use chrono::Local;

use super::{open_workshop, parse_price, print_json};
use crate::cli::VehicleCommand;
use crate::domain::format_usd;
use crate::errors::Result;
use crate::schemas::{Vehicle, VehicleDraft, VehiclePatch};

pub fn run(data_dir: &Path, action: VehicleCommand) -> Result<()> {
    let mut shop = open_workshop(data_dir)?;

    match action {
        VehicleCommand::Add {
            plate,
            model,
            client,
            entry_date,
            priority,
            price,
        } => {
            let draft = VehicleDraft {
                plate,
                model,
                client,
                entry_date: entry_date.unwrap_or_else(|| Local::now().date_naive()),
                priority: priority.unwrap_or(shop.settings().default_priority),
                price: parse_price(price.as_deref())?,
            };
            let vehicle = shop.register_vehicle(draft)?;
            println!("Registered {} ({})", vehicle.plate, vehicle.id);
        }

        VehicleCommand::List { stage, json } => {
            let vehicles: Vec<&Vehicle> = match stage {
                Some(stage) => shop.vehicles_in(stage),
                None => shop.vehicles().iter().collect(),
            };
            if json {
                return print_json(&vehicles);
            }
            if vehicles.is_empty() {
                println!("No vehicles");
            }
            for vehicle in vehicles {
                println!("{}", summary_line(vehicle));
            }
        }

        VehicleCommand::Show { id, json } => {
            let details = shop.vehicle_details(&id)?;
            if json {
                return print_json(&details);
            }
            let v = &details.vehicle;
            println!("{}", summary_line(v));
            println!("  Entry:    {}", v.entry_date);
            println!("  Priority: {}", v.priority);
            if let Some(price) = v.price {
                println!("  Price:    {}", format_usd(price));
            }
            match &details.budget {
                Some(budget) => println!(
                    "  Budget:   {} / {}{}",
                    budget.formatted_usd(),
                    budget.formatted_ves(),
                    if budget.is_approved { " (approved)" } else { "" }
                ),
                None => println!("  Budget:   none"),
            }
            println!("  Services: {}", details.history.len());
            for record in &details.history {
                println!("    {}  {}  {} km", record.date, record.service_type, record.mileage);
            }
        }

        VehicleCommand::Edit {
            id,
            plate,
            model,
            client,
            entry_date,
            priority,
            price,
            clear_price,
        } => {
            let patch = VehiclePatch {
                plate,
                model,
                client,
                entry_date,
                priority,
                price: parse_price(price.as_deref())?,
                clear_price,
            };
            if patch.is_empty() {
                println!("Nothing to change");
                return Ok(());
            }
            let vehicle = shop.update_vehicle(&id, &patch)?;
            println!("{}", summary_line(&vehicle));
        }

        VehicleCommand::Move { id, stage } => {
            let vehicle = shop.move_stage(&id, stage)?;
            println!("{} is now in {}", vehicle.plate, vehicle.stage.label());
        }

        VehicleCommand::Remove { id } => {
            let vehicle = shop.remove_vehicle(&id)?;
            println!("Removed {} ({})", vehicle.plate, vehicle.id);
        }
    }

    Ok(())
}

fn summary_line(vehicle: &Vehicle) -> String {
    format!(
        "{}  {:<10} {:<14} {} / {}",
        vehicle.id,
        vehicle.plate,
        vehicle.stage.label(),
        vehicle.model,
        vehicle.client
    )
}
