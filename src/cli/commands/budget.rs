//! Budget commands - Line items and client approval

use std::path::Path;

use super::{open_workshop, print_json};
use crate::cli::BudgetCommand;
use crate::domain::format_usd;
use crate::engine::Workshop;
use crate::errors::Result;
use crate::store::Store;

pub fn run(data_dir: &Path, action: BudgetCommand) -> Result<()> {
    let mut shop = open_workshop(data_dir)?;

    match action {
        BudgetCommand::Show { vehicle_id, json } => {
            let summary = shop.budget_summary(&vehicle_id)?;
            if json {
                return print_json(&summary);
            }
            let Some(summary) = summary else {
                println!("No budget for {}", vehicle_id);
                return Ok(());
            };
            for item in &summary.items {
                println!(
                    "{}  {:<6} {:>12}  {}",
                    item.id,
                    item.category.to_string(),
                    format_usd(item.cost),
                    item.description
                );
            }
            println!("Total: {}", summary.formatted_usd());
            println!("       {} @ {}", summary.formatted_ves(), summary.exchange_rate);
            println!("Approved: {}", if summary.is_approved { "yes" } else { "no" });
        }

        BudgetCommand::AddItem {
            vehicle_id,
            description,
            cost,
            category,
        } => {
            let mut editor = shop.budget_editor(&vehicle_id)?;
            let item = editor.add_item(&description, &cost, category)?;
            let budget = shop.save_budget(&vehicle_id, &editor)?;
            println!("Added {} ({}); total {}", item.description, item.id, format_usd(budget.total));
        }

        BudgetCommand::RemoveItem { vehicle_id, item_id } => {
            let mut editor = shop.budget_editor(&vehicle_id)?;
            if !editor.remove_item(&item_id) {
                println!("No item {} in this budget", item_id);
                return Ok(());
            }
            let budget = shop.save_budget(&vehicle_id, &editor)?;
            println!("Removed {}; total {}", item_id, format_usd(budget.total));
        }

        BudgetCommand::Approve { vehicle_id } => {
            set_approval(&mut shop, &vehicle_id, true)?;
            println!("Budget approved");
        }

        BudgetCommand::Revoke { vehicle_id } => {
            set_approval(&mut shop, &vehicle_id, false)?;
            println!("Budget approval withdrawn");
        }
    }

    Ok(())
}

fn set_approval<S: Store>(shop: &mut Workshop<S>, vehicle_id: &str, approved: bool) -> Result<()> {
    let mut editor = shop.budget_editor(vehicle_id)?;
    editor.set_approved(approved);
    shop.save_budget(vehicle_id, &editor)?;
    Ok(())
}
