//! History commands - Completed services per vehicle

use std::path::Path;

use chrono::Local;

use super::{open_workshop, print_json};
use crate::cli::HistoryCommand;
use crate::errors::Result;
use crate::schemas::{ServiceRecord, ServiceRecordDraft, ServiceRecordPatch};

pub fn run(data_dir: &Path, action: HistoryCommand) -> Result<()> {
    let mut shop = open_workshop(data_dir)?;

    match action {
        HistoryCommand::List { vehicle_id, json } => {
            let records = shop.service_history(&vehicle_id);
            if json {
                return print_json(records);
            }
            if records.is_empty() {
                println!("No service records for {}", vehicle_id);
            }
            for record in records {
                println!("{}", describe(record));
            }
        }

        HistoryCommand::Add {
            vehicle_id,
            service_type,
            date,
            fields,
        } => {
            let draft = ServiceRecordDraft {
                date: date.unwrap_or_else(|| Local::now().date_naive()),
                service_type,
                description: fields.description.unwrap_or_default(),
                mileage: fields.mileage.unwrap_or_default(),
                parts: fields.parts,
                evidence_url: fields.photos_url,
            };
            let record = shop.add_service_record(&vehicle_id, draft)?;
            println!("Recorded {}", describe(&record));
        }

        HistoryCommand::Edit {
            vehicle_id,
            record_id,
            service_type,
            date,
            fields,
        } => {
            let patch = ServiceRecordPatch {
                date,
                service_type,
                description: fields.description,
                mileage: fields.mileage,
                parts: fields.parts,
                evidence_url: fields.photos_url,
            };
            let record = shop.update_service_record(&vehicle_id, &record_id, &patch)?;
            println!("Updated {}", describe(&record));
        }

        HistoryCommand::Remove {
            vehicle_id,
            record_id,
        } => {
            if shop.remove_service_record(&vehicle_id, &record_id) {
                println!("Removed {}", record_id);
            } else {
                println!("No record {} for {}", record_id, vehicle_id);
            }
        }
    }

    Ok(())
}

fn describe(record: &ServiceRecord) -> String {
    let mut line = format!(
        "{}  {}  {}  {} km",
        record.id, record.date, record.service_type, record.mileage
    );
    if !record.description.is_empty() {
        line.push_str(&format!("  {}", record.description));
    }
    if let Some(parts) = &record.parts {
        line.push_str(&format!("  [{}]", parts));
    }
    line
}
