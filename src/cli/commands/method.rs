//! Payment method commands

use std::path::Path;

use super::{open_workshop, print_json};
use crate::cli::{MethodCommand, MethodFields};
use crate::errors::Result;
use crate::schemas::{PaymentMethod, PaymentMethodDraft, PaymentMethodPatch, PaymentMethodType};

pub fn run(data_dir: &Path, action: MethodCommand) -> Result<()> {
    let mut shop = open_workshop(data_dir)?;

    match action {
        MethodCommand::List { active, json } => {
            let methods: Vec<&PaymentMethod> = shop
                .payment_methods()
                .iter()
                .filter(|m| !active || m.is_active)
                .collect();
            if json {
                return print_json(&methods);
            }
            if methods.is_empty() {
                println!("No payment methods");
            }
            for method in methods {
                println!("{}", describe(method));
            }
        }

        MethodCommand::Add { method_type, fields } => {
            let draft = PaymentMethodDraft {
                method_type,
                bank_name: fields.bank_name,
                account_name: fields.account_name,
                account_number: fields.account_number,
                email: fields.email,
                currency: fields.currency.unwrap_or_default(),
                notes: fields.notes,
            };
            let method = shop.add_payment_method(draft)?;
            println!("Added {}", describe(&method));
        }

        MethodCommand::Edit {
            id,
            method_type,
            fields,
        } => {
            let method = shop.update_payment_method(&id, &patch_from(method_type, fields))?;
            println!("Updated {}", describe(&method));
        }

        MethodCommand::Toggle { id } => {
            let method = shop.toggle_payment_method(&id)?;
            println!("{}", describe(&method));
        }

        MethodCommand::Remove { id } => {
            let method = shop.remove_payment_method(&id)?;
            println!("Removed {}", method.id);
        }
    }

    Ok(())
}

fn patch_from(method_type: Option<PaymentMethodType>, fields: MethodFields) -> PaymentMethodPatch {
    PaymentMethodPatch {
        method_type,
        bank_name: fields.bank_name,
        account_name: fields.account_name,
        account_number: fields.account_number,
        email: fields.email,
        currency: fields.currency,
        is_active: None,
        notes: fields.notes,
    }
}

fn describe(method: &PaymentMethod) -> String {
    let detail = [
        method.bank_name.as_deref(),
        method.account_number.as_deref(),
        method.email.as_deref(),
        method.account_name.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" / ");

    format!(
        "{}  {} {} {}{}",
        method.id,
        method.method_type,
        method.currency,
        detail,
        if method.is_active { "" } else { " (inactive)" }
    )
}
