//! CLI module for tallerflow
//!
//! Provides the command-line interface using clap.

pub mod commands;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::schemas::{BudgetCategory, Currency, PaymentMethodType, Priority, Stage};

/// tallerflow - Repair shop workflow, budgets and service history
#[derive(Parser, Debug)]
#[command(name = "tallerflow")]
#[command(version)]
#[command(about = "Track vehicles through the repair shop, their budgets and service history")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Directory holding the JSON collections (default: ./.tallerflow)
    #[arg(long, global = true, env = "TALLERFLOW_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register, inspect and move vehicles
    Vehicle {
        #[command(subcommand)]
        action: VehicleCommand,
    },

    /// Edit and approve a vehicle's budget
    Budget {
        #[command(subcommand)]
        action: BudgetCommand,
    },

    /// Show or set the USD to VES exchange rate
    Rate {
        #[command(subcommand)]
        action: RateCommand,
    },

    /// Manage accepted payment methods
    Method {
        #[command(subcommand)]
        action: MethodCommand,
    },

    /// Manage a vehicle's service history
    History {
        #[command(subcommand)]
        action: HistoryCommand,
    },

    /// Show workshop counters
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum VehicleCommand {
    /// Register a vehicle at reception
    Add {
        plate: String,
        model: String,
        client: String,

        /// Entry date, YYYY-MM-DD (default: today)
        #[arg(long)]
        entry_date: Option<NaiveDate>,

        /// low, medium or high (default from settings)
        #[arg(long)]
        priority: Option<Priority>,

        /// Quoted price in USD
        #[arg(long)]
        price: Option<String>,
    },

    /// List vehicles, optionally in one stage
    List {
        /// reception, diagnosis, execution, quality or ready
        #[arg(long)]
        stage: Option<Stage>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a vehicle with its history and budget
    Show {
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit a vehicle's descriptive fields
    Edit {
        id: String,

        #[arg(long)]
        plate: Option<String>,

        #[arg(long)]
        model: Option<String>,

        #[arg(long)]
        client: Option<String>,

        #[arg(long)]
        entry_date: Option<NaiveDate>,

        #[arg(long)]
        priority: Option<Priority>,

        #[arg(long)]
        price: Option<String>,

        /// Remove the quoted price
        #[arg(long, conflicts_with = "price")]
        clear_price: bool,
    },

    /// Move a vehicle to another stage
    Move { id: String, stage: Stage },

    /// Remove a vehicle (its service history is kept)
    Remove { id: String },
}

#[derive(Subcommand, Debug)]
pub enum BudgetCommand {
    /// Show the budget in USD and VES
    Show {
        vehicle_id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Append a line item
    AddItem {
        vehicle_id: String,
        description: String,

        /// Cost in USD; `12,50` and `12.50` are both accepted
        #[arg(allow_hyphen_values = true)]
        cost: String,

        /// parts or labor
        #[arg(long, default_value = "parts")]
        category: BudgetCategory,
    },

    /// Remove a line item by id
    RemoveItem { vehicle_id: String, item_id: String },

    /// Mark the budget approved by the client
    Approve { vehicle_id: String },

    /// Withdraw approval
    Revoke { vehicle_id: String },
}

#[derive(Subcommand, Debug)]
pub enum RateCommand {
    /// Show the current rate
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set a new rate in VES per USD
    Set {
        #[arg(allow_hyphen_values = true)]
        rate: String,
    },
}

/// Optional payment method fields shared by `add` and `edit`
#[derive(Args, Debug, Default)]
pub struct MethodFields {
    #[arg(long)]
    pub bank_name: Option<String>,

    /// Account holder
    #[arg(long)]
    pub account_name: Option<String>,

    /// Account number, or phone for mobile payment
    #[arg(long)]
    pub account_number: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// USD or VES
    #[arg(long)]
    pub currency: Option<Currency>,

    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum MethodCommand {
    /// List payment methods
    List {
        /// Only active methods
        #[arg(long)]
        active: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a payment method
    Add {
        /// transfer, mobile_payment, zelle, cash or binance
        #[arg(value_name = "TYPE")]
        method_type: PaymentMethodType,

        #[command(flatten)]
        fields: MethodFields,
    },

    /// Edit a payment method; an empty value clears a field
    Edit {
        id: String,

        #[arg(long = "type", value_name = "TYPE")]
        method_type: Option<PaymentMethodType>,

        #[command(flatten)]
        fields: MethodFields,
    },

    /// Activate or deactivate a payment method
    Toggle { id: String },

    /// Delete a payment method
    Remove { id: String },
}

/// Optional service record fields shared by `add` and `edit`
#[derive(Args, Debug, Default)]
pub struct RecordFields {
    #[arg(long)]
    pub description: Option<String>,

    /// Odometer reading in km
    #[arg(long)]
    pub mileage: Option<u64>,

    /// Parts used
    #[arg(long)]
    pub parts: Option<String>,

    /// Link to photos or other evidence
    #[arg(long)]
    pub photos_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommand {
    /// List a vehicle's service records, newest first
    List {
        vehicle_id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Record a completed service
    Add {
        vehicle_id: String,
        service_type: String,

        /// Service date, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,

        #[command(flatten)]
        fields: RecordFields,
    },

    /// Edit a service record
    Edit {
        vehicle_id: String,
        record_id: String,

        #[arg(long)]
        service_type: Option<String>,

        #[arg(long)]
        date: Option<NaiveDate>,

        #[command(flatten)]
        fields: RecordFields,
    },

    /// Delete a service record
    Remove { vehicle_id: String, record_id: String },
}
