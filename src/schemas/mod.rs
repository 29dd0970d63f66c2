//! Schema types for the workshop engine
//!
//! All collection types serialize with camelCase keys so existing data
//! directories stay readable.

mod budget;
mod config;
mod financial;
mod payment;
mod service;
mod vehicle;

pub use budget::{BudgetCategory, BudgetItem, VehicleBudget};
pub use config::Settings;
pub use financial::{FinancialConfig, DEFAULT_EXCHANGE_RATE};
pub use payment::{
    Currency, PaymentMethod, PaymentMethodDraft, PaymentMethodPatch, PaymentMethodType,
};
pub use service::{ServiceRecord, ServiceRecordDraft, ServiceRecordPatch};
pub use vehicle::{Priority, Stage, Vehicle, VehicleDraft, VehiclePatch};
