//! tallerflow - Vehicle workflow and budget engine for a repair shop
//!
//! This library provides the core functionality for the tallerflow CLI, including:
//! - Schema definitions for vehicles, budgets, payment methods and service records
//! - Domain logic for the stage state machine, the budget gate and currency conversion
//! - A fail-soft persistence store with file and in-memory backends
//! - Per-collection repositories and the `Workshop` engine that joins them

pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod repository;
pub mod schemas;
pub mod store;

// Re-export commonly used types
pub use engine::{VehicleDetails, Workshop, WorkshopStats};
pub use errors::{Result, TallerError};
pub use schemas::{FinancialConfig, Settings, Stage, Vehicle, VehicleBudget};
pub use store::{JsonFileStore, MemoryStore, Store};
