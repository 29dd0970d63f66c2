//! Per-data-directory settings

mod loader;

pub use loader::load_settings;
