//! File system utilities
//!
//! Provides path resolution and JSON file operations.

mod json;
mod paths;

pub use json::{read_json, read_settings, read_text_if_exists, write_text_atomic};
pub use paths::{
    get_collection_path, get_settings_path, resolve_cwd, resolve_data_dir, DEFAULT_DATA_DIR,
};
