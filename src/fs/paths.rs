//! Path resolution utilities
//!
//! Every collection lives in its own file inside the data directory.

use std::path::{Path, PathBuf};

use crate::store::Collection;

/// Name of the data directory created under the working directory
pub const DEFAULT_DATA_DIR: &str = ".tallerflow";

/// Resolve the data directory, optionally using an override.
///
/// # Arguments
/// * `data_dir` - Explicit directory (flag or environment)
/// * `cwd` - Base for the default `.tallerflow` directory
pub fn resolve_data_dir(data_dir: Option<&Path>, cwd: Option<&Path>) -> PathBuf {
    match data_dir {
        Some(path) => path.to_path_buf(),
        None => resolve_cwd(cwd).join(DEFAULT_DATA_DIR),
    }
}

/// Resolve the current working directory, optionally using an override.
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Get the path of a collection file.
pub fn get_collection_path(data_dir: &Path, collection: Collection) -> PathBuf {
    data_dir.join(format!("{}.json", collection.key()))
}

/// Get the path to the settings.json file.
pub fn get_settings_path(data_dir: &Path) -> PathBuf {
    data_dir.join("settings.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_paths() {
        let root = PathBuf::from("/data");
        assert_eq!(
            get_collection_path(&root, Collection::Vehicles),
            PathBuf::from("/data/vehicles.json")
        );
        assert_eq!(
            get_collection_path(&root, Collection::PaymentMethods),
            PathBuf::from("/data/methods.json")
        );
        assert_eq!(
            get_collection_path(&root, Collection::Financial),
            PathBuf::from("/data/financial.json")
        );
        assert_eq!(
            get_collection_path(&root, Collection::History),
            PathBuf::from("/data/history.json")
        );
    }

    #[test]
    fn test_get_settings_path() {
        let root = PathBuf::from("/data");
        assert_eq!(get_settings_path(&root), PathBuf::from("/data/settings.json"));
    }

    #[test]
    fn test_resolve_data_dir_with_override() {
        let dir = PathBuf::from("/custom/data");
        assert_eq!(resolve_data_dir(Some(&dir), None), dir);
    }

    #[test]
    fn test_resolve_data_dir_default() {
        let cwd = PathBuf::from("/work");
        assert_eq!(
            resolve_data_dir(None, Some(&cwd)),
            PathBuf::from("/work/.tallerflow")
        );
    }

    #[test]
    fn test_resolve_cwd_without_override() {
        let resolved = resolve_cwd(None);
        assert!(!resolved.as_os_str().is_empty());
    }
}
