//! Settings loading with defaults

use std::path::Path;

use rust_decimal::Decimal;

use crate::errors::{Result, TallerError};
use crate::fs;
use crate::schemas::Settings;

/// Newest `settings.json` layout this build understands
pub const SETTINGS_SCHEMA_VERSION: u32 = 1;

/// Load settings for a data directory, falling back to defaults.
///
/// A missing `settings.json` yields `Settings::default()`; fields absent
/// from the file take their defaults. A malformed file is an error, and
/// so is a `defaultExchangeRate` that is zero or negative. A newer
/// `schemaVersion` is loaded with a warning; unknown fields are ignored.
pub fn load_settings(data_dir: &Path) -> Result<Settings> {
    let settings = fs::read_settings(data_dir)?;
    if settings.default_exchange_rate <= Decimal::ZERO {
        return Err(TallerError::InvalidRate(format!(
            "defaultExchangeRate {} in settings.json",
            settings.default_exchange_rate
        )));
    }
    if settings.schema_version > SETTINGS_SCHEMA_VERSION {
        tracing::warn!(
            found = settings.schema_version,
            supported = SETTINGS_SCHEMA_VERSION,
            "settings.json was written by a newer version, unknown fields are ignored"
        );
    }
    tracing::debug!(
        data_dir = %data_dir.display(),
        rate = %settings.default_exchange_rate,
        "settings loaded"
    );
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::Priority;
    use std::fs as std_fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_settings_missing_dir() {
        let temp = TempDir::new().unwrap();
        let settings = load_settings(&temp.path().join("absent")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_partial_file() {
        let temp = TempDir::new().unwrap();
        std_fs::write(
            temp.path().join("settings.json"),
            r#"{ "defaultExchangeRate": "40.25" }"#,
        )
        .unwrap();

        let settings = load_settings(temp.path()).unwrap();
        assert_eq!(settings.default_exchange_rate, Decimal::new(4025, 2));
        // Unspecified fields keep their defaults
        assert_eq!(settings.default_priority, Priority::Medium);
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_load_settings_malformed() {
        let temp = TempDir::new().unwrap();
        std_fs::write(temp.path().join("settings.json"), "{ nope").unwrap();

        let err = load_settings(temp.path()).unwrap_err();
        assert!(matches!(err, TallerError::InvalidJson(_)));
    }

    #[test]
    fn test_load_settings_rejects_non_positive_rate() {
        let temp = TempDir::new().unwrap();
        for body in [r#"{ "defaultExchangeRate": 0 }"#, r#"{ "defaultExchangeRate": "-3" }"#] {
            std_fs::write(temp.path().join("settings.json"), body).unwrap();
            let err = load_settings(temp.path()).unwrap_err();
            assert!(matches!(err, TallerError::InvalidRate(_)));
        }
    }

    #[test]
    fn test_load_settings_newer_schema_version() {
        let temp = TempDir::new().unwrap();
        std_fs::write(
            temp.path().join("settings.json"),
            r#"{ "schemaVersion": 2, "defaultExchangeRate": "38", "theme": "dark" }"#,
        )
        .unwrap();

        let settings = load_settings(temp.path()).unwrap();
        assert_eq!(settings.schema_version, 2);
        assert_eq!(settings.default_exchange_rate, Decimal::new(38, 0));
    }
}
