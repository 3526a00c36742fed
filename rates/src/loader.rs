//! Optional JSON config file loading.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};
use crate::table::RateTable;

/// The fields a config file may carry.
///
/// Every field is optional; an absent field leaves the corresponding
/// prior value untouched during the merge. The `Option`s preserve the
/// absent-vs-present distinction the merge precedence depends on.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialConfig {
    /// Replacement rate table, applied wholesale when present and
    /// non-empty.
    #[serde(default)]
    pub rates: Option<RateTable>,

    /// Replacement listen port, applied when present and non-empty.
    #[serde(default)]
    pub port: Option<String>,
}

/// Read and parse one candidate config file.
///
/// A missing or unreadable file is the expected case (config files are
/// optional) and yields `Ok(None)`. A file that reads fine but does not
/// parse as the expected shape is a fatal configuration error.
pub fn load_file(path: &Path) -> ConfigResult<Option<PartialConfig>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(_) => return Ok(None),
    };

    let partial = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Some(partial))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let result = load_file(Path::new("does/not/exist.json")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_full_config_parses() {
        let file = write_config(r#"{"rates": {"USD": {"EUR": 0.9}}, "port": "9000"}"#);
        let partial = load_file(file.path()).unwrap().unwrap();

        assert_eq!(partial.rates.unwrap().lookup("USD", "EUR").unwrap(), 0.9);
        assert_eq!(partial.port.as_deref(), Some("9000"));
    }

    #[test]
    fn test_absent_fields_stay_absent() {
        let file = write_config(r#"{"port": "9000"}"#);
        let partial = load_file(file.path()).unwrap().unwrap();

        assert!(partial.rates.is_none());
        assert_eq!(partial.port.as_deref(), Some("9000"));

        let file = write_config("{}");
        let partial = load_file(file.path()).unwrap().unwrap();

        assert!(partial.rates.is_none());
        assert!(partial.port.is_none());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let file = write_config(r#"{"port": "9000", "comment": "staging"}"#);
        let partial = load_file(file.path()).unwrap().unwrap();

        assert_eq!(partial.port.as_deref(), Some("9000"));
    }

    #[test]
    fn test_invalid_json_is_fatal() {
        let file = write_config("{not json");
        let err = load_file(file.path()).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_wrong_shape_rates_is_fatal() {
        // Rates must be map-of-map-of-number.
        let file = write_config(r#"{"rates": {"USD": 0.9}}"#);
        assert!(load_file(file.path()).is_err());

        let file = write_config(r#"{"rates": {"USD": {"EUR": "0.9"}}}"#);
        assert!(load_file(file.path()).is_err());
    }

    #[test]
    fn test_wrong_shape_port_is_fatal() {
        let file = write_config(r#"{"port": 9000}"#);
        let err = load_file(file.path()).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
