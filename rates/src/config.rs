//! Service configuration: defaults, file overlay, environment override.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult};
use crate::loader::{self, PartialConfig};
use crate::table::RateTable;

/// Candidate config file locations, tried in order. Fields from later
/// successful loads override earlier ones.
pub const CANDIDATE_PATHS: [&str; 2] = ["application.json", "config/application.json"];

/// Environment variable overriding the listen port, highest priority.
pub const PORT_ENV: &str = "PORT";

/// The effective service configuration.
///
/// Built exactly once at startup, before the listener accepts
/// connections, and read-only for the rest of the process lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Conversion rate table.
    pub rates: RateTable,
    /// Listen port, kept as the string it arrives as from file or
    /// environment.
    pub port: String,
}

impl Default for Config {
    fn default() -> Self {
        let rates = HashMap::from([
            (
                "CARAMEL".to_string(),
                HashMap::from([("CHOKOLATE".to_string(), 0.85), ("PLAIN".to_string(), 75.50)]),
            ),
            (
                "CHOKOLATE".to_string(),
                HashMap::from([("CARAMEL".to_string(), 1.18), ("PLAIN".to_string(), 89.00)]),
            ),
            (
                "PLAIN".to_string(),
                HashMap::from([("CHOKOLATE".to_string(), 0.013), ("CARAMEL".to_string(), 0.011)]),
            ),
        ]);

        Self {
            rates: RateTable::new(rates),
            port: "8080".to_string(),
        }
    }
}

impl Config {
    /// Resolve the effective configuration: defaults, then the candidate
    /// files in order, then the environment.
    pub fn load() -> ConfigResult<Config> {
        let paths: Vec<PathBuf> = CANDIDATE_PATHS.iter().map(PathBuf::from).collect();
        let mut config = Self::load_from(&paths)?;
        config.apply_env();
        Ok(config)
    }

    /// Overlay whichever of `paths` load successfully onto the defaults.
    ///
    /// No file existing at all is not an error; a file that exists but
    /// fails to parse is.
    pub fn load_from(paths: &[PathBuf]) -> ConfigResult<Config> {
        let mut config = Config::default();

        for path in paths {
            match loader::load_file(path)? {
                Some(partial) => {
                    config.apply(partial);
                    info!(path = %path.display(), "Applied config file");
                }
                None => debug!(path = %path.display(), "No config file"),
            }
        }

        Ok(config)
    }

    /// Overlay one file's fields.
    ///
    /// A present, non-empty `rates` replaces the entire table; there is
    /// no per-entry merge. A present, non-empty `port` replaces the
    /// port.
    pub fn apply(&mut self, partial: PartialConfig) {
        if let Some(rates) = partial.rates {
            if !rates.is_empty() {
                self.rates = rates;
            }
        }

        if let Some(port) = partial.port {
            if !port.is_empty() {
                self.port = port;
            }
        }
    }

    /// Apply environment overrides, the highest-priority source.
    pub fn apply_env(&mut self) {
        self.apply_port_override(std::env::var(PORT_ENV).ok());
    }

    // Presence of the variable governs, not non-emptiness: PORT set to
    // an empty string still overrides. validate() catches the empty
    // result before the bind.
    fn apply_port_override(&mut self, port: Option<String>) {
        if let Some(port) = port {
            self.port = port;
        }
    }

    /// Validate the merged configuration before the listener starts.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.port.is_empty() {
            return Err(ConfigError::Invalid(
                "listen port cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
