//! RateDesk rate table core
//!
//! Configuration loading and static conversion-rate lookup for the
//! RateDesk HTTP service.
//!
//! # Features
//!
//! - Fixed built-in default rate table and port
//! - Optional JSON config file overlay from ordered candidate paths
//! - Environment variable override for the listen port
//! - Exact, case-sensitive rate lookup against the merged table
//!
//! # Example
//!
//! ```rust,ignore
//! use ratedesk_rates::Config;
//!
//! let config = Config::load()?;
//! config.validate()?;
//!
//! let rate = config.rates.lookup("CARAMEL", "CHOKOLATE")?;
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod table;

pub use config::Config;
pub use error::{ConfigError, RateError};
pub use loader::PartialConfig;
pub use table::RateTable;
