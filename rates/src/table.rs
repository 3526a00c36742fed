//! Static conversion rate table.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{RateError, RateResult};

/// Mapping from source currency code to destination code to rate.
///
/// Codes are opaque strings and are not validated against any ISO list.
/// Nothing enforces symmetry or transitivity between entries: A->B and
/// B->A may be independently specified and inconsistent. The table is
/// built once at startup and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RateTable(HashMap<String, HashMap<String, f64>>);

impl RateTable {
    /// Create a table from raw entries.
    pub fn new(entries: HashMap<String, HashMap<String, f64>>) -> Self {
        Self(entries)
    }

    /// Whether the table has no source currencies at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of source currencies.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Exact, case-sensitive lookup of `table[from][to]`.
    ///
    /// No normalization, no reverse-rate inference, no transitive
    /// path-finding through intermediate currencies.
    pub fn lookup(&self, from: &str, to: &str) -> RateResult<f64> {
        self.0
            .get(from)
            .and_then(|dests| dests.get(to))
            .copied()
            .ok_or_else(|| RateError::PairNotFound {
                from: from.to_string(),
                to: to.to_string(),
            })
    }
}

impl From<HashMap<String, HashMap<String, f64>>> for RateTable {
    fn from(entries: HashMap<String, HashMap<String, f64>>) -> Self {
        Self::new(entries)
    }
}
