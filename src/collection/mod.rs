//! Collection Module
//!
//! In-memory, append-only record storage.
//!
//! ## Responsibilities
//! - Hold records in insertion order
//! - Positional access with bounds checking
//! - Restartable iteration in insertion order
//!
//! ## Data Structure Choice
//! Backed by a plain `Vec` for V1:
//! - Insertion order is the only order the contract needs
//! - Amortized-doubling growth covers the append contract
//! - Capacity hints map directly to `Vec::with_capacity`

mod list;

pub use list::{RecordCollection, RecordIter};

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named record with an integer value, e.g. an employee and a salary.
///
/// Immutable once constructed; records have no identity beyond their fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    value: i64,
}

impl Record {
    /// Create a new record
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// The record's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The record's value (the sort key for top-N selection)
    pub fn value(&self) -> i64 {
        self.value
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.name, self.value)
    }
}
