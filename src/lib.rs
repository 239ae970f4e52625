//! # TopRank
//!
//! An in-memory record collection with a single derived operation:
//! selecting the top-N highest-valued records from two collections and
//! merging the results.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐
//! │ Collection A │     │ Collection B │
//! │ (append-only)│     │ (append-only)│
//! └──────┬───────┘     └───────┬──────┘
//!        │                     │
//!        └──────────┬──────────┘
//!                   │
//!                   ▼
//!        ┌─────────────────────┐
//!        │   select_top_paid   │
//!        │ (stable sort + take)│
//!        └──────────┬──────────┘
//!                   │
//!                   ▼
//!        ┌─────────────────────┐
//!        │  Result Collection  │
//!        │ (top n1 of A, then  │
//!        │      top n2 of B)   │
//!        └─────────────────────┘
//! ```
//!
//! Collections are single-threaded and exclusively owned; the selection
//! borrows its inputs immutably and returns an independently owned result.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;

pub mod collection;
pub mod roster;
pub mod select;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use collection::{Record, RecordCollection, RecordIter};
pub use error::{Result, TopRankError};
pub use roster::load_roster;
pub use select::select_top_paid;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of TopRank
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
