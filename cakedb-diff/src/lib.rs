//! cakedb-diff: Structured diff of recipe databases
//!
//! This crate provides:
//! - Key-based reconciliation of two collections
//! - Two-level (recipe, ingredient) change detection
//! - Deterministic change event ordering
//! - Text and JSON reporting of change events

pub mod differ;
pub mod error;
pub mod event;
pub mod reconcile;
pub mod report;

pub use differ::{diff, DatabaseDiffer};
pub use error::{Error, Result};
pub use event::{ChangeEvent, ChangeKind};
pub use reconcile::{reconcile, Pairing};
pub use report::DiffSummary;
