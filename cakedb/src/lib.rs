//! cakedb: Recipe database model and loaders
//!
//! This crate provides:
//! - The `Recipe`/`Ingredient` model shared by every cakedb tool
//! - Format selection by file extension (XML or JSON)
//! - Decoding and rendering of both on-disk schemas
//! - Logging setup shared by the command-line tools

pub mod error;
pub mod format;
mod json;
pub mod logging;
pub mod model;
mod xml;

pub use error::{Error, Result};
pub use format::{load_database, FormatKind};
pub use model::{Ingredient, Recipe};
