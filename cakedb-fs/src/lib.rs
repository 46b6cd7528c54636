//! cakedb-fs: Filesystem snapshot comparison
//!
//! A snapshot is a plain text listing with one path per line. Two
//! snapshots are compared by path, reporting what appeared and what
//! disappeared.

pub mod error;
pub mod snapshot;

pub use error::{Error, Result};
pub use snapshot::{compare, PathChange, Snapshot};
