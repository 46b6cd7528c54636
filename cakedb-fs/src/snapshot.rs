//! Snapshot parsing and comparison

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;
use tracing::debug;

use cakedb_diff::reconcile::{reconcile, Pairing};

use crate::{Error, Result};

/// Set of paths listed in a snapshot, kept sorted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    paths: BTreeSet<String>,
}

impl Snapshot {
    /// Parse a listing. Blank lines are skipped and repeated paths collapse.
    pub fn parse(content: &str) -> Self {
        let paths = content
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect();
        Self { paths }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
            _ => Error::Io(e),
        })?;
        let snapshot = Self::parse(&content);
        debug!("Read {} paths from {:?}", snapshot.len(), path);
        Ok(snapshot)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }
}

/// A path present on only one side
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathChange {
    Added(String),
    Removed(String),
}

impl fmt::Display for PathChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathChange::Added(path) => write!(f, "ADDED {}", path),
            PathChange::Removed(path) => write!(f, "REMOVED {}", path),
        }
    }
}

/// Compare two snapshots: added paths by ascending path, then removed
/// paths by ascending path.
pub fn compare(old: &Snapshot, new: &Snapshot) -> Vec<PathChange> {
    let old_paths: Vec<&str> = old.paths().collect();
    let new_paths: Vec<&str> = new.paths().collect();

    reconcile(&old_paths, &new_paths, |p| *p)
        .into_iter()
        .filter_map(|pairing| match pairing {
            Pairing::Added { key, .. } => Some(PathChange::Added(key.to_string())),
            Pairing::Removed { key, .. } => Some(PathChange::Removed(key.to_string())),
            Pairing::Matched { .. } => None,
        })
        .collect()
}
