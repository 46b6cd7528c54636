//! Database format selection and loading
//!
//! The set of formats is closed: a database file is either XML or JSON,
//! chosen by its extension.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::Recipe;
use crate::{json, xml};
use crate::{Error, Result};

/// On-disk database format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    Xml,
    Json,
}

impl FormatKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatKind::Xml => "xml",
            FormatKind::Json => "json",
        }
    }

    /// Select the format from the file name suffix (`.xml` or `.json`).
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path.to_string_lossy();
        if name.ends_with(".xml") {
            Ok(FormatKind::Xml)
        } else if name.ends_with(".json") {
            Ok(FormatKind::Json)
        } else {
            Err(Error::UnsupportedFormat(path.to_path_buf()))
        }
    }

    /// The format `read-db` converts into by default
    pub fn counterpart(&self) -> Self {
        match self {
            FormatKind::Xml => FormatKind::Json,
            FormatKind::Json => FormatKind::Xml,
        }
    }

    /// Decode database content
    pub fn parse(&self, content: &str) -> Result<Vec<Recipe>> {
        match self {
            FormatKind::Xml => xml::parse(content),
            FormatKind::Json => json::parse(content),
        }
    }

    /// Render recipes in this format
    pub fn render(&self, recipes: &[Recipe]) -> Result<String> {
        match self {
            FormatKind::Xml => xml::render(recipes),
            FormatKind::Json => json::render(recipes),
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// Load a recipe database from disk.
///
/// The format is selected before the file is touched, so an unsupported
/// extension is reported even when the file does not exist.
pub fn load_database(path: &Path) -> Result<Vec<Recipe>> {
    let format = FormatKind::from_path(path)?;

    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
        _ => Error::Io(e),
    })?;

    let recipes = format
        .parse(&content)
        .map_err(|e| Error::MalformedContent {
            path: path.to_path_buf(),
            format,
            source: Box::new(e),
        })?;

    debug!("Loaded {} recipes from {:?} ({})", recipes.len(), path, format);
    Ok(recipes)
}
