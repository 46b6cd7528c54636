use std::path::PathBuf;

use thiserror::Error;

use crate::format::FormatKind;

#[derive(Error, Debug)]
pub enum Error {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Unsupported database format: {} (expected .xml or .json)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Malformed {format} content in {}: {source}", .path.display())]
    MalformedContent {
        path: PathBuf,
        format: FormatKind,
        #[source]
        source: Box<Error>,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML parsing failed: {0}")]
    XmlDecode(#[from] quick_xml::DeError),

    #[error("XML encoding failed: {0}")]
    XmlEncode(#[from] quick_xml::SeError),

    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
