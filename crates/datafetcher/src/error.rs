use models::course::InvalidCourse;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain or parse the listing document
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("listing markup could not be parsed: {0}")]
    Markup(#[from] quick_xml::Error),
}

/// A candidate entry that does not read as a course
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedEntry {
    #[error("entry has no bold title element")]
    MissingTitle,

    #[error("title {0:?} does not match the course title pattern")]
    UnmatchedTitle(String),

    #[error(transparent)]
    InvalidCourse(#[from] InvalidCourse),
}

/// Failure to write extracted data to disk
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write CSV record: {0}")]
    Csv(#[from] csv::Error),
}
