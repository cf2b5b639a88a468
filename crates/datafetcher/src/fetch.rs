use crate::{error::FetchError, markup::Document};
use log::info;
use reqwest::Client;
use std::{
    convert::Infallible,
    fmt::{Display, Formatter, Result as FmtResult},
    path::PathBuf,
    str::FromStr,
};

/// Where a course listing is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// An `http://` or `https://` URL
    Url(String),
    /// A file on disk
    Path(PathBuf),
}

impl FromStr for Source {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let lower = s.to_ascii_lowercase();

        Ok(if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(s.to_string())
        } else {
            Self::Path(PathBuf::from(s))
        })
    }
}

impl Display for Source {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Reads the raw listing text
///
/// A URL is requested once; any transport error or non-success status fails
/// the load.
///
/// # Arguments
/// * `source` - The listing to read
///
/// # Returns
/// The document text, or a [`FetchError`]
pub async fn load(source: &Source) -> Result<String, FetchError> {
    match source {
        Source::Url(url) => {
            info!("Fetching {url}");
            let text = Client::new()
                .get(url)
                .send()
                .await?
                .error_for_status()?
                .text()
                .await?;

            Ok(text)
        }
        Source::Path(path) => {
            info!("Reading {}", path.display());
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| FetchError::Io {
                    path: path.clone(),
                    source,
                })
        }
    }
}

/// Reads and parses a listing
pub async fn load_document(source: &Source) -> Result<Document, FetchError> {
    let text = load(source).await?;
    Ok(Document::parse(&text)?)
}
