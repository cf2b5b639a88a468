use crate::error::ExportError;
use csv::Writer;
use models::catalog::Catalog;
use serde::Serialize;
use std::{
    fs::{self, File},
    path::Path,
};

/// Output directory for data files
pub const DEFAULT_OUTPUT_DIR: &str = "./data/output";

/// One CSV row per linked course
#[derive(Debug, Serialize)]
struct CourseRow<'a> {
    number: &'a str,
    name: &'a str,
    credits: &'a str,
    rank: u8,
    /// Resolved prerequisite numbers joined by `;`
    prerequisites: String,
    prerequisite_text: Option<&'a str>,
}

/// Ensures a directory exists, creating it if necessary
///
/// # Arguments
/// * `dir_path` - Path to the directory
///
/// # Returns
/// Result indicating success or detailed error
pub fn ensure_dir(dir_path: &Path) -> Result<(), ExportError> {
    if !dir_path.as_os_str().is_empty() && !dir_path.exists() {
        fs::create_dir_all(dir_path).map_err(|source| ExportError::Io {
            path: dir_path.to_path_buf(),
            source,
        })?;
    }

    Ok(())
}

/// Creates a CSV writer for the specified file, creating its directory first
///
/// # Arguments
/// * `path` - Where the CSV file goes
///
/// # Returns
/// Result containing the CSV writer or error
pub fn create_csv_writer(path: &Path) -> Result<Writer<File>, ExportError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Writer::from_writer(file))
}

/// Writes every course of a catalog as a CSV table
///
/// # Arguments
/// * `path` - Destination file
/// * `catalog` - The linked courses
///
/// # Returns
/// The number of rows written
pub fn write_courses_csv(path: &Path, catalog: &Catalog) -> Result<usize, ExportError> {
    let mut writer = create_csv_writer(path)?;

    for (index, linked) in catalog.courses().iter().enumerate() {
        let prerequisites = catalog
            .prerequisites_of(index)
            .map(|prerequisite| prerequisite.course.number())
            .collect::<Vec<_>>()
            .join(";");

        writer.serialize(CourseRow {
            number: linked.course.number(),
            name: linked.course.name(),
            credits: linked.course.credits(),
            rank: linked.course.rank(),
            prerequisites,
            prerequisite_text: linked.course.prerequisite_text(),
        })?;
    }

    writer.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(catalog.len())
}
