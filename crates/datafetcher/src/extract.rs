use crate::{
    classifier::{find_course_elements, title_element},
    error::MalformedEntry,
    markup::MarkupNode,
    patterns::{course_numbers, normalize_whitespace, parse_title, prerequisite_clause},
};
use log::{debug, warn};
use models::course::Course;

/// A course entry that was found but could not be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Value of the entry's `name` attribute
    pub anchor: String,
    pub error: MalformedEntry,
}

/// Everything recovered from one listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Courses in document order
    pub courses: Vec<Course>,
    /// Entries that matched the entry shape but not the title pattern
    pub skipped: Vec<SkippedEntry>,
}

/// Reads one course entry
///
/// The title line gives the number, name and credits. The prerequisite
/// statement is searched for run by run (see [`MarkupNode::text_runs`]), so it
/// never reaches past a line break or into the entry's trailing link. Course
/// numbers are only harvested from inside that statement.
///
/// # Arguments
/// * `node` - An entry accepted by [`crate::classifier::is_course_element`]
///
/// # Returns
/// The [`Course`], or a [`MalformedEntry`] if the title cannot be read
pub fn extract<N: MarkupNode>(node: &N) -> Result<Course, MalformedEntry> {
    let title = title_element(node).ok_or(MalformedEntry::MissingTitle)?;
    let title = normalize_whitespace(&title.text());
    let parts =
        parse_title(&title).ok_or_else(|| MalformedEntry::UnmatchedTitle(title.clone()))?;

    let course = Course::new(parts.number, parts.name, parts.credits)?;

    let clause = node.text_runs().iter().find_map(|run| {
        let run = normalize_whitespace(run);
        prerequisite_clause(&run)
            .map(|clause| (clause.statement.to_string(), course_numbers(clause.body)))
    });
    let course = match clause {
        Some((statement, numbers)) => course
            .with_prerequisite_text(statement)
            .with_prerequisite_numbers(numbers),
        None => course,
    };

    Ok(course)
}

/// Extracts every course entry below `root`
///
/// A malformed entry is logged and recorded in [`Extraction::skipped`]; it does
/// not stop the rest of the listing from being read.
pub fn extract_all<N: MarkupNode>(root: N) -> Extraction {
    let mut extraction = Extraction::default();

    for node in find_course_elements(root) {
        match extract(&node) {
            Ok(course) => {
                debug!(
                    "Extracted {course} with {} prerequisite tokens",
                    course.prerequisite_numbers().len()
                );
                extraction.courses.push(course);
            }
            Err(error) => {
                let anchor = node.attr("name").unwrap_or_default().to_string();
                warn!("Skipping malformed entry {anchor:?}: {error}");
                extraction.skipped.push(SkippedEntry { anchor, error });
            }
        }
    }

    extraction
}
