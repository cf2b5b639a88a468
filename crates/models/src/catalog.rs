use crate::course::Course;
use log::{debug, warn};
use std::collections::HashMap;

/// A course whose prerequisites have been resolved against its listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedCourse {
    pub course: Course,
    /// Indices into the owning [`Catalog`], in the order they were mentioned
    pub prerequisites: Vec<usize>,
}

/// Every course of one listing, with prerequisites resolved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    courses: Vec<LinkedCourse>,
}

impl Catalog {
    /// Linked courses in extraction order
    pub fn courses(&self) -> &[LinkedCourse] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Iterates over the resolved prerequisites of the course at `index`
    ///
    /// # Returns
    /// An empty iterator if `index` is out of bounds
    pub fn prerequisites_of(&self, index: usize) -> impl Iterator<Item = &LinkedCourse> + '_ {
        self.courses
            .get(index)
            .into_iter()
            .flat_map(|linked| linked.prerequisites.iter())
            .filter_map(move |&prerequisite| self.courses.get(prerequisite))
    }

    /// Total number of resolved prerequisite references
    pub fn reference_count(&self) -> usize {
        self.courses
            .iter()
            .map(|linked| linked.prerequisites.len())
            .sum()
    }
}

/// Resolves the raw prerequisite numbers of one course
///
/// Tokens naming the course itself or a course outside the listing are dropped.
fn resolve(course: &Course, lookup: &HashMap<&str, usize>) -> Vec<usize> {
    course
        .prerequisite_numbers()
        .iter()
        .filter(|number| number.as_str() != course.number())
        .filter_map(|number| {
            let index = lookup.get(number.as_str()).copied();
            if index.is_none() {
                debug!("{}: prerequisite {number} is not in this listing", course.number());
            }
            index
        })
        .collect()
}

/// Links a batch of courses into a [`Catalog`]
///
/// Prerequisite numbers are looked up across the whole batch. When two courses
/// share a number the later one wins. The result depends only on `courses`, so
/// linking the same batch twice produces the same catalog.
///
/// # Arguments
/// * `courses` - Every course extracted from one listing, in extraction order
///
/// # Returns
/// A [`Catalog`] holding the same courses in the same order
pub fn link(courses: Vec<Course>) -> Catalog {
    let mut lookup: HashMap<&str, usize> = HashMap::with_capacity(courses.len());
    for (index, course) in courses.iter().enumerate() {
        if let Some(previous) = lookup.insert(course.number(), index) {
            warn!(
                "Duplicate course number {}: entry {index} replaces entry {previous}",
                course.number()
            );
        }
    }

    let resolved: Vec<Vec<usize>> = courses
        .iter()
        .map(|course| resolve(course, &lookup))
        .collect();
    drop(lookup);

    let courses = courses
        .into_iter()
        .zip(resolved)
        .map(|(course, prerequisites)| LinkedCourse {
            course,
            prerequisites,
        })
        .collect();

    Catalog { courses }
}
