use std::fmt::{Display, Formatter, Result as FmtResult};
use thiserror::Error;

/// Reasons a course record cannot be built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidCourse {
    #[error("course number is empty")]
    EmptyNumber,
    #[error("course number {0:?} has no digit to derive a rank from")]
    NoRank(String),
}

/// Returns the value of the first digit in a course number
///
/// # Arguments
/// * `number` - A course number such as `"CSE 401"`
///
/// # Returns
/// `Some(4)` for `"CSE 401"`, `None` if the number contains no digit
pub fn rank_of(number: &str) -> Option<u8> {
    number
        .chars()
        .find_map(|c| c.to_digit(10))
        .map(|digit| digit as u8)
}

/// A single entry of a course listing, as read from the catalog text
///
/// Prerequisites are kept as the raw course numbers harvested from the
/// prerequisite statement; resolving them against the rest of the listing
/// happens in [`crate::catalog::link`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Course number (e.g., "CSE 401"), unique within one listing
    number: String,
    /// Course title
    name: String,
    /// Credit designation, e.g. "4", "1-5, max. 15" or "3/5"
    credits: String,
    /// First digit of the course number
    rank: u8,
    /// Course numbers mentioned in the prerequisite statement, in order
    prerequisite_numbers: Vec<String>,
    /// The prerequisite statement itself
    prerequisite_text: Option<String>,
}

impl Course {
    /// Creates a course without prerequisites
    ///
    /// # Arguments
    /// * `number` - Course number, must contain at least one digit
    /// * `name` - Course title
    /// * `credits` - Credit designation
    ///
    /// # Returns
    /// The course, or an [`InvalidCourse`] if no rank can be derived from `number`
    pub fn new(
        number: impl Into<String>,
        name: impl Into<String>,
        credits: impl Into<String>,
    ) -> Result<Self, InvalidCourse> {
        let number = number.into();
        if number.trim().is_empty() {
            return Err(InvalidCourse::EmptyNumber);
        }
        let rank = rank_of(&number).ok_or_else(|| InvalidCourse::NoRank(number.clone()))?;

        Ok(Self {
            number,
            name: name.into(),
            credits: credits.into(),
            rank,
            prerequisite_numbers: Vec::new(),
            prerequisite_text: None,
        })
    }

    /// Attaches the raw prerequisite course numbers
    pub fn with_prerequisite_numbers<I, S>(mut self, numbers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerequisite_numbers = numbers.into_iter().map(Into::into).collect();
        self
    }

    /// Attaches the prerequisite statement the numbers were harvested from
    pub fn with_prerequisite_text(mut self, text: impl Into<String>) -> Self {
        self.prerequisite_text = Some(text.into());
        self
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn credits(&self) -> &str {
        &self.credits
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn prerequisite_numbers(&self) -> &[String] {
        &self.prerequisite_numbers
    }

    pub fn prerequisite_text(&self) -> Option<&str> {
        self.prerequisite_text.as_deref()
    }
}

impl Display for Course {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {} ({})", self.number, self.name, self.credits)
    }
}
