use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `<number> <name> (<credits>` at the start of an entry title
    static ref COURSE_TITLE: Regex = Regex::new(
        r"^\s*(?P<number>[A-Z][A-Z ]*[0-9]{3})\s+(?P<name>[^(]*)\((?P<credits>[^)]*)"
    )
    .unwrap();

    /// Department letters (spaces allowed) followed by a three digit number
    static ref COURSE_NUMBER: Regex = Regex::new(r"\b[A-Z][A-Z ]*[0-9]{3}\b").unwrap();

    /// Runs from the lead-in up to a period that is not part of a decimal
    static ref PREREQUISITE_CLAUSE: Regex = Regex::new(
        r"(?s)(?P<statement>\bPrerequisites?:?\s*(?P<body>.*?))(?:\.(?:[^0-9]|$)|$)"
    )
    .unwrap();

    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Pieces of a course title line, trimmed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleParts<'a> {
    pub number: &'a str,
    pub name: &'a str,
    pub credits: &'a str,
}

/// A prerequisite statement located inside an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrerequisiteClause<'a> {
    /// The statement including its lead-in, without the closing period
    pub statement: &'a str,
    /// The part after the lead-in, where course numbers are harvested
    pub body: &'a str,
}

/// Collapses every whitespace run (including non-breaking spaces) into one space
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Splits a title such as `"CSE 120 Computer Science Principles (5) NW, QSR"`
///
/// The name runs up to the first parenthesis, so a title with a parenthesis
/// before the credit marker yields a truncated name.
///
/// # Returns
/// `None` if the title does not start with a course number and a credit marker
pub fn parse_title(title: &str) -> Option<TitleParts<'_>> {
    let captures = COURSE_TITLE.captures(title)?;
    let group = |name: &str| captures.name(name).map_or("", |m| m.as_str().trim());

    Some(TitleParts {
        number: group("number"),
        name: group("name"),
        credits: group("credits"),
    })
}

/// Finds the first prerequisite statement in an entry's text
pub fn prerequisite_clause(text: &str) -> Option<PrerequisiteClause<'_>> {
    let captures = PREREQUISITE_CLAUSE.captures(text)?;

    Some(PrerequisiteClause {
        statement: captures.name("statement")?.as_str().trim(),
        body: captures.name("body")?.as_str().trim(),
    })
}

/// Harvests every course number in `text`, left to right, duplicates included
pub fn course_numbers(text: &str) -> Vec<String> {
    COURSE_NUMBER
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Determines whether a whole string is a single course number
///
/// # Returns
/// `true` for `"CSE 123"` or `"LAW C 333"`, `false` for `"CSE 12"` or `"see CSE 123"`
pub fn is_course_number(candidate: &str) -> bool {
    COURSE_NUMBER
        .find(candidate)
        .is_some_and(|m| m.start() == 0 && m.end() == candidate.len())
}
