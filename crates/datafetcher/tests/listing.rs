use datafetcher::{
    classifier::find_course_elements,
    error::MalformedEntry,
    extract::extract_all,
    fetch::{Source, load_document},
    markup::{Document, MarkupNode},
};
use models::catalog::link;
use std::path::PathBuf;

const FIXTURE: &str = "tests/fixtures/cse_listing.html";

fn fixture() -> Document {
    let markup = std::fs::read_to_string(FIXTURE).unwrap();
    Document::parse(&markup).unwrap()
}

#[test]
fn finds_every_course_entry() {
    let document = fixture();
    let anchors: Vec<_> = find_course_elements(document.root())
        .iter()
        .filter_map(|node| node.attr("name").map(str::to_string))
        .collect();

    assert_eq!(
        anchors,
        [
            "cse120", "cse142", "cse143", "cse190", "cse311", "cse332", "cse351", "cse401",
            "cse446", "cse521", "cse522",
        ]
    );
}

#[test]
fn extracts_courses_and_skips_malformed_titles() {
    let extraction = extract_all(fixture().root());

    let numbers: Vec<_> = extraction.courses.iter().map(|c| c.number()).collect();
    assert_eq!(
        numbers,
        [
            "CSE 120", "CSE 142", "CSE 143", "CSE 311", "CSE 332", "CSE 351", "CSE 401",
            "CSE 446", "CSE 521", "CSE 522",
        ]
    );

    assert_eq!(extraction.skipped.len(), 1);
    assert_eq!(extraction.skipped[0].anchor, "cse190");
    assert!(matches!(
        extraction.skipped[0].error,
        MalformedEntry::UnmatchedTitle(_)
    ));

    let cse311 = &extraction.courses[3];
    assert_eq!(cse311.prerequisite_numbers(), ["CSE 143", "MATH 126", "MATH 136"]);

    // Non-breaking space inside a course number
    let cse332 = &extraction.courses[4];
    assert_eq!(cse332.prerequisite_numbers(), ["CSE 311"]);
    assert_eq!(cse332.prerequisite_text(), Some("Prerequisite: CSE 311"));

    // No closing period; the statement ends at the line break before the MyPlan link
    let cse351 = &extraction.courses[5];
    assert_eq!(cse351.prerequisite_numbers(), ["CSE 143"]);
    assert_eq!(cse351.prerequisite_text(), Some("Prerequisite: CSE 143"));
}

#[test]
fn links_within_the_listing() {
    let catalog = link(extract_all(fixture().root()).courses);

    let prerequisites = |number: &str| -> Vec<String> {
        let index = catalog
            .courses()
            .iter()
            .position(|linked| linked.course.number() == number)
            .unwrap();
        catalog
            .prerequisites_of(index)
            .map(|linked| linked.course.number().to_string())
            .collect()
    };

    assert_eq!(prerequisites("CSE 143"), ["CSE 142"]);
    assert_eq!(prerequisites("CSE 311"), ["CSE 143"]);
    assert_eq!(prerequisites("CSE 401"), ["CSE 332", "CSE 351"]);
    assert_eq!(prerequisites("CSE 446"), ["CSE 332"]);
    assert!(prerequisites("CSE 521").is_empty());
    assert_eq!(prerequisites("CSE 522"), ["CSE 521"]);
}

#[tokio::test]
async fn loads_listing_from_path() {
    let document = load_document(&Source::Path(PathBuf::from(FIXTURE)))
        .await
        .unwrap();
    assert_eq!(extract_all(document.root()).courses.len(), 10);
}
