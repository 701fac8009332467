//! End-to-end properties of parsing, evaluation, and catalog queries.

use prereqs::catalog::{Catalog, CourseFinder, CourseRecord};
use prereqs::course::{CourseCode, Normalizer};
use prereqs::requirements::{
    check_eligibility, explain, CompletedSet, PrerequisiteParser, NOTHING_MISSING,
};

const SAMPLES: &[&str] = &[
    "None",
    "",
    "CS 170",
    "CS 171 and CS 224",
    "CS 171 or CS_OX 171 and MATH 221 or MATH 275",
    "CS 253; CS 224 or MATH 250",
    "Prerequisite: CS 171 and MATH 111. Or equivalent transfer credit as prerequisite.",
    "Permission of instructor",
];

fn parser() -> PrerequisiteParser {
    PrerequisiteParser::new(Normalizer::default())
}

fn completed(codes: &[&str]) -> CompletedSet {
    CompletedSet::from_raw(&Normalizer::default(), codes)
}

fn record(code: &str, requisites: &str) -> CourseRecord {
    CourseRecord {
        course_code: code.to_string(),
        course_name: format!("{} name", code),
        requisites: requisites.to_string(),
        ..Default::default()
    }
}

fn finder() -> CourseFinder {
    let normalizer = Normalizer::default();
    let catalog = Catalog::from_records(
        vec![
            record("CS 170", "None"),
            record("CS 171", "CS 170"),
            record("CS 224", "CS 171"),
            record("CS 253", "CS 171 and CS 224"),
            record("CS 326", "CS 253 or CS_OX 253"),
            record("MATH 221", ""),
        ],
        &normalizer,
    );
    CourseFinder::new(catalog, PrerequisiteParser::new(normalizer))
}

#[test]
fn normalization_is_idempotent() {
    let normalizer = Normalizer::default();
    for raw in ["cs 170", " CS_OX 171 ", "math 221", "QTM 110Z", "garbage"] {
        let once = normalizer.normalize(raw);
        assert_eq!(normalizer.normalize(once.as_str()), once, "{raw}");
    }
}

#[test]
fn campus_variants_are_interchangeable() {
    let normalizer = Normalizer::default();
    assert_eq!(
        normalizer.normalize("cs_ox 171"),
        CourseCode::from_canonical("CS 171")
    );

    let requirement = parser().parse("CS 171");
    assert!(check_eligibility(&completed(&["CS_OX 171"]), &requirement).eligible);
}

#[test]
fn groups_never_empty() {
    let parser = parser();
    for text in SAMPLES {
        let requirement = parser.parse(text);
        assert!(requirement.groups().iter().all(|g| !g.is_empty()), "{text}");
    }
}

#[test]
fn empty_requirement_is_always_satisfied() {
    let requirement = parser().parse("None");
    assert!(requirement.is_empty());
    let result = check_eligibility(&completed(&[]), &requirement);
    assert!(result.eligible);
    assert!(result.missing_groups.is_empty());
    assert_eq!(explain(&result.missing_groups), NOTHING_MISSING);
}

#[test]
fn eligible_exactly_when_nothing_missing() {
    let parser = parser();
    let sets = [
        completed(&[]),
        completed(&["CS 171"]),
        completed(&["CS 171", "CS 224", "MATH 275"]),
    ];
    for text in SAMPLES {
        let requirement = parser.parse(text);
        for set in &sets {
            let result = check_eligibility(set, &requirement);
            assert_eq!(result.eligible, result.missing_groups.is_empty(), "{text}");
            for group in &result.missing_groups {
                assert!(requirement.groups().contains(group));
                assert!(!set.satisfies(group));
            }
        }
    }
}

#[test]
fn completing_more_never_loses_eligibility() {
    let finder = finder();
    let before = finder.find_eligible(&["CS 170"]);
    let after = finder.find_eligible(&["CS 170", "CS 171"]);

    for course in &before.eligible {
        let still_open = after.eligible.iter().any(|c| c.code == course.code);
        let now_completed = course.code.as_str() == "CS 171";
        assert!(still_open || now_completed, "{}", course.code);
    }
}

#[test]
fn completed_courses_are_never_listed() {
    let finder = finder();
    let result = finder.find_eligible(&["cs 170", "CS_OX 171"]);
    let listed: Vec<&str> = result
        .eligible
        .iter()
        .map(|c| c.code.as_str())
        .chain(result.ineligible.iter().map(|c| c.code.as_str()))
        .collect();

    assert!(!listed.contains(&"CS 170"));
    assert!(!listed.contains(&"CS 171"));
    assert_eq!(listed.len(), 4);
}

#[test]
fn catalog_order_is_preserved() {
    let result = finder().find_eligible(&["CS 170", "CS 171", "CS 224"]);
    let eligible: Vec<&str> = result.eligible.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(eligible, ["CS 253", "MATH 221"]);
    assert_eq!(result.ineligible[0].code.as_str(), "CS 326");
}

#[test]
fn explanation_lists_every_missing_group() {
    let check = finder().check_course("CS 253", &["CS 170"]).unwrap();
    assert!(!check.result.eligible);
    assert_eq!(
        check.explanation(),
        "Missing prerequisites:\n• CS 171\n• CS 224"
    );
}

#[test]
fn unspaced_code_drops_out_and_remaining_group_is_satisfied() {
    let requirement = parser().parse("CS224 and MATH 221 or MATH 275");
    assert_eq!(requirement.len(), 1);
    assert_eq!(requirement.groups()[0].to_string(), "MATH 221 OR MATH 275");

    let result = check_eligibility(
        &completed(&["CS 170", "CS 171", "CS 224", "MATH 221"]),
        &requirement,
    );
    assert!(result.eligible);
    assert!(result.missing_groups.is_empty());
}
