//! Shared display helpers for query results.
//!
//! Used by `eligible`, `explain`, and `interactive` so results look the
//! same wherever they are printed.

use crate::catalog::{
    group_by_level, CourseCheck, EligibleCourse, IneligibleCourse, QueryResult, UnparsedCourse,
};
use crate::requirements::explain;
use crate::ui::UserInterface;

const DETAIL_INDENT: &str = "     ";

/// Split a comma-separated course list, dropping blank entries.
pub fn parse_course_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Eligible courses grouped by level and sorted by code within each level.
pub fn show_eligible(ui: &mut dyn UserInterface, result: &QueryResult, levels: &[String]) {
    ui.success(&format!("YOU CAN TAKE {} COURSES:", result.eligible.len()));

    for group in group_by_level(&result.eligible, levels) {
        if group.courses.is_empty() {
            continue;
        }

        let mut courses = group.courses;
        courses.sort_by(|a, b| a.code.cmp(&b.code));

        ui.show_header(&format!("{}-Level Courses", group.level));
        for course in &courses {
            show_eligible_course(ui, course);
        }
    }

    show_unparsed(ui, &result.unparsed);
}

/// Courses left out because their requisites could not be read.
pub fn show_unparsed(ui: &mut dyn UserInterface, courses: &[UnparsedCourse]) {
    if courses.is_empty() {
        return;
    }

    ui.warning(&format!(
        "Could not read prerequisites for {} course(s); they are not listed:",
        courses.len()
    ));
    for course in courses {
        ui.message(&format!("  {}: {:?}", course.code, course.requisites));
    }
}

fn show_eligible_course(ui: &mut dyn UserInterface, course: &EligibleCourse) {
    ui.message(&format!("  {}: {}", course.code, course.name));
    if ui.output_mode().shows_decorations() && !course.description.is_empty() {
        ui.message(&format!("{}{}", DETAIL_INDENT, course.description));
    }
}

/// Courses that are still blocked, each with its explanation.
pub fn show_ineligible(ui: &mut dyn UserInterface, courses: &[IneligibleCourse]) {
    ui.show_header(&format!("NOT YET AVAILABLE ({}):", courses.len()));
    for course in courses {
        ui.message(&format!("  {}: {}", course.code, course.name));
        show_indented(ui, &explain(&course.missing));
    }
}

/// Eligibility of one course.
pub fn show_check(ui: &mut dyn UserInterface, check: &CourseCheck) {
    let title = if check.name.is_empty() {
        check.code.to_string()
    } else {
        format!("{}: {}", check.code, check.name)
    };

    if check.already_completed {
        ui.warning(&format!("You have already completed {}", check.code));
    }

    if check.result.eligible {
        ui.success(&format!("You can take {}", title));
    } else {
        ui.warning(&format!("You cannot take {} yet", title));
    }

    if ui.output_mode().shows_detail() {
        ui.message(&format!("  Requires: {}", check.requirement));
    }
    show_indented(ui, &check.explanation());
}

fn show_indented(ui: &mut dyn UserInterface, text: &str) {
    for line in text.lines() {
        ui.message(&format!("{}{}", DETAIL_INDENT, line));
    }
}
