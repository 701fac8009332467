//! Human-readable rendering of missing requirement groups.

use super::RequirementGroup;

/// Text returned when nothing is missing.
pub const NOTHING_MISSING: &str = "No missing prerequisites";

/// First line of a non-empty explanation.
pub const MISSING_HEADER: &str = "Missing prerequisites:";

/// Render one group as it appears after the bullet.
pub fn describe_group(group: &RequirementGroup) -> String {
    if group.len() == 1 {
        group.to_string()
    } else {
        format!("One of: {}", group)
    }
}

/// Render missing groups, one bullet per group in the order given.
pub fn explain(missing_groups: &[RequirementGroup]) -> String {
    if missing_groups.is_empty() {
        return NOTHING_MISSING.to_string();
    }

    let lines: Vec<String> = missing_groups
        .iter()
        .map(|group| format!("• {}", describe_group(group)))
        .collect();

    format!("{}\n{}", MISSING_HEADER, lines.join("\n"))
}
