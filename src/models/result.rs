// src/models/result.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Sentinel group for attempts submitted without a student group.
pub const UNGROUPED: &str = "Без группы";

/// Represents the 'results' table in the database.
/// One row per submitted quiz attempt; rows are never updated or deleted.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct QuizResult {
    pub id: i64,
    pub student_name: String,
    pub student_group: Option<String>,
    pub score: i64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// DTO for submitting a quiz attempt.
///
/// `name` and `score` are required, but kept optional here so a missing
/// field maps to a 400 from the handler instead of a body-deserialization
/// rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveResultRequest {
    #[validate(length(min = 1, max = 80, message = "name must be 1-80 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 80, message = "group must be at most 80 characters"))]
    pub group: Option<String>,
    #[validate(range(min = 0, message = "score must be non-negative"))]
    pub score: Option<i64>,
}

/// One dashboard bucket: a student group with its attempts, newest first.
#[derive(Debug, Serialize)]
pub struct ResultGroup {
    pub group: String,
    pub results: Vec<QuizResult>,
}

/// Buckets results by student group for the teacher dashboard.
///
/// The input must already be ordered newest first; that order is kept
/// within each bucket, and buckets appear in order of their newest
/// attempt. Attempts without a group (NULL or blank) land under the
/// [`UNGROUPED`] sentinel.
pub fn group_by_student_group(results: Vec<QuizResult>) -> Vec<ResultGroup> {
    let mut groups: Vec<ResultGroup> = Vec::new();

    for result in results {
        let key = result
            .student_group
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .unwrap_or(UNGROUPED)
            .to_string();

        match groups.iter_mut().find(|g| g.group == key) {
            Some(bucket) => bucket.results.push(result),
            None => groups.push(ResultGroup {
                group: key,
                results: vec![result],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn result(id: i64, name: &str, group: Option<&str>) -> QuizResult {
        QuizResult {
            id,
            student_name: name.to_string(),
            student_group: group.map(|g| g.to_string()),
            score: 50,
            timestamp: Utc.with_ymd_and_hms(2025, 9, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn groups_by_value_equality_keeping_order() {
        // Newest first: Vera (G1), Boris (no group), Ana (G1).
        let grouped = group_by_student_group(vec![
            result(3, "Вера", Some("G1")),
            result(2, "Борис", None),
            result(1, "Ана", Some("G1")),
        ]);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].group, "G1");
        assert_eq!(grouped[0].results[0].student_name, "Вера");
        assert_eq!(grouped[0].results[1].student_name, "Ана");
        assert_eq!(grouped[1].group, UNGROUPED);
        assert_eq!(grouped[1].results[0].student_name, "Борис");
    }

    #[test]
    fn blank_group_buckets_under_sentinel() {
        let grouped = group_by_student_group(vec![
            result(2, "Борис", Some("  ")),
            result(1, "Ана", Some("")),
        ]);

        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].group, UNGROUPED);
        assert_eq!(grouped[0].results.len(), 2);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_by_student_group(Vec::new()).is_empty());
    }
}
