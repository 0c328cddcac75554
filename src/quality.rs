// ✅ Input Quality Checks - Pre-computation row inspection
// Flags questionable rows before the engine runs; never blocks computation

use serde::{Deserialize, Serialize};

use crate::records::{CourseInput, SemesterInput};

// ============================================================================
// ISSUE TYPES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// The row will compute, but almost certainly not the way the student
    /// intended (e.g. obtained marks above total marks).
    Warning,

    /// The row will be excluded or defaulted; worth telling the user.
    Info,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputIssue {
    pub severity: Severity,
    /// 0-based position of the row in the input sequence
    pub row: usize,
    pub field: String,
    pub message: String,
}

impl InputIssue {
    fn warning(row: usize, field: &str, message: String) -> Self {
        InputIssue {
            severity: Severity::Warning,
            row,
            field: field.to_string(),
            message,
        }
    }

    fn info(row: usize, field: &str, message: String) -> Self {
        InputIssue {
            severity: Severity::Info,
            row,
            field: field.to_string(),
            message,
        }
    }
}

// ============================================================================
// COURSE CHECKS
// ============================================================================

/// Inspect course rows for the guarantees the engine does not enforce
/// itself. The engine trusts its caller, so anything flagged here still
/// computes; warnings explain results that would otherwise look wrong.
pub fn check_courses(courses: &[CourseInput]) -> Vec<InputIssue> {
    let mut issues = Vec::new();

    for (row, course) in courses.iter().enumerate() {
        if course.obtained_marks > course.total_marks && course.total_marks > 0.0 {
            issues.push(InputIssue::warning(
                row,
                "obtained_marks",
                format!(
                    "obtained marks {} exceed total marks {}; percentage falls outside the grading table and takes the fail grade",
                    course.obtained_marks, course.total_marks
                ),
            ));
        }

        if course.obtained_marks < 0.0 {
            issues.push(InputIssue::warning(
                row,
                "obtained_marks",
                format!("obtained marks {} are negative", course.obtained_marks),
            ));
        }

        if course.total_marks <= 0.0 {
            issues.push(InputIssue::info(
                row,
                "total_marks",
                "total marks is not positive; row will be excluded from the totals".to_string(),
            ));
        }

        if course.credit_hours <= 0.0 {
            issues.push(InputIssue::info(
                row,
                "credit_hours",
                "credit hours is not positive; row will be excluded from the totals".to_string(),
            ));
        }

        if course.name.trim().is_empty() {
            issues.push(InputIssue::info(
                row,
                "name",
                format!("course name is empty; defaulting to \"Course {}\"", row + 1),
            ));
        }
    }

    issues
}

// ============================================================================
// SEMESTER CHECKS
// ============================================================================

pub fn check_semesters(semesters: &[SemesterInput]) -> Vec<InputIssue> {
    let mut issues = Vec::new();

    for (row, semester) in semesters.iter().enumerate() {
        if !(0.0..=4.0).contains(&semester.gpa) {
            issues.push(InputIssue::warning(
                row,
                "gpa",
                format!("semester GPA {} is outside 0.00-4.00", semester.gpa),
            ));
        }

        if semester.credit_hours <= 0.0 {
            issues.push(InputIssue::info(
                row,
                "credit_hours",
                "credit hours is not positive; row will be excluded from the totals".to_string(),
            ));
        }
    }

    issues
}

// ============================================================================
// TESTS
// ============================================================================
