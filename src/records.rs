// 📚 Input Records - Course and semester rows + calculation envelope
// Value objects created and consumed within a single computation

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::engine::{CgpaSummary, GpaSummary};

// ============================================================================
// COURSE INPUT
// ============================================================================

/// One course row as entered by the student.
///
/// Column names follow the spreadsheet headers used by the reporting
/// collaborators, so rows load directly from CSV files with those headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseInput {
    #[serde(rename = "Course Name", default)]
    pub name: String,

    #[serde(rename = "Total Marks")]
    pub total_marks: f64,

    #[serde(rename = "Obtained Marks")]
    pub obtained_marks: f64,

    #[serde(rename = "Credit Hours")]
    pub credit_hours: f64,
}

impl CourseInput {
    pub fn new(name: &str, total_marks: f64, obtained_marks: f64, credit_hours: f64) -> Self {
        CourseInput {
            name: name.to_string(),
            total_marks,
            obtained_marks,
            credit_hours,
        }
    }

    /// Name to show for this row; blank names default to "Course N"
    /// (1-based position).
    pub fn display_name(&self, index: usize) -> String {
        if self.name.trim().is_empty() {
            format!("Course {}", index + 1)
        } else {
            self.name.clone()
        }
    }
}

// ============================================================================
// SEMESTER INPUT
// ============================================================================

/// One semester row for the cumulative calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemesterInput {
    #[serde(rename = "Semester", default)]
    pub label: String,

    #[serde(rename = "GPA")]
    pub gpa: f64,

    #[serde(rename = "Credit Hours")]
    pub credit_hours: f64,
}

impl SemesterInput {
    pub fn new(label: &str, gpa: f64, credit_hours: f64) -> Self {
        SemesterInput {
            label: label.to_string(),
            gpa,
            credit_hours,
        }
    }

    pub fn display_label(&self, index: usize) -> String {
        if self.label.trim().is_empty() {
            format!("Semester {}", index + 1)
        } else {
            self.label.clone()
        }
    }
}

// ============================================================================
// CSV LOADING
// ============================================================================

/// Load course rows from a CSV file with the spreadsheet headers
/// (Course Name, Total Marks, Obtained Marks, Credit Hours).
pub fn load_courses_csv(csv_path: &Path) -> Result<Vec<CourseInput>> {
    let mut rdr = csv::Reader::from_path(csv_path)
        .with_context(|| format!("Failed to open courses file: {}", csv_path.display()))?;

    let mut courses = Vec::new();

    for result in rdr.deserialize() {
        let course: CourseInput = result.context("Failed to deserialize course row")?;
        courses.push(course);
    }

    Ok(courses)
}

/// Load semester rows from a CSV file with the spreadsheet headers
/// (Semester, GPA, Credit Hours).
pub fn load_semesters_csv(csv_path: &Path) -> Result<Vec<SemesterInput>> {
    let mut rdr = csv::Reader::from_path(csv_path)
        .with_context(|| format!("Failed to open semesters file: {}", csv_path.display()))?;

    let mut semesters = Vec::new();

    for result in rdr.deserialize() {
        let semester: SemesterInput = result.context("Failed to deserialize semester row")?;
        semesters.push(semester);
    }

    Ok(semesters)
}

// ============================================================================
// CALCULATION RECORD
// ============================================================================

/// A completed calculation as handed to external collaborators (UI layers,
/// stores, reporters). The engine only builds the value; keeping it anywhere
/// is the caller's business.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub student_name: String,
    pub recorded_at: DateTime<Utc>,
    pub calculation: Calculation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Calculation {
    Gpa(GpaSummary),
    Cgpa(CgpaSummary),
}

impl CalculationRecord {
    pub fn gpa(student_name: &str, summary: GpaSummary) -> Self {
        CalculationRecord {
            student_name: student_name.to_string(),
            recorded_at: Utc::now(),
            calculation: Calculation::Gpa(summary),
        }
    }

    pub fn cgpa(student_name: &str, summary: CgpaSummary) -> Self {
        CalculationRecord {
            student_name: student_name.to_string(),
            recorded_at: Utc::now(),
            calculation: Calculation::Cgpa(summary),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
