// 🎓 Grade Engine - GPA and CGPA computation
// Pure, stateless: identical input always produces identical output

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::records::{CourseInput, SemesterInput};
use crate::scale::GradingScale;

// ============================================================================
// ENGINE ERRORS
// ============================================================================

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Every row failed the inclusion filter, so total credit hours is zero
    /// and no ratio exists. Surfaced instead of a divide-by-zero; the caller
    /// decides how to message it.
    #[error("no rows qualify for the calculation (total credit hours is zero)")]
    NoQualifyingRows,
}

// ============================================================================
// PER-ROW RESULTS
// ============================================================================

/// Computed outcome for one course. Immutable once computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseResult {
    pub name: String,
    pub total_marks: f64,
    pub obtained_marks: f64,
    pub percentage: f64,
    pub letter: String,
    pub grade_point: f64,
    pub credit_hours: f64,
    pub grade_points_earned: f64,
}

/// Computed outcome for one semester row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemesterResult {
    pub label: String,
    pub gpa: f64,
    pub credit_hours: f64,
    pub grade_points_earned: f64,
}

// ============================================================================
// EXCLUSIONS
// ============================================================================

/// Why a row was left out of the totals. Exclusion is not an error: the
/// computation proceeds over the qualifying rows, and excluded rows are
/// listed in the summary so callers can show them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExclusionReason {
    ZeroTotalMarks,
    ZeroCreditHours,
}

impl ExclusionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExclusionReason::ZeroTotalMarks => "total marks is not positive",
            ExclusionReason::ZeroCreditHours => "credit hours is not positive",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExcludedRow {
    /// 0-based position in the input sequence
    pub index: usize,
    pub name: String,
    pub reason: ExclusionReason,
}

// ============================================================================
// AGGREGATE
// ============================================================================

/// Credit-hour-weighted totals and the final ratio (GPA or CGPA).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateResult {
    pub total_credit_hours: f64,
    pub total_grade_points: f64,
    pub final_ratio: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpaSummary {
    pub courses: Vec<CourseResult>,
    pub excluded: Vec<ExcludedRow>,
    pub aggregate: AggregateResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CgpaSummary {
    pub semesters: Vec<SemesterResult>,
    pub excluded: Vec<ExcludedRow>,
    pub aggregate: AggregateResult,
}

// ============================================================================
// GPA COMPUTATION
// ============================================================================

/// Compute a semester GPA over a sequence of course rows.
///
/// A course counts only if total marks > 0 and credit hours > 0; rows
/// failing the filter are excluded from the totals, not rejected. For each
/// qualifying course: percentage = obtained / total × 100, grade via the
/// scale, grade points earned = grade point × credit hours. The percentage
/// is not clamped; values outside the table take the scale's fail grade.
pub fn compute_gpa(
    courses: &[CourseInput],
    scale: &GradingScale,
) -> Result<GpaSummary, EngineError> {
    let mut results = Vec::new();
    let mut excluded = Vec::new();
    let mut total_credit_hours = 0.0;
    let mut total_grade_points = 0.0;

    for (index, course) in courses.iter().enumerate() {
        let name = course.display_name(index);

        if course.total_marks <= 0.0 {
            excluded.push(ExcludedRow {
                index,
                name,
                reason: ExclusionReason::ZeroTotalMarks,
            });
            continue;
        }

        if course.credit_hours <= 0.0 {
            excluded.push(ExcludedRow {
                index,
                name,
                reason: ExclusionReason::ZeroCreditHours,
            });
            continue;
        }

        let percentage = course.obtained_marks / course.total_marks * 100.0;
        let (letter, grade_point) = scale.grade_for_percentage(percentage);
        let grade_points_earned = grade_point * course.credit_hours;

        total_credit_hours += course.credit_hours;
        total_grade_points += grade_points_earned;

        results.push(CourseResult {
            name,
            total_marks: course.total_marks,
            obtained_marks: course.obtained_marks,
            percentage,
            letter: letter.to_string(),
            grade_point,
            credit_hours: course.credit_hours,
            grade_points_earned,
        });
    }

    if total_credit_hours <= 0.0 {
        return Err(EngineError::NoQualifyingRows);
    }

    Ok(GpaSummary {
        courses: results,
        excluded,
        aggregate: AggregateResult {
            total_credit_hours,
            total_grade_points,
            final_ratio: total_grade_points / total_credit_hours,
        },
    })
}

// ============================================================================
// CGPA COMPUTATION
// ============================================================================

/// Compute a cumulative GPA over a sequence of semester rows.
///
/// A semester counts only if its credit hours > 0. Grade points earned =
/// semester GPA × credit hours; aggregation matches `compute_gpa`. The
/// grading scale plays no part here since semester GPAs are already points.
pub fn compute_cgpa(semesters: &[SemesterInput]) -> Result<CgpaSummary, EngineError> {
    let mut results = Vec::new();
    let mut excluded = Vec::new();
    let mut total_credit_hours = 0.0;
    let mut total_grade_points = 0.0;

    for (index, semester) in semesters.iter().enumerate() {
        let label = semester.display_label(index);

        if semester.credit_hours <= 0.0 {
            excluded.push(ExcludedRow {
                index,
                name: label,
                reason: ExclusionReason::ZeroCreditHours,
            });
            continue;
        }

        let grade_points_earned = semester.gpa * semester.credit_hours;

        total_credit_hours += semester.credit_hours;
        total_grade_points += grade_points_earned;

        results.push(SemesterResult {
            label,
            gpa: semester.gpa,
            credit_hours: semester.credit_hours,
            grade_points_earned,
        });
    }

    if total_credit_hours <= 0.0 {
        return Err(EngineError::NoQualifyingRows);
    }

    Ok(CgpaSummary {
        semesters: results,
        excluded,
        aggregate: AggregateResult {
            total_credit_hours,
            total_grade_points,
            final_ratio: total_grade_points / total_credit_hours,
        },
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn scale() -> GradingScale {
        GradingScale::default()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_single_a_course() {
        // One course, total=100, obtained=95, credit=3
        let courses = vec![CourseInput::new("Databases", 100.0, 95.0, 3.0)];
        let summary = compute_gpa(&courses, &scale()).unwrap();

        assert_eq!(summary.courses.len(), 1);
        let result = &summary.courses[0];
        assert_close(result.percentage, 95.0);
        assert_eq!(result.letter, "A");
        assert_close(result.grade_point, 4.00);
        assert_close(result.grade_points_earned, 12.0);

        assert_close(summary.aggregate.total_credit_hours, 3.0);
        assert_close(summary.aggregate.total_grade_points, 12.0);
        assert_close(summary.aggregate.final_ratio, 4.0);
        assert!(summary.excluded.is_empty());
    }

    #[test]
    fn test_two_course_weighted_average() {
        // 72% → B/3.00 over 3 hours, 60% → C-/1.66 over 4 hours
        let courses = vec![
            CourseInput::new("OS", 100.0, 72.0, 3.0),
            CourseInput::new("Stats", 50.0, 30.0, 4.0),
        ];
        let summary = compute_gpa(&courses, &scale()).unwrap();

        assert_close(summary.courses[0].percentage, 72.0);
        assert_eq!(summary.courses[0].letter, "B");
        assert_close(summary.courses[0].grade_points_earned, 9.0);

        assert_close(summary.courses[1].percentage, 60.0);
        assert_eq!(summary.courses[1].letter, "C-");
        assert_close(summary.courses[1].grade_points_earned, 6.64);

        assert_close(summary.aggregate.total_credit_hours, 7.0);
        assert_close(summary.aggregate.total_grade_points, 15.64);
        assert_close(summary.aggregate.final_ratio, 15.64 / 7.0);
        // Two-decimal presentation rounds to 2.23
        assert_eq!(format!("{:.2}", summary.aggregate.final_ratio), "2.23");
    }

    #[test]
    fn test_cgpa_two_semesters() {
        let semesters = vec![
            SemesterInput::new("Semester 1", 3.50, 15.0),
            SemesterInput::new("Semester 2", 3.80, 18.0),
        ];
        let summary = compute_cgpa(&semesters).unwrap();

        assert_close(summary.semesters[0].grade_points_earned, 52.50);
        assert_close(summary.semesters[1].grade_points_earned, 68.40);
        assert_close(summary.aggregate.total_credit_hours, 33.0);
        assert_close(summary.aggregate.total_grade_points, 120.90);
        assert_close(summary.aggregate.final_ratio, 120.90 / 33.0);
        assert_eq!(format!("{:.2}", summary.aggregate.final_ratio), "3.66");
    }

    #[test]
    fn test_zero_obtained_marks_included() {
        // 0% is a qualifying row: it earns an F and drags the GPA down
        let courses = vec![
            CourseInput::new("Physics", 100.0, 0.0, 3.0),
            CourseInput::new("Chemistry", 100.0, 95.0, 3.0),
        ];
        let summary = compute_gpa(&courses, &scale()).unwrap();

        assert_eq!(summary.courses.len(), 2);
        assert_eq!(summary.courses[0].letter, "F");
        assert_close(summary.courses[0].grade_points_earned, 0.0);
        assert_close(summary.aggregate.total_credit_hours, 6.0);
        assert_close(summary.aggregate.final_ratio, 2.0);
    }

    #[test]
    fn test_zero_credit_course_excluded() {
        let courses = vec![
            CourseInput::new("Seminar", 100.0, 99.0, 0.0),
            CourseInput::new("Networks", 100.0, 85.0, 3.0),
        ];
        let summary = compute_gpa(&courses, &scale()).unwrap();

        // Excluded regardless of its percentage, totals untouched
        assert_eq!(summary.courses.len(), 1);
        assert_eq!(summary.excluded.len(), 1);
        assert_eq!(summary.excluded[0].index, 0);
        assert_eq!(summary.excluded[0].name, "Seminar");
        assert_eq!(summary.excluded[0].reason, ExclusionReason::ZeroCreditHours);
        assert_close(summary.aggregate.total_credit_hours, 3.0);
        assert_close(summary.aggregate.final_ratio, 3.66);
    }

    #[test]
    fn test_zero_total_marks_excluded() {
        let courses = vec![
            CourseInput::new("", 0.0, 0.0, 3.0),
            CourseInput::new("Algebra", 100.0, 91.0, 3.0),
        ];
        let summary = compute_gpa(&courses, &scale()).unwrap();

        assert_eq!(summary.excluded.len(), 1);
        assert_eq!(summary.excluded[0].name, "Course 1");
        assert_eq!(summary.excluded[0].reason, ExclusionReason::ZeroTotalMarks);
        assert_close(summary.aggregate.final_ratio, 4.0);
    }

    #[test]
    fn test_negative_inputs_excluded_as_not_positive() {
        // Negative totals and credit hours fail the filter the same way
        // zeros do, and the stated reason says so
        let courses = vec![
            CourseInput::new("Audit", 100.0, 80.0, -2.0),
            CourseInput::new("Retake", -50.0, 0.0, 3.0),
            CourseInput::new("Algebra", 100.0, 91.0, 3.0),
        ];
        let summary = compute_gpa(&courses, &scale()).unwrap();

        assert_eq!(summary.excluded.len(), 2);
        assert_eq!(summary.excluded[0].reason, ExclusionReason::ZeroCreditHours);
        assert_eq!(
            summary.excluded[0].reason.as_str(),
            "credit hours is not positive"
        );
        assert_eq!(summary.excluded[1].reason, ExclusionReason::ZeroTotalMarks);
        assert_eq!(
            summary.excluded[1].reason.as_str(),
            "total marks is not positive"
        );
        assert_close(summary.aggregate.final_ratio, 4.0);
    }

    #[test]
    fn test_all_rows_excluded_is_error() {
        let courses = vec![
            CourseInput::new("A", 100.0, 80.0, 0.0),
            CourseInput::new("B", 0.0, 0.0, 3.0),
        ];
        assert_eq!(
            compute_gpa(&courses, &scale()).unwrap_err(),
            EngineError::NoQualifyingRows
        );

        let semesters = vec![SemesterInput::new("S1", 3.5, 0.0)];
        assert_eq!(
            compute_cgpa(&semesters).unwrap_err(),
            EngineError::NoQualifyingRows
        );
    }

    #[test]
    fn test_empty_input_is_error() {
        assert_eq!(
            compute_gpa(&[], &scale()).unwrap_err(),
            EngineError::NoQualifyingRows
        );
        assert_eq!(
            compute_cgpa(&[]).unwrap_err(),
            EngineError::NoQualifyingRows
        );
    }

    #[test]
    fn test_obtained_above_total_falls_to_f() {
        // Trust-the-caller policy: percentage above the table takes F
        let courses = vec![CourseInput::new("Bonus", 100.0, 110.0, 3.0)];
        let summary = compute_gpa(&courses, &scale()).unwrap();

        assert_close(summary.courses[0].percentage, 110.0);
        assert_eq!(summary.courses[0].letter, "F");
        assert_close(summary.aggregate.final_ratio, 0.0);
    }

    fn course_rows() -> impl Strategy<Value = Vec<CourseInput>> {
        prop::collection::vec(
            (1.0f64..1000.0, 0.0f64..=1.0, 0.5f64..6.0).prop_map(|(total, frac, credit)| {
                CourseInput::new("", total, total * frac, credit)
            }),
            1..8,
        )
    }

    proptest! {
        #[test]
        fn prop_gpa_ratio_stays_in_scale_bounds(courses in course_rows()) {
            let summary = compute_gpa(&courses, &scale()).unwrap();
            prop_assert!(summary.aggregate.final_ratio >= 0.0);
            prop_assert!(summary.aggregate.final_ratio <= 4.0 + EPS);
        }

        #[test]
        fn prop_compute_gpa_is_pure(courses in course_rows()) {
            let first = compute_gpa(&courses, &scale()).unwrap();
            let second = compute_gpa(&courses, &scale()).unwrap();
            prop_assert_eq!(
                serde_json::to_string(&first).unwrap(),
                serde_json::to_string(&second).unwrap()
            );
        }
    }
}
