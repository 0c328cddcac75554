// gradecalc - GPA / CGPA grade engine
// Exposes the grading scale, input records, computation engine, and input
// quality checks for use in UI layers, reporters, and tests

pub mod engine;
pub mod quality;
pub mod records;
pub mod scale;

// Re-export commonly used types
pub use engine::{
    compute_cgpa, compute_gpa, AggregateResult, CgpaSummary, CourseResult, EngineError,
    ExcludedRow, ExclusionReason, GpaSummary, SemesterResult,
};
pub use quality::{check_courses, check_semesters, InputIssue, Severity};
pub use records::{
    load_courses_csv, load_semesters_csv, Calculation, CalculationRecord, CourseInput,
    SemesterInput,
};
pub use scale::{GradeBand, GradingScale, ScaleError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
