// 📋 Grading Scale - Percentage → (letter grade, grade point) bands
// Fixed ordered table with first-match lookup and F fallback

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// GRADE BAND
// ============================================================================

/// One row of the grading table: an inclusive percentage range mapped to a
/// letter grade and a grade point value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeBand {
    /// Inclusive lower bound of the percentage range
    pub min_percent: f64,

    /// Inclusive upper bound of the percentage range
    pub max_percent: f64,

    /// Letter grade label ("A", "B+", "F", ...)
    pub letter: String,

    /// Grade point value (0.00 - 4.00)
    pub grade_point: f64,
}

impl GradeBand {
    pub fn new(min_percent: f64, max_percent: f64, letter: &str, grade_point: f64) -> Self {
        GradeBand {
            min_percent,
            max_percent,
            letter: letter.to_string(),
            grade_point,
        }
    }

    /// Check if a percentage falls inside this band (both bounds inclusive)
    pub fn contains(&self, percentage: f64) -> bool {
        percentage >= self.min_percent && percentage <= self.max_percent
    }
}

// ============================================================================
// SCALE ERRORS
// ============================================================================

#[derive(Debug, Error, PartialEq)]
pub enum ScaleError {
    #[error("grading scale has no bands")]
    Empty,

    #[error("band '{letter}' has grade point {grade_point} outside 0.00-4.00")]
    GradePointOutOfRange { letter: String, grade_point: f64 },

    #[error("band '{letter}' has lower bound {min} above upper bound {max}")]
    InvertedRange { letter: String, min: f64, max: f64 },

    #[error("bands '{first}' and '{second}' overlap")]
    OverlappingBands { first: String, second: String },
}

// ============================================================================
// GRADING SCALE
// ============================================================================

/// Ordered list of grade bands. Lookup scans the bands in order and returns
/// the first match; percentages that match no band (negative, above 100, or
/// inside an inter-band gap) resolve to the fail grade rather than erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingScale {
    bands: Vec<GradeBand>,
}

impl GradingScale {
    /// Build a custom scale. Bands must be non-empty, each grade point must
    /// sit within 0.00-4.00, and no two ranges may overlap (first-match
    /// lookup would make overlaps ambiguous). Gaps between bands are legal
    /// and fall through to the fail grade.
    pub fn new(bands: Vec<GradeBand>) -> Result<Self, ScaleError> {
        if bands.is_empty() {
            return Err(ScaleError::Empty);
        }

        for band in &bands {
            if band.grade_point < 0.0 || band.grade_point > 4.0 {
                return Err(ScaleError::GradePointOutOfRange {
                    letter: band.letter.clone(),
                    grade_point: band.grade_point,
                });
            }
            if band.min_percent > band.max_percent {
                return Err(ScaleError::InvertedRange {
                    letter: band.letter.clone(),
                    min: band.min_percent,
                    max: band.max_percent,
                });
            }
        }

        for (i, a) in bands.iter().enumerate() {
            for b in bands.iter().skip(i + 1) {
                if a.min_percent <= b.max_percent && b.min_percent <= a.max_percent {
                    return Err(ScaleError::OverlappingBands {
                        first: a.letter.clone(),
                        second: b.letter.clone(),
                    });
                }
            }
        }

        Ok(GradingScale { bands })
    }

    /// Look up the letter grade and grade point for a percentage.
    ///
    /// First band whose inclusive range contains the value wins. Anything
    /// outside the table degrades to the fail grade instead of erroring.
    pub fn grade_for_percentage(&self, percentage: f64) -> (&str, f64) {
        for band in &self.bands {
            if band.contains(percentage) {
                return (&band.letter, band.grade_point);
            }
        }

        self.fail_grade()
    }

    /// The scale's fail grade: its zero-point band, or a literal F when the
    /// scale defines none.
    pub fn fail_grade(&self) -> (&str, f64) {
        self.bands
            .iter()
            .find(|b| b.grade_point == 0.0)
            .map(|b| (b.letter.as_str(), b.grade_point))
            .unwrap_or(("F", 0.0))
    }

    pub fn bands(&self) -> &[GradeBand] {
        &self.bands
    }
}

impl Default for GradingScale {
    /// The institutional grading table.
    fn default() -> Self {
        GradingScale {
            bands: vec![
                GradeBand::new(91.0, 100.0, "A", 4.00),
                GradeBand::new(80.0, 90.0, "A-", 3.66),
                GradeBand::new(75.0, 79.0, "B+", 3.33),
                GradeBand::new(71.0, 74.0, "B", 3.00),
                GradeBand::new(68.0, 70.0, "B-", 2.66),
                GradeBand::new(64.0, 67.0, "C+", 2.33),
                GradeBand::new(61.0, 63.0, "C", 2.00),
                GradeBand::new(58.0, 60.0, "C-", 1.66),
                GradeBand::new(54.0, 57.0, "D+", 1.33),
                GradeBand::new(50.0, 53.0, "D", 1.00),
                GradeBand::new(0.0, 49.0, "F", 0.00),
            ],
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
