use anyhow::{anyhow, bail, Result};
use log::debug;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::path::PathBuf;

use gradecalc::{
    check_courses, check_semesters, compute_cgpa, compute_gpa, load_courses_csv,
    load_semesters_csv, CalculationRecord, CgpaSummary, GpaSummary, GradingScale, InputIssue,
    Severity,
};

fn main() -> Result<()> {
    // Terminal logging for diagnostics; user-facing output stays on println
    TermLogger::init(
        LevelFilter::Warn,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .ok();

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("gpa") => run_gpa(&args[2..]),
        Some("cgpa") => run_cgpa(&args[2..]),
        Some("scale") => {
            run_scale();
            Ok(())
        }
        _ => {
            print_usage();
            Ok(())
        }
    }
}

fn print_usage() {
    println!("gradecalc {} - GPA & CGPA calculator", gradecalc::VERSION);
    println!();
    println!("Usage:");
    println!("  gradecalc gpa <courses.csv> [--name <student>] [--json]");
    println!("  gradecalc cgpa <semesters.csv> [--name <student>] [--json]");
    println!("  gradecalc scale");
    println!();
    println!("CSV headers:");
    println!("  courses:   Course Name, Total Marks, Obtained Marks, Credit Hours");
    println!("  semesters: Semester, GPA, Credit Hours");
}

// ============================================================================
// OPTION PARSING
// ============================================================================

#[derive(Debug)]
struct CliOptions {
    input: PathBuf,
    student_name: String,
    json: bool,
}

impl CliOptions {
    fn parse(args: &[String]) -> Result<Self> {
        let mut input = None;
        let mut student_name = String::new();
        let mut json = false;

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--name" => {
                    student_name = iter
                        .next()
                        .cloned()
                        .ok_or_else(|| anyhow!("--name requires a value"))?;
                }
                "--json" => json = true,
                other if other.starts_with("--") => bail!("Unknown option: {}", other),
                other => {
                    if input.is_some() {
                        bail!("Unexpected argument: {}", other);
                    }
                    input = Some(PathBuf::from(other));
                }
            }
        }

        let input = input.ok_or_else(|| anyhow!("Missing input CSV path (see: gradecalc)"))?;

        Ok(CliOptions {
            input,
            student_name,
            json,
        })
    }

    fn display_student(&self) -> &str {
        if self.student_name.trim().is_empty() {
            "Student"
        } else {
            &self.student_name
        }
    }
}

// ============================================================================
// GPA MODE
// ============================================================================

fn run_gpa(args: &[String]) -> Result<()> {
    let opts = CliOptions::parse(args)?;
    debug!("loading courses from {}", opts.input.display());

    let courses = load_courses_csv(&opts.input)?;
    println!(
        "📂 Loaded {} course rows from {}",
        courses.len(),
        opts.input.display()
    );

    print_issues(&check_courses(&courses));

    let scale = GradingScale::default();
    let summary = match compute_gpa(&courses, &scale) {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("❌ {}", err);
            std::process::exit(1);
        }
    };

    if opts.json {
        let record = CalculationRecord::gpa(opts.display_student(), summary);
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    print_gpa_summary(opts.display_student(), &summary);
    Ok(())
}

fn print_gpa_summary(student: &str, summary: &GpaSummary) {
    println!("\n🎓 Semester GPA — {}", student);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "{:<24} {:>9} {:>9} {:>8} {:>6} {:>6} {:>7} {:>8}",
        "Course", "Obtained", "Total", "Percent", "Grade", "GP", "Credit", "Points"
    );

    for course in &summary.courses {
        println!(
            "{:<24} {:>9.2} {:>9.2} {:>7.2}% {:>6} {:>6.2} {:>7.1} {:>8.2}",
            course.name,
            course.obtained_marks,
            course.total_marks,
            course.percentage,
            course.letter,
            course.grade_point,
            course.credit_hours,
            course.grade_points_earned,
        );
    }

    for row in &summary.excluded {
        println!("⚠️  {} excluded: {}", row.name, row.reason.as_str());
    }

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "✓ Total Credit Hours: {:.2}",
        summary.aggregate.total_credit_hours
    );
    println!(
        "✓ Total Grade Points: {:.2}",
        summary.aggregate.total_grade_points
    );
    println!("✓ Final GPA: {:.2}", summary.aggregate.final_ratio);
}

// ============================================================================
// CGPA MODE
// ============================================================================

fn run_cgpa(args: &[String]) -> Result<()> {
    let opts = CliOptions::parse(args)?;
    debug!("loading semesters from {}", opts.input.display());

    let semesters = load_semesters_csv(&opts.input)?;
    println!(
        "📂 Loaded {} semester rows from {}",
        semesters.len(),
        opts.input.display()
    );

    print_issues(&check_semesters(&semesters));

    let summary = match compute_cgpa(&semesters) {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("❌ {}", err);
            std::process::exit(1);
        }
    };

    if opts.json {
        let record = CalculationRecord::cgpa(opts.display_student(), summary);
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    print_cgpa_summary(opts.display_student(), &summary);
    Ok(())
}

fn print_cgpa_summary(student: &str, summary: &CgpaSummary) {
    println!("\n🎓 Cumulative GPA — {}", student);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "{:<24} {:>6} {:>7} {:>8}",
        "Semester", "GPA", "Credit", "Points"
    );

    for semester in &summary.semesters {
        println!(
            "{:<24} {:>6.2} {:>7.1} {:>8.2}",
            semester.label, semester.gpa, semester.credit_hours, semester.grade_points_earned,
        );
    }

    for row in &summary.excluded {
        println!("⚠️  {} excluded: {}", row.name, row.reason.as_str());
    }

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "✓ Total Credit Hours: {:.2}",
        summary.aggregate.total_credit_hours
    );
    println!(
        "✓ Total Grade Points: {:.2}",
        summary.aggregate.total_grade_points
    );
    println!("✓ Final CGPA: {:.2}", summary.aggregate.final_ratio);
}

// ============================================================================
// SCALE MODE
// ============================================================================

fn run_scale() {
    let scale = GradingScale::default();

    println!("📋 Grading Scale");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{:<12} {:>6} {:>6}", "Percentage", "Grade", "GP");

    for band in scale.bands() {
        println!(
            "{:<12} {:>6} {:>6.2}",
            format!("{:.0}-{:.0}", band.min_percent, band.max_percent),
            band.letter,
            band.grade_point,
        );
    }
}

// ============================================================================
// SHARED OUTPUT
// ============================================================================

fn print_issues(issues: &[InputIssue]) {
    for issue in issues {
        match issue.severity {
            Severity::Warning => println!("⚠️  Row {}: {}", issue.row + 1, issue.message),
            Severity::Info => println!("ℹ️  Row {}: {}", issue.row + 1, issue.message),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
