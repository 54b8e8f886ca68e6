//! # timetable-cli
//!
//! Command-line interface for extracting course records from timetable PDFs.

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use timetable_parser::{to_json_string, write_json, CourseRecord, ScheduleParser};
use timetable_pdf::{extract_courses_with, PdfError, PdfOptions};
use tracing_subscriber::EnvFilter;

/// timetable - Extract course schedules from university timetable PDFs
#[derive(Parser)]
#[command(name = "timetable")]
#[command(author, version, about = "Extract course schedules from timetable PDFs", long_about = None)]
struct Cli {
    /// Timetable PDF to parse
    #[arg(value_name = "PDF")]
    file: PathBuf,

    /// Also save the records as a pretty-printed JSON file
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format for stdout (json, pretty, table)
    #[arg(short = 'f', long = "format", default_value = "json")]
    format: OutputFormat,

    /// Only read these pages, e.g. "2-5" or "3"
    #[arg(short = 'p', long = "pages", value_parser = parse_page_range)]
    pages: Option<(usize, usize)>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Output format for results.
#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    /// Compact JSON array (default)
    #[default]
    Json,
    /// Indented JSON array
    Pretty,
    /// One line per course
    Table,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    if !cli.file.exists() {
        bail!("PDF file not found: {}", cli.file.display());
    }

    let parser = ScheduleParser::new();
    let pdf_options = PdfOptions {
        page_range: cli.pages,
        ..Default::default()
    };

    tracing::info!("Parsing {}", cli.file.display());
    let courses = match extract_courses_with(&cli.file, &parser, &pdf_options) {
        Ok(courses) => courses,
        Err(PdfError::NoCoursesFound) => {
            eprintln!("[]");
            bail!("No courses found in the PDF");
        }
        Err(e) => return Err(e).context("Error parsing PDF"),
    };

    if let Some(output) = &cli.output {
        write_json(output, &courses)
            .with_context(|| format!("Failed to write {}", output.display()))?;
    }

    print_courses(&courses, cli.format)
}

/// Print the records in the requested format.
fn print_courses(courses: &[CourseRecord], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", to_json_string(courses, false)?),
        OutputFormat::Pretty => println!("{}", to_json_string(courses, true)?),
        OutputFormat::Table => {
            for course in courses {
                println!("{}", table_line(course));
            }
            println!("{}", format!("({} courses)", courses.len()).dimmed());
        }
    }
    Ok(())
}

fn table_line(course: &CourseRecord) -> String {
    let schedule = course
        .schedule
        .iter()
        .map(|slot| format!("{} {}", slot.day, slot.period))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{:<10} {:<4} {:<10} {:<30} {}/{}  [{}]  {}",
        course.course_code,
        course.section,
        course.activity,
        course.course_name,
        course.building,
        course.room,
        schedule,
        course.staff
    )
}

/// Parse "N" or "N-M" into an inclusive page range.
fn parse_page_range(s: &str) -> Result<(usize, usize), String> {
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|_| format!("Invalid page number: '{}'", part.trim()))
    };
    match s.split_once('-') {
        Some((start, end)) => Ok((parse(start)?, parse(end)?)),
        None => {
            let page = parse(s)?;
            Ok((page, page))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timetable_parser::{Day, Slot};

    #[test]
    fn test_parse_page_range() {
        assert_eq!(parse_page_range("2-5"), Ok((2, 5)));
        assert_eq!(parse_page_range(" 3 "), Ok((3, 3)));
        assert!(parse_page_range("a-5").is_err());
        assert!(parse_page_range("").is_err());
    }

    #[test]
    fn test_cli_arguments() {
        let cli = Cli::try_parse_from([
            "timetable",
            "schedule.pdf",
            "-p",
            "1-2",
            "-f",
            "table",
        ])
        .unwrap();
        assert_eq!(cli.file, PathBuf::from("schedule.pdf"));
        assert_eq!(cli.pages, Some((1, 2)));
        assert!(matches!(cli.format, OutputFormat::Table));
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_cli_requires_file() {
        assert!(Cli::try_parse_from(["timetable"]).is_err());
    }

    #[test]
    fn test_missing_file_fails() {
        let cli = Cli::try_parse_from(["timetable", "/non/existent/schedule.pdf"]).unwrap();
        let err = run(&cli).unwrap_err();
        assert!(err.to_string().contains("PDF file not found"));
    }

    #[test]
    fn test_table_line() {
        let course = CourseRecord {
            course_code: "CS 101".to_string(),
            course_name: "Intro to Programming".to_string(),
            credits: "3".to_string(),
            contact_hours: "4".to_string(),
            activity: "Lecture".to_string(),
            section: "01".to_string(),
            staff: "Dr. Ada".to_string(),
            building: "TBD".to_string(),
            room: "TBD".to_string(),
            schedule: vec![Slot::new(Day::Mon, "P1"), Slot::new(Day::Wed, "P2")],
        };
        let line = table_line(&course);
        assert!(line.starts_with("CS 101"));
        assert!(line.contains("TBD/TBD"));
        assert!(line.contains("[Mon P1, Wed P2]"));
        assert!(line.ends_with("Dr. Ada"));
    }
}
