pub mod detector;
pub mod error;
pub mod extractor;

use error::Result;
use std::path::Path;
use timetable_parser::{CourseRecord, ScheduleParser};

/// Extract course records from a timetable PDF using default options.
///
/// Fails when the document cannot be opened, and with
/// [`PdfError::NoCoursesFound`] when it opens but yields no records.
pub fn extract_courses<P: AsRef<Path>>(path: P) -> Result<Vec<CourseRecord>> {
    extract_courses_with(path, &ScheduleParser::new(), &PdfOptions::default())
}

/// Extract course records from a timetable PDF with a configured parser.
pub fn extract_courses_with<P: AsRef<Path>>(
    path: P,
    parser: &ScheduleParser,
    options: &PdfOptions,
) -> Result<Vec<CourseRecord>> {
    let source = PdfTableSource::open(path, options)?;
    non_empty(parser.parse_source(&source))
}

/// Extract course records from PDF bytes, e.g. an uploaded file.
pub fn extract_courses_from_bytes(
    bytes: &[u8],
    parser: &ScheduleParser,
    options: &PdfOptions,
) -> Result<Vec<CourseRecord>> {
    let source = PdfTableSource::from_bytes(bytes, options)?;
    non_empty(parser.parse_source(&source))
}

/// Extract course records, returning an empty list on any failure.
pub fn parse_pdf<P: AsRef<Path>>(path: P) -> Vec<CourseRecord> {
    let path = path.as_ref();
    match extract_courses(path) {
        Ok(courses) => courses,
        Err(PdfError::NoCoursesFound) => Vec::new(),
        Err(e) => {
            tracing::error!("Error processing PDF {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

fn non_empty(courses: Vec<CourseRecord>) -> Result<Vec<CourseRecord>> {
    if courses.is_empty() {
        Err(PdfError::NoCoursesFound)
    } else {
        Ok(courses)
    }
}

// Re-export commonly used types
pub use error::PdfError;
pub use extractor::{PdfOptions, PdfTableSource};
