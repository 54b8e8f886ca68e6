//! JSON export and import of course records.
//!
//! Files hold a pretty-printed array of records. Text is written as UTF-8
//! without escaping non-ASCII characters.

use crate::error::Result;
use crate::record::CourseRecord;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Save records to a JSON file.
///
/// # Example
/// ```no_run
/// use timetable_parser::{write_json, CourseRecord};
///
/// let courses: Vec<CourseRecord> = Vec::new();
/// write_json("schedule_output.json", &courses).unwrap();
/// ```
pub fn write_json<P: AsRef<Path>>(path: P, courses: &[CourseRecord]) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, courses)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    tracing::info!(
        "Successfully saved {} courses to {}",
        courses.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Load records previously saved with [`write_json`].
pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Vec<CourseRecord>> {
    let file = File::open(path.as_ref())?;
    let courses = serde_json::from_reader(BufReader::new(file))?;
    Ok(courses)
}

/// Serialize records to a JSON array string.
pub fn to_json_string(courses: &[CourseRecord], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(courses)?
    } else {
        serde_json::to_string(courses)?
    };
    Ok(json)
}
