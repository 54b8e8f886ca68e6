//! # timetable-parser
//!
//! Turns the raw tables of a university timetable into course records.
//!
//! Tables arrive as rows of optional text cells with no schema beyond cell
//! position. The parser finds the header row, validates and normalizes each
//! data row against a fixed [`ColumnSchema`], and rebuilds the weekly
//! schedule from the per-day period columns.
//!
//! # Example
//!
//! ```
//! use timetable_parser::{raw_row, Day, MemorySource, ScheduleParser};
//!
//! let table = vec![
//!     raw_row(&["Course Code", "Course Name"]),
//!     raw_row(&[
//!         "CS 101", "Intro to Programming", "3", "3", "01", "", "Lecture",
//!         "", "P1, P2", "", "", "", "Bldg 7", "104", "Dr. Ada",
//!     ]),
//! ];
//! let source = MemorySource::new(vec![vec![table]]);
//!
//! let courses = ScheduleParser::new().parse_source(&source);
//! assert_eq!(courses.len(), 1);
//! assert_eq!(courses[0].schedule[1].day, Day::Mon);
//! assert_eq!(courses[0].schedule[1].period, "P2");
//! ```

mod document;
pub mod error;
mod export;
pub mod header;
mod normalize;
mod record;
mod row;
mod schedule;
mod schema;
mod source;

pub use document::ScheduleParser;
pub use error::{Result, RowRejection, ScheduleError};
pub use export::{read_json, to_json_string, write_json};
pub use header::{locate_header, HeaderMatch};
pub use normalize::clean_text;
pub use record::{CourseRecord, Slot};
pub use row::parse_row;
pub use schedule::{reconstruct_schedule, split_periods};
pub use schema::{ColumnSchema, Day, ParserOptions};
pub use source::{raw_row, MemorySource, RawRow, RawTable, TableSource};
