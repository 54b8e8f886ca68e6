//! Table and document orchestration.

use crate::header::locate_header;
use crate::record::CourseRecord;
use crate::row::parse_row;
use crate::schema::ParserOptions;
use crate::source::{RawRow, TableSource};

/// Extracts course records from timetable tables.
///
/// A parser holds only immutable configuration; build one per document when
/// documents are processed concurrently.
#[derive(Debug, Clone, Default)]
pub struct ScheduleParser {
    options: ParserOptions,
}

impl ScheduleParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Records from the rows below the detected header of one table.
    ///
    /// A table without a recognisable header yields nothing.
    pub fn parse_table(&self, table: &[RawRow]) -> Vec<CourseRecord> {
        let Some(header) = locate_header(table, &self.options) else {
            tracing::info!("Could not find table header with 'Course Code'");
            return Vec::new();
        };

        table
            .iter()
            .enumerate()
            .skip(header.data_start())
            .filter_map(|(index, row)| match parse_row(row, &self.options.schema) {
                Ok(record) => Some(record),
                Err(reason) => {
                    tracing::debug!(row = index, %reason, "skipping row");
                    None
                }
            })
            .collect()
    }

    /// Records from every table of every page, in page then table order.
    ///
    /// Pages the source fails to extract are logged and skipped.
    pub fn parse_source<S: TableSource + ?Sized>(&self, source: &S) -> Vec<CourseRecord> {
        let mut courses = Vec::new();

        for page in 0..source.page_count() {
            tracing::info!("Processing page {}", page + 1);

            let tables = match source.page_tables(page) {
                Ok(tables) => tables,
                Err(e) => {
                    tracing::warn!("Skipping page {}: {}", page + 1, e);
                    continue;
                }
            };

            for (table_num, table) in tables.iter().enumerate() {
                if table.is_empty() {
                    continue;
                }
                let found = self.parse_table(table);
                tracing::debug!(
                    "Found {} courses in table {} on page {}",
                    found.len(),
                    table_num + 1,
                    page + 1
                );
                courses.extend(found);
            }
        }

        tracing::info!("Total courses extracted: {}", courses.len());
        courses
    }
}
