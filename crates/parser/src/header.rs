//! Header row detection.
//!
//! Timetable exports disagree on where the column labels sit, so the header
//! is located by a fixed list of detectors tried in order. Each detector is a
//! plain function of the table and can be tested on its own.

use crate::normalize::{cell_text, clean_text};
use crate::schema::ParserOptions;
use crate::source::RawRow;

const HEADER_LABEL: &str = "Course Code";
const SECTION_LABEL: &str = "Sec";

/// Where the header sits and how many extra label rows follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderMatch {
    pub index: usize,
    pub extra_rows: usize,
}

impl HeaderMatch {
    fn single(index: usize) -> Self {
        Self {
            index,
            extra_rows: 0,
        }
    }

    /// Index of the first row that may hold data.
    #[must_use]
    pub fn data_start(&self) -> usize {
        self.index + 1 + self.extra_rows
    }
}

pub type Detector = fn(&[RawRow], &ParserOptions) -> Option<HeaderMatch>;

/// Detectors in the order they are tried.
///
/// The split-header check only ever accepts the row the exact-match check
/// would return, so trying it first changes nothing except skipping the
/// second label row.
pub const DETECTORS: [(&str, Detector); 3] = [
    ("split", split_header),
    ("exact", exact_header),
    ("lenient", lenient_header),
];

fn first_cell(row: &RawRow) -> String {
    clean_text(row.first().and_then(|cell| cell.as_deref()))
}

/// First row whose first cell reads exactly "Course Code".
pub fn exact_header(table: &[RawRow], _options: &ParserOptions) -> Option<HeaderMatch> {
    table
        .iter()
        .position(|row| first_cell(row) == HEADER_LABEL)
        .map(HeaderMatch::single)
}

/// A "Course Code" row whose labels continue on the next row, recognised by
/// "Sec" in the section column of that next row.
pub fn split_header(table: &[RawRow], options: &ParserOptions) -> Option<HeaderMatch> {
    let index = table
        .iter()
        .position(|row| first_cell(row) == HEADER_LABEL)?;
    let next = table.get(index + 1)?;
    if next.len() > options.schema.section
        && cell_text(next, options.schema.section) == SECTION_LABEL
    {
        Some(HeaderMatch {
            index,
            extra_rows: 1,
        })
    } else {
        None
    }
}

/// Last resort: an exact header row, or a row opening with a known course
/// prefix right below a "Course Code" row, in which case the row above is
/// the header.
pub fn lenient_header(table: &[RawRow], options: &ParserOptions) -> Option<HeaderMatch> {
    for (index, row) in table.iter().enumerate() {
        let first = first_cell(row);
        if first == HEADER_LABEL {
            return Some(HeaderMatch::single(index));
        }
        let looks_like_course = options
            .course_prefixes
            .iter()
            .any(|prefix| first.starts_with(prefix.as_str()));
        if looks_like_course && index > 0 && first_cell(&table[index - 1]) == HEADER_LABEL {
            return Some(HeaderMatch::single(index - 1));
        }
    }
    None
}

/// Run the detectors in order and return the first match.
pub fn locate_header(table: &[RawRow], options: &ParserOptions) -> Option<HeaderMatch> {
    DETECTORS.iter().find_map(|(name, detect)| {
        let found = detect(table, options);
        if let Some(header) = found {
            tracing::trace!(detector = *name, row = header.index, "header located");
        }
        found
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::raw_row;

    fn header() -> RawRow {
        raw_row(&["Course Code", "Course Name", "Cr", "Ct"])
    }

    fn sub_header() -> RawRow {
        raw_row(&["", "", "", "", "Sec", "", "Activity"])
    }

    #[test]
    fn test_exact_header() {
        let table = vec![raw_row(&["Semester 1"]), header(), raw_row(&["CS 101"])];
        let found = locate_header(&table, &ParserOptions::default()).unwrap();
        assert_eq!(found, HeaderMatch::single(1));
        assert_eq!(found.data_start(), 2);
    }

    #[test]
    fn test_header_cell_is_normalized() {
        let table = vec![raw_row(&[" Course\nCode "])];
        assert_eq!(
            exact_header(&table, &ParserOptions::default()),
            Some(HeaderMatch::single(0))
        );
    }

    #[test]
    fn test_split_header_skips_second_label_row() {
        let table = vec![header(), sub_header(), raw_row(&["CS 101"])];
        let found = locate_header(&table, &ParserOptions::default()).unwrap();
        assert_eq!(found.index, 0);
        assert_eq!(found.extra_rows, 1);
        assert_eq!(found.data_start(), 2);
    }

    #[test]
    fn test_split_header_needs_section_label() {
        let table = vec![header(), raw_row(&["CS 101", "Intro", "3", "3", "1"])];
        assert_eq!(split_header(&table, &ParserOptions::default()), None);
        assert_eq!(
            locate_header(&table, &ParserOptions::default()),
            Some(HeaderMatch::single(0))
        );
    }

    #[test]
    fn test_split_header_short_next_row() {
        let table = vec![header(), raw_row(&["", "Sec"])];
        assert_eq!(split_header(&table, &ParserOptions::default()), None);
    }

    #[test]
    fn test_lenient_accepts_exact_header() {
        let table = vec![raw_row(&["Notes"]), header(), raw_row(&["CS 210"])];
        assert_eq!(
            lenient_header(&table, &ParserOptions::default()),
            Some(HeaderMatch::single(1))
        );
    }

    #[test]
    fn test_lenient_uses_configured_prefixes() {
        let options = ParserOptions::default().with_course_prefixes(["EE "]);
        let table = vec![raw_row(&["EE 200"]), raw_row(&["CS 101"])];
        assert_eq!(lenient_header(&table, &options), None);

        let table = vec![raw_row(&["Dept"]), raw_row(&["EE 200"])];
        assert_eq!(lenient_header(&table, &options), None);
    }

    #[test]
    fn test_no_header() {
        let table = vec![raw_row(&["Name", "Qty"]), raw_row(&["CS 101", "3"])];
        assert_eq!(locate_header(&table, &ParserOptions::default()), None);
        assert_eq!(locate_header(&[], &ParserOptions::default()), None);
    }
}
