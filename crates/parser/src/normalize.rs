//! Cell text normalization.

/// Collapse every whitespace run (newlines included) to a single space and
/// trim both ends. Absent cells normalize to the empty string.
pub fn clean_text(text: Option<&str>) -> String {
    match text {
        Some(text) => text.split_whitespace().collect::<Vec<_>>().join(" "),
        None => String::new(),
    }
}

/// Normalized text of the cell at `index`, or empty when the cell is absent
/// or past the end of the row.
pub(crate) fn cell_text(row: &[Option<String>], index: usize) -> String {
    clean_text(row.get(index).and_then(|cell| cell.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_mixed_whitespace() {
        assert_eq!(clean_text(Some("  A\n\tB  ")), "A B");
        assert_eq!(clean_text(Some("Data\r\nStructures   II")), "Data Structures II");
    }

    #[test]
    fn test_absent_and_blank() {
        assert_eq!(clean_text(None), "");
        assert_eq!(clean_text(Some("")), "");
        assert_eq!(clean_text(Some(" \n\t ")), "");
    }

    #[test]
    fn test_idempotent() {
        let once = clean_text(Some("  Intro to\n  Programming "));
        assert_eq!(clean_text(Some(&once)), once);
    }

    #[test]
    fn test_cell_text_out_of_range() {
        let row = vec![Some("CS 101".to_string()), None];
        assert_eq!(cell_text(&row, 0), "CS 101");
        assert_eq!(cell_text(&row, 1), "");
        assert_eq!(cell_text(&row, 7), "");
    }
}
