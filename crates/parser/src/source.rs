//! The boundary with whatever turns a document into raw tables.

use crate::error::{Result, ScheduleError};

/// A row of positional cells; `None` marks an absent cell.
pub type RawRow = Vec<Option<String>>;

/// Rows of one table in extraction order.
pub type RawTable = Vec<RawRow>;

/// Build a raw row from cell text, treating empty strings as absent cells.
pub fn raw_row<S: AsRef<str>>(cells: &[S]) -> RawRow {
    cells
        .iter()
        .map(|cell| {
            let cell = cell.as_ref();
            if cell.is_empty() {
                None
            } else {
                Some(cell.to_string())
            }
        })
        .collect()
}

/// A paged document that yields raw tables one page at a time.
pub trait TableSource {
    /// Number of pages available.
    fn page_count(&self) -> usize;

    /// Tables found on the page at zero-based `index`, in extraction order.
    fn page_tables(&self, index: usize) -> Result<Vec<RawTable>>;
}

/// Tables held in memory, page by page. A page may also hold an extraction
/// failure that is reported when the page is requested.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    pages: Vec<std::result::Result<Vec<RawTable>, String>>,
}

impl MemorySource {
    pub fn new(pages: Vec<Vec<RawTable>>) -> Self {
        Self {
            pages: pages.into_iter().map(Ok).collect(),
        }
    }

    pub fn push_page(&mut self, tables: Vec<RawTable>) {
        self.pages.push(Ok(tables));
    }

    pub fn push_failed_page(&mut self, message: impl Into<String>) {
        self.pages.push(Err(message.into()));
    }
}

impl TableSource for MemorySource {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_tables(&self, index: usize) -> Result<Vec<RawTable>> {
        match self.pages.get(index) {
            Some(Ok(tables)) => Ok(tables.clone()),
            Some(Err(message)) => Err(ScheduleError::Extraction {
                page: index + 1,
                message: message.clone(),
            }),
            None => Err(ScheduleError::PageOutOfBounds {
                index,
                count: self.pages.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_row_marks_empty_cells_absent() {
        let row = raw_row(&["CS 101", "", " "]);
        assert_eq!(
            row,
            vec![Some("CS 101".to_string()), None, Some(" ".to_string())]
        );
    }

    #[test]
    fn test_memory_source_pages() {
        let mut source = MemorySource::new(vec![vec![vec![raw_row(&["a"])]]]);
        source.push_failed_page("broken content stream");
        source.push_page(Vec::new());

        assert_eq!(source.page_count(), 3);
        assert_eq!(source.page_tables(0).unwrap().len(), 1);
        assert!(matches!(
            source.page_tables(1),
            Err(ScheduleError::Extraction { page: 2, .. })
        ));
        assert!(source.page_tables(2).unwrap().is_empty());
        assert!(matches!(
            source.page_tables(3),
            Err(ScheduleError::PageOutOfBounds { index: 3, count: 3 })
        ));
    }
}
