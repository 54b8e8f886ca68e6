use crate::detector::TableDetector;
use crate::error::{PdfError, Result};
use lopdf::Document;
use std::path::Path;
use timetable_parser::{RawTable, ScheduleError, TableSource};

#[derive(Debug, Clone)]
pub struct PdfOptions {
    /// Inclusive, one-based page range; `None` reads every page.
    pub page_range: Option<(usize, usize)>,
    pub min_table_rows: usize,
    pub min_table_cols: usize,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            page_range: None,
            min_table_rows: 2,
            min_table_cols: 2,
        }
    }
}

/// A loaded PDF that yields raw tables page by page.
pub struct PdfTableSource {
    document: Document,
    pages: Vec<u32>,
    detector: TableDetector,
}

impl PdfTableSource {
    /// Load a PDF from disk.
    pub fn open<P: AsRef<Path>>(path: P, options: &PdfOptions) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PdfError::NotFound(path.display().to_string()));
        }
        let document = Document::load(path)
            .map_err(|e| PdfError::ParseError(format!("Failed to load PDF: {}", e)))?;
        Self::from_document(document, options)
    }

    /// Load a PDF held in memory.
    pub fn from_bytes(bytes: &[u8], options: &PdfOptions) -> Result<Self> {
        let document = Document::load_mem(bytes)
            .map_err(|e| PdfError::ParseError(format!("Failed to load PDF: {}", e)))?;
        Self::from_document(document, options)
    }

    fn from_document(document: Document, options: &PdfOptions) -> Result<Self> {
        let all_pages: Vec<u32> = document.get_pages().keys().copied().collect();
        let (start, end) = resolve_page_range(options.page_range, all_pages.len())?;
        let pages = all_pages
            .into_iter()
            .skip(start - 1)
            .take(end + 1 - start)
            .collect();

        Ok(Self {
            document,
            pages,
            detector: TableDetector::new(options.min_table_rows, options.min_table_cols),
        })
    }
}

impl TableSource for PdfTableSource {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_tables(&self, index: usize) -> timetable_parser::Result<Vec<RawTable>> {
        let page_number = *self
            .pages
            .get(index)
            .ok_or(ScheduleError::PageOutOfBounds {
                index,
                count: self.pages.len(),
            })?;

        let text = self
            .document
            .extract_text(&[page_number])
            .map_err(|e| ScheduleError::Extraction {
                page: page_number as usize,
                message: e.to_string(),
            })?;

        let tables: Vec<RawTable> = self
            .detector
            .detect_tables(&text)
            .into_iter()
            .map(|region| region.rows)
            .collect();
        tracing::debug!("Detected {} tables on page {}", tables.len(), page_number);
        Ok(tables)
    }
}

/// Clamp a requested one-based page range to the document length.
///
/// An empty document yields the empty range `(1, 0)`.
fn resolve_page_range(range: Option<(usize, usize)>, page_count: usize) -> Result<(usize, usize)> {
    let Some((s, e)) = range else {
        return Ok((1, page_count));
    };

    if s > e {
        return Err(PdfError::InvalidPageRange(format!(
            "Start page {} is greater than end page {}",
            s, e
        )));
    }
    if s < 1 {
        return Err(PdfError::InvalidPageRange(
            "Page numbers must be >= 1".to_string(),
        ));
    }
    let clamped_end = e.min(page_count);
    if s > clamped_end {
        return Err(PdfError::InvalidPageRange(format!(
            "Start page {} exceeds document length of {} pages",
            s, page_count
        )));
    }
    Ok((s, clamped_end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_range_by_default() {
        assert_eq!(resolve_page_range(None, 4).unwrap(), (1, 4));
        assert_eq!(resolve_page_range(None, 0).unwrap(), (1, 0));
    }

    #[test]
    fn test_range_is_clamped() {
        assert_eq!(resolve_page_range(Some((2, 10)), 4).unwrap(), (2, 4));
    }

    #[test]
    fn test_invalid_ranges() {
        assert!(matches!(
            resolve_page_range(Some((3, 2)), 4),
            Err(PdfError::InvalidPageRange(_))
        ));
        assert!(matches!(
            resolve_page_range(Some((0, 2)), 4),
            Err(PdfError::InvalidPageRange(_))
        ));
        assert!(matches!(
            resolve_page_range(Some((5, 6)), 4),
            Err(PdfError::InvalidPageRange(_))
        ));
    }

    #[test]
    fn test_garbage_bytes_fail_to_load() {
        let result = PdfTableSource::from_bytes(b"not a pdf", &PdfOptions::default());
        assert!(matches!(result, Err(PdfError::ParseError(_))));
    }
}
