use thiserror::Error;

/// Errors raised while reading tables or exporting records.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("Table extraction failed on page {page}: {message}")]
    Extraction { page: usize, message: String },

    #[error("Page index out of bounds: {index} (document has {count} pages)")]
    PageOutOfBounds { index: usize, count: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Why a row after the header did not become a course record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowRejection {
    #[error("row has {actual} cells, at least {required} required")]
    TooFewCells { actual: usize, required: usize },

    #[error("course code cell is blank")]
    BlankCourseCode,

    #[error("aggregate total row")]
    TotalRow,

    #[error("mandatory field '{0}' is blank")]
    MissingField(&'static str),
}
