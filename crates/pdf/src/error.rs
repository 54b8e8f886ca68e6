use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("PDF file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse PDF: {0}")]
    ParseError(String),

    #[error("No courses found in the PDF")]
    NoCoursesFound,

    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PdfError>;
