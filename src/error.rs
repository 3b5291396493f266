use std::fmt::Formatter;

#[derive(Debug)]
pub enum ExtractError {
    IoError(std::io::Error),
    PdfError(lopdf::Error),
    /// Text extraction failed on a page (1-based page number).
    PageError {
        page: u32,
        source: lopdf::Error,
    },
    PageOutOfRange {
        index: usize,
        count: usize,
    },
    /// The document is encrypted and the empty password does not open it.
    PasswordRequired,
    IncorrectPassword,
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            ExtractError::IoError(e) => write!(f, "IO error: {}", e),
            ExtractError::PdfError(e) => write!(f, "PDF error: {}", e),
            ExtractError::PageError { page, source } => {
                write!(f, "PDF error on page {}: {}", page, source)
            }
            ExtractError::PageOutOfRange { index, count } => write!(
                f,
                "page index {} out of range for document with {} pages",
                index, count
            ),
            ExtractError::PasswordRequired => {
                write!(f, "document is encrypted, a password is required")
            }
            ExtractError::IncorrectPassword => write!(f, "incorrect password"),
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractError::IoError(e) => Some(e),
            ExtractError::PdfError(e) => Some(e),
            ExtractError::PageError { source, .. } => Some(source),
            ExtractError::PageOutOfRange { .. }
            | ExtractError::PasswordRequired
            | ExtractError::IncorrectPassword => None,
        }
    }
}

impl From<std::io::Error> for ExtractError {
    fn from(e: std::io::Error) -> Self {
        ExtractError::IoError(e)
    }
}

impl From<lopdf::Error> for ExtractError {
    fn from(e: lopdf::Error) -> Self {
        ExtractError::PdfError(e)
    }
}
