use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::document::Document;
use crate::error::ExtractError;
use crate::lopdf_backend::LopdfDocument;

/// Appended after every page's text, including the last.
pub const PAGE_SEPARATOR: &str = "\n\n";

/// Concatenate the text of every page of `doc` in order, each followed by
/// [`PAGE_SEPARATOR`]. The first page that fails aborts the whole extraction.
pub fn extract_document<D: Document>(doc: &D) -> Result<String, ExtractError> {
    let mut text = String::new();
    for page in doc.pages() {
        let page_text = page.extract_text()?;
        debug!(page = page.number(), len = page_text.len(), "page done");
        text.push_str(&page_text);
        text.push_str(PAGE_SEPARATOR);
    }
    Ok(text)
}

/// What a successful [`PdfExtractor::extract_to_file`] produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractSummary {
    pub pages: usize,
    pub bytes_written: usize,
}

/// Builder for configuring PDF extraction options.
///
/// # Examples
///
/// ```no_run
/// use pdf_text_extract::PdfExtractor;
///
/// // With password
/// let text = PdfExtractor::builder()
///     .password("secret")
///     .build()
///     .from_path("encrypted.pdf")?;
/// # Ok::<(), pdf_text_extract::ExtractError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PdfExtractorBuilder {
    password: Option<String>,
}

impl PdfExtractorBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the password for encrypted PDFs.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Build the extractor configuration.
    pub fn build(self) -> PdfExtractor {
        PdfExtractor {
            password: self.password,
        }
    }
}

/// Extracts page text from PDFs.
///
/// # Examples
///
/// ```no_run
/// use pdf_text_extract::PdfExtractor;
///
/// let summary = PdfExtractor::default().extract_to_file("in.pdf", "out.txt")?;
/// println!("{} pages", summary.pages);
/// # Ok::<(), pdf_text_extract::ExtractError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PdfExtractor {
    password: Option<String>,
}

impl PdfExtractor {
    /// Create a builder for configuring extraction options.
    pub fn builder() -> PdfExtractorBuilder {
        PdfExtractorBuilder::new()
    }

    /// Extract text from a PDF file at the given path.
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<String, ExtractError> {
        let doc = LopdfDocument::load(path, self.password.as_deref())?;
        extract_document(&doc)
    }

    /// Extract text from a PDF in memory.
    pub fn from_bytes(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let doc = LopdfDocument::load_mem(bytes, self.password.as_deref())?;
        extract_document(&doc)
    }

    /// Extract text from a PDF reader.
    pub fn from_reader<R: Read>(&self, reader: R) -> Result<String, ExtractError> {
        let doc = LopdfDocument::from_reader(reader, self.password.as_deref())?;
        extract_document(&doc)
    }

    /// Extract the text of `source` and write it to `destination` as UTF-8,
    /// creating or truncating it.
    ///
    /// The destination is only opened once every page has been extracted, so
    /// a failure before the write leaves it untouched.
    pub fn extract_to_file<S, D>(
        &self,
        source: S,
        destination: D,
    ) -> Result<ExtractSummary, ExtractError>
    where
        S: AsRef<Path>,
        D: AsRef<Path>,
    {
        let (source, destination) = (source.as_ref(), destination.as_ref());
        let bytes = fs::read(source)?;
        let doc = LopdfDocument::load_mem(&bytes, self.password.as_deref())?;
        let text = extract_document(&doc)?;

        fs::write(destination, &text)?;
        info!(
            source = %source.display(),
            destination = %destination.display(),
            pages = doc.page_count(),
            bytes = text.len(),
            "wrote extracted text"
        );

        Ok(ExtractSummary {
            pages: doc.page_count(),
            bytes_written: text.len(),
        })
    }
}

/// Extract text from a PDF file at the given path using default settings.
///
/// This is a convenience function equivalent to `PdfExtractor::default().from_path(path)`.
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<String, ExtractError> {
    PdfExtractor::default().from_path(path)
}

/// Extract text from a PDF in memory using default settings.
///
/// This is a convenience function equivalent to `PdfExtractor::default().from_bytes(bytes)`.
pub fn from_bytes(bytes: &[u8]) -> Result<String, ExtractError> {
    PdfExtractor::default().from_bytes(bytes)
}

/// Extract text from a PDF reader using default settings.
///
/// This is a convenience function equivalent to `PdfExtractor::default().from_reader(reader)`.
pub fn from_reader<R: Read>(reader: R) -> Result<String, ExtractError> {
    PdfExtractor::default().from_reader(reader)
}

/// Write the text of `source` to `destination` using default settings.
///
/// # Examples
///
/// ```no_run
/// pdf_text_extract::extract_to_file("report.pdf", "report.txt")?;
/// # Ok::<(), pdf_text_extract::ExtractError>(())
/// ```
pub fn extract_to_file<S: AsRef<Path>, D: AsRef<Path>>(
    source: S,
    destination: D,
) -> Result<ExtractSummary, ExtractError> {
    PdfExtractor::default().extract_to_file(source, destination)
}
