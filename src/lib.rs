//! Plain-text extraction from PDF files
//!
//! Every page of a document is extracted in order and the results are joined
//! into a single UTF-8 string, each page followed by a blank line.

mod document;
mod error;
mod extract;
mod lopdf_backend;
#[cfg(test)]
mod testutil;

// Re-export error type
pub use error::ExtractError;

// Re-export extraction API
pub use extract::{
    ExtractSummary, PAGE_SEPARATOR, PdfExtractor, PdfExtractorBuilder, extract_document,
    extract_to_file, from_bytes, from_path, from_reader,
};

// Re-export document model
pub use document::{Document, Page, Pages};
pub use lopdf_backend::LopdfDocument;
