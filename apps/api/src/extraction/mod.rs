//! Document text extraction for uploaded resumes and job descriptions.
//!
//! The kind of document is decided by file extension: `.pdf`, `.docx`, and everything
//! else is decoded as UTF-8 text.

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

pub mod docx;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Could not read PDF '{file_name}': {message}")]
    Pdf { file_name: String, message: String },

    #[error("Could not read DOCX '{file_name}': {message}")]
    Docx { file_name: String, message: String },

    #[error("'{file_name}' is not valid UTF-8 text")]
    Utf8 {
        file_name: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentKind {
    pub fn from_file_name(file_name: &str) -> Self {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("pdf") => DocumentKind::Pdf,
            Some("docx") => DocumentKind::Docx,
            _ => DocumentKind::PlainText,
        }
    }
}

/// Extracts the text of an uploaded document.
///
/// CPU-bound for PDFs and DOCX files; async callers should run it on the blocking pool.
pub fn extract_text(file_name: &str, bytes: Vec<u8>) -> Result<String, ExtractionError> {
    match DocumentKind::from_file_name(file_name) {
        DocumentKind::Pdf => {
            pdf_extract::extract_text_from_mem(&bytes).map_err(|e| ExtractionError::Pdf {
                file_name: file_name.to_string(),
                message: e.to_string(),
            })
        }
        DocumentKind::Docx => docx::extract_text(&bytes).map_err(|e| ExtractionError::Docx {
            file_name: file_name.to_string(),
            message: e.to_string(),
        }),
        DocumentKind::PlainText => {
            String::from_utf8(bytes).map_err(|source| ExtractionError::Utf8 {
                file_name: file_name.to_string(),
                source,
            })
        }
    }
}
