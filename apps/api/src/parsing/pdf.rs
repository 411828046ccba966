use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, warn};

use super::sections::parse_resume_text;
use crate::models::ResumeDocument;

const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("not a PDF document")]
    NotPdf,

    #[error("failed to extract text from PDF: {0}")]
    Extraction(String),

    #[error("PDF contains no extractable text")]
    Empty,

    #[error("PDF extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Blocking: pdf-extract parses the whole document in memory.
pub fn extract_pdf_text(data: &[u8]) -> Result<String, PdfError> {
    if !data.starts_with(PDF_MAGIC) {
        return Err(PdfError::NotPdf);
    }
    let text = pdf_extract::extract_text_from_mem(data).map_err(|e| {
        warn!(error = %e, "pdf text extraction failed");
        PdfError::Extraction(e.to_string())
    })?;
    if text.trim().is_empty() {
        return Err(PdfError::Empty);
    }
    debug!(chars = text.len(), "extracted pdf text");
    Ok(text)
}

/// Extracts text on the blocking pool and parses it into a resume.
pub async fn parse_pdf_resume(data: Bytes) -> Result<ResumeDocument, PdfError> {
    let text = tokio::task::spawn_blocking(move || extract_pdf_text(&data)).await??;
    Ok(parse_resume_text(&text))
}
