//! PDF text extraction.

use std::path::Path;

use tracing::debug;

use crate::errors::AppError;

/// Reads a PDF and concatenates per-page text, pages joined by newline in
/// page order. An unreadable or unparseable document is fatal; page-level
/// glitches are left to the extractor's own recovery.
pub fn read_pdf_text(path: &Path) -> Result<String, AppError> {
    let bytes = std::fs::read(path)
        .map_err(|e| AppError::Pdf(format!("failed to read '{}': {e}", path.display())))?;

    let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes).map_err(|e| {
        AppError::Pdf(format!(
            "failed to extract text from '{}': {e}",
            path.display()
        ))
    })?;

    debug!("extracted {} pages from {}", pages.len(), path.display());

    Ok(pages.join("\n"))
}
