//! PDF text extraction for uploaded résumés.
//!
//! Pages are concatenated with no boundary marker. Extraction runs on the blocking pool;
//! a panic inside the PDF parser is reported as an error for that file.

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("could not read '{filename}': {message}")]
    Unreadable { filename: String, message: String },

    #[error("PDF parser crashed on '{filename}'")]
    Crashed { filename: String },
}

pub async fn extract_text(filename: &str, bytes: bytes::Bytes) -> Result<String, PdfError> {
    let pages = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem_by_pages(&bytes)
    })
    .await
    .map_err(|_| PdfError::Crashed {
        filename: filename.to_string(),
    })?
    .map_err(|e| PdfError::Unreadable {
        filename: filename.to_string(),
        message: e.to_string(),
    })?;

    debug!("Extracted {} page(s) from {}", pages.len(), filename);
    Ok(pages.concat())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_garbage_bytes_are_rejected() {
        let result = extract_text(
            "not-a-pdf.pdf",
            bytes::Bytes::from_static(b"this is plainly not a PDF document"),
        )
        .await;
        let err = result.unwrap_err();
        assert!(err.to_string().contains("not-a-pdf.pdf"));
    }
}
