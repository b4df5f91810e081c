//! Document text extraction for resume uploads.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported document type: {0}")]
    UnsupportedType(String),

    #[error("PDF parsing failed: {0}")]
    Pdf(String),

    #[error("document is not valid UTF-8 text")]
    InvalidText,

    #[error("document contains no extractable text (scanned or image-only?)")]
    NoText,

    #[error("document parsing timed out after {0:?}")]
    Timeout(Duration),
}

/// Turns an uploaded document into flat text. Structure is not interpreted.
#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    async fn extract_text(
        &self,
        bytes: Bytes,
        content_type: Option<&str>,
    ) -> Result<String, ExtractError>;
}

/// Extracts PDFs with `pdf-extract` and passes plain text through.
pub struct PdfTextExtractor {
    timeout: Duration,
}

impl PdfTextExtractor {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl DocumentExtractor for PdfTextExtractor {
    async fn extract_text(
        &self,
        bytes: Bytes,
        content_type: Option<&str>,
    ) -> Result<String, ExtractError> {
        let text = match detect_kind(&bytes, content_type)? {
            DocumentKind::Pdf => {
                // CPU-bound; a panic inside the parser surfaces as a JoinError.
                let parse = tokio::task::spawn_blocking(move || {
                    pdf_extract::extract_text_from_mem(&bytes)
                });
                match tokio::time::timeout(self.timeout, parse).await {
                    Err(_) => return Err(ExtractError::Timeout(self.timeout)),
                    Ok(Err(join_err)) => return Err(ExtractError::Pdf(join_err.to_string())),
                    Ok(Ok(Err(pdf_err))) => return Err(ExtractError::Pdf(format!("{pdf_err:?}"))),
                    Ok(Ok(Ok(text))) => text,
                }
            }
            DocumentKind::PlainText => {
                String::from_utf8(bytes.to_vec()).map_err(|_| ExtractError::InvalidText)?
            }
        };

        if text.trim().is_empty() {
            return Err(ExtractError::NoText);
        }
        debug!("Extracted {} characters of resume text", text.len());
        Ok(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentKind {
    Pdf,
    PlainText,
}

/// Uses the declared content type when present, otherwise sniffs the PDF magic bytes.
fn detect_kind(bytes: &[u8], content_type: Option<&str>) -> Result<DocumentKind, ExtractError> {
    let essence = content_type
        .and_then(|ct| ct.split(';').next())
        .map(|ct| ct.trim().to_ascii_lowercase());

    match essence.as_deref() {
        Some("application/pdf") => Ok(DocumentKind::Pdf),
        Some("text/plain") => Ok(DocumentKind::PlainText),
        Some("application/octet-stream") | None => {
            if bytes.starts_with(b"%PDF") {
                Ok(DocumentKind::Pdf)
            } else {
                Ok(DocumentKind::PlainText)
            }
        }
        Some(other) => Err(ExtractError::UnsupportedType(other.to_string())),
    }
}
