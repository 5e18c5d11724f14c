//! PDF résumé ingestion. Text extraction is CPU-bound, so callers on the
//! async runtime go through `extract_text_blocking`.

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

use crate::errors::AppError;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("could not read PDF: {0}")]
    Extraction(String),

    #[error("PDF contains no extractable text")]
    NoText,

    #[error("PDF extraction task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl From<PdfError> for AppError {
    fn from(e: PdfError) -> Self {
        match e {
            PdfError::Join(join) => AppError::Internal(join.into()),
            other => AppError::UnprocessableEntity(other.to_string()),
        }
    }
}

/// Extracts the text layer of an in-memory PDF.
pub fn extract_text(data: &[u8]) -> Result<String, PdfError> {
    let text = pdf_extract::extract_text_from_mem(data)
        .map_err(|e| PdfError::Extraction(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(PdfError::NoText);
    }
    debug!(bytes = data.len(), chars = text.len(), "Extracted PDF text");
    Ok(text)
}

/// Runs `extract_text` on the blocking pool so the scheduler stays free.
pub async fn extract_text_blocking(data: Bytes) -> Result<String, PdfError> {
    tokio::task::spawn_blocking(move || extract_text(&data)).await?
}

/// Builds a one-page PDF with one Helvetica text line per entry of `lines`.
/// An empty slice yields a page with an empty content stream.
#[cfg(test)]
pub(crate) fn single_page_pdf(lines: &[&str]) -> Vec<u8> {
    let mut content = String::new();
    if !lines.is_empty() {
        content.push_str("BT /F1 12 Tf 72 720 Td\n");
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                content.push_str("0 -14 Td\n");
            }
            content.push_str(&format!("({line}) Tj\n"));
        }
        content.push_str("ET\n");
    }

    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
         /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>"
            .to_string(),
        format!("<< /Length {} >>\nstream\n{content}endstream", content.len()),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
    ];

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }

    let xref_start = pdf.len();
    pdf.extend_from_slice(
        format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1).as_bytes(),
    );
    for offset in offsets {
        pdf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }
    pdf.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_start}\n%%EOF\n",
            objects.len() + 1
        )
        .as_bytes(),
    );
    pdf
}
