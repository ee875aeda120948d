use std::path::{Path, PathBuf};
use tracing::debug;

use super::DocumentKind;
use super::docx::extract_docx;
use crate::error::KitError;

/// Extracts the plain text of a PDF or DOCX file.
///
/// Parsing is CPU bound and synchronous, so it runs on the blocking pool.
pub async fn extract_text(path: &Path) -> Result<String, KitError> {
    if !tokio::fs::try_exists(path).await? {
        return Err(KitError::FileNotFound(path.to_path_buf()));
    }
    let kind = DocumentKind::from_path(path)?;

    let owned: PathBuf = path.to_path_buf();
    let text = tokio::task::spawn_blocking(move || match kind {
        DocumentKind::Pdf => extract_pdf(&owned),
        DocumentKind::Docx => extract_docx(&owned),
    })
    .await??;

    debug!(path = %path.display(), ?kind, chars = text.chars().count(), "text extracted");
    Ok(text)
}

fn extract_pdf(path: &Path) -> Result<String, KitError> {
    let text = pdf_extract::extract_text(path)?;
    Ok(text.trim().to_string())
}
