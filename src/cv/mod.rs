//! CV analysis: pull the text out of a PDF or DOCX resume and hand it to a
//! [`CvAnalyzer`].

mod analyzer;
mod docx;
mod extract;
mod prompt;

use std::path::Path;
use tracing::info;

pub use analyzer::{CvAnalyzer, GeminiAnalyzer};
pub use docx::document_xml_to_text;
pub use extract::extract_text;
pub use prompt::{SYSTEM_INSTRUCTION, build_prompt};

use crate::error::KitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    pub fn from_path(path: &Path) -> Result<Self, KitError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("pdf") => Ok(Self::Pdf),
            Some("docx") => Ok(Self::Docx),
            _ => Err(KitError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Extracted text together with the analysis produced from it.
#[derive(Debug, Clone)]
pub struct CvReport {
    pub text: String,
    pub analysis: String,
}

pub async fn analyze_file<A>(analyzer: &A, path: &Path) -> Result<CvReport, KitError>
where
    A: CvAnalyzer + ?Sized,
{
    let text = extract_text(path).await?;
    let analysis = analyzer.analyze(&text).await?;
    info!(path = %path.display(), chars = analysis.chars().count(), "CV analyzed");
    Ok(CvReport { text, analysis })
}
