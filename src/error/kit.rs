use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error as ThisError;

use super::IsRetryable;

#[derive(Debug, ThisError)]
pub enum KitError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] figment::Error),

    #[error("Invalid SQL identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("No columns given for {operation} on '{table}'")]
    EmptyRecord {
        operation: &'static str,
        table: String,
    },

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Unsupported file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("PDF extraction error: {0}")]
    PdfError(#[from] pdf_extract::OutputError),

    #[error("DOCX archive error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("DOCX XML error: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("Line must not contain a line break: {0:?}")]
    InvalidLine(String),

    #[error("Gemini API key is not configured; set GEMINI_API_KEY or gemini.api_key")]
    MissingApiKey,

    #[error("Gemini error {status} ({code}): {message}")]
    Upstream {
        status: StatusCode,
        code: String,
        message: String,
    },

    #[error("Upstream error with status: {0}")]
    UpstreamStatus(StatusCode),

    #[error("Gemini returned no answer text (finish reason: {0})")]
    EmptyResponse(String),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl From<tokio::task::JoinError> for KitError {
    fn from(e: tokio::task::JoinError) -> Self {
        KitError::UnexpectedError(format!("blocking task failed: {e}"))
    }
}

impl IsRetryable for KitError {
    fn is_retryable(&self) -> bool {
        match self {
            KitError::ReqwestError(e) => e.is_connect() || e.is_timeout(),
            KitError::UpstreamStatus(status) | KitError::Upstream { status, .. } => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_and_rate_limits_are_retryable() {
        assert!(KitError::UpstreamStatus(StatusCode::BAD_GATEWAY).is_retryable());
        assert!(
            KitError::Upstream {
                status: StatusCode::TOO_MANY_REQUESTS,
                code: "RESOURCE_EXHAUSTED".to_string(),
                message: "quota".to_string(),
            }
            .is_retryable()
        );
    }

    #[test]
    fn client_errors_are_final() {
        assert!(
            !KitError::Upstream {
                status: StatusCode::BAD_REQUEST,
                code: "INVALID_ARGUMENT".to_string(),
                message: "API key not valid".to_string(),
            }
            .is_retryable()
        );
        assert!(!KitError::MissingApiKey.is_retryable());
        assert!(!KitError::InvalidIdentifier("a;b".to_string()).is_retryable());
    }
}
