use async_trait::async_trait;

use super::prompt::{SYSTEM_INSTRUCTION, build_prompt};
use crate::error::KitError;
use crate::gemini::GeminiClient;

/// Turns extracted CV text into a recruiter's written analysis.
#[async_trait]
pub trait CvAnalyzer: Send + Sync {
    async fn analyze(&self, cv_text: &str) -> Result<String, KitError>;
}

pub struct GeminiAnalyzer {
    client: GeminiClient,
}

impl GeminiAnalyzer {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }
}

#[async_trait]
impl CvAnalyzer for GeminiAnalyzer {
    async fn analyze(&self, cv_text: &str) -> Result<String, KitError> {
        self.client
            .generate_text(&build_prompt(cv_text), Some(SYSTEM_INSTRUCTION))
            .await
    }
}
