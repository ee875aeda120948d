use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// `generationConfig` object.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,

    /// `stopSequences`, `responseMimeType`, `thinkingConfig`, …
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
