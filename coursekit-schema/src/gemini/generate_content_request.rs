//! Typed Gemini v1beta request schema for the `generateContent` endpoint.
//!
//! Known fields are typed; anything else the caller (or a future API revision)
//! sets goes through the `extra` catch-all maps.

mod content;
mod generation;

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

pub use content::{Content, Part};
pub use generation::GenerationConfig;

/// Gemini `generateContent` request body.
///
/// Reference: <https://ai.google.dev/gemini-api/docs/text-generation>
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerateContentRequest {
    /// Required conversation turns.
    pub contents: Vec<Content>,

    /// System-level instruction. Structured like a `Content` without a `role`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,

    /// Generation parameters (temperature, topP, maxOutputTokens, …).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,

    /// Catch-all for optional fields such as `safetySettings` or `tools`.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl GeminiGenerateContentRequest {
    /// Single user turn carrying `prompt`, optionally steered by a system instruction.
    pub fn from_prompt(prompt: impl Into<String>, system_instruction: Option<&str>) -> Self {
        Self {
            contents: vec![Content::user_text(prompt)],
            system_instruction: system_instruction
                .filter(|text| !text.trim().is_empty())
                .map(Content::system_text),
            generation_config: None,
            extra: BTreeMap::new(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_prompt_serializes_user_turn_and_system_instruction() {
        let req = GeminiGenerateContentRequest::from_prompt(
            "analyze this",
            Some("You are a professional recruiter analyzing resumes."),
        );

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "contents": [{
                    "role": "user",
                    "parts": [{"text": "analyze this"}]
                }],
                "systemInstruction": {
                    "parts": [{"text": "You are a professional recruiter analyzing resumes."}]
                }
            })
        );
    }

    #[test]
    fn from_prompt_drops_blank_system_instruction() {
        let req = GeminiGenerateContentRequest::from_prompt("hi", Some("   "));
        assert!(req.system_instruction.is_none());

        let value = serde_json::to_value(&req).unwrap();
        assert!(value.get("systemInstruction").is_none());
    }

    #[test]
    fn generation_config_and_extra_fields_are_flattened() {
        let mut req = GeminiGenerateContentRequest::from_prompt("hello", None);
        req.generation_config = Some(GenerationConfig {
            temperature: Some(0.7),
            max_output_tokens: Some(1024),
            extra: BTreeMap::from([("stopSequences".to_string(), json!(["END"]))]),
            ..GenerationConfig::default()
        });
        req.extra.insert(
            "safetySettings".to_string(),
            json!([{"category": "HARM_CATEGORY_HARASSMENT", "threshold": "BLOCK_NONE"}]),
        );

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value["generationConfig"],
            json!({"temperature": 0.7, "maxOutputTokens": 1024, "stopSequences": ["END"]})
        );
        assert_eq!(value["safetySettings"][0]["threshold"], "BLOCK_NONE");
        assert!(value.get("extra").is_none());
    }
}
