use super::Content;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Gemini v1beta `generateContent` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiResponseBody {
    #[serde(default)]
    pub candidates: Vec<Candidate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_feedback: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_id: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl GeminiResponseBody {
    /// Answer text of the first candidate: its non-thought text parts, concatenated.
    ///
    /// `None` when there is no candidate or the candidate carries no text.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter(|part| !part.is_thought())
            .filter_map(|part| part.text.as_deref())
            .collect();
        (!text.is_empty()).then_some(text)
    }

    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates.first()?.finish_reason.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_joins_parts_of_first_candidate_and_skips_thoughts() {
        let body: GeminiResponseBody = serde_json::from_value(json!({
            "candidates": [
                {
                    "content": {
                        "role": "model",
                        "parts": [
                            {"text": "hidden reasoning", "thought": true},
                            {"text": "1. Software Engineering"},
                            {"text": "\n2. Data Analytics"}
                        ]
                    },
                    "finishReason": "STOP",
                    "index": 0
                },
                {
                    "content": {"role": "model", "parts": [{"text": "second"}]}
                }
            ],
            "usageMetadata": {"promptTokenCount": 12},
            "modelVersion": "gemini-2.5-flash"
        }))
        .unwrap();

        assert_eq!(
            body.text().as_deref(),
            Some("1. Software Engineering\n2. Data Analytics")
        );
        assert_eq!(body.finish_reason(), Some("STOP"));
        assert_eq!(body.model_version.as_deref(), Some("gemini-2.5-flash"));
    }

    #[test]
    fn text_is_none_without_candidates() {
        let body: GeminiResponseBody = serde_json::from_value(json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        }))
        .unwrap();
        assert!(body.text().is_none());
        assert!(body.prompt_feedback.is_some());
    }

    #[test]
    fn text_is_none_when_candidate_has_no_content() {
        let body: GeminiResponseBody = serde_json::from_value(json!({
            "candidates": [{"finishReason": "SAFETY"}]
        }))
        .unwrap();
        assert!(body.text().is_none());
        assert_eq!(body.finish_reason(), Some("SAFETY"));
    }

    #[test]
    fn text_is_none_when_thinking_used_the_token_budget() {
        let body: GeminiResponseBody = serde_json::from_value(json!({
            "candidates": [{
                "content": {"role": "model"},
                "finishReason": "MAX_TOKENS",
                "index": 0
            }]
        }))
        .unwrap();
        assert!(body.text().is_none());
        assert_eq!(body.finish_reason(), Some("MAX_TOKENS"));
    }
}
