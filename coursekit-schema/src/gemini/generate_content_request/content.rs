use serde::{Deserialize, Serialize, de::Error};
use serde_json::Value;
use std::collections::BTreeMap;

/// A single conversation turn or system instruction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Usually `"user"` or `"model"`. Absent for `systemInstruction`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Ordered parts that constitute a single message. A model turn cut off by
    /// `MAX_TOKENS` may omit the field entirely.
    #[serde(default, deserialize_with = "deserialize_parts")]
    pub parts: Vec<Part>,

    #[serde(default, flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Content {
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part::text(text)],
            extra: BTreeMap::new(),
        }
    }

    pub fn system_text(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part::text(text)],
            extra: BTreeMap::new(),
        }
    }
}

/// One atomic piece of content inside a `Content` turn.
///
/// Only `text` matters to this toolkit; the other data fields are kept so a
/// response carrying them still deserializes.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Marks a model "thought" part, which is not part of the answer text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thought: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_call: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_response: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_data: Option<Value>,

    #[serde(default, flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn is_thought(&self) -> bool {
        self.thought.unwrap_or(false)
    }
}

fn deserialize_parts<'de, D>(deserializer: D) -> Result<Vec<Part>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let parts = Vec::<Part>::deserialize(deserializer)?;

    for (index, part) in parts.iter().enumerate() {
        let data_fields_count = usize::from(part.text.is_some())
            + usize::from(part.inline_data.is_some())
            + usize::from(part.function_call.is_some())
            + usize::from(part.function_response.is_some())
            + usize::from(part.file_data.is_some());

        if data_fields_count > 1 {
            return Err(D::Error::custom(format!(
                "parts[{index}] must contain at most one data field among text, inlineData, functionCall, functionResponse, fileData"
            )));
        }
    }

    Ok(parts)
}
