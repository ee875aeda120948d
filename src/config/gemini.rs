use serde::{Deserialize, Serialize};
use url::Url;

/// Gemini API settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// API key sent as `x-goog-api-key`.
    /// TOML: `gemini.api_key`. Env: `GEMINI_API_KEY`. No default.
    #[serde(default)]
    pub api_key: Option<String>,

    /// API root; the request goes to `{base_url}v1beta/models/{model}:generateContent`.
    /// TOML: `gemini.base_url`. Default: `https://generativelanguage.googleapis.com/`.
    #[serde(default = "default_base_url")]
    pub base_url: Url,

    /// TOML: `gemini.model`. Default: `gemini-2.5-flash`.
    #[serde(default = "default_model")]
    pub model: String,

    /// Extra attempts after a transport error, 429 or 5xx.
    /// TOML: `gemini.retry_max_times`. Default: `2`.
    #[serde(default = "default_retry_max_times")]
    pub retry_max_times: usize,

    /// Whole-request timeout in seconds.
    /// TOML: `gemini.timeout_secs`. Default: `120`.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Optional outbound HTTP proxy, e.g. `http://127.0.0.1:1080`.
    #[serde(default)]
    pub proxy: Option<Url>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            retry_max_times: default_retry_max_times(),
            timeout_secs: default_timeout_secs(),
            proxy: None,
        }
    }
}

fn default_base_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/").expect("valid Gemini API base URL")
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_retry_max_times() -> usize {
    2
}

fn default_timeout_secs() -> u64 {
    120
}
