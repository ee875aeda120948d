use backon::ExponentialBuilder;
use coursekit_schema::{GeminiGenerateContentRequest, GeminiResponseBody};
use std::time::{Duration, Instant};
use tracing::{debug, info};
use url::Url;

use super::api::post_generate_with_retry;
use crate::config::GeminiConfig;
use crate::error::KitError;
use crate::utils::logging::with_pretty_json_debug;

/// Blocking-style (one call, one answer) client for `models/{model}:generateContent`.
pub struct GeminiClient {
    client: reqwest::Client,
    endpoint: Url,
    api_key: String,
    model: String,
    retry_policy: ExponentialBuilder,
}

impl GeminiClient {
    pub fn from_config(cfg: &GeminiConfig) -> Result<Self, KitError> {
        let api_key = cfg
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(KitError::MissingApiKey)?
            .to_string();

        let mut builder = reqwest::Client::builder().timeout(Duration::from_secs(cfg.timeout_secs));
        if let Some(proxy) = cfg.proxy.as_ref() {
            builder = builder.proxy(reqwest::Proxy::all(proxy.as_str())?);
        }
        let client = builder.build()?;

        let retry_policy = ExponentialBuilder::default()
            .with_min_delay(Duration::from_millis(200))
            .with_max_delay(Duration::from_secs(2))
            .with_max_times(cfg.retry_max_times)
            .with_jitter();

        Ok(Self {
            client,
            endpoint: generate_content_url(&cfg.base_url, &cfg.model)?,
            api_key,
            model: cfg.model.clone(),
            retry_policy,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn generate_content(
        &self,
        body: &GeminiGenerateContentRequest,
    ) -> Result<GeminiResponseBody, KitError> {
        with_pretty_json_debug(body, |json| {
            debug!(model = %self.model, "[Gemini] request body:\n{json}");
        });

        let start = Instant::now();
        let resp = post_generate_with_retry(
            &self.client,
            &self.endpoint,
            &self.api_key,
            self.retry_policy,
            body,
        )
        .await?;

        info!(
            model = %self.model,
            took_ms = start.elapsed().as_millis() as u64,
            candidates = resp.candidates.len(),
            finish_reason = resp.finish_reason().unwrap_or("<none>"),
            "[Gemini] generateContent done"
        );
        Ok(resp)
    }

    /// Sends `prompt` as a single user turn and returns the answer text.
    pub async fn generate_text(
        &self,
        prompt: &str,
        system_instruction: Option<&str>,
    ) -> Result<String, KitError> {
        let body = GeminiGenerateContentRequest::from_prompt(prompt, system_instruction);
        let resp = self.generate_content(&body).await?;
        resp.text().ok_or_else(|| {
            KitError::EmptyResponse(resp.finish_reason().unwrap_or("<none>").to_string())
        })
    }
}

/// `{base}v1beta/models/{model}:generateContent`; `base` should end with `/`.
pub fn generate_content_url(base: &Url, model: &str) -> Result<Url, KitError> {
    Ok(base.join(&format!("v1beta/models/{model}:generateContent"))?)
}
