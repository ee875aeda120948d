use backon::{ExponentialBuilder, Retryable};
use coursekit_schema::{GeminiErrorBody, GeminiResponseBody};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::error::{IsRetryable, KitError};

/// Max chars of an unparseable upstream body kept in logs.
pub const UPSTREAM_BODY_PREVIEW_CHARS: usize = 300;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// POSTs `body` to a `generateContent` endpoint. Transport failures, 429 and
/// 5xx responses are retried per `retry_policy`; other statuses fail at once.
pub(crate) async fn post_generate_with_retry<T>(
    client: &reqwest::Client,
    url: &Url,
    api_key: &str,
    retry_policy: ExponentialBuilder,
    body: &T,
) -> Result<GeminiResponseBody, KitError>
where
    T: serde::Serialize,
{
    (|| {
        let client = client.clone();
        let url = url.clone();

        async move {
            let resp = client
                .post(url)
                .header(API_KEY_HEADER, api_key)
                .json(body)
                .send()
                .await?;

            let status = resp.status();
            if status.is_success() {
                return Ok(resp.json::<GeminiResponseBody>().await?);
            }
            Err(upstream_error(status, resp).await)
        }
    })
    .retry(retry_policy)
    .when(|err: &KitError| err.is_retryable())
    .notify(|err: &KitError, delay: Duration| {
        warn!(error = %err, ?delay, "[Gemini] upstream call failed (will retry)");
    })
    .await
}

async fn upstream_error(status: StatusCode, resp: reqwest::Response) -> KitError {
    let bytes = match resp.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!(%status, error = %e, "[Gemini] failed to read error body");
            return KitError::UpstreamStatus(status);
        }
    };

    match serde_json::from_slice::<GeminiErrorBody>(&bytes) {
        Ok(parsed) => KitError::Upstream {
            status,
            code: parsed.status().to_string(),
            message: parsed.message().to_string(),
        },
        Err(_) => {
            let raw_body = String::from_utf8_lossy(&bytes);
            debug!(
                %status,
                body = %format!("{:.len$}", raw_body, len = UPSTREAM_BODY_PREVIEW_CHARS),
                "[Gemini] upstream unstructured error"
            );
            KitError::UpstreamStatus(status)
        }
    }
}
