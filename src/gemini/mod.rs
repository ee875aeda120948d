//! Minimal Gemini API client: one `generateContent` call per request.

mod api;
mod client;

pub use api::UPSTREAM_BODY_PREVIEW_CHARS;
pub use client::{GeminiClient, generate_content_url};
