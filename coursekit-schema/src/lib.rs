//! Wire types shared by the `coursekit` binary.
//!
//! Only the Gemini v1beta `generateContent` surface is modelled; it is the one
//! remote API the toolkit talks to.

pub mod gemini;

pub use gemini::{
    Candidate, Content, GeminiErrorBody, GeminiErrorObject, GeminiGenerateContentRequest,
    GeminiResponseBody, GenerationConfig, Part,
};
