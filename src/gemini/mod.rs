//! Gemini API client.
//!
//! This module provides:
//! - Direct `generateContent` integration over `reqwest`
//! - Structured response schemas and JSON output mode
//! - Classification of HTTP failures into [`crate::error::GeminiError`]
//!
//! # Example
//!
//! ```
//! use bias_lens::gemini::{GenerateContentRequest, GenerationConfig, Schema};
//!
//! let request = GenerateContentRequest::new("gemini-3-flash-preview", "Hello")
//!     .with_system_instruction("Reply with a number")
//!     .with_generation_config(GenerationConfig::json(Schema::integer()));
//!
//! let body = serde_json::to_value(&request).unwrap();
//! assert_eq!(body["generationConfig"]["responseSchema"]["type"], "INTEGER");
//! ```

mod client;
mod config;
mod types;

pub use client::GeminiClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_MS};
pub use types::{
    Candidate, CandidateContent, Content, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, GenerationResponse, Part, PromptFeedback, ResponsePart, Schema, SchemaType,
    UsageMetadata, JSON_MIME_TYPE,
};
