//! Gemini `generateContent` request and response types.
//!
//! This module provides:
//! - Request types (contents, system instruction, generation config)
//! - The structured response [`Schema`] used to constrain model output
//! - Response types (candidates, prompt feedback, usage metadata)
//! - [`GenerationResponse`], the flattened reply handed to callers

#![allow(clippy::missing_const_for_fn)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// MIME type requesting a JSON reply.
pub const JSON_MIME_TYPE: &str = "application/json";

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Model identifier. Part of the URL, not the body.
    #[serde(skip)]
    pub model: String,
    /// Conversation contents.
    pub contents: Vec<Content>,
    /// System instruction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    /// Output constraints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Create a request with a single user prompt.
    #[must_use]
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            contents: vec![Content::user(prompt)],
            system_instruction: None,
            generation_config: None,
        }
    }

    /// Set the system instruction.
    #[must_use]
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(Content::system(instruction));
        self
    }

    /// Set the generation config.
    #[must_use]
    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }

    /// Total prompt text length in bytes, system instruction included.
    #[must_use]
    pub fn text_len(&self) -> usize {
        self.contents
            .iter()
            .chain(self.system_instruction.iter())
            .flat_map(|c| c.parts.iter())
            .map(|p| p.text.len())
            .sum()
    }
}

/// A content entry: a role and its text parts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Content {
    /// "user" or "model"; absent for system instructions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Text parts.
    pub parts: Vec<Part>,
}

impl Content {
    /// User content with one text part.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part::text(text)],
        }
    }

    /// System instruction content (no role).
    #[must_use]
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part::text(text)],
        }
    }
}

/// A text part of a request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Part {
    /// The text.
    pub text: String,
}

impl Part {
    /// Create a text part.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Generation options constraining the reply format.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Reply MIME type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    /// Structured schema the reply must follow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Schema>,
}

impl GenerationConfig {
    /// JSON output constrained by `schema`.
    #[must_use]
    pub fn json(schema: Schema) -> Self {
        Self {
            response_mime_type: Some(JSON_MIME_TYPE.to_string()),
            response_schema: Some(schema),
        }
    }
}

/// Schema value types understood by the service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    /// Object with named properties.
    Object,
    /// Homogeneous array.
    Array,
    /// UTF-8 string.
    String,
    /// Whole number.
    Integer,
}

/// Structured output schema (OpenAPI subset).
///
/// [`Schema::object`] marks every listed property as required and keeps the
/// listing order in `propertyOrdering`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Value type.
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    /// Object properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Schema>>,
    /// Required property names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    /// Order in which the model should emit properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_ordering: Option<Vec<String>>,
    /// Array item schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
}

impl Schema {
    fn scalar(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            properties: None,
            required: None,
            property_ordering: None,
            items: None,
        }
    }

    /// String schema.
    #[must_use]
    pub fn string() -> Self {
        Self::scalar(SchemaType::String)
    }

    /// Integer schema.
    #[must_use]
    pub fn integer() -> Self {
        Self::scalar(SchemaType::Integer)
    }

    /// Array of `items`.
    #[must_use]
    pub fn array(items: Self) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::scalar(SchemaType::Array)
        }
    }

    /// Object whose listed properties are all required.
    #[must_use]
    pub fn object<const N: usize>(properties: [(&str, Self); N]) -> Self {
        let names: Vec<String> = properties.iter().map(|(name, _)| (*name).to_string()).collect();
        Self {
            properties: Some(
                properties
                    .into_iter()
                    .map(|(name, schema)| (name.to_string(), schema))
                    .collect(),
            ),
            required: Some(names.clone()),
            property_ordering: Some(names),
            ..Self::scalar(SchemaType::Object)
        }
    }

    /// Look up a property schema by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Self> {
        self.properties.as_ref().and_then(|p| p.get(name))
    }
}

/// Raw `generateContent` response body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Generated candidates.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Feedback when the prompt was blocked.
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
    /// Token usage.
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
}

/// One generated candidate.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Candidate content; absent when generation was cut off.
    #[serde(default)]
    pub content: Option<CandidateContent>,
    /// Why generation stopped (e.g. "STOP", "MAX_TOKENS", "SAFETY").
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Content of a candidate.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateContent {
    /// Response parts.
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

/// A response part. Non-text parts deserialize with `text: None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponsePart {
    /// Text, if this is a text part.
    #[serde(default)]
    pub text: Option<String>,
    /// True for thought-summary parts.
    #[serde(default)]
    pub thought: Option<bool>,
}

/// Prompt feedback.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Reason the prompt was blocked, if any.
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// Token usage metadata.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Prompt tokens.
    #[serde(default)]
    pub prompt_token_count: u32,
    /// Tokens across generated candidates.
    #[serde(default)]
    pub candidates_token_count: u32,
}

/// Flattened reply: the first candidate's text plus bookkeeping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationResponse {
    /// Concatenated text parts. May be empty.
    pub text: String,
    /// Why generation stopped.
    pub finish_reason: Option<String>,
    /// Token usage.
    pub usage: UsageMetadata,
}

impl GenerationResponse {
    /// Create a response with text only.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the finish reason.
    #[must_use]
    pub fn with_finish_reason(mut self, reason: impl Into<String>) -> Self {
        self.finish_reason = Some(reason.into());
        self
    }

    /// Set the usage metadata.
    #[must_use]
    pub const fn with_usage(mut self, usage: UsageMetadata) -> Self {
        self.usage = usage;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_request_serializes_camel_case_without_model() {
        let request = GenerateContentRequest::new("gemini-test", "Hello")
            .with_system_instruction("Be brief")
            .with_generation_config(GenerationConfig::json(Schema::string()));

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "contents": [{"role": "user", "parts": [{"text": "Hello"}]}],
                "systemInstruction": {"parts": [{"text": "Be brief"}]},
                "generationConfig": {
                    "responseMimeType": "application/json",
                    "responseSchema": {"type": "STRING"}
                }
            })
        );
    }

    #[test]
    fn test_request_omits_optional_sections() {
        let value = serde_json::to_value(GenerateContentRequest::new("m", "Hi")).unwrap();
        assert!(value.get("systemInstruction").is_none());
        assert!(value.get("generationConfig").is_none());
    }

    #[test]
    fn test_request_text_len_counts_system_instruction() {
        let request = GenerateContentRequest::new("m", "abc").with_system_instruction("de");
        assert_eq!(request.text_len(), 5);
    }

    #[test]
    fn test_object_schema_requires_all_properties_in_order() {
        let schema = Schema::object([("b", Schema::integer()), ("a", Schema::string())]);
        assert_eq!(schema.required, Some(vec!["b".to_string(), "a".to_string()]));
        assert_eq!(
            schema.property_ordering,
            Some(vec!["b".to_string(), "a".to_string()])
        );
        assert_eq!(
            schema.property("b").map(|s| s.schema_type),
            Some(SchemaType::Integer)
        );

        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(value["type"], "OBJECT");
        assert_eq!(value["properties"]["a"]["type"], "STRING");
    }

    #[test]
    fn test_array_schema_serialization() {
        let value = serde_json::to_value(Schema::array(Schema::integer())).unwrap();
        assert_eq!(value, json!({"type": "ARRAY", "items": {"type": "INTEGER"}}));
    }

    #[test]
    fn test_response_deserializes_minimal_body() {
        let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.candidates.is_empty());
        assert!(response.prompt_feedback.is_none());
    }

    #[test]
    fn test_response_deserializes_full_body() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "{}"}, {"thought": true, "text": "hmm"}]},
                "finishReason": "STOP",
                "index": 0
            }],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 34, "totalTokenCount": 46},
            "modelVersion": "gemini-3-flash-preview"
        }))
        .unwrap();

        let candidate = &response.candidates[0];
        assert_eq!(candidate.finish_reason.as_deref(), Some("STOP"));
        let parts = &candidate.content.as_ref().unwrap().parts;
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[1].thought, Some(true));
        assert_eq!(
            response.usage_metadata,
            Some(UsageMetadata {
                prompt_token_count: 12,
                candidates_token_count: 34
            })
        );
    }
}
