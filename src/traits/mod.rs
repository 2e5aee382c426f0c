//! Trait definitions for mockable dependencies.
//!
//! [`GenerationClient`] abstracts the text-generation service so the
//! analyzer can be driven by a mock in tests.
//!
//! # Mocking
//!
//! The trait is annotated with `#[cfg_attr(test, mockall::automock)]`,
//! which generates `MockGenerationClient` for unit tests.

use async_trait::async_trait;

use crate::error::GeminiError;
use crate::gemini::{GenerateContentRequest, GenerationResponse};

/// Text-generation service abstraction.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Send one generation request.
    ///
    /// An empty `text` in the response is not an error at this layer.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError`] when the service is unreachable or rejects
    /// the call.
    async fn generate(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerationResponse, GeminiError>;
}
