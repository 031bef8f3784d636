//! LLM provider implementations

use async_trait::async_trait;

pub mod groq;

// Re-export for convenience
pub use groq::GroqClient;

/// A completion API the chat backend can call.
/// Implementations are shared across requests and must hold
/// no per-request mutable state.
#[async_trait]
pub trait CompletionProvider: Send + Sync
{   /// Short provider name used in logs
    fn name(&self) -> &str;

    /// Run one completion and return the first choice's text,
    /// `None` when the provider sent a null content
    async fn complete(
      &self
    , request: crate::request::CompletionRequest
    ) -> crate::SendPromptReply;
}
