pub mod error;
pub mod config;
pub mod providers;
pub mod request;
pub mod client;
pub mod server;

pub use client::ChatBackend;
pub use error::Error;
pub use providers::{CompletionProvider, GroqClient};

/*

carechat is a one-route HTTP proxy: a caller posts a symptom
description, we wrap it with a fixed healthcare system prompt,
ask a Groq-hosted chat model for a short answer, and hand the
first choice back.

carechat/
├── Cargo.toml
├── src/
│   ├── lib.rs          # Re-exports and shared model types
│   ├── main.rs         # Process bootstrap (.env, logging, CLI)
│   ├── error.rs        # Error enum
│   ├── config.rs       # Provider/server config, CLI parsing
│   ├── request.rs      # Wire types for /api/chat and providers
│   ├── client.rs       # ChatBackend: prompt building + call
│   ├── server.rs       # axum router, CORS, error mapping
│   └── providers/
│       ├── mod.rs      # CompletionProvider trait
│       └── groq.rs     # Groq (OpenAI-compatible) client
└── tests/              # Router and provider integration tests

*/

// ===== SendPrompt =====

/// First choice text; `None` mirrors a null content from the provider
pub type SendPromptReply
  = Result<Option<String>, crate::error::Error>;

/// Fixed parameters of the model we proxy to.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInfo
{   /// Model identifier sent to the provider
    pub name: String
  , /// Sampling temperature
    pub temperature: f64
  , /// Maximum tokens the model can generate in response
    pub max_response_tokens: u32
  , /// System instruction placed before every user message
    pub system_prompt: String
}
