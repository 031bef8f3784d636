//! Request and response types for the chat endpoint and the provider call

use serde::{Deserialize, Serialize};

pub const ROLE_SYSTEM: &str = "system";
pub const ROLE_USER: &str = "user";

/// Body of `POST /api/chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest
{   /// Free text from the caller, forwarded verbatim
    pub message: String
}

/// Successful reply of `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse
{   /// First choice text from the provider, unmodified;
    /// serialises as `null` when the provider sent no content
    pub response: Option<String>
}

/// Failure body of `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse
{   pub detail: String
}

/// One role/content pair of a prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: String
  , pub content: String
}

impl ChatMessage
{   pub fn system(content: impl Into<String>) -> Self
    {   ChatMessage
        {   role: ROLE_SYSTEM.to_string()
          , content: content.into()
        }
    }

    pub fn user(content: impl Into<String>) -> Self
    {   ChatMessage
        {   role: ROLE_USER.to_string()
          , content: content.into()
        }
    }
}

/// Provider-neutral completion call, built fresh per request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest
{   /// Model name
    pub model: String
  , /// Ordered prompt messages
    pub messages: Vec<ChatMessage>
  , /// Temperature for sampling
    pub temperature: f64
  , /// Max tokens to generate
    pub max_tokens: u32
}
