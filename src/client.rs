use std::sync::Arc;
use log::{debug, trace, error};

use crate::providers::CompletionProvider;
use crate::request::{ChatMessage, CompletionRequest};

/// Chat proxy core: one shared provider handle plus the fixed
/// model parameters. Holds nothing per request, so a single
/// instance serves every connection.
#[derive(Clone)]
pub struct ChatBackend
{   provider: Arc<dyn CompletionProvider>
  , model: crate::ModelInfo
}

impl ChatBackend
{   /// Create a backend using the default Groq model parameters
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self
    {   Self::with_model(
          provider
        , crate::providers::groq::default_model_info()
        )
    }

    pub fn with_model(
      provider: Arc<dyn CompletionProvider>
    , model: crate::ModelInfo
    ) -> Self
    {   debug!(
          "Creating ChatBackend on {} with model {}",
          provider.name(),
          model.name
        );
        ChatBackend
        {   provider
          , model
        }
    }

    pub fn model(&self) -> &crate::ModelInfo
    {   &self.model
    }

    /// System instruction first, then the caller's text untouched
    pub fn build_prompt(&self, message: String)
      -> CompletionRequest
    {   CompletionRequest
        {   model: self.model.name.clone()
          , messages: vec![
              ChatMessage::system(self.model.system_prompt.clone())
            , ChatMessage::user(message)
            ]
          , temperature: self.model.temperature
          , max_tokens: self.model.max_response_tokens
        }
    }

    /// Send one prompt and wait for the first choice.
    /// No retry: the provider's error is returned as-is.
    pub async fn send_prompt(&self, message: String)
      -> crate::SendPromptReply
    {   debug!(
          "send_prompt to {} ({} chars)",
          self.provider.name(),
          message.len()
        );
        let request = self.build_prompt(message);
        trace!("Prompt: {:?}", request);

        match self.provider.complete(request).await
        {   Ok(text) => {
              trace!("Completion: {:?}", text);
              Ok(text)
            }
          , Err(e) => {
              error!("{} completion failed: {}",
                self.provider.name(), e
              );
              Err(e)
            }
        }
    }
}
