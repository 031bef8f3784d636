use async_trait::async_trait;
use log::{debug, trace, error};
use serde::{Deserialize, Serialize};

pub const GROQ_API_BASE: &str
  = "https://api.groq.com/openai/v1";

pub const GROQ_DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

pub const SYSTEM_INSTRUCTION: &str
  = "You are a healthcare information assistant. \
     Provide general possible causes for symptoms. \
     Limit responses to 4-6 lines. \
     Avoid lengthy paragraphs and be concise. \
     Do NOT diagnose. Always advise consulting a doctor.";

// ===== Message Types =====

#[derive(Debug, Clone, Serialize)]
pub struct GroqChatRequest
{   pub model: String
  , pub messages: Vec<crate::request::ChatMessage>
  , pub temperature: f64
  , pub max_tokens: u32
  , pub stream: bool
}

impl From<crate::request::CompletionRequest> for GroqChatRequest
{   fn from(req: crate::request::CompletionRequest) -> Self
    {   GroqChatRequest
        {   model: req.model
          , messages: req.messages
          , temperature: req.temperature
          , max_tokens: req.max_tokens
          , stream: false
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroqChatResponse
{   pub choices: Vec<Choice>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   pub message: ResponseMessage
  , #[serde(default)]
    pub finish_reason: Option<String>
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage
{   #[serde(default)]
    pub role: Option<String>
  , #[serde(default)]
    pub content: Option<String>
}

// ===== Groq Client =====

/// Groq chat completions client.
/// Cheap to share: the inner `reqwest::Client` pools connections
/// and is safe to use from many tasks at once.
pub struct GroqClient
{   api_key: Option<String>
  , api_base: String
  , http_client: reqwest::Client
}

impl GroqClient
{   /// Build a client from provider configuration.
    /// A missing key is accepted here and reported on first use.
    pub fn new(
      config: crate::config::ProviderConfig
    ) -> Result<Self, crate::error::Error>
    {   debug!("Creating GroqClient for {}", config.api_base);

        let http_client = reqwest::Client::builder()
          .build()
          .map_err(|e| {
            error!("Failed to build HTTP client: {}", e);
            crate::error::Error::InvalidConfiguration(
              e.to_string()
            )
          })?;

        Ok(GroqClient
        {   api_key: config.api_key
          , api_base: config.api_base
          , http_client
        })
    }

    pub fn has_api_key(&self) -> bool
    {   self.api_key.is_some()
    }

    fn get_api_key(&self)
      -> Result<&str, crate::error::Error>
    {   self.api_key.as_deref().ok_or_else(|| {
          error!("No API key configured for Groq");
          crate::error::Error::MissingApiKey(
            "Groq (GROQ_API_KEY)".to_string()
          )
        })
    }

    async fn handle_send_prompt(
      &self
    , request: crate::request::CompletionRequest
    ) -> crate::SendPromptReply
    {   debug!("Handling send_prompt for: {}", request.model);

        let api_key = self.get_api_key()?;
        let request = GroqChatRequest::from(request);

        trace!("Groq request: {:?}", request);

        let response = self.http_client
          .post(format!("{}/chat/completions", self.api_base))
          .header("Authorization", format!("Bearer {}", api_key))
          .header("Content-Type", "application/json")
          .json(&request)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            crate::error::Error::HttpError(e.to_string())
          })?;

        let status = response.status();
        trace!("Groq response status: {}", status);

        if !status.is_success()
        {   let error_text = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("Groq API error ({}): {}", status, error_text);
            return Err(crate::error::Error::ApiError(
              format!("Groq error ({}): {}", status, error_text)
            ));
        }

        let chat_response: GroqChatResponse
          = response.json().await.map_err(|e| {
            error!("Parse error: {}", e);
            crate::error::Error::ParseError(e.to_string())
          })?;

        let choice = chat_response.choices
          .into_iter()
          .next()
          .ok_or_else(|| {
            error!("No choices in response");
            crate::error::Error::NoChoicesInResponse
          })?;

        trace!(
          "Groq finish_reason: {:?}",
          choice.finish_reason
        );

        if choice.message.content.is_none()
        {   debug!("First choice has null content");
        }
        Ok(choice.message.content)
    }
}

#[async_trait]
impl crate::providers::CompletionProvider for GroqClient
{   fn name(&self) -> &str
    {   "groq"
    }

    async fn complete(
      &self
    , request: crate::request::CompletionRequest
    ) -> crate::SendPromptReply
    {   self.handle_send_prompt(request).await
    }
}

/// Default model info for Groq
pub fn default_model_info() -> crate::ModelInfo
{   crate::ModelInfo
    {   name: GROQ_DEFAULT_MODEL.to_string()
      , temperature: 0.3
      , max_response_tokens: 150
      , system_prompt: SYSTEM_INSTRUCTION.to_string()
    }
}
