//! Configuration for the completion provider and the HTTP listener

use std::net::SocketAddr;
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

/// Provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig
{   /// Bearer credential; absence fails the first call
    #[serde(skip_serializing)]
    pub api_key: Option<String>
  , /// API base URL, without the trailing `/chat/completions`
    pub api_base: String
}

impl Default for ProviderConfig
{   fn default() -> Self
    {   ProviderConfig
        {   api_key: None
          , api_base: crate::providers::groq::GROQ_API_BASE
              .to_string()
        }
    }
}

/// Listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig
{   pub host: String
  , pub port: u16
}

impl Default for ServerConfig
{   fn default() -> Self
    {   ServerConfig
        {   host: DEFAULT_HOST.to_string()
          , port: DEFAULT_PORT
        }
    }
}

impl ServerConfig
{   /// Resolve `host:port` into a bindable address
    pub fn socket_addr(&self)
      -> Result<SocketAddr, crate::error::Error>
    {   format!("{}:{}", self.host, self.port)
          .parse()
          .map_err(|e| {
            crate::error::Error::InvalidConfiguration(
              format!(
                "invalid listen address {}:{}: {}",
                self.host, self.port, e
              )
            )
          })
    }
}

/// Whole-process configuration, built once at startup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig
{   pub provider: ProviderConfig
  , pub server: ServerConfig
}

/// Command line, each flag falling back to its environment variable
#[derive(Debug, Parser)]
#[command(name = "carechat", version, about)]
pub struct Cli
{   /// Groq API key
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>

  , /// Base URL of the OpenAI-compatible completion API
    #[arg(
      long,
      env = "GROQ_API_BASE",
      default_value = crate::providers::groq::GROQ_API_BASE
    )]
    pub api_base: String

  , /// Interface to bind
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String

  , /// Port to bind
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16
}

impl From<Cli> for AppConfig
{   fn from(cli: Cli) -> Self
    {   AppConfig
        {   provider: ProviderConfig
            {   api_key: cli.api_key
                  .filter(|k| !k.trim().is_empty())
              , api_base: cli.api_base
                  .trim_end_matches('/')
                  .to_string()
            }
          , server: ServerConfig
            {   host: cli.host
              , port: cli.port
            }
        }
    }
}
