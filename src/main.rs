use std::sync::Arc;

use clap::Parser;
use log::{info, warn};

use carechat::config::{AppConfig, Cli};
use carechat::{ChatBackend, GroqClient};

#[tokio::main]
async fn main() -> Result<(), carechat::Error>
{   // .env is optional; real deployments set the environment directly
    let _ = dotenvy::dotenv();

    env_logger::Builder::from_env(
      env_logger::Env::default().default_filter_or("info")
    ).init();

    let config = AppConfig::from(Cli::parse());

    let groq = GroqClient::new(config.provider.clone())?;
    if !groq.has_api_key()
    {   warn!(
          "GROQ_API_KEY is not set; every chat request will fail"
        );
    }

    let backend = Arc::new(ChatBackend::new(Arc::new(groq)));
    info!(
      "Proxying to {} model {}",
      config.provider.api_base,
      backend.model().name
    );

    carechat::server::run(&config.server, backend).await
}
