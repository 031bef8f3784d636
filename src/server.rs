//! HTTP surface: `POST /api/chat` behind a permissive CORS layer

use std::future::Future;
use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use log::{debug, error, info};
use tokio::net::TcpListener;
use tower_http::cors::{
  AllowHeaders, AllowMethods, AllowOrigin, CorsLayer
};

use crate::client::ChatBackend;
use crate::request::{ChatRequest, ChatResponse, ErrorResponse};

pub const CHAT_ROUTE: &str = "/api/chat";

/// Every failure is reported as a 500 carrying the error text
impl IntoResponse for crate::error::Error
{   fn into_response(self) -> Response
    {   let body = ErrorResponse
        {   detail: self.to_string()
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body))
          .into_response()
    }
}

/// Any origin, method and header, with credentials.
/// Wildcards are not allowed alongside credentials, so the
/// request's own values are echoed back instead.
fn cors_layer() -> CorsLayer
{   CorsLayer::new()
      .allow_origin(AllowOrigin::mirror_request())
      .allow_methods(AllowMethods::mirror_request())
      .allow_headers(AllowHeaders::mirror_request())
      .allow_credentials(true)
}

/// Build the application router around a shared backend.
/// Message size is unbounded: the body limit is lifted.
pub fn router(backend: Arc<ChatBackend>) -> Router
{   Router::new()
      .route(CHAT_ROUTE, post(chat_handler))
      .layer(DefaultBodyLimit::disable())
      .layer(cors_layer())
      .with_state(backend)
}

async fn chat_handler(
  State(backend): State<Arc<ChatBackend>>
, Json(request): Json<ChatRequest>
) -> Result<Json<ChatResponse>, crate::error::Error>
{   debug!("Received chat request");
    let response = backend.send_prompt(request.message).await?;
    Ok(Json(ChatResponse { response }))
}

/// Serve on an already bound listener until `shutdown` resolves
pub async fn serve<F>(
  listener: TcpListener
, backend: Arc<ChatBackend>
, shutdown: F
) -> Result<(), crate::error::Error>
where
  F: Future<Output = ()> + Send + 'static
{   axum::serve(listener, router(backend))
      .with_graceful_shutdown(shutdown)
      .await
      .map_err(|e| {
        error!("Server error: {}", e);
        crate::error::Error::Io(e.to_string())
      })
}

/// Bind the configured address and serve until Ctrl-C
pub async fn run(
  config: &crate::config::ServerConfig
, backend: Arc<ChatBackend>
) -> Result<(), crate::error::Error>
{   let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);
    info!("  POST {}", CHAT_ROUTE);

    serve(listener, backend, shutdown_signal()).await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal()
{   match tokio::signal::ctrl_c().await
    {   Ok(()) => info!("Ctrl-C received, shutting down")
      , Err(e) => {
          error!("Cannot listen for Ctrl-C: {}", e);
          std::future::pending::<()>().await;
        }
    }
}
