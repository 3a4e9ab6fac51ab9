//! HTTP API server implementation

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

use crate::core::client::Translator;
use crate::core::config::RelayConfig;
use crate::core::errors::{RelayError, Result};
use crate::core::models::{Direction, TranslateRequest, TranslateResponse};

/// Application state shared by all request handlers
///
/// Translator handles are built once at startup and read-only afterwards.
/// An absent handle means construction failed at startup; the process keeps
/// serving and requests needing that handle fail per-request.
#[derive(Clone)]
pub struct AppState {
    zh_to_en: Option<Arc<Translator>>,
    en_to_zh: Option<Arc<Translator>>,
}

impl AppState {
    /// Build both translator handles, keeping `None` where construction fails
    pub fn from_config(config: Arc<RelayConfig>) -> Self {
        let build = |direction: Direction| match Translator::new(config.clone(), direction) {
            Ok(translator) => {
                info!("Loaded {} translator", direction);
                Some(Arc::new(translator))
            }
            Err(e) => {
                warn!("Failed to load {} translator: {}", direction, e);
                None
            }
        };

        Self {
            zh_to_en: build(Direction::ZhToEn),
            en_to_zh: build(Direction::EnToZh),
        }
    }

    /// State with explicit handles
    pub fn with_translators(
        zh_to_en: Option<Arc<Translator>>,
        en_to_zh: Option<Arc<Translator>>,
    ) -> Self {
        Self { zh_to_en, en_to_zh }
    }

    fn translator(&self, direction: Direction) -> Result<&Arc<Translator>> {
        let handle = match direction {
            Direction::ZhToEn => self.zh_to_en.as_ref(),
            Direction::EnToZh => self.en_to_zh.as_ref(),
        };
        handle.ok_or(RelayError::ProviderUnavailable)
    }
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
}

/// Health check handler, answers any GET path
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: crate::NAME.to_string(),
    })
}

/// Translate handler; any failure inside collapses to a bare 500
async fn translate(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    match handle_translate(&state, &body).await {
        Ok(response) => Json(response).into_response(),
        Err(e) => {
            warn!("Translation request failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Parse the body, dispatch on direction, and assemble the response
async fn handle_translate(state: &AppState, body: &[u8]) -> Result<TranslateResponse> {
    let request: TranslateRequest =
        serde_json::from_slice(body).map_err(|e| RelayError::RequestError {
            message: e.to_string(),
        })?;

    let result = match Direction::from_tag(&request.direction) {
        Some(direction) => state.translator(direction)?.translate(&request.text).await?,
        // Unknown directions pass the text through untouched
        None => request.text.clone(),
    };

    info!(
        "Translated '{}' -> '{}' ({})",
        request.text, result, request.direction
    );

    Ok(TranslateResponse {
        result,
        original: request.text,
        direction: request.direction,
    })
}

/// Build the relay router
///
/// Every path falls through to the same method router: GET is a health
/// check, POST is a translation.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new().fallback_service(get(health_check).post(translate).with_state(state))
}

/// Run the HTTP server
pub async fn run_server(config: RelayConfig) -> anyhow::Result<()> {
    let config = Arc::new(config);

    // Construction failure is logged and the server starts anyway; the
    // affected direction returns a 500 per request until remediated.
    let state = Arc::new(AppState::from_config(config.clone()));
    let app = build_router(state);

    let addr: SocketAddr = config.bind_addr().parse()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
