// ReelForge Dashboard Server
// Copyright (c) 2026 Xing_The_Creator | ReelForge

use anyhow::Context;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};
use uuid::Uuid;

use crate::catalog::{option_catalog, OptionCatalog};
use crate::config::ServerConfig;
use crate::content_engine::GenerationRequest;
use crate::error::{ApiError, ApiResult};
use crate::queue::{QueueStats, VideoItem};
use crate::state::AppState;

#[derive(Serialize)]
pub struct CreateVideoResponse {
    pub success: bool,
    pub video: VideoItem,
}

#[derive(Serialize)]
pub struct VideosResponse {
    pub videos: Vec<VideoItem>,
}

#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Deserialize)]
pub struct DeleteParams {
    pub id: Option<String>,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/generate-video", post(create_video))
        .route("/api/videos", get(list_videos).delete(delete_video))
        .route("/api/videos/stats", get(video_stats))
        .route("/api/options", get(list_options))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start_server(config: &ServerConfig, state: AppState) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    let display_addr = if addr.ip().is_unspecified() {
        format!("127.0.0.1:{}", addr.port())
    } else {
        addr.to_string()
    };
    info!("🚀 ReelForge server running on http://{}", display_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("[SERVER] Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("[SERVER] Failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
}

async fn health() -> &'static str {
    "ok"
}

// ─── Video Handlers ───────────────────────────────────────────────────────────

async fn create_video(
    State(state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> ApiResult<Json<CreateVideoResponse>> {
    let Json(request) = payload.map_err(|e| ApiError::MalformedRequest(e.body_text()))?;
    validate_request(&request)?;

    info!(
        "[SERVER] Generating video: {} / {}",
        request.niche, request.topic
    );

    let engine = state.engine.clone();
    let task_request = request.clone();
    let content = tokio::task::spawn_blocking(move || engine.generate(&task_request))
        .await
        .context("content generation task failed")?;

    let video = VideoItem::new(request, content);
    state.queue.append(video.clone());

    Ok(Json(CreateVideoResponse {
        success: true,
        video,
    }))
}

fn validate_request(request: &GenerationRequest) -> ApiResult<()> {
    if request.niche.trim().is_empty() {
        return Err(ApiError::MalformedRequest("niche must not be empty".into()));
    }
    if request.topic.trim().is_empty() {
        return Err(ApiError::MalformedRequest("topic must not be empty".into()));
    }
    Ok(())
}

async fn list_videos(State(state): State<AppState>) -> Json<VideosResponse> {
    Json(VideosResponse {
        videos: state.queue.list(),
    })
}

/// Deleting an id that is not queued still succeeds.
async fn delete_video(
    State(state): State<AppState>,
    params: Result<Query<DeleteParams>, QueryRejection>,
) -> ApiResult<Json<SuccessResponse>> {
    let Query(params) = params.map_err(|e| ApiError::MalformedRequest(e.body_text()))?;
    let raw_id = params
        .id
        .filter(|id| !id.trim().is_empty())
        .ok_or(ApiError::MissingId)?;

    match Uuid::parse_str(raw_id.trim()) {
        Ok(id) => {
            state.queue.remove_by_id(&id);
        }
        Err(_) => debug!("[SERVER] Delete for non-UUID id {:?}, nothing to remove", raw_id),
    }

    Ok(Json(SuccessResponse { success: true }))
}

async fn video_stats(State(state): State<AppState>) -> Json<QueueStats> {
    Json(state.queue.stats())
}

async fn list_options() -> Json<OptionCatalog> {
    Json(option_catalog())
}
