//! API Request Handlers

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    response::Html,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use super::types::*;
use crate::core::selector;
use crate::core::store::QuestionStore;
use crate::models::config::ServerConfig;
use crate::models::errors::{AppError, AppResult, ErrorCode};
use crate::models::types::{EnrichedQuestion, Topic};
use crate::utils::constants::APP_VERSION;
use crate::utils::telemetry::{TelemetryCollector, TelemetryStats};

/// Shared application state
pub struct AppState {
    pub store: QuestionStore,
    pub telemetry: Arc<TelemetryCollector>,
}

impl AppState {
    pub fn new(config: ServerConfig, telemetry: Arc<TelemetryCollector>) -> Self {
        Self {
            store: QuestionStore::new(config.data_path),
            telemetry,
        }
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

// ============================================
// Browser page
// ============================================

pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

// ============================================
// Health Check
// ============================================

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<ApiResponse<HealthData>> {
    let start = Instant::now();

    let data = HealthData {
        status: "healthy".to_string(),
        version: APP_VERSION.to_string(),
        uptime_seconds: state.telemetry.uptime_seconds(),
        question_bank_present: state.store.exists(),
    };

    Json(ApiResponse::success(data, elapsed_ms(start)))
}

// ============================================
// Stats
// ============================================

pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<ApiResponse<TelemetryStats>> {
    let start = Instant::now();
    Json(ApiResponse::success(
        state.telemetry.get_stats(),
        elapsed_ms(start),
    ))
}

// ============================================
// Topics
// ============================================

pub async fn list_topics() -> Json<ApiResponse<Vec<TopicInfo>>> {
    let start = Instant::now();
    let topics = Topic::ALL.into_iter().map(TopicInfo::from).collect();
    Json(ApiResponse::success(topics, elapsed_ms(start)))
}

// ============================================
// Questions
// ============================================

/// Filter, sample and enrich questions for one quiz round.
///
/// Responds with a bare JSON array; an empty array is a normal answer.
pub async fn get_questions(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QuestionsRequest>, JsonRejection>,
) -> AppResult<Json<Vec<EnrichedQuestion>>> {
    let start = Instant::now();

    let query = payload
        .map_err(|rejection| AppError::bad_request(rejection.body_text()))
        .and_then(|Json(request)| request.validate())
        .map_err(|e| {
            state.telemetry.record_rejection();
            warn!(code = e.code_str(), "Question request rejected: {}", e.message);
            e
        })?;

    // File read and sampling stay off the async workers; the thread-local
    // RNG never crosses an await this way
    let store = state.store.clone();
    let task_query = query.clone();
    let questions = tokio::task::spawn_blocking(move || {
        let table = store.load();
        let mut rng = rand::thread_rng();
        selector::select(
            &table.records,
            &task_query.topic,
            task_query.difficulty,
            task_query.num_questions,
            &mut rng,
        )
    })
    .await
    .map_err(|e| AppError::internal(format!("selection task failed: {}", e)))?;

    let latency = start.elapsed();
    state
        .telemetry
        .record_selection(query.num_questions, questions.len(), latency);

    info!(
        topic = %query.topic,
        difficulty = query.difficulty,
        requested = query.num_questions,
        served = questions.len(),
        latency_ms = latency.as_secs_f64() * 1000.0,
        "Questions served"
    );

    Ok(Json(questions))
}

// ============================================
// Fallback
// ============================================

pub async fn not_found() -> AppError {
    AppError::new(ErrorCode::ApiNotFound, "No such endpoint")
}
