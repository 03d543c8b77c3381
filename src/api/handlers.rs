use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AppState;
use crate::analysis::{request_analysis, AnalysisError};
use crate::journal::{self, Dashboard};
use crate::locale;
use crate::models::*;
use crate::store::{StoreError, DEFAULT_WINDOW_DAYS};
use crate::views::{self, DEFAULT_TIMELINE_LIMIT};

type ApiResult<T> = Result<T, (StatusCode, String)>;

// ============================================================
// Error Handling
// ============================================================

/// Maps store failures to a status. Write failures are logged in full and
/// reported to the client without internals.
fn store_error(e: StoreError) -> (StatusCode, String) {
    match e {
        StoreError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            format!("Mood log entry not found: {}", id),
        ),
        other => {
            tracing::error!("Store error: {}", other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to save mood log".to_string(),
            )
        }
    }
}

fn analysis_error(e: AnalysisError, language: Language) -> (StatusCode, String) {
    let text = locale::text(language);
    match e {
        AnalysisError::Validation { .. } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            text.analysis_too_few.to_string(),
        ),
        AnalysisError::Unavailable(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            text.analysis_unavailable.to_string(),
        ),
    }
}

// ============================================================
// Query Types
// ============================================================

#[derive(Debug, Deserialize)]
pub struct LogsQuery {
    /// Restrict to the last N days; all entries when absent.
    pub days: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct ViewQuery {
    pub days: Option<u32>,
    pub lang: Option<Language>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NotificationPreference {
    pub enabled: bool,
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Catalog
// ============================================================

pub async fn list_moods() -> Json<&'static [MoodDefinition]> {
    Json(&MOODS[..])
}

// ============================================================
// Mood Log
// ============================================================

pub async fn list_logs(
    State(state): State<AppState>,
    Query(query): Query<LogsQuery>,
) -> Json<Vec<MoodLogEntry>> {
    Json(match query.days {
        Some(days) => state.store.list_recent(days),
        None => state.store.list_all(),
    })
}

pub async fn record_mood(
    State(state): State<AppState>,
    Json(input): Json<RecordMoodInput>,
) -> ApiResult<(StatusCode, Json<MoodLogEntry>)> {
    journal::log_mood(&state.store, input.mood_id, input.note.as_deref())
        .map(|entry| (StatusCode::CREATED, Json(entry)))
        .map_err(store_error)
}

/// Blank notes are skipped and the unchanged log is returned.
pub async fn attach_note(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<AttachNoteInput>,
) -> ApiResult<Json<Vec<MoodLogEntry>>> {
    match journal::save_note(&state.store, id, &input.note).map_err(store_error)? {
        Some(entries) => Ok(Json(entries)),
        None => Ok(Json(state.store.list_all())),
    }
}

pub async fn clear_logs(State(state): State<AppState>) -> ApiResult<StatusCode> {
    state
        .store
        .clear_all()
        .map(|()| StatusCode::NO_CONTENT)
        .map_err(store_error)
}

// ============================================================
// Derived Views
// ============================================================

pub async fn frequency(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> Json<Vec<MoodFrequency>> {
    let entries = state
        .store
        .list_recent(query.days.unwrap_or(DEFAULT_WINDOW_DAYS));
    Json(views::frequency_by_mood(
        &entries,
        query.lang.unwrap_or(state.language),
    ))
}

pub async fn timeline(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> Json<Vec<MoodLogEntry>> {
    let entries = state
        .store
        .list_recent(query.days.unwrap_or(DEFAULT_WINDOW_DAYS));
    Json(views::recent_timeline_slice(
        &entries,
        query.limit.unwrap_or(DEFAULT_TIMELINE_LIMIT),
    ))
}

pub async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> Json<Dashboard> {
    Json(journal::dashboard(
        &state.store,
        query.lang.unwrap_or(state.language),
        query.days.unwrap_or(DEFAULT_WINDOW_DAYS),
        query.limit.unwrap_or(DEFAULT_TIMELINE_LIMIT),
    ))
}

// ============================================================
// Trend Analysis
// ============================================================

pub async fn analyze(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> ApiResult<Json<AnalysisResult>> {
    let language = query.lang.unwrap_or(state.language);
    let entries = state
        .store
        .list_recent(query.days.unwrap_or(DEFAULT_WINDOW_DAYS));

    request_analysis(state.analyzer.as_ref(), &entries, state.analysis_timeout)
        .await
        .map(Json)
        .map_err(|e| analysis_error(e, language))
}

// ============================================================
// Preferences
// ============================================================

pub async fn get_notifications(State(state): State<AppState>) -> Json<NotificationPreference> {
    Json(NotificationPreference {
        enabled: state.preferences.notifications_enabled(),
    })
}

pub async fn set_notifications(
    State(state): State<AppState>,
    Json(input): Json<NotificationPreference>,
) -> ApiResult<Json<NotificationPreference>> {
    state
        .preferences
        .set_notifications(input.enabled)
        .map_err(store_error)?;
    Ok(Json(input))
}
