mod handlers;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::analysis::{TrendAnalyzer, DEFAULT_ANALYSIS_TIMEOUT};
use crate::models::Language;
use crate::store::{LogStore, Preferences};

/// Shared handler state. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub store: LogStore,
    pub preferences: Preferences,
    pub analyzer: Arc<dyn TrendAnalyzer>,
    pub analysis_timeout: Duration,
    /// Used when a request does not name a language.
    pub language: Language,
}

impl AppState {
    pub fn new(store: LogStore, preferences: Preferences, analyzer: Arc<dyn TrendAnalyzer>) -> Self {
        Self {
            store,
            preferences,
            analyzer,
            analysis_timeout: DEFAULT_ANALYSIS_TIMEOUT,
            language: Language::default(),
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_analysis_timeout(mut self, timeout: Duration) -> Self {
        self.analysis_timeout = timeout;
        self
    }
}

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        // Catalog
        .route("/moods", get(handlers::list_moods))
        // Mood log
        .route(
            "/logs",
            get(handlers::list_logs)
                .post(handlers::record_mood)
                .delete(handlers::clear_logs),
        )
        .route("/logs/{id}/note", put(handlers::attach_note))
        // Derived views
        .route("/views/frequency", get(handlers::frequency))
        .route("/views/timeline", get(handlers::timeline))
        .route("/dashboard", get(handlers::dashboard))
        // Trend analysis
        .route("/analysis", post(handlers::analyze))
        // Preferences
        .route(
            "/preferences/notifications",
            get(handlers::get_notifications).put(handlers::set_notifications),
        )
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
