//! Trend summaries from a text-generation service.
//!
//! Callers go through [`request_analysis`], which enforces the minimum sample
//! size before any request is made and bounds the call with a timeout. Every
//! failure after validation collapses into [`AnalysisError::Unavailable`];
//! the user sees one generic message, whatever went wrong.

mod gemini;
mod prompt;

pub use gemini::{
    parse_response, GeminiClient, GeminiError, DEFAULT_GEMINI_MODEL, DEFAULT_GEMINI_URL,
};
pub use prompt::build_prompt;

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use thiserror::Error;

use crate::models::{AnalysisResult, MoodLogEntry};

/// Fewest entries worth analyzing.
pub const MIN_ANALYSIS_SAMPLE: usize = 3;

pub const DEFAULT_ANALYSIS_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("at least {required} mood entries are needed for analysis, got {actual}")]
    Validation { required: usize, actual: usize },

    #[error("analysis unavailable: {0}")]
    Unavailable(String),
}

pub type AnalysisFuture<'a> =
    Pin<Box<dyn Future<Output = Result<AnalysisResult, AnalysisError>> + Send + 'a>>;

/// Something that can turn a mood log into an [`AnalysisResult`].
///
/// Implementations never see the store; they get a snapshot and must not
/// keep it.
pub trait TrendAnalyzer: Send + Sync {
    fn analyze<'a>(&'a self, entries: &'a [MoodLogEntry]) -> AnalysisFuture<'a>;
}

/// Validates the sample, then runs `analyzer` with a deadline.
pub async fn request_analysis(
    analyzer: &dyn TrendAnalyzer,
    entries: &[MoodLogEntry],
    timeout: Duration,
) -> Result<AnalysisResult, AnalysisError> {
    if entries.len() < MIN_ANALYSIS_SAMPLE {
        return Err(AnalysisError::Validation {
            required: MIN_ANALYSIS_SAMPLE,
            actual: entries.len(),
        });
    }

    tracing::info!(entries = entries.len(), "Requesting mood trend analysis");

    match tokio::time::timeout(timeout, analyzer.analyze(entries)).await {
        Ok(Ok(result)) => Ok(result),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "Mood trend analysis failed");
            Err(match e {
                AnalysisError::Validation { .. } => AnalysisError::Unavailable(e.to_string()),
                unavailable => unavailable,
            })
        }
        Err(_) => {
            tracing::warn!(timeout_secs = timeout.as_secs_f64(), "Mood trend analysis timed out");
            Err(AnalysisError::Unavailable("timed out".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use uuid::Uuid;

    use crate::models::MoodType;

    struct Stub {
        calls: AtomicUsize,
        delay: Duration,
        fail: bool,
    }

    impl Stub {
        fn new(delay: Duration, fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                delay,
                fail,
            }
        }
    }

    impl TrendAnalyzer for Stub {
        fn analyze<'a>(&'a self, _entries: &'a [MoodLogEntry]) -> AnalysisFuture<'a> {
            Box::pin(async move {
                self.calls.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(self.delay).await;
                if self.fail {
                    return Err(AnalysisError::Unavailable("quota exceeded".into()));
                }
                Ok(AnalysisResult {
                    summary: "steady".into(),
                    advice: "rest".into(),
                    dominant_color: "blue".into(),
                })
            })
        }
    }

    fn entries(n: usize) -> Vec<MoodLogEntry> {
        (0..n)
            .map(|i| MoodLogEntry {
                id: Uuid::new_v4(),
                mood_id: MoodType::Focus,
                timestamp: i as i64,
                note: None,
            })
            .collect()
    }

    #[tokio::test]
    async fn rejects_small_samples_before_calling() {
        let stub = Stub::new(Duration::ZERO, false);
        let err = request_analysis(&stub, &entries(2), DEFAULT_ANALYSIS_TIMEOUT)
            .await
            .unwrap_err();

        assert!(matches!(err, AnalysisError::Validation { required: 3, actual: 2 }));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn returns_analyzer_result() {
        let stub = Stub::new(Duration::ZERO, false);
        let result = request_analysis(&stub, &entries(3), DEFAULT_ANALYSIS_TIMEOUT)
            .await
            .unwrap();
        assert_eq!(result.dominant_color, "blue");
    }

    #[tokio::test]
    async fn failures_become_unavailable() {
        let stub = Stub::new(Duration::ZERO, true);
        let err = request_analysis(&stub, &entries(5), DEFAULT_ANALYSIS_TIMEOUT)
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Unavailable(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_analyzer_times_out() {
        let stub = Stub::new(Duration::from_secs(120), false);
        let err = request_analysis(&stub, &entries(3), Duration::from_secs(30))
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Unavailable(ref msg) if msg == "timed out"));
    }
}
