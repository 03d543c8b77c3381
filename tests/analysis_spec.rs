use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    response::IntoResponse,
    Json, Router,
};
use emotional_hue::analysis::{request_analysis, AnalysisError, GeminiClient};
use emotional_hue::models::*;
use serde_json::{json, Value};
use uuid::Uuid;

/// A request as the mock Gemini endpoint saw it.
#[derive(Debug, Clone)]
struct Captured {
    path: String,
    api_key: Option<String>,
    body: Value,
}

#[derive(Clone)]
struct Mock {
    status: StatusCode,
    reply: Value,
    delay: Duration,
    requests: Arc<Mutex<Vec<Captured>>>,
}

async fn generate_content(
    State(mock): State<Mock>,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    mock.requests.lock().unwrap().push(Captured {
        path: uri.path().to_string(),
        api_key: headers
            .get("x-goog-api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });
    tokio::time::sleep(mock.delay).await;
    (mock.status, Json(mock.reply))
}

/// Serves `mock` on an ephemeral port and returns its base URL.
async fn serve(mock: Mock) -> String {
    let app = Router::new().fallback(generate_content).with_state(mock);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock server");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });
    format!("http://{}/v1beta", addr)
}

fn mock(status: StatusCode, reply: Value) -> Mock {
    Mock {
        status,
        reply,
        delay: Duration::ZERO,
        requests: Arc::new(Mutex::new(Vec::new())),
    }
}

fn candidate(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] }
        }]
    })
}

fn entries(count: usize) -> Vec<MoodLogEntry> {
    (0..count)
        .map(|i| MoodLogEntry {
            id: Uuid::new_v4(),
            mood_id: MoodType::ALL[i % 8],
            timestamp: 1_735_787_045_000 - (i as i64) * 60_000,
            note: None,
        })
        .collect()
}

const TIMEOUT: Duration = Duration::from_secs(5);

mod gemini {
    use super::*;

    #[tokio::test]
    async fn returns_parsed_analysis() {
        let server = mock(
            StatusCode::OK,
            candidate(r#"{"summary":"Mostly focused","advice":"Take breaks","dominantColor":"blue"}"#),
        );
        let requests = server.requests.clone();
        let base = serve(server).await;
        let client = GeminiClient::new(base, Some("secret".into()), "test-model")
            .with_language(Language::En);

        let result = request_analysis(&client, &entries(3), TIMEOUT)
            .await
            .expect("Analysis failed");

        assert_eq!(
            result,
            AnalysisResult {
                summary: "Mostly focused".into(),
                advice: "Take breaks".into(),
                dominant_color: "blue".into(),
            }
        );

        let requests = requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, "/v1beta/models/test-model:generateContent");
        assert_eq!(requests[0].api_key.as_deref(), Some("secret"));
    }

    #[tokio::test]
    async fn sends_prompt_and_response_schema() {
        let server = mock(
            StatusCode::OK,
            candidate(r#"{"summary":"s","advice":"a","dominantColor":"red"}"#),
        );
        let requests = server.requests.clone();
        let base = serve(server).await;
        let client = GeminiClient::new(base, Some("secret".into()), "test-model")
            .with_language(Language::En);

        request_analysis(&client, &entries(3), TIMEOUT)
            .await
            .expect("Analysis failed");

        let body = requests.lock().unwrap()[0].body.clone();
        let prompt = body["contents"][0]["parts"][0]["text"]
            .as_str()
            .expect("No prompt text");
        assert!(prompt.contains(": Focus"));
        assert!(prompt.contains(": Excited"));
        assert!(prompt.contains(": Calm"));
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(
            body["generationConfig"]["responseSchema"]["required"],
            json!(["summary", "advice", "dominantColor"])
        );
    }

    #[tokio::test]
    async fn error_status_is_unavailable() {
        let base = serve(mock(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "error": { "message": "boom" } }),
        ))
        .await;
        let client = GeminiClient::new(base, Some("secret".into()), "test-model");

        let result = request_analysis(&client, &entries(4), TIMEOUT).await;

        assert!(matches!(result, Err(AnalysisError::Unavailable(_))));
    }

    #[tokio::test]
    async fn malformed_text_is_unavailable() {
        let base = serve(mock(StatusCode::OK, candidate("Sorry, I can't help with that."))).await;
        let client = GeminiClient::new(base, Some("secret".into()), "test-model");

        let result = request_analysis(&client, &entries(3), TIMEOUT).await;

        assert!(matches!(result, Err(AnalysisError::Unavailable(_))));
    }

    #[tokio::test]
    async fn missing_api_key_never_calls_the_service() {
        let server = mock(StatusCode::OK, candidate("{}"));
        let requests = server.requests.clone();
        let base = serve(server).await;
        let client = GeminiClient::new(base, None, "test-model");

        let result = request_analysis(&client, &entries(3), TIMEOUT).await;

        assert!(matches!(result, Err(AnalysisError::Unavailable(_))));
        assert!(requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn too_few_entries_never_calls_the_service() {
        let server = mock(StatusCode::OK, candidate("{}"));
        let requests = server.requests.clone();
        let base = serve(server).await;
        let client = GeminiClient::new(base, Some("secret".into()), "test-model");

        let result = request_analysis(&client, &entries(2), TIMEOUT).await;

        assert!(matches!(
            result,
            Err(AnalysisError::Validation { required: 3, actual: 2 })
        ));
        assert!(requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn slow_service_times_out() {
        let mut server = mock(
            StatusCode::OK,
            candidate(r#"{"summary":"s","advice":"a","dominantColor":"red"}"#),
        );
        server.delay = Duration::from_secs(2);
        let base = serve(server).await;
        let client = GeminiClient::new(base, Some("secret".into()), "test-model");

        let result = request_analysis(&client, &entries(3), Duration::from_millis(100)).await;

        assert!(matches!(result, Err(AnalysisError::Unavailable(_))));
    }
}
