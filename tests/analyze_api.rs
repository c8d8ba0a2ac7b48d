//! End-to-end: HTTP gateway -> classifier -> OpenAI adapter -> mock provider.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use moodlens::adapters::ai::OpenAiAdapter;
use moodlens::adapters::http::{AppState, create_router};
use moodlens::domain::{AnalysisResult, Emotion};
use moodlens::ports::LanguageModelPort;
use moodlens::usecases::MoodClassifier;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COMPLETIONS: &str = "/v1/chat/completions";

fn router_for(server: &MockServer, timeout: Duration) -> Router {
    let adapter: Arc<dyn LanguageModelPort> = Arc::new(
        OpenAiAdapter::new(
            format!("{}{}", server.uri(), COMPLETIONS),
            "sk-test".to_string(),
            "gpt-4o-mini".to_string(),
            timeout,
        )
        .unwrap(),
    );
    let classifier = MoodClassifier::new(Some(adapter), timeout);
    create_router(AppState::new(Arc::new(classifier)), 16 * 1024)
}

fn completion(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "choices": [{ "message": { "role": "assistant", "content": content } }]
    }))
}

async fn analyze(router: Router, text: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/analyze")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "text": text }).to_string()))
        .unwrap();
    let response = router.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn assert_valid(v: &Value) {
    let result: AnalysisResult = serde_json::from_value(v.clone()).unwrap();
    assert!(result.validate().is_ok(), "invalid result: {}", v);
}

#[tokio::test]
async fn test_model_answer_is_returned() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COMPLETIONS))
        .respond_with(completion(
            r##"Sure, here it is: {"emotion":"calm","confidence":0.91,"message":"You sound settled.","action":"Enjoy a slow cup of tea","color":"#A0E7E5","tag":"stillness"}"##,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let (status, v) = analyze(router_for(&server, Duration::from_secs(2)), "quiet evening").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["emotion"], "calm");
    assert_eq!(v["tag"], "stillness");
    assert_eq!(v["color"], "#A0E7E5");
    assert_valid(&v);
}

#[tokio::test]
async fn test_provider_500_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let (status, v) = analyze(
        router_for(&server, Duration::from_secs(2)),
        "I can't sleep, stressed about my exam",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["emotion"], "anxious");
    assert_eq!(v["confidence"], 0.65);
    assert_eq!(v["tag"], "anxiety-relief");
}

#[tokio::test]
async fn test_garbage_and_incomplete_answers_fall_back() {
    for content in [
        "",
        "I cannot help with that.",
        r#"{"emotion":"happy","confidence":0.9,"message":"Yay"}"#,
        r##"{"emotion":"ecstatic","confidence":0.9,"message":"m","action":"a","color":"#FFFFFF","tag":"t"}"##,
    ] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(completion(content))
            .mount(&server)
            .await;

        let (status, v) = analyze(
            router_for(&server, Duration::from_secs(2)),
            "just got an amazing offer!!",
        )
        .await;
        assert_eq!(status, StatusCode::OK, "content: {:?}", content);
        assert_eq!(v["emotion"], "happy");
        assert_eq!(v["confidence"], 0.7);
        assert_eq!(v["tag"], "celebration");
    }
}

#[tokio::test]
async fn test_slow_provider_times_out_to_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(completion("{}").set_delay(Duration::from_millis(800)))
        .mount(&server)
        .await;

    let (status, v) = analyze(
        router_for(&server, Duration::from_millis(100)),
        "feeling lonely",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["emotion"], "sad");
    assert_valid(&v);
}

#[tokio::test]
async fn test_fallback_results_always_valid() {
    let router = create_router(
        AppState::new(Arc::new(MoodClassifier::fallback_only())),
        16 * 1024,
    );
    let samples = [
        "a",
        "so ANGRY right now",
        "tranquil",
        "nothing to report",
        "Lost my keys, missed the bus",
        "ünïcödé feelings 🙂",
    ];
    for text in samples {
        let (status, v) = analyze(router.clone(), text).await;
        assert_eq!(status, StatusCode::OK);
        assert_valid(&v);
        let emotion: Emotion = serde_json::from_value(v["emotion"].clone()).unwrap();
        assert!(Emotion::ALL.contains(&emotion));
    }
}
