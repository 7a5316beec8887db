use chat_service::services::{GenerationBackend, GenerationParams, OllamaBackend, ProviderError};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn params(timeout: Duration) -> GenerationParams {
    GenerationParams {
        model: "phi3:mini".to_string(),
        temperature: 0.5,
        top_p: 0.5,
        max_tokens: 30,
        timeout,
    }
}

#[tokio::test]
async fn generate_posts_non_streaming_request_with_options() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_partial_json(json!({
            "model": "phi3:mini",
            "prompt": "Can I compost tea bags?",
            "stream": false,
            "options": {"temperature": 0.5, "top_p": 0.5, "num_predict": 30}
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"response": "  Yes, most of them.  ", "done": true})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let backend = OllamaBackend::new(server.uri()).unwrap();
    let reply = backend
        .generate("Can I compost tea bags?", &params(Duration::from_secs(5)))
        .await
        .unwrap();

    assert_eq!(reply, "Yes, most of them.");
}

#[tokio::test]
async fn missing_response_field_yields_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"done": true})))
        .mount(&server)
        .await;

    let backend = OllamaBackend::new(server.uri()).unwrap();
    let reply = backend
        .generate("hi", &params(Duration::from_secs(5)))
        .await
        .unwrap();

    assert_eq!(reply, "No response from model");
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(404).set_body_string("model 'phi3:mini' not found"))
        .mount(&server)
        .await;

    let backend = OllamaBackend::new(server.uri()).unwrap();
    let err = backend
        .generate("hi", &params(Duration::from_secs(5)))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ProviderError::Status {
            status: 404,
            body: "model 'phi3:mini' not found".to_string()
        }
    );
}

#[tokio::test]
async fn slow_backend_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"response": "late"}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let backend = OllamaBackend::new(server.uri()).unwrap();
    let err = backend
        .generate("hi", &params(Duration::from_millis(200)))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Timeout(_)), "{err:?}");
}

#[tokio::test]
async fn list_models_reads_tag_names() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "models": [{"name": "phi3:mini", "size": 1}, {"name": "llama3:8b"}]
        })))
        .mount(&server)
        .await;

    let backend = OllamaBackend::new(server.uri()).unwrap();
    let models = backend.list_models(Duration::from_secs(5)).await.unwrap();

    assert_eq!(models, vec!["phi3:mini", "llama3:8b"]);
}

#[tokio::test]
async fn garbage_body_is_an_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let backend = OllamaBackend::new(server.uri()).unwrap();
    let err = backend.list_models(Duration::from_secs(5)).await.unwrap_err();

    assert!(matches!(err, ProviderError::InvalidResponse(_)), "{err:?}");
}

#[tokio::test]
async fn stalled_connect_is_a_connection_failure() {
    // Non-routable address: the connect either stalls until the connect
    // timeout or fails immediately; both must read as a connection failure.
    let backend =
        OllamaBackend::with_connect_timeout("http://10.255.255.1:11434", Duration::from_millis(200))
            .unwrap();

    let err = backend
        .generate("hi", &params(Duration::from_secs(10)))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Connection(_)), "{err:?}");
}
