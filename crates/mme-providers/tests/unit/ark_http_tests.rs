//! Ark HTTP transport tests against a mock server

use std::sync::Arc;
use std::time::Duration;

use mme_domain::Error;
use mme_domain::ports::{EmbeddingProvider, MultimodalEmbeddingTransport};
use mme_domain::value_objects::{EmbeddingConfig, EmbeddingInput};
use mme_providers::diagnostics::MemoryDiagnosticSink;
use mme_providers::embedding::ArkEmbeddingProvider;
use mme_providers::transport::ArkHttpTransport;
use mockito::{Matcher, Server};
use serde_json::json;

const MODEL: &str = "doubao-embedding-vision-250615";
const PATH: &str = "/embeddings/multimodal";

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("client should build")
}

fn transport_for(server: &Server) -> ArkHttpTransport {
    ArkHttpTransport::new(
        Some("test-key"),
        Some(server.url()),
        Duration::from_secs(5),
        client(),
    )
    .expect("transport should build")
}

#[test]
fn test_default_endpoint() -> Result<(), Box<dyn std::error::Error>> {
    let transport = ArkHttpTransport::new(Some("k"), None, Duration::from_secs(30), client())?;

    assert_eq!(transport.base_url(), "https://ark.cn-beijing.volces.com/api/v3");
    assert_eq!(
        transport.endpoint(),
        "https://ark.cn-beijing.volces.com/api/v3/embeddings/multimodal"
    );
    assert_eq!(transport.timeout(), Duration::from_secs(30));
    Ok(())
}

#[test]
fn test_custom_base_url_is_trimmed() -> Result<(), Box<dyn std::error::Error>> {
    let transport = ArkHttpTransport::new(
        Some("k"),
        Some("  https://ark.example.com/api/v3/ ".to_string()),
        Duration::from_secs(30),
        client(),
    )?;

    assert_eq!(transport.base_url(), "https://ark.example.com/api/v3");
    assert_eq!(
        transport.endpoint(),
        "https://ark.example.com/api/v3/embeddings/multimodal"
    );
    Ok(())
}

#[test]
fn test_missing_api_key_is_configuration_error() {
    for key in [None, Some(""), Some("   ")] {
        let result = ArkHttpTransport::new(key, None, Duration::from_secs(30), client());
        assert!(
            matches!(result, Err(Error::Configuration { .. })),
            "key {key:?} should be rejected"
        );
    }
}

#[test]
fn test_from_config_uses_timeout_and_base() -> Result<(), Box<dyn std::error::Error>> {
    let config = EmbeddingConfig::new("ark")
        .with_api_key("k")
        .with_api_base("http://localhost:9999/api/v3")
        .with_timeout_secs(7);

    let transport = ArkHttpTransport::from_config(&config)?;

    assert_eq!(transport.base_url(), "http://localhost:9999/api/v3");
    assert_eq!(transport.timeout(), Duration::from_secs(7));
    Ok(())
}

#[tokio::test]
async fn test_request_shape_and_list_response() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_header("authorization", "Bearer test-key")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "model": MODEL,
            "input": [
                {"type": "text", "text": "a red bicycle"},
                {"type": "image_url", "image_url": {"url": "https://example.com/bike.jpg"}}
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "req-1",
                "model": MODEL,
                "object": "list",
                "data": [
                    {"object": "embedding", "index": 0, "embedding": [0.1, 0.2]},
                    {"object": "embedding", "index": 1, "embedding": [0.3, 0.4]}
                ],
                "usage": {"prompt_tokens": 12, "total_tokens": 12}
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let transport = transport_for(&server);
    let items = vec![
        EmbeddingInput::text("a red bicycle"),
        EmbeddingInput::image_url("https://example.com/bike.jpg"),
    ];
    let response = transport.create_multimodal_embedding(MODEL, &items).await?;

    mock.assert_async().await;
    assert_eq!(response.id.as_deref(), Some("req-1"));
    assert_eq!(response.data.len(), 2);
    assert!(!response.data.is_single());
    let usage = response.usage.expect("usage should be parsed");
    assert_eq!(usage.total_tokens, 12);
    Ok(())
}

#[tokio::test]
async fn test_scalar_response_is_parsed() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"data": {"object": "embedding", "embedding": [0.5, 0.6]}}).to_string())
        .create_async()
        .await;

    let transport = transport_for(&server);
    let response = transport
        .create_multimodal_embedding(MODEL, &[EmbeddingInput::text("c")])
        .await?;

    assert!(response.data.is_single());
    let records = response.data.into_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].embedding, vec![0.5, 0.6]);
    Ok(())
}

#[tokio::test]
async fn test_http_errors_map_to_transport_errors() {
    let cases = [
        (401, "authentication failed"),
        (403, "authentication failed"),
        (429, "rate limit exceeded"),
        (500, "server error (500)"),
        (400, "request failed (400)"),
    ];

    for (status, expected) in cases {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .with_status(status)
            .with_body("upstream says no")
            .create_async()
            .await;

        let err = transport_for(&server)
            .create_multimodal_embedding(MODEL, &[EmbeddingInput::text("a")])
            .await
            .unwrap_err();

        assert!(err.is_transport(), "status {status}");
        let message = err.to_string();
        assert!(message.contains(expected), "status {status}: {message}");
        assert!(message.contains("upstream says no"), "status {status}: {message}");
    }
}

#[tokio::test]
async fn test_malformed_body_is_transport_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"object": "list"}"#)
        .create_async()
        .await;

    let err = transport_for(&server)
        .create_multimodal_embedding(MODEL, &[EmbeddingInput::text("a")])
        .await
        .unwrap_err();

    assert!(err.is_transport());
    assert!(err.to_string().contains("response parse failed"));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let transport = ArkHttpTransport::new(
        Some("k"),
        Some("http://127.0.0.1:1".to_string()),
        Duration::from_secs(2),
        client(),
    )
    .expect("transport should build");

    let err = transport
        .create_multimodal_embedding(MODEL, &[EmbeddingInput::text("a")])
        .await
        .unwrap_err();

    assert!(err.is_transport());
}

#[tokio::test]
async fn test_provider_over_http_chunks_and_concatenates() -> Result<(), Box<dyn std::error::Error>>
{
    let mut server = Server::new_async().await;
    let first = server
        .mock("POST", PATH)
        .match_body(Matcher::Json(json!({
            "model": MODEL,
            "input": [{"type": "text", "text": "a"}, {"type": "text", "text": "b"}]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"data": [{"embedding": [0.1, 0.2]}, {"embedding": [0.3, 0.4]}]}).to_string(),
        )
        .expect(1)
        .create_async()
        .await;
    let second = server
        .mock("POST", PATH)
        .match_body(Matcher::Json(json!({
            "model": MODEL,
            "input": [{"type": "text", "text": "c"}]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"data": {"embedding": [0.5, 0.6]}}).to_string())
        .expect(1)
        .create_async()
        .await;

    let provider = ArkEmbeddingProvider::new(
        EmbeddingConfig::new("ark").with_chunk_size(2),
        Arc::new(transport_for(&server)),
        Arc::new(MemoryDiagnosticSink::new()),
    )?;
    let texts = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let result = provider.embed_text(&texts).await?;

    first.assert_async().await;
    second.assert_async().await;
    assert_eq!(result, vec![vec![0.1, 0.2], vec![0.3, 0.4], vec![0.5, 0.6]]);
    Ok(())
}
