use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use httpmock::prelude::*;
use serde_json::{Value, json};

use chemgpt_spectro::handlers::build_router;
use chemgpt_spectro::infer::OpenAiClient;
use chemgpt_spectro::prompts::PromptRevision;
use chemgpt_spectro::state::{AppState, SpectraBackend};

const REPORT: &str = "# Spectroscopy report for benzene\n\n\
    | Wavenumber (cm-1) | Assignment | Intensity | Confidence |\n\
    |---|---|---|---|\n\
    | 3030 | aromatic C-H stretch | medium | high |";

fn dummy_server() -> TestServer {
    let state = Arc::new(AppState::new(SpectraBackend::Dummy));
    TestServer::new(build_router(state)).unwrap()
}

fn delegated_server(upstream: &MockServer) -> TestServer {
    let client = OpenAiClient::new(
        "test-key".into(),
        upstream.base_url().into(),
        "gpt-4o-mini".into(),
    );
    let state = Arc::new(AppState::new(SpectraBackend::OpenAi {
        client,
        revision: PromptRevision::default(),
    }));
    TestServer::new(build_router(state)).unwrap()
}

#[tokio::test]
async fn health_reports_the_service_alive() {
    let server = dummy_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({
            "status": "ok",
            "service": "chemgpt-spectro",
            "message": "Spectroscopy microservice is alive!",
        })
    );
}

#[tokio::test]
async fn dummy_backend_returns_the_canned_peaks() {
    let server = dummy_server();

    let response = server
        .post("/spectroscopy")
        .json(&json!({"molecule": "benzene"}))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({
            "molecule": "benzene",
            "uv": { "peaks": [{ "wavelength": 254, "intensity": "high" }] },
            "ir": { "peaks": [{ "wavenumber": 1600, "intensity": "strong" }] },
            "message": "Spectra generated (dummy response)",
        })
    );
}

#[tokio::test]
async fn dummy_backend_ignores_molecule_identity() {
    let server = dummy_server();

    let by_name = server
        .post("/spectroscopy")
        .json(&json!({"molecule": "caffeine"}))
        .await
        .json::<Value>();
    let by_smiles = server
        .post("/spectroscopy")
        .json(&json!({"molecule": "C1=CC=CC=C1"}))
        .await
        .json::<Value>();

    assert_eq!(by_name["uv"], by_smiles["uv"]);
    assert_eq!(by_name["ir"], by_smiles["ir"]);
    assert_eq!(by_name["molecule"], "caffeine");
    assert_eq!(by_smiles["molecule"], "C1=CC=CC=C1");
}

#[tokio::test]
async fn blank_molecule_is_rejected() {
    let server = dummy_server();

    for body in [
        json!({}),
        json!({"molecule": ""}),
        json!({"molecule": " \t\n "}),
    ] {
        let response = server.post("/spectroscopy").json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let detail = response.json::<Value>();
        assert!(
            detail["detail"].as_str().unwrap().contains("required"),
            "body {} produced detail {}",
            body,
            detail
        );
    }
}

#[tokio::test]
async fn delegated_mode_relays_the_completion() {
    let upstream = MockServer::start();
    let completion = upstream.mock(|when, then| {
        when.method(POST)
            .path("/v1/chat/completions")
            .header("authorization", "Bearer test-key")
            .json_body_partial(
                r#"{"model": "gpt-4o-mini", "temperature": 0.0, "max_tokens": 1500}"#,
            )
            .body_contains("benzene")
            .body_contains("Follow-up questions");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "choices": [{"message": {"role": "assistant", "content": REPORT}}]
            }));
    });

    let server = delegated_server(&upstream);
    let response = server
        .post("/spectroscopy")
        .json(&json!({"molecule": "benzene"}))
        .await;

    completion.assert();
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["molecule"], "benzene");
    assert_eq!(body["spectra_markdown"], REPORT);
    assert_eq!(body["source"], "openai");
}

#[tokio::test]
async fn upstream_error_detail_reaches_the_client() {
    let upstream = MockServer::start();
    let completion = upstream.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(429).json_body(json!({
            "error": {"message": "You exceeded your current quota", "type": "insufficient_quota"}
        }));
    });

    let server = delegated_server(&upstream);
    let response = server
        .post("/spectroscopy")
        .json(&json!({"molecule": "benzene"}))
        .await;

    completion.assert();
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let detail = response.json::<Value>();
    let detail = detail["detail"].as_str().unwrap();
    assert!(detail.contains("Spectroscopy generation failed"), "detail: {detail}");
    assert!(detail.contains("You exceeded your current quota"), "detail: {detail}");
}

#[tokio::test]
async fn unparseable_upstream_reply_is_a_server_error() {
    let upstream = MockServer::start();
    upstream.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(200).body("<html>bad gateway</html>");
    });

    let server = delegated_server(&upstream);
    let response = server
        .post("/spectroscopy")
        .json(&json!({"molecule": "benzene"}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn unreachable_upstream_is_a_server_error() {
    // Nothing listens on port 1; the connection is refused immediately.
    let client = OpenAiClient::new("test-key".into(), "http://127.0.0.1:1".into(), "gpt-4o-mini".into());
    let state = Arc::new(AppState::new(SpectraBackend::OpenAi {
        client,
        revision: PromptRevision::default(),
    }));
    let server = TestServer::new(build_router(state)).unwrap();

    let response = server
        .post("/spectroscopy")
        .json(&json!({"molecule": "benzene"}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let detail = response.json::<Value>();
    assert!(detail["detail"].as_str().unwrap().contains("Request failed"));
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let server = dummy_server();

    let preflight = server
        .method(axum::http::Method::OPTIONS, "/spectroscopy")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("https://chemgpt.example"),
        )
        .add_header(
            HeaderName::from_static("access-control-request-method"),
            HeaderValue::from_static("POST"),
        )
        .add_header(
            HeaderName::from_static("access-control-request-headers"),
            HeaderValue::from_static("content-type"),
        )
        .await;

    preflight.assert_status_ok();
    assert_eq!(
        preflight.headers().get("access-control-allow-origin"),
        Some(&HeaderValue::from_static("*"))
    );

    let response = server
        .post("/spectroscopy")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("https://chemgpt.example"),
        )
        .json(&json!({"molecule": "benzene"}))
        .await;

    assert_eq!(
        response.headers().get("access-control-allow-origin"),
        Some(&HeaderValue::from_static("*"))
    );
}
