//! Integration tests for HttpBackend
//!
//! Runs the client against a minimal in-process HTTP server that answers a
//! single request with a canned response and records the request line.

use libvocab::backend::{http::HttpBackend, VocabularyBackend};
use libvocab::{AppVariant, BackendError, ValidationResult, Word};
use reqwest::Url;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Serve one response, returning the base URL and the captured request line
async fn serve_once(status: &str, body: &str) -> (Url, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\n\
         Content-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        let request = String::from_utf8_lossy(&buf).to_string();
        let request_line = request.lines().next().unwrap_or_default().to_string();
        let _ = tx.send(request_line);

        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    (Url::parse(&format!("http://{}", addr)).unwrap(), rx)
}

fn backend(base: Url, variant: AppVariant) -> HttpBackend {
    HttpBackend::new(base, "es", variant, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_fetch_word_decodes_payload() {
    let (base, request) = serve_once("200 OK", r#"{"word":"perro","id":5}"#).await;
    let word = backend(base, AppVariant::Workflow).fetch_word(5).await.unwrap();

    assert_eq!(word, Word::new(5, "perro"));
    assert_eq!(
        request.await.unwrap(),
        "GET /vocabularies?id=5&lang=es HTTP/1.1"
    );
}

#[tokio::test]
async fn test_plain_variant_uses_path_lookup() {
    let (base, request) = serve_once("200 OK", r#"{"word":"house","id":1}"#).await;
    let word = backend(base, AppVariant::Plain).fetch_word(1).await.unwrap();

    assert_eq!(word.text, "house");
    assert_eq!(request.await.unwrap(), "GET /vocabularies/1 HTTP/1.1");
}

#[tokio::test]
async fn test_validate_translation_sends_encoded_input() {
    let (base, request) = serve_once("200 OK", r#"{"text":"casa","correct":true}"#).await;
    let verdict = backend(base, AppVariant::Workflow)
        .validate_translation(1, "la casa")
        .await
        .unwrap();

    assert_eq!(verdict, ValidationResult::new("casa", true));
    assert_eq!(
        request.await.unwrap(),
        "GET /validation?lang=es&input=la+casa&word-id=1 HTTP/1.1"
    );
}

#[tokio::test]
async fn test_missing_field_is_decode_error() {
    let (base, _request) = serve_once("200 OK", r#"{"id":5}"#).await;
    let err = backend(base, AppVariant::Workflow)
        .fetch_word(5)
        .await
        .unwrap_err();

    assert!(matches!(err, BackendError::Decode(_)));
}

#[tokio::test]
async fn test_malformed_verdict_is_decode_error() {
    let (base, _request) = serve_once("200 OK", r#"{"text":"casa","correct":"yes"}"#).await;
    let err = backend(base, AppVariant::Workflow)
        .validate_translation(1, "casa")
        .await
        .unwrap_err();

    assert!(matches!(err, BackendError::Decode(_)));
}

#[tokio::test]
async fn test_non_success_status_is_reported() {
    let (base, _request) = serve_once("404 Not Found", r#"{"error":"no such word"}"#).await;
    let err = backend(base, AppVariant::Workflow)
        .fetch_word(999)
        .await
        .unwrap_err();

    assert_eq!(err, BackendError::Status { status: 404 });
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Bind then drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let base = Url::parse(&format!("http://{}", addr)).unwrap();
    let err = backend(base, AppVariant::Workflow)
        .fetch_word(1)
        .await
        .unwrap_err();

    assert!(matches!(err, BackendError::Network(_)));
}
