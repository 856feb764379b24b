use std::process::Output;

use emotion_docs::client::services::prediction_service::GENERIC_FAILURE_MESSAGE;
use tokio::net::TcpListener;
use tokio::process::Command;

mod common;
use common::one_shot_server;

async fn run_cli(api_url: &str, sentence: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_emotion-cli"))
        .arg(sentence)
        .env("EMOTION_API_URL", api_url)
        .env("EMOTION_API_PREDICT_PATH", "/predict")
        .env("LOG_LEVEL", "off")
        .env_remove("HTTP_PROXY")
        .env_remove("http_proxy")
        .env_remove("ALL_PROXY")
        .env_remove("all_proxy")
        .output()
        .await
        .unwrap()
}

#[tokio::test]
async fn unreachable_api_exits_non_zero() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let output = run_cli(&format!("http://{}", addr), "is anyone there").await;
    assert!(!output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stderr).trim_end(), GENERIC_FAILURE_MESSAGE);
    assert!(output.stdout.is_empty());
}

#[tokio::test]
async fn prints_pretty_result_and_exits_zero() {
    let (url, server) = one_shot_server("200 OK", r#"{"a":1}"#).await;
    let base = url.trim_end_matches("/predict").to_string();

    let output = run_cli(&base, "all good").await;
    let captured = server.await.unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "{\n  \"a\": 1\n}\n");
    let sent: serde_json::Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(sent, serde_json::json!({"sentence": "all good"}));
}

#[tokio::test]
async fn invalid_endpoint_is_rejected() {
    let output = run_cli("not a url", "hello").await;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid prediction endpoint"));
}
