use daihon_core::GenerateRequest;
use daihon_error::{DaihonErrorKind, InvocationErrorKind};
use daihon_interface::{GeneratorFactory, TextGenerator};
use daihon_models::{GeminiClient, GeminiConfig, GeminiFactory, GeminiResponse};

fn parse(json: &str) -> GeminiResponse {
    serde_json::from_str(json).expect("fixture should parse")
}

fn invocation_kind(json: &str) -> InvocationErrorKind {
    let err = GeminiClient::convert_response(&parse(json)).unwrap_err();
    match err.kind() {
        DaihonErrorKind::Invocation(e) => e.kind.clone(),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn text_and_usage_are_extracted() {
    let response = GeminiClient::convert_response(&parse(
        r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "こんにちは"}, {"text": "（修正）"}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 30, "candidatesTokenCount": 12, "totalTokenCount": 42}
        }"#,
    ))
    .unwrap();

    assert_eq!(response.text, "こんにちは（修正）");
    assert_eq!(response.reported_tokens(), Some(42));
    let usage = response.usage.unwrap();
    assert_eq!(*usage.prompt_tokens(), Some(30));
    assert_eq!(*usage.completion_tokens(), Some(12));
}

#[test]
fn absent_usage_is_none_not_error() {
    let response = GeminiClient::convert_response(&parse(
        r#"{"candidates": [{"content": {"parts": [{"text": "本文"}]}}]}"#,
    ))
    .unwrap();
    assert_eq!(response.text, "本文");
    assert_eq!(response.usage, None);
}

#[test]
fn malformed_usage_is_none_not_error() {
    let response = GeminiClient::convert_response(&parse(
        r#"{"candidates": [{"content": {"parts": [{"text": "本文"}]}}], "usageMetadata": "n/a"}"#,
    ))
    .unwrap();
    assert_eq!(response.usage, None);
}

#[test]
fn missing_candidates_is_malformed() {
    assert!(matches!(
        invocation_kind(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#),
        InvocationErrorKind::MalformedResponse(_)
    ));
}

#[test]
fn blocked_candidate_reports_finish_reason() {
    match invocation_kind(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#) {
        InvocationErrorKind::MalformedResponse(msg) => assert!(msg.contains("SAFETY")),
        other => panic!("unexpected kind {other:?}"),
    }
}

#[test]
fn factory_builds_client_with_shared_config() -> anyhow::Result<()> {
    let factory = GeminiFactory::new(GeminiConfig::default().with_model("gemini-1.5-flash"));
    let client = factory.connect(" key-with-spaces ")?;
    assert_eq!(client.provider_name(), "gemini");
    assert_eq!(client.model_name(), "gemini-1.5-flash");

    assert!(factory.connect("").unwrap_err().is_credential());
    Ok(())
}

#[test]
fn request_carries_prompt_verbatim() -> anyhow::Result<()> {
    let client = GeminiClient::new("k", GeminiConfig::default())?;
    let prompt = "【ストーリー概要】\n<b>そのまま</b>";
    let body = client.convert_request(&GenerateRequest::from_prompt(prompt))?;
    let json = serde_json::to_value(&body)?;
    assert_eq!(json["contents"][0]["parts"][0]["text"], prompt);
    Ok(())
}

#[cfg(feature = "api")]
#[tokio::test]
async fn live_generation_reports_usage() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let key = std::env::var("GEMINI_API_KEY")?;
    let client = GeminiFactory::default().connect(&key)?;
    let response = client
        .generate(&GenerateRequest::from_prompt("「OK」とだけ返してください。"))
        .await?;
    assert!(!response.text.is_empty());
    Ok(())
}
