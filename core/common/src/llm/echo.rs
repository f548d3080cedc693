//! Echoプロバイダの実装
//!
//! 実際にLLM APIを呼び出さず、固定の応答を返します。
//! APIキー無しでのデモやテスト用に使用します。

use crate::error::Error;
use crate::llm::provider::{LlmProvider, Message};
use serde_json::{json, Value};

/// Echo が返す固定テキスト
pub const ECHO_RESPONSE: &str = "[Echo Provider] Query received (no actual LLM call made)";

/// Echoプロバイダ
#[derive(Debug, Clone, Default)]
pub struct EchoProvider;

impl EchoProvider {
    /// 新しいEchoプロバイダを作成
    pub fn new() -> Self {
        Self
    }
}

impl LlmProvider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        // 通信はしない。受け取ったリクエストをそのまま包んで返す
        Ok(json!({ "echo": request_json }).to_string())
    }

    fn parse_response_text(&self, _response_json: &str) -> Result<Option<String>, Error> {
        Ok(Some(ECHO_RESPONSE.to_string()))
    }

    fn make_request_payload(
        &self,
        query: &str,
        system_instruction: Option<&str>,
        history: &[Message],
        temperature: Option<f64>,
    ) -> Result<Value, Error> {
        let mut payload = json!({ "query": query });

        if let Some(system) = system_instruction {
            payload["system_instruction"] = json!(system);
        }
        if let Some(t) = temperature {
            payload["temperature"] = json!(t);
        }
        if !history.is_empty() {
            let history_json: Vec<Value> = history
                .iter()
                .map(|msg| json!({ "role": msg.role, "content": msg.content }))
                .collect();
            payload["history"] = json!(history_json);
        }

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_provider_name() {
        assert_eq!(EchoProvider::new().name(), "echo");
    }

    #[test]
    fn test_echo_provider_make_request_payload_with_system() {
        let payload = EchoProvider::new()
            .make_request_payload("Hello", Some("You are helpful"), &[], Some(0.1))
            .unwrap();
        assert_eq!(payload["query"], "Hello");
        assert_eq!(payload["system_instruction"], "You are helpful");
        assert_eq!(payload["temperature"], 0.1);
    }

    #[test]
    fn test_echo_provider_make_request_payload_with_history() {
        let history = vec![Message::user("Hi"), Message::assistant("Hello!")];
        let payload = EchoProvider::new()
            .make_request_payload("How are you?", None, &history, None)
            .unwrap();
        assert_eq!(payload["history"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_echo_provider_http_request_wraps_request() {
        let body = EchoProvider::new().make_http_request(r#"{"query":"x"}"#).unwrap();
        let v: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(v["echo"], r#"{"query":"x"}"#);
    }

    #[test]
    fn test_echo_provider_parse_response_text() {
        let text = EchoProvider::new().parse_response_text("{}").unwrap();
        assert_eq!(text.as_deref(), Some(ECHO_RESPONSE));
    }
}
