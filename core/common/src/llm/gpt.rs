//! GPTプロバイダの実装（OpenAI Chat Completions）

use crate::error::Error;
use crate::llm::provider::{LlmProvider, Message};
use crate::ports::outbound::EnvResolver;
use serde_json::{json, Value};

/// 既定のモデル
pub const DEFAULT_MODEL: &str = "gpt-4";
/// 既定の API ベース URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_TEMPERATURE: f64 = 0.7;

/// GPTプロバイダ
pub struct GptProvider {
    model: String,
    api_key: String,
    temperature: f64,
    base_url: String,
    client: reqwest::blocking::Client,
}

impl GptProvider {
    /// 新しいGPTプロバイダを作成
    ///
    /// # Arguments
    /// * `api_key` - OpenAI API キー
    /// * `model` - モデル名（デフォルト: "gpt-4"）
    /// * `temperature` - 温度パラメータ（デフォルト: 0.7）
    /// * `base_url` - API ベース URL（デフォルト: https://api.openai.com/v1）
    pub fn new(
        api_key: impl Into<String>,
        model: Option<String>,
        temperature: Option<f64>,
        base_url: Option<String>,
    ) -> Self {
        Self {
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key: api_key.into(),
            temperature: temperature.unwrap_or(DEFAULT_TEMPERATURE),
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// OPENAI_API_KEY / OPENAI_BASE_URL から作成する。キーが無ければ設定エラー。
    pub fn from_env(
        env: &dyn EnvResolver,
        model: Option<String>,
        temperature: Option<f64>,
    ) -> Result<Self, Error> {
        let api_key = env
            .var("OPENAI_API_KEY")
            .ok_or_else(|| Error::env("OPENAI_API_KEY environment variable is not set"))?;
        Ok(Self::new(api_key, model, temperature, env.var("OPENAI_BASE_URL")))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

/// エラーレスポンスからメッセージを抽出（JSON でなければ本文をそのまま）
fn api_error_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(|s| s.to_string()))
        .unwrap_or_else(|| format!("HTTP {}: {}", status, body))
}

impl LlmProvider for GptProvider {
    fn name(&self) -> &str {
        "gpt"
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        let response = self
            .client
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .body(request_json.to_string())
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(Error::provider(format!(
                "OpenAI API error: {}",
                api_error_message(status, &response_text)
            )));
        }

        Ok(response_text)
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::provider(format!("Failed to parse response JSON: {}", e)))?;

        if let Some(error) = v.get("error") {
            let error_msg = error["message"].as_str().unwrap_or("Unknown error");
            return Err(Error::provider(format!("OpenAI API error: {}", error_msg)));
        }

        Ok(v["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string()))
    }

    fn make_request_payload(
        &self,
        query: &str,
        system_instruction: Option<&str>,
        history: &[Message],
        temperature: Option<f64>,
    ) -> Result<Value, Error> {
        let mut messages = Vec::with_capacity(history.len() + 2);

        if let Some(system) = system_instruction {
            messages.push(json!({ "role": "system", "content": system }));
        }

        for msg in history {
            messages.push(json!({ "role": msg.role, "content": msg.content }));
        }

        messages.push(json!({ "role": "user", "content": query }));

        Ok(json!({
            "model": self.model,
            "temperature": temperature.unwrap_or(self.temperature),
            "messages": messages
        }))
    }
}
