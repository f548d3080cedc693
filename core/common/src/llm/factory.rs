//! プロバイダファクトリー
//!
//! プロバイダタイプに基づいて適切なプロバイダを作成します。

use crate::error::Error;
use crate::llm::driver::LlmDriver;
use crate::llm::echo::EchoProvider;
use crate::llm::gpt::GptProvider;
use crate::llm::provider::{LlmProvider, Message};
use crate::ports::outbound::EnvResolver;
use serde_json::Value;

/// プロバイダタイプ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    /// GPT（OpenAI Chat Completions）
    Gpt,
    /// Echo（API を呼ばない）
    Echo,
}

impl ProviderType {
    /// 文字列からプロバイダタイプを解析
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "gpt" | "openai" => Some(Self::Gpt),
            "echo" => Some(Self::Echo),
            _ => None,
        }
    }

    /// プロバイダタイプを文字列に変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gpt => "gpt",
            Self::Echo => "echo",
        }
    }
}

/// プロバイダのenumラッパー
pub enum AnyProvider {
    Gpt(GptProvider),
    Echo(EchoProvider),
}

impl LlmProvider for AnyProvider {
    fn name(&self) -> &str {
        match self {
            Self::Gpt(p) => p.name(),
            Self::Echo(p) => p.name(),
        }
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        match self {
            Self::Gpt(p) => p.make_http_request(request_json),
            Self::Echo(p) => p.make_http_request(request_json),
        }
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        match self {
            Self::Gpt(p) => p.parse_response_text(response_json),
            Self::Echo(p) => p.parse_response_text(response_json),
        }
    }

    fn make_request_payload(
        &self,
        query: &str,
        system_instruction: Option<&str>,
        history: &[Message],
        temperature: Option<f64>,
    ) -> Result<Value, Error> {
        match self {
            Self::Gpt(p) => p.make_request_payload(query, system_instruction, history, temperature),
            Self::Echo(p) => p.make_request_payload(query, system_instruction, history, temperature),
        }
    }
}

/// プロバイダを作成する
///
/// # Arguments
/// * `provider_type` - プロバイダタイプ
/// * `model` - モデル名（None ならプロバイダのデフォルト）
/// * `temperature` - 既定の温度（None ならプロバイダのデフォルト）
/// * `env` - API キー等を読む環境変数リゾルバ
pub fn create_provider(
    provider_type: ProviderType,
    model: Option<String>,
    temperature: Option<f64>,
    env: &dyn EnvResolver,
) -> Result<AnyProvider, Error> {
    match provider_type {
        ProviderType::Gpt => Ok(AnyProvider::Gpt(GptProvider::from_env(env, model, temperature)?)),
        ProviderType::Echo => Ok(AnyProvider::Echo(EchoProvider::new())),
    }
}

/// ドライバーを作成する
pub fn create_driver(
    provider_type: ProviderType,
    model: Option<String>,
    temperature: Option<f64>,
    env: &dyn EnvResolver,
) -> Result<LlmDriver<AnyProvider>, Error> {
    let provider = create_provider(provider_type, model, temperature, env)?;
    Ok(LlmDriver::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptyEnv;

    impl EnvResolver for EmptyEnv {
        fn var(&self, _name: &str) -> Option<String> {
            None
        }
    }

    #[test]
    fn test_provider_type_from_str() {
        assert_eq!(ProviderType::from_str("gpt"), Some(ProviderType::Gpt));
        assert_eq!(ProviderType::from_str("GPT"), Some(ProviderType::Gpt));
        assert_eq!(ProviderType::from_str("openai"), Some(ProviderType::Gpt));
        assert_eq!(ProviderType::from_str("echo"), Some(ProviderType::Echo));
        assert_eq!(ProviderType::from_str("ECHO"), Some(ProviderType::Echo));
        assert_eq!(ProviderType::from_str("gemini"), None);
    }

    #[test]
    fn test_provider_type_as_str() {
        assert_eq!(ProviderType::Gpt.as_str(), "gpt");
        assert_eq!(ProviderType::Echo.as_str(), "echo");
    }

    #[test]
    fn test_create_echo_driver_needs_no_key() {
        let driver = create_driver(ProviderType::Echo, None, None, &EmptyEnv).unwrap();
        assert_eq!(driver.provider().name(), "echo");
    }

    #[test]
    fn test_create_gpt_without_key_fails_fast() {
        let err = create_provider(ProviderType::Gpt, None, None, &EmptyEnv)
            .err()
            .unwrap();
        assert_eq!(err.exit_code(), 64);
    }
}
