//! LLMプロバイダのトレイト定義

use crate::error::Error;
use serde_json::Value;

/// LLMプロバイダのトレイト
///
/// 各プロバイダ（GPT、Echo など）はこのトレイトを実装する必要があります。
pub trait LlmProvider: Send + Sync {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// HTTPリクエストを実行してレスポンスを取得
    ///
    /// # Arguments
    /// * `request_json` - リクエストJSON文字列
    ///
    /// # Returns
    /// * `Ok(String)` - レスポンスJSON文字列
    /// * `Err(Error)` - 通信エラーまたは API エラー
    fn make_http_request(&self, request_json: &str) -> Result<String, Error>;

    /// レスポンスからテキストを抽出
    ///
    /// # Returns
    /// * `Ok(Option<String>)` - 抽出したテキスト（存在しない場合はNone）
    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error>;

    /// リクエストペイロードを生成
    ///
    /// # Arguments
    /// * `query` - ユーザークエリ
    /// * `system_instruction` - システム指示（オプション）
    /// * `history` - 会話履歴
    /// * `temperature` - このリクエストだけの温度（None ならプロバイダの既定値）
    fn make_request_payload(
        &self,
        query: &str,
        system_instruction: Option<&str>,
        history: &[Message],
        temperature: Option<f64>,
    ) -> Result<Value, Error>;
}

/// メッセージ構造体（system / user / assistant）
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_user() {
        let msg = Message::user("Hello");
        assert_eq!(msg.role, "user");
        assert_eq!(msg.content, "Hello");
    }

    #[test]
    fn test_message_assistant() {
        let msg = Message::assistant("Hi there");
        assert_eq!(msg.role, "assistant");
        assert_eq!(msg.content, "Hi there");
    }

    #[test]
    fn test_message_with_multiline_content() {
        let msg = Message::user("Line 1\nLine 2");
        assert_eq!(msg.content, "Line 1\nLine 2");
    }
}
