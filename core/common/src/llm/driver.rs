//! LLMドライバーの実装
//!
//! プロバイダに依存しない共通処理を提供します。

use crate::error::Error;
use crate::llm::provider::{LlmProvider, Message};

/// LLMドライバー
pub struct LlmDriver<P: LlmProvider> {
    provider: P,
}

impl<P: LlmProvider> LlmDriver<P> {
    /// 新しいドライバーを作成
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// LLMにクエリを送信してレスポンスを取得
    ///
    /// # Arguments
    /// * `query` - ユーザークエリ
    /// * `system_instruction` - システム指示（オプション）
    /// * `history` - 会話履歴
    /// * `temperature` - 温度（None ならプロバイダの既定値）
    ///
    /// # Returns
    /// * `Ok(String)` - LLMからの応答テキスト
    /// * `Err(Error)` - 上流エラー
    pub fn query(
        &self,
        query: &str,
        system_instruction: Option<&str>,
        history: &[Message],
        temperature: Option<f64>,
    ) -> Result<String, Error> {
        let payload =
            self.provider
                .make_request_payload(query, system_instruction, history, temperature)?;

        let request_json = serde_json::to_string(&payload)
            .map_err(|e| Error::system(format!("Failed to serialize request: {}", e)))?;

        let response_json = self.provider.make_http_request(&request_json)?;

        self.provider
            .parse_response_text(&response_json)?
            .ok_or_else(|| Error::provider("No text in response"))
    }

    /// プロバイダを取得
    pub fn provider(&self) -> &P {
        &self.provider
    }
}
