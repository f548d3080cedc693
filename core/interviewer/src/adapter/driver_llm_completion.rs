//! 単発 LLM 完了の標準実装（LlmDriver で 1 往復する）

use common::error::Error;
use common::llm::{AnyProvider, LlmDriver};

use crate::ports::outbound::LlmCompletion;

/// LlmDriver を使った LlmCompletion 実装（履歴なし・1 往復）
pub struct DriverLlmCompletion {
    driver: LlmDriver<AnyProvider>,
}

impl DriverLlmCompletion {
    pub fn new(driver: LlmDriver<AnyProvider>) -> Self {
        Self { driver }
    }
}

impl LlmCompletion for DriverLlmCompletion {
    fn complete(
        &self,
        system_instruction: Option<&str>,
        user_message: &str,
        temperature: f64,
    ) -> Result<String, Error> {
        self.driver
            .query(user_message, system_instruction, &[], Some(temperature))
    }
}
