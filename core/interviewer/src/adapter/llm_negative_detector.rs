//! LLM による否定回答の判定（adapter 層）
//!
//! LLM が失敗したらキーワード一致で判定する。

use std::sync::Arc;

use common::ports::outbound::{Log, LogLevel, LogRecord};

use crate::ports::outbound::{LlmCompletion, NegativeDetector};

const DETECTOR_SYSTEM: &str =
    "You are analyzing interview responses. Respond only with 'true' or 'false'.";
const DETECTOR_TEMPERATURE: f64 = 0.1;

/// LLM が使えないときの否定キーワード（部分一致）
const NEGATIVE_INDICATORS: &[&str] = &[
    "no",
    "none",
    "nothing",
    "don't have",
    "do not have",
    "nothing comes to mind",
    "haven't done any",
    "i don't",
    "no experience",
    "no projects",
];

pub fn build_negative_prompt(answer: &str) -> String {
    format!(
        r#"Analyze if this response indicates a clear negative
Response: "{answer}"

Consider responses like:
- "no"
- "none"
- "I don't have any experience"
- "I haven't done that"
- "nothing comes to mind"

Return only "true" if it's clearly negative, or "false" otherwise."#
    )
}

/// キーワードによる判定
pub fn keyword_negative(answer: &str) -> bool {
    let lower = answer.trim().to_lowercase();
    NEGATIVE_INDICATORS.iter().any(|k| lower.contains(k))
}

/// LlmCompletion を使う NegativeDetector
pub struct LlmNegativeDetector {
    llm: Arc<dyn LlmCompletion>,
    log: Arc<dyn Log>,
}

impl LlmNegativeDetector {
    pub fn new(llm: Arc<dyn LlmCompletion>, log: Arc<dyn Log>) -> Self {
        Self { llm, log }
    }
}

impl NegativeDetector for LlmNegativeDetector {
    fn is_negative(&self, answer: &str) -> bool {
        match self.llm.complete(
            Some(DETECTOR_SYSTEM),
            &build_negative_prompt(answer),
            DETECTOR_TEMPERATURE,
        ) {
            Ok(reply) => reply.trim().to_lowercase() == "true",
            Err(e) => {
                let negative = keyword_negative(answer);
                let _ = self.log.log(
                    &LogRecord::new(
                        LogLevel::Warn,
                        format!("Error in negative response detection: {}", e),
                    )
                    .layer("adapter")
                    .kind("negative")
                    .field("fallback", "keywords")
                    .field("negative", negative),
                );
                negative
            }
        }
    }
}
