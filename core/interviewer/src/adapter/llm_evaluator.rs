//! LLM による回答評価（adapter 層）
//!
//! 評価プロンプトを組み立てて LLM に送り、JSON 応答を Evaluation にする。
//! API の失敗はそのまま返し、応答の JSON が解析できないときだけ代替評価にする。

use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use regex::Regex;
use serde_json::Value;

use crate::domain::{Evaluation, InterviewField, InterviewMemory};
use crate::ports::outbound::{AnswerEvaluator, LlmCompletion};

const EVALUATOR_SYSTEM: &str = "You are an expert interviewer evaluating responses.";

/// 評価プロンプト
pub fn build_evaluation_prompt(field: InterviewField, complete_response: &str, latest: &str) -> String {
    format!(
        r#"You are evaluating a response for the field: {field}
Expected information: {expected}
Complete response history: {complete_response}
Latest response: {latest}

Please evaluate the complete response history and provide:
1. A satisfaction score (1-10)
2. A brief analysis
3. Any missing information
4. A follow-up question if needed

Format your response as JSON:
{{
    "satisfaction_score": <score>,
    "analysis": "<brief analysis>",
    "missing_info": "<list missing info or 'none'>",
    "follow_up_question": "<question to get missing info>"
}}"#,
        field = field.key(),
        expected = field.requirement().expected,
    )
}

/// 文字列中の `{` から始まる最初の完全な JSON オブジェクト
fn first_object(text: &str) -> Option<Value> {
    text.match_indices('{').find_map(|(i, _)| {
        let mut values = serde_json::Deserializer::from_str(&text[i..]).into_iter::<Value>();
        match values.next() {
            Some(Ok(v)) if v.is_object() => Some(v),
            _ => None,
        }
    })
}

/// 応答から JSON オブジェクトを取り出す（コードフェンスや前後の文章を許容）
///
/// フェンス内を優先し、無ければ応答全体から探す。
pub fn extract_json_object(reply: &str) -> Result<Value, Error> {
    let fence = Regex::new(r"(?s)```[A-Za-z]*\s*(.*?)```").map_err(|e| Error::system(e.to_string()))?;
    let found = fence
        .captures_iter(reply)
        .filter_map(|c| c.get(1))
        .find_map(|m| first_object(m.as_str()))
        .or_else(|| first_object(reply))
        .ok_or_else(|| Error::json("No JSON object in evaluation reply"));
    found
}

/// LlmCompletion を使う AnswerEvaluator
pub struct LlmAnswerEvaluator {
    llm: Arc<dyn LlmCompletion>,
    temperature: f64,
    log: Arc<dyn Log>,
}

impl LlmAnswerEvaluator {
    pub fn new(llm: Arc<dyn LlmCompletion>, temperature: f64, log: Arc<dyn Log>) -> Self {
        Self {
            llm,
            temperature,
            log,
        }
    }

    fn try_evaluate(&self, field: InterviewField, memory: &InterviewMemory) -> Result<Evaluation, Error> {
        let prompt = build_evaluation_prompt(
            field,
            &memory.field_history(field),
            memory.latest_response(field),
        );
        let reply = self
            .llm
            .complete(Some(EVALUATOR_SYSTEM), &prompt, self.temperature)?;
        let v = extract_json_object(&reply)?;
        Ok(Evaluation::from_json(&v, field))
    }
}

impl AnswerEvaluator for LlmAnswerEvaluator {
    /// API の失敗はそのまま返す。応答が解析できないときだけ代替評価にする。
    fn evaluate(&self, field: InterviewField, memory: &InterviewMemory) -> Result<Evaluation, Error> {
        match self.try_evaluate(field, memory) {
            Ok(evaluation) => Ok(evaluation),
            Err(e) if e.is_upstream() => Err(e),
            Err(e) => {
                let _ = self.log.log(
                    &LogRecord::new(LogLevel::Warn, format!("Error in evaluation: {}", e))
                        .layer("adapter")
                        .kind("evaluation")
                        .field("field", field.key())
                        .field("fallback", true),
                );
                Ok(Evaluation::fallback(field))
            }
        }
    }
}
