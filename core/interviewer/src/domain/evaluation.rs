//! 回答評価の結果
//!
//! LLM の JSON 応答に欠けたキーがあれば既定値で補う。

use crate::domain::InterviewField;
use serde_json::Value;

/// 評価結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// 0〜10
    pub satisfaction_score: u8,
    pub analysis: String,
    pub missing_info: String,
    pub follow_up_question: String,
}

const DEFAULT_SCORE: u8 = 5;

impl Evaluation {
    /// LLM が返した JSON オブジェクトから組み立てる（欠けたキーは既定値）
    pub fn from_json(v: &Value, field: InterviewField) -> Self {
        let text = |key: &str, default: &str| {
            v.get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(default)
                .to_string()
        };
        Self {
            satisfaction_score: v
                .get("satisfaction_score")
                .and_then(parse_score)
                .unwrap_or(DEFAULT_SCORE),
            analysis: text("analysis", "Analysis not provided"),
            missing_info: text("missing_info", "None"),
            follow_up_question: text("follow_up_question", field.first_follow_up()),
        }
    }

    /// 評価に失敗したときの代替
    pub fn fallback(field: InterviewField) -> Self {
        Self {
            satisfaction_score: DEFAULT_SCORE,
            analysis: "Error occurred during analysis".to_string(),
            missing_info: "Error in evaluation".to_string(),
            follow_up_question: field.first_follow_up().to_string(),
        }
    }
}

/// 数値・数値文字列のどちらも受け付け、0〜10 に丸める
fn parse_score(v: &Value) -> Option<u8> {
    let n = match v {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !n.is_finite() {
        return None;
    }
    Some(n.round().clamp(0.0, 10.0) as u8)
}
