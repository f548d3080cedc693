//! 回答評価の Outbound ポート

use crate::domain::{Evaluation, InterviewField, InterviewMemory};
use common::error::Error;

/// 項目の回答履歴を評価し、満足度と追加質問を返す能力
///
/// 最新の回答は `memory` の末尾にある（評価前に追加済み）。
/// 上流（LLM API）の失敗は Err で返し、呼び出し側がユーザーに表示する。
pub trait AnswerEvaluator: Send + Sync {
    fn evaluate(&self, field: InterviewField, memory: &InterviewMemory) -> Result<Evaluation, Error>;
}
