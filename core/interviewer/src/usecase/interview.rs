//! 面接の 1 ターン（回答 → 判定・評価 → 次の質問）
//!
//! 1 回の回答で transcript には user 1 件と assistant 1 件が追加される。

use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};

use crate::domain::{InterviewField, InterviewSession, SATISFACTION_THRESHOLD};
use crate::ports::outbound::{AnswerEvaluator, NegativeDetector};

/// 全項目を終えたときの返答
pub const COMPLETION_MESSAGE: &str = "Thank you for your time. We've completed all topics!";

/// 1 ターンの結果
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    /// transcript に追加した assistant の返答
    pub reply: String,
    /// ターン後の項目（None なら面接終了）
    pub current_field: Option<InterviewField>,
    /// 項目が変わったか
    pub advanced: bool,
}

fn move_on_message(prefix: &str, next: Option<InterviewField>) -> String {
    match next {
        Some(n) => format!(
            "{} Let's move on to your {}. {}",
            prefix,
            n.label(),
            n.first_follow_up()
        ),
        None => COMPLETION_MESSAGE.to_string(),
    }
}

/// 面接の進行ロジック
pub struct InterviewFlow {
    evaluator: Arc<dyn AnswerEvaluator>,
    detector: Arc<dyn NegativeDetector>,
    log: Arc<dyn Log>,
}

impl InterviewFlow {
    pub fn new(
        evaluator: Arc<dyn AnswerEvaluator>,
        detector: Arc<dyn NegativeDetector>,
        log: Arc<dyn Log>,
    ) -> Self {
        Self {
            evaluator,
            detector,
            log,
        }
    }

    /// 候補者の回答を処理する。
    ///
    /// 評価が Err の場合（API キー不正など）、回答は記録済みのまま項目は進まず、返答も追加しない。
    pub fn submit_answer(
        &self,
        session: &mut InterviewSession,
        answer: &str,
    ) -> Result<TurnOutcome, Error> {
        let field = session
            .current_field()
            .ok_or_else(|| Error::invalid_argument("The interview is already complete."))?;

        session.record_answer(field, answer);

        if self.detector.is_negative(answer) {
            let next = session.advance();
            let reply = move_on_message("I understand.", next);
            session.push_assistant(reply.clone());
            let _ = self.log.log(
                &LogRecord::new(LogLevel::Info, "negative response, moving on")
                    .layer("usecase")
                    .kind("negative")
                    .field("field", field.key())
                    .field("next_field", next.map(|f| f.key())),
            );
            return Ok(TurnOutcome {
                reply,
                current_field: next,
                advanced: true,
            });
        }

        let evaluation = self.evaluator.evaluate(field, session.memory())?;
        session.apply_satisfaction(field, evaluation.satisfaction_score);
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "response evaluated")
                .layer("usecase")
                .kind("evaluation")
                .field("field", field.key())
                .field("satisfaction_score", evaluation.satisfaction_score)
                .field("status", session.form().entry(field).status().as_str())
                .field("analysis", evaluation.analysis.clone())
                .field("missing_info", evaluation.missing_info.clone()),
        );

        let (reply, advanced) = if evaluation.satisfaction_score >= SATISFACTION_THRESHOLD {
            let next = session.advance();
            (move_on_message("Great!", next), true)
        } else {
            (evaluation.follow_up_question.clone(), false)
        };
        session.push_assistant(reply.clone());

        Ok(TurnOutcome {
            reply,
            current_field: session.current_field(),
            advanced,
        })
    }
}
