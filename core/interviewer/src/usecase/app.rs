//! 面接アプリのユースケース（読み込み → 対話ループ → 保存・レポート → サマリー）

use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};

use crate::domain::{ChatMessage, InterviewSession};
use crate::ports::outbound::{
    AnswerEvaluator, HistoryStore, InterviewConsole, NegativeDetector, StateReporter,
};
use crate::usecase::interview::InterviewFlow;
use crate::usecase::summary::render_summary;

/// サマリー表示のコマンド
pub const SUMMARY_COMMAND: &str = "/summary";

// --- 責務別 Deps（usecase が定義を所有し、wiring は組み立てるだけ）

pub struct InterviewDeps {
    pub model: ModelDeps,
    pub storage: StorageDeps,
    pub ui: UiDeps,
    pub obs: ObsDeps,
}

pub struct ModelDeps {
    pub evaluator: Arc<dyn AnswerEvaluator>,
    pub detector: Arc<dyn NegativeDetector>,
}

pub struct StorageDeps {
    pub history: Arc<dyn HistoryStore>,
    /// None ならレポートを書かない
    pub reporter: Option<Arc<dyn StateReporter>>,
}

pub struct UiDeps {
    pub console: Arc<dyn InterviewConsole>,
}

pub struct ObsDeps {
    pub log: Arc<dyn Log>,
}

/// 1 回の実行のオプション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub fresh: bool,
    pub show_summary: bool,
}

fn is_exit_command(input: &str) -> bool {
    input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit")
}

/// 面接のユースケース（アダプター経由で I/O を行う）
pub struct InterviewApp {
    flow: InterviewFlow,
    storage: StorageDeps,
    ui: UiDeps,
    obs: ObsDeps,
}

impl InterviewApp {
    pub fn new(deps: InterviewDeps) -> Self {
        let flow = InterviewFlow::new(
            deps.model.evaluator,
            deps.model.detector,
            Arc::clone(&deps.obs.log),
        );
        Self {
            flow,
            storage: deps.storage,
            ui: deps.ui,
            obs: deps.obs,
        }
    }

    fn log(&self, record: LogRecord) {
        let _ = self.obs.log.log(&record.layer("usecase"));
    }

    /// 保存済みセッションを読む。fresh または保存なしなら新規。
    fn open_session(&self, fresh: bool) -> Result<(InterviewSession, bool), Error> {
        if fresh {
            return Ok((InterviewSession::new(), false));
        }
        match self.storage.history.load()? {
            Some(session) => Ok((session, true)),
            None => Ok((InterviewSession::new(), false)),
        }
    }

    /// 履歴とレポートを書き出す。失敗はログと表示のみで対話は続ける。
    fn persist(&self, session: &InterviewSession) -> Result<(), Error> {
        if let Err(e) = self.storage.history.save(session) {
            self.log(
                LogRecord::new(LogLevel::Warn, format!("Failed to save interview state: {}", e))
                    .kind("save"),
            );
            self.ui
                .console
                .show_error(&format!("Failed to save interview state: {}", e))?;
        }
        if let Some(reporter) = &self.storage.reporter {
            match reporter.write(session.form()) {
                Ok(path) => self.log(
                    LogRecord::new(LogLevel::Debug, "state report written")
                        .kind("report")
                        .field("path", path.display().to_string()),
                ),
                Err(e) => self.log(
                    LogRecord::new(LogLevel::Warn, format!("Failed to write state report: {}", e))
                        .kind("report"),
                ),
            }
        }
        Ok(())
    }

    /// 面接を実行する。正常終了なら Ok(0)。
    pub fn run(&self, opts: RunOptions) -> Result<i32, Error> {
        let console = &self.ui.console;
        let (mut session, resumed) = self.open_session(opts.fresh)?;
        self.log(
            LogRecord::new(LogLevel::Info, "interview session opened")
                .kind("session")
                .field("resumed", resumed)
                .field("current_field", session.current_field().map(|f| f.key())),
        );
        self.persist(&session)?;

        if let Some(field) = session.current_field() {
            console.show_topic(field)?;
        }
        for message in session.transcript() {
            console.show_message(message)?;
        }
        if session.is_finished() {
            console.show_notice("The interview is already complete.")?;
        }

        while let Some(field) = session.current_field() {
            let Some(line) = console.read_answer()? else {
                break;
            };
            let answer = line.trim();
            if answer.is_empty() {
                continue;
            }
            if is_exit_command(answer) {
                break;
            }
            if answer == SUMMARY_COMMAND {
                console.show_notice(&render_summary(session.form()))?;
                continue;
            }

            match self.flow.submit_answer(&mut session, answer) {
                Ok(outcome) => {
                    console.show_message(&ChatMessage::assistant(outcome.reply))?;
                    if let (true, Some(next)) = (outcome.advanced, outcome.current_field) {
                        console.show_topic(next)?;
                    }
                }
                Err(e) => {
                    self.log(
                        LogRecord::new(LogLevel::Error, format!("Error processing response: {}", e))
                            .kind("turn")
                            .field("field", field.key()),
                    );
                    console.show_error(&format!("Error processing response: {}", e))?;
                }
            }
            self.persist(&session)?;
        }

        self.log(
            LogRecord::new(LogLevel::Info, "interview session closed")
                .kind("session")
                .field("finished", session.is_finished())
                .field("completed", session.form().completed()),
        );
        if opts.show_summary {
            console.show_notice(&render_summary(session.form()))?;
        }
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_exit_command() {
        assert!(is_exit_command("exit"));
        assert!(is_exit_command("QUIT"));
        assert!(!is_exit_command("exiting"));
    }
}
