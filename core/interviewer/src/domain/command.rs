//! interviewer コマンドの enum（Command Pattern）
//!
//! ヘルプ表示 vs 面接実行の分岐を enum で明示する。

use common::domain::{HistoryDir, ModelName, ProviderName};
use std::path::PathBuf;

/// 状態レポートの出力先
#[derive(Debug, Clone, PartialEq)]
pub enum ReportTarget {
    /// 書き出さない（--no-report）
    Disabled,
    /// 指定パス（--report）
    Path(PathBuf),
    /// interview_state_<YYYYmmdd_HHMMSS>.json（既定）
    Timestamped,
}

/// 面接の実行オプション
#[derive(Debug, Clone, PartialEq)]
pub struct InterviewOptions {
    pub profile: ProviderName,
    pub model: Option<ModelName>,
    /// 評価リクエストの温度
    pub temperature: f64,
    pub history_dir: HistoryDir,
    /// 保存済みの履歴を読まずに新しく始める
    pub fresh: bool,
    pub report: ReportTarget,
    /// 終了時にサマリーを表示する
    pub show_summary: bool,
}

/// interviewer の実行モード
#[derive(Debug, Clone, PartialEq)]
pub enum InterviewCommand {
    /// ヘルプ表示
    Help,
    /// 面接を実行（保存済みがあれば再開）
    Interview(InterviewOptions),
}

impl InterviewCommand {
    /// ログ用の名前
    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Interview(_) => "interview",
        }
    }
}
