//! 面接状態レポートの Outbound ポート

use crate::domain::InterviewForm;
use common::error::Error;
use std::path::PathBuf;

/// 項目ごとの値・満足度・状態をレポートとして書き出す能力
pub trait StateReporter: Send + Sync {
    /// 書き出したファイルのパスを返す
    fn write(&self, form: &InterviewForm) -> Result<PathBuf, Error>;
}
