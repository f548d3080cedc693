//! 面接状態レポートを JSON で書き出す StateReporter 実装

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::FileSystem;
use serde::Serialize;

use crate::domain::{FieldStatus, InterviewForm};
use crate::ports::outbound::StateReporter;

#[derive(Debug, Serialize)]
struct Report<'a> {
    interview_timestamp: String,
    interview_data: BTreeMap<&'static str, ReportEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct ReportEntry<'a> {
    value: &'a str,
    satisfaction_score: u8,
    status: FieldStatus,
}

/// 既定のレポートファイル名（interview_state_YYYYmmdd_HHMMSS.json）
pub fn timestamped_report_path(now: chrono::DateTime<chrono::Local>) -> PathBuf {
    PathBuf::from(format!("interview_state_{}.json", now.format("%Y%m%d_%H%M%S")))
}

/// 固定パスへ毎回上書きする StateReporter
pub struct JsonStateReporter {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl JsonStateReporter {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl AsRef<Path>) -> Self {
        Self {
            fs,
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl StateReporter for JsonStateReporter {
    fn write(&self, form: &InterviewForm) -> Result<PathBuf, Error> {
        let report = Report {
            interview_timestamp: chrono::Local::now().to_rfc3339(),
            interview_data: form
                .iter()
                .map(|(field, entry)| {
                    (
                        field.key(),
                        ReportEntry {
                            value: &entry.value,
                            satisfaction_score: entry.satisfaction,
                            status: entry.status(),
                        },
                    )
                })
                .collect(),
        };
        let json = serde_json::to_string_pretty(&report)?;
        self.fs.write_atomic(&self.path, &json)?;
        Ok(self.path.clone())
    }
}
