//! Log 実装（ファイルへ JSONL 追記 / 何もしない / stderr へのミラー）
//!
//! ユーザー向けのエラー表示（stderr）とは別。--verbose のときだけ stderr にも写す。

use crate::error::Error;
use crate::ports::outbound::{FileSystem, Log, LogRecord};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// ファイルへ JSONL を追記する Log 実装
pub struct FileJsonLog {
    fs: Arc<dyn FileSystem>,
    path: std::path::PathBuf,
}

impl FileJsonLog {
    /// ログファイルパスへ追記する logger を生成する。
    /// 親ディレクトリが無ければ作成する（初回書き込み時）。
    pub fn new(fs: Arc<dyn FileSystem>, path: impl AsRef<Path>) -> Self {
        Self {
            fs,
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Log for FileJsonLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            self.fs.create_dir_all(parent)?;
        }
        let mut w = self.fs.open_append(&self.path)?;
        let line = serde_json::to_string(record)?;
        w.write_all(line.as_bytes())
            .map_err(|e| Error::io_msg(e.to_string()))?;
        w.write_all(b"\n")
            .map_err(|e| Error::io_msg(e.to_string()))?;
        w.flush().map_err(|e| Error::io_msg(e.to_string()))?;
        Ok(())
    }
}

/// 何も出力しない Log 実装（テスト用）
#[derive(Debug, Clone, Default)]
pub struct NoopLog;

impl Log for NoopLog {
    fn log(&self, _record: &LogRecord) -> Result<(), Error> {
        Ok(())
    }
}

/// 内側の Log に書きつつ、同じ JSON 行を stderr にも出す（--verbose 用）
pub struct StderrMirrorLog {
    inner: Arc<dyn Log>,
}

impl StderrMirrorLog {
    pub fn new(inner: Arc<dyn Log>) -> Self {
        Self { inner }
    }
}

impl Log for StderrMirrorLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if let Ok(line) = serde_json::to_string(record) {
            eprintln!("[log] {}", line);
        }
        self.inner.log(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::StdFileSystem;
    use crate::ports::outbound::LogLevel;
    use tempfile::tempdir;

    #[test]
    fn test_noop_log() {
        let log = NoopLog;
        assert!(log.log(&LogRecord::new(LogLevel::Info, "test")).is_ok());
    }

    #[test]
    fn test_file_json_log_appends_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state").join("log.jsonl");
        let log = FileJsonLog::new(Arc::new(StdFileSystem), &path);
        log.log(&LogRecord::new(LogLevel::Info, "command started").layer("cli"))
            .unwrap();
        log.log(&LogRecord::new(LogLevel::Error, "boom")).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["message"], "command started");
        assert_eq!(first["layer"], "cli");
        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["level"], "error");
    }

    #[test]
    fn test_stderr_mirror_delegates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.jsonl");
        let inner: Arc<dyn Log> = Arc::new(FileJsonLog::new(Arc::new(StdFileSystem), &path));
        let log = StderrMirrorLog::new(inner);
        log.log(&LogRecord::new(LogLevel::Debug, "mirrored")).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("mirrored"));
    }
}
