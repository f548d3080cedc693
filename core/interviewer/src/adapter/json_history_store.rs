//! 面接状態を JSON ファイルに保存する HistoryStore 実装
//!
//! 保存先は `<history_dir>/interview.json`。書き込みは一時ファイル + rename。

use std::collections::BTreeMap;
use std::sync::Arc;

use common::domain::HistoryDir;
use common::error::Error;
use common::ports::outbound::FileSystem;
use serde::{Deserialize, Serialize};

use crate::domain::{ChatMessage, FieldEntry, InterviewField, InterviewForm, InterviewMemory, InterviewSession};
use crate::ports::outbound::HistoryStore;

/// interview.json の形式
#[derive(Debug, Default, Serialize, Deserialize)]
struct HistoryFile {
    #[serde(default)]
    messages: Vec<ChatMessage>,
    #[serde(default)]
    interview_form: BTreeMap<String, FieldEntry>,
    #[serde(default)]
    memory: MemoryFile,
    /// 古いファイルには無い。無ければ未完了の最初の項目から再開する。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    current_field: Option<String>,
    #[serde(default)]
    finished: bool,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct MemoryFile {
    #[serde(default)]
    field_memory: BTreeMap<String, Vec<String>>,
    /// 読み込み時は field_memory から作り直すため参照しない
    #[serde(default)]
    current_responses: BTreeMap<String, String>,
}

impl HistoryFile {
    fn from_session(session: &InterviewSession) -> Self {
        let memory = session.memory();
        Self {
            messages: session.transcript().to_vec(),
            interview_form: session
                .form()
                .iter()
                .map(|(f, e)| (f.key().to_string(), e.clone()))
                .collect(),
            memory: MemoryFile {
                field_memory: memory
                    .iter()
                    .map(|(f, r)| (f.key().to_string(), r.to_vec()))
                    .collect(),
                current_responses: memory
                    .iter()
                    .map(|(f, _)| (f.key().to_string(), memory.field_history(f)))
                    .collect(),
            },
            current_field: session.current_field().map(|f| f.key().to_string()),
            finished: session.is_finished(),
        }
    }

    /// 未知の項目キーは捨て、欠けた項目は空で補う
    fn into_session(self) -> InterviewSession {
        let form = InterviewForm::from_entries(
            self.interview_form
                .into_iter()
                .filter_map(|(k, e)| InterviewField::from_key(&k).map(|f| (f, e))),
        );
        let memory = InterviewMemory::from_responses(
            self.memory
                .field_memory
                .into_iter()
                .filter_map(|(k, r)| InterviewField::from_key(&k).map(|f| (f, r)))
                .collect(),
        );
        let current_field = if self.finished {
            None
        } else {
            self.current_field
                .as_deref()
                .and_then(InterviewField::from_key)
                .or_else(|| form.first_incomplete())
        };
        InterviewSession::restore(self.messages, form, memory, current_field)
    }
}

/// JSON ファイルの HistoryStore
pub struct JsonHistoryStore {
    fs: Arc<dyn FileSystem>,
    dir: HistoryDir,
}

impl JsonHistoryStore {
    pub fn new(fs: Arc<dyn FileSystem>, dir: HistoryDir) -> Self {
        Self { fs, dir }
    }
}

impl HistoryStore for JsonHistoryStore {
    fn load(&self) -> Result<Option<InterviewSession>, Error> {
        let path = self.dir.interview_file();
        if !self.fs.exists(&path) {
            return Ok(None);
        }
        let content = self.fs.read_to_string(&path)?;
        let file: HistoryFile = serde_json::from_str(&content).map_err(|e| {
            Error::json(format!("Corrupt history file '{}': {}", path.display(), e))
        })?;
        if file.messages.is_empty() {
            return Ok(None);
        }
        Ok(Some(file.into_session()))
    }

    fn save(&self, session: &InterviewSession) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(&HistoryFile::from_session(session))?;
        self.fs.write_atomic(&self.dir.interview_file(), &json)
    }
}
