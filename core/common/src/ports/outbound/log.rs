//! 構造化ログ Outbound ポート
//!
//! 全レイヤー（CLI / usecase / adapter）から JSONL ログを出力するための trait。
//! ユーザー向けのコンソール表示とは別チャネル。

use crate::error::Error;
use serde::Serialize;
use std::collections::BTreeMap;

/// 現在時刻を ISO8601 (RFC3339) で返す。LogRecord の `ts` に使う。
pub fn now_iso8601() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// ログレベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

/// 1 行分のログレコード（JSONL の 1 行に対応）
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    /// ISO8601 形式のタイムスタンプ
    pub ts: String,
    pub level: LogLevel,
    pub message: String,
    /// 例: cli, usecase, adapter, wiring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer: Option<String>,
    /// 例: lifecycle, evaluation, negative, history, report, error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// 追加のキー・値（オブジェクトとして出力）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, serde_json::Value>>,
}

impl LogRecord {
    /// 現在時刻でレコードを作る
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            ts: now_iso8601(),
            level,
            message: message.into(),
            layer: None,
            kind: None,
            fields: None,
        }
    }

    pub fn layer(mut self, layer: &str) -> Self {
        self.layer = Some(layer.to_string());
        self
    }

    pub fn kind(mut self, kind: &str) -> Self {
        self.kind = Some(kind.to_string());
        self
    }

    pub fn field(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.fields
            .get_or_insert_with(BTreeMap::new)
            .insert(key.to_string(), value.into());
        self
    }
}

/// 構造化ログを出力する Outbound ポート
///
/// 実装は common::adapter::FileJsonLog（ファイルへ JSONL 追記）や NoopLog（テスト用）など。
pub trait Log: Send + Sync {
    /// 1 レコードをログに書き出す
    fn log(&self, record: &LogRecord) -> Result<(), Error>;
}
