//! 面接フォーム（項目ごとの回答と満足度）

use crate::domain::InterviewField;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// この満足度以上で項目完了とみなす
pub const SATISFACTION_THRESHOLD: u8 = 7;

/// 項目の状態（満足度から導出）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldStatus {
    /// 満足度 7 以上
    Complete,
    /// 満足度 1〜6
    Incomplete,
    /// 満足度 0（未評価・スキップ）
    Skipped,
}

impl FieldStatus {
    pub fn from_satisfaction(satisfaction: u8) -> Self {
        if satisfaction >= SATISFACTION_THRESHOLD {
            Self::Complete
        } else if satisfaction > 0 {
            Self::Incomplete
        } else {
            Self::Skipped
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Incomplete => "incomplete",
            Self::Skipped => "skipped",
        }
    }
}

/// 1 項目分の記録
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEntry {
    /// 全回答を空白で連結したもの
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub responses: Vec<String>,
    /// 0〜10
    #[serde(default)]
    pub satisfaction: u8,
}

impl FieldEntry {
    pub fn status(&self) -> FieldStatus {
        FieldStatus::from_satisfaction(self.satisfaction)
    }
}

/// 全項目のフォーム。常に全項目のエントリを持つ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewForm {
    entries: BTreeMap<InterviewField, FieldEntry>,
}

impl Default for InterviewForm {
    fn default() -> Self {
        Self {
            entries: InterviewField::ALL
                .into_iter()
                .map(|f| (f, FieldEntry::default()))
                .collect(),
        }
    }
}

impl InterviewForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// 保存データから復元する。欠けた項目は空エントリで補う。
    pub fn from_entries(entries: impl IntoIterator<Item = (InterviewField, FieldEntry)>) -> Self {
        let mut form = Self::default();
        for (field, mut entry) in entries {
            entry.satisfaction = entry.satisfaction.min(10);
            form.entries.insert(field, entry);
        }
        form
    }

    pub fn entry(&self, field: InterviewField) -> &FieldEntry {
        // from_entries / default で全項目が入っている
        &self.entries[&field]
    }

    /// 評価結果で項目を更新する
    pub fn update(&mut self, field: InterviewField, value: String, responses: Vec<String>, satisfaction: u8) {
        self.entries.insert(
            field,
            FieldEntry {
                value,
                responses,
                satisfaction: satisfaction.min(10),
            },
        );
    }

    /// 項目を進行順に列挙
    pub fn iter(&self) -> impl Iterator<Item = (InterviewField, &FieldEntry)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn completed(&self) -> usize {
        self.entries
            .values()
            .filter(|e| e.status() == FieldStatus::Complete)
            .count()
    }

    /// 満足度が閾値未満の最初の項目
    pub fn first_incomplete(&self) -> Option<InterviewField> {
        self.iter()
            .find(|(_, e)| e.status() != FieldStatus::Complete)
            .map(|(f, _)| f)
    }
}
