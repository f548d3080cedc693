//! 項目ごとの回答履歴

use crate::domain::InterviewField;
use std::collections::BTreeMap;

/// 項目ごとの回答を順に保持する。
/// 評価には項目の全回答を空白で連結した文字列を使う。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterviewMemory {
    field_memory: BTreeMap<InterviewField, Vec<String>>,
}

impl InterviewMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 保存済みの回答列から復元する
    pub fn from_responses(field_memory: BTreeMap<InterviewField, Vec<String>>) -> Self {
        Self { field_memory }
    }

    pub fn add_response(&mut self, field: InterviewField, response: impl Into<String>) {
        self.field_memory
            .entry(field)
            .or_default()
            .push(response.into());
    }

    /// 項目の全回答を空白で連結したもの（回答が無ければ空文字）
    pub fn field_history(&self, field: InterviewField) -> String {
        self.all_responses(field).join(" ")
    }

    pub fn latest_response(&self, field: InterviewField) -> &str {
        self.all_responses(field)
            .last()
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn all_responses(&self, field: InterviewField) -> &[String] {
        self.field_memory
            .get(&field)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// 回答のある項目を進行順に列挙
    pub fn iter(&self) -> impl Iterator<Item = (InterviewField, &[String])> {
        self.field_memory
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (*k, v.as_slice()))
    }
}
