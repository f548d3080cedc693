//! 面接セッション（transcript + フォーム + 回答履歴 + 現在の項目）

use crate::domain::{ChatMessage, InterviewField, InterviewForm, InterviewMemory};

/// 面接の最初の質問
pub const OPENING_QUESTION: &str = "Could you please tell me your full name?";

/// 1 回の面接の状態
///
/// transcript は追記のみ。現在の項目は前にしか進まない。
#[derive(Debug, Clone, PartialEq)]
pub struct InterviewSession {
    transcript: Vec<ChatMessage>,
    form: InterviewForm,
    memory: InterviewMemory,
    /// 全項目を終えたら None
    current_field: Option<InterviewField>,
}

impl Default for InterviewSession {
    fn default() -> Self {
        Self::new()
    }
}

impl InterviewSession {
    /// 新しい面接（最初の質問だけが transcript にある）
    pub fn new() -> Self {
        Self {
            transcript: vec![ChatMessage::assistant(OPENING_QUESTION)],
            form: InterviewForm::new(),
            memory: InterviewMemory::new(),
            current_field: InterviewField::ALL.first().copied(),
        }
    }

    /// 保存データから復元する
    pub fn restore(
        transcript: Vec<ChatMessage>,
        form: InterviewForm,
        memory: InterviewMemory,
        current_field: Option<InterviewField>,
    ) -> Self {
        let transcript = if transcript.is_empty() {
            vec![ChatMessage::assistant(OPENING_QUESTION)]
        } else {
            transcript
        };
        Self {
            transcript,
            form,
            memory,
            current_field,
        }
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn form(&self) -> &InterviewForm {
        &self.form
    }

    pub fn memory(&self) -> &InterviewMemory {
        &self.memory
    }

    pub fn current_field(&self) -> Option<InterviewField> {
        self.current_field
    }

    pub fn is_finished(&self) -> bool {
        self.current_field.is_none()
    }

    /// 候補者の回答を記録する（transcript と回答履歴の両方）
    pub fn record_answer(&mut self, field: InterviewField, answer: &str) {
        self.memory.add_response(field, answer);
        self.transcript.push(ChatMessage::user(answer));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.transcript.push(ChatMessage::assistant(content));
    }

    /// 回答履歴と満足度でフォームの項目を更新する
    pub fn apply_satisfaction(&mut self, field: InterviewField, satisfaction: u8) {
        self.form.update(
            field,
            self.memory.field_history(field),
            self.memory.all_responses(field).to_vec(),
            satisfaction,
        );
    }

    /// 次の項目へ進む。最後の項目からは None（面接終了）になる。
    pub fn advance(&mut self) -> Option<InterviewField> {
        self.current_field = self.current_field.and_then(|f| f.next());
        self.current_field
    }
}
