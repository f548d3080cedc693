//! 面接の進捗サマリー（表示用テキスト）

use crate::domain::{FieldEntry, FieldStatus, InterviewForm};

/// レポートの status と同じ区分（回答があっても満足度 0 は未完了扱い）
fn marker(entry: &FieldEntry) -> &'static str {
    match entry.status() {
        FieldStatus::Complete => "[x]",
        FieldStatus::Incomplete => "[~]",
        FieldStatus::Skipped => "[ ]",
    }
}

/// 進捗と項目ごとの状態を複数行のテキストにする
pub fn render_summary(form: &InterviewForm) -> String {
    let mut out = format!(
        "Interview Progress\n{}/{} topics completed\n",
        form.completed(),
        form.total()
    );
    for (field, entry) in form.iter() {
        out.push_str(&format!(
            "\n{} {} ({}/10)\n",
            marker(entry),
            field.title(),
            entry.satisfaction
        ));
        if entry.responses.is_empty() {
            out.push_str("    No response provided\n");
        } else {
            for r in &entry.responses {
                out.push_str(&format!("    - {}\n", r));
            }
        }
    }
    out
}
