//! 面接の入出力（端末）Outbound ポート
//!
//! usecase はこの trait にのみ依存し、adapter が stdin/stdout で対話する。

use crate::domain::{ChatMessage, InterviewField};
use common::error::Error;

pub trait InterviewConsole: Send + Sync {
    /// transcript の 1 メッセージを表示
    fn show_message(&self, message: &ChatMessage) -> Result<(), Error>;
    /// 項目が変わったときの見出し
    fn show_topic(&self, field: InterviewField) -> Result<(), Error>;
    /// サマリー等の補足表示
    fn show_notice(&self, text: &str) -> Result<(), Error>;
    /// ユーザーに見せるエラー
    fn show_error(&self, text: &str) -> Result<(), Error>;
    /// 1 行読む。EOF なら Ok(None)。
    fn read_answer(&self) -> Result<Option<String>, Error>;
}
