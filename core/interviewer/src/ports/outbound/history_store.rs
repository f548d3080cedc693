//! 面接状態の保存・読み込みの Outbound ポート

use crate::domain::InterviewSession;
use common::error::Error;

/// セッション状態（transcript・フォーム・回答履歴）を永続化する能力
pub trait HistoryStore: Send + Sync {
    /// 保存済みのセッションを読む。保存が無ければ Ok(None)。
    fn load(&self) -> Result<Option<InterviewSession>, Error>;
    /// 現在のセッションで上書き保存する
    fn save(&self, session: &InterviewSession) -> Result<(), Error>;
}
