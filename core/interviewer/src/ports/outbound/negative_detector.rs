//! 否定回答判定の Outbound ポート

/// 回答が「ありません」「経験なし」のような明確な否定かを判定する能力
///
/// 判定手段が失敗しても実装側で代替判定するため、結果は常に bool。
pub trait NegativeDetector: Send + Sync {
    fn is_negative(&self, answer: &str) -> bool;
}
