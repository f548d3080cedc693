//! Inbound ポート: ドライバ（CLI）がアプリを呼び出すインターフェース

use crate::cli::Config;
use common::error::Error;

/// 解析済みの Config でアプリを実行する Inbound ポート
///
/// main はこの trait を実装した Runner の run を呼び出す。
pub trait UseCaseRunner {
    fn run(&self, config: Config) -> Result<i32, Error>;
}
