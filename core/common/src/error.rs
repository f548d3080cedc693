//! エラーハンドリング
//!
//! 全レイヤーで `Result<_, Error>` を返し、main で終了コードに変換する。

/// エラー型
///
/// バリアントごとに終了コード（sysexits 準拠）が決まる。
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// 引数不正（64）
    #[error("{0}")]
    InvalidArgument(String),
    /// 設定・環境変数の不備（64）
    #[error("{0}")]
    Env(String),
    /// 保存データの破損など（65）
    #[error("{0}")]
    Json(String),
    /// ファイル I/O（74）
    #[error("{0}")]
    Io(String),
    /// HTTP 通信の失敗（74）
    #[error("{0}")]
    Http(String),
    /// LLM API が返したエラー（74）
    #[error("{0}")]
    Provider(String),
    /// 内部エラー（70）
    #[error("{0}")]
    System(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }

    /// プロセスの終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) | Self::Env(_) => 64,
            Self::Json(_) => 65,
            Self::System(_) => 70,
            Self::Io(_) | Self::Http(_) | Self::Provider(_) => 74,
        }
    }

    /// 使い方を表示すべきエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// 上流（LLM API）起因のエラーか
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Provider(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
