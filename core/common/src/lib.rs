//! interviewer 共通ライブラリ
//!
//! エラー型・ドメイン型・Outbound ポートと標準アダプタ・LLM ドライバを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// Outbound ポート
pub mod ports;

/// ポートの標準実装
pub mod adapter;

/// LLMドライバーとプロバイダ
pub mod llm;
