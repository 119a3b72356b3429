//! エラー型定義
//!
//! 統一エラー型（thiserror使用）

use thiserror::Error;

/// Meerkat Bot error type
///
/// このコアに致命的エラーは存在しない。各操作は構造化された結果を返し、
/// ハンドラーは常にJSONステータスで応答する。
#[derive(Debug, Error)]
pub enum BotError {
    /// Feed or watched-endpoint fetch failure (network, HTTP status, parse)
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Dedup store read/write failure
    #[error("Store error: {0}")]
    Store(String),

    /// Notification transport failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
