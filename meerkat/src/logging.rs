//! ロギング初期化ユーティリティ

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// tracingサブスクライバを初期化する
///
/// ログレベルは`MEERKAT_LOG_LEVEL`（未設定時は`info`）で制御する。
pub fn init() -> Result<()> {
    let level =
        crate::config::get_env_with_fallback_or("MEERKAT_LOG_LEVEL", "MEERKAT_LOG_LEVEL", "info");
    let filter = EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow!("failed to set tracing subscriber: {e}"))
}
