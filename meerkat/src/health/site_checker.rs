//! 監視対象サイトヘルスチェッカー
//!
//! 各監視対象へGETリクエストを送り、失敗を人間可読な1行に分類して
//! 集約する。通知は行わない（呼び出し側の責務）。

use crate::common::types::WatchTarget;
use std::time::Duration;
use tracing::{info, warn};

/// ヘルスチェックのタイムアウト（秒）
const HEALTH_CHECK_TIMEOUT_SECS: u64 = 30;

/// 監視対象ヘルスチェッカー
#[derive(Debug, Clone)]
pub struct SiteHealthChecker {
    /// HTTPクライアント
    client: reqwest::Client,
}

impl SiteHealthChecker {
    /// デフォルトタイムアウト（30秒）でチェッカーを作成
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(HEALTH_CHECK_TIMEOUT_SECS))
    }

    /// タイムアウトを指定してチェッカーを作成
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");
        Self { client }
    }

    /// 監視リストを順にチェックし、失敗行のリストを返す
    ///
    /// 出力順は入力順と一致する。URL未設定の対象は黙ってスキップする。
    /// 各対象への試行は1回のみ。
    pub async fn check(&self, targets: &[WatchTarget]) -> Vec<String> {
        let mut failures = Vec::new();

        for target in targets {
            let url = match target.url.as_deref() {
                Some(url) if !url.is_empty() => url,
                _ => continue,
            };

            match self.client.get(url).send().await {
                Ok(response) if response.status().is_success() => {
                    info!(name = %target.name, "Health check OK");
                }
                Ok(response) => {
                    let code = response.status().as_u16();
                    warn!(name = %target.name, code, "Abnormal response");
                    failures.push(format!(
                        "{}: abnormal response (code {})",
                        target.name, code
                    ));
                }
                Err(e) => {
                    // 内部事情を漏らさないため失敗原因は出力に含めない
                    warn!(name = %target.name, error = %e, "Access failed");
                    failures.push(format!("{}: access failed", target.name));
                }
            }
        }

        failures
    }
}

impl Default for SiteHealthChecker {
    fn default() -> Self {
        Self::new()
    }
}
