//! LINE Messaging APIによる通知送信

use crate::common::error::BotError;
use serde_json::json;
use std::time::Duration;
use tracing::{info, warn};

/// LINE APIのベースURL
const LINE_API_BASE: &str = "https://api.line.me";

/// 送信タイムアウト（秒）
const SEND_TIMEOUT_SECS: u64 = 10;

/// LINE通知クライアント
///
/// 設定済みの単一受信者へテキストメッセージをプッシュ送信する。
/// トークンまたは受信者が未設定の場合、送信は常に失敗として扱う
/// （起動は妨げない）。
#[derive(Debug, Clone)]
pub struct LineNotifier {
    /// HTTPクライアント
    client: reqwest::Client,
    /// APIベースURL
    api_base: String,
    /// チャネルアクセストークン
    access_token: Option<String>,
    /// 送信先ユーザーID
    target_user_id: Option<String>,
}

impl LineNotifier {
    /// 新しい通知クライアントを作成
    pub fn new(access_token: Option<String>, target_user_id: Option<String>) -> Self {
        if access_token.is_none() {
            warn!("LINE_CHANNEL_ACCESS_TOKEN is not set");
        }
        if target_user_id.is_none() {
            warn!("Notification recipient is not set");
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(SEND_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");
        Self {
            client,
            api_base: LINE_API_BASE.to_string(),
            access_token,
            target_user_id,
        }
    }

    /// APIベースURLを差し替える（テスト用）
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// テキストメッセージを送信する
    pub async fn send(&self, text: &str) -> Result<(), BotError> {
        let (token, to) = match (self.access_token.as_deref(), self.target_user_id.as_deref()) {
            (Some(token), Some(to)) => (token, to),
            _ => {
                return Err(BotError::Transport(
                    "missing access token or recipient".to_string(),
                ))
            }
        };

        let url = format!("{}/v2/bot/message/push", self.api_base.trim_end_matches('/'));
        let body = json!({
            "to": to,
            "messages": [{ "type": "text", "text": text }],
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| BotError::Transport(format!("push request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BotError::Transport(format!("push returned HTTP {status}")));
        }

        info!("Notification sent");
        Ok(())
    }
}
