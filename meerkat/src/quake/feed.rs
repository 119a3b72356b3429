//! P2P地震情報フィードクライアント
//!
//! 地震履歴APIから最新エントリを取得する。

use crate::common::error::BotError;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// フィード取得タイムアウト（秒）
const FEED_TIMEOUT_SECS: u64 = 10;

/// フィードへ送るUser-Agent
const USER_AGENT: &str = "MeerkatBot/1.0";

/// 震源情報
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Hypocenter {
    /// 震源地名
    #[serde(default)]
    pub name: String,
    /// マグニチュード
    #[serde(default)]
    pub magnitude: f64,
}

/// 地震情報本体
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Earthquake {
    /// 発生時刻（"%Y/%m/%d %H:%M:%S"、JST）
    pub time: String,
    /// 最大震度コード（10=震度1, 30=震度3, ...）
    #[serde(default)]
    pub max_scale: i32,
    /// 国内津波情報（"None"は心配なし、それ以外は注意）
    #[serde(default)]
    pub domestic_tsunami: String,
    /// 震源
    #[serde(default)]
    pub hypocenter: Hypocenter,
}

/// フィードの1エントリ
#[derive(Debug, Clone, Deserialize)]
pub struct FeedEntry {
    /// 一意識別子
    #[serde(default)]
    pub id: Option<String>,
    /// 旧形式の識別子
    #[serde(rename = "_id", default)]
    pub legacy_id: Option<String>,
    /// 地震情報
    pub earthquake: Earthquake,
}

impl FeedEntry {
    /// 通知済み判定に使うIDを導出する
    ///
    /// 明示IDがなければ旧形式ID、それもなければ発生時刻文字列に落とす
    /// （一意性は落ちるが安定した値は必ず得られる）。
    pub fn dedup_id(&self) -> String {
        self.id
            .clone()
            .or_else(|| self.legacy_id.clone())
            .unwrap_or_else(|| self.earthquake.time.clone())
    }
}

/// 地震履歴フィードクライアント
#[derive(Debug, Clone)]
pub struct FeedClient {
    /// HTTPクライアント
    client: reqwest::Client,
    /// フィードURL
    url: String,
}

impl FeedClient {
    /// 新しいフィードクライアントを作成
    pub fn new(url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(FEED_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");
        Self {
            client,
            url: url.into(),
        }
    }

    /// 最新エントリを1件取得する
    ///
    /// ネットワーク失敗・非2xx・JSON解釈失敗はいずれも`BotError::Fetch`。
    pub async fn fetch_latest(&self) -> Result<Option<FeedEntry>, BotError> {
        debug!(url = %self.url, "Fetching quake feed");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| BotError::Fetch(format!("feed request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BotError::Fetch(format!("feed returned HTTP {status}")));
        }

        let entries: Vec<FeedEntry> = response
            .json()
            .await
            .map_err(|e| BotError::Fetch(format!("feed body parse failed: {e}")))?;

        Ok(entries.into_iter().next())
    }
}
