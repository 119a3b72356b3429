//! Configuration management via environment variables
//!
//! 環境変数ヘルパーと、起動時に一度だけ構築してコンポーネントへ渡す
//! `AppConfig`を提供する。

use crate::common::types::WatchTarget;
use std::path::PathBuf;
use std::time::Duration;

/// デフォルトの地震履歴フィードURL
pub const DEFAULT_FEED_URL: &str = "https://api.p2pquake.net/v2/history?codes=551&limit=1";

/// Get an environment variable with fallback to a deprecated name
///
/// If the new variable name is set, returns its value.
/// If only the old (deprecated) variable name is set, returns its value
/// and logs a deprecation warning.
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// Get an environment variable with fallback and default value
pub fn get_env_with_fallback_or(new_name: &str, old_name: &str, default: &str) -> String {
    get_env_with_fallback(new_name, old_name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable with fallback, parsing to a specific type
///
/// Returns the default if neither is set or parsing fails.
pub fn get_env_with_fallback_parse<T: std::str::FromStr>(
    new_name: &str,
    old_name: &str,
    default: T,
) -> T {
    get_env_with_fallback(new_name, old_name)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// アプリケーション設定
///
/// 値が欠けていても起動は継続する。通知資格情報が無ければ送信は
/// 失敗扱いのno-opになり、URL未設定の監視対象はスキップされる。
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
    /// 地震フィードURL
    pub feed_url: String,
    /// データディレクトリ（通知済みID記録の置き場所）
    pub data_dir: PathBuf,
    /// LINEチャネルアクセストークン
    pub line_access_token: Option<String>,
    /// 通知先ユーザーID
    pub target_user_id: Option<String>,
    /// 監視対象リスト
    pub watch_list: Vec<WatchTarget>,
    /// ヘルスチェックのタイムアウト
    pub health_timeout: Duration,
}

impl AppConfig {
    /// 環境変数から設定を構築する
    pub fn from_env() -> Self {
        let feed_url = get_env_with_fallback_or("MEERKAT_FEED_URL", "P2P_API_URL", DEFAULT_FEED_URL);
        let watch_list = match std::env::var("MEERKAT_WATCH_LIST") {
            Ok(raw) => parse_watch_list(&raw),
            Err(_) => default_watch_list(&feed_url),
        };
        let timeout_secs = get_env_with_fallback_parse(
            "MEERKAT_HEALTH_TIMEOUT_SECS",
            "MEERKAT_HEALTH_TIMEOUT_SECS",
            30u64,
        );

        Self {
            host: get_env_with_fallback_or("MEERKAT_HOST", "MEERKAT_HOST", "0.0.0.0"),
            port: get_env_with_fallback_parse("MEERKAT_PORT", "MEERKAT_PORT", 8080),
            data_dir: PathBuf::from(get_env_with_fallback_or(
                "MEERKAT_DATA_DIR",
                "MEERKAT_DATA_DIR",
                "data",
            )),
            line_access_token: std::env::var("LINE_CHANNEL_ACCESS_TOKEN").ok(),
            target_user_id: get_env_with_fallback("MEERKAT_TARGET_USER_ID", "TARGET_USER_ID"),
            health_timeout: Duration::from_secs(timeout_secs),
            feed_url,
            watch_list,
        }
    }

    /// リッスンアドレス文字列を返す
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `name=url;name=url`形式の監視リストを解釈する
///
/// URL部が空の項目も対象として保持される（チェック時にスキップ）。
/// 名前のない項目と空要素は無視する。
pub fn parse_watch_list(raw: &str) -> Vec<WatchTarget> {
    raw.split(';')
        .filter_map(|item| {
            let item = item.trim();
            if item.is_empty() {
                return None;
            }
            let (name, url) = item.split_once('=')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            let url = url.trim();
            Some(WatchTarget::new(
                name,
                (!url.is_empty()).then(|| url.to_string()),
            ))
        })
        .collect()
}

fn default_watch_list(feed_url: &str) -> Vec<WatchTarget> {
    vec![
        WatchTarget::new("Google", Some("https://www.google.com".to_string())),
        WatchTarget::new("Quake Feed", Some(feed_url.to_string())),
    ]
}
