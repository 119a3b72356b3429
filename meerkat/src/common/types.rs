//! コアデータ型
//!
//! WatchTarget, QuakeStatus等の共通型

use serde::{Deserialize, Serialize};

/// 監視対象
///
/// 名前付きURL。URLが未設定の対象はヘルスチェック時にスキップされる。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WatchTarget {
    /// 表示名（一意キー）
    pub name: String,
    /// 監視先URL（未設定可）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl WatchTarget {
    /// 新しい監視対象を作成
    pub fn new(name: impl Into<String>, url: Option<String>) -> Self {
        Self {
            name: name.into(),
            url,
        }
    }
}

/// 地震チェックの判定ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuakeStatus {
    /// 通知対象の地震を検出した
    Detected,
    /// フィードにエントリがなかった
    NoData,
    /// 同一IDを通知済み
    AlreadyNotified,
    /// 発生から24時間超過
    TooOld,
    /// 震度3未満
    SmallQuake,
    /// フィード取得・解釈に失敗
    Error,
}

impl QuakeStatus {
    /// APIレスポンスに載せるステータス文字列
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Detected => "Earthquake Detected",
            Self::NoData => "No data",
            Self::AlreadyNotified => "Already notified",
            Self::TooOld => "No recent earthquake",
            Self::SmallQuake => "Small quake",
            Self::Error => "Error",
        }
    }
}
