//! 地震チェック判定エンジン
//!
//! フィード取得→重複判定→鮮度判定→震度判定の順に短絡評価し、
//! 通知する場合のみ本文整形とID記録を行う。

use super::feed::FeedClient;
use super::message;
use crate::common::types::QuakeStatus;
use crate::store::DedupStore;
use chrono::{Duration, FixedOffset, NaiveDateTime, Utc};
use tracing::{info, warn};

/// フィード時刻のタイムゾーン（JST, UTC+9）
const JST_OFFSET_SECS: i32 = 9 * 3600;

/// フィード時刻の書式
const FEED_TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// これより古いイベントは通知しない（時間）
const MAX_EVENT_AGE_HOURS: i64 = 24;

/// 通知対象の最小震度コード（30 = 震度3）
const MIN_NOTIFY_SCALE: i32 = 30;

/// 地震チェック1回分の結果
#[derive(Debug, Clone)]
pub struct QuakeCheckOutcome {
    /// 通知すべきか
    pub notify: bool,
    /// 通知本文（notify=trueのときのみ）
    pub message: Option<String>,
    /// 判定ステータス
    pub status: QuakeStatus,
    /// 補足情報
    pub detail: Option<String>,
}

impl QuakeCheckOutcome {
    /// 通知しない結果を作る
    fn skip(status: QuakeStatus, detail: Option<String>) -> Self {
        Self {
            notify: false,
            message: None,
            status,
            detail,
        }
    }
}

/// 地震フィード評価エンジン
///
/// 最新エントリ1件に対しポリシーを順に適用する。通知判定が確定した
/// 場合のみストアへIDを書き込む。スキップ・エラー経路では状態を変えない。
#[derive(Debug, Clone)]
pub struct QuakeEvaluator {
    /// フィードクライアント
    feed: FeedClient,
    /// 通知済みIDストア
    store: DedupStore,
}

impl QuakeEvaluator {
    /// 新しい評価エンジンを作成
    pub fn new(feed: FeedClient, store: DedupStore) -> Self {
        Self { feed, store }
    }

    /// 1回分の評価を実行する
    pub async fn evaluate(&self) -> QuakeCheckOutcome {
        let entry = match self.feed.fetch_latest().await {
            Ok(Some(entry)) => entry,
            Ok(None) => {
                info!("Quake feed returned no entries");
                return QuakeCheckOutcome::skip(QuakeStatus::NoData, None);
            }
            Err(e) => {
                warn!(error = %e, "Quake feed fetch failed");
                return QuakeCheckOutcome::skip(QuakeStatus::Error, Some(e.to_string()));
            }
        };

        let id = entry.dedup_id();

        // 副作用より先に重複判定。記録の欠如はエラー扱いしない。
        if let Some(last) = self.store.load() {
            if last == id {
                info!(%id, "Quake already notified");
                return QuakeCheckOutcome::skip(QuakeStatus::AlreadyNotified, Some(id));
            }
        }

        let time_str = entry.earthquake.time.clone();
        let jst = FixedOffset::east_opt(JST_OFFSET_SECS).expect("valid JST offset");
        let occurred_at = NaiveDateTime::parse_from_str(&time_str, FEED_TIME_FORMAT)
            .ok()
            .and_then(|naive| naive.and_local_timezone(jst).single());
        let occurred_at = match occurred_at {
            Some(occurred_at) => occurred_at,
            None => {
                warn!(time = %time_str, "Unparseable event time in feed");
                return QuakeCheckOutcome::skip(
                    QuakeStatus::Error,
                    Some(format!("unparseable event time: {time_str}")),
                );
            }
        };

        // コールドスタート時に古いイベントを再生しないための鮮度ガード。
        // 同一イベントの訂正を再評価できるよう、ここではIDを記録しない。
        let age = Utc::now().with_timezone(&jst) - occurred_at;
        if age > Duration::hours(MAX_EVENT_AGE_HOURS) {
            info!(%id, time = %time_str, "Skipping stale quake");
            return QuakeCheckOutcome::skip(QuakeStatus::TooOld, Some(time_str));
        }

        let max_scale = entry.earthquake.max_scale;
        if max_scale < MIN_NOTIFY_SCALE {
            // 震度が後から上方修正された場合に再評価できるよう記録しない
            info!(%id, max_scale, "Skipping small quake");
            return QuakeCheckOutcome::skip(
                QuakeStatus::SmallQuake,
                Some("Skipped notification (Scale < 3)".to_string()),
            );
        }

        let text = message::format_alert(&entry);

        // 判定確定後にIDを記録する。書き込み失敗は通知判断を覆さない。
        if let Err(e) = self.store.save(&id) {
            warn!(%id, error = %e, "Failed to persist dedup record");
        }

        info!(%id, max_scale, "Earthquake detected, notifying");
        QuakeCheckOutcome {
            notify: true,
            message: Some(text),
            status: QuakeStatus::Detected,
            detail: Some(time_str),
        }
    }
}
