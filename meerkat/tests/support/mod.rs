//! テスト用アプリ構築ヘルパー

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{Duration, FixedOffset, Utc};
use meerkat::common::types::WatchTarget;
use meerkat::health::SiteHealthChecker;
use meerkat::notify::LineNotifier;
use meerkat::quake::{FeedClient, QuakeEvaluator};
use meerkat::store::DedupStore;
use meerkat::{api, AppState};
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;
use tower::ServiceExt;

/// テスト用アプリケーション一式
pub struct TestApp {
    /// ルーター
    pub app: Router,
    /// 評価エンジンが使う通知済みIDストア
    pub store: DedupStore,
}

/// フィード/LINEのURLとデータディレクトリを指定してアプリを構築する
pub fn build_app(
    feed_url: &str,
    line_base: &str,
    data_dir: &Path,
    watch_list: Vec<WatchTarget>,
) -> TestApp {
    let store = DedupStore::new(data_dir);
    let quake = QuakeEvaluator::new(FeedClient::new(feed_url), store.clone());
    // 遅延レスポンスのテストを短時間で回すため小さめのタイムアウト
    let health = SiteHealthChecker::with_timeout(std::time::Duration::from_millis(500));
    let notifier = LineNotifier::new(
        Some("test-token".to_string()),
        Some("test-user".to_string()),
    )
    .with_api_base(line_base);

    let state = AppState {
        quake: Arc::new(quake),
        health: Arc::new(health),
        notifier: Arc::new(notifier),
        watch_list: Arc::new(watch_list),
    };

    TestApp {
        app: api::create_app(state),
        store,
    }
}

/// GETリクエストを投げてJSONボディを返す
pub async fn get_json(app: Router, uri: &str) -> Value {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// 現在時刻（JST）をフィードの時刻書式で返す
pub fn jst_time_string(age: Duration) -> String {
    let jst = FixedOffset::east_opt(9 * 3600).unwrap();
    (Utc::now().with_timezone(&jst) - age)
        .format("%Y/%m/%d %H:%M:%S")
        .to_string()
}

/// フィードレスポンスのエントリを組み立てる
pub fn feed_entry(id: &str, time: &str, max_scale: i32) -> Value {
    json!({
        "id": id,
        "code": 551,
        "earthquake": {
            "time": time,
            "maxScale": max_scale,
            "domesticTsunami": "None",
            "hypocenter": { "name": "Test Place", "magnitude": 5.0 }
        }
    })
}
