//! Contract Test: GET /check_quake
//!
//! 地震チェックの判定フロー（検出・重複・鮮度・震度・エラー）

use crate::support::{build_app, feed_entry, get_json, jst_time_string};
use chrono::Duration;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_feed(entries: serde_json::Value) -> MockServer {
    let feed = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(entries))
        .mount(&feed)
        .await;
    feed
}

async fn mock_line(expected_pushes: u64) -> MockServer {
    let line = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/bot/message/push"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(expected_pushes)
        .mount(&line)
        .await;
    line
}

/// 新しいID・震度4・現在時刻 → 通知してIDを記録する
#[tokio::test]
async fn fresh_large_quake_notifies_and_records_id() {
    let now = jst_time_string(Duration::zero());
    let feed = mock_feed(json!([feed_entry("q1", &now, 40)])).await;
    let line = mock_line(1).await;
    let dir = tempfile::tempdir().unwrap();

    let test_app = build_app(
        &format!("{}/v2/history", feed.uri()),
        &line.uri(),
        dir.path(),
        vec![],
    );

    let body = get_json(test_app.app, "/check_quake").await;
    assert_eq!(body["status"], "Earthquake Detected");
    assert_eq!(body["notified"], true);

    // 送信された本文を検証
    let requests = line.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let push: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(push["to"], "test-user");
    let text = push["messages"][0]["text"].as_str().unwrap();
    assert!(text.contains("🦦 Earthquake Alert 🦦"));
    assert!(text.contains("[Hypocenter] Test Place"));
    assert!(text.contains("[Max Intensity] intensity 4"));
    assert!(text.contains("No tsunami risk"));

    assert_eq!(test_app.store.load().as_deref(), Some("q1"));
}

/// 同一フィードを2回評価すると、2回目はAlreadyNotifiedになる
#[tokio::test]
async fn replaying_same_feed_is_idempotent() {
    let now = jst_time_string(Duration::zero());
    let feed = mock_feed(json!([feed_entry("q1", &now, 40)])).await;
    let line = mock_line(1).await;
    let dir = tempfile::tempdir().unwrap();

    let test_app = build_app(
        &format!("{}/v2/history", feed.uri()),
        &line.uri(),
        dir.path(),
        vec![],
    );

    let first = get_json(test_app.app.clone(), "/check_quake").await;
    assert_eq!(first["status"], "Earthquake Detected");
    assert_eq!(first["notified"], true);

    let second = get_json(test_app.app, "/check_quake").await;
    assert_eq!(second["status"], "Already notified");
    assert_eq!(second["notified"], false);

    assert_eq!(test_app.store.load().as_deref(), Some("q1"));
}

/// 24時間より古いイベントは通知せず、IDも記録しない
#[tokio::test]
async fn stale_quake_is_skipped_without_store_write() {
    let old = jst_time_string(Duration::hours(25));
    let feed = mock_feed(json!([feed_entry("q-old", &old, 40)])).await;
    let line = mock_line(0).await;
    let dir = tempfile::tempdir().unwrap();

    let test_app = build_app(
        &format!("{}/v2/history", feed.uri()),
        &line.uri(),
        dir.path(),
        vec![],
    );

    let body = get_json(test_app.app, "/check_quake").await;
    assert_eq!(body["status"], "No recent earthquake");
    assert_eq!(body["notified"], false);
    assert!(test_app.store.load().is_none());
}

/// 震度3未満は通知せず、IDも記録しない（後の上方修正を再評価可能に保つ）
#[tokio::test]
async fn small_quake_is_skipped_without_store_write() {
    let now = jst_time_string(Duration::zero());
    let feed = mock_feed(json!([feed_entry("q-small", &now, 20)])).await;
    let line = mock_line(0).await;
    let dir = tempfile::tempdir().unwrap();

    let test_app = build_app(
        &format!("{}/v2/history", feed.uri()),
        &line.uri(),
        dir.path(),
        vec![],
    );

    let body = get_json(test_app.app, "/check_quake").await;
    assert_eq!(body["status"], "Small quake");
    assert_eq!(body["notified"], false);
    assert_eq!(body["detail"], "Skipped notification (Scale < 3)");
    assert!(test_app.store.load().is_none());
}

/// 空フィードはNoData
#[tokio::test]
async fn empty_feed_reports_no_data() {
    let feed = mock_feed(json!([])).await;
    let line = mock_line(0).await;
    let dir = tempfile::tempdir().unwrap();

    let test_app = build_app(
        &format!("{}/v2/history", feed.uri()),
        &line.uri(),
        dir.path(),
        vec![],
    );

    let body = get_json(test_app.app, "/check_quake").await;
    assert_eq!(body["status"], "No data");
    assert_eq!(body["notified"], false);
}

/// フィードの5xxはErrorステータスに変換され、状態は変わらない
#[tokio::test]
async fn feed_server_error_reports_error_status() {
    let feed = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/history"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&feed)
        .await;
    let line = mock_line(0).await;
    let dir = tempfile::tempdir().unwrap();

    let test_app = build_app(
        &format!("{}/v2/history", feed.uri()),
        &line.uri(),
        dir.path(),
        vec![],
    );

    let body = get_json(test_app.app, "/check_quake").await;
    assert_eq!(body["status"], "Error");
    assert_eq!(body["notified"], false);
    assert!(test_app.store.load().is_none());
}

/// 明示IDのないエントリは旧形式IDで重複判定される
#[tokio::test]
async fn legacy_id_is_used_for_dedup() {
    let now = jst_time_string(Duration::zero());
    let entry = json!([{
        "_id": "legacy-9",
        "earthquake": {
            "time": now,
            "maxScale": 50,
            "domesticTsunami": "Warning",
            "hypocenter": { "name": "Offshore", "magnitude": 6.8 }
        }
    }]);
    let feed = mock_feed(entry).await;
    let line = mock_line(1).await;
    let dir = tempfile::tempdir().unwrap();

    let test_app = build_app(
        &format!("{}/v2/history", feed.uri()),
        &line.uri(),
        dir.path(),
        vec![],
    );

    let body = get_json(test_app.app, "/check_quake").await;
    assert_eq!(body["status"], "Earthquake Detected");
    assert_eq!(test_app.store.load().as_deref(), Some("legacy-9"));

    let requests = line.received_requests().await.unwrap();
    let push: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let text = push["messages"][0]["text"].as_str().unwrap();
    assert!(text.contains("[Max Intensity] intensity 5-upper"));
    assert!(text.contains("⚠️ Check tsunami information!"));
}

/// LINE送信が失敗しても判定結果は返り、notified=falseになる
#[tokio::test]
async fn send_failure_reports_notified_false() {
    let now = jst_time_string(Duration::zero());
    let feed = mock_feed(json!([feed_entry("q2", &now, 40)])).await;
    let line = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/bot/message/push"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&line)
        .await;
    let dir = tempfile::tempdir().unwrap();

    let test_app = build_app(
        &format!("{}/v2/history", feed.uri()),
        &line.uri(),
        dir.path(),
        vec![],
    );

    let body = get_json(test_app.app, "/check_quake").await;
    assert_eq!(body["status"], "Earthquake Detected");
    assert_eq!(body["notified"], false);
    // 判定は確定しているのでIDは記録済み
    assert_eq!(test_app.store.load().as_deref(), Some("q2"));
}
