//! Contract Test: GET /
//!
//! 稼働確認エンドポイント

use crate::support::{build_app, get_json};

#[tokio::test]
async fn root_reports_running() {
    let dir = tempfile::tempdir().unwrap();
    let test_app = build_app("http://feed.invalid", "http://line.invalid", dir.path(), vec![]);

    let body = get_json(test_app.app, "/").await;
    assert_eq!(body["status"], "Meerkat Bot is running 🦦");
}
