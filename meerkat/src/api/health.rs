//! サイトヘルスチェックAPI

use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::{info, warn};

/// アラート本文の件名行
const ALERT_HEADER: &str = "🦦 Emergency Alert!";

/// GET /check_health
///
/// 監視リストを順にチェックし、失敗があればまとめて1通のアラートを
/// 送信する。送信に失敗してもアラート内容は呼び出し元へ返す。
pub async fn check_health(State(state): State<AppState>) -> Json<Value> {
    info!("🦦 Starting website health patrol...");

    let failures = state.health.check(&state.watch_list).await;

    if failures.is_empty() {
        return Json(json!({ "status": "All Green", "detail": "all targets healthy" }));
    }

    let alert = format!("{}\n\n{}", ALERT_HEADER, failures.join("\n"));
    if let Err(e) = state.notifier.send(&alert).await {
        warn!(error = %e, "Failed to send health alert");
    }

    Json(json!({ "status": "Alert Sent", "detail": failures }))
}
