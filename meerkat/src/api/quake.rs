//! 地震チェックAPI

use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::{info, warn};

/// GET /check_quake
///
/// 地震フィードを評価し、通知が必要なら送信する。`notified`は送信の
/// 成否を反映する。送信失敗が評価結果を覆すことはない。
pub async fn check_quake(State(state): State<AppState>) -> Json<Value> {
    info!("🦦 Starting earthquake patrol...");

    let outcome = state.quake.evaluate().await;

    let mut notified = false;
    if outcome.notify {
        if let Some(message) = outcome.message.as_deref() {
            match state.notifier.send(message).await {
                Ok(()) => notified = true,
                Err(e) => warn!(error = %e, "Failed to send quake notification"),
            }
        }
    }

    let mut body = json!({
        "status": outcome.status.as_str(),
        "notified": notified,
    });
    if let Some(detail) = outcome.detail {
        body["detail"] = Value::String(detail);
    }
    Json(body)
}
