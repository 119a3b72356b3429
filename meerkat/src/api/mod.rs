//! REST APIハンドラー
//!
//! 2つのトリガーエンドポイントと稼働確認エンドポイントを提供する。
//! ハンドラーは常に200 + JSONで応答し、生の例外を外へ出さない。

pub mod health;
pub mod quake;

use crate::AppState;
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

/// ルーターを構築する
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/check_quake", get(quake::check_quake))
        .route("/check_health", get(health::check_health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / - 稼働確認
async fn root() -> Json<Value> {
    Json(json!({ "status": "Meerkat Bot is running 🦦" }))
}
