//! Meerkat Bot Server
//!
//! 地震フィードと監視対象サイトをパトロールし、LINEへ警報を送るボット

#![warn(missing_docs)]

/// 共通型定義
pub mod common;

/// REST APIハンドラー
pub mod api;

/// 地震フィード評価エンジン
pub mod quake;

/// 監視対象サイトのヘルスチェック
pub mod health;

/// LINE通知クライアント
pub mod notify;

/// 通知済み地震IDの永続化
pub mod store;

/// ロギング初期化ユーティリティ
pub mod logging;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// CLIインターフェース
pub mod cli;

/// サーバー起動・シャットダウンハンドリング
pub mod server;

use std::sync::Arc;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// 地震フィード評価エンジン
    pub quake: Arc<quake::QuakeEvaluator>,
    /// 監視対象ヘルスチェッカー
    pub health: Arc<health::SiteHealthChecker>,
    /// LINE通知クライアント
    pub notifier: Arc<notify::LineNotifier>,
    /// 監視対象リスト
    pub watch_list: Arc<Vec<common::types::WatchTarget>>,
}
