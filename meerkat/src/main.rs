//! Meerkat Bot Server Entry Point

use clap::Parser;
use meerkat::cli::Cli;
use meerkat::config::AppConfig;
use meerkat::health::SiteHealthChecker;
use meerkat::notify::LineNotifier;
use meerkat::quake::{FeedClient, QuakeEvaluator};
use meerkat::store::DedupStore;
use meerkat::{logging, server, AppState};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // -h/--help, -V/--version のみ
    let _cli = Cli::parse();

    logging::init().expect("failed to initialize logging");

    let config = AppConfig::from_env();
    let bind_addr = config.bind_addr();

    let store = DedupStore::new(&config.data_dir);
    let quake = QuakeEvaluator::new(FeedClient::new(config.feed_url.clone()), store);
    let health = SiteHealthChecker::with_timeout(config.health_timeout);
    let notifier = LineNotifier::new(
        config.line_access_token.clone(),
        config.target_user_id.clone(),
    );

    let state = AppState {
        quake: Arc::new(quake),
        health: Arc::new(health),
        notifier: Arc::new(notifier),
        watch_list: Arc::new(config.watch_list.clone()),
    };

    server::run(state, &bind_addr).await;
}
