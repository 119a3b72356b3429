//! 監視対象サイトのヘルスチェック
//!
//! プル型ヘルスチェックで監視対象URLの稼働状況を確認する

pub mod site_checker;

pub use site_checker::SiteHealthChecker;
