//! 地震フィード評価エンジン
//!
//! P2P地震情報フィードの最新1件を取得し、重複・鮮度・震度のポリシーを
//! 適用して通知要否を判定する。

pub mod evaluator;
pub mod feed;
pub mod message;

pub use evaluator::{QuakeCheckOutcome, QuakeEvaluator};
pub use feed::FeedClient;
