//! LINE通知クライアント
//!
//! 設定済みの単一受信者へのプッシュ通知を担う

pub mod line;

pub use line::LineNotifier;
