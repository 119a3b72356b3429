//! 共通型定義
//!
//! エラー型とコアデータ型

pub mod error;
pub mod types;
