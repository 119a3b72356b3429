//! 通知済み地震IDの永続化
//!
//! 最後に通知した地震IDを`last_quake.json`に1レコードだけ保持する。
//! プロセス再起動をまたいで同一イベントの二重通知を防ぐ。

use crate::common::error::BotError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Persisted single-slot record.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DedupRecord {
    id: String,
    updated_at: DateTime<Utc>,
}

/// Manages the `last_quake.json` file.
#[derive(Debug, Clone)]
pub struct DedupStore {
    path: PathBuf,
}

impl DedupStore {
    /// Create a store writing to `last_quake.json` in `data_dir`.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("last_quake.json"),
        }
    }

    /// Load the last notified quake id.
    ///
    /// 読み取り・解釈の失敗は「記録なし」に倒す。履歴の欠如が通知判断を
    /// 妨げてはならない。
    pub fn load(&self) -> Option<String> {
        if !self.path.exists() {
            return None;
        }
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read dedup record");
                return None;
            }
        };
        if content.trim().is_empty() {
            return None;
        }
        match serde_json::from_str::<DedupRecord>(&content) {
            Ok(record) => Some(record.id),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to parse dedup record");
                None
            }
        }
    }

    /// Overwrite the record with `id`.
    pub fn save(&self, id: &str) -> Result<(), BotError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| BotError::Store(format!("create {}: {}", parent.display(), e)))?;
        }
        let record = DedupRecord {
            id: id.to_string(),
            updated_at: Utc::now(),
        };
        let body = serde_json::to_vec_pretty(&record).map_err(|e| BotError::Store(e.to_string()))?;
        // 一時ファイルに書いてからrenameし、部分書き込みが見えないようにする
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, body)
            .map_err(|e| BotError::Store(format!("write {}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| BotError::Store(format!("rename {}: {}", self.path.display(), e)))?;
        Ok(())
    }
}
