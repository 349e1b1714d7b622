// SPDX-FileCopyrightText: 2026 Verve Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the HistoryStore trait.

use async_trait::async_trait;
use rusqlite::params;
use tracing::debug;
use verve_core::{HistoryRecord, HistoryStore, VerveError};

use crate::database::{map_tr_err, Database};

/// SQLite-backed, append-only history store.
///
/// Wraps a [`Database`] handle; all writes go through the single
/// background writer thread.
pub struct SqliteHistory {
    db: Database,
}

impl SqliteHistory {
    /// Opens the store, creating the database and schema if needed.
    pub async fn open(path: &str) -> Result<Self, VerveError> {
        let db = Database::open(path).await?;
        Ok(Self { db })
    }

    /// Checkpoints and releases the database.
    pub async fn close(&self) -> Result<(), VerveError> {
        self.db.close().await
    }

    /// Returns all records for a user in insertion order.
    ///
    /// Maintenance and test support -- the pipeline itself never reads
    /// history.
    pub async fn records_for_user(&self, user_id: &str) -> Result<Vec<HistoryRecord>, VerveError> {
        let user_id = user_id.to_string();
        self.db
            .connection()
            .call(move |conn| {
                let mut stmt = conn.prepare(
                    "SELECT user_id, message, response FROM chat_history
                     WHERE user_id = ?1 ORDER BY id ASC",
                )?;
                let rows = stmt.query_map(params![user_id], |row| {
                    Ok(HistoryRecord {
                        user_id: row.get(0)?,
                        message: row.get(1)?,
                        response: row.get(2)?,
                    })
                })?;
                let mut records = Vec::new();
                for row in rows {
                    records.push(row?);
                }
                Ok(records)
            })
            .await
            .map_err(map_tr_err)
    }
}

#[async_trait]
impl HistoryStore for SqliteHistory {
    async fn append(&self, record: &HistoryRecord) -> Result<(), VerveError> {
        let record = record.clone();
        let created_at = chrono::Utc::now().to_rfc3339();
        self.db
            .connection()
            .call(move |conn| {
                conn.execute(
                    "INSERT INTO chat_history (user_id, message, response, created_at)
                     VALUES (?1, ?2, ?3, ?4)",
                    params![record.user_id, record.message, record.response, created_at],
                )?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;

        debug!("exchange appended to history");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn make_record(user_id: &str, message: &str, response: &str) -> HistoryRecord {
        HistoryRecord {
            user_id: user_id.to_string(),
            message: message.to_string(),
            response: response.to_string(),
        }
    }

    #[tokio::test]
    async fn append_and_read_back() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("history.db");
        let store = SqliteHistory::open(db_path.to_str().unwrap()).await.unwrap();

        store
            .append(&make_record("user-1", "how do I sleep better?", "anchor your wake time"))
            .await
            .unwrap();

        let records = store.records_for_user("user-1").await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "how do I sleep better?");
        assert_eq!(records[0].response, "anchor your wake time");

        store.close().await.unwrap();
    }

    #[tokio::test]
    async fn appends_accumulate_in_order() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("append_only.db");
        let store = SqliteHistory::open(db_path.to_str().unwrap()).await.unwrap();

        for i in 0..3 {
            store
                .append(&make_record("user-1", &format!("q{i}"), &format!("a{i}")))
                .await
                .unwrap();
        }

        let records = store.records_for_user("user-1").await.unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].message, "q0");
        assert_eq!(records[2].message, "q2");

        store.close().await.unwrap();
    }

    #[tokio::test]
    async fn records_are_scoped_per_user() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("scoped.db");
        let store = SqliteHistory::open(db_path.to_str().unwrap()).await.unwrap();

        store
            .append(&make_record("user-a", "hello", "hi"))
            .await
            .unwrap();
        store
            .append(&make_record("user-b", "hey", "hello"))
            .await
            .unwrap();

        let a = store.records_for_user("user-a").await.unwrap();
        let b = store.records_for_user("user-b").await.unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
        assert_eq!(a[0].message, "hello");

        store.close().await.unwrap();
    }

    #[tokio::test]
    async fn unknown_user_has_no_records() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("empty.db");
        let store = SqliteHistory::open(db_path.to_str().unwrap()).await.unwrap();

        let records = store.records_for_user("nobody").await.unwrap();
        assert!(records.is_empty());

        store.close().await.unwrap();
    }
}
