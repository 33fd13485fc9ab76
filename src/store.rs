//! SQLite record store
//!
//! One database file and one table per entity kind. The store keeps only
//! the file path: each operation opens a connection, uses it, and drops it,
//! so no connection is shared across calls.
//!
//! Timestamps are RFC 3339 UTC text with fixed microsecond precision.
//! Within a table `updated_at` is strictly increasing: a write that lands
//! on the same microsecond as (or before) the newest row is stamped one
//! microsecond after it.

use chrono::{DateTime, Duration, SubsecRound, Utc};
use rusqlite::types::Value;
use rusqlite::{Connection, OpenFlags, Row, TransactionBehavior, params_from_iter};
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::entity::{EntityKind, Stamped, format_timestamp, parse_timestamp};
use crate::error::StoreError;

const BUSY_TIMEOUT_SECS: u64 = 5;

/// Durable keyed storage for one entity kind
#[derive(Debug, Clone)]
pub struct RecordStore<K> {
    path: PathBuf,
    _kind: PhantomData<fn() -> K>,
}

impl<K: EntityKind> RecordStore<K> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _kind: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing table if it does not exist. Idempotent.
    pub fn ensure_schema(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(&self.path)?;
        conn.execute_batch(&schema_sql::<K>())?;
        info!(table = K::TABLE, path = %self.path.display(), "schema ready");
        Ok(())
    }

    /// Insert or replace the row keyed by the record's identifier.
    ///
    /// All mutable columns and `updated_at` are overwritten; `created_at`
    /// keeps its first value. The record is not re-validated here.
    pub fn upsert(&self, record: &K) -> Result<Stamped<K>, StoreError> {
        let mut conn = self.connect()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let newest: Option<String> = tx.query_row(
            &format!("SELECT MAX(updated_at) FROM {}", K::TABLE),
            [],
            |row| row.get(0),
        )?;
        let newest = newest
            .map(|ts| parse_timestamp(K::TABLE, &ts))
            .transpose()?;
        let updated_at = next_timestamp(Utc::now(), newest);
        let stamp = format_timestamp(&updated_at);

        let mut values = record.to_values();
        values.push(Value::Text(stamp.clone()));
        values.push(Value::Text(stamp));
        tx.execute(&upsert_sql::<K>(), params_from_iter(values))?;

        let created: String = tx.query_row(
            &format!(
                "SELECT created_at FROM {} WHERE {} = ?1",
                K::TABLE,
                K::key_column()
            ),
            [record.id()],
            |row| row.get(0),
        )?;
        tx.commit()?;

        debug!(table = K::TABLE, id = record.id(), updated_at = %updated_at, "record written");
        Ok(Stamped {
            record: record.clone(),
            created_at: parse_timestamp(K::TABLE, &created)?,
            updated_at,
        })
    }

    /// All rows, most recently updated first. Read failures are logged and
    /// yield an empty list.
    pub fn list_all(&self) -> Vec<Stamped<K>> {
        match self.try_list_all() {
            Ok(records) => records,
            Err(e) => {
                warn!(table = K::TABLE, error = %e, "failed to read records");
                Vec::new()
            }
        }
    }

    pub fn try_list_all(&self) -> Result<Vec<Stamped<K>>, StoreError> {
        let conn = self.connect()?;
        let sql = format!(
            "{} ORDER BY updated_at DESC, {} ASC",
            select_sql::<K>(),
            K::key_column()
        );
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;

        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(read_stamped::<K>(row)?);
        }
        Ok(records)
    }

    pub fn get(&self, id: &str) -> Result<Option<Stamped<K>>, StoreError> {
        let conn = self.connect()?;
        let sql = format!("{} WHERE {} = ?1", select_sql::<K>(), K::key_column());
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query([id])?;
        match rows.next()? {
            Some(row) => Ok(Some(read_stamped::<K>(row)?)),
            None => Ok(None),
        }
    }

    pub fn count(&self) -> Result<usize, StoreError> {
        let conn = self.connect()?;
        let count: i64 =
            conn.query_row(&format!("SELECT COUNT(*) FROM {}", K::TABLE), [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    /// Open an existing database. Never creates the file: that is
    /// `ensure_schema`'s job.
    fn connect(&self) -> Result<Connection, StoreError> {
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        conn.busy_timeout(std::time::Duration::from_secs(BUSY_TIMEOUT_SECS))?;
        Ok(conn)
    }
}

/// Write timestamp for a new row given the newest stored one
fn next_timestamp(now: DateTime<Utc>, newest: Option<DateTime<Utc>>) -> DateTime<Utc> {
    let now = now.trunc_subsecs(6);
    match newest {
        Some(newest) if now <= newest => newest + Duration::microseconds(1),
        _ => now,
    }
}

fn schema_sql<K: EntityKind>() -> String {
    let columns = K::COLUMNS
        .iter()
        .map(|c| format!("    {} {}", c.name, c.kind.sql()))
        .collect::<Vec<_>>()
        .join(",\n");
    format!(
        "CREATE TABLE IF NOT EXISTS {table} (\n{columns},\n    \
         created_at TEXT NOT NULL,\n    updated_at TEXT NOT NULL\n);\n\
         CREATE INDEX IF NOT EXISTS idx_{table}_updated_at ON {table}(updated_at);",
        table = K::TABLE,
    )
}

fn column_list<K: EntityKind>() -> String {
    K::COLUMNS
        .iter()
        .map(|c| c.name)
        .chain(["created_at", "updated_at"])
        .collect::<Vec<_>>()
        .join(", ")
}

fn select_sql<K: EntityKind>() -> String {
    format!("SELECT {} FROM {}", column_list::<K>(), K::TABLE)
}

fn upsert_sql<K: EntityKind>() -> String {
    let placeholders = (1..=K::COLUMNS.len() + 2)
        .map(|i| format!("?{}", i))
        .collect::<Vec<_>>()
        .join(", ");
    let updates = K::COLUMNS[1..]
        .iter()
        .map(|c| c.name)
        .chain(["updated_at"])
        .map(|name| format!("{name} = excluded.{name}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({}) ON CONFLICT({}) DO UPDATE SET {}",
        K::TABLE,
        column_list::<K>(),
        placeholders,
        K::key_column(),
        updates
    )
}

fn read_stamped<K: EntityKind>(row: &Row<'_>) -> Result<Stamped<K>, StoreError> {
    let n = K::COLUMNS.len();
    let record = K::from_row(row)?;
    let created: String = row.get(n)?;
    let updated: String = row.get(n + 1)?;
    Ok(Stamped {
        record,
        created_at: parse_timestamp(K::TABLE, &created)?,
        updated_at: parse_timestamp(K::TABLE, &updated)?,
    })
}
