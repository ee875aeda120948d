//! Table-agnostic CRUD over one SQLite connection.
//!
//! Statements are assembled from caller-supplied table/column names, with every
//! value bound as a parameter. Conditions are caller-authored SQL fragments using
//! `?` placeholders (e.g. `"id = ?"`). Each call auto-commits.

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::{str::FromStr, time::Duration};
use tracing::{debug, info};

use super::value::{DbRow, SqlValue};
use crate::error::KitError;

/// `(column name, column type/constraints)` as used by `create_table`.
pub type ColumnDef<'a> = (&'a str, &'a str);

pub struct Crud {
    pool: SqlitePool,
}

impl Crud {
    /// Opens (creating if missing) the database at `database_url`, e.g.
    /// `sqlite://college.db` or `sqlite::memory:`.
    pub async fn open(database_url: &str) -> Result<Self, KitError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5))
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        // One connection: `sqlite::memory:` databases are per-connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(connect_opts)
            .await?;

        info!(database_url, "database opened");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn create_table(&self, table: &str, columns: &[ColumnDef<'_>]) -> Result<(), KitError> {
        let table = identifier(table)?;
        if columns.is_empty() {
            return Err(KitError::EmptyRecord {
                operation: "create_table",
                table: table.to_string(),
            });
        }
        let column_defs = columns
            .iter()
            .map(|(name, ty)| identifier(name).map(|name| format!("{name} {ty}")))
            .collect::<Result<Vec<_>, _>>()?
            .join(", ");

        let sql = format!("CREATE TABLE IF NOT EXISTS {table} ({column_defs})");
        debug!(table, sql = %sql, "create table");
        sqlx::query(&sql).execute(&self.pool).await?;

        info!(table, "table ready");
        Ok(())
    }

    /// Inserts one record and returns its rowid.
    pub async fn insert_record(
        &self,
        table: &str,
        data: &[(&str, SqlValue)],
    ) -> Result<i64, KitError> {
        let table = identifier(table)?;
        if data.is_empty() {
            return Err(KitError::EmptyRecord {
                operation: "insert",
                table: table.to_string(),
            });
        }
        let columns = data
            .iter()
            .map(|(name, _)| identifier(name))
            .collect::<Result<Vec<_>, _>>()?
            .join(", ");
        let sql = format!(
            "INSERT INTO {table} ({columns}) VALUES ({})",
            placeholders(data.len())
        );

        let mut query = sqlx::query(&sql);
        for (_, value) in data {
            query = value.bind_to(query);
        }
        let res = query.execute(&self.pool).await?;
        let id = res.last_insert_rowid();

        debug!(table, id, "record inserted");
        Ok(id)
    }

    pub async fn fetch_all(&self, table: &str) -> Result<Vec<DbRow>, KitError> {
        let table = identifier(table)?;
        let sql = format!("SELECT * FROM {table}");
        self.fetch(&sql, &[]).await
    }

    pub async fn fetch_by_condition(
        &self,
        table: &str,
        condition: &str,
        params: &[SqlValue],
    ) -> Result<Vec<DbRow>, KitError> {
        let table = identifier(table)?;
        let sql = format!("SELECT * FROM {table} WHERE {condition}");
        self.fetch(&sql, params).await
    }

    /// Sets `data` on rows matching `condition`. Update values bind before the
    /// condition params. Returns rows affected.
    pub async fn update_record(
        &self,
        table: &str,
        data: &[(&str, SqlValue)],
        condition: &str,
        params: &[SqlValue],
    ) -> Result<u64, KitError> {
        let table = identifier(table)?;
        if data.is_empty() {
            return Err(KitError::EmptyRecord {
                operation: "update",
                table: table.to_string(),
            });
        }
        let set_clause = data
            .iter()
            .map(|(name, _)| identifier(name).map(|name| format!("{name} = ?")))
            .collect::<Result<Vec<_>, _>>()?
            .join(", ");
        let sql = format!("UPDATE {table} SET {set_clause} WHERE {condition}");

        let mut query = sqlx::query(&sql);
        for value in data.iter().map(|(_, value)| value).chain(params) {
            query = value.bind_to(query);
        }
        let affected = query.execute(&self.pool).await?.rows_affected();

        debug!(table, affected, "records updated");
        Ok(affected)
    }

    pub async fn delete_record_by_condition(
        &self,
        table: &str,
        condition: &str,
        params: &[SqlValue],
    ) -> Result<u64, KitError> {
        let table = identifier(table)?;
        let sql = format!("DELETE FROM {table} WHERE {condition}");

        let mut query = sqlx::query(&sql);
        for value in params {
            query = value.bind_to(query);
        }
        let affected = query.execute(&self.pool).await?.rows_affected();

        debug!(table, affected, "records deleted");
        Ok(affected)
    }

    pub async fn close(self) {
        self.pool.close().await;
        debug!("database closed");
    }

    async fn fetch(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<DbRow>, KitError> {
        let mut query = sqlx::query(sql);
        for value in params {
            query = value.bind_to(query);
        }
        let rows = query.fetch_all(&self.pool).await?;
        debug!(sql, rows = rows.len(), "rows fetched");

        rows.iter()
            .map(DbRow::from_sqlite)
            .collect::<Result<Vec<_>, _>>()
            .map_err(KitError::from)
    }
}

/// Accepts `[A-Za-z_][A-Za-z0-9_]*`; anything else never reaches the SQL text.
pub fn identifier(name: &str) -> Result<&str, KitError> {
    let mut bytes = name.bytes();
    let valid = bytes
        .next()
        .is_some_and(|b| b.is_ascii_alphabetic() || b == b'_')
        && bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_');
    if valid {
        Ok(name)
    } else {
        Err(KitError::InvalidIdentifier(name.to_string()))
    }
}

fn placeholders(n: usize) -> String {
    vec!["?"; n].join(", ")
}
