//! Database accessor: per-request SQLite connections and result materialization.

pub mod queries;
mod table;

pub use table::Table;

use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteRow};
use sqlx::{Column, Connection, Row, TypeInfo, ValueRef};
use thiserror::Error;
use tracing::{error, warn};

/// Maximum rows kept when a caller asks for a capped result.
pub const ROW_CAP: usize = 10;

/// Uniform failure signal from the query layer. The cause is logged, never exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Database error")]
pub struct DbError;

/// Execute `sql` against the database file and materialize the full result.
///
/// Every call opens its own connection and releases it before returning,
/// whether the query succeeded or not. `params` are bound positionally. With
/// `limit_rows` set, results longer than [`ROW_CAP`] are truncated to the
/// first [`ROW_CAP`] rows in original order.
pub async fn fetch_table(
    database_path: &Path,
    sql: &str,
    params: &[&str],
    limit_rows: bool,
) -> Result<Table, DbError> {
    let options = SqliteConnectOptions::new()
        .filename(database_path)
        .read_only(true);

    let mut conn = match SqliteConnection::connect_with(&options).await {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "Failed to open database {}: {}",
                database_path.display(),
                err
            );
            return Err(DbError);
        }
    };

    let mut query = sqlx::query(sql);
    for param in params {
        query = query.bind(*param);
    }
    let fetched = query.fetch_all(&mut conn).await;

    // Release the handle before inspecting the result; a failed query must not
    // leave the file open.
    if let Err(err) = conn.close().await {
        warn!("Failed to close database connection: {}", err);
    }

    let rows = match fetched {
        Ok(rows) => rows,
        Err(err) => {
            error!("Query execution failed: {}", err);
            return Err(DbError);
        }
    };

    let mut result = match materialize(&rows) {
        Ok(table) => table,
        Err(err) => {
            error!("Failed to decode result rows: {:#}", err);
            return Err(DbError);
        }
    };

    if limit_rows && result.len() > ROW_CAP {
        result.truncate(ROW_CAP);
    }

    Ok(result)
}

fn materialize(rows: &[SqliteRow]) -> anyhow::Result<Table> {
    let columns = rows
        .first()
        .map(|row| {
            row.columns()
                .iter()
                .map(|column| column.name().to_string())
                .collect()
        })
        .unwrap_or_default();

    let mut data = Vec::with_capacity(rows.len());
    for row in rows {
        let mut values = Vec::with_capacity(row.len());
        for index in 0..row.len() {
            values.push(decode_value(row, index)?);
        }
        data.push(values);
    }

    Ok(Table::new(columns, data))
}

/// Map one SQLite value to JSON by its storage class.
fn decode_value(row: &SqliteRow, index: usize) -> anyhow::Result<Value> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }

    let value = match raw.type_info().name() {
        "INTEGER" => Value::from(row.try_get::<i64, _>(index)?),
        "REAL" => Value::from(row.try_get::<f64, _>(index)?),
        "BLOB" => Value::from(BASE64.encode(row.try_get::<Vec<u8>, _>(index)?)),
        _ => Value::from(row.try_get::<String, _>(index)?),
    };

    Ok(value)
}
