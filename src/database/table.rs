use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};

/// Materialized query result: an ordered list of named columns over row values.
///
/// Rows are stored in query order; every row holds one value per column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Table { columns, rows }
    }

    /// Number of rows in the result.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Drop all rows past `max_rows`, keeping the original order.
    pub fn truncate(&mut self, max_rows: usize) {
        self.rows.truncate(max_rows);
    }

    /// Extract a column of strings by name.
    ///
    /// An empty result yields an empty vector without checking the name; a
    /// non-empty result requires the column to exist and hold only strings.
    pub fn string_column(&self, name: &str) -> Result<Vec<String>> {
        if self.rows.is_empty() {
            return Ok(Vec::new());
        }

        let index = self
            .columns
            .iter()
            .position(|column| column == name)
            .with_context(|| format!("column {name} not in result set"))?;

        self.rows
            .iter()
            .map(|row| match &row[index] {
                Value::String(value) => Ok(value.clone()),
                other => bail!("column {name} holds a non-string value: {other}"),
            })
            .collect()
    }

    /// Convert every row into a JSON object keyed by column name.
    pub fn records(&self) -> Vec<Map<String, Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect()
            })
            .collect()
    }
}
