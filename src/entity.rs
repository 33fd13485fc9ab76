//! Entity kinds
//!
//! Personnel and supply share one workflow. Each record type describes its
//! table layout and field rules through [`EntityKind`]; the store and the
//! validator are generic over it instead of being written twice.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::Row;
use rusqlite::types::Value;
use serde::Serialize;
use std::str::FromStr;
use strum::IntoEnumIterator;

use crate::error::StoreError;
use crate::fields::RawFields;
use crate::types::labels;
use crate::validation::FieldRule;

/// SQL shape of one column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Unique text identifier
    Key,
    /// Non-null text holding an enumerated label or required name
    Text,
    /// Free text, NULL when blank
    NullableText,
    /// Non-null integer
    Integer,
}

impl ColumnType {
    pub const fn sql(self) -> &'static str {
        match self {
            Self::Key => "TEXT PRIMARY KEY NOT NULL",
            Self::Text => "TEXT NOT NULL",
            Self::NullableText => "TEXT",
            Self::Integer => "INTEGER NOT NULL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnType,
}

impl Column {
    pub const fn new(name: &'static str, kind: ColumnType) -> Self {
        Self { name, kind }
    }
}

/// A record type managed by one store and one workflow.
///
/// `COLUMNS` must start with the `Key` column, and `to_values` / `from_row`
/// must follow the same column order.
pub trait EntityKind: Sized + Clone + Serialize {
    /// Human label used in messages ("Personnel", "Supply")
    const NAME: &'static str;
    const TABLE: &'static str;
    const COLUMNS: &'static [Column];
    /// Validation rules, evaluated in declaration order
    const RULES: &'static [FieldRule];

    fn id(&self) -> &str;

    /// Build a record from raw fields, reporting unknown enumerated labels
    /// and out-of-range values. Anything `RULES` already checks is not
    /// reported again, so callers run both and concatenate the errors.
    fn from_fields(fields: &RawFields) -> Result<Self, Vec<String>>;

    fn to_values(&self) -> Vec<Value>;

    fn from_row(row: &Row<'_>) -> Result<Self, StoreError>;

    fn key_column() -> &'static str {
        Self::COLUMNS[0].name
    }
}

/// A stored record with its bookkeeping timestamps
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stamped<R> {
    #[serde(flatten)]
    pub record: R,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Storage text form of a timestamp. Fixed precision keeps lexical order
/// equal to time order.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn parse_timestamp(table: &'static str, value: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|_| StoreError::Timestamp {
            table,
            value: value.to_string(),
        })
}

/// Parse an enumerated form field. A missing or blank field takes the
/// default; an unknown label is pushed onto `errors`.
pub fn parse_choice<E>(fields: &RawFields, name: &str, label: &str, errors: &mut Vec<String>) -> E
where
    E: FromStr + Default + IntoEnumIterator + ToString,
{
    let raw = fields.text(name);
    let raw = raw.trim();
    if raw.is_empty() {
        return E::default();
    }
    match raw.parse::<E>() {
        Ok(value) => value,
        Err(_) => {
            errors.push(format!(
                "Invalid {}: '{}' (expected one of: {})",
                label,
                raw,
                labels::<E>().join(", ")
            ));
            E::default()
        }
    }
}

/// Read an enumerated label back from a stored row
pub fn column_choice<E: FromStr>(
    row: &Row<'_>,
    idx: usize,
    table: &'static str,
) -> Result<E, StoreError> {
    let raw: String = row.get(idx)?;
    raw.parse::<E>().map_err(|_| StoreError::Corrupt {
        table,
        reason: format!("unknown label '{}' in column {}", raw, idx),
    })
}

pub fn text_value(value: &str) -> Value {
    Value::Text(value.to_string())
}

pub fn optional_text_value(value: &Option<String>) -> Value {
    match value {
        Some(text) => Value::Text(text.clone()),
        None => Value::Null,
    }
}
