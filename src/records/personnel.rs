//! Personnel records

use rusqlite::Row;
use rusqlite::types::Value;
use serde::{Deserialize, Serialize};

use crate::entity::{
    Column, ColumnType, EntityKind, column_choice, optional_text_value, parse_choice, text_value,
};
use crate::error::StoreError;
use crate::fields::RawFields;
use crate::types::{Clearance, PersonnelClass, PersonnelStatus};
use crate::validation::FieldRule;

/// Form field names, shared by the CLI, the store columns, and the rules.
pub mod field {
    pub const ID: &str = "personnel_id";
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const CLASS: &str = "personnel_class";
    pub const RANK: &str = "rank";
    pub const UNIT: &str = "unit";
    pub const CLEARANCE: &str = "clearance_level";
    pub const STATUS: &str = "status";
    pub const NOTES: &str = "notes";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonnelRecord {
    pub personnel_id: String,
    pub first_name: String,
    pub last_name: String,
    pub personnel_class: PersonnelClass,
    pub rank: Option<String>,
    pub unit: Option<String>,
    pub clearance_level: Clearance,
    pub status: PersonnelStatus,
    pub notes: Option<String>,
}

impl PersonnelRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl EntityKind for PersonnelRecord {
    const NAME: &'static str = "Personnel";
    const TABLE: &'static str = "personnel";
    const COLUMNS: &'static [Column] = &[
        Column::new(field::ID, ColumnType::Key),
        Column::new(field::FIRST_NAME, ColumnType::Text),
        Column::new(field::LAST_NAME, ColumnType::Text),
        Column::new(field::CLASS, ColumnType::Text),
        Column::new(field::RANK, ColumnType::NullableText),
        Column::new(field::UNIT, ColumnType::NullableText),
        Column::new(field::CLEARANCE, ColumnType::Text),
        Column::new(field::STATUS, ColumnType::Text),
        Column::new(field::NOTES, ColumnType::NullableText),
    ];
    const RULES: &'static [FieldRule] = &[
        FieldRule::required(field::ID, "Personnel ID"),
        FieldRule::required(field::FIRST_NAME, "First Name"),
        FieldRule::required(field::LAST_NAME, "Last Name"),
    ];

    fn id(&self) -> &str {
        &self.personnel_id
    }

    fn from_fields(fields: &RawFields) -> Result<Self, Vec<String>> {
        let mut errors = Vec::new();
        let personnel_class = parse_choice(fields, field::CLASS, "Personnel Class", &mut errors);
        let clearance_level =
            parse_choice(fields, field::CLEARANCE, "Clearance Level", &mut errors);
        let status = parse_choice(fields, field::STATUS, "Status", &mut errors);
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            personnel_id: fields.text(field::ID),
            first_name: fields.text(field::FIRST_NAME),
            last_name: fields.text(field::LAST_NAME),
            personnel_class,
            rank: fields.optional_text(field::RANK),
            unit: fields.optional_text(field::UNIT),
            clearance_level,
            status,
            notes: fields.optional_text(field::NOTES),
        })
    }

    fn to_values(&self) -> Vec<Value> {
        vec![
            text_value(&self.personnel_id),
            text_value(&self.first_name),
            text_value(&self.last_name),
            text_value(&self.personnel_class.to_string()),
            optional_text_value(&self.rank),
            optional_text_value(&self.unit),
            text_value(&self.clearance_level.to_string()),
            text_value(&self.status.to_string()),
            optional_text_value(&self.notes),
        ]
    }

    fn from_row(row: &Row<'_>) -> Result<Self, StoreError> {
        Ok(Self {
            personnel_id: row.get(0)?,
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            personnel_class: column_choice(row, 3, Self::TABLE)?,
            rank: row.get(4)?,
            unit: row.get(5)?,
            clearance_level: column_choice(row, 6, Self::TABLE)?,
            status: column_choice(row, 7, Self::TABLE)?,
            notes: row.get(8)?,
        })
    }
}
