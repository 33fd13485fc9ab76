//! Supply records

use rusqlite::Row;
use rusqlite::types::Value;
use serde::{Deserialize, Serialize};

use crate::entity::{
    Column, ColumnType, EntityKind, column_choice, optional_text_value, parse_choice, text_value,
};
use crate::error::StoreError;
use crate::fields::RawFields;
use crate::types::{Priority, SupplyClass, SupplyStatus, SupplyType, UnitOfMeasure};
use crate::validation::FieldRule;

pub mod field {
    pub const ID: &str = "supply_id";
    pub const NAME: &str = "supply_name";
    pub const CLASS: &str = "supply_class";
    pub const TYPE: &str = "supply_type";
    pub const QUANTITY: &str = "quantity";
    pub const UNIT: &str = "unit_of_measure";
    pub const STATUS: &str = "status";
    pub const PRIORITY: &str = "priority";
    pub const LOCATION: &str = "location";
    pub const SUPPLIER: &str = "supplier";
    pub const NOTES: &str = "notes";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyRecord {
    pub supply_id: String,
    pub supply_name: String,
    pub supply_class: SupplyClass,
    pub supply_type: SupplyType,
    pub quantity: u32,
    pub unit_of_measure: UnitOfMeasure,
    pub status: SupplyStatus,
    pub priority: Priority,
    pub location: Option<String>,
    pub supplier: Option<String>,
    pub notes: Option<String>,
}

impl EntityKind for SupplyRecord {
    const NAME: &'static str = "Supply";
    const TABLE: &'static str = "supply";
    const COLUMNS: &'static [Column] = &[
        Column::new(field::ID, ColumnType::Key),
        Column::new(field::NAME, ColumnType::Text),
        Column::new(field::CLASS, ColumnType::Text),
        Column::new(field::TYPE, ColumnType::Text),
        Column::new(field::QUANTITY, ColumnType::Integer),
        Column::new(field::UNIT, ColumnType::Text),
        Column::new(field::STATUS, ColumnType::Text),
        Column::new(field::PRIORITY, ColumnType::Text),
        Column::new(field::LOCATION, ColumnType::NullableText),
        Column::new(field::SUPPLIER, ColumnType::NullableText),
        Column::new(field::NOTES, ColumnType::NullableText),
    ];
    const RULES: &'static [FieldRule] = &[
        FieldRule::required(field::ID, "Supply ID"),
        FieldRule::required(field::NAME, "Supply Name"),
        FieldRule::non_negative(field::QUANTITY, "Quantity"),
    ];

    fn id(&self) -> &str {
        &self.supply_id
    }

    fn from_fields(fields: &RawFields) -> Result<Self, Vec<String>> {
        let mut errors = Vec::new();
        let supply_class = parse_choice(fields, field::CLASS, "Supply Class", &mut errors);
        let supply_type = parse_choice(fields, field::TYPE, "Supply Type", &mut errors);
        let unit_of_measure = parse_choice(fields, field::UNIT, "Unit of Measure", &mut errors);
        let status = parse_choice(fields, field::STATUS, "Status", &mut errors);
        let priority = parse_choice(fields, field::PRIORITY, "Priority", &mut errors);

        // Sign and number format belong to the Quantity rule.
        let quantity = match fields.integer(field::QUANTITY) {
            Ok(Some(n)) if n > i64::from(u32::MAX) => {
                errors.push(format!("Quantity must be between 0 and {}", u32::MAX));
                0
            }
            Ok(Some(n)) => u32::try_from(n).unwrap_or_default(),
            Ok(None) | Err(_) => 0,
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            supply_id: fields.text(field::ID),
            supply_name: fields.text(field::NAME),
            supply_class,
            supply_type,
            quantity,
            unit_of_measure,
            status,
            priority,
            location: fields.optional_text(field::LOCATION),
            supplier: fields.optional_text(field::SUPPLIER),
            notes: fields.optional_text(field::NOTES),
        })
    }

    fn to_values(&self) -> Vec<Value> {
        vec![
            text_value(&self.supply_id),
            text_value(&self.supply_name),
            text_value(&self.supply_class.to_string()),
            text_value(&self.supply_type.to_string()),
            Value::Integer(i64::from(self.quantity)),
            text_value(&self.unit_of_measure.to_string()),
            text_value(&self.status.to_string()),
            text_value(&self.priority.to_string()),
            optional_text_value(&self.location),
            optional_text_value(&self.supplier),
            optional_text_value(&self.notes),
        ]
    }

    fn from_row(row: &Row<'_>) -> Result<Self, StoreError> {
        let quantity: i64 = row.get(4)?;
        let quantity = u32::try_from(quantity).map_err(|_| StoreError::Corrupt {
            table: Self::TABLE,
            reason: format!("quantity {} out of range", quantity),
        })?;

        Ok(Self {
            supply_id: row.get(0)?,
            supply_name: row.get(1)?,
            supply_class: column_choice(row, 2, Self::TABLE)?,
            supply_type: column_choice(row, 3, Self::TABLE)?,
            quantity,
            unit_of_measure: column_choice(row, 5, Self::TABLE)?,
            status: column_choice(row, 6, Self::TABLE)?,
            priority: column_choice(row, 7, Self::TABLE)?,
            location: row.get(8)?,
            supplier: row.get(9)?,
            notes: row.get(10)?,
        })
    }
}
