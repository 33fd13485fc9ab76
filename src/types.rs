//! Enumerated record attributes
//!
//! Every fixed-choice field on the personnel and supply forms is a Rust enum.
//! The strum label is the exact text shown in the form and stored in the
//! database; the first variant is the form's pre-selected default.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Personnel category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum PersonnelClass {
    #[default]
    Officer,
    Enlisted,
    Civilian,
    Contractor,
}

/// Security clearance level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Clearance {
    #[default]
    Unclassified,
    Confidential,
    Secret,
    #[strum(serialize = "Top Secret")]
    #[serde(rename = "Top Secret")]
    TopSecret,
}

/// Duty status of a person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum PersonnelStatus {
    #[default]
    Active,
    Inactive,
    Reserve,
    Retired,
}

/// Class of supply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum SupplyClass {
    #[default]
    Ammunition,
    Fuel,
    Medical,
    Food,
    Equipment,
    Clothing,
}

/// Handling type of a supply item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum SupplyType {
    #[default]
    Consumable,
    Durable,
    Perishable,
    Hazardous,
}

/// Unit a supply quantity is counted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum UnitOfMeasure {
    #[default]
    Each,
    Box,
    Case,
    Pallet,
    Gallons,
    Liters,
    Pounds,
    Kilograms,
    Rounds,
}

/// Stock status of a supply item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum SupplyStatus {
    #[default]
    Available,
    #[strum(serialize = "Low Stock")]
    #[serde(rename = "Low Stock")]
    LowStock,
    #[strum(serialize = "Out of Stock")]
    #[serde(rename = "Out of Stock")]
    OutOfStock,
    Reserved,
}

/// Resupply priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

/// All labels of an enumerated field, in form order.
pub fn labels<E: IntoEnumIterator + ToString>() -> Vec<String> {
    E::iter().map(|e| e.to_string()).collect()
}
