use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::error::Result;
use crate::fields::RawFields;
use crate::records::{personnel, supply};

/// Logistics COP - personnel and supply records for tactical planners
#[derive(Parser)]
#[command(name = "logcop")]
#[command(about = "Logistics common operating picture: sites, personnel and supply records")]
#[command(version)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the record databases (overrides the config file)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create both record tables if missing and report their state
    Init,
    /// Personnel records
    Personnel {
        #[command(subcommand)]
        action: PersonnelCommands,
    },
    /// Supply records
    Supply {
        #[command(subcommand)]
        action: SupplyCommands,
    },
    /// Show the sample operating picture
    Sites {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sites summary plus both record tables
    Dashboard,
}

#[derive(Subcommand)]
pub enum PersonnelCommands {
    /// Create or update a personnel record
    Submit(PersonnelForm),
    /// List personnel records, most recently updated first
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum SupplyCommands {
    /// Create or update a supply record
    Submit(SupplyForm),
    /// List supply records, most recently updated first
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Personnel form fields. Required fields are checked by the workflow, not
/// by clap, so every problem is reported at once.
#[derive(Args, Debug, Default)]
pub struct PersonnelForm {
    /// Read field values from a JSON object; flags given alongside win
    #[arg(long, value_name = "FILE")]
    pub from_json: Option<PathBuf>,
    /// Personnel ID
    #[arg(long)]
    pub id: Option<String>,
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    /// Officer, Enlisted, Civilian or Contractor
    #[arg(long)]
    pub class: Option<String>,
    #[arg(long)]
    pub rank: Option<String>,
    #[arg(long)]
    pub unit: Option<String>,
    /// Unclassified, Confidential, Secret or "Top Secret"
    #[arg(long)]
    pub clearance: Option<String>,
    /// Active, Inactive, Reserve or Retired
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

impl PersonnelForm {
    /// Field values from `--from-json` (if given) overlaid with flags
    pub fn fields(&self) -> Result<RawFields> {
        let base = match &self.from_json {
            Some(path) => RawFields::load(path)?,
            None => RawFields::new(),
        };
        Ok(base.merge(self.to_fields()))
    }

    /// Field values given as flags
    pub fn to_fields(&self) -> RawFields {
        use personnel::field;

        let mut fields = RawFields::new();
        fields.set_opt(field::ID, self.id.as_deref());
        fields.set_opt(field::FIRST_NAME, self.first_name.as_deref());
        fields.set_opt(field::LAST_NAME, self.last_name.as_deref());
        fields.set_opt(field::CLASS, self.class.as_deref());
        fields.set_opt(field::RANK, self.rank.as_deref());
        fields.set_opt(field::UNIT, self.unit.as_deref());
        fields.set_opt(field::CLEARANCE, self.clearance.as_deref());
        fields.set_opt(field::STATUS, self.status.as_deref());
        fields.set_opt(field::NOTES, self.notes.as_deref());
        fields
    }
}

#[derive(Args, Debug, Default)]
pub struct SupplyForm {
    /// Read field values from a JSON object; flags given alongside win
    #[arg(long, value_name = "FILE")]
    pub from_json: Option<PathBuf>,
    /// Supply ID
    #[arg(long)]
    pub id: Option<String>,
    /// Supply name
    #[arg(long)]
    pub name: Option<String>,
    /// Ammunition, Fuel, Medical, Food, Equipment or Clothing
    #[arg(long)]
    pub class: Option<String>,
    /// Consumable, Durable, Perishable or Hazardous
    #[arg(long = "type")]
    pub supply_type: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub quantity: Option<String>,
    /// Unit of measure (Each, Box, Case, Pallet, Gallons, ...)
    #[arg(long)]
    pub unit: Option<String>,
    /// Available, "Low Stock", "Out of Stock" or Reserved
    #[arg(long)]
    pub status: Option<String>,
    /// Low, Medium, High or Critical
    #[arg(long)]
    pub priority: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub supplier: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

impl SupplyForm {
    /// Field values from `--from-json` (if given) overlaid with flags
    pub fn fields(&self) -> Result<RawFields> {
        let base = match &self.from_json {
            Some(path) => RawFields::load(path)?,
            None => RawFields::new(),
        };
        Ok(base.merge(self.to_fields()))
    }

    /// Field values given as flags
    pub fn to_fields(&self) -> RawFields {
        use supply::field;

        let mut fields = RawFields::new();
        fields.set_opt(field::ID, self.id.as_deref());
        fields.set_opt(field::NAME, self.name.as_deref());
        fields.set_opt(field::CLASS, self.class.as_deref());
        fields.set_opt(field::TYPE, self.supply_type.as_deref());
        fields.set_opt(field::QUANTITY, self.quantity.as_deref());
        fields.set_opt(field::UNIT, self.unit.as_deref());
        fields.set_opt(field::STATUS, self.status.as_deref());
        fields.set_opt(field::PRIORITY, self.priority.as_deref());
        fields.set_opt(field::LOCATION, self.location.as_deref());
        fields.set_opt(field::SUPPLIER, self.supplier.as_deref());
        fields.set_opt(field::NOTES, self.notes.as_deref());
        fields
    }
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
