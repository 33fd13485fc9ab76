pub mod personnel;
pub mod supply;

pub use personnel::PersonnelRecord;
pub use supply::SupplyRecord;
