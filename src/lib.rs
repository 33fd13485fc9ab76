//! Logistics COP Library
//!
//! Personnel and supply record keeping behind a validate-then-persist
//! workflow, plus the sample operating picture shown on the dashboard map.

pub mod app;
pub mod cli;
pub mod config_file;
pub mod entity;
pub mod error;
pub mod fields;
pub mod records;
pub mod report;
pub mod sites;
pub mod store;
pub mod types;
pub mod validation;
pub mod workflow;

// Re-export main types for convenience
pub use app::App;
pub use config_file::AppConfig;
pub use entity::{EntityKind, Stamped};
pub use error::{FieldError, LogcopError, StoreError};
pub use fields::{FieldValue, RawFields};
pub use records::{PersonnelRecord, SupplyRecord};
pub use sites::{OperatingPicture, SiteKind, SiteMarker, SiteStatus};
pub use store::RecordStore;
pub use types::{
    Clearance, PersonnelClass, PersonnelStatus, Priority, SupplyClass, SupplyStatus, SupplyType,
    UnitOfMeasure,
};
pub use validation::{Constraint, FieldRule, validate};
pub use workflow::{FailureKind, SubmissionResult, SubmissionState, WorkflowController};
