//! Submission workflow
//!
//! Orchestrates validate-then-persist for one form submission of an entity
//! kind. Nothing raised below this point escapes: every outcome comes back
//! as a [`SubmissionResult`].
//!
//! # Submission Flow
//!
//! ```text
//! Pending
//!     ↓ submit
//! Validating
//!     ├──→ Rejected   (errors reported, store untouched)
//!     └──→ Persisted  (store written; a store fault reports failure)
//! ```
//!
//! Both terminal states accept the next submission, which starts again from
//! `Pending`.

use serde::Serialize;
use std::fmt;
use tracing::{debug, error, info, warn};

use crate::entity::{EntityKind, Stamped};
use crate::error::LogcopError;
use crate::fields::RawFields;
use crate::store::RecordStore;
use crate::validation::validate;

/// Where a submission is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SubmissionState {
    /// Form filled, not yet submitted
    Pending,
    /// Rules being evaluated
    Validating,
    /// Validation failed; the store was not touched
    Rejected,
    /// Write attempted. A failed write falls straight back to `Pending`.
    Persisted,
}

impl SubmissionState {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Rejected | Self::Persisted)
    }

    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Validating)
                | (Self::Validating, Self::Rejected)
                | (Self::Validating, Self::Persisted)
                | (Self::Rejected, Self::Pending)
                | (Self::Persisted, Self::Pending)
        )
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Validating => "Validating",
            Self::Rejected => "Rejected",
            Self::Persisted => "Persisted",
        }
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Why a submission did not succeed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FailureKind {
    /// One or more field rules were violated
    Validation,
    /// The store rejected the write
    Storage,
    /// The entity's schema could not be created at startup
    Unavailable,
}

/// Outcome of one submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionResult {
    pub ok: bool,
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureKind>,
}

impl SubmissionResult {
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
            failure: None,
        }
    }

    pub fn failed(kind: FailureKind, errors: Vec<String>) -> Self {
        Self {
            ok: false,
            errors,
            failure: Some(kind),
        }
    }

    /// For callers that prefer `?` over inspecting `ok`
    pub fn into_result(self) -> crate::error::Result<()> {
        match self.failure {
            _ if self.ok => Ok(()),
            Some(FailureKind::Validation) => Err(LogcopError::validation(&self.errors)),
            _ => Err(LogcopError::general(self.errors.join("; "))),
        }
    }
}

/// Validate-then-persist controller for entity kind `K`
#[derive(Debug)]
pub struct WorkflowController<K> {
    store: RecordStore<K>,
    available: bool,
    state: SubmissionState,
}

impl<K: EntityKind> WorkflowController<K> {
    /// Take ownership of `store` and make sure its schema exists.
    ///
    /// A schema failure does not abort: the controller stays usable but
    /// every submission is refused and listings are empty.
    pub fn open(store: RecordStore<K>) -> Self {
        let available = match store.ensure_schema() {
            Ok(()) => true,
            Err(e) => {
                error!(
                    entity = K::NAME,
                    path = %store.path().display(),
                    error = %e,
                    "schema creation failed, workflow disabled"
                );
                false
            }
        };
        Self {
            store,
            available,
            state: SubmissionState::Pending,
        }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Outcome of the most recent submission: `Pending` before the first
    /// and after a failed write
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn store(&self) -> &RecordStore<K> {
        &self.store
    }

    pub fn submit(&mut self, fields: &RawFields) -> SubmissionResult {
        if self.state.is_terminal() {
            self.transition(SubmissionState::Pending);
        }
        if !self.available {
            warn!(entity = K::NAME, "submission refused, storage unavailable");
            return SubmissionResult::failed(
                FailureKind::Unavailable,
                vec![format!("{} storage is unavailable", K::NAME)],
            );
        }

        self.transition(SubmissionState::Validating);
        // Rule errors first, then label errors, all in one pass.
        let mut errors = validate::<K>(fields);
        let record = match K::from_fields(fields) {
            Ok(record) if errors.is_empty() => Some(record),
            Ok(_) => None,
            Err(conversion_errors) => {
                errors.extend(conversion_errors);
                None
            }
        };

        let Some(record) = record else {
            debug!(entity = K::NAME, errors = errors.len(), "submission rejected");
            self.transition(SubmissionState::Rejected);
            return SubmissionResult::failed(FailureKind::Validation, errors);
        };

        match self.store.upsert(&record) {
            Ok(_) => {
                info!(entity = K::NAME, id = record.id(), "record saved");
                self.transition(SubmissionState::Persisted);
                SubmissionResult::success()
            }
            Err(e) => {
                error!(entity = K::NAME, id = record.id(), error = %e, "failed to save record");
                self.transition(SubmissionState::Persisted);
                self.transition(SubmissionState::Pending);
                SubmissionResult::failed(
                    FailureKind::Storage,
                    vec![format!("Failed to save {} record", K::NAME.to_lowercase())],
                )
            }
        }
    }

    /// Stored records, most recently updated first
    pub fn list_all(&self) -> Vec<Stamped<K>> {
        if !self.available {
            return Vec::new();
        }
        self.store.list_all()
    }

    fn transition(&mut self, next: SubmissionState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "invalid submission transition {} -> {}",
            self.state,
            next
        );
        self.state = next;
    }
}
