//! Field validation
//!
//! Pure and stateless. Every rule of an entity kind is evaluated, in
//! declaration order, so the form can show all problems at once.

use crate::entity::EntityKind;
use crate::fields::RawFields;

/// What a field must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Text must be non-empty after trimming
    Required,
    /// Integer must be >= 0; a missing value counts as 0
    NonNegative,
}

/// One entry of an entity's rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: &'static str,
    /// Label used in the message, as shown on the form
    pub label: &'static str,
    pub constraint: Constraint,
}

impl FieldRule {
    pub const fn required(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            constraint: Constraint::Required,
        }
    }

    pub const fn non_negative(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            constraint: Constraint::NonNegative,
        }
    }

    /// Violation message for `fields`, if any
    pub fn check(&self, fields: &RawFields) -> Option<String> {
        match self.constraint {
            Constraint::Required => {
                if fields.text(self.field).trim().is_empty() {
                    Some(format!("{} is required", self.label))
                } else {
                    None
                }
            }
            Constraint::NonNegative => match fields.integer(self.field) {
                Ok(Some(n)) if n < 0 => Some(format!("{} must be non-negative", self.label)),
                Ok(_) => None,
                Err(_) => Some(format!("{} must be a whole number", self.label)),
            },
        }
    }
}

/// Evaluate every rule in `rules`; empty means valid.
pub fn check_rules(rules: &[FieldRule], fields: &RawFields) -> Vec<String> {
    rules.iter().filter_map(|rule| rule.check(fields)).collect()
}

/// Validate a candidate record of kind `K`
pub fn validate<K: EntityKind>(fields: &RawFields) -> Vec<String> {
    check_rules(K::RULES, fields)
}
