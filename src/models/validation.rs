// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Pure validation rules for field groups.
//!
//! Emptiness is literal: whitespace-only text counts as a value.

use crate::models::field_group::{FieldError, FieldGroup, SelectOption};

/// Check a text input value.
pub fn check_input(value: &str) -> Option<FieldError> {
    value
        .is_empty()
        .then_some(FieldError::RequiredFieldMissing)
}

/// Check a select value.
pub fn check_select(value: Option<SelectOption>) -> Option<FieldError> {
    value.is_none().then_some(FieldError::OptionNotSelected)
}

/// Error to record for a single edited field.
///
/// Before the first submit attempt errors are always suppressed; afterwards the
/// rule is re-evaluated on every edit.
pub fn live_error(submitted: bool, error: Option<FieldError>) -> Option<FieldError> {
    if submitted { error } else { None }
}

/// Validation result for one group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GroupReport {
    pub input: Option<FieldError>,
    pub select: Option<FieldError>,
}

impl GroupReport {
    pub fn is_valid(&self) -> bool {
        self.input.is_none() && self.select.is_none()
    }
}

/// Run both checks on a group without touching its recorded errors.
pub fn validate_group(group: &FieldGroup) -> GroupReport {
    GroupReport {
        input: check_input(&group.input_value),
        select: check_select(group.select_value),
    }
}
