// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Form state: the ordered list of field groups plus the submitted flag.
//!
//! All mutation goes through the methods below so the invariants hold:
//! ids are unique and increasing, at least one group always exists, and no
//! error is recorded before the first submit attempt.

use serde::Serialize;

use crate::models::field_group::{FieldGroup, GroupId, SelectOption};
use crate::models::validation::{check_input, check_select, live_error, validate_group};

/// Overall lifecycle of the form. The only transition is `Editing -> Submitted`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitted,
}

/// Result of a submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every group passed validation.
    Accepted(Submission),
    /// At least one group has a visible error now.
    Rejected { invalid_groups: usize },
}

/// Snapshot of the submitted values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub entries: Vec<SubmittedEntry>,
}

/// One submitted group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubmittedEntry {
    pub id: GroupId,
    pub input_value: String,
    pub select_value: SelectOption,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    groups: Vec<FieldGroup>,
    submitted: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            groups: vec![FieldGroup::new(1)],
            submitted: false,
        }
    }
}

impl FormState {
    pub fn groups(&self) -> &[FieldGroup] {
        &self.groups
    }

    pub fn group(&self, id: GroupId) -> Option<&FieldGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn phase(&self) -> FormPhase {
        if self.submitted {
            FormPhase::Submitted
        } else {
            FormPhase::Editing
        }
    }

    /// Whether a remove control should be offered at all.
    pub fn can_remove(&self) -> bool {
        self.groups.len() > 1
    }

    /// Append an empty group and return its id (max id + 1, or 1 when empty).
    pub fn add_group(&mut self) -> GroupId {
        let id = self.groups.iter().map(|g| g.id).max().map_or(1, |max| max + 1);
        self.groups.push(FieldGroup::new(id));
        id
    }

    /// Remove the group with `id` unless it is the last one left.
    ///
    /// Returns `true` when a group was actually removed.
    pub fn remove_group(&mut self, id: GroupId) -> bool {
        if !self.can_remove() {
            return false;
        }
        let before = self.groups.len();
        self.groups.retain(|g| g.id != id);
        self.groups.len() != before
    }

    pub fn set_input_value(&mut self, id: GroupId, value: String) {
        let submitted = self.submitted;
        if let Some(group) = self.group_mut(id) {
            group.input_error = live_error(submitted, check_input(&value));
            group.input_value = value;
        }
    }

    pub fn set_select_value(&mut self, id: GroupId, value: Option<SelectOption>) {
        let submitted = self.submitted;
        if let Some(group) = self.group_mut(id) {
            group.select_error = live_error(submitted, check_select(value));
            group.select_value = value;
        }
    }

    /// Record errors on every group and return whether all groups are valid.
    pub fn validate_all(&mut self) -> bool {
        let mut all_valid = true;
        for group in &mut self.groups {
            let report = validate_group(group);
            group.input_error = report.input;
            group.select_error = report.select;
            all_valid &= report.is_valid();
        }
        all_valid
    }

    /// Mark the form submitted and validate it.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.submitted = true;
        let valid = self.validate_all();
        match self.snapshot() {
            Some(submission) if valid => SubmitOutcome::Accepted(submission),
            _ => SubmitOutcome::Rejected {
                invalid_groups: self.invalid_groups(),
            },
        }
    }

    /// Number of groups currently showing at least one error.
    pub fn invalid_groups(&self) -> usize {
        self.groups.iter().filter(|g| g.has_errors()).count()
    }

    /// Footer line, e.g. "Form contains 2 field sets".
    pub fn summary(&self) -> String {
        format!("Form contains {}", field_set_count(self.groups.len()))
    }

    fn group_mut(&mut self, id: GroupId) -> Option<&mut FieldGroup> {
        self.groups.iter_mut().find(|g| g.id == id)
    }

    /// Values of every group, or `None` if any group has no selection.
    fn snapshot(&self) -> Option<Submission> {
        let entries = self
            .groups
            .iter()
            .map(|g| {
                g.select_value.map(|select_value| SubmittedEntry {
                    id: g.id,
                    input_value: g.input_value.clone(),
                    select_value,
                })
            })
            .collect::<Option<Vec<_>>>()?;
        Some(Submission { entries })
    }
}

/// "1 field set" / "N field sets".
pub fn field_set_count(count: usize) -> String {
    if count == 1 {
        "1 field set".to_string()
    } else {
        format!("{count} field sets")
    }
}
