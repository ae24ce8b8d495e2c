// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Field group records and the closed set of selectable options.

use serde::Serialize;
use thiserror::Error;

/// Identifier of a field group, unique within one form.
pub type GroupId = u32;

/// Options offered by every group's select control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectOption {
    Option1,
    Option2,
    Option3,
    Option4,
}

impl SelectOption {
    /// Every option in display order.
    pub const ALL: [SelectOption; 4] = [
        SelectOption::Option1,
        SelectOption::Option2,
        SelectOption::Option3,
        SelectOption::Option4,
    ];

    /// Label shown in the select control when nothing is chosen.
    pub const PLACEHOLDER: &'static str = "Select an option";

    /// Raw option value, as mirrored in the state preview.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Option1 => "option1",
            Self::Option2 => "option2",
            Self::Option3 => "option3",
            Self::Option4 => "option4",
        }
    }

    /// Human readable label used inside the select control.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Option1 => "Option 1",
            Self::Option2 => "Option 2",
            Self::Option3 => "Option 3",
            Self::Option4 => "Option 4",
        }
    }
}

/// A recoverable, per-field validation failure.
///
/// The `Display` output is the message shown beneath the offending control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    RequiredFieldMissing,
    #[error("Please select an option")]
    OptionNotSelected,
}

/// One repeated text input + select pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldGroup {
    pub id: GroupId,
    pub input_value: String,
    pub select_value: Option<SelectOption>,
    pub input_error: Option<FieldError>,
    pub select_error: Option<FieldError>,
}

impl FieldGroup {
    /// Fresh group with empty values and no recorded errors.
    pub fn new(id: GroupId) -> Self {
        Self {
            id,
            input_value: String::new(),
            select_value: None,
            input_error: None,
            select_error: None,
        }
    }

    /// Message for the text input, or `""` when the input has no error.
    pub fn input_error_message(&self) -> String {
        self.input_error.map(|e| e.to_string()).unwrap_or_default()
    }

    /// Message for the select control, or `""` when the select has no error.
    pub fn select_error_message(&self) -> String {
        self.select_error.map(|e| e.to_string()).unwrap_or_default()
    }

    pub fn has_errors(&self) -> bool {
        self.input_error.is_some() || self.select_error.is_some()
    }
}
