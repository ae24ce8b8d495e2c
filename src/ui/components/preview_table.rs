// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Read-only table mirroring the current form values.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::models::field_group::FieldGroup;
use crate::models::form_state::FormState;

/// Shown in place of a blank text input.
pub const EMPTY_INPUT: &str = "Empty";
/// Shown in place of an unselected option.
pub const EMPTY_SELECT: &str = "Not selected";

/// Display strings for one table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewRow<'a> {
    pub id: String,
    pub input: &'a str,
    pub select: &'a str,
}

impl<'a> PreviewRow<'a> {
    pub fn from_group(group: &'a FieldGroup) -> Self {
        let input = if group.input_value.is_empty() {
            EMPTY_INPUT
        } else {
            group.input_value.as_str()
        };
        Self {
            id: group.id.to_string(),
            input,
            select: group.select_value.map_or(EMPTY_SELECT, |opt| opt.as_str()),
        }
    }
}

/// Render the "Form State" section.
pub fn view(ui: &mut egui::Ui, model: &FormState) {
    ui.heading("Form State");
    ui.add_space(6.0);

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        TableBuilder::new(ui)
            .id_salt("form_state_preview")
            .striped(true)
            .vscroll(false)
            .column(Column::exact(60.0))
            .column(Column::remainder().at_least(120.0).clip(true))
            .column(Column::remainder().at_least(120.0))
            .header(22.0, |mut header| {
                for title in ["ID", "Input Value", "Select Value"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for group in model.groups() {
                    let row = PreviewRow::from_group(group);
                    body.row(20.0, |mut cells| {
                        cells.col(|ui| {
                            ui.label(egui::RichText::new(&row.id).strong());
                        });
                        cells.col(|ui| {
                            ui.label(row.input);
                        });
                        cells.col(|ui| {
                            ui.label(row.select);
                        });
                    });
                }
            });
    });
}
