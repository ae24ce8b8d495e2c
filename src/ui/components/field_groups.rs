// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Editor for the repeated field groups, in MVU shape.

use eframe::egui;

use crate::models::field_group::{FieldGroup, GroupId, SelectOption};
use crate::models::form_state::FormState;

/// Messages emitted by the field group editors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldGroupsMsg {
    AddGroup,
    RemoveGroup(GroupId),
    InputChanged {
        id: GroupId,
        value: String,
    },
    SelectChanged {
        id: GroupId,
        value: Option<SelectOption>,
    },
    /// Enter pressed inside a text input.
    SubmitRequested,
}

/// Feedback surfaced to the status line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldGroupsEvent {
    pub message: String,
}

/// Apply a message to the form. Returns a feedback event for structural changes.
pub fn update(model: &mut FormState, msg: FieldGroupsMsg) -> Option<FieldGroupsEvent> {
    match msg {
        FieldGroupsMsg::AddGroup => {
            let id = model.add_group();
            tracing::info!(id, "field set added");
            Some(FieldGroupsEvent {
                message: format!("Field set {id} added."),
            })
        }
        FieldGroupsMsg::RemoveGroup(id) => {
            if model.remove_group(id) {
                tracing::info!(id, "field set removed");
                Some(FieldGroupsEvent {
                    message: format!("Field set {id} removed."),
                })
            } else {
                tracing::debug!(id, "remove ignored");
                None
            }
        }
        FieldGroupsMsg::InputChanged { id, value } => {
            model.set_input_value(id, value);
            None
        }
        FieldGroupsMsg::SelectChanged { id, value } => {
            model.set_select_value(id, value);
            None
        }
        // Submission is applied by the root update.
        FieldGroupsMsg::SubmitRequested => None,
    }
}

/// Render every group and return triggered messages.
pub fn view(ui: &mut egui::Ui, model: &FormState) -> Vec<FieldGroupsMsg> {
    let mut msgs = Vec::new();
    let removable = model.can_remove();

    for group in model.groups() {
        render_group(ui, group, removable, &mut msgs);
        ui.add_space(8.0);
    }

    msgs
}

/// One group: text input on the left, select (plus remove button) on the right.
fn render_group(
    ui: &mut egui::Ui,
    group: &FieldGroup,
    removable: bool,
    msgs: &mut Vec<FieldGroupsMsg>,
) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.columns(2, |cols| {
            render_input(&mut cols[0], group, msgs);
            render_select(&mut cols[1], group, removable, msgs);
        });
    });
}

fn render_input(ui: &mut egui::Ui, group: &FieldGroup, msgs: &mut Vec<FieldGroupsMsg>) {
    ui.label("Input Field");
    let mut value = group.input_value.clone();
    let resp = ui.add(
        egui::TextEdit::singleline(&mut value)
            .id_salt(("input", group.id))
            .hint_text("Enter text...")
            .desired_width(f32::INFINITY),
    );
    if resp.changed() {
        msgs.push(FieldGroupsMsg::InputChanged {
            id: group.id,
            value,
        });
    }
    if resp.lost_focus() && ui.input(|inp| inp.key_pressed(egui::Key::Enter)) {
        msgs.push(FieldGroupsMsg::SubmitRequested);
    }
    render_error(ui, &group.input_error_message());
}

fn render_select(
    ui: &mut egui::Ui,
    group: &FieldGroup,
    removable: bool,
    msgs: &mut Vec<FieldGroupsMsg>,
) {
    ui.label("Select Option");
    ui.horizontal(|ui| {
        let mut current = group.select_value;
        let selected_text = current.map_or(SelectOption::PLACEHOLDER, |opt| opt.label());
        egui::ComboBox::from_id_salt(("select", group.id))
            .width((ui.available_width() - 40.0).max(120.0))
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                if ui
                    .selectable_value(
                        &mut current,
                        None,
                        egui::RichText::new(SelectOption::PLACEHOLDER).weak(),
                    )
                    .clicked()
                {
                    msgs.push(FieldGroupsMsg::SelectChanged {
                        id: group.id,
                        value: None,
                    });
                }
                for opt in SelectOption::ALL {
                    if ui
                        .selectable_value(&mut current, Some(opt), opt.label())
                        .clicked()
                    {
                        msgs.push(FieldGroupsMsg::SelectChanged {
                            id: group.id,
                            value: Some(opt),
                        });
                    }
                }
            });

        if removable
            && ui
                .button(
                    egui::RichText::new(egui_phosphor::regular::TRASH)
                        .color(ui.visuals().error_fg_color),
                )
                .on_hover_text("Remove field")
                .clicked()
        {
            msgs.push(FieldGroupsMsg::RemoveGroup(group.id));
        }
    });
    render_error(ui, &group.select_error_message());
}

/// Inline error text beneath a control; renders nothing for an empty message.
fn render_error(ui: &mut egui::Ui, message: &str) {
    if message.is_empty() {
        return;
    }
    ui.label(
        egui::RichText::new(message)
            .small()
            .color(ui.visuals().error_fg_color),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::field_group::FieldError;

    #[test]
    fn add_group_reports_new_id() {
        let mut model = FormState::default();

        let event = update(&mut model, FieldGroupsMsg::AddGroup).expect("event expected");

        assert_eq!(model.groups().len(), 2);
        assert_eq!(event.message, "Field set 2 added.");
    }

    #[test]
    fn removing_last_group_is_silent() {
        let mut model = FormState::default();

        let event = update(&mut model, FieldGroupsMsg::RemoveGroup(1));

        assert!(event.is_none());
        assert_eq!(model.groups().len(), 1);
    }

    #[test]
    fn remove_group_reports_removed_id() {
        let mut model = FormState::default();
        update(&mut model, FieldGroupsMsg::AddGroup);

        let event = update(&mut model, FieldGroupsMsg::RemoveGroup(1)).expect("event expected");

        assert_eq!(event.message, "Field set 1 removed.");
        assert_eq!(model.groups()[0].id, 2);
    }

    #[test]
    fn edits_are_routed_to_the_matching_group() {
        let mut model = FormState::default();
        update(&mut model, FieldGroupsMsg::AddGroup);

        update(
            &mut model,
            FieldGroupsMsg::InputChanged {
                id: 2,
                value: "hello".into(),
            },
        );
        update(
            &mut model,
            FieldGroupsMsg::SelectChanged {
                id: 2,
                value: Some(SelectOption::Option3),
            },
        );

        let g1 = model.group(1).unwrap();
        assert!(g1.input_value.is_empty());
        let g2 = model.group(2).unwrap();
        assert_eq!(g2.input_value, "hello");
        assert_eq!(g2.select_value, Some(SelectOption::Option3));
    }

    #[test]
    fn reselecting_placeholder_after_submit_shows_error() {
        let mut model = FormState::default();
        model.set_select_value(1, Some(SelectOption::Option1));
        model.submit();

        update(
            &mut model,
            FieldGroupsMsg::SelectChanged { id: 1, value: None },
        );

        assert_eq!(
            model.group(1).unwrap().select_error,
            Some(FieldError::OptionNotSelected)
        );
    }
}
