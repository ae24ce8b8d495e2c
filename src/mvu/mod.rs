// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring the form state, messages, and feedback.

use crate::models::form_state::{FormPhase, FormState, SubmitOutcome};
use crate::ui::components::field_groups::{self, FieldGroupsMsg};

/// Acknowledgment shown after a valid submit.
pub const SUBMIT_SUCCESS: &str = "Form submitted successfully!";

/// Top-level application state.
#[derive(Default)]
pub struct AppModel {
    /// Field groups and the submitted flag.
    pub form: FormState,
    /// Pending success acknowledgment; blocks the form while set.
    pub acknowledgment: Option<String>,
    /// Latest status message for the footer.
    pub status: Option<String>,
}

/// Application messages routed through the update function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    FieldGroups(FieldGroupsMsg),
    SubmitRequested,
    DismissAcknowledgment,
}

/// Update the application model.
pub fn update(model: &mut AppModel, msg: Msg) {
    tracing::debug!(?msg, "applying message");
    match msg {
        Msg::SubmitRequested | Msg::FieldGroups(FieldGroupsMsg::SubmitRequested) => submit(model),
        Msg::FieldGroups(m) => {
            let is_edit = matches!(
                m,
                FieldGroupsMsg::InputChanged { .. } | FieldGroupsMsg::SelectChanged { .. }
            );
            if let Some(event) = field_groups::update(&mut model.form, m) {
                model.status = Some(event.message);
            }
            if is_edit && model.form.phase() == FormPhase::Submitted {
                refresh_attention(model);
            }
        }
        Msg::DismissAcknowledgment => model.acknowledgment = None,
    }
}

/// Keep the footer in step with live validation after a submit attempt.
fn refresh_attention(model: &mut AppModel) {
    model.status = match model.form.invalid_groups() {
        0 => None,
        n => Some(attention_message(n)),
    };
}

fn attention_message(invalid_groups: usize) -> String {
    let noun = if invalid_groups == 1 {
        "field set needs"
    } else {
        "field sets need"
    };
    format!("{invalid_groups} {noun} attention.")
}

fn submit(model: &mut AppModel) {
    match model.form.submit() {
        SubmitOutcome::Accepted(submission) => {
            match serde_json::to_string(&submission) {
                Ok(json) => tracing::info!(submission = %json, "form submitted"),
                Err(err) => tracing::warn!(%err, "could not serialize submission"),
            }
            model.acknowledgment = Some(SUBMIT_SUCCESS.to_string());
            model.status = Some(SUBMIT_SUCCESS.to_string());
        }
        SubmitOutcome::Rejected { invalid_groups } => {
            tracing::info!(invalid_groups, phase = ?model.form.phase(), "submit rejected");
            model.status = Some(attention_message(invalid_groups));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::field_group::{FieldError, SelectOption};

    fn send(model: &mut AppModel, msg: FieldGroupsMsg) {
        update(model, Msg::FieldGroups(msg));
    }

    #[test]
    fn invalid_submit_shows_errors_without_acknowledgment() {
        let mut model = AppModel::default();

        update(&mut model, Msg::SubmitRequested);

        assert!(model.acknowledgment.is_none());
        assert_eq!(model.form.phase(), FormPhase::Submitted);
        let group = model.form.group(1).unwrap();
        assert_eq!(group.input_error_message(), "This field is required");
        assert_eq!(group.select_error_message(), "Please select an option");
        assert_eq!(
            model.status.as_deref(),
            Some("1 field set needs attention.")
        );
    }

    #[test]
    fn submit_flow_from_empty_to_acknowledged() {
        let mut model = AppModel::default();

        update(&mut model, Msg::SubmitRequested);
        assert!(model.acknowledgment.is_none());

        send(
            &mut model,
            FieldGroupsMsg::InputChanged {
                id: 1,
                value: "abc".into(),
            },
        );
        update(&mut model, Msg::SubmitRequested);
        assert!(model.acknowledgment.is_none());
        let group = model.form.group(1).unwrap();
        assert_eq!(group.input_error, None);
        assert_eq!(group.select_error, Some(FieldError::OptionNotSelected));

        send(
            &mut model,
            FieldGroupsMsg::SelectChanged {
                id: 1,
                value: Some(SelectOption::Option2),
            },
        );
        update(&mut model, Msg::SubmitRequested);

        assert_eq!(model.acknowledgment.as_deref(), Some(SUBMIT_SUCCESS));
        assert!(!model.form.group(1).unwrap().has_errors());

        update(&mut model, Msg::DismissAcknowledgment);
        assert!(model.acknowledgment.is_none());
        assert_eq!(model.form.phase(), FormPhase::Submitted);
    }

    #[test]
    fn add_and_remove_update_status() {
        let mut model = AppModel::default();

        send(&mut model, FieldGroupsMsg::AddGroup);
        send(&mut model, FieldGroupsMsg::AddGroup);
        assert_eq!(model.status.as_deref(), Some("Field set 3 added."));

        send(&mut model, FieldGroupsMsg::RemoveGroup(2));
        assert_eq!(model.status.as_deref(), Some("Field set 2 removed."));

        send(&mut model, FieldGroupsMsg::AddGroup);
        let ids: Vec<_> = model.form.groups().iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn enter_in_text_input_submits_like_the_button() {
        let mut model = AppModel::default();

        send(&mut model, FieldGroupsMsg::SubmitRequested);

        assert_eq!(model.form.phase(), FormPhase::Submitted);
        assert!(model.acknowledgment.is_none());
        assert!(model.form.group(1).unwrap().has_errors());

        send(
            &mut model,
            FieldGroupsMsg::InputChanged {
                id: 1,
                value: "abc".into(),
            },
        );
        send(
            &mut model,
            FieldGroupsMsg::SelectChanged {
                id: 1,
                value: Some(SelectOption::Option1),
            },
        );
        send(&mut model, FieldGroupsMsg::SubmitRequested);

        assert_eq!(model.acknowledgment.as_deref(), Some(SUBMIT_SUCCESS));
    }

    #[test]
    fn attention_status_follows_live_edits_after_submit() {
        let mut model = AppModel::default();
        send(&mut model, FieldGroupsMsg::AddGroup);
        update(&mut model, Msg::SubmitRequested);
        assert_eq!(
            model.status.as_deref(),
            Some("2 field sets need attention.")
        );

        for id in [1, 2] {
            send(
                &mut model,
                FieldGroupsMsg::InputChanged {
                    id,
                    value: "x".into(),
                },
            );
            send(
                &mut model,
                FieldGroupsMsg::SelectChanged {
                    id,
                    value: Some(SelectOption::Option2),
                },
            );
            if id == 1 {
                assert_eq!(
                    model.status.as_deref(),
                    Some("1 field set needs attention.")
                );
            }
        }

        assert_eq!(model.status, None);
    }

    #[test]
    fn edits_before_submit_leave_status_alone() {
        let mut model = AppModel::default();
        send(&mut model, FieldGroupsMsg::AddGroup);

        send(
            &mut model,
            FieldGroupsMsg::InputChanged {
                id: 1,
                value: "x".into(),
            },
        );

        assert_eq!(model.status.as_deref(), Some("Field set 2 added."));
    }

    #[test]
    fn plural_status_for_several_invalid_groups() {
        let mut model = AppModel::default();
        send(&mut model, FieldGroupsMsg::AddGroup);

        update(&mut model, Msg::SubmitRequested);

        assert_eq!(
            model.status.as_deref(),
            Some("2 field sets need attention.")
        );
    }
}
