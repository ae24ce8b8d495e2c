// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for the form builder.
//! Handles layout, the action row, and the submit acknowledgment.

pub mod components;

use eframe::egui;

use crate::mvu::{self, AppModel, Msg};
use crate::ui::components::field_groups::{self, FieldGroupsMsg};
use crate::ui::components::preview_table;

/// Stateful egui application hosting a single dynamic form.
#[derive(Default)]
pub struct FormBuilderApp {
    model: AppModel,
    inbox: Vec<Msg>,
}

impl eframe::App for FormBuilderApp {
    /// Drives a single UI frame.
    ///
    /// Messages collected by the views during the previous frame are applied in
    /// order before anything is drawn, so every frame renders the latest model.
    fn ui(&mut self, ui: &mut egui::Ui, _frame: &mut eframe::Frame) {
        let ctx = ui.ctx().clone();
        self.ensure_spacing(&ctx);

        let msgs = std::mem::take(&mut self.inbox);
        let had_msgs = !msgs.is_empty();
        for msg in msgs {
            mvu::update(&mut self.model, msg);
        }

        egui::Panel::top("top_bar").show_inside(ui, |ui| {
            ui.add_space(6.0);
            ui.heading("Form Builder");
            ui.label(
                egui::RichText::new("Add multiple fields, validation with real-time form state")
                    .small()
                    .color(egui::Color32::from_gray(110)),
            );
            ui.add_space(4.0);
        });

        egui::Panel::bottom("footer").show_inside(ui, |ui| {
            self.render_footer(ui);
        });

        egui::CentralPanel::default().show_inside(ui, |ui| {
            ui.add_space(8.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                let group_msgs = field_groups::view(ui, &self.model.form);
                self.inbox
                    .extend(group_msgs.into_iter().map(Msg::FieldGroups));
                ui.add_space(4.0);

                self.render_actions(ui);
                ui.add_space(24.0);

                preview_table::view(ui, &self.model.form);
                ui.add_space(8.0);
            });
        });

        self.render_acknowledgment(&ctx);

        // Apply this frame's input without waiting for the next event.
        if had_msgs || !self.inbox.is_empty() {
            ctx.request_repaint();
        }
    }
}

impl FormBuilderApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    /// "Add Field" and "Submit Form" buttons.
    fn render_actions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui
                .button(format!("{} Add Field", egui_phosphor::regular::PLUS))
                .clicked()
            {
                self.inbox.push(Msg::FieldGroups(FieldGroupsMsg::AddGroup));
            }

            if ui
                .button(format!(
                    "{} Submit Form",
                    egui_phosphor::regular::PAPER_PLANE_TILT
                ))
                .clicked()
            {
                self.inbox.push(Msg::SubmitRequested);
            }
        });
    }

    /// Blocking modal shown after a valid submit.
    fn render_acknowledgment(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.model.acknowledgment.clone() {
            let modal = egui::Modal::new(egui::Id::new("submit_acknowledgment")).show(ctx, |ui| {
                ui.set_width(280.0);
                ui.heading(format!("{} Submitted", egui_phosphor::regular::CHECK_CIRCLE));
                ui.add_space(6.0);
                ui.label(message);
                ui.add_space(8.0);
                ui.button("OK").clicked()
            });
            if modal.inner || modal.should_close() {
                self.inbox.push(Msg::DismissAcknowledgment);
            }
        }
    }

    /// Field set count on the left, latest status on the right.
    fn render_footer(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(self.model.form.summary());
            if let Some(text) = &self.model.status {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(text).color(egui::Color32::from_gray(110)));
                });
            }
        });
    }
}
