// src/ui/panel_section.rs

use avant_intake_lib::command::IntakeSession;
use avant_intake_lib::template::{FieldSpec, InputKind, Section};
use eframe::egui;

use super::message::PanelMsgState;
use super::widgets;

const CHOICE_PLACEHOLDER: &str = "Selecione...";

/// Renders any section straight from the schema; edits go through the
/// session so completion is invalidated.
pub struct SectionPanel {
    msg: PanelMsgState,
}

impl SectionPanel {
    pub fn new() -> Self {
        Self {
            msg: PanelMsgState::default(),
        }
    }

    pub fn clear_messages(&mut self) {
        self.msg.clear();
    }

    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        session: &mut IntakeSession,
        section: Section,
        debug_ui: bool,
    ) {
        ui.heading(section.title());
        ui.separator();
        ui.add_space(6.0);

        self.msg.show(ui);

        for spec in section.fields() {
            if let Some(heading) = spec.heading {
                widgets::group_heading(ui, heading);
            }

            widgets::field_label(ui, spec);

            let enabled = session.record().is_enabled(spec);
            let original = session.record().value_of(spec).to_string();
            let mut buf = original.clone();

            field_editor(ui, spec, enabled, &mut buf);

            if buf != original {
                if let Err(e) = session.set_field(spec.section, spec.key, buf) {
                    self.msg.from_app_error(&e, debug_ui);
                }
            }

            ui.add_space(10.0);
        }
    }
}

fn field_editor(ui: &mut egui::Ui, spec: &FieldSpec, enabled: bool, buf: &mut String) {
    let width = ui.available_width();

    match spec.kind {
        InputKind::Text => {
            let mut edit = egui::TextEdit::singleline(buf).desired_width(width);
            if let Some(hint) = spec.placeholder {
                edit = edit.hint_text(hint);
            }
            ui.add_enabled(enabled, edit);
        }
        InputKind::MultiLine => {
            let mut edit = egui::TextEdit::multiline(buf)
                .desired_rows(3)
                .desired_width(width);
            if let Some(hint) = spec.placeholder {
                edit = edit.hint_text(hint);
            }
            ui.add_enabled(enabled, edit);
        }
        InputKind::Choice(options) => {
            ui.add_enabled_ui(enabled, |ui| {
                let selected = if buf.is_empty() {
                    CHOICE_PLACEHOLDER.to_string()
                } else {
                    buf.clone()
                };

                egui::ComboBox::from_id_salt((spec.section.key(), spec.key))
                    .selected_text(selected)
                    .width(width.min(320.0))
                    .show_ui(ui, |ui| {
                        ui.selectable_value(buf, String::new(), CHOICE_PLACEHOLDER);
                        for opt in options {
                            ui.selectable_value(buf, opt.to_string(), *opt);
                        }
                    });
            });
        }
    }
}
