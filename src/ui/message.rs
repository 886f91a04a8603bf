// src/ui/message.rs

use avant_intake_lib::error::{AppError, UserMsgKind};

use super::egui;
use super::egui::{Color32, Ui};

/// One status line per panel (success / warning / error / info).
#[derive(Clone, Debug, Default)]
pub struct PanelMsgState {
    current: Option<(UserMsgKind, String)>,
}

impl PanelMsgState {
    pub fn clear(&mut self) {
        self.current = None;
    }

    fn set(&mut self, kind: UserMsgKind, text: impl Into<String>) {
        self.current = Some((kind, text.into()));
    }

    pub fn set_success(&mut self, text: impl Into<String>) {
        self.set(UserMsgKind::Success, text);
    }

    /// Uses the error's own severity; debug builds show the full detail.
    pub fn from_app_error(&mut self, err: &AppError, debug_ui: bool) {
        let um = err.user_msg();
        let text = match (debug_ui, um.detail) {
            (true, Some(detail)) => format!("{} ({detail})", um.short),
            _ => um.short.to_string(),
        };
        self.set(um.kind, text);
    }

    pub fn show(&self, ui: &mut Ui) {
        let Some((kind, text)) = self.current.as_ref() else {
            return;
        };

        let (stroke, fill) = match kind {
            UserMsgKind::Success => (Color32::from_rgb(0, 160, 70), Color32::from_rgb(225, 245, 232)),
            UserMsgKind::Warn => (Color32::from_rgb(200, 120, 0), Color32::from_rgb(255, 244, 222)),
            UserMsgKind::Error => (Color32::from_rgb(200, 40, 40), Color32::from_rgb(254, 226, 226)),
            UserMsgKind::Info => (Color32::from_rgb(30, 110, 200), Color32::from_rgb(224, 238, 255)),
        };

        egui::Frame::NONE
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, stroke))
            .corner_radius(egui::CornerRadius::same(8u8))
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.colored_label(stroke, text.as_str());
            });
    }
}
