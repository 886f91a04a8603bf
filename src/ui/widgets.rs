// src/ui/widgets.rs

use eframe::egui;

use avant_intake_lib::template::FieldSpec;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(2, 132, 199);
pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);
pub const DANGER: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);
pub const AMBER: egui::Color32 = egui::Color32::from_rgb(217, 119, 6);

/// "Copiar" button that reads "Copiado!" while the flash is active.
pub fn copy_button(ui: &mut egui::Ui, idle_label: &str, copied: bool) -> bool {
    let label = if copied { "Copiado!" } else { idle_label };
    ui.button(label).clicked()
}

/// Read-only single line, for links.
pub fn readonly_line(ui: &mut egui::Ui, text: &str) {
    let mut shown = text;
    ui.add(
        egui::TextEdit::singleline(&mut shown)
            .font(egui::TextStyle::Monospace)
            .desired_width(ui.available_width() - 90.0),
    );
}

pub fn field_label(ui: &mut egui::Ui, spec: &FieldSpec) {
    ui.label(egui::RichText::new(spec.label).strong());
    if let Some(sub) = spec.sub_label {
        ui.label(egui::RichText::new(sub).small().weak());
    }
}

pub fn group_heading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(8.0);
    ui.separator();
    ui.label(egui::RichText::new(text).size(16.0).strong());
    ui.add_space(4.0);
}

pub fn badge(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    let fill = egui::Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 32);
    egui::Frame::NONE
        .fill(fill)
        .stroke(egui::Stroke::new(1.0, color))
        .corner_radius(egui::CornerRadius::same(12u8))
        .inner_margin(egui::Margin::symmetric(10, 3))
        .show(ui, |ui| {
            ui.colored_label(color, text);
        });
}

pub fn ui_notice(ui: &mut egui::Ui, title: &str, body: &str, accent: egui::Color32) {
    let stroke = egui::Stroke::new(1.5, accent);
    let fill = egui::Color32::from_rgba_unmultiplied(accent.r(), accent.g(), accent.b(), 32);

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .stroke(stroke)
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(title).strong().color(accent));
            ui.add_space(4.0);
            ui.label(body);
        });
}
