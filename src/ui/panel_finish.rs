// src/ui/panel_finish.rs

use std::time::Instant;

use avant_intake_lib::command::{export_date, CopyTarget, IntakeSession};
use avant_intake_lib::context::AppCtx;
use eframe::egui;

use super::adapters::{DialogSaveSink, EguiClipboard};
use super::message::PanelMsgState;
use super::widgets;

pub struct FinishPanel {
    msg: PanelMsgState,
}

impl FinishPanel {
    pub fn new() -> Self {
        Self {
            msg: PanelMsgState::default(),
        }
    }

    pub fn clear_messages(&mut self) {
        self.msg.clear();
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, session: &mut IntakeSession, app: &AppCtx) {
        let now = Instant::now();

        if session.is_completed() {
            self.ui_completed(ui, session, app, now);
        } else {
            self.ui_pending(ui, session, app, now);
        }

        ui.add_space(8.0);
        self.msg.show(ui);
    }

    fn ui_pending(&mut self, ui: &mut egui::Ui, session: &mut IntakeSession, app: &AppCtx, now: Instant) {
        ui.vertical_centered(|ui| {
            ui.add_space(16.0);
            ui.heading("Você chegou ao final");
            ui.add_space(8.0);
            ui.label(
                "Obrigado por preencher o formulário. Antes de enviar, certifique-se de que \
                 todas as informações estão corretas. Clique no botão abaixo para concluir \
                 e gerar o seu código de resposta.",
            );
            ui.add_space(12.0);

            let finish = egui::Button::new(
                egui::RichText::new("Concluir Preenchimento")
                    .strong()
                    .color(egui::Color32::WHITE),
            )
            .fill(widgets::SUCCESS)
            .min_size(egui::vec2(220.0, 36.0));

            if ui.add(finish).clicked() {
                session.complete();
                self.msg.clear();
            }
        });

        ui.add_space(16.0);
        ui.separator();
        ui.add_space(8.0);

        ui.group(|ui| {
            ui.label(egui::RichText::new("Para o Médico/Pesquisador:").strong());
            ui.label("Se você precisa do link em branco para enviar a um novo paciente, copie o link abaixo:");

            let blank = session.blank_link().to_string();
            let copied = session.copy_flash(now) == Some(CopyTarget::Blank);
            ui.horizontal(|ui| {
                widgets::readonly_line(ui, &blank);
                if widgets::copy_button(ui, "Copiar", copied) {
                    self.copy(ui.ctx(), session, CopyTarget::Blank, app);
                }
            });
        });
    }

    fn ui_completed(&mut self, ui: &mut egui::Ui, session: &mut IntakeSession, app: &AppCtx, now: Instant) {
        widgets::ui_notice(
            ui,
            "Respostas Salvas com Sucesso!",
            "Agora você precisa enviar seus dados para o médico.",
            widgets::SUCCESS,
        );

        ui.add_space(12.0);
        ui.label(egui::RichText::new("Escolha uma forma de enviar:").strong());
        ui.add_space(6.0);

        ui.group(|ui| {
            ui.label(egui::RichText::new("Opção 1: Baixar Arquivo (Recomendado)").strong());
            ui.label("Baixe um arquivo com suas respostas e envie por WhatsApp ou E-mail para o médico.");
            ui.label(
                egui::RichText::new("Melhor opção se o link não funcionar.")
                    .small()
                    .color(widgets::ACCENT),
            );
            if ui.button("Baixar Respostas").clicked() {
                let today = export_date(chrono::Utc::now());
                let mut sink = DialogSaveSink::new(app.export_dir.clone());
                match session.export(&mut sink, today) {
                    Ok(path) => self
                        .msg
                        .set_success(format!("Arquivo salvo em {}", path.display())),
                    Err(e) => self.msg.from_app_error(&e, app.debug_ui),
                }
            }
        });

        ui.add_space(8.0);

        let shareable = session.links_are_shareable();
        ui.group(|ui| {
            ui.label(egui::RichText::new("Opção 2: Enviar Link").strong());
            ui.horizontal_wrapped(|ui| {
                ui.label("Copie o link abaixo e envie para o médico.");
                if !shareable {
                    ui.colored_label(
                        widgets::DANGER,
                        "(Pode não funcionar neste ambiente de teste!)",
                    );
                }
            });

            let link = session.link().unwrap_or("").to_string();
            let copied = session.copy_flash(now) == Some(CopyTarget::Review);
            ui.horizontal(|ui| {
                widgets::readonly_line(ui, &link);
                if widgets::copy_button(ui, "Copiar Link", copied) {
                    self.copy(ui.ctx(), session, CopyTarget::Review, app);
                }
            });
        });
    }

    fn copy(&mut self, ctx: &egui::Context, session: &mut IntakeSession, target: CopyTarget, app: &AppCtx) {
        let mut clipboard = EguiClipboard::new(ctx);
        if let Err(e) = session.copy_to_clipboard(target, &mut clipboard, Instant::now()) {
            // No "copied" indicator; only debug builds say why.
            if app.debug_ui {
                self.msg.from_app_error(&e, true);
            }
        }
    }
}
