// src/ui/mod.rs

pub mod adapters;
pub mod nav;
pub mod panel_finish;
pub mod panel_section;

pub mod message;
pub mod widgets;

use eframe::egui;
use std::time::Instant;

use avant_intake_lib::command::{IntakeSession, Step};
use avant_intake_lib::context::AppCtx;

use nav::{LeftNav, NavModel};
use panel_finish::FinishPanel;
use panel_section::SectionPanel;

pub struct UiApp {
    session: IntakeSession,
    ctx: AppCtx,

    prev_step: Step,

    nav: LeftNav,
    section: SectionPanel,
    finish: FinishPanel,
}

impl UiApp {
    pub fn new(session: IntakeSession, ctx: AppCtx) -> Self {
        let prev_step = session.step();
        Self {
            session,
            ctx,
            prev_step,
            nav: LeftNav::new(),
            section: SectionPanel::new(),
            finish: FinishPanel::new(),
        }
    }

    fn derive_nav_model(&self) -> NavModel {
        NavModel {
            current: self.session.step(),
            completed: self.session.is_completed(),
        }
    }

    fn header(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                widgets::badge(ui, "AVANT", widgets::ACCENT);
                ui.heading("Projeto Avant");

                if self.session.is_review_mode() {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        widgets::badge(ui, "Modo de Visualização/Revisão", widgets::AMBER);
                    });
                }
            });
            ui.label(
                egui::RichText::new(
                    "Coleta de dados históricos e demográficos para Transtorno de Ansiedade Generalizada",
                )
                .weak(),
            );

            if !self.session.links_are_shareable() {
                ui.add_space(6.0);
                widgets::ui_notice(
                    ui,
                    "Atenção (Ambiente de Teste):",
                    "Este formulário está rodando em um endereço temporário. Os links gerados \
                     aqui não funcionarão se enviados para outra pessoa. Para coletar dados \
                     agora, use a opção \"Baixar Arquivo de Respostas\" na etapa final e envie \
                     o arquivo.",
                    widgets::DANGER,
                );
            }
            ui.add_space(6.0);
        });
    }

    fn step_buttons(&mut self, ui: &mut egui::Ui) {
        ui.add_space(12.0);
        ui.separator();
        ui.horizontal(|ui| {
            if avant_intake_lib::command::intake::nav::can_go_back(self.session.nav_state())
                && ui.button("← Voltar").clicked()
            {
                self.session.previous();
            }

            let (n, total) = self.session.progress();
            ui.label(
                egui::RichText::new(format!("Etapa {n} de {total}"))
                    .small()
                    .weak(),
            );

            if avant_intake_lib::command::intake::nav::can_go_forward(self.session.nav_state()) {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Próximo →").clicked() {
                        self.session.next();
                    }
                });
            }
        });
    }
}

impl eframe::App for UiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Step transition hook: stale messages belong to the step that raised them.
        if self.session.step() != self.prev_step {
            self.section.clear_messages();
            self.finish.clear_messages();
            self.prev_step = self.session.step();
        }

        self.header(ctx);

        let nav_model = self.derive_nav_model();
        if let Some(target) = self.nav.ui(ctx, nav_model) {
            self.session.jump(target);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    match self.session.step() {
                        Step::Section(section) => {
                            self.section
                                .ui(ui, &mut self.session, section, self.ctx.debug_ui)
                        }
                        Step::Finish => self.finish.ui(ui, &mut self.session, &self.ctx),
                    }

                    self.step_buttons(ui);
                });
        });

        // Keep repainting until the "copied" indicator expires.
        if let Some((_, remaining)) = self.session.copy_flash_remaining(Instant::now()) {
            ctx.request_repaint_after(remaining);
        }
    }
}
