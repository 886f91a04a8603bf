// src/ui/nav.rs

use avant_intake_lib::command::Step;
use eframe::egui;

use super::widgets;

/// What the nav should show (derived by ui/mod.rs)
#[derive(Clone, Copy, Debug)]
pub struct NavModel {
    pub current: Step,
    pub completed: bool,
}

pub struct LeftNav;

impl LeftNav {
    pub fn new() -> Self {
        Self
    }

    /// Pure view: renders from NavModel and returns the clicked step, if any.
    pub fn ui(&mut self, ctx: &egui::Context, model: NavModel) -> Option<Step> {
        let mut clicked = None;

        egui::SidePanel::left("left_nav")
            .resizable(false)
            .min_width(200.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);

                for step in Step::all() {
                    if step == Step::Finish {
                        ui.separator();
                    }

                    let mut text = egui::RichText::new(step.label());
                    if step == Step::Finish && model.completed {
                        text = text.color(widgets::SUCCESS);
                    }

                    if ui.selectable_label(model.current == step, text).clicked() {
                        clicked = Some(step);
                    }
                }
            });

        clicked
    }
}
