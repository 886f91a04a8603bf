// src/main.rs

// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod ui;

use avant_intake_lib::context::AppCtx;
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    for directive in ["avant_intake=info", "avant_intake_lib=info"] {
        if let Ok(d) = directive.parse() {
            filter = filter.add_directive(d);
        }
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> eframe::Result<()> {
    init_tracing();

    // The link the form was opened with; carries the answers in its fragment.
    let ctx = AppCtx::from_env(env::args().nth(1));
    let session = avant_intake_lib::init_session(&ctx);

    eframe::run_native(
        "AVANT — Coleta de Dados",
        eframe::NativeOptions::default(),
        Box::new(move |_cc| Ok(Box::new(ui::UiApp::new(session, ctx)))),
    )
}
