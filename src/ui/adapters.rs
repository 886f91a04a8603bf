// src/ui/adapters.rs

//! egui / native-dialog implementations of the session's collaborators.

use std::path::PathBuf;

use avant_intake_lib::command::intake::write_file_atomic;
use avant_intake_lib::command::{Clipboard, SaveSink};
use avant_intake_lib::error::{AppError, AppResult};
use eframe::egui;

pub struct EguiClipboard<'a> {
    ctx: &'a egui::Context,
}

impl<'a> EguiClipboard<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx }
    }
}

impl Clipboard for EguiClipboard<'_> {
    fn write(&mut self, text: &str) -> AppResult<()> {
        if text.is_empty() {
            return Err(AppError::ClipboardUnavailable("nothing to copy".into()));
        }
        self.ctx.copy_text(text.to_string());
        Ok(())
    }
}

/// Native "Save as" dialog, opened in the configured export directory.
pub struct DialogSaveSink {
    start_dir: PathBuf,
}

impl DialogSaveSink {
    pub fn new(start_dir: PathBuf) -> Self {
        Self { start_dir }
    }
}

impl SaveSink for DialogSaveSink {
    fn save(&mut self, bytes: &[u8], file_name: &str) -> AppResult<PathBuf> {
        let path = rfd::FileDialog::new()
            .set_directory(&self.start_dir)
            .set_file_name(file_name)
            .add_filter("JSON", &["json"])
            .save_file()
            .ok_or(AppError::ExportCancelled)?;

        write_file_atomic(&path, bytes)?;
        Ok(path)
    }
}
