// tests/common/mod.rs

#![allow(dead_code)]

use avant_intake_lib::command::{Clipboard, IntakeSession};
use avant_intake_lib::error::{AppError, AppResult};
use avant_intake_lib::host::HostAddress;

pub const BASE_URL: &str = "https://avant.example.org/intake/";

/// Clipboard double that remembers the last write.
#[derive(Default)]
pub struct RecordingClipboard {
    pub writes: Vec<String>,
    pub deny: bool,
}

impl Clipboard for RecordingClipboard {
    fn write(&mut self, text: &str) -> AppResult<()> {
        if self.deny {
            return Err(AppError::ClipboardUnavailable("permission denied".into()));
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}

pub fn fresh_session() -> IntakeSession {
    IntakeSession::bootstrap(HostAddress::parse(BASE_URL))
}

/// Opens `link` the way the clinician would.
pub fn reopen(link: &str) -> IntakeSession {
    IntakeSession::bootstrap(HostAddress::parse(link))
}
