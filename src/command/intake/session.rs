// src/command/intake/session.rs

use std::time::{Duration, Instant};

use crate::codec;
use crate::command::intake::nav;
use crate::command::intake::types::{
    CopyFlash, CopyTarget, IntakeSession, NavState, Step, COPY_FLASH_DURATION,
};
use crate::error::{AppError, AppResult};
use crate::host::HostAddress;
use crate::record::PatientRecord;
use crate::template::Section;

/// Clipboard collaborator. Implementations report failure instead of panicking.
pub trait Clipboard {
    fn write(&mut self, text: &str) -> AppResult<()>;
}

impl IntakeSession {
    /// Starts in review mode when the address fragment carries a valid token,
    /// otherwise with a blank record.
    pub fn bootstrap(host: HostAddress) -> Self {
        let decoded = codec::decode(host.fragment());
        let review_mode = decoded.is_some();
        let record = decoded.unwrap_or_default();

        tracing::info!(
            review_mode,
            shareable = host.is_shareable(),
            scheme = host.scheme().unwrap_or("<none>"),
            "intake session started"
        );

        Self {
            host,
            record,
            nav: NavState::default(),
            completed: false,
            link: None,
            review_mode,
            copy_flash: None,
        }
    }

    pub fn record(&self) -> &PatientRecord {
        &self.record
    }

    pub fn host(&self) -> &HostAddress {
        &self.host
    }

    pub fn step(&self) -> Step {
        self.nav.step
    }

    pub fn nav_state(&self) -> &NavState {
        &self.nav
    }

    /// 1-based step number and total step count.
    pub fn progress(&self) -> (usize, usize) {
        nav::position(&self.nav)
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_review_mode(&self) -> bool {
        self.review_mode
    }

    /// False when generated links would not open for someone else
    /// (preview or local schemes); the UI should steer to file export.
    pub fn links_are_shareable(&self) -> bool {
        self.host.is_shareable()
    }

    /// Generated link, present only while the session is completed.
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    pub fn blank_link(&self) -> &str {
        self.host.base_address()
    }

    // --------------------------------------------------
    // navigation
    // --------------------------------------------------

    pub fn next(&mut self) -> bool {
        nav::next(&mut self.nav)
    }

    pub fn previous(&mut self) -> bool {
        nav::previous(&mut self.nav)
    }

    pub fn jump(&mut self, target: Step) {
        nav::jump(&mut self.nav, target)
    }

    // --------------------------------------------------
    // editing / completion
    // --------------------------------------------------

    /// Any accepted edit invalidates a previous completion.
    pub fn set_field(&mut self, section: Section, key: &str, value: impl Into<String>) -> AppResult<()> {
        self.record.set(section, key, value)?;
        if self.completed {
            tracing::debug!(section = section.key(), field = key, "edit after completion");
        }
        self.completed = false;
        self.link = None;
        Ok(())
    }

    /// Fixes the current answers into a shareable link.
    pub fn complete(&mut self) -> &str {
        let token = codec::encode(&self.record);
        let link = self.host.link_with_token(&token);
        tracing::info!(token_len = token.len(), "intake completed");

        self.completed = true;
        self.link.insert(link).as_str()
    }

    // --------------------------------------------------
    // clipboard
    // --------------------------------------------------

    pub fn copy_to_clipboard(
        &mut self,
        target: CopyTarget,
        clipboard: &mut dyn Clipboard,
        now: Instant,
    ) -> AppResult<()> {
        let text = match target {
            CopyTarget::Blank => self.blank_link().to_string(),
            CopyTarget::Review => self
                .link
                .clone()
                .ok_or_else(|| AppError::Msg("no generated link to copy".into()))?,
        };

        match clipboard.write(&text) {
            Ok(()) => {
                self.copy_flash = Some(CopyFlash { target, at: now });
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, ?target, "clipboard write failed");
                Err(e)
            }
        }
    }

    /// Target whose "copied" indicator is still showing at `now`.
    pub fn copy_flash(&self, now: Instant) -> Option<CopyTarget> {
        self.copy_flash_remaining(now).map(|(target, _)| target)
    }

    pub fn copy_flash_remaining(&self, now: Instant) -> Option<(CopyTarget, Duration)> {
        let flash = self.copy_flash?;
        let elapsed = now.saturating_duration_since(flash.at);
        COPY_FLASH_DURATION
            .checked_sub(elapsed)
            .filter(|d| !d.is_zero())
            .map(|d| (flash.target, d))
    }
}

// ======================================================
// Unit Tests
// ======================================================
