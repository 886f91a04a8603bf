// src/lib.rs

pub mod codec;
pub mod command;
pub mod context;
pub mod error;
pub mod host;
pub mod record;
pub mod template;

use crate::command::IntakeSession;
use crate::context::AppCtx;

/// Builds the session for this run from the startup address.
pub fn init_session(ctx: &AppCtx) -> IntakeSession {
    IntakeSession::bootstrap(ctx.host_address())
}
