// src/command/intake/mod.rs

pub mod export;
pub mod nav;
pub mod session;
pub mod types;

pub use export::*;
pub use session::*;
pub use types::*;
