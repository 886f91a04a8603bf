// src/command/mod.rs

pub mod intake;

// --- Public façade ---

pub use intake::{
    export_date, export_file_name, export_record, Clipboard, CopyTarget, DirSaveSink, IntakeSession, SaveSink,
    Step,
};
