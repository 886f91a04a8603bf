// src/command/intake/export.rs

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rand::rngs::OsRng;
use rand::RngCore;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::codec;
use crate::command::intake::types::{
    IntakeSession, EXPORT_FILE_EXT, EXPORT_FILE_PREFIX, UNNAMED_PATIENT,
};
use crate::error::{AppError, AppResult};
use crate::record::PatientRecord;

/// Save-as collaborator: receives the serialized answers and a suggested
/// filename, returns where they ended up.
pub trait SaveSink {
    fn save(&mut self, bytes: &[u8], file_name: &str) -> AppResult<PathBuf>;
}

/// Writes exports into a fixed directory.
#[derive(Debug, Clone)]
pub struct DirSaveSink {
    dir: PathBuf,
}

impl DirSaveSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl SaveSink for DirSaveSink {
    fn save(&mut self, bytes: &[u8], file_name: &str) -> AppResult<PathBuf> {
        let path = self.dir.join(file_name);
        write_file_atomic(&path, bytes)?;
        Ok(path)
    }
}

/// `AVANT_Paciente_<nome or SemNome>_<YYYY-MM-DD>.json`
/// Calendar day used in export file names: the UTC date of `now`.
pub fn export_date<Tz: TimeZone>(now: DateTime<Tz>) -> NaiveDate {
    now.with_timezone(&Utc).date_naive()
}

pub fn export_file_name(record: &PatientRecord, today: NaiveDate) -> String {
    let name = sanitize_file_component(record.patient_name());
    let name = if name.is_empty() {
        UNNAMED_PATIENT.to_string()
    } else {
        name
    };

    format!(
        "{EXPORT_FILE_PREFIX}_{name}_{}.{EXPORT_FILE_EXT}",
        today.format("%Y-%m-%d")
    )
}

// Path separators and characters most filesystems reject.
fn sanitize_file_component(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect::<String>()
        .trim_matches(|c: char| c == '.' || c.is_whitespace())
        .to_string()
}

pub fn export_record(
    record: &PatientRecord,
    file_name: &str,
    sink: &mut dyn SaveSink,
) -> AppResult<PathBuf> {
    let json = codec::pretty_record_string(record)?;

    match sink.save(json.as_bytes(), file_name) {
        Ok(path) => {
            tracing::info!(path = %path.display(), bytes = json.len(), "answers exported");
            Ok(path)
        }
        Err(AppError::ExportCancelled) => Err(AppError::ExportCancelled),
        Err(e) => {
            tracing::error!(error = %e, file_name, "export failed");
            Err(e)
        }
    }
}

impl IntakeSession {
    pub fn export_file_name(&self, today: NaiveDate) -> String {
        export_file_name(&self.record, today)
    }

    /// Exports the current answers; does not require completion.
    pub fn export(&self, sink: &mut dyn SaveSink, today: NaiveDate) -> AppResult<PathBuf> {
        export_record(&self.record, &self.export_file_name(today), sink)
    }
}

/// Write to a sibling temp file, then rename over `path`. The temp file is
/// removed on every failure path.
pub fn write_file_atomic(path: &Path, bytes: &[u8]) -> AppResult<()> {
    let parent = path
        .parent()
        .ok_or_else(|| AppError::ExportWriteFailed("invalid export path".to_string()))?;

    let file_name = path
        .file_name()
        .ok_or_else(|| AppError::ExportWriteFailed("invalid export path".to_string()))?
        .to_string_lossy()
        .to_string();

    let mut rnd = [0u8; 8];
    OsRng.fill_bytes(&mut rnd);
    let tmp = parent.join(format!(".{file_name}.{}.tmp", hex::encode(rnd)));

    let write_res: AppResult<()> = (|| {
        let mut f = OpenOptions::new()
            .create_new(true)
            .write(true)
            .open(&tmp)
            .map_err(|e| AppError::ExportWriteFailed(e.to_string()))?;

        f.write_all(bytes)
            .map_err(|e| AppError::ExportWriteFailed(e.to_string()))?;
        f.sync_all()
            .map_err(|e| AppError::ExportWriteFailed(e.to_string()))?;
        drop(f);

        fs::rename(&tmp, path).map_err(|e| AppError::ExportRenameFailed(e.to_string()))?;
        Ok(())
    })();

    if write_res.is_err() {
        let _ = fs::remove_file(&tmp);
    }

    write_res
}

// ======================================================
// Unit Tests
// ======================================================
