// tests/export_file.rs

mod common;

use std::fs;

use avant_intake_lib::command::{export_date, DirSaveSink};
use avant_intake_lib::record::PatientRecord;
use avant_intake_lib::template::Section;

use common::fresh_session;

#[test]
fn export_with_empty_name_uses_placeholder_and_today() {
    let s = fresh_session();
    let today = export_date(chrono::Utc::now());

    let name = s.export_file_name(today);
    assert!(name.contains("SemNome"));
    assert!(name.contains(&today.format("%Y-%m-%d").to_string()));
    assert!(name.starts_with("AVANT_Paciente_"));
    assert!(name.ends_with(".json"));
}

#[test]
fn export_writes_answers_without_completion() {
    let td = tempfile::tempdir().expect("tempdir");
    let mut sink = DirSaveSink::new(td.path());

    let mut s = fresh_session();
    s.set_field(Section::Identification, "nome", "Maria Silva")
        .unwrap();
    s.set_field(Section::Social, "matrimonio", "Casada desde 2010; 2 filhos")
        .unwrap();

    let today = chrono::NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
    let path = s.export(&mut sink, today).expect("export");
    assert_eq!(
        path.file_name().unwrap().to_string_lossy(),
        "AVANT_Paciente_Maria Silva_2026-10-16.json"
    );

    let text = fs::read_to_string(&path).unwrap();
    let v: serde_json::Value = serde_json::from_str(&text).unwrap();
    let back = PatientRecord::from_json_value(&v).unwrap();
    assert_eq!(&back, s.record());
    assert!(!s.is_completed());
}
