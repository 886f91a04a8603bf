// src/template/mod.rs

pub mod intake_form;

pub use intake_form::{field_index, field_spec, Dependency, FieldSpec, InputKind, Section, SCHEMA};
