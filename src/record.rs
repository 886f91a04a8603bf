// src/record.rs

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value as JsonValue;

use crate::error::{AppError, AppResult};
use crate::template::{field_index, FieldSpec, Section, SCHEMA};

/// Patient answers, one string per schema field.
///
/// `values[i]` is the answer to `SCHEMA[i]`, so every field is always
/// present and the record can never be partially shaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientRecord {
    values: Vec<String>,
}

impl Default for PatientRecord {
    fn default() -> Self {
        Self {
            values: SCHEMA.iter().map(|f| f.default.to_string()).collect(),
        }
    }
}

impl PatientRecord {
    pub fn get(&self, section: Section, key: &str) -> Option<&str> {
        field_index(section, key).map(|i| self.values[i].as_str())
    }

    pub fn set(&mut self, section: Section, key: &str, value: impl Into<String>) -> AppResult<()> {
        let i = field_index(section, key).ok_or_else(|| AppError::UnknownField {
            section: section.key().to_string(),
            field: key.to_string(),
        })?;
        self.values[i] = value.into();
        Ok(())
    }

    /// Answer for a field taken from [`SCHEMA`].
    pub fn value_of(&self, spec: &FieldSpec) -> &str {
        self.get(spec.section, spec.key).unwrap_or("")
    }

    /// Dependent fields are editable only while their controlling answer matches.
    pub fn is_enabled(&self, spec: &FieldSpec) -> bool {
        match spec.enabled_when {
            None => true,
            Some(dep) => self.get(spec.section, dep.key) == Some(dep.equals),
        }
    }

    pub fn patient_name(&self) -> &str {
        self.get(Section::Identification, "nome").unwrap_or("").trim()
    }

    pub fn fields(&self, section: Section) -> impl Iterator<Item = (&'static FieldSpec, &str)> {
        SCHEMA
            .iter()
            .zip(self.values.iter())
            .filter(move |(f, _)| f.section == section)
            .map(|(f, v)| (f, v.as_str()))
    }

    /// Rebuild a record from parsed JSON. Every schema field must be present
    /// as a string; unknown extra keys are ignored.
    pub fn from_json_value(value: &JsonValue) -> AppResult<Self> {
        let root = value
            .as_object()
            .ok_or_else(|| AppError::RecordShape("top level is not an object".into()))?;

        let mut values = Vec::with_capacity(SCHEMA.len());
        for spec in SCHEMA {
            let section = root
                .get(spec.section.key())
                .and_then(JsonValue::as_object)
                .ok_or_else(|| {
                    AppError::RecordShape(format!("missing section {}", spec.section.key()))
                })?;

            let v = section.get(spec.key).ok_or_else(|| {
                AppError::RecordShape(format!("missing field {}.{}", spec.section.key(), spec.key))
            })?;

            let s = v.as_str().ok_or_else(|| {
                AppError::RecordShape(format!(
                    "field {}.{} is not a string",
                    spec.section.key(),
                    spec.key
                ))
            })?;

            values.push(s.to_string());
        }

        Ok(Self { values })
    }
}

struct SectionView<'a> {
    record: &'a PatientRecord,
    section: Section,
}

impl Serialize for SectionView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (spec, value) in self.record.fields(self.section) {
            map.serialize_entry(spec.key, value)?;
        }
        map.end()
    }
}

/// Serializes as `{ category: { field: value } }` in schema order.
impl Serialize for PatientRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Section::ALL.len()))?;
        for section in Section::ALL {
            map.serialize_entry(
                section.key(),
                &SectionView {
                    record: self,
                    section,
                },
            )?;
        }
        map.end()
    }
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_record_uses_schema_defaults() {
        let r = PatientRecord::default();
        assert_eq!(r.get(Section::Identification, "nome"), Some(""));
        assert_eq!(r.get(Section::Identification, "desempregado"), Some("Não"));
        assert_eq!(r.get(Section::Childhood, "epilepsia"), Some("Não"));
        assert_eq!(r.get(Section::Adulthood, "fumante"), Some("Não"));
        assert_eq!(r.get(Section::Family, "migracao"), Some(""));
    }

    #[test]
    fn set_unknown_field_is_rejected() {
        let mut r = PatientRecord::default();
        let err = r.set(Section::Social, "nome", "x").unwrap_err();
        assert!(matches!(err, AppError::UnknownField { .. }));
        assert_eq!(r, PatientRecord::default());
    }

    #[test]
    fn dependent_field_follows_controlling_answer() {
        let mut r = PatientRecord::default();
        let spec = crate::template::field_spec(Section::Identification, "tempoAposentado").unwrap();
        assert!(!r.is_enabled(spec));

        r.set(Section::Identification, "aposentado", "Sim").unwrap();
        assert!(r.is_enabled(spec));

        r.set(Section::Identification, "aposentado", "Não").unwrap();
        assert!(!r.is_enabled(spec));
    }

    #[test]
    fn serializes_in_schema_order() {
        let r = PatientRecord::default();
        let s = serde_json::to_string(&r).unwrap();
        assert!(s.starts_with(r#"{"identification":{"nome":"","numeroEstudo":"""#));

        let i_inf = s.find(r#""infancia""#).unwrap();
        let i_adu = s.find(r#""idadeAdulta""#).unwrap();
        let i_fam = s.find(r#""familia""#).unwrap();
        assert!(i_inf < i_adu && i_adu < i_fam);
        assert!(s.ends_with(r#""parentesPresos":""}}"#));
    }

    #[test]
    fn from_json_value_rejects_missing_field() {
        let mut v = serde_json::to_value(PatientRecord::default()).unwrap();
        v["social"].as_object_mut().unwrap().remove("lazer");
        let err = PatientRecord::from_json_value(&v).unwrap_err();
        assert!(matches!(err, AppError::RecordShape(_)));
    }

    #[test]
    fn from_json_value_rejects_non_string_leaf() {
        let mut v = serde_json::to_value(PatientRecord::default()).unwrap();
        v["familia"]["idadePais"] = json!(62);
        let err = PatientRecord::from_json_value(&v).unwrap_err();
        assert!(matches!(err, AppError::RecordShape(_)));
    }

    #[test]
    fn from_json_value_ignores_extra_keys() {
        let mut v = serde_json::to_value(PatientRecord::default()).unwrap();
        v["extra"] = json!({"a": "b"});
        v["identification"]["apelido"] = json!("Mari");
        let r = PatientRecord::from_json_value(&v).unwrap();
        assert_eq!(r, PatientRecord::default());
    }

    #[test]
    fn patient_name_is_trimmed() {
        let mut r = PatientRecord::default();
        r.set(Section::Identification, "nome", "  Maria Silva ").unwrap();
        assert_eq!(r.patient_name(), "Maria Silva");
    }
}
