// src/codec.rs

//! Record <-> token codec.
//!
//! token = base64(utf8(json(record))), JSON keys in schema order. Tokens are
//! written with the standard padded alphabet; reading accepts them with or
//! without trailing `=`, since link shorteners and chat clients often drop it.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use serde_json::Value as JsonValue;

use crate::error::{AppError, AppResult};
use crate::record::PatientRecord;

pub const FRAGMENT_DELIMITER: char = '#';

const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Compact JSON text of the record; equal records give identical bytes.
pub fn canonical_record_string(record: &PatientRecord) -> AppResult<String> {
    serde_json::to_string(record).map_err(|e| AppError::ExportSerialize(e.to_string()))
}

/// Human-readable JSON (2-space indent) used for the exported file.
pub fn pretty_record_string(record: &PatientRecord) -> AppResult<String> {
    serde_json::to_string_pretty(record).map_err(|e| AppError::ExportSerialize(e.to_string()))
}

pub fn try_encode(record: &PatientRecord) -> AppResult<String> {
    let json = canonical_record_string(record)?;
    Ok(STANDARD.encode(json.as_bytes()))
}

/// Token for `record`, without the fragment delimiter.
pub fn encode(record: &PatientRecord) -> String {
    match try_encode(record) {
        Ok(token) => token,
        Err(e) => {
            tracing::error!(error = %e, "failed to encode record");
            String::new()
        }
    }
}

/// `Ok(None)` when there is no token at all; `Err` when a token is present
/// but cannot be turned back into a record.
pub fn try_decode(token_or_fragment: &str) -> AppResult<Option<PatientRecord>> {
    let trimmed = token_or_fragment.trim();
    let token = trimmed.strip_prefix(FRAGMENT_DELIMITER).unwrap_or(trimmed);
    if token.is_empty() {
        return Ok(None);
    }

    let bytes = STANDARD_LENIENT
        .decode(token)
        .map_err(|e| AppError::InvalidBase64(e.to_string()))?;

    let text = String::from_utf8(bytes).map_err(|e| AppError::InvalidUtf8(e.to_string()))?;

    let value: JsonValue =
        serde_json::from_str(&text).map_err(|e| AppError::InvalidJson(e.to_string()))?;

    PatientRecord::from_json_value(&value).map(Some)
}

/// Decoding never fails loudly: a bad token is logged and treated exactly
/// like a missing one.
pub fn decode(token_or_fragment: &str) -> Option<PatientRecord> {
    match try_decode(token_or_fragment) {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!(error = %e, "failed to decode record token");
            None
        }
    }
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::Section;

    fn sample_record() -> PatientRecord {
        let mut r = PatientRecord::default();
        r.set(Section::Identification, "nome", "João Açaí 😀").unwrap();
        r.set(Section::Identification, "endereco", "Rua #12 & 50% off\nApto 3")
            .unwrap();
        r.set(Section::Adulthood, "alcool", "  \t espaços  ").unwrap();
        r.set(Section::Family, "parentesPresos", "primo=sim?&x=1").unwrap();
        r
    }

    #[test]
    fn round_trip_preserves_unicode_and_reserved_characters() {
        let r = sample_record();
        let token = encode(&r);
        assert!(!token.is_empty());
        assert_eq!(decode(&token), Some(r.clone()));
        assert_eq!(decode(&format!("#{token}")), Some(r));
    }

    #[test]
    fn round_trip_default_record() {
        let r = PatientRecord::default();
        assert_eq!(decode(&encode(&r)), Some(r));
    }

    #[test]
    fn token_is_fragment_safe() {
        let token = encode(&sample_record());
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '='));
    }

    #[test]
    fn encoding_is_deterministic() {
        assert_eq!(encode(&sample_record()), encode(&sample_record()));
    }

    #[test]
    fn empty_inputs_are_absence_not_error() {
        assert!(matches!(try_decode(""), Ok(None)));
        assert!(matches!(try_decode("#"), Ok(None)));
        assert!(matches!(try_decode("  "), Ok(None)));
        assert_eq!(decode(""), None);
        assert_eq!(decode("#"), None);
    }

    #[test]
    fn malformed_base64_is_absence() {
        assert!(matches!(
            try_decode("#not-valid-base64!!"),
            Err(AppError::InvalidBase64(_))
        ));
        assert_eq!(decode("#not-valid-base64!!"), None);
    }

    #[test]
    fn token_without_padding_still_decodes() {
        let mut r = PatientRecord::default();
        for name in ["Ana", "Maria", "Bia", "Joana"] {
            r.set(Section::Identification, "nome", name).unwrap();
            let token = encode(&r);
            let stripped = token.trim_end_matches('=');
            assert_eq!(decode(stripped), Some(r.clone()), "nome {name}");
        }
    }

    #[test]
    fn invalid_utf8_is_absence() {
        let token = STANDARD.encode([0xff, 0xfe, 0xfd]);
        assert!(matches!(try_decode(&token), Err(AppError::InvalidUtf8(_))));
        assert_eq!(decode(&token), None);
    }

    #[test]
    fn non_json_payload_is_absence() {
        let token = STANDARD.encode("olá, não é json");
        assert!(matches!(try_decode(&token), Err(AppError::InvalidJson(_))));
        assert_eq!(decode(&token), None);
    }

    #[test]
    fn wrong_shape_is_absence() {
        let token = STANDARD.encode(r#"{"identification":{"nome":"Ana"}}"#);
        assert!(matches!(try_decode(&token), Err(AppError::RecordShape(_))));
        assert_eq!(decode(&token), None);
    }

    #[test]
    fn pretty_output_uses_two_space_indent() {
        let s = pretty_record_string(&PatientRecord::default()).unwrap();
        assert!(s.starts_with("{\n  \"identification\": {\n    \"nome\": \"\""));
    }
}
