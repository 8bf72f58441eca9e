//! Delimited grade line codec.
//!
//! # Responsibility
//! - Serialize a grade to one `Name=Value;...;#` text line and parse it
//!   back, tolerating unknown, reordered and garbled tokens.
//!
//! # Invariants
//! - Encode emits the four fields in canonical order, terminated by `;#`.
//! - `;`, `=` and `#` are structure characters, never data; keeping them out
//!   of field values is the caller's responsibility.
//! - Decode never fails: unknown tokens are dropped, missing or unparseable
//!   fields resolve to documented defaults field-by-field.

use crate::codec::{transposition, CodecResult};
use crate::model::grade::{Grade, Subject};
use chrono::{Local, NaiveDate};

const FIELD_SUBJECT: &str = "Schulfach";
const FIELD_DATE: &str = "Datum";
const FIELD_CATEGORY: &str = "Bezeichnung";
const FIELD_VALUE: &str = "Notenwert";

/// Default category when no `Bezeichnung` token is recognized.
const DEFAULT_CATEGORY: &str = "undefined";

/// Short-date formats accepted for the `Datum` field.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y"];

/// Encodes one grade as a single self-contained line:
/// `Schulfach=..;Datum=..;Bezeichnung=..;Notenwert=..;#`.
pub fn encode(grade: &Grade) -> String {
    format!(
        "{FIELD_SUBJECT}={};{FIELD_DATE}={};{FIELD_CATEGORY}={};{FIELD_VALUE}={};#",
        grade.subject.code(),
        grade.date,
        grade.category,
        grade.value
    )
}

/// Encodes one grade and obscures the line with the transposition cipher.
///
/// # Errors
/// - `InvalidKey` when `key <= 0`.
pub fn encode_encrypted(grade: &Grade, key: i32) -> CodecResult<String> {
    transposition::encode(&encode(grade), key)
}

/// Decodes one line back into a grade.
///
/// Tokens are split on `;` and `#` and recognized by a substring match on
/// the field name before the first `=`. The substring match mirrors the
/// established decoder and is a latent ambiguity if a future field name
/// contains another one. Unrecognized tokens are silently dropped; absent
/// or unparseable fields fall back to their defaults (subject `undefined`,
/// date today, category `"undefined"`, value `0`).
pub fn decode(line: &str) -> Grade {
    let mut subject = Subject::Undefined;
    let mut date = default_date();
    let mut category = DEFAULT_CATEGORY.to_string();
    let mut value = 0.0;

    for token in line.split([';', '#']) {
        // A token without `=` is taken whole, matching the established
        // IndexOf(-1)+1 substring behavior.
        let payload = token.find('=').map_or(token, |at| &token[at + 1..]);

        // A recognized token always writes its field: a failed parse and an
        // absent field collapse to the same default.
        if token.contains(FIELD_SUBJECT) {
            subject = Subject::parse_code(payload).unwrap_or_default();
        } else if token.contains(FIELD_DATE) {
            date = if is_short_date(payload) {
                payload.to_string()
            } else {
                default_date()
            };
        } else if token.contains(FIELD_CATEGORY) {
            category = payload.to_string();
        } else if token.contains(FIELD_VALUE) {
            value = payload.parse::<f64>().unwrap_or(0.0);
        }
    }

    Grade {
        subject,
        date,
        category,
        value,
    }
}

/// Decrypts one line with the transposition cipher, then decodes it.
///
/// # Errors
/// - `InvalidKey` / `InvalidLength` from the cipher layer; cipher failures
///   are structural and never degrade into a default record.
pub fn decode_encrypted(line: &str, key: i32) -> CodecResult<Grade> {
    Ok(decode(&transposition::decode(line, key)?))
}

fn is_short_date(value: &str) -> bool {
    DATE_FORMATS
        .iter()
        .any(|format| NaiveDate::parse_from_str(value, format).is_ok())
}

fn default_date() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::{decode, decode_encrypted, default_date, encode, encode_encrypted};
    use crate::codec::CodecError;
    use crate::model::grade::{Grade, Subject};

    fn sample_grade() -> Grade {
        Grade::new(Subject::Eng, "2020-07-05", "Klausur", 1.3)
    }

    #[test]
    fn encode_emits_canonical_field_order() {
        assert_eq!(
            encode(&sample_grade()),
            "Schulfach=ENG;Datum=2020-07-05;Bezeichnung=Klausur;Notenwert=1.3;#"
        );
    }

    #[test]
    fn decode_round_trips_an_encoded_grade() {
        assert_eq!(decode(&encode(&sample_grade())), sample_grade());
    }

    #[test]
    fn decode_tolerates_reordered_fields() {
        let decoded = decode("Notenwert=2.7;Schulfach=DEU;Bezeichnung=SoMi;Datum=2021-01-12;#");
        assert_eq!(decoded.subject, Subject::Deu);
        assert_eq!(decoded.date, "2021-01-12");
        assert_eq!(decoded.category, "SoMi");
        assert_eq!(decoded.value, 2.7);
    }

    #[test]
    fn one_recognized_field_among_garbage_keeps_the_rest_at_defaults() {
        let decoded = decode("zzz;Notenwert=4.0;??;x=y;#");
        assert_eq!(decoded.value, 4.0);
        assert_eq!(decoded.subject, Subject::Undefined);
        assert_eq!(decoded.date, default_date());
        assert_eq!(decoded.category, "undefined");
    }

    #[test]
    fn unknown_subject_code_falls_back_to_undefined() {
        let decoded = decode("Schulfach=MATHE;#");
        assert_eq!(decoded.subject, Subject::Undefined);
    }

    #[test]
    fn unparseable_date_and_value_fall_back_to_defaults() {
        let decoded = decode("Datum=soon;Notenwert=best;#");
        assert_eq!(decoded.date, default_date());
        assert_eq!(decoded.value, 0.0);
    }

    #[test]
    fn empty_line_decodes_to_all_defaults() {
        let decoded = decode("");
        assert_eq!(decoded.subject, Subject::Undefined);
        assert_eq!(decoded.category, "undefined");
        assert_eq!(decoded.value, 0.0);
    }

    #[test]
    fn encrypted_round_trip_with_key_three() {
        let encrypted = encode_encrypted(&sample_grade(), 3).expect("encode should succeed");
        assert_ne!(encrypted, encode(&sample_grade()));

        let decoded = decode_encrypted(&encrypted, 3).expect("decode should succeed");
        assert_eq!(decoded, sample_grade());
    }

    #[test]
    fn encrypted_encode_rejects_non_positive_keys() {
        assert_eq!(
            encode_encrypted(&sample_grade(), 0),
            Err(CodecError::InvalidKey { key: 0 })
        );
    }

    #[test]
    fn encrypted_decode_propagates_cipher_failures() {
        assert_eq!(
            decode_encrypted("abcd", 3),
            Err(CodecError::InvalidLength { length: 4, key: 3 })
        );
    }
}
