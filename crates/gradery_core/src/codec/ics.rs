//! Calendar subset codec.
//!
//! # Responsibility
//! - Encode an appointment as a minimal VCALENDAR/VEVENT block.
//! - Decode such a block by scanning recognized property lines, ignoring
//!   everything else.
//!
//! # Invariants
//! - A block without both `BEGIN:VCALENDAR` and `END:VCALENDAR` exact lines
//!   is rejected as `NotAValidBlock`; no partial record is produced.
//! - Property scan is order-independent with last-write-wins on duplicates.
//! - Encode writes `DTEND` from the START timestamp. Historical quirk of the
//!   format; consumers depend on it, do not fix it here.

use super::{CodecError, CodecResult};
use crate::model::appointment::Appointment;
use chrono::{DateTime, NaiveDateTime, Utc};
use rand::Rng;

/// Fixed timestamp layout for DTSTAMP/DTSTART/DTEND values.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

const PRODUCT_ID: &str = "-//hacksw/handcal//NONSGML v1.0//EN";
const UID_DOMAIN: &str = "gradery.de";
const UID_NONCE_BOUND: u32 = 123_456_789;

/// Name used when a block carries no SUMMARY property.
const DEFAULT_NAME: &str = "undefined";

/// Encodes one appointment as a complete calendar block.
///
/// The UID is best-effort unique (encode timestamp plus random nonce), which
/// is acceptable for single-writer local files.
pub fn encode(appointment: &Appointment) -> String {
    let stamp = Utc::now().format(TIMESTAMP_FORMAT).to_string();
    let nonce = rand::thread_rng().gen_range(0..UID_NONCE_BOUND);
    let start = appointment.start.format(TIMESTAMP_FORMAT).to_string();

    let mut block = String::new();
    block.push_str("BEGIN:VCALENDAR\n");
    block.push_str("VERSION:2.0\n");
    block.push_str(&format!("PRODID:{PRODUCT_ID}\n"));
    block.push_str("BEGIN:VEVENT\n");
    block.push_str(&format!("UID:{stamp}_{nonce}@{UID_DOMAIN}\n"));
    block.push_str(&format!("DTSTAMP:{stamp}\n"));
    block.push_str(&format!("DTSTART:{start}\n"));
    // DTEND mirrors DTSTART, ignoring appointment.end.
    block.push_str(&format!("DTEND:{start}\n"));
    block.push_str(&format!("SUMMARY:{}\n", appointment.name));
    block.push_str("END:VEVENT\n");
    block.push_str("END:VCALENDAR\n");
    block
}

/// Decodes a calendar block back into an appointment.
///
/// Only `DTSTART`, `DTEND` and `SUMMARY` are interpreted; all other lines
/// (`VERSION`, `PRODID`, `UID`, `DTSTAMP`, unknown extensions) are ignored.
/// A timestamp that fails to parse leaves the corresponding field at its
/// pre-scan default, the decode-time clock; an absent SUMMARY yields the
/// name `"undefined"`.
///
/// # Errors
/// - `NotAValidBlock` when either structural marker line is missing.
pub fn decode(content: &str) -> CodecResult<Appointment> {
    let lines: Vec<&str> = content.lines().collect();
    if !(lines.contains(&"BEGIN:VCALENDAR") && lines.contains(&"END:VCALENDAR")) {
        return Err(CodecError::NotAValidBlock);
    }

    let now = Utc::now();
    let mut name = DEFAULT_NAME.to_string();
    let mut start = now;
    let mut end = now;

    for line in lines {
        if let Some(value) = property_value(line, "DTSTART") {
            if let Some(parsed) = parse_timestamp(value) {
                start = parsed;
            }
        } else if let Some(value) = property_value(line, "DTEND") {
            if let Some(parsed) = parse_timestamp(value) {
                end = parsed;
            }
        } else if let Some(value) = property_value(line, "SUMMARY") {
            name = value.to_string();
        }
    }

    Ok(Appointment::with_end(name, start, end))
}

/// Returns the substring after the first `:` of a line starting with
/// `property`, or the whole line when no `:` is present.
fn property_value<'a>(line: &'a str, property: &str) -> Option<&'a str> {
    if !line.starts_with(property) {
        return None;
    }
    Some(line.find(':').map_or(line, |at| &line[at + 1..]))
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}
