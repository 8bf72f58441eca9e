//! Records must stay serializer-friendly: flat mappings with stable field
//! names and deterministic order, usable by any standard serializer the
//! surrounding application picks.

use chrono::{TimeZone, Utc};
use gradery_core::{Appointment, Grade, Subject};
use serde_json::Value;

#[test]
fn grade_serializes_to_a_flat_mapping_with_canonical_names() {
    let grade = Grade::new(Subject::Eng, "2020-07-05", "Klausur", 1.3);
    let value = serde_json::to_value(&grade).expect("serialization should succeed");

    let object = value.as_object().expect("grade should serialize to a map");
    assert_eq!(object.len(), 4);
    assert_eq!(object["Schulfach"], Value::from("ENG"));
    assert_eq!(object["Datum"], Value::from("2020-07-05"));
    assert_eq!(object["Bezeichnung"], Value::from("Klausur"));
    assert_eq!(object["Notenwert"], Value::from(1.3));
}

#[test]
fn grade_field_order_is_deterministic() {
    let grade = Grade::new(Subject::Deu, "2021-01-12", "SoMi", 2.0);
    let json = serde_json::to_string(&grade).expect("serialization should succeed");

    let schulfach = json.find("Schulfach").expect("Schulfach should be present");
    let datum = json.find("Datum").expect("Datum should be present");
    let bezeichnung = json
        .find("Bezeichnung")
        .expect("Bezeichnung should be present");
    let notenwert = json.find("Notenwert").expect("Notenwert should be present");
    assert!(schulfach < datum && datum < bezeichnung && bezeichnung < notenwert);
}

#[test]
fn grade_round_trips_through_json() {
    let grade = Grade::new(Subject::Awe, "2020-07-06", "Klausur", 2.5);
    let json = serde_json::to_string(&grade).expect("serialization should succeed");
    let back: Grade = serde_json::from_str(&json).expect("deserialization should succeed");
    assert_eq!(back, grade);
}

#[test]
fn undefined_subject_uses_the_sentinel_code() {
    let grade = Grade::new(Subject::Undefined, "2020-07-06", "Klausur", 2.5);
    let value = serde_json::to_value(&grade).expect("serialization should succeed");
    assert_eq!(value["Schulfach"], Value::from("undefined"));
}

#[test]
fn appointment_round_trips_through_json() {
    let start = Utc.with_ymd_and_hms(2020, 7, 5, 9, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2020, 7, 5, 11, 0, 0).unwrap();
    let appointment = Appointment::with_end("Review", start, end);

    let json = serde_json::to_string(&appointment).expect("serialization should succeed");
    let back: Appointment = serde_json::from_str(&json).expect("deserialization should succeed");
    assert_eq!(back, appointment);
}
