//! Placeholder data shown by a community view that has nothing of its own yet.

use chrono::{DateTime, TimeZone, Utc};

use crate::field::{FieldDefinition, FieldType};
use crate::id::{FieldId, ResponseId};
use crate::response::Response;

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

/// The demonstration field set: one field of each type.
pub fn demo_fields() -> Vec<FieldDefinition> {
    vec![
        FieldDefinition::free_text(FieldId::new("demo-field-1"), "Message"),
        FieldDefinition::choice(
            FieldId::new("demo-field-2"),
            FieldType::SingleChoice,
            "Needed items",
            owned(&["Chair", "Whiteboard", "Heater", "Chalk", "Pens and pencils"]),
        ),
        FieldDefinition::choice(
            FieldId::new("demo-field-3"),
            FieldType::MultiChoice,
            "Skills",
            owned(&["Carpentry", "Masonry", "Electrical work", "Plumbing", "Painting"]),
        ),
    ]
}

/// Six example responses spanning all three field types, most recent first.
pub fn demo_responses() -> Vec<Response> {
    let rows = [
        ("demo-6", "Burak", FieldType::MultiChoice, at(6, 19, 45), "Skills: Electrical work"),
        (
            "demo-5",
            "elif",
            FieldType::FreeText,
            at(5, 11, 20),
            "Our bakery can provide lunch for the volunteer crew.",
        ),
        ("demo-4", "can.demir", FieldType::SingleChoice, at(4, 17, 30), "Heater"),
        (
            "demo-3",
            "Zeynep",
            FieldType::FreeText,
            at(3, 8, 5),
            "I can drive supplies from Erciş every Saturday.",
        ),
        (
            "demo-2",
            "mehmet_yilmaz",
            FieldType::MultiChoice,
            at(2, 14, 40),
            "Skills: Carpentry, Masonry",
        ),
        ("demo-1", "ayse.k", FieldType::SingleChoice, at(1, 9, 15), "Chair — I can donate 10"),
    ];

    rows.into_iter()
        .map(|(id, creator, field_type, created_at, details)| Response {
            id: ResponseId::new(id),
            creator_id: creator.to_string(),
            field_type,
            created_at,
            details: details.to_string(),
        })
        .collect()
}
