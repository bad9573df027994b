//! Tests for MARC record access and ISO 2709 decoding


use super::{FieldAccess, Record, drop_undecodable};
use mrrc::{Field, Leader, MarcWriter};

/// Leader of a new authority record; lengths are filled in on write
pub fn authority_leader() -> Leader {
    Leader {
        record_length: 0,
        record_status: 'n',
        record_type: 'z',
        bibliographic_level: ' ',
        control_record_type: ' ',
        character_coding: 'a',
        indicator_count: 2,
        subfield_code_count: 2,
        data_base_address: 0,
        encoding_level: 'n',
        cataloging_form: ' ',
        multipart_level: ' ',
        reserved: "4500".to_string(),
    }
}

pub fn create_data_field(tag: &str, subfields: &[(char, &str)]) -> Field {
    subfields
        .iter()
        .fold(Field::builder(tag.to_string(), ' ', ' '), |builder, (code, value)| {
            builder.subfield_str(*code, value)
        })
        .build()
}

/// Record with the given control fields and data fields
pub fn create_record(controls: &[(&str, &str)], fields: &[(&str, &[(char, &str)])]) -> Record {
    let builder = controls
        .iter()
        .fold(Record::builder(authority_leader()), |builder, (tag, value)| {
            builder.control_field_str(tag, value)
        });
    fields
        .iter()
        .fold(builder, |builder, (tag, subfields)| {
            builder.field(create_data_field(tag, subfields))
        })
        .build()
}

/// Authority record with the four context fields and a point descriptor
pub fn create_authority_record(id: &str) -> Record {
    let secondary = format!("b{id}");
    create_record(
        &[("001", id), ("009", &secondary)],
        &[
            ("151", &[('a', "Kraków (Poland)")]),
            (
                "034",
                &[
                    ('a', "a"),
                    ('d', "E0195600"),
                    ('e', "E0195600"),
                    ('f', "N0500340"),
                    ('g', "N0500340"),
                ],
            ),
        ],
    )
}

/// ISO 2709 bytes of `records`, back to back
pub fn encode_records(records: &[Record]) -> Vec<u8> {
    let mut bytes = Vec::new();
    let mut writer = MarcWriter::new(&mut bytes);
    for record in records {
        writer.write_record(record).unwrap();
    }
    writer.finish().unwrap();
    bytes
}

#[test]
fn test_field_value_prefers_control_fields() {
    let record = create_authority_record("n123");
    assert_eq!(record.field_value("001"), Some("n123".to_string()));
    assert_eq!(record.field_value("009"), Some("bn123".to_string()));
    assert_eq!(record.field_value("999"), None);
}

#[test]
fn test_data_field_value_joins_subfields() {
    let record = create_record(&[], &[("151", &[('a', "Wisła"), ('g', "river")])]);
    assert_eq!(record.field_value("151"), Some("Wisła river".to_string()));
}

#[test]
fn test_subfields_come_from_first_occurrence() {
    let record = create_record(
        &[],
        &[("034", &[('d', "E0100000")]), ("034", &[('d', "E0200000")])],
    );

    let subfields = record.subfields("034").unwrap();
    assert_eq!(subfields, vec![('d', "E0100000".to_string())]);
    assert!(record.subfields("035").is_none());
}

#[test]
fn test_subfields_keep_repeats_in_order() {
    let record = create_record(
        &[],
        &[("034", &[('d', "E0100000"), ('e', "E0100000"), ('d', "W0010000")])],
    );
    let codes: Vec<char> = record
        .subfields("034")
        .unwrap()
        .into_iter()
        .map(|(code, _)| code)
        .collect();
    assert_eq!(codes, vec!['d', 'e', 'd']);
}

#[test]
fn test_drop_undecodable() {
    assert_eq!(drop_undecodable("E015\u{FFFD}000"), "E015000");
    assert_eq!(drop_undecodable("Łódź"), "Łódź");
}
