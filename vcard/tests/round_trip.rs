// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Round-trip tests for the vCard parser and formatter.
//!
//! These tests verify that parsing, formatting, and parsing again produces
//! equivalent cards.

use vcfkit_vcard::formatter::format;
use vcfkit_vcard::{FormatOptions, JoinStyle, parse_str, validate};

#[test]
fn round_trip_minimal_card() {
    let original = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jane\r\nEND:VCARD\r\n";
    let card = parse_str(original).unwrap();
    assert_eq!(format(&card).unwrap(), original);
}

#[test]
fn round_trip_unfolds() {
    let folded = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jo\r\n hn Smith\r\nEND:VCARD\r\n";
    let card = parse_str(folded).unwrap();
    assert_eq!(card.full_name(), "John Smith");
    assert_eq!(
        format(&card).unwrap(),
        "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:John Smith\r\nEND:VCARD\r\n"
    );
}

#[test]
fn round_trip_full_card() {
    let original = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN:Jane Doe\r\n\
BDAY:19960415T102200Z\r\n\
ANNIVERSARY;VALUE=text:circa 2000\r\n\
N:Doe;Jane;;;\r\n\
item1.TEL;TYPE=cell;PREF=1:+1-555\r\n\
ADR;TYPE=home:;;1 Main St;Springfield;;;\r\n\
EMAIL:jane@example.com\r\n\
URL:http://example.com:8080/\r\n\
END:VCARD\r\n\
";
    let card = parse_str(original).unwrap();
    validate(&card).unwrap();

    let formatted = format(&card).unwrap();
    assert_eq!(formatted, original);

    let again = parse_str(&formatted).unwrap();
    assert_eq!(again, card);
    validate(&again).unwrap();
}

#[test]
fn round_trip_reorders_dates_first() {
    let original = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN:Jane\r\n\
EMAIL:jane@example.com\r\n\
BDAY:19960415\r\n\
END:VCARD\r\n\
";
    let card = parse_str(original).unwrap();
    let formatted = format(&card).unwrap();
    assert_eq!(
        formatted,
        "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jane\r\nBDAY:19960415\r\nEMAIL:jane@example.com\r\nEND:VCARD\r\n"
    );
    assert_eq!(parse_str(&formatted).unwrap(), card);
}

#[test]
fn round_trip_compatible_join_merges_values() {
    let original = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jane\r\nORG:ABC;Sales\r\nEND:VCARD\r\n";
    let card = parse_str(original).unwrap();
    assert_eq!(card.optional_properties[0].values, ["ABC", "Sales"]);

    let again = parse_str(&format(&card).unwrap()).unwrap();
    assert_eq!(again.optional_properties[0].values, ["ABC,Sales"]);
}

#[test]
fn round_trip_join_preserves_values() {
    let original = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN:Jane\r\n\
ORG:ABC\\; Inc.;Sales\r\n\
TEL:1,2\r\n\
END:VCARD\r\n\
";
    let card = parse_str(original).unwrap();
    assert_eq!(card.optional_properties[0].values, ["ABC; Inc.", "Sales"]);

    let options = FormatOptions::default().join(JoinStyle::RoundTrip);
    let formatted = options.write_to_string(&card).unwrap();
    assert_eq!(formatted, original);
    assert_eq!(parse_str(&formatted).unwrap(), card);
}

#[test]
fn round_trip_valid_dates() {
    let original = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN:Jane\r\n\
BDAY:19960415T102200Z\r\n\
ANNIVERSARY:T143000\r\n\
END:VCARD\r\n\
";
    let card = parse_str(original).unwrap();
    validate(&card).unwrap();

    let options = FormatOptions::default().join(JoinStyle::RoundTrip);
    let formatted = options.write_to_string(&card).unwrap();
    assert_eq!(formatted, original);
    assert_eq!(parse_str(&formatted).unwrap(), card);
}

#[test]
fn round_trip_loses_utc_flag_without_time() {
    let original = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jane\r\nBDAY:19960415TZ\r\nEND:VCARD\r\n";
    let card = parse_str(original).unwrap();
    assert!(validate(&card).is_err());

    let again = parse_str(&format(&card).unwrap()).unwrap();
    assert_ne!(again.birthday, card.birthday);
    assert_eq!(again.birthday_string(), "19960415");
}
