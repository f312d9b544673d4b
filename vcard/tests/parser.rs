// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Tests for building cards from documents.

use vcfkit_vcard::{
    DateTime, DocumentError, ErrorKind, Parameter, ParameterErrorKind, PropertyError, VCardError,
    parse, parse_str,
};

fn document_error(src: &str) -> DocumentError {
    match parse_str(src) {
        Err(VCardError::InvalidDocument(err)) => err,
        other => panic!("Expected document error, got {other:?}"),
    }
}

fn property_error(src: &str) -> PropertyError {
    match parse_str(src) {
        Err(VCardError::InvalidProperty(err)) => err,
        other => panic!("Expected property error, got {other:?}"),
    }
}

#[test]
fn parse_minimal_card() {
    let src = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jane\r\nEND:VCARD\r\n";
    let card = parse_str(src).unwrap();
    assert_eq!(card.full_name(), "Jane");
    assert_eq!(card.full_name.name, "FN");
    assert!(card.full_name.group.is_empty());
    assert!(card.birthday.is_none());
    assert!(card.anniversary.is_none());
    assert_eq!(card.optional_property_count(), 0);
}

#[test]
fn parse_from_reader() {
    let src = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jane\r\nEND:VCARD\r\n";
    let card = parse(std::io::Cursor::new(src)).unwrap();
    assert_eq!(card.full_name(), "Jane");
}

#[test]
fn parse_rfc6350_author_card() {
    let src = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN:Simon Perreault\r\n\
N:Perreault;Simon;;;ing. jr,M.Sc.\r\n\
BDAY:--0203\r\n\
ANNIVERSARY:20090808T1430-0500\r\n\
GENDER:M\r\n\
LANG;PREF=1:fr\r\n\
LANG;PREF=2:en\r\n\
ORG;TYPE=work:Viagenie\r\n\
ADR;TYPE=work:;Suite D2-630;2875 Laurier;\r\n \
Quebec;QC;G1V 2M2;Canada\r\n\
TEL;VALUE=uri;TYPE=\"work,voice\";PREF=1:tel:+1-418-656-9254;ext=102\r\n\
EMAIL;TYPE=work:simon.perreault@viagenie.ca\r\n\
GEO;TYPE=work:geo:46.772673,-71.282945\r\n\
KEY;TYPE=work;VALUE=uri:http://www.viagenie.ca/simon.perreault/simon.asc\r\n\
TZ:-0500\r\n\
URL;TYPE=home:http://nomis80.org\r\n\
END:VCARD\r\n\
";
    let card = parse_str(src).unwrap();
    assert_eq!(card.full_name(), "Simon Perreault");
    assert_eq!(card.optional_property_count(), 12);
    assert_eq!(
        card.birthday,
        Some(DateTime::Structured {
            date: "--0203".into(),
            time: String::new(),
            utc: false,
        })
    );
    assert_eq!(
        card.anniversary,
        Some(DateTime::Structured {
            date: "20090808".into(),
            time: "1430-0".into(),
            utc: false,
        })
    );

    let n = &card.optional_properties[0];
    assert_eq!(n.name, "N");
    assert_eq!(n.values, ["Perreault", "Simon", "", "", "ing. jr,M.Sc."]);

    let adr = card.optional_properties.iter().find(|p| p.name == "ADR").unwrap();
    assert_eq!(
        adr.values,
        ["", "Suite D2-630", "2875 Laurier", "Quebec", "QC", "G1V 2M2", "Canada"]
    );

    let tel = card.optional_properties.iter().find(|p| p.name == "TEL").unwrap();
    assert_eq!(
        tel.parameters,
        [
            Parameter::new("VALUE", "uri"),
            Parameter::new("TYPE", "\"work,voice\""),
            Parameter::new("PREF", "1"),
        ]
    );
    assert_eq!(tel.values, ["tel:+1-418-656-9254", "ext=102"]);
}

#[test]
fn parse_grouped_property() {
    let src = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
item1.FN:Jane\r\n\
item2.EMAIL:jane@example.com\r\n\
END:VCARD\r\n\
";
    let card = parse_str(src).unwrap();
    assert_eq!(card.full_name.group, "item1");
    assert_eq!(card.optional_properties[0].group, "item2");
    assert_eq!(card.optional_properties[0].name, "EMAIL");
}

#[test]
fn parse_folded_full_name() {
    let src = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jo\r\n hn Smith\r\nEND:VCARD\r\n";
    assert_eq!(parse_str(src).unwrap().full_name(), "John Smith");
}

#[test]
fn parse_folded_marker() {
    let src = "BEGIN:VC\r\n ARD\r\nVERSION:4.0\r\nFN:Jane\r\nEND:VCARD\r\n";
    assert!(parse_str(src).is_ok());
}

#[test]
fn parse_rejects_bare_line_feed() {
    let src = "BEGIN:VCARD\nVERSION:4.0\r\nFN:Jane\r\nEND:VCARD\r\n";
    let err = parse_str(src).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidDocument);
    assert_eq!(document_error(src), DocumentError::BareLineFeed { line: 1 });
}

#[test]
fn parse_rejects_missing_terminator() {
    let src = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jane\r\nEND:VCARD";
    assert_eq!(document_error(src), DocumentError::MissingLineEnding { line: 4 });
}

#[test]
fn parse_requires_markers_and_full_name() {
    assert_eq!(document_error(""), DocumentError::MissingBegin);
    assert_eq!(
        document_error("BEGIN:VCARD\r\nFN:Jane\r\nEND:VCARD\r\n"),
        DocumentError::MissingVersion
    );
    assert_eq!(
        document_error("BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jane\r\n"),
        DocumentError::MissingEnd
    );
    assert_eq!(
        document_error("BEGIN:VCARD\r\nVERSION:4.0\r\nEND:VCARD\r\n"),
        DocumentError::MissingFullName
    );
}

#[test]
fn parse_markers_are_verbatim() {
    assert_eq!(
        document_error("begin:vcard\r\nVERSION:4.0\r\nFN:Jane\r\nEND:VCARD\r\n"),
        DocumentError::ContentBeforeBegin { line: 1 }
    );

    let src = "BEGIN:VCARD\r\nVERSION:3.0\r\nFN:Jane\r\nEND:VCARD\r\n";
    assert_eq!(document_error(src), DocumentError::MissingVersion);
}

#[test]
fn parse_rejects_malformed_lines() {
    let wrap = |line: &str| format!("BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jane\r\n{line}\r\nEND:VCARD\r\n");

    assert_eq!(property_error(&wrap("NOTE no colon")), PropertyError::MissingColon);
    assert_eq!(property_error(&wrap(":value")), PropertyError::MissingName);
    assert_eq!(property_error(&wrap(";TYPE=x:value")), PropertyError::MissingName);
    assert_eq!(property_error(&wrap(".TEL:1")), PropertyError::EmptyGroup);
    assert_eq!(
        property_error(&wrap("TEL:")),
        PropertyError::EmptyValue { name: "TEL".into() }
    );
    assert_eq!(
        property_error(&wrap("TEL;TYPE:1")),
        PropertyError::InvalidParameter {
            kind: ParameterErrorKind::MissingEquals
        }
    );
    assert_eq!(
        property_error(&wrap("TEL;=cell:1")),
        PropertyError::InvalidParameter {
            kind: ParameterErrorKind::EmptyName
        }
    );
    assert_eq!(
        property_error(&wrap("TEL;TYPE=:1")),
        PropertyError::InvalidParameter {
            kind: ParameterErrorKind::MissingValue
        }
    );
}

#[test]
fn parse_rejects_empty_full_name() {
    let src = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:\r\nEND:VCARD\r\n";
    assert_eq!(
        property_error(src),
        PropertyError::EmptyValue { name: "FN".into() }
    );
}

#[test]
fn parse_rejects_duplicate_dates() {
    let src = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jane\r\nBDAY:19960415\r\nBDAY:19970415\r\nEND:VCARD\r\n";
    assert_eq!(
        property_error(src),
        PropertyError::DuplicateDateTime { name: "BDAY".into() }
    );

    let src = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jane\r\nANNIVERSARY:2009\r\nANNIVERSARY;VALUE=text:x\r\nEND:VCARD\r\n";
    assert_eq!(
        property_error(src),
        PropertyError::DuplicateDateTime {
            name: "ANNIVERSARY".into()
        }
    );
}

#[test]
fn parse_keeps_unknown_properties_for_validation() {
    let src = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jane\r\nX-FOO:bar\r\nNOTE:x\r\nEND:VCARD\r\n";
    let card = parse_str(src).unwrap();
    let names: Vec<_> = card.optional_properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["X-FOO", "NOTE"]);
}

#[test]
fn parse_value_with_colons() {
    let src = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jane\r\nURL:http://example.com:8080/a\r\nEND:VCARD\r\n";
    let card = parse_str(src).unwrap();
    assert_eq!(card.optional_properties[0].values, ["http://example.com:8080/a"]);
}
