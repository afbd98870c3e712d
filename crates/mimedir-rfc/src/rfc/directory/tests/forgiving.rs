//! Malformed-input tolerance: the parser limps, it does not fall over.

use test_log::test;

use crate::rfc::directory::parse::{parse, parse_bytes};

#[test]
fn garbage_lines_are_skipped() {
    let doc = parse(
        "BEGIN:VCARD\r\n\
         FN:A\r\n\
         ;;;garbage\r\n\
         ::::\r\n\
         \u{1F4A9} not a content line\r\n\
         END:VCARD\r\n",
    );
    let names: Vec<&str> = doc.attributes().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["FN", "END"]);
}

#[test]
fn blank_lines_are_skipped() {
    let doc = parse("BEGIN:VCARD\r\n\r\n\r\nFN:A\r\nEND:VCARD\r\n");
    let names: Vec<&str> = doc.attributes().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["FN", "END"]);
}

#[test]
fn mixed_line_endings_parse() {
    let doc = parse("BEGIN:VCARD\nFN:A\rEMAIL:a@b.c\n\rEND:VCARD");
    let names: Vec<&str> = doc.attributes().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["FN", "EMAIL", "END"]);
}

#[test]
fn unclosed_quote_drops_only_that_line() {
    // The quote swallows the colon, so the line never reaches its value
    // section and is dropped; everything around it survives.
    let doc = parse("BEGIN:VCARD\r\nTEL;TYPE=\"HOME:555\r\nFN:A\r\nEND:VCARD\r\n");
    let names: Vec<&str> = doc.attributes().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["FN", "END"]);
}

#[test]
fn documents_without_any_envelope_still_parse() {
    let doc = parse("FN:A\r\nEMAIL:a@b.c\r\n");
    assert_eq!(doc.attributes().len(), 2);
}

#[test]
fn invalid_utf8_parses_the_valid_prefix() {
    let mut bytes = b"BEGIN:VCARD\r\nFN:Valid\r\n".to_vec();
    bytes.extend_from_slice(&[0xC3, 0x28]); // overlong/invalid sequence
    bytes.extend_from_slice(b"NOTE:never seen\r\n");

    let doc = parse_bytes(&bytes);
    let names: Vec<&str> = doc.attributes().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["FN"]);
}

#[test]
fn completely_invalid_input_yields_empty_document() {
    let doc = parse_bytes(&[0xFF, 0xFE, 0x00]);
    assert!(doc.attributes().is_empty());
}

#[test]
fn truncated_document_keeps_what_it_has() {
    let doc = parse("BEGIN:VCARD\r\nFN:Cut off mid");
    assert_eq!(doc.attributes().len(), 1);
    assert_eq!(doc.attributes()[0].values(), ["Cut off mid"]);
}

#[test]
fn double_encoding_parameter_is_tolerated() {
    let doc = parse("BEGIN:VCARD\r\nPHOTO;ENCODING=b;ENCODING=8BIT:data\r\nEND:VCARD\r\n");
    let photo = doc.find_attribute("PHOTO").unwrap();
    // last-seen wins
    assert_eq!(
        photo.encoding(),
        crate::rfc::directory::core::Encoding::EightBit
    );
}
