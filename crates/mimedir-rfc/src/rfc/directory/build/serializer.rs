//! Document serialization.

use super::escape::escape_text;
use super::fold::fold_line;
use crate::rfc::directory::core::{Attribute, Dialect, Document};

/// Serializes `document` for the requested `dialect`.
///
/// Emits the dialect envelope (`BEGIN` + `VERSION`), every attribute in
/// document order folded at 75 columns, and the closing `END` line. Output
/// is always CRLF-terminated.
#[must_use]
pub fn serialize(document: &Document, dialect: Dialect) -> String {
    let mut out = String::new();
    out.push_str("BEGIN:");
    out.push_str(dialect.envelope());
    out.push_str("\r\nVERSION:");
    out.push_str(dialect.version());
    out.push_str("\r\n");

    for attribute in document.attributes() {
        out.push_str(&fold_line(&serialize_attribute(attribute, dialect)));
        out.push_str("\r\n");
    }

    out.push_str("END:");
    out.push_str(dialect.envelope());
    out.push_str("\r\n");
    out
}

/// Serializes a single attribute as an unfolded content line.
///
/// Parameter values containing any non-alphanumeric character are
/// double-quoted. A CHARSET parameter is dropped for the 3.0 vCard dialect,
/// which does not use it. Values are re-escaped for the dialect and joined
/// with `;`, except CATEGORIES which joins with `,`.
#[must_use]
pub fn serialize_attribute(attribute: &Attribute, dialect: Dialect) -> String {
    let mut line = String::new();
    if let Some(group) = &attribute.group {
        line.push_str(group);
        line.push('.');
    }
    line.push_str(&attribute.name);

    for param in attribute.params() {
        if dialect.is_vcard30() && param.name.eq_ignore_ascii_case("CHARSET") {
            continue;
        }
        line.push(';');
        line.push_str(&param.name);
        if param.values.is_empty() {
            continue;
        }
        line.push('=');
        for (i, value) in param.values.iter().enumerate() {
            if i > 0 {
                line.push(',');
            }
            if value.chars().all(char::is_alphanumeric) {
                line.push_str(value);
            } else {
                line.push('"');
                line.push_str(value);
                line.push('"');
            }
        }
    }

    line.push(':');
    let separator = if attribute.name.eq_ignore_ascii_case("CATEGORIES") {
        ','
    } else {
        ';'
    };
    for (i, value) in attribute.values().iter().enumerate() {
        if i > 0 {
            line.push(separator);
        }
        line.push_str(&escape_text(value, dialect));
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::directory::core::Parameter;

    fn attr(name: &str, values: &[&str]) -> Attribute {
        let mut attribute = Attribute::new(name);
        for value in values {
            attribute.add_value(*value);
        }
        attribute
    }

    #[test]
    fn envelope_per_dialect() {
        let doc = Document::new();
        assert_eq!(
            serialize(&doc, Dialect::Vcard21),
            "BEGIN:VCARD\r\nVERSION:2.1\r\nEND:VCARD\r\n"
        );
        assert_eq!(
            serialize(&doc, Dialect::Vevent10),
            "BEGIN:VCALENDAR\r\nVERSION:1.0\r\nEND:VCALENDAR\r\n"
        );
        assert_eq!(
            serialize(&doc, Dialect::Vtodo20),
            "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nEND:VCALENDAR\r\n"
        );
        assert_eq!(
            serialize(&doc, Dialect::Vnote),
            "BEGIN:VNOTE\r\nVERSION:1.1\r\nEND:VNOTE\r\n"
        );
    }

    #[test]
    fn values_join_with_semicolons() {
        let line = serialize_attribute(&attr("N", &["Doe", "John", "", "Mr.", ""]), Dialect::Vcard21);
        assert_eq!(line, "N:Doe;John;;Mr.;");
    }

    #[test]
    fn categories_join_with_commas() {
        let line = serialize_attribute(&attr("CATEGORIES", &["a", "b", "c"]), Dialect::Vcard30);
        assert_eq!(line, "CATEGORIES:a,b,c");
    }

    #[test]
    fn group_prefix_is_emitted() {
        let mut attribute = Attribute::with_group("item1", "TEL");
        attribute.add_value("555");
        assert_eq!(
            serialize_attribute(&attribute, Dialect::Vcard21),
            "item1.TEL:555"
        );
    }

    #[test]
    fn alphanumeric_param_values_are_bare() {
        let mut attribute = attr("EMAIL", &["a@b.c"]);
        attribute.add_param(Parameter::with_values(
            "TYPE",
            vec!["WORK".into(), "INTERNET".into()],
        ));
        assert_eq!(
            serialize_attribute(&attribute, Dialect::Vcard30),
            "EMAIL;TYPE=WORK,INTERNET:a@b.c"
        );
    }

    #[test]
    fn special_param_values_are_quoted() {
        let mut attribute = attr("ADR", &["street"]);
        attribute.add_param(Parameter::with_value("LABEL", "123 Main St, Anytown"));
        assert_eq!(
            serialize_attribute(&attribute, Dialect::Vcard21),
            "ADR;LABEL=\"123 Main St, Anytown\":street"
        );
    }

    #[test]
    fn charset_is_dropped_for_vcard30_only() {
        let mut attribute = attr("NOTE", &["x"]);
        attribute.add_param(Parameter::with_value("CHARSET", "UTF-8"));

        assert_eq!(
            serialize_attribute(&attribute, Dialect::Vcard30),
            "NOTE:x"
        );
        assert_eq!(
            serialize_attribute(&attribute, Dialect::Vcard21),
            "NOTE;CHARSET=\"UTF-8\":x"
        );
    }

    #[test]
    fn values_are_escaped_for_the_dialect() {
        let line = serialize_attribute(&attr("NOTE", &["a,b;c\nd"]), Dialect::Vcard30);
        assert_eq!(line, "NOTE:a\\,b\\;c\\nd");

        let line = serialize_attribute(&attr("NOTE", &["a,b;c\nd"]), Dialect::Vcard21);
        assert_eq!(line, "NOTE:a,b\\;c\\nd");
    }

    #[test]
    fn long_lines_are_folded_in_full_output() {
        let mut doc = Document::new();
        let long = "x".repeat(200);
        doc.add_attribute(attr("NOTE", &[long.as_str()]));
        let output = serialize(&doc, Dialect::Vcard30);

        for physical_line in output.split("\r\n") {
            assert!(physical_line.chars().count() <= 76, "line too long");
        }
        assert!(output.contains("\r\n "));
    }
}
