//! Directory-format attributes: one content line each.

use super::Parameter;
use crate::rfc::directory::codec::{base64, quoted_printable};

/// Value transfer encoding, derived from the ENCODING parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    /// No transfer encoding; values are stored as-is.
    #[default]
    Raw,
    /// RFC 2045 Base64 (`ENCODING=b` or the historic `ENCODING=BASE64`).
    Base64,
    /// Quoted-printable (`ENCODING=QUOTED-PRINTABLE`).
    QuotedPrintable,
    /// 8-bit passthrough (`ENCODING=8BIT`).
    EightBit,
}

impl Encoding {
    /// Maps an ENCODING parameter value; `None` for unknown values.
    fn from_param_value(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("b") || value.eq_ignore_ascii_case("base64") {
            Some(Self::Base64)
        } else if value.eq_ignore_ascii_case("quoted-printable") {
            Some(Self::QuotedPrintable)
        } else if value.eq_ignore_ascii_case("8bit") {
            Some(Self::EightBit)
        } else {
            None
        }
    }

    /// Decodes one raw value under this encoding.
    fn decode(self, raw: &str) -> Vec<u8> {
        match self {
            Self::Raw | Self::EightBit => raw.as_bytes().to_vec(),
            Self::Base64 => base64::decode(raw),
            Self::QuotedPrintable => quoted_printable::decode(raw.as_bytes()),
        }
    }

    /// Encodes caller-supplied bytes for storage under this encoding.
    fn encode(self, bytes: &[u8]) -> String {
        match self {
            Self::Raw | Self::EightBit => String::from_utf8_lossy(bytes).into_owned(),
            Self::Base64 => base64::encode(bytes),
            Self::QuotedPrintable => quoted_printable::encode(bytes),
        }
    }
}

/// One content line of a directory-format document.
///
/// Parameters and values are kept in order of appearance. Values are stored
/// in their raw (still-encoded) form; the decoded form is computed on
/// demand from the attribute's transfer encoding, so there is no cache to
/// invalidate on mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attribute {
    /// Optional group prefix (`item1` in `item1.TEL`).
    pub group: Option<String>,
    /// Attribute name (normalized to uppercase).
    pub name: String,
    params: Vec<Parameter>,
    values: Vec<String>,
    encoding: Encoding,
    encoding_set: bool,
}

impl Attribute {
    /// Creates an ungrouped attribute.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            ..Self::default()
        }
    }

    /// Creates an attribute with a group prefix.
    #[must_use]
    pub fn with_group(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: Some(group.into()),
            name: name.into().to_ascii_uppercase(),
            ..Self::default()
        }
    }

    /// Returns the parameters in order of appearance.
    #[must_use]
    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    /// Returns the raw (still-encoded) values.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Returns the derived transfer encoding.
    #[must_use]
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Appends a parameter.
    ///
    /// An ENCODING parameter also sets the attribute's transfer encoding.
    /// Specifying ENCODING twice is a diagnostic; the later one wins.
    pub fn add_param(&mut self, param: Parameter) {
        if param.name.eq_ignore_ascii_case("ENCODING") {
            if let Some(value) = param.value() {
                if self.encoding_set {
                    tracing::warn!(attribute = %self.name, "ENCODING specified twice");
                }
                match Encoding::from_param_value(value) {
                    Some(encoding) => self.encoding = encoding,
                    None => tracing::warn!(
                        attribute = %self.name,
                        value,
                        "unknown ENCODING value, values will be treated as raw"
                    ),
                }
                self.encoding_set = true;
            }
        }
        self.params.push(param);
    }

    /// Appends a raw (already encoded) value.
    pub fn add_value(&mut self, value: impl Into<String>) {
        self.values.push(value.into());
    }

    /// Encodes `bytes` under the attribute's current encoding and appends
    /// the result as a value.
    ///
    /// Set the ENCODING parameter before adding decoded values.
    pub fn add_value_decoded(&mut self, bytes: &[u8]) {
        self.values.push(self.encoding.encode(bytes));
    }

    /// Returns the values decoded under the attribute's encoding.
    ///
    /// RAW and 8BIT values pass through as their UTF-8 bytes; BASE64 and
    /// QUOTED-PRINTABLE values are decoded. The result has the same length
    /// and ordering as [`values`](Self::values).
    #[must_use]
    pub fn decoded_values(&self) -> Vec<Vec<u8>> {
        self.values.iter().map(|v| self.encoding.decode(v)).collect()
    }

    /// Returns the nth value in decoded form.
    ///
    /// Falls back to the raw value when the decoded bytes are not valid
    /// UTF-8, so callers always get usable text.
    #[must_use]
    pub fn nth_value(&self, index: usize) -> Option<String> {
        let raw = self.values.get(index)?;
        match String::from_utf8(self.encoding.decode(raw)) {
            Ok(decoded) => Some(decoded),
            Err(_) => {
                tracing::warn!(
                    attribute = %self.name,
                    index,
                    "decoded value is not valid UTF-8, returning the raw value"
                );
                Some(raw.clone())
            }
        }
    }

    /// Returns the single value of this attribute, decoded.
    ///
    /// Calling this on a multi-valued attribute is a diagnostic; the first
    /// value is returned anyway.
    #[must_use]
    pub fn value(&self) -> Option<String> {
        if self.values.len() > 1 {
            tracing::warn!(
                attribute = %self.name,
                count = self.values.len(),
                "single-value accessor used on a multi-valued attribute"
            );
        }
        self.nth_value(0)
    }

    /// Returns the parameter with the given name (case-insensitive).
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&Parameter> {
        self.params.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns the values of the named parameter, or an empty slice.
    #[must_use]
    pub fn param_values(&self, name: &str) -> &[String] {
        self.param(name).map_or(&[], |p| p.values.as_slice())
    }

    /// Returns whether the named parameter is present.
    #[must_use]
    pub fn has_param(&self, name: &str) -> bool {
        self.param(name).is_some()
    }

    /// Returns whether the named parameter carries `value` (case-insensitive).
    #[must_use]
    pub fn has_param_value(&self, name: &str, value: &str) -> bool {
        self.param(name).is_some_and(|p| p.has_value(value))
    }

    /// Returns whether a TYPE parameter carries `type_value`.
    #[must_use]
    pub fn has_type(&self, type_value: &str) -> bool {
        self.has_param_value("TYPE", type_value)
    }

    /// Removes all values.
    pub fn remove_values(&mut self) {
        self.values.clear();
    }

    /// Removes all parameters and resets the transfer encoding to RAW.
    pub fn remove_params(&mut self) {
        self.params.clear();
        self.encoding = Encoding::Raw;
        self.encoding_set = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_derived_from_param() {
        let mut attr = Attribute::new("PHOTO");
        attr.add_param(Parameter::with_value("ENCODING", "b"));
        assert_eq!(attr.encoding(), Encoding::Base64);

        let mut attr = Attribute::new("PHOTO");
        attr.add_param(Parameter::with_value("ENCODING", "BASE64"));
        assert_eq!(attr.encoding(), Encoding::Base64);

        let mut attr = Attribute::new("NOTE");
        attr.add_param(Parameter::with_value("encoding", "Quoted-Printable"));
        assert_eq!(attr.encoding(), Encoding::QuotedPrintable);

        let mut attr = Attribute::new("NOTE");
        attr.add_param(Parameter::with_value("ENCODING", "8BIT"));
        assert_eq!(attr.encoding(), Encoding::EightBit);
    }

    #[test]
    fn unknown_encoding_stays_raw() {
        let mut attr = Attribute::new("NOTE");
        attr.add_param(Parameter::with_value("ENCODING", "7BIT"));
        assert_eq!(attr.encoding(), Encoding::Raw);
    }

    #[test]
    fn conflicting_encoding_last_wins() {
        let mut attr = Attribute::new("PHOTO");
        attr.add_param(Parameter::with_value("ENCODING", "b"));
        attr.add_param(Parameter::with_value("ENCODING", "8BIT"));
        assert_eq!(attr.encoding(), Encoding::EightBit);
    }

    #[test]
    fn decoded_values_applies_base64() {
        let mut attr = Attribute::new("PHOTO");
        attr.add_param(Parameter::with_value("ENCODING", "b"));
        attr.add_value("SGVsbG8=");
        assert_eq!(attr.decoded_values(), vec![b"Hello".to_vec()]);
    }

    #[test]
    fn add_value_decoded_encodes() {
        let mut attr = Attribute::new("PHOTO");
        attr.add_param(Parameter::with_value("ENCODING", "b"));
        attr.add_value_decoded(&[0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(attr.values()[0], "3q2+7w==");
        assert_eq!(attr.decoded_values(), vec![vec![0xDE, 0xAD, 0xBE, 0xEF]]);
    }

    #[test]
    fn nth_value_falls_back_to_raw_on_invalid_utf8() {
        let mut attr = Attribute::new("PHOTO");
        attr.add_param(Parameter::with_value("ENCODING", "b"));
        // 0xFF 0xFE is not valid UTF-8.
        attr.add_value_decoded(&[0xFF, 0xFE]);
        let raw = attr.values()[0].clone();
        assert_eq!(attr.nth_value(0), Some(raw));
    }

    #[test]
    fn single_value_accessor_returns_first() {
        let mut attr = Attribute::new("N");
        attr.add_value("Doe");
        attr.add_value("John");
        assert_eq!(attr.value(), Some("Doe".to_string()));
    }

    #[test]
    fn type_predicates() {
        let mut attr = Attribute::new("TEL");
        attr.add_param(Parameter::with_values(
            "TYPE",
            vec!["WORK".into(), "VOICE".into()],
        ));
        assert!(attr.has_type("work"));
        assert!(attr.has_type("VOICE"));
        assert!(!attr.has_type("home"));
        assert!(attr.has_param("type"));
        assert!(attr.has_param_value("TYPE", "Work"));
    }

    #[test]
    fn remove_params_resets_encoding() {
        let mut attr = Attribute::new("PHOTO");
        attr.add_param(Parameter::with_value("ENCODING", "b"));
        attr.add_value("SGVsbG8=");
        attr.remove_params();
        assert_eq!(attr.encoding(), Encoding::Raw);
        assert!(attr.params().is_empty());
        // values now pass through undecoded
        assert_eq!(attr.decoded_values(), vec![b"SGVsbG8=".to_vec()]);
    }
}
