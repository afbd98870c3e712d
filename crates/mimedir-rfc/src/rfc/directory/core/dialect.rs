//! Serialization dialects for the directory format family.

/// The concrete dialect a document is serialized for.
///
/// The dialect selects the BEGIN/END envelope, the VERSION property and the
/// escaping profile; it does not constrain which attributes a document may
/// carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// vCard 2.1 (versit specification).
    Vcard21,
    /// vCard 3.0 (RFC 2426).
    Vcard30,
    /// vCalendar 1.0 VTODO.
    Vtodo10,
    /// vCalendar 1.0 VEVENT.
    Vevent10,
    /// iCalendar 2.0 VTODO (RFC 2445).
    Vtodo20,
    /// iCalendar 2.0 VEVENT (RFC 2445).
    Vevent20,
    /// vNote 1.1 (IrMC).
    Vnote,
}

impl Dialect {
    /// Envelope type emitted in the BEGIN/END wrapper.
    #[must_use]
    pub const fn envelope(self) -> &'static str {
        match self {
            Self::Vcard21 | Self::Vcard30 => "VCARD",
            Self::Vtodo10 | Self::Vevent10 | Self::Vtodo20 | Self::Vevent20 => "VCALENDAR",
            Self::Vnote => "VNOTE",
        }
    }

    /// Value of the VERSION property emitted after BEGIN.
    #[must_use]
    pub const fn version(self) -> &'static str {
        match self {
            Self::Vcard21 => "2.1",
            Self::Vcard30 => "3.0",
            Self::Vtodo10 | Self::Vevent10 => "1.0",
            Self::Vtodo20 | Self::Vevent20 => "2.0",
            Self::Vnote => "1.1",
        }
    }

    /// Whether this is the 3.0 vCard profile.
    ///
    /// 3.0 escapes commas in values and does not carry CHARSET parameters.
    #[must_use]
    pub const fn is_vcard30(self) -> bool {
        matches!(self, Self::Vcard30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelopes() {
        assert_eq!(Dialect::Vcard21.envelope(), "VCARD");
        assert_eq!(Dialect::Vevent10.envelope(), "VCALENDAR");
        assert_eq!(Dialect::Vtodo20.envelope(), "VCALENDAR");
        assert_eq!(Dialect::Vnote.envelope(), "VNOTE");
    }

    #[test]
    fn versions() {
        assert_eq!(Dialect::Vcard21.version(), "2.1");
        assert_eq!(Dialect::Vcard30.version(), "3.0");
        assert_eq!(Dialect::Vtodo10.version(), "1.0");
        assert_eq!(Dialect::Vevent20.version(), "2.0");
        assert_eq!(Dialect::Vnote.version(), "1.1");
    }
}
