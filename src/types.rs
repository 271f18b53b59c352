//! Type identifiers, metadata families and the IPTC date/time value types.

use serde::Serialize;
use std::fmt;

/// Value type identifier.
///
/// The numeric codes are shared with every consumer of the callback stream
/// (including the C ABI) and must never be renumbered. Codes 1–13 are the
/// TIFF wire types; codes from `0x10000` upward are the IPTC, comment and XMP
/// kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeId {
    UnsignedByte,
    AsciiString,
    UnsignedShort,
    UnsignedLong,
    UnsignedRational,
    SignedByte,
    Undefined,
    SignedShort,
    SignedLong,
    SignedRational,
    TiffFloat,
    TiffDouble,
    TiffIfd,
    String,
    Date,
    Time,
    Comment,
    Directory,
    XmpText,
    XmpAlt,
    XmpBag,
    XmpSeq,
    LangAlt,
    Invalid,
}

impl TypeId {
    /// The numeric code passed across the callback boundary.
    pub fn code(self) -> i32 {
        match self {
            Self::UnsignedByte => 1,
            Self::AsciiString => 2,
            Self::UnsignedShort => 3,
            Self::UnsignedLong => 4,
            Self::UnsignedRational => 5,
            Self::SignedByte => 6,
            Self::Undefined => 7,
            Self::SignedShort => 8,
            Self::SignedLong => 9,
            Self::SignedRational => 10,
            Self::TiffFloat => 11,
            Self::TiffDouble => 12,
            Self::TiffIfd => 13,
            Self::String => 0x10000,
            Self::Date => 0x10001,
            Self::Time => 0x10002,
            Self::Comment => 0x10003,
            Self::Directory => 0x10004,
            Self::XmpText => 0x10005,
            Self::XmpAlt => 0x10006,
            Self::XmpBag => 0x10007,
            Self::XmpSeq => 0x10008,
            Self::LangAlt => 0x10009,
            Self::Invalid => 0x1FFFE,
        }
    }

    /// Inverse of [`TypeId::code`]. Unknown codes map to [`TypeId::Invalid`].
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Self::UnsignedByte,
            2 => Self::AsciiString,
            3 => Self::UnsignedShort,
            4 => Self::UnsignedLong,
            5 => Self::UnsignedRational,
            6 => Self::SignedByte,
            7 => Self::Undefined,
            8 => Self::SignedShort,
            9 => Self::SignedLong,
            10 => Self::SignedRational,
            11 => Self::TiffFloat,
            12 => Self::TiffDouble,
            13 => Self::TiffIfd,
            0x10000 => Self::String,
            0x10001 => Self::Date,
            0x10002 => Self::Time,
            0x10003 => Self::Comment,
            0x10004 => Self::Directory,
            0x10005 => Self::XmpText,
            0x10006 => Self::XmpAlt,
            0x10007 => Self::XmpBag,
            0x10008 => Self::XmpSeq,
            0x10009 => Self::LangAlt,
            _ => Self::Invalid,
        }
    }

    /// The name used by [`fmt::Display`], e.g. `unsignedRational`.
    pub fn name(self) -> &'static str {
        match self {
            Self::UnsignedByte => "unsignedByte",
            Self::AsciiString => "asciiString",
            Self::UnsignedShort => "unsignedShort",
            Self::UnsignedLong => "unsignedLong",
            Self::UnsignedRational => "unsignedRational",
            Self::SignedByte => "signedByte",
            Self::Undefined => "undefined",
            Self::SignedShort => "signedShort",
            Self::SignedLong => "signedLong",
            Self::SignedRational => "signedRational",
            Self::TiffFloat => "tiffFloat",
            Self::TiffDouble => "tiffDouble",
            Self::TiffIfd => "tiffIfd",
            Self::String => "string",
            Self::Date => "date",
            Self::Time => "time",
            Self::Comment => "comment",
            Self::Directory => "directory",
            Self::XmpText => "xmpText",
            Self::XmpAlt => "xmpAlt",
            Self::XmpBag => "xmpBag",
            Self::XmpSeq => "xmpSeq",
            Self::LangAlt => "langAlt",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TypeId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.code())
    }
}

/// The metadata standard a datum belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Family {
    Exif,
    Iptc,
    Xmp,
}

impl Family {
    /// Family name as it appears in datum keys (`Exif`, `Iptc`, `Xmp`).
    pub fn name(self) -> &'static str {
        match self {
            Self::Exif => "Exif",
            Self::Iptc => "Iptc",
            Self::Xmp => "Xmp",
        }
    }

    /// Parse a family name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "exif" => Some(Self::Exif),
            "iptc" => Some(Self::Iptc),
            "xmp" => Some(Self::Xmp),
            _ => None,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An IPTC calendar date (`CCYYMMDD` on the wire).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Date {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl Date {
    /// Parse `CCYYMMDD` or the ISO form `CCYY-MM-DD`.
    pub fn parse(s: &str) -> Option<Self> {
        let digits: String = s.trim().chars().filter(|c| *c != '-').collect();
        if digits.len() != 8 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let year = digits[0..4].parse().ok()?;
        let month = digits[4..6].parse().ok()?;
        let day = digits[6..8].parse().ok()?;
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }
        Some(Self { year, month, day })
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// An IPTC time of day with its UTC offset (`HHMMSS±HHMM` on the wire).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Time {
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
    pub tz_hour: i32,
    pub tz_minute: i32,
}

impl Time {
    /// Parse `HHMMSS±HHMM`, `HHMMSS` or the ISO form `HH:MM:SS±HH:MM`.
    ///
    /// A negative offset makes both `tz_hour` and `tz_minute` negative.
    pub fn parse(s: &str) -> Option<Self> {
        let compact: String = s.trim().chars().filter(|c| *c != ':').collect();
        if compact.len() < 6 || !compact.is_char_boundary(6) {
            return None;
        }
        let (clock, zone) = compact.split_at(6);
        if !clock.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let hour = clock[0..2].parse().ok()?;
        let minute = clock[2..4].parse().ok()?;
        let second = clock[4..6].parse().ok()?;
        if hour > 23 || minute > 59 || second > 60 {
            return None;
        }

        let (tz_hour, tz_minute) = match zone {
            "" | "Z" => (0, 0),
            _ => {
                let (sign, rest) = if let Some(rest) = zone.strip_prefix('+') {
                    (1, rest)
                } else if let Some(rest) = zone.strip_prefix('-') {
                    (-1, rest)
                } else {
                    return None;
                };
                if rest.len() != 4 || !rest.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                let h: i32 = rest[0..2].parse().ok()?;
                let m: i32 = rest[2..4].parse().ok()?;
                (sign * h, sign * m)
            }
        };

        Some(Self {
            hour,
            minute,
            second,
            tz_hour,
            tz_minute,
        })
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.tz_hour < 0 || self.tz_minute < 0 { '-' } else { '+' };
        write!(
            f,
            "{:02}:{:02}:{:02}{}{:02}:{:02}",
            self.hour,
            self.minute,
            self.second,
            sign,
            self.tz_hour.abs(),
            self.tz_minute.abs()
        )
    }
}
