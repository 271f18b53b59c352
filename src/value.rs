//! Decoded metadata values.
//!
//! [`Value`] is the closed set of value kinds the container decoders
//! produce. Each variant keeps its components in their native width so that
//! the streaming reader can coerce them the same way for every family.

use std::collections::BTreeMap;
use std::fmt;

use crate::types::{Date, Time, TypeId};

/// An unsigned TIFF rational.
pub type Rational = (u32, u32);

/// A signed TIFF rational.
pub type SRational = (i32, i32);

/// A decoded metadata value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    UnsignedByte(Vec<u8>),
    AsciiString(String),
    UnsignedShort(Vec<u16>),
    UnsignedLong(Vec<u32>),
    UnsignedRational(Vec<Rational>),
    SignedByte(Vec<i8>),
    Undefined(Vec<u8>),
    SignedShort(Vec<i16>),
    SignedLong(Vec<i32>),
    SignedRational(Vec<SRational>),
    TiffFloat(Vec<f32>),
    TiffDouble(Vec<f64>),
    TiffIfd(Vec<u32>),
    /// IPTC string. Holds one entry per occurrence of the dataset.
    String(Vec<String>),
    /// IPTC date. Holds one entry per occurrence of the dataset.
    Date(Vec<Date>),
    /// IPTC time. Holds one entry per occurrence of the dataset.
    Time(Vec<Time>),
    /// Exif comment with its character-set prefix removed.
    Comment(String),
    XmpText(String),
    XmpAlt(Vec<String>),
    XmpBag(Vec<String>),
    XmpSeq(Vec<String>),
    /// Language alternatives, keyed by RFC 3066 language tag.
    LangAlt(BTreeMap<String, String>),
}

impl Value {
    pub fn type_id(&self) -> TypeId {
        match self {
            Self::UnsignedByte(_) => TypeId::UnsignedByte,
            Self::AsciiString(_) => TypeId::AsciiString,
            Self::UnsignedShort(_) => TypeId::UnsignedShort,
            Self::UnsignedLong(_) => TypeId::UnsignedLong,
            Self::UnsignedRational(_) => TypeId::UnsignedRational,
            Self::SignedByte(_) => TypeId::SignedByte,
            Self::Undefined(_) => TypeId::Undefined,
            Self::SignedShort(_) => TypeId::SignedShort,
            Self::SignedLong(_) => TypeId::SignedLong,
            Self::SignedRational(_) => TypeId::SignedRational,
            Self::TiffFloat(_) => TypeId::TiffFloat,
            Self::TiffDouble(_) => TypeId::TiffDouble,
            Self::TiffIfd(_) => TypeId::TiffIfd,
            Self::String(_) => TypeId::String,
            Self::Date(_) => TypeId::Date,
            Self::Time(_) => TypeId::Time,
            Self::Comment(_) => TypeId::Comment,
            Self::XmpText(_) => TypeId::XmpText,
            Self::XmpAlt(_) => TypeId::XmpAlt,
            Self::XmpBag(_) => TypeId::XmpBag,
            Self::XmpSeq(_) => TypeId::XmpSeq,
            Self::LangAlt(_) => TypeId::LangAlt,
        }
    }

    /// Raw cardinality as stored.
    ///
    /// String kinds are character arrays: their count is the byte length
    /// (ASCII includes the NUL terminator as on the TIFF wire). Dates and
    /// times count the bytes of their IIM encoding (8 and 11).
    pub fn count(&self) -> usize {
        match self {
            Self::UnsignedByte(v) | Self::Undefined(v) => v.len(),
            Self::AsciiString(s) => s.len() + 1,
            Self::UnsignedShort(v) => v.len(),
            Self::UnsignedLong(v) | Self::TiffIfd(v) => v.len(),
            Self::UnsignedRational(v) => v.len(),
            Self::SignedByte(v) => v.len(),
            Self::SignedShort(v) => v.len(),
            Self::SignedLong(v) => v.len(),
            Self::SignedRational(v) => v.len(),
            Self::TiffFloat(v) => v.len(),
            Self::TiffDouble(v) => v.len(),
            Self::String(v) => v.iter().map(String::len).sum(),
            Self::Date(v) => v.len() * 8,
            Self::Time(v) => v.len() * 11,
            Self::Comment(s) | Self::XmpText(s) => s.len(),
            Self::XmpAlt(v) | Self::XmpBag(v) | Self::XmpSeq(v) => v.len(),
            Self::LangAlt(m) => m.len(),
        }
    }

    /// Number of logical strings, dates or times stored.
    pub(crate) fn occurrences(&self) -> usize {
        match self {
            Self::AsciiString(_) | Self::Comment(_) | Self::XmpText(_) => 1,
            Self::String(v) => v.len(),
            Self::Date(v) => v.len(),
            Self::Time(v) => v.len(),
            _ => self.count(),
        }
    }

    /// Integer coercion of component `index`. Rationals are truncated,
    /// floats rounded toward zero; strings parse as decimal when they can.
    pub fn to_long(&self, index: usize) -> Option<i64> {
        match self {
            Self::UnsignedByte(v) | Self::Undefined(v) => v.get(index).map(|&x| x as i64),
            Self::UnsignedShort(v) => v.get(index).map(|&x| x as i64),
            Self::UnsignedLong(v) | Self::TiffIfd(v) => v.get(index).map(|&x| x as i64),
            Self::SignedByte(v) => v.get(index).map(|&x| x as i64),
            Self::SignedShort(v) => v.get(index).map(|&x| x as i64),
            Self::SignedLong(v) => v.get(index).map(|&x| x as i64),
            Self::UnsignedRational(v) => v
                .get(index)
                .and_then(|&(n, d)| (d != 0).then(|| n as i64 / d as i64)),
            Self::SignedRational(v) => v
                .get(index)
                .and_then(|&(n, d)| (d != 0).then(|| n as i64 / d as i64)),
            Self::TiffFloat(v) => v.get(index).map(|&x| x as i64),
            Self::TiffDouble(v) => v.get(index).map(|&x| x as i64),
            _ => self.string_at(index).and_then(|s| s.trim().parse().ok()),
        }
    }

    /// Rational coercion of component `index`. Integers become `n/1`.
    pub fn to_rational(&self, index: usize) -> Option<SRational> {
        match self {
            Self::UnsignedRational(v) => v.get(index).map(|&(n, d)| (n as i32, d as i32)),
            Self::SignedRational(v) => v.get(index).copied(),
            _ => self.to_long(index).map(|n| (n as i32, 1)),
        }
    }

    /// Single-precision coercion of component `index`.
    pub fn to_float(&self, index: usize) -> Option<f32> {
        match self {
            Self::TiffFloat(v) => v.get(index).copied(),
            Self::TiffDouble(v) => v.get(index).map(|&x| x as f32),
            Self::UnsignedRational(v) => v
                .get(index)
                .and_then(|&(n, d)| (d != 0).then(|| n as f32 / d as f32)),
            Self::SignedRational(v) => v
                .get(index)
                .and_then(|&(n, d)| (d != 0).then(|| n as f32 / d as f32)),
            _ => self.to_long(index).map(|n| n as f32),
        }
    }

    /// The stored double at `index`, only for [`Value::TiffDouble`].
    pub fn double_at(&self, index: usize) -> Option<f64> {
        match self {
            Self::TiffDouble(v) => v.get(index).copied(),
            _ => None,
        }
    }

    /// The raw text of string component `index`.
    pub fn string_at(&self, index: usize) -> Option<&str> {
        match self {
            Self::AsciiString(s) | Self::Comment(s) | Self::XmpText(s) => {
                (index == 0).then_some(s.as_str())
            }
            Self::String(v) | Self::XmpAlt(v) | Self::XmpBag(v) | Self::XmpSeq(v) => {
                v.get(index).map(String::as_str)
            }
            _ => None,
        }
    }

    pub fn date_at(&self, index: usize) -> Option<Date> {
        match self {
            Self::Date(v) => v.get(index).copied(),
            _ => None,
        }
    }

    pub fn time_at(&self, index: usize) -> Option<Time> {
        match self {
            Self::Time(v) => v.get(index).copied(),
            _ => None,
        }
    }

    /// Append the components of `other` when both hold the same kind.
    /// Returns `false` (leaving `self` unchanged) otherwise. `Undefined`
    /// blobs never merge: each occurrence is opaque.
    pub(crate) fn merge(&mut self, other: Value) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a.extend(b),
            (Self::Date(a), Self::Date(b)) => a.extend(b),
            (Self::Time(a), Self::Time(b)) => a.extend(b),
            (Self::UnsignedShort(a), Self::UnsignedShort(b)) => a.extend(b),
            _ => return false,
        }
        true
    }
}

fn join<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

struct RationalDisplay<T>(T, T);

impl<T: fmt::Display> fmt::Display for RationalDisplay<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, self.1)
    }
}

/// Default rendering: components separated by spaces, strings verbatim,
/// language alternatives as `lang="x-default" text, lang="fr" texte`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsignedByte(v) | Self::Undefined(v) => join(f, v, " "),
            Self::AsciiString(s) | Self::Comment(s) | Self::XmpText(s) => f.write_str(s),
            Self::UnsignedShort(v) => join(f, v, " "),
            Self::UnsignedLong(v) | Self::TiffIfd(v) => join(f, v, " "),
            Self::UnsignedRational(v) => {
                let items: Vec<_> = v.iter().map(|&(n, d)| RationalDisplay(n, d)).collect();
                join(f, &items, " ")
            }
            Self::SignedByte(v) => join(f, v, " "),
            Self::SignedShort(v) => join(f, v, " "),
            Self::SignedLong(v) => join(f, v, " "),
            Self::SignedRational(v) => {
                let items: Vec<_> = v.iter().map(|&(n, d)| RationalDisplay(n, d)).collect();
                join(f, &items, " ")
            }
            Self::TiffFloat(v) => join(f, v, " "),
            Self::TiffDouble(v) => join(f, v, " "),
            Self::String(v) => join(f, v, ", "),
            Self::Date(v) => join(f, v, ", "),
            Self::Time(v) => join(f, v, ", "),
            Self::XmpAlt(v) | Self::XmpBag(v) | Self::XmpSeq(v) => join(f, v, ", "),
            Self::LangAlt(m) => {
                for (i, (lang, text)) in m.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "lang=\"{lang}\" {text}")?;
                }
                Ok(())
            }
        }
    }
}
