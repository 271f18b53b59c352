//! Streaming metadata reader.
//!
//! Every datum of an image is delivered as one `on_start`, zero or more
//! `on_value` and one `on_end` call on a [`MetadataHandler`], in the order
//! Exif, IPTC, XMP. Values are marshalled into a single reusable
//! [`ValueSlot`] whose contents are only meaningful inside `on_value`.
//!
//! ```rust,no_run
//! use ezif::reader::{from_fns, read_metadata};
//!
//! let mut handler = from_fns(
//!     |datum| println!("{} = {}", datum.key(), datum.interpreted_value),
//!     |slot| println!("  {:?}", slot.string),
//!     |_family| {},
//! );
//! read_metadata("photo.jpg", &mut handler)?;
//! # Ok::<(), ezif::Error>(())
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::image::{Image, Metadatum};
use crate::source::{self, Locator};
use crate::types::{Date, Family, Time, TypeId};
use crate::value::Value;

// ── Events ──────────────────────────────────────────────────────────

/// Descriptive fields of a datum, passed to [`MetadataHandler::on_start`].
#[derive(Debug, Clone, Copy)]
pub struct DatumStart<'a> {
    pub family: Family,
    pub group: &'a str,
    pub tag_name: &'a str,
    pub type_id: TypeId,
    pub label: &'a str,
    pub interpreted_value: &'a str,
    /// Number of `on_value` calls that follow, except for language
    /// alternatives which get one call per language.
    pub count: usize,
    pub repeatable: bool,
}

impl DatumStart<'_> {
    /// `Family.Group.Tag`
    pub fn key(&self) -> String {
        format!("{}.{}.{}", self.family, self.group, self.tag_name)
    }
}

/// Scratch record holding one decoded value.
///
/// Only the fields relevant to the datum's type are set; the rest keep
/// their reset state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValueSlot {
    pub long_value: i64,
    pub double_value: f64,
    pub numerator: u32,
    pub denominator: u32,
    pub string: Option<String>,
    pub lang: Option<String>,
    pub date: Option<Date>,
    pub time: Option<Time>,
}

impl ValueSlot {
    pub fn reset(&mut self) {
        self.long_value = 0;
        self.double_value = 0.0;
        self.numerator = 0;
        self.denominator = 0;
        self.string = None;
        self.lang = None;
        self.date = None;
        self.time = None;
    }
}

/// Receives the event stream of a read.
pub trait MetadataHandler {
    fn on_start(&mut self, datum: &DatumStart<'_>);
    fn on_value(&mut self, slot: &ValueSlot);
    fn on_end(&mut self, family: Family);
}

impl<H: MetadataHandler + ?Sized> MetadataHandler for &mut H {
    fn on_start(&mut self, datum: &DatumStart<'_>) {
        (**self).on_start(datum)
    }

    fn on_value(&mut self, slot: &ValueSlot) {
        (**self).on_value(slot)
    }

    fn on_end(&mut self, family: Family) {
        (**self).on_end(family)
    }
}

/// Handler built from three closures. See [`from_fns`].
pub struct FnHandler<S, V, E> {
    start: S,
    value: V,
    end: E,
}

/// Build a handler from closures; captured state replaces a context pointer.
pub fn from_fns<S, V, E>(start: S, value: V, end: E) -> FnHandler<S, V, E>
where
    S: FnMut(&DatumStart<'_>),
    V: FnMut(&ValueSlot),
    E: FnMut(Family),
{
    FnHandler { start, value, end }
}

impl<S, V, E> MetadataHandler for FnHandler<S, V, E>
where
    S: FnMut(&DatumStart<'_>),
    V: FnMut(&ValueSlot),
    E: FnMut(Family),
{
    fn on_start(&mut self, datum: &DatumStart<'_>) {
        (self.start)(datum)
    }

    fn on_value(&mut self, slot: &ValueSlot) {
        (self.value)(slot)
    }

    fn on_end(&mut self, family: Family) {
        (self.end)(family)
    }
}

// ── Options ─────────────────────────────────────────────────────────

/// Which metadata families are streamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Families {
    pub exif: bool,
    pub iptc: bool,
    pub xmp: bool,
}

impl Default for Families {
    fn default() -> Self {
        Self {
            exif: true,
            iptc: true,
            xmp: true,
        }
    }
}

impl Families {
    pub fn contains(&self, family: Family) -> bool {
        match family {
            Family::Exif => self.exif,
            Family::Iptc => self.iptc,
            Family::Xmp => self.xmp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadOptions {
    /// Deliver IPTC datums ordered by key.
    pub sort_iptc: bool,
    pub families: Families,
    pub http_timeout: Duration,
    /// Upper bound on the size of a remote resource.
    pub max_remote_bytes: u64,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            sort_iptc: true,
            families: Families::default(),
            http_timeout: Duration::from_secs(30),
            max_remote_bytes: 64 * 1024 * 1024,
        }
    }
}

// ── Entry points ────────────────────────────────────────────────────

/// Read the image at `locator` (path or URL) with default options.
pub fn read_metadata<H>(locator: &str, handler: &mut H) -> Result<()>
where
    H: MetadataHandler + ?Sized,
{
    let mut slot = ValueSlot::default();
    read_metadata_with(locator, &ReadOptions::default(), handler, &mut slot)
}

/// Read the image at `locator`, marshalling values through `slot`.
///
/// Errors happen while opening and parsing, before any event fires.
pub fn read_metadata_with<H>(
    locator: &str,
    options: &ReadOptions,
    handler: &mut H,
    slot: &mut ValueSlot,
) -> Result<()>
where
    H: MetadataHandler + ?Sized,
{
    let locator = Locator::parse(locator)?;
    let data = source::fetch(&locator, options)?;
    let mut image = Image::from_bytes(data)?;
    if options.sort_iptc {
        image.sort_iptc();
    }
    read_image(&image, options, handler, slot);
    Ok(())
}

/// Stream the datums of an already decoded image.
pub fn read_image<H>(image: &Image, options: &ReadOptions, handler: &mut H, slot: &mut ValueSlot)
where
    H: MetadataHandler + ?Sized,
{
    let blocks = [
        (Family::Exif, image.exif_data()),
        (Family::Iptc, image.iptc_data()),
        (Family::Xmp, image.xmp_data()),
    ];
    for (family, data) in blocks {
        if !options.families.contains(family) {
            continue;
        }
        for datum in data {
            stream_datum(datum, handler, slot);
        }
    }
}

fn stream_datum<H>(datum: &Metadatum, handler: &mut H, slot: &mut ValueSlot)
where
    H: MetadataHandler + ?Sized,
{
    let count = adjusted_count(&datum.value);
    let interpreted = datum.interpreted_value();
    let start = DatumStart {
        family: datum.family,
        group: &datum.group,
        tag_name: &datum.tag_name,
        type_id: datum.type_id(),
        label: &datum.label,
        interpreted_value: &interpreted,
        count,
        repeatable: datum.repeatable,
    };
    log::debug!("start {} ({}, {count} values)", start.key(), start.type_id);
    handler.on_start(&start);

    let decode = Decode::for_type(datum.type_id());
    if let Value::LangAlt(map) = &datum.value {
        for (lang, text) in map {
            slot.reset();
            slot.lang = Some(lang.clone());
            slot.string = Some(text.clone());
            handler.on_value(slot);
        }
    } else {
        for index in 0..count {
            slot.reset();
            decode.fill(&datum.value, index, slot);
            handler.on_value(slot);
        }
    }

    log::debug!("end {}", start.key());
    handler.on_end(datum.family);
}

// ── Marshalling ─────────────────────────────────────────────────────

/// Number of value events for `value`.
///
/// Strings count once per stored string rather than per character, dates
/// and times once per stored date or time.
pub fn adjusted_count(value: &Value) -> usize {
    match value.type_id() {
        TypeId::AsciiString
        | TypeId::Comment
        | TypeId::String
        | TypeId::XmpText
        | TypeId::Date
        | TypeId::Time => value.occurrences(),
        _ => value.count(),
    }
}

/// How a value kind is copied into the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decode {
    Text,
    Date,
    Time,
    Integer,
    Rational,
    Double,
    Float,
    LangAlt,
    Skip,
}

impl Decode {
    fn for_type(type_id: TypeId) -> Self {
        match type_id {
            TypeId::AsciiString
            | TypeId::String
            | TypeId::Comment
            | TypeId::XmpText
            | TypeId::XmpAlt
            | TypeId::XmpBag
            | TypeId::XmpSeq => Self::Text,
            TypeId::Date => Self::Date,
            TypeId::Time => Self::Time,
            TypeId::UnsignedByte
            | TypeId::SignedByte
            | TypeId::UnsignedShort
            | TypeId::SignedShort
            | TypeId::UnsignedLong
            | TypeId::SignedLong
            | TypeId::Undefined
            | TypeId::TiffIfd => Self::Integer,
            TypeId::UnsignedRational | TypeId::SignedRational => Self::Rational,
            TypeId::TiffDouble => Self::Double,
            TypeId::TiffFloat => Self::Float,
            TypeId::LangAlt => Self::LangAlt,
            TypeId::Directory | TypeId::Invalid => Self::Skip,
        }
    }

    fn fill(self, value: &Value, index: usize, slot: &mut ValueSlot) {
        match self {
            Self::Text => slot.string = value.string_at(index).map(str::to_string),
            Self::Date => slot.date = value.date_at(index),
            Self::Time => slot.time = value.time_at(index),
            Self::Integer => slot.long_value = value.to_long(index).unwrap_or_default(),
            Self::Rational => {
                if let Some((n, d)) = value.to_rational(index) {
                    slot.numerator = n as u32;
                    slot.denominator = d as u32;
                }
            }
            // the float coercion would round through f32
            Self::Double => slot.double_value = value.double_at(index).unwrap_or_default(),
            Self::Float => slot.double_value = value.to_float(index).unwrap_or_default() as f64,
            // language alternatives are streamed per language
            Self::LangAlt | Self::Skip => {}
        }
    }
}
