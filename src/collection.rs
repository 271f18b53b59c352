//! Owned view of an image's metadata, assembled from the event stream.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::Result;
use crate::reader::{self, DatumStart, MetadataHandler, ReadOptions, ValueSlot};
use crate::types::{Date, Family, Time, TypeId};

/// Typed values of one property.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Strings(Vec<String>),
    Dates(Vec<Date>),
    Times(Vec<Time>),
    U8(Vec<u8>),
    I8(Vec<i8>),
    U16(Vec<u16>),
    I16(Vec<i16>),
    U32(Vec<u32>),
    I32(Vec<i32>),
    /// `(numerator, denominator)`, sign restored for signed rationals.
    Rationals(Vec<(i64, i64)>),
    F32(Vec<f32>),
    F64(Vec<f64>),
    Undefined(Vec<u8>),
    LangAlt(BTreeMap<String, String>),
    Empty,
}

impl PropertyValue {
    fn for_type(type_id: TypeId) -> Self {
        match type_id {
            TypeId::AsciiString
            | TypeId::String
            | TypeId::Comment
            | TypeId::XmpText
            | TypeId::XmpAlt
            | TypeId::XmpBag
            | TypeId::XmpSeq => Self::Strings(Vec::new()),
            TypeId::Date => Self::Dates(Vec::new()),
            TypeId::Time => Self::Times(Vec::new()),
            TypeId::UnsignedByte => Self::U8(Vec::new()),
            TypeId::SignedByte => Self::I8(Vec::new()),
            TypeId::UnsignedShort => Self::U16(Vec::new()),
            TypeId::SignedShort => Self::I16(Vec::new()),
            TypeId::UnsignedLong | TypeId::TiffIfd => Self::U32(Vec::new()),
            TypeId::SignedLong => Self::I32(Vec::new()),
            TypeId::UnsignedRational | TypeId::SignedRational => Self::Rationals(Vec::new()),
            TypeId::TiffFloat => Self::F32(Vec::new()),
            TypeId::TiffDouble => Self::F64(Vec::new()),
            TypeId::Undefined => Self::Undefined(Vec::new()),
            TypeId::LangAlt => Self::LangAlt(BTreeMap::new()),
            TypeId::Directory | TypeId::Invalid => Self::Empty,
        }
    }

    fn push(&mut self, type_id: TypeId, slot: &ValueSlot) {
        let long = slot.long_value;
        match self {
            Self::Strings(v) => v.push(slot.string.clone().unwrap_or_default()),
            Self::Dates(v) => v.extend(slot.date),
            Self::Times(v) => v.extend(slot.time),
            Self::U8(v) => v.push(long as u8),
            Self::I8(v) => v.push(long as i8),
            Self::U16(v) => v.push(long as u16),
            Self::I16(v) => v.push(long as i16),
            Self::U32(v) => v.push(long as u32),
            Self::I32(v) => v.push(long as i32),
            Self::Rationals(v) => v.push(if type_id == TypeId::SignedRational {
                (slot.numerator as i32 as i64, slot.denominator as i32 as i64)
            } else {
                (slot.numerator as i64, slot.denominator as i64)
            }),
            Self::F32(v) => v.push(slot.double_value as f32),
            Self::F64(v) => v.push(slot.double_value),
            Self::Undefined(v) => v.push(long as u8),
            Self::LangAlt(map) => {
                if let Some(lang) = &slot.lang {
                    map.insert(lang.clone(), slot.string.clone().unwrap_or_default());
                }
            }
            Self::Empty => {}
        }
    }

    /// Append the values of `other`, when both are the same kind. Byte
    /// blobs are replaced rather than concatenated.
    fn append(&mut self, other: PropertyValue) -> bool {
        match (self, other) {
            (Self::Strings(a), Self::Strings(b)) => a.extend(b),
            (Self::Dates(a), Self::Dates(b)) => a.extend(b),
            (Self::Times(a), Self::Times(b)) => a.extend(b),
            (Self::U16(a), Self::U16(b)) => a.extend(b),
            _ => return false,
        }
        true
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Strings(v) => v.len(),
            Self::Dates(v) => v.len(),
            Self::Times(v) => v.len(),
            Self::U8(v) | Self::Undefined(v) => v.len(),
            Self::I8(v) => v.len(),
            Self::U16(v) => v.len(),
            Self::I16(v) => v.len(),
            Self::U32(v) => v.len(),
            Self::I32(v) => v.len(),
            Self::Rationals(v) => v.len(),
            Self::F32(v) => v.len(),
            Self::F64(v) => v.len(),
            Self::LangAlt(m) => m.len(),
            Self::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One datum with every value it delivered.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub family: Family,
    pub group_name: String,
    pub tag_name: String,
    pub type_id: TypeId,
    pub label: String,
    pub interpreted_value: String,
    pub repeatable: bool,
    pub value: PropertyValue,
}

impl Property {
    pub fn key(&self) -> String {
        format!("{}.{}.{}", self.family, self.group_name, self.tag_name)
    }
}

/// The properties of one family, keyed by `Family.Group.Tag`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Properties {
    entries: BTreeMap<String, Property>,
}

impl Properties {
    pub fn get(&self, key: &str) -> Option<&Property> {
        self.entries.get(key)
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in lexicographic order.
    pub fn keys(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, property: Property) {
        let key = property.key();
        match self.entries.get_mut(&key) {
            Some(existing) if existing.repeatable => {
                if !existing.value.append(property.value.clone()) {
                    self.entries.insert(key, property);
                }
            }
            _ => {
                self.entries.insert(key, property);
            }
        }
    }
}

/// All metadata of an image.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Collection {
    #[serde(rename = "Exif")]
    pub exif: Properties,
    pub iptc: Properties,
    pub xmp: Properties,
}

impl Collection {
    pub fn properties(&self, family: Family) -> &Properties {
        match family {
            Family::Exif => &self.exif,
            Family::Iptc => &self.iptc,
            Family::Xmp => &self.xmp,
        }
    }

    fn properties_mut(&mut self, family: Family) -> &mut Properties {
        match family {
            Family::Exif => &mut self.exif,
            Family::Iptc => &mut self.iptc,
            Family::Xmp => &mut self.xmp,
        }
    }

    /// Look up a full `Family.Group.Tag` key.
    pub fn get(&self, key: &str) -> Option<&Property> {
        let family = Family::from_name(key.split('.').next()?)?;
        self.properties(family).get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.exif.is_empty() && self.iptc.is_empty() && self.xmp.is_empty()
    }
}

/// Handler that accumulates the event stream into a [`Collection`].
#[derive(Debug, Default)]
pub struct Collector {
    current: Option<Property>,
    collection: Collection,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> Collection {
        self.collection
    }
}

impl MetadataHandler for Collector {
    fn on_start(&mut self, datum: &DatumStart<'_>) {
        self.current = Some(Property {
            family: datum.family,
            group_name: datum.group.to_string(),
            tag_name: datum.tag_name.to_string(),
            type_id: datum.type_id,
            label: datum.label.to_string(),
            interpreted_value: datum.interpreted_value.to_string(),
            repeatable: datum.repeatable,
            value: PropertyValue::for_type(datum.type_id),
        });
    }

    fn on_value(&mut self, slot: &ValueSlot) {
        if let Some(property) = &mut self.current {
            property.value.push(property.type_id, slot);
        }
    }

    fn on_end(&mut self, family: Family) {
        match self.current.take() {
            Some(property) => self.collection.properties_mut(family).insert(property),
            None => log::warn!("{family} end event without a start"),
        }
    }
}

/// Read every datum of the image at `locator` into a [`Collection`].
pub fn read_collection(locator: &str) -> Result<Collection> {
    read_collection_with(locator, &ReadOptions::default())
}

pub fn read_collection_with(locator: &str, options: &ReadOptions) -> Result<Collection> {
    let mut collector = Collector::new();
    let mut slot = ValueSlot::default();
    reader::read_metadata_with(locator, options, &mut collector, &mut slot)?;
    Ok(collector.finish())
}
