//! Compiled-in tag dictionaries and lookups.
//!
//! The tables are plain static slices. Exif groups that are further
//! instances of the same IFD kind share one [`TagTable`], which is what the
//! dumper deduplicates on.

mod dump;
mod exif;
mod iptc;
pub mod print;
mod xmp;

pub use dump::{DictionaryDocument, ExifTagEntry, IptcDataSetEntry, XmpPropertyEntry, dump_dictionary};

use crate::error::LookupError;
use crate::types::TypeId;
use crate::value::Value;

/// Descriptive metadata of one Exif tag.
#[derive(Debug, Clone, Copy)]
pub struct TagInfo {
    pub tag: u16,
    pub name: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub type_id: TypeId,
    /// Expected number of components, -1 when variable.
    pub count: i32,
    pub print: fn(&Value) -> String,
}

impl TagInfo {
    pub const fn new(
        tag: u16,
        name: &'static str,
        title: &'static str,
        desc: &'static str,
        type_id: TypeId,
        count: i32,
    ) -> Self {
        Self {
            tag,
            name,
            title,
            desc,
            type_id,
            count,
            print: print::value,
        }
    }

    pub const fn with_print(mut self, print: fn(&Value) -> String) -> Self {
        self.print = print;
        self
    }
}

/// The distinct Exif tag tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagTable {
    Ifd,
    Photo,
    Gps,
    Iop,
}

impl TagTable {
    pub fn tags(self) -> &'static [TagInfo] {
        match self {
            Self::Ifd => exif::IFD_TAGS,
            Self::Photo => exif::PHOTO_TAGS,
            Self::Gps => exif::GPS_TAGS,
            Self::Iop => exif::IOP_TAGS,
        }
    }
}

/// A named Exif group and the table describing its tags.
#[derive(Debug, Clone, Copy)]
pub struct GroupInfo {
    pub name: &'static str,
    pub table: TagTable,
}

/// Every Exif group the TIFF decoder can report, in dump order.
pub static GROUPS: &[GroupInfo] = &[
    GroupInfo { name: "Image", table: TagTable::Ifd },
    GroupInfo { name: "Thumbnail", table: TagTable::Ifd },
    GroupInfo { name: "Image2", table: TagTable::Ifd },
    GroupInfo { name: "SubImage1", table: TagTable::Ifd },
    GroupInfo { name: "SubImage2", table: TagTable::Ifd },
    GroupInfo { name: "SubImage3", table: TagTable::Ifd },
    GroupInfo { name: "SubImage4", table: TagTable::Ifd },
    GroupInfo { name: "Photo", table: TagTable::Photo },
    GroupInfo { name: "GPSInfo", table: TagTable::Gps },
    GroupInfo { name: "Iop", table: TagTable::Iop },
];

pub fn exif_group(name: &str) -> Option<&'static GroupInfo> {
    GROUPS.iter().find(|g| g.name == name)
}

/// Look up `tag` in the table backing `group`.
pub fn exif_tag(group: &str, tag: u16) -> Option<&'static TagInfo> {
    exif_group(group)?.table.tags().iter().find(|t| t.tag == tag)
}

pub fn exif_tag_by_name(group: &str, name: &str) -> Option<&'static TagInfo> {
    exif_group(group)?.table.tags().iter().find(|t| t.name == name)
}

/// Descriptive metadata of one IPTC dataset.
#[derive(Debug, Clone, Copy)]
pub struct DataSet {
    pub number: u16,
    pub name: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub repeatable: bool,
    pub min_bytes: u32,
    pub max_bytes: u32,
    pub type_id: TypeId,
}

/// The IPTC records with a dataset table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IptcRecord {
    Envelope = 1,
    Application2 = 2,
}

impl IptcRecord {
    pub const ALL: [IptcRecord; 2] = [Self::Envelope, Self::Application2];

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::Envelope),
            2 => Some(Self::Application2),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Envelope => "Envelope",
            Self::Application2 => "Application2",
        }
    }

    pub fn datasets(self) -> &'static [DataSet] {
        match self {
            Self::Envelope => iptc::ENVELOPE,
            Self::Application2 => iptc::APPLICATION2,
        }
    }
}

pub fn iptc_dataset(number: u16, record: IptcRecord) -> Option<&'static DataSet> {
    record.datasets().iter().find(|d| d.number == number)
}

/// Whether a dataset may occur more than once. Unknown datasets are
/// treated as repeatable.
pub fn iptc_repeatable(number: u16, record: IptcRecord) -> bool {
    iptc_dataset(number, record).is_none_or(|d| d.repeatable)
}

/// Descriptive metadata of one XMP property.
#[derive(Debug, Clone, Copy)]
pub struct XmpPropertyInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub type_id: TypeId,
    pub desc: &'static str,
}

/// A described XMP namespace.
#[derive(Debug, Clone, Copy)]
pub struct NsInfo {
    pub ns: &'static str,
    pub prefix: &'static str,
    pub properties: Option<&'static [XmpPropertyInfo]>,
}

/// Every registered prefix with its namespace URI, sorted by prefix.
pub fn registered_namespaces() -> Vec<(&'static str, &'static str)> {
    let mut all: Vec<_> = xmp::NAMESPACES
        .iter()
        .map(|ns| (ns.prefix, ns.ns))
        .chain(xmp::BARE_PREFIXES.iter().copied())
        .collect();
    all.sort_unstable();
    all
}

pub fn ns_info(prefix: &str) -> Result<&'static NsInfo, LookupError> {
    xmp::NAMESPACES
        .iter()
        .find(|ns| ns.prefix == prefix)
        .ok_or_else(|| LookupError::UnknownNamespace(prefix.to_string()))
}

/// The registered prefix for a namespace URI.
pub fn prefix_for_uri(uri: &str) -> Option<&'static str> {
    registered_namespaces()
        .into_iter()
        .find(|(_, ns)| *ns == uri)
        .map(|(prefix, _)| prefix)
}

pub fn xmp_property(prefix: &str, name: &str) -> Option<&'static XmpPropertyInfo> {
    ns_info(prefix)
        .ok()?
        .properties?
        .iter()
        .find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exif_lookups() {
        let make = exif_tag("Image", 0x010f).unwrap();
        assert_eq!(make.name, "Make");
        assert_eq!(make.type_id, TypeId::AsciiString);
        // Thumbnail shares the IFD table.
        assert_eq!(exif_tag("Thumbnail", 0x0112).unwrap().name, "Orientation");
        assert_eq!(exif_tag_by_name("Photo", "UserComment").unwrap().type_id, TypeId::Comment);
        assert!(exif_tag("Nope", 0x010f).is_none());
    }

    #[test]
    fn iptc_repeatability() {
        assert!(iptc_repeatable(25, IptcRecord::Application2));
        assert!(!iptc_repeatable(120, IptcRecord::Application2));
        assert!(iptc_repeatable(250, IptcRecord::Application2));
        assert_eq!(iptc_dataset(55, IptcRecord::Application2).unwrap().type_id, TypeId::Date);
    }

    #[test]
    fn xmp_namespaces() {
        assert_eq!(xmp_property("dc", "title").unwrap().type_id, TypeId::LangAlt);
        assert!(ns_info("stDim").unwrap().properties.is_none());
        assert!(matches!(ns_info("xmpidq"), Err(LookupError::UnknownNamespace(p)) if p == "xmpidq"));
        assert_eq!(prefix_for_uri("http://purl.org/dc/elements/1.1/"), Some("dc"));
        let prefixes: Vec<_> = registered_namespaces().into_iter().map(|(p, _)| p).collect();
        assert!(prefixes.windows(2).all(|w| w[0] <= w[1]));
    }
}
