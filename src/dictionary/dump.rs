//! Serialising the tag dictionaries into one JSON document.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use super::{GROUPS, IptcRecord, ns_info, registered_namespaces};
use crate::types::TypeId;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExifTagEntry {
    pub count: i32,
    pub description: &'static str,
    pub label: &'static str,
    pub type_id: TypeId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IptcDataSetEntry {
    pub description: &'static str,
    pub label: &'static str,
    pub max_bytes: u32,
    pub min_bytes: u32,
    pub repeatable: bool,
    pub type_id: TypeId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XmpPropertyEntry {
    pub description: &'static str,
    pub label: &'static str,
    pub type_id: TypeId,
}

type Section<T> = BTreeMap<&'static str, BTreeMap<&'static str, T>>;

/// Every dictionary, keyed family → group → tag name.
///
/// All maps are ordered, so the serialised form is stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DictionaryDocument {
    #[serde(rename = "Exif")]
    pub exif: Section<ExifTagEntry>,
    #[serde(rename = "IPTC")]
    pub iptc: Section<IptcDataSetEntry>,
    #[serde(rename = "XMP")]
    pub xmp: Section<XmpPropertyEntry>,
}

impl DictionaryDocument {
    /// Pretty-printed JSON with 2-space indentation.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Build the dictionary document.
///
/// Exif groups backed by a table already emitted are skipped. XMP prefixes
/// without namespace info or without a property table contribute nothing.
pub fn dump_dictionary() -> DictionaryDocument {
    let mut doc = DictionaryDocument::default();

    let mut seen = HashSet::new();
    for group in GROUPS {
        if !seen.insert(group.table) {
            log::debug!("Skipping Exif group {} (alias)", group.name);
            continue;
        }
        let tags = group
            .table
            .tags()
            .iter()
            .map(|t| {
                let entry = ExifTagEntry {
                    count: t.count,
                    description: t.desc,
                    label: t.title,
                    type_id: t.type_id,
                };
                (t.name, entry)
            })
            .collect();
        doc.exif.insert(group.name, tags);
    }

    for record in IptcRecord::ALL {
        let datasets = record
            .datasets()
            .iter()
            .map(|d| {
                let entry = IptcDataSetEntry {
                    description: d.desc,
                    label: d.title,
                    max_bytes: d.max_bytes,
                    min_bytes: d.min_bytes,
                    repeatable: d.repeatable,
                    type_id: d.type_id,
                };
                (d.name, entry)
            })
            .collect();
        doc.iptc.insert(record.name(), datasets);
    }

    for (prefix, _) in registered_namespaces() {
        let info = match ns_info(prefix) {
            Ok(info) => info,
            Err(e) => {
                log::debug!("{e}");
                continue;
            }
        };
        let Some(properties) = info.properties else {
            log::debug!("XMP namespace {prefix} has no property table");
            continue;
        };
        let entries = properties
            .iter()
            .map(|p| {
                let entry = XmpPropertyEntry {
                    description: p.desc,
                    label: p.title,
                    type_id: p.type_id,
                };
                (p.name, entry)
            })
            .collect();
        doc.xmp.insert(prefix, entries);
    }

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::TagTable;

    #[test]
    fn aliased_groups_are_emitted_once() {
        let doc = dump_dictionary();
        let groups: Vec<_> = doc.exif.keys().copied().collect();
        assert_eq!(groups, vec!["GPSInfo", "Image", "Iop", "Photo"]);
        assert!(!doc.exif.contains_key("Thumbnail"));
        assert_eq!(doc.exif["Image"].len(), TagTable::Ifd.tags().len());
    }

    #[test]
    fn iptc_records() {
        let doc = dump_dictionary();
        let keywords = &doc.iptc["Application2"]["Keywords"];
        assert!(keywords.repeatable);
        assert_eq!(keywords.max_bytes, 64);
        assert!(doc.iptc["Envelope"].contains_key("ModelVersion"));
    }

    #[test]
    fn tableless_namespaces_are_skipped() {
        let doc = dump_dictionary();
        assert!(doc.xmp.contains_key("dc"));
        assert!(!doc.xmp.contains_key("stDim"));
        assert!(!doc.xmp.contains_key("xmpidq"));
        assert!(!doc.xmp.contains_key("rdf"));
    }

    #[test]
    fn json_layout() {
        let json = dump_dictionary().to_json().unwrap();
        assert!(json.starts_with("{\n  \"Exif\": {\n    \"GPSInfo\": {"));

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let make = &parsed["Exif"]["Image"]["Make"];
        assert_eq!(make["label"], "Manufacturer");
        assert_eq!(make["typeId"], 2);
        assert_eq!(make["count"], -1);
        assert_eq!(parsed["IPTC"]["Application2"]["DateCreated"]["typeId"], 0x10001);
        assert_eq!(parsed["XMP"]["dc"]["title"]["typeId"], 0x10009);

        let keys: Vec<_> = parsed["IPTC"]["Application2"]["Caption"]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys, ["description", "label", "maxBytes", "minBytes", "repeatable", "typeId"]);
    }
}
