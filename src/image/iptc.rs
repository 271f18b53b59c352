//! IPTC-IIM decoding, including the Photoshop resource wrapper JPEG uses.

use std::collections::HashMap;

use crate::dictionary::{self, IptcRecord};
use crate::types::{Date, Family, Time, TypeId};
use crate::value::Value;

use super::Metadatum;

const IIM_MARKER: u8 = 0x1C;
const BIM_MARKER: &[u8] = b"8BIM";
const IPTC_RESOURCE_ID: u16 = 0x0404;

/// The IPTC-NAA resource inside a Photoshop image resource block.
pub(crate) fn find_iim(irb: &[u8]) -> Option<&[u8]> {
    let mut pos = 0;
    while let Some(header) = irb.get(pos..pos + 6) {
        if &header[..4] != BIM_MARKER {
            log::warn!("IPTC: unexpected bytes in Photoshop resource block at {pos}");
            return None;
        }
        let resource_id = u16::from_be_bytes([header[4], header[5]]);
        pos += 6;

        // pascal name, padded to an even total length
        let name_len = *irb.get(pos)? as usize;
        pos += 1 + name_len + (1 + name_len) % 2;

        let len = u32::from_be_bytes(irb.get(pos..pos + 4)?.try_into().ok()?) as usize;
        pos += 4;
        let data = irb.get(pos..pos.checked_add(len)?)?;
        if resource_id == IPTC_RESOURCE_ID {
            return Some(data);
        }
        pos += len + len % 2;
    }
    None
}

/// Decode IIM datasets. Occurrences of a repeatable dataset are merged
/// into one datum holding every value, except raw `Undefined` payloads,
/// which stay one datum per occurrence.
pub(crate) fn decode(data: &[u8]) -> Vec<Metadatum> {
    let mut out: Vec<Metadatum> = Vec::new();
    let mut seen: HashMap<(u8, u8), usize> = HashMap::new();
    let mut pos = 0;

    while pos + 5 <= data.len() {
        if data[pos] != IIM_MARKER {
            pos += 1;
            continue;
        }
        let record = data[pos + 1];
        let dataset = data[pos + 2];
        let len = u16::from_be_bytes([data[pos + 3], data[pos + 4]]) as usize;
        pos += 5;

        if len & 0x8000 != 0 {
            log::warn!("IPTC: extended dataset {record}:{dataset} not supported, stopping");
            break;
        }
        let Some(bytes) = data.get(pos..pos + len) else {
            log::warn!("IPTC: dataset {record}:{dataset} truncated, stopping");
            break;
        };
        pos += len;

        let datum = datum(record, dataset, bytes);
        match seen.get(&(record, dataset)) {
            Some(&i) if out[i].repeatable => {
                if !out[i].value.merge(datum.value.clone()) {
                    out.push(datum);
                }
            }
            _ => {
                seen.insert((record, dataset), out.len());
                out.push(datum);
            }
        }
    }
    out
}

fn datum(record: u8, dataset: u8, bytes: &[u8]) -> Metadatum {
    let number = dataset as u16;
    let known = IptcRecord::from_id(record);
    let info = known.and_then(|r| dictionary::iptc_dataset(number, r));
    let group = match known {
        Some(r) => r.name().to_string(),
        None => format!("0x{record:04x}"),
    };

    let type_id = info.map_or(TypeId::Undefined, |d| d.type_id);
    let value = decode_value(type_id, bytes);

    let mut datum = match info {
        Some(info) => {
            let mut d = Metadatum::new(Family::Iptc, group, info.name, value);
            d.label = info.title.to_string();
            d
        }
        None => Metadatum::new(Family::Iptc, group, format!("0x{number:04x}"), value),
    };
    datum.repeatable = known.is_none_or(|r| dictionary::iptc_repeatable(number, r));
    datum
}

fn decode_value(type_id: TypeId, bytes: &[u8]) -> Value {
    let text = || String::from_utf8_lossy(bytes).trim_end_matches('\0').to_string();
    match type_id {
        TypeId::String => Value::String(vec![text()]),
        TypeId::Date => match Date::parse(&text()) {
            Some(date) => Value::Date(vec![date]),
            None => {
                log::warn!("IPTC: invalid date '{}'", text());
                Value::String(vec![text()])
            }
        },
        TypeId::Time => match Time::parse(&text()) {
            Some(time) => Value::Time(vec![time]),
            None => {
                log::warn!("IPTC: invalid time '{}'", text());
                Value::String(vec![text()])
            }
        },
        TypeId::UnsignedShort if bytes.len() == 2 => {
            Value::UnsignedShort(vec![u16::from_be_bytes([bytes[0], bytes[1]])])
        }
        _ => Value::Undefined(bytes.to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::fixtures::{iim, iptc_keywords, photoshop_irb};

    #[test]
    fn finds_iptc_resource() {
        let payload = iim(&[(2, 5, b"Title")]);
        let mut irb = Vec::new();
        // an unrelated resource with a 3-character name comes first
        irb.extend_from_slice(b"8BIM\x04\x0c\x03abc\0\0\0\x03xyz\0");
        irb.extend_from_slice(&photoshop_irb(&payload));
        assert_eq!(find_iim(&irb), Some(&payload[..]));
        assert_eq!(find_iim(b"8BIM\x04\x0c\0\0\0\0\0\0"), None);
        assert_eq!(find_iim(b"garbage"), None);
    }

    #[test]
    fn repeatable_datasets_are_merged() {
        let data = decode(&iptc_keywords());
        assert_eq!(data.len(), 2);
        let keywords = &data[0];
        assert_eq!(keywords.key(), "Iptc.Application2.Keywords");
        assert!(keywords.repeatable);
        assert_eq!(
            keywords.value,
            Value::String(vec!["sunset".into(), "sea".into(), "boats".into()])
        );
        assert_eq!(data[1].key(), "Iptc.Application2.Caption");
        assert!(!data[1].repeatable);
    }

    #[test]
    fn typed_datasets() {
        let data = decode(&iim(&[
            (1, 0, &[0, 4]),
            (2, 55, b"20240131"),
            (2, 60, b"143000+0100"),
            (2, 62, b"yesterday"),
        ]));
        assert_eq!(data[0].key(), "Iptc.Envelope.ModelVersion");
        assert_eq!(data[0].value, Value::UnsignedShort(vec![4]));
        assert_eq!(
            data[1].value,
            Value::Date(vec![Date { year: 2024, month: 1, day: 31 }])
        );
        assert_eq!(data[2].value.type_id(), TypeId::Time);
        assert_eq!(data[2].value.time_at(0).map(|t| t.tz_hour), Some(1));
        assert_eq!(data[3].value, Value::String(vec!["yesterday".into()]));
    }

    #[test]
    fn unknown_datasets_are_kept() {
        let data = decode(&iim(&[(2, 250, &[1, 2, 3]), (7, 10, b"x")]));
        assert_eq!(data[0].key(), "Iptc.Application2.0x00fa");
        assert_eq!(data[0].value, Value::Undefined(vec![1, 2, 3]));
        assert!(data[0].repeatable);
        assert_eq!(data[1].group, "0x0007");
    }

    #[test]
    fn repeated_binary_datasets_stay_separate() {
        let data = decode(&iim(&[(2, 250, &[1, 2, 3]), (2, 250, &[4, 5]), (2, 250, &[6])]));
        assert_eq!(data.len(), 3);
        assert!(data.iter().all(|d| d.key() == "Iptc.Application2.0x00fa"));
        assert_eq!(data[0].value, Value::Undefined(vec![1, 2, 3]));
        assert_eq!(data[1].value, Value::Undefined(vec![4, 5]));
        assert_eq!(data[2].value, Value::Undefined(vec![6]));
    }

    #[test]
    fn time_with_non_ascii_zone_falls_back_to_text() {
        let data = decode(&iim(&[(2, 60, "143000é0100".as_bytes())]));
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].key(), "Iptc.Application2.TimeCreated");
        assert_eq!(data[0].value, Value::String(vec!["143000é0100".into()]));
    }

    #[test]
    fn truncated_data_keeps_what_was_read() {
        let mut bytes = iim(&[(2, 5, b"Title")]);
        bytes.extend_from_slice(&[0x1C, 2, 120, 0, 50, b'a']);
        let data = decode(&bytes);
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].tag_name, "ObjectName");
    }
}
