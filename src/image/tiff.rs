//! TIFF/Exif block decoding on top of `kamadak-exif`.
//!
//! The crate walks IFD0 and its chain (`Image`, `Thumbnail`, `Image2`) along
//! with the Exif, GPS and Interoperability directories. This module maps its
//! fields onto `Family.Group.Tag` datums. Pointer tags are not reported, and
//! the embedded IPTC-NAA and XMP payloads are handed back raw.
//!
//! SubIFDs (`SubImage1`..`SubImage4`) are not followed by the crate. Each one
//! is read by re-rooting a copy of the block at the SubIFD offset, so that
//! it parses as IFD0.

use exif::{Context, Field, Reader};

use crate::dictionary;
use crate::error::{Error, Result};
use crate::types::{Family, TypeId};
use crate::value::Value;

use super::Metadatum;

const TAG_SUB_IFDS: u16 = 0x014a;
const TAG_XML_PACKET: u16 = 0x02bc;
const TAG_IPTC_NAA: u16 = 0x83bb;
const POINTER_TAGS: [u16; 3] = [0x8769, 0x8825, 0xa005];

const IFD_CHAIN: [&str; 3] = ["Image", "Thumbnail", "Image2"];
const SUB_IMAGES: [&str; 4] = ["SubImage1", "SubImage2", "SubImage3", "SubImage4"];

/// What one TIFF block yields.
#[derive(Debug, Default)]
pub(crate) struct TiffBlocks {
    pub exif: Vec<Metadatum>,
    pub iptc: Option<Vec<u8>>,
    pub xmp: Option<Vec<u8>>,
}

/// Decode a TIFF header and every directory reachable from it.
pub(crate) fn decode(data: &[u8]) -> Result<TiffBlocks> {
    let parsed = parse(data.to_vec())?;
    let little_endian = parsed.little_endian();
    let mut out = TiffBlocks::default();
    let mut sub_ifds = Vec::new();

    for field in parsed.fields() {
        let tag = field.tag.number();
        let Some(group) = group_of(field) else {
            log::debug!("Exif: ignoring tag 0x{tag:04x} in IFD {}", field.ifd_num.index());
            continue;
        };
        match (group, tag) {
            (_, t) if POINTER_TAGS.contains(&t) => {}
            ("Image", TAG_SUB_IFDS) => match &field.value {
                exif::Value::Long(offsets) => sub_ifds = offsets.clone(),
                _ => log::warn!("Exif: SubIFDs tag has an unsupported type"),
            },
            ("Image", TAG_IPTC_NAA) => out.iptc = payload(&field.value, little_endian),
            ("Image", TAG_XML_PACKET) => out.xmp = payload(&field.value, little_endian),
            _ => out.exif.extend(datum(field, group, little_endian)),
        }
    }

    for (&offset, group) in sub_ifds.iter().zip(SUB_IMAGES) {
        match parse(rooted_at(data, offset, little_endian)) {
            Ok(sub) => out.exif.extend(
                sub.fields()
                    .filter(|f| matches!(f.tag.context(), Context::Tiff) && f.ifd_num.index() == 0)
                    .filter(|f| !POINTER_TAGS.contains(&f.tag.number()))
                    .filter_map(|f| datum(f, group, little_endian)),
            ),
            Err(e) => log::warn!("Exif: {group} at offset {offset} skipped: {e}"),
        }
    }
    Ok(out)
}

/// Parse with the crate's lenient mode. Entries it could not read are
/// logged and dropped; a block with nothing readable is corrupt.
fn parse(data: Vec<u8>) -> Result<exif::Exif> {
    match Reader::new().continue_on_error(true).read_raw(data) {
        Ok(parsed) => Ok(parsed),
        Err(exif::Error::PartialResult(partial)) => {
            let (parsed, errors) = partial.into_inner();
            if parsed.fields().next().is_none() {
                let reason = errors
                    .first()
                    .map_or_else(|| "no readable entries".to_string(), ToString::to_string);
                return Err(Error::corrupt("Exif", reason));
            }
            for e in &errors {
                log::warn!("Exif: {e}, entry skipped");
            }
            Ok(parsed)
        }
        Err(e) => Err(Error::corrupt("Exif", e.to_string())),
    }
}

/// A copy of `data` whose header points IFD0 at `offset`.
fn rooted_at(data: &[u8], offset: u32, little_endian: bool) -> Vec<u8> {
    let mut rooted = data.to_vec();
    let pointer = if little_endian {
        offset.to_le_bytes()
    } else {
        offset.to_be_bytes()
    };
    if let Some(header) = rooted.get_mut(4..8) {
        header.copy_from_slice(&pointer);
    }
    rooted
}

fn group_of(field: &Field) -> Option<&'static str> {
    match field.tag.context() {
        Context::Tiff => IFD_CHAIN.get(field.ifd_num.index() as usize).copied(),
        Context::Exif => Some("Photo"),
        Context::Gps => Some("GPSInfo"),
        Context::Interop => Some("Iop"),
        _ => None,
    }
}

fn datum(field: &Field, group: &'static str, little_endian: bool) -> Option<Metadatum> {
    let tag = field.tag.number();
    let info = dictionary::exif_tag(group, tag);
    let Some(value) = convert(&field.value) else {
        log::warn!("Exif: {group} tag 0x{tag:04x} has an unsupported type, skipped");
        return None;
    };
    let value = match value {
        Value::Undefined(bytes) if info.is_some_and(|i| i.type_id == TypeId::Comment) => {
            Value::Comment(comment(&bytes, little_endian))
        }
        value => value,
    };

    let datum = match info {
        Some(info) => {
            let mut d = Metadatum::new(Family::Exif, group, info.name, value);
            d.label = info.title.to_string();
            d.print = info.print;
            d
        }
        None => Metadatum::new(Family::Exif, group, format!("0x{tag:04x}"), value),
    };
    Some(datum)
}

/// The crate's values carry the TIFF wire type. Types it does not decode,
/// including the IFD type (13), arrive as `Unknown`.
fn convert(value: &exif::Value) -> Option<Value> {
    use exif::Value as Raw;

    let value = match value {
        Raw::Byte(v) => Value::UnsignedByte(v.clone()),
        Raw::Ascii(v) => {
            let text = v.first().map(|s| String::from_utf8_lossy(s)).unwrap_or_default();
            Value::AsciiString(text.trim_end().to_string())
        }
        Raw::Short(v) => Value::UnsignedShort(v.clone()),
        Raw::Long(v) => Value::UnsignedLong(v.clone()),
        Raw::Rational(v) => Value::UnsignedRational(v.iter().map(|r| (r.num, r.denom)).collect()),
        Raw::SByte(v) => Value::SignedByte(v.clone()),
        Raw::Undefined(v, _) => Value::Undefined(v.clone()),
        Raw::SShort(v) => Value::SignedShort(v.clone()),
        Raw::SLong(v) => Value::SignedLong(v.clone()),
        Raw::SRational(v) => Value::SignedRational(v.iter().map(|r| (r.num, r.denom)).collect()),
        Raw::Float(v) => Value::TiffFloat(v.clone()),
        Raw::Double(v) => Value::TiffDouble(v.clone()),
        Raw::Unknown(..) => return None,
    };
    Some(value)
}

/// Raw bytes of an embedded IPTC or XMP payload. Writers declare these as
/// BYTE, UNDEFINED or LONG.
fn payload(value: &exif::Value, little_endian: bool) -> Option<Vec<u8>> {
    match value {
        exif::Value::Byte(v) | exif::Value::Undefined(v, _) => Some(v.clone()),
        exif::Value::Long(v) => Some(
            v.iter()
                .flat_map(|&n| if little_endian { n.to_le_bytes() } else { n.to_be_bytes() })
                .collect(),
        ),
        exif::Value::Ascii(v) => Some(v.concat()),
        _ => {
            log::warn!("Exif: embedded payload has an unsupported type");
            None
        }
    }
}

/// Exif comment: an 8-byte character code followed by the text.
fn comment(bytes: &[u8], little_endian: bool) -> String {
    let (code, text) = bytes.split_at(bytes.len().min(8));
    let decoded = match code {
        b"UNICODE\0" => {
            let units: Vec<u16> = text
                .chunks_exact(2)
                .map(|c| {
                    if little_endian {
                        u16::from_le_bytes([c[0], c[1]])
                    } else {
                        u16::from_be_bytes([c[0], c[1]])
                    }
                })
                .collect();
            String::from_utf16_lossy(&units)
        }
        b"ASCII\0\0\0" | b"\0\0\0\0\0\0\0\0" => String::from_utf8_lossy(text).into_owned(),
        b"JIS\0\0\0\0\0" => String::from_utf8_lossy(text).into_owned(),
        // no character code, take the whole field
        _ => String::from_utf8_lossy(bytes).into_owned(),
    };
    decoded.trim_end_matches(['\0', ' ']).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::fixtures::{Ifd, TiffBuilder, tiff_le};

    fn find<'a>(blocks: &'a TiffBlocks, key: &str) -> &'a Metadatum {
        blocks
            .exif
            .iter()
            .find(|d| d.key() == key)
            .unwrap_or_else(|| panic!("{key} not decoded"))
    }

    #[test]
    fn decodes_ifd0_and_exif_ifd() {
        let blocks = decode(&tiff_le()).unwrap();
        let keys: Vec<_> = blocks.exif.iter().map(Metadatum::key).collect();
        assert_eq!(
            keys,
            [
                "Exif.Image.Make",
                "Exif.Image.Model",
                "Exif.Image.Orientation",
                "Exif.Image.XResolution",
                "Exif.Photo.FNumber",
            ]
        );
        let make = find(&blocks, "Exif.Image.Make");
        assert_eq!(make.value, Value::AsciiString("Canon".into()));
        assert_eq!(make.label, "Manufacturer");
        assert_eq!(find(&blocks, "Exif.Image.Orientation").interpreted_value(), "right, top");
        assert_eq!(find(&blocks, "Exif.Photo.FNumber").value, Value::UnsignedRational(vec![(3, 2)]));
    }

    #[test]
    fn byte_order_does_not_change_values() {
        let build = |b: TiffBuilder| {
            b.short(Ifd::Image, 0x0112, &[3])
                .srational(Ifd::Photo, 0x9204, &[(-1, 3)])
                .double(Ifd::Image, 0xffee, &[0.1])
                .build()
        };
        let le = decode(&build(TiffBuilder::little_endian())).unwrap();
        let be = decode(&build(TiffBuilder::big_endian())).unwrap();
        let values = |b: &TiffBlocks| b.exif.iter().map(|d| d.value.clone()).collect::<Vec<_>>();
        assert_eq!(values(&le), values(&be));
        assert_eq!(find(&be, "Exif.Photo.ExposureBiasValue").value, Value::SignedRational(vec![(-1, 3)]));
        assert_eq!(find(&be, "Exif.Image.0xffee").value, Value::TiffDouble(vec![0.1]));
    }

    #[test]
    fn thumbnail_and_gps_groups() {
        let tiff = TiffBuilder::little_endian()
            .short(Ifd::Image, 0x0112, &[1])
            .short(Ifd::Thumbnail, 0x0103, &[6])
            .byte(Ifd::Gps, 0x0000, &[2, 3, 0, 0])
            .build();
        let blocks = decode(&tiff).unwrap();
        assert_eq!(find(&blocks, "Exif.Thumbnail.Compression").interpreted_value(), "JPEG (old-style)");
        assert_eq!(find(&blocks, "Exif.GPSInfo.GPSVersionID").value, Value::UnsignedByte(vec![2, 3, 0, 0]));
        assert!(blocks.exif.iter().all(|d| d.tag_name != "GPSTag"));
        assert!(blocks.exif.iter().all(|d| d.tag_name != "0x8825"));
    }

    #[test]
    fn user_comment_is_a_comment() {
        let mut bytes = b"ASCII\0\0\0".to_vec();
        bytes.extend_from_slice(b"Hello world   ");
        let tiff = TiffBuilder::big_endian().undefined(Ifd::Photo, 0x9286, &bytes).build();
        let blocks = decode(&tiff).unwrap();
        let comment = find(&blocks, "Exif.Photo.UserComment");
        assert_eq!(comment.value, Value::Comment("Hello world".into()));
        assert_eq!(comment.type_id(), TypeId::Comment);
    }

    #[test]
    fn unicode_comment_follows_byte_order() {
        assert_eq!(comment(b"UNICODE\0H\0i\0", true), "Hi");
        assert_eq!(comment(b"UNICODE\0\0H\0i", false), "Hi");
        assert_eq!(comment(b"plain", true), "plain");
    }

    #[test]
    fn embedded_payloads_are_extracted() {
        let tiff = TiffBuilder::little_endian()
            .undefined(Ifd::Image, TAG_IPTC_NAA, &[0x1C, 2, 5, 0, 1, b'x'])
            .byte(Ifd::Image, TAG_XML_PACKET, b"<x:xmpmeta/>")
            .build();
        let blocks = decode(&tiff).unwrap();
        assert!(blocks.exif.is_empty());
        assert_eq!(blocks.iptc.as_deref(), Some(&[0x1C, 2, 5, 0, 1, b'x'][..]));
        assert_eq!(blocks.xmp.as_deref(), Some(&b"<x:xmpmeta/>"[..]));
    }

    #[test]
    fn iptc_payload_declared_as_long_keeps_its_bytes() {
        let iim = [0x1C, 2, 5, 0, 2, b'h', b'i', 0];
        let be = TiffBuilder::big_endian()
            .long(Ifd::Image, TAG_IPTC_NAA, &[0x1C02_0500, 0x0268_6900])
            .build();
        assert_eq!(decode(&be).unwrap().iptc.as_deref(), Some(&iim[..]));

        let le = TiffBuilder::little_endian()
            .long(Ifd::Image, TAG_IPTC_NAA, &[0x0005_021C, 0x0069_6802])
            .build();
        assert_eq!(decode(&le).unwrap().iptc.as_deref(), Some(&iim[..]));
    }

    #[test]
    fn bad_entries_are_skipped() {
        let tiff = TiffBuilder::little_endian()
            .raw(Ifd::Image, 0x0100, 99, 1, &[0, 0, 0, 0])
            .raw(Ifd::Image, 0x0111, 4, 1000, &[0xff, 0xff, 0, 0, 0])
            .ascii(Ifd::Image, 0x010f, "Nikon")
            .build();
        let blocks = decode(&tiff).unwrap();
        assert_eq!(blocks.exif.len(), 1);
        assert_eq!(blocks.exif[0].tag_name, "Make");
    }

    #[test]
    fn sub_ifds_are_read_as_sub_images() {
        // IFD0 at 8: Orientation=1 and one SubIFD at 38 holding Orientation=6
        let mut tiff = b"II*\0\x08\0\0\0".to_vec();
        tiff.extend_from_slice(&[2, 0]);
        tiff.extend_from_slice(&[0x12, 0x01, 3, 0, 1, 0, 0, 0, 1, 0, 0, 0]);
        tiff.extend_from_slice(&[0x4a, 0x01, 4, 0, 1, 0, 0, 0, 38, 0, 0, 0]);
        tiff.extend_from_slice(&[0, 0, 0, 0]);
        assert_eq!(tiff.len(), 38);
        tiff.extend_from_slice(&[1, 0]);
        tiff.extend_from_slice(&[0x12, 0x01, 3, 0, 1, 0, 0, 0, 6, 0, 0, 0]);
        tiff.extend_from_slice(&[0, 0, 0, 0]);

        let blocks = decode(&tiff).unwrap();
        let keys: Vec<_> = blocks.exif.iter().map(Metadatum::key).collect();
        assert_eq!(keys, ["Exif.Image.Orientation", "Exif.SubImage1.Orientation"]);
        assert_eq!(find(&blocks, "Exif.SubImage1.Orientation").interpreted_value(), "right, top");
    }

    #[test]
    fn ifd_loops_terminate() {
        // IFD0 with zero entries whose next pointer is itself.
        let tiff = [b'I', b'I', 42, 0, 8, 0, 0, 0, 0, 0, 8, 0, 0, 0];
        match decode(&tiff) {
            Ok(blocks) => assert!(blocks.exif.is_empty()),
            Err(e) => assert_eq!(e.code(), 15),
        }
    }

    #[test]
    fn header_errors() {
        assert_eq!(decode(b"XX*\0").unwrap_err().code(), 15);
        assert_eq!(decode(b"II*\0\xff\0\0\0").unwrap_err().code(), 15);
    }
}
