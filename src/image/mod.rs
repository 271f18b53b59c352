//! Container parsing.
//!
//! [`Image::from_bytes`] sniffs the container, pulls out the embedded Exif,
//! IPTC and XMP blocks and decodes each into a flat list of [`Metadatum`]s.

mod iptc;
mod tiff;
mod xmp;

use img_parts::jpeg::Jpeg;
use img_parts::png::Png;
use img_parts::{Bytes, ImageEXIF};

use crate::dictionary::print;
use crate::error::{Error, Result};
use crate::types::{Family, TypeId};
use crate::value::Value;

const JPEG_EXIF_PREFIX: &[u8] = b"Exif\0\0";
const JPEG_XMP_PREFIX: &[u8] = b"http://ns.adobe.com/xap/1.0/\0";
const JPEG_IPTC_PREFIX: &[u8] = b"Photoshop 3.0\0";
const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";
const PNG_XMP_KEYWORD: &[u8] = b"XML:com.adobe.xmp";

/// Container format, detected from the leading bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Tiff,
    Png,
    Xmp,
}

impl ImageFormat {
    pub fn detect(data: &[u8]) -> Option<Self> {
        if data.starts_with(&[0xFF, 0xD8]) {
            Some(Self::Jpeg)
        } else if data.starts_with(b"II*\0") || data.starts_with(b"MM\0*") {
            Some(Self::Tiff)
        } else if data.starts_with(PNG_SIGNATURE) {
            Some(Self::Png)
        } else if looks_like_xmp(data) {
            Some(Self::Xmp)
        } else {
            None
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Jpeg => "JPEG",
            Self::Tiff => "TIFF",
            Self::Png => "PNG",
            Self::Xmp => "XMP",
        }
    }
}

fn looks_like_xmp(data: &[u8]) -> bool {
    let head = &data[..data.len().min(256)];
    let text = String::from_utf8_lossy(head);
    let text = text.trim_start_matches('\u{feff}').trim_start();
    text.starts_with("<?xpacket") || text.starts_with("<x:xmpmeta") || text.starts_with("<rdf:RDF")
}

/// One decoded metadata entry.
#[derive(Debug, Clone)]
pub struct Metadatum {
    pub family: Family,
    /// Exif group, IPTC record name or XMP namespace prefix.
    pub group: String,
    pub tag_name: String,
    pub label: String,
    pub repeatable: bool,
    pub value: Value,
    pub(crate) print: fn(&Value) -> String,
}

impl Metadatum {
    pub(crate) fn new(family: Family, group: impl Into<String>, tag_name: impl Into<String>, value: Value) -> Self {
        Self {
            family,
            group: group.into(),
            tag_name: tag_name.into(),
            label: String::new(),
            repeatable: false,
            value,
            print: print::value,
        }
    }

    /// `Family.Group.Tag`
    pub fn key(&self) -> String {
        format!("{}.{}.{}", self.family, self.group, self.tag_name)
    }

    pub fn type_id(&self) -> TypeId {
        self.value.type_id()
    }

    /// Human-readable rendering of the whole value.
    pub fn interpreted_value(&self) -> String {
        (self.print)(&self.value)
    }
}

/// The metadata found in one image.
#[derive(Debug, Clone, Default)]
pub struct Image {
    format: Option<ImageFormat>,
    exif: Vec<Metadatum>,
    iptc: Vec<Metadatum>,
    xmp: Vec<Metadatum>,
}

impl Image {
    /// Detect the container and decode every metadata block in it.
    pub fn from_bytes(data: Bytes) -> Result<Self> {
        let format = ImageFormat::detect(&data).ok_or(Error::UnknownImageType)?;
        let mut image = Image {
            format: Some(format),
            ..Default::default()
        };
        match format {
            ImageFormat::Jpeg => image.read_jpeg(data)?,
            ImageFormat::Tiff => image.read_tiff(&data)?,
            ImageFormat::Png => image.read_png(data)?,
            ImageFormat::Xmp => image.read_xmp(&data)?,
        }
        log::debug!(
            "Decoded {} image: {} Exif, {} IPTC, {} XMP",
            format.name(),
            image.exif.len(),
            image.iptc.len(),
            image.xmp.len()
        );
        Ok(image)
    }

    pub fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    pub fn exif_data(&self) -> &[Metadatum] {
        &self.exif
    }

    pub fn iptc_data(&self) -> &[Metadatum] {
        &self.iptc
    }

    pub fn xmp_data(&self) -> &[Metadatum] {
        &self.xmp
    }

    /// Order the IPTC datums by key.
    pub fn sort_iptc(&mut self) {
        self.iptc.sort_by_key(Metadatum::key);
    }

    fn read_jpeg(&mut self, data: Bytes) -> Result<()> {
        let jpeg = Jpeg::from_bytes(data).map_err(|e| Error::NotAnImage {
            format: "JPEG",
            reason: e.to_string(),
        })?;

        for segment in jpeg.segments() {
            let contents = segment.contents();
            match segment.marker() {
                0xE1 if contents.starts_with(JPEG_EXIF_PREFIX) && self.exif.is_empty() => {
                    self.read_tiff(&contents[JPEG_EXIF_PREFIX.len()..])?;
                }
                0xE1 if contents.starts_with(JPEG_XMP_PREFIX) && self.xmp.is_empty() => {
                    self.read_xmp(&contents[JPEG_XMP_PREFIX.len()..])?;
                }
                0xED if contents.starts_with(JPEG_IPTC_PREFIX) && self.iptc.is_empty() => {
                    if let Some(iim) = iptc::find_iim(&contents[JPEG_IPTC_PREFIX.len()..]) {
                        self.iptc = iptc::decode(iim);
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn read_tiff(&mut self, data: &[u8]) -> Result<()> {
        let blocks = tiff::decode(data)?;
        self.exif = blocks.exif;
        if let Some(iim) = blocks.iptc {
            self.iptc = iptc::decode(&iim);
        }
        if let Some(packet) = blocks.xmp {
            self.read_xmp(&packet)?;
        }
        Ok(())
    }

    fn read_png(&mut self, data: Bytes) -> Result<()> {
        let png = Png::from_bytes(data).map_err(|e| Error::NotAnImage {
            format: "PNG",
            reason: e.to_string(),
        })?;

        if let Some(exif) = png.exif() {
            self.read_tiff(&exif)?;
        }
        for chunk in png.chunks() {
            if chunk.kind() != *b"iTXt" {
                continue;
            }
            let contents = chunk.contents();
            if let Some(packet) = itxt_xmp(contents) {
                self.read_xmp(packet)?;
            }
        }
        Ok(())
    }

    fn read_xmp(&mut self, packet: &[u8]) -> Result<()> {
        self.xmp = xmp::decode(packet)?;
        Ok(())
    }
}

/// The text of an uncompressed `XML:com.adobe.xmp` iTXt chunk.
fn itxt_xmp(contents: &[u8]) -> Option<&[u8]> {
    let rest = contents.strip_prefix(PNG_XMP_KEYWORD)?.strip_prefix(b"\0")?;
    // compression flag, compression method
    let ([flag, _method], rest) = rest.split_first_chunk::<2>()?;
    if *flag != 0 {
        log::warn!("Skipping compressed XMP iTXt chunk");
        return None;
    }
    // language tag and translated keyword, both NUL-terminated
    let lang_end = rest.iter().position(|&b| b == 0)?;
    let rest = &rest[lang_end + 1..];
    let keyword_end = rest.iter().position(|&b| b == 0)?;
    Some(&rest[keyword_end + 1..])
}

#[cfg(test)]
pub(crate) mod fixtures;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_containers() {
        assert_eq!(ImageFormat::detect(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::detect(b"II*\0\x08\0\0\0"), Some(ImageFormat::Tiff));
        assert_eq!(ImageFormat::detect(b"MM\0*\0\0\0\x08"), Some(ImageFormat::Tiff));
        assert_eq!(ImageFormat::detect(b"\x89PNG\r\n\x1a\n...."), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::detect(b"  <x:xmpmeta xmlns:x='adobe:ns:meta/'>"), Some(ImageFormat::Xmp));
        assert_eq!(ImageFormat::detect(b"GIF89a"), None);
    }

    #[test]
    fn unknown_bytes_are_rejected() {
        let err = Image::from_bytes(Bytes::from_static(b"plain text")).unwrap_err();
        assert_eq!(err.code(), 11);
    }

    #[test]
    fn jpeg_with_every_block() {
        let jpeg = fixtures::jpeg_with(
            Some(&fixtures::tiff_le()),
            Some(&fixtures::iptc_keywords()),
            Some(fixtures::XMP_PACKET.as_bytes()),
        );
        let image = Image::from_bytes(Bytes::from(jpeg)).unwrap();
        assert_eq!(image.format(), Some(ImageFormat::Jpeg));
        assert!(image.exif_data().iter().any(|d| d.key() == "Exif.Image.Make"));
        assert!(image.iptc_data().iter().any(|d| d.key() == "Iptc.Application2.Keywords"));
        assert!(image.xmp_data().iter().any(|d| d.key() == "Xmp.dc.title"));
    }

    #[test]
    fn png_exif_and_itxt() {
        let png = fixtures::png_with(Some(&fixtures::tiff_le()), Some(fixtures::XMP_PACKET));
        let image = Image::from_bytes(Bytes::from(png)).unwrap();
        assert_eq!(image.format(), Some(ImageFormat::Png));
        assert!(image.exif_data().iter().any(|d| d.key() == "Exif.Image.Orientation"));
        assert!(image.xmp_data().iter().any(|d| d.key() == "Xmp.dc.subject"));
    }

    #[test]
    fn standalone_xmp_packet() {
        let image = Image::from_bytes(Bytes::from_static(fixtures::XMP_PACKET.as_bytes())).unwrap();
        assert_eq!(image.format(), Some(ImageFormat::Xmp));
        assert!(image.exif_data().is_empty());
        assert!(!image.xmp_data().is_empty());
    }

    #[test]
    fn iptc_sorted_by_key() {
        let jpeg = fixtures::jpeg_with(None, Some(&fixtures::iptc_keywords()), None);
        let mut image = Image::from_bytes(Bytes::from(jpeg)).unwrap();
        image.sort_iptc();
        let keys: Vec<_> = image.iptc_data().iter().map(Metadatum::key).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn itxt_parsing() {
        let chunk = b"XML:com.adobe.xmp\0\0\0en\0\0<x/>";
        assert_eq!(itxt_xmp(chunk), Some(&b"<x/>"[..]));
        assert_eq!(itxt_xmp(b"XML:com.adobe.xmp\0\x01\0\0\0<x/>"), None);
        assert_eq!(itxt_xmp(b"Comment\0\0\0\0\0hi"), None);
    }
}
