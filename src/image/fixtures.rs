//! Synthetic images for tests.
//!
//! Shared with the integration tests through `#[path]`, so this file only
//! depends on external crates.
#![allow(dead_code)]

use std::io::Cursor;

use img_parts::jpeg::{Jpeg, JpegSegment};
use img_parts::png::{Png, PngChunk};
use img_parts::{Bytes, ImageEXIF};

/// Directory an entry is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ifd {
    Image,
    Thumbnail,
    Photo,
    Gps,
}

#[derive(Debug, Clone)]
struct Entry {
    tag: u16,
    field_type: u16,
    count: u32,
    data: Vec<u8>,
}

/// Builds a classic TIFF/Exif block with up to four directories.
#[derive(Debug, Clone)]
pub struct TiffBuilder {
    big_endian: bool,
    ifds: [Vec<Entry>; 4],
}

impl TiffBuilder {
    pub fn little_endian() -> Self {
        Self {
            big_endian: false,
            ifds: Default::default(),
        }
    }

    pub fn big_endian() -> Self {
        Self {
            big_endian: true,
            ifds: Default::default(),
        }
    }

    fn u16b(&self, v: u16) -> [u8; 2] {
        if self.big_endian { v.to_be_bytes() } else { v.to_le_bytes() }
    }

    fn u32b(&self, v: u32) -> [u8; 4] {
        if self.big_endian { v.to_be_bytes() } else { v.to_le_bytes() }
    }

    fn push(mut self, ifd: Ifd, tag: u16, field_type: u16, count: u32, data: Vec<u8>) -> Self {
        let slot = match ifd {
            Ifd::Image => 0,
            Ifd::Thumbnail => 1,
            Ifd::Photo => 2,
            Ifd::Gps => 3,
        };
        self.ifds[slot].push(Entry {
            tag,
            field_type,
            count,
            data,
        });
        self
    }

    pub fn ascii(self, ifd: Ifd, tag: u16, text: &str) -> Self {
        let mut data = text.as_bytes().to_vec();
        data.push(0);
        let count = data.len() as u32;
        self.push(ifd, tag, 2, count, data)
    }

    pub fn byte(self, ifd: Ifd, tag: u16, values: &[u8]) -> Self {
        self.push(ifd, tag, 1, values.len() as u32, values.to_vec())
    }

    pub fn short(self, ifd: Ifd, tag: u16, values: &[u16]) -> Self {
        let data = values.iter().flat_map(|&v| self.u16b(v)).collect();
        self.push(ifd, tag, 3, values.len() as u32, data)
    }

    pub fn long(self, ifd: Ifd, tag: u16, values: &[u32]) -> Self {
        let data = values.iter().flat_map(|&v| self.u32b(v)).collect();
        self.push(ifd, tag, 4, values.len() as u32, data)
    }

    pub fn rational(self, ifd: Ifd, tag: u16, values: &[(u32, u32)]) -> Self {
        let data = values
            .iter()
            .flat_map(|&(n, d)| self.u32b(n).into_iter().chain(self.u32b(d)))
            .collect();
        self.push(ifd, tag, 5, values.len() as u32, data)
    }

    pub fn srational(self, ifd: Ifd, tag: u16, values: &[(i32, i32)]) -> Self {
        let data = values
            .iter()
            .flat_map(|&(n, d)| self.u32b(n as u32).into_iter().chain(self.u32b(d as u32)))
            .collect();
        self.push(ifd, tag, 10, values.len() as u32, data)
    }

    pub fn undefined(self, ifd: Ifd, tag: u16, bytes: &[u8]) -> Self {
        self.push(ifd, tag, 7, bytes.len() as u32, bytes.to_vec())
    }

    pub fn double(self, ifd: Ifd, tag: u16, values: &[f64]) -> Self {
        let data = values
            .iter()
            .flat_map(|&v| {
                let bits = v.to_bits();
                if self.big_endian { bits.to_be_bytes() } else { bits.to_le_bytes() }
            })
            .collect();
        self.push(ifd, tag, 12, values.len() as u32, data)
    }

    /// Entry with an arbitrary raw field type, for malformed input.
    pub fn raw(self, ifd: Ifd, tag: u16, field_type: u16, count: u32, data: &[u8]) -> Self {
        self.push(ifd, tag, field_type, count, data.to_vec())
    }

    /// Writes one IFD at the end of `out`. Returns the positions of each
    /// entry's value field and of the next-IFD pointer.
    fn write_ifd(&self, out: &mut Vec<u8>, entries: &[Entry]) -> (Vec<usize>, usize) {
        let start = out.len();
        let data_start = start + 2 + entries.len() * 12 + 4;
        let mut data = Vec::new();
        let mut value_fields = Vec::with_capacity(entries.len());

        out.extend_from_slice(&self.u16b(entries.len() as u16));
        for e in entries {
            out.extend_from_slice(&self.u16b(e.tag));
            out.extend_from_slice(&self.u16b(e.field_type));
            out.extend_from_slice(&self.u32b(e.count));
            value_fields.push(out.len());
            if e.data.len() <= 4 {
                let mut inline = e.data.clone();
                inline.resize(4, 0);
                out.extend_from_slice(&inline);
            } else {
                out.extend_from_slice(&self.u32b((data_start + data.len()) as u32));
                data.extend_from_slice(&e.data);
                if data.len() % 2 == 1 {
                    data.push(0);
                }
            }
        }
        let next = out.len();
        out.extend_from_slice(&[0; 4]);
        out.extend_from_slice(&data);
        (value_fields, next)
    }

    fn patch(&self, out: &mut [u8], at: usize, value: usize) {
        out[at..at + 4].copy_from_slice(&self.u32b(value as u32));
    }

    pub fn build(&self) -> Vec<u8> {
        let [image, thumbnail, photo, gps] = &self.ifds;

        let mut out = Vec::new();
        out.extend_from_slice(if self.big_endian { b"MM\0*" } else { b"II*\0" });
        out.extend_from_slice(&self.u32b(8));

        let mut ifd0 = image.clone();
        for (sub, tag) in [(photo, 0x8769), (gps, 0x8825)] {
            if !sub.is_empty() {
                ifd0.push(Entry {
                    tag,
                    field_type: 4,
                    count: 1,
                    data: vec![0; 4],
                });
            }
        }
        ifd0.sort_by_key(|e| e.tag);
        let (fields, next) = self.write_ifd(&mut out, &ifd0);

        for (sub, tag) in [(photo, 0x8769), (gps, 0x8825)] {
            if sub.is_empty() {
                continue;
            }
            let offset = out.len();
            self.write_ifd(&mut out, sub);
            if let Some(i) = ifd0.iter().position(|e| e.tag == tag) {
                self.patch(&mut out, fields[i], offset);
            }
        }

        if !thumbnail.is_empty() {
            let offset = out.len();
            self.write_ifd(&mut out, thumbnail);
            self.patch(&mut out, next, offset);
        }
        out
    }
}

/// Four Image tags and one Photo tag (FNumber = 3/2).
pub fn tiff_le() -> Vec<u8> {
    TiffBuilder::little_endian()
        .ascii(Ifd::Image, 0x010f, "Canon")
        .ascii(Ifd::Image, 0x0110, "Canon EOS 5D")
        .short(Ifd::Image, 0x0112, &[6])
        .rational(Ifd::Image, 0x011a, &[(72, 1)])
        .rational(Ifd::Photo, 0x829d, &[(3, 2)])
        .build()
}

/// IIM datasets as `(record, dataset, data)`.
pub fn iim(datasets: &[(u8, u8, &[u8])]) -> Vec<u8> {
    let mut out = Vec::new();
    for &(record, dataset, data) in datasets {
        out.extend_from_slice(&[0x1C, record, dataset]);
        out.extend_from_slice(&(data.len() as u16).to_be_bytes());
        out.extend_from_slice(data);
    }
    out
}

/// Three Keywords occurrences and a Caption.
pub fn iptc_keywords() -> Vec<u8> {
    iim(&[
        (2, 25, b"sunset"),
        (2, 120, b"Evening at the harbour"),
        (2, 25, b"sea"),
        (2, 25, b"boats"),
    ])
}

/// Photoshop image resource block holding one IPTC-NAA resource.
pub fn photoshop_irb(iim: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(b"8BIM");
    out.extend_from_slice(&0x0404u16.to_be_bytes());
    // empty pascal name, padded to even length
    out.extend_from_slice(&[0, 0]);
    out.extend_from_slice(&(iim.len() as u32).to_be_bytes());
    out.extend_from_slice(iim);
    if iim.len() % 2 == 1 {
        out.push(0);
    }
    out
}

pub const XMP_PACKET: &str = r#"<?xpacket begin="" id="W5M0MpCehiHzreSzNTczkc9d"?>
<x:xmpmeta xmlns:x="adobe:ns:meta/">
 <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
  <rdf:Description rdf:about=""
    xmlns:dc="http://purl.org/dc/elements/1.1/"
    xmlns:xmp="http://ns.adobe.com/xap/1.0/"
    xmlns:photoshop="http://ns.adobe.com/photoshop/1.0/"
    xmp:CreatorTool="ezif tests"
    xmp:Rating="4">
   <dc:title>
    <rdf:Alt>
     <rdf:li xml:lang="en">Harbour</rdf:li>
     <rdf:li xml:lang="fr">Port</rdf:li>
    </rdf:Alt>
   </dc:title>
   <dc:subject>
    <rdf:Bag>
     <rdf:li>sunset</rdf:li>
     <rdf:li>sea</rdf:li>
    </rdf:Bag>
   </dc:subject>
   <dc:creator>
    <rdf:Seq>
     <rdf:li>Jane Doe</rdf:li>
    </rdf:Seq>
   </dc:creator>
   <photoshop:City>Brest &amp; around</photoshop:City>
  </rdf:Description>
 </rdf:RDF>
</x:xmpmeta>
<?xpacket end="w"?>"#;

fn encoded(format: ::image::ImageFormat) -> Vec<u8> {
    let pixels = ::image::RgbImage::new(2, 2);
    let mut buf = Vec::new();
    pixels
        .write_to(&mut Cursor::new(&mut buf), format)
        .expect("encode test image");
    buf
}

/// A real JPEG carrying the given Exif (TIFF bytes), IPTC (IIM bytes) and
/// XMP packet.
pub fn jpeg_with(exif: Option<&[u8]>, iim: Option<&[u8]>, xmp: Option<&[u8]>) -> Vec<u8> {
    let mut jpeg = Jpeg::from_bytes(Bytes::from(encoded(::image::ImageFormat::Jpeg)))
        .expect("parse test JPEG");

    if let Some(tiff) = exif {
        jpeg.set_exif(Some(Bytes::copy_from_slice(tiff)));
    }
    if let Some(packet) = xmp {
        let mut contents = b"http://ns.adobe.com/xap/1.0/\0".to_vec();
        contents.extend_from_slice(packet);
        jpeg.segments_mut()
            .insert(1, JpegSegment::new_with_contents(0xE1, Bytes::from(contents)));
    }
    if let Some(iim) = iim {
        let mut contents = b"Photoshop 3.0\0".to_vec();
        contents.extend_from_slice(&photoshop_irb(iim));
        jpeg.segments_mut()
            .insert(1, JpegSegment::new_with_contents(0xED, Bytes::from(contents)));
    }
    jpeg.encoder().bytes().to_vec()
}

/// A real PNG carrying an eXIf chunk and an uncompressed XMP iTXt chunk.
pub fn png_with(exif: Option<&[u8]>, xmp: Option<&str>) -> Vec<u8> {
    let mut png = Png::from_bytes(Bytes::from(encoded(::image::ImageFormat::Png)))
        .expect("parse test PNG");

    if let Some(tiff) = exif {
        png.set_exif(Some(Bytes::copy_from_slice(tiff)));
    }
    if let Some(packet) = xmp {
        let mut contents = b"XML:com.adobe.xmp\0\0\0\0\0".to_vec();
        contents.extend_from_slice(packet.as_bytes());
        let chunk = PngChunk::new(*b"iTXt", Bytes::from(contents));
        // after IHDR
        png.chunks_mut().insert(1, chunk);
    }
    png.encoder().bytes().to_vec()
}
