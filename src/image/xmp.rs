//! XMP (RDF/XML) decoding.
//!
//! Simple properties come from element text or from `rdf:Description`
//! attributes. `rdf:Bag`, `rdf:Seq` and `rdf:Alt` become the matching array
//! kinds, an `rdf:Alt` whose items all carry `xml:lang` becomes a language
//! alternative. Struct fields are reported as `Parent/ns:field`.

use std::collections::BTreeMap;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::dictionary;
use crate::error::{Error, Result};
use crate::types::Family;
use crate::value::Value;

use super::Metadatum;

const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    Bag,
    Seq,
    Alt,
}

#[derive(Debug)]
enum Frame {
    Other,
    /// `rdf:Description`, or a `parseType="Resource"` property. `path` is
    /// `(group, name)` of the enclosing struct property, if any.
    Description { path: Option<(String, String)> },
    Property {
        group: String,
        name: String,
        text: String,
        container: Option<Container>,
        items: Vec<(Option<String>, String)>,
        is_struct: bool,
    },
    Container,
    Item { lang: Option<String>, text: String },
}

#[derive(Default)]
struct Decoder {
    frames: Vec<Frame>,
    /// Namespace declarations, one scope per open element.
    scopes: Vec<Vec<(String, String)>>,
    out: Vec<Metadatum>,
}

/// Decode an XMP packet.
pub(crate) fn decode(packet: &[u8]) -> Result<Vec<Metadatum>> {
    let mut reader = Reader::from_reader(packet);
    reader.config_mut().trim_text(true);

    let mut decoder = Decoder::default();
    let mut buf = Vec::new();
    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| Error::corrupt("XMP", e.to_string()))?;
        match event {
            Event::Start(ref e) => decoder.start(e)?,
            Event::Empty(ref e) => {
                decoder.start(e)?;
                decoder.end();
            }
            Event::End(_) => decoder.end(),
            Event::Text(ref e) => {
                let text = e.unescape().map_err(|e| Error::corrupt("XMP", e.to_string()))?;
                decoder.text(&text);
            }
            Event::CData(ref e) => decoder.text(&String::from_utf8_lossy(e)),
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    Ok(decoder.out)
}

fn split_qname(qname: &str) -> (&str, &str) {
    qname.split_once(':').unwrap_or(("", qname))
}

impl Decoder {
    fn resolve(&self, prefix: &str) -> Option<&str> {
        self.scopes
            .iter()
            .rev()
            .flat_map(|scope| scope.iter().rev())
            .find(|(p, _)| p == prefix)
            .map(|(_, uri)| uri.as_str())
    }

    /// The dictionary prefix for a document prefix.
    fn group_for(&self, prefix: &str) -> String {
        self.resolve(prefix)
            .and_then(dictionary::prefix_for_uri)
            .unwrap_or(prefix)
            .to_string()
    }

    fn is_rdf(&self, prefix: &str) -> bool {
        self.resolve(prefix) == Some(RDF_NS)
    }

    fn start(&mut self, e: &BytesStart) -> Result<()> {
        let qname = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        let mut scope = Vec::new();
        let mut attrs = Vec::new();
        for attr in e.attributes() {
            let attr = attr.map_err(|e| Error::corrupt("XMP", e.to_string()))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|e| Error::corrupt("XMP", e.to_string()))?
                .into_owned();
            match key.strip_prefix("xmlns:") {
                Some(prefix) => scope.push((prefix.to_string(), value)),
                None if key == "xmlns" => scope.push((String::new(), value)),
                None => attrs.push((key, value)),
            }
        }
        self.scopes.push(scope);

        let (prefix, local) = split_qname(&qname);
        let rdf = self.is_rdf(prefix);
        let frame = match self.frames.last() {
            None | Some(Frame::Other) => {
                if rdf && local == "Description" {
                    self.attribute_properties(&attrs, None);
                    Frame::Description { path: None }
                } else {
                    Frame::Other
                }
            }
            Some(Frame::Description { path }) => {
                let (group, name) = match path.clone() {
                    Some((group, parent)) => (group, format!("{parent}/{qname}")),
                    None => (self.group_for(prefix), local.to_string()),
                };
                self.property(group, name, &attrs)
            }
            Some(Frame::Property { group, name, .. }) => {
                let path = (group.clone(), name.clone());
                let container = match local {
                    "Bag" => Some(Container::Bag),
                    "Seq" => Some(Container::Seq),
                    "Alt" => Some(Container::Alt),
                    _ => None,
                };
                match self.frames.last_mut() {
                    Some(Frame::Property { container: c, .. }) if rdf && container.is_some() => {
                        *c = container;
                        Frame::Container
                    }
                    Some(Frame::Property { is_struct, .. }) if rdf && local == "Description" => {
                        *is_struct = true;
                        Frame::Description { path: Some(path) }
                    }
                    _ => Frame::Other,
                }
            }
            Some(Frame::Container) if rdf && local == "li" => {
                let lang = attrs
                    .iter()
                    .find(|(k, _)| k == "xml:lang")
                    .map(|(_, v)| v.clone());
                Frame::Item {
                    lang,
                    text: String::new(),
                }
            }
            Some(Frame::Container) | Some(Frame::Item { .. }) => Frame::Other,
        };
        self.frames.push(frame);
        Ok(())
    }

    /// A property element below a description.
    fn property(&mut self, group: String, name: String, attrs: &[(String, String)]) -> Frame {
        let attr = |suffix: &str| {
            attrs
                .iter()
                .find(|(k, _)| k.starts_with("rdf:") && k.ends_with(suffix))
                .map(|(_, v)| v.as_str())
        };
        if attr(":parseType") == Some("Resource") {
            return Frame::Description {
                path: Some((group, name)),
            };
        }
        let text = attr(":resource").unwrap_or_default().to_string();

        // struct fields written as attributes
        let fields: Vec<_> = attrs
            .iter()
            .filter(|(k, _)| !k.starts_with("rdf:") && !k.starts_with("xml:"))
            .cloned()
            .collect();
        let is_struct = !fields.is_empty();
        self.attribute_properties(&fields, Some((group.clone(), name.clone())));
        Frame::Property {
            group,
            name,
            text,
            container: None,
            items: Vec::new(),
            is_struct,
        }
    }

    fn text(&mut self, text: &str) {
        for frame in self.frames.iter_mut().rev() {
            match frame {
                Frame::Item { text: buf, .. } | Frame::Property { text: buf, .. } => {
                    if !buf.is_empty() {
                        buf.push(' ');
                    }
                    buf.push_str(text);
                    return;
                }
                Frame::Description { .. } => return,
                _ => {}
            }
        }
    }

    fn end(&mut self) {
        self.scopes.pop();
        match self.frames.pop() {
            Some(Frame::Item { lang, text }) => {
                let property = self
                    .frames
                    .iter_mut()
                    .rev()
                    .find(|f| matches!(f, Frame::Property { .. }));
                if let Some(Frame::Property { items, .. }) = property {
                    items.push((lang, text));
                }
            }
            Some(Frame::Property {
                group,
                name,
                text,
                container,
                items,
                is_struct,
            }) => {
                if is_struct {
                    return;
                }
                let value = match container {
                    None => Value::XmpText(text),
                    Some(Container::Bag) => Value::XmpBag(items.into_iter().map(|(_, t)| t).collect()),
                    Some(Container::Seq) => Value::XmpSeq(items.into_iter().map(|(_, t)| t).collect()),
                    Some(Container::Alt) if !items.is_empty() && items.iter().all(|(l, _)| l.is_some()) => {
                        let map: BTreeMap<_, _> = items
                            .into_iter()
                            .filter_map(|(lang, text)| Some((lang?, text)))
                            .collect();
                        Value::LangAlt(map)
                    }
                    Some(Container::Alt) => Value::XmpAlt(items.into_iter().map(|(_, t)| t).collect()),
                };
                self.emit(group, name, value);
            }
            _ => {}
        }
    }

    /// Attributes of a description (or shorthand struct) are simple text
    /// properties.
    fn attribute_properties(&mut self, attrs: &[(String, String)], path: Option<(String, String)>) {
        for (key, value) in attrs {
            let (prefix, local) = split_qname(key);
            let uri = self.resolve(prefix);
            if uri == Some(RDF_NS) || uri == Some(XML_NS) || prefix == "xml" {
                continue;
            }
            let (group, name) = match &path {
                Some((group, parent)) => (group.clone(), format!("{parent}/{key}")),
                None => (self.group_for(prefix), local.to_string()),
            };
            self.emit(group, name, Value::XmpText(value.clone()));
        }
    }

    fn emit(&mut self, group: String, name: String, value: Value) {
        let label = dictionary::xmp_property(&group, &name)
            .map(|p| p.title.to_string())
            .unwrap_or_default();
        let mut datum = Metadatum::new(Family::Xmp, group, name, value);
        datum.label = label;
        self.out.push(datum);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::fixtures::XMP_PACKET;
    use crate::types::TypeId;

    fn find<'a>(data: &'a [Metadatum], key: &str) -> &'a Metadatum {
        data.iter()
            .find(|d| d.key() == key)
            .unwrap_or_else(|| panic!("{key} not decoded"))
    }

    #[test]
    fn decodes_packet() {
        let data = decode(XMP_PACKET.as_bytes()).unwrap();

        assert_eq!(find(&data, "Xmp.xmp.CreatorTool").value, Value::XmpText("ezif tests".into()));
        assert_eq!(find(&data, "Xmp.xmp.Rating").label, "Rating");

        let title = find(&data, "Xmp.dc.title");
        assert_eq!(title.type_id(), TypeId::LangAlt);
        let Value::LangAlt(map) = &title.value else {
            panic!("title is not a LangAlt");
        };
        assert_eq!(map.get("en").map(String::as_str), Some("Harbour"));
        assert_eq!(map.get("fr").map(String::as_str), Some("Port"));

        assert_eq!(
            find(&data, "Xmp.dc.subject").value,
            Value::XmpBag(vec!["sunset".into(), "sea".into()])
        );
        assert_eq!(find(&data, "Xmp.dc.creator").value, Value::XmpSeq(vec!["Jane Doe".into()]));
        assert_eq!(find(&data, "Xmp.photoshop.City").value, Value::XmpText("Brest & around".into()));
        assert!(data.iter().all(|d| d.family == Family::Xmp));
    }

    #[test]
    fn document_prefix_maps_to_registered_prefix() {
        let packet = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
            <rdf:Description xmlns:d="http://purl.org/dc/elements/1.1/" xmlns:my="urn:example:">
              <d:format>image/jpeg</d:format>
              <my:thing>42</my:thing>
            </rdf:Description></rdf:RDF>"#;
        let data = decode(packet.as_bytes()).unwrap();
        assert_eq!(find(&data, "Xmp.dc.format").label, "Format");
        assert_eq!(find(&data, "Xmp.my.thing").label, "");
    }

    #[test]
    fn structs_are_flattened() {
        let packet = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
            <rdf:Description
                xmlns:xmpMM="http://ns.adobe.com/xap/1.0/mm/"
                xmlns:stRef="http://ns.adobe.com/xap/1.0/sType/ResourceRef#">
              <xmpMM:DerivedFrom rdf:parseType="Resource">
                <stRef:documentID>doc-1</stRef:documentID>
              </xmpMM:DerivedFrom>
              <xmpMM:Ingredient stRef:instanceID="inst-2"/>
              <xmpMM:Pantry>
                <rdf:Description><stRef:filePath>a.psd</stRef:filePath></rdf:Description>
              </xmpMM:Pantry>
            </rdf:Description></rdf:RDF>"#;
        let data = decode(packet.as_bytes()).unwrap();
        let keys: Vec<_> = data.iter().map(Metadatum::key).collect();
        assert_eq!(
            keys,
            [
                "Xmp.xmpMM.DerivedFrom/stRef:documentID",
                "Xmp.xmpMM.Ingredient/stRef:instanceID",
                "Xmp.xmpMM.Pantry/stRef:filePath",
            ]
        );
    }

    #[test]
    fn alt_without_languages() {
        let packet = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
            <rdf:Description xmlns:ex="urn:ex:">
              <ex:choice><rdf:Alt><rdf:li>one</rdf:li><rdf:li>two</rdf:li></rdf:Alt></ex:choice>
            </rdf:Description></rdf:RDF>"#;
        let data = decode(packet.as_bytes()).unwrap();
        assert_eq!(data[0].value, Value::XmpAlt(vec!["one".into(), "two".into()]));
    }

    #[test]
    fn malformed_xml_is_corrupt_metadata() {
        let err = decode(b"<rdf:RDF><rdf:Description></rdf:RDF>").unwrap_err();
        assert_eq!(err.code(), 15);
    }
}
