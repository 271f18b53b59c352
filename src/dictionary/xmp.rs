//! XMP namespace registry and property tables.

use super::{NsInfo, XmpPropertyInfo};
use crate::types::TypeId::{self, *};

const fn p(
    name: &'static str,
    title: &'static str,
    type_id: TypeId,
    desc: &'static str,
) -> XmpPropertyInfo {
    XmpPropertyInfo {
        name,
        title,
        type_id,
        desc,
    }
}

static DC: &[XmpPropertyInfo] = &[
    p("contributor", "Contributor", XmpBag, "Contributors to the resource (other than the authors)."),
    p("coverage", "Coverage", XmpText, "The spatial or temporal topic of the resource."),
    p("creator", "Creator", XmpSeq, "The authors of the resource (listed in order of precedence, if significant)."),
    p("date", "Date", XmpSeq, "Date(s) that something interesting happened to the resource."),
    p("description", "Description", LangAlt, "A textual description of the content of the resource."),
    p("format", "Format", XmpText, "The file format used when saving the resource."),
    p("identifier", "Identifier", XmpText, "Unique identifier of the resource."),
    p("language", "Language", XmpBag, "An unordered array specifying the languages used in the resource."),
    p("publisher", "Publisher", XmpBag, "Publishers."),
    p("relation", "Relation", XmpBag, "Relationships to other documents."),
    p("rights", "Rights", LangAlt, "Informal rights statement, selected by language."),
    p("source", "Source", XmpText, "Unique identifier of the work from which this resource was derived."),
    p("subject", "Subject", XmpBag, "An unordered array of descriptive phrases or keywords."),
    p("title", "Title", LangAlt, "The title of the document, or the name given to the resource."),
    p("type", "Type", XmpBag, "A document type; for example, novel, poem, or working paper."),
];

static XMP_BASIC: &[XmpPropertyInfo] = &[
    p("Advisory", "Advisory", XmpBag, "An unordered array specifying properties that were edited outside the authoring application."),
    p("BaseURL", "Base URL", XmpText, "The base URL for relative URLs in the document content."),
    p("CreateDate", "Create Date", XmpText, "The date and time the resource was originally created."),
    p("CreatorTool", "Creator Tool", XmpText, "The name of the first known tool used to create the resource."),
    p("Identifier", "Identifier", XmpBag, "An unordered array of text strings that unambiguously identify the resource."),
    p("Label", "Label", XmpText, "A word or short phrase that identifies a document as a member of a user-defined collection."),
    p("MetadataDate", "Metadata Date", XmpText, "The date and time that any metadata for this resource was last changed."),
    p("ModifyDate", "Modify Date", XmpText, "The date and time the resource was last modified."),
    p("Nickname", "Nickname", XmpText, "A short informal name for the resource."),
    p("Rating", "Rating", XmpText, "A number that indicates a document's status relative to other documents."),
];

static XMP_RIGHTS: &[XmpPropertyInfo] = &[
    p("Certificate", "Certificate", XmpText, "Online rights management certificate."),
    p("Marked", "Marked", XmpText, "Indicates that this is a rights-managed resource."),
    p("Owner", "Owner", XmpBag, "An unordered array specifying the legal owner(s) of a resource."),
    p("UsageTerms", "Usage Terms", LangAlt, "Text instructions on how a resource can be legally used."),
    p("WebStatement", "Web Statement", XmpText, "The location of a web page describing the owner and/or rights statement for this resource."),
];

static XMP_MM: &[XmpPropertyInfo] = &[
    p("DerivedFrom", "Derived From", XmpText, "A reference to the original document from which this one is derived."),
    p("DocumentID", "Document ID", XmpText, "The common identifier for all versions and renditions of a document."),
    p("History", "History", XmpSeq, "An ordered array of high-level user actions that resulted in this resource."),
    p("InstanceID", "Instance ID", XmpText, "An identifier for a specific incarnation of a document, updated each time a file is saved."),
    p("OriginalDocumentID", "Original Document ID", XmpText, "The common identifier for the original resource from which the current resource is derived."),
    p("RenditionClass", "Rendition Class", XmpText, "The rendition class name for this resource."),
];

static PHOTOSHOP: &[XmpPropertyInfo] = &[
    p("AuthorsPosition", "Authors Position", XmpText, "By-line title."),
    p("CaptionWriter", "Caption Writer", XmpText, "Writer/editor."),
    p("Category", "Category", XmpText, "Category. Limited to 3 7-bit ASCII characters."),
    p("City", "City", XmpText, "City."),
    p("ColorMode", "Color Mode", XmpText, "The colour mode."),
    p("Country", "Country", XmpText, "Country/primary location."),
    p("Credit", "Credit", XmpText, "Credit."),
    p("DateCreated", "Date Created", XmpText, "The date the intellectual content of the document was created."),
    p("Headline", "Headline", XmpText, "Headline."),
    p("ICCProfile", "ICC Profile", XmpText, "The colour profile, such as AppleRGB, AdobeRGB1998."),
    p("Instructions", "Instructions", XmpText, "Special instructions."),
    p("Source", "Source", XmpText, "Source."),
    p("State", "State", XmpText, "Province/state."),
    p("SupplementalCategories", "Supplemental Categories", XmpBag, "Supplemental category."),
    p("TransmissionReference", "Transmission Reference", XmpText, "Original transmission reference."),
    p("Urgency", "Urgency", XmpText, "Urgency. Valid range is 1-8."),
];

static IPTC_CORE: &[XmpPropertyInfo] = &[
    p("CountryCode", "Country Code", XmpText, "Code of the country the content is focussing on."),
    p("CreatorContactInfo", "Creator's Contact Info", XmpText, "The creator's contact information."),
    p("IntellectualGenre", "Intellectual Genre", XmpText, "Describes the nature, intellectual or journalistic characteristic of an item."),
    p("Location", "Location", XmpText, "Name of a location the content is focussing on."),
    p("Scene", "IPTC Scene Code", XmpBag, "Describes the scene of a photo content."),
    p("SubjectCode", "IPTC Subject Code", XmpBag, "Specifies one or more Subjects from the IPTC Subject-NewsCodes taxonomy."),
];

static TIFF: &[XmpPropertyInfo] = &[
    p("Artist", "Artist", XmpText, "TIFF tag 315, 0x13B. Camera owner, photographer or image creator."),
    p("BitsPerSample", "Bits per Sample", XmpSeq, "TIFF tag 258, 0x102. Number of bits per component in each channel."),
    p("Compression", "Compression", XmpText, "TIFF tag 259, 0x103. Compression scheme."),
    p("Copyright", "Copyright", LangAlt, "TIFF tag 33432, 0x8298. Copyright information."),
    p("DateTime", "Date and Time", XmpText, "TIFF tag 306, 0x132 (primary) and Exif tag 37520, 0x9290 (subseconds)."),
    p("ImageDescription", "Image Description", LangAlt, "TIFF tag 270, 0x10E. Description of the image."),
    p("ImageLength", "Image Length", XmpText, "TIFF tag 257, 0x101. Image height in pixels."),
    p("ImageWidth", "Image Width", XmpText, "TIFF tag 256, 0x100. Image width in pixels."),
    p("Make", "Make", XmpText, "TIFF tag 271, 0x10F. Manufacturer of recording equipment."),
    p("Model", "Model", XmpText, "TIFF tag 272, 0x110. Model name or number of equipment."),
    p("Orientation", "Orientation", XmpText, "TIFF tag 274, 0x112. Orientation."),
    p("ResolutionUnit", "Resolution Unit", XmpText, "TIFF tag 296, 0x128. Unit used for XResolution and YResolution."),
    p("Software", "Software", XmpText, "TIFF tag 305, 0x131. Software or firmware used to generate image."),
    p("XResolution", "X Resolution", XmpText, "TIFF tag 282, 0x11A. Horizontal resolution in pixels per unit."),
    p("YResolution", "Y Resolution", XmpText, "TIFF tag 283, 0x11B. Vertical resolution in pixels per unit."),
];

static EXIF: &[XmpPropertyInfo] = &[
    p("ColorSpace", "Color Space", XmpText, "EXIF tag 40961, 0xA001. Color space information."),
    p("DateTimeDigitized", "Date and Time Digitized", XmpText, "EXIF tag 36868, 0x9004 (primary) and 37522, 0x9292 (subseconds)."),
    p("DateTimeOriginal", "Date and Time Original", XmpText, "EXIF tags 36867, 0x9003 (primary) and 37521, 0x9291 (subseconds)."),
    p("ExifVersion", "Exif Version", XmpText, "EXIF tag 36864, 0x9000. EXIF version number."),
    p("ExposureProgram", "Exposure Program", XmpText, "EXIF tag 34850, 0x8822. Class of program used for exposure."),
    p("ExposureTime", "Exposure Time", XmpText, "EXIF tag 33434, 0x829A. Exposure time in seconds."),
    p("FNumber", "F Number", XmpText, "EXIF tag 33437, 0x829D. F number."),
    p("Flash", "Flash", XmpText, "EXIF tag 37385, 0x9209. Strobe light (flash) source data."),
    p("FocalLength", "Focal Length", XmpText, "EXIF tag 37386, 0x920A. Focal length of the lens, in millimeters."),
    p("GPSLatitude", "GPS Latitude", XmpText, "GPS tag 2, 0x02 (position) and 1, 0x01 (North/South). Indicates latitude."),
    p("GPSLongitude", "GPS Longitude", XmpText, "GPS tag 4, 0x04 (position) and 3, 0x03 (East/West). Indicates longitude."),
    p("ISOSpeedRatings", "ISO Speed Ratings", XmpSeq, "EXIF tag 34855, 0x8827. ISO Speed and ISO Latitude of the input device."),
    p("MeteringMode", "Metering Mode", XmpText, "EXIF tag 37383, 0x9207. Metering mode."),
    p("PixelXDimension", "Pixel X Dimension", XmpText, "EXIF tag 40962, 0xA002. Valid image width, in pixels."),
    p("PixelYDimension", "Pixel Y Dimension", XmpText, "EXIF tag 40963, 0xA003. Valid image height, in pixels."),
    p("UserComment", "User Comment", LangAlt, "EXIF tag 37510, 0x9286. Comments from user."),
];

static AUX: &[XmpPropertyInfo] = &[
    p("Firmware", "Firmware", XmpText, "The name of the firmware."),
    p("Lens", "Lens", XmpText, "A description of the lens used to take the photograph."),
    p("LensID", "Lens ID", XmpText, "The lens ID used to take the photograph."),
    p("LensInfo", "Lens Info", XmpText, "The minimum focal length, maximum focal length and apertures of the lens."),
    p("SerialNumber", "Serial Number", XmpText, "The serial number of the camera or camera body used to take the photograph."),
];

static LR: &[XmpPropertyInfo] = &[
    p("hierarchicalSubject", "Hierarchical Subject", XmpBag, "Adobe Lightroom hierarchical keywords."),
    p("privateRTKInfo", "Private RTK Info", XmpText, "Adobe Lightroom private RTK info."),
];

/// Namespaces with a known description. `properties` is `None` for
/// structure namespaces that have no standalone property table.
pub(super) static NAMESPACES: &[NsInfo] = &[
    NsInfo { ns: "http://purl.org/dc/elements/1.1/", prefix: "dc", properties: Some(DC) },
    NsInfo { ns: "http://ns.adobe.com/xap/1.0/", prefix: "xmp", properties: Some(XMP_BASIC) },
    NsInfo { ns: "http://ns.adobe.com/xap/1.0/rights/", prefix: "xmpRights", properties: Some(XMP_RIGHTS) },
    NsInfo { ns: "http://ns.adobe.com/xap/1.0/mm/", prefix: "xmpMM", properties: Some(XMP_MM) },
    NsInfo { ns: "http://ns.adobe.com/photoshop/1.0/", prefix: "photoshop", properties: Some(PHOTOSHOP) },
    NsInfo { ns: "http://iptc.org/std/Iptc4xmpCore/1.0/xmlns/", prefix: "Iptc4xmpCore", properties: Some(IPTC_CORE) },
    NsInfo { ns: "http://ns.adobe.com/tiff/1.0/", prefix: "tiff", properties: Some(TIFF) },
    NsInfo { ns: "http://ns.adobe.com/exif/1.0/", prefix: "exif", properties: Some(EXIF) },
    NsInfo { ns: "http://ns.adobe.com/exif/1.0/aux/", prefix: "aux", properties: Some(AUX) },
    NsInfo { ns: "http://ns.adobe.com/lightroom/1.0/", prefix: "lr", properties: Some(LR) },
    NsInfo { ns: "http://ns.adobe.com/xap/1.0/sType/ResourceRef#", prefix: "stRef", properties: None },
    NsInfo { ns: "http://ns.adobe.com/xap/1.0/sType/ResourceEvent#", prefix: "stEvt", properties: None },
    NsInfo { ns: "http://ns.adobe.com/xap/1.0/sType/Dimensions#", prefix: "stDim", properties: None },
];

/// Prefixes registered with the parser that carry no namespace description.
pub(super) static BARE_PREFIXES: &[(&str, &str)] = &[
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("x", "adobe:ns:meta/"),
    ("xml", "http://www.w3.org/XML/1998/namespace"),
    ("xmpidq", "http://ns.adobe.com/xmp/Identifier/qual/1.0/"),
];
