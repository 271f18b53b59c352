//! IPTC-IIM dataset tables for the envelope (1) and application (2) records.

use super::DataSet;
use crate::types::TypeId::{self, *};

const fn ds(
    number: u16,
    name: &'static str,
    title: &'static str,
    desc: &'static str,
    repeatable: bool,
    min_bytes: u32,
    max_bytes: u32,
    type_id: TypeId,
) -> DataSet {
    DataSet {
        number,
        name,
        title,
        desc,
        repeatable,
        min_bytes,
        max_bytes,
        type_id,
    }
}

pub(super) static ENVELOPE: &[DataSet] = &[
    ds(0, "ModelVersion", "Model Version", "A binary number identifying the version of the Information Interchange Model.", false, 2, 2, UnsignedShort),
    ds(5, "Destination", "Destination", "Routing information to the provider.", true, 0, 1024, String),
    ds(20, "FileFormat", "File Format", "A binary number representing the file format.", false, 2, 2, UnsignedShort),
    ds(22, "FileVersion", "File Version", "A binary number representing the particular version of the File Format.", false, 2, 2, UnsignedShort),
    ds(30, "ServiceId", "Service ID", "Identifies the provider and product.", false, 0, 10, String),
    ds(40, "EnvelopeNumber", "Envelope Number", "The characters form a number that will be unique for the date and the Service Identifier.", false, 8, 8, String),
    ds(50, "ProductId", "Product ID", "Allows a provider to identify subsets of its overall service.", true, 0, 32, String),
    ds(60, "EnvelopePriority", "Envelope Priority", "Specifies the envelope handling priority.", false, 1, 1, String),
    ds(70, "DateSent", "Date Sent", "The year, month and day the service sent the material.", false, 8, 8, Date),
    ds(80, "TimeSent", "Time Sent", "The time the service sent the material.", false, 11, 11, Time),
    ds(90, "CharacterSet", "Character Set", "Control functions used for the announcement, invocation or designation of coded character sets.", false, 0, 32, Undefined),
    ds(100, "UNO", "Unique Name Object", "An eternal, globally unique identification for the objects.", false, 14, 80, String),
    ds(120, "ARMId", "ARM Identifier", "The Abstract Relationship Method identifier.", false, 2, 2, UnsignedShort),
    ds(122, "ARMVersion", "ARM Version", "The particular version of the Abstract Relationship Method.", false, 2, 2, UnsignedShort),
];

pub(super) static APPLICATION2: &[DataSet] = &[
    ds(0, "RecordVersion", "Record Version", "A binary number identifying the version of the Information Interchange Model, Part II.", false, 2, 2, UnsignedShort),
    ds(3, "ObjectType", "Object Type", "The object type.", false, 3, 67, String),
    ds(4, "ObjectAttribute", "Object Attribute", "Defines the nature of the object independent of the subject.", true, 4, 68, String),
    ds(5, "ObjectName", "Object Name", "A shorthand reference for the object; used for the title.", false, 0, 64, String),
    ds(7, "EditStatus", "Edit Status", "Status of the object data, according to the practice of the provider.", false, 0, 64, String),
    ds(8, "EditorialUpdate", "Editorial Update", "Indicates the type of update that this object provides.", false, 2, 2, String),
    ds(10, "Urgency", "Urgency", "Specifies the editorial urgency of content.", false, 1, 1, String),
    ds(12, "Subject", "Subject", "The subject reference.", true, 13, 236, String),
    ds(15, "Category", "Category", "Identifies the subject of the object data in the opinion of the provider.", false, 0, 3, String),
    ds(20, "SuppCategory", "Supplemental Category", "Supplemental categories further refine the subject of an object data.", true, 0, 32, String),
    ds(22, "FixtureId", "Fixture Id", "Identifies object data that recurs often and predictably.", false, 0, 32, String),
    ds(25, "Keywords", "Keywords", "Used to indicate specific information retrieval words.", true, 0, 64, String),
    ds(26, "LocationCode", "Location Code", "Indicates the code of a country/geographical location referenced by the content.", true, 3, 3, String),
    ds(27, "LocationName", "Location Name", "The full name of a country/geographical location referenced by the content.", true, 0, 64, String),
    ds(30, "ReleaseDate", "Release Date", "The earliest date the provider intends the object to be used.", false, 8, 8, Date),
    ds(35, "ReleaseTime", "Release Time", "The earliest time the provider intends the object to be used.", false, 11, 11, Time),
    ds(37, "ExpirationDate", "Expiration Date", "The latest date the provider or owner intends the object data to be used.", false, 8, 8, Date),
    ds(38, "ExpirationTime", "Expiration Time", "The latest time the provider or owner intends the object data to be used.", false, 11, 11, Time),
    ds(40, "SpecialInstructions", "Special Instructions", "Other editorial instructions concerning the use of the object data.", false, 0, 256, String),
    ds(42, "ActionAdvised", "Action Advised", "Indicates the type of action that this object provides to a previous object.", false, 2, 2, String),
    ds(45, "ReferenceService", "Reference Service", "Identifies the Service Identifier of a prior envelope to which the current object refers.", true, 0, 10, String),
    ds(47, "ReferenceDate", "Reference Date", "Identifies the date of a prior envelope to which the current object refers.", true, 8, 8, Date),
    ds(50, "ReferenceNumber", "Reference Number", "Identifies the Envelope Number of a prior envelope to which the current object refers.", true, 8, 8, String),
    ds(55, "DateCreated", "Date Created", "The date the intellectual content of the object data was created.", false, 8, 8, Date),
    ds(60, "TimeCreated", "Time Created", "The time the intellectual content of the object data was created.", false, 11, 11, Time),
    ds(62, "DigitizationDate", "Digitization Date", "The date the digital representation of the object data was created.", false, 8, 8, Date),
    ds(63, "DigitizationTime", "Digitization Time", "The time the digital representation of the object data was created.", false, 11, 11, Time),
    ds(65, "Program", "Program", "Identifies the type of program used to originate the object data.", false, 0, 32, String),
    ds(70, "ProgramVersion", "Program Version", "Used to identify the version of the program mentioned in Program.", false, 0, 10, String),
    ds(75, "ObjectCycle", "Object Cycle", "Used to identify the editorial cycle of object data.", false, 1, 1, String),
    ds(80, "Byline", "By-line", "Contains name of the creator of the object data.", true, 0, 32, String),
    ds(85, "BylineTitle", "By-line Title", "A by-line title is the title of the creator or creators of the object data.", true, 0, 32, String),
    ds(90, "City", "City", "Identifies city of object data origin.", false, 0, 32, String),
    ds(92, "SubLocation", "Sub Location", "The location within a city from which the object data originates.", false, 0, 32, String),
    ds(95, "ProvinceState", "Province/State", "Identifies Province/State of origin of the object data.", false, 0, 32, String),
    ds(100, "CountryCode", "Country Code", "The code of the country/primary location where the object data was created.", false, 3, 3, String),
    ds(101, "CountryName", "Country Name", "Provides full name of the country/primary location where the object data was created.", false, 0, 64, String),
    ds(103, "TransmissionReference", "Transmission Reference", "A code representing the location of original transmission.", false, 0, 32, String),
    ds(105, "Headline", "Headline", "A publishable entry providing a synopsis of the contents of the object data.", false, 0, 256, String),
    ds(110, "Credit", "Credit", "Identifies the provider of the object data, not necessarily the owner/creator.", false, 0, 32, String),
    ds(115, "Source", "Source", "The name of a person or party who has a role in the content supply chain.", false, 0, 32, String),
    ds(116, "Copyright", "Copyright", "Contains any necessary copyright notice.", false, 0, 128, String),
    ds(118, "Contact", "Contact", "Identifies the person or organisation which can provide further background information.", true, 0, 128, String),
    ds(120, "Caption", "Caption", "A textual description of the object data.", false, 0, 2000, String),
    ds(122, "Writer", "Writer", "Identification of the name of the person involved in the writing of the caption.", true, 0, 32, String),
    ds(125, "RasterizedCaption", "Rasterized Caption", "Image width 460 pixels and image height 128 pixels, 1 bit per pixel.", false, 7360, 7360, Undefined),
    ds(130, "ImageType", "Image Type", "Indicates the color components of an image.", false, 2, 2, String),
    ds(131, "ImageOrientation", "Image Orientation", "Indicates the layout of an image.", false, 1, 1, String),
    ds(135, "LanguageId", "Language Identifier", "Describes the major national language of the object.", false, 2, 3, String),
    ds(150, "AudioType", "Audio Type", "Indicates the type of an audio content.", false, 2, 2, String),
    ds(151, "AudioRate", "Audio Rate", "Indicates the sampling rate in Hertz of an audio content.", false, 6, 6, String),
    ds(152, "AudioResolution", "Audio Resolution", "Indicates the sampling resolution of an audio content.", false, 2, 2, String),
    ds(153, "AudioDuration", "Audio Duration", "Indicates the duration of an audio content.", false, 6, 6, String),
    ds(154, "AudioOutcue", "Audio Outcue", "Identifies the content of the end of an audio object data.", false, 0, 64, String),
    ds(200, "PreviewFormat", "Preview Format", "A binary number representing the file format of the object data preview.", false, 2, 2, UnsignedShort),
    ds(201, "PreviewVersion", "Preview Version", "A binary number representing the particular version of the object data preview file format.", false, 2, 2, UnsignedShort),
    ds(202, "Preview", "Preview Data", "Binary image preview data.", false, 0, 256000, Undefined),
];
