//! Exif tag tables.
//!
//! One table per IFD kind. Groups that describe another instance of the same
//! IFD kind (IFD1, IFD2, SubIFDs) point at the same table; see
//! [`GROUPS`](super::GROUPS).

use super::print;
use super::TagInfo;
use crate::types::TypeId::*;

const fn t(
    tag: u16,
    name: &'static str,
    title: &'static str,
    desc: &'static str,
    type_id: crate::types::TypeId,
    count: i32,
) -> TagInfo {
    TagInfo::new(tag, name, title, desc, type_id, count)
}

pub(super) static IFD_TAGS: &[TagInfo] = &[
    t(0x00fe, "NewSubfileType", "New Subfile Type", "A general indication of the kind of data contained in this subfile.", UnsignedLong, 1),
    t(0x0100, "ImageWidth", "Image Width", "The number of columns of image data, equal to the number of pixels per row.", UnsignedLong, 1),
    t(0x0101, "ImageLength", "Image Length", "The number of rows of image data.", UnsignedLong, 1),
    t(0x0102, "BitsPerSample", "Bits per Sample", "The number of bits per image component.", UnsignedShort, 3),
    t(0x0103, "Compression", "Compression", "The compression scheme used for the image data.", UnsignedShort, 1).with_print(print::compression),
    t(0x0106, "PhotometricInterpretation", "Photometric Interpretation", "The pixel composition.", UnsignedShort, 1),
    t(0x010d, "DocumentName", "Document Name", "The name of the document from which this image was scanned.", AsciiString, -1),
    t(0x010e, "ImageDescription", "Image Description", "A character string giving the title of the image.", AsciiString, -1),
    t(0x010f, "Make", "Manufacturer", "The manufacturer of the recording equipment.", AsciiString, -1),
    t(0x0110, "Model", "Model", "The model name or model number of the equipment.", AsciiString, -1),
    t(0x0111, "StripOffsets", "Strip Offsets", "For each strip, the byte offset of that strip.", UnsignedLong, -1),
    t(0x0112, "Orientation", "Orientation", "The image orientation viewed in terms of rows and columns.", UnsignedShort, 1).with_print(print::orientation),
    t(0x0115, "SamplesPerPixel", "Samples per Pixel", "The number of components per pixel.", UnsignedShort, 1),
    t(0x0116, "RowsPerStrip", "Rows per Strip", "The number of rows per strip.", UnsignedLong, 1),
    t(0x0117, "StripByteCounts", "Strip Byte Count", "The total number of bytes in each strip.", UnsignedLong, -1),
    t(0x011a, "XResolution", "X-Resolution", "The number of pixels per ResolutionUnit in the ImageWidth direction.", UnsignedRational, 1),
    t(0x011b, "YResolution", "Y-Resolution", "The number of pixels per ResolutionUnit in the ImageLength direction.", UnsignedRational, 1),
    t(0x011c, "PlanarConfiguration", "Planar Configuration", "Indicates whether pixel components are recorded in chunky or planar format.", UnsignedShort, 1),
    t(0x0128, "ResolutionUnit", "Resolution Unit", "The unit for measuring XResolution and YResolution.", UnsignedShort, 1).with_print(print::resolution_unit),
    t(0x012d, "TransferFunction", "Transfer Function", "A transfer function for the image, described in tabular style.", UnsignedShort, 768),
    t(0x0131, "Software", "Software", "The name and version of the software or firmware used to generate the image.", AsciiString, -1),
    t(0x0132, "DateTime", "Date and Time", "The date and time of image creation.", AsciiString, 20),
    t(0x013b, "Artist", "Artist", "The name of the camera owner, photographer or image creator.", AsciiString, -1),
    t(0x013c, "HostComputer", "Host Computer", "The computer and/or operating system in use at the time of image creation.", AsciiString, -1),
    t(0x013e, "WhitePoint", "White Point", "The chromaticity of the white point of the image.", UnsignedRational, 2),
    t(0x013f, "PrimaryChromaticities", "Primary Chromaticities", "The chromaticity of the three primary colors of the image.", UnsignedRational, 6),
    t(0x0142, "TileWidth", "Tile Width", "The tile width in pixels.", UnsignedLong, 1),
    t(0x0143, "TileLength", "Tile Length", "The tile length (height) in pixels.", UnsignedLong, 1),
    t(0x0144, "TileOffsets", "Tile Offsets", "For each tile, the byte offset of that tile.", UnsignedLong, -1),
    t(0x0145, "TileByteCounts", "Tile Byte Counts", "For each tile, the number of (compressed) bytes in that tile.", UnsignedLong, -1),
    t(0x014a, "SubIFDs", "SubIFD Offsets", "Offsets to child IFDs.", UnsignedLong, -1),
    t(0x0201, "JPEGInterchangeFormat", "JPEG Interchange Format", "The offset to the start byte of compressed JPEG data.", UnsignedLong, 1),
    t(0x0202, "JPEGInterchangeFormatLength", "JPEG Interchange Format Length", "The number of bytes of JPEG compressed thumbnail data.", UnsignedLong, 1),
    t(0x0211, "YCbCrCoefficients", "YCbCr Coefficients", "The matrix coefficients for transformation from RGB to YCbCr image data.", UnsignedRational, 3),
    t(0x0212, "YCbCrSubSampling", "YCbCr Sub-Sampling", "The sampling ratio of chrominance components in relation to the luminance component.", UnsignedShort, 2),
    t(0x0213, "YCbCrPositioning", "YCbCr Positioning", "The position of chrominance components in relation to the luminance component.", UnsignedShort, 1).with_print(print::ycbcr_positioning),
    t(0x0214, "ReferenceBlackWhite", "Reference Black/White", "The reference black point value and reference white point value.", UnsignedRational, 6),
    t(0x02bc, "XMLPacket", "XML Packet", "XMP metadata packet.", UnsignedByte, -1),
    t(0x4746, "Rating", "Windows Rating", "Rating tag used by Windows.", UnsignedShort, -1),
    t(0x8298, "Copyright", "Copyright", "Copyright information.", AsciiString, -1),
    t(0x83bb, "IPTCNAA", "IPTC/NAA", "An IPTC/NAA record.", UnsignedLong, -1),
    t(0x8769, "ExifTag", "Exif IFD Pointer", "A pointer to the Exif IFD.", UnsignedLong, 1),
    t(0x8825, "GPSTag", "GPS Info IFD Pointer", "A pointer to the GPS Info IFD.", UnsignedLong, 1),
    t(0x9c9b, "XPTitle", "Windows Title", "Title tag used by Windows, encoded in UCS2.", UnsignedByte, -1),
];

pub(super) static PHOTO_TAGS: &[TagInfo] = &[
    t(0x829a, "ExposureTime", "Exposure Time", "Exposure time, given in seconds.", UnsignedRational, 1).with_print(print::exposure_time),
    t(0x829d, "FNumber", "FNumber", "The F number.", UnsignedRational, 1).with_print(print::f_number),
    t(0x8822, "ExposureProgram", "Exposure Program", "The class of the program used by the camera to set exposure.", UnsignedShort, 1).with_print(print::exposure_program),
    t(0x8824, "SpectralSensitivity", "Spectral Sensitivity", "The spectral sensitivity of each channel of the camera used.", AsciiString, -1),
    t(0x8827, "ISOSpeedRatings", "ISO Speed Ratings", "The ISO speed and ISO latitude of the camera or input device.", UnsignedShort, -1),
    t(0x8830, "SensitivityType", "Sensitivity Type", "Which of the ISO 12232 parameters is recorded.", UnsignedShort, 1),
    t(0x9000, "ExifVersion", "Exif Version", "The version of the Exif standard supported.", Undefined, 4).with_print(print::version),
    t(0x9003, "DateTimeOriginal", "Date and Time (original)", "The date and time when the original image data was generated.", AsciiString, 20),
    t(0x9004, "DateTimeDigitized", "Date and Time (digitized)", "The date and time when the image was stored as digital data.", AsciiString, 20),
    t(0x9010, "OffsetTime", "Offset Time", "Time difference from UTC of DateTime.", AsciiString, 7),
    t(0x9011, "OffsetTimeOriginal", "Offset Time Original", "Time difference from UTC of DateTimeOriginal.", AsciiString, 7),
    t(0x9012, "OffsetTimeDigitized", "Offset Time Digitized", "Time difference from UTC of DateTimeDigitized.", AsciiString, 7),
    t(0x9101, "ComponentsConfiguration", "Components Configuration", "Information specific to compressed data.", Undefined, 4),
    t(0x9102, "CompressedBitsPerPixel", "Compressed Bits per Pixel", "The compression mode used for a compressed image.", UnsignedRational, 1),
    t(0x9201, "ShutterSpeedValue", "Shutter speed", "Shutter speed in APEX units.", SignedRational, 1),
    t(0x9202, "ApertureValue", "Aperture", "The lens aperture in APEX units.", UnsignedRational, 1),
    t(0x9203, "BrightnessValue", "Brightness", "The value of brightness in APEX units.", SignedRational, 1),
    t(0x9204, "ExposureBiasValue", "Exposure Bias", "The exposure bias in APEX units.", SignedRational, 1).with_print(print::exposure_bias),
    t(0x9205, "MaxApertureValue", "Max Aperture Value", "The smallest F number of the lens.", UnsignedRational, 1),
    t(0x9206, "SubjectDistance", "Subject Distance", "The distance to the subject, given in meters.", UnsignedRational, 1),
    t(0x9207, "MeteringMode", "Metering Mode", "The metering mode.", UnsignedShort, 1).with_print(print::metering_mode),
    t(0x9208, "LightSource", "Light Source", "The kind of light source.", UnsignedShort, 1),
    t(0x9209, "Flash", "Flash", "The status of flash when the image was shot.", UnsignedShort, 1).with_print(print::flash),
    t(0x920a, "FocalLength", "Focal Length", "The actual focal length of the lens, in mm.", UnsignedRational, 1).with_print(print::focal_length),
    t(0x9214, "SubjectArea", "Subject Area", "The location and area of the main subject in the overall scene.", UnsignedShort, -1),
    t(0x927c, "MakerNote", "Maker Note", "A tag for manufacturers of Exif writers to record any desired information.", Undefined, -1),
    t(0x9286, "UserComment", "User Comment", "A tag for Exif users to write keywords or comments on the image.", Comment, -1),
    t(0x9290, "SubSecTime", "Sub-seconds Time", "Fractions of seconds for the DateTime tag.", AsciiString, -1),
    t(0x9291, "SubSecTimeOriginal", "Sub-seconds Time Original", "Fractions of seconds for the DateTimeOriginal tag.", AsciiString, -1),
    t(0x9292, "SubSecTimeDigitized", "Sub-seconds Time Digitized", "Fractions of seconds for the DateTimeDigitized tag.", AsciiString, -1),
    t(0xa000, "FlashpixVersion", "FlashPix Version", "The FlashPix format version supported by a FPXR file.", Undefined, 4).with_print(print::version),
    t(0xa001, "ColorSpace", "Color Space", "The color space information tag.", UnsignedShort, 1).with_print(print::color_space),
    t(0xa002, "PixelXDimension", "Pixel X Dimension", "The valid width of the meaningful image.", UnsignedLong, 1),
    t(0xa003, "PixelYDimension", "Pixel Y Dimension", "The valid height of the meaningful image.", UnsignedLong, 1),
    t(0xa004, "RelatedSoundFile", "Related Sound File", "The name of an audio file related to the image data.", AsciiString, 13),
    t(0xa005, "InteroperabilityTag", "Interoperability IFD Pointer", "A pointer to the Interoperability IFD.", UnsignedLong, 1),
    t(0xa20e, "FocalPlaneXResolution", "Focal Plane X-Resolution", "The number of pixels in the image width direction per FocalPlaneResolutionUnit.", UnsignedRational, 1),
    t(0xa20f, "FocalPlaneYResolution", "Focal Plane Y-Resolution", "The number of pixels in the image height direction per FocalPlaneResolutionUnit.", UnsignedRational, 1),
    t(0xa210, "FocalPlaneResolutionUnit", "Focal Plane Resolution Unit", "The unit for measuring the focal plane resolution.", UnsignedShort, 1).with_print(print::resolution_unit),
    t(0xa217, "SensingMethod", "Sensing Method", "The image sensor type on the camera or input device.", UnsignedShort, 1),
    t(0xa300, "FileSource", "File Source", "The image source.", Undefined, 1),
    t(0xa301, "SceneType", "Scene Type", "The type of scene.", Undefined, 1),
    t(0xa401, "CustomRendered", "Custom Rendered", "The use of special processing on image data.", UnsignedShort, 1),
    t(0xa402, "ExposureMode", "Exposure Mode", "The exposure mode set when the image was shot.", UnsignedShort, 1),
    t(0xa403, "WhiteBalance", "White Balance", "The white balance mode set when the image was shot.", UnsignedShort, 1),
    t(0xa404, "DigitalZoomRatio", "Digital Zoom Ratio", "The digital zoom ratio when the image was shot.", UnsignedRational, 1),
    t(0xa405, "FocalLengthIn35mmFilm", "Focal Length In 35mm Film", "The equivalent focal length assuming a 35mm film camera, in mm.", UnsignedShort, 1).with_print(print::focal_length),
    t(0xa406, "SceneCaptureType", "Scene Capture Type", "The type of scene that was shot.", UnsignedShort, 1),
    t(0xa408, "Contrast", "Contrast", "The direction of contrast processing applied by the camera.", UnsignedShort, 1),
    t(0xa409, "Saturation", "Saturation", "The direction of saturation processing applied by the camera.", UnsignedShort, 1),
    t(0xa40a, "Sharpness", "Sharpness", "The direction of sharpness processing applied by the camera.", UnsignedShort, 1),
    t(0xa420, "ImageUniqueID", "Image Unique ID", "An identifier assigned uniquely to each image.", AsciiString, 33),
    t(0xa430, "CameraOwnerName", "Camera Owner Name", "The owner of the camera used to capture the image.", AsciiString, -1),
    t(0xa431, "BodySerialNumber", "Body Serial Number", "The serial number of the body of the camera.", AsciiString, -1),
    t(0xa432, "LensSpecification", "Lens Specification", "Minimum and maximum focal length and F numbers of the lens.", UnsignedRational, 4),
    t(0xa434, "LensModel", "Lens Model", "The lens model name and model number.", AsciiString, -1),
];

pub(super) static GPS_TAGS: &[TagInfo] = &[
    t(0x0000, "GPSVersionID", "GPS Version ID", "The version of the GPS Info IFD.", UnsignedByte, 4),
    t(0x0001, "GPSLatitudeRef", "GPS Latitude Reference", "Whether the latitude is north or south latitude.", AsciiString, 2),
    t(0x0002, "GPSLatitude", "GPS Latitude", "The latitude, as degrees, minutes and seconds.", UnsignedRational, 3).with_print(print::gps_coordinate),
    t(0x0003, "GPSLongitudeRef", "GPS Longitude Reference", "Whether the longitude is east or west longitude.", AsciiString, 2),
    t(0x0004, "GPSLongitude", "GPS Longitude", "The longitude, as degrees, minutes and seconds.", UnsignedRational, 3).with_print(print::gps_coordinate),
    t(0x0005, "GPSAltitudeRef", "GPS Altitude Reference", "The altitude used as the reference altitude.", UnsignedByte, 1).with_print(print::gps_altitude_ref),
    t(0x0006, "GPSAltitude", "GPS Altitude", "The altitude based on the reference in GPSAltitudeRef, in meters.", UnsignedRational, 1).with_print(print::gps_altitude),
    t(0x0007, "GPSTimeStamp", "GPS Time Stamp", "The time as UTC (Coordinated Universal Time).", UnsignedRational, 3).with_print(print::gps_time_stamp),
    t(0x0008, "GPSSatellites", "GPS Satellites", "The GPS satellites used for measurements.", AsciiString, -1),
    t(0x0009, "GPSStatus", "GPS Status", "The status of the GPS receiver when the image was recorded.", AsciiString, 2),
    t(0x000a, "GPSMeasureMode", "GPS Measure Mode", "The GPS measurement mode.", AsciiString, 2),
    t(0x000b, "GPSDOP", "GPS Data Degree of Precision", "The GPS DOP (data degree of precision).", UnsignedRational, 1),
    t(0x000c, "GPSSpeedRef", "GPS Speed Reference", "The unit used to express the GPS receiver speed of movement.", AsciiString, 2),
    t(0x000d, "GPSSpeed", "GPS Speed", "The speed of GPS receiver movement.", UnsignedRational, 1),
    t(0x0010, "GPSImgDirectionRef", "GPS Image Direction Reference", "The reference for the direction of the image.", AsciiString, 2),
    t(0x0011, "GPSImgDirection", "GPS Image Direction", "The direction of the image when it was captured.", UnsignedRational, 1),
    t(0x0012, "GPSMapDatum", "GPS Map Datum", "The geodetic survey data used by the GPS receiver.", AsciiString, -1),
    t(0x001b, "GPSProcessingMethod", "GPS Processing Method", "The name of the method used for location finding.", Comment, -1),
    t(0x001c, "GPSAreaInformation", "GPS Area Information", "The name of the GPS area.", Comment, -1),
    t(0x001d, "GPSDateStamp", "GPS Date Stamp", "Date and time information relative to UTC.", AsciiString, 11),
    t(0x001e, "GPSDifferential", "GPS Differential", "Whether differential correction is applied to the GPS receiver.", UnsignedShort, 1),
    t(0x001f, "GPSHPositioningError", "GPS Horizontal positioning error", "The horizontal positioning errors in meters.", UnsignedRational, 1),
];

pub(super) static IOP_TAGS: &[TagInfo] = &[
    t(0x0001, "InteroperabilityIndex", "Interoperability Index", "The identification of the Interoperability rule.", AsciiString, -1),
    t(0x0002, "InteroperabilityVersion", "Interoperability Version", "Interoperability version.", Undefined, -1),
    t(0x1000, "RelatedImageFileFormat", "Related Image File Format", "File format of image file.", AsciiString, -1),
    t(0x1001, "RelatedImageWidth", "Related Image Width", "Image width.", UnsignedLong, 1),
    t(0x1002, "RelatedImageLength", "Related Image Length", "Image height.", UnsignedLong, 1),
];
