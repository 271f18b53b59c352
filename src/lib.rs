//! # ezif
//!
//! Exif, IPTC and XMP metadata reader with a streaming callback interface,
//! plus a JSON dump of the built-in tag dictionaries.
//!
//! ## Quick Start
//!
//! The simplest way to use the library is [`read_collection`], which gathers
//! every datum of an image into sorted, typed properties:
//!
//! ```rust,no_run
//! use ezif::read_collection;
//!
//! fn main() -> Result<(), ezif::Error> {
//!     let collection = read_collection("photo.jpg")?;
//!
//!     if let Some(make) = collection.get("Exif.Image.Make") {
//!         println!("Camera: {}", make.interpreted_value);
//!     }
//!     for key in collection.iptc.keys() {
//!         println!("{key}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Streaming
//!
//! For more control, implement [`MetadataHandler`] (or use
//! [`reader::from_fns`]) and receive one `on_start`, zero or more
//! `on_value` and one `on_end` call per datum:
//!
//! ```rust,no_run
//! use ezif::reader::{from_fns, read_metadata_with, ReadOptions, ValueSlot};
//!
//! fn main() -> Result<(), ezif::Error> {
//!     let options = ReadOptions { sort_iptc: false, ..Default::default() };
//!     let mut slot = ValueSlot::default();
//!     let mut handler = from_fns(
//!         |datum| println!("{} ({} values)", datum.key(), datum.count),
//!         |slot| {
//!             if let Some(s) = &slot.string {
//!                 println!("  {s}");
//!             }
//!         },
//!         |_family| {},
//!     );
//!     read_metadata_with("https://example.com/photo.jpg", &options, &mut handler, &mut slot)
//! }
//! ```
//!
//! ## Supported Containers
//!
//! | Format | Blocks read |
//! |--------|-------------|
//! | JPEG | APP1 Exif, APP1 XMP, APP13 IPTC |
//! | TIFF (and TIFF-based RAW) | IFDs, embedded IPTC and XMP |
//! | PNG | eXIf, iTXt XMP |
//! | XMP sidecar | the packet itself |
//!
//! ## Modules
//!
//! - [`dictionary`]: static Exif/IPTC/XMP tag tables and the JSON dump
//! - [`image`]: container detection and metadata decoding
//! - [`reader`]: the streaming event interface
//! - [`collection`]: owned, sorted view built from the stream
//! - [`source`]: path and URL resolution
//! - [`ffi`]: C ABI

pub mod collection;
pub mod dictionary;
pub mod error;
pub mod ffi;
pub mod image;
pub mod reader;
pub mod source;
pub mod types;
pub mod value;

pub use collection::{read_collection, Collection, Collector, Properties, Property, PropertyValue};
pub use dictionary::{dump_dictionary, DictionaryDocument};
pub use error::{Error, ErrorRecord, LookupError, Result};
pub use image::{Image, ImageFormat, Metadatum};
pub use reader::{read_metadata, read_metadata_with, DatumStart, MetadataHandler, ReadOptions, ValueSlot};
pub use types::{Date, Family, Time, TypeId};
pub use value::Value;
