use serde::Serialize;
use thiserror::Error;

/// Errors raised while resolving, fetching or parsing an image.
///
/// Every variant maps to a stable numeric [`code`](Error::code) so the
/// failure can cross the callback boundary as an [`ErrorRecord`].
#[derive(Debug, Error)]
pub enum Error {
    /// The data source could not be opened or read
    #[error("Failed to open the data source {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The bytes do not start with any known container signature
    #[error("The file contains data of an unknown image type")]
    UnknownImageType,

    /// The container signature matched but its structure is broken
    #[error("This does not look like a {format} image: {reason}")]
    NotAnImage { format: &'static str, reason: String },

    /// An embedded metadata block is malformed
    #[error("Corrupted {block} metadata: {reason}")]
    CorruptMetadata { block: &'static str, reason: String },

    /// Transport failure or non-success status when fetching a URL
    #[error("HTTP error for {url}: {reason}")]
    Http { url: String, reason: String },

    /// The locator is neither a usable path nor a supported URL
    #[error("Invalid locator '{0}'")]
    InvalidLocator(String),

    /// A remote resource exceeds the configured size limit
    #[error("Remote resource {url} exceeds {limit} bytes")]
    TooLarge { url: String, limit: u64 },
}

impl Error {
    /// Stable numeric code for this error kind.
    pub fn code(&self) -> i32 {
        match self {
            Self::Io { .. } => 9,
            Self::UnknownImageType => 11,
            Self::NotAnImage { .. } => 14,
            Self::CorruptMetadata { .. } => 15,
            Self::Http { .. } => 30,
            Self::InvalidLocator(_) => 31,
            Self::TooLarge { .. } => 32,
        }
    }

    pub(crate) fn corrupt(block: &'static str, reason: impl Into<String>) -> Self {
        Self::CorruptMetadata {
            block,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Plain-data form of an [`Error`]: what a non-native caller receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
    pub code: i32,
    pub message: String,
}

impl From<&Error> for ErrorRecord {
    fn from(err: &Error) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

impl From<Error> for ErrorRecord {
    fn from(err: Error) -> Self {
        Self::from(&err)
    }
}

/// A dictionary lookup that found nothing. Never surfaced by the dumper.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("No namespace info available for XMP prefix '{0}'")]
    UnknownNamespace(String),
}
