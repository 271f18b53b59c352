//! Resolving a locator to the bytes of an image.

use std::fmt;
use std::io::Read;
use std::path::PathBuf;

use img_parts::Bytes;

use crate::error::{Error, Result};
use crate::reader::ReadOptions;

/// Where an image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    Path(PathBuf),
    Url(String),
}

impl Locator {
    /// Classify a locator string.
    ///
    /// `http://` and `https://` are fetched remotely, `file://` and anything
    /// without a scheme are local paths. Other schemes are rejected. The
    /// string is used as given; blank input is rejected.
    pub fn parse(locator: &str) -> Result<Self> {
        if locator.trim().is_empty() {
            return Err(Error::InvalidLocator(locator.to_string()));
        }
        match locator.split_once("://") {
            None => Ok(Self::Path(PathBuf::from(locator))),
            Some((scheme, rest)) => match scheme.to_ascii_lowercase().as_str() {
                "http" | "https" if !rest.is_empty() => Ok(Self::Url(locator.to_string())),
                "file" if !rest.is_empty() => Ok(Self::Path(PathBuf::from(rest))),
                _ => Err(Error::InvalidLocator(locator.to_string())),
            },
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// Read the whole resource into memory.
pub fn fetch(locator: &Locator, options: &ReadOptions) -> Result<Bytes> {
    log::info!("Opening {locator}");
    match locator {
        Locator::Path(path) => std::fs::read(path).map(Bytes::from).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        }),
        Locator::Url(url) => fetch_url(url, options),
    }
}

fn fetch_url(url: &str, options: &ReadOptions) -> Result<Bytes> {
    let client = reqwest::blocking::Client::builder()
        .timeout(options.http_timeout)
        .build()
        .map_err(|e| Error::Http {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
    download(&client, url, options)
}

fn download(client: &reqwest::blocking::Client, url: &str, options: &ReadOptions) -> Result<Bytes> {
    let http = |reason: String| Error::Http {
        url: url.to_string(),
        reason,
    };
    let too_large = || Error::TooLarge {
        url: url.to_string(),
        limit: options.max_remote_bytes,
    };

    let resp = client.get(url).send().map_err(|e| http(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(http(format!("status {status}")));
    }
    if resp.content_length().is_some_and(|len| len > options.max_remote_bytes) {
        return Err(too_large());
    }

    // servers may omit or understate the length
    let mut body = Vec::new();
    resp.take(options.max_remote_bytes.saturating_add(1))
        .read_to_end(&mut body)
        .map_err(|e| http(e.to_string()))?;
    if body.len() as u64 > options.max_remote_bytes {
        return Err(too_large());
    }
    log::debug!("Fetched {} bytes from {url}", body.len());
    Ok(Bytes::from(body))
}
