//! Token fetching
//!
//! Resolves a locator string into raw token text. One attempt per call,
//! blocking, no retries.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::debug;

use crate::errors::FetchError;
use crate::utils::constants::DEFAULT_HTTP_TIMEOUT_MS;

const FILE_SCHEME: &str = "file://";
const HTTP_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Parsed form of a locator string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    File(PathBuf),
    Http(String),
}

impl Locator {
    pub fn parse(raw: &str) -> Result<Self, FetchError> {
        let trimmed = raw.trim();
        if let Some(rest) = strip_prefix_ignore_case(trimmed, FILE_SCHEME) {
            // file:///abs/path and file://localhost/abs/path
            let path = match rest.find('/') {
                Some(0) => rest,
                Some(idx) if rest[..idx].eq_ignore_ascii_case("localhost") => &rest[idx..],
                _ => return Err(FetchError::UnsupportedLocator(raw.to_owned())),
            };
            return Ok(Locator::File(PathBuf::from(path)));
        }
        if HTTP_SCHEMES
            .iter()
            .any(|scheme| strip_prefix_ignore_case(trimmed, scheme).is_some())
        {
            return Ok(Locator::Http(trimmed.to_owned()));
        }
        if trimmed.contains("://") {
            return Err(FetchError::UnsupportedLocator(raw.to_owned()));
        }
        Ok(Locator::File(PathBuf::from(trimmed)))
    }
}

fn strip_prefix_ignore_case<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    value
        .get(..prefix.len())
        .filter(|head| head.eq_ignore_ascii_case(prefix))
        .map(|_| &value[prefix.len()..])
}

/// Retrieves raw token text addressed by a locator.
pub trait FetchRaw {
    fn fetch_raw(&self, locator: &str) -> Result<String, FetchError>;
}

impl<T: FetchRaw + ?Sized> FetchRaw for &T {
    fn fetch_raw(&self, locator: &str) -> Result<String, FetchError> {
        (**self).fetch_raw(locator)
    }
}

/// Default fetcher: local files and http(s) through a blocking client.
#[derive(Debug, Clone)]
pub struct UrlFetcher {
    timeout: Duration,
}

impl Default for UrlFetcher {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_HTTP_TIMEOUT_MS))
    }
}

impl UrlFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn read_file(&self, locator: &str, path: &Path) -> Result<String, FetchError> {
        fs::read_to_string(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => FetchError::NotFound(locator.to_owned()),
            _ => FetchError::Unreachable {
                locator: locator.to_owned(),
                reason: err.to_string(),
            },
        })
    }

    fn get(&self, locator: &str, url: &str) -> Result<String, FetchError> {
        let unreachable = |err: reqwest::Error| FetchError::Unreachable {
            locator: locator.to_owned(),
            reason: err.to_string(),
        };

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(unreachable)?;

        let response = client.get(url).send().map_err(unreachable)?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(locator.to_owned()));
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                locator: locator.to_owned(),
                status: status.as_u16(),
            });
        }
        response.text().map_err(unreachable)
    }
}

impl FetchRaw for UrlFetcher {
    fn fetch_raw(&self, locator: &str) -> Result<String, FetchError> {
        match Locator::parse(locator)? {
            Locator::File(path) => {
                debug!("reading token file '{}'", path.display());
                self.read_file(locator, &path)
            }
            Locator::Http(url) => {
                debug!("requesting token from '{}'", url);
                self.get(locator, &url)
            }
        }
    }
}
