//! Host-side view of a package repository.
//!
//! The host framework owns repositories; token handlers only read their
//! token settings and base addresses and replace their outgoing headers.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

/// Capabilities a handler needs from a repository.
pub trait Repository {
    /// Access token locator, `None` or empty when not configured.
    fn accesstoken(&self) -> Option<&str>;

    /// Pool secret enable flag.
    fn ptoken(&self) -> bool;

    fn xapitoken(&self) -> &XapiTokenSetting;

    /// Candidate base addresses; empty means "not local".
    fn baseurl(&self) -> &[String];

    /// Replaces the full outgoing header list. Each entry is `Name:Value`.
    fn set_http_headers(&mut self, headers: Vec<String>);
}

/// `xapitoken` accepts either a locator or a bare enable flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum XapiTokenSetting {
    #[default]
    #[serde(skip_deserializing)]
    Unset,
    Flag(bool),
    Locator(String),
}

impl XapiTokenSetting {
    pub fn is_configured(&self) -> bool {
        match self {
            XapiTokenSetting::Unset => false,
            XapiTokenSetting::Flag(enabled) => *enabled,
            XapiTokenSetting::Locator(locator) => !locator.is_empty(),
        }
    }

    /// Explicit locator, if one was given.
    pub fn locator(&self) -> Option<&str> {
        match self {
            XapiTokenSetting::Locator(locator) if !locator.is_empty() => Some(locator),
            _ => None,
        }
    }
}

impl From<&str> for XapiTokenSetting {
    fn from(locator: &str) -> Self {
        XapiTokenSetting::Locator(locator.to_owned())
    }
}

impl From<bool> for XapiTokenSetting {
    fn from(enabled: bool) -> Self {
        XapiTokenSetting::Flag(enabled)
    }
}

/// Maps an explicit `null` to [`XapiTokenSetting::Unset`].
pub fn deserialize_xapitoken<'de, D>(deserializer: D) -> Result<XapiTokenSetting, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<XapiTokenSetting>::deserialize(deserializer)?.unwrap_or_default())
}

/// Host context handed to every handler.
#[derive(Debug, Default)]
pub struct Base<R: Repository> {
    pub repos: BTreeMap<String, R>,
}

impl<R: Repository> Base<R> {
    pub fn new(repos: BTreeMap<String, R>) -> Self {
        Self { repos }
    }
}
