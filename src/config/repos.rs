use std::collections::BTreeMap;

use serde::Deserialize;

use crate::config::settings::Settings;
use crate::repository::{deserialize_xapitoken, Repository, XapiTokenSetting};

/// ================================
/// Full host configuration
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub repos: BTreeMap<String, RepoConfig>,
}

/// ================================
/// Repositories
/// ================================
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RepoConfig {
    #[serde(default)]
    pub baseurl: Vec<String>,
    pub accesstoken: Option<String>,
    #[serde(default)]
    pub ptoken: bool,
    #[serde(default, deserialize_with = "deserialize_xapitoken")]
    pub xapitoken: XapiTokenSetting,
    /// Outgoing headers, filled in by the token handlers.
    #[serde(skip)]
    pub http_headers: Vec<String>,
}

impl Repository for RepoConfig {
    fn accesstoken(&self) -> Option<&str> {
        self.accesstoken.as_deref()
    }

    fn ptoken(&self) -> bool {
        self.ptoken
    }

    fn xapitoken(&self) -> &XapiTokenSetting {
        &self.xapitoken
    }

    fn baseurl(&self) -> &[String] {
        &self.baseurl
    }

    fn set_http_headers(&mut self, headers: Vec<String>) {
        self.http_headers = headers;
    }
}
