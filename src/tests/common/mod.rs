// tests/common/mod.rs
use std::cell::Cell;
use std::collections::{BTreeMap, HashMap};
use std::io::Write;
use std::sync::Arc;

use tempfile::NamedTempFile;

use crate::config::settings::Settings;
use crate::errors::FetchError;
use crate::repository::{Base, Repository, XapiTokenSetting};
use crate::sources::FetchRaw;

pub const REPO_NAME: &str = "testrepo";
pub const LOCAL_URL: &str = "http://127.0.0.1/some_local_path";
pub const REMOTE_URL: &str = "http://some_remote_token/some_local_path";

/// Repository double that records every `set_http_headers` call.
#[derive(Debug, Default)]
pub struct MockRepo {
    pub accesstoken: Option<String>,
    pub ptoken: bool,
    pub xapitoken: XapiTokenSetting,
    pub baseurl: Vec<String>,
    pub calls: Vec<Vec<String>>,
}

impl MockRepo {
    pub fn with_accesstoken(locator: &str) -> Self {
        Self { accesstoken: Some(locator.to_owned()), ..Default::default() }
    }

    pub fn with_ptoken(enabled: bool, baseurl: &str) -> Self {
        Self { ptoken: enabled, baseurl: vec![baseurl.to_owned()], ..Default::default() }
    }

    pub fn with_xapitoken(setting: impl Into<XapiTokenSetting>, baseurl: &str) -> Self {
        Self { xapitoken: setting.into(), baseurl: vec![baseurl.to_owned()], ..Default::default() }
    }
}

impl Repository for MockRepo {
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
        self.calls.push(headers);
    }
}

pub fn mock_base(repo: MockRepo) -> Base<MockRepo> {
    let mut repos = BTreeMap::new();
    repos.insert(REPO_NAME.to_owned(), repo);
    Base::new(repos)
}

pub fn calls(base: &Base<MockRepo>) -> &[Vec<String>] {
    &base.repos[REPO_NAME].calls
}

/// Fetcher double: serves a fixed body (or "not found") and counts calls.
pub struct StaticFetcher {
    body: Option<String>,
    pub fetched: Cell<usize>,
}

impl StaticFetcher {
    pub fn serving(body: impl Into<String>) -> Self {
        Self { body: Some(body.into()), fetched: Cell::new(0) }
    }

    pub fn not_found() -> Self {
        Self { body: None, fetched: Cell::new(0) }
    }
}

impl FetchRaw for StaticFetcher {
    fn fetch_raw(&self, locator: &str) -> Result<String, FetchError> {
        self.fetched.set(self.fetched.get() + 1);
        self.body.clone().ok_or_else(|| FetchError::NotFound(locator.to_owned()))
    }
}

/// Fetcher double serving one body per locator; unknown locators are "not found".
#[derive(Default)]
pub struct RoutedFetcher {
    bodies: HashMap<String, String>,
}

impl RoutedFetcher {
    pub fn route(mut self, locator: &str, body: impl Into<String>) -> Self {
        self.bodies.insert(locator.to_owned(), body.into());
        self
    }
}

impl FetchRaw for RoutedFetcher {
    fn fetch_raw(&self, locator: &str) -> Result<String, FetchError> {
        self.bodies
            .get(locator)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(locator.to_owned()))
    }
}

/// Base holding several named repositories.
pub fn mock_base_of(repos: Vec<(&str, MockRepo)>) -> Base<MockRepo> {
    Base::new(repos.into_iter().map(|(name, repo)| (name.to_owned(), repo)).collect())
}

/// Temp file holding `content`, plus its `file://` locator.
pub fn token_file(content: &str) -> (NamedTempFile, String) {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write token");
    let locator = format!("file://{}", file.path().display());
    (file, locator)
}

pub fn settings() -> Arc<Settings> {
    Arc::new(Settings::default())
}
