use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::settings::Settings;
use crate::errors::TokenError;
use crate::handlers::{apply_headers, fetch_or_skip, TokenHandler};
use crate::helpers::locality::any_local;
use crate::parser::token::parse_json_token;
use crate::repository::{Base, Repository};
use crate::sinks::Header;
use crate::sources::{FetchRaw, UrlFetcher};
use crate::utils::constants::{COOKIE_SESSION_ID, FIELD_XAPI_TOKEN, HANDLER_XAPI_TOKEN};

/// Sends the xapi session id as a cookie to local repositories with `xapitoken` set.
pub struct XapiToken<'a, R: Repository, F: FetchRaw = UrlFetcher> {
    base: &'a mut Base<R>,
    settings: Arc<Settings>,
    fetcher: F,
}

impl<'a, R: Repository> XapiToken<'a, R, UrlFetcher> {
    pub fn new(base: &'a mut Base<R>, settings: Arc<Settings>) -> Self {
        let fetcher = UrlFetcher::new(settings.fetch_timeout());
        Self::with_fetcher(base, settings, fetcher)
    }
}

impl<'a, R: Repository, F: FetchRaw> XapiToken<'a, R, F> {
    pub fn with_fetcher(base: &'a mut Base<R>, settings: Arc<Settings>, fetcher: F) -> Self {
        Self { base, settings, fetcher }
    }
}

impl<R: Repository, F: FetchRaw> TokenHandler for XapiToken<'_, R, F> {
    const NAME: &'static str = HANDLER_XAPI_TOKEN;

    fn config(&mut self) -> Result<(), TokenError> {
        for (name, repo) in self.base.repos.iter_mut() {
            configure_repo(name, repo, &self.settings, &self.fetcher)?;
        }
        Ok(())
    }
}

fn configure_repo<R: Repository, F: FetchRaw>(
    name: &str,
    repo: &mut R,
    settings: &Settings,
    fetcher: &F,
) -> Result<(), TokenError> {
    let setting = repo.xapitoken();
    if !setting.is_configured() {
        debug!(repo = name, "no xapitoken configured");
        return Ok(());
    }
    if !any_local(repo.baseurl(), settings.loopback_hosts.as_slice()) {
        debug!(repo = name, "remote repository, xapitoken ignored");
        return Ok(());
    }

    // a bare `true` falls back to the configured default locator
    let Some(locator) = setting
        .locator()
        .or(settings.xapitoken_locator.as_deref())
        .map(str::to_owned)
    else {
        warn!(repo = name, "xapitoken enabled without a locator, skipping");
        return Ok(());
    };

    let Some(raw) = fetch_or_skip(HANDLER_XAPI_TOKEN, name, fetcher, &locator) else {
        return Ok(());
    };

    let token = parse_json_token(&locator, &raw, &[FIELD_XAPI_TOKEN])?;
    let headers = [Header::cookie(&locator, COOKIE_SESSION_ID, token.get(FIELD_XAPI_TOKEN))?];
    apply_headers(HANDLER_XAPI_TOKEN, name, repo, &headers);
    Ok(())
}
