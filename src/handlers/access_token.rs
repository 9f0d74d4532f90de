use std::sync::Arc;

use tracing::debug;

use crate::config::settings::Settings;
use crate::errors::TokenError;
use crate::handlers::{apply_headers, fetch_or_skip, TokenHandler};
use crate::parser::token::parse_json_token;
use crate::repository::{Base, Repository};
use crate::sinks::Header;
use crate::sources::{FetchRaw, UrlFetcher};
use crate::utils::constants::{FIELD_TOKEN, FIELD_TOKEN_ID, HANDLER_ACCESS_TOKEN, HEADER_ACCESS_TOKEN, HEADER_REFERER};

/// Sends `X-Access-Token` and `Referer` for repositories with an `accesstoken`
/// locator. Applies to remote and local repositories alike.
pub struct AccessToken<'a, R: Repository, F: FetchRaw = UrlFetcher> {
    base: &'a mut Base<R>,
    fetcher: F,
}

impl<'a, R: Repository> AccessToken<'a, R, UrlFetcher> {
    pub fn new(base: &'a mut Base<R>, settings: Arc<Settings>) -> Self {
        Self::with_fetcher(base, UrlFetcher::new(settings.fetch_timeout()))
    }
}

impl<'a, R: Repository, F: FetchRaw> AccessToken<'a, R, F> {
    pub fn with_fetcher(base: &'a mut Base<R>, fetcher: F) -> Self {
        Self { base, fetcher }
    }
}

impl<R: Repository, F: FetchRaw> TokenHandler for AccessToken<'_, R, F> {
    const NAME: &'static str = HANDLER_ACCESS_TOKEN;

    fn config(&mut self) -> Result<(), TokenError> {
        for (name, repo) in self.base.repos.iter_mut() {
            configure_repo(name, repo, &self.fetcher)?;
        }
        Ok(())
    }
}

fn configure_repo<R: Repository, F: FetchRaw>(name: &str, repo: &mut R, fetcher: &F) -> Result<(), TokenError> {
    let Some(locator) = repo.accesstoken().filter(|locator| !locator.is_empty()).map(str::to_owned) else {
        debug!(repo = name, "no accesstoken configured");
        return Ok(());
    };

    let Some(raw) = fetch_or_skip(HANDLER_ACCESS_TOKEN, name, fetcher, &locator) else {
        return Ok(());
    };

    let token = parse_json_token(&locator, &raw, &[FIELD_TOKEN, FIELD_TOKEN_ID])?;
    let headers = [
        Header::new(&locator, HEADER_ACCESS_TOKEN, token.get(FIELD_TOKEN))?,
        Header::new(&locator, HEADER_REFERER, token.get(FIELD_TOKEN_ID))?,
    ];
    apply_headers(HANDLER_ACCESS_TOKEN, name, repo, &headers);
    Ok(())
}
