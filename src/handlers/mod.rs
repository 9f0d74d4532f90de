//! Token handlers
//!
//! Each handler walks the host's repositories once, decides whether a
//! repository gets a credential header and, if so, replaces its header list.
//! Skipped repositories are never touched.

use std::sync::Arc;

use clap::ValueEnum;
use tracing::{info, warn};

use crate::config::settings::Settings;
use crate::errors::TokenError;
use crate::repository::{Base, Repository};
use crate::sinks::{to_header_lines, Header};
use crate::sources::FetchRaw;
use crate::utils::constants::{HANDLER_ACCESS_TOKEN, HANDLER_PTOKEN, HANDLER_XAPI_TOKEN};

pub mod access_token;
pub mod ptoken;
pub mod xapi_token;

pub use access_token::AccessToken;
pub use ptoken::Ptoken;
pub use xapi_token::XapiToken;

/// Host plugin contract.
pub trait TokenHandler {
    const NAME: &'static str;

    /// Runs once during repository setup.
    fn config(&mut self) -> Result<(), TokenError>;
}

/// Handlers a host can enable, in the order they run by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HandlerKind {
    Accesstoken,
    Ptoken,
    Xapitoken,
}

impl HandlerKind {
    pub const ALL: [HandlerKind; 3] = [HandlerKind::Accesstoken, HandlerKind::Ptoken, HandlerKind::Xapitoken];

    pub fn name(&self) -> &'static str {
        match self {
            HandlerKind::Accesstoken => HANDLER_ACCESS_TOKEN,
            HandlerKind::Ptoken => HANDLER_PTOKEN,
            HandlerKind::Xapitoken => HANDLER_XAPI_TOKEN,
        }
    }
}

/// Runs the given handlers one after another over every repository of `base`.
///
/// Each handler replaces the header list it sets, so with several handlers
/// applying to one repository the last one wins.
pub fn run_handlers<R: Repository>(
    base: &mut Base<R>,
    settings: Arc<Settings>,
    kinds: &[HandlerKind],
) -> Result<(), TokenError> {
    for kind in kinds {
        info!(handler = kind.name(), repos = base.repos.len(), "running token handler");
        match kind {
            HandlerKind::Accesstoken => AccessToken::new(base, settings.clone()).config()?,
            HandlerKind::Ptoken => Ptoken::new(base, settings.clone()).config()?,
            HandlerKind::Xapitoken => XapiToken::new(base, settings.clone()).config()?,
        }
    }
    Ok(())
}

/// Fetch a token, treating any fetch failure as "no token available".
pub(crate) fn fetch_or_skip<F: FetchRaw>(handler: &str, repo_name: &str, fetcher: &F, locator: &str) -> Option<String> {
    match fetcher.fetch_raw(locator) {
        Ok(raw) => Some(raw),
        Err(err) => {
            warn!(handler, repo = repo_name, "token unavailable, skipping: {}", err);
            None
        }
    }
}

pub(crate) fn apply_headers<R: Repository>(handler: &str, repo_name: &str, repo: &mut R, headers: &[Header]) {
    let names: Vec<&str> = headers.iter().map(Header::name).collect();
    info!(handler, repo = repo_name, headers = ?names, "setting http headers");
    repo.set_http_headers(to_header_lines(headers));
}
