use std::fs;
use std::sync::Arc;

use tracing::debug;

use crate::config::settings::Settings;
use crate::errors::TokenError;
use crate::handlers::{apply_headers, TokenHandler};
use crate::helpers::locality::any_local;
use crate::parser::token::parse_plain_token;
use crate::repository::{Base, Repository};
use crate::sinks::Header;
use crate::utils::constants::{COOKIE_POOL_SECRET, HANDLER_PTOKEN};

/// Sends the pool secret as a cookie to local repositories with `ptoken` enabled.
///
/// The secret file is expected to exist whenever the handler applies, so a
/// failed read is returned to the host instead of being skipped.
pub struct Ptoken<'a, R: Repository> {
    base: &'a mut Base<R>,
    settings: Arc<Settings>,
}

impl<'a, R: Repository> Ptoken<'a, R> {
    pub fn new(base: &'a mut Base<R>, settings: Arc<Settings>) -> Self {
        Self { base, settings }
    }
}

impl<R: Repository> TokenHandler for Ptoken<'_, R> {
    const NAME: &'static str = HANDLER_PTOKEN;

    fn config(&mut self) -> Result<(), TokenError> {
        // read on first qualifying repository, reused for the rest
        let mut pool_secret: Option<String> = None;
        let path = self.settings.ptoken_path.display().to_string();

        for (name, repo) in self.base.repos.iter_mut() {
            if !repo.ptoken() {
                debug!(repo = name.as_str(), "ptoken not enabled");
                continue;
            }
            if !any_local(repo.baseurl(), self.settings.loopback_hosts.as_slice()) {
                debug!(repo = name.as_str(), "remote repository, ptoken ignored");
                continue;
            }

            if pool_secret.is_none() {
                let raw = fs::read_to_string(&self.settings.ptoken_path)?;
                pool_secret = Some(parse_plain_token(&path, &raw)?);
            }
            let token = pool_secret.as_deref().unwrap_or_default();
            let headers = [Header::cookie(&path, COOKIE_POOL_SECRET, token)?];
            apply_headers(HANDLER_PTOKEN, name, repo, &headers);
        }
        Ok(())
    }
}
