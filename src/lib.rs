//! # Repository Token Auth Library
//!
//! Attaches credential headers to package repositories. A token is fetched
//! from the locator a repository configures, validated, and written back as
//! the repository's outgoing HTTP headers.
//!
//! Modules:
//! - `handlers` — access token, pool secret (ptoken) and xapi token handlers
//! - `sources` — fetching raw tokens from file and http(s) locators
//! - `parser` — validating fetched tokens
//! - `helpers` — loopback detection for base addresses
//! - `sinks` — formatting `Name:Value` headers
//! - `config` — settings and repository configuration

pub mod config;
pub mod errors;
pub mod handlers;
pub mod helpers;
pub mod parser;
pub mod repository;
pub mod sinks;
pub mod sources;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::errors::{FetchError, TokenError};
pub use crate::handlers::{AccessToken, Ptoken, TokenHandler, XapiToken};
pub use crate::repository::{Base, Repository, XapiTokenSetting};
