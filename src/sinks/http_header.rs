use std::fmt;

use http::{HeaderName, HeaderValue};

use crate::errors::TokenError;

/// Outgoing header, serialized as `name:value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    name: String,
    value: String,
}

impl Header {
    /// Validates the pair with `http` so a token cannot smuggle extra header lines.
    pub fn new(locator: &str, name: &str, value: impl Into<String>) -> Result<Self, TokenError> {
        let value = value.into();
        HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| TokenError::invalid(locator, format!("bad header name '{}': {}", name, e)))?;
        HeaderValue::from_str(&value)
            .map_err(|e| TokenError::invalid(locator, format!("token not usable in '{}' header: {}", name, e)))?;
        Ok(Self { name: name.to_owned(), value })
    }

    /// `cookie:<key>=<token>`
    pub fn cookie(locator: &str, key: &str, token: &str) -> Result<Self, TokenError> {
        Self::new(locator, crate::utils::constants::HEADER_COOKIE, format!("{}={}", key, token))
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.value)
    }
}

/// Serializes headers for `Repository::set_http_headers`, keeping order.
pub fn to_header_lines(headers: &[Header]) -> Vec<String> {
    headers.iter().map(Header::to_string).collect()
}
