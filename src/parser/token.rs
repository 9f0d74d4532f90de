use std::collections::BTreeMap;

use serde_json::Value;
use tracing::debug;

use crate::errors::TokenError;

/// Required field name -> extracted string value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedToken {
    fields: BTreeMap<String, String>,
}

impl ParsedToken {
    /// Value of a field that passed validation.
    ///
    /// Only fields listed as required when parsing are present; asking for
    /// anything else yields an empty string.
    pub fn get(&self, field: &str) -> &str {
        self.fields.get(field).map(String::as_str).unwrap_or_default()
    }
}

/// Parse a JSON object and extract every `required` field as a non-empty string.
pub fn parse_json_token(locator: &str, raw: &str, required: &[&str]) -> Result<ParsedToken, TokenError> {
    let json: Value = serde_json::from_str(raw.trim())
        .map_err(|e| TokenError::invalid(locator, format!("token is not valid JSON: {}", e)))?;

    let object = json
        .as_object()
        .ok_or_else(|| TokenError::invalid(locator, "token is not a JSON object"))?;

    let mut fields = BTreeMap::new();
    for name in required {
        let value = match object.get(*name) {
            Some(Value::String(value)) if !value.is_empty() => value.to_owned(),
            Some(Value::String(_)) => {
                return Err(TokenError::invalid(locator, format!("field '{}' is empty", name)))
            }
            Some(_) => {
                return Err(TokenError::invalid(locator, format!("field '{}' is not a string", name)))
            }
            None => return Err(TokenError::invalid(locator, format!("field '{}' is missing", name))),
        };
        fields.insert((*name).to_owned(), value);
    }
    debug!(fields = required.len(), "token parsed");

    Ok(ParsedToken { fields })
}

/// Plain text token, surrounding whitespace stripped.
pub fn parse_plain_token(locator: &str, raw: &str) -> Result<String, TokenError> {
    let token = raw.trim();
    if token.is_empty() {
        return Err(TokenError::invalid(locator, "token is empty"));
    }
    Ok(token.to_owned())
}
