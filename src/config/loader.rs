use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use regex::Regex;
use tracing::{debug, error};

use crate::config::repos::ServiceConfig;
use crate::config::settings::{LogFormat, LoggingConfig};

/// Load and validate config from YAML file
pub fn file_to_config(path: &Path) -> Result<ServiceConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("cannot read config '{}'", path.display()))?;

    let expanded = expand_env_vars(&content);
    parse_config(&expanded)
}

pub fn parse_config(content: &str) -> Result<ServiceConfig> {
    let mut service_config: ServiceConfig = serde_yaml::from_str(content)
        .inspect_err(|e| error!("parse config error: {}", e))?;

    // Apply defaults
    if service_config.settings.logging.is_none() {
        service_config.settings.logging = Some(LoggingConfig::new("info".to_owned(), LogFormat::Compact));
    }
    debug!("validation config ...");
    validate_service_config(&service_config)?;

    Ok(service_config)
}

fn validate_service_config(service_config: &ServiceConfig) -> Result<()> {
    let settings = &service_config.settings;
    if settings.fetch_timeout_ms == 0 {
        bail!("settings.fetch_timeout_ms must be greater than 0");
    }
    if settings.loopback_hosts.is_empty() {
        bail!("settings.loopback_hosts must list at least one host");
    }
    if let Some(host) = settings.loopback_hosts.iter().find(|host| host.trim().is_empty()) {
        bail!("settings.loopback_hosts contains an empty entry '{}'", host);
    }
    if service_config.repos.keys().any(|name| name.trim().is_empty()) {
        bail!("repository names must not be empty");
    }
    Ok(())
}

/// Expands `${VAR}` and `${VAR:default}` from the environment.
pub fn expand_env_vars(input: &str) -> String {
    let re = Regex::new(r"\$\{(\w+)(?::([^\}]+))?\}").expect("static regex");
    re.replace_all(input, |caps: &regex::Captures| {
        let var = &caps[1];
        let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        std::env::var(var).unwrap_or_else(|_| default.to_string())
    })
    .to_string()
}
