use std::path::Path;

use anyhow::{anyhow, Result};

use crate::config::loader::file_to_config;
use crate::config::repos::ServiceConfig;

pub fn run(config_path: &str) -> Result<ServiceConfig> {
    let path = Path::new(config_path);
    file_to_config(path).map_err(|e| anyhow!("Invalid config format: {:#}", e))
}
