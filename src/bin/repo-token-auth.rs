use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use repo_token_auth::handlers::{run_handlers, HandlerKind};
use repo_token_auth::repository::Base;
use repo_token_auth::utils::config_loader;
use repo_token_auth::utils::logging::{self, LogLevel};
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "CONFIG", default_value = "repo-token-auth.yaml")]
    config: String,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
    /// Handlers to run, in order. Defaults to all of them.
    #[arg(long = "plugin", value_enum)]
    plugins: Vec<HandlerKind>,
}

fn main() -> Result<()> {
    // -------------------------------
    // 1. Load YAML config
    // -------------------------------

    let args = Args::parse();
    let service_config = config_loader::run(&args.config)?;
    logging::run(&service_config.settings, args.log_level);

    // -------------------------------
    // 2. Run token handlers over the configured repositories
    // -------------------------------

    let plugins = if args.plugins.is_empty() {
        HandlerKind::ALL.to_vec()
    } else {
        args.plugins
    };
    let settings = Arc::new(service_config.settings);
    let mut base = Base::new(service_config.repos);
    run_handlers(&mut base, settings, &plugins).context("token handler failed")?;

    // -------------------------------
    // 3. Report resulting headers
    // -------------------------------

    let report: BTreeMap<&str, &Vec<String>> = base
        .repos
        .iter()
        .map(|(name, repo)| (name.as_str(), &repo.http_headers))
        .collect();
    println!("{}", serde_json::to_string_pretty(&report)?);
    info!("configured {} repositories", report.len());

    Ok(())
}
