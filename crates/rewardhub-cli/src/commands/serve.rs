//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use rewardhub_core::{ConfigOverrides, Page, ServerConfig};
use std::path::{Path, PathBuf};

const DEFAULT_LOG_FILE: &str = "logs/rewardhub.log";

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// TOML config file
    #[arg(short, long, env = "REWARDHUB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Host to bind to [default: 127.0.0.1]
    #[arg(long, env = "REWARDHUB_HOST")]
    pub host: Option<String>,

    /// Port to listen on [default: 5000]
    #[arg(long, env = "REWARDHUB_PORT")]
    pub port: Option<u16>,

    /// Enable debug logging and detailed error pages
    #[arg(long, env = "REWARDHUB_DEBUG")]
    pub debug: bool,

    /// Directory served under /static [default: static]
    #[arg(long, env = "REWARDHUB_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Also write logs to a file
    #[arg(long, env = "REWARDHUB_LOG")]
    pub log: bool,

    /// Log file path (implies --log)
    #[arg(long, env = "REWARDHUB_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl ServeArgs {
    /// Log file to write to, if file logging was requested.
    pub fn log_path(&self) -> Option<PathBuf> {
        match (&self.log_file, self.log) {
            (Some(path), _) => Some(path.clone()),
            (None, true) => Some(PathBuf::from(DEFAULT_LOG_FILE)),
            (None, false) => None,
        }
    }

    /// Merge the config file (if any) with command-line flags.
    pub fn resolve_config(&self) -> Result<ServerConfig> {
        let config = ServerConfig::load(self.config.as_deref())?;
        Ok(config.with_overrides(ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            debug: self.debug,
            static_dir: self.static_dir.clone(),
        }))
    }
}

/// Record where the configuration came from. Called once tracing is up.
fn log_config_source(config_file: Option<&Path>, config: &ServerConfig) {
    match config_file {
        Some(path) => tracing::info!(path = %path.display(), "Loaded config file"),
        None => tracing::debug!("No config file given, using defaults and flags"),
    }
    tracing::debug!(?config, "Resolved server config");
}

pub async fn execute(config: ServerConfig, config_file: Option<&Path>) -> Result<()> {
    log_config_source(config_file, &config);
    let base = format!("http://{}:{}", config.host, config.port);

    println!();
    println!("  {} {}", "RewardHub".cyan().bold(), "Dashboard Server".bold());
    println!();
    for page in Page::ALL {
        println!(
            "  {:<9}  {}{}",
            page.as_str().green(),
            base,
            page.path()
        );
    }
    println!("  {:<9}  {}", "static".green(), config.static_dir.display());
    if config.debug {
        println!("  {}", "Debug mode on".yellow());
    }
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    rewardhub_web::run_server(&config).await?;

    Ok(())
}
