use env_logger::Env;
use log::{LevelFilter, debug, info, warn};

mod args;
mod config;
mod duration;
mod error;
mod utils;

use config::Config;
use utils::{format_host_lines, format_summary};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG, when set, takes precedence over the `verbose` setting
    let log_from_env = std::env::var_os("RUST_LOG").is_some();
    env_logger::Builder::from_env(Env::default().default_filter_or("debug")).init();
    if !log_from_env {
        log::set_max_level(LevelFilter::Info);
    }

    let config = match Config::from_flags() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };
    if config.verbose && !log_from_env {
        log::set_max_level(LevelFilter::Debug);
    }

    debug!("Resolved configuration: {config:?}");
    info!("{}", format_summary(&config));
    if config.hosts.is_empty() {
        warn!("No hosts configured; pass --host or set \"hosts\" in the config file");
    }
    if config.ping_timeout.is_zero() || config.poll_interval.is_zero() {
        warn!("Zero ping timeout or poll interval configured");
    }
    for line in format_host_lines(&config, config.host_name_length()) {
        info!("{line}");
    }
    Ok(())
}
