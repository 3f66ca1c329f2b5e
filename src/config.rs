use crate::args::{Args, Hosts};
use crate::duration::Duration;
use crate::error::ConfigError;
use crate::utils::host_name_length;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize, de};
use std::{fs::File, io::BufReader, path::Path};

/// Number of deltas kept per host.
pub const DEFAULT_MAX_STATS: usize = 128;
/// Connection timeout for a single ping.
pub const DEFAULT_PING_TIMEOUT: Duration = Duration::from_millis(1000);
/// Time between ping rounds.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub ping_timeout: Duration,
    pub max_stats: usize,
    #[serde(rename = "interval")]
    pub poll_interval: Duration,
    pub hosts: Hosts,
    pub show_notification: bool,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            ping_timeout: DEFAULT_PING_TIMEOUT,
            max_stats: DEFAULT_MAX_STATS,
            poll_interval: DEFAULT_POLL_INTERVAL,
            hosts: Hosts::default(),
            show_notification: false,
            verbose: false,
        }
    }
}

/// Keys present in a config file. Absent or null keys leave the record alone.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    ping_timeout: Option<Duration>,
    max_stats: Option<usize>,
    interval: Option<Duration>,
    hosts: Option<Hosts>,
    show_notification: Option<bool>,
    verbose: Option<bool>,
}

impl Config {
    /// Parses the process arguments once and resolves them.
    pub fn from_flags() -> Result<Config, ConfigError> {
        use clap::Parser;
        Config::resolve(&Args::parse())
    }

    /// Builds the final configuration from defaults, flags and an optional file.
    ///
    /// A non-empty `--config` path wins outright: the file is loaded over the
    /// defaults and `--host`, `--interval` and `--notification` are discarded.
    pub fn resolve(args: &Args) -> Result<Config, ConfigError> {
        let mut config = Config::default();

        if let Some(path) = args.config_path() {
            if args.has_overridden_flags() {
                warn!("--config is set; ignoring --host, --interval and --notification");
            }
            config.load_from_path(path)?;
            info!("Loaded configuration from {path}");
            return Ok(config);
        }

        config.poll_interval = Duration::from_millis(args.interval);
        config.hosts.extend(args.hosts());
        config.show_notification = args.notification;
        debug!("Resolved configuration from command-line flags");
        Ok(config)
    }

    /// Overwrites fields with the values present in the JSON file at `path`.
    /// On error the record is left unchanged.
    pub fn load_from_path(&mut self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let file = File::open(path).map_err(|source| ConfigError::FilePath {
            path: display.clone(),
            source,
        })?;
        // Only the first JSON value is read; anything after it is ignored.
        let patch = serde_json::Deserializer::from_reader(BufReader::new(file))
            .into_iter::<ConfigFile>()
            .next()
            .unwrap_or_else(|| Err(de::Error::custom("config file is empty")))
            .map_err(|source| ConfigError::Decode {
                path: display,
                source,
            })?;
        self.apply(patch);
        Ok(())
    }

    fn apply(&mut self, file: ConfigFile) {
        if let Some(ping_timeout) = file.ping_timeout {
            self.ping_timeout = ping_timeout;
        }
        if let Some(max_stats) = file.max_stats {
            self.max_stats = max_stats;
        }
        if let Some(interval) = file.interval {
            self.poll_interval = interval;
        }
        if let Some(hosts) = file.hosts {
            self.hosts = hosts;
        }
        if let Some(show_notification) = file.show_notification {
            self.show_notification = show_notification;
        }
        if let Some(verbose) = file.verbose {
            self.verbose = verbose;
        }
    }

    /// Length of the longest host name, for column alignment.
    pub fn host_name_length(&self) -> usize {
        host_name_length(self.hosts.as_slice())
    }
}
