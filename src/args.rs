use clap::{ArgAction, Parser};
use serde::{Deserialize, Serialize};

/// Poll interval used when `--interval` is not given.
pub const DEFAULT_FLAG_INTERVAL_MS: u64 = 30_000;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Host(s) to ping; repeat the flag for each host
    #[arg(long = "host", value_name = "HOST", action = ArgAction::Append)]
    pub host: Vec<String>,
    /// Server polling interval in milliseconds
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_FLAG_INTERVAL_MS)]
    pub interval: u64,
    /// Show an OS notification when a host goes down
    #[arg(long, value_name = "BOOL", default_value_t = true, action = ArgAction::Set)]
    pub notification: bool,
    /// Load configuration from a file; --host, --interval and --notification are ignored
    #[arg(long, value_name = "PATH", default_value = "")]
    pub config: String,
}

impl Args {
    /// Hosts in the order their flags appeared on the command line.
    pub fn hosts(&self) -> Hosts {
        self.host.iter().cloned().collect()
    }

    pub fn config_path(&self) -> Option<&str> {
        (!self.config.is_empty()).then_some(self.config.as_str())
    }

    /// True when any flag that a config file would override differs from its default.
    pub fn has_overridden_flags(&self) -> bool {
        !self.host.is_empty() || self.interval != DEFAULT_FLAG_INTERVAL_MS || !self.notification
    }
}

/// Ordered host list. Every `add` appends; nothing is deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hosts(Vec<String>);

impl Hosts {
    pub fn add(&mut self, host: impl Into<String>) {
        self.0.push(host.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl Extend<String> for Hosts {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for host in iter {
            self.add(host);
        }
    }
}

impl FromIterator<String> for Hosts {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut hosts = Hosts::default();
        hosts.extend(iter);
        hosts
    }
}

impl IntoIterator for Hosts {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Hosts {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("pingcfg").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn flag_defaults() {
        let args = parse(&[]);
        assert!(args.host.is_empty());
        assert_eq!(args.interval, 30_000);
        assert!(args.notification);
        assert_eq!(args.config_path(), None);
        assert!(!args.has_overridden_flags());
    }

    #[test]
    fn repeated_hosts_keep_order_and_duplicates() {
        let args = parse(&["--host", "b", "--host", "a", "--host=b"]);
        assert_eq!(args.hosts().as_slice(), ["b", "a", "b"]);
    }

    #[test]
    fn notification_takes_explicit_value() {
        assert!(!parse(&["--notification", "false"]).notification);
        assert!(!parse(&["--notification=false"]).notification);
        assert!(parse(&["--notification=true"]).notification);
    }

    #[test]
    fn rejects_non_numeric_interval() {
        let argv = ["pingcfg", "--interval", "2s"];
        assert!(Args::try_parse_from(argv).is_err());
    }

    #[test]
    fn collects_in_order() {
        let hosts: Hosts = ["b", "a", "b"].map(String::from).into_iter().collect();
        assert_eq!(hosts.as_slice(), ["b", "a", "b"]);
    }

    #[test]
    fn add_appends() {
        let mut hosts = Hosts::default();
        assert!(hosts.is_empty());
        hosts.add("x");
        hosts.add("x");
        hosts.extend(["y".to_string()]);
        assert_eq!(hosts.len(), 3);
        assert_eq!(hosts.as_slice(), ["x", "x", "y"]);
    }
}
