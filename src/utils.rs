use crate::config::Config;

/// Character count of the longest host name, or 0 when there are none.
pub fn host_name_length(hosts: &[String]) -> usize {
    hosts
        .iter()
        .map(|host| host.chars().count())
        .max()
        .unwrap_or(0)
}

/// One line per host, names left-aligned to `width` columns.
pub fn format_host_lines(config: &Config, width: usize) -> Vec<String> {
    config
        .hosts
        .iter()
        .enumerate()
        .map(|(index, host)| {
            format!(
                "{:>3}. {host:<width$} every {}",
                index + 1,
                config.poll_interval
            )
        })
        .collect()
}

pub fn format_summary(config: &Config) -> String {
    format!(
        "{} host(s), interval {}, ping timeout {}, keeping {} stats, notifications {}",
        config.hosts.len(),
        config.poll_interval,
        config.ping_timeout,
        config.max_stats,
        if config.show_notification { "on" } else { "off" },
    )
}
