use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot open config file {path}: {source}")]
    FilePath {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot decode config file {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid duration {input:?}: {source}")]
    Format {
        input: String,
        #[source]
        source: humantime::DurationError,
    },
}
