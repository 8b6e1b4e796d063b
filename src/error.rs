use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A value could not be turned into its canonical text.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Unsupported function selector or other setup problem.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: yaml_rust2::ScanError,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
