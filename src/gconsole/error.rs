use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to talk to the launcher: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode event {line:?}: {source}")]
    Decode {
        line: String,
        source: serde_json::Error,
    },

    #[error("failed to encode action: {0}")]
    Encode(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
