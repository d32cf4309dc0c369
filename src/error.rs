use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArxivError {
    /// Connection, timeout, non-2xx status or body read failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body is not a well-formed Atom feed.
    #[error("failed to parse atom feed: {0}")]
    Parse(#[from] quick_xml::DeError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ArxivError>;
