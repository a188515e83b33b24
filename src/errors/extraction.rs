use std::io;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("URL is empty")]
    EmptyUrl,
    #[error("Invalid URL `{url}`: {source}")]
    InvalidUrl { url: Box<str>, source: url::ParseError },
    #[error("{message}")]
    Failed { message: Box<str> },
    #[error("Extractor timed out after {secs} seconds")]
    TimedOut { secs: u64 },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
