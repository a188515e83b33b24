use super::ExtractionError;

use std::{io, path::PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Format id is empty")]
    EmptyFormatId,
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error("{message}")]
    Failed { message: Box<str> },
    #[error("Download timed out after {secs} seconds")]
    TimedOut { secs: u64 },
    #[error("Download failed")]
    FileNotFound { dir: PathBuf, file_stem: Box<str> },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
