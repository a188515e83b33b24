mod download;
mod extraction;

pub use download::Error as DownloadError;
pub use extraction::Error as ExtractionError;
