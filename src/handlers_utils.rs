pub mod content_disposition;
pub mod error;

pub use error::ApiError;
