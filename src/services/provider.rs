use crate::{
    errors::{DownloadError, ExtractionError},
    models::VideoInfo,
};

use std::future::Future;
use url::Url;

/// Extraction backend: metadata lookup and download of a single format.
pub trait VideoInfoProvider: Send + Sync + 'static {
    fn fetch_info(&self, url: &Url) -> impl Future<Output = Result<VideoInfo, ExtractionError>> + Send;

    /// Downloads `format_id` to `output_template`, where `%(ext)s` is replaced with the final extension.
    fn download_format(
        &self,
        url: &Url,
        format_id: &str,
        output_template: &str,
    ) -> impl Future<Output = Result<(), DownloadError>> + Send;
}
