use super::VideoInfoProvider;
use crate::{
    errors::{DownloadError, ExtractionError},
    models::VideoInfo,
};

use std::sync::Mutex;
use url::Url;

#[derive(Debug, Clone, PartialEq)]
pub struct DownloadCall {
    pub url: String,
    pub format_id: String,
    pub output_template: String,
}

/// In-memory provider: returns `info` (or an extraction failure when `None`) and writes a file with `download_ext`.
#[derive(Debug, Default)]
pub struct FakeProvider {
    pub info: Option<VideoInfo>,
    pub download_ext: Option<&'static str>,
    pub download_fails: bool,
    pub fetched: Mutex<Vec<String>>,
    pub downloads: Mutex<Vec<DownloadCall>>,
}

impl FakeProvider {
    pub fn with_info(info: serde_json::Value) -> Self {
        Self {
            info: Some(serde_json::from_value(info).unwrap()),
            ..Self::default()
        }
    }

    pub fn downloading(mut self, ext: &'static str) -> Self {
        self.download_ext = Some(ext);
        self
    }

    pub fn failing_download(mut self) -> Self {
        self.download_fails = true;
        self
    }
}

impl VideoInfoProvider for FakeProvider {
    async fn fetch_info(&self, url: &Url) -> Result<VideoInfo, ExtractionError> {
        self.fetched.lock().unwrap().push(url.to_string());

        self.info.clone().ok_or_else(|| ExtractionError::Failed {
            message: "ERROR: Video unavailable".into(),
        })
    }

    async fn download_format(&self, url: &Url, format_id: &str, output_template: &str) -> Result<(), DownloadError> {
        self.downloads.lock().unwrap().push(DownloadCall {
            url: url.to_string(),
            format_id: format_id.to_owned(),
            output_template: output_template.to_owned(),
        });

        if self.download_fails {
            return Err(DownloadError::Failed {
                message: "ERROR: Requested format is not available".into(),
            });
        }

        if let Some(ext) = self.download_ext {
            tokio::fs::write(output_template.replace("%(ext)s", ext), b"media").await?;
        }

        Ok(())
    }
}
