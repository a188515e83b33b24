use crate::{
    errors::DownloadError,
    interactors::Interactor,
    services::VideoInfoProvider,
    utils::{find_downloaded_file, parse_url, sanitize_filename},
};

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::{event, field, instrument, Level, Span};

const FALLBACK_FILE_STEM: &str = "video";

pub struct DownloadVideo<P> {
    provider: Arc<P>,
    downloads_dir: Arc<Path>,
}

impl<P> DownloadVideo<P> {
    pub fn new(provider: Arc<P>, downloads_dir: impl Into<PathBuf>) -> Self {
        let downloads_dir: PathBuf = downloads_dir.into();

        Self {
            provider,
            downloads_dir: downloads_dir.into(),
        }
    }
}

pub struct DownloadVideoInput<'a> {
    pub url: &'a str,
    pub format_id: &'a str,
}

impl<'a> DownloadVideoInput<'a> {
    pub const fn new(url: &'a str, format_id: &'a str) -> Self {
        Self { url, format_id }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DownloadedFile {
    pub path: PathBuf,
    pub file_name: String,
}

fn file_stem(title: Option<&str>, id: Option<&str>) -> String {
    [title, id]
        .into_iter()
        .flatten()
        .map(sanitize_filename)
        .find(|stem| !stem.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_FILE_STEM.to_owned())
}

impl<P: VideoInfoProvider> Interactor for DownloadVideo<P> {
    type Input<'a>
        = DownloadVideoInput<'a>
    where
        Self: 'a;
    type Output = DownloadedFile;
    type Err = DownloadError;

    #[instrument(target = "download", skip_all, fields(url = input.url, format_id = input.format_id, file_path = field::Empty))]
    async fn execute<'a>(&'a self, input: Self::Input<'a>) -> Result<Self::Output, Self::Err> {
        let url = parse_url(input.url)?;
        let format_id = input.format_id.trim();
        if format_id.is_empty() {
            return Err(DownloadError::EmptyFormatId);
        }

        let info = self.provider.fetch_info(&url).await?;
        let file_stem = file_stem(info.title.as_deref(), info.id.as_deref());

        event!(Level::DEBUG, %file_stem, "Got file stem");

        let output_template = self.downloads_dir.join(format!("{file_stem}.%(ext)s"));
        self.provider
            .download_format(&url, format_id, &output_template.to_string_lossy())
            .await?;

        let Some(path) = find_downloaded_file(&self.downloads_dir, &file_stem).await else {
            event!(Level::ERROR, dir = ?self.downloads_dir, %file_stem, "Downloaded file not found");

            return Err(DownloadError::FileNotFound {
                dir: self.downloads_dir.to_path_buf(),
                file_stem: file_stem.into_boxed_str(),
            });
        };

        Span::current().record("file_path", field::display(path.display()));

        event!(Level::INFO, "Video downloaded");

        let file_name = path
            .file_name()
            .map_or_else(|| file_stem.clone(), |name| name.to_string_lossy().into_owned());

        Ok(DownloadedFile { path, file_name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::ExtractionError, services::fake::FakeProvider};

    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_file_stem_fallbacks() {
        assert_eq!(file_stem(Some("A: B?"), Some("id")), "A B");
        assert_eq!(file_stem(Some("???"), Some("abcdefghijk")), "abcdefghijk");
        assert_eq!(file_stem(None, None), "video");
    }

    #[tokio::test]
    async fn test_downloads_to_sanitized_title() {
        let dir = TempDir::new().unwrap();
        let provider = Arc::new(FakeProvider::with_info(json!({"id": "abcdefghijk", "title": "What? A \"title\""})).downloading("webm"));
        let interactor = DownloadVideo::new(provider.clone(), dir.path());

        let file = interactor
            .execute(DownloadVideoInput::new("youtu.be/abcdefghijk", "251"))
            .await
            .unwrap();

        assert_eq!(file.path, dir.path().join("What A title.webm"));
        assert_eq!(file.file_name, "What A title.webm");

        let downloads = provider.downloads.lock().unwrap();
        assert_eq!(downloads.len(), 1);
        assert_eq!(downloads[0].url, "https://youtu.be/abcdefghijk");
        assert_eq!(downloads[0].format_id, "251");
        assert_eq!(
            downloads[0].output_template,
            dir.path().join("What A title.%(ext)s").to_string_lossy()
        );
    }

    #[tokio::test]
    async fn test_missing_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let provider = Arc::new(FakeProvider::with_info(json!({"title": "Title"})));
        let interactor = DownloadVideo::new(provider, dir.path());

        let err = interactor
            .execute(DownloadVideoInput::new("https://youtu.be/abcdefghijk", "18"))
            .await
            .unwrap_err();

        assert!(matches!(err, DownloadError::FileNotFound { .. }));
        assert_eq!(err.to_string(), "Download failed");
    }

    #[tokio::test]
    async fn test_empty_format_id() {
        let dir = TempDir::new().unwrap();
        let provider = Arc::new(FakeProvider::with_info(json!({"title": "Title"})));
        let interactor = DownloadVideo::new(provider.clone(), dir.path());

        let err = interactor
            .execute(DownloadVideoInput::new("https://youtu.be/abcdefghijk", " "))
            .await
            .unwrap_err();

        assert!(matches!(err, DownloadError::EmptyFormatId));
        assert!(provider.fetched.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_extraction_error_is_wrapped() {
        let dir = TempDir::new().unwrap();
        let interactor = DownloadVideo::new(Arc::new(FakeProvider::default()), dir.path());

        let err = interactor
            .execute(DownloadVideoInput::new("https://youtu.be/abcdefghijk", "18"))
            .await
            .unwrap_err();

        assert!(matches!(err, DownloadError::Extraction(ExtractionError::Failed { .. })));
    }

    #[tokio::test]
    async fn test_download_error_is_returned() {
        let dir = TempDir::new().unwrap();
        let provider = Arc::new(FakeProvider::with_info(json!({"title": "Title"})).failing_download());
        let interactor = DownloadVideo::new(provider, dir.path());

        let err = interactor
            .execute(DownloadVideoInput::new("https://youtu.be/abcdefghijk", "999"))
            .await
            .unwrap_err();

        assert!(matches!(err, DownloadError::Failed { .. }));
    }
}
