use super::VideoInfoProvider;
use crate::{
    config::{TimeoutsConfig, YtDlpConfig},
    errors::{DownloadError, ExtractionError},
    models::VideoInfo,
};

use std::{io, process::Stdio, time::Duration};
use tokio::process::Command;
use tracing::{event, instrument, Level};
use url::Url;

#[derive(Debug)]
enum RunError {
    Io(io::Error),
    TimedOut,
    Failed(Box<str>),
}

fn failure_message(status: std::process::ExitStatus, stderr: &[u8]) -> Box<str> {
    let stderr = String::from_utf8_lossy(stderr);
    match stderr.lines().map(str::trim).filter(|line| !line.is_empty()).last() {
        Some(line) => line.into(),
        None => format!("yt-dlp exited with status `{status}`").into_boxed_str(),
    }
}

async fn run(executable_path: &str, args: &[&str], timeout: Duration) -> Result<Vec<u8>, RunError> {
    let output = Command::new(executable_path)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output();

    match tokio::time::timeout(timeout, output).await {
        Ok(Ok(output)) if output.status.success() => Ok(output.stdout),
        Ok(Ok(output)) => {
            event!(
                Level::ERROR,
                status = %output.status,
                stderr = %String::from_utf8_lossy(&output.stderr),
                "yt-dlp exited with error status"
            );
            Err(RunError::Failed(failure_message(output.status, &output.stderr)))
        }
        Ok(Err(err)) => Err(RunError::Io(err)),
        Err(_) => {
            event!(Level::ERROR, "yt-dlp timed out");
            Err(RunError::TimedOut)
        }
    }
}

#[derive(Debug, Clone)]
pub struct YtDlp {
    executable_path: Box<str>,
    cookies_path: Option<Box<str>>,
    info_timeout: Duration,
    download_timeout: Duration,
}

impl YtDlp {
    #[must_use]
    pub fn new(yt_dlp_cfg: &YtDlpConfig, timeouts_cfg: &TimeoutsConfig) -> Self {
        Self {
            executable_path: yt_dlp_cfg.executable_path.clone(),
            cookies_path: yt_dlp_cfg.cookies_path.clone(),
            info_timeout: timeouts_cfg.info(),
            download_timeout: timeouts_cfg.download(),
        }
    }

    fn push_cookies<'a>(&'a self, args: &mut Vec<&'a str>) {
        if let Some(cookies_path) = self.cookies_path.as_deref() {
            event!(Level::TRACE, "Using cookies from: {}", cookies_path);

            args.push("--cookies");
            args.push(cookies_path);
        } else {
            event!(Level::TRACE, "No cookies provided");
        }
    }

    fn info_args<'a>(&'a self, url: &'a str) -> Vec<&'a str> {
        let mut args = vec![
            "--ignore-config",
            "--no-colors",
            "--socket-timeout",
            "15",
            "--no-playlist",
            "--skip-download",
            "--no-warnings",
            "--quiet",
            "-J",
        ];

        self.push_cookies(&mut args);

        args.push("--");
        args.push(url);
        args
    }

    fn download_args<'a>(&'a self, url: &'a str, format_id: &'a str, output_template: &'a str) -> Vec<&'a str> {
        let mut args = vec![
            "--ignore-config",
            "--no-colors",
            "--socket-timeout",
            "15",
            "--no-playlist",
            "--no-mtime",
            "--no-warnings",
            "--quiet",
            "--no-progress",
            "-f",
            format_id,
            "-o",
            output_template,
        ];

        self.push_cookies(&mut args);

        args.push("--");
        args.push(url);
        args
    }
}

impl VideoInfoProvider for YtDlp {
    #[instrument(skip_all, fields(%url))]
    async fn fetch_info(&self, url: &Url) -> Result<VideoInfo, ExtractionError> {
        let args = self.info_args(url.as_str());

        event!(Level::DEBUG, "Getting media info");

        let stdout = run(&self.executable_path, &args, self.info_timeout)
            .await
            .map_err(|err| match err {
                RunError::Io(err) => ExtractionError::Io(err),
                RunError::TimedOut => ExtractionError::TimedOut {
                    secs: self.info_timeout.as_secs(),
                },
                RunError::Failed(message) => ExtractionError::Failed { message },
            })?;

        let info: VideoInfo = serde_json::from_slice(&stdout)?;

        event!(Level::DEBUG, title = ?info.title, formats = info.formats.len(), "Got media info");

        Ok(info)
    }

    #[instrument(skip_all, fields(%url, format_id = %format_id, output_template = %output_template))]
    async fn download_format(&self, url: &Url, format_id: &str, output_template: &str) -> Result<(), DownloadError> {
        let args = self.download_args(url.as_str(), format_id, output_template);

        event!(Level::DEBUG, "Downloading format");

        run(&self.executable_path, &args, self.download_timeout)
            .await
            .map_err(|err| match err {
                RunError::Io(err) => DownloadError::Io(err),
                RunError::TimedOut => DownloadError::TimedOut {
                    secs: self.download_timeout.as_secs(),
                },
                RunError::Failed(message) => DownloadError::Failed { message },
            })?;

        event!(Level::DEBUG, "Format downloaded");

        Ok(())
    }
}
