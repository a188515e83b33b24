use crate::{config::Config, router::AppState, services::YtDlp};

use std::sync::Arc;
use tracing::{event, Level};

pub(super) fn init(config: &Config) -> AppState<YtDlp> {
    let provider = Arc::new(YtDlp::new(&config.yt_dlp, &config.timeouts));

    event!(
        Level::DEBUG,
        executable_path = %config.yt_dlp.executable_path,
        downloads_dir = ?config.downloads.dir,
        "App state created"
    );

    AppState::new(provider, config.downloads.dir.clone())
}
