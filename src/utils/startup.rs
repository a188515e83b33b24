use crate::config::{DownloadsConfig, StaticFilesConfig, YtDlpConfig};

use std::{io, path::PathBuf, process::Stdio};
use tokio::process::Command;
use tracing::{event, Level};

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Failed to create downloads dir `{path}`: {source}")]
    CreateDownloadsDir { path: PathBuf, source: io::Error },
}

pub async fn on_startup(
    yt_dlp_cfg: &YtDlpConfig,
    downloads_cfg: &DownloadsConfig,
    static_files_cfg: &StaticFilesConfig,
) -> Result<(), StartupError> {
    tokio::fs::create_dir_all(&downloads_cfg.dir)
        .await
        .map_err(|source| StartupError::CreateDownloadsDir {
            path: downloads_cfg.dir.clone(),
            source,
        })?;

    event!(Level::DEBUG, dir = ?downloads_cfg.dir, "Downloads dir is ready");

    match Command::new(yt_dlp_cfg.executable_path.as_ref())
        .arg("--version")
        .stdin(Stdio::null())
        .kill_on_drop(true)
        .output()
        .await
    {
        Ok(output) if output.status.success() => {
            let version = String::from_utf8_lossy(&output.stdout);
            event!(Level::INFO, version = version.trim(), "Found yt-dlp");
        }
        Ok(output) => {
            event!(Level::WARN, status = %output.status, "yt-dlp version check failed");
        }
        Err(err) => {
            event!(
                Level::WARN,
                %err,
                executable_path = %yt_dlp_cfg.executable_path,
                "yt-dlp is not available, info and download requests will fail"
            );
        }
    }

    let index_path = static_files_cfg.index_path();
    if !tokio::fs::metadata(&index_path).await.is_ok_and(|metadata| metadata.is_file()) {
        event!(Level::WARN, ?index_path, "Index page not found");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[tokio::test]
    async fn test_downloads_dir_error_names_path() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"file").unwrap();
        let downloads_cfg = DownloadsConfig {
            dir: blocker.join("downloads"),
        };

        let err = on_startup(&YtDlpConfig::default(), &downloads_cfg, &StaticFilesConfig::default())
            .await
            .unwrap_err();

        assert!(matches!(err, StartupError::CreateDownloadsDir { .. }));
        assert!(err
            .to_string()
            .starts_with(&format!("Failed to create downloads dir `{}`: ", downloads_cfg.dir.display())));
    }
}
