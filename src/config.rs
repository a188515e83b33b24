#![allow(clippy::module_name_repetitions)]

use serde::Deserialize;
use std::{
    env::{self, VarError},
    fs, io,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8000,
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct YtDlpConfig {
    pub executable_path: Box<str>,
    pub cookies_path: Option<Box<str>>,
}

impl Default for YtDlpConfig {
    fn default() -> Self {
        Self {
            executable_path: "yt-dlp".into(),
            cookies_path: None,
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct TimeoutsConfig {
    pub info: u64,
    pub download: u64,
}

impl TimeoutsConfig {
    #[must_use]
    pub const fn info(&self) -> Duration {
        Duration::from_secs(self.info)
    }

    #[must_use]
    pub const fn download(&self) -> Duration {
        Duration::from_secs(self.download)
    }
}

impl Default for TimeoutsConfig {
    fn default() -> Self {
        Self { info: 180, download: 1800 }
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct DownloadsConfig {
    pub dir: PathBuf,
}

impl Default for DownloadsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("downloads"),
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct StaticFilesConfig {
    pub dir: PathBuf,
    pub index: Box<str>,
}

impl StaticFilesConfig {
    #[must_use]
    pub fn index_path(&self) -> PathBuf {
        self.dir.join(self.index.as_ref())
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("static"),
            index: "index.html".into(),
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct CorsConfig {
    pub allow_origins: Vec<Box<str>>,
}

impl CorsConfig {
    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        self.allow_origins.is_empty() || self.allow_origins.iter().any(|origin| &**origin == "*")
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origins: vec!["*".into()],
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub yt_dlp: YtDlpConfig,
    #[serde(default)]
    pub timeouts: TimeoutsConfig,
    #[serde(default)]
    pub downloads: DownloadsConfig,
    #[serde(default)]
    pub static_files: StaticFilesConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error(transparent)]
    IO(#[from] io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

/// # Panics
///
/// Panics if the `CONFIG_PATH` environment variable is not valid UTF-8.
#[must_use]
pub fn get_path() -> Box<str> {
    let path = match env::var("CONFIG_PATH") {
        Ok(val) => val,
        Err(VarError::NotPresent) => String::from("config.toml"),
        Err(VarError::NotUnicode(_)) => {
            panic!("`CONFIG_PATH` env variable is not a valid UTF-8 string!");
        }
    };

    path.into_boxed_str()
}

#[allow(clippy::missing_errors_doc)]
pub fn parse_from_fs(path: impl AsRef<Path>) -> Result<Config, ParseError> {
    let raw = fs::read_to_string(path)?;
    parse_from_str(&raw)
}

#[allow(clippy::missing_errors_doc)]
pub fn parse_from_str(raw: &str) -> Result<Config, ParseError> {
    let cfg = toml::from_str(raw)?;
    Ok(cfg)
}
