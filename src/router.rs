use crate::{
    config::{CorsConfig, StaticFilesConfig},
    handlers::{download, health, info},
    interactors::{DownloadVideo, GetVideoInfo},
    services::VideoInfoProvider,
};

use axum::{
    http::{header::CONTENT_DISPOSITION, HeaderValue},
    routing::get,
    Router,
};
use std::{path::PathBuf, sync::Arc};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{event, Level};

pub struct AppState<P> {
    pub get_video_info: GetVideoInfo<P>,
    pub download_video: DownloadVideo<P>,
}

impl<P> AppState<P> {
    pub fn new(provider: Arc<P>, downloads_dir: impl Into<PathBuf>) -> Self {
        Self {
            get_video_info: GetVideoInfo::new(provider.clone()),
            download_video: DownloadVideo::new(provider, downloads_dir),
        }
    }
}

fn cors_layer(cors_cfg: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([CONTENT_DISPOSITION]);

    if cors_cfg.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins = cors_cfg
        .allow_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(err) => {
                event!(Level::WARN, %origin, %err, "Skip invalid CORS origin");
                None
            }
        })
        .collect::<Vec<_>>();

    layer.allow_origin(AllowOrigin::list(origins))
}

pub fn build<P: VideoInfoProvider>(state: AppState<P>, static_files_cfg: &StaticFilesConfig, cors_cfg: &CorsConfig) -> Router {
    let api = Router::new()
        .route("/info", get(info::<P>))
        .route("/download", get(download::<P>));

    Router::new()
        .merge(api.clone())
        .nest("/api", api)
        .route("/health", get(health))
        .route_service("/", ServeFile::new(static_files_cfg.index_path()))
        .nest_service("/static", ServeDir::new(&static_files_cfg.dir))
        .layer(cors_layer(cors_cfg))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}
