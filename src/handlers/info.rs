use crate::{
    handlers_utils::ApiError,
    interactors::{GetVideoInfoInput, Interactor as _},
    models::InfoResponse,
    router::AppState,
    services::VideoInfoProvider,
};

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{event, instrument, Level};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct InfoParams {
    pub url: String,
}

#[instrument(skip_all)]
pub async fn info<P: VideoInfoProvider>(
    State(state): State<Arc<AppState<P>>>,
    params: Result<Query<InfoParams>, QueryRejection>,
) -> Result<Json<InfoResponse>, ApiError> {
    let Query(InfoParams { url }) = params?;

    event!(Level::DEBUG, %url, "Got info request");

    let response = state.get_video_info.execute(GetVideoInfoInput::new(&url)).await?;
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fake::FakeProvider;

    use axum::http::StatusCode;
    use serde_json::json;
    use tempfile::TempDir;

    fn state(provider: FakeProvider, dir: &TempDir) -> State<Arc<AppState<FakeProvider>>> {
        State(Arc::new(AppState::new(Arc::new(provider), dir.path())))
    }

    fn params(url: &str) -> Result<Query<InfoParams>, QueryRejection> {
        Ok(Query(InfoParams { url: url.to_owned() }))
    }

    #[tokio::test]
    async fn test_info_response() {
        let dir = TempDir::new().unwrap();
        let provider = FakeProvider::with_info(json!({
            "title": "Title",
            "uploader": "Uploader",
            "duration": 212,
            "thumbnail": "https://i.ytimg.com/vi/abcdefghijk/hqdefault.jpg",
            "formats": [
                {"format_id": "18", "ext": "mp4", "vcodec": "avc1", "acodec": "mp4a.40.2", "resolution": "640x360", "filesize": 10_485_760},
                {"format_id": "251", "ext": "webm", "vcodec": "none", "acodec": "opus", "abr": 160},
            ]
        }));

        let Json(response) = info(state(provider, &dir), params("https://youtu.be/abcdefghijk")).await.unwrap();

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "title": "Title",
                "author": "Uploader",
                "length": 212,
                "thumbnail": "https://i.ytimg.com/vi/abcdefghijk/hqdefault.jpg",
                "formats": [
                    {"format_id": "18", "ext": "mp4", "resolution": "640x360", "fps": "", "abr": "", "type": "video", "size_mb": 10.0},
                    {"format_id": "251", "ext": "webm", "resolution": "", "fps": "", "abr": 160, "type": "audio", "size_mb": null},
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_missing_url_is_bad_request() {
        let dir = TempDir::new().unwrap();

        let err = info(state(FakeProvider::default(), &dir), Ok(Query(InfoParams::default())))
            .await
            .unwrap_err();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "URL is empty");
    }

    #[tokio::test]
    async fn test_extraction_failure_is_bad_request() {
        let dir = TempDir::new().unwrap();

        let err = info(state(FakeProvider::default(), &dir), params("https://youtu.be/abcdefghijk"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "ERROR: Video unavailable");
    }
}
