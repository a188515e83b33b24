use crate::{
    handlers_utils::{content_disposition, ApiError},
    interactors::{DownloadVideoInput, DownloadedFile, Interactor as _},
    router::AppState,
    services::VideoInfoProvider,
};

use axum::{
    body::Body,
    extract::{rejection::QueryRejection, Query, State},
    http::{
        header::{CONTENT_DISPOSITION, CONTENT_LENGTH, CONTENT_TYPE},
        HeaderValue,
    },
    response::{IntoResponse as _, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tokio::fs::File;
use tokio_util::io::ReaderStream;
use tracing::{event, instrument, Level};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DownloadParams {
    pub url: String,
    pub format_id: String,
}

#[instrument(skip_all)]
pub async fn download<P: VideoInfoProvider>(
    State(state): State<Arc<AppState<P>>>,
    params: Result<Query<DownloadParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(DownloadParams { url, format_id }) = params?;

    event!(Level::DEBUG, %url, %format_id, "Got download request");

    let DownloadedFile { path, file_name } = state
        .download_video
        .execute(DownloadVideoInput::new(&url, &format_id))
        .await?;

    let file = File::open(&path)
        .await
        .map_err(|err| ApiError::internal(format!("Failed to open downloaded file: {err}")))?;
    let file_len = file
        .metadata()
        .await
        .map_err(|err| ApiError::internal(format!("Failed to read downloaded file metadata: {err}")))?
        .len();

    let content_type = mime_guess::from_path(&path).first_or_octet_stream();
    let headers = [
        (
            CONTENT_TYPE,
            HeaderValue::from_str(content_type.as_ref()).map_err(|_| ApiError::internal("Invalid content type"))?,
        ),
        (CONTENT_LENGTH, HeaderValue::from(file_len)),
        (
            CONTENT_DISPOSITION,
            HeaderValue::from_str(&content_disposition::attachment(&file_name))
                .map_err(|_| ApiError::internal("Invalid content disposition"))?,
        ),
    ];

    event!(Level::INFO, %file_name, file_len, "Sending file");

    Ok((headers, Body::from_stream(ReaderStream::new(file))).into_response())
}
