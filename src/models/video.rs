use super::{DisplayFormat, RawFormat};

use serde::{Deserialize, Serialize};
use serde_json::Number;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoInfo {
    pub id: Option<String>,
    pub title: Option<String>,
    pub uploader: Option<String>,
    pub duration: Option<Number>,
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub formats: Vec<RawFormat>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InfoResponse {
    pub title: Option<String>,
    pub author: Option<String>,
    pub length: Option<Number>,
    pub thumbnail: Option<String>,
    pub formats: Vec<DisplayFormat>,
}

impl InfoResponse {
    #[must_use]
    pub fn new(
        VideoInfo {
            title,
            uploader,
            duration,
            thumbnail,
            ..
        }: VideoInfo,
        formats: Vec<DisplayFormat>,
    ) -> Self {
        Self {
            title,
            author: uploader,
            length: duration,
            thumbnail,
            formats,
        }
    }
}
