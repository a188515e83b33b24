use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt::{self, Display, Formatter};

const SUPPORTED_EXTENSIONS: [&str; 4] = ["mp4", "webm", "m4a", "mp3"];
const NO_CODEC: &str = "none";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    Video,
    Audio,
}

impl FormatKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Audio => "audio",
        }
    }
}

impl Display for FormatKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format descriptor as emitted by the extractor. Numbers keep their JSON text so `128` and `128.0` stay distinct.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFormat {
    pub format_id: String,
    pub ext: Option<String>,
    pub acodec: Option<String>,
    pub vcodec: Option<String>,
    pub resolution: Option<String>,
    pub fps: Option<Number>,
    pub abr: Option<Number>,
    pub filesize: Option<Number>,
    pub filesize_approx: Option<Number>,
}

fn is_codec_present(codec: Option<&str>) -> bool {
    codec.is_some_and(|codec| codec != NO_CODEC)
}

impl RawFormat {
    #[must_use]
    pub fn is_supported_extension(&self) -> bool {
        self.ext.as_deref().is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
    }

    /// Audio-only when there is an audio codec and no video codec; everything else, silent video included, is video.
    #[must_use]
    pub fn kind(&self) -> FormatKind {
        if is_codec_present(self.acodec.as_deref()) && !is_codec_present(self.vcodec.as_deref()) {
            FormatKind::Audio
        } else {
            FormatKind::Video
        }
    }

    #[must_use]
    pub fn group_key(&self) -> GroupKey {
        let kind = self.kind();
        let quality = match kind {
            FormatKind::Video => self.resolution.clone(),
            FormatKind::Audio => self.abr.as_ref().map(ToString::to_string),
        };

        GroupKey { quality, kind }
    }

    /// Value two encodings of the same group are compared by: `fps` for video, `abr` for audio.
    #[must_use]
    pub fn rank(&self) -> f64 {
        let value = match self.kind() {
            FormatKind::Video => self.fps.as_ref(),
            FormatKind::Audio => self.abr.as_ref(),
        };

        value.and_then(Number::as_f64).unwrap_or(0.0)
    }

    /// `filesize`, or `filesize_approx` when the exact size is missing or zero.
    #[must_use]
    pub fn size_bytes(&self) -> Option<f64> {
        [self.filesize.as_ref(), self.filesize_approx.as_ref()]
            .into_iter()
            .flatten()
            .filter_map(Number::as_f64)
            .find(|size| *size != 0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub quality: Option<String>,
    pub kind: FormatKind,
}

impl Display for GroupKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.quality.as_deref().unwrap_or("None"), self.kind)
    }
}
