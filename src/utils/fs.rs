use regex::Regex;
use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

/// Extensions a finished download is looked up by, in probing order.
pub const DOWNLOAD_EXTENSIONS: [&str; 4] = ["mp4", "webm", "m4a", "mp3"];

static FORBIDDEN_FILENAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\\/*?:"<>|]"#).expect("Forbidden filename chars pattern is valid"));

/// Removes `\ / * ? : " < > |` so a title can be used as a path component.
#[must_use]
pub fn sanitize_filename(title: &str) -> String {
    FORBIDDEN_FILENAME_CHARS.replace_all(title, "").into_owned()
}

/// Returns the first `{file_stem}.{ext}` in `dir` that exists, probing [`DOWNLOAD_EXTENSIONS`] in order.
pub async fn find_downloaded_file(dir: impl AsRef<Path>, file_stem: &str) -> Option<PathBuf> {
    for ext in DOWNLOAD_EXTENSIONS {
        let path = dir.as_ref().join(format!("{file_stem}.{ext}"));
        if tokio::fs::metadata(&path).await.is_ok_and(|metadata| metadata.is_file()) {
            return Some(path);
        }
    }

    None
}
