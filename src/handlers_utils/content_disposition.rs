const FALLBACK_FILE_NAME: &str = "download";

/// Keeps ASCII alphanumerics and `. - _ ( )` plus spaces; everything else becomes `_`.
fn ascii_file_name(file_name: &str) -> String {
    let sanitized: String = file_name
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || matches!(ch, '.' | '-' | '_' | ' ' | '(' | ')') {
                ch
            } else {
                '_'
            }
        })
        .collect();

    match sanitized.trim() {
        "" => FALLBACK_FILE_NAME.to_owned(),
        trimmed => trimmed.to_owned(),
    }
}

/// `Content-Disposition` value with an ASCII `filename` and the exact name in `filename*`.
#[must_use]
pub fn attachment(file_name: &str) -> String {
    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        ascii_file_name(file_name),
        urlencoding::encode(file_name)
    )
}
