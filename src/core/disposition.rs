use crate::models::parameters::Frequency;
use regex::Regex;
use std::sync::LazyLock;

static FILENAME_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:^|;)\s*filename\s*=\s*(?:"([^"]*)"|([^;\s]+))"#)
        .expect("filename pattern is valid")
});

/// Extract the `filename=` token of a `Content-Disposition` value.
///
/// Quotes are optional. `filename*=` (RFC 5987) is not read. Any directory
/// part is stripped so the result is always a bare file name.
pub fn filename_from_disposition(value: &str) -> Option<String> {
    let caps = FILENAME_PARAM.captures(value)?;
    let raw = caps.get(1).or_else(|| caps.get(2))?.as_str().trim();

    let name = raw.rsplit(['/', '\\']).next().unwrap_or(raw).trim();

    if name.is_empty() || name == "." || name == ".." {
        return None;
    }

    Some(name.to_string())
}

/// Name used when the server does not suggest one.
pub fn fallback_filename(frequency: Frequency) -> String {
    format!("Attendance_Report_{}.xlsx", frequency.as_str())
}

/// Header value when present and parseable, otherwise the fallback.
pub fn resolve_filename(disposition: Option<&str>, frequency: Frequency) -> String {
    disposition
        .and_then(filename_from_disposition)
        .unwrap_or_else(|| fallback_filename(frequency))
}
