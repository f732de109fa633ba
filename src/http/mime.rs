use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

// mime type followed by the extensions it covers
const EXTENSIONS: &[(&str, &[&str])] = &[
    ("application/javascript", &["js", "mjs"]),
    ("application/json", &["json", "map"]),
    ("application/ogg", &["ogg"]),
    ("application/pdf", &["pdf"]),
    ("application/wasm", &["wasm"]),
    ("application/xml", &["xml", "xsl"]),
    ("application/zip", &["zip"]),
    ("application/gzip", &["gz"]),
    ("audio/mpeg", &["mp3", "mpga"]),
    ("audio/wav", &["wav"]),
    ("font/woff", &["woff"]),
    ("font/woff2", &["woff2"]),
    ("font/ttf", &["ttf"]),
    ("image/gif", &["gif"]),
    ("image/jpeg", &["jpeg", "jpe", "jpg"]),
    ("image/png", &["png"]),
    ("image/svg+xml", &["svg"]),
    ("image/webp", &["webp"]),
    ("image/vnd.microsoft.icon", &["ico"]),
    ("text/css", &["css"]),
    ("text/csv", &["csv"]),
    ("text/html", &["html", "htm"]),
    ("text/markdown", &["md"]),
    ("text/plain", &["txt", "asc", "log"]),
    ("video/mp4", &["mp4"]),
    ("video/mpeg", &["mpeg", "mpe", "mpg"]),
    ("video/quicktime", &["qt", "mov"]),
    ("video/webm", &["webm"]),
];

static MIME_TYPES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    EXTENSIONS
        .iter()
        .flat_map(|(mime, exts)| exts.iter().map(move |ext| (*ext, *mime)))
        .collect()
});

/// Infers a MIME type from the file extension of `path`.
///
/// Lookup is case-insensitive. Unknown or missing extensions fall back to
/// [`DEFAULT_MIME_TYPE`].
pub fn from_path(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| MIME_TYPES.get(ext.to_ascii_lowercase().as_str()).copied())
        .unwrap_or(DEFAULT_MIME_TYPE)
}
