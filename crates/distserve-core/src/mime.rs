//! Extension → content type mapping for served files.

use std::path::Path;

/// Content type of the application shell.
pub const SHELL_CONTENT_TYPE: &str = "text/html";

/// Content type used when nothing better is known.
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Returns the content type for `path` based on its extension.
///
/// The common frontend build outputs (`js`, `css`, `png`, `svg`, `jpg`/`jpeg`)
/// map to fixed types. Any other extension goes through the `mime_guess`
/// database, and anything it does not know is served as
/// `application/octet-stream`. Matching ignores ASCII case.
///
/// # Examples
///
/// ```
/// use distserve_core::content_type_for;
/// use std::path::Path;
///
/// assert_eq!(content_type_for(Path::new("style.CSS")), "text/css");
/// ```
pub fn content_type_for(path: &Path) -> String {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return FALLBACK_CONTENT_TYPE.to_string();
    };
    let ext = ext.to_ascii_lowercase();

    let fixed = match ext.as_str() {
        "js" => Some("application/javascript"),
        "css" => Some("text/css"),
        "png" => Some("image/png"),
        "svg" => Some("image/svg+xml"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        _ => None,
    };

    match fixed {
        Some(ct) => ct.to_string(),
        None => mime_guess::from_ext(&ext)
            .first()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_else(|| FALLBACK_CONTENT_TYPE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ct(name: &str) -> String {
        content_type_for(Path::new(name))
    }

    #[test]
    fn fixed_table_entries() {
        assert_eq!(ct("index-abc123.js"), "application/javascript");
        assert_eq!(ct("index-abc123.css"), "text/css");
        assert_eq!(ct("logo.png"), "image/png");
        assert_eq!(ct("logo.svg"), "image/svg+xml");
        assert_eq!(ct("photo.jpg"), "image/jpeg");
        assert_eq!(ct("photo.jpeg"), "image/jpeg");
    }

    #[test]
    fn extension_match_ignores_case() {
        assert_eq!(ct("style.CSS"), "text/css");
        assert_eq!(ct("APP.Js"), "application/javascript");
        assert_eq!(ct("Photo.JPEG"), "image/jpeg");
        assert_eq!(ct("data.JSON"), "application/json");
    }

    #[test]
    fn other_extensions_use_guess_database() {
        assert_eq!(ct("data.json"), "application/json");
        assert_eq!(ct("readme.txt"), "text/plain");
        assert_eq!(ct("page.html"), "text/html");
    }

    #[test]
    fn unknown_extension_falls_back_to_octet_stream() {
        assert_eq!(ct("blob.zzqxunknown"), FALLBACK_CONTENT_TYPE);
    }

    #[test]
    fn no_extension_falls_back_to_octet_stream() {
        assert_eq!(ct("LICENSE"), FALLBACK_CONTENT_TYPE);
        assert_eq!(ct(".hidden"), FALLBACK_CONTENT_TYPE);
    }

    #[test]
    fn uses_last_extension_only() {
        assert_eq!(ct("chunk.min.js"), "application/javascript");
        assert_eq!(ct("archive.js.gz"), ct("archive.gz"));
    }

    #[test]
    fn nested_path_uses_file_extension() {
        assert_eq!(ct("deep/nested.dir/chunk.js"), "application/javascript");
    }
}
