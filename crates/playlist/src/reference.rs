//! Segment references and their resolution against a playlist base URL.

/// Scheme prefixes that mark a reference as already absolute.
const ABSOLUTE_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Directory portion of a playlist URL: everything up to and including the
/// final `/`, or the empty string when the URL contains no separator.
///
/// This is deliberately a string-level operation, not RFC 3986 resolution:
/// relative references are resolved by plain concatenation against it.
pub fn base_url(playlist_url: &str) -> &str {
    match playlist_url.rfind('/') {
        Some(idx) => &playlist_url[..=idx],
        None => "",
    }
}

/// One segment reference as it appeared in the playlist, either an absolute
/// URL or a path relative to the playlist's location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentRef(String);

impl SegmentRef {
    pub(crate) fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The reference exactly as written in the playlist.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the reference carries its own `http(s)://` scheme.
    pub fn is_absolute(&self) -> bool {
        ABSOLUTE_SCHEMES.iter().any(|s| self.0.starts_with(s))
    }

    /// Fetch target for this reference: absolute references pass through
    /// unchanged, relative ones are concatenated onto `base`.
    pub fn resolve(&self, base: &str) -> String {
        if self.is_absolute() {
            self.0.clone()
        } else {
            format!("{base}{}", self.0)
        }
    }

    /// Filename the segment is saved under: the final path component of the
    /// reference (not the resolved URL) with any query string stripped.
    pub fn save_filename(&self) -> &str {
        let tail = match self.0.rfind('/') {
            Some(idx) => &self.0[idx + 1..],
            None => self.0.as_str(),
        };
        match tail.find('?') {
            Some(idx) => &tail[..idx],
            None => tail,
        }
    }
}

impl std::fmt::Display for SegmentRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_of_remote_playlist() {
        assert_eq!(
            base_url("http://host/path/playlist.m3u8"),
            "http://host/path/"
        );
    }

    #[test]
    fn base_url_without_separator_is_empty() {
        assert_eq!(base_url("playlist.m3u8"), "");
    }

    #[test]
    fn relative_reference_concatenates_with_base() {
        let r = SegmentRef::new("seg01.ts?range=0-100");
        assert!(!r.is_absolute());
        assert_eq!(r.resolve("http://a/"), "http://a/seg01.ts?range=0-100");
    }

    #[test]
    fn absolute_reference_ignores_base() {
        let r = SegmentRef::new("https://cdn.example/seg02.ts");
        assert!(r.is_absolute());
        assert_eq!(r.resolve("http://a/"), "https://cdn.example/seg02.ts");
    }

    #[test]
    fn save_filename_strips_path_and_query() {
        assert_eq!(
            SegmentRef::new("seg01.ts?range=0-100").save_filename(),
            "seg01.ts"
        );
        assert_eq!(
            SegmentRef::new("https://cdn.example/a/b/seg02.ts").save_filename(),
            "seg02.ts"
        );
        assert_eq!(SegmentRef::new("seg03.ts").save_filename(), "seg03.ts");
    }

    #[test]
    fn scheme_prefix_must_match_exactly() {
        // "httpx://" is not a recognized scheme and resolves as relative.
        let r = SegmentRef::new("httpx://odd/seg.ts");
        assert!(!r.is_absolute());
    }
}
