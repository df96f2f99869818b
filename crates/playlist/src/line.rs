//! Line-level classification of playlist text.

/// Marker character that introduces a directive or comment line.
const DIRECTIVE_MARKER: char = '#';

/// Extension identifying a media segment reference.
const SEGMENT_EXT: &str = ".ts";

/// Extension immediately followed by a query-string separator.
const SEGMENT_EXT_QUERY: &str = ".ts?";

/// Classification of a single playlist line.
///
/// Classification happens on the line after trimming surrounding
/// whitespace; leading indentation never changes a line's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty after trimming.
    Blank,
    /// Begins with `#`: an EXT-* directive or a comment.
    Directive,
    /// A media segment reference, absolute or relative.
    SegmentRef,
    /// A non-blank, non-directive line that does not name a segment.
    Other,
}

/// Classify a raw playlist line.
///
/// A line is a segment reference if and only if, after trimming, it is
/// non-empty, does not start with `#`, and either ends with `.ts` or
/// contains `.ts?` (a query string following the extension).
pub fn classify(raw: &str) -> LineKind {
    let line = raw.trim();
    if line.is_empty() {
        return LineKind::Blank;
    }
    if line.starts_with(DIRECTIVE_MARKER) {
        return LineKind::Directive;
    }
    if line.ends_with(SEGMENT_EXT) || line.contains(SEGMENT_EXT_QUERY) {
        return LineKind::SegmentRef;
    }
    LineKind::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_whitespace_lines() {
        assert_eq!(classify(""), LineKind::Blank);
        assert_eq!(classify("   "), LineKind::Blank);
        assert_eq!(classify("\t"), LineKind::Blank);
    }

    #[test]
    fn directives_and_comments() {
        assert_eq!(classify("#EXTM3U"), LineKind::Directive);
        assert_eq!(classify("#EXTINF:9.009,"), LineKind::Directive);
        assert_eq!(classify("# just a comment"), LineKind::Directive);
        assert_eq!(classify("  #EXT-X-ENDLIST"), LineKind::Directive);
    }

    #[test]
    fn segment_references() {
        assert_eq!(classify("seg01.ts"), LineKind::SegmentRef);
        assert_eq!(classify("  seg01.ts  "), LineKind::SegmentRef);
        assert_eq!(classify("seg01.ts?range=0-100"), LineKind::SegmentRef);
        assert_eq!(
            classify("https://cdn.example/path/seg02.ts"),
            LineKind::SegmentRef
        );
    }

    #[test]
    fn non_segment_payload_lines() {
        assert_eq!(classify("variant_720p.m3u8"), LineKind::Other);
        assert_eq!(classify("notes.txt"), LineKind::Other);
        // ".ts" must be terminal or followed by "?", not buried mid-name.
        assert_eq!(classify("seg01.tsx"), LineKind::Other);
    }
}
